//! Vela Navigation System
//!
//! The state machine that keeps the in-app view and the browser-visible URL
//! in sync. Each navigation request moves through:
//!
//! ```text
//! Idle/Active
//!   ↓ request
//! Resolving (path or name matched against the route table)
//!   ↓ match
//! Loading (deferred view fetch, skipped on cache hit)
//!   ↓ loaded
//! Active (view committed, history synchronized)
//! ```
//!
//! Requests are processed latest-wins: a new request supersedes one still
//! resolving or loading, and the stale result is discarded on arrival.

mod controller;
mod error;
mod history;
mod state;

pub use controller::NavigationController;
pub use error::NavigationError;
pub use history::{HistoryAdapter, HistoryEvent, MemoryHistory};
pub use state::{NavigationPhase, NavigationState};

pub type Result<T> = std::result::Result<T, NavigationError>;

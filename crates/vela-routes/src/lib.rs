//! Vela Route Table
//!
//! Static, declarative binding of URL paths to named, lazily-loaded views:
//! - A route binds a literal path pattern to a symbolic name and a deferred
//!   view producer.
//! - The table is built once at startup and never mutated afterwards;
//!   duplicate paths or names are a configuration error and fail fast.
//! - Lookup is an exact-match scan in table order (first match wins).

mod entry;
mod error;
mod table;
mod view;

pub use entry::RouteEntry;
pub use error::RouteError;
pub use table::RouteTable;
pub use view::{lazy, ViewDefinition, ViewLoadError, ViewLoader};

pub type Result<T> = std::result::Result<T, RouteError>;

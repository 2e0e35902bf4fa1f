//! Vela Core
//!
//! Application coordination layer: configuration, logging bootstrap, the
//! concrete route table, and the [`Shell`] that wires the route table,
//! history, and navigation controller together at startup.

mod config;
mod error;
mod routes;
mod shell;
mod views;

pub use config::Config;
pub use error::CoreError;
pub use routes::routes;
pub use shell::Shell;

// Re-export core components
pub use vela_navigation::{
    HistoryAdapter, HistoryEvent, MemoryHistory, NavigationController, NavigationError,
    NavigationPhase, NavigationState,
};
pub use vela_routes::{
    lazy, RouteEntry, RouteError, RouteTable, ViewDefinition, ViewLoadError, ViewLoader,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging, falling back to the configured filter when
/// RUST_LOG is unset
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.env_filter());

    fmt().with_env_filter(filter).with_target(true).init();
}

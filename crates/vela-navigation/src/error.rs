//! Navigation error types

use thiserror::Error;
use vela_routes::ViewLoadError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches: {0}")]
    RouteNotFound(String),

    #[error("Failed to load view for route '{route}': {source}")]
    ViewLoadFailure {
        route: String,
        #[source]
        source: ViewLoadError,
    },

    #[error("Navigation superseded by a newer request")]
    Superseded,
}

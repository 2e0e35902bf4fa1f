//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Route configuration error: {0}")]
    Routes(#[from] vela_routes::RouteError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] vela_navigation::NavigationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

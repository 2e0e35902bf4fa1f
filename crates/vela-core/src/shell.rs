//! Application shell
//!
//! Explicit coordinator built once at startup and passed by reference to
//! whatever needs it: owns the configuration, an in-process history, and
//! the navigation controller over the default route table. No module-wide
//! singleton; construction is the injection point.

use std::sync::Arc;

use vela_navigation::{MemoryHistory, NavigationController, NavigationState};
use vela_routes::ViewDefinition;

use crate::config::Config;
use crate::routes;
use crate::Result;

pub struct Shell {
    config: Config,
    history: MemoryHistory,
    controller: NavigationController,
}

impl Shell {
    /// Build the shell; fails fast on a bad route configuration.
    pub fn new(config: Config) -> Result<Self> {
        let table = routes::routes()?;
        let history = MemoryHistory::new();
        let controller = NavigationController::new(table, Arc::new(history.clone()));

        tracing::info!(start_path = %config.start_path, "Shell initialized");

        Ok(Self {
            config,
            history,
            controller,
        })
    }

    /// Navigate to the configured start path.
    pub async fn start(&self) -> Result<ViewDefinition> {
        Ok(self.controller.navigate_to_path(&self.config.start_path).await?)
    }

    pub async fn navigate(&self, path: &str) -> Result<ViewDefinition> {
        Ok(self.controller.navigate_to_path(path).await?)
    }

    pub async fn navigate_to_name(&self, name: &str) -> Result<ViewDefinition> {
        Ok(self.controller.navigate_to_name(name).await?)
    }

    /// Step back in history and replay the resulting path. Returns `None`
    /// at the oldest entry.
    pub async fn back(&self) -> Result<Option<ViewDefinition>> {
        match self.history.back() {
            Some(path) => Ok(Some(self.controller.on_history_event(&path).await?)),
            None => Ok(None),
        }
    }

    /// Step forward in history and replay the resulting path. Returns
    /// `None` at the newest entry.
    pub async fn forward(&self) -> Result<Option<ViewDefinition>> {
        match self.history.forward() {
            Some(path) => Ok(Some(self.controller.on_history_event(&path).await?)),
            None => Ok(None),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.controller.state()
    }

    /// Current state serialized for a UI bridge
    pub fn state_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state())?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_navigation::NavigationPhase;

    #[tokio::test]
    async fn test_start_commits_home() {
        let shell = Shell::new(Config::default()).unwrap();
        let view = shell.start().await.unwrap();

        assert_eq!(view.name, "MainView");

        let state = shell.state();
        assert_eq!(state.phase, NavigationPhase::Active);
        assert_eq!(state.current_path.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_navigate_and_back() {
        let shell = Shell::new(Config::default()).unwrap();
        shell.start().await.unwrap();

        let game = shell.navigate("/new-game").await.unwrap();
        assert_eq!(game.name, "GameView");

        let back = shell.back().await.unwrap().unwrap();
        assert_eq!(back.name, "MainView");
        assert_eq!(shell.state().current_path.as_deref(), Some("/"));

        // Oldest entry: nowhere further back
        assert!(shell.back().await.unwrap().is_none());

        let forward = shell.forward().await.unwrap().unwrap();
        assert_eq!(forward.name, "GameView");
    }

    #[tokio::test]
    async fn test_navigate_by_name() {
        let shell = Shell::new(Config::default()).unwrap();
        let view = shell.navigate_to_name("Game").await.unwrap();

        assert_eq!(view.name, "GameView");
        assert_eq!(shell.state().current_path.as_deref(), Some("/new-game"));
    }

    #[tokio::test]
    async fn test_state_json() {
        let shell = Shell::new(Config::default()).unwrap();
        shell.start().await.unwrap();

        let json = shell.state_json().unwrap();
        assert!(json.contains("\"current_path\":\"/\""));
        assert!(json.contains("\"phase\":\"active\""));
    }
}

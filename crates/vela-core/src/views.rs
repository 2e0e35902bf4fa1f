//! Built-in views
//!
//! Deferred producers for the destinations in the default route table. The
//! markup is an opaque payload handed to the rendering layer; these stand
//! in for view modules that a deployed build would fetch separately, which
//! is why they stay async.

use vela_routes::{ViewDefinition, ViewLoadError};

const MAIN_VIEW_MARKUP: &str = "\
<main class=\"home\">\
<h1>Vela</h1>\
<a href=\"/new-game\">Start a new game</a>\
</main>";

const GAME_VIEW_MARKUP: &str = "\
<main class=\"game\">\
<section id=\"board\"></section>\
<a href=\"/\">Back home</a>\
</main>";

/// Landing view bound to `/`
pub async fn main_view() -> Result<ViewDefinition, ViewLoadError> {
    Ok(ViewDefinition::new("MainView", MAIN_VIEW_MARKUP))
}

/// Game view bound to `/new-game`
pub async fn game_view() -> Result<ViewDefinition, ViewLoadError> {
    Ok(ViewDefinition::new("GameView", GAME_VIEW_MARKUP))
}

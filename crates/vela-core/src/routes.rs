//! Default route table

use vela_routes::{lazy, RouteEntry, RouteTable};

use crate::views;
use crate::Result;

/// Build the application route table: Home at `/`, Game at `/new-game`.
///
/// A duplicate path or name here is a configuration error and fails
/// startup rather than surfacing at navigation time.
pub fn routes() -> Result<RouteTable> {
    let table = RouteTable::new(vec![
        RouteEntry::new("/", "Home", lazy(views::main_view)),
        RouteEntry::new("/new-game", "Game", lazy(views::game_view)),
    ])?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = routes().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_by_path("/").unwrap().name, "Home");
        assert_eq!(table.lookup_by_name("Game").unwrap().path, "/new-game");
    }

    #[tokio::test]
    async fn test_view_loaders_resolve() {
        let table = routes().unwrap();

        let home = (table.lookup_by_name("Home").unwrap().loader)().await.unwrap();
        assert_eq!(home.name, "MainView");

        let game = (table.lookup_by_name("Game").unwrap().loader)().await.unwrap();
        assert_eq!(game.name, "GameView");
    }
}

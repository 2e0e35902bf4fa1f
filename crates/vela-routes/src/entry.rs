//! Route entry data structure

use std::fmt;

use crate::view::ViewLoader;

/// One navigable destination: a literal path pattern bound to a symbolic
/// name and a deferred view producer.
#[derive(Clone)]
pub struct RouteEntry {
    /// Literal path pattern (`/` or a flat non-root path)
    pub path: String,
    /// Unique symbolic identifier, usable for lookup independent of the path
    pub name: String,
    /// Deferred producer of the bound view
    pub loader: ViewLoader,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, loader: ViewLoader) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            loader,
        }
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

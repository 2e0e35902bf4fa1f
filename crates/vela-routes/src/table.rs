//! Route table
//!
//! Ordered, immutable collection of route entries. Construction is the only
//! mutation point and rejects duplicate paths or names up front, so a bad
//! configuration halts startup instead of surfacing mid-navigation.

use std::collections::HashSet;

use crate::entry::RouteEntry;
use crate::error::RouteError;
use crate::Result;

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build the table, validating uniqueness of paths and names.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &entries {
            if !paths.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(RouteError::DuplicateName(entry.name.clone()));
            }
        }

        tracing::debug!(routes = entries.len(), "Route table constructed");

        Ok(Self { entries })
    }

    /// Resolve a path to its route entry.
    ///
    /// Exact string match, scanned in table order; first match wins. The
    /// table is tiny and static, so a linear scan is fine.
    pub fn lookup_by_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Resolve a symbolic name to its route entry.
    pub fn lookup_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! History adapter boundary
//!
//! The controller only depends on this narrow contract: push an entry for a
//! forward navigation, read the browser-visible path, and subscribe to
//! browser-originated back/forward events. [`MemoryHistory`] is an
//! in-process implementation for tests and headless use; a real deployment
//! wires the same trait to the browser's session history.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;

/// A browser-originated back/forward notification carrying the new path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub path: String,
}

pub trait HistoryAdapter: Send + Sync {
    /// Append a new history entry for a forward navigation
    fn push_path(&self, path: &str);

    /// The browser-visible path right now
    fn current_path(&self) -> String;

    /// Subscribe to back/forward events; each subscriber gets its own
    /// receiver
    fn subscribe(&self) -> mpsc::UnboundedReceiver<HistoryEvent>;
}

struct HistoryInner {
    entries: Vec<String>,
    cursor: usize,
    subscribers: Vec<mpsc::UnboundedSender<HistoryEvent>>,
}

impl HistoryInner {
    fn notify(&mut self, path: &str) {
        self.subscribers.retain(|tx| {
            tx.send(HistoryEvent {
                path: path.to_string(),
            })
            .is_ok()
        });
    }
}

/// In-memory session history: an entry stack with a cursor.
///
/// `back`/`forward` move the cursor and broadcast the resulting path to
/// subscribers, mimicking user-driven browser navigation. Pushing while the
/// cursor sits mid-stack drops the forward tail, as browsers do.
pub struct MemoryHistory {
    inner: Arc<RwLock<HistoryInner>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HistoryInner {
                entries: vec!["/".to_string()],
                cursor: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Move one entry back, notifying subscribers. Returns the new path,
    /// or `None` at the oldest entry.
    pub fn back(&self) -> Option<String> {
        let mut inner = self.inner.write();
        if inner.cursor == 0 {
            return None;
        }

        inner.cursor -= 1;
        let path = inner.entries[inner.cursor].clone();
        inner.notify(&path);

        tracing::debug!(path = %path, "History back");

        Some(path)
    }

    /// Move one entry forward, notifying subscribers. Returns the new
    /// path, or `None` at the newest entry.
    pub fn forward(&self) -> Option<String> {
        let mut inner = self.inner.write();
        if inner.cursor + 1 >= inner.entries.len() {
            return None;
        }

        inner.cursor += 1;
        let path = inner.entries[inner.cursor].clone();
        inner.notify(&path);

        tracing::debug!(path = %path, "History forward");

        Some(path)
    }

    /// Snapshot of the entry stack, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.inner.read().entries.clone()
    }
}

impl HistoryAdapter for MemoryHistory {
    fn push_path(&self, path: &str) {
        let mut inner = self.inner.write();
        let cursor = inner.cursor;
        inner.entries.truncate(cursor + 1);
        inner.entries.push(path.to_string());
        inner.cursor = inner.entries.len() - 1;

        tracing::debug!(path = %path, entries = inner.entries.len(), "History push");
    }

    fn current_path(&self) -> String {
        let inner = self.inner.read();
        inner.entries[inner.cursor].clone()
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<HistoryEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.write().subscribers.push(tx);
        rx
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryHistory {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back_forward() {
        let history = MemoryHistory::new();
        assert_eq!(history.current_path(), "/");

        history.push_path("/new-game");
        assert_eq!(history.current_path(), "/new-game");
        assert_eq!(history.entries(), vec!["/", "/new-game"]);

        assert_eq!(history.back().as_deref(), Some("/"));
        assert_eq!(history.current_path(), "/");

        assert_eq!(history.forward().as_deref(), Some("/new-game"));
        assert_eq!(history.current_path(), "/new-game");

        // At the edges there is nowhere to go
        assert!(history.forward().is_none());
        history.back();
        assert!(history.back().is_none());
    }

    #[test]
    fn test_push_truncates_forward_tail() {
        let history = MemoryHistory::new();
        history.push_path("/a");
        history.push_path("/b");
        history.back();

        history.push_path("/c");
        assert_eq!(history.entries(), vec!["/", "/a", "/c"]);
        assert!(history.forward().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_receive_back_forward_events() {
        let history = MemoryHistory::new();
        let mut events = history.subscribe();

        history.push_path("/new-game");
        history.back();
        history.forward();

        // Pushes are controller-originated and must not echo back
        assert_eq!(events.recv().await.unwrap().path, "/");
        assert_eq!(events.recv().await.unwrap().path, "/new-game");
        assert!(events.try_recv().is_err());
    }
}

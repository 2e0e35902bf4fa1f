//! View definitions and the lazy-loading contract
//!
//! A view is an opaque, mountable unit: the navigation layer fetches it on
//! demand and hands it to the rendering layer without interpreting it. The
//! fetch itself is a zero-argument async producer stored in the route entry
//! and not invoked until the route is actually navigated to.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mountable view, treated as a black box by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDefinition {
    /// View name, matching the route name that loads it
    pub name: String,
    /// Opaque payload handed to the rendering layer
    pub markup: String,
}

impl ViewDefinition {
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }
}

/// Errors raised by a deferred view fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewLoadError {
    #[error("Failed to fetch view module: {0}")]
    Fetch(String),
}

/// A deferred, repeatable producer of a view definition
pub type ViewLoader =
    Arc<dyn Fn() -> BoxFuture<'static, Result<ViewDefinition, ViewLoadError>> + Send + Sync>;

/// Wrap a zero-argument async producer into a [`ViewLoader`].
///
/// The producer is not invoked here; it runs only when navigation actually
/// targets the route holding it.
pub fn lazy<F, Fut>(producer: F) -> ViewLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ViewDefinition, ViewLoadError>> + Send + 'static,
{
    Arc::new(move || {
        let fut: BoxFuture<'static, Result<ViewDefinition, ViewLoadError>> =
            Box::pin(producer());
        fut
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_lazy_defers_invocation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let loader = lazy(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(ViewDefinition::new("Home", "<main/>"))
            }
        });

        // Wrapping alone must not run the producer
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let view = loader().await.unwrap();
        assert_eq!(view.name, "Home");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_failure_is_visible() {
        let loader = lazy(|| async {
            Err(ViewLoadError::Fetch("module unreachable".to_string()))
        });

        let err = loader().await.unwrap_err();
        assert_eq!(err, ViewLoadError::Fetch("module unreachable".to_string()));
    }
}

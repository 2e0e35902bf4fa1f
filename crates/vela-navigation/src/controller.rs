//! Navigation Controller
//!
//! Owns the route table and the navigation state, resolves requested paths
//! or names to entries, drives the deferred view loads, and keeps the
//! history adapter in sync on every commit.
//!
//! Requests are latest-wins: each takes a ticket from a shared sequence,
//! and a result arriving after a newer ticket was issued toward a
//! different route is discarded. Concurrent requests to the same route
//! share a single in-flight load and commit the same outcome. Superseded
//! loads are not aborted at the transport level; only their results are
//! dropped. A load that never resolves parks its attempt in `Loading`
//! until a newer request takes over.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use parking_lot::RwLock;

use vela_routes::{RouteTable, ViewDefinition, ViewLoadError, ViewLoader};

use crate::error::NavigationError;
use crate::history::HistoryAdapter;
use crate::state::{NavigationPhase, NavigationState};
use crate::Result;

#[derive(Debug, Clone)]
enum NavRequest {
    Path(String),
    Name(String),
}

impl NavRequest {
    fn target(&self) -> &str {
        match self {
            NavRequest::Path(path) => path,
            NavRequest::Name(name) => name,
        }
    }
}

type PendingLoad = Shared<BoxFuture<'static, std::result::Result<ViewDefinition, ViewLoadError>>>;

pub struct NavigationController {
    /// Static route table, owned for the application lifetime
    table: Arc<RouteTable>,
    /// Boundary to the browser's session history
    history: Arc<dyn HistoryAdapter>,
    /// Working state, mutated only by this controller
    state: Arc<RwLock<NavigationState>>,
    /// Already-loaded views, keyed by route name
    views: Arc<RwLock<HashMap<String, ViewDefinition>>>,
    /// In-flight loads, keyed by route name; concurrent requests to the
    /// same route await the same future
    pending: Arc<RwLock<HashMap<String, PendingLoad>>>,
    /// Request sequence; the newest ticket owns the pipeline
    seq: Arc<AtomicU64>,
    /// Route name targeted by the newest request; `None` when that
    /// request matched nothing
    latest: Arc<RwLock<Option<String>>>,
}

impl NavigationController {
    pub fn new(table: RouteTable, history: Arc<dyn HistoryAdapter>) -> Self {
        Self {
            table: Arc::new(table),
            history,
            state: Arc::new(RwLock::new(NavigationState::new())),
            views: Arc::new(RwLock::new(HashMap::new())),
            pending: Arc::new(RwLock::new(HashMap::new())),
            seq: Arc::new(AtomicU64::new(0)),
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// Navigate to a path, pushing a new history entry on commit.
    pub async fn navigate_to_path(&self, path: &str) -> Result<ViewDefinition> {
        self.navigate(NavRequest::Path(path.to_string()), true).await
    }

    /// Navigate to a route by its symbolic name, pushing the matched
    /// entry's path on commit.
    pub async fn navigate_to_name(&self, name: &str) -> Result<ViewDefinition> {
        self.navigate(NavRequest::Name(name.to_string()), true).await
    }

    /// Replay a browser-originated back/forward event.
    ///
    /// Runs the same pipeline as a forward navigation but commits without
    /// pushing, since the browser already holds the entry.
    pub async fn on_history_event(&self, path: &str) -> Result<ViewDefinition> {
        self.navigate(NavRequest::Path(path.to_string()), false).await
    }

    /// Subscribe to the history adapter and replay every back/forward
    /// event it reports. Runs until the adapter drops its sender side.
    pub async fn listen(&self) {
        let mut events = self.history.subscribe();
        while let Some(event) = events.recv().await {
            if let Err(err) = self.on_history_event(&event.path).await {
                tracing::warn!(path = %event.path, error = %err, "History replay failed");
            }
        }
    }

    /// Snapshot of the current navigation state
    pub fn state(&self) -> NavigationState {
        self.state.read().clone()
    }

    pub fn current_path(&self) -> Option<String> {
        self.state.read().current_path.clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    async fn navigate(&self, request: NavRequest, push: bool) -> Result<ViewDefinition> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_phase(ticket, NavigationPhase::Resolving);

        let entry = match &request {
            NavRequest::Path(path) => self.table.lookup_by_path(path),
            NavRequest::Name(name) => self.table.lookup_by_name(name),
        };

        let (path, name, loader): (String, String, ViewLoader) = match entry {
            Some(entry) => (entry.path.clone(), entry.name.clone(), entry.loader.clone()),
            None => {
                if self.owns_pipeline(ticket) {
                    *self.latest.write() = None;
                }
                let target = request.target().to_string();
                tracing::warn!(target = %target, "No route matches navigation request");
                self.set_phase(ticket, NavigationPhase::Failed);
                return Err(NavigationError::RouteNotFound(target));
            }
        };

        if self.owns_pipeline(ticket) {
            *self.latest.write() = Some(name.clone());
        }

        // A cached view skips the loader entirely; unreached routes never
        // paid the load cost in the first place.
        let cached = self.views.read().get(&name).cloned();
        let view = match cached {
            Some(view) => view,
            None => {
                self.set_phase(ticket, NavigationPhase::Loading);

                // Concurrent requests to the same route share one load
                // instead of re-issuing the fetch.
                let load = {
                    let mut pending = self.pending.write();
                    match pending.get(&name).cloned() {
                        Some(load) => load,
                        None => {
                            let load = loader().shared();
                            pending.insert(name.clone(), load.clone());
                            load
                        }
                    }
                };

                let loaded = load.await;
                self.pending.write().remove(&name);

                // The await may have let newer requests through; a stale
                // result must not clobber theirs.
                if self.is_superseded(ticket, &name) {
                    tracing::debug!(path = %path, "Discarding superseded navigation result");
                    return Err(NavigationError::Superseded);
                }

                match loaded {
                    Ok(view) => {
                        self.views.write().insert(name.clone(), view.clone());
                        view
                    }
                    Err(source) => {
                        tracing::warn!(route = %name, error = %source, "View load failed");
                        self.set_phase(ticket, NavigationPhase::Failed);
                        return Err(NavigationError::ViewLoadFailure { route: name, source });
                    }
                }
            }
        };

        if self.is_superseded(ticket, &name) {
            return Err(NavigationError::Superseded);
        }

        {
            let mut state = self.state.write();
            state.current_path = Some(path.clone());
            state.resolved_view = Some(view.clone());
            state.transition_to(NavigationPhase::Active);
        }

        // Forward navigations push; history replays and pushes to the path
        // already on top would duplicate entries.
        if push && self.history.current_path() != path {
            self.history.push_path(&path);
        }

        tracing::info!(path = %path, route = %name, pushed = push, "Navigation committed");

        Ok(view)
    }

    /// Phase writes are ticket-guarded so a superseded attempt never
    /// touches the phase owned by a newer request.
    fn set_phase(&self, ticket: u64, phase: NavigationPhase) {
        if !self.owns_pipeline(ticket) {
            return;
        }
        self.state.write().transition_to(phase);
    }

    fn owns_pipeline(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }

    /// A request is superseded once a newer ticket targets a different
    /// route. A newer request to the same route shares this attempt's
    /// outcome instead of discarding it.
    fn is_superseded(&self, ticket: u64, route: &str) -> bool {
        if self.owns_pipeline(ticket) {
            return false;
        }
        self.latest.read().as_deref() != Some(route)
    }
}

impl Clone for NavigationController {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            history: Arc::clone(&self.history),
            state: Arc::clone(&self.state),
            views: Arc::clone(&self.views),
            pending: Arc::clone(&self.pending),
            seq: Arc::clone(&self.seq),
            latest: Arc::clone(&self.latest),
        }
    }
}

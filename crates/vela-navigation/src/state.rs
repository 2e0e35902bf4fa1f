//! Navigation state machine
//!
//! ```text
//! Idle / Active / Failed
//!   ↓ request
//! Resolving
//!   ↓ match
//! Loading
//!   ↓ loaded
//! Active
//! ```
//!
//! A cache hit commits straight from `Resolving`; a newer request may
//! reclaim the machine from `Loading` (supersession).

use serde::{Deserialize, Serialize};
use vela_routes::ViewDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPhase {
    /// No navigation in flight and nothing committed yet
    Idle,
    /// Request being matched against the route table
    Resolving,
    /// Matched entry's deferred view fetch in flight
    Loading,
    /// View committed, path and history in sync
    Active,
    /// Last attempt failed; prior committed view (if any) still stands
    Failed,
}

impl NavigationPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: NavigationPhase) -> bool {
        match (self, target) {
            // Any settled phase accepts a new request
            (NavigationPhase::Idle, NavigationPhase::Resolving) => true,
            (NavigationPhase::Active, NavigationPhase::Resolving) => true,
            (NavigationPhase::Failed, NavigationPhase::Resolving) => true,
            // Resolving proceeds to the load, commits directly on a cache
            // hit, or fails on an unmatched path/name
            (NavigationPhase::Resolving, NavigationPhase::Loading) => true,
            (NavigationPhase::Resolving, NavigationPhase::Active) => true,
            (NavigationPhase::Resolving, NavigationPhase::Failed) => true,
            // Loading commits or fails; a newer request may also supersede
            // an attempt parked here
            (NavigationPhase::Loading, NavigationPhase::Active) => true,
            (NavigationPhase::Loading, NavigationPhase::Failed) => true,
            (NavigationPhase::Loading, NavigationPhase::Resolving) => true,
            // Same phase is always valid (no-op)
            (a, b) if *a == b => true,
            // All other transitions are invalid
            _ => false,
        }
    }

    /// Returns true if a navigation attempt is currently in flight
    pub fn is_in_flight(&self) -> bool {
        matches!(self, NavigationPhase::Resolving | NavigationPhase::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationPhase::Idle => "idle",
            NavigationPhase::Resolving => "resolving",
            NavigationPhase::Loading => "loading",
            NavigationPhase::Active => "active",
            NavigationPhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for NavigationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NavigationPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(NavigationPhase::Idle),
            "resolving" => Ok(NavigationPhase::Resolving),
            "loading" => Ok(NavigationPhase::Loading),
            "active" => Ok(NavigationPhase::Active),
            "failed" => Ok(NavigationPhase::Failed),
            _ => Err(format!("Unknown navigation phase: {}", s)),
        }
    }
}

/// The controller's working state: the browser-visible path and the view
/// currently on screen. Mutated only by the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationState {
    /// Mirrors the browser-visible location; `None` before first commit
    pub current_path: Option<String>,
    /// The currently active view; `None` before first resolution
    pub resolved_view: Option<ViewDefinition>,
    /// Where the navigation pipeline currently stands
    pub phase: NavigationPhase,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            current_path: None,
            resolved_view: None,
            phase: NavigationPhase::Idle,
        }
    }

    /// Move to a new phase
    pub fn transition_to(&mut self, next: NavigationPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid navigation phase transition: {} -> {}",
            self.phase,
            next
        );

        tracing::debug!(from = %self.phase, to = %next, "Navigation phase transition");
        self.phase = next;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        // Idle -> Resolving (first request)
        assert!(NavigationPhase::Idle.can_transition_to(NavigationPhase::Resolving));
        // Resolving -> Loading (match, cache miss)
        assert!(NavigationPhase::Resolving.can_transition_to(NavigationPhase::Loading));
        // Resolving -> Active (cache hit)
        assert!(NavigationPhase::Resolving.can_transition_to(NavigationPhase::Active));
        // Loading -> Active (commit)
        assert!(NavigationPhase::Loading.can_transition_to(NavigationPhase::Active));
        // Loading -> Resolving (superseded by a newer request)
        assert!(NavigationPhase::Loading.can_transition_to(NavigationPhase::Resolving));
        // Active -> Resolving (next request)
        assert!(NavigationPhase::Active.can_transition_to(NavigationPhase::Resolving));
        // Failed -> Resolving (retry)
        assert!(NavigationPhase::Failed.can_transition_to(NavigationPhase::Resolving));
    }

    #[test]
    fn test_invalid_transitions() {
        // Can't start loading without resolving first
        assert!(!NavigationPhase::Idle.can_transition_to(NavigationPhase::Loading));
        // Can't commit without a request in flight
        assert!(!NavigationPhase::Idle.can_transition_to(NavigationPhase::Active));
        assert!(!NavigationPhase::Active.can_transition_to(NavigationPhase::Loading));
        // Failure only happens to an attempt in flight
        assert!(!NavigationPhase::Idle.can_transition_to(NavigationPhase::Failed));
        assert!(!NavigationPhase::Active.can_transition_to(NavigationPhase::Failed));
    }

    #[test]
    fn test_phase_round_trip() {
        for phase in [
            NavigationPhase::Idle,
            NavigationPhase::Resolving,
            NavigationPhase::Loading,
            NavigationPhase::Active,
            NavigationPhase::Failed,
        ] {
            let parsed: NavigationPhase = phase.as_str().parse().unwrap();
            assert_eq!(parsed, phase);
        }
        assert!("mounted".parse::<NavigationPhase>().is_err());
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.phase, NavigationPhase::Idle);
        assert!(state.current_path.is_none());
        assert!(state.resolved_view.is_none());
    }
}

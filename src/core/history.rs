//! Transition history tracking.
//!
//! Records every mode change and level load the controller performs,
//! in order. Entries are appended in place and never rewritten.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single controller transition.
///
/// `level` is the level that is loaded once the transition has completed.
/// A level clear inside `Playing` is recorded as `Playing -> Playing` with
/// the new level.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use lights_out::core::StateTransition;
/// use lights_out::game::Mode;
///
/// let transition = StateTransition {
///     from: Mode::Playing,
///     to: Mode::Selecting,
///     level: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.level, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Level loaded after the transition
    pub level: usize,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only history of transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use lights_out::core::{StateHistory, StateTransition};
/// use lights_out::game::Mode;
///
/// let mut history = StateHistory::new();
/// history.push(StateTransition {
///     from: Mode::Playing,
///     to: Mode::Selecting,
///     level: 1,
///     timestamp: Utc::now(),
/// });
/// history.push(StateTransition {
///     from: Mode::Selecting,
///     to: Mode::Playing,
///     level: 3,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Mode::Playing, &Mode::Selecting, &Mode::Playing]);
/// assert_eq!(history.levels_visited(), vec![1, 3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Levels in the order they were loaded, with consecutive repeats
    /// collapsed (a menu toggle does not change the level).
    pub fn levels_visited(&self) -> Vec<usize> {
        let mut levels: Vec<usize> = Vec::new();
        for transition in &self.transitions {
            if levels.last() != Some(&transition.level) {
                levels.push(transition.level);
            }
        }
        levels
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

//! Core State trait for controller modes.
//!
//! Every mode the game controller can be in implements this trait. The
//! transition history is generic over it, and the controller and front-end
//! use `name` for log lines and status text.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for controller states.
///
/// A state is a plain value describing where the controller currently is;
/// it carries no grid data of its own.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transitions compare the old and new state
/// - `Debug`: states show up in test failures
/// - `Serialize` + `Deserialize`: the history can be exported as JSON
///
/// # Example
///
/// ```rust
/// use lights_out::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Title,
///     Board,
/// }
///
/// impl State for Screen {
///     fn name(&self) -> &str {
///         match self {
///             Self::Title => "Title",
///             Self::Board => "Board",
///         }
///     }
/// }
///
/// assert_eq!(Screen::Board.name(), "Board");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and logging.
    fn name(&self) -> &str;
}

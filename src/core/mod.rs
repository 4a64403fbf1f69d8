//! Controller state types.
//!
//! - Modes are described via the `State` trait
//! - Every transition is kept in an immutable `StateHistory`
//!
//! Nothing in this module touches a grid or a level file.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;

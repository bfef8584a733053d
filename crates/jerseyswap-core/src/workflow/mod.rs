//! Swap workflow state machine.
//!
//! [`Step`] is the screen the user is on; [`Step::apply`] is the only way to
//! move between steps. [`SwapState`] holds the selections of the swap in
//! progress.

mod state;
mod step;

pub use state::{DEFAULT_JERSEY_NUMBER, SwapState, validate_jersey_number};
pub use step::{Event, Step};

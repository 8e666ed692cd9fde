//! Player input: the set of currently active inputs, refreshed by the host on
//! press and release.
//!
//! # Invariants
//! - The simulation only reads membership; it never mutates the set.
//! - Hosts map raw key codes to [`Action`]s before the simulation sees them.

pub mod action;
mod state;

pub use action::Action;
pub use state::{InputSource, InputState};

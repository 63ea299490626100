//! Application module - the Sketchpad controller state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Sketchpad struct definition
//! - `layers` - Layer management with cross-component invariants
//! - `tools` - Tool switching and preset application
//!
//! The pointer and wheel handlers also live on `Sketchpad` but sit in the
//! `input` module next to the state machine they drive.

mod layers;
mod state;
mod tools;

pub use state::Sketchpad;

#![deny(warnings)]
//! Interactive terminal keypad for the Tally calculator engine.
//!
//! The engine is a pure value transformer; this crate is the external
//! collaborator that tokenizes input into key presses, dispatches the
//! resulting actions, and renders the display fields back out. The
//! basic/scientific keypad-view flag is session state owned here, never
//! part of the engine's `CalculatorState`.

/// Token-to-key mapping for the two keypad views
pub mod keypad;
/// One interactive calculator session
pub mod session;

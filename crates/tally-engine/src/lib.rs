#![deny(warnings)]
//! Core state-transition engine for the Tally interactive calculator.
//!
//! Three pure components, leaf-first: the [`evaluate`] function reduces a
//! pending operation over two operand strings to a tagged outcome, the
//! [`reduce`] function maps (state, action) to the next state, and
//! [`format_operand`] renders an operand for display. The engine holds no
//! state of its own; the presentation layer owns the single
//! [`CalculatorState`] value and threads it through [`reduce`] on every
//! key press.

/// Pending-operation evaluation
pub mod evaluate;
/// Operand rendering for the display lines
pub mod format;
/// The event-driven state machine
pub mod reducer;
/// The calculator state value
pub mod state;

pub use evaluate::evaluate;
pub use format::format_operand;
pub use reducer::reduce;
pub use state::CalculatorState;

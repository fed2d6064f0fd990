#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
#![deny(missing_docs)]
//! Tally Types
//!
//! This crate defines the vocabulary shared between the Tally calculator
//! engine and its presentation layers: the operation symbols a keypad can
//! select, the actions a keypad dispatches, and the tagged outcome of
//! evaluating a pending operation.

mod action;
mod evaluation;
mod op;

pub use action::Action;
pub use evaluation::{ERROR_SENTINEL, Evaluation};
pub use op::{OpSymbol, UnknownOpSymbol};

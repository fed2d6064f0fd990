use crate::op::OpSymbol;
use serde::{Deserialize, Serialize};

/// A discrete user action dispatched into the state reducer.
///
/// This is the reducer's entire input surface. Every variant is total:
/// an action whose guards fail leaves the state unchanged rather than
/// erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// Type one character of the current operand: `'0'..='9'` or `'.'`.
    AddDigit {
        /// The typed character.
        digit: char,
    },
    /// Select (or replace) the pending operation.
    ChooseOperation {
        /// The selected symbol.
        operation: OpSymbol,
    },
    /// Reset the whole session to its initial state.
    Clear,
    /// Remove the last typed character of the current operand.
    DeleteDigit,
    /// Commit the pending operation into the current operand.
    Evaluate,
    /// Append the string form of a numeric constant (e.g. π) to the
    /// current operand.
    AddConstant {
        /// The constant's numeric value.
        value: f64,
    },
}

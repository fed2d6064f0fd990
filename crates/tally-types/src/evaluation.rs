use serde::{Deserialize, Serialize};

/// Literal operand stored and displayed after a division by zero.
pub const ERROR_SENTINEL: &str = "Error";

/// Tagged outcome of evaluating a pending operation.
///
/// Keeping the error cases as variants (instead of sentinel strings inside
/// the evaluator) keeps the arithmetic type-safe; the sentinel text only
/// appears once the outcome is folded back into an operand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Evaluation {
    /// The operation produced a number.
    Value(f64),
    /// Division with a zero right-hand operand.
    DivisionByZero,
    /// An operand failed to parse, or the symbol has no arithmetic meaning.
    Invalid,
}

impl Evaluation {
    /// Fold the outcome into the operand form the state machine stores:
    /// a decimal string for values, the `"Error"` sentinel for division
    /// by zero, and a blank (absent) operand for invalid evaluations.
    #[must_use]
    pub fn into_operand(self) -> Option<String> {
        match self {
            Evaluation::Value(n) => Some(n.to_string()),
            Evaluation::DivisionByZero => Some(ERROR_SENTINEL.to_string()),
            Evaluation::Invalid => None,
        }
    }
}

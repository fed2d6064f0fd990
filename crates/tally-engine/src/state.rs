use serde::{Deserialize, Serialize};
use tally_types::OpSymbol;

/// The full calculator state between key presses.
///
/// This is the only value the presentation layer persists across
/// dispatches. The reducer never mutates a state in place; every
/// transition produces a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand currently being typed; `None` means no entry.
    pub current: Option<String>,
    /// Left-hand operand once an operation is pending.
    pub previous: Option<String>,
    /// The pending operation symbol, if one has been selected.
    pub operation: Option<OpSymbol>,
    /// When set, the next digit press replaces `current` instead of
    /// appending to it (armed after an evaluation).
    pub overwrite: bool,
}

impl CalculatorState {
    /// The session-start state: a single `"0"` ready to be extended.
    /// `Clear` resets to this same shape.
    pub fn initial() -> Self {
        Self { current: Some("0".to_string()), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_holds_a_single_zero() {
        let state = CalculatorState::initial();
        assert_eq!(state.current.as_deref(), Some("0"));
        assert_eq!(state.previous, None);
        assert_eq!(state.operation, None);
        assert!(!state.overwrite);
    }
}

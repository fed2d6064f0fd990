//! The event-driven state machine.
//!
//! [`reduce`] is total: every action either produces a new state or returns
//! the input state unchanged. Guard-failing presses (evaluating with no
//! pending operation, deleting from an empty entry, and so on) are silent
//! no-ops rather than errors.

use crate::evaluate::evaluate;
use crate::state::CalculatorState;
use tally_types::{Action, OpSymbol};
use tracing::{debug, instrument};

/// Apply one action to the state, producing the next state.
#[instrument(skip(state), level = "debug")]
pub fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
    let next = match action {
        Action::AddDigit { digit } => add_digit(state, *digit),
        Action::ChooseOperation { operation } => choose_operation(state, *operation),
        Action::Clear => CalculatorState::initial(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
        Action::AddConstant { value } => add_constant(state, *value),
    };

    debug!(
        current = next.current.as_deref(),
        previous = next.previous.as_deref(),
        operation = next.operation.map(|op| op.as_str()),
        overwrite = next.overwrite,
        "Applied action"
    );

    next
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current.as_deref();
    if digit == '0' && current == Some("0") {
        return state.clone();
    }
    if digit == '.' && current.is_some_and(|c| c.contains('.')) {
        return state.clone();
    }

    let mut extended = current.unwrap_or_default().to_string();
    extended.push(digit);
    CalculatorState { current: Some(extended), ..state.clone() }
}

fn choose_operation(state: &CalculatorState, operation: OpSymbol) -> CalculatorState {
    match (state.current.as_deref(), state.previous.as_deref()) {
        // Nothing to operate on.
        (None, None) => state.clone(),

        // Let the user change their mind about the pending operator.
        (None, Some(_)) => CalculatorState { operation: Some(operation), ..state.clone() },

        // Move the entry into the pending slot. The unary symbols follow
        // the same transition; their sole operand waits in `previous`.
        (Some(current), None) => CalculatorState {
            previous: Some(current.to_string()),
            operation: Some(operation),
            current: None,
            overwrite: state.overwrite,
        },

        // Operator chaining: commit the pending calculation first.
        (Some(current), Some(previous)) => {
            let committed = state
                .operation
                .map(|pending| evaluate(previous, current, pending).into_operand())
                .unwrap_or_default();
            CalculatorState {
                previous: committed,
                operation: Some(operation),
                current: None,
                overwrite: state.overwrite,
            }
        }
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState { overwrite: false, current: None, ..state.clone() };
    }

    match state.current.as_deref() {
        None => state.clone(),
        // A single character drops to an absent entry, never to "".
        Some(current) if current.chars().count() == 1 => {
            CalculatorState { current: None, ..state.clone() }
        }
        Some(current) => {
            let mut trimmed = current.to_string();
            trimmed.pop();
            CalculatorState { current: Some(trimmed), ..state.clone() }
        }
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(operation), Some(current), Some(previous)) =
        (state.operation, state.current.as_deref(), state.previous.as_deref())
    else {
        return state.clone();
    };

    CalculatorState {
        overwrite: true,
        previous: None,
        operation: None,
        current: evaluate(previous, current, operation).into_operand(),
    }
}

fn add_constant(state: &CalculatorState, value: f64) -> CalculatorState {
    // Appends to whatever was already typed, even mid-entry; the constant
    // key never resets or validates the current operand.
    let mut extended = state.current.clone().unwrap_or_default();
    extended.push_str(&value.to_string());
    CalculatorState { current: Some(extended), ..state.clone() }
}

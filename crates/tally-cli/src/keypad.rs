//! Token-to-key mapping for the two keypad views.
//!
//! The basic view carries the digits, `+ - * /`, clear, delete, and
//! evaluate; the scientific view adds `% ^ sin cos tan log Inv` and the π
//! constant. A scientific token pressed in the basic view is reported as
//! unavailable rather than dispatched, the same way the basic keypad
//! simply lacks those buttons.

use std::str::FromStr;
use tally_types::{Action, OpSymbol};

/// What a single key token asks the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyInput {
    /// Dispatch an action into the reducer.
    Dispatch(Action),
    /// Flip between the basic and scientific views.
    ToggleView,
    /// Print the raw session state as JSON.
    ShowState,
    /// Print the key reference.
    Help,
    /// End the session.
    Quit,
    /// A real key, but only present on the scientific view.
    Unavailable(String),
    /// Not a key on either keypad.
    Unknown(String),
}

/// Map one whitespace-separated token to a key input.
pub fn map_token(token: &str, scientific: bool) -> KeyInput {
    match token {
        "ac" | "clear" => return KeyInput::Dispatch(Action::Clear),
        "del" => return KeyInput::Dispatch(Action::DeleteDigit),
        "=" | "eval" => return KeyInput::Dispatch(Action::Evaluate),
        "sc" => return KeyInput::ToggleView,
        "state" => return KeyInput::ShowState,
        "help" | "?" => return KeyInput::Help,
        "quit" | "exit" | "q" => return KeyInput::Quit,
        _ => {}
    }

    if let Some(digit) = as_digit(token) {
        return KeyInput::Dispatch(Action::AddDigit { digit });
    }

    if token == "pi" || token == "π" {
        if !scientific {
            return KeyInput::Unavailable(token.to_string());
        }
        return KeyInput::Dispatch(Action::AddConstant { value: std::f64::consts::PI });
    }

    match OpSymbol::from_str(token) {
        Ok(operation) if operation.is_scientific() && !scientific => {
            KeyInput::Unavailable(token.to_string())
        }
        Ok(operation) => KeyInput::Dispatch(Action::ChooseOperation { operation }),
        Err(_) => KeyInput::Unknown(token.to_string()),
    }
}

fn as_digit(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == '.' => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_point_dispatch_add_digit() {
        assert_eq!(
            map_token("7", false),
            KeyInput::Dispatch(Action::AddDigit { digit: '7' })
        );
        assert_eq!(
            map_token(".", false),
            KeyInput::Dispatch(Action::AddDigit { digit: '.' })
        );
    }

    #[test]
    fn basic_operators_work_in_both_views() {
        for view in [false, true] {
            assert_eq!(
                map_token("+", view),
                KeyInput::Dispatch(Action::ChooseOperation { operation: OpSymbol::Add })
            );
        }
    }

    #[test]
    fn scientific_keys_need_the_scientific_view() {
        assert_eq!(map_token("sin", false), KeyInput::Unavailable("sin".to_string()));
        assert_eq!(
            map_token("sin", true),
            KeyInput::Dispatch(Action::ChooseOperation { operation: OpSymbol::Sin })
        );
        assert_eq!(map_token("pi", false), KeyInput::Unavailable("pi".to_string()));
        assert_eq!(
            map_token("pi", true),
            KeyInput::Dispatch(Action::AddConstant { value: std::f64::consts::PI })
        );
    }

    #[test]
    fn control_keys_map_to_session_commands() {
        assert_eq!(map_token("ac", false), KeyInput::Dispatch(Action::Clear));
        assert_eq!(map_token("del", false), KeyInput::Dispatch(Action::DeleteDigit));
        assert_eq!(map_token("=", false), KeyInput::Dispatch(Action::Evaluate));
        assert_eq!(map_token("sc", false), KeyInput::ToggleView);
        assert_eq!(map_token("quit", false), KeyInput::Quit);
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(map_token("42", false), KeyInput::Unknown("42".to_string()));
        assert_eq!(map_token("sqrt", true), KeyInput::Unknown("sqrt".to_string()));
    }
}

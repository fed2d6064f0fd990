use std::str::FromStr;

use tally_types::{Action, Evaluation, OpSymbol};

#[test]
fn actions_serialize_with_kebab_case_tags() {
    let action = Action::AddDigit { digit: '7' };
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["type"], "add-digit");
    assert_eq!(json["payload"]["digit"], "7");

    let action = Action::ChooseOperation { operation: OpSymbol::Div };
    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(json["type"], "choose-operation");
    assert_eq!(json["payload"]["operation"], "/");

    let json = serde_json::to_value(Action::Clear).unwrap();
    assert_eq!(json["type"], "clear");
}

#[test]
fn actions_round_trip_through_json() {
    let actions = vec![
        Action::AddDigit { digit: '.' },
        Action::ChooseOperation { operation: OpSymbol::Sin },
        Action::Clear,
        Action::DeleteDigit,
        Action::Evaluate,
        Action::AddConstant { value: std::f64::consts::PI },
    ];

    for action in actions {
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}

#[test]
fn op_symbols_parse_their_display_text() {
    for op in [
        OpSymbol::Add,
        OpSymbol::Sub,
        OpSymbol::Mul,
        OpSymbol::Div,
        OpSymbol::Mod,
        OpSymbol::Pow,
        OpSymbol::Sin,
        OpSymbol::Cos,
        OpSymbol::Tan,
        OpSymbol::Log,
        OpSymbol::Inv,
    ] {
        assert_eq!(OpSymbol::from_str(op.as_str()), Ok(op));
    }
}

#[test]
fn unknown_op_symbol_is_a_typed_error() {
    let err = OpSymbol::from_str("sqrt").unwrap_err();
    assert_eq!(err.to_string(), "unknown operation symbol 'sqrt'");
}

#[test]
fn evaluation_folds_into_operand_form() {
    assert_eq!(
        Evaluation::Value(15.0).into_operand(),
        Some("15".to_string())
    );
    assert_eq!(
        Evaluation::DivisionByZero.into_operand(),
        Some("Error".to_string())
    );
    assert_eq!(Evaluation::Invalid.into_operand(), None);
}

//! Evaluation of a pending operation over two operand strings.
//!
//! Operands arrive as the decimal strings the state machine accumulates.
//! The outcome is tagged rather than stringly-typed: division by zero and
//! unparseable inputs are distinct variants, and only the caller folds them
//! back into operand text.

use tally_types::{Evaluation, OpSymbol};

/// Evaluate `previous <operation> current`.
///
/// The trigonometric symbols interpret the current operand in degrees and
/// `log` is base 10; both ignore the previous operand arithmetically, but
/// it still travels through the same two-operand protocol as the binary
/// symbols. Any operand that does not parse as a finite number, and any
/// symbol without defined arithmetic (`Inv`), yields
/// [`Evaluation::Invalid`].
pub fn evaluate(previous: &str, current: &str, operation: OpSymbol) -> Evaluation {
    let (prev, cur) = match (previous.parse::<f64>(), current.parse::<f64>()) {
        (Ok(p), Ok(c)) if p.is_finite() && c.is_finite() => (p, c),
        _ => return Evaluation::Invalid,
    };

    let computed = match operation {
        OpSymbol::Add => prev + cur,
        OpSymbol::Sub => prev - cur,
        OpSymbol::Mul => prev * cur,
        OpSymbol::Div => {
            // Matches -0 as well.
            if cur == 0.0 {
                return Evaluation::DivisionByZero;
            }
            prev / cur
        }
        OpSymbol::Mod => prev % cur,
        OpSymbol::Pow => prev.powf(cur),
        OpSymbol::Sin => cur.to_radians().sin(),
        OpSymbol::Cos => cur.to_radians().cos(),
        OpSymbol::Tan => cur.to_radians().tan(),
        OpSymbol::Log => cur.log10(),
        OpSymbol::Inv => return Evaluation::Invalid,
    };

    Evaluation::Value(computed)
}

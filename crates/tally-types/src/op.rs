use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An operation symbol as selected on the keypad and shown next to the
/// previous operand.
///
/// The trigonometric and logarithmic symbols travel through the same
/// two-operand protocol as the arithmetic ones; only the evaluator treats
/// them differently. `Inv` is accepted by the dispatch surface but has no
/// arithmetic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpSymbol {
    /// Addition, `+`
    #[serde(rename = "+")]
    Add,
    /// Subtraction, `-`
    #[serde(rename = "-")]
    Sub,
    /// Multiplication, `*`
    #[serde(rename = "*")]
    Mul,
    /// Division, `/`
    #[serde(rename = "/")]
    Div,
    /// Floating-point remainder, `%`
    #[serde(rename = "%")]
    Mod,
    /// Power, `^`
    #[serde(rename = "^")]
    Pow,
    /// Sine of the current operand, in degrees
    #[serde(rename = "sin")]
    Sin,
    /// Cosine of the current operand, in degrees
    #[serde(rename = "cos")]
    Cos,
    /// Tangent of the current operand, in degrees
    #[serde(rename = "tan")]
    Tan,
    /// Base-10 logarithm of the current operand
    #[serde(rename = "log")]
    Log,
    /// Reserved keypad symbol with no defined arithmetic
    #[serde(rename = "Inv")]
    Inv,
}

impl OpSymbol {
    /// The symbol text as rendered between the display lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OpSymbol::Add => "+",
            OpSymbol::Sub => "-",
            OpSymbol::Mul => "*",
            OpSymbol::Div => "/",
            OpSymbol::Mod => "%",
            OpSymbol::Pow => "^",
            OpSymbol::Sin => "sin",
            OpSymbol::Cos => "cos",
            OpSymbol::Tan => "tan",
            OpSymbol::Log => "log",
            OpSymbol::Inv => "Inv",
        }
    }

    /// Whether this symbol only appears on the scientific keypad view.
    #[must_use]
    pub const fn is_scientific(self) -> bool {
        matches!(
            self,
            OpSymbol::Mod
                | OpSymbol::Pow
                | OpSymbol::Sin
                | OpSymbol::Cos
                | OpSymbol::Tan
                | OpSymbol::Log
                | OpSymbol::Inv
        )
    }
}

impl fmt::Display for OpSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known operation symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation symbol '{symbol}'")]
pub struct UnknownOpSymbol {
    /// The text that failed to parse.
    pub symbol: String,
}

impl FromStr for OpSymbol {
    type Err = UnknownOpSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(OpSymbol::Add),
            "-" => Ok(OpSymbol::Sub),
            "*" => Ok(OpSymbol::Mul),
            "/" => Ok(OpSymbol::Div),
            "%" => Ok(OpSymbol::Mod),
            "^" => Ok(OpSymbol::Pow),
            "sin" => Ok(OpSymbol::Sin),
            "cos" => Ok(OpSymbol::Cos),
            "tan" => Ok(OpSymbol::Tan),
            "log" => Ok(OpSymbol::Log),
            "Inv" | "inv" => Ok(OpSymbol::Inv),
            other => Err(UnknownOpSymbol { symbol: other.to_string() }),
        }
    }
}

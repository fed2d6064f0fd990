//! One interactive calculator session.

use crate::keypad::{KeyInput, map_token};
use tally_engine::{CalculatorState, format_operand, reduce};
use tracing::{info, warn};

/// Whether the session should keep reading input after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Holds the single persisted engine state plus the keypad-view flag.
pub struct Session {
    state: CalculatorState,
    scientific: bool,
}

impl Session {
    pub fn new(scientific: bool) -> Self {
        Self { state: CalculatorState::initial(), scientific }
    }

    /// Read-only view of the engine state, for rendering and tests.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn scientific(&self) -> bool {
        self.scientific
    }

    /// Feed one input line into the session; every whitespace-separated
    /// token is one key press.
    pub fn handle_line(&mut self, line: &str) -> Control {
        for token in line.split_whitespace() {
            match map_token(token, self.scientific) {
                KeyInput::Dispatch(action) => {
                    self.state = reduce(&self.state, &action);
                }
                KeyInput::ToggleView => {
                    self.scientific = !self.scientific;
                    info!(scientific = self.scientific, "Switched keypad view");
                    let view = if self.scientific { "scientific" } else { "basic" };
                    println!("({view} keypad)");
                }
                KeyInput::ShowState => match serde_json::to_string_pretty(&self.state) {
                    Ok(json) => println!("{json}"),
                    Err(error) => warn!(%error, "Failed to serialize session state"),
                },
                KeyInput::Help => print_help(self.scientific),
                KeyInput::Quit => return Control::Quit,
                KeyInput::Unavailable(token) => {
                    println!("'{token}' is on the scientific keypad; press 'sc' to switch views");
                }
                KeyInput::Unknown(token) => {
                    println!("unrecognized key '{token}' (try 'help')");
                }
            }
        }
        Control::Continue
    }

    /// Render the two display lines: the pending operand with its
    /// operation symbol on top, the current entry below.
    pub fn render(&self) -> (String, String) {
        let previous = format_operand(self.state.previous.as_deref()).unwrap_or_default();
        let operation =
            self.state.operation.map(|op| op.to_string()).unwrap_or_default();
        let current = format_operand(self.state.current.as_deref()).unwrap_or_default();
        let top = format!("{previous} {operation}").trim().to_string();
        (top, current)
    }
}

fn print_help(scientific: bool) {
    println!("Keys (separate with spaces):");
    println!("  0-9 .        type the current operand");
    println!("  + - * /      select an operation");
    if scientific {
        println!("  % ^          remainder, power");
        println!("  sin cos tan  trigonometry (degrees)");
        println!("  log          base-10 logarithm");
        println!("  pi           append the π constant");
        println!("  Inv          reserved");
    }
    println!("  =            evaluate");
    println!("  del          delete the last character");
    println!("  ac           clear everything");
    println!("  sc           toggle basic/scientific keypad");
    println!("  state        dump the raw state as JSON");
    println!("  quit         leave");
}

//! A calculator paired with the key map that drives it.

use crate::calculator::{CalcError, Calculator, InputEvent};
use crate::input::KeyMap;

/// Feeds typed characters into a calculator.
#[derive(Clone, Debug, Default)]
pub struct Session {
    calculator: Calculator,
    keys: KeyMap,
}

impl Session {
    pub fn new(keys: KeyMap) -> Self {
        Self {
            calculator: Calculator::new(),
            keys,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Feed every character of `input` as a key press.
    ///
    /// `on_event` sees each decoded event with the display it produced.
    /// Returns the display after the last key.
    pub fn feed<F>(&mut self, input: &str, mut on_event: F) -> Result<&str, CalcError>
    where
        F: FnMut(InputEvent, &str),
    {
        for event in self.keys.events(input) {
            let display = self.calculator.handle(event)?;
            on_event(event, display);
        }
        Ok(self.calculator.display())
    }
}

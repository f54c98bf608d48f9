//! Key bindings.
//!
//! The default bindings mirror a desktop calculator keyboard: digits and
//! `.` enter numbers, `+ - * x /` are operators, `=` or Enter evaluates,
//! `c` clears everything and `e` clears the entry.

use std::collections::HashMap;

use crate::calculator::{InputEvent, Operator, UnknownEvent};

/// Error for an invalid binding in the configuration.
#[derive(Debug, thiserror::Error)]
pub enum KeyMapError {
    #[error("key binding {0:?} must be a single character")]
    NotSingleChar(String),
    #[error("key binding {key:?}: {source}")]
    UnknownEvent {
        key: String,
        #[source]
        source: UnknownEvent,
    },
}

/// Resolves characters to input events.
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: HashMap<char, InputEvent>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        for d in 0..=9u8 {
            bindings.insert(char::from(b'0' + d), InputEvent::Digit(d));
        }
        bindings.insert('.', InputEvent::DecimalPoint);

        for op in Operator::ALL {
            bindings.insert(op.symbol(), InputEvent::Operator(op));
        }
        bindings.insert('x', InputEvent::Operator(Operator::Multiply));
        bindings.insert('X', InputEvent::Operator(Operator::Multiply));

        bindings.insert('=', InputEvent::Equals);
        bindings.insert('\n', InputEvent::Equals);
        bindings.insert('\r', InputEvent::Equals);

        bindings.insert('c', InputEvent::FullClear);
        bindings.insert('C', InputEvent::FullClear);
        bindings.insert('e', InputEvent::ClearDisplay);
        bindings.insert('E', InputEvent::ClearDisplay);

        Self { bindings }
    }
}

impl KeyMap {
    /// Build the default map with `overrides` applied on top.
    ///
    /// Override keys must be single characters and values must name an
    /// event (see [`InputEvent`]'s `FromStr`).
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, KeyMapError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::default();
        for (key, event) in overrides {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(KeyMapError::NotSingleChar(key.to_string())),
            };
            let event = event
                .parse::<InputEvent>()
                .map_err(|source| KeyMapError::UnknownEvent {
                    key: key.to_string(),
                    source,
                })?;
            map.bind(c, event);
        }
        Ok(map)
    }

    /// Bind `key` to `event`, replacing any existing binding.
    pub fn bind(&mut self, key: char, event: InputEvent) {
        if let Some(previous) = self.bindings.insert(key, event) {
            tracing::debug!(key = ?key, %previous, %event, "key rebound");
        }
    }

    /// Look up the event for `key`.
    ///
    /// Whitespace other than a line break is ignored silently; any other
    /// unmapped key is logged and ignored.
    pub fn resolve(&self, key: char) -> Option<InputEvent> {
        if let Some(event) = self.bindings.get(&key) {
            return Some(*event);
        }
        if !key.is_whitespace() {
            tracing::warn!(key = ?key, "Unimplemented key pressed");
        }
        None
    }

    /// Resolve every mapped character in `keys`, in order.
    pub fn events<'a>(&'a self, keys: &'a str) -> impl Iterator<Item = InputEvent> + 'a {
        keys.chars().filter_map(|c| self.resolve(c))
    }
}

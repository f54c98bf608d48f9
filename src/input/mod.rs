//! Mapping from keyboard characters to calculator events.

mod keymap;

pub use keymap::{KeyMap, KeyMapError};

//! Rendering of game state for the terminal

pub mod console;
pub mod formatter;
pub mod json;

#[cfg(test)]
pub(crate) mod test_support;

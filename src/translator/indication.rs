//! Braille indication
//!
//! Braille indicators are cells which are inserted into the braille text to
//! indicate such things as capitalization or the start of a number.
//!
//! Numbers are handled with the help of a small state machine that lives for
//! the duration of one translation. When given the next pending character
//! it tracks state changes and notifies the caller whether an indication is
//! required by optionally returning an [`Indication`].
//!
//! * [`numeric::Indicator`]: knows whether the translation is inside a run of digits
//! * [`uppercase`]: case helpers deciding whether a letter needs a capital sign

pub mod numeric;
pub mod uppercase;

/// Possible indication events that the indicator state machines support
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Indication {
    NumericStart,
}

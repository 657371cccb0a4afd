//! Numeric Braille indication
//!
//! [`Indicator`] is a simple state machine to keep track of the state of a
//! translation. As soon as a character is encountered that is in the set of
//! numeric characters the state is changed to [`State::Numeric`] and an
//! [`Indication::NumericStart`] is emitted. Any other character changes the
//! state back to [`State::Default`], so the next digit starts a new run.

use crate::translator::indication::Indication;

use std::collections::HashSet;

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, PartialEq)]
enum State {
    Default,
    Numeric,
}

#[derive(Debug, Clone)]
pub struct Indicator<'t> {
    state: State,
    /// The set of characters that will trigger a state change to the
    /// [State::Numeric] mode
    numeric_chars: &'t HashSet<char>,
}

impl<'t> Indicator<'t> {
    pub fn new(numeric_chars: &'t HashSet<char>) -> Self {
        Indicator {
            state: State::Default,
            numeric_chars,
        }
    }

    pub fn is_numeric(&self, c: char) -> bool {
        self.numeric_chars.contains(&c)
    }

    /// The transition method of the numeric indication state machine.
    ///
    /// Returns [`Indication::NumericStart`] when `c` opens a new run of
    /// digits and `None` otherwise. A character outside the numeric set
    /// ends the current run.
    pub fn next(&mut self, c: char) -> Option<Indication> {
        match (&self.state, self.is_numeric(c)) {
            (State::Default, true) => {
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            (State::Numeric, false) => {
                self.state = State::Default;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator() {
        let digits = HashSet::from(['1', '2', '3']);
        let mut indicator = Indicator::new(&digits);
        assert_eq!(indicator.next('a'), None);
        assert_eq!(indicator.next('1'), Some(Indication::NumericStart));
        assert_eq!(indicator.next('2'), None);
        assert_eq!(indicator.next('3'), None);
        assert_eq!(indicator.next(' '), None);
        assert_eq!(indicator.next('2'), Some(Indication::NumericStart));
    }

    #[test]
    fn any_character_breaks_a_run() {
        let digits = HashSet::from(['1', '2']);
        let mut indicator = Indicator::new(&digits);
        assert_eq!(indicator.next('1'), Some(Indication::NumericStart));
        assert_eq!(indicator.next(','), None);
        assert_eq!(indicator.next('2'), Some(Indication::NumericStart));
    }

    #[test]
    fn digits_outside_the_set() {
        let digits = HashSet::from(['1']);
        let mut indicator = Indicator::new(&digits);
        assert_eq!(indicator.next('7'), None);
        assert_eq!(indicator.next('1'), Some(Indication::NumericStart));
        assert_eq!(indicator.next('7'), None);
        assert_eq!(indicator.next('1'), Some(Indication::NumericStart));
    }
}

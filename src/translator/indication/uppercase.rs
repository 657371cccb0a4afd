//! Uppercase Braille indication
//!
//! Capitals are indicated letter by letter: every uppercase letter is
//! preceded by the capital sign, there is no capitals mode spanning a word,
//! so no state machine is needed. A character counts as uppercase when it
//! has case and is in its upper form.

/// Single character uppercase mapping. Characters whose uppercase form is
/// more than one character (e.g. `ß`) are left as they are.
pub fn to_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

pub fn to_lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub fn is_upper(c: char) -> bool {
    to_upper(c) == c && to_lower(c) != c
}

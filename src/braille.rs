//! Braille cells in dot notation
//!
//! A cell is written as the digits of its raised dots, e.g. `1345` for ⠝.
//! Cells render to the Unicode Braille Patterns block (U+2800).

use enumset::{EnumSet, EnumSetType};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille {character:?}")]
    InvalidBraille { character: Option<char> },
}

#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
    Dot7,
    Dot8,
}

/// Start of the Unicode Braille Patterns block, the empty cell
const BRAILLE_PATTERNS: u32 = 0x2800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrailleChar(EnumSet<BrailleDot>);

impl From<EnumSet<BrailleDot>> for BrailleChar {
    fn from(value: EnumSet<BrailleDot>) -> Self {
        BrailleChar(value)
    }
}

impl BrailleChar {
    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(|dot| dot_to_hex(&dot))
            .fold(BRAILLE_PATTERNS, |acc, x| acc | x);
        // eight dots never leave the U+2800..=U+28FF block
        char::from_u32(unicode).unwrap_or('\u{2800}')
    }

    /// The cell in dot notation, e.g. `"1345"`
    pub fn notation(&self) -> String {
        self.0.iter().map(dot_to_char).collect()
    }
}

impl std::fmt::Display for BrailleChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

impl FromIterator<BrailleDot> for BrailleChar {
    fn from_iter<T: IntoIterator<Item = BrailleDot>>(iter: T) -> Self {
        BrailleChar(EnumSet::from_iter(iter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleChars(Vec<BrailleChar>);

impl std::ops::Deref for BrailleChars {
    type Target = Vec<BrailleChar>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<BrailleChar>> for BrailleChars {
    fn from(value: Vec<BrailleChar>) -> Self {
        BrailleChars(value)
    }
}

impl std::fmt::Display for BrailleChars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|b| b.to_unicode()).collect::<String>()
        )
    }
}

impl FromIterator<BrailleChar> for BrailleChars {
    fn from_iter<T: IntoIterator<Item = BrailleChar>>(iter: T) -> Self {
        BrailleChars(iter.into_iter().collect())
    }
}

fn char_to_dot(char: char) -> Result<BrailleDot, ParseError> {
    match char {
        '1' => Ok(BrailleDot::Dot1),
        '2' => Ok(BrailleDot::Dot2),
        '3' => Ok(BrailleDot::Dot3),
        '4' => Ok(BrailleDot::Dot4),
        '5' => Ok(BrailleDot::Dot5),
        '6' => Ok(BrailleDot::Dot6),
        '7' => Ok(BrailleDot::Dot7),
        '8' => Ok(BrailleDot::Dot8),
        invalid => Err(ParseError::InvalidBraille {
            character: Some(invalid),
        }),
    }
}

fn dot_to_char(dot: BrailleDot) -> char {
    match dot {
        BrailleDot::Dot1 => '1',
        BrailleDot::Dot2 => '2',
        BrailleDot::Dot3 => '3',
        BrailleDot::Dot4 => '4',
        BrailleDot::Dot5 => '5',
        BrailleDot::Dot6 => '6',
        BrailleDot::Dot7 => '7',
        BrailleDot::Dot8 => '8',
    }
}

pub fn chars_to_dots(chars: &str) -> Result<BrailleChar, ParseError> {
    if chars.is_empty() {
        Err(ParseError::InvalidBraille { character: None })
    } else {
        chars.chars().map(char_to_dot).collect()
    }
}

/// Parse a sequence of cells separated by `-`, e.g. `"46-13"`
pub fn braille_chars(chars: &str) -> Result<BrailleChars, ParseError> {
    chars.split('-').map(chars_to_dots).collect()
}

fn dot_to_hex(dot: &BrailleDot) -> u32 {
    match dot {
        BrailleDot::Dot1 => 0x0001,
        BrailleDot::Dot2 => 0x0002,
        BrailleDot::Dot3 => 0x0004,
        BrailleDot::Dot4 => 0x0008,
        BrailleDot::Dot5 => 0x0010,
        BrailleDot::Dot6 => 0x0020,
        BrailleDot::Dot7 => 0x0040,
        BrailleDot::Dot8 => 0x0080,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumset::enum_set;

    #[test]
    fn test_chars_to_dots() {
        assert_eq!(
            chars_to_dots("123"),
            Ok(BrailleChar(enum_set!(
                BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3
            )))
        );
        assert_eq!(
            chars_to_dots("31"),
            Ok(BrailleChar(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot3)))
        );
        assert_eq!(
            chars_to_dots("9"),
            Err(ParseError::InvalidBraille {
                character: Some('9')
            })
        );
        assert_eq!(
            chars_to_dots(""),
            Err(ParseError::InvalidBraille { character: None })
        );
    }

    #[test]
    fn test_braille_chars() {
        assert_eq!(
            braille_chars("46-13"),
            Ok(BrailleChars(vec![
                BrailleChar(enum_set!(BrailleDot::Dot4 | BrailleDot::Dot6)),
                BrailleChar(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot3))
            ]))
        );
        assert_eq!(
            braille_chars("1-"),
            Err(ParseError::InvalidBraille { character: None })
        );
        assert_eq!(
            braille_chars("-"),
            Err(ParseError::InvalidBraille { character: None })
        );
    }

    #[test]
    fn test_dots_to_unicode() {
        assert_eq!(chars_to_dots("1").unwrap().to_unicode(), '⠁');
        assert_eq!(chars_to_dots("3456").unwrap().to_unicode(), '⠼');
        assert_eq!(chars_to_dots("46").unwrap().to_unicode(), '⠨');
        assert_eq!(chars_to_dots("18").unwrap().to_unicode(), '\u{2881}');
        assert_eq!(braille_chars("46-13").unwrap().to_string(), "⠨⠅");
    }

    #[test]
    fn notation() {
        assert_eq!(chars_to_dots("5431").unwrap().notation(), "1345");
    }
}

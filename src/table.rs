//! Braille mapping tables
//!
//! A [`Table`] maps uppercase letters, digits and punctuation to single
//! Braille cells and carries the capital and number signs. Tables are
//! defined in dot notation and compiled once; the canonical Ukrainian table
//! is available as [`UKRAINIAN`].

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use log::warn;

use crate::{
    braille::{self, BrailleChar},
    translator::indication::uppercase,
};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Invalid dots {dots:?} for {character:?}")]
    InvalidDots {
        character: char,
        dots: String,
        #[source]
        source: braille::ParseError,
    },
    #[error("{character:?} must map to exactly one cell, got {dots:?}")]
    MultipleCells { character: char, dots: String },
}

/// The kind of a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Letter,
    Digit,
    Punctuation,
    Sign,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntryKind::Letter => "letter",
            EntryKind::Digit => "digit",
            EntryKind::Punctuation => "punctuation",
            EntryKind::Sign => "sign",
        };
        write!(f, "{name}")
    }
}

/// One row of a compiled table, in definition order
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    pub character: char,
    pub cell: BrailleChar,
}

#[derive(Debug, Clone)]
pub struct Table {
    letters: HashMap<char, char>,
    digits: HashMap<char, char>,
    /// ASCII digits of `digits`, the characters that open a number
    numeric: HashSet<char>,
    punctuation: HashMap<char, char>,
    capital_sign: char,
    number_sign: char,
    entries: Vec<Entry>,
}

impl Table {
    /// Braille cell for an uppercase letter
    pub fn letter(&self, c: char) -> Option<char> {
        self.letters.get(&c).copied()
    }

    pub fn digit(&self, c: char) -> Option<char> {
        self.digits.get(&c).copied()
    }

    pub fn punctuation(&self, c: char) -> Option<char> {
        self.punctuation.get(&c).copied()
    }

    pub fn capital_sign(&self) -> char {
        self.capital_sign
    }

    pub fn number_sign(&self) -> char {
        self.number_sign
    }

    /// All digits that trigger numeric mode
    pub fn numeric_characters(&self) -> &HashSet<char> {
        &self.numeric
    }

    /// The compiled entries in definition order, signs last
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

fn cell(character: char, dots: &str) -> Result<BrailleChar, TableError> {
    let cells = braille::braille_chars(dots).map_err(|source| TableError::InvalidDots {
        character,
        dots: dots.to_string(),
        source,
    })?;
    match cells.as_slice() {
        [single] => Ok(*single),
        _ => Err(TableError::MultipleCells {
            character,
            dots: dots.to_string(),
        }),
    }
}

/// A builder for [`Table`]
///
/// Entries are given in dot notation. If a character is defined twice the
/// first definition wins.
#[derive(Debug)]
pub struct TableBuilder {
    letters: Vec<(char, String)>,
    digits: Vec<(char, String)>,
    punctuation: Vec<(char, String)>,
    capital_sign: String,
    number_sign: String,
}

impl TableBuilder {
    pub fn new(capital_sign: &str, number_sign: &str) -> Self {
        TableBuilder {
            letters: Vec::new(),
            digits: Vec::new(),
            punctuation: Vec::new(),
            capital_sign: capital_sign.to_string(),
            number_sign: number_sign.to_string(),
        }
    }

    /// Add a letter, keyed by its uppercase form. Lowercase keys are
    /// uppercased.
    pub fn letter(mut self, c: char, dots: &str) -> Self {
        self.letters.push((uppercase::to_upper(c), dots.to_string()));
        self
    }

    pub fn letters(self, defs: &[(char, &str)]) -> Self {
        defs.iter().fold(self, |b, (c, dots)| b.letter(*c, dots))
    }

    pub fn digit(mut self, c: char, dots: &str) -> Self {
        self.digits.push((c, dots.to_string()));
        self
    }

    pub fn digits(self, defs: &[(char, &str)]) -> Self {
        defs.iter().fold(self, |b, (c, dots)| b.digit(*c, dots))
    }

    pub fn punctuation(mut self, c: char, dots: &str) -> Self {
        self.punctuation.push((c, dots.to_string()));
        self
    }

    pub fn punctuations(self, defs: &[(char, &str)]) -> Self {
        defs.iter().fold(self, |b, (c, dots)| b.punctuation(*c, dots))
    }

    fn compile_group(
        defs: &[(char, String)],
        kind: EntryKind,
        entries: &mut Vec<Entry>,
    ) -> Result<HashMap<char, char>, TableError> {
        let mut mapping = HashMap::new();
        for (character, dots) in defs {
            let cell = cell(*character, dots)?;
            if mapping.contains_key(character) {
                warn!("{kind} {character:?} is defined more than once, keeping the first definition");
                continue;
            }
            mapping.insert(*character, cell.to_unicode());
            entries.push(Entry {
                kind,
                character: *character,
                cell,
            });
        }
        Ok(mapping)
    }

    pub fn build(self) -> Result<Table, TableError> {
        let mut entries = Vec::new();
        let letters = Self::compile_group(&self.letters, EntryKind::Letter, &mut entries)?;
        let digits = Self::compile_group(&self.digits, EntryKind::Digit, &mut entries)?;
        let numeric = digits.keys().copied().filter(char::is_ascii_digit).collect();
        let punctuation =
            Self::compile_group(&self.punctuation, EntryKind::Punctuation, &mut entries)?;
        // signs are shown with a placeholder character in listings
        let capital = cell('↑', &self.capital_sign)?;
        let number = cell('#', &self.number_sign)?;
        entries.push(Entry {
            kind: EntryKind::Sign,
            character: '↑',
            cell: capital,
        });
        entries.push(Entry {
            kind: EntryKind::Sign,
            character: '#',
            cell: number,
        });
        Ok(Table {
            letters,
            digits,
            numeric,
            punctuation,
            capital_sign: capital.to_unicode(),
            number_sign: number.to_unicode(),
            entries,
        })
    }
}

const UKRAINIAN_LETTERS: &[(char, &str)] = &[
    ('А', "1"),
    ('Б', "12"),
    ('В', "2456"),
    ('Г', "1245"),
    ('Ґ', "12456"),
    ('Д', "145"),
    ('Е', "15"),
    ('Є', "345"),
    ('Ж', "245"),
    ('З', "1356"),
    ('И', "24"),
    ('І', "13456"),
    ('Ї', "1456"),
    ('Й', "12346"),
    ('К', "13"),
    ('Л', "123"),
    ('М', "134"),
    ('Н', "1345"),
    ('О', "135"),
    ('П', "1234"),
    ('Р', "1235"),
    ('С', "234"),
    ('Т', "2345"),
    ('У', "136"),
    ('Ф', "124"),
    ('Х', "125"),
    ('Ц', "14"),
    ('Ч', "12345"),
    ('Ш', "156"),
    ('Щ', "1346"),
    ('Ь', "23456"),
    ('Ю', "1256"),
    ('Я', "1246"),
];

// digits reuse the shapes of the letters a-j
const UKRAINIAN_DIGITS: &[(char, &str)] = &[
    ('1', "1"),
    ('2', "12"),
    ('3', "14"),
    ('4', "145"),
    ('5', "15"),
    ('6', "124"),
    ('7', "1245"),
    ('8', "125"),
    ('9', "24"),
    ('0', "245"),
];

const UKRAINIAN_PUNCTUATION: &[(char, &str)] = &[
    (',', "2"),
    ('.', "256"),
    ('?', "26"),
    ('!', "235"),
    (';', "23"),
    (':', "25"),
    ('-', "36"),
    ('’', "3"),
    ('\'', "3"),
];

const UKRAINIAN_CAPITAL_SIGN: &str = "46";
const UKRAINIAN_NUMBER_SIGN: &str = "3456";

pub fn ukrainian() -> Result<Table, TableError> {
    TableBuilder::new(UKRAINIAN_CAPITAL_SIGN, UKRAINIAN_NUMBER_SIGN)
        .letters(UKRAINIAN_LETTERS)
        .digits(UKRAINIAN_DIGITS)
        .punctuations(UKRAINIAN_PUNCTUATION)
        .build()
}

/// The canonical Ukrainian table, compiled on first use
pub static UKRAINIAN: LazyLock<Table> =
    LazyLock::new(|| ukrainian().expect("built-in Ukrainian table is valid"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ukrainian_table_compiles() {
        let table = ukrainian().unwrap();
        assert_eq!(table.letter('А'), Some('⠁'));
        assert_eq!(table.letter('В'), Some('⠺'));
        assert_eq!(table.letter('Ґ'), Some('⠻'));
        assert_eq!(table.letter('І'), Some('⠽'));
        assert_eq!(table.letter('Ї'), Some('⠹'));
        assert_eq!(table.letter('Щ'), Some('⠭'));
        assert_eq!(table.letter('Я'), Some('⠫'));
        assert_eq!(table.letter('а'), None);
        assert_eq!(table.digit('0'), Some('⠚'));
        assert_eq!(table.digit('9'), Some('⠊'));
        assert_eq!(table.punctuation('.'), Some('⠲'));
        assert_eq!(table.punctuation('’'), Some('⠄'));
        assert_eq!(table.capital_sign(), '⠨');
        assert_eq!(table.number_sign(), '⠼');
        assert_eq!(table.entries().len(), 33 + 10 + 9 + 2);
    }

    #[test]
    fn digits_share_letter_shapes() {
        let table = &*UKRAINIAN;
        assert_eq!(table.digit('1'), table.letter('А'));
        assert_eq!(table.digit('2'), table.letter('Б'));
        assert_eq!(table.digit('4'), table.letter('Д'));
    }

    #[test]
    fn invalid_dots() {
        let result = TableBuilder::new("46", "3456").letter('А', "19").build();
        assert!(matches!(
            result,
            Err(TableError::InvalidDots { character: 'А', .. })
        ));
        let result = TableBuilder::new("", "3456").build();
        assert!(matches!(result, Err(TableError::InvalidDots { .. })));
    }

    #[test]
    fn multiple_cells() {
        let result = TableBuilder::new("46", "3456").letter('Щ', "156-14").build();
        assert_eq!(
            result.unwrap_err(),
            TableError::MultipleCells {
                character: 'Щ',
                dots: "156-14".to_string()
            }
        );
    }

    #[test]
    fn lowercase_letter_keys() {
        let table = TableBuilder::new("46", "3456")
            .letters(&[('к', "13"), ('Т', "2345")])
            .build()
            .unwrap();
        assert_eq!(table.letter('К'), Some('⠅'));
        assert_eq!(table.letter('к'), None);
        assert_eq!(table.entries()[0].character, 'К');
    }

    #[test]
    fn numeric_characters() {
        let table = TableBuilder::new("46", "3456")
            .digits(&[('1', "1"), ('٢', "12")])
            .build()
            .unwrap();
        assert_eq!(table.numeric_characters(), &HashSet::from(['1']));
        assert_eq!(UKRAINIAN.numeric_characters().len(), 10);
    }

    #[test]
    fn first_definition_wins() {
        let table = TableBuilder::new("46", "3456")
            .letter('А', "1")
            .letter('А', "2")
            .build()
            .unwrap();
        assert_eq!(table.letter('А'), Some('⠁'));
        assert_eq!(table.entries().len(), 3);
    }
}

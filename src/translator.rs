//! Print to Braille transliteration
//!
//! The input is scanned left to right, one character at a time. For every
//! character the first matching rule wins:
//!
//! 1. a digit from the table, preceded by the number sign if it opens a run
//! 2. any other character ends a run of digits
//! 3. punctuation from the table
//! 4. a letter whose uppercase form is in the table, preceded by the capital
//!    sign if the letter is uppercase
//! 5. everything else passes through unchanged
//!
//! Transliteration is not reversible by applying it again: Braille cells are
//! not in any table and simply pass through.

use log::trace;

use crate::table::{Table, UKRAINIAN};

use indication::{Indication, numeric, uppercase};

pub mod indication;

/// Which rule produced a [`Translation`]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TranslationKind {
    NumberSign,
    Digit,
    Punctuation,
    CapitalSign,
    Letter,
    Passthrough,
}

impl std::fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationKind::NumberSign => write!(f, "number sign"),
            TranslationKind::Digit => write!(f, "digit"),
            TranslationKind::Punctuation => write!(f, "punctuation"),
            TranslationKind::CapitalSign => write!(f, "capital sign"),
            TranslationKind::Letter => write!(f, "letter"),
            TranslationKind::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Maps an `input` character to its `output`. Indications have an empty
/// input.
#[derive(Debug, PartialEq, Clone)]
pub struct Translation {
    input: String,
    output: String,
    kind: TranslationKind,
}

impl Translation {
    fn cell(input: char, output: char, kind: TranslationKind) -> Self {
        Translation {
            input: input.to_string(),
            output: output.to_string(),
            kind,
        }
    }

    fn indication(sign: char, kind: TranslationKind) -> Self {
        Translation {
            input: String::new(),
            output: sign.to_string(),
            kind,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn kind(&self) -> TranslationKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t Table,
}

impl Default for Transliterator<'static> {
    fn default() -> Self {
        Transliterator { table: &UKRAINIAN }
    }
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t Table) -> Self {
        Transliterator { table }
    }

    /// Transliterate `input` and return every decision that was taken
    pub fn trace(&self, input: &str) -> Vec<Translation> {
        let mut numeric = numeric::Indicator::new(self.table.numeric_characters());
        let mut translations = Vec::with_capacity(input.len());

        for c in input.chars() {
            let indication = numeric.next(c);
            if numeric.is_numeric(c) {
                if indication == Some(Indication::NumericStart) {
                    translations.push(Translation::indication(
                        self.table.number_sign(),
                        TranslationKind::NumberSign,
                    ));
                }
                if let Some(cell) = self.table.digit(c) {
                    translations.push(Translation::cell(c, cell, TranslationKind::Digit));
                }
                continue;
            }

            if let Some(cell) = self.table.punctuation(c) {
                translations.push(Translation::cell(c, cell, TranslationKind::Punctuation));
                continue;
            }

            if let Some(cell) = self.table.letter(uppercase::to_upper(c)) {
                if uppercase::is_upper(c) {
                    translations.push(Translation::indication(
                        self.table.capital_sign(),
                        TranslationKind::CapitalSign,
                    ));
                }
                translations.push(Translation::cell(c, cell, TranslationKind::Letter));
                continue;
            }

            translations.push(Translation::cell(c, c, TranslationKind::Passthrough));
        }
        trace!("transliterated {input:?} in {} steps", translations.len());
        translations
    }

    pub fn transliterate(&self, input: &str) -> String {
        self.trace(input).iter().map(|t| t.output()).collect()
    }
}

/// Transliterate `input` using the canonical Ukrainian table
pub fn transliterate(input: &str) -> String {
    Transliterator::default().transliterate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::table::TableBuilder;

    const CAPITAL: char = '⠨';
    const NUMBER: char = '⠼';

    #[test]
    fn capital_letters() {
        let table = &*UKRAINIAN;
        for entry in table
            .entries()
            .iter()
            .filter(|e| e.kind == crate::table::EntryKind::Letter)
        {
            let upper = entry.character;
            let lower = uppercase::to_lower(upper);
            let cell = entry.cell.to_unicode();
            assert_eq!(transliterate(&upper.to_string()), format!("{CAPITAL}{cell}"));
            assert_eq!(transliterate(&lower.to_string()), cell.to_string());
        }
    }

    #[test]
    fn words() {
        assert_eq!(transliterate("Кіт"), "⠨⠅⠽⠞");
        assert_eq!(transliterate("мама"), "⠍⠁⠍⠁");
        assert_eq!(transliterate("Київ"), "⠨⠅⠊⠹⠺");
        assert_eq!(transliterate("ҐАНОК"), "⠨⠻⠨⠁⠨⠝⠨⠕⠨⠅");
    }

    #[test]
    fn numbers() {
        assert_eq!(transliterate("42"), "⠼⠙⠃");
        assert_eq!(transliterate("1234567890"), "⠼⠁⠃⠉⠙⠑⠋⠛⠓⠊⠚");
        assert_eq!(transliterate("7"), "⠼⠛");
    }

    #[test]
    fn broken_digit_runs() {
        let output = transliterate("4а2");
        assert_eq!(output, "⠼⠙⠁⠼⠃");
        assert_eq!(output.chars().filter(|c| *c == NUMBER).count(), 2);
        assert_eq!(transliterate("1 2"), "⠼⠁ ⠼⠃");
        assert_eq!(transliterate("3,5"), "⠼⠉⠂⠼⠑");
    }

    #[test]
    fn punctuation() {
        assert_eq!(transliterate("так, ні!"), "⠞⠁⠅⠂ ⠝⠽⠖");
        assert_eq!(transliterate("м’ята"), "⠍⠄⠫⠞⠁");
        assert_eq!(transliterate("?.;:-'"), "⠢⠲⠆⠒⠤⠄");
    }

    #[test]
    fn passthrough() {
        assert_eq!(transliterate(""), "");
        assert_eq!(transliterate(" "), " ");
        assert_eq!(transliterate("\t\n"), "\t\n");
        assert_eq!(transliterate("abc"), "abc");
        assert_eq!(transliterate("🐂"), "🐂");
        assert_eq!(transliterate("ы"), "ы");
        assert_eq!(transliterate("(ok)"), "(ok)");
    }

    #[test]
    fn double_application_freezes() {
        let once = transliterate("Кіт 5");
        assert_eq!(transliterate(&once), once);
    }

    #[test]
    fn scenario_with_custom_table() {
        let table = TableBuilder::new("46", "3456")
            .letters(&[('К', "13"), ('І', "24"), ('Т', "2345")])
            .digits(&[('2', "12"), ('0', "356"), ('4', "145")])
            .punctuations(&[(',', "2"), ('!', "235")])
            .build()
            .unwrap();
        let transliterator = Transliterator::new(&table);
        assert_eq!(
            transliterator.transliterate("Кіт, 2024!"),
            format!("{CAPITAL}⠅⠊⠞⠂ {NUMBER}⠃⠴⠃⠙⠖")
        );
    }

    #[test]
    fn digits_missing_from_the_table() {
        let table = TableBuilder::new("46", "3456")
            .digits(&[('1', "1")])
            .build()
            .unwrap();
        let transliterator = Transliterator::new(&table);
        assert_eq!(transliterator.transliterate("191"), "⠼⠁9⠼⠁");
    }

    #[test]
    fn trace() {
        let translations = Transliterator::default().trace("Я 1");
        let kinds: Vec<_> = translations.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TranslationKind::CapitalSign,
                TranslationKind::Letter,
                TranslationKind::Passthrough,
                TranslationKind::NumberSign,
                TranslationKind::Digit,
            ]
        );
        assert_eq!(translations[0].input(), "");
        assert_eq!(translations[1].input(), "Я");
        assert_eq!(translations[1].output(), "⠫");
    }
}

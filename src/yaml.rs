//! Parser for transliteration test files
//!
//! The format is a small subset of the [liblouis](https://liblouis.io) YAML
//! tests:
//!
//! ```yaml
//! tests:
//!   - ["Кіт", "⠨⠅⠽⠞"]
//!   - ["a description", "42", "⠼⠙⠃"]
//!   - ["4а", "⠼⠙⠁", {xfail: true}]
//! ```

use std::{fs::File, iter::Peekable};

use libyaml::{Encoding, Event, Parser, ParserIter};

type YAMLEventError = Option<Result<Event, libyaml::ParserError>>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("YAML parse error")]
    YAMLError(#[from] libyaml::ParserError),
    #[error("Encoding {0:?} not supported")]
    InvalidEncoding(Encoding),
    #[error("Expected one YAML document holding a `tests` mapping, got {0:?}")]
    InvalidDocument(YAMLEventError),
    #[error("`tests` must be a list of tests, got {0:?}")]
    InvalidTestList(YAMLEventError),
    #[error("A test is a list of [description,] input and expected braille, got {0:?}")]
    InvalidTest(YAMLEventError),
    #[error("Test options must be a mapping, got {0:?}")]
    InvalidOptions(YAMLEventError),
    #[error("Invalid xfail value")]
    InvalidXFail,
    #[error("Unknown key {0:?}")]
    InvalidToken(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedFailure {
    Simple(bool),
    Reason(String),
}

impl ExpectedFailure {
    pub fn is_expected(&self) -> bool {
        match self {
            ExpectedFailure::Simple(xfail) => *xfail,
            ExpectedFailure::Reason(_) => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    pub description: Option<String>,
    pub input: String,
    pub expected: String,
    pub xfail: ExpectedFailure,
}

pub struct YAMLParser<'a> {
    events: Peekable<ParserIter<'a>>,
}

impl<'a> YAMLParser<'a> {
    pub fn new(reader: File) -> Result<Self, ParseError> {
        let parser = Parser::new(reader)?;
        Ok(Self {
            events: parser.into_iter().peekable(),
        })
    }

    fn peek_scalar(&mut self) -> bool {
        matches!(self.events.peek(), Some(Ok(Event::Scalar { .. })))
    }

    /// Consume the next event if `accept` matches it, otherwise report it
    /// through `error`
    fn expect(
        &mut self,
        accept: fn(&Event) -> bool,
        error: fn(YAMLEventError) -> ParseError,
    ) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(ref event)) if accept(event) => Ok(()),
            e => Err(error(e)),
        }
    }

    fn scalar(&mut self, error: fn(YAMLEventError) -> ParseError) -> Result<String, ParseError> {
        match self.events.next() {
            Some(Ok(Event::Scalar { value, .. })) => Ok(value),
            e => Err(error(e)),
        }
    }

    fn xfail(&mut self) -> Result<ExpectedFailure, ParseError> {
        if !self.peek_scalar() {
            return Err(ParseError::InvalidXFail);
        }
        let value = self.scalar(ParseError::InvalidOptions)?;
        let xfail = match &*value {
            "off" | "false" => ExpectedFailure::Simple(false),
            "on" | "true" => ExpectedFailure::Simple(true),
            _ => ExpectedFailure::Reason(value),
        };
        Ok(xfail)
    }

    fn options(&mut self) -> Result<ExpectedFailure, ParseError> {
        let mut xfail = ExpectedFailure::Simple(false);
        self.expect(
            |e| matches!(e, Event::MappingStart { .. }),
            ParseError::InvalidOptions,
        )?;
        while self.peek_scalar() {
            let key = self.scalar(ParseError::InvalidOptions)?;
            match &*key {
                "xfail" => xfail = self.xfail()?,
                _ => return Err(ParseError::InvalidToken(key)),
            }
        }
        self.expect(|e| matches!(e, Event::MappingEnd), ParseError::InvalidOptions)?;
        Ok(xfail)
    }

    fn test(&mut self) -> Result<Test, ParseError> {
        self.expect(
            |e| matches!(e, Event::SequenceStart { .. }),
            ParseError::InvalidTest,
        )?;
        let mut description = None;
        let mut input = self.scalar(ParseError::InvalidTest)?;
        let mut expected = self.scalar(ParseError::InvalidTest)?;
        // two scalars are (input, expected), three are (description, input, expected)
        if self.peek_scalar() {
            description = Some(input);
            input = expected;
            expected = self.scalar(ParseError::InvalidTest)?;
        }
        let xfail = match self.events.peek() {
            Some(Ok(Event::MappingStart { .. })) => self.options()?,
            _ => ExpectedFailure::Simple(false),
        };
        self.expect(|e| matches!(e, Event::SequenceEnd), ParseError::InvalidTest)?;
        Ok(Test {
            description,
            input,
            expected,
            xfail,
        })
    }

    fn tests(&mut self) -> Result<Vec<Test>, ParseError> {
        let mut tests: Vec<Test> = Vec::new();
        self.expect(
            |e| matches!(e, Event::SequenceStart { .. }),
            ParseError::InvalidTestList,
        )?;
        while let Some(Ok(Event::SequenceStart { .. })) = self.events.peek() {
            tests.push(self.test()?);
        }
        self.expect(|e| matches!(e, Event::SequenceEnd), ParseError::InvalidTestList)?;
        Ok(tests)
    }

    fn stream_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::StreamStart {
                encoding: Some(Encoding::Utf8),
            })) => Ok(()),
            Some(Ok(Event::StreamStart {
                encoding: Some(encoding),
            })) => Err(ParseError::InvalidEncoding(encoding)),
            e => Err(ParseError::InvalidDocument(e)),
        }
    }

    pub fn yaml(&mut self) -> Result<Vec<Test>, ParseError> {
        let mut tests: Vec<Test> = Vec::new();

        self.stream_start()?;
        self.expect(
            |e| matches!(e, Event::DocumentStart { .. }),
            ParseError::InvalidDocument,
        )?;
        self.expect(
            |e| matches!(e, Event::MappingStart { .. }),
            ParseError::InvalidDocument,
        )?;
        while self.peek_scalar() {
            let key = self.scalar(ParseError::InvalidDocument)?;
            match &*key {
                "tests" => tests.extend(self.tests()?),
                _ => return Err(ParseError::InvalidToken(key)),
            }
        }
        self.expect(|e| matches!(e, Event::MappingEnd), ParseError::InvalidDocument)?;
        self.expect(
            |e| matches!(e, Event::DocumentEnd { .. }),
            ParseError::InvalidDocument,
        )?;
        self.expect(|e| matches!(e, Event::StreamEnd), ParseError::InvalidDocument)?;
        Ok(tests)
    }
}

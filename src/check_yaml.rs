//! A test runner for transliteration tests defined in YAML files

use std::{fs::File, path::Path};

use log::debug;

use crate::{
    translator::Transliterator,
    yaml::{self, Test, YAMLParser},
};

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Cannot parse YAML test file: {0}")]
    ParseError(#[from] yaml::ParseError),
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
    },
    UnexpectedSuccess {
        input: String,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

impl Test {
    pub fn check(&self, transliterator: &Transliterator) -> TestResult {
        let actual = transliterator.transliterate(&self.input);
        let xfail = self.xfail.is_expected();
        match (actual == self.expected, xfail) {
            (true, false) => TestResult::Success,
            (true, true) => TestResult::UnexpectedSuccess {
                input: self.input.to_string(),
            },
            (false, true) => TestResult::ExpectedFailure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            },
            (false, false) => TestResult::Failure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            },
        }
    }
}

pub fn check(tests: &[Test], transliterator: &Transliterator) -> Vec<TestResult> {
    tests.iter().map(|t| t.check(transliterator)).collect()
}

/// Run all tests in the YAML file at `path` against the Ukrainian table
pub fn check_yaml(path: &Path) -> Result<Vec<TestResult>, TestError> {
    let file = File::open(path)?;
    let tests = YAMLParser::new(file)?.yaml()?;
    debug!("running {} tests from {:?}", tests.len(), path);
    Ok(check(&tests, &Transliterator::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::yaml::ExpectedFailure;

    fn test(input: &str, expected: &str, xfail: bool) -> Test {
        Test {
            description: None,
            input: input.to_string(),
            expected: expected.to_string(),
            xfail: ExpectedFailure::Simple(xfail),
        }
    }

    #[test]
    fn check_test() {
        let tests = [
            test("Кіт", "⠨⠅⠽⠞", false),
            test("кіт", "⠨⠅⠽⠞", false),
            test("42", "⠼⠙⠼⠃", true),
            test("42", "⠼⠙⠃", true),
        ];
        let results = check(&tests, &Transliterator::default());
        assert_eq!(
            results,
            vec![
                TestResult::Success,
                TestResult::Failure {
                    input: "кіт".to_string(),
                    expected: "⠨⠅⠽⠞".to_string(),
                    actual: "⠅⠽⠞".to_string(),
                },
                TestResult::ExpectedFailure {
                    input: "42".to_string(),
                    expected: "⠼⠙⠼⠃".to_string(),
                    actual: "⠼⠙⠃".to_string(),
                },
                TestResult::UnexpectedSuccess {
                    input: "42".to_string()
                },
            ]
        );
    }

    #[test]
    fn ukrainian_yaml() {
        let results = check_yaml(Path::new("tests/ukrainian.yaml")).unwrap();
        assert!(results.iter().all(|r| !r.is_failure()), "{results:?}");
        assert!(results.iter().any(|r| r.is_expected_failure()));
    }

    #[test]
    fn missing_file() {
        let result = check_yaml(Path::new("tests/does-not-exist.yaml"));
        assert!(matches!(result, Err(TestError::IoError(_))));
    }
}

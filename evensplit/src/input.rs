//! Parsing of the line-oriented test case format:
//!
//! ```text
//! T
//! N_1
//! a_1 a_2 ... a_N_1
//! ...
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use log::warn;

use crate::prefix::PrefixSums;
use crate::solver::{self, Split};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("line {line}: unexpected end of input, expected {expected}")]
    MissingLine { line: usize, expected: &'static str },
    #[error("line {line}: invalid integer `{token}`: {source}")]
    InvalidInteger {
        line: usize,
        token: String,
        source: ParseIntError,
    },
    #[error("line {line}: expected {expected} values, found {found}")]
    TooFewValues {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// A single array to be split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    values: Vec<i64>,
}

impl TestCase {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn prefix_sums(&self) -> PrefixSums {
        PrefixSums::new(&self.values)
    }

    pub fn best_split(&self) -> Split {
        solver::best_split(&self.prefix_sums())
    }

    pub fn solve(&self) -> i128 {
        self.best_split().difference
    }
}

impl From<Vec<i64>> for TestCase {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

/// Parses the number of test cases followed by that many (length, values)
/// line pairs. Lines after the last test case are ignored.
pub fn parse(input: &str) -> Result<Vec<TestCase>, InputError> {
    let mut lines = Lines::new(input);
    let (count_line, text) = lines.require("test case count")?;
    let count: i64 = parse_integer(count_line, text.trim())?;
    let count = usize::try_from(count).unwrap_or_else(|_| {
        warn!("line {count_line}: negative test case count {count}, treating it as zero");
        0
    });

    (0..count).map(|_| parse_case(&mut lines)).collect()
}

fn parse_case(lines: &mut Lines<'_>) -> Result<TestCase, InputError> {
    let (length_line, text) = lines.require("array length")?;
    let length: usize = parse_integer(length_line, text.trim())?;

    let (values_line, text) = lines.require("array values")?;

    let mut tokens = text.split_whitespace();
    let values = tokens
        .by_ref()
        .take(length)
        .map(|token| parse_integer(values_line, token))
        .collect::<Result<Vec<i64>, _>>()?;
    if values.len() < length {
        return Err(InputError::TooFewValues {
            line: values_line,
            expected: length,
            found: values.len(),
        });
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!(
            "line {values_line}: ignoring {extra} values beyond the declared length {length}"
        );
    }

    Ok(TestCase::new(values))
}

fn parse_integer<T>(line: usize, token: &str) -> Result<T, InputError>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .parse()
        .map_err(|source| InputError::InvalidInteger {
            line,
            token: token.to_string(),
            source,
        })
}

/// Input lines paired with their 1-based line numbers.
struct Lines<'a> {
    inner: std::str::Lines<'a>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines(),
            last: 0,
        }
    }

    fn require(&mut self, expected: &'static str) -> Result<(usize, &'a str), InputError> {
        self.next().ok_or(InputError::MissingLine {
            line: self.last + 1,
            expected,
        })
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next()?;
        self.last += 1;
        Some((self.last, text))
    }
}

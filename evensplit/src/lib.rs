//! Minimum difference between the two sides of an array split.
//!
//! Every array is cut at some index into a left and a right side, with the
//! left side taken either from the front or from the back of the array. The
//! answer for an array is the smallest absolute difference between the sums
//! of the two sides over all such cuts.

#![deny(clippy::print_stdout)]

pub mod input;
pub mod prefix;
pub mod solver;

use log::info;

pub use input::{parse, InputError, TestCase};
pub use prefix::{Direction, PrefixSums};
pub use solver::{best_split, min_difference, render, solve, Split};

/// Parses a full contest-style input, solves every test case and renders the
/// answers the way they are written to stdout.
pub fn run(input: &str) -> Result<String, InputError> {
    let cases = parse(input)?;
    let results = solve(&cases);
    info!("solved {} test cases", results.len());
    Ok(render(&results))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn sample() {
        let input = "4\n0\n\n2\n1 1\n3\n1 2 3\n1\n5\n";
        assert_eq!(run(input).unwrap(), "0\n0\n0\n5\n");
    }

    #[test]
    fn idempotent() {
        let input = "3\n4\n7 -2 9 1\n5\n3 1 4 1 5\n2\n10 3\n";
        let first = run(input).unwrap();
        let second = run(input).unwrap();
        assert_eq!(first, "1\n2\n7\n");
        assert_eq!(first, second);
    }

    #[test]
    fn no_cases() {
        assert_eq!(run("0\n").unwrap(), "\n");
    }

    #[test]
    fn negative_count() {
        assert_eq!(run("-1\n").unwrap(), "\n");
    }

    #[test]
    fn zero_length_without_values_line() {
        assert_eq!(
            run("2\n1\n5\n0\n"),
            Err(InputError::MissingLine {
                line: 5,
                expected: "array values"
            })
        );
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            run("2\n1\n"),
            Err(InputError::MissingLine { line: 3, .. })
        ));
    }
}

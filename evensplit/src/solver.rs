use itertools::Itertools;
use log::debug;
use strum::IntoEnumIterator;

use crate::input::TestCase;
use crate::prefix::{Direction, PrefixSums};

/// The cut that minimizes the difference between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub direction: Direction,
    /// Number of elements on the left side.
    pub index: usize,
    pub difference: i128,
}

/// Scans every split index from `0` to `len` inclusive, in both directions,
/// and returns the first split with the smallest absolute difference.
///
/// Only cuts that keep each side contiguous and anchored at one end of the
/// array are considered, not arbitrary partitions.
pub fn best_split(sums: &PrefixSums) -> Split {
    let mut best = Split {
        direction: Direction::Forward,
        index: 0,
        difference: sums.total().abs(),
    };
    for index in 0..=sums.len() {
        for direction in Direction::iter() {
            let (left, right) = sums.sides(direction, index);
            let difference = (left - right).abs();
            if difference < best.difference {
                best = Split {
                    direction,
                    index,
                    difference,
                };
            }
        }
    }
    best
}

pub fn min_difference(values: &[i64]) -> i128 {
    best_split(&PrefixSums::new(values)).difference
}

/// Solves every test case in order.
pub fn solve(cases: &[TestCase]) -> Vec<i128> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let split = case.best_split();
            debug!(
                "case {}: {} values, difference {} at {} split {}",
                i + 1,
                case.len(),
                split.difference,
                split.direction,
                split.index
            );
            split.difference
        })
        .collect()
}

/// One answer per line.
pub fn render(results: &[i128]) -> String {
    format!("{}\n", results.iter().join("\n"))
}

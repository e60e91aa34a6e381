use strum::{Display, EnumIter};

/// The end of the array the left side of a split is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

/// Prefix sums of an array, read from the front and from the back.
///
/// Both sequences have `len() + 1` entries and start at zero, so entry `i`
/// is the sum of the first `i` elements in the respective direction.
/// Sums are kept as `i128` so that adding up `i64` values cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    forward: Vec<i128>,
    reverse: Vec<i128>,
}

impl PrefixSums {
    pub fn new(values: &[i64]) -> Self {
        Self {
            forward: accumulate(values.iter()),
            reverse: accumulate(values.iter().rev()),
        }
    }

    pub fn forward(&self) -> &[i128] {
        &self.forward
    }

    pub fn reverse(&self) -> &[i128] {
        &self.reverse
    }

    pub fn get(&self, direction: Direction) -> &[i128] {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    /// Number of array elements the sums were built from.
    pub fn len(&self) -> usize {
        self.forward.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total(&self) -> i128 {
        self.forward[self.len()]
    }

    /// Sums of the left and right side when the left side holds the first
    /// `index` elements counted from `direction`.
    ///
    /// Panics if `index > self.len()`.
    pub fn sides(&self, direction: Direction, index: usize) -> (i128, i128) {
        let left = self.get(direction)[index];
        (left, self.total() - left)
    }
}

fn accumulate<'a>(values: impl Iterator<Item = &'a i64>) -> Vec<i128> {
    let mut sums = Vec::with_capacity(values.size_hint().0 + 1);
    sums.push(0);
    let mut running = 0i128;
    for &value in values {
        running += i128::from(value);
        sums.push(running);
    }
    sums
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn empty() {
        let sums = PrefixSums::new(&[]);
        assert!(sums.is_empty());
        assert_eq!(sums.forward(), &[0]);
        assert_eq!(sums.reverse(), &[0]);
        assert_eq!(sums.total(), 0);
        assert_eq!(sums.sides(Direction::Forward, 0), (0, 0));
    }

    #[test]
    fn both_directions() {
        let sums = PrefixSums::new(&[1, 2, 3, 4]);
        assert_eq!(sums.len(), 4);
        assert_eq!(sums.forward(), &[0, 1, 3, 6, 10]);
        assert_eq!(sums.reverse(), &[0, 4, 7, 9, 10]);
        assert_eq!(sums.total(), 10);
    }

    #[test]
    fn sides_complement_each_other() {
        let sums = PrefixSums::new(&[5, -3, 8]);
        assert_eq!(sums.sides(Direction::Forward, 1), (5, 5));
        assert_eq!(sums.sides(Direction::Reverse, 1), (8, 2));
        assert_eq!(sums.sides(Direction::Reverse, 3), (10, 0));
    }

    #[test]
    fn no_overflow_on_extreme_values() {
        let sums = PrefixSums::new(&[i64::MAX, i64::MAX, i64::MIN]);
        assert_eq!(sums.total(), i128::from(i64::MAX) - 1);
        assert_eq!(sums.forward()[2], 2 * i128::from(i64::MAX));
    }

    #[test]
    fn direction_names() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Reverse.to_string(), "reverse");
    }
}

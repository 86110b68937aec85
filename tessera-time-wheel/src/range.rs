//! Inclusive integer ranges shown by a wheel.

use std::ops::RangeInclusive;

use crate::wheel::WheelError;

/// The closed range `[min, max]` a wheel selects from.
///
/// Row `i` of a wheel shows the value `min + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelRange {
    min: i32,
    max: i32,
}

impl WheelRange {
    /// Hours of a 24-hour clock.
    pub const HOURS: Self = Self { min: 0, max: 23 };
    /// Minutes of an hour.
    pub const MINUTES: Self = Self { min: 0, max: 59 };

    /// Largest value a two-digit row label can show.
    pub const MAX_LABEL_VALUE: i32 = 99;

    /// Creates a range, rejecting `min > max`.
    ///
    /// Rows are labelled with exactly two digits, so both bounds must lie in
    /// `0..=99`.
    pub fn new(min: i32, max: i32) -> Result<Self, WheelError> {
        if min > max {
            return Err(WheelError::EmptyRange { min, max });
        }
        if min < 0 || max > Self::MAX_LABEL_VALUE {
            return Err(WheelError::RangeNotTwoDigit { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest selectable value.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest selectable value.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of rows in the wheel.
    pub fn len(&self) -> usize {
        (self.max as i64 - self.min as i64 + 1) as usize
    }

    /// Always `false`; a range holds at least one value.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Saturates `value` at the range bounds.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Row index of `value`, after clamping.
    pub fn index_of(&self, value: i32) -> usize {
        (self.clamp(value) as i64 - self.min as i64) as usize
    }

    /// Value shown at row `index`. Indices outside the rows saturate at the
    /// first or last value.
    pub fn value_at(&self, index: i64) -> i32 {
        let value = (self.min as i64).saturating_add(index);
        value.clamp(self.min as i64, self.max as i64) as i32
    }

    /// Iterates over every value, first row first.
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl IntoIterator for WheelRange {
    type Item = i32;
    type IntoIter = RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(
            WheelRange::new(5, 4),
            Err(WheelError::EmptyRange { min: 5, max: 4 })
        );
        assert!(WheelRange::new(4, 4).is_ok());
    }

    #[test]
    fn test_range_rejects_values_without_two_digit_labels() {
        assert_eq!(
            WheelRange::new(-5, 10),
            Err(WheelError::RangeNotTwoDigit { min: -5, max: 10 })
        );
        assert_eq!(
            WheelRange::new(0, 100),
            Err(WheelError::RangeNotTwoDigit { min: 0, max: 100 })
        );
        assert_eq!(
            WheelRange::new(-5, 100),
            Err(WheelError::RangeNotTwoDigit { min: -5, max: 100 })
        );
        assert!(WheelRange::new(0, 99).is_ok());
    }

    #[test]
    fn test_range_len() {
        assert_eq!(WheelRange::HOURS.len(), 24);
        assert_eq!(WheelRange::MINUTES.len(), 60);
    }

    #[test]
    fn test_range_clamp() {
        let range = WheelRange::HOURS;
        assert_eq!(range.clamp(-3), 0);
        assert_eq!(range.clamp(12), 12);
        assert_eq!(range.clamp(24), 23);
    }

    #[test]
    fn test_value_at_saturates() {
        let range = WheelRange::new(10, 20).unwrap();
        assert_eq!(range.value_at(0), 10);
        assert_eq!(range.value_at(5), 15);
        assert_eq!(range.value_at(-1), 10);
        assert_eq!(range.value_at(11), 20);
        assert_eq!(range.value_at(i64::MAX), 20);
        assert_eq!(range.value_at(i64::MIN), 10);
    }

    #[test]
    fn test_index_of() {
        let range = WheelRange::new(10, 20).unwrap();
        assert_eq!(range.index_of(10), 0);
        assert_eq!(range.index_of(17), 7);
        assert_eq!(range.index_of(99), 10);
    }

    #[test]
    fn test_iter_yields_every_value() {
        let values: Vec<i32> = WheelRange::new(7, 10).unwrap().into_iter().collect();
        assert_eq!(values, vec![7, 8, 9, 10]);
    }
}

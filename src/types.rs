//! Strongly-typed primitives shared by the parser and the interpreter.

use std::fmt;

/// Why a requested grid size could not be used as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// Size is zero or negative
    NotPositive(i32),
    /// Size is above the configured limit
    TooLarge { requested: i32, max: usize },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::NotPositive(n) => write!(f, "dimension {n} is not positive"),
            DimensionError::TooLarge { requested, max } => {
                write!(f, "dimension {requested} exceeds the limit of {max}")
            }
        }
    }
}

impl std::error::Error for DimensionError {}

/// Side length of the square grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Dimension(usize);

impl Dimension {
    /// The degenerate grid: every coordinate is out of bounds.
    pub const ZERO: Dimension = Dimension(0);

    /// Validate a requested size against `max`.
    pub fn try_new(requested: i32, max: usize) -> Result<Dimension, DimensionError> {
        if requested <= 0 {
            return Err(DimensionError::NotPositive(requested));
        }
        let n = requested as usize;
        if n > max {
            Err(DimensionError::TooLarge { requested, max })
        } else {
            Ok(Dimension(n))
        }
    }

    /// Apply the tolerant policy: non-positive sizes give an empty grid,
    /// oversized ones are clamped to `max`. The error, if any, is returned
    /// alongside so the caller can report it.
    pub fn clamped(requested: i32, max: usize) -> (Dimension, Option<DimensionError>) {
        match Dimension::try_new(requested, max) {
            Ok(d) => (d, None),
            Err(e @ DimensionError::NotPositive(_)) => (Dimension::ZERO, Some(e)),
            Err(e @ DimensionError::TooLarge { .. }) => (Dimension(max), Some(e)),
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_try_new_valid() {
        assert_eq!(Dimension::try_new(10, 100).unwrap().get(), 10);
        assert_eq!(Dimension::try_new(100, 100).unwrap().get(), 100);
    }

    #[test]
    fn dimension_try_new_rejects_zero_and_negative() {
        assert_eq!(Dimension::try_new(0, 100), Err(DimensionError::NotPositive(0)));
        assert_eq!(Dimension::try_new(-3, 100), Err(DimensionError::NotPositive(-3)));
    }

    #[test]
    fn dimension_try_new_rejects_too_large() {
        assert_eq!(
            Dimension::try_new(101, 100),
            Err(DimensionError::TooLarge { requested: 101, max: 100 })
        );
    }

    #[test]
    fn dimension_clamped_policy() {
        assert_eq!(Dimension::clamped(-1, 100).0, Dimension::ZERO);
        assert_eq!(Dimension::clamped(0, 100).0, Dimension::ZERO);
        assert_eq!(Dimension::clamped(5000, 100).0.get(), 100);

        let (d, err) = Dimension::clamped(7, 100);
        assert_eq!(d.get(), 7);
        assert!(err.is_none());
    }
}

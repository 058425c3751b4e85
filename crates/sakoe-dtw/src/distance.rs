//! DTW distance newtype.

use std::cmp::Ordering;
use std::fmt;

/// Raw cumulative squared DTW cost, or the unreachable sentinel.
///
/// Values are never square-rooted, so they are only comparable with other
/// values produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DtwDistance(f64);

impl DtwDistance {
    /// No warping path reaches the final cell under the active band.
    pub const UNREACHABLE: Self = Self(f64::INFINITY);

    /// Zero cost.
    pub const ZERO: Self = Self(0.0);

    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw value (`f64::INFINITY` when unreachable).
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True unless this is [`DtwDistance::UNREACHABLE`].
    #[must_use]
    pub fn is_reachable(self) -> bool {
        self.0.is_finite()
    }

    /// Return the cost if a path exists.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        self.is_reachable().then_some(self.0)
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{:.6}", self.0)
        } else {
            f.write_str("unreachable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(DtwDistance::new(1.234567).to_string(), "1.234567");
        assert_eq!(DtwDistance::UNREACHABLE.to_string(), "unreachable");
    }

    #[test]
    fn unreachable_has_no_finite_value() {
        assert!(!DtwDistance::UNREACHABLE.is_reachable());
        assert_eq!(DtwDistance::UNREACHABLE.finite(), None);
        assert_eq!(DtwDistance::new(3.0).finite(), Some(3.0));
    }

    #[test]
    fn any_finite_distance_beats_unreachable() {
        assert!(DtwDistance::new(1e300) < DtwDistance::UNREACHABLE);
        assert_eq!(
            DtwDistance::ZERO.total_cmp(&DtwDistance::UNREACHABLE),
            Ordering::Less
        );
    }
}

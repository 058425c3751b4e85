//! Warping window constraints.

use std::fmt;
use std::ops::Range;

use crate::error::DtwError;

/// Fractional Sakoe-Chiba bandwidth in `[0, 1]`.
///
/// The band half-width for a pair of series of lengths `n` and `m` is
/// `floor(min(n, m) * bandwidth)`. A bandwidth of exactly 1 disables the band.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bandwidth(f64);

impl Bandwidth {
    /// The full table: no band at all.
    pub const FULL: Self = Self(1.0);

    /// Validate a fractional bandwidth.
    ///
    /// # Errors
    ///
    /// Returns [`DtwError::InvalidBandwidth`] if `value` is NaN or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, DtwError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DtwError::InvalidBandwidth { bandwidth: value });
        }
        Ok(Self(value))
    }

    /// Return the raw fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the band covers the whole table.
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 >= 1.0
    }

    /// Band half-width for series of lengths `n` and `m`.
    #[must_use]
    pub fn radius(self, n: usize, m: usize) -> usize {
        (n.min(m) as f64 * self.0).floor() as usize
    }
}

impl Default for Bandwidth {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Constraint on the DTW warping window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BandConstraint {
    /// No constraint: every cell of the table may be visited.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band with a fixed radius: cell `(i, j)` is valid only if `|i - j| <= radius`.
    SakoeChibaRadius(usize),

    /// Sakoe-Chiba band whose radius scales with the shorter series.
    SakoeChibaFraction(Bandwidth),
}

impl BandConstraint {
    /// Build the constraint for a fractional bandwidth; a full bandwidth is unconstrained.
    #[must_use]
    pub fn from_bandwidth(bandwidth: Bandwidth) -> Self {
        if bandwidth.is_full() {
            Self::Unconstrained
        } else {
            Self::SakoeChibaFraction(bandwidth)
        }
    }

    /// Resolve the band radius for an `n` x `m` table. `None` means unbanded.
    #[must_use]
    pub fn radius(&self, n: usize, m: usize) -> Option<usize> {
        match self {
            Self::Unconstrained => None,
            Self::SakoeChibaRadius(r) => Some(*r),
            Self::SakoeChibaFraction(bw) if bw.is_full() => None,
            Self::SakoeChibaFraction(bw) => Some(bw.radius(n, m)),
        }
    }

    /// Return the valid column range for `row` in an `n_rows` x `n_cols` table.
    ///
    /// For a band of radius `r` this is `[row - r, row + r]` clipped to `[0, n_cols)`.
    #[must_use]
    pub fn column_range(&self, row: usize, n_rows: usize, n_cols: usize) -> Range<usize> {
        match self.radius(n_rows, n_cols) {
            None => 0..n_cols,
            Some(r) => {
                let start = row.saturating_sub(r).min(n_cols);
                let end = row.saturating_add(r).saturating_add(1).min(n_cols);
                start..end
            }
        }
    }

    /// Return the widest row of the band for an `n` x `m` table.
    #[must_use]
    pub fn band_width(&self, n: usize, m: usize) -> usize {
        match self.radius(n, m) {
            None => m,
            Some(r) => r.saturating_mul(2).saturating_add(1).min(m),
        }
    }
}

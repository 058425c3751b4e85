//! DTW distance computation.

use tracing::instrument;

use crate::constraint::{BandConstraint, Bandwidth};
use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::series::TimeSeriesView;

/// Cost of a cell no warping path can reach.
const UNREACHABLE: f64 = f64::INFINITY;

/// Immutable DTW configuration. Thread-safe and copyable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dtw {
    constraint: BandConstraint,
}

impl Dtw {
    /// Create an unconstrained DTW calculator.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self {
            constraint: BandConstraint::Unconstrained,
        }
    }

    /// Create a DTW calculator with a fixed-radius Sakoe-Chiba band.
    #[must_use]
    pub fn with_sakoe_chiba(radius: usize) -> Self {
        Self {
            constraint: BandConstraint::SakoeChibaRadius(radius),
        }
    }

    /// Create a DTW calculator whose band radius is `floor(min(n, m) * bandwidth)`.
    #[must_use]
    pub fn with_bandwidth(bandwidth: Bandwidth) -> Self {
        Self {
            constraint: BandConstraint::from_bandwidth(bandwidth),
        }
    }

    /// Create a DTW calculator from an existing [`BandConstraint`].
    #[must_use]
    pub fn from_constraint(constraint: BandConstraint) -> Self {
        Self { constraint }
    }

    /// Return the band constraint configuration.
    #[must_use]
    pub fn constraint(&self) -> BandConstraint {
        self.constraint
    }

    /// Compute the DTW distance between two series.
    ///
    /// The first row and column of the cost table are unreachable except for
    /// the origin, which costs nothing; every other cell adds the squared
    /// difference of its samples to the cheapest of its three predecessors.
    /// The result is the raw cost of the final cell and may be
    /// [`DtwDistance::UNREACHABLE`] when the band admits no path.
    ///
    /// Runs in O(n * bw) time and O(bw) space, where `bw` is the band width.
    #[must_use]
    #[instrument(level = "trace", skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn distance(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> DtwDistance {
        DtwDistance::new(self.dtw_rolling(a.as_slice(), b.as_slice(), None))
    }

    /// Compute the DTW distance with early abandoning.
    ///
    /// Returns [`DtwDistance::UNREACHABLE`] as soon as the distance is known to
    /// exceed `cutoff`, a raw cost on the same scale as [`DtwDistance::value`].
    /// Exact: any returned value `<= cutoff` equals `self.distance(a, b)`.
    #[must_use]
    #[instrument(level = "trace", skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn distance_with_cutoff(
        &self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        cutoff: f64,
    ) -> DtwDistance {
        DtwDistance::new(self.dtw_rolling(a.as_slice(), b.as_slice(), Some(cutoff)))
    }

    /// Rolling two-row banded DTW.
    ///
    /// Each row buffer has `bw + 2` slots. Slot 0 is a left sentinel and slot
    /// `bw + 1` a right sentinel, both unreachable; column `j` of a row whose
    /// band starts at `start` lives in slot `j - start + 1`.
    ///
    /// With a cutoff, a non-final row whose minimum already exceeds it ends the
    /// computation: costs are non-negative, so every path through that row
    /// ends above the cutoff.
    fn dtw_rolling(&self, a: &[f64], b: &[f64], cutoff: Option<f64>) -> f64 {
        let n = a.len();
        let m = b.len();

        let bw = self.constraint.band_width(n, m);
        let buf_width = bw + 2;

        let mut prev = vec![UNREACHABLE; buf_width];
        let mut curr = vec![UNREACHABLE; buf_width];

        // Row 0 holds only the origin.
        prev[1] = 0.0;
        let mut prev_start = 0;

        for i in 1..n {
            curr.fill(UNREACHABLE);

            let cols = self.constraint.column_range(i, n, m);
            let curr_start = cols.start.max(1);
            let mut row_min = UNREACHABLE;

            for j in curr_start..cols.end {
                let cj = j - curr_start + 1;
                let cost = (a[i] - b[j]).powi(2);

                let left = curr[cj - 1];
                let above = band_cell(&prev, prev_start, j);
                let diag = band_cell(&prev, prev_start, j - 1);

                let val = cost + left.min(above).min(diag);
                curr[cj] = val;
                row_min = row_min.min(val);
            }

            // The last row is settled by the final-cell check below.
            if let Some(c) = cutoff
                && i < n - 1
                && row_min > c
            {
                return UNREACHABLE;
            }

            prev_start = curr_start;
            std::mem::swap(&mut prev, &mut curr);
        }

        // After the final swap, `prev` holds the last completed row.
        let last = band_cell(&prev, prev_start, m - 1);
        match cutoff {
            Some(c) if last > c => UNREACHABLE,
            _ => last,
        }
    }
}

/// Read column `col` from a banded row buffer starting at `start`.
fn band_cell(row: &[f64], start: usize, col: usize) -> f64 {
    if col < start {
        return UNREACHABLE;
    }
    row.get(col - start + 1).copied().unwrap_or(UNREACHABLE)
}

/// Compute the DTW distance between two raw slices under a fractional bandwidth.
///
/// Validates both slices and the bandwidth, then delegates to [`Dtw::distance`].
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DtwError::EmptySeries`] | Either slice is empty |
/// | [`DtwError::NonFiniteValue`] | Either slice holds NaN or infinity |
/// | [`DtwError::InvalidBandwidth`] | `bandwidth` outside `[0, 1]` |
pub fn distance(a: &[f64], b: &[f64], bandwidth: f64) -> Result<DtwDistance, DtwError> {
    let dtw = Dtw::with_bandwidth(Bandwidth::new(bandwidth)?);
    Ok(dtw.distance(TimeSeriesView::new(a)?, TimeSeriesView::new(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeSeries;

    fn ts(values: &[f64]) -> TimeSeries {
        TimeSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn identical_series_distance_zero() {
        let a = ts(&[1.0, 2.0, 3.0]);
        let d = Dtw::unconstrained().distance(a.as_view(), a.as_view());
        assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn origin_cost_is_ignored() {
        // Only the origin is seeded, so a[0] and b[0] never contribute.
        let a = ts(&[100.0, 1.0]);
        let b = ts(&[-100.0, 1.0]);
        let d = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn hand_computed_2x2() {
        // D[1][1] = (1 - 0)^2 + D[0][0] = 1; first row and column stay unreachable.
        let a = ts(&[0.0, 1.0]);
        let b = ts(&[1.0, 0.0]);
        let d = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        assert_eq!(d.value(), 1.0);
    }

    #[test]
    fn hand_computed_3x3() {
        // a = [0, 1, 2], b = [0, 2, 1]
        // D[1][1] = 1,  D[1][2] = 0 + 1 = 1
        // D[2][1] = 0 + 1 = 1, D[2][2] = 1 + min(1, 1, 1) = 2
        let a = ts(&[0.0, 1.0, 2.0]);
        let b = ts(&[0.0, 2.0, 1.0]);
        let d = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        assert_eq!(d.value(), 2.0);
    }

    #[test]
    fn result_is_not_square_rooted() {
        let a = ts(&[0.0, 0.0]);
        let b = ts(&[0.0, 3.0]);
        let d = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        assert_eq!(d.value(), 9.0);
    }

    #[test]
    fn zero_radius_forces_diagonal() {
        // D[1][1] = 1, D[2][2] = 2
        let a = ts(&[0.0, 0.0, 0.0]);
        let b = ts(&[1.0, 1.0, 1.0]);
        let d = Dtw::with_sakoe_chiba(0).distance(a.as_view(), b.as_view());
        assert_eq!(d.value(), 2.0);
    }

    #[test]
    fn unequal_lengths_align() {
        // a = [5,5,5,5] vs b = [1,1,1]: three steps of cost 16 on the cheapest path.
        let a = ts(&[5.0, 5.0, 5.0, 5.0]);
        let b = ts(&[1.0, 1.0, 1.0]);
        let c = ts(&[5.0, 5.0, 5.0]);
        let dtw = Dtw::unconstrained();
        assert_eq!(dtw.distance(a.as_view(), b.as_view()).value(), 48.0);
        assert_eq!(dtw.distance(a.as_view(), c.as_view()).value(), 0.0);
    }

    #[test]
    fn single_sample_pairs() {
        let one = ts(&[5.0]);
        let other = ts(&[3.0]);
        let longer = ts(&[5.0, 5.0]);
        let dtw = Dtw::unconstrained();
        assert_eq!(dtw.distance(one.as_view(), other.as_view()), DtwDistance::ZERO);
        assert_eq!(
            dtw.distance(one.as_view(), longer.as_view()),
            DtwDistance::UNREACHABLE
        );
    }

    #[test]
    fn narrow_band_on_unequal_lengths_is_unreachable() {
        // Radius 0 keeps the path on the diagonal, which never reaches (3, 1).
        let a = ts(&[1.0, 2.0, 3.0, 4.0]);
        let b = ts(&[1.0, 2.0]);
        let d = Dtw::with_sakoe_chiba(0).distance(a.as_view(), b.as_view());
        assert!(!d.is_reachable());
    }

    #[test]
    fn band_distance_geq_unconstrained() {
        let a = ts(&[0.0, 1.0, 0.0, 1.0, 0.0, 2.0]);
        let b = ts(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        let full = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        let banded = Dtw::with_sakoe_chiba(1).distance(a.as_view(), b.as_view());
        assert!(banded.value() >= full.value());
    }

    #[test]
    fn wide_radius_matches_unconstrained() {
        let a = ts(&[3.0, 1.0, 4.0, 1.0, 5.0]);
        let b = ts(&[2.0, 7.0, 1.0, 8.0]);
        let full = Dtw::unconstrained().distance(a.as_view(), b.as_view());
        let wide = Dtw::with_sakoe_chiba(10).distance(a.as_view(), b.as_view());
        assert_eq!(full, wide);
    }

    #[test]
    fn early_abandon_returns_unreachable() {
        let a = ts(&[0.0; 5]);
        let b = ts(&[10.0; 5]);
        let dtw = Dtw::unconstrained();
        let result = dtw.distance_with_cutoff(a.as_view(), b.as_view(), 4.0);
        assert_eq!(result, DtwDistance::UNREACHABLE);
    }

    #[test]
    fn cutoff_at_exact_distance_keeps_value() {
        let a = ts(&[0.0, 1.0, 3.0, 2.0]);
        let b = ts(&[1.0, 0.0, 2.0, 2.0]);
        let dtw = Dtw::unconstrained();
        let exact = dtw.distance(a.as_view(), b.as_view());
        let at = dtw.distance_with_cutoff(a.as_view(), b.as_view(), exact.value());
        assert_eq!(at, exact);
        let unbounded = dtw.distance_with_cutoff(a.as_view(), b.as_view(), f64::INFINITY);
        assert_eq!(unbounded, exact);
        let below = dtw.distance_with_cutoff(a.as_view(), b.as_view(), exact.value() - 0.5);
        assert_eq!(below, DtwDistance::UNREACHABLE);
    }

    #[test]
    fn free_function_validates_inputs() {
        assert_eq!(distance(&[], &[1.0], 1.0), Err(DtwError::EmptySeries));
        assert!(matches!(
            distance(&[1.0], &[1.0], 1.5),
            Err(DtwError::InvalidBandwidth { .. })
        ));
        let d = distance(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0], 1.0).unwrap();
        assert_eq!(d, DtwDistance::ZERO);
    }
}

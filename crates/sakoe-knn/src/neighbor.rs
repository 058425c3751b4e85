//! Nearest-neighbor search and corpus evaluation.

use rayon::prelude::*;
use sakoe_dtw::DtwDistance;
use tracing::{debug, info, instrument};

use crate::config::NearestNeighborConfig;
use crate::error::{KnnError, Role};
use crate::result::{Evaluation, Neighbor, Prediction};
use crate::sample::{Dimensionality, LabeledSeries, SeriesData};

impl NearestNeighborConfig {
    /// Find the training sample nearest to `query`.
    ///
    /// Training samples are scanned in order and a candidate replaces the
    /// current best only when strictly closer, so ties keep the earliest
    /// sample. Returns `Ok(None)` when no training sample is reachable under
    /// the band.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`KnnError::EmptyTraining`] | `training` is empty |
    /// | [`KnnError::DimensionalityMismatch`] | `query` or a training sample has the wrong shape |
    /// | [`KnnError::Dtw`] | A multivariate sample lacks a configured channel |
    pub fn nearest(
        &self,
        query: &LabeledSeries,
        training: &[LabeledSeries],
    ) -> Result<Option<Neighbor>, KnnError> {
        if training.is_empty() {
            return Err(KnnError::EmptyTraining);
        }
        self.check_shape(query.data(), Role::Query, 0)?;
        self.scan(query.data(), training)
    }

    /// Classify every test sample against the training corpus and score the result.
    ///
    /// Test samples are classified in parallel; each training scan is
    /// sequential, so predictions do not depend on scheduling.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`KnnError::EmptyTraining`] | `training` is empty |
    /// | [`KnnError::EmptyTest`] | `test` is empty |
    /// | [`KnnError::DimensionalityMismatch`] | A sample has the wrong shape |
    /// | [`KnnError::NoReachableNeighbor`] | Every training sample is unreachable from a test sample |
    /// | [`KnnError::Dtw`] | A multivariate sample lacks a configured channel |
    #[instrument(
        skip_all,
        fields(
            n_training = training.len(),
            n_test = test.len(),
            bandwidth = %self.bandwidth,
            dimensionality = self.dimensionality.name(),
        )
    )]
    pub fn evaluate(
        &self,
        training: &[LabeledSeries],
        test: &[LabeledSeries],
    ) -> Result<Evaluation, KnnError> {
        if training.is_empty() {
            return Err(KnnError::EmptyTraining);
        }
        if test.is_empty() {
            return Err(KnnError::EmptyTest);
        }
        for (index, sample) in test.iter().enumerate() {
            self.check_shape(sample.data(), Role::Test, index)?;
        }

        let predictions = test
            .par_iter()
            .enumerate()
            .map(|(test_index, sample)| {
                let neighbor = self
                    .scan(sample.data(), training)?
                    .ok_or(KnnError::NoReachableNeighbor { test_index })?;
                debug!(
                    test_index,
                    neighbor = neighbor.index,
                    distance = %neighbor.distance,
                    "classified"
                );
                Ok(Prediction {
                    test_index,
                    truth: sample.label().clone(),
                    predicted: neighbor.label,
                    neighbor_index: neighbor.index,
                    distance: neighbor.distance,
                })
            })
            .collect::<Result<Vec<_>, KnnError>>()?;

        let n_correct = predictions.iter().filter(|p| p.is_correct()).count();
        let evaluation = Evaluation {
            predictions,
            n_correct,
            n_training: training.len(),
        };
        info!(
            n_correct,
            accuracy = evaluation.accuracy(),
            "evaluation complete"
        );
        Ok(evaluation)
    }

    /// Ordered scan with strict `<`. `query` must already match the dimensionality.
    fn scan(
        &self,
        query: &SeriesData,
        training: &[LabeledSeries],
    ) -> Result<Option<Neighbor>, KnnError> {
        let mut best: Option<usize> = None;
        let mut best_distance = DtwDistance::UNREACHABLE;

        for (index, candidate) in training.iter().enumerate() {
            let d = self.distance(query, candidate.data(), index, best_distance)?;
            if d < best_distance {
                best = Some(index);
                best_distance = d;
            }
        }

        Ok(best.map(|index| Neighbor {
            index,
            label: training[index].label().clone(),
            distance: best_distance,
        }))
    }

    fn distance(
        &self,
        query: &SeriesData,
        candidate: &SeriesData,
        candidate_index: usize,
        best: DtwDistance,
    ) -> Result<DtwDistance, KnnError> {
        match (self.dimensionality, query, candidate) {
            (Dimensionality::Univariate, SeriesData::Univariate(q), SeriesData::Univariate(c)) => {
                Ok(if self.early_abandon {
                    self.dtw
                        .distance_with_cutoff(q.as_view(), c.as_view(), best.value())
                } else {
                    self.dtw.distance(q.as_view(), c.as_view())
                })
            }
            (
                Dimensionality::Multivariate(layout),
                SeriesData::Multivariate(q),
                SeriesData::Multivariate(c),
            ) => Ok(self.dtw.distance_multichannel(q, c, layout.n_channels())?),
            _ => Err(KnnError::DimensionalityMismatch {
                role: Role::Training,
                index: candidate_index,
                expected: self.dimensionality.name(),
                found: candidate.kind(),
            }),
        }
    }

    fn check_shape(&self, data: &SeriesData, role: Role, index: usize) -> Result<(), KnnError> {
        if data.matches(self.dimensionality) {
            Ok(())
        } else {
            Err(KnnError::DimensionalityMismatch {
                role,
                index,
                expected: self.dimensionality.name(),
                found: data.kind(),
            })
        }
    }
}

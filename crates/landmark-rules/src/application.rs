//! Applying a collection to many nuclei.
//!
//! [`RuleApplicationType::PerNucleus`] evaluates every nucleus on its own
//! profiles. [`RuleApplicationType::ViaMedian`] evaluates the median
//! profiles once and maps each index onto the nuclei through a
//! [`MedianIndexMapper`].

use std::collections::BTreeMap;

use landmark_core::error::Result as EvalResult;
use landmark_core::{EvalError, Landmark, OrientationMark, ProfileKind, ProfileSource, RuleApplicationType};
use rayon::prelude::*;

use crate::collection::RuleSetCollection;
use crate::finder::{LandmarkFinder, LandmarkResults};
use crate::presets;

/// Maps an index on the median profile onto one nucleus.
///
/// Returns `None` when the nucleus cannot be aligned.
pub trait MedianIndexMapper: Send + Sync {
    fn map_median_index(
        &self,
        median_index: usize,
        median_len: usize,
        nucleus: &dyn ProfileSource,
    ) -> Option<usize>;
}

impl<F> MedianIndexMapper for F
where
    F: Fn(usize, usize, &dyn ProfileSource) -> Option<usize> + Send + Sync,
{
    fn map_median_index(
        &self,
        median_index: usize,
        median_len: usize,
        nucleus: &dyn ProfileSource,
    ) -> Option<usize> {
        self(median_index, median_len, nucleus)
    }
}

/// Maps by relative position along the perimeter.
///
/// Assumes the nucleus profile starts at the reference landmark, as the
/// median does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProportionalMapper {
    kind: ProfileKind,
}

impl ProportionalMapper {
    /// Mapper reading the nucleus length from profiles of `kind`.
    pub fn new(kind: ProfileKind) -> Self {
        Self { kind }
    }
}

impl Default for ProportionalMapper {
    fn default() -> Self {
        Self::new(ProfileKind::Angle)
    }
}

impl MedianIndexMapper for ProportionalMapper {
    fn map_median_index(
        &self,
        median_index: usize,
        median_len: usize,
        nucleus: &dyn ProfileSource,
    ) -> Option<usize> {
        let len = nucleus.profile(self.kind)?.len();
        if len == 0 || median_index >= median_len {
            return None;
        }
        let scaled = (median_index as f64 * len as f64 / median_len as f64).round() as usize;
        Some(scaled % len)
    }
}

impl LandmarkFinder {
    /// Locates every landmark on every nucleus, using the collection's
    /// application type.
    ///
    /// `median` and `mapper` are only consulted for
    /// [`RuleApplicationType::ViaMedian`]. Results are in nucleus order.
    pub fn apply<M, S, X>(
        &self,
        collection: &RuleSetCollection,
        median: &M,
        nuclei: &[S],
        mapper: &X,
    ) -> Vec<LandmarkResults>
    where
        M: ProfileSource + ?Sized,
        S: ProfileSource + Sync,
        X: MedianIndexMapper + ?Sized,
    {
        match collection.application_type() {
            RuleApplicationType::PerNucleus => self.apply_per_nucleus(collection, nuclei),
            RuleApplicationType::ViaMedian => self.apply_via_median(collection, median, nuclei, mapper),
        }
    }

    /// Evaluates each nucleus on its own profiles.
    pub fn apply_per_nucleus<S>(&self, collection: &RuleSetCollection, nuclei: &[S]) -> Vec<LandmarkResults>
    where
        S: ProfileSource + Sync,
    {
        let results = self.run_batch(nuclei, |nucleus| {
            self.find_all(collection, nucleus)
                .into_iter()
                .map(|(landmark, result)| {
                    let settled = self.settle(&landmark, result);
                    (landmark, settled)
                })
                .collect()
        });
        log_summary(collection, &results);
        results
    }

    /// Evaluates the median once and maps the indices onto each nucleus.
    pub fn apply_via_median<M, S, X>(
        &self,
        collection: &RuleSetCollection,
        median: &M,
        nuclei: &[S],
        mapper: &X,
    ) -> Vec<LandmarkResults>
    where
        M: ProfileSource + ?Sized,
        S: ProfileSource + Sync,
        X: MedianIndexMapper + ?Sized,
    {
        let median_results = self.locate_on_median(collection, median);

        let results = self.run_batch(nuclei, |nucleus| {
            median_results
                .iter()
                .map(|(landmark, located)| {
                    let mapped = match located {
                        Ok((index, len)) => mapper
                            .map_median_index(*index, *len, nucleus)
                            .ok_or(EvalError::NoMatch),
                        Err(err) => Err(err.clone()),
                    };
                    (landmark.clone(), self.settle(landmark, mapped))
                })
                .collect()
        });
        log_summary(collection, &results);
        results
    }

    /// Median indices and lengths per landmark, with the longest-axis
    /// fallback for the reference landmark when enabled.
    fn locate_on_median<M>(
        &self,
        collection: &RuleSetCollection,
        median: &M,
    ) -> BTreeMap<Landmark, EvalResult<(usize, usize)>>
    where
        M: ProfileSource + ?Sized,
    {
        let reference = collection.landmark(OrientationMark::Reference);
        collection
            .landmarks()
            .map(|landmark| {
                let mut located = self.locate(landmark, collection.rule_sets(landmark), median);
                if let Err(err) = &located {
                    if self.config().median_fallback && Some(landmark) == reference {
                        tracing::info!(
                            landmark = %landmark,
                            error = %err,
                            "Median reference not found; falling back to longest axis"
                        );
                        located = self.locate(landmark, &[presets::round_rp()], median);
                    }
                }
                (landmark.clone(), located)
            })
            .collect()
    }

    fn run_batch<S, F>(&self, nuclei: &[S], f: F) -> Vec<LandmarkResults>
    where
        S: Sync,
        F: Fn(&S) -> LandmarkResults + Send + Sync,
    {
        if !self.config().parallel || nuclei.len() < 2 {
            return nuclei.iter().map(f).collect();
        }
        match self.config().threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(|| nuclei.par_iter().map(&f).collect()),
                Err(err) => {
                    tracing::warn!(error = %err, "Could not build thread pool, using global pool");
                    nuclei.par_iter().map(&f).collect()
                }
            },
            None => nuclei.par_iter().map(&f).collect(),
        }
    }
}

fn log_summary(collection: &RuleSetCollection, results: &[LandmarkResults]) {
    let unresolved = results
        .iter()
        .flat_map(|r| r.values())
        .filter(|r| matches!(r, Err(err) if !matches!(err, EvalError::NoRuleSets(_))))
        .count();
    tracing::info!(
        collection = collection.name(),
        application = %collection.application_type(),
        nuclei = results.len(),
        unresolved,
        "Applied rule set collection"
    );
}

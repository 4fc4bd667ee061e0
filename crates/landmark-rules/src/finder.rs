//! Configured landmark lookup.
//!
//! [`LandmarkFinder`] evaluates the rule sets of a collection against the
//! profiles of one object and applies the [`FinderConfig`] policies.

use std::collections::BTreeMap;

use landmark_config::{AmbiguityPolicy, FinderConfig, UnresolvedPolicy};
use landmark_core::error::Result as EvalResult;
use landmark_core::{EvalError, Landmark, OrientationMark, Profile, ProfileSource};

use crate::collection::RuleSetCollection;
use crate::eval::{matching_mask, single_index};
use crate::rule_set::RuleSet;

/// Outcome per landmark; one failure never hides the others.
pub type LandmarkResults = BTreeMap<Landmark, EvalResult<usize>>;

/// Evaluates collections under a [`FinderConfig`].
///
/// # Example
///
/// ```
/// use landmark_config::{AmbiguityPolicy, FinderConfig};
/// use landmark_core::ProfileKind;
/// use landmark_rules::{LandmarkFinder, RuleSetBuilder};
///
/// let finder = LandmarkFinder::new(
///     FinderConfig::new().with_ambiguity(AmbiguityPolicy::LowestIndex),
/// );
/// let low = RuleSetBuilder::new(ProfileKind::Angle).value_is_less_than(100.0).build();
///
/// assert_eq!(finder.evaluate(&low, &vec![180.0, 90.0, 80.0]), Ok(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LandmarkFinder {
    config: FinderConfig,
}

impl LandmarkFinder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Evaluates one rule set, resolving ambiguity per the config.
    pub fn evaluate<P>(&self, rule_set: &RuleSet, profile: &P) -> EvalResult<usize>
    where
        P: Profile + ?Sized,
    {
        if profile.is_empty() {
            return Err(EvalError::EmptyProfile(rule_set.profile_kind()));
        }
        match single_index(matching_mask(rule_set, profile)) {
            Err(EvalError::AmbiguousMatch { candidates })
                if self.config.ambiguity == AmbiguityPolicy::LowestIndex =>
            {
                tracing::debug!(
                    profile = %rule_set.profile_kind(),
                    remaining = candidates.len(),
                    "Ambiguous match resolved to lowest index"
                );
                candidates.first().copied().ok_or(EvalError::NoMatch)
            }
            other => other,
        }
    }

    /// Combines several rule sets for one landmark.
    ///
    /// Each rule set runs against the profile of its own kind. The profiles
    /// must share one index space, and every rule set must select the same
    /// index. Returns the index and the profile length.
    pub(crate) fn locate<S>(
        &self,
        landmark: &Landmark,
        rule_sets: &[RuleSet],
        source: &S,
    ) -> EvalResult<(usize, usize)>
    where
        S: ProfileSource + ?Sized,
    {
        if rule_sets.is_empty() {
            return Err(EvalError::NoRuleSets(landmark.clone()));
        }

        let mut profiles = Vec::with_capacity(rule_sets.len());
        for rule_set in rule_sets {
            let kind = rule_set.profile_kind();
            let profile = source.profile(kind).ok_or(EvalError::MissingProfile(kind))?;
            profiles.push(profile);
        }

        let expected = profiles[0].len();
        for (rule_set, profile) in rule_sets.iter().zip(&profiles) {
            if profile.len() != expected {
                return Err(EvalError::ProfileLengthMismatch {
                    kind: rule_set.profile_kind(),
                    expected,
                    found: profile.len(),
                });
            }
        }

        let indices = rule_sets
            .iter()
            .zip(&profiles)
            .map(|(rule_set, profile)| self.evaluate(rule_set, *profile))
            .collect::<EvalResult<Vec<usize>>>()?;

        match indices.split_first() {
            Some((&first, rest)) if rest.iter().all(|&i| i == first) => Ok((first, expected)),
            _ => Err(EvalError::InconsistentLandmark {
                landmark: landmark.clone(),
                indices,
            }),
        }
    }

    /// Locates `landmark` in `source`.
    pub fn find<S>(&self, collection: &RuleSetCollection, landmark: &Landmark, source: &S) -> EvalResult<usize>
    where
        S: ProfileSource + ?Sized,
    {
        self.locate(landmark, collection.rule_sets(landmark), source)
            .map(|(index, _)| index)
    }

    /// Locates the landmark bound to `mark`.
    pub fn find_mark<S>(
        &self,
        collection: &RuleSetCollection,
        mark: OrientationMark,
        source: &S,
    ) -> EvalResult<usize>
    where
        S: ProfileSource + ?Sized,
    {
        let landmark = collection
            .landmark(mark)
            .ok_or(EvalError::UnboundMark(mark))?;
        self.find(collection, landmark, source)
    }

    /// Locates every landmark of the collection.
    pub fn find_all<S>(&self, collection: &RuleSetCollection, source: &S) -> LandmarkResults
    where
        S: ProfileSource + ?Sized,
    {
        collection
            .landmarks()
            .map(|landmark| {
                let result = self.find(collection, landmark, source);
                if let Err(err) = &result {
                    tracing::debug!(landmark = %landmark, error = %err, "Landmark not resolved");
                }
                (landmark.clone(), result)
            })
            .collect()
    }

    /// Applies the unresolved-landmark policy to a per-nucleus result.
    ///
    /// Landmarks without rule sets are left alone: their positions come
    /// from outside the rule engine.
    pub(crate) fn settle(&self, landmark: &Landmark, result: EvalResult<usize>) -> EvalResult<usize> {
        match (result, self.config.unresolved) {
            (Err(EvalError::NoRuleSets(l)), _) => Err(EvalError::NoRuleSets(l)),
            (Err(err), UnresolvedPolicy::ZeroIndex) => {
                tracing::debug!(landmark = %landmark, error = %err, "Placing landmark at index 0");
                Ok(0)
            }
            (result, _) => result,
        }
    }
}

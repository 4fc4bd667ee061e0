//! Orientation resolution: which landmarks define up/down and left/right.

use landmark_core::error::Result as EvalResult;
use landmark_core::{Landmark, OrientationMark, PriorityAxis, ProfileSource};

use crate::collection::RuleSetCollection;
use crate::finder::{LandmarkFinder, LandmarkResults};

/// Landmarks used to orient a nucleus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    /// Axis whose landmarks govern rotation, if any side mark is bound.
    pub axis: Option<PriorityAxis>,
    /// Bound marks of the governing axis.
    pub governing: Vec<(OrientationMark, Landmark)>,
    /// Bound marks of the other axis; shown but not used for rotation.
    pub informational: Vec<(OrientationMark, Landmark)>,
}

impl RuleSetCollection {
    /// Axis that governs rotation.
    ///
    /// A single asymmetric axis governs on its own. When both are
    /// asymmetric the priority axis decides, falling back to Y.
    pub fn governing_axis(&self) -> Option<PriorityAxis> {
        match (self.is_asymmetric_x(), self.is_asymmetric_y()) {
            (true, false) => Some(PriorityAxis::X),
            (false, true) => Some(PriorityAxis::Y),
            (true, true) => Some(self.priority_axis().unwrap_or(PriorityAxis::Y)),
            (false, false) => None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        let bound_on = |axis: PriorityAxis| -> Vec<(OrientationMark, Landmark)> {
            axis.marks()
                .into_iter()
                .filter_map(|mark| self.landmark(mark).map(|l| (mark, l.clone())))
                .collect()
        };

        match self.governing_axis() {
            Some(axis) => Orientation {
                axis: Some(axis),
                governing: bound_on(axis),
                informational: bound_on(axis.other()),
            },
            None => Orientation {
                axis: None,
                governing: Vec::new(),
                informational: Vec::new(),
            },
        }
    }

    /// Locates `landmark` with the default finder.
    pub fn resolve<S>(&self, landmark: &Landmark, profiles: &S) -> EvalResult<usize>
    where
        S: ProfileSource + ?Sized,
    {
        LandmarkFinder::default().find(self, landmark, profiles)
    }

    /// Locates the landmark bound to `mark` with the default finder.
    ///
    /// # Example
    ///
    /// ```
    /// use landmark_core::{OrientationMark, ProfileKind, ProfileMap};
    /// use landmark_rules::presets;
    ///
    /// let round = presets::round();
    /// let nucleus = ProfileMap::new()
    ///     .with(ProfileKind::Diameter, vec![10.0, 12.0, 15.0, 11.0]);
    ///
    /// assert_eq!(round.resolve_mark(OrientationMark::Reference, &nucleus), Ok(2));
    /// ```
    pub fn resolve_mark<S>(&self, mark: OrientationMark, profiles: &S) -> EvalResult<usize>
    where
        S: ProfileSource + ?Sized,
    {
        LandmarkFinder::default().find_mark(self, mark, profiles)
    }

    /// Locates every landmark with the default finder.
    pub fn resolve_all<S>(&self, profiles: &S) -> LandmarkResults
    where
        S: ProfileSource + ?Sized,
    {
        LandmarkFinder::default().find_all(self, profiles)
    }
}

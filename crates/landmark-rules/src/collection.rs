//! Named rule collections for one nucleus type.
//!
//! A [`RuleSetCollection`] maps landmarks to the rule sets that find them,
//! binds orientation marks to landmarks, and carries the display and
//! application settings for the nucleus type.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use landmark_core::{
    Landmark, MeasurementName, OrientationMark, PriorityAxis, RuleApplicationType, Version,
};

use crate::error::{Result, RuleError};
use crate::rule_set::RuleSet;

/// Rule sets and orientation bindings for one nucleus type.
///
/// Every landmark bound to an orientation mark has an entry in the
/// landmark map; an empty list means the position is supplied externally.
/// `REFERENCE` is always bound.
///
/// Equality compares the content and ignores the producer version.
///
/// # Example
///
/// ```
/// use landmark_core::{Landmark, OrientationMark, ProfileKind, RuleApplicationType};
/// use landmark_rules::{RuleSetBuilder, RuleSetCollection};
///
/// let tail = Landmark::new("Tail socket");
/// let mut rsc = RuleSetCollection::new("Pig sperm", tail.clone(), RuleApplicationType::ViaMedian);
/// rsc.add_rule_set_for(&tail, RuleSetBuilder::new(ProfileKind::Angle).is_minimum().build());
/// rsc.bind(OrientationMark::Bottom, tail.clone());
///
/// assert_eq!(rsc.landmark(OrientationMark::Reference), Some(&tail));
/// assert!(rsc.is_asymmetric_y());
/// ```
#[derive(Debug, Clone)]
pub struct RuleSetCollection {
    name: String,
    landmarks: BTreeMap<Landmark, Vec<RuleSet>>,
    orientation: BTreeMap<OrientationMark, Landmark>,
    priority_axis: Option<PriorityAxis>,
    application_type: RuleApplicationType,
    measurements: BTreeSet<MeasurementName>,
    version: Version,
}

impl RuleSetCollection {
    /// Creates a collection with `reference` bound to
    /// [`OrientationMark::Reference`].
    pub fn new(
        name: impl Into<String>,
        reference: Landmark,
        application_type: RuleApplicationType,
    ) -> Self {
        let mut collection = Self {
            name: name.into(),
            landmarks: BTreeMap::new(),
            orientation: BTreeMap::new(),
            priority_axis: None,
            application_type,
            measurements: BTreeSet::new(),
            version: Version::CURRENT,
        };
        collection.bind(OrientationMark::Reference, reference);
        collection
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn application_type(&self) -> RuleApplicationType {
        self.application_type
    }

    pub fn set_application_type(&mut self, application_type: RuleApplicationType) {
        self.application_type = application_type;
    }

    pub fn priority_axis(&self) -> Option<PriorityAxis> {
        self.priority_axis
    }

    pub fn set_priority_axis(&mut self, axis: Option<PriorityAxis>) {
        self.priority_axis = axis;
    }

    /// Sets the priority axis, builder style.
    pub fn with_priority_axis(mut self, axis: PriorityAxis) -> Self {
        self.priority_axis = Some(axis);
        self
    }

    /// Version of the software that produced the collection.
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// Binds `mark` to `landmark`, replacing any previous binding.
    ///
    /// A landmark seen for the first time starts with no rule sets.
    pub fn bind(&mut self, mark: OrientationMark, landmark: Landmark) {
        self.landmarks.entry(landmark.clone()).or_default();
        self.orientation.insert(mark, landmark);
    }

    /// Binds `mark` to `landmark`, builder style.
    pub fn with_binding(mut self, mark: OrientationMark, landmark: Landmark) -> Self {
        self.bind(mark, landmark);
        self
    }

    /// Landmark bound to `mark`.
    pub fn landmark(&self, mark: OrientationMark) -> Option<&Landmark> {
        self.orientation.get(&mark)
    }

    /// Landmark bound to `mark`, or [`RuleError::UnboundMark`].
    pub fn require_landmark(&self, mark: OrientationMark) -> Result<&Landmark> {
        self.landmark(mark).ok_or(RuleError::UnboundMark(mark))
    }

    /// Bound marks and their landmarks, in mark order.
    pub fn orientation_marks(&self) -> impl Iterator<Item = (OrientationMark, &Landmark)> + '_ {
        self.orientation.iter().map(|(mark, landmark)| (*mark, landmark))
    }

    /// All landmarks, in name order.
    pub fn landmarks(&self) -> impl Iterator<Item = &Landmark> + '_ {
        self.landmarks.keys()
    }

    /// Rule sets for `landmark`; empty when unknown or externally supplied.
    pub fn rule_sets(&self, landmark: &Landmark) -> &[RuleSet] {
        self.landmarks
            .get(landmark)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Rule sets for the landmark bound to `mark`.
    pub fn rule_sets_for_mark(&self, mark: OrientationMark) -> &[RuleSet] {
        self.landmark(mark)
            .map(|landmark| self.rule_sets(landmark))
            .unwrap_or_default()
    }

    pub fn has_rule_sets(&self, landmark: &Landmark) -> bool {
        !self.rule_sets(landmark).is_empty()
    }

    pub fn contains_landmark(&self, landmark: &Landmark) -> bool {
        self.landmarks.contains_key(landmark)
    }

    /// Whether no landmark has any rule set.
    pub fn is_empty(&self) -> bool {
        self.landmarks.values().all(Vec::is_empty)
    }

    /// Appends a rule set to `landmark`, registering the landmark if new.
    pub fn add_rule_set_for(&mut self, landmark: &Landmark, rule_set: RuleSet) {
        self.landmarks
            .entry(landmark.clone())
            .or_default()
            .push(rule_set);
    }

    /// Appends a rule set to the landmark bound to `mark`.
    pub fn add_rule_set(&mut self, mark: OrientationMark, rule_set: RuleSet) -> Result<()> {
        let landmark = self.require_landmark(mark)?.clone();
        self.add_rule_set_for(&landmark, rule_set);
        Ok(())
    }

    /// Replaces the rule sets of the landmark bound to `mark`.
    pub fn set_rule_sets(&mut self, mark: OrientationMark, rule_sets: Vec<RuleSet>) -> Result<()> {
        let landmark = self.require_landmark(mark)?.clone();
        self.landmarks.insert(landmark, rule_sets);
        Ok(())
    }

    /// Removes every rule set of the landmark bound to `mark`, leaving its
    /// position to be supplied externally.
    pub fn clear_rule_sets(&mut self, mark: OrientationMark) -> Result<Vec<RuleSet>> {
        let landmark = self.require_landmark(mark)?.clone();
        Ok(self
            .landmarks
            .get_mut(&landmark)
            .map(std::mem::take)
            .unwrap_or_default())
    }

    /// Removes a landmark, its rule sets, and every mark bound to it.
    ///
    /// The reference landmark cannot be removed; its rule sets are
    /// cleared instead.
    pub fn remove_rule_sets(&mut self, landmark: &Landmark) -> Vec<RuleSet> {
        if self.landmark(OrientationMark::Reference) == Some(landmark) {
            return self
                .landmarks
                .get_mut(landmark)
                .map(std::mem::take)
                .unwrap_or_default();
        }
        self.orientation.retain(|_, bound| bound != landmark);
        self.landmarks.remove(landmark).unwrap_or_default()
    }

    pub fn measurements(&self) -> &BTreeSet<MeasurementName> {
        &self.measurements
    }

    /// Adds a measurement; returns false if it was already present.
    pub fn add_measurement(&mut self, measurement: MeasurementName) -> bool {
        self.measurements.insert(measurement)
    }

    /// Adds several measurements, builder style.
    pub fn with_measurements(mut self, measurements: impl IntoIterator<Item = MeasurementName>) -> Self {
        self.measurements.extend(measurements);
        self
    }

    /// Whether either mark of `axis` is bound.
    pub fn is_asymmetric_on(&self, axis: PriorityAxis) -> bool {
        axis.marks()
            .into_iter()
            .any(|mark| self.orientation.contains_key(&mark))
    }

    /// Whether LEFT or RIGHT is bound.
    pub fn is_asymmetric_x(&self) -> bool {
        self.is_asymmetric_on(PriorityAxis::X)
    }

    /// Whether TOP or BOTTOM is bound.
    pub fn is_asymmetric_y(&self) -> bool {
        self.is_asymmetric_on(PriorityAxis::Y)
    }

    /// Whether the nucleus is asymmetric on either axis.
    pub fn is_asymmetric(&self) -> bool {
        self.is_asymmetric_x() || self.is_asymmetric_y()
    }

    /// Independent copy, including every rule set.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl PartialEq for RuleSetCollection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.landmarks == other.landmarks
            && self.orientation == other.orientation
            && self.priority_axis == other.priority_axis
            && self.application_type == other.application_type
            && self.measurements == other.measurements
    }
}

impl fmt::Display for RuleSetCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (version {})", self.name, self.version)?;
        writeln!(f, "  application: {}", self.application_type)?;
        if let Some(axis) = self.priority_axis {
            writeln!(f, "  priority axis: {axis}")?;
        }
        for (mark, landmark) in &self.orientation {
            writeln!(f, "  {mark} -> {landmark}")?;
        }
        for (landmark, rule_sets) in &self.landmarks {
            if rule_sets.is_empty() {
                writeln!(f, "  {landmark}: supplied externally")?;
            }
            for rule_set in rule_sets {
                writeln!(f, "  {landmark}: {rule_set}")?;
            }
        }
        if !self.measurements.is_empty() {
            let names: Vec<&str> = self.measurements.iter().map(MeasurementName::as_str).collect();
            writeln!(f, "  measurements: {}", names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

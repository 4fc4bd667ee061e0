//! Names of the measurements valid for a nucleus type.
//!
//! Measurement computation lives elsewhere; the rule engine only stores the
//! names so that a collection can declare which measurements apply.

use std::fmt;

/// Name of a measurement, e.g. "Area".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementName(String);

impl MeasurementName {
    pub const AREA: &'static str = "Area";
    pub const PERIMETER: &'static str = "Perimeter";
    pub const CIRCULARITY: &'static str = "Circularity";
    pub const MIN_DIAMETER: &'static str = "Min diameter";
    pub const ELLIPTICITY: &'static str = "Ellipticity";
    pub const ASPECT: &'static str = "Aspect ratio";
    pub const ELONGATION: &'static str = "Elongation";
    pub const REGULARITY: &'static str = "Regularity";
    pub const VARIABILITY: &'static str = "Difference from median";
    pub const BOUNDING_HEIGHT: &'static str = "Bounding height";
    pub const BOUNDING_WIDTH: &'static str = "Bounding width";
    pub const HOOK_LENGTH: &'static str = "Length of hook";
    pub const BODY_WIDTH: &'static str = "Width of body";

    /// Creates a name. Surrounding whitespace is trimmed; blank names are
    /// rejected.
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Measurements made on any component outline.
    pub fn component() -> Vec<MeasurementName> {
        Self::from_static(&[Self::AREA, Self::PERIMETER, Self::CIRCULARITY])
    }

    /// Measurements valid for round nuclei; the base set of every preset.
    pub fn round_nucleus() -> Vec<MeasurementName> {
        let mut list = Self::component();
        list.extend(Self::from_static(&[
            Self::MIN_DIAMETER,
            Self::ELLIPTICITY,
            Self::ASPECT,
            Self::ELONGATION,
            Self::REGULARITY,
            Self::VARIABILITY,
            Self::BOUNDING_HEIGHT,
            Self::BOUNDING_WIDTH,
        ]));
        list
    }

    /// Round nucleus measurements plus the rodent sperm hook metrics.
    pub fn rodent_sperm() -> Vec<MeasurementName> {
        let mut list = Self::round_nucleus();
        list.extend(Self::from_static(&[Self::HOOK_LENGTH, Self::BODY_WIDTH]));
        list
    }

    fn from_static(names: &[&'static str]) -> Vec<MeasurementName> {
        names.iter().map(|n| MeasurementName(n.to_string())).collect()
    }
}

impl fmt::Display for MeasurementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

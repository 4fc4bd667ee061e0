//! Landmarks and the orientation roles they can be bound to.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::UnknownNameError;

/// A named biological reference point, such as "Tip of hook".
///
/// A landmark denotes a role, not a position: its index is only known after
/// the rules bound to it have been evaluated against a concrete nucleus.
/// Landmarks are identified by name.
///
/// # Example
///
/// ```
/// use landmark_core::Landmark;
///
/// let tip = Landmark::new("Tip of hook");
/// assert_eq!(tip.name(), "Tip of hook");
/// assert_eq!(tip, Landmark::new("Tip of hook"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Landmark {
    name: Arc<str>,
}

impl Landmark {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Landmark({:?})", &*self.name)
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Landmark {
    fn from(name: &str) -> Self {
        Landmark::new(name)
    }
}

/// Roles used to orient a nucleus. Each role may be bound to a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrientationMark {
    /// Anchors index 0 of every profile. Always bound.
    Reference,
    Left,
    Right,
    Top,
    Bottom,
    /// Secondary horizontal landmark.
    X,
    /// Secondary vertical landmark.
    Y,
}

impl OrientationMark {
    pub const ALL: [OrientationMark; 7] = [
        OrientationMark::Reference,
        OrientationMark::Left,
        OrientationMark::Right,
        OrientationMark::Top,
        OrientationMark::Bottom,
        OrientationMark::X,
        OrientationMark::Y,
    ];

    /// Persisted name.
    pub fn name(self) -> &'static str {
        match self {
            OrientationMark::Reference => "REFERENCE",
            OrientationMark::Left => "LEFT",
            OrientationMark::Right => "RIGHT",
            OrientationMark::Top => "TOP",
            OrientationMark::Bottom => "BOTTOM",
            OrientationMark::X => "X",
            OrientationMark::Y => "Y",
        }
    }

    /// The asymmetry axis this mark belongs to, if any.
    pub fn axis(self) -> Option<PriorityAxis> {
        match self {
            OrientationMark::Left | OrientationMark::Right => Some(PriorityAxis::X),
            OrientationMark::Top | OrientationMark::Bottom => Some(PriorityAxis::Y),
            OrientationMark::Reference | OrientationMark::X | OrientationMark::Y => None,
        }
    }
}

impl fmt::Display for OrientationMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrientationMark {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrientationMark::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownNameError::new("orientation mark", s))
    }
}

/// Which asymmetry axis governs rotation when both are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityAxis {
    /// Left/right.
    X,
    /// Top/bottom.
    Y,
}

impl PriorityAxis {
    pub fn name(self) -> &'static str {
        match self {
            PriorityAxis::X => "X",
            PriorityAxis::Y => "Y",
        }
    }

    /// The pair of orientation marks defining this axis.
    pub fn marks(self) -> [OrientationMark; 2] {
        match self {
            PriorityAxis::X => [OrientationMark::Left, OrientationMark::Right],
            PriorityAxis::Y => [OrientationMark::Top, OrientationMark::Bottom],
        }
    }

    pub fn other(self) -> PriorityAxis {
        match self {
            PriorityAxis::X => PriorityAxis::Y,
            PriorityAxis::Y => PriorityAxis::X,
        }
    }
}

impl fmt::Display for PriorityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityAxis {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(PriorityAxis::X),
            "Y" => Ok(PriorityAxis::Y),
            _ => Err(UnknownNameError::new("priority axis", s)),
        }
    }
}

/// How the rules of a collection are applied to a population of nuclei.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RuleApplicationType {
    /// Evaluate against each nucleus' own profiles.
    PerNucleus,
    /// Evaluate once against the median profile, then map the index onto
    /// every nucleus.
    #[default]
    ViaMedian,
}

impl RuleApplicationType {
    pub fn name(self) -> &'static str {
        match self {
            RuleApplicationType::PerNucleus => "PER_NUCLEUS",
            RuleApplicationType::ViaMedian => "VIA_MEDIAN",
        }
    }
}

impl fmt::Display for RuleApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleApplicationType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PER_NUCLEUS" => Ok(RuleApplicationType::PerNucleus),
            "VIA_MEDIAN" => Ok(RuleApplicationType::ViaMedian),
            _ => Err(UnknownNameError::new("rule application type", s)),
        }
    }
}

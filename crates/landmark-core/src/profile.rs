//! Circular profiles measured around a nucleus outline.
//!
//! A profile holds one sample per border point, in border order. Index 0
//! follows index `len - 1`, so every positional computation here wraps.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::error::UnknownNameError;

/// Read-only circular sequence of samples.
///
/// Implemented for slices and vectors of any primitive numeric type.
///
/// # Example
///
/// ```
/// use landmark_core::Profile;
///
/// let angles = vec![180.0_f32, 90.0, 170.0, 175.0];
/// assert_eq!(angles.len(), 4);
/// assert_eq!(angles.value_at(1), 90.0);
/// assert_eq!(angles.circular_distance(0, 3), 1);
/// ```
pub trait Profile {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Value at `index`. `index` must be below [`len`](Profile::len).
    fn value_at(&self, index: usize) -> f64;

    /// Whether the profile holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wraps a signed offset into `0..len`.
    fn wrap(&self, index: isize) -> usize {
        wrap_index(index, self.len())
    }

    /// Position of `index` as a fraction of the perimeter.
    fn fraction_of(&self, index: usize) -> f64 {
        index as f64 / self.len() as f64
    }

    /// Distance between two indices going the short way round.
    fn circular_distance(&self, a: usize, b: usize) -> usize {
        circular_distance(a, b, self.len())
    }

    /// Copies the samples out as `f64`.
    fn to_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.value_at(i)).collect()
    }
}

impl<T: ToPrimitive> Profile for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn value_at(&self, index: usize) -> f64 {
        self[index].to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: ToPrimitive> Profile for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn value_at(&self, index: usize) -> f64 {
        self.as_slice().value_at(index)
    }
}

/// Wraps a signed index into `0..len`. Returns 0 for an empty range.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

/// Circular distance `min(|a-b|, len-|a-b|)`.
pub fn circular_distance(a: usize, b: usize, len: usize) -> usize {
    let d = a.abs_diff(b);
    if len == 0 {
        return d;
    }
    let d = d % len;
    d.min(len - d)
}

/// Kind of measurement a profile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ProfileKind {
    /// Interior angle at each border point.
    Angle,
    /// Distance across the centre of mass from each border point.
    Diameter,
    /// Distance from the centre of mass to each border point.
    Radius,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [ProfileKind::Angle, ProfileKind::Diameter, ProfileKind::Radius];

    /// Persisted name.
    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::Angle => "ANGLE",
            ProfileKind::Diameter => "DIAMETER",
            ProfileKind::Radius => "RADIUS",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownNameError::new("profile kind", s))
    }
}

/// Supplies the profiles of one object (a nucleus or a median), by kind.
///
/// All profiles of one source are sampled from the same border points and
/// therefore share one index space.
pub trait ProfileSource {
    /// The profile of the given kind, if measured.
    fn profile(&self, kind: ProfileKind) -> Option<&dyn Profile>;
}

/// Owned profiles keyed by kind.
///
/// # Example
///
/// ```
/// use landmark_core::{ProfileKind, ProfileMap, ProfileSource};
///
/// let nucleus = ProfileMap::new()
///     .with(ProfileKind::Angle, vec![180.0, 90.0, 170.0])
///     .with(ProfileKind::Diameter, vec![10.0, 12.0, 11.0]);
///
/// assert!(nucleus.profile(ProfileKind::Angle).is_some());
/// assert!(nucleus.profile(ProfileKind::Radius).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileMap {
    profiles: BTreeMap<ProfileKind, Vec<f64>>,
}

impl ProfileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile, replacing any previous one of the same kind.
    pub fn with(mut self, kind: ProfileKind, values: Vec<f64>) -> Self {
        self.insert(kind, values);
        self
    }

    pub fn insert(&mut self, kind: ProfileKind, values: Vec<f64>) -> Option<Vec<f64>> {
        self.profiles.insert(kind, values)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProfileKind> + '_ {
        self.profiles.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileSource for ProfileMap {
    fn profile(&self, kind: ProfileKind) -> Option<&dyn Profile> {
        self.profiles.get(&kind).map(|p| p as &dyn Profile)
    }
}

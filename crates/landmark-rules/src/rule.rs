//! Rules: single predicates that narrow a candidate mask.
//!
//! Each [`Rule`] variant carries its parameters as typed fields. The flat
//! numeric form used by persisted documents is produced by
//! [`Rule::values`] and read back by [`Rule::from_values`].

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{Result, RuleError};

/// Window or run length, in profile indices. Always at least 1.
///
/// # Example
///
/// ```
/// use landmark_rules::Window;
///
/// assert_eq!(Window::new(3).map(Window::get), Some(3));
/// assert!(Window::new(0).is_none());
/// assert_eq!(Window::clamped(0).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Window(NonZeroUsize);

impl Window {
    /// Window used by the builder when none is given.
    pub const DEFAULT: Window = Window(NonZeroUsize::MIN.saturating_add(4));

    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(n) => Some(Window(n)),
            None => None,
        }
    }

    /// Window of `size`, raising zero to one.
    pub const fn clamped(size: usize) -> Self {
        Window(NonZeroUsize::MIN.saturating_add(size.saturating_sub(1)))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a parameter slot is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Persisted as `1` or `0`.
    Flag,
    /// Any real value.
    Number,
    /// Position around the perimeter, expected in `[0, 1]`.
    Fraction,
    /// Positive whole number of indices.
    Window,
}

/// The closed set of rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    IsZeroIndex,
    IsLocalMinimum,
    IsLocalMaximum,
    IsMinimum,
    IsMaximum,
    IndexIsLessThan,
    IndexIsMoreThan,
    ValueIsLessThan,
    ValueIsMoreThan,
    IsConstantRegion,
    FirstTrue,
    LastTrue,
    IndexIsWithinFractionOf,
    IndexIsOutsideFractionOf,
    Invert,
}

impl RuleKind {
    pub const ALL: [RuleKind; 15] = [
        RuleKind::IsZeroIndex,
        RuleKind::IsLocalMinimum,
        RuleKind::IsLocalMaximum,
        RuleKind::IsMinimum,
        RuleKind::IsMaximum,
        RuleKind::IndexIsLessThan,
        RuleKind::IndexIsMoreThan,
        RuleKind::ValueIsLessThan,
        RuleKind::ValueIsMoreThan,
        RuleKind::IsConstantRegion,
        RuleKind::FirstTrue,
        RuleKind::LastTrue,
        RuleKind::IndexIsWithinFractionOf,
        RuleKind::IndexIsOutsideFractionOf,
        RuleKind::Invert,
    ];

    /// Persisted name.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::IsZeroIndex => "IS_ZERO_INDEX",
            RuleKind::IsLocalMinimum => "IS_LOCAL_MINIMUM",
            RuleKind::IsLocalMaximum => "IS_LOCAL_MAXIMUM",
            RuleKind::IsMinimum => "IS_MINIMUM",
            RuleKind::IsMaximum => "IS_MAXIMUM",
            RuleKind::IndexIsLessThan => "INDEX_IS_LESS_THAN",
            RuleKind::IndexIsMoreThan => "INDEX_IS_MORE_THAN",
            RuleKind::ValueIsLessThan => "VALUE_IS_LESS_THAN",
            RuleKind::ValueIsMoreThan => "VALUE_IS_MORE_THAN",
            RuleKind::IsConstantRegion => "IS_CONSTANT_REGION",
            RuleKind::FirstTrue => "FIRST_TRUE",
            RuleKind::LastTrue => "LAST_TRUE",
            RuleKind::IndexIsWithinFractionOf => "INDEX_IS_WITHIN_FRACTION_OF",
            RuleKind::IndexIsOutsideFractionOf => "INDEX_IS_OUTSIDE_FRACTION_OF",
            RuleKind::Invert => "INVERT",
        }
    }

    /// Parameter slots, in persisted order.
    pub fn params(self) -> &'static [ParamType] {
        use ParamType::*;
        match self {
            RuleKind::IsZeroIndex
            | RuleKind::IsMinimum
            | RuleKind::IsMaximum
            | RuleKind::FirstTrue
            | RuleKind::LastTrue => &[Flag],
            RuleKind::IsLocalMinimum | RuleKind::IsLocalMaximum => &[Flag, Window],
            RuleKind::ValueIsLessThan | RuleKind::ValueIsMoreThan => &[Number],
            RuleKind::IndexIsLessThan
            | RuleKind::IndexIsMoreThan
            | RuleKind::IndexIsWithinFractionOf
            | RuleKind::IndexIsOutsideFractionOf => &[Fraction],
            RuleKind::IsConstantRegion => &[Number, Window, Number],
            RuleKind::Invert => &[],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        RuleKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| RuleError::UnknownKind(s.to_string()))
    }
}

/// A single predicate over a profile and the current candidate mask.
///
/// `keep = true` selects the indices the predicate describes; `keep = false`
/// selects the remaining candidates instead. Rules compare structurally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Index 0 of the profile.
    IsZeroIndex { keep: bool },
    /// Candidate with the lowest value.
    IsMinimum { keep: bool },
    /// Candidate with the highest value.
    IsMaximum { keep: bool },
    /// Local minima of the circular profile over `window` neighbours.
    IsLocalMinimum { keep: bool, window: Window },
    /// Local maxima of the circular profile over `window` neighbours.
    IsLocalMaximum { keep: bool, window: Window },
    ValueIsLessThan { threshold: f64 },
    ValueIsMoreThan { threshold: f64 },
    IndexIsLessThan { fraction: f64 },
    IndexIsMoreThan { fraction: f64 },
    /// Runs of at least `min_length` indices within `epsilon` of `value`.
    IsConstantRegion {
        value: f64,
        min_length: Window,
        epsilon: f64,
    },
    /// Lowest candidate.
    FirstTrue { keep: bool },
    /// Highest candidate.
    LastTrue { keep: bool },
    /// Widens the candidates by a fraction of the perimeter each way.
    IndexIsWithinFractionOf { fraction: f64 },
    /// Indices further than a fraction of the perimeter from every candidate.
    IndexIsOutsideFractionOf { fraction: f64 },
    Invert,
}

/// Non-fatal problems with rule parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleWarning {
    /// Fraction parameter outside `[0, 1]`; evaluation uses it as given.
    FractionOutOfRange { kind: RuleKind, fraction: f64 },
    /// NaN or infinite numeric parameter.
    NonFinite { kind: RuleKind, value: f64 },
}

impl fmt::Display for RuleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleWarning::FractionOutOfRange { kind, fraction } => {
                write!(f, "{kind}: fraction {fraction} is outside [0, 1]")
            }
            RuleWarning::NonFinite { kind, value } => {
                write!(f, "{kind}: parameter {value} is not finite")
            }
        }
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::IsZeroIndex { .. } => RuleKind::IsZeroIndex,
            Rule::IsMinimum { .. } => RuleKind::IsMinimum,
            Rule::IsMaximum { .. } => RuleKind::IsMaximum,
            Rule::IsLocalMinimum { .. } => RuleKind::IsLocalMinimum,
            Rule::IsLocalMaximum { .. } => RuleKind::IsLocalMaximum,
            Rule::ValueIsLessThan { .. } => RuleKind::ValueIsLessThan,
            Rule::ValueIsMoreThan { .. } => RuleKind::ValueIsMoreThan,
            Rule::IndexIsLessThan { .. } => RuleKind::IndexIsLessThan,
            Rule::IndexIsMoreThan { .. } => RuleKind::IndexIsMoreThan,
            Rule::IsConstantRegion { .. } => RuleKind::IsConstantRegion,
            Rule::FirstTrue { .. } => RuleKind::FirstTrue,
            Rule::LastTrue { .. } => RuleKind::LastTrue,
            Rule::IndexIsWithinFractionOf { .. } => RuleKind::IndexIsWithinFractionOf,
            Rule::IndexIsOutsideFractionOf { .. } => RuleKind::IndexIsOutsideFractionOf,
            Rule::Invert => RuleKind::Invert,
        }
    }

    /// Parameters in persisted order; flags become `1`/`0`.
    pub fn values(&self) -> SmallVec<[f64; 3]> {
        let mut out = SmallVec::new();
        match *self {
            Rule::IsZeroIndex { keep }
            | Rule::IsMinimum { keep }
            | Rule::IsMaximum { keep }
            | Rule::FirstTrue { keep }
            | Rule::LastTrue { keep } => out.push(flag(keep)),
            Rule::IsLocalMinimum { keep, window } | Rule::IsLocalMaximum { keep, window } => {
                out.push(flag(keep));
                out.push(window.get() as f64);
            }
            Rule::ValueIsLessThan { threshold } | Rule::ValueIsMoreThan { threshold } => {
                out.push(threshold)
            }
            Rule::IndexIsLessThan { fraction }
            | Rule::IndexIsMoreThan { fraction }
            | Rule::IndexIsWithinFractionOf { fraction }
            | Rule::IndexIsOutsideFractionOf { fraction } => out.push(fraction),
            Rule::IsConstantRegion {
                value,
                min_length,
                epsilon,
            } => {
                out.push(value);
                out.push(min_length.get() as f64);
                out.push(epsilon);
            }
            Rule::Invert => {}
        }
        out
    }

    /// Rebuilds a rule from its persisted parameters.
    ///
    /// # Errors
    ///
    /// [`RuleError::Malformed`] when the parameter count differs from the
    /// kind's arity, a flag is not `0`/`1`, or a window is not a positive
    /// whole number.
    pub fn from_values(kind: RuleKind, values: &[f64]) -> Result<Rule> {
        let params = kind.params();
        if values.len() != params.len() {
            return Err(RuleError::malformed(
                kind,
                format!("expected {} values, found {}", params.len(), values.len()),
            ));
        }

        let as_flag = |i: usize| -> Result<bool> {
            match values[i] {
                v if v == 1.0 => Ok(true),
                v if v == 0.0 => Ok(false),
                v => Err(RuleError::malformed(
                    kind,
                    format!("value {} at position {i} is not a flag (0 or 1)", v),
                )),
            }
        };
        let as_window = |i: usize| -> Result<Window> {
            let v = values[i];
            if v.is_finite() && v >= 1.0 && v.fract() == 0.0 {
                Ok(Window::clamped(v as usize))
            } else {
                Err(RuleError::malformed(
                    kind,
                    format!("value {v} at position {i} is not a positive whole number"),
                ))
            }
        };

        let rule = match kind {
            RuleKind::IsZeroIndex => Rule::IsZeroIndex { keep: as_flag(0)? },
            RuleKind::IsMinimum => Rule::IsMinimum { keep: as_flag(0)? },
            RuleKind::IsMaximum => Rule::IsMaximum { keep: as_flag(0)? },
            RuleKind::FirstTrue => Rule::FirstTrue { keep: as_flag(0)? },
            RuleKind::LastTrue => Rule::LastTrue { keep: as_flag(0)? },
            RuleKind::IsLocalMinimum => Rule::IsLocalMinimum {
                keep: as_flag(0)?,
                window: as_window(1)?,
            },
            RuleKind::IsLocalMaximum => Rule::IsLocalMaximum {
                keep: as_flag(0)?,
                window: as_window(1)?,
            },
            RuleKind::ValueIsLessThan => Rule::ValueIsLessThan {
                threshold: values[0],
            },
            RuleKind::ValueIsMoreThan => Rule::ValueIsMoreThan {
                threshold: values[0],
            },
            RuleKind::IndexIsLessThan => Rule::IndexIsLessThan {
                fraction: values[0],
            },
            RuleKind::IndexIsMoreThan => Rule::IndexIsMoreThan {
                fraction: values[0],
            },
            RuleKind::IndexIsWithinFractionOf => Rule::IndexIsWithinFractionOf {
                fraction: values[0],
            },
            RuleKind::IndexIsOutsideFractionOf => Rule::IndexIsOutsideFractionOf {
                fraction: values[0],
            },
            RuleKind::IsConstantRegion => Rule::IsConstantRegion {
                value: values[0],
                min_length: as_window(1)?,
                epsilon: values[2],
            },
            RuleKind::Invert => Rule::Invert,
        };
        Ok(rule)
    }

    /// Parameter problems that do not stop evaluation.
    pub fn warnings(&self) -> Vec<RuleWarning> {
        let kind = self.kind();
        let mut warnings = Vec::new();
        for (value, param) in self.values().into_iter().zip(kind.params()) {
            if !value.is_finite() {
                warnings.push(RuleWarning::NonFinite { kind, value });
            } else if *param == ParamType::Fraction && !(0.0..=1.0).contains(&value) {
                warnings.push(RuleWarning::FractionOutOfRange {
                    kind,
                    fraction: value,
                });
            }
        }
        warnings
    }

    /// Logs [`warnings`](Rule::warnings) and returns how many there were.
    pub fn report_warnings(&self) -> usize {
        let warnings = self.warnings();
        for warning in &warnings {
            tracing::warn!(rule = %self.kind(), "{warning}; evaluation proceeds with the value as given");
        }
        warnings.len()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        for (i, v) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

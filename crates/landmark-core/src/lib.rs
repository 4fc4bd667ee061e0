//! Landmark Core - Core types for rule-based landmark detection
//!
//! This crate provides the fundamental abstractions shared by the rule engine:
//! - Profiles: circular numeric samples taken around a nucleus outline
//! - Index masks: the candidate sets narrowed by rule evaluation
//! - Landmarks and the orientation roles they are bound to
//! - Measurement names and producer versions
//! - Evaluation error types

pub mod error;
pub mod landmark;
pub mod mask;
pub mod measurement;
pub mod profile;
pub mod version;

pub use error::{EvalError, UnknownNameError};
pub use landmark::{Landmark, OrientationMark, PriorityAxis, RuleApplicationType};
pub use mask::IndexMask;
pub use measurement::MeasurementName;
pub use profile::{Profile, ProfileKind, ProfileMap, ProfileSource};
pub use version::Version;

//! Landmark Rules - Rule engine for locating landmarks on nucleus profiles
//!
//! This crate provides:
//! - Typed rules and ordered rule sets with a fluent builder
//! - The evaluator that narrows an index mask rule by rule
//! - Rule set collections binding landmarks to orientation marks
//! - Per-nucleus and median-based application over many nuclei
//! - Built-in presets for mouse sperm, pig sperm and round nuclei

pub mod application;
pub mod builder;
pub mod collection;
pub mod error;
pub mod eval;
pub mod finder;
pub mod orientation;
pub mod presets;
pub mod rule;
pub mod rule_set;
pub mod shared;

pub use application::{MedianIndexMapper, ProportionalMapper};
pub use builder::RuleSetBuilder;
pub use collection::RuleSetCollection;
pub use error::RuleError;
pub use eval::{apply_rule, count_matching, evaluate, matching_mask};
pub use finder::{LandmarkFinder, LandmarkResults};
pub use orientation::Orientation;
pub use rule::{ParamType, Rule, RuleKind, RuleWarning, Window};
pub use rule_set::RuleSet;
pub use shared::SharedRuleSetCollection;

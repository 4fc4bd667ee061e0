//! Landmark - rule-based landmark detection on nucleus profiles
//!
//! Describe where a landmark sits on a circular profile with a short list
//! of rules, then locate it on every nucleus.
//!
//! # Example
//!
//! ```rust
//! use landmark::prelude::*;
//!
//! // Sharpest angle in the second half of the outline.
//! let rp = RuleSetBuilder::new(ProfileKind::Angle)
//!     .index_is_more_than(0.5)
//!     .is_minimum()
//!     .build();
//!
//! let angles = vec![30.0, 150.0, 170.0, 160.0, 90.0, 175.0];
//! assert_eq!(evaluate(&rp, &angles), Ok(4));
//!
//! // Built-in collections resolve by orientation mark.
//! let nucleus = ProfileMap::new().with(ProfileKind::Diameter, vec![8.0, 9.5, 9.0]);
//! assert_eq!(presets::round().resolve_mark(OrientationMark::Reference, &nucleus), Ok(1));
//! ```

#[cfg(feature = "console")]
pub mod console;

pub use landmark_config::{AmbiguityPolicy, ConfigError, FinderConfig, UnresolvedPolicy};
pub use landmark_core::{
    EvalError, IndexMask, Landmark, MeasurementName, OrientationMark, PriorityAxis, Profile,
    ProfileKind, ProfileMap, ProfileSource, RuleApplicationType, Version,
};
pub use landmark_io::{
    decode_collection, decode_rule_set, encode_collection, encode_rule_set, read_collection,
    write_collection, CodecError,
};
pub use landmark_rules::{
    apply_rule, count_matching, evaluate, matching_mask, presets, LandmarkFinder, LandmarkResults,
    MedianIndexMapper, Orientation, ProportionalMapper, Rule, RuleError, RuleKind, RuleSet,
    RuleSetBuilder, RuleSetCollection, SharedRuleSetCollection, Window,
};

/// Everything needed to build rules and locate landmarks.
pub mod prelude {
    pub use crate::{
        evaluate, presets, FinderConfig, Landmark, LandmarkFinder, OrientationMark, Profile,
        ProfileKind, ProfileMap, ProfileSource, ProportionalMapper, Rule, RuleApplicationType,
        RuleSet, RuleSetBuilder, RuleSetCollection,
    };
}

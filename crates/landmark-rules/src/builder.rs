//! Fluent construction of rule sets.

use landmark_core::ProfileKind;

use crate::rule::{Rule, Window};
use crate::rule_set::RuleSet;

/// Builds a [`RuleSet`] one rule at a time, in evaluation order.
///
/// # Example
///
/// ```
/// use landmark_core::ProfileKind;
/// use landmark_rules::{Rule, RuleSetBuilder};
///
/// let rp = RuleSetBuilder::new(ProfileKind::Angle)
///     .index_is_more_than(0.2)
///     .is_minimum()
///     .build();
///
/// assert_eq!(rp.rules().len(), 2);
/// assert_eq!(rp.rules()[1], Rule::IsMinimum { keep: true });
/// ```
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    profile_kind: ProfileKind,
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn new(profile_kind: ProfileKind) -> Self {
        Self {
            profile_kind,
            rules: Vec::new(),
        }
    }

    /// Appends an arbitrary rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_zero_index(self) -> Self {
        self.rule(Rule::IsZeroIndex { keep: true })
    }

    pub fn is_not_zero_index(self) -> Self {
        self.rule(Rule::IsZeroIndex { keep: false })
    }

    pub fn is_minimum(self) -> Self {
        self.rule(Rule::IsMinimum { keep: true })
    }

    pub fn is_not_minimum(self) -> Self {
        self.rule(Rule::IsMinimum { keep: false })
    }

    pub fn is_maximum(self) -> Self {
        self.rule(Rule::IsMaximum { keep: true })
    }

    pub fn is_not_maximum(self) -> Self {
        self.rule(Rule::IsMaximum { keep: false })
    }

    /// Local minima over [`Window::DEFAULT`] neighbours.
    pub fn is_local_minimum(self) -> Self {
        self.is_local_minimum_within(Window::DEFAULT)
    }

    pub fn is_local_minimum_within(self, window: Window) -> Self {
        self.rule(Rule::IsLocalMinimum { keep: true, window })
    }

    pub fn is_not_local_minimum(self) -> Self {
        self.is_not_local_minimum_within(Window::DEFAULT)
    }

    pub fn is_not_local_minimum_within(self, window: Window) -> Self {
        self.rule(Rule::IsLocalMinimum {
            keep: false,
            window,
        })
    }

    /// Local maxima over [`Window::DEFAULT`] neighbours.
    pub fn is_local_maximum(self) -> Self {
        self.is_local_maximum_within(Window::DEFAULT)
    }

    pub fn is_local_maximum_within(self, window: Window) -> Self {
        self.rule(Rule::IsLocalMaximum { keep: true, window })
    }

    pub fn is_not_local_maximum(self) -> Self {
        self.is_not_local_maximum_within(Window::DEFAULT)
    }

    pub fn is_not_local_maximum_within(self, window: Window) -> Self {
        self.rule(Rule::IsLocalMaximum {
            keep: false,
            window,
        })
    }

    pub fn value_is_less_than(self, threshold: f64) -> Self {
        self.rule(Rule::ValueIsLessThan { threshold })
    }

    pub fn value_is_more_than(self, threshold: f64) -> Self {
        self.rule(Rule::ValueIsMoreThan { threshold })
    }

    pub fn index_is_less_than(self, fraction: f64) -> Self {
        self.rule(Rule::IndexIsLessThan { fraction })
    }

    pub fn index_is_more_than(self, fraction: f64) -> Self {
        self.rule(Rule::IndexIsMoreThan { fraction })
    }

    /// Runs of at least `min_length` indices within `epsilon` of `value`.
    pub fn is_constant_region_at(self, value: f64, min_length: Window, epsilon: f64) -> Self {
        self.rule(Rule::IsConstantRegion {
            value,
            min_length,
            epsilon,
        })
    }

    /// Keeps only the first candidate.
    pub fn is_first_index_in_region(self) -> Self {
        self.rule(Rule::FirstTrue { keep: true })
    }

    pub fn is_not_first_index_in_region(self) -> Self {
        self.rule(Rule::FirstTrue { keep: false })
    }

    /// Keeps only the last candidate.
    pub fn is_last_index_in_region(self) -> Self {
        self.rule(Rule::LastTrue { keep: true })
    }

    pub fn is_not_last_index_in_region(self) -> Self {
        self.rule(Rule::LastTrue { keep: false })
    }

    pub fn index_is_within_fraction_of(self, fraction: f64) -> Self {
        self.rule(Rule::IndexIsWithinFractionOf { fraction })
    }

    pub fn index_is_outside_fraction_of(self, fraction: f64) -> Self {
        self.rule(Rule::IndexIsOutsideFractionOf { fraction })
    }

    pub fn invert(self) -> Self {
        self.rule(Rule::Invert)
    }

    pub fn build(self) -> RuleSet {
        RuleSet::new(self.profile_kind, self.rules)
    }
}

//! Ordered rule sequences bound to one profile kind.

use std::fmt;

use landmark_core::ProfileKind;

use crate::builder::RuleSetBuilder;
use crate::rule::Rule;

/// Rules applied in order to a single profile kind.
///
/// Order matters: each rule narrows the mask produced by the previous one,
/// so reordering the same rules can select a different index.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    profile_kind: ProfileKind,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(profile_kind: ProfileKind, rules: Vec<Rule>) -> Self {
        for rule in &rules {
            rule.report_warnings();
        }
        Self {
            profile_kind,
            rules,
        }
    }

    /// Starts a fluent builder for `profile_kind`.
    pub fn builder(profile_kind: ProfileKind) -> RuleSetBuilder {
        RuleSetBuilder::new(profile_kind)
    }

    pub fn profile_kind(&self) -> ProfileKind {
        self.profile_kind
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Appends a rule at the end of the sequence.
    pub fn push(&mut self, rule: Rule) {
        rule.report_warnings();
        self.rules.push(rule);
    }

    /// Independent copy; edits to either side never affect the other.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.profile_kind)?;
        for rule in &self.rules {
            write!(f, " {rule}")?;
        }
        Ok(())
    }
}

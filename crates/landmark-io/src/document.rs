//! Serde mirror of the persisted XML layout.
//!
//! Attribute fields come first in each struct and are prefixed with `@`.

use serde::{Deserialize, Serialize};

/// `<Rule ruleType="..."><RuleValue>..</RuleValue>*</Rule>`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RuleDoc {
    #[serde(rename = "@ruleType", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(rename = "RuleValue", default)]
    pub values: Vec<String>,
}

/// `<Ruleset ruleType="ANGLE"><Rule/>*</Ruleset>`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RuleSetDoc {
    #[serde(rename = "@ruleType", default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    #[serde(rename = "Rule", default)]
    pub rules: Vec<RuleDoc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct OrientDoc {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct LandmarkDoc {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Ruleset", default)]
    pub rule_sets: Vec<RuleSetDoc>,
}

/// Root `<RuleSetCollection>` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CollectionDoc {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "@axis", default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    #[serde(rename = "@application", default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Orient", default)]
    pub orients: Vec<OrientDoc>,
    #[serde(rename = "Landmark", default)]
    pub landmarks: Vec<LandmarkDoc>,
    #[serde(rename = "Measurement", default)]
    pub measurements: Vec<String>,
}

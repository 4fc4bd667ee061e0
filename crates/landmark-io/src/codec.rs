//! Encoding and decoding of rules, rule sets and collections.

use std::path::Path;

use landmark_core::{
    Landmark, MeasurementName, OrientationMark, PriorityAxis, ProfileKind, RuleApplicationType,
    Version,
};
use landmark_rules::{Rule, RuleError, RuleKind, RuleSet, RuleSetCollection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::document::{CollectionDoc, LandmarkDoc, OrientDoc, RuleDoc, RuleSetDoc};
use crate::error::{CodecError, Result};

pub const RULE_ELEMENT: &str = "Rule";
pub const RULE_SET_ELEMENT: &str = "Ruleset";
pub const COLLECTION_ELEMENT: &str = "RuleSetCollection";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

fn to_xml<T: Serialize>(root: &str, value: &T) -> Result<String> {
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::with_root(&mut out, Some(root))
        .map_err(|e| CodecError::Write(e.to_string()))?;
    ser.indent(' ', 2);
    value
        .serialize(ser)
        .map_err(|e| CodecError::Write(e.to_string()))?;
    Ok(out)
}

fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(|e| CodecError::Parse(e.to_string()))
}

fn rule_to_doc(rule: &Rule) -> RuleDoc {
    RuleDoc {
        rule_type: Some(rule.kind().name().to_string()),
        values: rule.values().iter().map(f64::to_string).collect(),
    }
}

fn rule_set_to_doc(rule_set: &RuleSet) -> RuleSetDoc {
    RuleSetDoc {
        profile_type: Some(rule_set.profile_kind().name().to_string()),
        rules: rule_set.rules().iter().map(rule_to_doc).collect(),
    }
}

fn collection_to_doc(collection: &RuleSetCollection) -> CollectionDoc {
    CollectionDoc {
        name: Some(collection.name().to_string()),
        axis: collection.priority_axis().map(|a| a.name().to_string()),
        application: Some(collection.application_type().name().to_string()),
        version: Some(collection.version().to_string()),
        orients: collection
            .orientation_marks()
            .map(|(mark, landmark)| OrientDoc {
                name: Some(mark.name().to_string()),
                value: Some(landmark.name().to_string()),
            })
            .collect(),
        landmarks: collection
            .landmarks()
            .map(|landmark| LandmarkDoc {
                name: Some(landmark.name().to_string()),
                rule_sets: collection
                    .rule_sets(landmark)
                    .iter()
                    .map(rule_set_to_doc)
                    .collect(),
            })
            .collect(),
        measurements: collection
            .measurements()
            .iter()
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}

/// Reads one persisted parameter; `true`/`false` are accepted for flags.
fn parse_value(kind: RuleKind, text: &str) -> Result<f64> {
    match text.trim() {
        "true" => Ok(1.0),
        "false" => Ok(0.0),
        other => other.parse::<f64>().map_err(|_| {
            CodecError::Rule(RuleError::Malformed {
                kind: kind.to_string(),
                reason: format!("'{other}' is not a number"),
            })
        }),
    }
}

fn rule_from_doc(doc: RuleDoc) -> Result<Rule> {
    let kind: RuleKind = doc
        .rule_type
        .ok_or(CodecError::MissingAttribute {
            element: RULE_ELEMENT,
            attribute: "ruleType",
        })?
        .trim()
        .parse()?;
    let values = doc
        .values
        .iter()
        .map(|v| parse_value(kind, v))
        .collect::<Result<Vec<f64>>>()?;
    Ok(Rule::from_values(kind, &values)?)
}

fn rule_set_from_doc(doc: RuleSetDoc) -> Result<RuleSet> {
    let kind_name = doc.profile_type.ok_or(CodecError::MissingAttribute {
        element: RULE_SET_ELEMENT,
        attribute: "ruleType",
    })?;
    let kind: ProfileKind = kind_name
        .trim()
        .parse()
        .map_err(|_| RuleError::UnknownProfileKind(kind_name.clone()))?;
    let rules = doc
        .rules
        .into_iter()
        .map(rule_from_doc)
        .collect::<Result<Vec<Rule>>>()?;
    Ok(RuleSet::new(kind, rules))
}

fn collection_from_doc(doc: CollectionDoc) -> Result<RuleSetCollection> {
    let missing = |attribute| CodecError::MissingAttribute {
        element: COLLECTION_ELEMENT,
        attribute,
    };

    let name = doc.name.ok_or_else(|| missing("name"))?;
    let version: Version = doc.version.ok_or_else(|| missing("version"))?.parse()?;
    if !version.is_supported() {
        return Err(CodecError::UnsupportedVersion {
            found: version,
            supported: Version::CURRENT,
        });
    }

    let application = match doc.application {
        Some(text) => text.trim().parse::<RuleApplicationType>()?,
        None => {
            tracing::debug!(collection = %name, "No application type, using default");
            RuleApplicationType::default()
        }
    };
    let axis = doc
        .axis
        .map(|text| text.trim().parse::<PriorityAxis>())
        .transpose()?;

    let mut bindings = Vec::with_capacity(doc.orients.len());
    for orient in doc.orients {
        let mark_name = orient.name.ok_or(CodecError::MissingAttribute {
            element: "Orient",
            attribute: "name",
        })?;
        let landmark_name = orient.value.ok_or(CodecError::MissingAttribute {
            element: "Orient",
            attribute: "value",
        })?;
        let mark: OrientationMark = mark_name.trim().parse()?;
        bindings.push((mark, Landmark::new(landmark_name)));
    }

    let reference = bindings
        .iter()
        .find(|(mark, _)| *mark == OrientationMark::Reference)
        .map(|(_, landmark)| landmark.clone())
        .ok_or(CodecError::MissingReference)?;

    let mut collection = RuleSetCollection::new(name, reference, application);
    collection.set_priority_axis(axis);
    collection.set_version(version);
    for (mark, landmark) in bindings {
        collection.bind(mark, landmark);
    }

    for landmark_doc in doc.landmarks {
        let landmark = Landmark::new(landmark_doc.name.ok_or(CodecError::MissingAttribute {
            element: "Landmark",
            attribute: "name",
        })?);
        for rule_set in landmark_doc.rule_sets {
            collection.add_rule_set_for(&landmark, rule_set_from_doc(rule_set)?);
        }
    }

    for text in doc.measurements {
        match MeasurementName::new(&text) {
            Some(measurement) => {
                collection.add_measurement(measurement);
            }
            None => tracing::warn!(collection = collection.name(), "Skipping blank measurement name"),
        }
    }

    tracing::debug!(
        collection = collection.name(),
        %version,
        landmarks = collection.landmarks().count(),
        "Decoded rule set collection"
    );
    Ok(collection)
}

/// Encodes a rule as a `<Rule>` element.
pub fn encode_rule(rule: &Rule) -> Result<String> {
    to_xml(RULE_ELEMENT, &rule_to_doc(rule))
}

/// Decodes a `<Rule>` element.
pub fn decode_rule(xml: &str) -> Result<Rule> {
    rule_from_doc(from_xml(xml)?)
}

/// Encodes a rule set as a `<Ruleset>` element.
pub fn encode_rule_set(rule_set: &RuleSet) -> Result<String> {
    to_xml(RULE_SET_ELEMENT, &rule_set_to_doc(rule_set))
}

/// Decodes a `<Ruleset>` element.
pub fn decode_rule_set(xml: &str) -> Result<RuleSet> {
    rule_set_from_doc(from_xml(xml)?)
}

/// Encodes a collection as a `<RuleSetCollection>` element.
///
/// # Example
///
/// ```
/// use landmark_io::{decode_collection, encode_collection};
/// use landmark_rules::presets;
///
/// let pig = presets::pig_sperm();
/// let xml = encode_collection(&pig).unwrap();
///
/// assert!(xml.starts_with("<RuleSetCollection name=\"Pig sperm\""));
/// assert_eq!(decode_collection(&xml).unwrap(), pig);
/// ```
pub fn encode_collection(collection: &RuleSetCollection) -> Result<String> {
    to_xml(COLLECTION_ELEMENT, &collection_to_doc(collection))
}

/// Decodes a `<RuleSetCollection>` element.
///
/// # Errors
///
/// Fails on the first malformed rule, unknown name, missing attribute,
/// missing REFERENCE binding, or a version newer than [`Version::CURRENT`].
pub fn decode_collection(xml: &str) -> Result<RuleSetCollection> {
    collection_from_doc(from_xml(xml)?)
}

/// Reads a collection document from a file.
pub fn read_collection(path: impl AsRef<Path>) -> Result<RuleSetCollection> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path)?;
    let collection = decode_collection(&xml)?;
    tracing::info!(path = %path.display(), collection = collection.name(), "Read rule set collection");
    Ok(collection)
}

/// Writes a collection document, with XML declaration, to a file.
pub fn write_collection(path: impl AsRef<Path>, collection: &RuleSetCollection) -> Result<()> {
    let path = path.as_ref();
    let xml = encode_collection(collection)?;
    std::fs::write(path, format!("{XML_DECLARATION}\n{xml}\n"))?;
    tracing::info!(path = %path.display(), collection = collection.name(), "Wrote rule set collection");
    Ok(())
}

#[cfg(test)]
mod tests;

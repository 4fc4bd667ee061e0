//! Tests for the XML codec.

use landmark_core::{Landmark, OrientationMark, ProfileKind, RuleApplicationType, Version};
use landmark_rules::{presets, RuleSetBuilder, Window};

use super::*;

const CUSTOM: &str = r#"
<RuleSetCollection name="Custom" application="PER_NUCLEUS" version="2.1.0">
  <Orient name="REFERENCE" value="Apex"/>
  <Orient name="TOP" value="Crown"/>
  <Landmark name="Apex">
    <Ruleset ruleType="ANGLE">
      <Rule ruleType="INDEX_IS_LESS_THAN"><RuleValue>0.5</RuleValue></Rule>
      <Rule ruleType="IS_MINIMUM"><RuleValue>true</RuleValue></Rule>
    </Ruleset>
  </Landmark>
  <Measurement>Area</Measurement>
  <Measurement>Perimeter</Measurement>
</RuleSetCollection>
"#;

#[test]
fn test_preset_round_trips() {
    for preset in [presets::mouse_sperm(), presets::pig_sperm(), presets::round()] {
        let xml = encode_collection(&preset).unwrap();
        let decoded = decode_collection(&xml).unwrap();
        assert_eq!(decoded, preset, "round trip of {}", preset.name());
        assert_eq!(decoded.version(), Version::CURRENT);
    }
}

#[test]
fn test_rule_set_round_trip() {
    let rule_set = RuleSetBuilder::new(ProfileKind::Radius)
        .is_not_zero_index()
        .is_local_maximum_within(Window::clamped(3))
        .is_constant_region_at(180.0, Window::clamped(10), 2.5)
        .value_is_more_than(-4.25)
        .invert()
        .build();

    let xml = encode_rule_set(&rule_set).unwrap();
    assert!(xml.starts_with(r#"<Ruleset ruleType="RADIUS">"#));
    assert_eq!(decode_rule_set(&xml).unwrap(), rule_set);
}

#[test]
fn test_flags_are_written_as_numbers() {
    let xml = encode_rule(&Rule::IsMinimum { keep: false }).unwrap();
    assert!(xml.contains(r#"ruleType="IS_MINIMUM""#));
    assert!(xml.contains("<RuleValue>0</RuleValue>"));
    assert_eq!(decode_rule(&xml).unwrap(), Rule::IsMinimum { keep: false });
}

#[test]
fn test_invert_has_no_values() {
    let xml = encode_rule(&Rule::Invert).unwrap();
    assert!(!xml.contains("RuleValue"));
    assert_eq!(decode_rule(&xml).unwrap(), Rule::Invert);
}

#[test]
fn test_decode_handwritten_collection() {
    let rsc = decode_collection(CUSTOM).unwrap();

    assert_eq!(rsc.name(), "Custom");
    assert_eq!(rsc.application_type(), RuleApplicationType::PerNucleus);
    assert_eq!(rsc.priority_axis(), None);
    assert_eq!(rsc.version(), Version::new(2, 1, 0));
    assert_eq!(rsc.measurements().len(), 2);

    let apex = Landmark::new("Apex");
    assert_eq!(rsc.landmark(OrientationMark::Reference), Some(&apex));
    assert_eq!(
        rsc.rule_sets(&apex)[0].rules(),
        &[
            Rule::IndexIsLessThan { fraction: 0.5 },
            Rule::IsMinimum { keep: true }
        ]
    );

    // Bound but never described: supplied externally.
    let crown = Landmark::new("Crown");
    assert!(rsc.contains_landmark(&crown));
    assert!(!rsc.has_rule_sets(&crown));
}

#[test]
fn test_unset_axis_is_not_written() {
    let rsc = RuleSetCollection::new("No axis", Landmark::new("Apex"), RuleApplicationType::PerNucleus);
    let xml = encode_collection(&rsc).unwrap();

    assert!(xml.starts_with(r#"<RuleSetCollection name="No axis" application="PER_NUCLEUS""#));
    assert!(!xml.contains("axis="));
    assert_eq!(decode_collection(&xml).unwrap(), rsc);

    let with_axis = rsc.with_priority_axis(PriorityAxis::X);
    assert!(encode_collection(&with_axis).unwrap().contains(r#"axis="X""#));
}

#[test]
fn test_missing_version_is_rejected() {
    let xml = r#"<RuleSetCollection name="X" application="VIA_MEDIAN">
        <Orient name="REFERENCE" value="A"/>
    </RuleSetCollection>"#;
    assert!(matches!(
        decode_collection(xml),
        Err(CodecError::MissingAttribute {
            attribute: "version",
            ..
        })
    ));
}

#[test]
fn test_newer_version_is_rejected() {
    let xml = r#"<RuleSetCollection name="X" application="VIA_MEDIAN" version="3.0.0">
        <Orient name="REFERENCE" value="A"/>
    </RuleSetCollection>"#;
    match decode_collection(xml) {
        Err(CodecError::UnsupportedVersion { found, supported }) => {
            assert_eq!(found, Version::new(3, 0, 0));
            assert_eq!(supported, Version::CURRENT);
        }
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

#[test]
fn test_missing_reference_is_rejected() {
    let xml = r#"<RuleSetCollection name="X" application="VIA_MEDIAN" version="2.2.0">
        <Orient name="TOP" value="A"/>
    </RuleSetCollection>"#;
    assert!(matches!(
        decode_collection(xml),
        Err(CodecError::MissingReference)
    ));
}

#[test]
fn test_unknown_names_are_rejected() {
    let bad_mark = CUSTOM.replace(r#"name="TOP""#, r#"name="MIDDLE""#);
    assert!(matches!(
        decode_collection(&bad_mark),
        Err(CodecError::UnknownName(_))
    ));

    let bad_kind = CUSTOM.replace("IS_MINIMUM", "IS_MEDIAN");
    assert!(matches!(
        decode_collection(&bad_kind),
        Err(CodecError::Rule(RuleError::UnknownKind(_)))
    ));

    let bad_profile = CUSTOM.replace(r#"ruleType="ANGLE""#, r#"ruleType="CURVATURE""#);
    assert!(matches!(
        decode_collection(&bad_profile),
        Err(CodecError::Rule(RuleError::UnknownProfileKind(_)))
    ));
}

#[test]
fn test_malformed_rules_are_rejected() {
    let extra_value = r#"<Rule ruleType="IS_MAXIMUM"><RuleValue>1</RuleValue><RuleValue>2</RuleValue></Rule>"#;
    let err = decode_rule(extra_value).unwrap_err();
    assert!(matches!(err, CodecError::Rule(ref e) if e.is_malformed()));

    let zero_window = r#"<Rule ruleType="IS_LOCAL_MINIMUM"><RuleValue>1</RuleValue><RuleValue>0</RuleValue></Rule>"#;
    assert!(matches!(decode_rule(zero_window), Err(CodecError::Rule(_))));

    let not_a_number = r#"<Rule ruleType="VALUE_IS_LESS_THAN"><RuleValue>low</RuleValue></Rule>"#;
    assert!(matches!(decode_rule(not_a_number), Err(CodecError::Rule(_))));

    let untyped = r#"<Rule><RuleValue>1</RuleValue></Rule>"#;
    assert!(matches!(
        decode_rule(untyped),
        Err(CodecError::MissingAttribute {
            element: "Rule",
            attribute: "ruleType"
        })
    ));
}

#[test]
fn test_out_of_range_fraction_decodes() {
    let xml = r#"<Rule ruleType="INDEX_IS_LESS_THAN"><RuleValue>1.5</RuleValue></Rule>"#;
    assert_eq!(
        decode_rule(xml).unwrap(),
        Rule::IndexIsLessThan { fraction: 1.5 }
    );
}

#[test]
fn test_not_xml() {
    assert!(matches!(
        decode_collection("<RuleSetCollection"),
        Err(CodecError::Parse(_))
    ));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mouse.xml");

    write_collection(&path, &presets::mouse_sperm()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("<?xml"));

    assert_eq!(read_collection(&path).unwrap(), presets::mouse_sperm());
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        read_collection("/nonexistent/rules.xml"),
        Err(CodecError::Io(_))
    ));
}

//! Tests for rule set collections.

use landmark_core::{MeasurementName, ProfileKind, Version};

use super::*;
use crate::builder::RuleSetBuilder;
use crate::presets;

fn rsc() -> RuleSetCollection {
    RuleSetCollection::new("Test", Landmark::new("Ref"), RuleApplicationType::PerNucleus)
}

fn minimum() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Angle).is_minimum().build()
}

#[test]
fn test_reference_is_always_bound() {
    let rsc = rsc();
    assert_eq!(
        rsc.landmark(OrientationMark::Reference),
        Some(&Landmark::new("Ref"))
    );
    assert!(rsc.contains_landmark(&Landmark::new("Ref")));
    assert!(rsc.is_empty());
}

#[test]
fn test_binding_registers_landmark_without_rules() {
    let mut rsc = rsc();
    let hook = Landmark::new("Hook");
    rsc.bind(OrientationMark::Left, hook.clone());

    assert!(rsc.contains_landmark(&hook));
    assert!(!rsc.has_rule_sets(&hook));
    assert_eq!(rsc.landmarks().count(), 2);
}

#[test]
fn test_edit_by_mark() {
    let mut rsc = rsc();
    rsc.add_rule_set(OrientationMark::Reference, minimum()).unwrap();
    rsc.add_rule_set(OrientationMark::Reference, presets::round_rp())
        .unwrap();
    assert_eq!(rsc.rule_sets_for_mark(OrientationMark::Reference).len(), 2);

    rsc.set_rule_sets(OrientationMark::Reference, vec![minimum()])
        .unwrap();
    assert_eq!(
        rsc.rule_sets_for_mark(OrientationMark::Reference),
        &[minimum()]
    );

    let cleared = rsc.clear_rule_sets(OrientationMark::Reference).unwrap();
    assert_eq!(cleared, vec![minimum()]);
    assert!(rsc.is_empty());
    assert!(rsc.contains_landmark(&Landmark::new("Ref")));
}

#[test]
fn test_edit_unbound_mark_fails() {
    let mut rsc = rsc();
    assert_eq!(
        rsc.add_rule_set(OrientationMark::Top, minimum()),
        Err(RuleError::UnboundMark(OrientationMark::Top))
    );
    assert_eq!(
        rsc.clear_rule_sets(OrientationMark::Right),
        Err(RuleError::UnboundMark(OrientationMark::Right))
    );
}

#[test]
fn test_remove_unbinds_marks() {
    let mut rsc = rsc();
    let tail = Landmark::new("Tail");
    rsc.bind(OrientationMark::Bottom, tail.clone());
    rsc.bind(OrientationMark::Y, tail.clone());
    rsc.add_rule_set_for(&tail, minimum());

    let removed = rsc.remove_rule_sets(&tail);
    assert_eq!(removed.len(), 1);
    assert!(!rsc.contains_landmark(&tail));
    assert_eq!(rsc.landmark(OrientationMark::Bottom), None);
    assert_eq!(rsc.landmark(OrientationMark::Y), None);
}

#[test]
fn test_remove_reference_only_clears() {
    let mut rsc = rsc();
    let reference = Landmark::new("Ref");
    rsc.add_rule_set_for(&reference, minimum());

    assert_eq!(rsc.remove_rule_sets(&reference).len(), 1);
    assert_eq!(rsc.landmark(OrientationMark::Reference), Some(&reference));
    assert!(rsc.contains_landmark(&reference));
}

#[test]
fn test_measurements_are_a_set() {
    let mut rsc = rsc();
    let area = MeasurementName::new(MeasurementName::AREA).unwrap();
    assert!(rsc.add_measurement(area.clone()));
    assert!(!rsc.add_measurement(area));
    assert_eq!(rsc.measurements().len(), 1);
}

#[test]
fn test_duplicate_is_deep() {
    let original = presets::mouse_sperm();
    let mut copy = original.duplicate();
    assert_eq!(copy, original);

    copy.add_rule_set(OrientationMark::Top, presets::round_rp())
        .unwrap();
    assert_ne!(copy, original);
    assert_eq!(original.rule_sets_for_mark(OrientationMark::Top).len(), 1);
}

#[test]
fn test_equality_ignores_version() {
    let mut older = presets::pig_sperm();
    older.set_version(Version::new(1, 13, 8));
    assert_eq!(older, presets::pig_sperm());

    let mut renamed = presets::pig_sperm();
    renamed.set_priority_axis(Some(PriorityAxis::X));
    assert_ne!(renamed, presets::pig_sperm());
}

#[test]
fn test_display_summary() {
    let text = presets::pig_sperm().to_string();
    assert!(text.starts_with("Pig sperm (version 2.2.0)"));
    assert!(text.contains("BOTTOM -> Tail socket"));
    assert!(text.contains("Tail socket: ANGLE: IS_MINIMUM(1)"));

    let mut rsc = rsc();
    rsc.bind(OrientationMark::Top, Landmark::new("Acrosome"));
    assert!(rsc.to_string().contains("Acrosome: supplied externally"));
}

//! Built-in rule sets and collections for common nucleus types.
//!
//! Rule sets are named after the landmark they find: `rp` the reference
//! point, `op` the orientation point, `tv` and `bv` the top and bottom
//! vertical points.

use landmark_core::{
    Landmark, MeasurementName, OrientationMark, PriorityAxis, ProfileKind, RuleApplicationType,
};

use crate::builder::RuleSetBuilder;
use crate::collection::RuleSetCollection;
use crate::rule::Window;
use crate::rule_set::RuleSet;

/// Tip of the hook: the sharpest angle.
pub fn mouse_sperm_rp() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Angle).is_minimum().build()
}

/// Tail socket: the sharpest bend on the far side from the hook.
pub fn mouse_sperm_op() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Angle)
        .index_is_more_than(0.2)
        .index_is_less_than(0.6)
        .is_local_minimum()
        .is_minimum()
        .build()
}

/// Upper end of the flat ventral edge.
pub fn mouse_sperm_tv() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Angle)
        .index_is_more_than(0.6)
        .is_constant_region_at(180.0, Window::clamped(5), 10.0)
        .is_first_index_in_region()
        .build()
}

/// Lower end of the flat ventral edge.
pub fn mouse_sperm_bv() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Angle)
        .index_is_more_than(0.6)
        .is_constant_region_at(180.0, Window::clamped(5), 10.0)
        .is_last_index_in_region()
        .build()
}

/// Tail socket: the peak just beside the deepest angle.
pub fn pig_sperm_rp() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Angle)
        .is_minimum()
        .index_is_within_fraction_of(0.07)
        .is_local_maximum()
        .build()
}

/// One end of the longest diameter.
pub fn round_rp() -> RuleSet {
    RuleSetBuilder::new(ProfileKind::Diameter).is_maximum().build()
}

/// Rodent sperm: hooked, with orientation on both axes.
pub fn mouse_sperm() -> RuleSetCollection {
    let tip = Landmark::new("Tip of hook");
    let tail = Landmark::new("Tail socket");
    let upper = Landmark::new("Ventral upper");
    let lower = Landmark::new("Ventral lower");

    let mut rsc = RuleSetCollection::new("Mouse sperm", tip.clone(), RuleApplicationType::ViaMedian)
        .with_binding(OrientationMark::Left, tip.clone())
        .with_binding(OrientationMark::Top, upper.clone())
        .with_binding(OrientationMark::Bottom, lower.clone())
        .with_binding(OrientationMark::Y, tail.clone())
        .with_priority_axis(PriorityAxis::Y)
        .with_measurements(MeasurementName::rodent_sperm());

    rsc.add_rule_set_for(&tip, mouse_sperm_rp());
    rsc.add_rule_set_for(&tail, mouse_sperm_op());
    rsc.add_rule_set_for(&upper, mouse_sperm_tv());
    rsc.add_rule_set_for(&lower, mouse_sperm_bv());
    rsc
}

/// Pig sperm: paddle shaped, oriented by the tail socket alone.
pub fn pig_sperm() -> RuleSetCollection {
    let tail = Landmark::new("Tail socket");

    let mut rsc = RuleSetCollection::new("Pig sperm", tail.clone(), RuleApplicationType::ViaMedian)
        .with_binding(OrientationMark::Bottom, tail.clone())
        .with_binding(OrientationMark::Y, tail.clone())
        .with_priority_axis(PriorityAxis::Y)
        .with_measurements(MeasurementName::round_nucleus());

    rsc.add_rule_set_for(&tail, pig_sperm_rp());
    rsc
}

/// Round nuclei: no asymmetry, referenced to the longest axis.
pub fn round() -> RuleSetCollection {
    let axis = Landmark::new("Longest axis");

    let mut rsc = RuleSetCollection::new("Round", axis.clone(), RuleApplicationType::ViaMedian)
        .with_binding(OrientationMark::Y, axis.clone())
        .with_priority_axis(PriorityAxis::Y)
        .with_measurements(MeasurementName::round_nucleus());

    rsc.add_rule_set_for(&axis, round_rp());
    rsc
}

/// Preset collection by short name: `mouse`, `pig` or `round`.
pub fn by_name(name: &str) -> Option<RuleSetCollection> {
    match name.to_ascii_lowercase().as_str() {
        "mouse" | "mouse_sperm" => Some(mouse_sperm()),
        "pig" | "pig_sperm" => Some(pig_sperm()),
        "round" => Some(round()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use landmark_core::{ProfileKind, ProfileMap};
    use landmark_test::profiles::{mouse_profile, pig_tail_profile};

    use super::*;
    use crate::eval::evaluate;

    #[test]
    fn test_asymmetry() {
        assert!(mouse_sperm().is_asymmetric());
        assert!(mouse_sperm().is_asymmetric_x());
        assert!(pig_sperm().is_asymmetric());
        assert!(!pig_sperm().is_asymmetric_x());
        assert!(!round().is_asymmetric());
    }

    #[test]
    fn test_governing_axes() {
        assert_eq!(mouse_sperm().governing_axis(), Some(PriorityAxis::Y));
        assert_eq!(pig_sperm().governing_axis(), Some(PriorityAxis::Y));
        assert_eq!(round().governing_axis(), None);
    }

    #[test]
    fn test_every_bound_landmark_has_an_entry() {
        for rsc in [mouse_sperm(), pig_sperm(), round()] {
            for (_, landmark) in rsc.orientation_marks() {
                assert!(rsc.contains_landmark(landmark));
            }
            assert!(rsc.landmark(OrientationMark::Reference).is_some());
            assert!(!rsc.is_empty());
        }
    }

    #[test]
    fn test_mouse_landmarks() {
        let rsc = mouse_sperm();
        assert_eq!(rsc.landmarks().count(), 4);
        assert_eq!(rsc.measurements().len(), MeasurementName::rodent_sperm().len());
        assert_eq!(
            rsc.landmark(OrientationMark::Left),
            rsc.landmark(OrientationMark::Reference)
        );
    }

    #[test]
    fn test_mouse_rule_sets_on_mouse_profile() {
        let profile = mouse_profile();
        let rp = evaluate(&mouse_sperm_rp(), &profile).unwrap();
        let op = evaluate(&mouse_sperm_op(), &profile).unwrap();
        let tv = evaluate(&mouse_sperm_tv(), &profile).unwrap();
        let bv = evaluate(&mouse_sperm_bv(), &profile).unwrap();

        assert_eq!(rp, 0);
        assert_eq!(op, 40);
        assert_eq!(tv, 70);
        assert_eq!(bv, 89);
    }

    #[test]
    fn test_mouse_collection_resolves_all() {
        let nucleus = ProfileMap::new().with(ProfileKind::Angle, mouse_profile());
        let results = mouse_sperm().resolve_all(&nucleus);
        assert_eq!(results.len(), 4);
        assert!(results.values().all(Result::is_ok));
    }

    #[test]
    fn test_pig_preset_on_asymmetric_profile() {
        let nucleus = ProfileMap::new().with(ProfileKind::Angle, pig_tail_profile());
        assert_eq!(
            pig_sperm().resolve_mark(OrientationMark::Bottom, &nucleus),
            Ok(57)
        );
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("Pig"), Some(pig_sperm()));
        assert_eq!(by_name("round"), Some(round()));
        assert_eq!(by_name("hamster"), None);
    }
}

//! Tests for rule evaluation.

use landmark_core::{EvalError, IndexMask, ProfileKind};
use landmark_test::profiles::{pig_tail_profile, sample_profile};

use super::*;
use crate::builder::RuleSetBuilder;
use crate::rule::Window;

fn angle() -> RuleSetBuilder {
    RuleSetBuilder::new(ProfileKind::Angle)
}

fn mask_of(n: usize, indices: &[usize]) -> IndexMask {
    IndexMask::from_fn(n, |i| indices.contains(&i))
}

#[test]
fn test_minimum_and_maximum() {
    let profile = sample_profile();
    assert_eq!(evaluate(&angle().is_minimum().build(), &profile), Ok(2));
    assert_eq!(evaluate(&angle().is_maximum().build(), &profile), Ok(9));
}

#[test]
fn test_not_minimum_keeps_the_rest() {
    let profile = sample_profile();
    let mask = matching_mask(&angle().is_not_minimum().build(), &profile);
    assert_eq!(mask.count(), profile.len() - 1);
    assert!(!mask.get(2));
}

#[test]
fn test_minimum_tie_goes_to_lowest_index() {
    let profile = vec![4.0, 1.0, 3.0, 1.0, 2.0];
    assert_eq!(evaluate(&angle().is_minimum().build(), &profile), Ok(1));
}

#[test]
fn test_invert_is_complement() {
    let profile = sample_profile();
    let mask = mask_of(profile.len(), &[0, 4, 9]);
    let inverted = apply_rule(&Rule::Invert, &profile, &mask);
    assert_eq!(inverted, mask.inverted());
    assert_eq!(apply_rule(&Rule::Invert, &profile, &inverted), mask);
}

#[test]
fn test_invert_then_minimum_is_no_match() {
    let profile = sample_profile();
    let rules = angle().invert().is_minimum().build();
    assert_eq!(evaluate(&rules, &profile), Err(EvalError::NoMatch));
}

#[test]
fn test_zero_index() {
    let profile = sample_profile();
    assert_eq!(evaluate(&angle().is_zero_index().build(), &profile), Ok(0));
    assert_eq!(
        count_matching(&angle().is_not_zero_index().build(), &profile),
        profile.len() - 1
    );
}

#[test]
fn test_local_minima_by_window() {
    let profile = sample_profile();
    let n = profile.len();
    let minima = |w: usize| {
        matching_mask(
            &angle().is_local_minimum_within(Window::clamped(w)).build(),
            &profile,
        )
    };

    assert_eq!(minima(1), mask_of(n, &[2, 7, 12]));
    assert_eq!(minima(2), mask_of(n, &[2, 7]));
    assert_eq!(minima(3), IndexMask::none(n));
}

#[test]
fn test_local_maxima_wrap_around() {
    let profile = sample_profile();
    let n = profile.len();
    let maxima = |w: usize| {
        matching_mask(
            &angle().is_local_maximum_within(Window::clamped(w)).build(),
            &profile,
        )
    };

    // Index 0 is only a peak when its left neighbour (index 12) is counted.
    assert_eq!(maxima(1), mask_of(n, &[0, 5, 9]));
    assert_eq!(maxima(2), mask_of(n, &[5, 9]));
}

#[test]
fn test_not_local_minimum() {
    let profile = sample_profile();
    let rules = angle()
        .is_not_local_minimum_within(Window::clamped(2))
        .build();
    let mask = matching_mask(&rules, &profile);
    assert_eq!(mask.count(), profile.len() - 2);
    assert!(!mask.get(2) && !mask.get(7));
}

#[test]
fn test_plateau_counts_once_at_lowest_index() {
    let profile = vec![9.0, 5.0, 1.0, 1.0, 1.0, 5.0, 9.0, 9.0];
    let n = profile.len();
    let window = Window::clamped(2);

    let minima = matching_mask(&angle().is_local_minimum_within(window).build(), &profile);
    assert_eq!(minima, mask_of(n, &[2]));

    // The 9.0 plateau spans indices 6, 7 and 0.
    let maxima = matching_mask(&angle().is_local_maximum_within(window).build(), &profile);
    assert_eq!(maxima, mask_of(n, &[0]));
}

#[test]
fn test_flat_profile_has_no_extrema() {
    let profile = vec![3.0; 6];
    let rules = angle().is_local_minimum_within(Window::clamped(1)).build();
    assert_eq!(count_matching(&rules, &profile), 0);
}

#[test]
fn test_value_thresholds_are_strict() {
    let profile = sample_profile();
    let n = profile.len();
    let below = matching_mask(&angle().value_is_less_than(5.0).build(), &profile);
    assert_eq!(below, mask_of(n, &[2, 3, 7, 12]));

    let above = matching_mask(&angle().value_is_more_than(12.0).build(), &profile);
    assert_eq!(above, mask_of(n, &[5, 9, 10]));
}

#[test]
fn test_index_fractions() {
    let profile = sample_profile();
    let n = profile.len();

    // 13 * 0.25 = 3.25
    let low = matching_mask(&angle().index_is_less_than(0.25).build(), &profile);
    assert_eq!(low, mask_of(n, &[0, 1, 2, 3]));

    // floor(13 * 0.5) = 6
    let high = matching_mask(&angle().index_is_more_than(0.5).build(), &profile);
    assert_eq!(high, mask_of(n, &[6, 7, 8, 9, 10, 11, 12]));

    let rules = angle().index_is_more_than(0.5).is_minimum().build();
    assert_eq!(evaluate(&rules, &profile), Ok(7));
}

#[test]
fn test_within_and_outside_fraction() {
    let profile = sample_profile();
    let n = profile.len();

    // round(13 * 0.1) = 1 index each way
    let within = angle().is_minimum().index_is_within_fraction_of(0.1).build();
    assert_eq!(matching_mask(&within, &profile), mask_of(n, &[1, 2, 3]));

    let outside = angle().is_minimum().index_is_outside_fraction_of(0.1).build();
    assert_eq!(
        matching_mask(&outside, &profile),
        mask_of(n, &[1, 2, 3]).inverted()
    );
}

#[test]
fn test_within_fraction_wraps() {
    let profile = sample_profile();
    let n = profile.len();
    let rules = angle()
        .is_zero_index()
        .index_is_within_fraction_of(0.1)
        .build();
    assert_eq!(matching_mask(&rules, &profile), mask_of(n, &[12, 0, 1]));
}

#[test]
fn test_first_and_last_true() {
    let profile = sample_profile();
    let n = profile.len();
    let base = || angle().value_is_less_than(5.0);

    assert_eq!(evaluate(&base().is_first_index_in_region().build(), &profile), Ok(2));
    assert_eq!(evaluate(&base().is_last_index_in_region().build(), &profile), Ok(12));
    assert_eq!(
        matching_mask(&base().is_not_first_index_in_region().build(), &profile),
        mask_of(n, &[3, 7, 12])
    );
    assert_eq!(
        matching_mask(&base().is_not_last_index_in_region().build(), &profile),
        mask_of(n, &[2, 3, 7])
    );
}

#[test]
fn test_first_and_last_true_do_not_join_wrapped_runs() {
    let profile = vec![1.0, 1.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 1.0, 1.0];
    let base = || angle().value_is_less_than(5.0);

    assert_eq!(evaluate(&base().is_first_index_in_region().build(), &profile), Ok(0));
    assert_eq!(evaluate(&base().is_last_index_in_region().build(), &profile), Ok(9));
}

#[test]
fn test_constant_regions() {
    let profile = vec![180.0, 181.0, 179.0, 90.0, 180.0, 180.0, 180.0, 180.0, 100.0, 178.0];
    let n = profile.len();

    let regions = angle()
        .is_constant_region_at(180.0, Window::clamped(3), 5.0)
        .build();
    assert_eq!(
        matching_mask(&regions, &profile),
        mask_of(n, &[9, 0, 1, 2, 4, 5, 6, 7])
    );

    let long_only = angle()
        .is_constant_region_at(180.0, Window::clamped(5), 5.0)
        .build();
    assert_eq!(count_matching(&long_only, &profile), 0);

    let tail = angle()
        .index_is_more_than(0.6)
        .is_constant_region_at(180.0, Window::clamped(3), 5.0)
        .is_first_index_in_region()
        .build();
    assert_eq!(evaluate(&tail, &profile), Ok(6));
}

#[test]
fn test_constant_profile_is_one_region() {
    let profile = vec![180.0; 6];
    let fits = angle()
        .is_constant_region_at(180.0, Window::clamped(3), 1.0)
        .build();
    assert_eq!(count_matching(&fits, &profile), 6);

    let too_long = angle()
        .is_constant_region_at(180.0, Window::clamped(7), 1.0)
        .build();
    assert_eq!(count_matching(&too_long, &profile), 0);
}

#[test]
fn test_rule_order_matters() {
    let profile = pig_tail_profile();

    let forward = angle()
        .is_minimum()
        .index_is_within_fraction_of(0.07)
        .is_local_maximum()
        .build();
    assert_eq!(evaluate(&forward, &profile), Ok(57));

    let swapped = angle()
        .index_is_within_fraction_of(0.07)
        .is_minimum()
        .is_local_maximum()
        .build();
    assert_eq!(evaluate(&swapped, &profile), Err(EvalError::NoMatch));
}

#[test]
fn test_ambiguous_match_lists_candidates() {
    let profile = sample_profile();
    let rules = angle().value_is_less_than(5.0).build();
    assert_eq!(
        evaluate(&rules, &profile),
        Err(EvalError::AmbiguousMatch {
            candidates: vec![2, 3, 7, 12]
        })
    );
}

#[test]
fn test_empty_profile() {
    let profile: Vec<f64> = Vec::new();
    let rules = angle().is_minimum().build();
    assert_eq!(
        evaluate(&rules, &profile),
        Err(EvalError::EmptyProfile(ProfileKind::Angle))
    );
    assert_eq!(count_matching(&rules, &profile), 0);
}

#[test]
fn test_empty_rule_set_is_ambiguous_on_long_profiles() {
    let rules = angle().build();
    assert_eq!(evaluate(&rules, &vec![1.0]), Ok(0));
    assert!(matches!(
        evaluate(&rules, &sample_profile()),
        Err(EvalError::AmbiguousMatch { .. })
    ));
}

#[test]
fn test_out_of_range_parameters_never_panic() {
    let profiles = [sample_profile(), vec![1.0], vec![2.0, 1.0]];
    let fractions = [-1.0, 1.5, 10.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

    for profile in &profiles {
        for &fraction in &fractions {
            let rules = angle()
                .index_is_less_than(fraction)
                .index_is_more_than(fraction)
                .build();
            let _ = evaluate(&rules, profile);

            let rules = angle()
                .is_maximum()
                .index_is_within_fraction_of(fraction)
                .index_is_outside_fraction_of(fraction)
                .build();
            let _ = evaluate(&rules, profile);
        }

        let huge = Window::clamped(usize::MAX);
        let rules = angle()
            .is_local_minimum_within(huge)
            .is_constant_region_at(f64::NAN, huge, f64::INFINITY)
            .build();
        assert_eq!(evaluate(&rules, profile), Err(EvalError::NoMatch));
    }
}

#[test]
fn test_fraction_above_one_selects_everything() {
    let profile = sample_profile();
    let rules = angle().index_is_less_than(1.5).is_minimum().build();
    assert_eq!(evaluate(&rules, &profile), Ok(2));
}

#[test]
fn test_integer_profiles() {
    let profile: Vec<i32> = vec![30, 10, 20];
    assert_eq!(evaluate(&angle().is_minimum().build(), &profile), Ok(1));
    assert_eq!(evaluate(&angle().is_maximum().build(), profile.as_slice()), Ok(0));
}

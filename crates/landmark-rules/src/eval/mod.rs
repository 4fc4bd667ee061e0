//! Rule evaluation over circular profiles.
//!
//! Evaluation starts from an all-true mask and applies each rule of a
//! [`RuleSet`] to the mask left by the previous one. Every transform is
//! total: any profile of length one or more and any parameter value give a
//! mask, never a panic.

mod extrema;
mod region;

use landmark_core::error::Result;
use landmark_core::{EvalError, IndexMask, Profile};

use crate::rule::Rule;
use crate::rule_set::RuleSet;

pub(crate) use extrema::Extremum;

/// Applies one rule to `mask`, returning the narrowed mask.
///
/// The result always has the profile's length. Rules that select
/// positions (local extrema, constant regions, index ranges) intersect
/// with the incoming candidates; widening and inversion may add indices.
pub fn apply_rule<P>(rule: &Rule, profile: &P, mask: &IndexMask) -> IndexMask
where
    P: Profile + ?Sized,
{
    let n = profile.len();
    let candidate = |i: usize| mask.get(i);

    match *rule {
        Rule::IsZeroIndex { keep } => IndexMask::from_fn(n, |i| candidate(i) && ((i == 0) == keep)),
        Rule::IsMinimum { keep } => select_extremum(profile, mask, Extremum::Minimum, keep),
        Rule::IsMaximum { keep } => select_extremum(profile, mask, Extremum::Maximum, keep),
        Rule::IsLocalMinimum { keep, window } => {
            let minima = extrema::local_extrema(profile, window, Extremum::Minimum);
            IndexMask::from_fn(n, |i| candidate(i) && (minima.get(i) == keep))
        }
        Rule::IsLocalMaximum { keep, window } => {
            let maxima = extrema::local_extrema(profile, window, Extremum::Maximum);
            IndexMask::from_fn(n, |i| candidate(i) && (maxima.get(i) == keep))
        }
        Rule::ValueIsLessThan { threshold } => {
            IndexMask::from_fn(n, |i| candidate(i) && profile.value_at(i) < threshold)
        }
        Rule::ValueIsMoreThan { threshold } => {
            IndexMask::from_fn(n, |i| candidate(i) && profile.value_at(i) > threshold)
        }
        Rule::IndexIsLessThan { fraction } => {
            let limit = n as f64 * fraction;
            IndexMask::from_fn(n, |i| candidate(i) && (i as f64) < limit)
        }
        Rule::IndexIsMoreThan { fraction } => {
            let limit = (n as f64 * fraction).floor();
            IndexMask::from_fn(n, |i| candidate(i) && (i as f64) >= limit)
        }
        Rule::IsConstantRegion {
            value,
            min_length,
            epsilon,
        } => {
            let regions = region::constant_regions(profile, value, min_length, epsilon);
            IndexMask::from_fn(n, |i| candidate(i) && regions.get(i))
        }
        Rule::FirstTrue { keep } => select_single(n, mask, mask.first(), keep),
        Rule::LastTrue { keep } => select_single(n, mask, mask.last(), keep),
        Rule::IndexIsWithinFractionOf { fraction } => region::widen(n, mask, fraction),
        Rule::IndexIsOutsideFractionOf { fraction } => region::widen(n, mask, fraction).inverted(),
        Rule::Invert => IndexMask::from_fn(n, |i| !candidate(i)),
    }
}

/// Keeps only `chosen` (keep) or every candidate but `chosen` (!keep).
fn select_single(n: usize, mask: &IndexMask, chosen: Option<usize>, keep: bool) -> IndexMask {
    IndexMask::from_fn(n, |i| mask.get(i) && ((Some(i) == chosen) == keep))
}

/// Global extremum over the candidates; the lowest index wins ties.
fn select_extremum<P>(profile: &P, mask: &IndexMask, extremum: Extremum, keep: bool) -> IndexMask
where
    P: Profile + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;
    for i in mask.iter().take_while(|&i| i < profile.len()) {
        let value = profile.value_at(i);
        if value.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| extremum.beyond(b, value)) {
            best = Some((i, value));
        }
    }
    select_single(profile.len(), mask, best.map(|(i, _)| i), keep)
}

/// Mask left after applying every rule of `rule_set` in order.
///
/// An empty profile gives an empty mask.
pub fn matching_mask<P>(rule_set: &RuleSet, profile: &P) -> IndexMask
where
    P: Profile + ?Sized,
{
    let mut mask = IndexMask::all(profile.len());
    for rule in rule_set.rules() {
        mask = apply_rule(rule, profile, &mask);
        tracing::trace!(rule = %rule, remaining = mask.count(), "Applied rule");
    }
    mask
}

/// Number of indices surviving every rule of `rule_set`.
pub fn count_matching<P>(rule_set: &RuleSet, profile: &P) -> usize
where
    P: Profile + ?Sized,
{
    matching_mask(rule_set, profile).count()
}

/// Locates the single index selected by `rule_set`.
///
/// # Errors
///
/// - [`EvalError::EmptyProfile`] when the profile has no samples
/// - [`EvalError::NoMatch`] when no index survives
/// - [`EvalError::AmbiguousMatch`] when several indices survive
///
/// # Example
///
/// ```
/// use landmark_core::ProfileKind;
/// use landmark_rules::{evaluate, RuleSetBuilder};
///
/// let rp = RuleSetBuilder::new(ProfileKind::Angle).is_minimum().build();
/// let angles = vec![180.0, 150.0, 60.0, 170.0];
///
/// assert_eq!(evaluate(&rp, &angles), Ok(2));
/// ```
pub fn evaluate<P>(rule_set: &RuleSet, profile: &P) -> Result<usize>
where
    P: Profile + ?Sized,
{
    if profile.is_empty() {
        return Err(EvalError::EmptyProfile(rule_set.profile_kind()));
    }
    single_index(matching_mask(rule_set, profile))
}

pub(crate) fn single_index(mask: IndexMask) -> Result<usize> {
    match mask.count() {
        0 => Err(EvalError::NoMatch),
        1 => mask.first().ok_or(EvalError::NoMatch),
        _ => Err(EvalError::AmbiguousMatch {
            candidates: mask.indices(),
        }),
    }
}

#[cfg(test)]
mod tests;

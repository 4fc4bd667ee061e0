//! Local extrema of circular profiles.

use landmark_core::profile::wrap_index;
use landmark_core::{IndexMask, Profile};

use crate::rule::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extremum {
    Minimum,
    Maximum,
}

impl Extremum {
    /// Whether `value` lies strictly further in this direction than `than`.
    pub(crate) fn beyond(self, than: f64, value: f64) -> bool {
        match self {
            Extremum::Minimum => value < than,
            Extremum::Maximum => value > than,
        }
    }
}

/// Indices that are strict local extrema over `window` steps each side.
///
/// Values must move strictly away from the extremum for `window`
/// consecutive steps on both sides, wrapping around the profile. A plateau
/// of equal values is tested from its two ends and marked once, at its
/// lowest index. A profile of identical values has no extrema.
pub(crate) fn local_extrema<P>(profile: &P, window: Window, extremum: Extremum) -> IndexMask
where
    P: Profile + ?Sized,
{
    let values = profile.to_vec();
    let n = values.len();
    let mut mask = IndexMask::none(n);

    let Some(anchor) = (0..n).find(|&i| values[i] != values[wrap_index(i as isize - 1, n)]) else {
        return mask;
    };

    let mut start = anchor;
    let mut visited = 0;
    while visited < n {
        let mut len = 1;
        while len < n && values[(start + len) % n] == values[start] {
            len += 1;
        }
        let end = (start + len - 1) % n;

        if monotone_away(&values, start, -1, window, extremum)
            && monotone_away(&values, end, 1, window, extremum)
        {
            // A plateau running past the end of the profile contains index 0.
            let lowest = if start + len > n { 0 } else { start };
            mask.set(lowest, true);
        }

        visited += len;
        start = (start + len) % n;
    }
    mask
}

/// Walks `window` steps from `from` in direction `step`, requiring each
/// value to sit strictly on the far side of the previous one.
fn monotone_away(values: &[f64], from: usize, step: isize, window: Window, extremum: Extremum) -> bool {
    let n = values.len();
    let mut inner = values[from];
    let mut index = from as isize;
    // A strictly monotone walk cannot return to its start, so n steps suffice.
    for _ in 0..window.get().min(n) {
        index += step;
        let outer = values[wrap_index(index, n)];
        if !extremum.beyond(outer, inner) {
            return false;
        }
        inner = outer;
    }
    true
}

//! Region transforms: constant runs and fractional widening.

use landmark_core::{IndexMask, Profile};

use crate::rule::Window;

/// Maximal circular runs of values within `epsilon` of `value`, at least
/// `min_length` long.
pub(crate) fn constant_regions<P>(profile: &P, value: f64, min_length: Window, epsilon: f64) -> IndexMask
where
    P: Profile + ?Sized,
{
    let n = profile.len();
    let near = IndexMask::from_fn(n, |i| (profile.value_at(i) - value).abs() < epsilon);

    if near.count() == n {
        return if n >= min_length.get() {
            near
        } else {
            IndexMask::none(n)
        };
    }

    let mut regions = IndexMask::none(n);
    // Runs start right after an index outside the band; one exists here.
    let starts = (0..n).filter(|&i| near.get(i) && !near.get((i + n - 1) % n));
    for start in starts {
        let mut len = 0;
        while near.get((start + len) % n) {
            len += 1;
        }
        if len >= min_length.get() {
            for k in 0..len {
                regions.set((start + k) % n, true);
            }
        }
    }
    regions
}

/// Every index within `round(n * fraction)` steps of a candidate.
///
/// Negative or NaN fractions widen to nothing.
pub(crate) fn widen(n: usize, mask: &IndexMask, fraction: f64) -> IndexMask {
    let range = (n as f64 * fraction).round();
    if !(range >= 0.0) || !mask.has_candidates() {
        return IndexMask::none(n);
    }
    let range = range.min(n as f64) as usize;
    if 2 * range + 1 >= n {
        return IndexMask::all(n);
    }

    let mut widened = IndexMask::none(n);
    for candidate in mask.iter().take_while(|&i| i < n) {
        let centre = candidate as isize;
        for offset in -(range as isize)..=range as isize {
            widened.set_wrapped(centre + offset, true);
        }
    }
    widened
}

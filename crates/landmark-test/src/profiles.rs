//! Profiles with known landmark positions.

/// Thirteen values: minimum at 2, maximum at 9.
///
/// Local minima over one step: 2, 7, 12. Over two steps: 2, 7.
/// Local maxima over one step: 0, 5, 9. Over two steps: 5, 9.
/// Values below 5: 2, 3, 7, 12. Values above 12: 5, 9, 10.
pub fn sample_profile() -> Vec<f64> {
    vec![
        10.0, 5.0, 1.0, 2.0, 7.0, 19.0, 12.0, 3.0, 9.0, 20.0, 13.0, 6.0, 4.0,
    ]
}

/// All `len` values equal to `value`.
pub fn flat_profile(len: usize, value: f64) -> Vec<f64> {
    vec![value; len]
}

/// One hundred angles shaped like a pig sperm head.
///
/// The deepest angle is at 50. The only peak over five steps each side is
/// at 57, seven indices (0.07 of the perimeter) away from it.
pub fn pig_tail_profile() -> Vec<f64> {
    let mut profile = vec![150.0; 100];
    let shoulder = [130.0, 110.0, 90.0, 70.0, 50.0];
    let notch = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
    let fall = [65.0, 60.0, 55.0, 50.0, 45.0];

    profile[45..50].copy_from_slice(&shoulder);
    profile[50..58].copy_from_slice(&notch);
    profile[58..63].copy_from_slice(&fall);
    for value in &mut profile[63..] {
        *value = 45.0;
    }
    profile
}

/// One hundred angles shaped like a mouse sperm head.
///
/// Tip of the hook at 0, tail socket at 40, and the flat ventral edge
/// (180 degrees) from 70 to 89.
pub fn mouse_profile() -> Vec<f64> {
    let mut profile = vec![150.0; 100];
    profile[0] = 20.0;
    profile[1..6].copy_from_slice(&[40.0, 60.0, 80.0, 100.0, 120.0]);
    profile[95..100].copy_from_slice(&[120.0, 100.0, 80.0, 60.0, 40.0]);

    profile[35..40].copy_from_slice(&[140.0, 130.0, 120.0, 110.0, 100.0]);
    profile[40] = 90.0;
    profile[41..46].copy_from_slice(&[100.0, 110.0, 120.0, 130.0, 140.0]);

    profile[65..70].copy_from_slice(&[152.0, 156.0, 160.0, 164.0, 168.0]);
    for value in &mut profile[70..90] {
        *value = 180.0;
    }
    profile[90..95].copy_from_slice(&[168.0, 164.0, 160.0, 156.0, 152.0]);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(sample_profile().len(), 13);
        assert_eq!(pig_tail_profile().len(), 100);
        assert_eq!(mouse_profile().len(), 100);
    }

    #[test]
    fn test_pig_notch() {
        let profile = pig_tail_profile();
        assert_eq!(profile[50], 0.0);
        assert_eq!(profile[57], 70.0);
        assert_eq!(profile[99], 45.0);
    }
}

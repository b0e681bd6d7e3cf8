//! # Range Helpers
//!
//! Random sampling and clamping over integer ranges that may be empty.
//!
//! Several generation steps derive their bounds from map and room sizes, so a
//! range can collapse or invert for small inputs. These helpers never hand an
//! empty range to the sampler.

use rand::Rng;

/// Samples from `[low, high)`. Returns `low` when the range is empty.
///
/// # Examples
///
/// ```
/// use delve::utils::sample_half_open;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(sample_half_open(&mut rng, 4, 4), 4);
/// let value = sample_half_open(&mut rng, 4, 6);
/// assert!(value == 4 || value == 5);
/// ```
pub fn sample_half_open<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Samples from `[low, high]`. Returns `low` when `high < low`.
pub fn sample_inclusive<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high >= low {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

/// Clamps `value` into `[low, high]`, testing `low` first.
///
/// With inverted bounds a value below `low` becomes `low` and anything else
/// becomes `high`. Unlike [`i32::clamp`] this never panics.
///
/// # Examples
///
/// ```
/// use delve::utils::clamp_low_first;
///
/// assert_eq!(clamp_low_first(2, 3, 1), 3);
/// assert_eq!(clamp_low_first(5, 3, 1), 1);
/// ```
pub fn clamp_low_first(value: i32, low: i32, high: i32) -> i32 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

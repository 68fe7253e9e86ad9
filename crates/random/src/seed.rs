//! Conversion from a real-valued seed to a 64-bit generator state.
//!
//! A seed `s` selects the state `round(s * 2^63)`, i.e. seeds in `[0, 1)` are
//! spread over the non-negative half of the 64-bit state space. The scaled
//! integer is reduced to 64 bits by XOR-folding its 64-bit limbs, and negative
//! seeds take the two's complement of the folded magnitude. For `|s| < 1` the
//! fold is the identity, so the state is exactly the rounded scaled seed.
//!
//! The scale is 2^63, not the full 2^64 of the state. This is a deliberate
//! half-space mapping: seeds in `[0, 1)` reach only states below 2^63, and
//! negative seeds in `(-1, 0)` reach the upper half.
//!
//! Seeds that scale to the same integer select the same state. Seeds in
//! `[0, 1)` closer together than `2^-63` therefore collide, as do seeds whose
//! magnitudes differ by an exact factor of `2^64`.

use crate::error::SeedError;

/// 2^63: the scale applied to a seed before rounding.
pub const SEED_SCALE: f64 = 9_223_372_036_854_775_808.0;

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i32 = 1075;

/// A finite real seed.
///
/// # Examples
///
/// ```
/// use plainlang_random::Seed;
///
/// let seed = Seed::try_from(0.25).unwrap();
/// assert_eq!(seed.state(), 1 << 61);
/// assert!(Seed::try_from(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed(f64);

impl Seed {
    /// Accepts any `f64`.
    ///
    /// `NaN` selects state 0 and infinities select the extreme `i64` states,
    /// so callers that cannot fail still get a deterministic generator.
    pub fn from_f64_lossy(value: f64) -> Self {
        Seed(value)
    }

    /// The seed as supplied.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The 64-bit generator state selected by this seed.
    pub fn state(self) -> u64 {
        scale_to_state(self.0)
    }
}

impl TryFrom<f64> for Seed {
    type Error = SeedError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(Seed(value))
        } else {
            Err(SeedError::NonFinite(value))
        }
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed(value.into())
    }
}

impl From<f32> for Seed {
    fn from(value: f32) -> Self {
        Seed(value.into())
    }
}

/// Maps a real seed onto the 64-bit state space.
pub fn scale_to_state(seed: f64) -> u64 {
    if seed.is_nan() {
        return 0;
    }
    if seed.is_infinite() {
        // Saturating cast: i64::MAX or i64::MIN.
        return (seed as i64) as u64;
    }
    if seed.abs() < 1.0 {
        // Multiplying by a power of two is exact; the result fits in an i64.
        return ((seed * SEED_SCALE).round() as i64) as u64;
    }

    // |seed| >= 1, so seed * 2^63 is the integer mantissa * 2^shift with
    // shift >= 11. Folding its limbs is a rotation of the 53-bit mantissa.
    let bits = seed.to_bits();
    let biased_exponent = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let mantissa = (bits & MANTISSA_MASK) | (1 << MANTISSA_BITS);
    let shift = biased_exponent - EXPONENT_BIAS + 63;
    let folded = mantissa.rotate_left(shift.rem_euclid(64) as u32);

    if seed.is_sign_negative() {
        folded.wrapping_neg()
    } else {
        folded
    }
}

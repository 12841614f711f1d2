//! Integer math helpers for the pattern pipeline.

use core::f32::consts::PI;

/// Sine of an angle in degrees, scaled to -100..=100.
///
/// The pattern intensity envelopes run on an all-integer pipeline; this is
/// the single place a float exists, immediately truncated back to the
/// centi-amplitude the envelopes expect.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[inline]
pub fn sin100(angle_degrees: u32) -> i32 {
    let radians = (angle_degrees % 360) as f32 * PI / 180.0;
    (libm::sinf(radians) * 100.0) as i32
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Scale a channel by an intensity expressed in percent.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn scale_channel(channel: u8, intensity: i32) -> u8 {
    ((channel as i32 * intensity) / 100) as u8
}

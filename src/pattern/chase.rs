//! Chase pattern
//!
//! One zone at a time carries zone 0's original color at full intensity
//! while the rest sit dimmed to one sixth.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;

const BASE_PERIOD_MS: u64 = 1200;
const DIM_DIVISOR: u8 = 6;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(
    elapsed_ms: u64,
    speed: u8,
    originals: &[Rgb; ZONE_COUNT],
) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    let active_zone = ((pos * ZONE_COUNT as u64) / cycle) as usize;
    let base = originals[0];
    let dimmed = Rgb {
        r: base.r / DIM_DIVISOR,
        g: base.g / DIM_DIVISOR,
        b: base.b / DIM_DIVISOR,
    };

    let mut frame = [dimmed; ZONE_COUNT];
    frame[active_zone] = base;
    frame
}

//! Wave pattern
//!
//! The cycle is quantized into four steps; each zone rides the step offset
//! by its own index, giving a band of intensity rolling across the zones.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;
use crate::math::{scale_channel, sin100};

const BASE_PERIOD_MS: u64 = 2000;
const WAVE_STEPS: u64 = 4;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(
    elapsed_ms: u64,
    speed: u8,
    originals: &[Rgb; ZONE_COUNT],
) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    let mut frame = *originals;
    for (zone, color) in frame.iter_mut().enumerate() {
        let wave_pos = ((pos * WAVE_STEPS) / cycle + zone as u64) % WAVE_STEPS;
        let angle = ((360 * wave_pos) / WAVE_STEPS) as u32;
        let intensity = 30 + (70 * (100 + sin100(angle))) / 200;

        color.r = scale_channel(color.r, intensity);
        color.g = scale_channel(color.g, intensity);
        color.b = scale_channel(color.b, intensity);
    }
    frame
}

//! Aurora pattern
//!
//! Slow green/blue glow; the phase advances at double rate and each zone
//! is shifted by 1000 ticks for a drifting, layered look.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;
use crate::math::{scale_channel, sin100};

const BASE_PERIOD_MS: u64 = 4000;
const ZONE_PHASE_MS: u64 = 1000;

const PALETTE: Rgb = Rgb {
    r: 20,
    g: 200,
    b: 180,
};

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(elapsed_ms: u64, speed: u8) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    let mut frame = [Rgb::default(); ZONE_COUNT];
    for (zone, color) in frame.iter_mut().enumerate() {
        let wave_pos = (pos * 2 + zone as u64 * ZONE_PHASE_MS) % cycle;
        let angle = ((360 * wave_pos) / cycle) as u32;
        let intensity = 30 + (70 * (100 + sin100(angle))) / 200;

        *color = Rgb {
            r: scale_channel(PALETTE.r, intensity),
            g: scale_channel(PALETTE.g, intensity),
            b: scale_channel(PALETTE.b, intensity),
        };
    }
    frame
}

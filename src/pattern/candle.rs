//! Candle pattern
//!
//! Fast flicker over a fixed warm palette, phase-shifted per zone.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;
use crate::math::scale_channel;

const BASE_PERIOD_MS: u64 = 100;
const ZONE_PHASE_MS: u64 = 500;

const WARM: Rgb = Rgb {
    r: 255,
    g: 150,
    b: 50,
};

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(elapsed_ms: u64, speed: u8) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    let mut frame = [Rgb::default(); ZONE_COUNT];
    for (zone, color) in frame.iter_mut().enumerate() {
        let flicker = (pos + zone as u64 * ZONE_PHASE_MS) % cycle;
        let intensity = (60 + (40 * flicker) / cycle) as i32;

        *color = Rgb {
            r: scale_channel(WARM.r, intensity),
            g: scale_channel(WARM.g, intensity),
            b: scale_channel(WARM.b, intensity),
        };
    }
    frame
}

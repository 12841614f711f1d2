//! Sparkle pattern
//!
//! Each zone flashes pure white for the first eighth of its own offset
//! window, then rests at one eighth of zone 0's original color.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;

const BASE_PERIOD_MS: u64 = 3000;
const ZONE_OFFSET_MS: u64 = 800;
const REST_DIVISOR: u8 = 8;

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

pub(super) fn render(
    elapsed_ms: u64,
    speed: u8,
    originals: &[Rgb; ZONE_COUNT],
) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let base = originals[0];
    let rest = Rgb {
        r: base.r / REST_DIVISOR,
        g: base.g / REST_DIVISOR,
        b: base.b / REST_DIVISOR,
    };
    let flash_window = cycle / 8;

    let mut frame = [rest; ZONE_COUNT];
    for (zone, color) in frame.iter_mut().enumerate() {
        let offset = (elapsed_ms + zone as u64 * ZONE_OFFSET_MS) % cycle;
        if offset < flash_window {
            *color = WHITE;
        }
    }
    frame
}

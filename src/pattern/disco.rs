//! Disco pattern
//!
//! Binary strobe: a fixed bright color per zone for the first half of the
//! cycle, all zones off for the second half.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;

const BASE_PERIOD_MS: u64 = 300;

const FLASH_COLORS: [Rgb; ZONE_COUNT] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
    Rgb {
        r: 255,
        g: 0,
        b: 255,
    },
];

pub(super) fn render(elapsed_ms: u64, speed: u8) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    if pos < cycle / 2 {
        FLASH_COLORS
    } else {
        [Rgb::default(); ZONE_COUNT]
    }
}

//! Pulse pattern
//!
//! The wave intensity envelope, applied uniformly instead of per zone.

use super::cycle_ms;
use crate::color::Rgb;
use crate::frame::ZONE_COUNT;
use crate::math::{scale_channel, sin100};

const BASE_PERIOD_MS: u64 = 1500;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(
    elapsed_ms: u64,
    speed: u8,
    originals: &[Rgb; ZONE_COUNT],
) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    let angle = ((360 * pos) / cycle) as u32;
    let intensity = 30 + (70 * (100 + sin100(angle))) / 200;

    originals.map(|color| Rgb {
        r: scale_channel(color.r, intensity),
        g: scale_channel(color.g, intensity),
        b: scale_channel(color.b, intensity),
    })
}

//! Rainbow pattern
//!
//! Full-saturation hue sweep with a 90-degree offset per zone.

use super::cycle_ms;
use crate::color::{Rgb, hsv_to_rgb};
use crate::frame::ZONE_COUNT;

const BASE_PERIOD_MS: u64 = 3000;
const ZONE_HUE_STEP: u64 = 90;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(elapsed_ms: u64, speed: u8) -> [Rgb; ZONE_COUNT] {
    let cycle = cycle_ms(BASE_PERIOD_MS, speed);
    let pos = elapsed_ms % cycle;

    let mut frame = [Rgb::default(); ZONE_COUNT];
    for (zone, color) in frame.iter_mut().enumerate() {
        let hue = ((360 * pos) / cycle + zone as u64 * ZONE_HUE_STEP) % 360;
        *color = hsv_to_rgb(hue as u16, 100, 100);
    }
    frame
}

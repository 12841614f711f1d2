//! Typed view over the fixed-size lighting frame.
//!
//! The firmware exposes one 128-byte buffer for the whole lighting state.
//! Zone colors occupy four 3-byte windows starting at offset 25; the
//! remaining bytes belong to unrelated firmware fields and must survive a
//! read-merge-write cycle untouched.

use crate::color::Rgb;

/// Number of independently addressable zones.
pub const ZONE_COUNT: usize = 4;

/// Size of the raw frame buffer shared with the firmware.
pub const FRAME_LEN: usize = 128;

/// Byte offset of zone 0's color window.
const COLOR_BASE_OFFSET: usize = 25;

/// Stride between consecutive zone windows.
const COLOR_STRIDE: usize = 3;

/// One full lighting frame as read from or written to the firmware.
///
/// Exposes only the per-zone color windows; every other byte is carried
/// through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFrame {
    raw: [u8; FRAME_LEN],
}

impl ColorFrame {
    /// An all-zero frame.
    pub const fn new() -> Self {
        Self {
            raw: [0; FRAME_LEN],
        }
    }

    /// Wrap a raw buffer read from the firmware.
    pub const fn from_raw(raw: [u8; FRAME_LEN]) -> Self {
        Self { raw }
    }

    /// Raw bytes in wire order.
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.raw
    }

    const fn offset_of(zone: usize) -> usize {
        COLOR_BASE_OFFSET + zone * COLOR_STRIDE
    }

    /// Color of one zone window. `zone` must be below [`ZONE_COUNT`].
    pub const fn zone_color(&self, zone: usize) -> Rgb {
        let offset = Self::offset_of(zone);
        Rgb {
            r: self.raw[offset],
            g: self.raw[offset + 1],
            b: self.raw[offset + 2],
        }
    }

    /// Overwrite one zone window, leaving every other byte untouched.
    pub const fn set_zone_color(&mut self, zone: usize, color: Rgb) {
        let offset = Self::offset_of(zone);
        self.raw[offset] = color.r;
        self.raw[offset + 1] = color.g;
        self.raw[offset + 2] = color.b;
    }

    /// Overwrite all zone windows from a full frame of colors.
    pub fn set_all(&mut self, colors: &[Rgb; ZONE_COUNT]) {
        for (zone, color) in colors.iter().enumerate() {
            self.set_zone_color(zone, *color);
        }
    }
}

impl Default for ColorFrame {
    fn default() -> Self {
        Self::new()
    }
}

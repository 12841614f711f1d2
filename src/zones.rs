//! Zone color bookkeeping and hardware synchronization.
//!
//! Each zone tracks two colors: the `original` a user asked for, and the
//! `current` actually on the wire after global brightness. All hardware
//! writes funnel through one read-merge-write path so bytes outside the
//! zone windows survive.

use crate::Transport;
use crate::color::{Rgb, scale_by_brightness};
use crate::error::HardwareError;
use crate::frame::ZONE_COUNT;
use crate::protocol::{HardwareChannel, QueryOutcome};

const BRIGHTNESS_MAX: u8 = 100;

/// One addressable lighting zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zone {
    /// User-intended color, before brightness
    original: Rgb,
    /// Last color written to or read from hardware
    current: Rgb,
}

impl Zone {
    pub const fn original(&self) -> Rgb {
        self.original
    }

    pub const fn current(&self) -> Rgb {
        self.current
    }
}

/// The four zones, the global brightness, and the channel that syncs them.
pub struct ZoneSet<T: Transport> {
    channel: HardwareChannel<T>,
    zones: [Zone; ZONE_COUNT],
    brightness: u8,
}

impl<T: Transport> ZoneSet<T> {
    /// Set up the zones, seeding original and current colors from the
    /// frame currently on the hardware.
    pub fn new(transport: T) -> Result<Self, HardwareError> {
        let mut channel = HardwareChannel::new(transport);
        let mut zones = [Zone::default(); ZONE_COUNT];

        let (outcome, frame) = channel.read_frame()?;
        if outcome == QueryOutcome::Success {
            for (index, zone) in zones.iter_mut().enumerate() {
                let color = frame.zone_color(index);
                zone.original = color;
                zone.current = color;
            }
        }

        Ok(Self {
            channel,
            zones,
            brightness: BRIGHTNESS_MAX,
        })
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Zone state by index. `index` must be below [`ZONE_COUNT`].
    pub const fn zone(&self, index: usize) -> &Zone {
        &self.zones[index]
    }

    /// Original colors of all zones in index order.
    pub fn originals(&self) -> [Rgb; ZONE_COUNT] {
        let mut colors = [Rgb::default(); ZONE_COUNT];
        for (color, zone) in colors.iter_mut().zip(&self.zones) {
            *color = zone.original;
        }
        colors
    }

    /// Replace the originals without touching hardware. Used when a
    /// persisted snapshot overrides the colors seeded at setup.
    pub fn restore_originals(&mut self, colors: &[Rgb; ZONE_COUNT]) {
        for (zone, color) in self.zones.iter_mut().zip(colors) {
            zone.original = *color;
        }
    }

    /// Replace the global brightness without touching hardware. Values
    /// above 100 are clamped.
    pub const fn restore_brightness(&mut self, percent: u8) {
        self.brightness = if percent > BRIGHTNESS_MAX {
            BRIGHTNESS_MAX
        } else {
            percent
        };
    }

    /// Read one zone's color from hardware and refresh its `current`.
    ///
    /// An unsupported firmware leaves the cached color in place.
    pub fn read_zone(&mut self, index: usize) -> Result<Rgb, HardwareError> {
        let (outcome, frame) = self.channel.read_frame()?;
        if outcome == QueryOutcome::Success {
            self.zones[index].current = frame.zone_color(index);
        }
        Ok(self.zones[index].current)
    }

    /// Push a full frame of colors, applying global brightness to each.
    ///
    /// Reads the live frame first and merges the four zone windows into it,
    /// so unrelated firmware bytes are written back unchanged.
    pub fn write_all(&mut self, colors: &[Rgb; ZONE_COUNT]) -> Result<(), HardwareError> {
        let (_, mut frame) = self.channel.read_frame()?;

        for (index, color) in colors.iter().enumerate() {
            let scaled = scale_by_brightness(*color, self.brightness);
            self.zones[index].current = scaled;
            frame.set_zone_color(index, scaled);
        }

        self.channel.write_frame(&frame)?;
        Ok(())
    }

    /// Write every zone's original color back through the hardware.
    pub fn write_originals(&mut self) -> Result<(), HardwareError> {
        let originals = self.originals();
        self.write_all(&originals)
    }

    /// Set one zone's user-intended color and write it through.
    pub fn set_zone_color(&mut self, index: usize, color: Rgb) -> Result<(), HardwareError> {
        self.zones[index].original = color;
        let scaled = scale_by_brightness(color, self.brightness);

        let (_, mut frame) = self.channel.read_frame()?;
        frame.set_zone_color(index, scaled);
        self.channel.write_frame(&frame)?;

        self.zones[index].current = scaled;
        Ok(())
    }

    /// Set every zone's user-intended color and write the frame through.
    pub fn set_all_color(&mut self, color: Rgb) -> Result<(), HardwareError> {
        for zone in &mut self.zones {
            zone.original = color;
        }
        self.write_all(&[color; ZONE_COUNT])
    }

    /// Change global brightness and rescale every zone from its original.
    ///
    /// Values above 100 are clamped, not rejected.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), HardwareError> {
        self.brightness = percent.min(BRIGHTNESS_MAX);
        self.write_originals()
    }
}

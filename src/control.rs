//! Control surface for the lighting engine.
//!
//! Validated get/set operations over mode, speed, brightness and zone
//! colors. Bad input is rejected before any hardware I/O; every successful
//! state change is persisted. Either call the setters directly from the
//! engine owner, or feed [`ControlIntent`]s through the channel and let
//! `poll` drain them.

use embassy_time::Instant;
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Transport;
use crate::color::{Rgb, format_rgb, parse_rgb};
use crate::engine::{AnimationEngine, TickResult};
use crate::error::{ControlError, HardwareError, ValidationError};
use crate::frame::ZONE_COUNT;
use crate::intent::{ControlIntent, IntentReceiver};
use crate::pattern::PatternId;
use crate::snapshot::{Snapshot, SnapshotStorage, StateStore};
use crate::zones::ZoneSet;

const SPEED_MIN: u8 = 1;
const SPEED_MAX: u8 = 10;

/// Engine plus persistence, exposed as validated control operations.
pub struct LightController<T: Transport, S: StateStore> {
    engine: AnimationEngine<T>,
    storage: SnapshotStorage<S>,
    intents: Option<IntentReceiver>,
}

impl<T: Transport, S: StateStore> LightController<T, S> {
    /// Set up the controller.
    ///
    /// Reads the hardware frame to seed zone colors, then lets a loadable
    /// snapshot override mode, speed, brightness and originals. A missing
    /// or undecodable snapshot leaves the defaults. If the restored mode
    /// animates, scheduling starts immediately.
    pub fn new(transport: T, store: S, now: Instant) -> Result<Self, HardwareError> {
        let zones = ZoneSet::new(transport)?;
        let mut engine = AnimationEngine::new(zones);
        let mut storage = SnapshotStorage::new(store);

        match storage.load() {
            Ok(snapshot) => {
                engine.restore_state(
                    snapshot.mode,
                    snapshot.speed,
                    snapshot.brightness,
                    &snapshot.colors,
                );
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[LightController.new] no saved state ({})", _error);
            }
        }

        if engine.mode() != PatternId::Static {
            engine.start(now);
        }

        Ok(Self {
            engine,
            storage,
            intents: None,
        })
    }

    /// Attach an intent channel drained on every `poll`.
    pub fn attach_intents(&mut self, receiver: IntentReceiver) {
        self.intents = Some(receiver);
    }

    pub const fn engine(&self) -> &AnimationEngine<T> {
        &self.engine
    }

    /// Drain pending intents, then advance the animation by at most one
    /// tick. An intent that fails is dropped; the tick result is the
    /// caller's cue for when to poll again.
    pub fn poll(&mut self, now: Instant) -> Result<TickResult, HardwareError> {
        self.process_intents(now);
        self.engine.poll(now)
    }

    fn process_intents(&mut self, now: Instant) {
        let Some(receiver) = self.intents.take() else {
            return;
        };

        while let Ok(intent) = receiver.try_receive() {
            let result = match intent {
                ControlIntent::SetMode(mode) => self.apply_mode(mode, now),
                ControlIntent::SetSpeed(speed) => self.set_speed(speed, now),
                ControlIntent::SetBrightness(percent) => self.set_brightness(percent),
                ControlIntent::SetZoneColor(index, color) => self.apply_zone_color(index, color),
                ControlIntent::SetAllColor(color) => self.apply_all_color(color),
            };
            if let Err(_error) = result {
                #[cfg(feature = "esp32-log")]
                println!("[LightController.poll] intent dropped ({})", _error);
            }
        }

        self.intents = Some(receiver);
    }

    pub const fn mode(&self) -> PatternId {
        self.engine.mode()
    }

    /// Switch the animation mode by name.
    ///
    /// The running pattern is stopped (restoring original colors) before
    /// the new one starts. An unknown name is rejected with no state
    /// change.
    pub fn set_mode(&mut self, name: &str, now: Instant) -> Result<(), ControlError> {
        let mode = PatternId::parse_from_str(name.trim()).ok_or(ValidationError::UnknownMode)?;
        self.apply_mode(mode, now)
    }

    fn apply_mode(&mut self, mode: PatternId, now: Instant) -> Result<(), ControlError> {
        self.engine.stop()?;
        self.engine.set_mode(mode);
        if mode != PatternId::Static {
            self.engine.start(now);
        }
        self.save();
        Ok(())
    }

    pub const fn speed(&self) -> u8 {
        self.engine.speed()
    }

    /// Change animation speed. Out-of-range values are rejected with no
    /// state change.
    pub fn set_speed(&mut self, speed: u8, now: Instant) -> Result<(), ControlError> {
        if !(SPEED_MIN..=SPEED_MAX).contains(&speed) {
            return Err(ValidationError::SpeedOutOfRange.into());
        }
        self.engine.set_speed(speed, now)?;
        self.save();
        Ok(())
    }

    pub const fn brightness(&self) -> u8 {
        self.engine.brightness()
    }

    /// Change global brightness. Values above 100 are clamped, not
    /// rejected.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), ControlError> {
        self.engine.set_brightness(percent)?;
        self.save();
        Ok(())
    }

    /// Read one zone's color from hardware, formatted as `#rrggbb`.
    pub fn zone_color(&mut self, index: usize) -> Result<String<8>, ControlError> {
        if index >= ZONE_COUNT {
            return Err(ValidationError::UnknownZone.into());
        }
        let color = self.engine.read_zone(index)?;
        Ok(format_rgb(color))
    }

    /// Set one zone's color from a hex string. Cancels any running
    /// pattern.
    pub fn set_zone_color(&mut self, index: usize, hex: &str) -> Result<(), ControlError> {
        if index >= ZONE_COUNT {
            return Err(ValidationError::UnknownZone.into());
        }
        let color = parse_rgb(hex)?;
        self.apply_zone_color(index, color)
    }

    fn apply_zone_color(&mut self, index: usize, color: Rgb) -> Result<(), ControlError> {
        if index >= ZONE_COUNT {
            return Err(ValidationError::UnknownZone.into());
        }
        self.engine.set_zone_color(index, color)?;
        self.save();
        Ok(())
    }

    /// Read the all-zones color (zone 0) from hardware, formatted as
    /// `#rrggbb`.
    pub fn all_color(&mut self) -> Result<String<8>, ControlError> {
        let color = self.engine.read_zone(0)?;
        Ok(format_rgb(color))
    }

    /// Set every zone's color from a hex string. Cancels any running
    /// pattern.
    pub fn set_all_color(&mut self, hex: &str) -> Result<(), ControlError> {
        let color = parse_rgb(hex)?;
        self.apply_all_color(color)
    }

    fn apply_all_color(&mut self, color: Rgb) -> Result<(), ControlError> {
        self.engine.set_all_color(color)?;
        self.save();
        Ok(())
    }

    /// Persist the current state. Save failures are logged and swallowed;
    /// persistence is best-effort.
    fn save(&mut self) {
        let snapshot = Snapshot {
            mode: self.engine.mode(),
            speed: self.engine.speed(),
            brightness: self.engine.brightness(),
            colors: self.engine.originals(),
        };
        let _ = self.storage.save(&snapshot);
    }
}

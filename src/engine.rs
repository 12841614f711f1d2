//! Animation scheduling engine.
//!
//! Owns the animation state machine and drives one frame per tick through
//! the zone set. The caller owns the loop: `poll(now)` computes and pushes
//! at most one frame, then reports when to wake next, so there is never
//! more than one hardware push in flight.

use embassy_time::{Duration, Instant};

use crate::Transport;
use crate::color::Rgb;
use crate::error::HardwareError;
use crate::frame::ZONE_COUNT;
use crate::pattern::PatternId;
use crate::zones::ZoneSet;

/// Interval between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

const SPEED_MIN: u8 = 1;
const SPEED_MAX: u8 = 10;

/// Animation state machine.
///
/// `active` is true only while a non-static pattern is scheduled; `speed`
/// stays within 1-10.
#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    pub mode: PatternId,
    pub speed: u8,
    pub active: bool,
    pub start_time: Instant,
}

impl AnimationState {
    const fn new() -> Self {
        Self {
            mode: PatternId::Static,
            speed: SPEED_MIN,
            active: false,
            start_time: Instant::from_millis(0),
        }
    }
}

/// Result of one poll.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// The animation engine: state machine plus tick scheduling.
pub struct AnimationEngine<T: Transport> {
    zones: ZoneSet<T>,
    state: AnimationState,
    next_tick: Instant,
}

impl<T: Transport> AnimationEngine<T> {
    pub const fn new(zones: ZoneSet<T>) -> Self {
        Self {
            zones,
            state: AnimationState::new(),
            next_tick: Instant::from_millis(0),
        }
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn mode(&self) -> PatternId {
        self.state.mode
    }

    pub const fn speed(&self) -> u8 {
        self.state.speed
    }

    pub const fn is_active(&self) -> bool {
        self.state.active
    }

    pub const fn brightness(&self) -> u8 {
        self.zones.brightness()
    }

    /// One zone's user-intended color.
    pub const fn zone_original(&self, index: usize) -> Rgb {
        self.zones.zone(index).original()
    }

    /// Original colors of all zones in index order.
    pub fn originals(&self) -> [Rgb; ZONE_COUNT] {
        self.zones.originals()
    }

    /// Read one zone's color back from hardware.
    pub fn read_zone(&mut self, index: usize) -> Result<Rgb, HardwareError> {
        self.zones.read_zone(index)
    }

    /// Begin scheduling the current pattern.
    ///
    /// A static mode never runs; starting it just forces the idle state.
    pub fn start(&mut self, now: Instant) {
        if self.state.mode == PatternId::Static {
            self.state.active = false;
            return;
        }

        self.state.start_time = now;
        self.state.active = true;
        self.next_tick = now + TICK_INTERVAL;
    }

    /// Stop scheduling and restore every zone to its original color.
    ///
    /// The restore write happens before this returns, so a stale frame can
    /// never land after a stop.
    pub fn stop(&mut self) -> Result<(), HardwareError> {
        self.state.active = false;
        self.zones.write_originals()
    }

    /// Select a pattern. Does not start or stop scheduling; callers wrap a
    /// mode change in `stop()` / `start()`.
    pub const fn set_mode(&mut self, mode: PatternId) {
        self.state.mode = mode;
    }

    /// Change animation speed, clamped to 1-10.
    ///
    /// A running animation restarts so the new cycle timing applies from a
    /// clean phase instead of mid-cycle.
    pub fn set_speed(&mut self, speed: u8, now: Instant) -> Result<(), HardwareError> {
        self.state.speed = speed.clamp(SPEED_MIN, SPEED_MAX);

        if self.state.active {
            self.stop()?;
            self.start(now);
        }
        Ok(())
    }

    /// Change global brightness and write every zone through.
    pub fn set_brightness(&mut self, percent: u8) -> Result<(), HardwareError> {
        self.zones.set_brightness(percent)
    }

    /// Set one zone's color. Cancels any running pattern and drops back to
    /// static mode before writing through.
    pub fn set_zone_color(&mut self, index: usize, color: Rgb) -> Result<(), HardwareError> {
        self.stop()?;
        self.state.mode = PatternId::Static;
        self.zones.set_zone_color(index, color)
    }

    /// Set every zone to one color. Cancels any running pattern and drops
    /// back to static mode before writing through.
    pub fn set_all_color(&mut self, color: Rgb) -> Result<(), HardwareError> {
        self.stop()?;
        self.state.mode = PatternId::Static;
        self.zones.set_all_color(color)
    }

    /// Install a previously persisted state without touching hardware.
    ///
    /// Out-of-range fields are clamped. The next write or tick brings the
    /// hardware in line.
    pub fn restore_state(
        &mut self,
        mode: PatternId,
        speed: u8,
        brightness: u8,
        originals: &[Rgb; ZONE_COUNT],
    ) {
        self.state.mode = mode;
        self.state.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
        self.zones.restore_brightness(brightness);
        self.zones.restore_originals(originals);
    }

    /// Advance the animation by at most one tick.
    ///
    /// Idle (inactive or static) polls push nothing. A poll arriving more
    /// than one interval late drops the backlog instead of replaying it.
    /// A failing push is reported but the schedule still advances, so one
    /// bad transaction leaves the hardware stale for a single tick only.
    pub fn poll(&mut self, now: Instant) -> Result<TickResult, HardwareError> {
        if !self.state.active || self.state.mode == PatternId::Static {
            return Ok(TickResult {
                next_deadline: now + TICK_INTERVAL,
                sleep_duration: TICK_INTERVAL,
            });
        }

        if now < self.next_tick {
            return Ok(TickResult {
                next_deadline: self.next_tick,
                sleep_duration: self.next_tick - now,
            });
        }

        if now > self.next_tick + TICK_INTERVAL {
            self.next_tick = now;
        }
        self.next_tick += TICK_INTERVAL;

        let elapsed_ms = now.duration_since(self.state.start_time).as_millis();
        let frame = self
            .state
            .mode
            .render_frame(elapsed_ms, self.state.speed, &self.zones.originals());

        let result = TickResult {
            next_deadline: self.next_tick,
            sleep_duration: if self.next_tick > now {
                self.next_tick - now
            } else {
                Duration::from_millis(0)
            },
        };

        self.zones.write_all(&frame)?;
        Ok(result)
    }
}

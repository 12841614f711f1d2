#![no_std]

pub mod color;
pub mod control;
pub mod engine;
pub mod error;
pub mod frame;
pub mod intent;
pub mod math;
pub mod pattern;
pub mod protocol;
pub mod snapshot;
pub mod zones;

pub use color::{Rgb, hsv_to_rgb, parse_rgb, scale_by_brightness};
pub use control::LightController;
pub use engine::{AnimationEngine, AnimationState, TICK_INTERVAL, TickResult};
pub use error::{
    ControlError, HardwareError, ProtocolError, SnapshotError, TransportError, ValidationError,
};
pub use frame::{ColorFrame, FRAME_LEN, ZONE_COUNT};
pub use intent::{ControlIntent, IntentChannel, IntentReceiver, IntentSender};
pub use pattern::PatternId;
pub use protocol::{HardwareChannel, QueryOutcome, SizeClass};
pub use snapshot::{Snapshot, SnapshotStorage, StateStore};
pub use zones::ZoneSet;

pub use embassy_time::{Duration, Instant};

/// Abstract BIOS transport trait
///
/// Implement this trait to carry encoded query envelopes to the platform
/// firmware. The engine is generic over this trait.
pub trait Transport {
    /// Send one encoded request and read the raw response into `response`.
    ///
    /// `size_class` declares the expected response size bucket. Returns the
    /// number of response bytes written.
    fn exchange(
        &mut self,
        size_class: SizeClass,
        request: &[u8],
        response: &mut [u8],
    ) -> Result<usize, TransportError>;
}

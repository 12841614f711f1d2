//! Control intents.
//!
//! Typed state-change requests that a request-handling context can enqueue
//! without blocking on hardware I/O. The controller drains the channel at
//! the top of each poll, so every hardware transaction still happens on
//! the single engine owner.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::color::Rgb;
use crate::pattern::PatternId;

/// A requested state change.
#[derive(Debug, Clone, Copy)]
pub enum ControlIntent {
    /// Switch the animation mode (stop, switch, restart)
    SetMode(PatternId),
    /// Change animation speed
    SetSpeed(u8),
    /// Change global brightness
    SetBrightness(u8),
    /// Set one zone's color and drop to static mode
    SetZoneColor(usize, Rgb),
    /// Set all zones' color and drop to static mode
    SetAllColor(Rgb),
}

const INTENT_CHANNEL_SIZE: usize = 4;

/// Type alias for intent sender
pub type IntentSender =
    Sender<'static, CriticalSectionRawMutex, ControlIntent, INTENT_CHANNEL_SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver =
    Receiver<'static, CriticalSectionRawMutex, ControlIntent, INTENT_CHANNEL_SIZE>;

/// Type alias for the intent channel
pub type IntentChannel = Channel<CriticalSectionRawMutex, ControlIntent, INTENT_CHANNEL_SIZE>;

//! Animation pattern library.
//!
//! Each pattern is a pure function of elapsed time, speed and the zones'
//! original colors, so a frame is reproducible from its inputs alone.

mod aurora;
mod breathing;
mod candle;
mod chase;
mod disco;
mod pulse;
mod rainbow;
mod sparkle;
mod wave;

use crate::color::Rgb;
use crate::frame::ZONE_COUNT;

const PATTERN_NAME_STATIC: &str = "static";
const PATTERN_NAME_BREATHING: &str = "breathing";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_WAVE: &str = "wave";
const PATTERN_NAME_PULSE: &str = "pulse";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_SPARKLE: &str = "sparkle";
const PATTERN_NAME_CANDLE: &str = "candle";
const PATTERN_NAME_AURORA: &str = "aurora";
const PATTERN_NAME_DISCO: &str = "disco";

const PATTERN_ID_STATIC: u8 = 0;
const PATTERN_ID_BREATHING: u8 = 1;
const PATTERN_ID_RAINBOW: u8 = 2;
const PATTERN_ID_WAVE: u8 = 3;
const PATTERN_ID_PULSE: u8 = 4;
const PATTERN_ID_CHASE: u8 = 5;
const PATTERN_ID_SPARKLE: u8 = 6;
const PATTERN_ID_CANDLE: u8 = 7;
const PATTERN_ID_AURORA: u8 = 8;
const PATTERN_ID_DISCO: u8 = 9;

/// Known animation patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PatternId {
    /// No animation; the last written colors persist
    #[default]
    Static = PATTERN_ID_STATIC,
    Breathing = PATTERN_ID_BREATHING,
    Rainbow = PATTERN_ID_RAINBOW,
    Wave = PATTERN_ID_WAVE,
    Pulse = PATTERN_ID_PULSE,
    Chase = PATTERN_ID_CHASE,
    Sparkle = PATTERN_ID_SPARKLE,
    Candle = PATTERN_ID_CANDLE,
    Aurora = PATTERN_ID_AURORA,
    Disco = PATTERN_ID_DISCO,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_STATIC => Self::Static,
            PATTERN_ID_BREATHING => Self::Breathing,
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_WAVE => Self::Wave,
            PATTERN_ID_PULSE => Self::Pulse,
            PATTERN_ID_CHASE => Self::Chase,
            PATTERN_ID_SPARKLE => Self::Sparkle,
            PATTERN_ID_CANDLE => Self::Candle,
            PATTERN_ID_AURORA => Self::Aurora,
            PATTERN_ID_DISCO => Self::Disco,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => PATTERN_NAME_STATIC,
            Self::Breathing => PATTERN_NAME_BREATHING,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Wave => PATTERN_NAME_WAVE,
            Self::Pulse => PATTERN_NAME_PULSE,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
            Self::Candle => PATTERN_NAME_CANDLE,
            Self::Aurora => PATTERN_NAME_AURORA,
            Self::Disco => PATTERN_NAME_DISCO,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_STATIC => Some(Self::Static),
            PATTERN_NAME_BREATHING => Some(Self::Breathing),
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_WAVE => Some(Self::Wave),
            PATTERN_NAME_PULSE => Some(Self::Pulse),
            PATTERN_NAME_CHASE => Some(Self::Chase),
            PATTERN_NAME_SPARKLE => Some(Self::Sparkle),
            PATTERN_NAME_CANDLE => Some(Self::Candle),
            PATTERN_NAME_AURORA => Some(Self::Aurora),
            PATTERN_NAME_DISCO => Some(Self::Disco),
            _ => None,
        }
    }

    /// Compute one frame of zone colors for this pattern.
    ///
    /// `elapsed_ms` is measured from animation start; `speed` (1-10)
    /// divides each pattern's base period. [`PatternId::Static`] is an
    /// identity: the scheduler never ticks it.
    pub fn render_frame(
        self,
        elapsed_ms: u64,
        speed: u8,
        originals: &[Rgb; ZONE_COUNT],
    ) -> [Rgb; ZONE_COUNT] {
        match self {
            Self::Static => *originals,
            Self::Breathing => breathing::render(elapsed_ms, speed, originals),
            Self::Rainbow => rainbow::render(elapsed_ms, speed),
            Self::Wave => wave::render(elapsed_ms, speed, originals),
            Self::Pulse => pulse::render(elapsed_ms, speed, originals),
            Self::Chase => chase::render(elapsed_ms, speed, originals),
            Self::Sparkle => sparkle::render(elapsed_ms, speed, originals),
            Self::Candle => candle::render(elapsed_ms, speed),
            Self::Aurora => aurora::render(elapsed_ms, speed),
            Self::Disco => disco::render(elapsed_ms, speed),
        }
    }
}

/// Period of one animation cycle at the given speed, never below 1 ms.
pub(crate) fn cycle_ms(base_period_ms: u64, speed: u8) -> u64 {
    (base_period_ms / u64::from(speed.max(1))).max(1)
}

//! Persisted animation state.
//!
//! A fixed-layout snapshot of mode, speed, brightness and the per-zone
//! original colors, written behind a magic header and a layout version so
//! a stale or foreign blob decodes to "no snapshot" instead of garbage
//! state.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::error::SnapshotError;
use crate::frame::ZONE_COUNT;
use crate::pattern::PatternId;

const MAGIC_HEADER: u16 = 0x4C5A;
const MAGIC_HEADER_SIZE: usize = MAGIC_HEADER.to_le_bytes().len();

const LAYOUT_VERSION: u8 = 1;

/// Encoded snapshot size: version, mode, speed, brightness, then
/// three bytes per zone.
pub const SNAPSHOT_LEN: usize = 4 + ZONE_COUNT * 3;

/// Total size of a snapshot in its backing store.
pub const STORE_LEN: usize = MAGIC_HEADER_SIZE + SNAPSHOT_LEN;

const SPEED_MIN: u8 = 1;
const SPEED_MAX: u8 = 10;
const BRIGHTNESS_MAX: u8 = 100;

/// Backing store for one snapshot blob of [`STORE_LEN`] bytes.
pub trait StateStore {
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), SnapshotError>;
    fn write(&mut self, buffer: &[u8]) -> Result<(), SnapshotError>;
}

/// One persisted animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: PatternId,
    pub speed: u8,
    pub brightness: u8,
    pub colors: [Rgb; ZONE_COUNT],
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            mode: PatternId::Static,
            speed: SPEED_MIN,
            brightness: BRIGHTNESS_MAX,
            colors: [Rgb::default(); ZONE_COUNT],
        }
    }
}

impl Snapshot {
    pub fn encode(self) -> [u8; SNAPSHOT_LEN] {
        let mut data = [0u8; SNAPSHOT_LEN];
        data[0] = LAYOUT_VERSION;
        data[1] = self.mode as u8;
        data[2] = self.speed;
        data[3] = self.brightness;
        for (zone, color) in self.colors.iter().enumerate() {
            let offset = 4 + zone * 3;
            data[offset] = color.r;
            data[offset + 1] = color.g;
            data[offset + 2] = color.b;
        }
        data
    }

    /// Decode a snapshot blob.
    ///
    /// Returns `None` for a wrong length or unknown layout version. Fields
    /// are applied leniently: an unknown mode, out-of-range speed or
    /// brightness falls back to its default without failing the decode.
    pub fn decode(data: &[u8]) -> Option<Self> {
        if data.len() != SNAPSHOT_LEN || data[0] != LAYOUT_VERSION {
            return None;
        }

        let defaults = Self::default();
        let mode = PatternId::from_raw(data[1]).unwrap_or(defaults.mode);
        let speed = if (SPEED_MIN..=SPEED_MAX).contains(&data[2]) {
            data[2]
        } else {
            defaults.speed
        };
        let brightness = if data[3] <= BRIGHTNESS_MAX {
            data[3]
        } else {
            defaults.brightness
        };

        let mut colors = [Rgb::default(); ZONE_COUNT];
        for (zone, color) in colors.iter_mut().enumerate() {
            let offset = 4 + zone * 3;
            *color = Rgb {
                r: data[offset],
                g: data[offset + 1],
                b: data[offset + 2],
            };
        }

        Some(Self {
            mode,
            speed,
            brightness,
            colors,
        })
    }
}

/// Snapshot persistence over a [`StateStore`].
pub struct SnapshotStorage<S: StateStore> {
    store: S,
}

impl<S: StateStore> SnapshotStorage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted snapshot.
    pub fn load(&mut self) -> Result<Snapshot, SnapshotError> {
        let mut buffer = [0u8; STORE_LEN];
        self.store.read(&mut buffer)?;

        let magic = u16::from_le_bytes([buffer[0], buffer[1]]);
        if magic != MAGIC_HEADER {
            return Err(SnapshotError::InvalidMagicHeader);
        }

        Snapshot::decode(&buffer[MAGIC_HEADER_SIZE..]).ok_or(SnapshotError::InvalidData)
    }

    /// Save a snapshot, overwriting whatever the store held.
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let mut buffer = [0u8; STORE_LEN];
        buffer[..MAGIC_HEADER_SIZE].copy_from_slice(&MAGIC_HEADER.to_le_bytes());
        buffer[MAGIC_HEADER_SIZE..].copy_from_slice(&snapshot.encode());

        let result = self.store.write(&buffer);
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[SnapshotStorage.save] state save failed");
        }
        result
    }
}

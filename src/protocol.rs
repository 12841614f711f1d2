//! Query envelope codec for the firmware lighting channel.
//!
//! Every transaction is a fixed-layout request (signature, command,
//! command-type, payload size, up to 128 bytes of payload) answered by a
//! status header and an optional payload. The expected response length is
//! mapped to a discrete size class before the call.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Transport;
use crate::error::{HardwareError, ProtocolError};
use crate::frame::{ColorFrame, FRAME_LEN};

/// Fixed signature carried by every request envelope.
pub const QUERY_SIGNATURE: u32 = 0x5543_4553;

/// Request payload capacity.
pub const QUERY_DATA_LEN: usize = 128;

/// Encoded request envelope size: four u32 header words plus the payload.
pub const QUERY_ENVELOPE_LEN: usize = 16 + QUERY_DATA_LEN;

/// Response status header size: signature echo plus return code.
const RESPONSE_HEADER_LEN: usize = 8;

/// Firmware status: command code not understood. Benign on older firmware.
const STATUS_UNKNOWN_COMMAND: u32 = 0x03;
/// Firmware status: command-type code not understood. Benign on older firmware.
const STATUS_UNKNOWN_COMMAND_TYPE: u32 = 0x04;

/// Command codes understood by the lighting firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Command {
    /// Four-zone lighting command group
    FourZone = 0x0002_0009,
}

/// Command-type codes within a command group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CommandType {
    /// Read the full lighting frame
    ColorGet = 2,
    /// Write the full lighting frame
    ColorSet = 3,
}

/// Discrete size bucket for the expected response length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SizeClass {
    Empty = 1,
    Word = 2,
    Buffer128 = 3,
    Buffer1024 = 4,
    Buffer4096 = 5,
}

impl SizeClass {
    /// Map an expected output length to its size class.
    pub const fn for_output_len(len: usize) -> Result<Self, ProtocolError> {
        match len {
            0 => Ok(SizeClass::Empty),
            1..=4 => Ok(SizeClass::Word),
            5..=128 => Ok(SizeClass::Buffer128),
            129..=1024 => Ok(SizeClass::Buffer1024),
            1025..=4096 => Ok(SizeClass::Buffer4096),
            _ => Err(ProtocolError::OutputTooLarge),
        }
    }
}

/// Result of a successfully decoded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Status zero; the payload (if any) was copied out
    Success,
    /// The firmware does not know this command or command-type
    Unsupported,
}

/// Stateful command channel to the lighting firmware.
///
/// Owns the transport and performs envelope encoding, size-class selection
/// and status decoding for every transaction.
pub struct HardwareChannel<T: Transport> {
    transport: T,
}

impl<T: Transport> HardwareChannel<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute one query against the firmware.
    ///
    /// Copies `input` into the envelope, sends it, then decodes the status
    /// header. On success the payload is copied into `output`; a payload
    /// shorter than requested is zero-padded. The two "unknown" statuses
    /// decode to [`QueryOutcome::Unsupported`] and leave `output` untouched;
    /// any other nonzero status is a hardware-reported failure.
    pub fn query(
        &mut self,
        command: Command,
        command_type: CommandType,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<QueryOutcome, HardwareError> {
        if input.len() > QUERY_DATA_LEN {
            return Err(ProtocolError::InputTooLarge.into());
        }
        let size_class = SizeClass::for_output_len(output.len())?;

        let mut request = [0u8; QUERY_ENVELOPE_LEN];
        request[0..4].copy_from_slice(&QUERY_SIGNATURE.to_le_bytes());
        request[4..8].copy_from_slice(&(command as u32).to_le_bytes());
        request[8..12].copy_from_slice(&(command_type as u32).to_le_bytes());
        #[allow(clippy::cast_possible_truncation)]
        request[12..16].copy_from_slice(&(input.len() as u32).to_le_bytes());
        request[16..16 + input.len()].copy_from_slice(input);

        let mut response = [0u8; RESPONSE_HEADER_LEN + QUERY_DATA_LEN];
        let received = self
            .transport
            .exchange(size_class, &request, &mut response)?;

        if received < RESPONSE_HEADER_LEN {
            return Err(ProtocolError::Truncated.into());
        }

        let status = u32::from_le_bytes([response[4], response[5], response[6], response[7]]);
        match status {
            0 => {}
            STATUS_UNKNOWN_COMMAND | STATUS_UNKNOWN_COMMAND_TYPE => {
                return Ok(QueryOutcome::Unsupported);
            }
            code => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[HardwareChannel.query] type {:?} returned status 0x{:x}",
                    command_type, code
                );
                return Err(HardwareError::Status(code));
            }
        }

        let available = received - RESPONSE_HEADER_LEN;
        let copied = output.len().min(available);
        output[..copied]
            .copy_from_slice(&response[RESPONSE_HEADER_LEN..RESPONSE_HEADER_LEN + copied]);
        output[copied..].fill(0);

        Ok(QueryOutcome::Success)
    }

    /// Read the full lighting frame.
    pub fn read_frame(&mut self) -> Result<(QueryOutcome, ColorFrame), HardwareError> {
        let mut raw = [0u8; FRAME_LEN];
        let outcome = self.query(Command::FourZone, CommandType::ColorGet, &[], &mut raw)?;
        Ok((outcome, ColorFrame::from_raw(raw)))
    }

    /// Write the full lighting frame.
    ///
    /// The firmware echoes the frame back; the echo is discarded.
    pub fn write_frame(&mut self, frame: &ColorFrame) -> Result<QueryOutcome, HardwareError> {
        let mut echo = [0u8; FRAME_LEN];
        self.query(
            Command::FourZone,
            CommandType::ColorSet,
            frame.as_bytes(),
            &mut echo,
        )
    }
}

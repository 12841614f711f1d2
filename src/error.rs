//! Error types for the lighting engine.

use core::fmt;

/// Error returned by a [`Transport`](crate::Transport) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportError;

/// Malformed or undecodable data on the hardware channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Input payload does not fit the query envelope
    InputTooLarge,
    /// Requested output size maps to no size class
    OutputTooLarge,
    /// Response shorter than its status header
    Truncated,
}

/// Failure of one hardware transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// The transport could not carry the query
    Transport,
    /// The response could not be encoded or decoded
    Protocol(ProtocolError),
    /// The firmware reported a non-benign status code
    Status(u32),
}

/// Rejected user input. Raised before any hardware I/O is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Animation mode name is not one of the known patterns
    UnknownMode,
    /// Speed outside 1-10
    SpeedOutOfRange,
    /// Zone index outside the fixed zone set
    UnknownZone,
    /// Color string is not a hex RGB value
    InvalidColor,
}

/// Snapshot load/save failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// The backing store failed
    Store,
    /// Magic header mismatch
    InvalidMagicHeader,
    /// Unknown layout version or short payload
    InvalidData,
}

/// Error surfaced by the control operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// Input rejected, state unchanged
    Validation(ValidationError),
    /// Hardware transaction failed after validation passed
    Hardware(HardwareError),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure")
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InputTooLarge => write!(f, "input payload exceeds envelope"),
            ProtocolError::OutputTooLarge => write!(f, "output size exceeds largest size class"),
            ProtocolError::Truncated => write!(f, "response shorter than status header"),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::Transport => write!(f, "transport failure"),
            HardwareError::Protocol(e) => write!(f, "protocol error: {}", e),
            HardwareError::Status(code) => write!(f, "firmware status 0x{:x}", code),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownMode => write!(f, "unknown animation mode"),
            ValidationError::SpeedOutOfRange => write!(f, "speed outside 1-10"),
            ValidationError::UnknownZone => write!(f, "zone index out of range"),
            ValidationError::InvalidColor => write!(f, "invalid hex color"),
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Store => write!(f, "snapshot store failure"),
            SnapshotError::InvalidMagicHeader => write!(f, "snapshot magic mismatch"),
            SnapshotError::InvalidData => write!(f, "snapshot layout invalid"),
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Validation(e) => write!(f, "validation: {}", e),
            ControlError::Hardware(e) => write!(f, "hardware: {}", e),
        }
    }
}

impl From<ProtocolError> for HardwareError {
    fn from(e: ProtocolError) -> Self {
        HardwareError::Protocol(e)
    }
}

impl From<TransportError> for HardwareError {
    fn from(_: TransportError) -> Self {
        HardwareError::Transport
    }
}

impl From<ValidationError> for ControlError {
    fn from(e: ValidationError) -> Self {
        ControlError::Validation(e)
    }
}

impl From<HardwareError> for ControlError {
    fn from(e: HardwareError) -> Self {
        ControlError::Hardware(e)
    }
}

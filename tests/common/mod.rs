//! Shared test doubles: an in-memory BIOS and a snapshot store.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fourzone_light_engine::snapshot::STORE_LEN;
use fourzone_light_engine::{SizeClass, SnapshotError, StateStore, Transport, TransportError};

pub const FRAME_LEN: usize = 128;
pub const ZONE_BASE_OFFSET: usize = 25;

const RESPONSE_HEADER_LEN: usize = 8;
const COMMAND_TYPE_COLOR_GET: u32 = 2;
const COMMAND_TYPE_COLOR_SET: u32 = 3;

/// Observable state of the emulated BIOS.
pub struct BiosState {
    pub frame: [u8; FRAME_LEN],
    /// Status code returned for every query
    pub status: u32,
    pub reads: usize,
    pub writes: usize,
    /// Fail at the transport layer instead of answering
    pub fail_transport: bool,
    /// Respond with fewer than the 8 status header bytes
    pub truncate_header: bool,
    /// Cap the payload length of a read response
    pub payload_len: Option<usize>,
    pub last_request: Option<Vec<u8>>,
}

impl Default for BiosState {
    fn default() -> Self {
        Self {
            frame: [0u8; FRAME_LEN],
            status: 0,
            reads: 0,
            writes: 0,
            fail_transport: false,
            truncate_header: false,
            payload_len: None,
            last_request: None,
        }
    }
}

/// Transport double emulating the firmware's lighting frame store.
///
/// Decodes real request envelopes and answers with real status headers, so
/// everything from the envelope bytes up to the engine is exercised.
#[derive(Clone)]
pub struct MockBios {
    pub state: Rc<RefCell<BiosState>>,
}

impl MockBios {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(BiosState::default())),
        }
    }

    /// A BIOS whose frame holds the given zone colors.
    pub fn with_zone_colors(colors: [(u8, u8, u8); 4]) -> Self {
        let bios = Self::new();
        {
            let mut state = bios.state.borrow_mut();
            for (zone, (r, g, b)) in colors.iter().enumerate() {
                let offset = ZONE_BASE_OFFSET + zone * 3;
                state.frame[offset] = *r;
                state.frame[offset + 1] = *g;
                state.frame[offset + 2] = *b;
            }
        }
        bios
    }

    pub fn zone_bytes(&self, zone: usize) -> (u8, u8, u8) {
        let state = self.state.borrow();
        let offset = ZONE_BASE_OFFSET + zone * 3;
        (
            state.frame[offset],
            state.frame[offset + 1],
            state.frame[offset + 2],
        )
    }
}

impl Transport for MockBios {
    fn exchange(
        &mut self,
        _size_class: SizeClass,
        request: &[u8],
        response: &mut [u8],
    ) -> Result<usize, TransportError> {
        let mut state = self.state.borrow_mut();
        if state.fail_transport {
            return Err(TransportError);
        }
        state.last_request = Some(request.to_vec());

        if state.truncate_header {
            response[0] = 0;
            return Ok(4);
        }

        response[0..4].copy_from_slice(&request[0..4]);
        response[4..8].copy_from_slice(&state.status.to_le_bytes());
        if state.status != 0 {
            return Ok(RESPONSE_HEADER_LEN);
        }

        let command_type = u32::from_le_bytes(request[8..12].try_into().unwrap());
        match command_type {
            COMMAND_TYPE_COLOR_GET => {
                state.reads += 1;
                let payload = state.payload_len.unwrap_or(FRAME_LEN).min(FRAME_LEN);
                response[RESPONSE_HEADER_LEN..RESPONSE_HEADER_LEN + payload]
                    .copy_from_slice(&state.frame[..payload]);
                Ok(RESPONSE_HEADER_LEN + payload)
            }
            COMMAND_TYPE_COLOR_SET => {
                state.writes += 1;
                let data = &request[16..16 + FRAME_LEN];
                state.frame.copy_from_slice(data);
                response[RESPONSE_HEADER_LEN..RESPONSE_HEADER_LEN + FRAME_LEN]
                    .copy_from_slice(&state.frame);
                Ok(RESPONSE_HEADER_LEN + FRAME_LEN)
            }
            _ => {
                // Unknown command-type, as real firmware reports it
                response[4..8].copy_from_slice(&4u32.to_le_bytes());
                Ok(RESPONSE_HEADER_LEN)
            }
        }
    }
}

/// In-memory snapshot store.
#[derive(Clone)]
pub struct MemoryStore {
    pub data: Rc<RefCell<Option<[u8; STORE_LEN]>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(None)),
        }
    }

    pub fn with_data(data: [u8; STORE_LEN]) -> Self {
        Self {
            data: Rc::new(RefCell::new(Some(data))),
        }
    }
}

impl StateStore for MemoryStore {
    fn read(&mut self, buffer: &mut [u8]) -> Result<(), SnapshotError> {
        match *self.data.borrow() {
            Some(bytes) => {
                buffer.copy_from_slice(&bytes);
                Ok(())
            }
            None => Err(SnapshotError::Store),
        }
    }

    fn write(&mut self, buffer: &[u8]) -> Result<(), SnapshotError> {
        *self.data.borrow_mut() = Some(buffer.try_into().map_err(|_| SnapshotError::Store)?);
        Ok(())
    }
}

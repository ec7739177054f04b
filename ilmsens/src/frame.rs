//! Raw sample-frame decoding
//!
//! One acquisition delivers a fixed-layout little-endian record:
//! `num_samples` i32 samples for receiver 1, a u32 sequence counter,
//! `num_samples` i32 samples for receiver 2, then reserved bytes. The
//! decoder is a plain I/O wrapper; scaling to volts and correlation happen
//! downstream.

use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use thiserror::Error;

/// Bytes per raw ADC sample on the wire.
pub const SAMPLE_BYTES: usize = 4;

/// Errors from decoding a raw sample buffer.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("raw buffer too short: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// One decoded acquisition frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFrame {
    /// Acquisition sequence counter, increments per frame.
    pub seq_counter: u32,
    /// Receiver 1 samples, raw ADC counts.
    pub rx1: Vec<i32>,
    /// Receiver 2 samples, raw ADC counts.
    pub rx2: Vec<i32>,
}

/// Decode a raw acquisition buffer holding `num_samples` samples per receiver.
///
/// Reserved trailing bytes are ignored.
pub fn parse_frame(buffer: &[u8], num_samples: usize) -> Result<SampleFrame, FrameError> {
    let block = num_samples * SAMPLE_BYTES;
    let expected = 2 * block + SAMPLE_BYTES;
    if buffer.len() < expected {
        return Err(FrameError::Truncated {
            expected,
            actual: buffer.len(),
        });
    }

    let mut rx1 = vec![0i32; num_samples];
    LittleEndian::read_i32_into(&buffer[..block], &mut rx1);

    let seq_counter = LittleEndian::read_u32(&buffer[block..block + SAMPLE_BYTES]);

    let mut rx2 = vec![0i32; num_samples];
    LittleEndian::read_i32_into(
        &buffer[block + SAMPLE_BYTES..2 * block + SAMPLE_BYTES],
        &mut rx2,
    );

    trace!("decoded frame {seq_counter}: {num_samples} samples per receiver");

    Ok(SampleFrame {
        seq_counter,
        rx1,
        rx2,
    })
}

//! Route log writer.
//!
//! [`RouteWriter`] streams frames to any `Write` sink. The header is
//! written immediately on construction.

use std::io::Write;

use glyphwalk_core::Direction;
use glyphwalk_engine::WalkState;

use crate::codec::{encode_frame, encode_header};
use crate::error::ReplayError;
use crate::hash::state_hash;
use crate::types::{Frame, RouteHeader};

/// Writes a route log to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and callers can
/// use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use glyphwalk_core::{Direction, Position};
/// use glyphwalk_replay::{Frame, RouteHeader, RouteReader, RouteWriter};
///
/// let header = RouteHeader { grid_hash: 1, start: Position::new(0, 0) };
///
/// let mut buf = Vec::new();
/// let mut writer = RouteWriter::new(&mut buf, &header).unwrap();
/// for step in 1..=2u64 {
///     let frame = Frame { step, direction: Direction::Right, state_hash: step };
///     writer.write_raw_frame(&frame).unwrap();
/// }
/// assert_eq!(writer.frames_written(), 2);
/// drop(writer);
///
/// let mut reader = RouteReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.header(), &header);
/// assert_eq!(reader.next_frame().unwrap().unwrap().step, 1);
/// assert_eq!(reader.next_frame().unwrap().unwrap().step, 2);
/// assert!(reader.next_frame().unwrap().is_none());
/// ```
pub struct RouteWriter<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> RouteWriter<W> {
    /// Create a writer, immediately writing the header.
    pub fn new(mut writer: W, header: &RouteHeader) -> Result<Self, ReplayError> {
        encode_header(&mut writer, header)?;
        Ok(Self {
            writer,
            frames_written: 0,
        })
    }

    /// Record the step that produced `state`, taken in `direction`.
    ///
    /// The frame's step number is `state.steps()`.
    pub fn write_step(&mut self, direction: Direction, state: &WalkState) -> Result<(), ReplayError> {
        let frame = Frame {
            step: state.steps() as u64,
            direction,
            state_hash: state_hash(state),
        };
        self.write_raw_frame(&frame)
    }

    /// Write a pre-built frame directly.
    pub fn write_raw_frame(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        encode_frame(&mut self.writer, frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ReplayError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

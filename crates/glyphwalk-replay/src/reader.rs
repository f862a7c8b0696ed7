//! Route log reader.
//!
//! [`RouteReader`] reads frames from any `Read` source. The header is
//! validated on construction.

use std::io::Read;

use crate::codec::{decode_frame, decode_header};
use crate::error::ReplayError;
use crate::types::{Frame, RouteHeader};

/// Reads a route log from a byte stream.
pub struct RouteReader<R: Read> {
    reader: R,
    header: RouteHeader,
    frames_read: u64,
}

impl<R: Read> RouteReader<R> {
    /// Open a log, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, ReplayError> {
        let header = decode_header(&mut reader)?;
        Ok(Self {
            reader,
            header,
            frames_read: 0,
        })
    }

    /// The log header.
    pub fn header(&self) -> &RouteHeader {
        &self.header
    }

    /// Read the next frame, or `None` at the end of the log.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, ReplayError> {
        let frame = decode_frame(&mut self.reader)?;
        if frame.is_some() {
            self.frames_read += 1;
        }
        Ok(frame)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Convert into a frame iterator.
    pub fn frames(self) -> FrameIter<R> {
        FrameIter {
            reader: self.reader,
            done: false,
        }
    }
}

/// Iterator over the remaining frames of a log.
///
/// Yields at most one error, then stops.
pub struct FrameIter<R: Read> {
    reader: R,
    done: bool,
}

impl<R: Read> Iterator for FrameIter<R> {
    type Item = Result<Frame, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match decode_frame(&mut self.reader) {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

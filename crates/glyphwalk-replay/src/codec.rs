//! Binary encode/decode for the route log format.
//!
//! All integers are little-endian. There is no padding, compression or
//! length prefix; frames have a fixed size of 17 bytes.

use std::io::{ErrorKind, Read, Write};

use glyphwalk_core::{Direction, Position};

use crate::error::ReplayError;
use crate::types::{Frame, RouteHeader};
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ReplayError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ReplayError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, ReplayError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, ReplayError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

// ── Directions ──────────────────────────────────────────────────

/// Wire tag of a direction: 0 up, 1 down, 2 left, 3 right.
pub fn direction_tag(direction: Direction) -> u8 {
    direction as u8
}

/// Inverse of [`direction_tag`].
pub fn direction_from_tag(tag: u8) -> Result<Direction, ReplayError> {
    match tag {
        0 => Ok(Direction::Up),
        1 => Ok(Direction::Down),
        2 => Ok(Direction::Left),
        3 => Ok(Direction::Right),
        tag => Err(ReplayError::UnknownDirection { tag }),
    }
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the log header (magic, version, grid hash, start position).
pub fn encode_header(w: &mut dyn Write, header: &RouteHeader) -> Result<(), ReplayError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u64_le(w, header.grid_hash)?;
    write_i32_le(w, header.start.column)?;
    write_i32_le(w, header.start.row)?;
    Ok(())
}

/// Decode and validate the log header.
pub fn decode_header(r: &mut dyn Read) -> Result<RouteHeader, ReplayError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ReplayError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: version });
    }

    let grid_hash = read_u64_le(r)?;
    let column = read_i32_le(r)?;
    let row = read_i32_le(r)?;
    Ok(RouteHeader {
        grid_hash,
        start: Position::new(column, row),
    })
}

// ── Frame encode/decode ─────────────────────────────────────────

/// Encode one frame.
pub fn encode_frame(w: &mut dyn Write, frame: &Frame) -> Result<(), ReplayError> {
    write_u64_le(w, frame.step)?;
    write_u8(w, direction_tag(frame.direction))?;
    write_u64_le(w, frame.state_hash)?;
    Ok(())
}

/// Decode one frame.
///
/// Returns `Ok(None)` on a clean end of stream at a frame boundary. A
/// stream that ends partway through a frame is
/// [`MalformedFrame`](ReplayError::MalformedFrame).
pub fn decode_frame(r: &mut dyn Read) -> Result<Option<Frame>, ReplayError> {
    // Read the step header byte-by-byte to tell clean EOF from truncation.
    let mut step_buf = [0u8; 8];
    let mut filled = 0;
    while filled < 8 {
        match r.read(&mut step_buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(ReplayError::MalformedFrame {
                    detail: format!("truncated frame header: got {filled} of 8 bytes for step"),
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ReplayError::Io(e)),
        }
    }
    let step = u64::from_le_bytes(step_buf);

    let (direction, state_hash) = decode_frame_body(r).map_err(|e| match e {
        ReplayError::Io(io) if io.kind() == ErrorKind::UnexpectedEof => {
            ReplayError::MalformedFrame {
                detail: format!("truncated frame body at step {step}"),
            }
        }
        other => other,
    })?;

    Ok(Some(Frame {
        step,
        direction,
        state_hash,
    }))
}

fn decode_frame_body(r: &mut dyn Read) -> Result<(Direction, u64), ReplayError> {
    let direction = direction_from_tag(read_u8(r)?)?;
    let state_hash = read_u64_le(r)?;
    Ok((direction, state_hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> RouteHeader {
        RouteHeader {
            grid_hash: 0xdead_beef_0123_4567,
            start: Position::new(2, -1),
        }
    }

    #[test]
    fn header_layout() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &header()).unwrap();
        assert_eq!(buf.len(), 4 + 1 + 8 + 4 + 4);
        assert_eq!(&buf[..4], b"GWLK");
        assert_eq!(buf[4], FORMAT_VERSION);
        assert_eq!(decode_header(&mut buf.as_slice()).unwrap(), header());
    }

    #[test]
    fn frame_layout() {
        let frame = Frame {
            step: 7,
            direction: Direction::Left,
            state_hash: 42,
        };
        let mut buf = Vec::new();
        encode_frame(&mut buf, &frame).unwrap();
        assert_eq!(buf.len(), 17);
        assert_eq!(buf[8], 2);
        let mut r = buf.as_slice();
        assert_eq!(decode_frame(&mut r).unwrap(), Some(frame));
        assert_eq!(decode_frame(&mut r).unwrap(), None);
    }

    #[test]
    fn bad_magic_rejected() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &header()).unwrap();
        buf[0] = b'M';
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::InvalidMagic)
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &header()).unwrap();
        buf[4] = FORMAT_VERSION + 1;
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn unknown_direction_tag() {
        let mut buf = Vec::new();
        write_u64_le(&mut buf, 1).unwrap();
        write_u8(&mut buf, 9).unwrap();
        write_u64_le(&mut buf, 0).unwrap();
        assert!(matches!(
            decode_frame(&mut buf.as_slice()),
            Err(ReplayError::UnknownDirection { tag: 9 })
        ));
    }

    #[test]
    fn truncated_step_is_malformed() {
        let buf = [1u8, 0, 0];
        assert!(matches!(
            decode_frame(&mut buf.as_slice()),
            Err(ReplayError::MalformedFrame { .. })
        ));
    }

    #[test]
    fn truncated_body_is_malformed() {
        let frame = Frame {
            step: 3,
            direction: Direction::Down,
            state_hash: u64::MAX,
        };
        let mut buf = Vec::new();
        encode_frame(&mut buf, &frame).unwrap();
        buf.truncate(12);
        assert!(matches!(
            decode_frame(&mut buf.as_slice()),
            Err(ReplayError::MalformedFrame { .. })
        ));
    }

    #[test]
    fn tags_follow_direction_order() {
        for (i, d) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction_tag(d) as usize, i);
            assert_eq!(direction_from_tag(i as u8).unwrap(), d);
        }
    }
}

//! FNV-1a hashing of grids and walk states.
//!
//! Not cryptographic; used only for equality checks when replaying.

use glyphwalk_engine::WalkState;
use glyphwalk_map::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_str(hash: u64, s: &str) -> u64 {
    // Length first, so ("ab", "c") and ("a", "bc") differ.
    fnv1a_bytes(fnv1a_u64(hash, s.len() as u64), s.as_bytes())
}

/// Hash every row of `grid`, with each row's length folded in before
/// its characters.
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, grid.row_count() as u64);
    for row in grid.rows() {
        hash = fnv1a_u64(hash, row.len() as u64);
        for &c in row {
            hash = fnv1a_bytes(hash, &u32::from(c).to_le_bytes());
        }
    }
    hash
}

/// Hash the observable part of a walk: position, direction, path and letters.
pub fn state_hash(state: &WalkState) -> u64 {
    let position = state.position();
    let mut hash = fnv1a_bytes(FNV_OFFSET, &position.column.to_le_bytes());
    hash = fnv1a_bytes(hash, &position.row.to_le_bytes());
    hash = fnv1a_byte(hash, state.direction() as u8);
    hash = fnv1a_str(hash, state.path());
    fnv1a_str(hash, state.letters())
}

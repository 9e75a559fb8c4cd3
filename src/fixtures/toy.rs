//! Narrow-word transforms whose counters wrap within a few kilobytes.
//!
//! The mixing is arbitrary; it only has to depend on every word and its
//! position so that a misplaced or missing length byte changes the digest.

use crate::transform::BlockTransform;
use crate::word::{BigEndian, LittleEndian};

/// 8-bit words, 8-byte blocks, 4-byte digest.
pub struct Toy8;

impl BlockTransform for Toy8 {
    type Word = u8;
    type Order = LittleEndian;
    type State = [u8; 4];
    type Block = [u8; 8];

    fn init(state: &mut [u8; 4]) {
        *state = [0x01, 0x23, 0x45, 0x67];
    }

    fn transform(state: &mut [u8; 4], block: &[u8; 8]) {
        for (i, w) in block.iter().enumerate() {
            let s = &mut state[i % 4];
            *s = (*s ^ w).rotate_left(3).wrapping_add(i as u8).wrapping_mul(31);
            state[(i + 1) % 4] ^= state[i % 4];
        }
    }
}

/// 16-bit big endian words, 16-byte blocks, 8-byte digest.
pub struct Toy16;

impl BlockTransform for Toy16 {
    type Word = u16;
    type Order = BigEndian;
    type State = [u16; 4];
    type Block = [u16; 8];

    fn init(state: &mut [u16; 4]) {
        *state = [0x0123, 0x4567, 0x89ab, 0xcdef];
    }

    fn transform(state: &mut [u16; 4], block: &[u16; 8]) {
        for (i, w) in block.iter().enumerate() {
            let s = &mut state[i % 4];
            *s = (*s ^ w).rotate_left(5).wrapping_add(i as u16).wrapping_mul(0x9e37);
            state[(i + 3) % 4] = state[(i + 3) % 4].wrapping_add(state[i % 4]);
        }
    }
}

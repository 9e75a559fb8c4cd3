mod counter;

use std::fmt;

pub use counter::ExtendedCounter;

use crate::error::{Error, Result};
use crate::transform::{BlockTransform, Layout, MAX_BLOCK_SIZE};
use crate::word::{is_word_aligned, ByteOrder, HashWord, WordArray};


/// 迭代杂凑：把定长分组的压缩函数驱动成可流式更新的杂凑对象
///
/// Merkle–Damgård driver around a [`BlockTransform`]. Input arrives through
/// [`update`](Self::update) in any chunking; whole blocks go straight to the
/// transform and the tail waits in a fixed pending buffer. [`finalize`](Self::finalize)
/// appends `0x80`, zero fill and the bit length in the transform's byte
/// order, then writes the accumulator out as the digest.
///
/// A finalized engine must be [`init`](Self::init)ed again before reuse.
pub struct IteratedHash<T: BlockTransform> {
    pending: [u8; MAX_BLOCK_SIZE],
    scratch: T::Block,
    state: T::State,
    count: ExtendedCounter<T::Word>,
    finalized: bool,
}

impl<T: BlockTransform> IteratedHash<T> {
    pub const BLOCK_SIZE: usize = T::BLOCK_SIZE;
    pub const HASH_SIZE: usize = T::HASH_SIZE;

    pub fn new() -> Self {
        let () = Layout::<T>::CHECK;
        let mut hash = IteratedHash {
            pending: [0; MAX_BLOCK_SIZE],
            scratch: <T::Block as WordArray<T::Word>>::zeroed(),
            state: <T::State as WordArray<T::Word>>::zeroed(),
            count: ExtendedCounter::new(),
            finalized: false,
        };
        hash.init();
        hash
    }

    /// One-shot digest of `data`.
    pub fn digest(data: &[u8]) -> Vec<u8> {
        let mut hash = Self::new();
        hash.update(data);
        hash.finalize_to_vec()
    }

    pub fn init(&mut self) {
        self.count.reset();
        T::init(&mut self.state);
        self.finalized = false;
        log::trace!("iterated hash init: block {} bytes, digest {} bytes", T::BLOCK_SIZE, T::HASH_SIZE);
    }

    /// Total bytes fed since the last `init`, as the extended counter sees them.
    pub fn counter(&self) -> &ExtendedCounter<T::Word> {
        &self.count
    }

    pub fn update(&mut self, data: &[u8]) {
        debug_assert!(!self.finalized, "update on a finalized hash without init");

        let block_size = T::BLOCK_SIZE;
        let num = self.count.pending(block_size);
        self.count.add(data.len());

        let mut input = data;

        // process left over data
        if num != 0 {
            let room = block_size - num;
            if input.len() < room {
                self.pending[num..num + input.len()].copy_from_slice(input);
                return;
            }
            let (head, rest) = input.split_at(room);
            self.pending[num..block_size].copy_from_slice(head);
            compress::<T>(&mut self.state, &mut self.scratch, &self.pending[..block_size]);
            input = rest;
        }

        if input.len() >= block_size {
            if is_word_aligned::<T::Word>(input) {
                let mut blocks = input.chunks_exact(block_size);
                for block in &mut blocks {
                    compress::<T>(&mut self.state, &mut self.scratch, block);
                }
                input = blocks.remainder();
            } else {
                // stage misaligned blocks through the pending buffer
                while input.len() >= block_size {
                    let (block, rest) = input.split_at(block_size);
                    self.pending[..block_size].copy_from_slice(block);
                    compress::<T>(&mut self.state, &mut self.scratch, &self.pending[..block_size]);
                    input = rest;
                }
            }
        }

        if !input.is_empty() {
            self.pending[..input.len()].copy_from_slice(input);
        }
    }

    pub fn update_vectored(&mut self, bufs: &[&[u8]]) {
        for buf in bufs {
            self.update(buf);
        }
    }

    /// Writes the digest into `out`, which must be exactly `HASH_SIZE` bytes.
    ///
    /// The engine is consumed afterwards; call [`init`](Self::init) to hash
    /// another message.
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() != T::HASH_SIZE {
            return Err(Error::DigestLength { expected: T::HASH_SIZE, actual: out.len() });
        }
        self.finish(out);
        Ok(())
    }

    pub fn finalize_to_vec(&mut self) -> Vec<u8> {
        let mut out = vec![0; T::HASH_SIZE];
        self.finish(&mut out);
        out
    }

    /// 输出小写十六进制字符串形式的摘要
    pub fn finalize_hex(&mut self) -> String {
        hex::encode(self.finalize_to_vec())
    }

    fn finish(&mut self, out: &mut [u8]) {
        debug_assert!(!self.finalized, "finalize on a finalized hash without init");

        let word = <T::Word as HashWord>::BYTES;
        let block_size = T::BLOCK_SIZE;
        let (bits_low, bits_high) = self.count.bit_count();

        self.pad(block_size - 2 * word);

        let order = <T::Order as ByteOrder>::OFFSET;
        let words = block_size / word;
        let low_slot = (words - 2 + order) * word;
        let high_slot = (words - 1 - order) * word;
        T::Order::store_words(&[bits_low], &mut self.pending[low_slot..low_slot + word]);
        T::Order::store_words(&[bits_high], &mut self.pending[high_slot..high_slot + word]);

        compress::<T>(&mut self.state, &mut self.scratch, &self.pending[..block_size]);

        if is_word_aligned::<T::Word>(out) && T::HASH_SIZE % word == 0 {
            T::Order::store_words(self.state.as_ref(), out);
        } else {
            for w in self.state.as_mut() {
                *w = T::Order::correct(*w);
            }
            for (w, chunk) in self.state.as_ref().iter().zip(out.chunks_exact_mut(word)) {
                w.store_ne(chunk);
            }
        }

        self.finalized = true;
        log::trace!(
            "iterated hash finalized after {:?}:{:?} bytes",
            self.count.high(),
            self.count.low()
        );
    }

    /// Appends `0x80` and zero fills up to `last_block_size`, spilling into
    /// an extra block when the length field no longer fits.
    fn pad(&mut self, last_block_size: usize) {
        let block_size = T::BLOCK_SIZE;
        let mut num = self.count.pending(block_size);

        self.pending[num] = 0x80;
        num += 1;

        if num <= last_block_size {
            self.pending[num..last_block_size].fill(0);
        } else {
            self.pending[num..block_size].fill(0);
            compress::<T>(&mut self.state, &mut self.scratch, &self.pending[..block_size]);
            self.pending[..last_block_size].fill(0);
            log::debug!("padding spilled into an extra block ({} tail bytes)", num - 1);
        }
    }
}

/// Decodes one block in the transform's byte order and runs it.
#[inline(always)]
fn compress<T: BlockTransform>(state: &mut T::State, scratch: &mut T::Block, block: &[u8]) {
    T::Order::load_words(block, scratch.as_mut());
    T::transform(state, scratch);
}

impl<T: BlockTransform> Default for IteratedHash<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BlockTransform> Clone for IteratedHash<T> {
    fn clone(&self) -> Self {
        IteratedHash {
            pending: self.pending,
            scratch: self.scratch,
            state: self.state,
            count: self.count,
            finalized: self.finalized,
        }
    }
}

impl<T: BlockTransform> fmt::Debug for IteratedHash<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IteratedHash")
            .field("block_size", &T::BLOCK_SIZE)
            .field("hash_size", &T::HASH_SIZE)
            .field("count", &self.count)
            .field("finalized", &self.finalized)
            .finish()
    }
}

use crate::word::{ByteOrder, HashWord, WordArray};

/// Largest block an engine can buffer. Covers 64-bit-word families such as SHA-512.
pub const MAX_BLOCK_SIZE: usize = 128;


/// 压缩函数：每个具体的杂凑算法提供一个实现
///
/// A transform is a stateless policy. It describes the block and digest
/// geometry, sets the accumulator to its initial value, and folds one
/// decoded block into the accumulator. Byte order correction, buffering,
/// counting and padding all happen in [`crate::IteratedHash`]; the words a
/// transform sees are already in host order.
pub trait BlockTransform {
    type Word: HashWord;
    type Order: ByteOrder;

    /// The accumulator, `HASH_SIZE` bytes worth of words.
    type State: WordArray<Self::Word>;

    /// One block, `BLOCK_SIZE` bytes worth of words.
    type Block: WordArray<Self::Word>;

    const BLOCK_SIZE: usize = <Self::Block as WordArray<Self::Word>>::LEN * <Self::Word as HashWord>::BYTES;
    const HASH_SIZE: usize = <Self::State as WordArray<Self::Word>>::LEN * <Self::Word as HashWord>::BYTES;

    fn init(state: &mut Self::State);

    fn transform(state: &mut Self::State, block: &Self::Block);
}


/// Rejects, at monomorphization time, geometries the engine cannot drive.
pub(crate) struct Layout<T>(std::marker::PhantomData<T>);

impl<T: BlockTransform> Layout<T> {
    pub(crate) const CHECK: () = {
        let word = <T::Word as HashWord>::BYTES;
        let block_words = <T::Block as WordArray<T::Word>>::LEN;
        let state_words = <T::State as WordArray<T::Word>>::LEN;
        assert!(T::BLOCK_SIZE.is_power_of_two(), "block size must be a power of two");
        assert!(T::BLOCK_SIZE % word == 0, "block size must be a multiple of the word size");
        assert!(T::BLOCK_SIZE == block_words * word, "block type does not cover the block size");
        assert!(T::BLOCK_SIZE >= 2 * word, "block must hold the two length words");
        assert!(T::BLOCK_SIZE <= MAX_BLOCK_SIZE, "block size exceeds MAX_BLOCK_SIZE");
        assert!(T::HASH_SIZE == state_words * word, "digest size must match the accumulator");
    };
}

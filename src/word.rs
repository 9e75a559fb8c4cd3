use std::fmt::Debug;
use std::mem;

mod private {
    pub trait Sealed {}
}


/// 哈希状态字：压缩函数以它为单位读写分组与寄存器
///
/// Implemented for the unsigned integers a block transform may use as its
/// native word. `u8` and `u16` are mostly useful for small test transforms,
/// where the extended counter wraps after a few hundred or thousand bytes.
pub trait HashWord: Copy + Eq + Ord + Default + Debug + private::Sealed {
    const BITS: u32;
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    /// Left shift, `n` must be below `BITS`.
    fn shl(self, n: u32) -> Self;

    /// Right shift, `n` must be below `BITS`.
    fn shr(self, n: u32) -> Self;

    /// Truncates `value` to the word width.
    fn from_usize(value: usize) -> Self;

    /// Truncates the word to `usize`.
    fn low_usize(self) -> usize;

    fn swap_bytes(self) -> Self;

    /// Reads one word in host byte order, `bytes.len()` must equal `BYTES`.
    fn load_ne(bytes: &[u8]) -> Self;

    /// Writes one word in host byte order, `out.len()` must equal `BYTES`.
    fn store_ne(self, out: &mut [u8]);
}

macro_rules! hash_word {
    ($($t:ty),*) => {$(
        impl private::Sealed for $t {}

        impl HashWord for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = mem::size_of::<$t>();
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn shl(self, n: u32) -> Self {
                self << n
            }

            #[inline(always)]
            fn shr(self, n: u32) -> Self {
                self >> n
            }

            #[inline(always)]
            fn from_usize(value: usize) -> Self {
                value as $t
            }

            #[inline(always)]
            fn low_usize(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn swap_bytes(self) -> Self {
                <$t>::swap_bytes(self)
            }

            #[inline(always)]
            fn load_ne(bytes: &[u8]) -> Self {
                let mut buf = [0u8; mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_ne_bytes(buf)
            }

            #[inline(always)]
            fn store_ne(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }
        }
    )*};
}

hash_word!(u8, u16, u32, u64);


/// A fixed run of words, such as a transform's accumulator or one decoded block.
pub trait WordArray<W: HashWord>: Copy + Debug + AsRef<[W]> + AsMut<[W]> {
    const LEN: usize;

    fn zeroed() -> Self;
}

impl<W: HashWord, const N: usize> WordArray<W> for [W; N] {
    const LEN: usize = N;

    fn zeroed() -> Self {
        [W::ZERO; N]
    }
}


/// Byte order a transform expects its input words and length field in.
pub trait ByteOrder: private::Sealed {
    /// Whether this order matches the host.
    const NATIVE: bool;

    /// Slot shift of the bit-length words inside the final block:
    /// 0 puts the low word first, 1 puts the high word first.
    const OFFSET: usize;

    #[inline(always)]
    fn correct<W: HashWord>(word: W) -> W {
        byteswap_if_alien(Self::NATIVE, word)
    }

    /// Decodes `words.len()` words from the front of `bytes`.
    fn load_words<W: HashWord>(bytes: &[u8], words: &mut [W]) {
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
            *word = Self::correct(W::load_ne(chunk));
        }
    }

    /// Encodes `words` into the front of `bytes`.
    fn store_words<W: HashWord>(words: &[W], bytes: &mut [u8]) {
        for (word, chunk) in words.iter().zip(bytes.chunks_exact_mut(W::BYTES)) {
            Self::correct(*word).store_ne(chunk);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LittleEndian;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigEndian;

impl private::Sealed for LittleEndian {}

impl private::Sealed for BigEndian {}

impl ByteOrder for LittleEndian {
    const NATIVE: bool = cfg!(target_endian = "little");
    const OFFSET: usize = 0;
}

impl ByteOrder for BigEndian {
    const NATIVE: bool = cfg!(target_endian = "big");
    const OFFSET: usize = 1;
}


#[inline(always)]
pub(crate) fn byteswap_if_alien<W: HashWord>(native: bool, word: W) -> W {
    if native {
        word
    } else {
        word.swap_bytes()
    }
}

/// `value >> shift`, or 0 once `shift` reaches the width of `usize`.
#[inline(always)]
pub fn safe_shr(value: usize, shift: u32) -> usize {
    if shift >= usize::BITS {
        0
    } else {
        value >> shift
    }
}

/// Whether `bytes` starts on a `W` boundary.
#[inline(always)]
pub fn is_word_aligned<W: HashWord>(bytes: &[u8]) -> bool {
    bytes.as_ptr().align_offset(mem::align_of::<W>()) == 0
}

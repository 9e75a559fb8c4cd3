pub mod word;
pub mod transform;
pub mod iterated;
mod error;


pub use error::{Error, Result};
pub use iterated::{ExtendedCounter, IteratedHash};
pub use transform::{BlockTransform, MAX_BLOCK_SIZE};
pub use word::{BigEndian, ByteOrder, HashWord, LittleEndian, WordArray};

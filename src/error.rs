/// Errors raised at the engine's typed boundaries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("digest buffer holds {actual} bytes, expected exactly {expected}")]
    DigestLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

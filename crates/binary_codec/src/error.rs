use thiserror::Error;

/// Errors that can happen while decoding binary tokens into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Token is empty or contains something other than `0` and `1`.
    #[error("Invalid binary format: token {index} {token:?} is not a base 2 number")]
    InvalidFormat { index: usize, token: String },
    /// Token parsed but doesn't name a character.
    #[error("Invalid binary format: token {index} {token:?} is not a valid code point")]
    InvalidCodePoint { index: usize, token: String },
}

impl CodecError {
    /// Position of the offending token in the input.
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidFormat { index, .. } | Self::InvalidCodePoint { index, .. } => *index,
        }
    }

    /// Same error reported at a different token position.
    pub(crate) fn at(self, index: usize) -> Self {
        match self {
            Self::InvalidFormat { token, .. } => Self::InvalidFormat { index, token },
            Self::InvalidCodePoint { token, .. } => Self::InvalidCodePoint { index, token },
        }
    }
}

/// An operation name other than `encode` or `decode`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

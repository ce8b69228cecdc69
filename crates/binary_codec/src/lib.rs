/// Width and separator of the binary representation.
pub mod constants;

/// Errors produced while decoding a binary representation.
pub mod error;

/// Conversion of a single character to and from one binary token.
pub mod token;

/// Whole-text encoding and decoding.
pub mod codec;

/// Selecting between encoding and decoding by name.
pub mod operation;

pub use codec::{decode, encode};
pub use error::{CodecError, UnknownOperation};
pub use operation::Operation;

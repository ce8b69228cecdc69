use crate::{
    codec::{decode, encode},
    error::{CodecError, UnknownOperation},
};
use std::{fmt, str::FromStr};

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Text to binary.
    Encode,
    /// Binary to text.
    Decode,
}

impl Operation {
    /// Runs the conversion on `input`. Encoding never fails.
    pub fn apply(self, input: &str) -> Result<String, CodecError> {
        match self {
            Operation::Encode => Ok(encode(input)),
            Operation::Decode => decode(input),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Operation::Encode),
            "decode" => Ok(Operation::Decode),
            other => Err(UnknownOperation(other.to_owned())),
        }
    }
}

use crate::args::ConverterCli;
use binary_codec::Operation;
use std::path::PathBuf;
use thiserror::Error;

/// Source of the text to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Literal text from the command line.
    Text(String),
    /// Whole contents of a file.
    File(PathBuf),
}

/// Arguments that don't describe exactly one input and exactly one operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("one of --text or --file is required")]
    MissingInput,
    #[error("--text and --file can't be used together")]
    ConflictingInput,
    #[error("one of --encode or --decode is required")]
    MissingOperation,
    #[error("--encode and --decode can't be used together")]
    ConflictingOperation,
}

/// A single conversion to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub operation: Operation,
    /// File to write the result to. Standard output if `None`.
    pub output: Option<PathBuf>,
}

impl Config {
    /// Checks the mutually exclusive choices and builds the config.
    pub fn new(
        text: Option<String>,
        file: Option<PathBuf>,
        encode: bool,
        decode: bool,
        output: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let input = match (text, file) {
            (Some(text), None) => Input::Text(text),
            (None, Some(file)) => Input::File(file),
            (None, None) => return Err(ConfigError::MissingInput),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingInput),
        };
        let operation = match (encode, decode) {
            (true, false) => Operation::Encode,
            (false, true) => Operation::Decode,
            (false, false) => return Err(ConfigError::MissingOperation),
            (true, true) => return Err(ConfigError::ConflictingOperation),
        };
        Ok(Self {
            input,
            operation,
            output,
        })
    }
}

impl TryFrom<ConverterCli> for Config {
    type Error = ConfigError;

    fn try_from(cli: ConverterCli) -> Result<Self, Self::Error> {
        Config::new(
            cli.input.text,
            cli.input.file,
            cli.operation.encode,
            cli.operation.decode,
            cli.output,
        )
    }
}

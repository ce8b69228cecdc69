use crate::{
    config::{Config, Input},
    file_io::{read_file_text, write_file_text},
};
use binary_codec::{CodecError, Operation, UnknownOperation};
use log::{debug, info};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Version reported by the processor and the `--version` flag.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that can happen while processing a conversion.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),
    #[error("Could not read {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Could not write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Runs conversions on text and files.
#[derive(Debug, Clone)]
pub struct Processor {
    version: &'static str,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self { version: VERSION }
    }

    pub fn version(&self) -> &str {
        self.version
    }

    /// Converts literal text.
    pub fn process_text(&self, text: &str, operation: Operation) -> Result<String, ProcessError> {
        debug!("Running {operation} on {} bytes of text", text.len());
        Ok(operation.apply(text)?)
    }

    /// Converts the whole contents of `path`.
    pub fn process_file(&self, path: &Path, operation: Operation) -> Result<String, ProcessError> {
        let content = read_file_text(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ProcessError::FileNotFound(path.to_owned()),
            _ => ProcessError::Read {
                path: path.to_owned(),
                source,
            },
        })?;
        info!("Read {} bytes from '{}'", content.len(), path.display());
        self.process_text(&content, operation)
    }

    /// Converts `input` with an operation given by name. Names other than `encode` and `decode` fail.
    pub fn process_named(&self, input: &Input, operation: &str) -> Result<String, ProcessError> {
        let operation = operation.parse::<Operation>()?;
        self.process_input(input, operation)
    }

    pub fn process_input(&self, input: &Input, operation: Operation) -> Result<String, ProcessError> {
        match input {
            Input::Text(text) => self.process_text(text, operation),
            Input::File(path) => self.process_file(path, operation),
        }
    }

    /// Runs the conversion described by `config`. Doesn't write the output.
    pub fn process(&self, config: &Config) -> Result<String, ProcessError> {
        self.process_input(&config.input, config.operation)
    }

    /// Writes `content` to `path`, overwriting it. Returns the message to show the user.
    pub fn save_output(&self, content: &str, path: &Path) -> Result<String, ProcessError> {
        write_file_text(path, content).map_err(|source| ProcessError::Write {
            path: path.to_owned(),
            source,
        })?;
        info!("Wrote {} bytes to '{}'", content.len(), path.display());
        Ok(format!("Output saved to: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn version() {
        assert_eq!(Processor::new().version(), "1.0.0");
    }

    #[test]
    fn text() {
        let processor = Processor::new();
        assert_eq!(
            processor.process_text("Hi", Operation::Encode).unwrap(),
            "01001000 01101001"
        );
        assert_eq!(
            processor
                .process_text("01000001 01000010", Operation::Decode)
                .unwrap(),
            "AB"
        );
        assert!(matches!(
            processor.process_text("12345678", Operation::Decode),
            Err(ProcessError::Codec(CodecError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn file_contents_include_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "A\n").unwrap();
        let encoded = Processor::new()
            .process_file(&path, Operation::Encode)
            .unwrap();
        assert_eq!(encoded, "01000001 00001010");
    }

    #[test]
    fn crlf_file_encodes_like_lf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.txt");
        fs::write(&path, "A\r\n").unwrap();
        let encoded = Processor::new()
            .process_file(&path, Operation::Encode)
            .unwrap();
        assert_eq!(encoded, "01000001 00001010");
    }

    #[test]
    fn read_error_names_cause_once() {
        let dir = tempfile::tempdir().unwrap();
        // A directory opens but can't be read as text.
        let err = Processor::new()
            .process_file(dir.path(), Operation::Encode)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Read { .. }));
        let cause = std::error::Error::source(&err).unwrap().to_string();
        let message = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(message.matches(cause.as_str()).count(), 1, "{message}");
    }

    #[test]
    fn decode_file_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "01001000\n01101001\n").unwrap();
        assert_eq!(
            Processor::new()
                .process_file(&path, Operation::Decode)
                .unwrap(),
            "Hi"
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = Processor::new()
            .process_file(&path, Operation::Encode)
            .unwrap_err();
        assert!(matches!(&err, ProcessError::FileNotFound(p) if p == &path));
        assert_eq!(
            err.to_string(),
            format!("File not found: {}", path.display())
        );
    }

    #[test]
    fn unknown_operation_by_name() {
        let processor = Processor::new();
        let input = Input::Text("A".to_owned());
        assert_eq!(processor.process_named(&input, "encode").unwrap(), "01000001");
        let err = processor.process_named(&input, "reverse").unwrap_err();
        assert!(matches!(err, ProcessError::UnknownOperation(_)));
        assert_eq!(err.to_string(), "Unknown operation: reverse");
    }

    #[test]
    fn save_output_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents that are longer").unwrap();
        let message = Processor::new().save_output("01000001", &path).unwrap();
        assert_eq!(message, format!("Output saved to: {}", path.display()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "01000001");
    }

    #[test]
    fn save_output_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");
        assert!(matches!(
            Processor::new().save_output("x", &path),
            Err(ProcessError::Write { .. })
        ));
    }
}

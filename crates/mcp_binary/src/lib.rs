/// Arguments for the command line interface.
pub mod args;

/// Validated configuration built from the arguments.
pub mod config;

/// Simple helper functions for reading and writing files.
pub mod file_io;

/// Running a conversion on text or a file and saving the result.
pub mod processor;

/// Main logic tying arguments, processing and output together.
pub mod binary_logic;

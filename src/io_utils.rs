//! User-facing error reporting for the compressor and decompressor binaries.
//!
//! Library errors stay structured ([`BitfoldError`]); at the CLI boundary
//! they are flattened into one message carrying an actionable hint.

use crate::BitfoldError;
use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    msg: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Plain message with no underlying cause.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: None,
        }
    }

    /// Wrap an I/O failure with the operation, the path, and a recovery
    /// suggestion keyed on the error kind.
    pub fn io(operation: &str, path: &Path, err: io::Error) -> Self {
        use io::ErrorKind::*;
        let suggestion = match err.kind() {
            NotFound => "Check that the file exists and the path is correct.",
            PermissionDenied => "Check permissions or run as a different user.",
            UnexpectedEof => "File appears truncated or corrupted.",
            WriteZero => "Disk may be full. Free up space and try again.",
            _ => "Check permissions or free up disk space.",
        };
        Self {
            msg: format!(
                "Error {operation} '{}': {err}. {suggestion}",
                path.display()
            ),
            source: Some(Box::new(err)),
        }
    }

    /// Wrap a library error, hinting at the likely fix per variant.
    pub fn bitfold(context: &str, err: BitfoldError) -> Self {
        use BitfoldError::*;
        let hint = match &err {
            Codec(msg) | Truncated(msg) => format!("{msg}. Verify the file is intact."),
            Config(msg) => format!("{msg}. Invalid configuration."),
            Io(io) => io.to_string(),
            Internal(msg) => format!("{msg}. This is a bug."),
        };
        Self {
            msg: format!("{context}: {hint}"),
            source: Some(Box::new(err)),
        }
    }

    /// Input file does not carry the compressed-file extension.
    pub fn extension(path: &Path) -> Self {
        Self::new(format!(
            "Invalid file extension for '{}'. Expected .bfd. Check the input file.",
            path.display()
        ))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

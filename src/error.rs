use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitfoldError {
    /// Malformed segment framing or a field bound violation.
    #[error("codec error: {0}")]
    Codec(String),

    /// Compressed stream ended where a segment header was expected.
    #[error("truncated stream: {0}")]
    Truncated(String),

    /// Invalid search or chunking parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for unexpected internal problems.
    #[error("internal error: {0}")]
    Internal(String),
}

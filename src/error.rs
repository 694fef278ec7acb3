use thiserror::Error;

/// Errors that can occur when driving the plotting backend
#[derive(Debug, Error)]
pub enum PlotError {
    /// The backend channel is not open (spawn failed or the session was closed)
    #[error("backend channel is not opened")]
    NotOpened,

    /// A caller-supplied value failed validation (empty path, zero dimension, inverted range, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Write or flush to the backend's input stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using PlotError
pub type Result<T> = std::result::Result<T, PlotError>;

use thiserror::Error;

/// Errors that can occur while drawing
#[derive(Error, Debug)]
pub enum DrawError {
    /// The output sink rejected a write
    #[error("failed to write to output: {0}")]
    Io(#[from] std::io::Error),
    /// The object's value was moved out and nothing has been assigned since
    #[error("attempted to draw an empty object")]
    Empty,
}

pub type Result<T> = std::result::Result<T, DrawError>;

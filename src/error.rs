use std::collections::TryReserveError;

/// Errors produced while preparing or filling a pixel buffer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pixel storage for a `width × height` frame could not be reserved.
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation {
        width: u32,
        height: u32,
        #[source]
        source: TryReserveError,
    },
    /// A caller-supplied pixel slice does not hold exactly `width × height` pixels.
    #[error("pixel buffer holds {actual} pixels but the frame needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    /// The requested animation track does not exist.
    #[error("color track {0} does not exist")]
    InvalidTrack(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

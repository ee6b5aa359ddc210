use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgTidyError {
    #[error("Invalid pixel buffer: {width}x{height} needs {expected} bytes, got {actual}")]
    InvalidPixelBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Tracing failed: {0}")]
    Trace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

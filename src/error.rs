use std::fmt;

/// The main error type for the lumabench crate
#[derive(Debug)]
pub enum LumabenchError {
    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// A texture buffer does not hold width * height * planes samples
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for LumabenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LumabenchError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            LumabenchError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            LumabenchError::Io(e) => write!(f, "I/O error: {}", e),
            LumabenchError::SizeMismatch { expected, actual } => {
                write!(f, "Buffer size mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for LumabenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LumabenchError::ImageDecode(e) | LumabenchError::ImageEncode(e) => Some(e),
            LumabenchError::Io(e) => Some(e),
            LumabenchError::SizeMismatch { .. } => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for LumabenchError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => LumabenchError::ImageEncode(err),
            _ => LumabenchError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for LumabenchError {
    fn from(err: std::io::Error) -> Self {
        LumabenchError::Io(err)
    }
}

// Convenience type alias for Results using LumabenchError
pub type Result<T = ()> = std::result::Result<T, LumabenchError>;

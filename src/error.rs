//! Unified error types for the comparison viewer.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error decoding an image file
    ImageLoad(String),
    /// Error opening or reading an image file
    FileAccess(String),
    /// File extension is not one of the supported image formats
    UnsupportedFile(PathBuf),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image decode error: {}", msg),
            AppError::FileAccess(msg) => write!(f, "File access error: {}", msg),
            AppError::UnsupportedFile(path) => {
                write!(f, "Unsupported image file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileAccess(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_file_access() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::FileAccess(_)));
        assert_eq!(err.to_string(), "File access error: gone");
    }

    #[test]
    fn unsupported_file_names_the_path() {
        let err = AppError::UnsupportedFile(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "Unsupported image file: notes.txt");
    }
}

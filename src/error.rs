// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Decode(DecodeError),
    Svg(String),
    Config(String),
}

/// Reasons an image file could not be turned into a raster.
/// Used to pick a user-facing message key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Format could not be identified from the file contents or extension
    UnsupportedFormat,

    /// The file was recognised but its pixel data is invalid
    Corrupted(String),

    /// Decoded image has a zero dimension
    EmptyImage,

    /// Image too large to allocate a pixel buffer for
    TooLarge { width: u32, height: u32 },
}

impl DecodeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DecodeError::UnsupportedFormat => "error-decode-unsupported-format",
            DecodeError::Corrupted(_) => "error-decode-corrupted",
            DecodeError::EmptyImage => "error-decode-empty",
            DecodeError::TooLarge { .. } => "error-decode-too-large",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFormat => write!(f, "Unsupported image format"),
            DecodeError::Corrupted(msg) => write!(f, "Corrupted image data: {}", msg),
            DecodeError::EmptyImage => write!(f, "Image has empty dimensions"),
            DecodeError::TooLarge { width, height } => {
                write!(f, "Image too large: {}x{}", width, height)
            }
        }
    }
}

impl Error {
    /// Returns the i18n key of a short user-facing explanation.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Decode(e) => e.i18n_key(),
            Error::Svg(_) => "error-svg",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        use image_rs::ImageError;

        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            ImageError::Unsupported(_) => Error::Decode(DecodeError::UnsupportedFormat),
            other => Error::Decode(DecodeError::Corrupted(other.to_string())),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the unresume library.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during resume import.
///
/// Every variant carries a user-facing message; a failure at any stage aborts
/// the whole import and leaves the caller's current document untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension/media type is not in the accepted set.
    #[error("Unsupported format '{0}'. Please upload a PDF or PowerPoint (.pptx) file.")]
    UnsupportedFormat(String),

    /// Legacy binary PowerPoint input, rejected before any decoding.
    #[error("Legacy .ppt files are not supported. Save the file as .pptx and try again.")]
    LegacyPowerPoint,

    /// The PDF document is encrypted.
    #[error("Password-protected PDF files are not supported.")]
    Encrypted,

    /// The PDF decoder could not produce text (corrupt or unreadable file).
    #[error("Unable to read PDF file: {0}")]
    PdfRead(String),

    /// The PPTX container could not be decoded (corrupt or unreadable file).
    #[error("Unable to read PowerPoint file: {0}")]
    PptxRead(String),

    /// Acquisition succeeded but the resulting text is blank.
    #[error("No readable text found in the file.")]
    EmptyDocument,
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfRead(err.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::PptxRead(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::PptxRead(err.to_string())
    }
}

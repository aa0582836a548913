//! Input file kind detection and validation.

use crate::error::{Error, Result};
use std::path::Path;

/// Accepted input kinds for resume import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// PDF document (`.pdf`)
    Pdf,
    /// PowerPoint OOXML container (`.pptx`)
    Pptx,
    /// Legacy binary PowerPoint (`.ppt`) — recognized, but always rejected
    /// before decoding with guidance to convert the file first.
    LegacyPpt,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Pdf => write!(f, "PDF"),
            FileKind::Pptx => write!(f, "PPTX"),
            FileKind::LegacyPpt => write!(f, "PPT (legacy)"),
        }
    }
}

/// Declared media type for PDF input.
pub const MEDIA_TYPE_PDF: &str = "application/pdf";
/// Declared media type for PPTX input.
pub const MEDIA_TYPE_PPTX: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
/// Declared media type for legacy PPT input.
pub const MEDIA_TYPE_PPT: &str = "application/vnd.ms-powerpoint";

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local-file magic; OOXML containers (.pptx) are ZIP archives.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect the file kind from a filename and an optional declared media type.
///
/// Any kind outside the accepted set is rejected here, before any decoding
/// is attempted.
///
/// # Arguments
/// * `filename` - Name of the uploaded file (extension is matched case-insensitively)
/// * `media_type` - Declared media type, if the caller has one
///
/// # Example
/// ```
/// use unresume::detect::{detect_kind, FileKind};
///
/// let kind = detect_kind("resume.pdf", None).unwrap();
/// assert_eq!(kind, FileKind::Pdf);
/// assert!(detect_kind("resume.docx", None).is_err());
/// ```
pub fn detect_kind(filename: &str, media_type: Option<&str>) -> Result<FileKind> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") || media_type == Some(MEDIA_TYPE_PDF) {
        return Ok(FileKind::Pdf);
    }
    if lower.ends_with(".pptx") || media_type == Some(MEDIA_TYPE_PPTX) {
        return Ok(FileKind::Pptx);
    }
    if lower.ends_with(".ppt") || media_type == Some(MEDIA_TYPE_PPT) {
        return Ok(FileKind::LegacyPpt);
    }
    Err(Error::UnsupportedFormat(filename.to_string()))
}

/// Detect the file kind from a path (extension only).
pub fn detect_kind_from_path<P: AsRef<Path>>(path: P) -> Result<FileKind> {
    let name = path
        .as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    detect_kind(name, None)
}

/// Check whether bytes carry the PDF header magic.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Check whether bytes carry the ZIP local-file magic.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_kind("resume.pdf", None).unwrap(), FileKind::Pdf);
        assert_eq!(detect_kind("RESUME.PDF", None).unwrap(), FileKind::Pdf);
        assert_eq!(detect_kind("deck.pptx", None).unwrap(), FileKind::Pptx);
        assert_eq!(detect_kind("deck.ppt", None).unwrap(), FileKind::LegacyPpt);
    }

    #[test]
    fn test_detect_by_media_type() {
        assert_eq!(
            detect_kind("upload", Some(MEDIA_TYPE_PDF)).unwrap(),
            FileKind::Pdf
        );
        assert_eq!(
            detect_kind("upload", Some(MEDIA_TYPE_PPTX)).unwrap(),
            FileKind::Pptx
        );
        assert_eq!(
            detect_kind("upload", Some(MEDIA_TYPE_PPT)).unwrap(),
            FileKind::LegacyPpt
        );
    }

    #[test]
    fn test_detect_rejects_unknown() {
        let result = detect_kind("resume.docx", None);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));

        let result = detect_kind("notes.txt", Some("text/plain"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_detect_from_path() {
        assert_eq!(
            detect_kind_from_path("/tmp/uploads/cv.pdf").unwrap(),
            FileKind::Pdf
        );
        assert!(detect_kind_from_path("/tmp/uploads/cv.odp").is_err());
    }

    #[test]
    fn test_magic_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.7\n%test"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
        assert!(is_zip_bytes(b"PK\x03\x04rest"));
        assert!(!is_zip_bytes(b"%PDF-1.7"));
    }
}

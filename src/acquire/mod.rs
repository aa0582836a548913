//! Text acquisition: binary file → one linear text blob.
//!
//! Format-specific decoders produce a single newline-joined blob in ascending
//! page/slide order. No normalization happens here; that is the segmenter's
//! job.

mod pdf;
mod pptx;

pub use pdf::extract_pdf_text;
pub use pptx::extract_pptx_text;

use crate::detect::FileKind;
use crate::error::{Error, Result};

/// Extract the raw text blob for a supported file kind.
///
/// Legacy `.ppt` input fails here, before any decoding is attempted.
pub fn acquire_text(data: &[u8], kind: FileKind, parallel: bool) -> Result<String> {
    match kind {
        FileKind::Pdf => extract_pdf_text(data, parallel),
        FileKind::Pptx => extract_pptx_text(data, parallel),
        FileKind::LegacyPpt => Err(Error::LegacyPowerPoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_ppt_never_decodes() {
        // Even bytes that look like a valid ZIP container are rejected up front.
        let result = acquire_text(b"PK\x03\x04", FileKind::LegacyPpt, true);
        assert!(matches!(result, Err(Error::LegacyPowerPoint)));
    }

    #[test]
    fn test_invalid_pdf_bytes_fail() {
        let result = acquire_text(b"not a pdf", FileKind::Pdf, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_pptx_bytes_fail() {
        let result = acquire_text(b"not a zip archive", FileKind::Pptx, false);
        assert!(matches!(result, Err(Error::PptxRead(_)) | Err(Error::Io(_))));
    }
}

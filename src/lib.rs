//! # unresume
//!
//! Extract structured resume data from PDF and PowerPoint files.
//!
//! The pipeline has three stages: text acquisition (PDF pages or PPTX slides
//! decoded to plain text in document order), heuristic parsing (section
//! segmentation followed by per-section field extraction), and merging
//! (folding the extraction into an existing record without erasing data the
//! extraction did not find).
//!
//! ## Example
//!
//! ```no_run
//! use unresume::import_file;
//!
//! fn main() -> unresume::Result<()> {
//!     let data = import_file("resume.pdf")?;
//!     println!("{} ({})", data.personal.name, data.personal.email);
//!     Ok(())
//! }
//! ```
//!
//! Extraction is heuristic: a field the heuristics cannot find comes back
//! empty, never as an error. Errors are reserved for unusable input (wrong
//! format, encrypted, corrupt, or no readable text at all).

pub mod acquire;
pub mod detect;
pub mod error;
pub mod merge;
pub mod model;
pub mod parser;

use std::fs;
use std::path::Path;

pub use detect::{detect_kind, detect_kind_from_path, FileKind};
pub use error::{Error, Result};
pub use merge::{merge_personal, merge_resume};
pub use model::{
    limits, CertificationItem, EducationItem, ExperienceItem, PersonalDetails, ProjectItem,
    ResumeData,
};
pub use parser::ResumeParser;

/// Options controlling an import run.
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Decode PDF pages / PPTX slides on a thread pool. Output order is
    /// identical either way.
    pub parallel: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Extract plain text from a document of a known kind.
///
/// Page and slide order is preserved. Legacy `.ppt` input fails before any
/// decoding is attempted.
pub fn extract_text(data: &[u8], kind: FileKind, options: &ImportOptions) -> Result<String> {
    acquire::acquire_text(data, kind, options.parallel)
}

/// Import a resume from in-memory file data with default options.
///
/// `filename` drives format detection; `media_type` is a fallback for
/// extensionless names.
///
/// # Arguments
///
/// * `data` - Raw file bytes
/// * `filename` - Original file name, used for extension-based detection
/// * `media_type` - Optional declared media type (e.g. `application/pdf`)
pub fn import_bytes(data: &[u8], filename: &str, media_type: Option<&str>) -> Result<ResumeData> {
    import_bytes_with_options(data, filename, media_type, &ImportOptions::default())
}

/// Import a resume from in-memory file data.
///
/// Fails with [`Error::EmptyDocument`] when the file decodes but contains no
/// readable text; a resume cannot be extracted from an empty document, and a
/// silent all-empty result would look like a parser failure.
pub fn import_bytes_with_options(
    data: &[u8],
    filename: &str,
    media_type: Option<&str>,
    options: &ImportOptions,
) -> Result<ResumeData> {
    let kind = detect_kind(filename, media_type)?;
    log::info!("importing '{filename}' as {kind}");
    import_with_kind(data, kind, options)
}

/// Import a resume from a file on disk with default options.
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<ResumeData> {
    import_file_with_options(path, &ImportOptions::default())
}

/// Import a resume from a file on disk.
///
/// Detection uses the file name only, so an unsupported extension fails
/// before the file is read.
pub fn import_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ImportOptions,
) -> Result<ResumeData> {
    let path = path.as_ref();
    let kind = detect_kind_from_path(path)?;
    log::info!("importing {} as {kind}", path.display());
    let data = fs::read(path)?;
    import_with_kind(&data, kind, options)
}

/// Shared tail of every import entry point: acquire, reject blank text,
/// parse.
fn import_with_kind(data: &[u8], kind: FileKind, options: &ImportOptions) -> Result<ResumeData> {
    let text = extract_text(data, kind, options)?;
    if text.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }
    log::debug!("acquired {} characters of text", text.chars().count());
    Ok(parse_resume_text(&text))
}

/// Parse already-acquired resume text into structured data.
///
/// Useful when the text comes from a source this crate does not decode
/// itself.
pub fn parse_resume_text(text: &str) -> ResumeData {
    ResumeParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resume_text_smoke() {
        let data = parse_resume_text("Jane Doe\njane@x.com\n\nSKILLS\nRust, Go");
        assert_eq!(data.personal.name, "Jane Doe");
        assert_eq!(data.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_default_options_are_parallel() {
        assert!(ImportOptions::default().parallel);
    }

    #[test]
    fn test_import_bytes_rejects_unknown_format() {
        let err = import_bytes(b"hello", "resume.docx", None).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_import_bytes_rejects_legacy_ppt() {
        let err = import_bytes(b"\xd0\xcf\x11\xe0", "resume.ppt", None).unwrap_err();
        assert!(matches!(err, Error::LegacyPowerPoint));
    }
}

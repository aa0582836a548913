//! PDF text extraction using lopdf.

use lopdf::Document as LopdfDocument;
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Extract text from a PDF, page by page.
///
/// Pages are decoded independently (optionally in parallel) and always
/// reassembled in ascending page order, joined with newlines. A failure on
/// any page aborts the whole extraction; there is no partial result.
pub fn extract_pdf_text(data: &[u8], parallel: bool) -> Result<String> {
    let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
        lopdf::Error::Decryption(_) => Error::Encrypted,
        _ => Error::from(e),
    })?;

    if doc.is_encrypted() {
        return Err(Error::Encrypted);
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    log::debug!("extracting text from {} PDF page(s)", page_numbers.len());

    let mut pages: Vec<(u32, String)> = if parallel {
        page_numbers
            .par_iter()
            .map(|&n| page_text(&doc, n).map(|t| (n, t)))
            .collect::<Result<_>>()?
    } else {
        page_numbers
            .iter()
            .map(|&n| page_text(&doc, n).map(|t| (n, t)))
            .collect::<Result<_>>()?
    };

    // Reassemble in page order regardless of completion order.
    pages.sort_by_key(|(n, _)| *n);

    Ok(pages
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn page_text(doc: &LopdfDocument, page_number: u32) -> Result<String> {
    doc.extract_text(&[page_number]).map_err(Error::from)
}

//! PPTX slide text extraction.
//!
//! A `.pptx` file is an OOXML ZIP container; each slide is a
//! `ppt/slides/slideN.xml` part whose visible text lives in `<a:t>` nodes.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use rayon::prelude::*;
use regex::Regex;
use zip::ZipArchive;

use crate::error::Result;

/// Extract text from a PPTX container.
///
/// Slides are processed in numeric slide order (slide1, slide2, ..., slide10),
/// not container-listing order. Text nodes within a slide are joined with
/// spaces; slides are joined with newlines. A container with zero slides
/// yields an empty string, which the import entry point treats as a failure.
pub fn extract_pptx_text(data: &[u8], parallel: bool) -> Result<String> {
    let slide_path = Regex::new(r"(?i)^ppt/slides/slide(\d+)\.xml$").unwrap();

    let mut archive = ZipArchive::new(Cursor::new(data))?;

    // The archive reader is sequential; pull the slide XML out first, then
    // parse the slides independently.
    let mut slides: Vec<(u32, String)> = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let Some(caps) = slide_path.captures(file.name()) else {
            continue;
        };
        let number: u32 = caps[1].parse().unwrap_or(0);
        let mut xml = String::new();
        file.read_to_string(&mut xml)?;
        slides.push((number, xml));
    }

    if slides.is_empty() {
        log::debug!("no slides found in PPTX container");
        return Ok(String::new());
    }

    slides.sort_by_key(|(n, _)| *n);
    log::debug!("extracting text from {} slide(s)", slides.len());

    let texts: Vec<String> = if parallel {
        slides
            .par_iter()
            .map(|(_, xml)| slide_text(xml))
            .collect::<Result<_>>()?
    } else {
        slides
            .iter()
            .map(|(_, xml)| slide_text(xml))
            .collect::<Result<_>>()?
    };

    Ok(texts
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Collect the contents of every text-bearing `<a:t>` node in one slide,
/// joined with spaces.
fn slide_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut parts: Vec<String> = Vec::new();
    let mut in_text_node = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.local_name().as_ref() == b"t" => in_text_node = true,
            Event::End(ref e) if e.local_name().as_ref() == b"t" => in_text_node = false,
            Event::Text(ref e) if in_text_node => {
                let text = e.unescape().unwrap_or_default().trim().to_string();
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(parts.join(" "))
}

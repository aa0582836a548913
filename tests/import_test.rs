//! End-to-end import tests against in-memory PDF and PPTX fixtures.

use std::io::{Cursor, Write};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use unresume::{
    import_bytes, import_bytes_with_options, import_file, merge_resume, parse_resume_text,
    Error, ImportOptions, ResumeData,
};

fn slide_xml(lines: &[&str]) -> String {
    let paragraphs: String = lines
        .iter()
        .map(|t| format!("<a:p><a:r><a:t>{t}</a:t></a:r></a:p>"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <p:sld xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
         xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
         <p:cSld><p:spTree><p:sp><p:txBody>{paragraphs}</p:txBody></p:sp>\
         </p:spTree></p:cSld></p:sld>"
    )
}

fn build_pptx(slides: &[(&str, &[&str])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();
    for (path, lines) in slides {
        writer.start_file(path.to_string(), options).unwrap();
        writer.write_all(slide_xml(lines).as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// All text nodes of one slide are space-joined into a single line, so the
/// resume fixture puts exactly one logical line on each slide.
fn resume_slide_line(n: u32) -> &'static str {
    match n {
        1 => "Jane Doe",
        2 => "jane.doe@example.com",
        3 => "555-123-4567",
        4 => "EDUCATION",
        5 => "B.Tech Computer Science",
        6 => "MIT",
        7 => "2016-2020",
        8 => "SKILLS",
        9 => "Rust, Go",
        10 => "SQL",
        _ => panic!("no fixture slide {n}"),
    }
}

/// Build the fixture deck with the container entries written in the given
/// order; extraction must reassemble slides 1..=10 numerically regardless.
fn resume_pptx(container_order: &[u32]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();
    for n in container_order {
        writer
            .start_file(format!("ppt/slides/slide{n}.xml"), options)
            .unwrap();
        writer
            .write_all(slide_xml(&[resume_slide_line(*n)]).as_bytes())
            .unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn build_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // One text object per line; the extractor emits a line break at each ET.
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), (750 - 20 * i as i64).into()]),
            Operation::new("Tj", vec![Object::string_literal(*line)]),
            Operation::new("ET", vec![]),
        ]);
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().unwrap(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut Cursor::new(&mut bytes)).unwrap();
    bytes
}

fn assert_fixture_resume(data: &ResumeData) {
    assert_eq!(data.personal.name, "Jane Doe");
    assert_eq!(data.personal.email, "jane.doe@example.com");
    assert_eq!(data.personal.phone, "555-123-4567");
    assert_eq!(data.education.len(), 1);
    assert!(data.education[0].degree.contains("B.Tech Computer Science"));
    assert_eq!(data.education[0].institution, "MIT");
    assert_eq!(data.education[0].year, "2016-2020");
    assert_eq!(data.skills, vec!["Rust", "Go", "SQL"]);
}

#[test]
fn test_import_pptx_end_to_end() {
    let bytes = resume_pptx(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let data = import_bytes(&bytes, "resume.pptx", None).unwrap();
    assert_fixture_resume(&data);
}

#[test]
fn test_import_pptx_slides_out_of_order() {
    // Container listing order is scrambled; lexicographic order would also be
    // wrong (slide10 sorts before slide2), which would push "SQL" into the
    // header and out of the skills list.
    let bytes = resume_pptx(&[10, 2, 9, 1, 4, 6, 3, 8, 5, 7]);
    let data = import_bytes(&bytes, "resume.pptx", None).unwrap();
    assert_fixture_resume(&data);
}

#[test]
fn test_import_pdf_end_to_end() {
    let bytes = build_pdf(&[
        "Jane Doe",
        "jane.doe@example.com",
        "SKILLS",
        "Rust, Go",
    ]);

    let data = import_bytes(&bytes, "resume.pdf", None).unwrap();
    assert_eq!(data.personal.email, "jane.doe@example.com");
    assert_eq!(data.skills, vec!["Rust", "Go"]);
}

#[test]
fn test_sequential_matches_parallel() {
    let bytes = resume_pptx(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    let parallel = import_bytes(&bytes, "resume.pptx", None).unwrap();
    let sequential = import_bytes_with_options(
        &bytes,
        "resume.pptx",
        None,
        &ImportOptions { parallel: false },
    )
    .unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_legacy_ppt_rejected_with_guidance() {
    let err = import_bytes(b"\xd0\xcf\x11\xe0", "resume.ppt", None).unwrap_err();
    assert!(matches!(err, Error::LegacyPowerPoint));
    assert!(err.to_string().contains(".pptx"));
}

#[test]
fn test_unsupported_format_rejected() {
    let err = import_bytes(b"PK\x03\x04", "resume.docx", None).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(err.to_string().contains("resume.docx"));
}

#[test]
fn test_pptx_without_slides_is_empty_document() {
    let bytes = build_pptx(&[]);
    let err = import_bytes(&bytes, "resume.pptx", None).unwrap_err();
    assert!(matches!(err, Error::EmptyDocument));
}

#[test]
fn test_pptx_with_blank_slides_is_empty_document() {
    let bytes = build_pptx(&[("ppt/slides/slide1.xml", &[] as &[&str])]);
    let err = import_bytes(&bytes, "resume.pptx", None).unwrap_err();
    assert!(matches!(err, Error::EmptyDocument));
}

#[test]
fn test_corrupt_pptx_fails() {
    let err = import_bytes(b"definitely not a zip", "resume.pptx", None).unwrap_err();
    assert!(matches!(err, Error::PptxRead(_) | Error::Io(_)));
}

#[test]
fn test_import_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.pptx");
    std::fs::write(&path, resume_pptx(&[1, 2])).unwrap();

    let data = import_file(&path).unwrap();
    assert_eq!(data.personal.name, "Jane Doe");
    assert_eq!(data.personal.email, "jane.doe@example.com");
}

#[test]
fn test_import_file_without_text_is_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.pptx");
    std::fs::write(&path, build_pptx(&[])).unwrap();
    assert!(matches!(import_file(&path), Err(Error::EmptyDocument)));
}

#[test]
fn test_import_file_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.odp");
    std::fs::write(&path, b"x").unwrap();
    assert!(matches!(
        import_file(&path),
        Err(Error::UnsupportedFormat(_))
    ));
}

#[test]
fn test_failed_import_leaves_existing_untouched() {
    // The merge is only reachable after a successful extraction; a failed
    // import returns Err and the caller's record is never rewritten.
    let mut existing = ResumeData::new();
    existing.personal.name = "Keep Me".to_string();

    let result = import_bytes(b"garbage", "resume.pptx", None);
    assert!(result.is_err());
    assert_eq!(existing.personal.name, "Keep Me");
}

#[test]
fn test_merge_after_import_preserves_unfound_fields() {
    let extracted = import_bytes(&resume_pptx(&[1, 2]), "resume.pptx", None).unwrap();
    assert_eq!(extracted.personal.name, "Jane Doe");

    let mut existing = ResumeData::new();
    existing.personal.phone = "+1 555 000 1111".to_string();
    existing.personal.photo = "data:image/png;base64,AAAA".to_string();
    existing.skills = vec!["Haskell".to_string()];

    let merged = merge_resume(&existing, &extracted);
    assert_eq!(merged.personal.name, "Jane Doe");
    assert_eq!(merged.personal.phone, "+1 555 000 1111");
    assert_eq!(merged.personal.photo, "data:image/png;base64,AAAA");
    assert_eq!(merged.skills, vec!["Haskell"]);
}

#[test]
fn test_parse_full_text_scenario() {
    let text = "\
Jane Doe
jane@x.com | 555-123-4567
San Francisco, CA

SUMMARY
Backend engineer focused on data pipelines.

EXPERIENCE
Software Engineer at Acme Corp
Jan 2020 - Present
- Built the billing pipeline

EDUCATION
B.Tech Computer Science
MIT
2016-2020

PROJECTS
InsightOps https://insightops.app
Built with React and Node.js
Generates executive summaries

CERTIFICATIONS
AWS Certified Cloud Practitioner - Amazon Web Services
2023

SKILLS
Rust, Go, SQL";

    let data = parse_resume_text(text);
    assert_eq!(data.personal.name, "Jane Doe");
    assert_eq!(data.personal.email, "jane@x.com");
    assert_eq!(data.personal.phone, "555-123-4567");
    assert_eq!(data.personal.address, "San Francisco, CA");
    assert_eq!(
        data.personal.summary,
        "Backend engineer focused on data pipelines."
    );
    assert_eq!(data.experience.len(), 1);
    assert_eq!(data.experience[0].role, "Software Engineer");
    assert_eq!(data.experience[0].company, "Acme Corp");
    assert_eq!(data.experience[0].duration, "Jan 2020 - Present");
    assert_eq!(data.education.len(), 1);
    assert_eq!(data.education[0].institution, "MIT");
    assert_eq!(data.projects.len(), 1);
    assert_eq!(data.projects[0].name, "InsightOps");
    assert_eq!(data.projects[0].link, "https://insightops.app");
    assert_eq!(data.projects[0].tech, "React and Node.js");
    assert_eq!(data.projects[0].description, "Generates executive summaries");
    assert_eq!(data.certifications.len(), 1);
    assert_eq!(data.certifications[0].issuer, "Amazon Web Services");
    assert_eq!(data.certifications[0].year, "2023");
    assert_eq!(data.skills, vec!["Rust", "Go", "SQL"]);
}

#[test]
fn test_sample_round_trips_through_json() {
    let sample = ResumeData::sample();
    let json = serde_json::to_string(&sample).unwrap();
    let back: ResumeData = serde_json::from_str(&json).unwrap();
    assert_eq!(sample, back);
}

//! Section segmentation: raw resume text → labeled line regions.

use regex::Regex;

/// A labeled region of a resume document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Everything before the first recognized heading (name, contact lines).
    Header,
    Summary,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl Section {
    /// Stable lowercase key for the section.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Summary => "summary",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
        }
    }
}

/// Heading keyword synonyms per section.
///
/// A line is a heading only if its normalized form equals a keyword or starts
/// with one followed by a space. The prefix rule tolerates trailing qualifiers
/// ("Education History", "Skills 2") without matching prose that merely
/// contains a keyword mid-sentence.
const SECTION_HEADINGS: &[(Section, &[&str])] = &[
    (
        Section::Summary,
        &["summary", "about", "profile", "objective", "professional summary"],
    ),
    (
        Section::Education,
        &[
            "education",
            "academic background",
            "academics",
            "qualification",
            "qualifications",
        ],
    ),
    (
        Section::Experience,
        &[
            "experience",
            "work experience",
            "employment",
            "work history",
            "professional experience",
        ],
    ),
    (Section::Projects, &["projects", "project", "personal projects"]),
    (
        Section::Skills,
        &["skills", "technical skills", "core skills", "key skills", "tech stack"],
    ),
    (
        Section::Certifications,
        &["certifications", "certification", "licenses", "license", "courses"],
    ),
];

/// Cleaned lines per section, in input order.
///
/// Blank lines are retained as empty-string separators (except in the header)
/// so that downstream block splitting can use them. Every input line lands in
/// exactly one section.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    header: Vec<String>,
    summary: Vec<String>,
    education: Vec<String>,
    experience: Vec<String>,
    projects: Vec<String>,
    skills: Vec<String>,
    certifications: Vec<String>,
}

impl SectionMap {
    /// Lines assigned to a section.
    pub fn lines(&self, section: Section) -> &[String] {
        match section {
            Section::Header => &self.header,
            Section::Summary => &self.summary,
            Section::Education => &self.education,
            Section::Experience => &self.experience,
            Section::Projects => &self.projects,
            Section::Skills => &self.skills,
            Section::Certifications => &self.certifications,
        }
    }

    fn push(&mut self, section: Section, line: String) {
        match section {
            Section::Header => self.header.push(line),
            Section::Summary => self.summary.push(line),
            Section::Education => self.education.push(line),
            Section::Experience => self.experience.push(line),
            Section::Projects => self.projects.push(line),
            Section::Skills => self.skills.push(line),
            Section::Certifications => self.certifications.push(line),
        }
    }
}

/// Splits raw resume text into a [`SectionMap`] by detecting heading lines.
pub struct Segmenter {
    heading_token: Regex,
    non_letter: Regex,
    whitespace: Regex,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            // Uppercase standalone tokens only: PDF extraction often runs an
            // ALL-CAPS heading into the surrounding line, but prose like
            // "my education" must not be promoted to its own line.
            heading_token: Regex::new(
                r"\b(SUMMARY|EDUCATION|EXPERIENCE|PROJECTS|SKILLS|CERTIFICATIONS)\b",
            )
            .unwrap(),
            non_letter: Regex::new(r"[^a-z\s]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Segment raw text into labeled sections.
    ///
    /// Lines before the first heading belong to the header. A heading line
    /// switches the current section and is not emitted itself. Blank lines
    /// are kept as separators within a section; blank lines before any
    /// heading are dropped.
    pub fn segment(&self, text: &str) -> SectionMap {
        let unified = text.replace('\r', "\n");
        let isolated = self.heading_token.replace_all(&unified, "\n$1\n");

        let mut sections = SectionMap::default();
        let mut current = Section::Header;

        for raw in isolated.split('\n') {
            let line = self.clean_line(raw);
            if line.is_empty() {
                if current != Section::Header {
                    sections.push(current, String::new());
                }
                continue;
            }
            if let Some(section) = self.detect_heading(&line) {
                current = section;
                continue;
            }
            sections.push(current, line);
        }

        sections
    }

    /// Clean one line: map bullet glyphs to a plain hyphen, collapse
    /// whitespace and tabs to single spaces, trim.
    pub fn clean_line(&self, line: &str) -> String {
        let mapped: String = line
            .chars()
            .map(|c| match c {
                '\u{2022}' | '\u{25CF}' | '\u{25CB}' | '\u{25AA}' | '\u{25E6}' => '-',
                '\t' => ' ',
                other => other,
            })
            .collect();
        self.whitespace.replace_all(&mapped, " ").trim().to_string()
    }

    /// Test a line against the heading keyword table.
    ///
    /// The line is lowercased, non-letters are stripped, whitespace is
    /// collapsed; it matches only when the result equals a keyword or starts
    /// with a keyword followed by a space.
    pub fn detect_heading(&self, line: &str) -> Option<Section> {
        let lower = line.to_lowercase();
        let stripped = self.non_letter.replace_all(&lower, " ");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        let normalized = collapsed.trim();
        if normalized.is_empty() {
            return None;
        }

        for (section, keywords) in SECTION_HEADINGS {
            for keyword in *keywords {
                if normalized == *keyword
                    || normalized.starts_with(&format!("{keyword} "))
                {
                    return Some(*section);
                }
            }
        }
        None
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

//! Field extraction heuristics: section lines → structured resume entries.

use std::collections::HashSet;

use regex::Regex;

use crate::model::{
    limits, trim_to, CertificationItem, EducationItem, ExperienceItem, PersonalDetails,
    ProjectItem, ResumeData,
};
use crate::parser::patterns::Patterns;
use crate::parser::sections::{Section, Segmenter};

/// Heuristic resume text parser.
///
/// Segments raw text into sections, then applies per-section pattern
/// heuristics to produce a structured (possibly sparse) record. Absent data
/// is a normal outcome; every cap is a hard truncation, never an error.
pub struct ResumeParser {
    segmenter: Segmenter,
    patterns: Patterns,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self {
            segmenter: Segmenter::new(),
            patterns: Patterns::new(),
        }
    }

    /// Parse free-form resume text into a structured record.
    pub fn parse(&self, text: &str) -> ResumeData {
        let sections = self.segmenter.segment(text);
        let header_lines = sections.lines(Section::Header);
        let header_text = header_lines.join(" ");

        let name = self.extract_name(header_lines);
        let address = self.extract_address(header_lines, &name);
        let summary = trim_to(
            &sections
                .lines(Section::Summary)
                .iter()
                .filter(|l| !l.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
            limits::SUMMARY,
        );

        // Contact patterns prefer the header block but fall back to the
        // whole document; a resume may list contacts in a footer.
        let email = trim_to(
            find(&self.patterns.email, &header_text)
                .or_else(|| find(&self.patterns.email, text))
                .unwrap_or(""),
            limits::EMAIL,
        );
        let linkedin = trim_to(
            &ensure_url(
                find(&self.patterns.linkedin, &header_text)
                    .or_else(|| find(&self.patterns.linkedin, text))
                    .unwrap_or(""),
            ),
            limits::LINKEDIN,
        );
        let github = trim_to(
            &ensure_url(
                find(&self.patterns.github, &header_text)
                    .or_else(|| find(&self.patterns.github, text))
                    .unwrap_or(""),
            ),
            limits::GITHUB,
        );
        let phone = self.pick_phone(text);

        ResumeData {
            personal: PersonalDetails {
                name,
                email,
                phone,
                address,
                linkedin,
                github,
                photo: String::new(),
                summary,
            },
            education: self.parse_education(sections.lines(Section::Education)),
            experience: self.parse_experience(sections.lines(Section::Experience)),
            projects: self.parse_projects(sections.lines(Section::Projects)),
            skills: self.parse_skills(sections.lines(Section::Skills)),
            certifications: self.parse_certifications(sections.lines(Section::Certifications)),
        }
    }

    /// Group a section's lines into blocks: leading bullet markers are
    /// stripped, consecutive non-blank lines form one entry candidate, and a
    /// blank separator ends the current block. Empty blocks are discarded.
    fn blocks(&self, lines: &[String]) -> Vec<Vec<String>> {
        let mut blocks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for line in lines {
            let cleaned = self.strip_bullet(line);
            if cleaned.is_empty() {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                continue;
            }
            current.push(cleaned);
        }
        if !current.is_empty() {
            blocks.push(current);
        }
        blocks
    }

    fn strip_bullet(&self, line: &str) -> String {
        self.patterns.bullet.replace(line, "").trim().to_string()
    }

    /// The first header line that is not contact-like and reads like a
    /// personal name: 2-5 words, each alphabetic (apostrophes, hyphens and
    /// periods allowed).
    fn extract_name(&self, header_lines: &[String]) -> String {
        for line in header_lines {
            if self.is_contact_like(line) {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() < 2 || words.len() > 5 {
                continue;
            }
            if !words.iter().all(|w| self.patterns.name_word.is_match(w)) {
                continue;
            }
            return trim_to(line, limits::NAME);
        }
        String::new()
    }

    /// The first remaining header line containing a comma or a location
    /// keyword.
    fn extract_address(&self, header_lines: &[String], name: &str) -> String {
        for line in header_lines {
            if line.is_empty() || line == name {
                continue;
            }
            if self.is_contact_like(line) {
                continue;
            }
            if line.contains(',') || self.patterns.location_hint.is_match(line) {
                return trim_to(line, limits::ADDRESS);
            }
        }
        String::new()
    }

    fn is_contact_like(&self, line: &str) -> bool {
        self.patterns.email.is_match(line)
            || self.patterns.linkedin.is_match(line)
            || self.patterns.github.is_match(line)
            || self.patterns.phone.is_match(line)
            || self.patterns.scheme.is_match(line)
    }

    /// First phone candidate whose digit count is 10-15 after stripping
    /// separators.
    fn pick_phone(&self, text: &str) -> String {
        for candidate in self.patterns.phone.find_iter(text) {
            let digits = candidate.as_str().chars().filter(char::is_ascii_digit).count();
            if (10..=15).contains(&digits) {
                return trim_to(candidate.as_str(), limits::PHONE);
            }
        }
        String::new()
    }

    fn parse_education(&self, lines: &[String]) -> Vec<EducationItem> {
        let p = &self.patterns;
        self.blocks(lines)
            .into_iter()
            .filter_map(|block| {
                let first = block.first().cloned().unwrap_or_default();
                let joined = block.join(" ");
                let year = trim_to(find(&p.year, &joined).unwrap_or(""), limits::YEAR);
                let score = trim_to(
                    block
                        .iter()
                        .find(|l| p.score.is_match(l))
                        .map(String::as_str)
                        .unwrap_or(""),
                    limits::SCORE,
                );

                let mut degree = block
                    .iter()
                    .find(|l| p.degree.is_match(l))
                    .cloned()
                    .unwrap_or(first);
                let mut institution = block
                    .iter()
                    .find(|l| p.institution.is_match(l) && **l != degree)
                    .cloned()
                    .or_else(|| block.get(1).cloned())
                    .unwrap_or_default();

                // "B.Tech CS - MIT" on one line: split and keep the halves
                // when the right half looks like an institution.
                if institution.is_empty() && p.separator.is_match(&degree) {
                    let parts: Vec<String> =
                        p.separator.split(&degree).map(|s| s.trim().to_string()).collect();
                    if parts.len() >= 2 && p.institution.is_match(&parts[1]) {
                        institution = parts[1].clone();
                        degree = parts[0].clone();
                    }
                }

                let item = EducationItem {
                    degree: trim_to(&degree, limits::DEGREE),
                    institution: trim_to(&institution, limits::INSTITUTION),
                    year,
                    score,
                };
                item.has_data().then_some(item)
            })
            .collect()
    }

    fn parse_experience(&self, lines: &[String]) -> Vec<ExperienceItem> {
        let p = &self.patterns;
        self.blocks(lines)
            .into_iter()
            .filter_map(|block| {
                let first = block.first().cloned().unwrap_or_default();
                let duration_line = block
                    .iter()
                    .find(|l| p.duration.is_match(l) || p.year.is_match(l))
                    .cloned()
                    .unwrap_or_default();
                let duration = trim_to(
                    find(&p.duration, &duration_line)
                        .or_else(|| find(&p.year, &duration_line))
                        .unwrap_or(""),
                    limits::DURATION,
                );

                let (mut role, mut company) = if p.at_word.is_match(&first) {
                    split_pair(&p.at_word, &first)
                } else if p.separator.is_match(&first) {
                    split_pair(&p.separator, &first)
                } else {
                    (first.clone(), String::new())
                };
                role = role.trim().to_string();
                company = company.trim().to_string();

                if company.is_empty() {
                    if let Some(line) =
                        block.iter().skip(1).find(|l| p.company_hint.is_match(l))
                    {
                        company = line.clone();
                    }
                }

                let description_lines: Vec<&str> = block
                    .iter()
                    .filter(|l| {
                        **l != first
                            && **l != duration_line
                            && (company.is_empty() || **l != company)
                    })
                    .map(String::as_str)
                    .collect();
                let description =
                    trim_to(&description_lines.join("\n"), limits::DESCRIPTION);

                let item = ExperienceItem {
                    company: trim_to(&company, limits::COMPANY),
                    role: trim_to(&role, limits::ROLE),
                    duration,
                    description,
                };
                item.has_data().then_some(item)
            })
            .collect()
    }

    fn parse_projects(&self, lines: &[String]) -> Vec<ProjectItem> {
        let p = &self.patterns;
        self.blocks(lines)
            .into_iter()
            .filter_map(|block| {
                let first = block.first().cloned().unwrap_or_default();
                let joined = block.join(" ");
                let link = trim_to(find(&p.url, &joined).unwrap_or(""), limits::LINK);

                let mut name = p.url.replace(&first, "").trim().to_string();
                name = p.project_prefix.replace(&name, "").trim().to_string();

                let tech_line = block
                    .iter()
                    .find(|l| p.tech.is_match(l))
                    .cloned()
                    .unwrap_or_default();
                let tech = trim_to(
                    p.tech_prefix.replace(&tech_line, "").trim(),
                    limits::TECH,
                );

                let description_lines: Vec<&str> = block
                    .iter()
                    .enumerate()
                    .filter(|(i, l)| *i > 0 && **l != tech_line)
                    .map(|(_, l)| l.as_str())
                    .collect();
                let description =
                    trim_to(&description_lines.join("\n"), limits::DESCRIPTION);

                if name.is_empty() && !description.is_empty() {
                    name = description
                        .split('\n')
                        .next()
                        .unwrap_or("")
                        .chars()
                        .take(limits::PROJECT_NAME)
                        .collect();
                }

                let item = ProjectItem {
                    name: trim_to(&name, limits::PROJECT_NAME),
                    link,
                    description,
                    tech,
                };
                item.has_data().then_some(item)
            })
            .collect()
    }

    fn parse_certifications(&self, lines: &[String]) -> Vec<CertificationItem> {
        let p = &self.patterns;
        self.blocks(lines)
            .into_iter()
            .filter_map(|block| {
                let first = block.first().cloned().unwrap_or_default();
                let joined = block.join(" ");
                let year = trim_to(
                    find(&p.year, &first)
                        .or_else(|| find(&p.year, &joined))
                        .unwrap_or(""),
                    limits::YEAR,
                );

                let mut name = first.clone();
                let mut issuer = block.get(1).cloned().unwrap_or_default();

                if p.separator.is_match(&first) {
                    let (left, right) = split_pair(&p.separator, &first);
                    name = left;
                    if !right.is_empty() {
                        issuer = right;
                    }
                } else if p.by_word.is_match(&first) {
                    let (left, right) = split_pair(&p.by_word, &first);
                    name = left;
                    if !right.is_empty() {
                        issuer = right;
                    }
                }

                let item = CertificationItem {
                    name: trim_to(&name, limits::CERT_NAME),
                    issuer: trim_to(&issuer, limits::ISSUER),
                    year,
                };
                item.has_data().then_some(item)
            })
            .collect()
    }

    /// Split the skills section on commas/semicolons/pipes/newlines, strip
    /// leading labels, dedupe case-insensitively, cap token length and count.
    fn parse_skills(&self, lines: &[String]) -> Vec<String> {
        let p = &self.patterns;
        let joined = lines.join("\n");

        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<String> = Vec::new();

        for raw in p.skills_split.split(&joined) {
            let token = p.label_prefix.replace(raw, "");
            let token = p.skills_prefix.replace(&token, "");
            let token = token.trim();
            if token.is_empty() || token.chars().count() > limits::SKILL {
                continue;
            }
            let key = token.to_lowercase();
            if !seen.insert(key) {
                continue;
            }
            unique.push(token.to_string());
            if unique.len() >= limits::MAX_SKILLS {
                break;
            }
        }
        unique
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First match of `re` in `text`, as a string slice.
fn find<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.find(text).map(|m| m.as_str())
}

/// Split `line` on the first occurrence of `re` and return the trimmed
/// (left, right) halves; text after a second separator is dropped.
fn split_pair(re: &Regex, line: &str) -> (String, String) {
    let mut parts = re.split(line);
    let left = parts.next().unwrap_or("").trim().to_string();
    let right = parts.next().unwrap_or("").trim().to_string();
    (left, right)
}

/// Prepend an explicit scheme when the URL lacks one.
fn ensure_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.to_lowercase().starts_with("http://") || url.to_lowercase().starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

//! Named pattern constants for field extraction.
//!
//! All heuristics are heuristic and assumption-bound: Latin-alphabet names,
//! Gregorian 4-digit years, English month names and section labels.

use regex::Regex;

/// Compiled pattern set used by the field extractors.
///
/// Patterns are compiled once and shared by every extractor, so each one can
/// be unit-tested independently of the extraction control flow.
pub struct Patterns {
    /// Standard email address.
    pub email: Regex,
    /// Digits with common separators; a candidate qualifies only when it has
    /// 10-15 digits after stripping non-digits.
    pub phone: Regex,
    /// LinkedIn profile URL, scheme optional.
    pub linkedin: Regex,
    /// GitHub URL, scheme optional.
    pub github: Regex,
    /// Generic http(s) URL.
    pub url: Regex,
    /// Leading explicit scheme.
    pub scheme: Regex,
    /// 4-digit year, optionally a range ending in another year or
    /// present/current.
    pub year: Regex,
    /// Month-and-year date range ("Jan 2020 - Present", "2019 to 2021").
    pub duration: Regex,
    /// Degree keywords (B.Tech, bachelor, MBA, PhD, ...).
    pub degree: Regex,
    /// Institution keywords (university, college, ...).
    pub institution: Regex,
    /// Score keywords (GPA, CGPA, percentage, ...).
    pub score: Regex,
    /// Tech-stack line keywords.
    pub tech: Regex,
    /// Everything up to and including a tech-stack keyword, for stripping.
    pub tech_prefix: Regex,
    /// Company-suffix keywords (Inc, LLC, Technologies, ...).
    pub company_hint: Regex,
    /// Leading bullet or numbering marker.
    pub bullet: Regex,
    /// " - " or " | " separator.
    pub separator: Regex,
    /// The word "at" between role and company.
    pub at_word: Regex,
    /// The word "by" between certification and issuer.
    pub by_word: Regex,
    /// Leading "Project:" label.
    pub project_prefix: Regex,
    /// Leading "Label:" prefix on a skill token.
    pub label_prefix: Regex,
    /// Leading "skills:" label.
    pub skills_prefix: Regex,
    /// Token separators in a skills list.
    pub skills_split: Regex,
    /// Location keywords for address detection.
    pub location_hint: Regex,
    /// One word of a personal name (alphabetic with apostrophes/hyphens/periods).
    pub name_word: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").unwrap(),
            phone: Regex::new(r"\+?\d[\d\s().-]{8,}\d").unwrap(),
            linkedin: Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/[^\s,;|)]+")
                .unwrap(),
            github: Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[^\s,;|)]+").unwrap(),
            url: Regex::new(r"(?i)https?://[^\s,;|)]+").unwrap(),
            scheme: Regex::new(r"(?i)^https?://").unwrap(),
            year: Regex::new(
                r"(?i)\b(?:19|20)\d{2}(?:\s*(?:-|to)\s*(?:present|current|(?:19|20)\d{2}))?\b",
            )
            .unwrap(),
            duration: Regex::new(
                r"(?i)\b(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\s+)?(?:19|20)\d{2}\s*(?:-|to)\s*(?:present|current|(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\s+)?(?:19|20)\d{2})\b",
            )
            .unwrap(),
            degree: Regex::new(
                r"(?i)\b(?:b\.?\s?tech|m\.?\s?tech|bachelor|master|mba|bsc|msc|phd|diploma|associate|b\.?e\.?|m\.?e\.?|high school|secondary)\b",
            )
            .unwrap(),
            institution: Regex::new(
                r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\b",
            )
            .unwrap(),
            score: Regex::new(r"(?i)\b(?:cgpa|gpa|grade|percentage|score)\b").unwrap(),
            tech: Regex::new(
                r"(?i)\b(?:tech stack|stack|technologies|tools|built with|using)\b",
            )
            .unwrap(),
            tech_prefix: Regex::new(
                r"(?i)^.*?(?:tech stack|stack|technologies|tools|built with|using)\s*[:\-]?\s*",
            )
            .unwrap(),
            company_hint: Regex::new(
                r"(?i)\b(?:inc|llc|ltd|limited|pvt|technologies|technology|solutions|systems|corp|company|labs|studio|agency)\b",
            )
            .unwrap(),
            bullet: Regex::new(r"^(?:[-*]|\d+[.)])\s+").unwrap(),
            separator: Regex::new(r" - | \| ").unwrap(),
            at_word: Regex::new(r"(?i)\sat\s").unwrap(),
            by_word: Regex::new(r"(?i)\sby\s").unwrap(),
            project_prefix: Regex::new(r"(?i)^project\s*[:\-]\s*").unwrap(),
            label_prefix: Regex::new(r"^[A-Za-z ]{2,25}:\s*").unwrap(),
            skills_prefix: Regex::new(r"(?i)^\s*skills?\s*:?").unwrap(),
            skills_split: Regex::new(r"[,\n;|]+").unwrap(),
            location_hint: Regex::new(r"(?i)\b(?:street|st|road|rd|city|state|india|usa|uk)\b")
                .unwrap(),
            name_word: Regex::new(r"^[A-Za-z][A-Za-z'.-]*$").unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

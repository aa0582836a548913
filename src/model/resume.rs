//! Resume document types.
//!
//! `ResumeData` is the authoritative record the host application edits. The
//! extraction pipeline produces a value of the same shape with empty defaults;
//! "absent" is simply "empty after trimming", which is exactly the predicate
//! the merge resolver applies.

use serde::{Deserialize, Serialize};

/// Canonical maximum lengths (in characters) for resume fields.
///
/// These are hard truncation limits, not validation failures: values over the
/// limit are cut, never rejected.
pub mod limits {
    pub const NAME: usize = 80;
    pub const EMAIL: usize = 120;
    pub const PHONE: usize = 20;
    pub const ADDRESS: usize = 120;
    pub const LINKEDIN: usize = 120;
    pub const GITHUB: usize = 120;
    pub const SUMMARY: usize = 500;

    pub const DEGREE: usize = 100;
    pub const INSTITUTION: usize = 120;
    pub const YEAR: usize = 12;
    pub const SCORE: usize = 20;

    pub const COMPANY: usize = 120;
    pub const ROLE: usize = 120;
    pub const DURATION: usize = 60;
    pub const DESCRIPTION: usize = 1200;

    pub const PROJECT_NAME: usize = 120;
    pub const LINK: usize = 160;
    pub const TECH: usize = 120;

    pub const CERT_NAME: usize = 120;
    pub const ISSUER: usize = 120;

    pub const SKILL: usize = 40;
    pub const MAX_SKILLS: usize = 30;
}

/// Trim a string and hard-truncate it to `max` characters.
pub fn trim_to(value: &str, max: usize) -> String {
    value.trim().chars().take(max).collect()
}

/// Personal/contact fields of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub photo: String,
    pub summary: String,
}

/// One education entry (one degree).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub score: String,
}

impl EducationItem {
    /// True if any field carries data.
    pub fn has_data(&self) -> bool {
        !self.degree.is_empty()
            || !self.institution.is_empty()
            || !self.year.is_empty()
            || !self.score.is_empty()
    }
}

/// One experience entry (one job).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

impl ExperienceItem {
    /// True if any field carries data.
    pub fn has_data(&self) -> bool {
        !self.company.is_empty()
            || !self.role.is_empty()
            || !self.duration.is_empty()
            || !self.description.is_empty()
    }
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    pub name: String,
    pub link: String,
    pub description: String,
    pub tech: String,
}

impl ProjectItem {
    /// True if any field carries data.
    pub fn has_data(&self) -> bool {
        !self.name.is_empty()
            || !self.link.is_empty()
            || !self.description.is_empty()
            || !self.tech.is_empty()
    }
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

impl CertificationItem {
    /// True if any field carries data.
    pub fn has_data(&self) -> bool {
        !self.name.is_empty() || !self.issuer.is_empty() || !self.year.is_empty()
    }
}

/// A structured resume document.
///
/// Round-trips as JSON; this is also the persistence shape used by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal: PersonalDetails,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationItem>,
}

impl ResumeData {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing in the document carries data.
    pub fn is_empty(&self) -> bool {
        self.personal == PersonalDetails::default()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.skills.is_empty()
            && self.certifications.is_empty()
    }

    /// A fully-populated sample document, useful as a starting point and in tests.
    pub fn sample() -> Self {
        Self {
            personal: PersonalDetails {
                name: "Aarav Mehta".to_string(),
                email: "aarav.mehta@email.com".to_string(),
                phone: "+1 555 210 9987".to_string(),
                address: "San Francisco, CA".to_string(),
                linkedin: "linkedin.com/in/aaravmehta".to_string(),
                github: "github.com/aaravmehta".to_string(),
                photo: String::new(),
                summary: "Results-driven Software Engineer with 7+ years delivering scalable \
                          web applications across product, platform, and analytics teams. \
                          Experienced in React, TypeScript, Node.js, cloud services, and team \
                          mentoring."
                    .to_string(),
            },
            education: vec![EducationItem {
                degree: "B.Tech in Computer Science".to_string(),
                institution: "University of Illinois Urbana-Champaign".to_string(),
                year: "2015 - 2019".to_string(),
                score: "GPA 3.7/4.0".to_string(),
            }],
            experience: vec![
                ExperienceItem {
                    company: "Northwind Labs".to_string(),
                    role: "Senior Frontend Engineer".to_string(),
                    duration: "2021 - Present".to_string(),
                    description: "Led redesign of customer onboarding, increasing completion \
                                  rate from 62% to 81%."
                        .to_string(),
                },
                ExperienceItem {
                    company: "Everpeak".to_string(),
                    role: "Frontend Engineer".to_string(),
                    duration: "2019 - 2021".to_string(),
                    description: "Delivered analytics dashboard with real-time charts for 8K+ \
                                  daily users."
                        .to_string(),
                },
            ],
            projects: vec![ProjectItem {
                name: "InsightOps".to_string(),
                link: "https://insightops.app".to_string(),
                description: "Built an AI-assisted reporting tool that generates executive \
                              summaries from operational data."
                    .to_string(),
                tech: "React, TypeScript, Node.js, PostgreSQL".to_string(),
            }],
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "REST APIs".to_string(),
                "Performance Optimization".to_string(),
            ],
            certifications: vec![CertificationItem {
                name: "AWS Certified Cloud Practitioner".to_string(),
                issuer: "Amazon Web Services".to_string(),
                year: "2023".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_to_is_exact_and_non_throwing() {
        let long = "x".repeat(600);
        let capped = trim_to(&long, limits::SUMMARY);
        assert_eq!(capped.chars().count(), 500);

        // counts characters, not bytes
        let unicode = "é".repeat(10);
        assert_eq!(trim_to(&unicode, 4).chars().count(), 4);

        assert_eq!(trim_to("  padded  ", 120), "padded");
    }

    #[test]
    fn test_has_data_predicates() {
        assert!(!EducationItem::default().has_data());
        assert!(EducationItem {
            year: "2020".to_string(),
            ..Default::default()
        }
        .has_data());

        assert!(!ExperienceItem::default().has_data());
        assert!(!ProjectItem::default().has_data());
        assert!(!CertificationItem::default().has_data());
        assert!(CertificationItem {
            issuer: "Coursera".to_string(),
            ..Default::default()
        }
        .has_data());
    }

    #[test]
    fn test_resume_data_json_round_trip() {
        let sample = ResumeData::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_resume_data_deserializes_with_missing_fields() {
        let partial: ResumeData =
            serde_json::from_str(r#"{"personal": {"name": "Jane Doe"}}"#).unwrap();
        assert_eq!(partial.personal.name, "Jane Doe");
        assert!(partial.personal.email.is_empty());
        assert!(partial.education.is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(ResumeData::new().is_empty());
        assert!(!ResumeData::sample().is_empty());
    }
}

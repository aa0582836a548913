//! Merge extracted resume data into an existing record.
//!
//! Import never erases user data: an extractor that found nothing leaves the
//! existing value in place. Whole lists are replaced only when the extraction
//! produced at least one entry.

use crate::model::{
    limits, trim_to, CertificationItem, EducationItem, ExperienceItem, PersonalDetails,
    ProjectItem, ResumeData,
};

/// Merge `extracted` into `existing`, non-empty extraction winning.
///
/// Personal fields merge individually; `photo` is never taken from the
/// extraction. List fields (education, experience, projects, skills,
/// certifications) replace the existing list wholesale when at least one
/// extracted entry carries data and are ignored otherwise. Partial list
/// merging is deliberately avoided: matching
/// extracted entries against existing ones is guesswork, and wholesale
/// replacement keeps the outcome predictable.
pub fn merge_resume(existing: &ResumeData, extracted: &ResumeData) -> ResumeData {
    ResumeData {
        personal: merge_personal(&existing.personal, &extracted.personal),
        education: pick_list(&existing.education, &extracted.education),
        experience: pick_list(&existing.experience, &extracted.experience),
        projects: pick_list(&existing.projects, &extracted.projects),
        skills: pick_list(&existing.skills, &extracted.skills),
        certifications: pick_list(&existing.certifications, &extracted.certifications),
    }
}

/// Per-field merge of personal details. Every surviving value passes through
/// its canonical cap again, so an oversized value in `existing` cannot leak
/// through a merge.
pub fn merge_personal(existing: &PersonalDetails, extracted: &PersonalDetails) -> PersonalDetails {
    PersonalDetails {
        name: trim_to(pick(&existing.name, &extracted.name), limits::NAME),
        email: trim_to(pick(&existing.email, &extracted.email), limits::EMAIL),
        phone: trim_to(pick(&existing.phone, &extracted.phone), limits::PHONE),
        address: trim_to(pick(&existing.address, &extracted.address), limits::ADDRESS),
        linkedin: trim_to(pick(&existing.linkedin, &extracted.linkedin), limits::LINKEDIN),
        github: trim_to(pick(&existing.github, &extracted.github), limits::GITHUB),
        photo: existing.photo.clone(),
        summary: trim_to(pick(&existing.summary, &extracted.summary), limits::SUMMARY),
    }
}

fn pick<'a>(existing: &'a str, extracted: &'a str) -> &'a str {
    if extracted.trim().is_empty() {
        existing
    } else {
        extracted
    }
}

/// List entries that count as "found something" for merge purposes.
trait HasContent {
    fn has_content(&self) -> bool;
}

impl HasContent for String {
    fn has_content(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl HasContent for EducationItem {
    fn has_content(&self) -> bool {
        self.has_data()
    }
}

impl HasContent for ExperienceItem {
    fn has_content(&self) -> bool {
        self.has_data()
    }
}

impl HasContent for ProjectItem {
    fn has_content(&self) -> bool {
        self.has_data()
    }
}

impl HasContent for CertificationItem {
    fn has_content(&self) -> bool {
        self.has_data()
    }
}

fn pick_list<T: Clone + HasContent>(existing: &[T], extracted: &[T]) -> Vec<T> {
    if extracted.iter().any(HasContent::has_content) {
        extracted.to_vec()
    } else {
        existing.to_vec()
    }
}

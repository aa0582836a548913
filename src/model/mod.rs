//! Structured resume data model.

mod resume;

pub use resume::{
    limits, trim_to, CertificationItem, EducationItem, ExperienceItem, PersonalDetails,
    ProjectItem, ResumeData,
};

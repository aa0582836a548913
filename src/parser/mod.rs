//! Resume text parsing: segmentation and field extraction.

mod fields;
mod patterns;
mod sections;

pub use fields::ResumeParser;
pub use patterns::Patterns;
pub use sections::{Section, SectionMap, Segmenter};

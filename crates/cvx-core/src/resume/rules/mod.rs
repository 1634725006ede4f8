//! Rule-based field extractors for resume text.

pub mod email;
pub mod experience;
pub mod patterns;
pub mod phone;
pub mod skills;

pub use email::{EmailExtractor, extract_email};
pub use experience::ExperienceExtractor;
pub use phone::{PhoneExtractor, extract_phone};
pub use skills::SkillsExtractor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

//! Candidate field extraction.

mod parser;
pub mod rules;

pub use parser::ResumeParser;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The extracted candidate record.
///
/// All five keys are always present; a field nothing was found for is
/// `None` or empty. Skills carry unordered-set semantics, so their
/// serialized order is not stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// First PERSON entity in document order, if any.
    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// First phone-shaped match, unvalidated.
    #[serde(rename = "Phone")]
    pub phone: Option<String>,

    /// First email address match.
    #[serde(rename = "Email")]
    pub email: Option<String>,

    /// Matching subset of the skill vocabulary.
    #[serde(rename = "Skills")]
    pub skills: HashSet<String>,

    /// Lines mentioning experience keywords, in document order.
    #[serde(rename = "Experience Snippets")]
    pub experience_snippets: Vec<String>,
}

/// Result of running field extraction over a document's text.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted candidate record.
    pub record: CandidateRecord,

    /// Warnings carried over from text extraction plus any raised
    /// during parsing.
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

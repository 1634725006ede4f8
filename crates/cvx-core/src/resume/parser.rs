//! Resume parser combining the rule extractors and the entity
//! recognizer.

use std::time::Instant;

use tracing::debug;

use crate::config::ExtractionConfig;
use crate::ner::{EntityLabel, EntityRecognizer, HeuristicRecognizer};

use super::rules::{
    EmailExtractor, ExperienceExtractor, FieldExtractor, PhoneExtractor, SkillsExtractor,
};
use super::{CandidateRecord, ExtractionResult};

/// Field extraction over resume text.
///
/// The entity recognizer is injected and constructed once; the parser
/// never mutates it. All sub-extractors are independent and consume
/// the same text.
pub struct ResumeParser {
    phone: PhoneExtractor,
    email: EmailExtractor,
    skills: SkillsExtractor,
    experience: ExperienceExtractor,
    recognizer: Box<dyn EntityRecognizer>,
}

impl ResumeParser {
    /// Create a parser with the default vocabulary and the rule-based
    /// recognizer.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            phone: PhoneExtractor::new(),
            email: EmailExtractor::new(),
            skills: SkillsExtractor::new(&config.skills),
            experience: ExperienceExtractor::new(&config.experience_keywords, config.max_snippets),
            recognizer: Box::new(HeuristicRecognizer::new()),
        }
    }

    /// Replace the entity recognizer.
    pub fn with_recognizer(mut self, recognizer: Box<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Extract the candidate record from text.
    ///
    /// Missing fields are `None`/empty, never errors.
    pub fn parse_record(&self, text: &str) -> CandidateRecord {
        CandidateRecord {
            name: self
                .recognizer
                .first(text, EntityLabel::Person)
                .map(|e| e.text),
            phone: self.phone.extract(text),
            email: self.email.extract(text),
            skills: self.skills.matching_set(text),
            experience_snippets: self.experience.extract_all(text),
        }
    }

    /// Extract the candidate record with timing and carried warnings.
    pub fn parse(&self, text: &str, warnings: Vec<String>) -> ExtractionResult {
        let start = Instant::now();
        let record = self.parse_record(text);

        debug!(
            "Parsed record: name={:?}, {} skills, {} snippets",
            record.name,
            record.skills.len(),
            record.experience_snippets.len()
        );

        ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::Entity;
    use pretty_assertions::assert_eq;

    struct FixedRecognizer(Vec<Entity>);

    impl EntityRecognizer for FixedRecognizer {
        fn entities(&self, _text: &str) -> Vec<Entity> {
            self.0.clone()
        }
    }

    #[test]
    fn contact_line_scenario() {
        let text = "Contact: John Doe, john.doe@example.com, +1-555-123-4567. I worked as an intern.";
        let parser = ResumeParser::new();
        let record = parser.parse_record(text);

        assert_eq!(record.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(record.phone.as_deref(), Some("+1-555-123-4567"));
        assert_eq!(record.name.as_deref(), Some("John Doe"));
        assert!(
            record
                .experience_snippets
                .iter()
                .any(|s| s.contains("worked") && s.contains("intern"))
        );
    }

    #[test]
    fn empty_text_gives_all_keys_empty() {
        let record = ResumeParser::new().parse_record("");

        assert_eq!(record.name, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.email, None);
        assert!(record.skills.is_empty());
        assert!(record.experience_snippets.is_empty());
    }

    #[test]
    fn injected_recognizer_supplies_the_name() {
        let recognizer = FixedRecognizer(vec![Entity {
            text: "Ada Lovelace".to_string(),
            label: EntityLabel::Person,
            offset: 0,
        }]);
        let parser = ResumeParser::new().with_recognizer(Box::new(recognizer));

        let record = parser.parse_record("anything");
        assert_eq!(record.name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn no_person_entity_means_no_name() {
        let parser = ResumeParser::new().with_recognizer(Box::new(FixedRecognizer(Vec::new())));
        assert_eq!(parser.parse_record("whatever").name, None);
    }

    #[test]
    fn warnings_are_carried_through() {
        let result = ResumeParser::new().parse("text", vec!["page 1: OCR failed".to_string()]);
        assert_eq!(result.warnings.len(), 1);
    }
}

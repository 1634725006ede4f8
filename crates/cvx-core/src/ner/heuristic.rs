//! Rule-based entity recognizer.
//!
//! Tags capitalized word runs as PERSON unless they look like a
//! section heading or carry a company suffix. Good enough for resume
//! headers; swap in a model-backed recognizer for anything harder.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Entity, EntityLabel, EntityRecognizer};

lazy_static! {
    // Two to four capitalized words separated by single spaces.
    // Newlines intentionally break a candidate.
    static ref NAME_CANDIDATE: Regex =
        Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3}\b").unwrap();
}

/// Words that start resume section headings, not names.
const HEADING_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "summary",
    "objective",
    "profile",
    "experience",
    "education",
    "skills",
    "projects",
    "contact",
    "references",
    "work",
    "professional",
    "personal",
    "email",
    "phone",
    "address",
    "languages",
    "certifications",
];

/// Trailing words that mark a company rather than a person.
const ORG_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "gmbh",
    "university",
    "institute",
    "college",
    "technologies",
    "solutions",
    "systems",
];

/// Heuristic recognizer over capitalized word runs.
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for m in NAME_CANDIDATE.find_iter(text) {
            let words: Vec<&str> = m.as_str().split_whitespace().collect();

            if words
                .iter()
                .any(|w| HEADING_WORDS.contains(&w.to_lowercase().as_str()))
            {
                continue;
            }

            let label = match words.last() {
                Some(last) if ORG_SUFFIXES.contains(&last.to_lowercase().as_str()) => {
                    EntityLabel::Organization
                }
                _ => EntityLabel::Person,
            };

            entities.push(Entity {
                text: m.as_str().to_string(),
                label,
                offset: m.start(),
            });
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_person_in_document_order() {
        let text = "Curriculum Vitae\nJohn Doe\nWorked with Alice Smith at Initech Corp";
        let recognizer = HeuristicRecognizer::new();

        let first = recognizer.first(text, EntityLabel::Person).unwrap();
        assert_eq!(first.text, "John Doe");
    }

    #[test]
    fn company_suffix_tags_organization() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.entities("Employed at Initech Corp since 2020");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::Organization);
    }

    #[test]
    fn headings_are_not_people() {
        let recognizer = HeuristicRecognizer::new();
        assert!(
            recognizer
                .first("Work Experience\nProfessional Summary", EntityLabel::Person)
                .is_none()
        );
    }

    #[test]
    fn candidates_do_not_cross_line_breaks() {
        let recognizer = HeuristicRecognizer::new();
        let entities = recognizer.entities("Jane\nDoe");
        assert!(entities.is_empty());
    }
}

//! Skill vocabulary matching.

use std::collections::HashSet;

use super::FieldExtractor;

/// Matches a configured skill vocabulary case-insensitively as
/// substrings of the full text.
pub struct SkillsExtractor {
    vocabulary: Vec<String>,
}

impl SkillsExtractor {
    /// Create an extractor over the given vocabulary.
    pub fn new(vocabulary: &[String]) -> Self {
        Self {
            vocabulary: vocabulary.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// The matching subset of the vocabulary, as an unordered set.
    pub fn matching_set(&self, text: &str) -> HashSet<String> {
        self.extract_all(text).into_iter().collect()
    }
}

impl FieldExtractor for SkillsExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|skill| lowered.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use pretty_assertions::assert_eq;

    fn default_extractor() -> SkillsExtractor {
        SkillsExtractor::new(&ExtractionConfig::default().skills)
    }

    #[test]
    fn matching_is_case_insensitive() {
        let skills = default_extractor().matching_set("Fluent in PYTHON and Sql");
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn matching_is_idempotent() {
        let extractor = default_extractor();
        let text = "JavaScript, React and C++ on Linux";
        assert_eq!(extractor.matching_set(text), extractor.matching_set(text));
    }

    #[test]
    fn substring_semantics_match_both_java_and_javascript() {
        // "java" is a substring of "javascript"; both vocabulary
        // entries fire on the same word.
        let skills = default_extractor().matching_set("I write JavaScript");
        assert!(skills.contains("java"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn no_skills_means_empty_set() {
        assert!(default_extractor().matching_set("I herd sheep").is_empty());
    }
}

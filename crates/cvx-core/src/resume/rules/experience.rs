//! Experience snippet extraction.

use super::FieldExtractor;

/// Collects lines mentioning experience-related keywords.
pub struct ExperienceExtractor {
    keywords: Vec<String>,
    max_snippets: usize,
}

impl ExperienceExtractor {
    /// Create an extractor over the given keyword list.
    pub fn new(keywords: &[String], max_snippets: usize) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            max_snippets,
        }
    }

    /// Up to `max_snippets` qualifying lines, trimmed, in document
    /// order.
    pub fn snippets(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| {
                let lowered = line.to_lowercase();
                self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
            })
            .take(self.max_snippets)
            .map(str::to_string)
            .collect()
    }
}

impl FieldExtractor for ExperienceExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.snippets(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        self.snippets(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use pretty_assertions::assert_eq;

    fn default_extractor() -> ExperienceExtractor {
        let config = ExtractionConfig::default();
        ExperienceExtractor::new(&config.experience_keywords, config.max_snippets)
    }

    #[test]
    fn keeps_document_order_and_trims() {
        let text = "  Worked at Initech  \nUnrelated line\nInternship at Globex\n";
        assert_eq!(
            default_extractor().snippets(text),
            vec!["Worked at Initech".to_string(), "Internship at Globex".to_string()]
        );
    }

    #[test]
    fn never_more_than_the_configured_maximum() {
        let text = (0..10)
            .map(|i| format!("worked on thing {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let snippets = default_extractor().snippets(&text);
        assert_eq!(snippets.len(), 5);
        assert_eq!(snippets[0], "worked on thing 0");
        assert_eq!(snippets[4], "worked on thing 4");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let snippets = default_extractor().snippets("MY EXPERIENCE SO FAR");
        assert_eq!(snippets, vec!["MY EXPERIENCE SO FAR".to_string()]);
    }

    #[test]
    fn fewer_qualifying_lines_yield_fewer_snippets() {
        assert!(default_extractor().snippets("nothing relevant here").is_empty());
    }
}

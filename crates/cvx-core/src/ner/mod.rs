//! Named-entity recognition seam.
//!
//! The parser only needs "first PERSON entity in document order", so
//! the recognizer is a narrow trait. The shipped implementation is
//! rule-based; anything that can tag spans (an ONNX model, a remote
//! service) can be injected instead. Recognizers are constructed once
//! and never mutated after initialization.

mod heuristic;

pub use heuristic::HeuristicRecognizer;

/// Semantic category of a tagged span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
}

/// A tagged span of text.
#[derive(Debug, Clone)]
pub struct Entity {
    /// The matched text.
    pub text: String,
    /// Semantic category.
    pub label: EntityLabel,
    /// Byte offset of the span start, for document ordering.
    pub offset: usize,
}

/// Scans text and tags spans with semantic categories.
pub trait EntityRecognizer {
    /// All entities found, in document order.
    fn entities(&self, text: &str) -> Vec<Entity>;

    /// First entity with the given label, in document order.
    fn first(&self, text: &str, label: EntityLabel) -> Option<Entity> {
        self.entities(text).into_iter().find(|e| e.label == label)
    }
}

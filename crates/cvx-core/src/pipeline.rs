//! End-to-end pipeline: file path in, candidate record out.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::CvxConfig;
use crate::document::{SourceDocument, TextExtractor};
use crate::error::Result;
use crate::ner::EntityRecognizer;
use crate::ocr::OcrEngine;
use crate::resume::{ExtractionResult, ResumeParser};

/// Resume processing pipeline.
///
/// One document at a time, fully synchronous. The OCR engine and
/// entity recognizer are loaded once at construction and reused.
pub struct ResumePipeline {
    extractor: TextExtractor,
    parser: ResumeParser,
    ocr: Option<Box<dyn OcrEngine>>,
}

impl ResumePipeline {
    /// Build a pipeline from configuration, without OCR.
    pub fn new(config: &CvxConfig) -> Self {
        Self {
            extractor: TextExtractor::new(config.pdf.clone()),
            parser: ResumeParser::from_config(&config.extraction),
            ocr: None,
        }
    }

    /// Attach an OCR engine for scanned-PDF fallback.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrEngine>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Replace the entity recognizer.
    pub fn with_recognizer(mut self, recognizer: Box<dyn EntityRecognizer>) -> Self {
        self.parser = self.parser.with_recognizer(recognizer);
        self
    }

    /// Process a single resume file.
    ///
    /// Fails fast on an unsupported extension; extraction degradation
    /// (skipped pages, OCR failure) surfaces as warnings on the
    /// result, not as errors.
    pub fn process(&self, path: &Path) -> Result<ExtractionResult> {
        let start = Instant::now();

        let document = SourceDocument::from_path(path)?;
        let extracted = self.extractor.extract(&document, self.ocr.as_deref())?;

        info!(
            "Extracted {} chars from {} ({:?}, {} warnings)",
            extracted.text.len(),
            path.display(),
            extracted.source,
            extracted.warnings.len()
        );

        let mut result = self.parser.parse(&extracted.text, extracted.warnings);
        result.processing_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }
}

//! Core library for resume field extraction.
//!
//! This crate provides:
//! - Document text extraction (DOCX paragraphs, PDF text layer)
//! - OCR fallback for scanned PDFs
//! - Rule-based field extraction (phone, email, skills, experience)
//! - An injectable entity-recognition seam for name extraction

pub mod config;
pub mod document;
pub mod error;
pub mod ner;
pub mod ocr;
pub mod pipeline;
pub mod resume;

pub use config::{CvxConfig, ExtractionConfig, PdfConfig};
pub use document::{DocumentFormat, ExtractedText, SourceDocument, TextExtractor, TextSource};
pub use error::{CvxError, DocumentError, OcrError, Result};
pub use ner::{Entity, EntityLabel, EntityRecognizer, HeuristicRecognizer};
pub use ocr::OcrEngine;
pub use pipeline::ResumePipeline;
pub use resume::{CandidateRecord, ExtractionResult, ResumeParser};

#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;

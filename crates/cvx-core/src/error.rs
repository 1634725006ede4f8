//! Error types for the cvx-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the cvx library.
#[derive(Error, Debug)]
pub enum CvxError {
    /// Document reading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading source documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is neither `.pdf` nor `.docx`.
    ///
    /// Raised before any extraction logic runs; callers must not
    /// proceed to field extraction on this error.
    #[error("unsupported file format: {path} (expected .pdf or .docx)")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    PdfParse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// No image could be found for a page during OCR fallback.
    #[error("no image on page {0}")]
    NoPageImage(u32),

    /// Failed to parse the DOCX file.
    #[error("failed to parse DOCX: {0}")]
    DocxParse(String),

    /// Failed to read the file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the cvx library.
pub type Result<T> = std::result::Result<T, CvxError>;

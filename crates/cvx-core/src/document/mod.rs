//! Document text extraction.
//!
//! Dispatches on the file extension: DOCX paragraphs are read with
//! `docx-rs`, PDF text layers with `lopdf`/`pdf-extract`, and PDFs
//! without a usable text layer fall back to per-page OCR.

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::PdfReader;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::PdfConfig;
use crate::error::{DocumentError, Result};
use crate::ocr::OcrEngine;

/// Supported source document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

/// A resume file on disk with its inferred format.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
}

impl SourceDocument {
    /// Infer the format from the file extension (case-insensitive).
    ///
    /// Fails with [`DocumentError::UnsupportedFormat`] for anything
    /// other than `.pdf` or `.docx`, before any file I/O happens.
    pub fn from_path(path: impl Into<PathBuf>) -> std::result::Result<Self, DocumentError> {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let format = match extension.as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => return Err(DocumentError::UnsupportedFormat { path }),
        };

        Ok(Self { path, format })
    }
}

/// Where the extracted text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Embedded PDF text layer.
    PdfTextLayer,
    /// OCR over PDF page images.
    PdfOcr,
    /// DOCX paragraph text.
    Docx,
}

/// Text extracted from a source document.
///
/// `warnings` records degraded extraction (skipped pages, OCR
/// failures) so callers can tell a partial result from a full one.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub source: TextSource,
    pub warnings: Vec<String>,
}

impl ExtractedText {
    /// True when extraction skipped or lost content along the way.
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Text extractor with the PDF-text-layer → OCR fallback chain.
pub struct TextExtractor {
    config: PdfConfig,
}

impl TextExtractor {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Extract the full text of a document.
    ///
    /// `ocr` supplies the fallback engine for scanned PDFs; without
    /// one, a PDF with no text layer yields empty text plus a warning.
    pub fn extract(
        &self,
        document: &SourceDocument,
        ocr: Option<&dyn OcrEngine>,
    ) -> Result<ExtractedText> {
        match document.format {
            DocumentFormat::Docx => {
                let text = extract_docx_text(&document.path)?;
                Ok(ExtractedText {
                    text,
                    source: TextSource::Docx,
                    warnings: Vec::new(),
                })
            }
            DocumentFormat::Pdf => self.extract_pdf(&document.path, ocr),
        }
    }

    fn extract_pdf(&self, path: &Path, ocr: Option<&dyn OcrEngine>) -> Result<ExtractedText> {
        let data = std::fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = PdfReader::load(&data)?;
        let mut warnings = Vec::new();
        let text = reader.text_layer(self.config.max_pages, &mut warnings);

        if text.trim().len() >= self.config.min_text_length {
            debug!("Using PDF text layer ({} chars)", text.len());
            return Ok(ExtractedText {
                text,
                source: TextSource::PdfTextLayer,
                warnings,
            });
        }

        debug!("No usable text layer in {}, trying OCR fallback", path.display());
        let Some(engine) = ocr else {
            warnings.push("no text layer and no OCR engine configured".to_string());
            return Ok(ExtractedText {
                text: String::new(),
                source: TextSource::PdfTextLayer,
                warnings,
            });
        };

        let text = ocr_pages(&reader, engine, self.config.max_pages, &mut warnings);
        Ok(ExtractedText {
            text,
            source: TextSource::PdfOcr,
            warnings,
        })
    }
}

/// Run OCR over every page image of a loaded PDF.
///
/// Each page is recognized independently; a failing page is logged,
/// recorded as a warning, and omitted. An engine failure never
/// propagates as an error.
pub(crate) fn ocr_pages(
    reader: &PdfReader,
    engine: &dyn OcrEngine,
    max_pages: usize,
    warnings: &mut Vec<String>,
) -> String {
    let page_count = reader.page_count();
    let limit = if max_pages == 0 {
        page_count
    } else {
        page_count.min(max_pages as u32)
    };

    let mut parts = Vec::new();

    for page in 1..=limit {
        let image = match reader.page_image(page) {
            Ok(image) => image,
            Err(e) => {
                warn!("No page image for OCR on page {}: {}", page, e);
                warnings.push(format!("page {page}: no image for OCR"));
                continue;
            }
        };

        match engine.recognize(&image) {
            Ok(page_text) => {
                debug!(
                    "OCR page {} first 200 chars: {}",
                    page,
                    page_text.chars().take(200).collect::<String>()
                );
                parts.push(page_text);
            }
            Err(e) => {
                warn!("OCR failed on page {}: {}", page, e);
                warnings.push(format!("page {page}: OCR failed: {e}"));
            }
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrError;
    use crate::ocr::OcrEngine;
    use image::DynamicImage;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingOcr {
        calls: Cell<usize>,
        reply: &'static str,
    }

    impl CountingOcr {
        fn new(reply: &'static str) -> Self {
            Self {
                calls: Cell::new(0),
                reply,
            }
        }
    }

    impl OcrEngine for CountingOcr {
        fn recognize(&self, _image: &DynamicImage) -> std::result::Result<String, OcrError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.reply.to_string())
        }
    }

    struct FailingOcr;

    impl OcrEngine for FailingOcr {
        fn recognize(&self, _image: &DynamicImage) -> std::result::Result<String, OcrError> {
            Err(OcrError::Recognition("model exploded".to_string()))
        }
    }

    #[test]
    fn format_inferred_case_insensitively() {
        assert_eq!(
            SourceDocument::from_path("cv.PDF").unwrap().format,
            DocumentFormat::Pdf
        );
        assert_eq!(
            SourceDocument::from_path("cv.Docx").unwrap().format,
            DocumentFormat::Docx
        );
    }

    #[test]
    fn unsupported_extension_rejected_before_any_io() {
        // The file does not exist; the error must come from the
        // extension check, not from a read attempt.
        let err = SourceDocument::from_path("/nonexistent/cv.txt").unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat { .. }));

        let err = SourceDocument::from_path("/nonexistent/cv").unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat { .. }));
    }

    #[test]
    fn text_layer_pdf_never_invokes_ocr() {
        let data = pdf::tests::text_pdf(&["Jane Candidate", "worked at Initech"]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, data).unwrap();

        let ocr = CountingOcr::new("should not appear");
        let extractor = TextExtractor::new(crate::config::PdfConfig::default());
        let document = SourceDocument::from_path(&path).unwrap();
        let extracted = extractor.extract(&document, Some(&ocr)).unwrap();

        assert_eq!(ocr.calls.get(), 0);
        assert_eq!(extracted.source, TextSource::PdfTextLayer);
        assert!(extracted.text.contains("Jane Candidate"));
        assert!(extracted.text.contains("worked at Initech"));
    }

    #[test]
    fn ocr_runs_once_per_page_image() {
        let data = pdf::tests::image_pdf(3);
        let reader = PdfReader::load(&data).unwrap();
        let ocr = CountingOcr::new("scanned line");
        let mut warnings = Vec::new();

        let text = ocr_pages(&reader, &ocr, 0, &mut warnings);

        assert_eq!(ocr.calls.get(), 3);
        assert_eq!(text, "scanned line\nscanned line\nscanned line");
        assert!(warnings.is_empty());
    }

    #[test]
    fn ocr_failure_degrades_to_empty_text_with_warnings() {
        let data = pdf::tests::image_pdf(2);
        let reader = PdfReader::load(&data).unwrap();
        let mut warnings = Vec::new();

        let text = ocr_pages(&reader, &FailingOcr, 0, &mut warnings);

        assert_eq!(text, "");
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn scanned_pdf_takes_the_ocr_path() {
        let data = pdf::tests::image_pdf(1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, data).unwrap();

        let ocr = CountingOcr::new("Recognized resume text");
        let extractor = TextExtractor::new(crate::config::PdfConfig::default());
        let document = SourceDocument::from_path(&path).unwrap();
        let extracted = extractor.extract(&document, Some(&ocr)).unwrap();

        assert_eq!(ocr.calls.get(), 1);
        assert_eq!(extracted.source, TextSource::PdfOcr);
        assert_eq!(extracted.text, "Recognized resume text");
    }

    #[test]
    fn scanned_pdf_without_engine_yields_empty_degraded_text() {
        let data = pdf::tests::image_pdf(1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, data).unwrap();

        let extractor = TextExtractor::new(crate::config::PdfConfig::default());
        let document = SourceDocument::from_path(&path).unwrap();
        let extracted = extractor.extract(&document, None).unwrap();

        assert_eq!(extracted.text, "");
        assert!(extracted.is_degraded());
    }
}

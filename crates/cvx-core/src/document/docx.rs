//! DOCX paragraph extraction using docx-rs.
//!
//! A .docx file is a ZIP of XML parts; docx-rs exposes the document
//! tree as Paragraph → Run → Text nodes. The extracted text is all
//! paragraph texts in document order, one newline per paragraph.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};
use tracing::debug;

use crate::error::DocumentError;

/// Extract the full paragraph text of a DOCX file.
pub fn extract_docx_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let docx = read_docx(&bytes).map_err(|e| DocumentError::DocxParse(format!("{e:?}")))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            paragraphs.push(paragraph_text(paragraph));
        }
    }

    debug!("Read {} paragraphs from {}", paragraphs.len(), path.display());

    let mut text = paragraphs.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    Ok(text)
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(text) = run_child {
                    out.push_str(&text.text);
                }
            }
        }
    }
    out
}

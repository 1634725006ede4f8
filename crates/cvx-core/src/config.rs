//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the cvx pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CvxConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for CvxConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum non-whitespace text length before the text layer is
    /// considered usable; below this the OCR fallback kicks in.
    pub min_text_length: usize,

    /// Directory containing OCR model files.
    pub model_dir: PathBuf,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_length: 1,
            model_dir: PathBuf::from("models"),
        }
    }
}

/// Field extraction configuration.
///
/// The default vocabularies are deliberately small; extend them via a
/// config file rather than code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skill terms matched case-insensitively as substrings.
    pub skills: Vec<String>,

    /// Keywords marking a line as an experience snippet.
    pub experience_keywords: Vec<String>,

    /// Maximum number of experience snippets to keep.
    pub max_snippets: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skills: [
                "python",
                "java",
                "sql",
                "c++",
                "excel",
                "html",
                "css",
                "javascript",
                "react",
                "git",
                "linux",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            experience_keywords: [
                "experience",
                "worked",
                "intern",
                "internship",
                "project",
                "employed",
                "role",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            max_snippets: 5,
        }
    }
}

impl CvxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

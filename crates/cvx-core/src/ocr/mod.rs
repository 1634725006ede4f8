//! Optical character recognition for scanned resumes.

#[cfg(feature = "native")]
mod engine;

#[cfg(feature = "native")]
pub use engine::PureOcrEngine;

use image::DynamicImage;

use crate::error::OcrError;

/// Text recognition over a single page image.
///
/// The pipeline holds this as a trait object so tests can substitute
/// a mock and count invocations.
pub trait OcrEngine {
    /// Recognize all text in the image, top to bottom.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

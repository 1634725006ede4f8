//! PDF reading using lopdf and pdf-extract.
//!
//! The text layer is pulled per page so one unreadable page degrades
//! the result instead of failing the whole document. Page images are
//! the embedded bitmaps of the page, which is what a scanned resume
//! consists of.

use image::{DynamicImage, ImageBuffer, Rgba};
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, warn};

use crate::error::DocumentError;

/// A loaded PDF document.
pub struct PdfReader {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfReader {
    /// Load a PDF from bytes.
    pub fn load(data: &[u8]) -> Result<Self, DocumentError> {
        let mut document =
            Document::load_mem(data).map_err(|e| DocumentError::PdfParse(e.to_string()))?;

        // PDFs encrypted with an empty password are still readable.
        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(DocumentError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| DocumentError::PdfParse(e.to_string()))?;
            decrypted
        } else {
            data.to_vec()
        };

        if document.get_pages().is_empty() {
            return Err(DocumentError::NoPages);
        }

        Ok(Self { document, raw_data })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Extract the embedded text layer, page by page.
    ///
    /// A page whose extraction fails is logged and omitted; the
    /// warning list records the omission. When the per-page pass finds
    /// nothing, `pdf-extract` gets one whole-document attempt before
    /// giving up (it parses some files lopdf's extractor cannot).
    pub fn text_layer(&self, max_pages: usize, warnings: &mut Vec<String>) -> String {
        let page_count = self.page_count();
        let limit = if max_pages == 0 {
            page_count
        } else {
            page_count.min(max_pages as u32)
        };

        let mut parts = Vec::new();
        for page in 1..=limit {
            match self.document.extract_text(&[page]) {
                Ok(text) if !text.trim().is_empty() => parts.push(text.trim_end().to_string()),
                Ok(_) => {}
                Err(e) => {
                    warn!("Text extraction failed on page {}: {}", page, e);
                    warnings.push(format!("page {page}: text extraction failed: {e}"));
                }
            }
        }

        let text = parts.join("\n");
        if !text.trim().is_empty() {
            return text;
        }

        match pdf_extract::extract_text_from_mem(&self.raw_data) {
            Ok(text) if !text.trim().is_empty() => {
                debug!("Per-page extraction empty, pdf-extract recovered the text layer");
                text
            }
            Ok(_) => text,
            Err(e) => {
                warn!("pdf-extract failed: {}", e);
                warnings.push(format!("pdf-extract failed: {e}"));
                text
            }
        }
    }

    /// First embedded image of a page, for OCR.
    ///
    /// Scanned PDFs store each page as one full-page bitmap; when the
    /// page resources hold no image, the document-wide image list is
    /// indexed by page as a fallback.
    pub fn page_image(&self, page: u32) -> Result<DynamicImage, DocumentError> {
        let pages = self.document.get_pages();
        let page_id = *pages
            .get(&page)
            .ok_or_else(|| DocumentError::NoPageImage(page))?;

        if let Some(resources) = self.page_resources(page_id) {
            if let Ok(xobjects) = resources.get(b"XObject") {
                if let Ok((_, Object::Dictionary(xobjects))) = self.document.dereference(xobjects) {
                    for (_name, reference) in xobjects.iter() {
                        if let Ok((_, object)) = self.document.dereference(reference) {
                            if let Some(image) = decode_image_object(&self.document, object) {
                                return Ok(image);
                            }
                        }
                    }
                }
            }
        }

        // Some producers attach images outside the page resources.
        let all = self.all_images();
        debug!("Page {} has no XObject image, {} document images", page, all.len());
        all.into_iter()
            .nth((page - 1) as usize)
            .ok_or_else(|| DocumentError::NoPageImage(page))
    }

    fn all_images(&self) -> Vec<DynamicImage> {
        self.document
            .objects
            .values()
            .filter_map(|object| decode_image_object(&self.document, object))
            .collect()
    }

    /// Page resources, walking up the page tree for inherited ones.
    fn page_resources(&self, page_id: ObjectId) -> Option<lopdf::Dictionary> {
        let mut node_id = page_id;
        loop {
            let Ok(Object::Dictionary(dict)) = self.document.get_object(node_id) else {
                return None;
            };
            if let Ok(resources) = dict.get(b"Resources") {
                if let Ok((_, Object::Dictionary(resources))) = self.document.dereference(resources)
                {
                    return Some(resources.clone());
                }
            }
            match dict.get(b"Parent") {
                Ok(Object::Reference(parent_id)) => node_id = *parent_id,
                _ => return None,
            }
        }
    }
}

/// Decode an image XObject stream into a [`DynamicImage`].
fn decode_image_object(doc: &Document, object: &Object) -> Option<DynamicImage> {
    let Object::Stream(stream) = object else {
        return None;
    };
    let dict = &stream.dict;

    if dict.get(b"Subtype").ok()?.as_name().ok()? != b"Image" {
        return None;
    }

    let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
    let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;

    let filter = dict.get(b"Filter").ok().and_then(|f| match f {
        Object::Name(name) => Some(name.as_slice()),
        Object::Array(array) => array.first().and_then(|o| o.as_name().ok()),
        _ => None,
    });

    // JPEG streams decode directly; JPEG2000 and fax encodings are
    // not supported.
    match filter {
        Some(b"DCTDecode") => {
            return image::load_from_memory_with_format(&stream.content, image::ImageFormat::Jpeg)
                .ok();
        }
        Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
            debug!("Skipping image with unsupported filter");
            return None;
        }
        _ => {}
    }

    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());

    let bits = dict
        .get(b"BitsPerComponent")
        .ok()
        .and_then(|o| o.as_i64().ok())
        .unwrap_or(8);
    if bits != 8 {
        return None;
    }

    let color_space = dict
        .get(b"ColorSpace")
        .ok()
        .and_then(|o| match o {
            Object::Name(name) => Some(name.as_slice()),
            Object::Array(array) => array.first().and_then(|o| o.as_name().ok()),
            Object::Reference(r) => doc.get_object(*r).ok().and_then(|o| o.as_name().ok()),
            _ => None,
        })
        .unwrap_or(b"DeviceRGB");

    decode_raw_pixels(&data, width, height, color_space)
}

fn decode_raw_pixels(
    data: &[u8],
    width: u32,
    height: u32,
    color_space: &[u8],
) -> Option<DynamicImage> {
    let pixels = (width * height) as usize;
    let mut rgba = Vec::with_capacity(pixels * 4);

    match color_space {
        b"DeviceRGB" | b"RGB" if data.len() >= pixels * 3 => {
            for chunk in data[..pixels * 3].chunks_exact(3) {
                rgba.extend_from_slice(&[chunk[0], chunk[1], chunk[2], 255]);
            }
        }
        b"DeviceGray" | b"G" if data.len() >= pixels => {
            for &gray in &data[..pixels] {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
        }
        _ => return None,
    }

    ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba).map(DynamicImage::ImageRgba8)
}

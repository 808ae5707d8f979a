//! Rawi PDF Layer
//!
//! Thin wrapper around the PDF text decoder. The decoder is a black box
//! to the rest of the pipeline: bytes in, raw Unicode text out, with page
//! texts joined by newlines. Scanned/image-only PDFs are out of scope; a
//! document that decodes to no text is reported as such so the caller can
//! distinguish "empty document" from "no author sections found".

#![warn(missing_docs)]

use thiserror::Error;

/// Errors that can occur while decoding a PDF
#[derive(Error, Debug)]
pub enum PdfError {
    /// The byte stream is not a decodable PDF
    #[error("Failed to decode PDF: {0}")]
    Decode(String),

    /// The PDF decoded but yielded no text (likely scanned images)
    #[error("PDF contains no extractable text")]
    NoText,
}

/// Decode a PDF byte stream into raw document text.
///
/// # Errors
///
/// Returns [`PdfError::Decode`] for malformed input and
/// [`PdfError::NoText`] when the document carries no text layer.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| PdfError::Decode(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }

    Ok(text)
}

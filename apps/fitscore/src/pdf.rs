//! PDF text extraction boundary. Encrypted or image-only PDFs surface as a
//! `Pdf` error the caller must not retry — re-running extraction on the
//! same bytes cannot succeed.

use crate::errors::AppError;

/// Extracts plain text from PDF bytes.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Pdf(format!("could not extract text: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Pdf(
            "PDF contains no extractable text (encrypted or image-only?)".to_string(),
        ));
    }
    Ok(text)
}

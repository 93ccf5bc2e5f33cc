/*!
 * Image preprocessing ahead of OCR
 *
 * Lab reports arrive as phone photos or scans; Tesseract does markedly
 * better on a clean single-channel image, so uploads are decoded and
 * normalized to 8-bit grayscale before recognition.
 */

use image::GrayImage;

use crate::ocr::error::OcrError;

/// Decodes raw upload bytes and converts them to 8-bit grayscale.
pub fn normalize_to_grayscale(image_bytes: &[u8]) -> Result<GrayImage, OcrError> {
    let img = image::load_from_memory(image_bytes).map_err(|e| OcrError::PreprocessingFailed {
        details: e.to_string(),
    })?;

    let gray = img.to_luma8();
    tracing::debug!(
        width = gray.width(),
        height = gray.height(),
        "normalized upload to grayscale"
    );
    Ok(gray)
}

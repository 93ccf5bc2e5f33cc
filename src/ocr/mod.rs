pub mod error;
#[cfg(feature = "ocr")]
pub mod preprocess;

use crate::ocr::error::OcrError;

#[cfg(feature = "ocr")]
use tesseract::Tesseract;

/// Configuration for the OCR service
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Temporary directory for intermediate images
    pub temp_dir: String,
    /// Tesseract language code, e.g. "eng"
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            temp_dir: std::env::var("TEMP_DIR").unwrap_or_else(|_| "/tmp".to_string()),
            language: "eng".to_string(),
        }
    }
}

/// Drives Tesseract over preprocessed report images.
pub struct OcrService {
    temp_dir: String,
    language: String,
}

impl OcrService {
    pub fn new_with_config(config: OcrConfig) -> Self {
        Self {
            temp_dir: config.temp_dir,
            language: config.language,
        }
    }

    /// Runs the image side of the pipeline: grayscale normalization followed
    /// by text recognition. Returns the raw recognized text, noise and all;
    /// cleaning it up is the parser's job.
    pub async fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        #[cfg(feature = "ocr")]
        {
            let gray = preprocess::normalize_to_grayscale(image_bytes)?;

            // Tesseract reads from a file, so stage the normalized image in
            // the temp dir; the guard removes it on drop.
            let staged = tempfile::Builder::new()
                .prefix("labreader-ocr-")
                .suffix(".png")
                .tempfile_in(&self.temp_dir)
                .map_err(|e| OcrError::EngineFailed {
                    details: format!("Failed to stage image for OCR: {}", e),
                })?;
            let staged_path = staged.path().to_string_lossy().into_owned();

            let mut encoded = Vec::new();
            image::DynamicImage::ImageLuma8(gray)
                .write_to(&mut std::io::Cursor::new(&mut encoded), image::ImageFormat::Png)
                .map_err(|e| OcrError::PreprocessingFailed {
                    details: format!("Failed to encode normalized image: {}", e),
                })?;
            tokio::fs::write(&staged_path, &encoded)
                .await
                .map_err(|e| OcrError::EngineFailed {
                    details: format!("Failed to stage image for OCR: {}", e),
                })?;

            let text = self.recognize_file(&staged_path)?;
            if text.trim().is_empty() {
                tracing::warn!("OCR returned empty or whitespace-only text");
            } else {
                tracing::info!("OCR extracted {} characters", text.len());
            }
            Ok(text)
        }

        #[cfg(not(feature = "ocr"))]
        {
            let _ = image_bytes;
            Err(OcrError::EngineUnavailable {
                details: "labreader was built without the ocr feature".to_string(),
            })
        }
    }

    #[cfg(feature = "ocr")]
    fn recognize_file(&self, path: &str) -> Result<String, OcrError> {
        // PSM 6 (single uniform block) suits the tabular layout of reports.
        let mut tesseract = Tesseract::new(None, Some(&self.language))
            .map_err(|e| OcrError::EngineUnavailable {
                details: e.to_string(),
            })?
            .set_variable("tessedit_pageseg_mode", "6")
            .map_err(|e| OcrError::EngineFailed {
                details: e.to_string(),
            })?
            .set_image(path)
            .map_err(|e| OcrError::EngineFailed {
                details: e.to_string(),
            })?;

        let text = tesseract.get_text().map_err(|e| OcrError::EngineFailed {
            details: format!("Failed to extract text: {}", e),
        })?;

        Ok(text.trim().to_string())
    }
}

use thiserror::Error;

/// Failures on the image-to-text side of the pipeline. These are fatal to a
/// request and get converted to a fail-closed response at the route
/// boundary; the text parsing core itself never produces errors.
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Image preprocessing failed: {details}")]
    PreprocessingFailed { details: String },

    #[error("OCR engine is not available: {details}")]
    EngineUnavailable { details: String },

    #[error("OCR engine failed: {details}")]
    EngineFailed { details: String },

    #[error("Invalid image format: {details}")]
    InvalidImageFormat { details: String },
}

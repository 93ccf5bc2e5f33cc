use anyhow::{Context, Result};
use std::env;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub ocr_language: String,
    pub max_upload_bytes: usize,
    pub temp_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            temp_dir: env::var("TEMP_DIR").unwrap_or_else(|_| "/tmp".to_string()),
        })
    }
}

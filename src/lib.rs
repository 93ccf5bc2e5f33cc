/*!
 * labreader - lab report OCR extraction service
 *
 * Accepts a lab report image, normalizes and OCRs it, and parses the noisy
 * recognized text into structured test records with out-of-range verdicts.
 */

pub mod config;
pub mod models;
pub mod ocr;
pub mod parsing;
pub mod routes;

use crate::config::Config;
use crate::ocr::{OcrConfig, OcrService};
use crate::parsing::ReportParser;

/// Shared state handed to every route.
pub struct AppState {
    pub config: Config,
    pub ocr: OcrService,
    pub parser: ReportParser,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ocr = OcrService::new_with_config(OcrConfig {
            temp_dir: config.temp_dir.clone(),
            language: config.ocr_language.clone(),
        });
        Self {
            config,
            ocr,
            parser: ReportParser::new(),
        }
    }
}

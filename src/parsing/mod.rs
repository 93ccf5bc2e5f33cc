/*!
 * Lab report text parsing
 *
 * Turns raw OCR text into ordered [`LabTestRecord`]s in a single
 * left-to-right scan. Per line: the classifier discards boilerplate, the
 * resolver extracts value/unit/range tokens and settles the test name
 * (possibly deferred from a previous line), and the evaluator stamps a
 * tri-state out-of-range verdict on every emitted record.
 */

pub mod classifier;
pub mod evaluator;
pub mod patterns;
pub mod resolver;

use crate::models::LabTestRecord;

/// Stateless parsing service. All per-invocation state (the pending name)
/// lives on the stack of [`ReportParser::parse`], so concurrent calls on
/// separate inputs need no coordination.
#[derive(Debug, Clone, Default)]
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses OCR text into structured test records, in input order.
    pub fn parse(&self, text: &str) -> Vec<LabTestRecord> {
        let mut records = Vec::new();
        let mut pending_name: Option<String> = None;

        for line in text.lines() {
            let (fields, next_pending) = resolver::scan_line(line, pending_name);
            pending_name = next_pending;

            if let Some(fields) = fields {
                let verdict =
                    evaluator::evaluate(Some(fields.value.as_str()), fields.range.as_deref());
                records.push(LabTestRecord {
                    test_name: fields.name,
                    test_value: fields.value,
                    test_unit: fields.unit,
                    bio_reference_range: fields.range,
                    lab_test_out_of_range: verdict.as_flag(),
                });
            }
        }

        tracing::debug!("extracted {} test entries from OCR text", records.len());
        records
    }
}

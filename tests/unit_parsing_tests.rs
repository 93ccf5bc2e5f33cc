/*!
 * Unit Tests for Report Parsing
 *
 * End-to-end tests of the single-pass scan: boilerplate skipping,
 * value/unit/range extraction, multi-line name stitching, and verdict
 * stamping on the emitted records.
 */

#[cfg(test)]
mod tests {
    use labreader::models::LabTestRecord;
    use labreader::parsing::{patterns, ReportParser};

    fn parse(text: &str) -> Vec<LabTestRecord> {
        ReportParser::new().parse(text)
    }

    #[test]
    fn test_complete_result_line() {
        let records = parse("Hemoglobin 13.5 g/dL 13.0-17.0");
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.test_name, "Hemoglobin");
        assert_eq!(rec.test_value, "13.5");
        assert_eq!(rec.test_unit.as_deref(), Some("g/dL"));
        assert_eq!(rec.bio_reference_range.as_deref(), Some("13.0-17.0"));
        assert_eq!(rec.lab_test_out_of_range, Some(false));
    }

    #[test]
    fn test_name_split_across_lines_is_stitched() {
        let records = parse("Total Leukocyte Count\n8500 cells/µL 4000-11000");
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.test_name, "Total Leukocyte Count");
        assert_eq!(rec.test_value, "8500");
        assert_eq!(rec.test_unit.as_deref(), Some("cells/µL"));
        assert_eq!(rec.bio_reference_range.as_deref(), Some("4000-11000"));
        assert_eq!(rec.lab_test_out_of_range, Some(false));
    }

    #[test]
    fn test_table_header_produces_no_records() {
        let records = parse("Test Name Result Unit Bio. Ref. Range");
        assert!(records.is_empty(), "canonical header must be ignored");
    }

    #[test]
    fn test_header_between_name_and_result_breaks_the_stitch() {
        // The separator resets the carried name, so the bare result line
        // has no name to bind to and is dropped.
        let records = parse("Total Leukocyte Count\n--------------------\n8500 cells/µL 4000-11000");
        assert!(records.is_empty());
    }

    #[test]
    fn test_deferred_name_is_consumed_only_once() {
        let records = parse("Differential Count\n62 %\n34 %");
        assert_eq!(records.len(), 1, "second bare value line has no name left");
        assert_eq!(records[0].test_name, "Differential Count");
        assert_eq!(records[0].test_value, "62");
    }

    #[test]
    fn test_out_of_range_result_is_flagged() {
        let records = parse("SGPT (ALT) 72 U/L Up to 40");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].test_name, "SGPT (ALT)");
        assert_eq!(records[0].lab_test_out_of_range, Some(true));
    }

    #[test]
    fn test_result_without_range_has_indeterminate_verdict() {
        let records = parse("Hemoglobin 13.5 g/dL");
        assert_eq!(records.len(), 1);
        assert!(records[0].bio_reference_range.is_none());
        assert_eq!(records[0].lab_test_out_of_range, None);
    }

    #[test]
    fn test_qualitative_result_line() {
        let records = parse("HBsAg Positive Negative");
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.test_value, "Positive");
        assert_eq!(rec.bio_reference_range.as_deref(), Some("Negative"));
        assert_eq!(rec.lab_test_out_of_range, Some(true));
    }

    #[test]
    fn test_every_emitted_value_matches_the_value_pattern() {
        let text = "Hemoglobin 13.5 g/dL 13.0-17.0\n\
                    Total Leukocyte Count\n\
                    8500 cells/µL 4000-11000\n\
                    HBsAg Positive Negative\n\
                    random noise line ###\n\
                    Serum Creatinine 1.1 mg/dL 0.6 - 1.2";
        let records = parse(text);
        assert!(!records.is_empty());
        for rec in &records {
            assert!(!rec.test_value.is_empty(), "value must be non-empty");
            let m = patterns::find_value(&rec.test_value)
                .unwrap_or_else(|| panic!("value {:?} must match the value pattern", rec.test_value));
            assert_eq!(m.as_str(), rec.test_value);
        }
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let text = "Hemoglobin 13.5 g/dL 13.0-17.0\n\
                    Total Leukocyte Count\n\
                    8500 cells/µL 4000-11000\n\
                    SGPT (ALT) 72 U/L Up to 40";
        let first = parse(text);
        let second = parse(text);
        assert_eq!(first, second, "same input must yield identical ordered output");
    }

    #[test]
    fn test_records_follow_input_order() {
        let text = "Hemoglobin 13.5 g/dL 13.0-17.0\n\
                    Serum Creatinine 1.1 mg/dL 0.6 - 1.2\n\
                    SGPT (ALT) 72 U/L Up to 40";
        let names: Vec<_> = parse(text).into_iter().map(|r| r.test_name).collect();
        assert_eq!(names, ["Hemoglobin", "Serum Creatinine", "SGPT (ALT)"]);
    }

    #[test]
    fn test_ocr_noise_lines_yield_nothing() {
        let records = parse("|| .. ~~\n*#@!\n  \n=====");
        assert!(records.is_empty());
    }
}

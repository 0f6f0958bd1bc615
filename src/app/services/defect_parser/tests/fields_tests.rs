//! Tests for defect field extraction

use std::str::FromStr;

use crate::app::models::Code;
use crate::app::services::defect_parser::fields::{FieldLabel, classify_label, extract};

fn s3() -> Code {
    Code::from_str("S3").unwrap()
}

#[test]
fn test_label_classification() {
    assert_eq!(
        classify_label("Defect: hyd leak"),
        Some((FieldLabel::Defect, "hyd leak".to_string()))
    );
    assert_eq!(
        classify_label("rect: seal replaced"),
        Some((FieldLabel::Rect, "seal replaced".to_string()))
    );
    assert_eq!(
        classify_label("W/C: 510"),
        Some((FieldLabel::Workcenter, "510".to_string()))
    );
    assert_eq!(
        classify_label("Work Center: props"),
        Some((FieldLabel::Workcenter, "props".to_string()))
    );
    assert_eq!(classify_label("GR"), Some((FieldLabel::Gr, String::new())));
    assert_eq!(
        classify_label("FCF: profile A"),
        Some((FieldLabel::Fcf, "profile A".to_string()))
    );
    // Words that merely start with a label are not labels
    assert_eq!(classify_label("ground run complete"), None);
    assert_eq!(classify_label("GR required tomorrow"), None);
    assert_eq!(classify_label("rectification ongoing"), None);
}

#[test]
fn test_single_line_fields() {
    let blob = "S3\n\nDefect: abc\nRect: replaced pump\nETR: 1200\nW/C: 510\nPrime: AV\nSystem: Hydraulics";
    let record = extract(s3(), blob);

    assert_eq!(record.defect, "abc");
    assert_eq!(record.rect, "replaced pump");
    assert_eq!(record.etr, "1200");
    assert_eq!(record.workcenter, "510");
    assert_eq!(record.prime, "AV");
    assert_eq!(record.system, "Hydraulics");
}

#[test]
fn test_multi_line_defect_stops_at_label() {
    let blob = "Defect: pump cavitation\nobserved during taxi\nRect: pump replaced";
    let record = extract(s3(), blob);

    assert_eq!(record.defect, "pump cavitation\nobserved during taxi");
    assert_eq!(record.rect, "pump replaced");
}

#[test]
fn test_multi_line_defect_stops_at_blank() {
    let blob = "Defect: pump cavitation\n\ntrailing narrative";
    let record = extract(s3(), blob);

    assert_eq!(record.defect, "pump cavitation");
}

#[test]
fn test_us_extraction_with_quotes() {
    for line in [
        "080825/2200 \"U/S\"",
        "080825/2200 'u/s'",
        "080825/2200 \u{201c}U/S\u{201d}",
        "080825/2200 U/S",
    ] {
        let record = extract(s3(), line);
        assert_eq!(record.us, "080825/2200", "line: {line}");
    }
}

#[test]
fn test_us_token_inside_label_line_is_not_consumed() {
    let record = extract(s3(), "Defect: nav light u/s");
    assert_eq!(record.defect, "nav light u/s");
    assert_eq!(record.us, "");
}

#[test]
fn test_gr_and_fcf_lists() {
    let blob = "GR:\n- full power run\n- leak check\n\nFCF\n- profile A\n• stall checks\nRect: done";
    let record = extract(s3(), blob);

    assert_eq!(record.gr, vec!["full power run", "leak check"]);
    assert_eq!(record.fcf, vec!["profile A", "stall checks"]);
    assert_eq!(record.rect, "done");
}

#[test]
fn test_gr_inline_first_item() {
    let blob = "GR: engine run 10 min\n- moisture check";
    let record = extract(s3(), blob);
    assert_eq!(record.gr, vec!["engine run 10 min", "moisture check"]);
}

#[test]
fn test_recovery_flag() {
    assert!(extract(s3(), "Recovery").recovery);
    assert!(extract(s3(), "carrying out post phase rcv checks").recovery);
    assert!(!extract(s3(), "Defect: abc").recovery);
}

#[test]
fn test_missing_fields_stay_empty() {
    let record = extract(s3(), "S3");
    assert_eq!(record.us, "");
    assert_eq!(record.defect, "");
    assert_eq!(record.rect, "");
    assert_eq!(record.etr, "");
    assert!(!record.recovery);
    assert!(record.gr.is_empty());
    assert!(record.fcf.is_empty());
}

#[test]
fn test_first_match_wins_for_single_line_fields() {
    let blob = "ETR: 1200\n\nETR: 1800";
    let record = extract(s3(), blob);
    assert_eq!(record.etr, "1200");
}

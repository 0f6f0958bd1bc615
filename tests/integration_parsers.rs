//! End-to-end tests across the parser family.
//!
//! Each test feeds realistic pasted text through the public API and checks
//! the structured result, including the never-fail contract on degenerate
//! input.

use std::str::FromStr;

use chrono::NaiveDate;
use shiftlog_processor::app::models::placeholder_label;
use shiftlog_processor::app::services::date_plan::{parse_daily, parse_weekly};
use shiftlog_processor::app::services::defect_parser::parse_defect_messages;
use shiftlog_processor::app::services::handover_parser::parse_handover;
use shiftlog_processor::app::services::report_parser::parse_night_report;
use shiftlog_processor::{Code, ParserConfig, StatusTag};

#[test]
fn night_report_end_to_end() {
    let text = "\
*S2 - GR reqd after hyd leak rect
Input: 2200 replaced hyd line
- leak check carried out
- awaiting GR crew
ETR: 0600
*F1 - Serviceable";
    let report = parse_night_report(text);

    assert_eq!(report.entries.len(), 2);

    let s2 = &report.entries[&Code::from_str("S2").unwrap()];
    assert_eq!(s2.title, "S2 - GR reqd after hyd leak rect");
    assert_eq!(s2.input.as_deref(), Some("2200 replaced hyd line"));
    assert_eq!(s2.etr.as_deref(), Some("0600"));
    assert_eq!(s2.notes.len(), 2);
    assert_eq!(s2.tag, StatusTag::Rectification);

    let f1 = &report.entries[&Code::from_str("F1").unwrap()];
    assert_eq!(f1.tag, StatusTag::Serviceable);
}

#[test]
fn night_report_parsing_is_deterministic() {
    let text = "*F3 - phase inspection\nInput: 1900 panels off\nETR: TBD";
    let first = parse_night_report(text);
    let second = parse_night_report(text);
    assert_eq!(first, second);
}

#[test]
fn defect_messages_end_to_end() {
    let text = "\
S3

\"U/S\" 1430 12 Aug
Defect: hyd contents fluctuating
further investigation reqd
Rect: replaced hyd accumulator
ETR: 1200
GR:
- full power assurance
W/C: Props

F4

Defect: nav light u/s";
    let parse = parse_defect_messages(text);

    assert_eq!(parse.by_code.len(), 2);

    let s3 = &parse.by_code[&Code::from_str("S3").unwrap()];
    assert!(!s3.us.is_empty());
    assert_eq!(
        s3.defect,
        "hyd contents fluctuating\nfurther investigation reqd"
    );
    assert_eq!(s3.rect, "replaced hyd accumulator");
    assert_eq!(s3.etr, "1200");
    assert_eq!(s3.gr, vec!["full power assurance"]);
    assert_eq!(s3.workcenter, "Props");

    let f4 = &parse.by_code[&Code::from_str("F4").unwrap()];
    assert_eq!(f4.defect, "nav light u/s");
}

#[test]
fn handover_end_to_end() {
    let text = "\
\u{1F7E9} Jobs completed
F2
- wheel change complete
\u{1F7E5} Jobs outstanding
F2 (MC)
- check wiring
\u{1F538} Fuel
all aircraft fuelled";
    let document = parse_handover(text);

    let f2 = Code::from_str("F2").unwrap();
    assert_eq!(document.completed[&f2], vec!["wheel change complete"]);
    assert_eq!(document.outstanding[&f2].tag.as_deref(), Some("MC"));
    assert_eq!(document.outstanding[&f2].items, vec!["check wiring"]);
    assert_eq!(document.extra.fuel, vec!["all aircraft fuelled"]);
}

#[test]
fn daily_plan_end_to_end() {
    let text = "13 Aug 25 (Wed)\nF3 1130 - 2200 GH\nS3 Spare";
    let entry = parse_daily(text, &ParserConfig::with_year(1999));

    assert_eq!(entry.date_iso, NaiveDate::from_ymd_opt(2025, 8, 13));
    assert_eq!(entry.missions.len(), 1);
    assert_eq!(entry.missions[0].code, Some(Code::from_str("F3").unwrap()));
    assert_eq!(entry.missions[0].label, "1130-2200 GH");
    assert_eq!(entry.spares.len(), 1);
    assert_eq!(entry.spares[0].label, "S3 Spare");
}

#[test]
fn weekly_plan_splits_per_date() {
    let text = "\
13 Aug 25
F3 1130-2200 GH

14 Aug 25
RTS:
F1 GH
Healing:
S3: 0800-1200";
    let entries = parse_weekly(text, &ParserConfig::with_year(2025));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date_iso, NaiveDate::from_ymd_opt(2025, 8, 13));
    assert_eq!(entries[0].missions.len(), 1);
    assert_eq!(entries[1].date_iso, NaiveDate::from_ymd_opt(2025, 8, 14));
    assert_eq!(entries[1].healing.len(), 1);
}

#[test]
fn placeholder_round_trip() {
    for id in 251..=259 {
        let label = placeholder_label(id);
        let code = Code::from_str(&label).unwrap();
        assert_eq!(code.placeholder(), id);
    }
    for id in 260..=269 {
        let label = placeholder_label(id);
        let code = Code::from_str(&label).unwrap();
        assert_eq!(code.placeholder(), id);
    }
    // Out-of-range ids pass through as plain decimal text
    assert_eq!(placeholder_label(42), "42");
}

#[test]
fn empty_input_never_fails() {
    let report = parse_night_report("");
    assert!(report.entries.is_empty());
    assert_eq!(report.stats.scanned, 0);

    let defects = parse_defect_messages("");
    assert!(defects.by_code.is_empty());

    let handover = parse_handover("");
    assert!(handover.completed.is_empty());
    assert!(handover.outstanding.is_empty());

    let config = ParserConfig::default();
    let daily = parse_daily("", &config);
    assert!(daily.date_iso.is_none());
    assert!(parse_weekly("", &config).is_empty());
}

#[test]
fn garbage_input_is_skipped_not_fatal() {
    let text = "$$$ ???\n\u{1F600}\nnot a report at all\n12345";
    let report = parse_night_report(text);
    assert!(report.entries.is_empty());
    assert_eq!(report.stats.matched, 0);
    assert!(report.stats.skipped > 0);

    let handover = parse_handover(text);
    assert!(handover.completed.is_empty());
    assert!(handover.stats.skipped > 0);
}

#[test]
fn json_output_round_trips() {
    let text = "*S2 - GR reqd\nInput: 2200 fixed\nETR: 0600";
    let report = parse_night_report(text);

    let json = serde_json::to_string(&report).unwrap();
    let back: shiftlog_processor::app::services::report_parser::NightReport =
        serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}

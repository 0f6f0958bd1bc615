//! Tests for handover document parsing

use std::str::FromStr;

use crate::app::models::Code;
use crate::app::services::handover_parser::parse_handover;

fn code(s: &str) -> Code {
    Code::from_str(s).unwrap()
}

#[test]
fn test_outstanding_scenario() {
    let text = "\u{1F7E5} Outstanding\nF2 (MC)\n- check wiring";
    let doc = parse_handover(text);

    let entry = &doc.outstanding[&code("F2")];
    assert_eq!(entry.tag.as_deref(), Some("MC"));
    assert_eq!(entry.items, vec!["check wiring"]);
}

#[test]
fn test_completed_section() {
    let text = "\u{1F7E9} Job Completed\nF2\n- BF complete\n- oil uplift\nS3\n\u{2022} wheel change";
    let doc = parse_handover(text);

    assert_eq!(doc.completed[&code("F2")], vec!["BF complete", "oil uplift"]);
    assert_eq!(doc.completed[&code("S3")], vec!["wheel change"]);
}

#[test]
fn test_sub_item_marker_preserved() {
    let text = "\u{1F7E9} Job Completed\nF2\n- main item\n> torque check";
    let doc = parse_handover(text);

    assert_eq!(doc.completed[&code("F2")], vec!["main item", "> torque check"]);
}

#[test]
fn test_continuation_line_without_marker() {
    let text = "\u{1F7E5} Outstanding\nS3\n- fuel leak trace\ncontinued from night shift";
    let doc = parse_handover(text);

    let entry = &doc.outstanding[&code("S3")];
    assert_eq!(entry.tag, None);
    assert_eq!(entry.items, vec!["fuel leak trace", "continued from night shift"]);
}

#[test]
fn test_extra_sections_collect_stripped_lines() {
    let text = "\u{1F538} 25HR Projection\n- F2 due 12 Aug\n\u{2192} S3 due 15 Aug\n\u{1F7EA} Lessons Learned\nbrief the oncoming shift earlier";
    let doc = parse_handover(text);

    assert_eq!(doc.extra.proj_25hr, vec!["F2 due 12 Aug", "S3 due 15 Aug"]);
    assert_eq!(doc.extra.lessons, vec!["brief the oncoming shift earlier"]);
}

#[test]
fn test_header_switches_section_and_resets_code() {
    let text = "\u{1F7E9} Job Completed\nF2\n- done item\n\u{1F7E5} Outstanding\n- orphan item\nS3\n- real item";
    let doc = parse_handover(text);

    // The item after the Outstanding header but before any code is dropped
    assert_eq!(doc.completed[&code("F2")], vec!["done item"]);
    assert!(!doc.outstanding.contains_key(&code("F2")));
    assert_eq!(doc.outstanding[&code("S3")].items, vec!["real item"]);
    assert_eq!(doc.stats.skipped_lines, vec!["- orphan item"]);
}

#[test]
fn test_lines_before_any_header_dropped() {
    let text = "HANDOVER 08 AUG\nF2\n- not yet in a section\n\u{1F7E9} Job Completed\nF2\n- counted";
    let doc = parse_handover(text);

    assert_eq!(doc.completed[&code("F2")], vec!["counted"]);
    assert_eq!(doc.stats.skipped, 3);
}

#[test]
fn test_code_line_in_both_sections() {
    let text = "\u{1F7E9} Job Completed\nF2\n- fixed radio\n\u{1F7E5} Outstanding\nF2 (AWP)\n- awaiting part";
    let doc = parse_handover(text);

    assert_eq!(doc.completed[&code("F2")], vec!["fixed radio"]);
    let out = &doc.outstanding[&code("F2")];
    assert_eq!(out.tag.as_deref(), Some("AWP"));
    assert_eq!(out.items, vec!["awaiting part"]);
}

#[test]
fn test_empty_input() {
    let doc = parse_handover("");
    assert!(doc.completed.is_empty());
    assert!(doc.outstanding.is_empty());
    assert!(doc.extra.proj_25hr.is_empty());
    assert_eq!(doc.stats.scanned, 0);
}

#[test]
fn test_idempotent() {
    let text = "\u{1F7E5} Outstanding\nF2 (MC)\n- check wiring";
    assert_eq!(parse_handover(text), parse_handover(text));
}

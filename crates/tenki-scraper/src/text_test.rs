use scraper::Html;

use super::*;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

#[test]
fn extract_text_removes_newlines_and_tabs_everywhere() {
    let doc = Html::parse_document("<div class=\"info\">\n\t晴れ\n時々 くもり\t\n</div>");
    let text = extract_text(doc.root_element(), &selector(".info"));
    assert_eq!(text.as_deref(), Some("晴れ時々 くもり"));
}

#[test]
fn extract_text_concatenates_nested_text() {
    let doc = Html::parse_document("<p class=\"x\">a<b>b</b><span>c</span></p>");
    assert_eq!(
        extract_text(doc.root_element(), &selector(".x")).as_deref(),
        Some("abc")
    );
}

#[test]
fn extract_text_uses_first_match() {
    let doc = Html::parse_document("<p class=\"x\">first</p><p class=\"x\">second</p>");
    assert_eq!(
        extract_text(doc.root_element(), &selector(".x")).as_deref(),
        Some("first")
    );
}

#[test]
fn extract_text_returns_none_without_match() {
    let doc = Html::parse_document("<p>nothing here</p>");
    assert!(extract_text(doc.root_element(), &selector(".info")).is_none());
}

#[test]
fn extract_text_returns_empty_string_for_empty_element() {
    let doc = Html::parse_document("<p class=\"x\"></p>");
    assert_eq!(
        extract_text(doc.root_element(), &selector(".x")).as_deref(),
        Some("")
    );
}

#[test]
fn extract_lines_drops_empty_lines_only() {
    let doc = Html::parse_document("<div class=\"textframe\">\nA\n\n B \nC\n</div>");
    let lines = extract_lines(doc.root_element(), &selector(".textframe")).unwrap();
    assert_eq!(lines, vec!["A", " B ", "C"]);
}

#[test]
fn extract_lines_returns_none_without_match() {
    let doc = Html::parse_document("<div>A\nB</div>");
    assert!(extract_lines(doc.root_element(), &selector(".textframe")).is_none());
}

#[test]
fn extract_lines_of_blank_element_is_empty() {
    let doc = Html::parse_document("<div class=\"textframe\">\n\n</div>");
    let lines = extract_lines(doc.root_element(), &selector(".textframe")).unwrap();
    assert!(lines.is_empty());
}

//! End-to-end behavior of loading and splitting documents

use std::fs;
use tempfile::TempDir;
use textparse_core::{
    CommentStyle, DocumentError, SplitConfig, SplitMode, TextDocument,
};

fn texts(doc: &TextDocument) -> Vec<String> {
    doc.records()
        .map(|r| r.to_str_lossy().into_owned())
        .collect()
}

#[test]
fn test_comment_truncates_rest_of_file() {
    let doc = TextDocument::from_bytes("line1\n#comment\nline2", &SplitConfig::lines()).unwrap();
    assert_eq!(texts(&doc), vec!["line1"]);
    assert_eq!(doc.line_numbers(), vec![1]);
}

#[test]
fn test_blank_line_collapsing_keeps_source_lines() {
    let doc = TextDocument::from_bytes("a\n\n\nb", &SplitConfig::lines()).unwrap();
    assert_eq!(texts(&doc), vec!["a", "b"]);
    assert_eq!(doc.line_numbers(), vec![1, 4]);
}

#[test]
fn test_quoted_word_is_one_record() {
    let doc = TextDocument::from_bytes("\"a b c\"", &SplitConfig::words()).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.record(0).unwrap().as_bytes(), b"a b c");
}

#[test]
fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("empty.txt");
    fs::write(&file_path, "").unwrap();

    let doc = TextDocument::open(&file_path, &SplitConfig::lines()).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.buffer_len(), 0);

    let doc = TextDocument::open(&file_path, &SplitConfig::words()).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_open_file_in_both_modes() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("commands.txt");
    fs::write(&file_path, "push 10\r\n\r\npush \"twenty one\"\r\nadd\r\n").unwrap();

    let lines = TextDocument::open(&file_path, &SplitConfig::lines()).unwrap();
    assert_eq!(lines.mode(), SplitMode::Lines);
    assert_eq!(
        texts(&lines),
        vec!["push 10", "push \"twenty one\"", "add"]
    );
    assert_eq!(lines.line_numbers(), vec![1, 3, 4]);

    let words = TextDocument::open(&file_path, &SplitConfig::words()).unwrap();
    assert_eq!(words.mode(), SplitMode::Words);
    assert_eq!(
        texts(&words),
        vec!["push", "10", "push", "twenty one", "add"]
    );
}

#[test]
fn test_open_missing_file() {
    let result = TextDocument::open("/nonexistent/input.txt", &SplitConfig::lines());
    assert!(matches!(result, Err(DocumentError::Open { .. })));
}

#[test]
fn test_unmatched_quote_fails_whole_load() {
    let result = TextDocument::from_bytes("one \"two three", &SplitConfig::words());
    assert_eq!(result, Err(DocumentError::MalformedInput { offset: 4 }));
}

#[test]
fn test_per_line_comments() {
    let config = SplitConfig::builder()
        .comments(CommentStyle::Line)
        .build()
        .unwrap();
    let doc = TextDocument::from_bytes("a # one\n# two\nb\n", &config).unwrap();
    assert_eq!(texts(&doc), vec!["a ", "b"]);
    assert_eq!(doc.line_numbers(), vec![1, 3]);
}

#[test]
fn test_comments_off() {
    let config = SplitConfig::builder()
        .comments(CommentStyle::Off)
        .build()
        .unwrap();
    let doc = TextDocument::from_bytes("#!/bin/sh\necho hi", &config).unwrap();
    assert_eq!(texts(&doc), vec!["#!/bin/sh", "echo hi"]);
}

#[test]
fn test_records_in_increasing_offset_order() {
    let doc = TextDocument::from_bytes("z y\n x  \"w v\" u", &SplitConfig::words()).unwrap();
    let spans = doc.spans();
    for pair in spans.windows(2) {
        assert!(pair[0].end < pair[1].start);
    }
}

#[test]
fn test_write_records_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let doc = TextDocument::from_bytes("b\n\na\n", &SplitConfig::lines()).unwrap();
    let mut file = fs::File::create(&output).unwrap();
    doc.write_records(&mut file).unwrap();
    drop(file);

    assert_eq!(fs::read_to_string(&output).unwrap(), "b\na\n");
}

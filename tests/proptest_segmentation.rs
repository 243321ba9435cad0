//! Property-based tests for the segmentation primitives.
//!
//! Uses proptest to verify the invariants that must hold across all valid
//! inputs, including malformed UTF-8.

use proptest::prelude::*;
use textseg::{
    first_grapheme_cluster, first_line_segment, first_sentence, first_word,
    grapheme_cluster_count_str, reverse_string, step, string_width, Config, GraphemeBreakState,
    LineBreakState, SentenceBreakState, StepState, WordBreakState,
};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

/// Arbitrary bytes, including malformed UTF-8.
fn raw_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..120)
}

/// Strings built from segmentation-heavy material: emoji, flags, CJK,
/// combining marks, separators, and numbers.
fn spicy_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "B", " ", ".", ",", "!", "?", "-", "(", ")", "\"", "'", "\r", "\n", "\r\n",
            "\u{200d}", "\u{0308}", "\u{fe0f}", "\u{00a0}", "1", "3.14", "中", "日",
            "🇩", "🇪", "🙂", "🏳️", "🌈", "👩", "❤️", "💋", "\u{1105}", "\u{116c}",
            "\u{11ab}", "\u{0915}", "\u{094d}", "\u{0937}", "א", "ک",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Like [`spicy_string`] but without Regional Indicators or carriage
/// returns. Both can place a word or sentence boundary strictly inside a
/// grapheme cluster (a joiner between flag pairs restarts the grapheme pair
/// count but not the word count; a CR+LF after a sentence terminator is one
/// cluster whose CR already closed the sentence), which the cluster-granular
/// stepper cannot report. These known rule inconsistencies are excluded here
/// the same way the corresponding conformance case is.
fn stepper_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "B", " ", ".", ",", "!", "?", "-", "(", ")", "\"", "'", "\n",
            "\u{200d}", "\u{0308}", "\u{fe0f}", "\u{00a0}", "1", "3.14", "中", "日",
            "🙂", "🏳️", "🌈", "👩", "❤️", "💋", "\u{1105}", "\u{116c}",
            "\u{11ab}", "\u{0915}", "\u{094d}", "\u{0937}", "א", "ک",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

// ============================================================================
// Universal properties
// ============================================================================

/// Exhaustively drives a `first_*` style function and returns the segments.
macro_rules! drive {
    ($f:ident, $state:ty, $input:expr) => {{
        let mut segments: Vec<Vec<u8>> = Vec::new();
        let mut rest: &[u8] = $input;
        let mut state = <$state>::default();
        let mut guard = 0usize;
        while !rest.is_empty() {
            let out = $f(rest, state);
            segments.push(out.0.to_vec());
            // Monotonicity: non-empty input always consumes at least a byte.
            prop_assert!(out.0.len() >= 1, "empty segment on non-empty input");
            let new_rest: &[u8] = out.1;
            prop_assert!(new_rest.len() < rest.len(), "rest did not shrink");
            rest = new_rest;
            state = *last_state(&out);
            guard += 1;
            prop_assert!(guard <= $input.len() + 1, "runaway scan");
        }
        segments
    }};
}

fn last_state<A, B, S>(t: &(A, B, S)) -> &S {
    &t.2
}

proptest! {
    /// Reassembly: concatenating all segments reproduces the input,
    /// byte-for-byte, for each of the four machines, on any bytes.
    #[test]
    fn reassembly_graphemes(input in raw_bytes()) {
        let mut rest: &[u8] = &input;
        let mut state = GraphemeBreakState::default();
        let mut assembled = Vec::new();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = first_grapheme_cluster(rest, state);
            prop_assert!(!cluster.is_empty());
            assembled.extend_from_slice(cluster);
            rest = tail;
            state = new_state;
        }
        prop_assert_eq!(assembled, input);
    }

    #[test]
    fn reassembly_words(input in raw_bytes()) {
        let segments = drive!(first_word, WordBreakState, &input[..]);
        let assembled: Vec<u8> = segments.concat();
        prop_assert_eq!(assembled, input);
    }

    #[test]
    fn reassembly_sentences(input in raw_bytes()) {
        let segments = drive!(first_sentence, SentenceBreakState, &input[..]);
        let assembled: Vec<u8> = segments.concat();
        prop_assert_eq!(assembled, input);
    }

    #[test]
    fn reassembly_lines(input in raw_bytes()) {
        let mut rest: &[u8] = &input;
        let mut state = LineBreakState::default();
        let mut assembled = Vec::new();
        while !rest.is_empty() {
            let (segment, tail, _, new_state) = first_line_segment(rest, state);
            prop_assert!(!segment.is_empty());
            assembled.extend_from_slice(segment);
            rest = tail;
            state = new_state;
        }
        prop_assert_eq!(assembled, input);
    }

    /// Widths and counts are consistent and never negative (they are
    /// unsigned, so the real property is: they do not panic and sum
    /// sensibly).
    #[test]
    fn width_and_count_consistency(s in utf8_string()) {
        let width = string_width(&s);
        let count = grapheme_cluster_count_str(&s);
        prop_assert!(count <= s.chars().count());
        if s.is_empty() {
            prop_assert_eq!(width, 0);
            prop_assert_eq!(count, 0);
        }
        // Every cluster contributes at most 4 cells (the widest code point).
        prop_assert!(width <= 4 * s.chars().count().max(1));
    }

    /// Reversing preserves UTF-8 validity and length.
    #[test]
    fn reverse_preserves_validity(s in spicy_string()) {
        let reversed = reverse_string(&s);
        prop_assert_eq!(reversed.len(), s.len());
        // `reversed` is a String, so validity holds by construction; check
        // the clusters survived by reversing the cluster list manually.
        let mut clusters = Vec::new();
        let mut rest: &[u8] = s.as_bytes();
        let mut state = GraphemeBreakState::default();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = first_grapheme_cluster(rest, state);
            clusters.push(cluster);
            rest = tail;
            state = new_state;
        }
        let expected: Vec<u8> = clusters.iter().rev().flat_map(|c| c.iter().copied()).collect();
        prop_assert_eq!(reversed.into_bytes(), expected);
    }

    /// Idempotence: the same (suffix, state) input yields the same output.
    #[test]
    fn state_idempotence(s in spicy_string()) {
        let mut rest: &[u8] = s.as_bytes();
        let mut state = GraphemeBreakState::default();
        while !rest.is_empty() {
            let first = first_grapheme_cluster(rest, state);
            let second = first_grapheme_cluster(rest, state);
            prop_assert_eq!(first, second);
            rest = first.1;
            state = first.3;
        }
    }

    /// The stepper's clusters equal the grapheme primitive's clusters, and
    /// its word/sentence flags reproduce the word and sentence
    /// segmentations.
    #[test]
    fn stepper_equivalence(s in stepper_string()) {
        let input = s.as_bytes();

        let mut stepped = Vec::new();
        let mut word_joined = Vec::new();
        let mut sentence_joined = Vec::new();
        let mut word_acc = Vec::new();
        let mut sentence_acc = Vec::new();
        let mut rest: &[u8] = input;
        let mut state = StepState::default();
        while !rest.is_empty() {
            let (cluster, tail, boundaries, new_state) = step(rest, state);
            stepped.push(cluster.to_vec());
            word_acc.extend_from_slice(cluster);
            sentence_acc.extend_from_slice(cluster);
            if boundaries.word() {
                word_joined.push(std::mem::take(&mut word_acc));
            }
            if boundaries.sentence() {
                sentence_joined.push(std::mem::take(&mut sentence_acc));
            }
            rest = tail;
            state = new_state;
        }

        let mut direct = Vec::new();
        let mut rest: &[u8] = input;
        let mut gstate = GraphemeBreakState::default();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = first_grapheme_cluster(rest, gstate);
            direct.push(cluster.to_vec());
            rest = tail;
            gstate = new_state;
        }
        prop_assert_eq!(&stepped, &direct, "stepper clusters diverge");

        let words = drive!(first_word, WordBreakState, input);
        prop_assert_eq!(&word_joined, &words, "stepper word boundaries diverge");

        let sentences = drive!(first_sentence, SentenceBreakState, input);
        prop_assert_eq!(
            &sentence_joined, &sentences,
            "stepper sentence boundaries diverge"
        );
    }

    /// With East-Asian width and wide emoji enabled, every emoji code point
    /// is at least two cells wide.
    #[test]
    fn wide_emoji_override(c in prop::sample::select(vec![
        '\u{2618}', '\u{2639}', '\u{2615}', '\u{26a0}', '\u{1f600}', '\u{1f3f3}',
        '\u{1f5e8}', '\u{270c}', '\u{1f6cb}', '\u{2708}',
    ])) {
        let cfg = Config::new(true, true);
        let s = c.to_string();
        prop_assert!(cfg.string_width(&s) >= 2, "{c:?} narrower than 2");
    }
}

//! End-to-end scenarios across the whole public surface, including the
//! iterator, the utility operations, and the configuration methods.

use textseg::{
    first_grapheme_cluster_str, first_line_segment_str, first_sentence_str, first_word_str,
    grapheme_cluster_count, grapheme_cluster_count_str, has_trailing_line_break_str,
    reverse_string, step_str, string_width, Config, GraphemeBreakState, Graphemes, LineBreak,
    LineBreakState, SentenceBreakState, StepState, WordBreakState,
};

#[test]
fn scenario_flags_and_bang() {
    let mut rest = "🇩🇪🏳️\u{200d}🌈!";
    let mut state = GraphemeBreakState::default();
    let mut seen = Vec::new();
    while !rest.is_empty() {
        let (cluster, tail, width, new_state) = first_grapheme_cluster_str(rest, state);
        seen.push((cluster, width));
        rest = tail;
        state = new_state;
    }
    assert_eq!(
        seen,
        [("🇩🇪", 2), ("🏳️\u{200d}🌈", 2), ("!", 1)]
    );
}

#[test]
fn scenario_hello_world_words() {
    let mut rest = "Hello, world!";
    let mut state = WordBreakState::default();
    let mut words = Vec::new();
    while !rest.is_empty() {
        let (word, tail, new_state) = first_word_str(rest, state);
        words.push(word);
        rest = tail;
        state = new_state;
    }
    assert_eq!(words, ["Hello", ",", " ", "world", "!"]);
}

#[test]
fn scenario_two_sentences() {
    let (first, rest, state) = first_sentence_str(
        "This is sentence 1.0. And this is sentence two.",
        SentenceBreakState::default(),
    );
    assert_eq!(first, "This is sentence 1.0. ");
    let (second, rest, _) = first_sentence_str(rest, state);
    assert_eq!(second, "And this is sentence two.");
    assert!(rest.is_empty());
}

#[test]
fn scenario_line_segments_with_must_break() {
    let mut rest = "First line.\nSecond line.";
    let mut state = LineBreakState::default();
    let mut segments = Vec::new();
    while !rest.is_empty() {
        let (segment, tail, must_break, new_state) = first_line_segment_str(rest, state);
        segments.push((segment, must_break));
        rest = tail;
        state = new_state;
    }
    assert_eq!(
        segments,
        [
            ("First ", false),
            ("line.\n", true),
            ("Second ", false),
            ("line.", true),
        ]
    );
}

#[test]
fn scenario_cluster_count() {
    assert_eq!(grapheme_cluster_count_str("möp"), 3);
    assert_eq!(grapheme_cluster_count("möp".as_bytes()), 3);
}

#[test]
fn scenario_reverse_preserves_clusters() {
    assert_eq!(
        reverse_string("🇩🇪🏳️\u{200d}🌈"),
        "🏳️\u{200d}🌈🇩🇪"
    );
}

#[test]
fn scenario_string_width() {
    assert_eq!(string_width("Hello, 世界"), 11);
}

#[test]
fn scenario_crlf_cluster() {
    let (cluster, rest, width, _) =
        first_grapheme_cluster_str("\r\n", GraphemeBreakState::default());
    assert_eq!(cluster, "\r\n");
    assert!(rest.is_empty());
    assert_eq!(width, 0);
}

#[test]
fn scenario_trailing_line_break() {
    assert!(has_trailing_line_break_str("done\n"));
    assert!(!has_trailing_line_break_str("done"));
}

// ============================================================================
// Stepper against the line machine on inputs without mid-cluster breaks
// ============================================================================

#[test]
fn stepper_line_boundaries_match_line_machine() {
    // None of these contain line break opportunities inside a grapheme
    // cluster, so the stepper's per-cluster line classes must reproduce the
    // line machine's segmentation exactly.
    let samples = [
        "First line.\nSecond line.",
        "Hello, 世界! How are you?",
        "a (b) c-d 3.14 $1,000 末尾",
        "🇩🇪🇫🇷 🙂 done\r\n",
    ];
    for sample in samples {
        let mut expected = Vec::new();
        let mut rest = sample;
        let mut state = LineBreakState::default();
        while !rest.is_empty() {
            let (segment, tail, _, new_state) = first_line_segment_str(rest, state);
            expected.push(segment.to_string());
            rest = tail;
            state = new_state;
        }

        let mut joined = Vec::new();
        let mut acc = String::new();
        let mut rest = sample;
        let mut state = StepState::default();
        while !rest.is_empty() {
            let (cluster, tail, boundaries, new_state) = step_str(rest, state);
            acc.push_str(cluster);
            if boundaries.line() != LineBreak::DontBreak {
                joined.push(std::mem::take(&mut acc));
            }
            rest = tail;
            state = new_state;
        }
        assert!(acc.is_empty(), "stepper did not close the final segment");
        assert_eq!(joined, expected, "line boundaries diverged for {sample:?}");
    }
}

// ============================================================================
// Iterator surface
// ============================================================================

#[test]
fn graphemes_iterator_full_surface() {
    let text = "Hi. 🏳️\u{200d}🌈!";
    let mut iter = Graphemes::new(text);
    let mut clusters = Vec::new();
    let mut total_width = 0;
    while let Some(cluster) = iter.next() {
        clusters.push(cluster);
        total_width += iter.width();
        let (from, to) = iter.positions();
        assert_eq!(&text[from..to], cluster);
    }
    assert_eq!(clusters, ["H", "i", ".", " ", "🏳️\u{200d}🌈", "!"]);
    assert_eq!(total_width, 7);
    assert_eq!(iter.positions(), (1, 1));

    iter.reset();
    assert_eq!(iter.next(), Some("H"));
}

// ============================================================================
// Configuration surface
// ============================================================================

#[test]
fn config_methods_mirror_module_functions() {
    let cfg = Config::default();
    let text = "Hello, 世界";
    assert_eq!(cfg.string_width(text), string_width(text));
    assert_eq!(
        cfg.grapheme_cluster_count_str(text),
        grapheme_cluster_count_str(text)
    );
    let (a, _, _, _) = cfg.first_grapheme_cluster_str(text, GraphemeBreakState::default());
    let (b, _, _, _) = first_grapheme_cluster_str(text, GraphemeBreakState::default());
    assert_eq!(a, b);
}

#[test]
fn config_east_asian_ambiguous() {
    let narrow = Config::new(false, false);
    let wide = Config::new(true, false);
    // Greek letters are East-Asian ambiguous.
    assert_eq!(narrow.string_width("αβ"), 2);
    assert_eq!(wide.string_width("αβ"), 4);
}

#[test]
fn config_wide_emoji() {
    let cfg = Config::new(true, true);
    // Text-presentation pictographs are forced to two cells.
    assert_eq!(cfg.string_width("\u{2708}"), 2);
    assert_eq!(Config::new(false, false).string_width("\u{2708}"), 1);
}

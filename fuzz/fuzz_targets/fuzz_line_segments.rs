//! Fuzz target for the line break machine on arbitrary bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textseg::{first_line_segment, has_trailing_line_break, LineBreakState};

fuzz_target!(|data: &[u8]| {
    let mut rest = data;
    let mut state = LineBreakState::default();
    let mut assembled = Vec::with_capacity(data.len());
    let mut last_must = false;
    while !rest.is_empty() {
        let (segment, tail, must_break, new_state) = first_line_segment(rest, state);
        assert!(!segment.is_empty(), "empty segment on non-empty input");
        assembled.extend_from_slice(segment);
        rest = tail;
        state = new_state;
        last_must = must_break;
    }
    assert_eq!(assembled, data, "segments do not reassemble the input");
    if !data.is_empty() {
        assert!(last_must, "the final segment must report a mandatory break");
    }
    let _ = has_trailing_line_break(data);
});

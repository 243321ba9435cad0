//! Fuzz target for the grapheme cluster primitive on arbitrary bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textseg::{first_grapheme_cluster, GraphemeBreakState};

fuzz_target!(|data: &[u8]| {
    let mut rest = data;
    let mut state = GraphemeBreakState::default();
    let mut assembled = Vec::with_capacity(data.len());
    while !rest.is_empty() {
        let (cluster, tail, width, new_state) = first_grapheme_cluster(rest, state);
        assert!(!cluster.is_empty(), "empty cluster on non-empty input");
        // A single cluster never exceeds four cells per code point.
        assert!(width <= 4 * cluster.len());
        assembled.extend_from_slice(cluster);
        rest = tail;
        state = new_state;
    }
    assert_eq!(assembled, data, "clusters do not reassemble the input");
});

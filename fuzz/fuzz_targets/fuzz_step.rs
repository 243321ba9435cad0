//! Fuzz target for the combined stepper.
//!
//! The stepper must never panic, must always consume at least one byte of a
//! non-empty buffer, and its clusters must reassemble the input exactly,
//! malformed UTF-8 included.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textseg::{step, StepState};

fuzz_target!(|data: &[u8]| {
    let mut rest = data;
    let mut state = StepState::default();
    let mut assembled = Vec::with_capacity(data.len());
    while !rest.is_empty() {
        let (cluster, tail, boundaries, new_state) = step(rest, state);
        assert!(!cluster.is_empty(), "stepper produced an empty cluster");
        assert!(tail.len() < rest.len(), "stepper made no progress");
        let _ = boundaries.width();
        assembled.extend_from_slice(cluster);
        rest = tail;
        state = new_state;
    }
    assert_eq!(assembled, data, "clusters do not reassemble the input");
});

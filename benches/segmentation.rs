//! Segmentation and width performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use textseg::{
    first_grapheme_cluster_str, first_line_segment_str, first_word_str, step_str,
    string_width, GraphemeBreakState, LineBreakState, StepState, WordBreakState,
};

const ASCII: &str = "The quick brown fox jumps over the lazy dog. 0123456789.";
const CJK: &str = "中文测试字符串这是一个很长的中文文本，日本語も混ざっています。";
const EMOJI: &str = "🏳️\u{200d}🌈🇩🇪👩\u{200d}❤️\u{200d}💋\u{200d}👩🙂🏋🏽\u{200d}♀️✨🎉";
const COMBINING: &str = "é\u{0301}ñ café naïve mö\u{0308}p a\u{0915}\u{094d}\u{0937}";

fn drive_graphemes(s: &str) -> usize {
    let mut n = 0;
    let mut rest = s;
    let mut state = GraphemeBreakState::default();
    while !rest.is_empty() {
        let (_, tail, _, new_state) = first_grapheme_cluster_str(rest, state);
        rest = tail;
        state = new_state;
        n += 1;
    }
    n
}

fn drive_words(s: &str) -> usize {
    let mut n = 0;
    let mut rest = s;
    let mut state = WordBreakState::default();
    while !rest.is_empty() {
        let (_, tail, new_state) = first_word_str(rest, state);
        rest = tail;
        state = new_state;
        n += 1;
    }
    n
}

fn drive_lines(s: &str) -> usize {
    let mut n = 0;
    let mut rest = s;
    let mut state = LineBreakState::default();
    while !rest.is_empty() {
        let (_, tail, _, new_state) = first_line_segment_str(rest, state);
        rest = tail;
        state = new_state;
        n += 1;
    }
    n
}

fn drive_step(s: &str) -> usize {
    let mut n = 0;
    let mut rest = s;
    let mut state = StepState::default();
    while !rest.is_empty() {
        let (_, tail, _, new_state) = step_str(rest, state);
        rest = tail;
        state = new_state;
        n += 1;
    }
    n
}

fn graphemes(c: &mut Criterion) {
    c.bench_function("graphemes_ascii", |b| {
        b.iter(|| drive_graphemes(black_box(ASCII)));
    });
    c.bench_function("graphemes_cjk", |b| {
        b.iter(|| drive_graphemes(black_box(CJK)));
    });
    c.bench_function("graphemes_emoji", |b| {
        b.iter(|| drive_graphemes(black_box(EMOJI)));
    });
    c.bench_function("graphemes_combining", |b| {
        b.iter(|| drive_graphemes(black_box(COMBINING)));
    });

    let ascii_long = ASCII.repeat(100);
    c.bench_function("graphemes_ascii_long", |b| {
        b.iter(|| drive_graphemes(black_box(&ascii_long)));
    });
}

fn words(c: &mut Criterion) {
    c.bench_function("words_ascii", |b| {
        b.iter(|| drive_words(black_box(ASCII)));
    });
    c.bench_function("words_cjk", |b| {
        b.iter(|| drive_words(black_box(CJK)));
    });
}

fn lines(c: &mut Criterion) {
    c.bench_function("lines_ascii", |b| {
        b.iter(|| drive_lines(black_box(ASCII)));
    });
    c.bench_function("lines_cjk", |b| {
        b.iter(|| drive_lines(black_box(CJK)));
    });
}

fn stepper(c: &mut Criterion) {
    c.bench_function("step_ascii", |b| {
        b.iter(|| drive_step(black_box(ASCII)));
    });
    c.bench_function("step_emoji", |b| {
        b.iter(|| drive_step(black_box(EMOJI)));
    });
}

fn widths(c: &mut Criterion) {
    c.bench_function("string_width_ascii", |b| {
        b.iter(|| string_width(black_box(ASCII)));
    });
    c.bench_function("string_width_cjk", |b| {
        b.iter(|| string_width(black_box(CJK)));
    });
    c.bench_function("string_width_emoji", |b| {
        b.iter(|| string_width(black_box(EMOJI)));
    });
}

criterion_group!(benches, graphemes, words, lines, stepper, widths);
criterion_main!(benches);

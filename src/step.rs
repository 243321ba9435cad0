//! The combined stepper: all four machines in lockstep over one scan.
//!
//! [`step`] emits one grapheme cluster per call together with the word,
//! sentence, and line boundary information at that cluster's end, plus its
//! monospace width. All four automaton states and the previous grapheme
//! property are packed into a single [`StepState`] so the whole scan state
//! stays one machine word.
//!
//! Line break opportunities that fall inside a grapheme cluster (possible
//! under UAX #14) are not reported, because output is emitted at grapheme
//! granularity.

use crate::config::{default_config, Config};
use crate::decode::decode_char;
use crate::grapheme::{grapheme_property_from_bits, transition_grapheme_state, GR_ANY};
use crate::line::{transition_line_break_state, LineBreak, LineBreakState};
use crate::properties::{GraphemeProperty, VS15, VS16};
use crate::sentence::{transition_sentence_break_state, SentenceBreakState};
use crate::tables::GRAPHEME_BREAK;
use crate::width::rune_width;
use crate::word::{transition_word_break_state, WordBreakState};

/// Opaque combined state of the [`step`] parser. The default value is the
/// initial state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepState(pub(crate) i64);

// Bit layout of StepState, low to high: grapheme state with its GB9c bits,
// word state with its ZWJ bit, sentence state, line state with its four
// side-condition bits, last grapheme property. Tests must not rely on this.
const SHIFT_WORD_STATE: u32 = 6;
const SHIFT_SENTENCE_STATE: u32 = 11;
const SHIFT_LINE_STATE: u32 = 15;
const SHIFT_PROP_STATE: u32 = 25;

const MASK_GRAPHEME_STATE: i64 = 0x3f;
const MASK_WORD_STATE: i64 = 0x1f;
const MASK_SENTENCE_STATE: i64 = 0xf;
const MASK_LINE_STATE: i64 = 0x3ff;

fn new_step_state(
    gr: u32,
    wb: WordBreakState,
    sb: SentenceBreakState,
    lb: LineBreakState,
    prop: GraphemeProperty,
) -> StepState {
    StepState(
        i64::from(gr)
            | (wb.0 as i64) << SHIFT_WORD_STATE
            | (sb.0 as i64) << SHIFT_SENTENCE_STATE
            | (lb.0 as i64) << SHIFT_LINE_STATE
            | (prop as i64) << SHIFT_PROP_STATE,
    )
}

fn unpack_step_state(
    state: StepState,
) -> (
    u32,
    WordBreakState,
    SentenceBreakState,
    LineBreakState,
    GraphemeProperty,
) {
    let raw = state.0;
    let gr = (raw & MASK_GRAPHEME_STATE) as u32;
    let wb = WordBreakState(((raw >> SHIFT_WORD_STATE) & MASK_WORD_STATE) as i32);
    let sb = SentenceBreakState(((raw >> SHIFT_SENTENCE_STATE) & MASK_SENTENCE_STATE) as i32);
    let lb = LineBreakState(((raw >> SHIFT_LINE_STATE) & MASK_LINE_STATE) as i32);
    let prop = grapheme_property_from_bits(((raw >> SHIFT_PROP_STATE) & 0xf) as u32);
    (gr, wb, sb, lb, prop)
}

// Boundary packing: two bits of line break class, one word bit, one
// sentence bit, the width above.
const SHIFT_LINE: u32 = 0;
const SHIFT_WORD: u32 = 2;
const SHIFT_SENTENCE: u32 = 3;
const SHIFT_WIDTH: u32 = 4;

const MASK_LINE: i32 = 0b0011;
const MASK_WORD: i32 = 0b0100;
const MASK_SENTENCE: i32 = 0b1000;

/// Boundary information returned by [`step`] for one grapheme cluster:
/// the line break class after the cluster, whether a word or sentence ends
/// after it, and the cluster's monospace width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boundaries(pub(crate) i32);

impl Boundaries {
    fn new(line: LineBreak, word: bool, sentence: bool, width: usize) -> Self {
        let mut b = (line as i32) << SHIFT_LINE | (width as i32) << SHIFT_WIDTH;
        if word {
            b |= 1 << SHIFT_WORD;
        }
        if sentence {
            b |= 1 << SHIFT_SENTENCE;
        }
        Boundaries(b)
    }

    /// The line break class after this cluster.
    #[must_use]
    pub fn line(self) -> LineBreak {
        match (self.0 & MASK_LINE) >> SHIFT_LINE {
            1 => LineBreak::CanBreak,
            2 => LineBreak::MustBreak,
            _ => LineBreak::DontBreak,
        }
    }

    /// Whether a word ends after this cluster.
    #[must_use]
    pub fn word(self) -> bool {
        self.0 & MASK_WORD != 0
    }

    /// Whether a sentence ends after this cluster.
    #[must_use]
    pub fn sentence(self) -> bool {
        self.0 & MASK_SENTENCE != 0
    }

    /// The monospace width of this cluster.
    #[must_use]
    pub fn width(self) -> usize {
        (self.0 >> SHIFT_WIDTH) as usize
    }
}

/// Returns the first grapheme cluster of `b`, the remainder of `b`, the
/// aggregated boundary information at the cluster's end, and the state to
/// pass to the next call. Uses the process-wide default configuration.
///
/// This combines [`first_grapheme_cluster`], [`first_word`],
/// [`first_sentence`], and [`first_line_segment`] into a single scan. Word
/// and sentence boundaries are reported if one occurred at or within the
/// cluster; the line break class is the one at the cluster's end, with the
/// final cluster of the input reporting a mandatory break (LB3).
///
/// [`first_grapheme_cluster`]: crate::first_grapheme_cluster
/// [`first_word`]: crate::first_word
/// [`first_sentence`]: crate::first_sentence
/// [`first_line_segment`]: crate::first_line_segment
///
/// # Examples
///
/// ```
/// use textseg::LineBreak;
///
/// let mut rest: &[u8] = b"Hello, world!";
/// let mut state = textseg::StepState::default();
/// let mut words = Vec::new();
/// let mut start = 0;
/// let mut offset = 0;
/// while !rest.is_empty() {
///     let (cluster, tail, boundaries, new_state) = textseg::step(rest, state);
///     offset += cluster.len();
///     if boundaries.word() {
///         words.push(&b"Hello, world!"[start..offset]);
///         start = offset;
///     }
///     rest = tail;
///     state = new_state;
/// }
/// assert_eq!(
///     words,
///     [&b"Hello"[..], &b","[..], &b" "[..], &b"world"[..], &b"!"[..]]
/// );
/// ```
#[must_use]
pub fn step(b: &[u8], state: StepState) -> (&[u8], &[u8], Boundaries, StepState) {
    default_config().step(b, state)
}

/// Like [`step`] but for a string slice.
#[must_use]
pub fn step_str(s: &str, state: StepState) -> (&str, &str, Boundaries, StepState) {
    default_config().step_str(s, state)
}

impl Config {
    /// [`step`] under this width configuration.
    #[must_use]
    pub fn step<'a>(
        &self,
        b: &'a [u8],
        state: StepState,
    ) -> (&'a [u8], &'a [u8], Boundaries, StepState) {
        step_impl(*self, b, state)
    }

    /// [`step_str`] under this width configuration.
    #[must_use]
    pub fn step_str<'a>(
        &self,
        s: &'a str,
        state: StepState,
    ) -> (&'a str, &'a str, Boundaries, StepState) {
        let (cluster, _, boundaries, new_state) = step_impl(*self, s.as_bytes(), state);
        let n = cluster.len();
        (&s[..n], &s[n..], boundaries, new_state)
    }
}

fn step_impl(cfg: Config, b: &[u8], state: StepState) -> (&[u8], &[u8], Boundaries, StepState) {
    if b.is_empty() {
        return (b, b, Boundaries::default(), StepState::default());
    }

    let (r, mut length) = decode_char(b);
    if b.len() <= length {
        let prop = GRAPHEME_BREAK.search(r);
        let boundaries =
            Boundaries::new(LineBreak::MustBreak, true, true, rune_width(cfg, r, prop));
        let new_state = new_step_state(
            GR_ANY,
            WordBreakState::default(),
            SentenceBreakState::default(),
            LineBreakState::default(),
            prop,
        );
        return (b, &b[b.len()..], boundaries, new_state);
    }

    let mut remainder = &b[length..];
    let (mut gr_state, mut wb_state, mut sb_state, mut lb_state, first_prop) = if state.0 <= 0 {
        let (gr, prop, _) = transition_grapheme_state(0, r);
        let (wb, _) = transition_word_break_state(WordBreakState::default(), r, remainder);
        let (sb, _) = transition_sentence_break_state(SentenceBreakState::default(), r, remainder);
        let (lb, _) = transition_line_break_state(LineBreakState::default(), r, remainder);
        (gr, wb, sb, lb, prop)
    } else {
        unpack_step_state(state)
    };
    let mut width = rune_width(cfg, r, first_prop);

    // Transition all four machines until the grapheme machine finds a
    // boundary.
    loop {
        let (r, l) = decode_char(&b[length..]);
        remainder = &b[length + l..];

        let (gr, prop, grapheme_boundary) = transition_grapheme_state(gr_state, r);
        gr_state = gr;
        let (wb, word_boundary) = transition_word_break_state(wb_state, r, remainder);
        wb_state = wb;
        let (sb, sentence_boundary) = transition_sentence_break_state(sb_state, r, remainder);
        sb_state = sb;
        let (lb, line_break) = transition_line_break_state(lb_state, r, remainder);
        lb_state = lb;

        if grapheme_boundary {
            let boundaries = Boundaries::new(line_break, word_boundary, sentence_boundary, width);
            let new_state = new_step_state(gr_state, wb_state, sb_state, lb_state, prop);
            return (&b[..length], &b[length..], boundaries, new_state);
        }

        if r == VS16 {
            width = 2;
        } else if first_prop != GraphemeProperty::ExtendedPictographic
            && first_prop != GraphemeProperty::RegionalIndicator
            && first_prop != GraphemeProperty::L
        {
            width += rune_width(cfg, r, prop);
        } else if first_prop == GraphemeProperty::ExtendedPictographic {
            if r == VS15 {
                width = 1;
            } else {
                width = 2;
            }
        }

        length += l;
        if b.len() <= length {
            let boundaries = Boundaries::new(LineBreak::MustBreak, true, true, width);
            let new_state = new_step_state(
                GR_ANY,
                WordBreakState::default(),
                SentenceBreakState::default(),
                LineBreakState::default(),
                prop,
            );
            return (b, &b[b.len()..], boundaries, new_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphemeBreakState;

    fn step_clusters(s: &str) -> Vec<(String, Boundaries)> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = StepState::default();
        while !rest.is_empty() {
            let (cluster, tail, boundaries, new_state) = step_str(rest, state);
            out.push((cluster.to_string(), boundaries));
            rest = tail;
            state = new_state;
        }
        out
    }

    #[test]
    fn test_empty() {
        let (cluster, rest, boundaries, state) = step(b"", StepState::default());
        assert!(cluster.is_empty());
        assert!(rest.is_empty());
        assert_eq!(boundaries, Boundaries::default());
        assert_eq!(state, StepState::default());
    }

    #[test]
    fn test_clusters_match_first_grapheme_cluster() {
        let sample = "Hello, 世界! 🇩🇪🏳️\u{200d}🌈 möp\r\nend";
        let stepped: Vec<String> = step_clusters(sample).into_iter().map(|(c, _)| c).collect();

        let mut direct = Vec::new();
        let mut rest = sample;
        let mut state = GraphemeBreakState::default();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) =
                crate::grapheme::first_grapheme_cluster_str(rest, state);
            direct.push(cluster.to_string());
            rest = tail;
            state = new_state;
        }
        assert_eq!(stepped, direct);
    }

    #[test]
    fn test_word_boundaries() {
        let clusters = step_clusters("Hello, world!");
        let mut words = Vec::new();
        let mut word = String::new();
        for (cluster, boundaries) in clusters {
            word.push_str(&cluster);
            if boundaries.word() {
                words.push(std::mem::take(&mut word));
            }
        }
        assert_eq!(words, ["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_sentence_boundaries() {
        let clusters = step_clusters("This is sentence 1.0. And this is sentence two.");
        let mut sentences = Vec::new();
        let mut sentence = String::new();
        for (cluster, boundaries) in clusters {
            sentence.push_str(&cluster);
            if boundaries.sentence() {
                sentences.push(std::mem::take(&mut sentence));
            }
        }
        assert_eq!(
            sentences,
            ["This is sentence 1.0. ", "And this is sentence two."]
        );
    }

    #[test]
    fn test_line_break_classes() {
        let clusters = step_clusters("a b\nc");
        let lines: Vec<LineBreak> = clusters.iter().map(|(_, b)| b.line()).collect();
        assert_eq!(
            lines,
            [
                LineBreak::DontBreak, // a
                LineBreak::CanBreak,  // space
                LineBreak::DontBreak, // b
                LineBreak::MustBreak, // \n
                LineBreak::MustBreak, // c, end of text (LB3)
            ]
        );
    }

    #[test]
    fn test_widths() {
        let clusters = step_clusters("🇩🇪🏳️\u{200d}🌈!");
        let widths: Vec<usize> = clusters.iter().map(|(_, b)| b.width()).collect();
        assert_eq!(widths, [2, 2, 1]);
    }

    #[test]
    fn test_last_cluster_reports_all_boundaries() {
        let clusters = step_clusters("ab");
        let (_, last) = clusters.last().unwrap().clone();
        assert!(last.word());
        assert!(last.sentence());
        assert_eq!(last.line(), LineBreak::MustBreak);
    }

    #[test]
    fn test_state_roundtrip() {
        // Resuming with a packed state yields the same results as a fresh
        // scan observed cluster by cluster.
        let sample = "a🏳️\u{200d}🌈 b";
        let (c1, rest, _, state) = step_str(sample, StepState::default());
        let (c2, _, _, _) = step_str(rest, state);
        assert_eq!(c1, "a");
        assert_eq!(c2, "🏳️\u{200d}🌈");
    }
}

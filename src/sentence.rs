//! Sentence segmentation (UAX #29, rules SB1-SB998).
//!
//! The interesting rules are the aborted-sentence ones: a full stop followed
//! by closing punctuation and spaces only ends a sentence if what comes next
//! is not lowercase (SB8), which needs unbounded lookahead, and paragraph
//! separators always end one (SB4).

use crate::config::Config;
use crate::decode::{decode_char, REPLACEMENT};
use crate::properties::{SentenceProperty, SENTENCE_PROPERTY_COUNT};
use crate::tables::SENTENCE_BREAK;

/// Opaque state of the sentence segmenter. The default value is the initial
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentenceBreakState(pub(crate) i32);

// Machine states; zero is the initial state with an empty table row.
const SB_ANY: u32 = 1;
const SB_CR: u32 = 2;
const SB_PARA_SEP: u32 = 3;
const SB_ATERM: u32 = 4;
const SB_UPPER: u32 = 5;
const SB_LOWER: u32 = 6;
const SB_SB7: u32 = 7;
const SB_SB8_CLOSE: u32 = 8;
const SB_SB8_SP: u32 = 9;
const SB_STERM: u32 = 10;
const SB_SB8A_CLOSE: u32 = 11;
const SB_SB8A_SP: u32 = 12;
const SB_STATE_COUNT: usize = 13;

#[derive(Clone, Copy)]
struct SbTransition {
    target: u32,
    boundary: bool,
    rule: u16,
}

const SB_ABSENT: SbTransition = SbTransition {
    target: SB_ANY,
    boundary: false,
    rule: 0,
};

/// Sentence break transitions, resolved like the grapheme table except that
/// the absent-everything fallback is SB998: no break, state `SB_ANY`.
static SB_TRANSITIONS: [SbTransition; SB_STATE_COUNT * SENTENCE_PROPERTY_COUNT] =
    build_sentence_transitions();

const fn build_sentence_transitions(
) -> [SbTransition; SB_STATE_COUNT * SENTENCE_PROPERTY_COUNT] {
    use SentenceProperty as P;
    type Rule = (u32, P, u32, bool, u16);
    const RULES: &[Rule] = &[
        // SB3: CR x LF.
        (SB_ANY, P::Cr, SB_CR, false, 9990),
        (SB_CR, P::Lf, SB_PARA_SEP, false, 30),
        // SB4: break after paragraph separators.
        (SB_ANY, P::Sep, SB_PARA_SEP, false, 9990),
        (SB_ANY, P::Lf, SB_PARA_SEP, false, 9990),
        (SB_PARA_SEP, P::Any, SB_ANY, true, 40),
        (SB_CR, P::Any, SB_ANY, true, 40),
        // SB6: ATerm x Numeric.
        (SB_ANY, P::ATerm, SB_ATERM, false, 9990),
        (SB_ATERM, P::Numeric, SB_ANY, false, 60),
        (SB_SB7, P::Numeric, SB_ANY, false, 60), // ATerm also appears in SB7.
        // SB7: (Upper|Lower) ATerm x Upper.
        (SB_ANY, P::Upper, SB_UPPER, false, 9990),
        (SB_ANY, P::Lower, SB_LOWER, false, 9990),
        (SB_UPPER, P::ATerm, SB_SB7, false, 70),
        (SB_LOWER, P::ATerm, SB_SB7, false, 70),
        (SB_SB7, P::Upper, SB_UPPER, false, 70),
        // SB8a: terminator sequences continue into SContinue and terminators.
        (SB_ANY, P::STerm, SB_STERM, false, 9990),
        (SB_ATERM, P::SContinue, SB_ANY, false, 81),
        (SB_ATERM, P::ATerm, SB_ATERM, false, 81),
        (SB_ATERM, P::STerm, SB_STERM, false, 81),
        (SB_SB7, P::SContinue, SB_ANY, false, 81),
        (SB_SB7, P::ATerm, SB_ATERM, false, 81),
        (SB_SB7, P::STerm, SB_STERM, false, 81),
        (SB_SB8_CLOSE, P::SContinue, SB_ANY, false, 81),
        (SB_SB8_CLOSE, P::ATerm, SB_ATERM, false, 81),
        (SB_SB8_CLOSE, P::STerm, SB_STERM, false, 81),
        (SB_SB8_SP, P::SContinue, SB_ANY, false, 81),
        (SB_SB8_SP, P::ATerm, SB_ATERM, false, 81),
        (SB_SB8_SP, P::STerm, SB_STERM, false, 81),
        (SB_STERM, P::SContinue, SB_ANY, false, 81),
        (SB_STERM, P::ATerm, SB_ATERM, false, 81),
        (SB_STERM, P::STerm, SB_STERM, false, 81),
        (SB_SB8A_CLOSE, P::SContinue, SB_ANY, false, 81),
        (SB_SB8A_CLOSE, P::ATerm, SB_ATERM, false, 81),
        (SB_SB8A_CLOSE, P::STerm, SB_STERM, false, 81),
        (SB_SB8A_SP, P::SContinue, SB_ANY, false, 81),
        (SB_SB8A_SP, P::ATerm, SB_ATERM, false, 81),
        (SB_SB8A_SP, P::STerm, SB_STERM, false, 81),
        // SB9: closing punctuation and separators after a terminator.
        (SB_ATERM, P::Close, SB_SB8_CLOSE, false, 90),
        (SB_SB7, P::Close, SB_SB8_CLOSE, false, 90),
        (SB_SB8_CLOSE, P::Close, SB_SB8_CLOSE, false, 90),
        (SB_ATERM, P::Sp, SB_SB8_SP, false, 90),
        (SB_SB7, P::Sp, SB_SB8_SP, false, 90),
        (SB_SB8_CLOSE, P::Sp, SB_SB8_SP, false, 90),
        (SB_STERM, P::Close, SB_SB8A_CLOSE, false, 90),
        (SB_SB8A_CLOSE, P::Close, SB_SB8A_CLOSE, false, 90),
        (SB_STERM, P::Sp, SB_SB8A_SP, false, 90),
        (SB_SB8A_CLOSE, P::Sp, SB_SB8A_SP, false, 90),
        (SB_ATERM, P::Sep, SB_PARA_SEP, false, 90),
        (SB_ATERM, P::Cr, SB_PARA_SEP, false, 90),
        (SB_ATERM, P::Lf, SB_PARA_SEP, false, 90),
        (SB_SB7, P::Sep, SB_PARA_SEP, false, 90),
        (SB_SB7, P::Cr, SB_PARA_SEP, false, 90),
        (SB_SB7, P::Lf, SB_PARA_SEP, false, 90),
        (SB_SB8_CLOSE, P::Sep, SB_PARA_SEP, false, 90),
        (SB_SB8_CLOSE, P::Cr, SB_PARA_SEP, false, 90),
        (SB_SB8_CLOSE, P::Lf, SB_PARA_SEP, false, 90),
        (SB_STERM, P::Sep, SB_PARA_SEP, false, 90),
        (SB_STERM, P::Cr, SB_PARA_SEP, false, 90),
        (SB_STERM, P::Lf, SB_PARA_SEP, false, 90),
        (SB_SB8A_CLOSE, P::Sep, SB_PARA_SEP, false, 90),
        (SB_SB8A_CLOSE, P::Cr, SB_PARA_SEP, false, 90),
        (SB_SB8A_CLOSE, P::Lf, SB_PARA_SEP, false, 90),
        // SB10: spaces after a terminator sequence.
        (SB_SB8_SP, P::Sp, SB_SB8_SP, false, 100),
        (SB_SB8A_SP, P::Sp, SB_SB8A_SP, false, 100),
        (SB_SB8_SP, P::Sep, SB_PARA_SEP, false, 100),
        (SB_SB8_SP, P::Cr, SB_PARA_SEP, false, 100),
        (SB_SB8_SP, P::Lf, SB_PARA_SEP, false, 100),
        // SB11: otherwise break after the terminator sequence.
        (SB_ATERM, P::Any, SB_ANY, true, 110),
        (SB_SB7, P::Any, SB_ANY, true, 110),
        (SB_SB8_CLOSE, P::Any, SB_ANY, true, 110),
        (SB_SB8_SP, P::Any, SB_ANY, true, 110),
        (SB_STERM, P::Any, SB_ANY, true, 110),
        (SB_SB8A_CLOSE, P::Any, SB_ANY, true, 110),
        (SB_SB8A_SP, P::Any, SB_ANY, true, 110),
        // A break always follows a paragraph separator via SB4.
    ];

    let mut table = [SB_ABSENT; SB_STATE_COUNT * SENTENCE_PROPERTY_COUNT];
    let mut i = 0;
    while i < RULES.len() {
        let rule = RULES[i];
        table[rule.0 as usize * SENTENCE_PROPERTY_COUNT + rule.1 as usize] = SbTransition {
            target: rule.2,
            boundary: rule.3,
            rule: rule.4,
        };
        i += 1;
    }
    table
}

/// Advances the sentence machine by the code point `r`. `rest` must be the
/// input following `r`; rule SB8 decodes further code points from it without
/// consuming them.
pub(crate) fn transition_sentence_break_state(
    state: SentenceBreakState,
    r: char,
    rest: &[u8],
) -> (SentenceBreakState, bool) {
    let mut next_property = SENTENCE_BREAK.search(r);
    let raw = state.0;

    // SB5 (replacing ignore rules): Extend and Format are absorbed, unless
    // they follow a paragraph separator where SB4 must still fire.
    if next_property == SentenceProperty::Extend || next_property == SentenceProperty::Format {
        let full = raw as u32;
        if full == SB_PARA_SEP || full == SB_CR {
            return (SentenceBreakState(SB_ANY as i32), true);
        }
        if raw < 0 {
            return (SentenceBreakState(SB_ANY as i32), true); // SB1.
        }
        return (SentenceBreakState(raw), false);
    }

    let state = if raw > 0 { raw as u32 } else { 0 };

    // Table lookup with wildcard fallback.
    let specific =
        SB_TRANSITIONS[state as usize * SENTENCE_PROPERTY_COUNT + next_property as usize];
    let (mut new_state, mut boundary, mut rule);
    if specific.rule > 0 {
        new_state = specific.target;
        boundary = specific.boundary;
        rule = specific.rule;
    } else {
        let any_prop = SB_TRANSITIONS[state as usize * SENTENCE_PROPERTY_COUNT];
        let any_state =
            SB_TRANSITIONS[SB_ANY as usize * SENTENCE_PROPERTY_COUNT + next_property as usize];
        if any_prop.rule > 0 && any_state.rule > 0 {
            new_state = any_state.target;
            boundary = any_state.boundary;
            rule = any_state.rule;
            if any_prop.rule < any_state.rule {
                boundary = any_prop.boundary;
                rule = any_prop.rule;
            }
        } else if any_prop.rule > 0 {
            new_state = any_prop.target;
            boundary = any_prop.boundary;
            rule = any_prop.rule;
        } else if any_state.rule > 0 {
            new_state = any_state.target;
            boundary = any_state.boundary;
            rule = any_state.rule;
        } else {
            // SB998: no break.
            new_state = SB_ANY;
            boundary = false;
            rule = 9990;
        }
    }

    // SB8: ATerm Close* Sp* x (not in the follow set)* Lower. Scan forward,
    // skipping anything outside the follow set, and cancel the break if the
    // first significant code point is lowercase.
    if rule > 80
        && (state == SB_ATERM
            || state == SB_SB8_CLOSE
            || state == SB_SB8_SP
            || state == SB_SB7)
    {
        let mut rest = rest;
        while !matches!(
            next_property,
            SentenceProperty::OLetter
                | SentenceProperty::Upper
                | SentenceProperty::Lower
                | SentenceProperty::Sep
                | SentenceProperty::Cr
                | SentenceProperty::Lf
                | SentenceProperty::ATerm
                | SentenceProperty::STerm
        ) {
            let (r, length) = decode_char(rest);
            if length == 0 || r == REPLACEMENT {
                break;
            }
            rest = &rest[length..];
            next_property = SENTENCE_BREAK.search(r);
        }
        if next_property == SentenceProperty::Lower {
            return (SentenceBreakState(SB_LOWER as i32), false);
        }
    }

    (SentenceBreakState(new_state as i32), boundary)
}

/// Returns the first sentence in the byte slice `b`, the remainder of `b`,
/// and the state to pass to the next call.
///
/// Pass the default state for the first call of a scan; the concatenation of
/// all returned sentences reproduces `b` byte-for-byte. Empty input returns
/// empty slices and the initial state.
///
/// # Examples
///
/// ```
/// let (sentence, rest, _) = textseg::first_sentence_str(
///     "This is sentence 1.0. And this is sentence two.",
///     Default::default(),
/// );
/// assert_eq!(sentence, "This is sentence 1.0. ");
/// assert_eq!(rest, "And this is sentence two.");
/// ```
#[must_use]
pub fn first_sentence(
    b: &[u8],
    state: SentenceBreakState,
) -> (&[u8], &[u8], SentenceBreakState) {
    if b.is_empty() {
        return (b, b, SentenceBreakState::default());
    }

    let (r, mut length) = decode_char(b);
    if b.len() <= length {
        return (b, &b[b.len()..], SentenceBreakState(SB_ANY as i32));
    }

    let mut state = state;
    if state.0 <= 0 {
        let (s, _) = transition_sentence_break_state(SentenceBreakState(0), r, &b[length..]);
        state = s;
    }

    loop {
        let (r, l) = decode_char(&b[length..]);
        let (new_state, boundary) =
            transition_sentence_break_state(state, r, &b[length + l..]);
        state = new_state;

        if boundary {
            return (&b[..length], &b[length..], state);
        }

        length += l;
        if b.len() <= length {
            return (b, &b[b.len()..], SentenceBreakState(SB_ANY as i32));
        }
    }
}

/// Like [`first_sentence`] but for a string slice.
#[must_use]
pub fn first_sentence_str(
    s: &str,
    state: SentenceBreakState,
) -> (&str, &str, SentenceBreakState) {
    let (sentence, _, new_state) = first_sentence(s.as_bytes(), state);
    let n = sentence.len();
    (&s[..n], &s[n..], new_state)
}

impl Config {
    /// [`first_sentence`]; sentence boundaries do not depend on the width
    /// configuration, this method only mirrors the module-level surface.
    #[must_use]
    pub fn first_sentence<'a>(
        &self,
        b: &'a [u8],
        state: SentenceBreakState,
    ) -> (&'a [u8], &'a [u8], SentenceBreakState) {
        first_sentence(b, state)
    }

    /// [`first_sentence_str`].
    #[must_use]
    pub fn first_sentence_str<'a>(
        &self,
        s: &'a str,
        state: SentenceBreakState,
    ) -> (&'a str, &'a str, SentenceBreakState) {
        first_sentence_str(s, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(s: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = SentenceBreakState::default();
        while !rest.is_empty() {
            let (sentence, tail, new_state) = first_sentence_str(rest, state);
            out.push(sentence);
            rest = tail;
            state = new_state;
        }
        out
    }

    #[test]
    fn test_two_sentences() {
        assert_eq!(
            sentences("This is sentence 1.0. And this is sentence two."),
            vec!["This is sentence 1.0. ", "And this is sentence two."]
        );
    }

    #[test]
    fn test_empty() {
        let (sentence, rest, state) = first_sentence(b"", SentenceBreakState::default());
        assert!(sentence.is_empty());
        assert!(rest.is_empty());
        assert_eq!(state, SentenceBreakState::default());
    }

    #[test]
    fn test_sb6_numeric_abbreviation() {
        // A period followed by a digit never ends the sentence.
        assert_eq!(sentences("Version 1.5 shipped."), vec!["Version 1.5 shipped."]);
    }

    #[test]
    fn test_sb8_lowercase_continuation() {
        // Lowercase after the period means an abbreviation, not an end.
        assert_eq!(sentences("He said approx. two."), vec!["He said approx. two."]);
        // Uppercase after the period ends the sentence.
        assert_eq!(sentences("Stop. Go."), vec!["Stop. ", "Go."]);
    }

    #[test]
    fn test_sb7_initials() {
        // SB7 keeps upper-dot-upper runs together; the lowercase follow-up
        // then cancels the final break via SB8.
        assert_eq!(sentences("The U.S.A. is big."), vec!["The U.S.A. is big."]);
        // An uppercase word after an abbreviation still breaks; that is the
        // documented limit of the default rules.
        assert_eq!(
            sentences("J.R.R. Tolkien wrote."),
            vec!["J.R.R. ", "Tolkien wrote."]
        );
    }

    #[test]
    fn test_sb4_paragraph_separators() {
        assert_eq!(sentences("One\nTwo"), vec!["One\n", "Two"]);
        assert_eq!(sentences("One\r\nTwo"), vec!["One\r\n", "Two"]);
        assert_eq!(sentences("One\u{2029}Two"), vec!["One\u{2029}", "Two"]);
    }

    #[test]
    fn test_sterm_with_close_and_quotes() {
        assert_eq!(
            sentences("Really?) Yes."),
            vec!["Really?) ", "Yes."]
        );
        assert_eq!(sentences("Wow! \"Quote.\""), vec!["Wow! ", "\"Quote.\""]);
    }

    #[test]
    fn test_ellipsis_stays_with_sentence() {
        assert_eq!(sentences("Wait... done."), vec!["Wait... done."]);
        assert_eq!(sentences("Wait... Done."), vec!["Wait... ", "Done."]);
    }
}

//! Word segmentation (UAX #29, rules WB1-WB999).
//!
//! Same table-plus-wildcards shape as the grapheme machine, with two twists:
//! rule WB4 makes Extend, Format, and ZWJ invisible before the table is
//! consulted (a ZWJ leaves a marker bit behind for WB3c), and rules WB6,
//! WB7b, and WB12 peek ahead in the input to classify an infix character
//! before committing to a boundary.

use crate::config::{default_config, Config};
use crate::decode::{decode_char, REPLACEMENT};
use crate::properties::{WordProperty, WORD_PROPERTY_COUNT};
use crate::tables::WORD_BREAK;

/// Opaque state of the word segmenter. The default value is the initial
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordBreakState(pub(crate) i32);

// Machine states; zero is the initial state with an empty table row.
const WB_ANY: u32 = 1;
const WB_CR: u32 = 2;
const WB_LF: u32 = 3;
const WB_NEWLINE: u32 = 4;
const WB_WSEGSPACE: u32 = 5;
const WB_HEBREW_LETTER: u32 = 6;
const WB_ALETTER: u32 = 7;
const WB_WB7: u32 = 8;
const WB_WB7C: u32 = 9;
const WB_NUMERIC: u32 = 10;
const WB_WB11: u32 = 11;
const WB_KATAKANA: u32 = 12;
const WB_EXTEND_NUM_LET: u32 = 13;
const WB_RI_ODD: u32 = 14;
const WB_RI_EVEN: u32 = 15;
const WB_STATE_COUNT: usize = 16;

/// Set while the last non-ignored code point was a zero-width joiner
/// (WB4/WB3c).
const WB_ZWJ_BIT: u32 = 16;

const WB_STATE_MASK: u32 = 0x0f;

#[derive(Clone, Copy)]
struct WbTransition {
    target: u32,
    boundary: bool,
    rule: u16,
}

const WB_ABSENT: WbTransition = WbTransition {
    target: WB_ANY,
    boundary: true,
    rule: 0,
};

/// Word break transitions, resolved exactly like the grapheme table: the
/// specific entry first, then the two wildcards with the lower rule number
/// deciding the boundary, then WB999.
static WB_TRANSITIONS: [WbTransition; WB_STATE_COUNT * WORD_PROPERTY_COUNT] =
    build_word_transitions();

const fn build_word_transitions() -> [WbTransition; WB_STATE_COUNT * WORD_PROPERTY_COUNT] {
    use WordProperty as P;
    type Rule = (u32, P, u32, bool, u16);
    const RULES: &[Rule] = &[
        // WB3b: break before Newline, CR, LF.
        (WB_ANY, P::Newline, WB_NEWLINE, true, 32),
        (WB_ANY, P::Cr, WB_CR, true, 32),
        (WB_ANY, P::Lf, WB_LF, true, 32),
        // WB3a: break after Newline, CR, LF.
        (WB_NEWLINE, P::Any, WB_ANY, true, 31),
        (WB_CR, P::Any, WB_ANY, true, 31),
        (WB_LF, P::Any, WB_ANY, true, 31),
        // WB3: CR x LF.
        (WB_CR, P::Lf, WB_LF, false, 30),
        // WB3d: keep horizontal whitespace together.
        (WB_ANY, P::WSegSpace, WB_WSEGSPACE, true, 9990),
        (WB_WSEGSPACE, P::WSegSpace, WB_WSEGSPACE, false, 34),
        // WB5: letters join letters.
        (WB_ANY, P::ALetter, WB_ALETTER, true, 9990),
        (WB_ANY, P::HebrewLetter, WB_HEBREW_LETTER, true, 9990),
        (WB_ALETTER, P::ALetter, WB_ALETTER, false, 50),
        (WB_ALETTER, P::HebrewLetter, WB_HEBREW_LETTER, false, 50),
        (WB_HEBREW_LETTER, P::ALetter, WB_ALETTER, false, 50),
        (WB_HEBREW_LETTER, P::HebrewLetter, WB_HEBREW_LETTER, false, 50),
        // WB7: close the letter-infix-letter bridge opened by WB6.
        (WB_WB7, P::ALetter, WB_ALETTER, false, 70),
        (WB_WB7, P::HebrewLetter, WB_HEBREW_LETTER, false, 70),
        // WB7a: Hebrew letter before a single quote.
        (WB_HEBREW_LETTER, P::SingleQuote, WB_ANY, false, 71),
        // WB7c: close the Hebrew double-quote bridge opened by WB7b.
        (WB_WB7C, P::HebrewLetter, WB_HEBREW_LETTER, false, 73),
        // WB8: digits join digits.
        (WB_ANY, P::Numeric, WB_NUMERIC, true, 9990),
        (WB_NUMERIC, P::Numeric, WB_NUMERIC, false, 80),
        // WB9: letters join digits.
        (WB_ALETTER, P::Numeric, WB_NUMERIC, false, 90),
        (WB_HEBREW_LETTER, P::Numeric, WB_NUMERIC, false, 90),
        // WB10: digits join letters.
        (WB_NUMERIC, P::ALetter, WB_ALETTER, false, 100),
        (WB_NUMERIC, P::HebrewLetter, WB_HEBREW_LETTER, false, 100),
        // WB11: close the digit-infix-digit bridge opened by WB12.
        (WB_WB11, P::Numeric, WB_NUMERIC, false, 110),
        // WB13: Katakana joins Katakana.
        (WB_ANY, P::Katakana, WB_KATAKANA, true, 9990),
        (WB_KATAKANA, P::Katakana, WB_KATAKANA, false, 130),
        // WB13a: connectors extend words.
        (WB_ANY, P::ExtendNumLet, WB_EXTEND_NUM_LET, true, 9990),
        (WB_ALETTER, P::ExtendNumLet, WB_EXTEND_NUM_LET, false, 131),
        (WB_HEBREW_LETTER, P::ExtendNumLet, WB_EXTEND_NUM_LET, false, 131),
        (WB_NUMERIC, P::ExtendNumLet, WB_EXTEND_NUM_LET, false, 131),
        (WB_KATAKANA, P::ExtendNumLet, WB_EXTEND_NUM_LET, false, 131),
        (WB_EXTEND_NUM_LET, P::ExtendNumLet, WB_EXTEND_NUM_LET, false, 131),
        // WB13b: connectors join back into words.
        (WB_EXTEND_NUM_LET, P::ALetter, WB_ALETTER, false, 132),
        (WB_EXTEND_NUM_LET, P::HebrewLetter, WB_HEBREW_LETTER, false, 132),
        (WB_EXTEND_NUM_LET, P::Numeric, WB_NUMERIC, false, 132),
        (WB_EXTEND_NUM_LET, P::Katakana, WB_KATAKANA, false, 132),
    ];

    let mut table = [WB_ABSENT; WB_STATE_COUNT * WORD_PROPERTY_COUNT];
    let mut i = 0;
    while i < RULES.len() {
        let rule = RULES[i];
        table[rule.0 as usize * WORD_PROPERTY_COUNT + rule.1 as usize] = WbTransition {
            target: rule.2,
            boundary: rule.3,
            rule: rule.4,
        };
        i += 1;
    }
    table
}

/// Advances the word machine by the code point `r`. `rest` must be the input
/// following `r`; rules WB6, WB7b, and WB12 decode further code points from
/// it without consuming them.
pub(crate) fn transition_word_break_state(
    state: WordBreakState,
    r: char,
    rest: &[u8],
) -> (WordBreakState, bool) {
    let next_property = WORD_BREAK.search(r);
    let raw = state.0;

    // WB4 ("replacing ignore rules"): Extend, Format, and ZWJ are invisible,
    // except right after a hard break where WB3a must still fire once.
    match next_property {
        WordProperty::Zwj => {
            let masked = raw as u32 & WB_STATE_MASK;
            if masked == WB_NEWLINE || masked == WB_CR || masked == WB_LF {
                return (WordBreakState((WB_ANY | WB_ZWJ_BIT) as i32), true);
            }
            if raw <= 0 {
                return (WordBreakState((WB_ANY | WB_ZWJ_BIT) as i32), false);
            }
            return (WordBreakState(raw | WB_ZWJ_BIT as i32), false);
        }
        WordProperty::Extend | WordProperty::Format => {
            let full = raw as u32;
            if full == WB_NEWLINE || full == WB_CR || full == WB_LF {
                return (WordBreakState(WB_ANY as i32), true);
            }
            if full == WB_WSEGSPACE || full == (WB_ANY | WB_ZWJ_BIT) {
                // No break, but the run no longer counts for WB3d or WB3c.
                return (WordBreakState(WB_ANY as i32), false);
            }
            if raw <= 0 {
                return (WordBreakState(WB_ANY as i32), false);
            }
            return (WordBreakState(raw), false);
        }
        WordProperty::ExtendedPictographic => {
            if raw > 0 && raw as u32 & WB_ZWJ_BIT != 0 {
                // WB3c: ZWJ x Extended_Pictographic.
                return (WordBreakState(WB_ANY as i32), false);
            }
        }
        _ => {}
    }
    let state = if raw > 0 {
        raw as u32 & !WB_ZWJ_BIT
    } else {
        0
    };

    // Table lookup with wildcard fallback.
    let specific = WB_TRANSITIONS[state as usize * WORD_PROPERTY_COUNT + next_property as usize];
    let (mut new_state, mut boundary, mut rule);
    if specific.rule > 0 {
        new_state = specific.target;
        boundary = specific.boundary;
        rule = specific.rule;
    } else {
        let any_prop = WB_TRANSITIONS[state as usize * WORD_PROPERTY_COUNT];
        let any_state =
            WB_TRANSITIONS[WB_ANY as usize * WORD_PROPERTY_COUNT + next_property as usize];
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
            // WB999: Any ÷ Any.
            new_state = WB_ANY;
            boundary = true;
            rule = 9990;
        }
    }

    // WB6, WB7b, WB12 need the property of the first non-ignored code point
    // after the candidate infix.
    let mut far_property = WordProperty::Any;
    let mut have_far = false;
    if rule > 60
        && (state == WB_ALETTER || state == WB_HEBREW_LETTER || state == WB_NUMERIC)
        && matches!(
            next_property,
            WordProperty::MidLetter
                | WordProperty::MidNumLet
                | WordProperty::SingleQuote
                | WordProperty::DoubleQuote
                | WordProperty::MidNum
        )
    {
        let mut rest = rest;
        loop {
            let (r, length) = decode_char(rest);
            if length == 0 || r == REPLACEMENT {
                break;
            }
            rest = &rest[length..];
            let prop = WORD_BREAK.search(r);
            if matches!(
                prop,
                WordProperty::Extend | WordProperty::Format | WordProperty::Zwj
            ) {
                continue;
            }
            far_property = prop;
            have_far = true;
            break;
        }
    }

    // WB6: (ALetter|HebrewLetter) x (MidLetter|MidNumLet|SingleQuote) letter.
    if rule > 60
        && (state == WB_ALETTER || state == WB_HEBREW_LETTER)
        && matches!(
            next_property,
            WordProperty::MidLetter | WordProperty::MidNumLet | WordProperty::SingleQuote
        )
        && have_far
        && matches!(
            far_property,
            WordProperty::ALetter | WordProperty::HebrewLetter
        )
    {
        return (WordBreakState(WB_WB7 as i32), false);
    }

    // WB7b: HebrewLetter x DoubleQuote HebrewLetter.
    if rule > 72
        && state == WB_HEBREW_LETTER
        && next_property == WordProperty::DoubleQuote
        && have_far
        && far_property == WordProperty::HebrewLetter
    {
        return (WordBreakState(WB_WB7C as i32), false);
    }

    // WB12: Numeric x (MidNum|MidNumLet|SingleQuote) Numeric.
    if rule > 120
        && state == WB_NUMERIC
        && matches!(
            next_property,
            WordProperty::MidNum | WordProperty::MidNumLet | WordProperty::SingleQuote
        )
        && have_far
        && far_property == WordProperty::Numeric
    {
        return (WordBreakState(WB_WB11 as i32), false);
    }

    // WB15/WB16: Regional Indicators pair up like GB12/GB13.
    if new_state == WB_ANY && next_property == WordProperty::RegionalIndicator {
        if state != WB_RI_ODD && state != WB_RI_EVEN {
            return (WordBreakState(WB_RI_ODD as i32), true);
        }
        if state == WB_RI_ODD {
            return (WordBreakState(WB_RI_EVEN as i32), false);
        }
        return (WordBreakState(WB_RI_ODD as i32), true);
    }

    (WordBreakState(new_state as i32), boundary)
}

/// Returns the first word in the byte slice `b`, the remainder of `b`, and
/// the state to pass to the next call.
///
/// Pass the default state for the first call of a scan; the concatenation of
/// all returned words reproduces `b` byte-for-byte. Empty input returns
/// empty slices and the initial state.
///
/// # Examples
///
/// ```
/// let mut rest: &[u8] = b"Hello, world!";
/// let mut state = textseg::WordBreakState::default();
/// let mut words = Vec::new();
/// while !rest.is_empty() {
///     let (word, tail, new_state) = textseg::first_word(rest, state);
///     words.push(word);
///     rest = tail;
///     state = new_state;
/// }
/// assert_eq!(
///     words,
///     [&b"Hello"[..], &b","[..], &b" "[..], &b"world"[..], &b"!"[..]]
/// );
/// ```
#[must_use]
pub fn first_word(b: &[u8], state: WordBreakState) -> (&[u8], &[u8], WordBreakState) {
    if b.is_empty() {
        return (b, b, WordBreakState::default());
    }

    let (r, mut length) = decode_char(b);
    if b.len() <= length {
        return (b, &b[b.len()..], WordBreakState(WB_ANY as i32));
    }

    let mut state = state;
    if state.0 <= 0 {
        let (s, _) = transition_word_break_state(WordBreakState(0), r, &b[length..]);
        state = s;
    }

    loop {
        let (r, l) = decode_char(&b[length..]);
        let (new_state, boundary) = transition_word_break_state(state, r, &b[length + l..]);
        state = new_state;

        if boundary {
            return (&b[..length], &b[length..], state);
        }

        length += l;
        if b.len() <= length {
            return (b, &b[b.len()..], WordBreakState(WB_ANY as i32));
        }
    }
}

/// Like [`first_word`] but for a string slice.
///
/// # Examples
///
/// ```
/// let (word, rest, _) = textseg::first_word_str("Hello, world!", Default::default());
/// assert_eq!(word, "Hello");
/// assert_eq!(rest, ", world!");
/// ```
#[must_use]
pub fn first_word_str(s: &str, state: WordBreakState) -> (&str, &str, WordBreakState) {
    let (word, _, new_state) = first_word(s.as_bytes(), state);
    let n = word.len();
    (&s[..n], &s[n..], new_state)
}

impl Config {
    /// [`first_word`]; the width configuration does not affect word
    /// boundaries, this method only mirrors the module-level surface.
    #[must_use]
    pub fn first_word<'a>(
        &self,
        b: &'a [u8],
        state: WordBreakState,
    ) -> (&'a [u8], &'a [u8], WordBreakState) {
        first_word(b, state)
    }

    /// [`first_word_str`].
    #[must_use]
    pub fn first_word_str<'a>(
        &self,
        s: &'a str,
        state: WordBreakState,
    ) -> (&'a str, &'a str, WordBreakState) {
        first_word_str(s, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = WordBreakState::default();
        while !rest.is_empty() {
            let (word, tail, new_state) = first_word_str(rest, state);
            out.push(word);
            rest = tail;
            state = new_state;
        }
        out
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            words("Hello, world!"),
            vec!["Hello", ",", " ", "world", "!"]
        );
    }

    #[test]
    fn test_empty() {
        let (word, rest, state) = first_word(b"", WordBreakState::default());
        assert!(word.is_empty());
        assert!(rest.is_empty());
        assert_eq!(state, WordBreakState::default());
    }

    #[test]
    fn test_wb6_apostrophe() {
        // MidLetter and single quotes bridge letters.
        assert_eq!(words("can't"), vec!["can't"]);
        assert_eq!(words("can:do"), vec!["can:do"]);
        // A trailing infix with no closing letter splits.
        assert_eq!(words("can'"), vec!["can", "'"]);
    }

    #[test]
    fn test_wb6_skips_ignored_characters() {
        // Format characters inside the bridge are invisible to the lookahead.
        assert_eq!(words("a:\u{00ad}b"), vec!["a:\u{00ad}b"]);
    }

    #[test]
    fn test_wb12_numeric_infix() {
        assert_eq!(words("3.14"), vec!["3.14"]);
        assert_eq!(words("1,000,000"), vec!["1,000,000"]);
        assert_eq!(words("1, 2"), vec!["1", ",", " ", "2"]);
    }

    #[test]
    fn test_wb7b_hebrew_double_quote() {
        assert_eq!(words("א\"א"), vec!["א\"א"]);
        assert_eq!(words("א\"!"), vec!["א", "\"", "!"]);
    }

    #[test]
    fn test_wb3_newlines() {
        assert_eq!(words("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(words("a\n\nb"), vec!["a", "\n", "\n", "b"]);
    }

    #[test]
    fn test_wb3c_zwj_pictographic() {
        // ZWJ bridges into a pictograph without a break.
        assert_eq!(words("\u{200d}☝🏼").len(), 1);
    }

    #[test]
    fn test_wb13_katakana() {
        assert_eq!(words("カタカナ"), vec!["カタカナ"]);
        assert_eq!(words("カタ カナ").len(), 3);
    }

    #[test]
    fn test_wb13a_extend_num_let() {
        assert_eq!(words("snake_case_42"), vec!["snake_case_42"]);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        assert_eq!(words("🇩🇪🇫🇷").len(), 2);
        assert_eq!(words("🇩🇪🇫").len(), 2);
    }

    #[test]
    fn test_numbers_and_letters_join() {
        assert_eq!(words("x86_64"), vec!["x86_64"]);
        assert_eq!(words("3a"), vec!["3a"]);
        assert_eq!(words("a3"), vec!["a3"]);
    }
}

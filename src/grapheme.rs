//! Grapheme cluster segmentation (UAX #29, rules GB1-GB999).
//!
//! The machine is a dense transition table keyed by `(state, property)` with
//! wildcard fallback rows, plus an orthogonal sub-state for rule GB9c
//! (Indic conjunct breaks) kept in the upper bits of the state. Rule GB9c and
//! the Regional Indicator pairing of GB12/GB13 are the only parts that need
//! memory beyond the previous code point's property.

use crate::config::{default_config, Config};
use crate::decode::decode_char;
use crate::properties::{GraphemeProperty, IncbProperty, GRAPHEME_PROPERTY_COUNT, VS15, VS16};
use crate::tables::{GRAPHEME_BREAK, INDIC_CONJUNCT_BREAK};
use crate::width::rune_width;

/// Opaque state of the grapheme cluster segmenter.
///
/// The default value is the initial state; pass the state returned by the
/// previous call to continue a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphemeBreakState(pub(crate) i32);

// Machine states. Zero is reserved for the initial state, which occupies an
// empty row in the transition table so that only the property wildcards
// apply to the first code point.
pub(crate) const GR_ANY: u32 = 1;
const GR_CR: u32 = 2;
const GR_CONTROL_LF: u32 = 3;
const GR_L: u32 = 4;
const GR_LVV: u32 = 5;
const GR_LVTT: u32 = 6;
const GR_PREPEND: u32 = 7;
const GR_EXT_PIC: u32 = 8;
const GR_EXT_PIC_ZWJ: u32 = 9;
const GR_RI_ODD: u32 = 10;
const GR_RI_EVEN: u32 = 11;
const GR_STATE_COUNT: usize = 12;

const GR_STATE_MASK: u32 = 0x0f;
const GR_INCB_MASK: u32 = 0x30;
// GB9c sub-states, orthogonal to the machine state.
const GR_INCB_CONSONANT: u32 = 0x10; // seen InCB=Consonant
const GR_INCB_LINKER: u32 = 0x20; // seen InCB=Consonant then InCB=Linker

// The grapheme property is packed into the low bits of the public state so
// the next call can resume without a fresh dictionary lookup.
const SHIFT_GRAPHEME_PROP: u32 = 6;

const GRAPHEME_PROPERTIES: [GraphemeProperty; GRAPHEME_PROPERTY_COUNT] = [
    GraphemeProperty::Any,
    GraphemeProperty::Cr,
    GraphemeProperty::Lf,
    GraphemeProperty::Control,
    GraphemeProperty::Extend,
    GraphemeProperty::Zwj,
    GraphemeProperty::RegionalIndicator,
    GraphemeProperty::Prepend,
    GraphemeProperty::SpacingMark,
    GraphemeProperty::L,
    GraphemeProperty::V,
    GraphemeProperty::T,
    GraphemeProperty::Lv,
    GraphemeProperty::Lvt,
    GraphemeProperty::ExtendedPictographic,
];

pub(crate) fn new_grapheme_state(state: u32, prop: GraphemeProperty) -> GraphemeBreakState {
    GraphemeBreakState((prop as i32) << SHIFT_GRAPHEME_PROP | state as i32)
}

pub(crate) fn unpack_grapheme_state(state: GraphemeBreakState) -> (u32, GraphemeProperty) {
    let raw = state.0 as u32;
    let prop = grapheme_property_from_bits(raw >> SHIFT_GRAPHEME_PROP);
    (raw & (GR_STATE_MASK | GR_INCB_MASK), prop)
}

/// Recovers a grapheme property from its packed-state representation.
pub(crate) fn grapheme_property_from_bits(bits: u32) -> GraphemeProperty {
    GRAPHEME_PROPERTIES
        .get(bits as usize)
        .copied()
        .unwrap_or_default()
}

/// One cell of the transition table. A rule number of zero marks an absent
/// entry; real rules use the UAX #29 numbering times ten (GB9a = 91), with
/// 9990 for GB999.
#[derive(Clone, Copy)]
struct GrTransition {
    target: u32,
    boundary: bool,
    rule: u16,
}

const GR_ABSENT: GrTransition = GrTransition {
    target: GR_ANY,
    boundary: true,
    rule: 0,
};

/// The grapheme cluster transitions, one row per state, one column per
/// property. Column zero of each row is the "any property" wildcard; the
/// `GR_ANY` row doubles as the "any state" wildcard.
///
/// Lookup order: the specific entry wins; otherwise, of the two wildcard
/// entries, the new state is taken from the state wildcard and the boundary
/// from whichever has the lower rule number (ties prefer the state
/// wildcard). With no entry at all, GB999 applies: break, state `GR_ANY`.
static GR_TRANSITIONS: [GrTransition; GR_STATE_COUNT * GRAPHEME_PROPERTY_COUNT] =
    build_grapheme_transitions();

const fn build_grapheme_transitions(
) -> [GrTransition; GR_STATE_COUNT * GRAPHEME_PROPERTY_COUNT] {
    use GraphemeProperty as P;
    type Rule = (u32, P, u32, bool, u16);
    const RULES: &[Rule] = &[
        // GB5: break before Control, CR, LF.
        (GR_ANY, P::Cr, GR_CR, true, 50),
        (GR_ANY, P::Lf, GR_CONTROL_LF, true, 50),
        (GR_ANY, P::Control, GR_CONTROL_LF, true, 50),
        // GB4: break after Control, CR, LF.
        (GR_CR, P::Any, GR_ANY, true, 40),
        (GR_CONTROL_LF, P::Any, GR_ANY, true, 40),
        // GB3: CR x LF.
        (GR_CR, P::Lf, GR_CONTROL_LF, false, 30),
        // GB6: Hangul L x (L|V|LV|LVT).
        (GR_ANY, P::L, GR_L, true, 9990),
        (GR_L, P::L, GR_L, false, 60),
        (GR_L, P::V, GR_LVV, false, 60),
        (GR_L, P::Lv, GR_LVV, false, 60),
        (GR_L, P::Lvt, GR_LVTT, false, 60),
        // GB7: (LV|V) x (V|T).
        (GR_ANY, P::Lv, GR_LVV, true, 9990),
        (GR_ANY, P::V, GR_LVV, true, 9990),
        (GR_LVV, P::V, GR_LVV, false, 70),
        (GR_LVV, P::T, GR_LVTT, false, 70),
        // GB8: (LVT|T) x T.
        (GR_ANY, P::Lvt, GR_LVTT, true, 9990),
        (GR_ANY, P::T, GR_LVTT, true, 9990),
        (GR_LVTT, P::T, GR_LVTT, false, 80),
        // GB9: x (Extend|ZWJ).
        (GR_ANY, P::Extend, GR_ANY, false, 90),
        (GR_ANY, P::Zwj, GR_ANY, false, 90),
        // GB9a: x SpacingMark.
        (GR_ANY, P::SpacingMark, GR_ANY, false, 91),
        // GB9b: Prepend x.
        (GR_ANY, P::Prepend, GR_PREPEND, true, 9990),
        (GR_PREPEND, P::Any, GR_ANY, false, 92),
        // GB11: ExtPict Extend* ZWJ x ExtPict.
        (GR_ANY, P::ExtendedPictographic, GR_EXT_PIC, true, 9990),
        (GR_EXT_PIC, P::Extend, GR_EXT_PIC, false, 110),
        (GR_EXT_PIC, P::Zwj, GR_EXT_PIC_ZWJ, false, 110),
        (GR_EXT_PIC_ZWJ, P::ExtendedPictographic, GR_EXT_PIC, false, 110),
        // GB12/GB13: Regional Indicator pairs.
        (GR_ANY, P::RegionalIndicator, GR_RI_ODD, true, 9990),
        (GR_RI_ODD, P::RegionalIndicator, GR_RI_EVEN, false, 120),
        (GR_RI_EVEN, P::RegionalIndicator, GR_RI_ODD, true, 120),
    ];

    let mut table = [GR_ABSENT; GR_STATE_COUNT * GRAPHEME_PROPERTY_COUNT];
    let mut i = 0;
    while i < RULES.len() {
        let rule = RULES[i];
        table[rule.0 as usize * GRAPHEME_PROPERTY_COUNT + rule.1 as usize] = GrTransition {
            target: rule.2,
            boundary: rule.3,
            rule: rule.4,
        };
        i += 1;
    }
    table
}

/// Advances the grapheme machine by the code point `r`, returning the new
/// state, the code point's grapheme property, and whether a cluster boundary
/// lies between the previous code point and `r`.
pub(crate) fn transition_grapheme_state(
    state: u32,
    r: char,
) -> (u32, GraphemeProperty, bool) {
    let prop = GRAPHEME_BREAK.search(r);
    let incb = INDIC_CONJUNCT_BREAK.search(r);

    let gb9c = state & GR_INCB_MASK;
    let state = state & GR_STATE_MASK;

    let specific = GR_TRANSITIONS[state as usize * GRAPHEME_PROPERTY_COUNT + prop as usize];
    let (mut new_state, mut boundary, mut rule);
    if specific.rule > 0 {
        new_state = specific.target;
        boundary = specific.boundary;
        rule = specific.rule;
    } else {
        let any_prop = GR_TRANSITIONS[state as usize * GRAPHEME_PROPERTY_COUNT];
        let any_state =
            GR_TRANSITIONS[GR_ANY as usize * GRAPHEME_PROPERTY_COUNT + prop as usize];
        if any_prop.rule > 0 && any_state.rule > 0 {
            // Both wildcards apply: state from the property column, boundary
            // from the lower-numbered rule.
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
            // GB999: Any ÷ Any.
            new_state = GR_ANY;
            boundary = true;
            rule = 9990;
        }
    }

    // GB9c: Consonant [Extend Linker]* Linker [Extend Linker]* x Consonant.
    // Only overrides decisions made by GB9c-or-later rules.
    if rule >= 93 && gb9c == GR_INCB_LINKER && incb == IncbProperty::Consonant {
        boundary = false;
    }

    let mut new_gb9c = 0;
    match gb9c {
        GR_INCB_CONSONANT => match incb {
            IncbProperty::Linker => new_gb9c = GR_INCB_LINKER,
            IncbProperty::Extend => new_gb9c = GR_INCB_CONSONANT,
            _ => {}
        },
        GR_INCB_LINKER => {
            if matches!(incb, IncbProperty::Linker | IncbProperty::Extend) {
                new_gb9c = GR_INCB_LINKER;
            }
        }
        _ => {}
    }
    if incb == IncbProperty::Consonant {
        new_gb9c = GR_INCB_CONSONANT;
    }

    (new_state | new_gb9c, prop, boundary)
}

/// Returns the first grapheme cluster in the byte slice `b`, the remainder
/// of `b`, the cluster's monospace width, and the state to pass to the next
/// call. Uses the process-wide default width configuration.
///
/// Pass the default state for the first call of a scan; the concatenation of
/// all returned clusters reproduces `b` byte-for-byte. Empty input returns
/// empty slices, width zero, and the initial state.
///
/// # Examples
///
/// ```
/// let mut rest: &[u8] = "🇩🇪🏳️\u{200d}🌈".as_bytes();
/// let mut state = textseg::GraphemeBreakState::default();
/// let mut clusters = Vec::new();
/// while !rest.is_empty() {
///     let (cluster, tail, _, new_state) = textseg::first_grapheme_cluster(rest, state);
///     clusters.push(cluster);
///     rest = tail;
///     state = new_state;
/// }
/// assert_eq!(clusters.len(), 2);
/// ```
#[must_use]
pub fn first_grapheme_cluster(
    b: &[u8],
    state: GraphemeBreakState,
) -> (&[u8], &[u8], usize, GraphemeBreakState) {
    default_config().first_grapheme_cluster(b, state)
}

/// Like [`first_grapheme_cluster`] but for a string slice.
///
/// # Examples
///
/// ```
/// let (cluster, rest, width, _) =
///     textseg::first_grapheme_cluster_str("möp", textseg::GraphemeBreakState::default());
/// assert_eq!(cluster, "m");
/// assert_eq!(rest, "öp");
/// assert_eq!(width, 1);
/// ```
#[must_use]
pub fn first_grapheme_cluster_str(
    s: &str,
    state: GraphemeBreakState,
) -> (&str, &str, usize, GraphemeBreakState) {
    default_config().first_grapheme_cluster_str(s, state)
}

/// Returns the number of grapheme clusters (user-perceived characters) in
/// the byte slice.
///
/// # Examples
///
/// ```
/// assert_eq!(textseg::grapheme_cluster_count("möp".as_bytes()), 3);
/// ```
#[must_use]
pub fn grapheme_cluster_count(b: &[u8]) -> usize {
    default_config().grapheme_cluster_count(b)
}

/// Like [`grapheme_cluster_count`] but for a string slice.
#[must_use]
pub fn grapheme_cluster_count_str(s: &str) -> usize {
    default_config().grapheme_cluster_count_str(s)
}

/// Reverses a byte slice cluster by cluster, leaving the bytes inside each
/// grapheme cluster in place.
#[must_use]
pub fn reverse(b: &[u8]) -> Vec<u8> {
    default_config().reverse(b)
}

/// Reverses a string while preserving grapheme clusters.
///
/// # Examples
///
/// ```
/// assert_eq!(textseg::reverse_string("möp"), "pöm");
/// ```
#[must_use]
pub fn reverse_string(s: &str) -> String {
    default_config().reverse_string(s)
}

impl Config {
    /// [`first_grapheme_cluster`] under this width configuration.
    #[must_use]
    pub fn first_grapheme_cluster<'a>(
        &self,
        b: &'a [u8],
        state: GraphemeBreakState,
    ) -> (&'a [u8], &'a [u8], usize, GraphemeBreakState) {
        first_grapheme_cluster_impl(*self, b, state)
    }

    /// [`first_grapheme_cluster_str`] under this width configuration.
    #[must_use]
    pub fn first_grapheme_cluster_str<'a>(
        &self,
        s: &'a str,
        state: GraphemeBreakState,
    ) -> (&'a str, &'a str, usize, GraphemeBreakState) {
        let (cluster, _, width, new_state) = first_grapheme_cluster_impl(*self, s.as_bytes(), state);
        let n = cluster.len();
        (&s[..n], &s[n..], width, new_state)
    }

    /// [`grapheme_cluster_count`] under this width configuration.
    #[must_use]
    pub fn grapheme_cluster_count(&self, b: &[u8]) -> usize {
        let mut b = b;
        let mut n = 0;
        let mut state = GraphemeBreakState::default();
        while !b.is_empty() {
            let (_, rest, _, new_state) = self.first_grapheme_cluster(b, state);
            b = rest;
            state = new_state;
            n += 1;
        }
        n
    }

    /// [`grapheme_cluster_count_str`] under this width configuration.
    #[must_use]
    pub fn grapheme_cluster_count_str(&self, s: &str) -> usize {
        self.grapheme_cluster_count(s.as_bytes())
    }

    /// [`reverse`] under this width configuration.
    #[must_use]
    pub fn reverse(&self, b: &[u8]) -> Vec<u8> {
        let mut reversed = vec![0u8; b.len()];
        let mut rest = b;
        let mut index = b.len();
        let mut state = GraphemeBreakState::default();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = self.first_grapheme_cluster(rest, state);
            index -= cluster.len();
            reversed[index..index + cluster.len()].copy_from_slice(cluster);
            rest = tail;
            state = new_state;
        }
        reversed
    }

    /// [`reverse_string`] under this width configuration.
    #[must_use]
    pub fn reverse_string(&self, s: &str) -> String {
        let mut clusters = Vec::new();
        let mut rest = s;
        let mut state = GraphemeBreakState::default();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = self.first_grapheme_cluster_str(rest, state);
            clusters.push(cluster);
            rest = tail;
            state = new_state;
        }
        clusters.iter().rev().copied().collect()
    }
}

fn first_grapheme_cluster_impl<'a>(
    cfg: Config,
    b: &'a [u8],
    state: GraphemeBreakState,
) -> (&'a [u8], &'a [u8], usize, GraphemeBreakState) {
    if b.is_empty() {
        return (b, b, 0, GraphemeBreakState::default());
    }

    let (r, mut length) = decode_char(b);
    if b.len() <= length {
        // The whole input is one code point; nothing left to transition over.
        let prop = if state.0 <= 0 {
            GRAPHEME_BREAK.search(r)
        } else {
            unpack_grapheme_state(state).1
        };
        return (
            b,
            &b[b.len()..],
            rune_width(cfg, r, prop),
            new_grapheme_state(GR_ANY, prop),
        );
    }

    let (mut my_state, first_prop) = if state.0 <= 0 {
        let (s, p, _) = transition_grapheme_state(0, r);
        (s, p)
    } else {
        unpack_grapheme_state(state)
    };
    let mut width = rune_width(cfg, r, first_prop);

    // Transition until a boundary is found.
    loop {
        let (r, l) = decode_char(&b[length..]);
        let (new_state, prop, boundary) = transition_grapheme_state(my_state, r);
        my_state = new_state;

        if boundary {
            return (
                &b[..length],
                &b[length..],
                width,
                new_grapheme_state(my_state, prop),
            );
        }

        // Width aggregation: Regional Indicator and Hangul L runs collapse to
        // the leading cell; a pictographic cluster keeps the width of its
        // base, overridden by an interior variation selector.
        if first_prop == GraphemeProperty::ExtendedPictographic {
            if r == VS15 {
                width = 1;
            } else if r == VS16 {
                width = 2;
            }
        } else if first_prop != GraphemeProperty::RegionalIndicator
            && first_prop != GraphemeProperty::L
        {
            width += rune_width(cfg, r, prop);
        }

        length += l;
        if b.len() <= length {
            return (b, &b[b.len()..], width, new_grapheme_state(GR_ANY, prop));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(s: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = GraphemeBreakState::default();
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = first_grapheme_cluster_str(rest, state);
            out.push(cluster);
            rest = tail;
            state = new_state;
        }
        out
    }

    #[test]
    fn test_empty() {
        let (cluster, rest, width, state) =
            first_grapheme_cluster(b"", GraphemeBreakState::default());
        assert!(cluster.is_empty());
        assert!(rest.is_empty());
        assert_eq!(width, 0);
        assert_eq!(state, GraphemeBreakState::default());
    }

    #[test]
    fn test_ascii() {
        assert_eq!(clusters("basic"), vec!["b", "a", "s", "i", "c"]);
    }

    #[test]
    fn test_combining_mark() {
        assert_eq!(clusters("möp"), vec!["m", "o\u{0308}", "p"]);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(clusters("\r\n"), vec!["\r\n"]);
        assert_eq!(clusters("\n\n"), vec!["\n", "\n"]);
        assert_eq!(clusters("\r\n\u{fe0e}"), vec!["\r\n", "\u{fe0e}"]);
    }

    #[test]
    fn test_hangul_jamo() {
        // L V T form a single syllable cluster.
        assert_eq!(clusters("\u{1105}\u{116c}\u{11ab}").len(), 1);
        assert_eq!(clusters("*\u{1105}\u{116c}\u{11ab}*").len(), 3);
    }

    #[test]
    fn test_prepend() {
        // U+070F SYRIAC ABBREVIATION MARK attaches to the following letter.
        assert_eq!(
            clusters("\u{0710}\u{070f}\u{0712}\u{0713}\u{0715}"),
            vec!["\u{0710}", "\u{070f}\u{0712}", "\u{0713}", "\u{0715}"]
        );
    }

    #[test]
    fn test_thai_spacing_mark() {
        // U+0E33 SARA AM is a SpacingMark and joins the previous cluster.
        assert_eq!(clusters("\u{0e33}"), vec!["\u{0e33}"]);
        assert_eq!(clusters("\u{0e33}\u{0e33}").len(), 1);
        assert_eq!(
            clusters("\u{0e2a}\u{0e23}\u{0e30}\u{0e2d}\u{0e33}"),
            vec!["\u{0e2a}", "\u{0e23}", "\u{0e30}", "\u{0e2d}\u{0e33}"]
        );
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        assert_eq!(clusters("🏳️\u{200d}🌈").len(), 1);
        assert_eq!(clusters("👩\u{200d}❤️\u{200d}💋\u{200d}👩").len(), 1);
        assert_eq!(clusters("*👩\u{200d}❤️\u{200d}💋\u{200d}👩*").len(), 3);
        assert_eq!(clusters("🏋🏽\u{200d}♀️").len(), 1);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        assert_eq!(clusters("🇩🇪").len(), 1);
        // Three RIs split after the first pair.
        assert_eq!(clusters("🇩🇪🇫").len(), 2);
        assert_eq!(clusters("🇩🇪🇫🇷").len(), 2);
    }

    #[test]
    fn test_indic_conjunct_break() {
        // DEVANAGARI KA + VIRAMA + SSA stays one cluster under GB9c.
        assert_eq!(clusters("\u{0915}\u{094d}\u{0937}").len(), 1);
        // Without the linker the consonants split.
        assert_eq!(clusters("\u{0915}\u{0937}").len(), 2);
        // Linker state survives an InCB extend in between.
        assert_eq!(clusters("\u{0915}\u{094d}\u{0300}\u{0937}").len(), 1);
    }

    #[test]
    fn test_cluster_widths() {
        let (_, _, width, _) =
            first_grapheme_cluster_str("🇩🇪!", GraphemeBreakState::default());
        assert_eq!(width, 2);
        let (_, _, width, _) =
            first_grapheme_cluster_str("🏳️\u{200d}🌈!", GraphemeBreakState::default());
        assert_eq!(width, 2);
        // VS15 forces text presentation width.
        let (_, _, width, _) =
            first_grapheme_cluster_str("⚠\u{fe0e}!", GraphemeBreakState::default());
        assert_eq!(width, 1);
    }

    #[test]
    fn test_count() {
        assert_eq!(grapheme_cluster_count_str(""), 0);
        assert_eq!(grapheme_cluster_count_str("möp"), 3);
        assert_eq!(grapheme_cluster_count_str("🇩🇪🏳️\u{200d}🌈"), 2);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string("möp"), "pöm");
        assert_eq!(reverse_string("🇩🇪🏳️\u{200d}🌈"), "🏳️\u{200d}🌈🇩🇪");
        assert_eq!(reverse(b"ab"), b"ba");
    }

    #[test]
    fn test_invalid_utf8_makes_progress() {
        let bad = [0x41, 0xff, 0xfe, 0x42];
        let mut rest: &[u8] = &bad;
        let mut state = GraphemeBreakState::default();
        let mut total = 0;
        while !rest.is_empty() {
            let (cluster, tail, _, new_state) = first_grapheme_cluster(rest, state);
            assert!(!cluster.is_empty());
            total += cluster.len();
            rest = tail;
            state = new_state;
        }
        assert_eq!(total, bad.len());
    }
}

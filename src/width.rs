//! Monospace display width calculation.
//!
//! Widths are defined per code point and aggregated per grapheme cluster by
//! the segmenters. A code point occupies one cell unless one of the rules
//! below applies, evaluated in order:
//!
//! - Control, CR, LF, Extend, ZWJ: width 0
//! - Regional Indicator: width 2
//! - Extended Pictographic: width 2 with emoji presentation, otherwise 1
//! - U+2E3A TWO-EM DASH: width 3; U+2E3B THREE-EM DASH: width 4
//! - East-Asian Wide and Fullwidth: width 2; Ambiguous: width 2 only when
//!   the configuration enables East-Asian width handling
//!
//! With both `east_asian_width` and `wide_emoji` enabled, every emoji code
//! point is forced to two cells before any of the rules above apply.

use crate::config::{default_config, Config};
use crate::grapheme::GraphemeBreakState;
use crate::properties::{EastAsianWidth, EmojiProperty, GraphemeProperty};
use crate::tables::{EAST_ASIAN_WIDTH, EMOJI_PRESENTATION};

/// Width in cells of the code point `r` whose grapheme property is `prop`.
pub(crate) fn rune_width(cfg: Config, r: char, prop: GraphemeProperty) -> usize {
    if cfg.east_asian_width
        && cfg.wide_emoji
        && (prop == GraphemeProperty::ExtendedPictographic
            || EMOJI_PRESENTATION.search(r) != EmojiProperty::None)
    {
        return 2;
    }

    match prop {
        GraphemeProperty::Control
        | GraphemeProperty::Cr
        | GraphemeProperty::Lf
        | GraphemeProperty::Extend
        | GraphemeProperty::Zwj => return 0,
        GraphemeProperty::RegionalIndicator => return 2,
        GraphemeProperty::ExtendedPictographic => {
            if EMOJI_PRESENTATION.search(r) == EmojiProperty::EmojiPresentation {
                return 2;
            }
            return 1;
        }
        _ => {}
    }

    match r {
        '\u{2e3a}' => return 3, // TWO-EM DASH
        '\u{2e3b}' => return 4, // THREE-EM DASH
        _ => {}
    }

    match EAST_ASIAN_WIDTH.search(r) {
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
        EastAsianWidth::Ambiguous if cfg.east_asian_width => 2,
        _ => 1,
    }
}

/// Returns the monospace width of `s`: the number of equally sized cells the
/// string occupies, using the process-wide default configuration.
///
/// # Examples
///
/// ```
/// assert_eq!(textseg::string_width("Hello, 世界"), 11);
/// ```
#[must_use]
pub fn string_width(s: &str) -> usize {
    default_config().string_width(s)
}

/// Like [`string_width`] but for a UTF-8 byte slice.
#[must_use]
pub fn width(b: &[u8]) -> usize {
    default_config().width(b)
}

impl Config {
    /// Returns the monospace width of `s` under this configuration.
    #[must_use]
    pub fn string_width(&self, s: &str) -> usize {
        let mut s = s;
        let mut total = 0;
        let mut state = GraphemeBreakState::default();
        while !s.is_empty() {
            let (_, rest, w, new_state) = self.first_grapheme_cluster_str(s, state);
            total += w;
            s = rest;
            state = new_state;
        }
        total
    }

    /// Like [`Config::string_width`] but for a UTF-8 byte slice.
    #[must_use]
    pub fn width(&self, b: &[u8]) -> usize {
        let mut b = b;
        let mut total = 0;
        let mut state = GraphemeBreakState::default();
        while !b.is_empty() {
            let (_, rest, w, new_state) = self.first_grapheme_cluster(b, state);
            total += w;
            b = rest;
            state = new_state;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(string_width("世界"), 4);
        assert_eq!(string_width("Hello, 世界"), 11);
    }

    #[test]
    fn test_control_width() {
        assert_eq!(string_width("\r\n"), 0);
        assert_eq!(string_width("a\u{0308}"), 1);
    }

    #[test]
    fn test_em_dashes() {
        assert_eq!(string_width("\u{2e3a}"), 3);
        assert_eq!(string_width("\u{2e3b}"), 4);
    }

    #[test]
    fn test_emoji_presentation() {
        // Grinning face has Emoji_Presentation=Yes.
        assert_eq!(string_width("\u{1f600}"), 2);
        // Shamrock defaults to text presentation.
        assert_eq!(string_width("\u{2618}"), 1);
        // ...unless VS16 asks for emoji presentation.
        assert_eq!(string_width("\u{2618}\u{fe0f}"), 2);
    }

    #[test]
    fn test_regional_indicator_pair() {
        assert_eq!(string_width("🇩🇪"), 2);
    }

    #[test]
    fn test_ambiguous_width_configuration() {
        // Circled digit one is East-Asian ambiguous.
        let narrow = Config::new(false, false);
        let wide = Config::new(true, false);
        assert_eq!(narrow.string_width("\u{2460}"), 1);
        assert_eq!(wide.string_width("\u{2460}"), 2);
    }

    #[test]
    fn test_wide_emoji_override() {
        let cfg = Config::new(true, true);
        // Text-presentation pictograph is forced wide.
        assert_eq!(cfg.string_width("\u{2618}"), 2);
        assert_eq!(Config::new(false, false).string_width("\u{2618}"), 1);
    }
}

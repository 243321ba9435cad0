//! Generated property dictionaries, bound to Unicode version 15.1.0.
//!
//! Each table is a sorted array of `(lo, hi, value)` code point ranges
//! queried through [`Dictionary::search`](crate::properties::Dictionary).
//! The files are emitted by the out-of-tree `gen_properties` generator from
//! the Unicode character database and are replaced wholesale on a version
//! upgrade; nothing in here is edited by hand.

mod east_asian;
mod emoji;
mod grapheme;
mod incb;
mod line;
mod sentence;
mod word;

pub(crate) use east_asian::EAST_ASIAN_WIDTH;
pub(crate) use emoji::EMOJI_PRESENTATION;
pub(crate) use grapheme::GRAPHEME_BREAK;
pub(crate) use incb::INDIC_CONJUNCT_BREAK;
pub(crate) use line::LINE_BREAK;
pub(crate) use sentence::SENTENCE_BREAK;
pub(crate) use word::WORD_BREAK;

//! `textseg` - Unicode text segmentation and monospace widths
//!
//! textseg splits UTF-8 text into user-perceived characters (grapheme
//! clusters), words, sentences, and line-breaking opportunities following
//! Unicode Standard Annex #29 and Annex #14 for Unicode 15.1.0, and computes
//! the monospace display width of text for terminal rendering.
//!
//! # How This Crate Fits In
//!
//! This is a single-crate library with no runtime dependencies on other
//! Unicode crates: the segmentation automata and the generated property
//! tables live here. Terminal renderers, editors, and layout engines build
//! on the primitives; nothing here draws, allocates buffers, or touches a
//! terminal.
//!
//! # Architecture At A Glance
//!
//! - `properties` / `tables`: code point property enumerations and the
//!   generated range dictionaries they are looked up in
//! - `grapheme` / `word` / `sentence` / `line`: the four segmentation state
//!   machines and their `first_*` primitives
//! - `step`: all four machines run in lockstep over one scan, one grapheme
//!   cluster per call
//! - `width`: per-code-point and per-string monospace widths
//! - `config`: East-Asian width switches, detected once from the
//!   environment
//! - `iter`: the [`Graphemes`] convenience iterator
//! - `decode`: forgiving UTF-8 decoding shared by every scanner
//!
//! # Data Flow
//!
//! ```text
//! input bytes -> decode one code point -> property lookup(s)
//!     -> transition function(s) -> boundary test -> emit segment
//! ```
//!
//! Every operation is a pure function over an input slice and an opaque
//! state value: pass the default state to start a scan and thread the
//! returned state through subsequent calls. No operation allocates on the
//! hot path, and the concatenation of the returned segments always equals
//! the input byte-for-byte, even for malformed UTF-8.
//!
//! # Example
//!
//! ```
//! let mut rest = "Hello, 世界!";
//! let mut state = textseg::GraphemeBreakState::default();
//! let mut columns = 0;
//! while !rest.is_empty() {
//!     let (_, tail, width, new_state) =
//!         textseg::first_grapheme_cluster_str(rest, state);
//!     columns += width;
//!     rest = tail;
//!     state = new_state;
//! }
//! assert_eq!(columns, 12);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (Windows console FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional state bit packing casts
#![allow(clippy::cast_sign_loss)] // States are non-negative when unpacked
#![allow(clippy::cast_possible_wrap)] // Packed states fit their integer types
#![allow(clippy::module_name_repetitions)] // Allow GraphemeBreakState etc.
#![allow(clippy::doc_markdown)] // Allow UAX and rule names without backticks
#![allow(clippy::too_many_lines)] // Transition tables are long by nature
#![allow(clippy::match_same_arms)] // Rule tables keep one arm per rule
#![allow(clippy::collapsible_if)] // Side conditions read better unfolded
#![allow(clippy::nonminimal_bool)] // Rule conditions mirror their spec text

mod config;
mod decode;
mod grapheme;
mod iter;
mod line;
mod properties;
mod sentence;
mod step;
mod tables;
mod width;
mod word;

pub use config::{default_config, Config, EASTASIAN_ENV};
pub use grapheme::{
    first_grapheme_cluster, first_grapheme_cluster_str, grapheme_cluster_count,
    grapheme_cluster_count_str, reverse, reverse_string, GraphemeBreakState,
};
pub use iter::Graphemes;
pub use line::{
    first_line_segment, first_line_segment_str, has_trailing_line_break,
    has_trailing_line_break_str, LineBreak, LineBreakState,
};
pub use sentence::{first_sentence, first_sentence_str, SentenceBreakState};
pub use step::{step, step_str, Boundaries, StepState};
pub use width::{string_width, width};
pub use word::{first_word, first_word_str, WordBreakState};

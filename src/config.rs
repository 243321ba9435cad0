//! Width configuration and its one-time detection from the environment.
//!
//! Two switches affect monospace widths: whether East-Asian "ambiguous" code
//! points render as two cells, and whether emoji are forced wide regardless
//! of their presentation property. Segmentation boundaries never depend on
//! either switch; only widths do (with the exception of LB30's East-Asian
//! parenthesis check, which uses the Unicode data directly, not this
//! configuration).
//!
//! The process-wide default is detected once, from `TEXTSEG_EASTASIAN` and
//! the locale (POSIX) or console output code page (Windows), and is then
//! immutable and freely shared across threads.

use std::sync::OnceLock;

use tracing::debug;

/// Environment variable overriding East-Asian width detection: `"1"` forces
/// it on, `"0"` forces it off, anything else defers to the platform check.
pub const EASTASIAN_ENV: &str = "TEXTSEG_EASTASIAN";

/// Width configuration for the segmentation and width operations.
///
/// The [`Default`] value has both switches off, which matches most terminals.
/// Use [`Config::detect`] for a value derived from the environment, or
/// [`default_config`] for the process-wide detected instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Render East-Asian "ambiguous" code points as two cells.
    pub east_asian_width: bool,
    /// Together with `east_asian_width`, force every emoji code point to two
    /// cells regardless of its emoji-presentation property.
    pub wide_emoji: bool,
}

impl Config {
    /// Creates a configuration with explicit switches.
    #[must_use]
    pub const fn new(east_asian_width: bool, wide_emoji: bool) -> Self {
        Self {
            east_asian_width,
            wide_emoji,
        }
    }

    /// Detects a configuration from the environment.
    ///
    /// `TEXTSEG_EASTASIAN=1` forces East-Asian width handling on, `=0` forces
    /// it off; any other value falls back to a platform check (CJK locale on
    /// POSIX, CJK console code page on Windows). A failed platform check is
    /// treated as "not East-Asian" and never panics. `wide_emoji` always
    /// starts out false; it can only be enabled explicitly.
    #[must_use]
    pub fn detect() -> Self {
        let east_asian_width = match std::env::var(EASTASIAN_ENV).as_deref() {
            Ok("1") => {
                debug!(east_asian = true, source = "env", "width configuration");
                true
            }
            Ok("0") => {
                debug!(east_asian = false, source = "env", "width configuration");
                false
            }
            _ => {
                let detected = platform_east_asian();
                debug!(
                    east_asian = detected,
                    source = "platform",
                    "width configuration"
                );
                detected
            }
        };
        Self {
            east_asian_width,
            wide_emoji: false,
        }
    }
}

/// Returns the process-wide default configuration, detecting it on first use.
///
/// Detection runs at most once; every later call observes the same value.
/// All module-level convenience functions use this configuration.
#[must_use]
pub fn default_config() -> Config {
    static DEFAULT: OnceLock<Config> = OnceLock::new();
    *DEFAULT.get_or_init(Config::detect)
}

#[cfg(not(windows))]
fn platform_east_asian() -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default();
    if locale == "POSIX" || locale == "C" {
        return false;
    }
    // C.UTF-8 and friends are byte-oriented C locales, not CJK.
    if locale.len() > 1 && locale.starts_with('C') {
        let second = locale.as_bytes()[1];
        if second == b'.' || second == b'-' {
            return false;
        }
    }
    is_east_asian_locale(&locale)
}

#[cfg(windows)]
fn platform_east_asian() -> bool {
    use windows_sys::Win32::System::Console::GetConsoleOutputCP;

    // SAFETY: GetConsoleOutputCP takes no arguments and only reads console
    // state; a zero return means the call failed.
    #[allow(unsafe_code)]
    let cp = unsafe { GetConsoleOutputCP() };
    matches!(cp, 932 | 51932 | 936 | 949 | 950)
}

/// Reports whether a POSIX locale string selects a CJK environment.
///
/// The encoding part of `lang_COUNTRY.ENCODING[@modifier]` is compared
/// against the common CJK charsets; a `@cjk_narrow` modifier always answers
/// no. A CJK charset only counts when the language tag is `ja`, `ko`, or
/// `zh`.
#[cfg(not(windows))]
fn is_east_asian_locale(locale: &str) -> bool {
    let mut charset = match locale_encoding(locale) {
        Some(enc) => enc.to_ascii_lowercase(),
        None => locale.to_ascii_lowercase(),
    };
    if charset.ends_with("@cjk_narrow") {
        return false;
    }
    if let Some(pos) = charset.find('@') {
        charset.truncate(pos);
    }
    // Only the first five bytes are compared; charsets are ASCII but the raw
    // locale string may not be, so slice bytes rather than the String.
    let prefix = &charset.as_bytes()[..charset.len().min(5)];
    let cjk_charset = matches!(
        prefix,
        b"utf-8"
            | b"utf8"
            | b"jis"
            | b"eucjp"
            | b"euckr"
            | b"euccn"
            | b"sjis"
            | b"cp932"
            | b"cp936"
            | b"cp949"
            | b"cp950"
            | b"big5"
            | b"gbk"
            | b"gb231"
    );
    cjk_charset && (locale.starts_with("ja") || locale.starts_with("ko") || locale.starts_with("zh"))
}

/// Extracts the encoding part of a `lang_COUNTRY.ENCODING` locale string:
/// two or three lowercase letters, an optional `_` plus two uppercase
/// letters, a dot, and the remainder.
#[cfg(not(windows))]
fn locale_encoding(locale: &str) -> Option<&str> {
    let b = locale.as_bytes();
    let mut i = 0;
    while i < b.len() && i < 3 && b[i].is_ascii_lowercase() {
        i += 1;
    }
    if i < 2 {
        return None;
    }
    if b.len() > i + 2 && b[i] == b'_' {
        if !(b[i + 1].is_ascii_uppercase() && b[i + 2].is_ascii_uppercase()) {
            return None;
        }
        i += 3;
    }
    if b.get(i) != Some(&b'.') || i + 1 >= b.len() {
        return None;
    }
    Some(&locale[i + 1..])
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_locale_encoding() {
        assert_eq!(locale_encoding("ja_JP.UTF-8"), Some("UTF-8"));
        assert_eq!(locale_encoding("ja_JP.CP932"), Some("CP932"));
        assert_eq!(locale_encoding("ja.UTF-8"), Some("UTF-8"));
        assert_eq!(locale_encoding("foo@cjk"), None);
        assert_eq!(locale_encoding("C.UTF-8"), None);
    }

    #[test]
    fn test_is_east_asian_locale() {
        assert!(is_east_asian_locale("ja_JP.UTF-8"));
        assert!(is_east_asian_locale("ja_JP.CP932"));
        assert!(is_east_asian_locale("ko_KR.UTF-8"));
        assert!(is_east_asian_locale("zh_CN.GB2312"));
        assert!(!is_east_asian_locale("en_US.UTF-8"));
        assert!(!is_east_asian_locale("foo@cjk_narrow"));
        assert!(!is_east_asian_locale("foo@cjk"));
        assert!(!is_east_asian_locale("utf-8@cjk"));
        assert!(!is_east_asian_locale("C"));
        assert!(!is_east_asian_locale("POSIX"));
    }

    #[test]
    fn test_explicit_config() {
        let cfg = Config::new(true, true);
        assert!(cfg.east_asian_width);
        assert!(cfg.wide_emoji);
        assert_eq!(Config::default(), Config::new(false, false));
    }

    #[test]
    fn test_default_config_is_stable() {
        assert_eq!(default_config(), default_config());
    }
}

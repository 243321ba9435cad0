//! Shared helpers for the conformance tests: a parser for the official
//! Unicode break test files (GraphemeBreakTest.txt and friends).
//!
//! The files are not vendored; tests locate them via the `TEXTSEG_UCD_DIR`
//! environment variable or a `tests/ucd/` directory and skip quietly when
//! they are absent.

#![allow(dead_code)] // Not every integration test uses every helper.

use std::fmt;
use std::path::PathBuf;

/// One line of a break test file: the assembled input and the expected
/// segments, each as code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakTestCase {
    pub input: String,
    pub expected: Vec<Vec<char>>,
}

/// Errors from parsing a break test line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A token that is neither a break sign, a no-break sign, nor hex.
    BadToken(String),
    /// A code point outside the scalar value range.
    BadCodePoint(u32),
    /// The line did not start with a break or no-break sign.
    MissingLeadingSign,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadToken(t) => write!(f, "unexpected token {t:?}"),
            Self::BadCodePoint(cp) => write!(f, "invalid code point U+{cp:04X}"),
            Self::MissingLeadingSign => write!(f, "line does not start with ÷ or ×"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one line of a Unicode break test file.
///
/// Returns `Ok(None)` for comment-only and empty lines. The expected format
/// alternates break signs (`÷` breaks, `×` does not) with hex code points:
/// `÷ 0061 × 0308 ÷ 0062 ÷ # comment`.
pub fn parse_break_test_line(line: &str) -> Result<Option<BreakTestCase>, ParseError> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut input = String::new();
    let mut expected: Vec<Vec<char>> = Vec::new();
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some("÷") => {}
        Some(other) => {
            if other == "×" {
                return Err(ParseError::MissingLeadingSign);
            }
            return Err(ParseError::BadToken(other.to_string()));
        }
        None => return Ok(None),
    }

    let mut current: Vec<char> = Vec::new();
    loop {
        let Some(token) = tokens.next() else {
            // Trailing sign is optional in practice; close the last segment.
            if !current.is_empty() {
                expected.push(current);
            }
            break;
        };
        let cp = u32::from_str_radix(token, 16)
            .map_err(|_| ParseError::BadToken(token.to_string()))?;
        let c = char::from_u32(cp).ok_or(ParseError::BadCodePoint(cp))?;
        input.push(c);
        current.push(c);

        match tokens.next() {
            Some("÷") | None => {
                expected.push(std::mem::take(&mut current));
            }
            Some("×") => {}
            Some(other) => return Err(ParseError::BadToken(other.to_string())),
        }
    }

    Ok(Some(BreakTestCase { input, expected }))
}

/// Directory holding the official break test files, if available.
pub fn ucd_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("TEXTSEG_UCD_DIR") {
        let path = PathBuf::from(dir);
        if path.is_dir() {
            return Some(path);
        }
    }
    let local = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/ucd");
    local.is_dir().then_some(local)
}

/// Loads the given break test file, returning its parsed cases, or `None`
/// (with a note on stderr) when the file is unavailable.
pub fn load_break_test(file: &str) -> Option<Vec<BreakTestCase>> {
    let Some(dir) = ucd_dir() else {
        eprintln!("skipping {file}: no UCD directory (set TEXTSEG_UCD_DIR)");
        return None;
    };
    let path = dir.join(file);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("skipping {file}: {err}");
            return None;
        }
    };
    let mut cases = Vec::new();
    for (number, line) in data.lines().enumerate() {
        match parse_break_test_line(line) {
            Ok(Some(case)) => cases.push(case),
            Ok(None) => {}
            Err(err) => panic!("{file}:{}: {err}", number + 1),
        }
    }
    Some(cases)
}

/// Splits `input` into segments with the given `first_*` style driver and
/// compares against the expected segments of `case`.
pub fn check_case(
    case: &BreakTestCase,
    label: &str,
    number: usize,
    segments: &[String],
) -> bool {
    let actual: Vec<Vec<char>> = segments.iter().map(|s| s.chars().collect()).collect();
    if actual == case.expected {
        return true;
    }
    eprintln!(
        "{label} case {number} failed:\n  input:    {:?}\n  expected: {:?}\n  actual:   {:?}",
        case.input, case.expected, actual
    );
    false
}

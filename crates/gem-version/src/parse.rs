//! Tokenizer and segment classifier for version strings.

use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::{MalformedVersion, Segment};

/// A version string is a run of digits, optionally followed by dot-separated alphanumeric
/// parts, repeated any number of times. The empty string is valid.
const VERSION_PATTERN: &str = r"^(?:[0-9]+(?:\.[0-9a-zA-Z]+)*)*$";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(VERSION_PATTERN).unwrap());

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9a-zA-Z]+").unwrap());

/// The classified form of a version, produced in a single left-to-right pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Classified {
    pub(crate) segments: Vec<Segment>,
    /// Number of leading numeric segments before the first string segment.
    pub(crate) release_len: usize,
    pub(crate) prerelease: bool,
}

impl Classified {
    /// Classify segments that were supplied directly, bypassing the string pattern.
    pub(crate) fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut classified = Self::default();
        for segment in segments {
            classified.push(segment.classify());
        }
        classified
    }

    fn push(&mut self, segment: Segment) {
        if segment.is_string() {
            self.prerelease = true;
        } else if !self.prerelease {
            self.release_len += 1;
        }
        self.segments.push(segment);
    }
}

/// Trim surrounding whitespace, leaving the part of the input that has to match the pattern.
pub(crate) fn trim(version: &str) -> &str {
    version.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Validate a trimmed version string and split it into classified segments.
///
/// A token made of digits only that overflows a `u64` is rejected rather than being treated as
/// a prerelease marker.
pub(crate) fn parse(version: &str) -> Result<Classified, MalformedVersion> {
    if !VERSION_RE.is_match(version) {
        #[cfg(feature = "tracing")]
        debug!("Rejecting malformed version string `{version}`");
        return Err(MalformedVersion::new(version));
    }

    let mut classified = Classified::default();
    for token in TOKEN_RE.find_iter(version) {
        let token = token.as_str();
        let segment = match token.parse::<u64>() {
            Ok(number) => Segment::Number(number),
            Err(_) if token.bytes().all(|byte| byte.is_ascii_digit()) => {
                #[cfg(feature = "tracing")]
                debug!("Version segment `{token}` in `{version}` does not fit in 64 bits");
                return Err(MalformedVersion::new(version));
            }
            Err(_) => Segment::String(token.to_ascii_lowercase()),
        };
        classified.push(segment);
    }
    Ok(classified)
}

use std::borrow::Cow;

use crate::{Segment, Version};

/// Anything a [`Version`] can be constructed from.
///
/// Coercion is resolved once, at the construction boundary: strings are validated and
/// tokenized, integers become a single numeric segment, segment sequences are classified
/// without any string validation, and an existing version is passed through untouched.
#[derive(Debug, Clone)]
pub enum VersionInput<'a> {
    /// A version string such as `1.0.a`, validated against the version pattern.
    Str(Cow<'a, str>),
    /// A single integer such as `5`, equivalent to the string `"5"`.
    Integer(u64),
    /// Already-split segments, e.g. the output of another version's `segments()`.
    Segments(Vec<Segment>),
    /// An existing version, returned as is.
    Version(Version),
}

impl<'a> From<&'a str> for VersionInput<'a> {
    fn from(version: &'a str) -> Self {
        Self::Str(Cow::Borrowed(version))
    }
}

impl<'a> From<&'a String> for VersionInput<'a> {
    fn from(version: &'a String) -> Self {
        Self::Str(Cow::Borrowed(version))
    }
}

impl From<String> for VersionInput<'_> {
    fn from(version: String) -> Self {
        Self::Str(Cow::Owned(version))
    }
}

impl From<u64> for VersionInput<'_> {
    fn from(number: u64) -> Self {
        Self::Integer(number)
    }
}

impl From<Vec<Segment>> for VersionInput<'_> {
    fn from(segments: Vec<Segment>) -> Self {
        Self::Segments(segments)
    }
}

impl From<&[Segment]> for VersionInput<'_> {
    fn from(segments: &[Segment]) -> Self {
        Self::Segments(segments.to_vec())
    }
}

impl From<Version> for VersionInput<'_> {
    fn from(version: Version) -> Self {
        Self::Version(version)
    }
}

impl From<&Version> for VersionInput<'_> {
    fn from(version: &Version) -> Self {
        Self::Version(version.clone())
    }
}

use std::cmp::{Ordering, max};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::warn;

use crate::parse::{self, Classified};
use crate::{Segment, VersionInput};

/// The normalized form of a version made of zeros only, or of no segments at all.
static ZERO: [Segment; 1] = [Segment::ZERO];

/// A version string that doesn't match the version pattern, or a version that can't be bumped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Malformed version number string `{version}`")]
pub struct MalformedVersion {
    version: String,
}

impl MalformedVersion {
    pub(crate) fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Returns the rejected input.
    pub fn as_str(&self) -> &str {
        &self.version
    }
}

/// A gem version number such as `1.2.3`, `1.0.a` or `2.0.0.rc1`.
///
/// A version is a sequence of [`Segment`]s. Any segment that isn't an integer makes the version
/// a prerelease, and prereleases sort between releases. From newest to oldest:
///
/// 1. `1.0`
/// 2. `1.0.b`
/// 3. `1.0.a`
/// 4. `0.9`
///
/// There are two notions of equality, and they disagree:
///
/// * [`Version::compare`] pads the shorter version with zeros, so `1` and `1.0` are equal in
///   ordering.
/// * [`Version::eql`], [`PartialEq`] and [`Hash`] compare the segments as they are, so `1` and
///   `1.0` are different versions.
///
/// Since [`Ord`] must agree with [`Eq`], `Version` doesn't implement it. Use
/// [`OrderedVersion`](crate::OrderedVersion) for sorted collections or wherever versions
/// should be equal by ordering.
///
/// Parse with [`Version::from_str`]:
///
/// ```rust
/// use std::str::FromStr;
/// use gem_version::Version;
///
/// let version = Version::from_str("1.0.a").unwrap();
/// assert!(version.is_prerelease());
/// ```
///
/// Clones are cheap, they share the same segments.
#[derive(Clone)]
pub struct Version {
    inner: Arc<VersionInner>,
}

#[derive(Debug)]
struct VersionInner {
    /// The trimmed input, for versions parsed from a string or an integer.
    raw: Option<Box<str>>,
    segments: Vec<Segment>,
    /// `segments[..release_len]` is the release, i.e. the numbers before the first string.
    release_len: usize,
    prerelease: bool,
    /// `segments[..normalized_len]` is the version without trailing zeros.
    normalized_len: usize,
}

impl Version {
    fn from_classified(raw: Option<Box<str>>, classified: Classified) -> Self {
        let Classified {
            segments,
            release_len,
            prerelease,
        } = classified;
        let normalized_len = segments.len()
            - segments
                .iter()
                .rev()
                .take_while(|segment| segment.is_zero())
                .count();
        Self {
            inner: Arc::new(VersionInner {
                raw,
                segments,
                release_len,
                prerelease,
                normalized_len,
            }),
        }
    }

    /// Constructor for a version from already-split segments, such as `[5, 4]`.
    ///
    /// This skips the string validation. Segments are still classified: a string segment that
    /// holds an integer becomes a number, other strings are lowercased.
    ///
    /// A string of digits too large for a `u64` stays a string segment, which makes the version
    /// a prerelease whose canonical form no longer parses. Go through [`Version::from_str`] to
    /// have such input rejected instead.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self::from_classified(None, Classified::from_segments(segments))
    }

    /// Coerce an optional input to a version.
    ///
    /// An existing version is returned unchanged, without parsing it again, and `None` stays
    /// `None`. Anything else is parsed.
    ///
    /// ```rust
    /// use gem_version::Version;
    ///
    /// let version = Version::create(Some("1.3.17")).unwrap().unwrap();
    /// let same = Version::create(Some(&version)).unwrap().unwrap();
    /// assert_eq!(version, same);
    /// assert!(Version::create(None::<&str>).unwrap().is_none());
    /// ```
    pub fn create<'a>(
        input: Option<impl Into<VersionInput<'a>>>,
    ) -> Result<Option<Self>, MalformedVersion> {
        input
            .map(|input| Self::try_from(Into::<VersionInput<'a>>::into(input)))
            .transpose()
    }

    /// The trimmed string this version was parsed from, if it was parsed from a string or an
    /// integer. Versions built from segments, including the results of [`Version::release`] and
    /// [`Version::bump`], don't have one.
    pub fn raw(&self) -> Option<&str> {
        self.inner.raw.as_deref()
    }

    /// All segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.inner.segments
    }

    /// The leading numeric segments, up to the first string segment.
    ///
    /// For `1.2.b.3` this is `[1, 2]`. For a version that isn't a prerelease, this is all
    /// segments.
    pub fn release_segments(&self) -> &[Segment] {
        &self.inner.segments[..self.inner.release_len]
    }

    /// The segments without trailing zeros, e.g. `[1]` for `1.0.0`.
    ///
    /// Never empty: a version of only zeros, or without segments, normalizes to `[0]`.
    pub fn normalized(&self) -> &[Segment] {
        match self.inner.normalized_len {
            0 => &ZERO,
            len => &self.inner.segments[..len],
        }
    }

    /// A version is considered a prerelease if any segment contains a letter.
    pub fn is_prerelease(&self) -> bool {
        self.inner.prerelease
    }

    /// The release for this version, e.g. `1.2.0.a` -> `1.2.0`.
    ///
    /// Versions that aren't prereleases return themselves.
    #[must_use]
    pub fn release(&self) -> Self {
        if self.is_prerelease() {
            Self::from_segments(self.release_segments().iter().cloned())
        } else {
            self.clone()
        }
    }

    /// Return a new version where the next to last segment is one greater, e.g. `5.3.1` -> `5.4`.
    ///
    /// Trailing prerelease segments are ignored first, so `5.3.1.b2` -> `5.4` as well. A
    /// version with a single segment bumps that segment, `5` -> `6`. If a string segment ends
    /// up last, as in `1.a.2`, it is replaced by its alphanumeric successor: `1.b`.
    ///
    /// Fails for a version without any segment left to bump, e.g. the empty version, and on
    /// integer overflow.
    pub fn bump(&self) -> Result<Self, MalformedVersion> {
        let mut segments = self.segments().to_vec();
        while segments.last().is_some_and(Segment::is_string) {
            segments.pop();
        }
        if segments.len() > 1 {
            segments.pop();
        }

        let last = segments.pop().ok_or_else(|| self.malformed())?;
        #[cfg(feature = "tracing")]
        if last.is_string() {
            warn!("Bumping `{self}` increments the prerelease segment `{last}`");
        }
        let next = last.successor().ok_or_else(|| self.malformed())?;
        segments.push(next);

        Ok(Self::from_segments(segments))
    }

    /// Compare this version to `other`, padding the shorter version with zeros.
    ///
    /// Numeric segments always sort above string segments, which is what puts a prerelease
    /// below its release: `1.0` is padded to `1.0.0` when compared to `1.0.a`, and `0 > a`.
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_segments(self.segments(), other.segments())
    }

    /// Like [`Version::compare`], where any version is greater than nothing.
    pub fn compare_opt(&self, other: Option<&Self>) -> Ordering {
        other.map_or(Ordering::Greater, |other| self.compare(other))
    }

    /// A version is only `eql` to another version if it has the same segments, without any
    /// padding: `1.0` is not the same version as `1`.
    ///
    /// This is the same as `==`.
    pub fn eql(&self, other: &Self) -> bool {
        self.segments() == other.segments()
    }

    fn malformed(&self) -> MalformedVersion {
        match self.raw() {
            Some(raw) => MalformedVersion::new(raw),
            None => MalformedVersion::new(self.to_string()),
        }
    }
}

/// Compare two segment sequences, e.g. `4.3.1` > `4.2`, `1.1.0` == `1.1` and `1.0` > `1.0.a`.
fn compare_segments(this: &[Segment], other: &[Segment]) -> Ordering {
    // The shorter sequence is padded out with zeros.
    let padding = &ZERO[0];
    for (this, other) in this.iter().chain(iter::repeat(padding)).zip(
        other
            .iter()
            .chain(iter::repeat(padding))
            .take(max(this.len(), other.len())),
    ) {
        match this.cmp(other) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
    }
    Ordering::Equal
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.eql(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    /// Hashes the segments as they are, consistent with [`Version::eql`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments().hash(state);
    }
}

impl FromStr for Version {
    type Err = MalformedVersion;

    /// Parses a version such as `1.19`, `1.0.a` or `2.0.0.rc1`.
    ///
    /// Surrounding whitespace is ignored.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let version = parse::trim(version);
        let classified = parse::parse(version)?;
        Ok(Self::from_classified(Some(version.into()), classified))
    }
}

impl From<u64> for Version {
    fn from(number: u64) -> Self {
        Self::from_classified(
            Some(number.to_string().into()),
            Classified::from_segments([Segment::Number(number)]),
        )
    }
}

impl TryFrom<VersionInput<'_>> for Version {
    type Error = MalformedVersion;

    fn try_from(input: VersionInput<'_>) -> Result<Self, Self::Error> {
        match input {
            VersionInput::Str(version) => Self::from_str(&version),
            VersionInput::Integer(number) => Ok(Self::from(number)),
            VersionInput::Segments(segments) => Ok(Self::from_segments(segments)),
            VersionInput::Version(version) => Ok(version),
        }
    }
}

/// Shows the canonical form: the segments joined by dots.
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut segments = self.segments().iter();
        if let Some(first) = segments.next() {
            write!(f, "{first}")?;
            for segment in segments {
                write!(f, ".{segment}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Version").field(&self.to_string()).finish()
    }
}

/// Serializes the canonical string form.
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes a version string, an integer, or a sequence of segments.
///
/// A sequence holding a single string is read as a version string, so `["1.0.a"]` and
/// `"1.0.a"` are the same version.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Version;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a version string, a non-negative integer or a sequence of segments")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Version::from_str(v).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Version::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(Version::from)
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut segments = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(segment) = seq.next_element::<Segment>()? {
                    segments.push(segment);
                }
                if let [Segment::String(version)] = segments.as_slice() {
                    return Version::from_str(version).map_err(de::Error::custom);
                }
                // Segments have to survive a trip through the string form, which rules out
                // digit strings too large for a number segment.
                let version = Version::from_segments(segments);
                Version::from_str(&version.to_string()).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

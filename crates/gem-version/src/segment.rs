use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single dot-separated part of a [`Version`](crate::Version).
///
/// Segments are typed once, when the version is constructed: a token that parses as a decimal
/// integer becomes a [`Segment::Number`], everything else becomes a lowercase
/// [`Segment::String`] and marks the version as a prerelease.
///
/// When comparing a numeric and a string segment, the numeric segment always compares as
/// greater, whatever its value. This is what sorts `1.0.a` below `1.0` (which is padded to
/// `1.0.0` for the comparison).
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Segment {
    /// Segment that parsed as a non-negative integer.
    Number(u64),
    /// Segment that did not parse as an integer, such as `a`, `beta2` or `0a`.
    String(String),
}

impl Segment {
    /// The padding value used when comparing versions of different lengths.
    pub const ZERO: Self = Self::Number(0);

    /// Returns `true` for a [`Segment::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for a [`Segment::String`].
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` for the number zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(0))
    }

    /// Returns the number, if this is a numeric segment.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::String(_) => None,
        }
    }

    /// Returns the string, if this is a string segment.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::String(string) => Some(string),
        }
    }

    /// Re-type a segment that was supplied directly rather than scanned from a version string.
    ///
    /// Strings holding a decimal integer become numbers, other strings are lowercased.
    pub(crate) fn classify(self) -> Self {
        match self {
            Self::Number(number) => Self::Number(number),
            Self::String(string) => match string.parse::<u64>() {
                Ok(number) => Self::Number(number),
                Err(_) => Self::String(string.to_ascii_lowercase()),
            },
        }
    }

    /// The segment following this one, as used by [`Version::bump`](crate::Version::bump).
    ///
    /// Numbers are incremented. Strings get their alphanumeric successor, e.g. `a` -> `b`,
    /// `az` -> `ba`, `zz` -> `aaa` and `a9` -> `b0`. Returns `None` on overflow or for a string
    /// without any alphanumeric character.
    pub(crate) fn successor(&self) -> Option<Self> {
        match self {
            Self::Number(number) => number.checked_add(1).map(Self::Number),
            Self::String(string) => string_successor(string).map(Self::String),
        }
    }
}

/// Increment the rightmost alphanumeric character, carrying into the characters on its left.
///
/// On a carry out of the leftmost alphanumeric character, a `1` (for a digit) or an `a` (for a
/// letter) is inserted in front of it. Other characters are left alone.
fn string_successor(string: &str) -> Option<String> {
    let mut bytes = string.as_bytes().to_vec();
    let mut leftmost = None;
    for index in (0..bytes.len()).rev() {
        match bytes[index] {
            b'0'..=b'8' | b'a'..=b'y' | b'A'..=b'Y' => {
                bytes[index] += 1;
                return String::from_utf8(bytes).ok();
            }
            b'9' => bytes[index] = b'0',
            b'z' => bytes[index] = b'a',
            b'Z' => bytes[index] = b'A',
            _ => continue,
        }
        leftmost = Some(index);
    }
    let leftmost = leftmost?;
    let carry = match bytes[leftmost] {
        b'0' => b'1',
        b'A' => b'A',
        _ => b'a',
    };
    bytes.insert(leftmost, carry);
    String::from_utf8(bytes).ok()
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => write!(f, "{string}"),
        }
    }
}

impl From<u64> for Segment {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Segment {
    fn from(string: &str) -> Self {
        Self::String(string.to_string()).classify()
    }
}

impl From<String> for Segment {
    fn from(string: String) -> Self {
        Self::String(string).classify()
    }
}

impl FromStr for Segment {
    /// This can be a never type when stabilized
    type Err = ();

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(segment))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(n1), Self::Number(n2)) => n1.cmp(n2),
            (Self::String(s1), Self::String(s2)) => s1.cmp(s2),
            (Self::Number(_), Self::String(_)) => Ordering::Greater,
            (Self::String(_), Self::Number(_)) => Ordering::Less,
        }
    }
}

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::Version;

/// A [`Version`] whose equality, ordering and hash follow [`Version::compare`].
///
/// `1` and `1.0` are equal as `OrderedVersion`s (but not as `Version`s), which makes this the
/// type to put in a `BTreeSet`, to sort by, or to deduplicate by ordering:
///
/// ```rust
/// use std::collections::BTreeSet;
/// use std::str::FromStr;
/// use gem_version::{OrderedVersion, Version};
///
/// let versions: BTreeSet<OrderedVersion> = ["1.0", "1.0.b", "0.9", "1.0.a"]
///     .into_iter()
///     .map(|version| OrderedVersion::from(Version::from_str(version).unwrap()))
///     .collect();
/// let versions: Vec<String> = versions.iter().map(ToString::to_string).collect();
/// assert_eq!(versions, ["0.9", "1.0.a", "1.0.b", "1.0"]);
/// ```
///
/// Like any set, a `BTreeSet` holds one element per ordering-equal class. Which of `1` and `1.0`
/// it ends up holding depends on how it was filled, so compare with [`Version::compare`] rather
/// than on the textual form.
#[derive(Clone, Debug)]
pub struct OrderedVersion(Version);

impl OrderedVersion {
    /// Returns the wrapped version.
    pub fn into_inner(self) -> Version {
        self.0
    }

    /// Returns a reference to the wrapped version.
    pub fn as_version(&self) -> &Version {
        &self.0
    }
}

impl From<Version> for OrderedVersion {
    fn from(version: Version) -> Self {
        Self(version)
    }
}

impl From<OrderedVersion> for Version {
    fn from(version: OrderedVersion) -> Self {
        version.0
    }
}

impl Deref for OrderedVersion {
    type Target = Version;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for OrderedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare(&other.0) == Ordering::Equal
    }
}

impl Eq for OrderedVersion {}

impl Hash for OrderedVersion {
    /// Two versions that compare equal have the same segments once trailing zeros are dropped.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.normalized().hash(state);
    }
}

impl PartialOrd for OrderedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0)
    }
}

impl Display for OrderedVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

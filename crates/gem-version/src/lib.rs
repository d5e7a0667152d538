//! A library for gem version numbers: parsing, prerelease detection, ordering, normalization
//! and bumping.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use std::str::FromStr;
//! use gem_version::Version;
//!
//! let version = Version::from_str("1.0.a").unwrap();
//! assert!(version.is_prerelease());
//! assert_eq!(version.release(), Version::from_str("1.0").unwrap());
//! assert_eq!(
//!     Version::from_str("1.0").unwrap().compare(&version),
//!     Ordering::Greater
//! );
//! assert_eq!(Version::from_str("5.3.1").unwrap().bump().unwrap().to_string(), "5.4");
//! ```
//!
//! Gem versions have a few unintuitive properties:
//!
//! * A version string is a series of digits or ASCII letters separated by dots. Each part is
//!   its own segment and segments are compared one by one, so `3.10` sorts higher than `3.2`.
//! * A run of letters and digits is a single segment: `1.0.0a` has the segments `1`, `0` and
//!   `0a`, not `1`, `0`, `0` and `a`.
//! * Any segment with a letter makes the version a prerelease. A number always sorts above a
//!   string in the same position, and shorter versions are padded with zeros, so
//!   `1.0 > 1.0.b > 1.0.a > 0.9`.
//! * Padding makes `1` and `1.0` equal in ordering, but they are different versions: they are
//!   not `==` and they hash differently. [`OrderedVersion`] is the wrapper to use when versions
//!   should be equal by ordering.

#![warn(missing_docs)]

pub use {
    input::VersionInput,
    ordered::OrderedVersion,
    segment::Segment,
    version::{MalformedVersion, Version},
};

mod input;
mod ordered;
mod parse;
mod segment;
mod version;

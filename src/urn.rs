//! Main URN type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

use crate::error::ParseError;
use crate::hash_code::hash_units;
use crate::parser;

/// A parsed and validated URN.
///
/// # Structure
///
/// ```text
/// urn:<NID>:<NSS>
/// ```
///
/// The prefix is stored lower-cased; the namespace identifier and namespace
/// specific string keep their original case. Equality, ordering and hashing
/// ignore ASCII case in all three components.
///
/// # Examples
///
/// ```
/// use urn_syntax::Urn;
///
/// let urn = Urn::parse("URN:isbn:0451450523").unwrap();
/// assert_eq!(urn.nid(), "isbn");
/// assert_eq!(urn.nss(), "0451450523");
/// assert_eq!(urn.to_string(), "urn:isbn:0451450523");
///
/// assert_eq!(urn, Urn::parse("urn:ISBN:0451450523").unwrap());
/// ```
pub struct Urn {
    prefix: String,
    nid: String,
    nss: String,
    /// Memoized composite hash; zero means not yet computed
    hash: AtomicU32,
}

impl Urn {
    /// Parses a URN from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The prefix is missing or is not `urn`
    /// - The namespace identifier is empty, longer than 32 characters, or
    ///   contains characters other than letters, digits and hyphens
    /// - The namespace specific string is empty, contains a malformed `%`
    ///   escape, or contains characters outside the transport set
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    pub(crate) fn from_parts(prefix: String, nid: &str, nss: &str) -> Self {
        Self {
            prefix,
            nid: nid.to_string(),
            nss: nss.to_string(),
            hash: AtomicU32::new(0),
        }
    }

    /// Returns the lower-cased prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the namespace identifier.
    #[must_use]
    pub fn nid(&self) -> &str {
        &self.nid
    }

    /// Returns the namespace specific string.
    #[must_use]
    pub fn nss(&self) -> &str {
        &self.nss
    }

    /// Returns `prefix:nid:nss` rebuilt from the stored components.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        format!("{}:{}:{}", self.prefix, self.nid, self.nss)
    }

    /// Returns the composite hash of the three components.
    ///
    /// Equal URNs have equal hash codes. The value is computed once and
    /// cached, except that a hash of exactly zero is recomputed on every call.
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        let h = self.hash.load(AtomicOrdering::Relaxed);
        if h != 0 {
            return h;
        }
        let h = self.compute_hash();
        self.hash.store(h, AtomicOrdering::Relaxed);
        h
    }

    fn compute_hash(&self) -> u32 {
        [&self.prefix, &self.nid, &self.nss]
            .into_iter()
            .fold(0, |h, part| {
                hash_units(h, part.encode_utf16().map(fold_ascii_case))
            })
    }
}

/// Lower-cases a code unit in `A..=Z`.
fn fold_ascii_case(unit: u16) -> u16 {
    if (u16::from(b'A')..=u16::from(b'Z')).contains(&unit) {
        unit + u16::from(b'a' - b'A')
    } else {
        unit
    }
}

/// Compares by lower-cased code units, then by length.
fn compare_ignoring_case(s: &str, t: &str) -> Ordering {
    if s == t {
        return Ordering::Equal;
    }
    s.encode_utf16()
        .map(fold_ascii_case)
        .cmp(t.encode_utf16().map(fold_ascii_case))
}

impl Clone for Urn {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            nid: self.nid.clone(),
            nss: self.nss.clone(),
            hash: AtomicU32::new(self.hash.load(AtomicOrdering::Relaxed)),
        }
    }
}

impl fmt::Debug for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Urn")
            .field("prefix", &self.prefix)
            .field("nid", &self.nid)
            .field("nss", &self.nss)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.prefix, self.nid, self.nss)
    }
}

impl FromStr for Urn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialEq for Urn {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Urn {}

impl PartialOrd for Urn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Urn {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignoring_case(&self.prefix, &other.prefix)
            .then_with(|| compare_ignoring_case(&self.nid, &other.nid))
            .then_with(|| compare_ignoring_case(&self.nss, &other.nss))
    }
}

impl Hash for Urn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! The URN grammar driver.
//!
//! ```text
//! <URN> ::= "urn:" <NID> ":" <NSS>
//! ```
//!
//! Parsing runs strictly forward through three steps, prefix, namespace
//! identifier and namespace specific string, each taking the current offset
//! and returning the offset after what it consumed. The first failure ends
//! the parse.
//!
//! Scanning works on byte offsets. Every stop position falls on a character
//! boundary, since only ASCII bytes are ever consumed by a class scan, so
//! reported offsets and the NID length are converted to UTF-16 code units.

use tracing::{debug, trace};

use crate::char_class::{ALPHANUM, ALPHANUM_HYPHEN, CharClass, NSS, TRANS};
use crate::constants::{COMPONENT_SEPARATOR, DELIMITER_ERROR, MAX_NID_LENGTH, URN_PREFIX};
use crate::error::{Component, ParseError, ParseErrorKind};
use crate::scanner::{peek_is, scan_masked, scan_until_any};
use crate::urn::Urn;

/// Parses and validates a URN.
///
/// # Errors
///
/// Returns `ParseError` describing the first syntax violation, with the
/// UTF-16 code-unit offset of the offending character where it can be
/// determined.
///
/// # Examples
///
/// ```
/// let urn = urn_syntax::parse("urn:isbn:0451450523").unwrap();
/// assert_eq!(urn.nid(), "isbn");
///
/// let err = urn_syntax::parse("urn:test:").unwrap_err();
/// assert_eq!(err.offset(), 9);
/// ```
pub fn parse(input: &str) -> Result<Urn, ParseError> {
    match Parser::new(input).parse() {
        Ok(urn) => {
            trace!(input, "parsed URN");
            Ok(urn)
        }
        Err(err) => {
            debug!(input, kind = %err.kind(), offset = err.offset(), "rejected URN");
            Err(err)
        }
    }
}

/// Cursor over one input; positions are threaded through the step methods.
pub(crate) struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    end: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            end: input.len(),
        }
    }

    pub(crate) fn parse(&self) -> Result<Urn, ParseError> {
        let (prefix, p) = self.parse_prefix()?;
        let (nid, p) = self.parse_nid(p)?;
        let nss = self.parse_nss(p)?;
        Ok(Urn::from_parts(prefix, nid, nss))
    }

    /// Returns the lower-cased prefix and the offset just past its colon.
    pub(crate) fn parse_prefix(&self) -> Result<(String, usize), ParseError> {
        let p = self.scan_component(0);
        if !peek_is(self.bytes, p, self.end, COMPONENT_SEPARATOR) {
            return Err(self.fail(ParseErrorKind::NotAUrn, Some(p)));
        }
        if p == 0 {
            return Err(self.fail(ParseErrorKind::MissingPrefix, Some(p)));
        }
        let prefix = self.input[..p].to_lowercase();
        if prefix != URN_PREFIX {
            return Err(self.fail(ParseErrorKind::InvalidPrefix, None));
        }
        Ok((prefix, p + 1))
    }

    /// Returns the namespace identifier and the offset just past its colon.
    pub(crate) fn parse_nid(&self, p: usize) -> Result<(&'a str, usize), ParseError> {
        let q = self.scan_component(p);
        if !peek_is(self.bytes, q, self.end, COMPONENT_SEPARATOR) {
            return Err(self.fail(ParseErrorKind::IllegalNid, Some(q)));
        }
        if q == p {
            return Err(self.fail(ParseErrorKind::NidTooShort, Some(q)));
        }
        if self.units(p, q) > MAX_NID_LENGTH {
            return Err(self.fail(ParseErrorKind::NidTooLong, None));
        }
        self.check_chars(p, p + 1, ALPHANUM, Component::NamespaceIdentifier)?;
        self.check_chars(p, q, ALPHANUM_HYPHEN, Component::NamespaceIdentifier)?;
        Ok((&self.input[p..q], q + 1))
    }

    /// Returns the namespace specific string, which runs to the end of input.
    pub(crate) fn parse_nss(&self, p: usize) -> Result<&'a str, ParseError> {
        if p >= self.end {
            return Err(self.fail(ParseErrorKind::NssTooShort, Some(p)));
        }
        let q = scan_masked(self.bytes, p, self.end, NSS)
            .map_err(|e| self.fail(ParseErrorKind::MalformedEscape, Some(e.position)))?;
        if q < self.end {
            // reserved characters are legal, anything else is not
            self.check_chars(p, self.end, TRANS, Component::NamespaceSpecificString)?;
        }
        Ok(&self.input[p..])
    }

    fn scan_component(&self, start: usize) -> usize {
        scan_until_any(
            self.bytes,
            start,
            self.end,
            &[DELIMITER_ERROR],
            &[COMPONENT_SEPARATOR],
        )
    }

    fn check_chars(
        &self,
        start: usize,
        end: usize,
        class: CharClass,
        component: Component,
    ) -> Result<(), ParseError> {
        let p = scan_masked(self.bytes, start, end, class)
            .map_err(|e| self.fail(ParseErrorKind::MalformedEscape, Some(e.position)))?;
        if p < end {
            return Err(self.fail(ParseErrorKind::IllegalCharacter { component }, Some(p)));
        }
        Ok(())
    }

    /// Number of UTF-16 code units in `input[start..end]`.
    fn units(&self, start: usize, end: usize) -> usize {
        self.input[start..end].encode_utf16().count()
    }

    fn fail(&self, kind: ParseErrorKind, position: Option<usize>) -> ParseError {
        let position = position.map(|p| self.units(0, p));
        ParseError::new(self.input, kind, position)
    }
}

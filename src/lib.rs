//! Parser and value type for Uniform Resource Names (RFC 2141).
//!
//! This crate validates URNs of the form
//!
//! ```text
//! urn:<NID>:<NSS>
//! ```
//!
//! and exposes them as an immutable [`Urn`] value with case-insensitive
//! equality, ordering and hashing.
//!
//! # Quick Start
//!
//! ```rust
//! use urn_syntax::Urn;
//!
//! let urn = Urn::parse("urn:ietf:rfc:2141").unwrap();
//! assert_eq!(urn.nid(), "ietf");
//! assert_eq!(urn.nss(), "rfc:2141");
//!
//! // Comparison ignores case in every component
//! assert_eq!(urn, "URN:IETF:RFC:2141".parse::<Urn>().unwrap());
//! ```
//!
//! # Errors
//!
//! Every syntax violation is reported as a [`ParseError`] with the kind of
//! violation and, where it can be determined, the UTF-16 code-unit offset of
//! the offending character:
//!
//! ```rust
//! use urn_syntax::{parse, ParseErrorKind};
//!
//! let err = parse("urn:test:%25%0%32").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::MalformedEscape);
//! assert_eq!(err.offset(), 12);
//!
//! let err = parse("pre:test:x").unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::InvalidPrefix);
//! assert_eq!(err.offset(), -1);
//! ```
//!
//! # Length Constraints
//!
//! | Component | Length |
//! |-----------|--------|
//! | Prefix | exactly `urn`, any case |
//! | Namespace identifier | 1 to 32 chars |
//! | Namespace specific string | 1 or more chars |
//!
//! # Grammar Specification
//!
//! The accepted syntax is written out in `grammar.abnf` at the crate root.
//! Percent-escapes are validated but never decoded, and the namespace
//! identifier is not checked against any registry.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Urn`] as its canonical string.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod char_class;
mod constants;
mod error;
pub mod hash_code;
pub mod messages;
mod parser;
pub mod prelude;
mod scanner;
mod urn;

pub use constants::{
    COMPONENT_SEPARATOR, DELIMITER_ERROR, ESCAPE_INTRODUCER, MAX_NID_LENGTH, URN_PREFIX,
};
pub use error::{Component, ParseError, ParseErrorKind};
pub use parser::parse;
pub use urn::Urn;

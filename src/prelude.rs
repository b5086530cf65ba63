//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use urn_syntax::prelude::*;
//!
//! let urn = Urn::parse("urn:isbn:0451450523").unwrap();
//! assert_eq!(urn.nid(), "isbn");
//! ```

pub use crate::{
    // Core types
    Urn, parse,
    // Errors
    Component, ParseError, ParseErrorKind,
    // Constants
    MAX_NID_LENGTH, URN_PREFIX,
};

//! Error types for URN parsing.

use std::fmt;

use crate::constants::MAX_NID_LENGTH;
use crate::messages::URN_MESSAGES;

/// The grammar component an illegal character was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The namespace identifier (NID)
    NamespaceIdentifier,
    /// The namespace specific string (NSS)
    NamespaceSpecificString,
}

impl Component {
    /// Returns the human-readable component name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NamespaceIdentifier => "namespace identifier",
            Self::NamespaceSpecificString => "namespace specific string",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specific URN syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No colon terminates the prefix
    NotAUrn,
    /// The input starts with a colon
    MissingPrefix,
    /// The prefix is not `urn`
    InvalidPrefix,
    /// No colon terminates the namespace identifier
    IllegalNid,
    /// The namespace identifier is empty
    NidTooShort,
    /// The namespace identifier exceeds 32 characters
    NidTooLong,
    /// A character outside the component's character class
    IllegalCharacter {
        /// Component containing the character
        component: Component,
    },
    /// A `%` not followed by two hexadecimal digits
    MalformedEscape,
    /// The namespace specific string is empty
    NssTooShort,
}

impl ParseErrorKind {
    /// The message catalog mnemonic for this error.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::NotAUrn => "URN_NOT_URN",
            Self::MissingPrefix => "URN_MISSING_PREFIX",
            Self::InvalidPrefix => "URN_INVALID_PREFIX",
            Self::IllegalNid => "URN_NID_ILLEGAL",
            Self::NidTooShort => "URN_NID_TOO_SHORT",
            Self::NidTooLong => "URN_NID_TOO_LONG",
            Self::IllegalCharacter { .. } => "URN_ILLEGAL_CHARACTER",
            Self::MalformedEscape => "URN_MALFORMED_ESCAPE",
            Self::NssTooShort => "URN_NSS_TOO_SHORT",
        }
    }

    /// Builds the human-readable reason through the message catalog.
    fn reason(self, input: &str) -> String {
        match self {
            Self::NidTooShort | Self::MalformedEscape => URN_MESSAGES.format(self.mnemonic(), &[]),
            Self::NidTooLong => URN_MESSAGES.format(self.mnemonic(), &[&input, &MAX_NID_LENGTH]),
            Self::IllegalCharacter { component } => {
                URN_MESSAGES.format(self.mnemonic(), &[&component])
            }
            Self::NotAUrn
            | Self::MissingPrefix
            | Self::InvalidPrefix
            | Self::IllegalNid
            | Self::NssTooShort => URN_MESSAGES.format(self.mnemonic(), &[&input]),
        }
    }
}

/// Displays the catalog mnemonic; the full text lives on [`ParseError`].
impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A URN that could not be parsed.
///
/// Carries the rejected input, a human-readable reason and, when known, the
/// UTF-16 code-unit offset of the offending character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    reason: String,
    kind: ParseErrorKind,
    position: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind, position: Option<usize>) -> Self {
        Self {
            input: input.to_string(),
            reason: kind.reason(input),
            kind,
            position,
        }
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the human-readable reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the specific error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the error offset, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// Returns the error offset, or `-1` if it is not known.
    #[must_use]
    pub fn offset(&self) -> isize {
        self.position
            .and_then(|p| isize::try_from(p).ok())
            .unwrap_or(-1)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)?;
        if let Some(position) = self.position {
            write!(f, " at index {position}")?;
        }
        write!(f, ": {}", self.input)
    }
}

impl std::error::Error for ParseError {}

//! Constants for URN validation.

/// The only accepted URN prefix (compared case-insensitively).
pub const URN_PREFIX: &str = "urn";

/// Maximum namespace identifier length.
pub const MAX_NID_LENGTH: usize = 32;

/// Separator between prefix, namespace identifier and namespace specific string.
pub const COMPONENT_SEPARATOR: u8 = b':';

/// Byte that is illegal before the second separator.
pub const DELIMITER_ERROR: u8 = b',';

/// Byte that introduces a percent-escape.
pub const ESCAPE_INTRODUCER: u8 = b'%';

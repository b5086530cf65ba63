//! Bitmask character classes for the URN grammar.
//!
//! Each class is a pair of 64-bit words: the low word holds one bit per code
//! point in `0..64`, the high word one bit per code point in `64..128`.
//! Membership is a shift and a mask, and classes combine by bitwise union.
//! Everything here is `const` and evaluated at compile time.
//!
//! Bytes outside ASCII never belong to any class.

/// Flag bit in the low word meaning "percent-escapes are allowed".
///
/// It occupies the slot of NUL, which is never a legal URN character, so the
/// bit is stripped before any literal match.
pub const ESCAPED_FLAG: u64 = 1;

/// Low-order mask for the bytes of `chars` that are below 64.
#[must_use]
pub const fn low_mask(chars: &str) -> u64 {
    let bytes = chars.as_bytes();
    let mut m = 0;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if c < 64 {
            m |= 1u64 << c;
        }
        i += 1;
    }
    m
}

/// High-order mask for the bytes of `chars` in `64..128`.
#[must_use]
pub const fn high_mask(chars: &str) -> u64 {
    let bytes = chars.as_bytes();
    let mut m = 0;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if matches!(c, 64..=127) {
            m |= 1u64 << (c - 64);
        }
        i += 1;
    }
    m
}

/// Low-order mask for the inclusive range `first..=last`.
///
/// The range is clamped into `0..64`; a range lying wholly above it gives `0`.
#[must_use]
pub const fn low_mask_range(first: u8, last: u8) -> u64 {
    if first > 63 || last < first {
        return 0;
    }
    let last = if last > 63 { 63 } else { last };
    let mut m = 0;
    let mut i = first;
    while i <= last {
        m |= 1u64 << i;
        i += 1;
    }
    m
}

/// High-order mask for the inclusive range `first..=last`.
///
/// The range is clamped into `64..128`; a range lying wholly outside it gives `0`.
#[must_use]
pub const fn high_mask_range(first: u8, last: u8) -> u64 {
    if last < 64 || first > 127 || last < first {
        return 0;
    }
    let first = if first < 64 { 0 } else { first - 64 };
    let last = if last > 127 { 63 } else { last - 64 };
    let mut m = 0;
    let mut i = first;
    while i <= last {
        m |= 1u64 << i;
        i += 1;
    }
    m
}

/// Tells whether `c` is permitted by the mask pair.
#[must_use]
pub const fn matches(c: u8, low: u64, high: u64) -> bool {
    if c < 64 {
        return (1u64 << c) & low != 0;
    }
    if c < 128 {
        return (1u64 << (c - 64)) & high != 0;
    }
    false
}

/// A set of ASCII characters encoded as a low/high mask pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass {
    low: u64,
    high: u64,
}

impl CharClass {
    /// Creates a class from raw mask words.
    #[must_use]
    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Creates a class holding every ASCII byte of `chars`.
    #[must_use]
    pub const fn from_chars(chars: &str) -> Self {
        Self::new(low_mask(chars), high_mask(chars))
    }

    /// Creates a class holding the inclusive range `first..=last`.
    #[must_use]
    pub const fn from_range(first: u8, last: u8) -> Self {
        Self::new(low_mask_range(first, last), high_mask_range(first, last))
    }

    /// Set union of two classes.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.low | other.low, self.high | other.high)
    }

    /// The low-order word (code points `0..64`).
    #[must_use]
    pub const fn low(self) -> u64 {
        self.low
    }

    /// The high-order word (code points `64..128`).
    #[must_use]
    pub const fn high(self) -> u64 {
        self.high
    }

    /// Returns true if scans with this class should accept `%HH` escapes.
    #[must_use]
    pub const fn allows_escapes(self) -> bool {
        self.low & ESCAPED_FLAG != 0
    }

    /// Returns true if `c` is a literal member of this class.
    ///
    /// The escape flag never matches.
    #[must_use]
    pub const fn matches(self, c: u8) -> bool {
        matches(c, self.low & !ESCAPED_FLAG, self.high)
    }
}

/// Decimal digits.
pub const DIGIT: CharClass = CharClass::from_range(b'0', b'9');

/// Upper-case ASCII letters.
pub const UPALPHA: CharClass = CharClass::from_range(b'A', b'Z');

/// Lower-case ASCII letters.
pub const LOWALPHA: CharClass = CharClass::from_range(b'a', b'z');

/// ASCII letters.
pub const ALPHA: CharClass = LOWALPHA.union(UPALPHA);

/// Letters and digits.
pub const ALPHANUM: CharClass = ALPHA.union(DIGIT);

/// The hyphen, legal inside a namespace identifier.
pub const HYPHEN: CharClass = CharClass::from_chars("-");

/// Namespace identifier characters.
pub const ALPHANUM_HYPHEN: CharClass = ALPHANUM.union(HYPHEN);

/// Hexadecimal digits in either case.
pub const HEX: CharClass = DIGIT
    .union(CharClass::from_range(b'A', b'F'))
    .union(CharClass::from_range(b'a', b'f'));

/// Escape flag; not a character class of its own.
pub const ESCAPED: CharClass = CharClass::new(ESCAPED_FLAG, 0);

/// RFC 2141 `<other>` punctuation.
pub const OTHER: CharClass = CharClass::from_chars("()+,-.:=@;$_!*'");

/// RFC 2141 `<reserved>` punctuation.
pub const RESERVED: CharClass = CharClass::from_chars("%/?#");

/// Every character that may appear in a namespace specific string.
pub const TRANS: CharClass = ALPHANUM.union(OTHER).union(RESERVED);

/// Unreserved namespace specific string characters, with escapes enabled.
pub const NSS: CharClass = ALPHANUM.union(OTHER).union(ESCAPED);

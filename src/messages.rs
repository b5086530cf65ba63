//! Message catalog for human-readable error text.
//!
//! Messages are looked up by mnemonic and formatted by replacing `{n}` with
//! the `n`-th argument. A placeholder without a matching argument is left as
//! written.

use std::fmt;

/// A named table of message patterns keyed by mnemonic.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    namespace: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// Creates a catalog over static `(mnemonic, pattern)` entries.
    #[must_use]
    pub const fn new(namespace: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { namespace, entries }
    }

    /// Returns the raw pattern for `mnemonic`.
    #[must_use]
    pub fn pattern(&self, mnemonic: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == mnemonic)
            .map(|(_, pattern)| *pattern)
    }

    /// Formats the message for `mnemonic` with `args`.
    ///
    /// An unknown mnemonic is logged and returned as the message itself.
    #[must_use]
    pub fn format(&self, mnemonic: &str, args: &[&dyn fmt::Display]) -> String {
        if let Some(pattern) = self.pattern(mnemonic) {
            substitute(pattern, args)
        } else {
            tracing::error!(
                mnemonic,
                namespace = self.namespace,
                "missing message resource"
            );
            mnemonic.to_string()
        }
    }
}

fn substitute(pattern: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let placeholder = &after[..close];
        match placeholder.parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => {
                out.push('{');
                out.push_str(placeholder);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Messages for URN syntax errors.
pub const URN_MESSAGES: Catalog = Catalog::new(
    "urn",
    &[
        (
            "URN_NOT_URN",
            "the string ({0}) is not a URN; expected urn:<NID>:<NSS>",
        ),
        ("URN_MISSING_PREFIX", "the URN ({0}) is missing its urn prefix"),
        (
            "URN_INVALID_PREFIX",
            "the URN ({0}) has a prefix other than urn",
        ),
        (
            "URN_NID_ILLEGAL",
            "the URN ({0}) has no namespace identifier terminated by a colon",
        ),
        ("URN_NID_TOO_SHORT", "the namespace identifier is empty"),
        (
            "URN_NID_TOO_LONG",
            "the URN ({0}) has a namespace identifier longer than {1} characters",
        ),
        ("URN_ILLEGAL_CHARACTER", "illegal character in {0}"),
        ("URN_MALFORMED_ESCAPE", "malformed escape pair"),
        (
            "URN_NSS_TOO_SHORT",
            "the URN ({0}) has an empty namespace specific string",
        ),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MESSAGES: Catalog = Catalog::new(
        "test",
        &[
            ("GREETING", "hello {0}, meet {1}"),
            ("REPEAT", "{0}{0}{0}"),
            ("BRACES", "{x} and {0"),
        ],
    );

    #[test]
    fn substitutes_arguments_by_index() {
        let msg = TEST_MESSAGES.format("GREETING", &[&"alice", &"bob"]);
        assert_eq!(msg, "hello alice, meet bob");
    }

    #[test]
    fn repeats_arguments() {
        assert_eq!(TEST_MESSAGES.format("REPEAT", &[&7]), "777");
    }

    #[test]
    fn keeps_placeholders_without_arguments() {
        let msg = TEST_MESSAGES.format("GREETING", &[&"alice"]);
        assert_eq!(msg, "hello alice, meet {1}");
    }

    #[test]
    fn keeps_malformed_placeholders() {
        assert_eq!(TEST_MESSAGES.format("BRACES", &[&1]), "{x} and {0");
    }

    #[test]
    fn unknown_mnemonic_falls_back_to_mnemonic() {
        assert_eq!(TEST_MESSAGES.format("NOPE", &[]), "NOPE");
        assert!(TEST_MESSAGES.pattern("NOPE").is_none());
    }

    #[test]
    fn urn_catalog_formats_illegal_character() {
        let msg = URN_MESSAGES.format("URN_ILLEGAL_CHARACTER", &[&"namespace identifier"]);
        assert_eq!(msg, "illegal character in namespace identifier");
        assert_eq!(URN_MESSAGES.namespace, "urn");
    }
}

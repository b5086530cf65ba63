//! Property-based tests validating the parser against the ABNF grammar.
//!
//! These tests generate random valid inputs according to grammar constraints
//! and verify the parser accepts them, ensuring parser-grammar conformance.

use proptest::prelude::*;

use urn_syntax::{Component, MAX_NID_LENGTH, ParseErrorKind, Urn, parse};

/// Strategies for generating valid grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Letters and digits
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Valid characters after the first NID character
    const NID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-";

    /// Unreserved NSS characters (alphanumeric + `<other>`)
    const NSS_CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789()+,-.:=@;$_!*'";

    /// Reserved NSS characters, legal only outside escapes
    pub const RESERVED: &[u8] = b"/?#";

    /// Hex digits for escape pairs
    const HEX: &[u8] = b"0123456789abcdefABCDEF";

    /// Generate a valid prefix in random case
    pub fn prefix() -> impl Strategy<Value = String> {
        prop::collection::vec(any::<bool>(), 3).prop_map(|upper| {
            "urn"
                .chars()
                .zip(upper)
                .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    /// Generate a valid NID (1-32 chars, first alphanumeric)
    pub fn nid() -> impl Strategy<Value = String> {
        let first = prop::sample::select(ALPHANUMERIC.to_vec());
        let rest = prop::collection::vec(
            prop::sample::select(NID_CHARS.to_vec()),
            0..MAX_NID_LENGTH,
        );
        (first, rest).prop_map(|(f, r)| {
            let mut s = String::with_capacity(1 + r.len());
            s.push(f as char);
            s.extend(r.into_iter().map(char::from));
            s
        })
    }

    /// Generate a single NSS unit: a plain character, an escape pair or a
    /// reserved character
    fn nss_unit() -> impl Strategy<Value = String> {
        let plain = prop::sample::select(NSS_CHARS.to_vec()).prop_map(|c| (c as char).to_string());
        let escape = (prop::sample::select(HEX.to_vec()), prop::sample::select(HEX.to_vec()))
            .prop_map(|(h, l)| format!("%{}{}", h as char, l as char));
        let reserved = prop::sample::select(RESERVED.to_vec()).prop_map(|c| (c as char).to_string());
        prop_oneof![
            8 => plain,
            1 => escape,
            1 => reserved,
        ]
    }

    /// Generate a valid NSS
    pub fn nss() -> impl Strategy<Value = String> {
        prop::collection::vec(nss_unit(), 1..=40).prop_map(|units| units.concat())
    }

    /// Generate a valid URN
    pub fn urn() -> impl Strategy<Value = String> {
        (prefix(), nid(), nss()).prop_map(|(p, n, s)| format!("{p}:{n}:{s}"))
    }

    /// Generate a printable character outside the transport set
    pub fn illegal_nss_char() -> impl Strategy<Value = char> {
        prop::sample::select(vec![' ', '"', '<', '>', '[', ']', '\\', '^', '`', '{', '|', '}', '~', '&'])
    }
}

mod component_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn valid_urns_parse(urn in urn()) {
            let result = parse(&urn);
            prop_assert!(result.is_ok(), "Failed to parse URN: {}", urn);
        }

        #[test]
        fn components_are_preserved(p in prefix(), n in nid(), s in nss()) {
            let parsed = parse(&format!("{p}:{n}:{s}")).unwrap();
            prop_assert_eq!(parsed.prefix(), "urn");
            prop_assert_eq!(parsed.nid(), n.as_str());
            prop_assert_eq!(parsed.nss(), s.as_str());
        }

        #[test]
        fn canonical_form_lower_cases_prefix(p in prefix(), n in nid(), s in nss()) {
            let parsed = parse(&format!("{p}:{n}:{s}")).unwrap();
            prop_assert_eq!(parsed.to_canonical_string(), format!("urn:{n}:{s}"));
        }

        #[test]
        fn nid_length_constraint(n in nid()) {
            prop_assert!(!n.is_empty() && n.len() <= MAX_NID_LENGTH);
        }

        #[test]
        fn over_long_nid_fails(n in nid(), extra in 1usize..8) {
            let long = format!("{n}{}", "a".repeat(MAX_NID_LENGTH + extra - n.len()));
            let err = parse(&format!("urn:{long}:x")).unwrap_err();
            prop_assert_eq!(err.kind(), ParseErrorKind::NidTooLong);
            prop_assert_eq!(err.offset(), -1);
        }

        #[test]
        fn reserved_chars_are_accepted(n in nid(), s in nss(), r in prop::sample::select(RESERVED.to_vec())) {
            let nss = format!("{s}{}{s}", r as char);
            let parsed = parse(&format!("urn:{n}:{nss}")).unwrap();
            prop_assert_eq!(parsed.nss(), nss.as_str());
        }

        #[test]
        fn illegal_nss_char_is_located(n in nid(), s in nss(), bad in illegal_nss_char()) {
            let input = format!("urn:{n}:{s}{bad}");
            let err = parse(&input).unwrap_err();
            prop_assert_eq!(
                err.kind(),
                ParseErrorKind::IllegalCharacter { component: Component::NamespaceSpecificString }
            );
            let expected = isize::try_from(input.len() - 1).unwrap();
            prop_assert_eq!(err.offset(), expected);
        }
    }
}

mod roundtrip_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn roundtrip_parse_serialize(urn in urn()) {
            let parsed = Urn::parse(&urn).unwrap();
            let reparsed = Urn::parse(&parsed.to_canonical_string()).unwrap();

            prop_assert_eq!(&parsed, &reparsed);
            prop_assert_eq!(parsed.nid(), reparsed.nid());
            prop_assert_eq!(parsed.nss(), reparsed.nss());
        }

        #[test]
        fn case_variants_are_equal_with_equal_hashes(urn in urn()) {
            let lower = Urn::parse(&urn.to_ascii_lowercase()).unwrap();
            let upper = Urn::parse(&urn.to_ascii_uppercase()).unwrap();

            prop_assert_eq!(&lower, &upper);
            prop_assert_eq!(lower.hash_code(), upper.hash_code());
        }

        #[test]
        fn ordering_is_consistent_with_equality(a in urn(), b in urn()) {
            let a = Urn::parse(&a).unwrap();
            let b = Urn::parse(&b).unwrap();

            prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }
    }
}

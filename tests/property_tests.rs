//! Property-based tests for the registry and generators
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use sable_registry::{
    Severity, builtin_diagnostics, builtin_tokens, camel_case, find_by_sname,
    validate_diagnostics, validate_tokens,
};
use sablegen::generate::{diagnostics, tokens};

// =============================================================================
// Lookup Properties
// =============================================================================

proptest! {
    /// Property: a name that is not in the registry never resolves. The
    /// reverse lookup must be the exact inverse of the sname column, with no
    /// fuzzy matching or prefix behavior.
    #[test]
    fn unknown_snames_never_resolve(name in "[a-z-]{1,40}") {
        let diags = builtin_diagnostics();
        if !diags.iter().any(|d| d.sname == name) {
            prop_assert_eq!(find_by_sname(&diags, &name), None);
        }
    }

    /// Property: every registered sname resolves to its own entry.
    #[test]
    fn registered_snames_resolve_to_their_entry(idx in 0usize..32) {
        let diags = builtin_diagnostics();
        let idx = idx % diags.len();
        prop_assert_eq!(find_by_sname(&diags, &diags[idx].sname), Some(idx));
    }

    /// Property: severity parsing accepts exactly the four closed-set names.
    #[test]
    fn arbitrary_severity_strings_are_rejected(s in "\\PC{0,20}") {
        let known = ["Error", "Warning", "Fatal", "Hint"];
        let parsed = s.parse::<Severity>();
        prop_assert_eq!(parsed.is_ok(), known.contains(&s.as_str()));
    }
}

// =============================================================================
// Validation Properties
// =============================================================================

proptest! {
    /// Property: copying any entry's sname onto any other entry always fails
    /// validation, regardless of which pair collides.
    #[test]
    fn injected_duplicate_snames_always_fail(a in 0usize..32, b in 0usize..32) {
        let mut diags = builtin_diagnostics();
        let (a, b) = (a % diags.len(), b % diags.len());
        prop_assume!(a != b);
        diags[b].sname = diags[a].sname.clone();
        // cname stays distinct, so the sname collision is what must trip.
        prop_assert!(validate_diagnostics(&diags).is_err());
    }

    /// Property: duplicating any token always fails validation, because the
    /// flattened variant identifier collides with itself.
    #[test]
    fn injected_duplicate_tokens_always_fail(idx in 0usize..56) {
        let mut toks = builtin_tokens();
        let idx = idx % toks.len();
        let dup = toks[idx].clone();
        toks.push(dup);
        prop_assert!(validate_tokens(&toks).is_err());
    }
}

// =============================================================================
// Identifier Properties
// =============================================================================

proptest! {
    /// Property: camel-casing a snake_case name never leaves an underscore
    /// behind and never grows the string.
    #[test]
    fn camel_case_strips_underscores(name in "[a-z][a-z0-9]{0,8}(_[a-z0-9]{1,8}){0,3}") {
        let ident = camel_case(&name);
        prop_assert!(!ident.contains('_'));
        prop_assert!(ident.len() <= name.len());
        prop_assert!(ident.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    }
}

// =============================================================================
// Generator Properties
// =============================================================================

proptest! {
    /// Property: generation over any prefix of the registry is deterministic
    /// and lists exactly the prefix's variants, in order.
    #[test]
    fn enum_generation_over_prefixes_is_order_preserving(len in 1usize..=32) {
        let diags: Vec<_> = builtin_diagnostics().into_iter().take(len).collect();
        let text = diagnostics::generate_enum(&diags);
        prop_assert_eq!(&text, &diagnostics::generate_enum(&diags));

        let variants: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("    ")?.strip_suffix(','))
            .collect();
        let expected: Vec<&str> = diags.iter().map(|d| d.cname.as_str()).collect();
        prop_assert_eq!(variants, expected);
    }

    /// Property: every spelling arm in the kinds artifact carries the ordinal
    /// of its position, for any prefix of the registry.
    #[test]
    fn spelling_arms_track_ordinals(len in 1usize..=56) {
        let toks: Vec<_> = builtin_tokens().into_iter().take(len).collect();
        let text = tokens::generate_kinds(&toks);
        for (ordinal, t) in toks.iter().enumerate() {
            let arm = format!("{} => {:?}, // {}", ordinal, t.spelling, t.variant_ident());
            prop_assert!(text.contains(&arm), "missing arm: {}", arm);
        }
    }
}

//! Property tests for namespace stripping and aggregation.

use proptest::prelude::*;

use nsbundle::{aggregate, strip_namespace, BundleConfig, StripOutcome, StrippedFragment};

fn body_line() -> impl Strategy<Value = String> {
    // No braces, so the wrapper is the only construct the stripper can match.
    proptest::string::string_regex("[A-Za-z0-9 _:;=<>|\\[\\]]{0,40}").unwrap()
}

fn namespace_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9_]{0,8}(\\.[A-Z][A-Za-z0-9]{0,4})?").unwrap()
}

fn modifiers() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("export "),
        Just("declare "),
        Just("export declare "),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `strip_namespace` never panics on arbitrary input.
    #[test]
    fn property_strip_never_panics(raw in "(?s).{0,256}") {
        let _ = strip_namespace(&raw);
    }

    /// PROPERTY: A wrapped fragment yields exactly its inner body.
    #[test]
    fn property_wrapped_body_is_recovered(
        prefix in modifiers(),
        name in namespace_name(),
        lines in proptest::collection::vec(body_line(), 0..=10),
    ) {
        let body = lines.join("\n");
        let raw = format!("{prefix}namespace {name} {{\n{body}\n}}\n");

        let (stripped, outcome) = strip_namespace(&raw);

        prop_assert_eq!(outcome, StripOutcome::Stripped);
        prop_assert_eq!(stripped.trim(), body.trim());
    }

    /// PROPERTY: Text without braces is passed through verbatim.
    #[test]
    fn property_unwrapped_text_passes_through(raw in "[A-Za-z0-9 _:;=\\n]{0,200}") {
        let (stripped, outcome) = strip_namespace(&raw);

        prop_assert_eq!(outcome, StripOutcome::PassedThrough);
        prop_assert_eq!(stripped, raw);
    }

    /// PROPERTY: The aggregated document always opens the namespace and ends
    /// with the global binding, whatever the bodies contain.
    #[test]
    fn property_aggregate_frames_every_body(
        bodies in proptest::collection::vec("(?s).{0,64}", 0..=6),
    ) {
        let config = BundleConfig::default();
        let fragments: Vec<StrippedFragment> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                StrippedFragment::new(format!("{i}.d.ts"), body.clone(), StripOutcome::Stripped)
            })
            .collect();

        let output = aggregate(&config, &fragments);

        prop_assert!(output.starts_with("namespace Host {\n"), "unexpected output prefix: {:?}", output);
        prop_assert!(output.ends_with("}\n\ndeclare const host: Host.Platform;"), "unexpected output suffix: {:?}", output);
        for body in bodies.iter().map(|b| b.trim()).filter(|b| !b.is_empty()) {
            prop_assert!(output.contains(body));
        }
    }
}

//! Namespace boilerplate removal
//!
//! Each fragment wraps its declarations in the same
//! `namespace <Name> { ... }` pair. Stripping is purely textual:
//!
//! - the first `[export ][declare ]namespace <Name> {` is removed
//! - the last `}` followed only by whitespace is removed
//!
//! Brace balance is not checked and nested namespaces are not detected.
//! When either construct is missing the fragment is passed through verbatim;
//! mismatches are reported, never corrected.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::{SourceFragment, StripOutcome, StrippedFragment};

fn opening_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:\bexport\s+)?(?:\bdeclare\s+)?\bnamespace\s+[A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*\s*\{",
        )
        .expect("namespace opening regex must compile")
    })
}

fn closing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\}\s*\z").expect("closing brace regex must compile"))
}

/// Strip the namespace boilerplate from raw fragment text
///
/// Returns the remaining text (untrimmed) and whether the pattern matched.
pub fn strip_namespace(raw: &str) -> (String, StripOutcome) {
    let Some(open) = opening_re().find(raw) else {
        return (raw.to_string(), StripOutcome::PassedThrough);
    };

    let rest = &raw[open.end()..];
    let Some(close) = closing_re().find(rest) else {
        return (raw.to_string(), StripOutcome::PassedThrough);
    };

    let mut body = String::with_capacity(raw.len());
    body.push_str(&raw[..open.start()]);
    body.push_str(&rest[..close.start()]);
    (body, StripOutcome::Stripped)
}

/// Applies [`strip_namespace`] to whole fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceStripper;

impl NamespaceStripper {
    pub fn new() -> Self {
        Self
    }

    pub fn strip(&self, fragment: &SourceFragment) -> StrippedFragment {
        let (body, outcome) = strip_namespace(fragment.raw_text());
        StrippedFragment::new(fragment.path(), body, outcome)
    }

    pub fn strip_all(&self, fragments: &[SourceFragment]) -> Vec<StrippedFragment> {
        fragments.iter().map(|f| self.strip(f)).collect()
    }
}

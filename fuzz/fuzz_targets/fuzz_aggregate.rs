#![no_main]

use libfuzzer_sys::fuzz_target;
use nsbundle::{aggregate, BundleConfig, NamespaceStripper, SourceFragment};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // NUL separates fragments
        let fragments: Vec<SourceFragment> = content
            .split('\0')
            .enumerate()
            .map(|(i, text)| SourceFragment::new(format!("{i}.d.ts"), text))
            .collect();

        let stripped = NamespaceStripper::new().strip_all(&fragments);
        let output = aggregate(&BundleConfig::default(), &stripped);

        assert!(output.starts_with("namespace Host {\n"));
        assert!(output.ends_with("declare const host: Host.Platform;"));
    }
});

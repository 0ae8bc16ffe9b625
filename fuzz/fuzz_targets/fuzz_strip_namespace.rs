#![no_main]

use libfuzzer_sys::fuzz_target;
use nsbundle::{strip_namespace, StripOutcome};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let (body, outcome) = strip_namespace(content);

        // Stripping only ever removes text
        assert!(body.len() <= content.len());
        if outcome == StripOutcome::PassedThrough {
            assert_eq!(body, content);
        }
    }
});

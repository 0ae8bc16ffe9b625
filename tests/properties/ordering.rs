//! Property tests for fragment ordering.
//!
//! Output must depend only on relative paths, never on the order files were
//! created in or the order the directory walk happens to yield them.

use std::fs;
use std::path::Path;

use proptest::prelude::*;

use nsbundle::{BundleConfig, BundlePipeline, LocalFs, NoopFormatter};

fn names() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..8).prop_flat_map(|set| {
        let sorted: Vec<String> = set.into_iter().collect();
        (Just(sorted.clone()), Just(sorted).prop_shuffle())
    })
}

fn render_in(dir: &Path, creation_order: &[String]) -> String {
    let root = dir.join("types");
    fs::create_dir_all(&root).unwrap();
    for name in creation_order {
        fs::write(
            root.join(format!("{name}.d.ts")),
            format!("namespace Host {{\n  type T_{name}_ = 1;\n}}\n"),
        )
        .unwrap();
    }

    let config = BundleConfig {
        source_root: root,
        destination: dir.join("dist/host.d.ts"),
        ..BundleConfig::default()
    };
    BundlePipeline::new(config, LocalFs::new(), NoopFormatter)
        .render()
        .unwrap()
        .text
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Creation order does not change the output.
    #[test]
    fn property_output_independent_of_creation_order((sorted, shuffled) in names()) {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let reversed: Vec<String> = sorted.iter().rev().cloned().collect();
        let a = render_in(first.path(), &shuffled);
        let b = render_in(second.path(), &reversed);

        prop_assert_eq!(a, b);
    }

    /// PROPERTY: Fragments appear in ascending path order.
    #[test]
    fn property_fragments_follow_path_order((sorted, shuffled) in names()) {
        let dir = tempfile::tempdir().unwrap();
        let output = render_in(dir.path(), &shuffled);

        let positions: Vec<usize> = sorted
            .iter()
            .map(|name| output.find(&format!("type T_{name}_ = 1;")).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

use anyhow::Result;

use nsbundle::config::{BundleConfig, DESTINATION, SOURCE_ROOT};
use nsbundle::presentation::create_pipeline;

use super::emit;
use crate::ui::context::UiContext;

pub fn cmd_build(json: bool) -> Result<()> {
    let ui = UiContext::new(json);
    let config = BundleConfig::default().rooted_at(&std::env::current_dir()?);

    if !json {
        print!(
            "{}",
            crate::ui::views::build::render_build_header(
                SOURCE_ROOT,
                DESTINATION,
                ui.color,
                ui.unicode
            )
        );
    }

    let pipeline = create_pipeline(config);
    if pipeline.execute(&|event| emit(&ui, &event)).is_err() {
        // Already reported through the error event
        std::process::exit(1);
    }

    Ok(())
}

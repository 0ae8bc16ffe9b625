use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use nsbundle::config::{BundleConfig, DESTINATION, SOURCE_ROOT};
use nsbundle::presentation::create_watch_use_case;

use super::emit;
use crate::ui::context::UiContext;

pub fn cmd_watch(json: bool) -> Result<()> {
    let ui = UiContext::new(json);
    let config = BundleConfig::default().rooted_at(&std::env::current_dir()?);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !json {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                SOURCE_ROOT,
                DESTINATION,
                ui.color,
                ui.unicode
            )
        );
    }

    create_watch_use_case(config).start(running, |event| emit(&ui, &event))?;

    Ok(())
}

pub mod build;
pub mod watch;

use chrono::Local;
use nsbundle::BuildEvent;

use crate::ui::context::UiContext;
use crate::ui::views::event::render_event;

/// Print one event as NDJSON or as a timestamped line
pub(crate) fn emit(ui: &UiContext, event: &BuildEvent) {
    if ui.json {
        println!("{}", event.to_json());
        return;
    }

    let timestamp = Local::now().format("%H:%M:%S").to_string();
    let rendered = render_event(&timestamp, event, ui.color, ui.unicode);
    match event {
        BuildEvent::Error { .. } | BuildEvent::FormatFailed { .. } => eprint!("{rendered}"),
        _ => print!("{rendered}"),
    }
}

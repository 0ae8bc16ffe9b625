use nsbundle::BuildEvent;

use crate::ui::primitives::icon::Icon;

/// Human-readable line for one build event
pub fn render_event(
    timestamp: &str,
    event: &BuildEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let glyph = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        BuildEvent::WatchStarted { source, .. } => {
            format!("{} {} Watching: {}\n", prefix, glyph(Icon::Watch), source)
        }
        BuildEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, glyph(Icon::Arrow), path)
        }
        BuildEvent::BuildStarted => format!("{} {} Building...\n", prefix, glyph(Icon::Progress)),
        BuildEvent::PassedThrough { path } => format!(
            "{} {} No namespace wrapper in {}, copied verbatim\n",
            prefix,
            glyph(Icon::Warning),
            path
        ),
        BuildEvent::FormatFailed { formatter, message } => format!(
            "{} {} Formatting with {} failed, output left unformatted: {}\n",
            prefix,
            glyph(Icon::Warning),
            formatter,
            message
        ),
        BuildEvent::BuildComplete {
            fragments,
            passed_through,
            bytes,
            formatted,
            destination,
        } => {
            let status = if *formatted { "" } else { ", unformatted" };
            let passed = if *passed_through > 0 {
                format!(", {} verbatim", passed_through)
            } else {
                String::new()
            };
            let marker = if *formatted && *passed_through == 0 {
                Icon::Success
            } else {
                Icon::Warning
            };
            format!(
                "{} {} Built {}: {} fragments{}, {} bytes{}\n",
                prefix,
                glyph(marker),
                destination,
                fragments,
                passed,
                bytes,
                status
            )
        }
        BuildEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, glyph(Icon::Error), message)
        }
        BuildEvent::RerunQueued => format!(
            "{} {} Sources changed during build, rebuilding\n",
            prefix,
            glyph(Icon::Arrow)
        ),
        BuildEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, glyph(Icon::Watch)),
    }
}

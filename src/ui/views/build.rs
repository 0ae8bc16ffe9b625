use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    source: &str,
    destination: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "nsbundle build");
    header.add("Source", source);
    header.add("Output", destination);
    header.render(supports_color, supports_unicode)
}

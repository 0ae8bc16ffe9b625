use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// Color and unicode icons only when stdout is a terminal
    pub fn new(json: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        Self {
            json,
            color: is_tty && !json,
            unicode: is_tty,
        }
    }
}

//! Terminal colouring that switches off when output is not a terminal.
use std::io::IsTerminal as _;

pub(super) const RED: &str = "31";
pub(super) const GREEN: &str = "32";
pub(super) const YELLOW: &str = "33";
pub(super) const BOLD: &str = "1";
pub(super) const BOLD_BLUE: &str = "1;34";
pub(super) const DIM: &str = "2";

/// Whether SGR colour codes are emitted on one output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that colours only when `enabled`.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn for_stdout() -> Self {
        Self::new(std::io::stdout().is_terminal() && no_color_unset())
    }

    /// Colour when stderr is a terminal and `NO_COLOR` is unset.
    #[must_use]
    pub fn for_stderr() -> Self {
        Self::new(std::io::stderr().is_terminal() && no_color_unset())
    }

    /// Wrap `text` in the SGR `code`, or return it unchanged.
    pub(super) fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

fn no_color_unset() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

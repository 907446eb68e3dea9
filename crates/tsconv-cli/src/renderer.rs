//! Terminal rendering module for rich markdown output
//!
//! Results and the panel are produced as markdown by `tsconv-core`; this
//! module prints them through termimad, or verbatim when color is off.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else if let Some(status) = line.strip_prefix("> ") {
                println!("{}{status}\x1b[0m", status_color(status));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color for a status line, picked from its severity prefix.
fn status_color(status: &str) -> &'static str {
    if status.starts_with("Success:") {
        "\x1b[32m"
    } else if status.starts_with("Error:") {
        "\x1b[31m"
    } else if status.starts_with("Warning:") {
        "\x1b[33m"
    } else {
        "\x1b[36m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("- **Standard**: -").is_ok());
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color("Success: Converted!"), "\x1b[32m");
        assert_eq!(status_color("Error: Conversion failed: x"), "\x1b[31m");
        assert_eq!(status_color("Warning: partial support"), "\x1b[33m");
        assert_eq!(status_color("Info: Cleared everything"), "\x1b[36m");
    }
}

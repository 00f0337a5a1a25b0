//! Console front end
//!
//! Line-based interface for the mansion: prompts on standard output,
//! choices and the accusation read from standard input.

pub mod app;
pub mod input;

pub use app::App;
pub use input::Prompt;

use crossterm::style::{style, Color, Stylize};
use std::io::IsTerminal;

/// Color scheme for the game
#[derive(Debug, Clone)]
pub struct Theme {
    pub enabled: bool,
    pub accent: Color,
    pub clue: Color,
    pub alert: Color,
    pub success: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            accent: Color::Cyan,
            clue: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            border: Color::DarkGrey,
            header: Color::Magenta,
        }
    }
}

impl Theme {
    /// No escape codes at all
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Colors only when standard output is a terminal
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::default()
        } else {
            Self::plain()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Separator between the phases of the game
pub const RULE: &str = "========================================";

/// Title banner
pub const LOGO: &str = r#"========================================
   DETECTIVE QUEST - MYSTERY MANSION
========================================"#;

/// Shown under the banner
pub const INTRO: &str = "Bem-vindo, detetive!\nExplore a mansao, colete pistas e descubra o culpado.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_adds_nothing() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("Cozinha", theme.accent), "Cozinha");
        assert_eq!(theme.bold("Cozinha", theme.header), "Cozinha");
    }

    #[test]
    fn test_colored_theme_keeps_text() {
        let theme = Theme::default();
        let painted = theme.paint("Cozinha", theme.alert);
        assert!(painted.contains("Cozinha"));
    }
}

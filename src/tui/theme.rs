use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{TaskStatus, UiConfig, UserStatus};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub sidebar_bg: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    /// Per-column colors on the task board, keyed by status label
    pub status_colors: HashMap<&'static str, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut status_colors = HashMap::new();
        status_colors.insert(TaskStatus::Todo.label(), Color::Rgb(0xB0, 0xAA, 0xFF));
        status_colors.insert(TaskStatus::Doing.label(), Color::Rgb(0xDB, 0x27, 0x77));
        status_colors.insert(TaskStatus::Done.label(), Color::Rgb(0x44, 0xFF, 0x88));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            sidebar_bg: Color::Rgb(0x16, 0x06, 0x2B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xDB, 0x27, 0x77),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xDB, 0x27, 0x77),
            status_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key, value, "ignoring unparseable color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "sidebar_bg" => theme.sidebar_bg = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "purple" => theme.purple = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                other => {
                    // Board columns can be recolored by label, e.g. "Doing"
                    if let Some(status) = TaskStatus::from_label(other) {
                        theme.status_colors.insert(status.label(), color);
                    }
                }
            }
        }

        theme
    }

    /// Header color for a board column
    pub fn status_color(&self, status: TaskStatus) -> Color {
        self.status_colors
            .get(status.label())
            .copied()
            .unwrap_or(self.text)
    }

    /// Badge color for a user's seat status
    pub fn user_status_color(&self, status: UserStatus) -> Color {
        match status {
            UserStatus::Active => self.green,
            UserStatus::Pending => self.yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("Doing".into(), "#112233".into());
        ui.colors.insert("text".into(), "not a color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(
            theme.status_color(TaskStatus::Doing),
            Color::Rgb(0x11, 0x22, 0x33)
        );
        // Unparseable and unchanged values keep their defaults
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
        assert_eq!(theme.status_color(TaskStatus::Done), theme.green);
    }

    #[test]
    fn test_user_status_color() {
        let theme = Theme::default();
        assert_eq!(theme.user_status_color(UserStatus::Active), theme.green);
        assert_eq!(theme.user_status_color(UserStatus::Pending), theme.yellow);
    }
}

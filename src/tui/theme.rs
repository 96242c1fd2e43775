use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::task::{Category, Priority};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub indigo: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0E, 0x10, 0x1A),
            text: Color::Rgb(0xC2, 0xC7, 0xD6),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4F, 0x8E, 0xF7),
            dim: Color::Rgb(0x6B, 0x72, 0x85),
            red: Color::Rgb(0xF4, 0x5B, 0x69),
            yellow: Color::Rgb(0xE8, 0xB4, 0x3A),
            green: Color::Rgb(0x3F, 0xC3, 0x7E),
            cyan: Color::Rgb(0x44, 0xC7, 0xD6),
            purple: Color::Rgb(0xA7, 0x6B, 0xF2),
            blue: Color::Rgb(0x4F, 0x8E, 0xF7),
            indigo: Color::Rgb(0x7C, 0x82, 0xE8),
            selection_bg: Color::Rgb(0x23, 0x2A, 0x3D),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0E, 0x10, 0x1A),
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
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "blue" => theme.blue = color,
                    "indigo" => theme.indigo = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Accent color for a task category (hues from the original views)
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::System => self.blue,
            Category::Troubleshooting => self.red,
            Category::Maintenance => self.yellow,
            Category::Simple => self.green,
            Category::Testing => self.purple,
            Category::Documentation => self.indigo,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.green,
            Priority::Medium => self.yellow,
            Priority::High => self.red,
        }
    }

    /// Stable color for a free-form tag, picked from the accent palette
    pub fn tag_color(&self, tag: &str) -> Color {
        let palette = [self.blue, self.cyan, self.green, self.purple, self.yellow];
        let hash: usize = tag.bytes().map(|b| b as usize).sum();
        palette[hash % palette.len()]
    }
}

use super::adapter::ColorConverter;
use crate::domain::entities::ColorTheme;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const AMBER: Color = Color::Rgb(245, 158, 11);
const YELLOW: Color = Color::Rgb(234, 179, 8);
const PURPLE: Color = Color::Rgb(147, 51, 234);
const INDIGO: Color = Color::Rgb(99, 102, 241);

/// Colors of one event section.
#[derive(Debug, Clone, Copy)]
pub struct EventPalette {
    pub primary: Color,
    pub secondary: Color,
    pub title_style: Style,
    pub border_style: Style,
    pub card_style: Style,
    pub control_style: Style,
    pub focused_control_style: Style,
}

impl EventPalette {
    #[must_use]
    pub fn from_colors(primary: Color, secondary: Color) -> Self {
        let card_bg = ColorConverter::shade(primary, 0.08, 0.5);
        let control_bg = ColorConverter::shade(primary, 0.18, 0.4);

        Self {
            primary,
            secondary,
            title_style: Style::default().fg(primary).add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(secondary),
            card_style: Style::default().bg(card_bg).fg(Color::White),
            control_style: Style::default().bg(control_bg).fg(Color::White),
            focused_control_style: Style::default()
                .bg(primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }

    #[must_use]
    pub fn for_color(color: ColorTheme) -> Self {
        match color {
            ColorTheme::Yellow => Self::from_colors(AMBER, YELLOW),
            ColorTheme::Purple => Self::from_colors(PURPLE, INDIGO),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub dimmed_style: Style,
    yellow: EventPalette,
    purple: EventPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#f59e0b")
    }
}

impl Theme {
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            dimmed_style: Style::default().fg(Color::DarkGray),
            yellow: EventPalette::for_color(ColorTheme::Yellow),
            purple: EventPalette::for_color(ColorTheme::Purple),
        }
    }

    #[must_use]
    pub const fn palette(&self, color: ColorTheme) -> &EventPalette {
        match color {
            ColorTheme::Yellow => &self.yellow,
            ColorTheme::Purple => &self.purple,
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "amber" | "gold" => AMBER,
        "purple" => PURPLE,
        "orange" => Color::Indexed(208),
        _ => AMBER,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let doubled = |i: usize| channel(s[i..=i].repeat(2).as_str());
            Some((doubled(0)?, doubled(1)?, doubled(2)?))
        }
        _ => None,
    }
}

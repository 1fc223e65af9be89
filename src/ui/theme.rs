use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(24, 26, 31);
    pub const BG_SURFACE: Color = Color::Rgb(34, 37, 44);
    pub const BG_SELECTED: Color = Color::Rgb(46, 52, 64);
    pub const BUTTON_BG: Color = Color::Rgb(33, 150, 243);
    pub const BUTTON_DANGER_BG: Color = Color::Rgb(198, 40, 40);
    pub const BUTTON_MUTED_BG: Color = Color::Rgb(66, 72, 84);
    pub const RIPPLE: Color = Color::Rgb(255, 255, 255);
    pub const ACCENT_TEAL: Color = Color::Rgb(77, 208, 225);
    pub const ACCENT_AMBER: Color = Color::Rgb(255, 193, 7);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 232, 236);
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 146, 158);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 88);

    pub fn background() -> Style {
        Style::default().bg(Self::BG_DARK).fg(Self::TEXT_PRIMARY)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn task_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn task_selected() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BG_SELECTED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }
}

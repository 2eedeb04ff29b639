use crate::controllers::StatusKind;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    /// Button/accent color while awake, from the original demo's blue
    /// (0.2, 0.6, 1.0).
    pub const ACCENT_AWAKE: Color = Color::Rgb(51, 153, 255);
    /// Accent while sleeping, from the original demo's green (0.3, 0.8, 0.3).
    pub const ACCENT_ASLEEP: Color = Color::Rgb(76, 204, 76);

    pub fn accent(sleeping: bool) -> Color {
        if sleeping {
            Self::ACCENT_ASLEEP
        } else {
            Self::ACCENT_AWAKE
        }
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn log_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_disabled() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_style(kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => Style::default().fg(Color::Gray),
            StatusKind::Success => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
            StatusKind::Asleep => Style::default().fg(Self::ACCENT_ASLEEP),
        }
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

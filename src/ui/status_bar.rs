use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// One-line bar: app name and clock on the left, AWAKE/SLEEPING badge on
/// the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app_name: &str, clock: &str, sleeping: bool) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {app_name} "),
        Style::default()
            .fg(Color::Black)
            .bg(Theme::accent(sleeping))
            .add_modifier(Modifier::BOLD),
    ));
    parts.push(Span::styled(format!(" {clock} "), Theme::status_bar()));

    let badge = if sleeping { "SLEEPING" } else { "AWAKE" };
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + badge.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{badge}] "),
        Style::default()
            .fg(Theme::accent(sleeping))
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

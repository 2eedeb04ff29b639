use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A key-activated "button": a bordered box with a centered label tinted
/// with the current accent color.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Centered footer line listing the key bindings.
pub fn render_key_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Theme::timestamp()));
        }
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled((*label).to_string(), Theme::hint()));
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

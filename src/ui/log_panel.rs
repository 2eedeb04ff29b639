use crate::controllers::LogBuffer;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

/// Scrolling activity log, newest entry on top. `scroll` is the number of
/// entries scrolled down from the top.
pub fn render_log_panel(frame: &mut Frame, area: Rect, log: &LogBuffer, scroll: usize) {
    let block = Block::default()
        .title(" Activity Log ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if log.is_empty() {
        let empty = Paragraph::new("No activity yet.").style(Theme::hint());
        frame.render_widget(empty, inner);
        return;
    }

    let available_height = inner.height as usize;
    let total = log.len();
    let start = scroll.min(total.saturating_sub(1));

    let lines: Vec<Line> = log
        .iter()
        .skip(start)
        .take(available_height)
        .map(format_entry)
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(start);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// Split the `[HH:MM:SS] ` prefix off so the timestamp gets its own style.
fn format_entry(entry: &str) -> Line<'_> {
    if let Some(end) = entry.find("] ").filter(|_| entry.starts_with('[')) {
        Line::from(vec![
            Span::styled(&entry[..end + 2], Theme::timestamp()),
            Span::styled(&entry[end + 2..], Theme::log_text()),
        ])
    } else {
        Line::from(Span::styled(entry, Theme::log_text()))
    }
}

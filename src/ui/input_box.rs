use crate::controllers::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// The name field. While sleeping the field is rendered dimmed, keeps its
/// text, and hides the cursor.
pub fn render_input_box(frame: &mut Frame, area: Rect, input: &InputState, enabled: bool) {
    let (title, border_style) = if enabled {
        (" Name ", Style::default().fg(Theme::ACCENT_AWAKE))
    } else {
        (" Name (disabled) ", Theme::border())
    };

    let block = Block::default()
        .title(title)
        .title_style(if enabled { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if enabled {
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_AWAKE)),
            Span::styled(input.text().to_string(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // chevron "❯ " is two columns; cursor column from display width,
        // not byte offset
        let prompt_offset = 2u16;
        let cursor_cols = input.text()[..input.cursor()].width() as u16;
        let cursor_x = inner.x + prompt_offset + cursor_cols;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    } else {
        let paragraph = Paragraph::new(input.text().to_string()).style(Theme::input_disabled());
        frame.render_widget(paragraph, inner);
    }
}

use crate::toggle_app::state::ToggleApp;
use crate::ui::{render_button, render_key_hints, render_status_bar, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &ToggleApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_screen(frame, chunks[0], state);
    render_status_bar(
        frame,
        chunks[1],
        "drowse-toggle",
        &state.clock,
        state.controller.is_sleeping(),
    );
}

fn render_screen(frame: &mut Frame, area: Rect, state: &ToggleApp) {
    let sleeping = state.controller.is_sleeping();
    let display = state.controller.display();
    let accent = Theme::accent(sleeping);

    let block = Block::default()
        .title(" drowse ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Centered column: status, hint, button, key hints
    let column_h = 9u16;
    let start_y = inner.y + inner.height.saturating_sub(column_h) / 2;
    let bottom = inner.y + inner.height;

    let mut y = start_y;
    if y < bottom {
        let status = Paragraph::new(Span::styled(
            display.status_text,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(status, Rect::new(inner.x, y, inner.width, 1));
    }

    y += 2;
    if y < bottom {
        let hint = Paragraph::new(display.hint_text)
            .style(Theme::hint())
            .alignment(Alignment::Center);
        frame.render_widget(hint, Rect::new(inner.x, y, inner.width, 1));
    }

    y += 2;
    if y + 3 <= bottom {
        let button_w = (display.action_label.width() as u16 + 8).min(inner.width);
        let button_x = inner.x + inner.width.saturating_sub(button_w) / 2;
        render_button(
            frame,
            Rect::new(button_x, y, button_w, 3),
            display.action_label,
            accent,
        );
    }

    y += 4;
    if y < bottom {
        render_key_hints(
            frame,
            Rect::new(inner.x, y, inner.width, 1),
            &[
                ("Enter/Space", "press button"),
                ("+/-", "volume keys"),
                ("q", "quit"),
            ],
        );
    }
}

use crate::form_app::state::FormApp;
use crate::ui::{
    render_button, render_input_box, render_key_hints, render_log_panel, render_status_bar, Theme,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &FormApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Input box
            Constraint::Length(3), // Buttons
            Constraint::Length(3), // Result
            Constraint::Min(4),    // Activity log
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_status_line(frame, chunks[1], state);
    render_input_box(
        frame,
        chunks[2],
        &state.input,
        state.controller.input_enabled(),
    );
    render_buttons(frame, chunks[3], state);
    render_result(frame, chunks[4], state);
    render_log_panel(frame, chunks[5], state.controller.log(), state.log_scroll);
    render_key_hints(
        frame,
        chunks[6],
        &[
            ("Enter", "submit"),
            ("F2", "sleep/wake"),
            ("↑/↓", "scroll log"),
            ("Esc", "quit"),
        ],
    );
    render_status_bar(
        frame,
        chunks[7],
        "drowse-form",
        &state.clock,
        state.controller.is_sleeping(),
    );
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(" drowse form ", Theme::title()))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &FormApp) {
    let status = Paragraph::new(Span::styled(
        state.controller.status_line().to_string(),
        Theme::status_style(state.controller.status_kind()),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn render_buttons(frame: &mut Frame, area: Rect, state: &FormApp) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_button(frame, halves[0], "✉ SUBMIT", Theme::ACCENT_AWAKE);
    render_button(
        frame,
        halves[1],
        state.controller.sleep_button_label(),
        Theme::accent(state.controller.is_sleeping()),
    );
}

fn render_result(frame: &mut Frame, area: Rect, state: &FormApp) {
    let block = Block::default()
        .title(" Result ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if state.controller.result_text().is_empty() {
        Span::styled("...", Theme::hint())
    } else {
        Span::styled(
            state.controller.result_text().to_string(),
            Theme::status_style(state.controller.status_kind()),
        )
    };
    let paragraph = Paragraph::new(Line::from(text)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

use crate::event::AppEvent;
use crate::form_app::state::FormApp;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut FormApp, event: AppEvent) {
    match event {
        AppEvent::Terminal(CEvent::Key(key)) => handle_key(state, key),
        AppEvent::Terminal(CEvent::Resize(_, _)) => state.dirty = true,
        AppEvent::Terminal(_) => {}
        AppEvent::Tick => state.refresh_clock(),
    }
}

fn handle_key(state: &mut FormApp, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => state.should_quit = true,
            KeyCode::Char('w') if state.controller.input_enabled() => {
                state.input.delete_word_back();
                state.dirty = true;
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            state.should_quit = true;
        }
        // Submit is not gated on sleep; the toggle disables the input
        // field, not the submit path.
        KeyCode::Enter => {
            let raw = state.input.take_text();
            match state.controller.submit(&raw) {
                Ok(greeting) => tracing::info!(greeting = %greeting, "name submitted"),
                Err(err) => tracing::info!(%err, "submission rejected"),
            }
            state.log_scroll = 0;
            state.dirty = true;
        }
        // The sleep button
        KeyCode::F(2) => {
            state.controller.toggle_sleep();
            tracing::info!(sleeping = state.controller.is_sleeping(), "sleep toggled");
            state.log_scroll = 0;
            state.dirty = true;
        }
        KeyCode::Up => {
            state.scroll_log_up(1);
            state.dirty = true;
        }
        KeyCode::Down => {
            state.scroll_log_down(1);
            state.dirty = true;
        }
        KeyCode::PageUp => {
            state.scroll_log_up(10);
            state.dirty = true;
        }
        KeyCode::PageDown => {
            state.scroll_log_down(10);
            state.dirty = true;
        }
        // Everything below edits the name field, disabled while sleeping
        _ if !state.controller.input_enabled() => {}
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            state.dirty = true;
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            state.dirty = true;
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            state.dirty = true;
        }
        KeyCode::Left => {
            state.input.move_left();
            state.dirty = true;
        }
        KeyCode::Right => {
            state.input.move_right();
            state.dirty = true;
        }
        KeyCode::Home => {
            state.input.move_home();
            state.dirty = true;
        }
        KeyCode::End => {
            state.input.move_end();
            state.dirty = true;
        }
        _ => {}
    }
}

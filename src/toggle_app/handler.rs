use crate::event::AppEvent;
use crate::toggle_app::state::ToggleApp;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut ToggleApp, event: AppEvent) {
    match event {
        AppEvent::Terminal(CEvent::Key(key)) => handle_key(state, key),
        AppEvent::Terminal(CEvent::Resize(_, _)) => state.dirty = true,
        AppEvent::Terminal(_) => {}
        AppEvent::Tick => state.refresh_clock(),
    }
}

fn handle_key(state: &mut ToggleApp, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        // The on-screen button
        KeyCode::Enter | KeyCode::Char(' ') => {
            let disp = state.controller.toggle();
            tracing::info!(status = disp.status_text, "button pressed");
            state.dirty = true;
        }
        // Simulated hardware volume keys: wake-only
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if state.controller.on_volume_up() {
                tracing::info!("woken by volume-up");
                state.dirty = true;
            }
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            if state.controller.on_volume_down() {
                tracing::info!("woken by volume-down");
                state.dirty = true;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn press(state: &mut ToggleApp, code: KeyCode) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        );
    }

    fn new_state() -> ToggleApp {
        let mut state = ToggleApp::new(&AppConfig::default());
        state.dirty = false;
        state
    }

    #[test]
    fn test_button_flips_state() {
        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        assert!(state.controller.is_sleeping());
        assert!(state.dirty);
        press(&mut state, KeyCode::Char(' '));
        assert!(!state.controller.is_sleeping());
    }

    #[test]
    fn test_volume_keys_are_noop_while_awake() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('+'));
        press(&mut state, KeyCode::Char('-'));
        assert!(!state.controller.is_sleeping());
        assert!(!state.dirty);
    }

    #[test]
    fn test_volume_keys_wake() {
        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        state.dirty = false;
        press(&mut state, KeyCode::Char('-'));
        assert!(!state.controller.is_sleeping());
        assert!(state.dirty);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut state = new_state();
            press(&mut state, code);
            assert!(state.should_quit);
        }

        let mut state = new_state();
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(state.should_quit);
    }
}

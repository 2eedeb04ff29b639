//! The one-button sleep/wake demo.

pub mod handler;
pub mod state;
pub mod view;

use crate::config::AppConfig;
use crate::event::{spawn_event_sources, AppEvent};
use crate::term::AppTerminal;
use anyhow::Result;
use tokio::sync::mpsc;

pub use state::ToggleApp;

pub async fn run(terminal: &mut AppTerminal, config: AppConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    spawn_event_sources(event_tx, config.ui.tick_rate_ms);

    let mut state = ToggleApp::new(&config);

    // Initial render
    terminal.draw(|f| view::render(f, &state))?;

    while let Some(event) = event_rx.recv().await {
        handler::handle_event(&mut state, event);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| view::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

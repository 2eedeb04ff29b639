use crate::clock::clock_text;
use crate::config::AppConfig;
use crate::controllers::{FormController, InputState, LogBuffer};

pub struct FormApp {
    pub controller: FormController,
    pub input: InputState,
    /// Entries scrolled down from the top of the log panel (0 = newest
    /// entry visible first).
    pub log_scroll: usize,
    pub clock: String,
    pub should_quit: bool,
    pub dirty: bool,
    clock_format: String,
}

impl FormApp {
    pub fn new(config: &AppConfig) -> Self {
        let clock_format = config.ui.timestamp_format.clone();
        let log = LogBuffer::with_timestamp_format(clock_format.clone());
        Self {
            controller: FormController::with_log(log),
            input: InputState::new(),
            log_scroll: 0,
            clock: clock_text(&clock_format),
            should_quit: false,
            dirty: true,
            clock_format,
        }
    }

    /// Re-read the wall clock; marks the UI dirty only when the rendered
    /// text actually changed.
    pub fn refresh_clock(&mut self) {
        let now = clock_text(&self.clock_format);
        if now != self.clock {
            self.clock = now;
            self.dirty = true;
        }
    }

    pub fn scroll_log_up(&mut self, lines: usize) {
        self.log_scroll = self.log_scroll.saturating_sub(lines);
    }

    pub fn scroll_log_down(&mut self, lines: usize) {
        let max = self.controller.log().len().saturating_sub(1);
        self.log_scroll = (self.log_scroll + lines).min(max);
    }
}

use crate::clock::clock_text;
use crate::config::AppConfig;
use crate::controllers::ToggleController;

pub struct ToggleApp {
    pub controller: ToggleController,
    pub clock: String,
    pub should_quit: bool,
    pub dirty: bool,
    clock_format: String,
}

impl ToggleApp {
    pub fn new(config: &AppConfig) -> Self {
        let clock_format = config.ui.timestamp_format.clone();
        Self {
            controller: ToggleController::new(),
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
}

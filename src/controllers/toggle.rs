//! The one-button sleep/wake screen.
//!
//! A single flag, flipped by the on-screen button. Volume keys are
//! one-directional: they can wake a sleeping phone but never put an awake
//! one to sleep.

/// Everything the toggle screen shows, derived from the sleep flag.
#[derive(Debug, PartialEq, Eq)]
pub struct ToggleDisplay {
    pub status_text: &'static str,
    pub hint_text: &'static str,
    pub action_label: &'static str,
}

const AWAKE_DISPLAY: ToggleDisplay = ToggleDisplay {
    status_text: "📱 Phone is AWAKE",
    hint_text: "Press the button to sleep",
    action_label: "🌙 SLEEP PHONE",
};

const SLEEPING_DISPLAY: ToggleDisplay = ToggleDisplay {
    status_text: "💤 Phone is SLEEPING",
    hint_text: "Press a volume key to wake up",
    action_label: "⏰ WAKE UP",
};

#[derive(Debug, Default)]
pub struct ToggleController {
    sleeping: bool,
}

impl ToggleController {
    pub fn new() -> Self {
        Self { sleeping: false }
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Flip the sleep flag and return the display for the new state.
    pub fn toggle(&mut self) -> &'static ToggleDisplay {
        self.sleeping = !self.sleeping;
        tracing::debug!(sleeping = self.sleeping, "toggled");
        self.display()
    }

    pub fn display(&self) -> &'static ToggleDisplay {
        if self.sleeping {
            &SLEEPING_DISPLAY
        } else {
            &AWAKE_DISPLAY
        }
    }

    /// Volume-up wake signal. Returns true if the phone woke.
    pub fn on_volume_up(&mut self) -> bool {
        self.wake_if_sleeping()
    }

    /// Volume-down wake signal. Returns true if the phone woke.
    pub fn on_volume_down(&mut self) -> bool {
        self.wake_if_sleeping()
    }

    fn wake_if_sleeping(&mut self) -> bool {
        if self.sleeping {
            self.toggle();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        for n in 0..8 {
            let mut ctl = ToggleController::new();
            for _ in 0..n {
                ctl.toggle();
            }
            assert_eq!(ctl.is_sleeping(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_display_follows_flag() {
        let mut ctl = ToggleController::new();
        assert_eq!(ctl.display().action_label, "🌙 SLEEP PHONE");
        let display = ctl.toggle();
        assert_eq!(display.status_text, "💤 Phone is SLEEPING");
        assert_eq!(display.action_label, "⏰ WAKE UP");
        assert_eq!(ctl.toggle().status_text, "📱 Phone is AWAKE");
    }

    #[test]
    fn test_volume_keys_only_wake() {
        let mut ctl = ToggleController::new();
        assert!(!ctl.on_volume_up());
        assert!(!ctl.on_volume_down());
        assert!(!ctl.is_sleeping());
        assert_eq!(ctl.display(), &AWAKE_DISPLAY);

        ctl.toggle();
        assert!(ctl.on_volume_up());
        assert!(!ctl.is_sleeping());

        ctl.toggle();
        assert!(ctl.on_volume_down());
        assert!(!ctl.is_sleeping());
    }
}

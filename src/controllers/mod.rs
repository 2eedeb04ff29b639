//! UI-free controllers owning all observable application state.
//!
//! Each screen has one controller: the toggle demo holds a single sleep
//! flag, the form demo holds a small awake/sleeping state machine plus the
//! bounded log buffer. The terminal layer renders whatever these expose and
//! forwards key presses back in; nothing here touches ratatui or crossterm.

pub mod form;
pub mod input;
pub mod logbuf;
pub mod toggle;

pub use form::{EmptyInputError, FormController, Phase, StatusKind};
pub use input::InputState;
pub use logbuf::{LogBuffer, LOG_CAPACITY};
pub use toggle::{ToggleController, ToggleDisplay};

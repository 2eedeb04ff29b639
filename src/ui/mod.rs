mod button;
mod input_box;
mod log_panel;
mod status_bar;
mod theme;

pub use button::{render_button, render_key_hints};
pub use input_box::render_input_box;
pub use log_panel::render_log_panel;
pub use status_bar::render_status_bar;
pub use theme::Theme;

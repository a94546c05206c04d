//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use forms::FormLayout;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_upload_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Notices are modal and drawn last
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}

/// Form layout for a full terminal of the given size, matching [`draw`]
pub fn form_layout(app: &App, width: u16, height: u16) -> FormLayout {
    let (main_area, _) = layout::create_layout(Rect::new(0, 0, width, height));
    FormLayout::new(main_area, app.form.state())
}

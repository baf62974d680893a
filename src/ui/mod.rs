//! UI module for rendering the TUI

mod community;
mod components;
mod forms;
mod landing;
mod layout;
mod project;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Landing => landing::draw(frame, main_area, app),
        View::Community => community::draw(frame, main_area, app),
        View::Project => project::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

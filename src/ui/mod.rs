//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod widgets;

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
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::ClaimForm => forms::draw(frame, main_area, &app.state.claim),
        View::RegistrationForm => forms::draw(frame, main_area, &app.state.registration),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

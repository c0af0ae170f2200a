//! Layout components (sidebar, status bar)

use crate::app::App;
use crate::state::{SubmissionStatus, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar items
const SIDEBAR_ITEMS: &[&str] = &["Home", "Claim", "Register"];

/// Create the main layout with sidebar, reserving the bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(BUTTON_HEIGHT), // Home
            Constraint::Length(BUTTON_HEIGHT), // Claim
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    for (idx, label) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = match idx {
            0 => matches!(app.state.current_view, View::Home),
            1 => matches!(app.state.current_view, View::ClaimForm),
            2 => matches!(app.state.current_view, View::RegistrationForm),
            _ => false,
        };
        render_button(frame, chunks[idx + 1], label, is_selected, true);
    }
}

/// Draw the bottom status bar with key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let mut spans = match app.state.current_view {
        View::Home => vec![
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::raw(": select  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": open  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ],
        View::ClaimForm | View::RegistrationForm => vec![
            Span::styled("Tab/↓", Style::default().fg(Color::Cyan)),
            Span::raw(": next  "),
            Span::styled("Shift+Tab/↑", Style::default().fg(Color::Cyan)),
            Span::raw(": prev  "),
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": back"),
        ],
    };

    if app
        .state
        .active_session()
        .is_some_and(|s| s.status() == SubmissionStatus::Submitting)
    {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, bar);
}

//! Generic schema-driven form page
//!
//! Renders one labeled control per descriptor in schema order, a submit
//! button row and the inline status line. The renderer holds no state: the
//! visible window is derived from the cursor on every frame.

use crate::state::{FieldDescriptor, FormSession, StatusTone};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::field_renderer::{draw_field, field_height};

/// Draw a form view from its session
pub fn draw(frame: &mut Frame, area: Rect, session: &FormSession) {
    let block = Block::default()
        .title(format!(" {} ", session.definition().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Field window
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(1),             // Status message
        ])
        .split(inner);

    draw_fields(frame, chunks[0], session);
    draw_submit_button(frame, chunks[1], session);
    draw_status(frame, chunks[2], session);
}

fn draw_fields(frame: &mut Frame, area: Rect, session: &FormSession) {
    if session.form().schema().is_empty() || area.height == 0 {
        return;
    }
    let descriptors = session.form().schema().descriptors();

    // When the cursor sits on the submit row, keep the tail of the schema
    // visible.
    let anchor = session.cursor().min(descriptors.len() - 1);
    let start = scroll_start(descriptors, anchor, area.height);

    let mut y = area.y;
    for (i, descriptor) in descriptors.iter().enumerate().skip(start) {
        let height = field_height(descriptor.kind);
        if y + height > area.y + area.height {
            break;
        }
        let field_area = Rect::new(area.x, y, area.width, height);
        let is_active = i == session.cursor();
        if let Some(value) = session.form().value_at(i) {
            draw_field(
                frame,
                field_area,
                descriptor,
                value,
                session.path_input(),
                is_active,
            );
        }
        y += height;
    }
}

/// First visible row such that the anchor field fits inside `avail` rows
fn scroll_start(descriptors: &[FieldDescriptor], anchor: usize, avail: u16) -> usize {
    let mut used = 0u16;
    let mut start = anchor;
    for i in (0..=anchor).rev() {
        let height = field_height(descriptors[i].kind);
        if used + height > avail {
            break;
        }
        used += height;
        start = i;
    }
    start
}

fn draw_submit_button(frame: &mut Frame, area: Rect, session: &FormSession) {
    let definition = session.definition();
    let label = if session.is_submitting() {
        definition.submitting_label
    } else {
        definition.submit_label
    };
    render_button(
        frame,
        area,
        label,
        session.on_submit_row(),
        !session.is_submitting(),
    );
}

fn draw_status(frame: &mut Frame, area: Rect, session: &FormSession) {
    let Some(message) = session.message() else {
        return;
    };
    let color = match message.tone {
        StatusTone::Success => Color::Green,
        StatusTone::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        message.text.clone(),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line).centered(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::claim_form;

    #[test]
    fn test_scroll_start_keeps_top_fields_in_view() {
        let definition = claim_form();
        let descriptors = definition.schema().descriptors();
        assert_eq!(scroll_start(descriptors, 0, 12), 0);
        assert_eq!(scroll_start(descriptors, 2, 12), 0);
    }

    #[test]
    fn test_scroll_start_keeps_anchor_visible() {
        let definition = claim_form();
        let descriptors = definition.schema().descriptors();
        // 12 rows fit four single-line fields; the anchor stays in window
        let start = scroll_start(descriptors, 20, 12);
        assert!(start <= 20);
        let visible: u16 = (start..=20).map(|i| field_height(descriptors[i].kind)).sum();
        assert!(visible <= 12);
    }

    #[test]
    fn test_scroll_start_with_tiny_viewport() {
        let definition = claim_form();
        let descriptors = definition.schema().descriptors();
        // viewport smaller than one field still anchors on the active row
        assert_eq!(scroll_start(descriptors, 5, 2), 5);
    }
}

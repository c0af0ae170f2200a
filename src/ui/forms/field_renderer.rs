//! Field rendering for schema-driven forms

use crate::state::{FieldDescriptor, FieldKind, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies on screen, borders included
pub fn field_height(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::MultilineText => 6,
        FieldKind::Text | FieldKind::File => 3,
    }
}

/// Draw one labeled input control bound to the field's current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    descriptor: &FieldDescriptor,
    value: &FieldValue,
    path_input: &str,
    is_active: bool,
) {
    match descriptor.kind {
        FieldKind::File => draw_file_field(frame, area, descriptor, value, path_input, is_active),
        FieldKind::Text | FieldKind::MultilineText => {
            draw_text_field(frame, area, descriptor, value, is_active)
        }
    }
}

fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    descriptor: &FieldDescriptor,
    value: &FieldValue,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = value.as_text();
    let display_str = if text.is_empty() && !is_active {
        "(empty)"
    } else {
        text
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if descriptor.kind == FieldKind::MultilineText {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", descriptor.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_file_field(
    frame: &mut Frame,
    area: Rect,
    descriptor: &FieldDescriptor,
    value: &FieldValue,
    path_input: &str,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // A path being typed takes precedence over the held attachment's label
    // so a replacement selection stays visible while edited.
    let line = if is_active && !path_input.is_empty() {
        Line::from(vec![
            Span::styled(path_input, Style::default().fg(Color::Cyan)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    } else if let Some(attachment) = value.attachment() {
        Line::from(Span::styled(
            attachment.selected_label(),
            Style::default().fg(Color::Blue),
        ))
    } else if is_active {
        Line::from(vec![
            Span::styled(
                "(type a file path, Enter to attach)",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::styled(
            "(no file)",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let block = Block::default()
        .title(format!(" {} ", descriptor.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

//! Home menu listing the two intake workflows

use crate::app::App;
use crate::state::HOME_ITEMS;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::widgets::render_scrollable_list;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = HOME_ITEMS
        .iter()
        .map(|(title, description)| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    *title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Cyan));

    render_scrollable_list(frame, area, list, app.state.home_selected);
}

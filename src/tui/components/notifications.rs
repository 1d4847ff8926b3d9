//! # Notifications Screen
//!
//! Inbox list. Enter marks the selected notification read, `a` marks all.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::notifications::{Notification, NotificationCategory};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxEvent {
    MarkRead(String),
    MarkAllRead,
}

#[derive(Debug, Default)]
pub struct InboxState {
    pub selected: usize,
    pub list_state: ListState,
}

impl InboxState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.list_state.select(Some(0));
        state
    }

    /// Needs the current items, so this is not an `EventHandler`.
    pub fn handle_event(&mut self, event: &TuiEvent, items: &[Notification]) -> Option<InboxEvent> {
        if items.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(items.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => items
                .get(self.selected)
                .map(|n| InboxEvent::MarkRead(n.id.clone())),
            TuiEvent::InputChar('a') => Some(InboxEvent::MarkAllRead),
            _ => None,
        }
    }
}

fn category_color(category: NotificationCategory) -> Color {
    match category {
        NotificationCategory::System => Color::Blue,
        NotificationCategory::Warranty => Color::Yellow,
        NotificationCategory::Promotion => Color::Magenta,
        NotificationCategory::Service => Color::Green,
    }
}

pub fn render_inbox(frame: &mut Frame, area: Rect, items: &[Notification], state: &mut InboxState) {
    let [header, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let unread = items.iter().filter(|n| !n.is_read).count();
    let summary = if unread == 0 {
        "Bạn đã đọc tất cả thông báo".to_string()
    } else {
        format!("{unread} thông báo chưa đọc")
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(summary, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "   a Đánh dấu tất cả đã đọc",
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        header,
    );

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let marker = if n.is_read {
                Span::raw("  ")
            } else {
                Span::styled("● ", Style::default().fg(Color::Red))
            };
            let mut title_style = if n.is_read {
                Style::default().fg(Color::Gray)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };
            if i == state.selected {
                title_style = title_style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(vec![
                Line::from(vec![
                    marker,
                    Span::styled(n.title.clone(), title_style),
                    Span::raw("  "),
                    Span::styled(
                        n.category.label(),
                        Style::default().fg(category_color(n.category)),
                    ),
                    Span::styled(
                        format!("  {}", n.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", n.description),
                    Style::default().fg(Color::Gray),
                )),
                Line::default(),
            ])
        })
        .collect();

    frame.render_stateful_widget(List::new(list_items), list_area, &mut state.list_state);
}

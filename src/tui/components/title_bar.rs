//! # TitleBar Component
//!
//! Top app bar: a back hint on the left, the screen title in the middle and
//! the notification bell with an unread badge on the right.
//!
//! Stateless. All fields are props computed by the caller:
//!
//! ```rust,ignore
//! TitleBar {
//!     can_go_back: app.navigation.can_go_back(),
//!     title: screen.title(),
//!     unread: app.notifications.unread_count(),
//!     bell_active: app.navigation.active_tab == Tab::Notifications,
//! }
//! .render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct TitleBar {
    pub can_go_back: bool,
    pub title: &'static str,
    pub unread: usize,
    pub bell_active: bool,
}

impl TitleBar {
    fn left(&self) -> Span<'static> {
        if self.can_go_back {
            Span::styled("‹ Esc", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "⚡",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }
    }

    fn right(&self) -> Line<'static> {
        let bell_style = if self.bell_active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let mut spans = vec![Span::styled("🔔", bell_style)];
        if self.unread > 0 {
            spans.push(Span::styled(
                format!(" {}", self.unread),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [left, center, right] = Layout::horizontal([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(8),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(self.left()), left);
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.title,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            center,
        );
        frame.render_widget(Paragraph::new(self.right()).alignment(Alignment::Right), right);
    }
}

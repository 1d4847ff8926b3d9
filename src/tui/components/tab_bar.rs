//! Bottom navigation bar. Tabs are numbered for the `1`-`5` hotkeys.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::navigation::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Tab,
    pub unread: usize,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(inner);
        for (i, tab) in Tab::ALL.iter().enumerate() {
            let style = if *tab == self.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let mut spans = vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(tab.label(), style),
            ];
            if *tab == Tab::Notifications && self.unread > 0 {
                spans.push(Span::styled(" ●", Style::default().fg(Color::Red)));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)).centered(), cells[i]);
        }
    }
}

/// Maps a digit hotkey to its tab.
pub fn tab_for_key(c: char) -> Option<Tab> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    Tab::ALL.get(index).copied()
}

//! # Menu Component
//!
//! Vertical list of selectable entries, used by the home, support and
//! account screens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState`
//! - `Menu` is created each frame with borrowed state and the entries

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// One row: label, muted subtitle, and whether it does anything.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub label: &'static str,
    pub sub: &'static str,
    pub enabled: bool,
    pub danger: bool,
}

impl MenuEntry {
    pub const fn new(label: &'static str, sub: &'static str) -> Self {
        Self {
            label,
            sub,
            enabled: true,
            danger: false,
        }
    }

    /// Shown but inert.
    pub const fn disabled(label: &'static str, sub: &'static str) -> Self {
        Self {
            label,
            sub,
            enabled: false,
            danger: false,
        }
    }

    pub const fn danger(label: &'static str, sub: &'static str) -> Self {
        Self {
            label,
            sub,
            enabled: true,
            danger: true,
        }
    }
}

/// Persistent selection state for a menu.
#[derive(Debug, Default)]
pub struct MenuState {
    pub selected: usize,
    len: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            selected: 0,
            len,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

impl EventHandler for MenuState {
    /// Index of the activated entry.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp | TuiEvent::BackTab => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::Tab => {
                self.select((self.selected + 1).min(self.len - 1));
                None
            }
            TuiEvent::Submit => Some(self.selected),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct Menu<'a> {
    pub title: &'static str,
    pub entries: &'a [MenuEntry],
    pub state: &'a mut MenuState,
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let label_style = match (i == self.state.selected, entry.danger, entry.enabled) {
                    (true, true, _) => Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                    (true, false, _) => Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                    (false, true, _) => Style::default().fg(Color::Red),
                    (false, false, true) => Style::default().fg(Color::White),
                    (false, false, false) => Style::default().fg(Color::Gray),
                };
                let mut lines = vec![Line::from(vec![
                    Span::styled(entry.label, label_style),
                    Span::styled("  ›", Style::default().fg(Color::DarkGray)),
                ])];
                if !entry.sub.is_empty() {
                    lines.push(Line::from(Span::styled(
                        entry.sub,
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

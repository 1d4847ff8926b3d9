//! # Form Component
//!
//! Text fields followed by a row of buttons, all on one focus ring.
//! Login, sign-up, forgot-password and profile edit are all forms.
//!
//! Keys: Tab/↓ next, Shift+Tab/↑ previous, Enter advances through the fields
//! and activates buttons. Enter in the last field activates the first button.
//! Everything else goes to the focused field.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::{EventHandler, Focus};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info(&'static str),
    Error(&'static str),
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<TextField>,
    pub buttons: &'static [&'static str],
    pub focus: Focus,
    pub notice: Option<Notice>,
}

impl Form {
    pub fn new(fields: Vec<TextField>, buttons: &'static [&'static str]) -> Self {
        let focus = Focus::new(fields.len() + buttons.len());
        Self {
            fields,
            buttons,
            focus,
            notice: None,
        }
    }

    /// True while a text field has focus (global hotkeys are suppressed).
    pub fn is_typing(&self) -> bool {
        self.focus.index < self.fields.len()
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn all_filled(&self) -> bool {
        self.fields.iter().all(|f| !f.is_blank())
    }

    /// Rows needed to draw the form without clipping.
    pub fn height(&self) -> u16 {
        (self.fields.len() as u16) * 3 + 1 + self.buttons.len() as u16 + 2
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut constraints: Vec<Constraint> =
            self.fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(1));
        constraints.extend(self.buttons.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(area);

        for (i, field) in self.fields.iter().enumerate() {
            field.render(frame, rows[i], self.focus.is(i));
        }

        let first_button_row = self.fields.len() + 1;
        for (i, label) in self.buttons.iter().enumerate() {
            let focused = self.focus.is(self.fields.len() + i);
            let style = match (focused, i) {
                (true, _) => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (false, 0) => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (false, _) => Style::default().fg(Color::Cyan),
            };
            let button = Paragraph::new(Line::from(Span::styled(format!(" {label} "), style)));
            frame.render_widget(button, rows[first_button_row + i]);
        }

        if let Some(notice) = self.notice {
            let (text, color) = match notice {
                Notice::Info(text) => (text, Color::Green),
                Notice::Error(text) => (text, Color::Red),
            };
            let notice_row = first_button_row + self.buttons.len();
            let notice_area = rows[notice_row].union(rows[notice_row + 1]);
            frame.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(color)))
                    .wrap(Wrap { trim: true }),
                notice_area,
            );
        }
    }
}

impl EventHandler for Form {
    /// Index of the activated button.
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<usize> {
        match event {
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus.next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus.prev();
                None
            }
            TuiEvent::Submit => {
                let index = self.focus.index;
                if index + 1 == self.fields.len() && !self.buttons.is_empty() {
                    Some(0)
                } else if index < self.fields.len() {
                    self.focus.next();
                    None
                } else {
                    Some(index - self.fields.len())
                }
            }
            other => {
                if let Some(field) = self.fields.get_mut(self.focus.index)
                    && field.handle_event(other)
                {
                    self.notice = None;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_field_form() -> Form {
        Form::new(
            vec![TextField::new("A", ""), TextField::new("B", "")],
            &["OK", "Cancel"],
        )
    }

    #[test]
    fn test_enter_walks_fields_then_submits() {
        let mut form = two_field_form();
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
        assert_eq!(form.focus.index, 1);
        assert_eq!(form.handle_event(&TuiEvent::Submit), Some(0));
    }

    #[test]
    fn test_buttons_report_their_index() {
        let mut form = two_field_form();
        form.handle_event(&TuiEvent::BackTab);
        assert!(!form.is_typing());
        assert_eq!(form.handle_event(&TuiEvent::Submit), Some(1));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = two_field_form();
        form.handle_event(&TuiEvent::InputChar('x'));
        form.handle_event(&TuiEvent::Tab);
        form.handle_event(&TuiEvent::InputChar('y'));
        assert_eq!(form.value(0), "x");
        assert_eq!(form.value(1), "y");
        assert!(form.all_filled());
    }

    #[test]
    fn test_editing_clears_notice() {
        let mut form = two_field_form();
        form.notice = Some(Notice::Error("sai"));
        form.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(form.notice, None);
    }
}

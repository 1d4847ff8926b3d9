//! Single-line text field used by every form.
//!
//! The cursor is a byte offset into `value` that always sits on a char
//! boundary. The on-screen column is measured with `unicode-width`, so
//! Vietnamese diacritics and wide glyphs place the terminal cursor correctly.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// Byte offset, always on a char boundary.
    cursor: usize,
    /// Render as bullets (passwords).
    pub masked: bool,
    /// Uppercase typed input (serial numbers).
    pub uppercase: bool,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            cursor: 0,
            masked: false,
            uppercase: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing event. Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert_str(&c.to_string());
                true
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flat);
                true
            }
            TuiEvent::Backspace => {
                if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
                    self.value.replace_range(idx..self.cursor, "");
                    self.cursor = idx;
                }
                true
            }
            TuiEvent::Delete => {
                if let Some(c) = self.value[self.cursor..].chars().next() {
                    let end = self.cursor + c.len_utf8();
                    self.value.replace_range(self.cursor..end, "");
                }
                true
            }
            TuiEvent::CursorLeft => {
                if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
                    self.cursor = idx;
                }
                true
            }
            TuiEvent::CursorRight => {
                if let Some(c) = self.value[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                true
            }
            TuiEvent::Home => {
                self.cursor = 0;
                true
            }
            TuiEvent::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }

    fn insert_str(&mut self, text: &str) {
        let text = if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        self.value.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Display column of the cursor relative to the start of the text.
    pub fn cursor_column(&self) -> u16 {
        let before = if self.masked {
            "•".repeat(self.value[..self.cursor].chars().count())
        } else {
            self.value[..self.cursor].to_string()
        };
        before.width() as u16
    }

    /// Draw a bordered field (3 rows). The terminal cursor is placed only
    /// when the field is focused.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.label), border_style));

        let inner_width = area.width.saturating_sub(2);
        let cursor_col = self.cursor_column();
        // Keep the cursor visible when the text is wider than the field
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.display_text())
        };
        let paragraph = Paragraph::new(line).block(block).scroll((0, scroll));
        frame.render_widget(paragraph, area);

        if focused && area.height >= 3 {
            frame.set_cursor_position(Position::new(
                area.x + 1 + cursor_col - scroll,
                area.y + 1,
            ));
        }
    }
}

//! # Warranty Check Form
//!
//! Serial lookup, the result card, and the tech-advice request.
//!
//! ```text
//! ┌ S/N ───────────┐
//! │ SP123456       │   [Kiểm tra]
//! └────────────────┘
//! ┌ Kết quả tra cứu ──────────────────────┐
//! │ Inverter Hybrid 5kW   Còn bảo hành    │
//! │ ...                                   │
//! │ → Gửi yêu cầu hỗ trợ kỹ thuật         │
//! └───────────────────────────────────────┘
//! ‹ Lỗi kết nối Wi-Fi ›   [mô tả]   [Hỏi trợ lý AI]
//! ┌ Tư vấn kỹ thuật ──────────────────────┐
//! │ markdown...                           │
//! └───────────────────────────────────────┘
//! ```
//!
//! A hit only reveals the card. Submitting a ticket is an explicit step.

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::advice::AdviceRequest;
use crate::core::catalog::{WarrantyRecord, WarrantyState, issue_family_for_model, issues_for};
use crate::core::state::AdviceStatus;
use crate::core::warranty::{lookup, new_ticket_id};
use crate::tui::component::{EventHandler, Focus};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// Focus slots
const SERIAL: usize = 0;
const CHECK: usize = 1;
const TICKET: usize = 2;
const ISSUE: usize = 3;
const DESCRIPTION: usize = 4;
const ASK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupResult {
    Found(&'static WarrantyRecord),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarrantyEvent {
    SubmitTicket(String),
    RequestAdvice(AdviceRequest),
}

pub struct WarrantyFormState {
    pub serial: TextField,
    pub result: Option<LookupResult>,
    pub issue: usize,
    pub description: TextField,
    pub focus: Focus,
    pub error: Option<&'static str>,
}

impl WarrantyFormState {
    pub fn new() -> Self {
        Self {
            serial: TextField::new("Số serial", "Nhập S/N hoặc SĐT...").uppercase(),
            result: None,
            issue: 0,
            description: TextField::new("Mô tả sự cố", "Ví dụ: đèn báo đỏ, không lên nguồn..."),
            focus: Focus::new(2),
            error: None,
        }
    }

    pub fn found(&self) -> Option<&'static WarrantyRecord> {
        match self.result {
            Some(LookupResult::Found(record)) => Some(record),
            _ => None,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.focus.is(SERIAL) || self.focus.is(DESCRIPTION)
    }

    fn issues(&self) -> &'static [&'static str] {
        self.found()
            .map(|r| issues_for(issue_family_for_model(r.model)))
            .unwrap_or(&[])
    }

    fn check(&mut self) {
        self.result = Some(match lookup(&self.serial.value) {
            Some(record) => LookupResult::Found(record),
            None => LookupResult::NotFound,
        });
        self.issue = 0;
        self.error = None;
        let slots = if self.found().is_some() { 6 } else { 2 };
        self.focus.resize(slots);
    }

    /// A result belongs to the serial it was looked up with.
    fn clear_result(&mut self) {
        self.result = None;
        self.issue = 0;
        self.error = None;
        self.focus.resize(2);
    }

    fn cycle_issue(&mut self, forward: bool) {
        let len = self.issues().len();
        if len == 0 {
            return;
        }
        self.issue = if forward {
            (self.issue + 1) % len
        } else {
            (self.issue + len - 1) % len
        };
    }

    fn advice_request(&mut self) -> Option<AdviceRequest> {
        let record = self.found()?;
        if self.description.is_blank() {
            self.error = Some("Vui lòng mô tả sự cố trước khi hỏi trợ lý.");
            return None;
        }
        let issue = self.issues().get(self.issue).copied().unwrap_or("Khác");
        Some(AdviceRequest {
            product_type: issue_family_for_model(record.model).to_string(),
            issue_category: issue.to_string(),
            description: self.description.value.clone(),
        })
    }
}

impl EventHandler for WarrantyFormState {
    type Event = WarrantyEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<WarrantyEvent> {
        match event {
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus.next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus.prev();
                None
            }
            TuiEvent::Submit => match self.focus.index {
                SERIAL | CHECK => {
                    self.check();
                    None
                }
                TICKET => Some(WarrantyEvent::SubmitTicket(new_ticket_id())),
                ISSUE | DESCRIPTION => {
                    self.focus.next();
                    None
                }
                _ => self.advice_request().map(WarrantyEvent::RequestAdvice),
            },
            TuiEvent::CursorLeft if self.focus.is(ISSUE) => {
                self.cycle_issue(false);
                None
            }
            TuiEvent::CursorRight if self.focus.is(ISSUE) => {
                self.cycle_issue(true);
                None
            }
            other if self.focus.is(SERIAL) => {
                let before = self.serial.value.clone();
                if self.serial.handle_event(other) && self.serial.value != before {
                    self.clear_result();
                }
                None
            }
            other => {
                if self.focus.is(DESCRIPTION) && self.description.handle_event(other) {
                    self.error = None;
                }
                None
            }
        }
    }
}

/// Transient render wrapper.
pub struct WarrantyForm<'a> {
    pub state: &'a WarrantyFormState,
    pub advice: &'a AdviceStatus,
    pub today: NaiveDate,
    pub spinner_frame: usize,
}

impl WarrantyForm<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let found = self.state.found();
        let card_height = match self.state.result {
            Some(LookupResult::Found(_)) => 8,
            Some(LookupResult::NotFound) => 3,
            None => 0,
        };
        let advice_height = if found.is_some() { 3 } else { 0 };
        let [intro, input_row, card_area, advice_inputs, panel_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(card_height),
            Constraint::Length(advice_height + 1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    "Kiểm tra bảo hành sản phẩm",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Kiểm tra thông tin bảo hành thiết bị SOLPOWER nhanh chóng.",
                    Style::default().fg(Color::Gray),
                )),
            ]),
            intro,
        );

        let [serial_area, check_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(14)]).areas(input_row);
        self.state
            .serial
            .render(frame, serial_area, self.state.focus.is(SERIAL));
        frame.render_widget(
            Paragraph::new(button(" Kiểm tra ", self.state.focus.is(CHECK)))
                .block(Block::default().padding(Padding::top(1))),
            check_area,
        );

        match self.state.result {
            Some(LookupResult::Found(record)) => self.render_card(frame, card_area, record),
            Some(LookupResult::NotFound) => frame.render_widget(
                Paragraph::new(Span::styled(
                    "Không tìm thấy thông tin bảo hành cho số serial này.",
                    Style::default().fg(Color::Red),
                ))
                .block(Block::default().padding(Padding::uniform(1)))
                .wrap(Wrap { trim: true }),
                card_area,
            ),
            None => {}
        }

        if found.is_some() {
            self.render_advice_inputs(frame, advice_inputs);
            self.render_advice_panel(frame, panel_area);
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, record: &WarrantyRecord) {
        let status_color = match record.status {
            WarrantyState::Valid => Color::Green,
            WarrantyState::Near => Color::Yellow,
            WarrantyState::Expired => Color::Red,
        };
        let label = Style::default().fg(Color::DarkGray);
        let remaining = record.remaining(self.today).label();
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    record.product_name,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("● {}", record.status.label()),
                    Style::default().fg(status_color),
                ),
            ]),
            Line::from(Span::styled(format!("Model: {}", record.model), label)),
            Line::from(vec![
                Span::styled("Số serial: ", label),
                Span::raw(record.serial),
                Span::styled("   Ngày kích hoạt: ", label),
                Span::raw(record.activation_date.format("%d/%m/%Y").to_string()),
            ]),
            Line::from(vec![
                Span::styled("Thời hạn đến: ", label),
                Span::styled(
                    format!(
                        "{} ({})",
                        record.expiry_date.format("%d/%m/%Y"),
                        remaining
                    ),
                    Style::default().fg(Color::Green),
                ),
            ]),
            Line::default(),
            button(
                "→ Gửi yêu cầu hỗ trợ kỹ thuật",
                self.state.focus.is(TICKET),
            ),
        ];
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Kết quả tra cứu ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, area);
    }

    fn render_advice_inputs(&self, frame: &mut Frame, area: Rect) {
        let [issue_area, desc_area, ask_area] = Layout::horizontal([
            Constraint::Length(28),
            Constraint::Min(10),
            Constraint::Length(18),
        ])
        .areas(area);

        let issue = self
            .state
            .issues()
            .get(self.state.issue)
            .copied()
            .unwrap_or("Khác");
        let issue_style = if self.state.focus.is(ISSUE) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(format!("‹ {issue} ›")).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(issue_style)
                    .title(" Loại sự cố "),
            ),
            issue_area,
        );
        self.state
            .description
            .render(frame, desc_area, self.state.focus.is(DESCRIPTION));

        let mut ask = vec![button(" Hỏi trợ lý AI ", self.state.focus.is(ASK))];
        if let Some(error) = self.state.error {
            ask.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
        }
        frame.render_widget(
            Paragraph::new(ask)
                .block(Block::default().padding(Padding::top(1)))
                .wrap(Wrap { trim: true }),
            ask_area,
        );
    }

    fn render_advice_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Tư vấn kỹ thuật ")
            .padding(Padding::horizontal(1));
        let body = match self.advice {
            AdviceStatus::Idle => Paragraph::new(Span::styled(
                "Mô tả sự cố và chọn \"Hỏi trợ lý AI\" để nhận hướng dẫn kiểm tra nhanh.",
                Style::default().fg(Color::DarkGray),
            )),
            AdviceStatus::Loading => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                Paragraph::new(Span::styled(
                    format!("{spinner} Đang phân tích sự cố..."),
                    Style::default().fg(Color::Yellow),
                ))
            }
            AdviceStatus::Ready(text) => Paragraph::new(markdown::render(text, Color::White)),
        };
        frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
    }
}

fn button(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label.to_string(), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_serial(state: &mut WarrantyFormState, s: &str) {
        for c in s.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn found_state() -> WarrantyFormState {
        let mut state = WarrantyFormState::new();
        type_serial(&mut state, " sp123456 ");
        state.handle_event(&TuiEvent::Submit);
        state
    }

    #[test]
    fn test_lookup_hit_reveals_card_without_event() {
        let state = found_state();
        assert_eq!(state.found().map(|r| r.serial), Some("SP123456"));
    }

    #[test]
    fn test_lookup_miss() {
        let mut state = WarrantyFormState::new();
        type_serial(&mut state, "XYZ");
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.result, Some(LookupResult::NotFound));
        // Only serial and the check button remain focusable
        state.handle_event(&TuiEvent::Tab);
        state.handle_event(&TuiEvent::Tab);
        assert!(state.focus.is(SERIAL));
    }

    #[test]
    fn test_editing_serial_drops_previous_result() {
        let mut state = found_state();
        assert!(state.focus.is(SERIAL));

        // Moving the cursor is not an edit
        state.handle_event(&TuiEvent::Home);
        assert!(state.found().is_some());

        state.handle_event(&TuiEvent::End);
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::Backspace);
        assert_eq!(state.serial.value, " SP12345");
        assert_eq!(state.result, None);

        // Ticket and advice slots are gone until the next lookup
        state.handle_event(&TuiEvent::Tab);
        state.handle_event(&TuiEvent::Tab);
        assert!(state.focus.is(SERIAL));
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.result, Some(LookupResult::NotFound));
    }

    #[test]
    fn test_ticket_button_emits_ticket_id() {
        let mut state = found_state();
        state.handle_event(&TuiEvent::Tab);
        state.handle_event(&TuiEvent::Tab);
        match state.handle_event(&TuiEvent::Submit) {
            Some(WarrantyEvent::SubmitTicket(id)) => {
                assert!(id.starts_with("TK-"));
                assert_eq!(id.len(), 8);
            }
            other => panic!("expected ticket, got {:?}", other),
        }
    }

    #[test]
    fn test_advice_requires_description() {
        let mut state = found_state();
        state.focus.index = ASK;
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_advice_request_uses_family_and_issue() {
        let mut state = found_state();
        state.focus.index = ISSUE;
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::Submit);
        assert!(state.is_typing());
        for c in "Báo lỗi".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        assert!(state.error.is_none());
        state.handle_event(&TuiEvent::Submit);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(WarrantyEvent::RequestAdvice(AdviceRequest {
                product_type: "inverter".to_string(),
                issue_category: "Lỗi AC Overload".to_string(),
                description: "Báo lỗi".to_string(),
            }))
        );
    }

    #[test]
    fn test_issue_cycles_backwards_to_other() {
        let mut state = found_state();
        state.focus.index = ISSUE;
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.issues()[state.issue], "Khác");
    }
}

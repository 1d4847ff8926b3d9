//! Support menu and the ticket-success screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::action::Action;
use crate::tui::component::Component;
use crate::tui::components::menu::{Menu, MenuEntry, MenuState};

pub const SUPPORT_ENTRIES: &[MenuEntry] = &[
    MenuEntry::disabled("Hướng dẫn sử dụng", "Tài liệu kỹ thuật & lắp đặt"),
    MenuEntry::disabled("Câu hỏi thường gặp", "Giải đáp các vấn đề phổ biến"),
    MenuEntry::disabled("Gửi yêu cầu hỗ trợ", "Báo cáo sự cố hệ thống"),
    MenuEntry::new("Kiểm tra bảo hành", "Tra cứu thời hạn & chính sách"),
];

/// Action for an activated support entry. Only the warranty check is wired.
pub fn support_action(index: usize) -> Option<Action> {
    match SUPPORT_ENTRIES.get(index) {
        Some(entry) if entry.enabled => Some(Action::OpenWarrantyForm),
        _ => None,
    }
}

pub fn render_support_menu(frame: &mut Frame, area: Rect, menu: &mut MenuState) {
    let [menu_area, contact] = Layout::vertical([
        Constraint::Length(SUPPORT_ENTRIES.len() as u16 * 2 + 2),
        Constraint::Length(4),
    ])
    .areas(area);

    Menu {
        title: "Danh mục hỗ trợ",
        entries: SUPPORT_ENTRIES,
        state: menu,
    }
    .render(frame, menu_area);

    let card = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "Liên hệ kỹ thuật",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Trực tuyến 24/7", Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            "Hotline: 1900-1080",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(card, contact);
}

pub fn render_ticket_success(frame: &mut Frame, area: Rect, ticket_id: &str) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "✔",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thành công!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Yêu cầu của bạn đã được tiếp nhận.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(" {ticket_id} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter Quay lại",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::top(1))),
        area,
    );
}

//! Home screen: the scan banner, two shortcuts, and the featured project.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::navigation::Tab;
use crate::tui::component::Component;
use crate::tui::components::menu::{Menu, MenuEntry, MenuState};

pub const HOME_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new("Tra cứu bảo hành", "Quét mã hoặc nhập số serial thiết bị"),
    MenuEntry::new("Hỗ trợ kỹ thuật", "Hướng dẫn, câu hỏi thường gặp, liên hệ"),
];

/// Action for an activated home entry.
pub fn home_action(index: usize) -> Option<Action> {
    match index {
        0 => Some(Action::RequestWarrantyFlow),
        1 => Some(Action::SelectTab(Tab::Support)),
        _ => None,
    }
}

pub fn render_home(frame: &mut Frame, area: Rect, menu: &mut MenuState) {
    let [banner, shortcuts, featured] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(HOME_ENTRIES.len() as u16 * 2 + 2),
        Constraint::Min(0),
    ])
    .areas(area);

    let banner_text = Paragraph::new(vec![
        Line::from(Span::styled(
            "Quét mã thiết bị",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Truy cập bảo hành & thông số",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(banner_text, banner);

    Menu {
        title: "Lối tắt",
        entries: HOME_ENTRIES,
        state: menu,
    }
    .render(frame, shortcuts);

    let project = Paragraph::new(vec![
        Line::from(Span::styled(
            "Hệ thống 15kWp - Biệt thự Đà Nẵng",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Lắp đặt tháng 12/2023",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Dự án nổi bật "),
    );
    frame.render_widget(project, featured);
}

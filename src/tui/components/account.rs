//! # Account Screens
//!
//! Profile card with the account menu, and the profile edit form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::state::Profile;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::form::{Form, Notice};
use crate::tui::components::menu::{Menu, MenuEntry, MenuState};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

pub const ACCOUNT_ENTRIES: &[MenuEntry] = &[
    MenuEntry::new("Thông tin tài khoản", "Họ tên, số điện thoại, email"),
    MenuEntry::disabled("Sản phẩm của tôi", ""),
    MenuEntry::disabled("Lịch sử bảo hành", ""),
    MenuEntry::danger("Đăng xuất", ""),
];

pub fn account_action(index: usize) -> Option<Action> {
    match index {
        0 => Some(Action::OpenProfileEdit),
        3 => Some(Action::Logout),
        _ => None,
    }
}

pub fn render_account(frame: &mut Frame, area: Rect, profile: &Profile, menu: &mut MenuState) {
    let [card, menu_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(ACCOUNT_ENTRIES.len() as u16 * 2 + 2),
    ])
    .areas(area);

    let profile_card = Paragraph::new(vec![
        Line::from(Span::styled(
            profile.full_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.tier.clone(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow),
        )),
        Line::from(Span::styled(
            format!("{} · {}", profile.phone, profile.email),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(profile_card, card);

    Menu {
        title: "Tài khoản",
        entries: ACCOUNT_ENTRIES,
        state: menu,
    }
    .render(frame, menu_area);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    Save(Profile),
    Cancel,
}

pub struct ProfileForm {
    pub form: Form,
    tier: String,
}

impl ProfileForm {
    const BUTTONS: &'static [&'static str] = &["Lưu thay đổi", "Hủy"];

    pub fn new(profile: &Profile) -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Họ và tên", "").with_value(&profile.full_name),
                    TextField::new("Số điện thoại", "").with_value(&profile.phone),
                    TextField::new("Email", "").with_value(&profile.email),
                ],
                Self::BUTTONS,
            ),
            tier: profile.tier.clone(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner = area.inner(ratatui::layout::Margin {
            horizontal: 2,
            vertical: 1,
        });
        self.form.render(frame, inner);
    }
}

impl EventHandler for ProfileForm {
    type Event = ProfileEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ProfileEvent> {
        match self.form.handle_event(event)? {
            0 if self.form.all_filled() => Some(ProfileEvent::Save(Profile {
                full_name: self.form.value(0).trim().to_string(),
                phone: self.form.value(1).trim().to_string(),
                email: self.form.value(2).trim().to_string(),
                tier: self.tier.clone(),
            })),
            0 => {
                self.form.notice = Some(Notice::Error("Không được để trống thông tin."));
                None
            }
            _ => Some(ProfileEvent::Cancel),
        }
    }
}

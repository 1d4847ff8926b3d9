//! # Auth Screens
//!
//! Login, sign-up, forgot-password and the policy overlay. Only login has a
//! real outcome (the mocked session starts). Sign-up and forgot-password
//! acknowledge the submission and change nothing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::auth::Policy;
use crate::tui::component::EventHandler;
use crate::tui::components::form::{Form, Notice};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

/// High-level outcomes of the auth screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    Login,
    GoToSignUp,
    GoToForgot,
    ShowPolicy(Policy),
    BackToLogin,
}

fn heading(title: &'static str, intro: &'static str) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(intro, Style::default().fg(Color::Gray))),
    ])
}

fn render_page(frame: &mut Frame, area: Rect, form: &Form, title: &'static str, intro: &'static str) {
    let [head, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area.inner(
            ratatui::layout::Margin {
                horizontal: 2,
                vertical: 1,
            },
        ));
    frame.render_widget(Paragraph::new(heading(title, intro)).wrap(Wrap { trim: true }), head);
    form.render(frame, body);
}

// ── Login ───────────────────────────────────────────────────────────────────

pub struct LoginForm {
    pub form: Form,
}

impl LoginForm {
    const BUTTONS: &'static [&'static str] = &["Đăng nhập", "Quên mật khẩu?", "Đăng ký ngay"];

    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Số điện thoại / Email", "Nhập email hoặc SĐT..."),
                    TextField::new("Mật khẩu", "Nhập mật khẩu...").masked(),
                ],
                Self::BUTTONS,
            ),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_page(
            frame,
            area,
            &self.form,
            "Chào mừng trở lại!",
            "Đăng nhập để quản lý hệ thống điện mặt trời của bạn.",
        );
    }
}

impl EventHandler for LoginForm {
    type Event = AuthEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AuthEvent> {
        match self.form.handle_event(event)? {
            0 if self.form.all_filled() => Some(AuthEvent::Login),
            0 => {
                self.form.notice = Some(Notice::Error("Vui lòng nhập đầy đủ tài khoản và mật khẩu."));
                None
            }
            1 => Some(AuthEvent::GoToForgot),
            _ => Some(AuthEvent::GoToSignUp),
        }
    }
}

// ── Sign up ─────────────────────────────────────────────────────────────────

pub struct SignUpForm {
    pub form: Form,
}

impl SignUpForm {
    const BUTTONS: &'static [&'static str] = &[
        "Tạo tài khoản",
        "Điều khoản sử dụng",
        "Chính sách bảo mật",
        "Đã có tài khoản? Đăng nhập",
    ];

    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Họ và tên", "Nhập họ và tên của bạn..."),
                    TextField::new("Số điện thoại / Email", "Nhập email hoặc SĐT..."),
                    TextField::new("Mật khẩu", "Tạo mật khẩu mạnh...").masked(),
                    TextField::new("Xác nhận mật khẩu", "Nhập lại mật khẩu...").masked(),
                ],
                Self::BUTTONS,
            ),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_page(
            frame,
            area,
            &self.form,
            "Đăng ký tài khoản",
            "Bắt đầu quản lý năng lượng sạch cùng SOLPOWER.",
        );
    }
}

impl EventHandler for SignUpForm {
    type Event = AuthEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AuthEvent> {
        match self.form.handle_event(event)? {
            0 => {
                self.form.notice = Some(if !self.form.all_filled() {
                    Notice::Error("Vui lòng điền đầy đủ thông tin.")
                } else if self.form.value(2) != self.form.value(3) {
                    Notice::Error("Mật khẩu xác nhận không khớp.")
                } else {
                    Notice::Info("Đã ghi nhận yêu cầu đăng ký. Vui lòng đăng nhập để tiếp tục.")
                });
                None
            }
            1 => Some(AuthEvent::ShowPolicy(Policy::Terms)),
            2 => Some(AuthEvent::ShowPolicy(Policy::Privacy)),
            _ => Some(AuthEvent::BackToLogin),
        }
    }
}

// ── Forgot password ─────────────────────────────────────────────────────────

pub struct ForgotForm {
    pub form: Form,
}

impl ForgotForm {
    const BUTTONS: &'static [&'static str] = &["Gửi yêu cầu khôi phục", "Quay lại đăng nhập"];

    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![TextField::new(
                    "Email hoặc Số điện thoại",
                    "Nhập thông tin đã đăng ký...",
                )],
                Self::BUTTONS,
            ),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [top, info] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(4)]).areas(area);
        render_page(
            frame,
            top,
            &self.form,
            "Quên mật khẩu?",
            "Đừng lo lắng! Nhập email hoặc số điện thoại để nhận hướng dẫn khôi phục.",
        );
        let hint = Paragraph::new(
            "Hệ thống sẽ gửi mã xác thực (OTP) qua kênh bạn đã đăng ký. \
             Vui lòng kiểm tra kỹ tin nhắn hoặc hộp thư đến.",
        )
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, info);
    }
}

impl EventHandler for ForgotForm {
    type Event = AuthEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AuthEvent> {
        match self.form.handle_event(event)? {
            0 if self.form.all_filled() => {
                self.form.notice = Some(Notice::Info("Đã gửi yêu cầu khôi phục mật khẩu."));
                None
            }
            0 => {
                self.form.notice = Some(Notice::Error("Vui lòng nhập email hoặc số điện thoại."));
                None
            }
            _ => Some(AuthEvent::BackToLogin),
        }
    }
}

// ── Policy overlay ──────────────────────────────────────────────────────────

/// Scroll offset of the policy overlay.
#[derive(Debug, Default)]
pub struct PolicyState {
    pub scroll: u16,
}

/// Events emitted by the policy overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyEvent {
    Close,
}

impl EventHandler for PolicyState {
    type Event = PolicyEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PolicyEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            TuiEvent::Submit | TuiEvent::Escape => Some(PolicyEvent::Close),
            _ => None,
        }
    }
}

pub fn render_policy(frame: &mut Frame, area: Rect, policy: Policy, state: &PolicyState) {
    let overlay = centered_rect(90, 90, area);
    frame.render_widget(Clear, overlay);

    let mut lines = Vec::new();
    for (title, content) in policy.sections() {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            *content,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", policy.title()))
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(" Enter Tôi đã hiểu  ↑↓ Cuộn ").centered())
        .padding(Padding::horizontal(1));

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0));
    frame.render_widget(body, overlay);
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(handler: &mut impl EventHandler<Event = AuthEvent>, s: &str) {
        for c in s.chars() {
            handler.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut login = LoginForm::new();
        type_str(&mut login, "0901234567");
        login.handle_event(&TuiEvent::Tab);
        assert_eq!(login.handle_event(&TuiEvent::Submit), None);
        assert!(matches!(login.form.notice, Some(Notice::Error(_))));

        type_str(&mut login, "secret");
        assert_eq!(login.handle_event(&TuiEvent::Submit), Some(AuthEvent::Login));
    }

    #[test]
    fn test_login_links() {
        let mut login = LoginForm::new();
        login.handle_event(&TuiEvent::BackTab);
        assert_eq!(login.handle_event(&TuiEvent::Submit), Some(AuthEvent::GoToSignUp));
        login.handle_event(&TuiEvent::BackTab);
        assert_eq!(login.handle_event(&TuiEvent::Submit), Some(AuthEvent::GoToForgot));
    }

    #[test]
    fn test_signup_policy_links_and_mismatch() {
        let mut signup = SignUpForm::new();
        for value in ["An", "0901", "abc", "abd"] {
            type_str(&mut signup, value);
            signup.handle_event(&TuiEvent::Tab);
        }
        assert_eq!(signup.handle_event(&TuiEvent::Submit), None);
        assert_eq!(
            signup.form.notice,
            Some(Notice::Error("Mật khẩu xác nhận không khớp."))
        );
        signup.handle_event(&TuiEvent::Tab);
        assert_eq!(
            signup.handle_event(&TuiEvent::Submit),
            Some(AuthEvent::ShowPolicy(Policy::Terms))
        );
        signup.handle_event(&TuiEvent::Tab);
        assert_eq!(
            signup.handle_event(&TuiEvent::Submit),
            Some(AuthEvent::ShowPolicy(Policy::Privacy))
        );
    }

    #[test]
    fn test_forgot_acknowledges_without_leaving() {
        let mut forgot = ForgotForm::new();
        type_str(&mut forgot, "an@example.com");
        assert_eq!(forgot.handle_event(&TuiEvent::Submit), None);
        assert!(matches!(forgot.form.notice, Some(Notice::Info(_))));
        forgot.handle_event(&TuiEvent::BackTab);
        assert_eq!(forgot.handle_event(&TuiEvent::Submit), Some(AuthEvent::BackToLogin));
    }

    #[test]
    fn test_policy_scroll_and_close() {
        let mut state = PolicyState::default();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.scroll, 0);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.scroll, 1);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(PolicyEvent::Close));
    }
}

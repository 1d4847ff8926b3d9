//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Flow
//!
//! ```text
//! crossterm event → TuiEvent → handle_event() → Action → update() → Effect
//!                                                                    │
//!                   Action::AdviceReady { seq } ← tokio task ←───────┘ SpawnAdvice { seq }
//! ```
//!
//! ## Redraw Strategy
//!
//! While an advice request is in flight the loop redraws every ~80ms to
//! animate the spinner. Otherwise it sleeps up to 500ms and only redraws on
//! events or incoming background actions.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::advice::{
    AdviceProvider, AdviceRequest, GeminiProvider, OpenRouterProvider, UnconfiguredProvider,
    get_tech_advice,
};
use crate::core::action::{Action, Effect, update};
use crate::core::auth::AuthPage;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Tab;
use crate::core::screen::{Screen, resolve_screen};
use crate::core::state::{AdviceStatus, App};
use crate::tui::component::EventHandler;
use crate::tui::components::account::{ACCOUNT_ENTRIES, account_action};
use crate::tui::components::home::{HOME_ENTRIES, home_action};
use crate::tui::components::support::{SUPPORT_ENTRIES, support_action};
use crate::tui::components::tab_bar::tab_for_key;
use crate::tui::components::{
    AuthEvent, ForgotForm, InboxEvent, InboxState, LoginForm, MenuState, PolicyEvent,
    PolicyState, ProductsEvent, ProductsState, ProfileEvent, ProfileForm, SignUpForm,
    WarrantyEvent, WarrantyFormState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which screen is on display, without the borrowed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    SignUp,
    Forgot,
    Policy,
    Home,
    Products,
    ProductDetail,
    SupportMenu,
    WarrantyCheck,
    TicketSuccess,
    Notifications,
    AccountMenu,
    ProfileEdit,
}

impl View {
    pub fn of(screen: &Screen) -> Self {
        match screen {
            Screen::Auth {
                policy: Some(_), ..
            } => View::Policy,
            Screen::Auth { page, .. } => match page {
                AuthPage::Login => View::Login,
                AuthPage::SignUp => View::SignUp,
                AuthPage::Forgot => View::Forgot,
            },
            Screen::ProductDetail(_) => View::ProductDetail,
            Screen::TicketSuccess(_) => View::TicketSuccess,
            Screen::WarrantyCheck { .. } => View::WarrantyCheck,
            Screen::SupportMenu => View::SupportMenu,
            Screen::ProfileEdit(_) => View::ProfileEdit,
            Screen::AccountMenu(_) => View::AccountMenu,
            Screen::Home => View::Home,
            Screen::Products => View::Products,
            Screen::Notifications(_) => View::Notifications,
        }
    }

    /// Key hints for the help line.
    pub fn help(self) -> &'static str {
        match self {
            View::Login | View::SignUp | View::Forgot | View::ProfileEdit => {
                "Tab/↑↓ Chuyển ô  Enter Chọn  Esc Quay lại"
            }
            View::Policy => "↑↓ Cuộn  Enter Tôi đã hiểu",
            View::Home | View::SupportMenu | View::AccountMenu => "↑↓ Chọn  Enter Mở  1-5 Tab  q Thoát",
            View::Products => "←→ Danh mục  ↑↓ Chọn  Enter Chi tiết  1-5 Tab",
            View::ProductDetail => "Enter/Esc Đóng  1-5 Tab",
            View::WarrantyCheck => "Tab Chuyển ô  ←→ Loại sự cố  Enter Chọn  Esc Quay lại",
            View::TicketSuccess => "Enter Quay lại  1-5 Tab",
            View::Notifications => "↑↓ Chọn  Enter Đã đọc  a Đọc tất cả  1-5 Tab",
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub(crate) struct TuiState {
    pub view: View,
    // Auth forms
    pub login: LoginForm,
    pub signup: SignUpForm,
    pub forgot: ForgotForm,
    pub policy: PolicyState,
    // Logged-in screens
    pub home_menu: MenuState,
    pub products: ProductsState,
    pub support_menu: MenuState,
    pub warranty: WarrantyFormState,
    pub inbox: InboxState,
    pub account_menu: MenuState,
    pub profile_form: ProfileForm,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            view: View::of(&resolve_screen(app)),
            login: LoginForm::new(),
            signup: SignUpForm::new(),
            forgot: ForgotForm::new(),
            policy: PolicyState::default(),
            home_menu: MenuState::new(HOME_ENTRIES.len()),
            products: ProductsState::new(),
            support_menu: MenuState::new(SUPPORT_ENTRIES.len()),
            warranty: WarrantyFormState::new(),
            inbox: InboxState::new(),
            account_menu: MenuState::new(ACCOUNT_ENTRIES.len()),
            profile_form: ProfileForm::new(&app.profile),
        }
    }

    /// Follow the visible screen. Entering a screen gives it fresh state,
    /// except where the user returns from an overlay (product detail, policy).
    pub fn sync_view(&mut self, app: &App) {
        let next = View::of(&resolve_screen(app));
        if next == self.view {
            return;
        }
        debug!("View change: {:?} -> {:?}", self.view, next);
        match next {
            View::Login => self.login = LoginForm::new(),
            View::SignUp if self.view != View::Policy => self.signup = SignUpForm::new(),
            View::Forgot => self.forgot = ForgotForm::new(),
            View::Policy => self.policy = PolicyState::default(),
            View::Home => self.home_menu = MenuState::new(HOME_ENTRIES.len()),
            View::Products if self.view != View::ProductDetail => {
                self.products = ProductsState::new()
            }
            View::SupportMenu => self.support_menu = MenuState::new(SUPPORT_ENTRIES.len()),
            View::WarrantyCheck => self.warranty = WarrantyFormState::new(),
            View::Notifications => self.inbox = InboxState::new(),
            View::AccountMenu => self.account_menu = MenuState::new(ACCOUNT_ENTRIES.len()),
            View::ProfileEdit => self.profile_form = ProfileForm::new(&app.profile),
            View::SignUp | View::Products | View::ProductDetail | View::TicketSuccess => {}
        }
        self.view = next;
    }

    /// True while a text field has focus; single-key shortcuts are off.
    pub fn is_typing(&self) -> bool {
        match self.view {
            View::Login => self.login.form.is_typing(),
            View::SignUp => self.signup.form.is_typing(),
            View::Forgot => self.forgot.form.is_typing(),
            View::ProfileEdit => self.profile_form.form.is_typing(),
            View::WarrantyCheck => self.warranty.is_typing(),
            _ => false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Cursor marks the focused text field
            SetCursorStyle::SteadyBlock, // Blinking resets on every draw()
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the advice provider from a resolved config.
/// Without an API key every request falls back to the canned answer.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn AdviceProvider> {
    let Some(api_key) = config.api_key.clone() else {
        warn!(
            "No API key for provider '{}', tech advice will use the fallback text",
            config.provider
        );
        return Arc::new(UnconfiguredProvider);
    };
    let base_url = Some(config.base_url.clone());
    match config.provider.as_str() {
        "openrouter" => Arc::new(OpenRouterProvider::new(
            api_key,
            config.model.clone(),
            base_url,
        )),
        _ => Arc::new(GeminiProvider::new(api_key, config.model.clone(), base_url)),
    }
}

/// Translate one terminal event into at most one core action.
///
/// Order: Ctrl+C, the policy overlay, single-key shortcuts (only when no
/// text field has focus), Esc as back, then the screen's own component.
pub(crate) fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if tui.view == View::Policy {
        return match tui.policy.handle_event(event)? {
            PolicyEvent::Close => Some(Action::GoBack),
        };
    }

    if !tui.is_typing()
        && let TuiEvent::InputChar(c) = event
    {
        if *c == 'q' {
            return Some(Action::Quit);
        }
        if app.navigation.logged_in {
            if let Some(tab) = tab_for_key(*c) {
                return Some(Action::SelectTab(tab));
            }
            if *c == 'n' {
                return Some(Action::SelectTab(Tab::Notifications));
            }
        }
    }

    if *event == TuiEvent::Escape {
        return Some(Action::GoBack);
    }

    match tui.view {
        View::Login => auth_action(tui.login.handle_event(event)?),
        View::SignUp => auth_action(tui.signup.handle_event(event)?),
        View::Forgot => auth_action(tui.forgot.handle_event(event)?),
        View::Policy => None,
        View::Home => home_action(tui.home_menu.handle_event(event)?),
        View::Products => match tui.products.handle_event(event)? {
            ProductsEvent::Open(id) => Some(Action::OpenProductDetail(id.to_string())),
        },
        View::ProductDetail => (*event == TuiEvent::Submit).then_some(Action::CloseDetail),
        View::SupportMenu => support_action(tui.support_menu.handle_event(event)?),
        View::WarrantyCheck => match tui.warranty.handle_event(event)? {
            WarrantyEvent::SubmitTicket(id) => Some(Action::SubmitTicket(id)),
            WarrantyEvent::RequestAdvice(request) => Some(Action::RequestAdvice(request)),
        },
        View::TicketSuccess => (*event == TuiEvent::Submit).then_some(Action::ResetTicket),
        View::Notifications => match tui.inbox.handle_event(event, &app.notifications.items)? {
            InboxEvent::MarkRead(id) => Some(Action::MarkNotificationRead(id)),
            InboxEvent::MarkAllRead => Some(Action::MarkAllNotificationsRead),
        },
        View::AccountMenu => account_action(tui.account_menu.handle_event(event)?),
        View::ProfileEdit => match tui.profile_form.handle_event(event)? {
            ProfileEvent::Save(profile) => Some(Action::SaveProfile(profile)),
            ProfileEvent::Cancel => Some(Action::GoBack),
        },
    }
}

fn auth_action(event: AuthEvent) -> Option<Action> {
    Some(match event {
        AuthEvent::Login => Action::Login,
        AuthEvent::GoToSignUp => Action::ShowAuthPage(AuthPage::SignUp),
        AuthEvent::GoToForgot => Action::ShowAuthPage(AuthPage::Forgot),
        AuthEvent::ShowPolicy(policy) => Action::ShowPolicy(policy),
        AuthEvent::BackToLogin => Action::ShowAuthPage(AuthPage::Login),
    })
}

/// Reduce an action, follow the screen, and start any requested effect.
/// Returns `true` when the app should exit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);
    tui.sync_view(app);
    match effect {
        Effect::Quit => true,
        Effect::SpawnAdvice { seq, request } => {
            spawn_advice(app, seq, request, tx.clone());
            false
        }
        Effect::None => false,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::new(provider);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = app.advice == AdviceStatus::Loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain every pending event before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, &event)
                && dispatch(&mut app, &mut tui, action, &tx)
            {
                should_quit = true;
                break;
            }
        }

        // Results from background tasks
        while !should_quit && let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit = dispatch(&mut app, &mut tui, action, &tx);
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

fn spawn_advice(app: &App, seq: u64, request: AdviceRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning advice request #{} via {} ({} / {})",
        seq,
        app.provider.name(),
        request.product_type,
        request.issue_category
    );
    let provider = app.provider.clone();
    tokio::spawn(async move {
        let text = get_tech_advice(provider.as_ref(), &request).await;
        if tx.send(Action::AdviceReady { seq, text }).is_err() {
            warn!("Failed to send advice result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::Policy;
    use crate::core::navigation::SupportPage;
    use crate::test_support::{logged_in_app, test_app};

    /// Feed events through the adapter the way the event loop does.
    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            if let Some(action) = handle_event(app, tui, event) {
                effects.push(update(app, action));
                tui.sync_view(app);
            }
        }
        effects
    }

    fn chars(s: &str) -> Vec<TuiEvent> {
        s.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_login_through_form() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let mut events = chars("0901234567");
        events.push(TuiEvent::Tab);
        events.extend(chars("matkhau"));
        events.push(TuiEvent::Submit);
        press(&mut app, &mut tui, &events);
        assert!(app.navigation.logged_in);
        assert_eq!(tui.view, View::Home);
    }

    #[test]
    fn test_q_types_into_focused_field() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        let effects = press(&mut app, &mut tui, &chars("q"));
        assert!(effects.is_empty());
        assert_eq!(tui.login.form.value(0), "q");
    }

    #[test]
    fn test_q_quits_when_not_typing() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        let effects = press(&mut app, &mut tui, &chars("q"));
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        );
        let effects = press(&mut app, &mut tui, &[TuiEvent::ForceQuit]);
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn test_policy_overlay_from_signup() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        // Login → sign-up link
        press(&mut app, &mut tui, &[TuiEvent::BackTab, TuiEvent::Submit]);
        assert_eq!(tui.view, View::SignUp);
        // Terms button sits after the four fields and the create button
        let mut events = vec![TuiEvent::Tab; 5];
        events.push(TuiEvent::Submit);
        press(&mut app, &mut tui, &events);
        assert_eq!(app.auth.policy, Some(Policy::Terms));
        assert_eq!(tui.view, View::Policy);
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(tui.view, View::SignUp);
        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(tui.view, View::Login);
    }

    #[test]
    fn test_tab_hotkeys_and_back() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        press(&mut app, &mut tui, &chars("2"));
        assert_eq!(tui.view, View::Products);
        press(&mut app, &mut tui, &chars("n"));
        assert_eq!(tui.view, View::Notifications);
        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(tui.view, View::Products);
    }

    #[test]
    fn test_product_detail_keeps_filter() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        press(
            &mut app,
            &mut tui,
            &[
                TuiEvent::InputChar('2'),
                TuiEvent::CursorRight,
                TuiEvent::Submit,
            ],
        );
        assert_eq!(tui.view, View::ProductDetail);
        assert_eq!(app.navigation.selected_product.map(|p| p.id), Some("p1"));
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(tui.view, View::Products);
        assert_eq!(tui.products.chip, 1);
    }

    #[test]
    fn test_warranty_flow_to_ticket() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        // Home shortcut: warranty lookup
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(tui.view, View::WarrantyCheck);
        let mut events = chars("sp123456");
        events.push(TuiEvent::Submit);
        press(&mut app, &mut tui, &events);
        assert!(tui.warranty.found().is_some());
        // Lookup alone does not navigate
        assert_eq!(app.navigation.support_page, SupportPage::WarrantyForm);

        press(
            &mut app,
            &mut tui,
            &[TuiEvent::Tab, TuiEvent::Tab, TuiEvent::Submit],
        );
        assert_eq!(tui.view, View::TicketSuccess);
        assert!(app.navigation.ticket_id.is_some());
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(tui.view, View::SupportMenu);
    }

    #[test]
    fn test_advice_request_spawns_effect() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        let mut events = vec![TuiEvent::Submit];
        events.extend(chars("SP123456"));
        events.push(TuiEvent::Submit);
        // Skip to the description field
        events.extend(vec![TuiEvent::Tab; 4]);
        events.extend(chars("mất nguồn"));
        events.push(TuiEvent::Tab);
        events.push(TuiEvent::Submit);
        let effects = press(&mut app, &mut tui, &events);
        assert!(matches!(effects.last(), Some(Effect::SpawnAdvice { request, .. }) if request.description == "mất nguồn"));
        assert_eq!(app.advice, AdviceStatus::Loading);
    }

    #[test]
    fn test_notifications_mark_read() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        press(&mut app, &mut tui, &[TuiEvent::InputChar('4'), TuiEvent::Submit]);
        assert_eq!(app.notifications.unread_count(), 1);
        press(&mut app, &mut tui, &chars("a"));
        assert_eq!(app.notifications.unread_count(), 0);
    }

    #[test]
    fn test_profile_edit_and_logout() {
        let mut app = logged_in_app();
        let mut tui = TuiState::new(&app);
        press(&mut app, &mut tui, &[TuiEvent::InputChar('5'), TuiEvent::Submit]);
        assert_eq!(tui.view, View::ProfileEdit);
        let mut events = vec![TuiEvent::End];
        events.extend(chars(" Jr"));
        events.extend(vec![TuiEvent::Tab; 3]);
        events.push(TuiEvent::Submit);
        press(&mut app, &mut tui, &events);
        assert_eq!(app.profile.full_name, "Nguyễn Văn An Jr");
        assert_eq!(tui.view, View::AccountMenu);

        // Logout is the last menu entry
        press(
            &mut app,
            &mut tui,
            &[TuiEvent::CursorDown, TuiEvent::CursorDown, TuiEvent::CursorDown, TuiEvent::Submit],
        );
        assert!(!app.navigation.logged_in);
        assert_eq!(tui.view, View::Login);
    }

    #[test]
    fn test_view_help_is_nonempty() {
        for view in [View::Login, View::Policy, View::Products, View::WarrantyCheck] {
            assert!(!view.help().is_empty());
        }
    }
}

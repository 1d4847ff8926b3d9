use crate::core::auth::AuthPage;
use crate::core::navigation::Tab;
use crate::core::screen::{Screen, resolve_screen};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::account::render_account;
use crate::tui::components::auth::render_policy;
use crate::tui::components::home::render_home;
use crate::tui::components::notifications::render_inbox;
use crate::tui::components::products::{ProductsView, render_product_detail};
use crate::tui::components::support::{render_support_menu, render_ticket_success};
use crate::tui::components::warranty_form::WarrantyForm;
use crate::tui::components::{TabBar, TitleBar};
use crate::tui::{TuiState, View};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let screen = resolve_screen(app);

    if !app.navigation.logged_in {
        let [body, help] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());
        draw_screen(frame, body, tui, screen, spinner_frame);
        draw_help(frame, help, app, tui.view);
        return;
    }

    let [title_area, body, tabs_area, help] =
        Layout::vertical([Length(2), Min(0), Length(2), Length(1)]).areas(frame.area());

    TitleBar {
        can_go_back: app.navigation.can_go_back(),
        title: screen.title(),
        unread: app.notifications.unread_count(),
        bell_active: app.navigation.active_tab == Tab::Notifications,
    }
    .render(frame, title_area);

    draw_screen(frame, body, tui, screen, spinner_frame);

    TabBar {
        active: app.navigation.active_tab,
        unread: app.notifications.unread_count(),
    }
    .render(frame, tabs_area);

    draw_help(frame, help, app, tui.view);
}

fn draw_screen(
    frame: &mut Frame,
    area: Rect,
    tui: &mut TuiState,
    screen: Screen,
    spinner_frame: usize,
) {
    match screen {
        Screen::Auth { page, policy } => {
            match page {
                AuthPage::Login => tui.login.render(frame, area),
                AuthPage::SignUp => tui.signup.render(frame, area),
                AuthPage::Forgot => tui.forgot.render(frame, area),
            }
            if let Some(policy) = policy {
                render_policy(frame, area, policy, &tui.policy);
            }
        }
        Screen::ProductDetail(product) => render_product_detail(frame, area, product),
        Screen::TicketSuccess(ticket_id) => render_ticket_success(frame, area, ticket_id),
        Screen::WarrantyCheck { advice } => WarrantyForm {
            state: &tui.warranty,
            advice,
            today: chrono::Local::now().date_naive(),
            spinner_frame,
        }
        .render(frame, area),
        Screen::SupportMenu => render_support_menu(frame, area, &mut tui.support_menu),
        Screen::ProfileEdit(_) => tui.profile_form.render(frame, area),
        Screen::AccountMenu(profile) => render_account(frame, area, profile, &mut tui.account_menu),
        Screen::Home => render_home(frame, area, &mut tui.home_menu),
        Screen::Products => ProductsView {
            state: &mut tui.products,
        }
        .render(frame, area),
        Screen::Notifications(items) => render_inbox(frame, area, items, &mut tui.inbox),
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App, view: View) {
    let mut spans = vec![Span::styled(
        view.help(),
        Style::default().fg(Color::DarkGray),
    )];
    if !app.status_message.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Green),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! # Actions
//!
//! Everything that can happen in SOLPOWER becomes an `Action`.
//! User taps a tab? That's `Action::SelectTab(tab)`.
//! Advice service answers? That's `Action::AdviceReady { seq, text }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter to carry out. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::advice::AdviceRequest;
use crate::core::auth::{AuthPage, Policy};
use crate::core::catalog::find_product;
use crate::core::navigation::{SupportPage, Tab};
use crate::core::state::{AdviceStatus, App, Profile};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Session
    Login,
    Logout,
    ShowAuthPage(AuthPage),
    ShowPolicy(Policy),

    // Navigation
    SelectTab(Tab),
    GoBack,
    OpenProductDetail(String),
    CloseDetail,
    RequestWarrantyFlow,
    OpenWarrantyForm,
    OpenProfileEdit,

    // Support flow
    SubmitTicket(String),
    ResetTicket,
    RequestAdvice(AdviceRequest),
    /// `seq` is the number handed out with the matching `SpawnAdvice`.
    AdviceReady { seq: u64, text: String },

    // Account & inbox
    SaveProfile(Profile),
    MarkNotificationRead(String),
    MarkAllNotificationsRead,

    Quit,
}

/// Side effects requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnAdvice { seq: u64, request: AdviceRequest },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    if !app.navigation.logged_in {
        return update_logged_out(app, action);
    }

    let effect = match action {
        Action::Login => Effect::None,
        Action::Logout => {
            info!("Logging out");
            app.navigation.logout();
            app.auth = Default::default();
            app.profile = Profile::default();
            app.status_message.clear();
            Effect::None
        }
        Action::ShowAuthPage(_) | Action::ShowPolicy(_) => Effect::None,
        Action::SelectTab(tab) => {
            app.navigation.select_tab(tab);
            app.status_message.clear();
            Effect::None
        }
        Action::GoBack => {
            app.navigation.go_back();
            app.status_message.clear();
            Effect::None
        }
        Action::OpenProductDetail(id) => {
            match find_product(&id) {
                Some(product) => app.navigation.open_product_detail(product),
                None => debug!("OpenProductDetail: unknown product id {id}"),
            }
            Effect::None
        }
        Action::CloseDetail => {
            app.navigation.close_detail();
            Effect::None
        }
        Action::RequestWarrantyFlow => {
            app.navigation.request_warranty_flow();
            Effect::None
        }
        Action::OpenWarrantyForm => {
            app.navigation.open_warranty_form();
            Effect::None
        }
        Action::OpenProfileEdit => {
            app.navigation.open_profile_edit();
            Effect::None
        }
        Action::SubmitTicket(id) => {
            info!("Ticket submitted: {id}");
            app.status_message = format!("Đã tiếp nhận yêu cầu {id}");
            app.navigation.submit_ticket(id);
            Effect::None
        }
        Action::ResetTicket => {
            app.navigation.reset_ticket();
            app.status_message.clear();
            Effect::None
        }
        Action::RequestAdvice(request) => {
            if !on_warranty_form(app) || app.advice == AdviceStatus::Loading {
                debug!("RequestAdvice ignored (advice: {:?})", app.advice);
                Effect::None
            } else {
                app.advice = AdviceStatus::Loading;
                app.advice_seq += 1;
                Effect::SpawnAdvice {
                    seq: app.advice_seq,
                    request,
                }
            }
        }
        Action::AdviceReady { seq, text } => {
            // Only the answer to the latest request, and only while it is awaited.
            if app.advice == AdviceStatus::Loading && seq == app.advice_seq {
                app.advice = AdviceStatus::Ready(text);
            } else {
                debug!(
                    "Dropping stale advice result #{seq} (latest #{}, {:?})",
                    app.advice_seq, app.advice
                );
            }
            Effect::None
        }
        Action::SaveProfile(profile) => {
            app.profile = profile;
            app.navigation.close_profile_edit();
            app.status_message = "Đã lưu thông tin tài khoản".to_string();
            Effect::None
        }
        Action::MarkNotificationRead(id) => {
            app.notifications.mark_read(&id);
            Effect::None
        }
        Action::MarkAllNotificationsRead => {
            app.notifications.mark_all_read();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    };

    if !on_warranty_form(app) && app.advice != AdviceStatus::Idle {
        debug!("Left the warranty form, clearing advice");
        app.advice = AdviceStatus::Idle;
    }

    effect
}

/// Only the auth sub-flow, login and quit do anything before login.
fn update_logged_out(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Login => {
            info!("Login succeeded");
            app.navigation.login();
            app.auth = Default::default();
            Effect::None
        }
        Action::ShowAuthPage(page) => {
            app.auth.show(page);
            Effect::None
        }
        Action::ShowPolicy(policy) => {
            app.auth.show_policy(policy);
            Effect::None
        }
        Action::GoBack => {
            app.auth.back();
            Effect::None
        }
        Action::Quit => Effect::Quit,
        other => {
            debug!("Ignoring {:?} while logged out", other);
            Effect::None
        }
    }
}

fn on_warranty_form(app: &App) -> bool {
    app.navigation.active_tab == Tab::Support
        && app.navigation.support_page == SupportPage::WarrantyForm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{AccountPage, Navigation};
    use crate::test_support::{logged_in_app, test_app};

    fn advice_request() -> AdviceRequest {
        AdviceRequest {
            product_type: "inverter".to_string(),
            issue_category: "Khác".to_string(),
            description: "Không lên nguồn".to_string(),
        }
    }

    #[test]
    fn test_navigation_ignored_while_logged_out() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Products));
        update(&mut app, Action::RequestWarrantyFlow);
        assert_eq!(app.navigation, Navigation::new());
    }

    #[test]
    fn test_login_resets_auth_flow() {
        let mut app = test_app();
        update(&mut app, Action::ShowAuthPage(AuthPage::SignUp));
        update(&mut app, Action::Login);
        assert!(app.navigation.logged_in);
        assert_eq!(app.auth.page, AuthPage::Login);
    }

    #[test]
    fn test_back_while_logged_out_unwinds_auth() {
        let mut app = test_app();
        update(&mut app, Action::ShowAuthPage(AuthPage::Forgot));
        update(&mut app, Action::GoBack);
        assert_eq!(app.auth.page, AuthPage::Login);
    }

    #[test]
    fn test_logout_resets_everything_but_inbox() {
        let mut app = logged_in_app();
        update(&mut app, Action::SelectTab(Tab::Account));
        update(&mut app, Action::OpenProfileEdit);
        let mut profile = app.profile.clone();
        profile.full_name = "Trần Thị B".to_string();
        update(&mut app, Action::SaveProfile(profile));
        update(&mut app, Action::MarkAllNotificationsRead);
        update(&mut app, Action::Logout);
        update(&mut app, Action::Login);

        let mut fresh = Navigation::new();
        fresh.login();
        assert_eq!(app.navigation, fresh);
        assert_eq!(app.profile, Profile::default());
        assert_eq!(app.notifications.unread_count(), 0);
    }

    #[test]
    fn test_scenario_back_returns_to_previous_tab() {
        let mut app = logged_in_app();
        update(&mut app, Action::SelectTab(Tab::Products));
        update(&mut app, Action::SelectTab(Tab::Support));
        update(&mut app, Action::GoBack);
        assert_eq!(app.navigation.active_tab, Tab::Products);
        assert_eq!(app.navigation.support_page, SupportPage::Menu);
    }

    #[test]
    fn test_open_unknown_product_is_ignored() {
        let mut app = logged_in_app();
        update(&mut app, Action::OpenProductDetail("nope".to_string()));
        assert!(app.navigation.selected_product.is_none());
        update(&mut app, Action::OpenProductDetail("p3".to_string()));
        assert_eq!(app.navigation.selected_product.map(|p| p.id), Some("p3"));
        update(&mut app, Action::CloseDetail);
        assert!(app.navigation.selected_product.is_none());
    }

    #[test]
    fn test_request_advice_spawns_once() {
        let mut app = logged_in_app();
        update(&mut app, Action::RequestWarrantyFlow);
        let first = update(&mut app, Action::RequestAdvice(advice_request()));
        assert_eq!(
            first,
            Effect::SpawnAdvice {
                seq: 1,
                request: advice_request()
            }
        );
        assert_eq!(app.advice, AdviceStatus::Loading);
        let second = update(&mut app, Action::RequestAdvice(advice_request()));
        assert_eq!(second, Effect::None);
    }

    #[test]
    fn test_request_advice_outside_form_is_ignored() {
        let mut app = logged_in_app();
        let effect = update(&mut app, Action::RequestAdvice(advice_request()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.advice, AdviceStatus::Idle);
    }

    #[test]
    fn test_advice_ready_fills_panel() {
        let mut app = logged_in_app();
        update(&mut app, Action::RequestWarrantyFlow);
        update(&mut app, Action::RequestAdvice(advice_request()));
        let seq = app.advice_seq;
        update(
            &mut app,
            Action::AdviceReady {
                seq,
                text: "Kiểm tra CB".to_string(),
            },
        );
        assert_eq!(app.advice, AdviceStatus::Ready("Kiểm tra CB".to_string()));
    }

    #[test]
    fn test_stale_advice_is_dropped_after_leaving_form() {
        let mut app = logged_in_app();
        update(&mut app, Action::RequestWarrantyFlow);
        update(&mut app, Action::RequestAdvice(advice_request()));
        update(&mut app, Action::GoBack);
        assert_eq!(app.advice, AdviceStatus::Idle);
        update(
            &mut app,
            Action::AdviceReady {
                seq: 1,
                text: "late".to_string(),
            },
        );
        assert_eq!(app.advice, AdviceStatus::Idle);
    }

    fn spawned_seq(effect: Effect) -> u64 {
        match effect {
            Effect::SpawnAdvice { seq, .. } => seq,
            other => panic!("Expected SpawnAdvice, got {:?}", other),
        }
    }

    #[test]
    fn test_answer_to_abandoned_request_is_not_shown_for_newer_one() {
        let mut app = logged_in_app();
        update(&mut app, Action::RequestWarrantyFlow);
        let mut first = advice_request();
        first.description = "first".to_string();
        let first_seq = spawned_seq(update(&mut app, Action::RequestAdvice(first)));

        update(&mut app, Action::GoBack);
        update(&mut app, Action::OpenWarrantyForm);
        let mut second = advice_request();
        second.description = "second".to_string();
        let second_seq = spawned_seq(update(&mut app, Action::RequestAdvice(second)));
        assert_ne!(first_seq, second_seq);

        update(
            &mut app,
            Action::AdviceReady {
                seq: first_seq,
                text: "answer to first".to_string(),
            },
        );
        assert_eq!(app.advice, AdviceStatus::Loading);

        update(
            &mut app,
            Action::AdviceReady {
                seq: second_seq,
                text: "answer to second".to_string(),
            },
        );
        assert_eq!(
            app.advice,
            AdviceStatus::Ready("answer to second".to_string())
        );
    }

    #[test]
    fn test_status_message_clears_on_navigation() {
        let mut app = logged_in_app();
        update(&mut app, Action::RequestWarrantyFlow);
        update(&mut app, Action::SubmitTicket("TK-12345".to_string()));
        assert!(app.status_message.contains("TK-12345"));
        update(&mut app, Action::SelectTab(Tab::Products));
        assert!(app.status_message.is_empty());

        update(&mut app, Action::SelectTab(Tab::Account));
        update(&mut app, Action::OpenProfileEdit);
        let profile = app.profile.clone();
        update(&mut app, Action::SaveProfile(profile));
        assert!(!app.status_message.is_empty());
        update(&mut app, Action::GoBack);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_ticket_flow() {
        let mut app = logged_in_app();
        update(&mut app, Action::SelectTab(Tab::Support));
        update(&mut app, Action::OpenWarrantyForm);
        update(&mut app, Action::SubmitTicket("TK-12345".to_string()));
        assert_eq!(app.navigation.ticket_id.as_deref(), Some("TK-12345"));
        update(&mut app, Action::ResetTicket);
        assert!(app.navigation.ticket_id.is_none());
        assert_eq!(app.navigation.support_page, SupportPage::Menu);
    }

    #[test]
    fn test_save_profile_returns_to_menu() {
        let mut app = logged_in_app();
        update(&mut app, Action::SelectTab(Tab::Account));
        update(&mut app, Action::OpenProfileEdit);
        assert_eq!(app.navigation.account_page, AccountPage::Edit);
        let mut profile = app.profile.clone();
        profile.phone = "0988 000 111".to_string();
        update(&mut app, Action::SaveProfile(profile.clone()));
        assert_eq!(app.profile, profile);
        assert_eq!(app.navigation.account_page, AccountPage::Menu);
    }

    #[test]
    fn test_notification_actions() {
        let mut app = logged_in_app();
        update(&mut app, Action::MarkNotificationRead("n1".to_string()));
        assert_eq!(app.notifications.unread_count(), 1);
        update(&mut app, Action::MarkNotificationRead("missing".to_string()));
        assert_eq!(app.notifications.unread_count(), 1);
        update(&mut app, Action::MarkAllNotificationsRead);
        update(&mut app, Action::MarkAllNotificationsRead);
        assert_eq!(app.notifications.unread_count(), 0);
    }

    #[test]
    fn test_quit_in_both_states() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        update(&mut app, Action::Login);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

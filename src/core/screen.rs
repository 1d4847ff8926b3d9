//! # Screen Resolution
//!
//! Pure mapping from application state to the one screen that should be on
//! display. Each `Screen` variant borrows exactly the data its view needs.
//!
//! Precedence, first match wins:
//!
//! 1. logged out → `Auth`
//! 2. product selected → `ProductDetail`
//! 3. support tab → `TicketSuccess` / `WarrantyCheck` / `SupportMenu`
//! 4. account tab → `ProfileEdit` / `AccountMenu`
//! 5. otherwise the tab's own screen

use crate::core::auth::{AuthPage, Policy};
use crate::core::catalog::Product;
use crate::core::navigation::{AccountPage, SupportPage, Tab};
use crate::core::notifications::Notification;
use crate::core::state::{AdviceStatus, App, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Auth {
        page: AuthPage,
        policy: Option<Policy>,
    },
    ProductDetail(&'a Product),
    TicketSuccess(&'a str),
    WarrantyCheck {
        advice: &'a AdviceStatus,
    },
    SupportMenu,
    ProfileEdit(&'a Profile),
    AccountMenu(&'a Profile),
    Home,
    Products,
    Notifications(&'a [Notification]),
}

impl Screen<'_> {
    /// Top-bar title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth { .. } => "SOLPOWER",
            Screen::ProductDetail(_) => "Chi tiết sản phẩm",
            Screen::TicketSuccess(_) | Screen::WarrantyCheck { .. } | Screen::SupportMenu => {
                "Hỗ trợ kỹ thuật"
            }
            Screen::ProfileEdit(_) => "Chỉnh sửa hồ sơ",
            Screen::AccountMenu(_) => "Tài khoản",
            Screen::Home => "SOLPOWER",
            Screen::Products => "Sản phẩm",
            Screen::Notifications(_) => "Thông báo",
        }
    }
}

pub fn resolve_screen(app: &App) -> Screen<'_> {
    let nav = &app.navigation;

    if !nav.logged_in {
        return Screen::Auth {
            page: app.auth.page,
            policy: app.auth.policy,
        };
    }

    if let Some(product) = nav.selected_product {
        return Screen::ProductDetail(product);
    }

    match nav.active_tab {
        Tab::Support => {
            if let Some(ticket_id) = nav.ticket_id.as_deref() {
                Screen::TicketSuccess(ticket_id)
            } else if nav.support_page == SupportPage::WarrantyForm {
                Screen::WarrantyCheck {
                    advice: &app.advice,
                }
            } else {
                Screen::SupportMenu
            }
        }
        Tab::Account => match nav.account_page {
            AccountPage::Edit => Screen::ProfileEdit(&app.profile),
            AccountPage::Menu => Screen::AccountMenu(&app.profile),
        },
        Tab::Home => Screen::Home,
        Tab::Products => Screen::Products,
        Tab::Notifications => Screen::Notifications(&app.notifications.items),
    }
}

//! # Navigation
//!
//! The single authority for "what is on screen". Owns the session flag, the
//! active tab and its history, the per-tab sub-pages, the ticket id and the
//! product-detail overlay.
//!
//! ```text
//! Navigation
//! ├── logged_in: bool
//! ├── active_tab: Tab                 // always == history.last()
//! ├── history: Vec<Tab>               // never empty, no consecutive repeats
//! ├── support_page: SupportPage       // Menu unless on Support
//! ├── account_page: AccountPage       // Menu unless on Account
//! ├── ticket_id: Option<String>       // only while on Support
//! └── selected_product: Option<&Product>  // overlay, highest render priority
//! ```
//!
//! Every operation is total: any state accepts any call.

use log::debug;

use crate::core::catalog::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Products,
    Support,
    Notifications,
    Account,
}

impl Tab {
    /// Tab bar order.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Products,
        Tab::Support,
        Tab::Notifications,
        Tab::Account,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Trang chủ",
            Tab::Products => "Sản phẩm",
            Tab::Support => "Hỗ trợ",
            Tab::Notifications => "Thông báo",
            Tab::Account => "Tài khoản",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportPage {
    #[default]
    Menu,
    WarrantyForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountPage {
    #[default]
    Menu,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub logged_in: bool,
    pub active_tab: Tab,
    pub history: Vec<Tab>,
    pub support_page: SupportPage,
    pub account_page: AccountPage,
    pub ticket_id: Option<String>,
    pub selected_product: Option<&'static Product>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            logged_in: false,
            active_tab: Tab::Home,
            history: vec![Tab::Home],
            support_page: SupportPage::Menu,
            account_page: AccountPage::Menu,
            ticket_id: None,
            selected_product: None,
        }
    }

    pub fn login(&mut self) {
        self.logged_in = true;
    }

    /// Ends the session and drops all navigation state, so the next login
    /// starts from a fresh controller.
    pub fn logout(&mut self) {
        *self = Self::new();
    }

    /// Switches tabs, discarding any sub-flow and open overlay.
    ///
    /// Selecting the tab that is already active leaves tab, history and
    /// sub-pages alone but still dismisses the overlay.
    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_product = None;
        if tab == self.active_tab {
            return;
        }
        debug!("select_tab: {:?} -> {:?}", self.active_tab, tab);
        self.enter_tab(tab);
        if self.history.last() != Some(&tab) {
            self.history.push(tab);
        }
    }

    pub fn open_product_detail(&mut self, product: &'static Product) {
        self.selected_product = Some(product);
    }

    pub fn close_detail(&mut self) {
        self.selected_product = None;
    }

    /// Support tab, straight into the warranty form.
    pub fn request_warranty_flow(&mut self) {
        self.select_tab(Tab::Support);
        self.support_page = SupportPage::WarrantyForm;
    }

    /// Opens the warranty form from the support menu. Ignored elsewhere.
    pub fn open_warranty_form(&mut self) {
        if self.active_tab == Tab::Support {
            self.support_page = SupportPage::WarrantyForm;
        }
    }

    /// Opens profile editing from the account menu. Ignored elsewhere.
    pub fn open_profile_edit(&mut self) {
        if self.active_tab == Tab::Account {
            self.account_page = AccountPage::Edit;
        }
    }

    pub fn close_profile_edit(&mut self) {
        self.account_page = AccountPage::Menu;
    }

    pub fn submit_ticket(&mut self, id: String) {
        self.ticket_id = Some(id);
    }

    pub fn reset_ticket(&mut self) {
        self.ticket_id = None;
        self.support_page = SupportPage::Menu;
    }

    /// True exactly when [`go_back`](Self::go_back) would change the state.
    pub fn can_go_back(&self) -> bool {
        self.selected_product.is_some()
            || (self.active_tab == Tab::Support && self.support_page != SupportPage::Menu)
            || (self.active_tab == Tab::Account && self.account_page != AccountPage::Menu)
            || self.active_tab != Tab::Home
    }

    /// Resolves a single "back" step. Rules are tried in order and the first
    /// match wins: overlay, support sub-page, account sub-page, home, history.
    pub fn go_back(&mut self) {
        if self.selected_product.take().is_some() {
            debug!("go_back: closed product detail");
            return;
        }

        if self.active_tab == Tab::Support && self.support_page != SupportPage::Menu {
            debug!("go_back: support sub-page -> menu");
            self.ticket_id = None;
            self.support_page = SupportPage::Menu;
            return;
        }

        if self.active_tab == Tab::Account && self.account_page != AccountPage::Menu {
            debug!("go_back: account sub-page -> menu");
            self.account_page = AccountPage::Menu;
            return;
        }

        if self.active_tab == Tab::Home {
            return;
        }

        if self.history.len() > 1 {
            self.history.pop();
            let previous = *self.history.last().unwrap_or(&Tab::Home);
            debug!("go_back: history {:?} -> {:?}", self.active_tab, previous);
            self.enter_tab(previous);
            return;
        }

        debug!("go_back: empty history, falling back to home");
        self.history = vec![Tab::Home];
        self.enter_tab(Tab::Home);
    }

    /// Makes `tab` active and resets every tab-scoped sub-state.
    fn enter_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.support_page = SupportPage::Menu;
        self.account_page = AccountPage::Menu;
        self.ticket_id = None;
    }
}

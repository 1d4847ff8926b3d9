//! # Application State
//!
//! Core business state for SOLPOWER. Domain logic only, no TUI types.
//! Presentation state (text buffers, list cursors) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn AdviceProvider>  // tech-advice backend
//! ├── navigation: Navigation             // session, tabs, sub-pages, overlay
//! ├── auth: AuthFlow                     // logged-out page selector
//! ├── notifications: Notifications       // inbox
//! ├── profile: Profile                   // mocked account details
//! ├── advice: AdviceStatus               // warranty-form advice panel
//! └── status_message: String             // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::advice::AdviceProvider;
use crate::core::auth::AuthFlow;
use crate::core::catalog::seed_notifications;
use crate::core::navigation::Navigation;
use crate::core::notifications::Notifications;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Customer tier badge, not editable.
    pub tier: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: "Nguyễn Văn An".to_string(),
            phone: "0901 234 567".to_string(),
            email: "an.nguyen@example.com".to_string(),
            tier: "Khách hàng VIP".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdviceStatus {
    #[default]
    Idle,
    Loading,
    Ready(String),
}

pub struct App {
    pub provider: Arc<dyn AdviceProvider>,
    pub navigation: Navigation,
    pub auth: AuthFlow,
    pub notifications: Notifications,
    pub profile: Profile,
    pub advice: AdviceStatus,
    /// Bumped per spawned advice request; results carry it back.
    pub advice_seq: u64,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn AdviceProvider>) -> Self {
        Self {
            provider,
            navigation: Navigation::new(),
            auth: AuthFlow::default(),
            notifications: Notifications::new(seed_notifications()),
            profile: Profile::default(),
            advice: AdviceStatus::Idle,
            advice_seq: 0,
            status_message: String::new(),
        }
    }
}

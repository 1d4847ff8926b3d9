//! # TUI Components
//!
//! One module per screen, plus the shared building blocks.
//!
//! ## Patterns
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields or parameters:
//! - `TitleBar`, `TabBar`: app chrome
//! - `render_home`, `render_support_menu`, `render_ticket_success`,
//!   `render_product_detail`, `render_policy`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Own presentation state in `TuiState` and emit high-level events that the
//! event loop turns into `core::Action` values:
//! - `Form` and its wrappers (`LoginForm`, `SignUpForm`, `ForgotForm`, `ProfileForm`)
//! - `WarrantyFormState`: serial lookup, ticket and advice requests
//! - `ProductsState`, `InboxState`, `MenuState`: selectable lists
//!
//! Persistent state lives in `TuiState`; render wrappers such as `Menu` or
//! `ProductsView` are created each frame with borrowed state.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── text_field.rs     (single-line input)
//! ├── form.rs           (fields + buttons on one focus ring)
//! ├── menu.rs           (selectable list)
//! ├── title_bar.rs      (top bar)
//! ├── tab_bar.rs        (bottom bar)
//! ├── auth.rs           (login, sign-up, forgot password, policy)
//! ├── home.rs
//! ├── products.rs       (list + detail overlay)
//! ├── support.rs        (menu + ticket success)
//! ├── warranty_form.rs
//! ├── notifications.rs
//! └── account.rs        (menu + profile edit)
//! ```

pub mod account;
pub mod auth;
pub mod form;
pub mod home;
pub mod menu;
pub mod notifications;
pub mod products;
pub mod support;
pub mod tab_bar;
pub mod text_field;
pub mod title_bar;
pub mod warranty_form;

pub use account::{ProfileEvent, ProfileForm};
pub use auth::{AuthEvent, ForgotForm, LoginForm, PolicyEvent, PolicyState, SignUpForm};
pub use menu::MenuState;
pub use notifications::{InboxEvent, InboxState};
pub use products::{ProductsEvent, ProductsState};
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
pub use warranty_form::{WarrantyEvent, WarrantyFormState};

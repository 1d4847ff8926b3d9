//! # Core Application Logic
//!
//! This module contains SOLPOWER's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • resolve_screen()     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`navigation`]: Tabs, history, sub-pages, overlay and the back resolver
//! - [`screen`]: Maps state to the `Screen` that should be drawn
//! - [`warranty`]: Serial lookup and ticket ids
//! - [`catalog`]: Static products, warranty records and seeds

pub mod action;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod notifications;
pub mod screen;
pub mod state;
pub mod warranty;

//! # vela-ui-widgets
//!
//! Stateful components built on the `vela-ui` core:
//!
//! - [`ToastManager`] / [`ToastProvider`] - bounded queue of transient
//!   notifications, each with its own cancellable auto-dismiss timer
//! - [`Menu`] / [`SubMenu`] / [`MenuItem`] - a menu tree with a single-open
//!   submenu state machine and an externally owned selection set
//!
//! Components here are headless: they consume events from a
//! [`UiContext`](vela_ui::UiContext), mutate their own state, and hand back
//! plain view snapshots ([`ToastOverlayView`], [`MenuView`]) for a render
//! collaborator to draw.

mod menu;
mod toast;
mod toast_manager;

pub use menu::*;
pub use toast::*;
pub use toast_manager::*;

//! # vela-ui
//!
//! Render-agnostic UI library.
//!
//! This crate provides headless UI state machinery with zero dependencies on
//! any rendering backend. Widgets built on top of it (see `vela-ui-widgets`)
//! are pure state + event-dispatch components; turning their view snapshots
//! into pixels, terminal cells, or markup is the job of a collaborator crate.
//!
//! ## Core Types
//!
//! - [`UiContext`] - Central coordinator for the UI system
//! - [`WidgetId`] - Stable identity for event targeting
//!
//! ## Input & Events
//!
//! - [`InteractionEvent`] - Types of UI interactions (click, key press, ...)
//! - [`TargetedEvent`] - An event targeted at a specific widget
//!
//! ## State Management
//!
//! - [`WidgetMemory`] - Stores internal widget state across frames
//! - [`TimerQueue`] - Cancellable one-shot timers owned by widgets
//!
//! ## Errors
//!
//! - [`UiError`] - Fail-fast programming-contract violations

mod context;
mod error;
mod events;
mod memory;
mod timer;

// Core types
pub use context::*;
pub use error::*;

// Input & Events
pub use events::*;

// State Management
pub use memory::*;
pub use timer::*;

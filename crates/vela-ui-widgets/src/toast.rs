//! Core toast data structures.
//!
//! This module defines the toast data model: the id, kind, position, and
//! spec types, the per-toast lifecycle phase, and the view snapshots handed
//! to the render collaborator. The queueing and timing logic lives in
//! [`ToastManager`](crate::ToastManager).

use std::time::{Duration, Instant};

use vela_ui::TimerToken;
use vela_ui_macros::WithBuilders;

/// Duration of the cosmetic "entering" phase every toast starts in.
///
/// Fixed and non-configurable. The phase is purely visual: the dismissal
/// countdown starts at mount, not when the entering phase settles.
pub const ENTER_PHASE_DURATION: Duration = Duration::from_millis(100);

/// Unique identifier for a toast.
///
/// Ids are assigned from a per-manager monotonically increasing counter at
/// show-time and stay stable across re-renders, so a rebuild never resets an
/// in-flight dismissal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_counter(raw: u64) -> Self {
        Self(raw)
    }

    /// The widget id of the toast itself, e.g. `toast-3`.
    pub fn widget_id(&self) -> String {
        format!("toast-{}", self.0)
    }

    /// The widget id of the toast's close button, e.g. `toast-3__close`.
    pub fn close_widget_id(&self) -> String {
        format!("toast-{}__close", self.0)
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of a toast, determining default duration and visual accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Operation completed successfully.
    Success,
    /// Something went wrong; stays until manually dismissed.
    Error,
    /// Warning that doesn't block operation.
    Warning,
    /// Informational message.
    #[default]
    Info,
}

impl ToastKind {
    /// Default auto-dismiss duration for this kind.
    ///
    /// `Duration::ZERO` disables auto-dismiss (manual close only).
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastKind::Success | ToastKind::Info => Duration::from_secs(3),
            ToastKind::Warning => Duration::from_secs(5),
            ToastKind::Error => Duration::ZERO,
        }
    }
}

/// Screen anchor a toast stack is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastPosition {
    /// Top-left corner.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, centered.
    BottomCenter,
    /// Bottom-right corner.
    #[default]
    BottomRight,
}

impl ToastPosition {
    /// All six anchors, for iterating overlay stacks.
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    /// Whether this anchor sits on the top edge.
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            ToastPosition::TopLeft | ToastPosition::TopCenter | ToastPosition::TopRight
        )
    }
}

/// Everything a caller specifies when showing a toast.
#[derive(Debug, Clone, WithBuilders)]
pub struct ToastSpec {
    /// Message text shown to the user.
    #[with_builders(into)]
    pub message: String,
    /// Kind of the toast.
    pub kind: ToastKind,
    /// Auto-dismiss duration; `Duration::ZERO` disables auto-dismiss.
    pub duration: Duration,
    /// Screen anchor.
    pub position: ToastPosition,
}

impl ToastSpec {
    /// Create a spec with the given kind and message.
    ///
    /// Duration defaults to the kind's default; position to the default
    /// anchor. Both can be overridden with the `with_*` builders.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: kind.default_duration(),
            position: ToastPosition::default(),
        }
    }

    /// Create a success spec.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Create an error spec.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Create a warning spec.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Create an info spec.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }
}

/// Lifecycle phase of an active toast.
///
/// Every toast mounts in `Entering` and settles to `Visible` after the fixed
/// [`ENTER_PHASE_DURATION`]. Removal is immediate; exit animation, if any, is
/// the render collaborator's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Toast is animating in.
    Entering,
    /// Toast is fully visible.
    Visible,
}

/// An active toast owned by the manager.
#[derive(Debug)]
pub struct ToastItem {
    id: ToastId,
    spec: ToastSpec,
    phase: ToastPhase,
    mounted_at: Option<Instant>,
    enter_timer: Option<TimerToken>,
    dismiss_timer: Option<TimerToken>,
}

impl ToastItem {
    pub(crate) fn new(id: ToastId, spec: ToastSpec) -> Self {
        Self {
            id,
            spec,
            phase: ToastPhase::Entering,
            mounted_at: None,
            enter_timer: None,
            dismiss_timer: None,
        }
    }

    /// The toast's unique id.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// The spec the toast was shown with.
    pub fn spec(&self) -> &ToastSpec {
        &self.spec
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.spec.message
    }

    /// The toast kind.
    pub fn kind(&self) -> ToastKind {
        self.spec.kind
    }

    /// The screen anchor.
    pub fn position(&self) -> ToastPosition {
        self.spec.position
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// When the toast mounted, if it has been ticked at least once.
    pub fn mounted_at(&self) -> Option<Instant> {
        self.mounted_at
    }

    pub(crate) fn set_phase(&mut self, phase: ToastPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_mounted_at(&mut self, at: Instant) {
        self.mounted_at = Some(at);
    }

    pub(crate) fn duration_mut(&mut self) -> &mut Duration {
        &mut self.spec.duration
    }

    pub(crate) fn enter_timer(&self) -> Option<TimerToken> {
        self.enter_timer
    }

    pub(crate) fn dismiss_timer(&self) -> Option<TimerToken> {
        self.dismiss_timer
    }

    pub(crate) fn set_enter_timer(&mut self, token: Option<TimerToken>) {
        self.enter_timer = token;
    }

    pub(crate) fn set_dismiss_timer(&mut self, token: Option<TimerToken>) {
        self.dismiss_timer = token;
    }
}

/// Snapshot of one toast for the render collaborator.
#[derive(Debug, Clone)]
pub struct ToastView {
    /// The toast's id (also yields the widget ids for event targeting).
    pub id: ToastId,
    /// Message text.
    pub message: String,
    /// Toast kind.
    pub kind: ToastKind,
    /// Screen anchor.
    pub position: ToastPosition,
    /// Lifecycle phase at snapshot time.
    pub phase: ToastPhase,
}

impl ToastView {
    pub(crate) fn of(item: &ToastItem) -> Self {
        Self {
            id: item.id(),
            message: item.message().to_string(),
            kind: item.kind(),
            position: item.position(),
            phase: item.phase(),
        }
    }
}

/// Snapshot of all active toasts, in show order.
#[derive(Debug, Clone, Default)]
pub struct ToastOverlayView {
    /// All active toasts, oldest first.
    pub toasts: Vec<ToastView>,
}

impl ToastOverlayView {
    /// The toasts stacked at the given anchor, oldest first.
    pub fn stack(&self, position: ToastPosition) -> impl Iterator<Item = &ToastView> {
        self.toasts.iter().filter(move |t| t.position == position)
    }

    /// Total number of active toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toasts are active.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

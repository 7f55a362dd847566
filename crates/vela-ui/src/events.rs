//! Interaction events for headless UI components
//!
//! This module defines the event vocabulary that stateful widgets consume.
//! It is backend-agnostic: the host (a windowing loop, a terminal frontend,
//! a test harness) performs its own hit testing and keyboard routing, then
//! pushes already-targeted events into the [`UiContext`](crate::UiContext).

/// Stable identity for a widget, used for event targeting.
///
/// Ids must be unique within one UI tree and stable across frames - widgets
/// rely on this to keep per-id state (open submenus, in-flight timers) from
/// being reset by a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    /// Create a new widget id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S: Into<String>> From<S> for WidgetId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// Keys that participate in widget activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
}

/// Type of interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Pointer click resolved onto the target widget.
    Click,
    /// Key press routed to the target widget.
    KeyPress {
        /// Which key was pressed.
        key: Key,
    },
    /// Pointer click that landed outside the target widget's subtree.
    ///
    /// Outside detection is the host's job; widgets only consume the signal.
    PointerOutside,
}

/// An interaction event targeted at a specific widget.
#[derive(Debug, Clone)]
pub struct TargetedEvent {
    /// The interaction event.
    pub event: InteractionEvent,
    /// The id of the target widget.
    pub target: WidgetId,
}

impl TargetedEvent {
    /// Convenience constructor for a click on `target`.
    pub fn click(target: impl Into<WidgetId>) -> Self {
        Self {
            event: InteractionEvent::Click,
            target: target.into(),
        }
    }

    /// Convenience constructor for a key press routed to `target`.
    pub fn key(target: impl Into<WidgetId>, key: Key) -> Self {
        Self {
            event: InteractionEvent::KeyPress { key },
            target: target.into(),
        }
    }

    /// Convenience constructor for a pointer click outside `target`.
    pub fn pointer_outside(target: impl Into<WidgetId>) -> Self {
        Self {
            event: InteractionEvent::PointerOutside,
            target: target.into(),
        }
    }

    /// Whether this event activates its target (click, Enter, or Space).
    pub fn is_activation(&self) -> bool {
        matches!(
            self.event,
            InteractionEvent::Click
                | InteractionEvent::KeyPress { key: Key::Enter }
                | InteractionEvent::KeyPress { key: Key::Space }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_id_display_roundtrips() {
        let id = WidgetId::new("toast-3");
        assert_eq!(id.as_str(), "toast-3");
        assert_eq!(id.to_string(), "toast-3");
    }

    #[test]
    fn click_and_activation_keys_activate() {
        assert!(TargetedEvent::click("a").is_activation());
        assert!(TargetedEvent::key("a", Key::Enter).is_activation());
        assert!(TargetedEvent::key("a", Key::Space).is_activation());
    }

    #[test]
    fn escape_and_outside_do_not_activate() {
        assert!(!TargetedEvent::key("a", Key::Escape).is_activation());
        assert!(!TargetedEvent::pointer_outside("a").is_activation());
    }
}

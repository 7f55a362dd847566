//! UI Context for managing the headless UI lifecycle
//!
//! The `UiContext` is the central coordinator for the UI system. It holds the
//! "plumbing" that components need to function:
//! - Events targeted by the host (clicks, key presses, outside-click signals)
//! - Widget memory (stores internal widget state like open submenus)
//! - ID stack (for generating unique widget IDs)
//!
//! The host owns the event loop: it performs hit testing and keyboard routing
//! against whatever it rendered last frame, pushes the resulting
//! [`TargetedEvent`]s here, then begins a new frame and rebuilds components.
//! Components check for their events during the build and fire callbacks.

use crate::{InteractionEvent, Key, TargetedEvent, WidgetMemory};

/// The main UI context that coordinates all UI operations
///
/// This is passed to components when building the UI. It provides:
/// - Access to events targeted since the previous frame
/// - Widget state storage (open submenus, etc.)
/// - Event checking methods (was_clicked, was_activated, ...)
/// - ID generation for widgets
///
/// # Example
///
/// ```ignore
/// // In your app's update loop:
/// ctx.push_event(TargetedEvent::click("sub1"));
/// ctx.begin_frame();
///
/// // Build UI - components check for events and fire callbacks internally
/// let view = Menu::new("main").show(&mut ctx, |menu| { /* ... */ });
/// ```
pub struct UiContext {
    /// Events pushed by the host since the last `begin_frame`
    pending_events: Vec<TargetedEvent>,

    /// Events available during the frame currently being built
    events: Vec<TargetedEvent>,

    /// Widget memory for storing internal state
    memory: WidgetMemory,

    /// ID stack for hierarchical ID generation
    id_stack: Vec<String>,

    /// Counter for generating unique IDs within a frame
    id_counter: usize,
}

impl UiContext {
    /// Create a new UI context
    pub fn new() -> Self {
        Self {
            pending_events: Vec::new(),
            events: Vec::new(),
            memory: WidgetMemory::new(),
            id_stack: Vec::new(),
            id_counter: 0,
        }
    }

    // ========== Frame Lifecycle ==========

    /// Begin a new frame
    ///
    /// Publishes the events pushed since the previous frame so that
    /// components built during this frame can observe them, and resets the
    /// per-frame ID counter. Events from the frame before are discarded.
    pub fn begin_frame(&mut self) {
        self.events = std::mem::take(&mut self.pending_events);
        self.id_counter = 0;
    }

    /// Push an event from the host
    ///
    /// Events accumulate between frames and become visible to components at
    /// the next `begin_frame`.
    pub fn push_event(&mut self, event: TargetedEvent) {
        self.pending_events.push(event);
    }

    // ========== Event Checking ==========

    /// Get all events for the frame being built
    pub fn events(&self) -> &[TargetedEvent] {
        &self.events
    }

    /// Check if a widget was clicked
    pub fn was_clicked(&self, id: &str) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e.event, InteractionEvent::Click) && e.target.as_str() == id)
    }

    /// Check if a widget was activated (clicked, or Enter/Space pressed)
    pub fn was_activated(&self, id: &str) -> bool {
        self.events
            .iter()
            .any(|e| e.is_activation() && e.target.as_str() == id)
    }

    /// Check if a specific key was pressed with the widget as target
    pub fn key_pressed(&self, id: &str, key: Key) -> bool {
        self.events.iter().any(|e| {
            matches!(e.event, InteractionEvent::KeyPress { key: k } if k == key)
                && e.target.as_str() == id
        })
    }

    /// Check if a pointer click landed outside the widget's subtree
    pub fn clicked_outside(&self, id: &str) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e.event, InteractionEvent::PointerOutside) && e.target.as_str() == id)
    }

    /// Get all events targeting a specific widget
    pub fn events_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a TargetedEvent> {
        self.events.iter().filter(move |e| e.target.as_str() == id)
    }

    // ========== Widget Memory ==========

    /// Get access to widget memory for storing internal state
    pub fn memory(&mut self) -> &mut WidgetMemory {
        &mut self.memory
    }

    /// Get read-only access to widget memory
    pub fn memory_ref(&self) -> &WidgetMemory {
        &self.memory
    }

    // ========== ID Generation ==========

    /// Generate a unique ID for a widget
    ///
    /// IDs are generated based on:
    /// 1. The current ID stack (parent scopes)
    /// 2. The provided label/name
    /// 3. A counter for disambiguation
    ///
    /// This ensures stable IDs across frames as long as the UI structure
    /// remains the same.
    pub fn generate_id(&mut self, label: &str) -> String {
        let id = if self.id_stack.is_empty() {
            format!("{}_{}", label, self.id_counter)
        } else {
            format!("{}/{}_{}", self.id_stack.join("/"), label, self.id_counter)
        };
        self.id_counter += 1;
        id
    }

    /// Push a scope onto the ID stack
    ///
    /// All IDs generated while this scope is active will be prefixed
    /// with this scope name.
    pub fn push_id(&mut self, scope: impl Into<String>) {
        self.id_stack.push(scope.into());
    }

    /// Pop the current scope from the ID stack
    pub fn pop_id(&mut self) {
        self.id_stack.pop();
    }

    /// Execute a closure with a temporary ID scope
    pub fn with_id_scope<R>(
        &mut self,
        scope: impl Into<String>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_id(scope);
        let result = f(self);
        self.pop_id();
        result
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiContext")
            .field("events", &self.events.len())
            .field("pending_events", &self.pending_events.len())
            .field("memory", &self.memory)
            .field("id_stack", &self.id_stack)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = UiContext::new();
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn test_events_published_at_begin_frame() {
        let mut ctx = UiContext::new();
        ctx.push_event(TargetedEvent::click("button_0"));

        // Not visible until the frame begins.
        assert!(!ctx.was_clicked("button_0"));

        ctx.begin_frame();
        assert!(ctx.was_clicked("button_0"));

        // Discarded on the next frame.
        ctx.begin_frame();
        assert!(!ctx.was_clicked("button_0"));
    }

    #[test]
    fn test_activation_checks() {
        let mut ctx = UiContext::new();
        ctx.push_event(TargetedEvent::key("item", Key::Enter));
        ctx.push_event(TargetedEvent::key("menu", Key::Escape));
        ctx.push_event(TargetedEvent::pointer_outside("menu"));
        ctx.begin_frame();

        assert!(ctx.was_activated("item"));
        assert!(!ctx.was_clicked("item"));
        assert!(!ctx.was_activated("menu"));
        assert!(ctx.key_pressed("menu", Key::Escape));
        assert!(ctx.clicked_outside("menu"));
    }

    #[test]
    fn test_id_generation() {
        let mut ctx = UiContext::new();

        let id1 = ctx.generate_id("button");
        let id2 = ctx.generate_id("button");
        let id3 = ctx.generate_id("slider");

        assert_eq!(id1, "button_0");
        assert_eq!(id2, "button_1");
        assert_eq!(id3, "slider_2");
    }

    #[test]
    fn test_id_scoping() {
        let mut ctx = UiContext::new();

        ctx.push_id("parent");
        let id1 = ctx.generate_id("child");
        ctx.pop_id();

        let id2 = ctx.generate_id("sibling");

        assert_eq!(id1, "parent/child_0");
        assert_eq!(id2, "sibling_1");
    }

    #[test]
    fn test_with_id_scope() {
        let mut ctx = UiContext::new();

        let id = ctx.with_id_scope("container", |ctx| ctx.generate_id("item"));

        assert_eq!(id, "container/item_0");
        assert!(ctx.id_stack.is_empty());
    }
}

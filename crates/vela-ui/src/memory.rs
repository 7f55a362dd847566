//! Widget memory for storing internal widget state
//!
//! This module provides the `WidgetMemory` struct which stores per-widget
//! internal state that persists across frames. This is what lets a menu keep
//! its open submenu, or any other widget keep private state, without the
//! application managing it by hand.

use std::any::Any;
use std::collections::HashMap;

/// Unique identifier for widget state storage
///
/// This is typically derived from the widget's ID and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetStateId(String);

impl WidgetStateId {
    /// Create a new widget state ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a widget state ID with a type suffix
    ///
    /// Useful when a single widget needs to store multiple types of state.
    pub fn with_suffix(id: impl Into<String>, suffix: &str) -> Self {
        Self(format!("{}_{}", id.into(), suffix))
    }
}

impl<S: Into<String>> From<S> for WidgetStateId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// State for a menu tree
///
/// A menu tree holds exactly one piece of internal state: the id of the
/// currently open submenu. At most one submenu can be open at a time across
/// the whole tree; opening another one implicitly closes the previous one
/// because there is only this single scalar to write.
#[derive(Debug, Clone, Default)]
pub struct MenuMemory {
    /// Id of the currently open submenu, if any.
    pub open_submenu: Option<String>,
}

impl MenuMemory {
    /// Whether the submenu with the given id is the open one.
    pub fn is_open(&self, id: &str) -> bool {
        self.open_submenu.as_deref() == Some(id)
    }

    /// Open the submenu with the given id, closing any other.
    pub fn open(&mut self, id: impl Into<String>) {
        self.open_submenu = Some(id.into());
    }

    /// Close whichever submenu is open. Idempotent.
    pub fn close(&mut self) {
        self.open_submenu = None;
    }

    /// Toggle the submenu with the given id.
    ///
    /// If it was the open one it closes; otherwise it becomes the open one.
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.close();
        } else {
            self.open(id);
        }
    }
}

/// Widget memory - stores internal state for all widgets
///
/// This is a type-erased storage that allows widgets to store arbitrary
/// state that persists across frames. Each widget type should use a
/// consistent state type (e.g., `MenuMemory` for menus).
pub struct WidgetMemory {
    /// Type-erased storage for widget states
    states: HashMap<WidgetStateId, Box<dyn Any>>,
}

impl WidgetMemory {
    /// Create a new empty widget memory
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Get or create state for a widget
    ///
    /// If state doesn't exist for this ID, creates it using the provided default.
    pub fn get_or_insert<T: 'static>(
        &mut self,
        id: impl Into<WidgetStateId>,
        default: T,
    ) -> &mut T {
        let id = id.into();
        self.states
            .entry(id)
            .or_insert_with(|| Box::new(default))
            .downcast_mut::<T>()
            .expect("Widget state type mismatch")
    }

    /// Get or create state for a widget using Default
    pub fn get_or_default<T: Default + 'static>(&mut self, id: impl Into<WidgetStateId>) -> &mut T {
        self.get_or_insert(id, T::default())
    }

    /// Get state for a widget, if it exists
    pub fn get<T: 'static>(&self, id: impl Into<WidgetStateId>) -> Option<&T> {
        let id = id.into();
        self.states.get(&id).and_then(|s| s.downcast_ref::<T>())
    }

    /// Get mutable state for a widget, if it exists
    pub fn get_mut<T: 'static>(&mut self, id: impl Into<WidgetStateId>) -> Option<&mut T> {
        let id = id.into();
        self.states.get_mut(&id).and_then(|s| s.downcast_mut::<T>())
    }

    /// Check if state exists for a widget
    pub fn contains(&self, id: impl Into<WidgetStateId>) -> bool {
        self.states.contains_key(&id.into())
    }

    /// Remove state for a widget
    pub fn remove(&mut self, id: impl Into<WidgetStateId>) -> bool {
        self.states.remove(&id.into()).is_some()
    }

    /// Clear all widget state
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Get the number of stored states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the memory is empty
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get or create menu state for the menu tree with the given id
    pub fn menu(&mut self, id: impl Into<WidgetStateId>) -> &mut MenuMemory {
        self.get_or_default(id)
    }
}

impl Default for WidgetMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetMemory")
            .field("num_states", &self.states.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_memory_single_open() {
        let mut state = MenuMemory::default();
        assert!(state.open_submenu.is_none());

        state.open("sub1");
        assert!(state.is_open("sub1"));

        // Opening another submenu implicitly closes the first.
        state.open("sub2");
        assert!(!state.is_open("sub1"));
        assert!(state.is_open("sub2"));
    }

    #[test]
    fn test_menu_memory_toggle() {
        let mut state = MenuMemory::default();

        state.toggle("sub1");
        assert!(state.is_open("sub1"));

        state.toggle("sub1");
        assert!(state.open_submenu.is_none());

        state.toggle("sub1");
        state.toggle("sub2");
        assert!(state.is_open("sub2"));
    }

    #[test]
    fn test_menu_memory_close_is_idempotent() {
        let mut state = MenuMemory::default();
        state.close();
        assert!(state.open_submenu.is_none());

        state.open("sub1");
        state.close();
        state.close();
        assert!(state.open_submenu.is_none());
    }

    #[test]
    fn test_widget_memory_basic() {
        let mut memory = WidgetMemory::new();
        assert!(memory.is_empty());

        memory.menu("main").open("sub1");

        assert_eq!(memory.len(), 1);
        assert!(memory.contains("main"));

        let state = memory.get::<MenuMemory>("main").unwrap();
        assert!(state.is_open("sub1"));
    }

    #[test]
    fn test_widget_memory_type_safety() {
        let mut memory = WidgetMemory::new();

        memory.menu("widget1");
        memory.get_or_insert("widget2", 42u32);

        // Different types for different IDs work fine
        assert!(memory.get::<MenuMemory>("widget1").is_some());
        assert!(memory.get::<u32>("widget2").is_some());

        // Wrong type returns None
        assert!(memory.get::<u32>("widget1").is_none());
        assert!(memory.get::<MenuMemory>("widget2").is_none());
    }

    #[test]
    fn test_widget_memory_remove() {
        let mut memory = WidgetMemory::new();
        memory.menu("main").open("sub1");

        assert!(memory.remove("main"));
        assert!(!memory.remove("main"));

        // Recreated state starts fresh.
        assert!(memory.menu("main").open_submenu.is_none());
    }
}

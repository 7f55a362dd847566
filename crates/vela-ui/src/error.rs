//! Error types for programming-contract violations
//!
//! The error taxonomy here is deliberately small. Operations that can
//! legitimately find nothing to do (dismissing an unknown toast, closing an
//! already-closed submenu) are idempotent silent no-ops and do not appear
//! here. `UiError` covers the cases that indicate an integration bug and
//! must surface immediately rather than degrade silently.

use thiserror::Error;

/// A programming-contract violation detected while building UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A menu item was built without an enclosing `Menu` scope.
    #[error("menu item `{id}` was built outside of an active Menu scope")]
    ItemOutsideMenu {
        /// The id of the offending item.
        id: String,
    },

    /// A submenu was built without an enclosing `Menu` scope.
    #[error("submenu `{id}` was built outside of an active Menu scope")]
    SubmenuOutsideMenu {
        /// The id of the offending submenu.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_widget() {
        let err = UiError::ItemOutsideMenu { id: "3".into() };
        assert!(err.to_string().contains("`3`"));

        let err = UiError::SubmenuOutsideMenu { id: "sub1".into() };
        assert!(err.to_string().contains("`sub1`"));
    }
}

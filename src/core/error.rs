//=========================================================================
// Screen Errors
//=========================================================================
//
// Usage errors raised by the screen stack.
//
// All variants indicate a navigation-flow bug in the caller. They are
// returned immediately and never retried or recovered internally.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::screen::ScreenKey;

//=== ScreenError =========================================================

/// Errors returned by [`ScreenStack`](crate::core::stack::ScreenStack)
/// navigation and query operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError<K: ScreenKey> {
    /// Navigation or query against a key with no registered screen.
    #[error("screen {0:?} is not registered")]
    UnknownScreen(K),

    /// Two screens reported the same key during initialization.
    #[error("screen {0:?} was registered more than once")]
    DuplicateIdentity(K),

    /// A hide operation was requested with nothing on the stack.
    #[error("screen stack is empty")]
    EmptyStack,
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_ui::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Screen contract
pub use crate::core::screen::{Layer, NavRequest, Navigator, Screen, ScreenKey};

// Stack controller
pub use crate::core::error::ScreenError;
pub use crate::core::schedule::StalePolicy;
pub use crate::core::stack::{ScreenStack, ScreenStackBuilder};

// Runtime
pub use crate::runtime::{RuntimeError, RuntimeHandle, UiRuntime, UiRuntimeBuilder};

//=========================================================================
// Aetheric UI — Library Root
//
// This crate defines the public API surface of the Aetheric UI screen
// stack.
//
// Responsibilities:
// - Expose the screen contract and the stack controller (`core`)
// - Provide an optional fixed-rate host thread (`runtime`) for
//   applications without their own update loop
// - Keep channel plumbing between host and UI thread internal
//
// Typical usage:
// ```no_run
// use aetheric_ui::prelude::*;
//
// // Register screens, show the first one, tick once per frame.
// let mut stack = ScreenStackBuilder::new().with_screen(main_menu).build()?;
// stack.show(Menu::Main)?;
// loop {
//     stack.tick(frame_time)?;
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the screen contract, the navigation stack and the
// scheduler. Most applications only need the prelude.
//
pub mod core;
pub mod prelude;

//--- Runtime -------------------------------------------------------------
//
// `runtime` hosts a stack on its own logic thread and talks to it over
// channels.
//
pub mod runtime;

//--- Public Exports ------------------------------------------------------

pub use crate::core::error::ScreenError;
pub use crate::core::stack::{ScreenStack, ScreenStackBuilder};
pub use runtime::{RuntimeError, RuntimeHandle, UiRuntime, UiRuntimeBuilder};

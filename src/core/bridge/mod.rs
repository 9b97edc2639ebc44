//=========================================================================
// Runtime Bridge
//=========================================================================
//
// Bridges the host application thread with the UI logic thread.
//
// Components:
// - `RuntimeCommand`: host → UI thread control messages
// - `command_collector`: UI-side command collection per frame
//
// Navigation itself travels over the Navigator channel, not this one.
//
//=========================================================================

//=== Module Declarations =================================================

mod command_collector;

//=== Internal API ========================================================

pub(crate) use command_collector::{CommandCollector, TickControl};

//=== RuntimeCommand ======================================================

/// Control messages sent from the host to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuntimeCommand {
    /// Scene loader is about to replace the scene.
    BeforeLoadScene,

    /// Stop the UI thread and hand the stack back.
    Shutdown,
}

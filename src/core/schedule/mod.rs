//=========================================================================
// Scheduling
//=========================================================================
//
// Cooperative deferral for screen lifecycle work.
//
// Architecture:
//   ScreenStack ── defer_frame() / defer_for() ──► TaskQueue
//   ScreenStack ◄───────── advance(dt) ──────────── (one quantum)
//
//=========================================================================

//=== Module Declarations =================================================

mod task_queue;

//=== Internal API ========================================================

pub(crate) use task_queue::{ScheduledTask, ScreenTask, TaskQueue};

//=== Stale Policy ========================================================

/// What to do with scheduled work whose screen has moved on.
///
/// Every scheduled task remembers the transition epoch of its screen.
/// Pops, teardowns and bring-ups advance the epoch, so a task scheduled
/// before one of those is stale when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Drop stale tasks.
    #[default]
    Skip,

    /// Run stale tasks anyway.
    Fire,
}

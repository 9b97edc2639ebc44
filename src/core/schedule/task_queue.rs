//=========================================================================
// Task Queue
//=========================================================================
//
// Frame-deferred and time-delayed screen tasks.
//
// Tasks queued while a quantum is being processed belong to a later
// quantum: advance() takes the whole frame queue before anything runs.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::screen::ScreenKey;

//=== Screen Task =========================================================

/// Lifecycle step to run for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScreenTask {
    /// Bring-up step 1 (activate, `on_screen_up`).
    BringUp,

    /// Bring-up step 2 (`on_screen_up_and_ready`).
    Ready,

    /// Teardown (deactivate, `on_screen_down`) as one unit.
    Teardown,
}

/// A task bound to a screen and the epoch it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScheduledTask<K: ScreenKey> {
    pub key: K,
    pub epoch: u64,
    pub task: ScreenTask,
}

impl<K: ScreenKey> ScheduledTask<K> {
    pub fn new(key: K, epoch: u64, task: ScreenTask) -> Self {
        Self { key, epoch, task }
    }
}

struct Timer<K: ScreenKey> {
    remaining: Duration,
    task: ScheduledTask<K>,
}

//=== Task Queue ==========================================================

/// Queue of pending screen tasks.
///
/// Frame tasks run on the next call to [`TaskQueue::advance`]. Timed tasks
/// run on the first advance whose accumulated time reaches their delay, so
/// a zero delay behaves like a frame task.
pub(crate) struct TaskQueue<K: ScreenKey> {
    next_frame: Vec<ScheduledTask<K>>,
    timers: Vec<Timer<K>>,
}

impl<K: ScreenKey> TaskQueue<K> {
    /// Creates a new empty task queue.
    pub fn new() -> Self {
        Self {
            next_frame: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Runs `task` on the next quantum.
    pub fn defer_frame(&mut self, task: ScheduledTask<K>) {
        self.next_frame.push(task);
    }

    /// Runs `task` once `delay` has elapsed.
    pub fn defer_for(&mut self, delay: Duration, task: ScheduledTask<K>) {
        self.timers.push(Timer { remaining: delay, task });
    }

    /// Advances one quantum of `elapsed` time and returns the due tasks.
    ///
    /// Frame tasks come first, then timers in the order they were queued.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask<K>> {
        let mut due = std::mem::take(&mut self.next_frame);

        let mut waiting = Vec::with_capacity(self.timers.len());
        for mut timer in self.timers.drain(..) {
            if timer.remaining <= elapsed {
                due.push(timer.task);
            } else {
                timer.remaining -= elapsed;
                waiting.push(timer);
            }
        }
        self.timers = waiting;

        due
    }

    /// Returns the number of pending tasks.
    pub fn len(&self) -> usize {
        self.next_frame.len() + self.timers.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: ScreenKey> Default for TaskQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

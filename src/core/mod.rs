//=========================================================================
// Core Systems
//
// Screen contract, navigation stack, scheduling and the UI logic loop.
//
// Responsibilities:
// - Define the lifecycle contract every screen implements (`screen`)
// - Own the registry and navigation stack (`stack`)
// - Defer lifecycle work by one quantum or by a delay (`schedule`)
// - Tick the stack at a fixed rate on a dedicated thread (`UiLoop`)
//
// Notes:
// All stack mutation happens on one thread. When the stack is driven by
// `UiLoop`, the host talks to it only through channels: navigation via a
// `Navigator`, control via `RuntimeCommand`.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use log::{error, info};

//=== Internal Modules ====================================================
pub mod error;
pub mod schedule;
pub mod screen;
pub mod stack;

pub(crate) mod bridge;

use bridge::{CommandCollector, TickControl};
use error::ScreenError;
use screen::ScreenKey;
use stack::ScreenStack;

//=== UiLoop ==============================================================
//
// Drives a ScreenStack at a fixed tick rate. Each tick is one
// scheduling quantum.
//
pub(crate) struct UiLoop<K: ScreenKey> {
    stack: ScreenStack<K>,
    collector: CommandCollector,
}

impl<K: ScreenKey> UiLoop<K> {
    //--- Construction -----------------------------------------------------
    pub fn new(stack: ScreenStack<K>, collector: CommandCollector) -> Self {
        Self { stack, collector }
    }

    //--- spawn_ui_thread() -----------------------------------------------
    //
    // Spawns the UI logic thread at `tps` ticks per second.
    //
    // Each tick:
    //  1. Collects host commands
    //  2. Delivers scene-load notifications
    //  3. Ticks the stack with the time elapsed since the previous tick
    //  4. Sleeps to maintain fixed pacing
    //
    // The thread returns the stack on shutdown, or the first navigation
    // error it hits.
    //
    pub fn spawn_ui_thread(
        self,
        tps: f64,
    ) -> thread::JoinHandle<Result<ScreenStack<K>, ScreenError<K>>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut stack = self.stack;
            let mut collector = self.collector;
            let mut last_tick = Instant::now();

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather host commands ---------------------------
                let control = collector.collect_frame();

                //--- Step 2: Scene-load notifications -----------------------
                for _ in 0..collector.take_scene_loads() {
                    if let Err(e) = stack.notify_before_load_scene() {
                        error!("UI thread stopped: {}", e);
                        return Err(e);
                    }
                }

                if control == TickControl::Exit {
                    info!("UI thread exiting.");
                    break;
                }

                //--- Step 3: Advance one quantum ----------------------------
                let elapsed = frame_start.duration_since(last_tick);
                last_tick = frame_start;

                if let Err(e) = stack.tick(elapsed) {
                    error!("UI thread stopped: {}", e);
                    return Err(e);
                }

                //--- Step 4: Maintain fixed pacing --------------------------
                let spent = frame_start.elapsed();
                if spent < frame_duration {
                    thread::sleep(frame_duration - spent);
                }
            }

            Ok(stack)
        })
    }
}

//=========================================================================
// Command Collector
//=========================================================================
//
// Host command collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<RuntimeCommand> → collect_frame() → scene loads → TickControl
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::RuntimeCommand;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CommandCollector ====================================================

/// Collects host commands once per frame.
pub(crate) struct CommandCollector {
    receiver: Receiver<RuntimeCommand>,
    scene_loads: usize,
}

impl CommandCollector {
    pub(crate) fn new(receiver: Receiver<RuntimeCommand>) -> Self {
        Self {
            receiver,
            scene_loads: 0,
        }
    }

    /// Collects pending commands (bounded to prevent starvation).
    ///
    /// A shutdown or a dropped host handle ends the loop.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        const MAX_COMMANDS_PER_FRAME: usize = 64;

        let mut drained = 0;

        while drained < MAX_COMMANDS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(RuntimeCommand::BeforeLoadScene) => {
                    self.scene_loads += 1;
                    drained += 1;
                }
                Ok(RuntimeCommand::Shutdown) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_COMMANDS_PER_FRAME {
            warn!("Command queue backlog: drained {} commands this frame", drained);
        }

        TickControl::Continue
    }

    /// Takes the number of scene-load notifications collected so far.
    pub(crate) fn take_scene_loads(&mut self) -> usize {
        std::mem::take(&mut self.scene_loads)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

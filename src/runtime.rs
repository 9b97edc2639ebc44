//=========================================================================
// UI Runtime
//
// Hosts a screen stack on its own logic thread.
//
// Architecture:
// ```text
//     UiRuntimeBuilder ──build(stack)──> UiRuntime ──start()──> RuntimeHandle
//         │                                 │                      │
//         ├─ with_tps()                     └─ init()              ├─ navigator()
//         └─ with_channel_capacity()                               ├─ notify_before_load_scene()
//                                                                  └─ shutdown()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Sender};
use log::{info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::bridge::{CommandCollector, RuntimeCommand};
use crate::core::error::ScreenError;
use crate::core::screen::{Navigator, ScreenKey};
use crate::core::stack::ScreenStack;
use crate::core::UiLoop;

//=== RuntimeError ========================================================

/// Errors reported when a runtime is shut down.
#[derive(Debug, Error)]
pub enum RuntimeError<K: ScreenKey> {
    /// The UI thread stopped on a navigation error.
    #[error("UI thread stopped: {0}")]
    Screen(#[from] ScreenError<K>),

    /// The UI thread panicked, usually inside a screen callback.
    #[error("UI thread panicked")]
    Panicked,
}

//=== UiRuntimeBuilder ====================================================

/// Builder for configuring a [`UiRuntime`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (ticks, i.e. scheduling quanta, per second)
/// - **Channel capacity**: 128 commands
///
/// # Examples
///
/// ```no_run
/// # use aetheric_ui::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Menu { Main }
/// # impl ScreenKey for Menu {}
/// # struct MainMenu { layer: Layer<Menu> }
/// # impl Screen<Menu> for MainMenu {
/// #     fn key(&self) -> Menu { Menu::Main }
/// #     fn layer(&self) -> &Layer<Menu> { &self.layer }
/// #     fn layer_mut(&mut self) -> &mut Layer<Menu> { &mut self.layer }
/// # }
/// let stack = ScreenStackBuilder::new()
///     .with_screen(MainMenu { layer: Layer::new() })
///     .build()
///     .unwrap();
///
/// let handle = UiRuntimeBuilder::new()
///     .with_tps(120.0)
///     .build(stack)
///     .init(|stack| stack.show(Menu::Main))
///     .unwrap()
///     .start();
///
/// handle.navigator().hide();
/// let stack = handle.shutdown().unwrap();
/// ```
pub struct UiRuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
}

impl UiRuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the target ticks per second for the UI thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the host → UI command channel.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds a runtime around an initialized stack.
    pub fn build<K: ScreenKey>(self, stack: ScreenStack<K>) -> UiRuntime<K> {
        info!("Building UI runtime (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        UiRuntime {
            stack,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for UiRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== UiRuntime ===========================================================

/// A screen stack waiting to be started on its own thread.
pub struct UiRuntime<K: ScreenKey> {
    stack: ScreenStack<K>,
    tps: f64,
    channel_capacity: usize,
}

impl<K: ScreenKey> UiRuntime<K> {
    //--- Initialization ---------------------------------------------------

    /// Runs setup against the stack before the thread starts, typically
    /// showing the first screen.
    pub fn init<F>(mut self, init_fn: F) -> Result<Self, ScreenError<K>>
    where
        F: FnOnce(&mut ScreenStack<K>) -> Result<(), ScreenError<K>>,
    {
        init_fn(&mut self.stack)?;
        Ok(self)
    }

    //--- Execution --------------------------------------------------------

    /// Moves the stack onto the UI thread and returns a handle to it.
    pub fn start(self) -> RuntimeHandle<K> {
        info!("Starting UI runtime (TPS: {})", self.tps);

        let (commands, receiver) = bounded(self.channel_capacity);
        let navigator = self.stack.navigator();

        let thread = UiLoop::new(self.stack, CommandCollector::new(receiver))
            .spawn_ui_thread(self.tps);
        info!("UI thread spawned");

        RuntimeHandle {
            commands,
            navigator,
            thread,
        }
    }
}

//=== RuntimeHandle =======================================================

/// Host-side handle to a running UI thread.
///
/// Dropping the handle without calling [`RuntimeHandle::shutdown`] also
/// stops the thread on its next tick.
pub struct RuntimeHandle<K: ScreenKey> {
    commands: Sender<RuntimeCommand>,
    navigator: Navigator<K>,
    thread: JoinHandle<Result<ScreenStack<K>, ScreenError<K>>>,
}

impl<K: ScreenKey> RuntimeHandle<K> {
    /// Returns a navigator for requesting navigation from the host.
    pub fn navigator(&self) -> Navigator<K> {
        self.navigator.clone()
    }

    /// Tells every screen that the scene is about to be replaced.
    pub fn notify_before_load_scene(&self) {
        if self.commands.send(RuntimeCommand::BeforeLoadScene).is_err() {
            warn!("UI thread is gone, scene-load notification dropped");
        }
    }

    /// Returns true while the UI thread is still ticking.
    pub fn is_running(&self) -> bool {
        !self.thread.is_finished()
    }

    /// Stops the UI thread and returns the stack.
    ///
    /// # Errors
    ///
    /// The navigation error that stopped the thread early, or
    /// [`RuntimeError::Panicked`].
    pub fn shutdown(self) -> Result<ScreenStack<K>, RuntimeError<K>> {
        // The thread may already have stopped on an error
        let _ = self.commands.send(RuntimeCommand::Shutdown);

        match self.thread.join() {
            Ok(result) => {
                info!("UI runtime shutdown complete");
                Ok(result?)
            }
            Err(_) => Err(RuntimeError::Panicked),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Screen Contract
//=========================================================================
//
// Lifecycle contract implemented by every UI panel on the screen stack.
//
// Architecture:
//   Screen (trait, default no-op hooks)
//     └─ Layer (embedded base state: flags, activation, navigator)
//
// Lifecycle:
//   on_screen_initialize ─► [on_screen_up ─► on_screen_up_and_ready
//                            ─► on_screen_down]*
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

//=== Module Declarations =================================================

mod layer;
mod navigator;

//=== Public API ==========================================================

pub use layer::Layer;
pub use navigator::{NavRequest, Navigator};

//=== Screen Key Trait ====================================================

/// Marker trait for screen identifiers.
///
/// Screen keys uniquely identify screens in the ScreenStack's registry.
/// Typically implemented by an application-specific enum with one variant
/// per panel kind.
pub trait ScreenKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Screen Trait ========================================================

/// Defines a UI panel with lifecycle hooks driven by the screen stack.
///
/// Screens are registered once with a [`ScreenStack`](crate::core::stack::ScreenStack)
/// and keep their state between activations. Every screen embeds a
/// [`Layer`] carrying its navigation flags, its last-known activation
/// state and the navigator back-reference.
///
/// # Minimal Implementation
///
/// Only the key and the layer accessors are required:
///
/// ```rust
/// # use aetheric_ui::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Menu { Main }
/// # impl ScreenKey for Menu {}
/// struct MainMenu {
///     layer: Layer<Menu>,
/// }
///
/// impl Screen<Menu> for MainMenu {
///     fn key(&self) -> Menu {
///         Menu::Main
///     }
///
///     fn layer(&self) -> &Layer<Menu> {
///         &self.layer
///     }
///
///     fn layer_mut(&mut self) -> &mut Layer<Menu> {
///         &mut self.layer
///     }
/// }
/// ```
pub trait Screen<K: ScreenKey>: Send {
    /// Identity of this screen. Must be stable for the screen's lifetime.
    fn key(&self) -> K;

    /// Shared base state.
    fn layer(&self) -> &Layer<K>;

    /// Mutable shared base state.
    fn layer_mut(&mut self) -> &mut Layer<K>;

    /// Called exactly once after every screen has been registered.
    ///
    /// Any other registered screen may be targeted by navigation requests
    /// issued from here.
    fn on_screen_initialize(&mut self) {}

    /// Called every time the screen is shown.
    ///
    /// Avoid requesting a show from here for a screen that is itself
    /// mid-transition: hiding it re-shows this screen, which calls this
    /// hook again and loops.
    fn on_screen_up(&mut self) {}

    /// Called one scheduling quantum after [`Screen::on_screen_up`].
    fn on_screen_up_and_ready(&mut self) {}

    /// Called every time the screen is hidden.
    fn on_screen_down(&mut self) {}

    /// Called by the scene loader right before the UI context is torn down.
    fn on_before_load_scene(&mut self) {}

    /// Presentation toggle.
    ///
    /// Invoked by the stack when it flips the activation state of a screen
    /// that does not override activation. Engine bindings hook visibility
    /// here.
    fn on_activation_changed(&mut self, _active: bool) {}

    /// Back action. Default requests a hide on the owning stack.
    fn back(&mut self) {
        match self.layer().navigator() {
            Some(navigator) => navigator.hide(),
            None => warn!("Screen {:?} has no navigator attached, back ignored", self.key()),
        }
    }
}

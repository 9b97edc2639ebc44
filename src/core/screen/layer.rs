//=========================================================================
// Layer
//=========================================================================
//
// Base state shared by every screen implementation.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::{Navigator, ScreenKey};

//=== Layer ===============================================================

/// Base state embedded in every [`Screen`](super::Screen).
///
/// # Flags
///
/// - `override_activation`: the stack never toggles this screen's
///   presentation. The screen manages it and only receives callbacks.
/// - `hide_previous`: showing this screen tears down the current top first.
///
/// A layer starts active, mirroring a panel that exists in the scene before
/// the stack takes ownership. Initialization deactivates it unless it
/// overrides activation.
#[derive(Debug)]
pub struct Layer<K: ScreenKey> {
    override_activation: bool,
    hide_previous: bool,
    active: bool,
    navigator: Option<Navigator<K>>,
}

impl<K: ScreenKey> Layer<K> {
    /// Creates a layer with both flags cleared.
    pub fn new() -> Self {
        Self {
            override_activation: false,
            hide_previous: false,
            active: true,
            navigator: None,
        }
    }

    /// Sets whether the screen manages its own presentation.
    pub fn with_override_activation(mut self, value: bool) -> Self {
        self.override_activation = value;
        self
    }

    /// Sets whether showing this screen hides the current top.
    pub fn with_hide_previous(mut self, value: bool) -> Self {
        self.hide_previous = value;
        self
    }

    pub fn override_activation(&self) -> bool {
        self.override_activation
    }

    pub fn hide_previous(&self) -> bool {
        self.hide_previous
    }

    /// Last-known presentation state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Updates the presentation state. Returns true if it changed.
    ///
    /// Screens that override activation call this themselves.
    pub fn set_active(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    /// Navigator back-reference, available once the screen is registered.
    pub fn navigator(&self) -> Option<&Navigator<K>> {
        self.navigator.as_ref()
    }

    /// Attaches the navigator. Write-once: later calls are ignored.
    pub(crate) fn attach(&mut self, navigator: Navigator<K>) -> bool {
        if self.navigator.is_some() {
            warn!("Layer already has a navigator attached, keeping the first one");
            return false;
        }
        self.navigator = Some(navigator);
        true
    }
}

impl<K: ScreenKey> Default for Layer<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

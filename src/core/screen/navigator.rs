//=========================================================================
// Navigator
//=========================================================================
//
// Back-reference from a screen to its owning stack.
//
// Architecture:
//   Screen ──navigator.hide()──► Sender<NavRequest> ──► ScreenStack
//                                                      (applied after the
//                                                       issuing callback)
//
// The channel is unbounded: screens send from the same thread that
// drains it, so a bounded channel could block on itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Dependencies ===============================================

use super::ScreenKey;

//=== Navigation Request ==================================================

/// Navigation operation requested through a [`Navigator`].
///
/// Mirrors the public navigation surface of the screen stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest<K: ScreenKey> {
    /// Push a screen and bring it up.
    Show(K),

    /// Push a screen now, bring it up after the delay.
    DelayedShow(K, Duration),

    /// Pop and tear down the top screen.
    Hide,

    /// Pop until the given screen is on top or the stack is empty.
    HideUntil(K),

    /// Pop now, tear down after the delay.
    DelayedHide(Duration),

    /// Pop and tear down every screen.
    Clear,
}

//=== Navigator ===========================================================

/// Cloneable handle for requesting navigation on a screen stack.
///
/// Requests issued from a screen callback are applied as soon as that
/// callback returns, so they observe the stack exactly as the triggering
/// operation left it. Requests issued elsewhere are applied at the end of
/// the next tick, after that tick's due work.
#[derive(Debug, Clone)]
pub struct Navigator<K: ScreenKey> {
    sender: Sender<NavRequest<K>>,
}

impl<K: ScreenKey> Navigator<K> {
    pub(crate) fn new(sender: Sender<NavRequest<K>>) -> Self {
        Self { sender }
    }

    /// Queues a raw request.
    pub fn request(&self, request: NavRequest<K>) {
        if self.sender.send(request).is_err() {
            warn!("Navigation request {:?} dropped, screen stack no longer exists", request);
        }
    }

    pub fn show(&self, key: K) {
        self.request(NavRequest::Show(key));
    }

    pub fn delayed_show(&self, key: K, delay: Duration) {
        self.request(NavRequest::DelayedShow(key, delay));
    }

    pub fn hide(&self) {
        self.request(NavRequest::Hide);
    }

    pub fn hide_until(&self, key: K) {
        self.request(NavRequest::HideUntil(key));
    }

    pub fn delayed_hide(&self, delay: Duration) {
        self.request(NavRequest::DelayedHide(delay));
    }

    pub fn clear(&self) {
        self.request(NavRequest::Clear);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

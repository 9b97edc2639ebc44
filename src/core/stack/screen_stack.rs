//=========================================================================
// Screen Stack Controller
//=========================================================================
//
// Owns every registered screen and the navigation stack, and drives the
// bring-up and teardown protocols.
//
// Screens are stored in a HashMap by key and referenced via a stack of
// keys, so a screen keeps its state between activations and may appear
// on the stack more than once.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::error::ScreenError;
use crate::core::schedule::{ScheduledTask, ScreenTask, StalePolicy, TaskQueue};
use crate::core::screen::{NavRequest, Navigator, Screen, ScreenKey};

//=== Slot ================================================================

/// Registry entry: the screen plus its transition epoch.
///
/// The epoch advances whenever the stack starts a bring-up, a teardown or
/// a delayed pop for the screen. Scheduled tasks compare against it to
/// detect that they were overtaken.
struct Slot<K: ScreenKey> {
    screen: Box<dyn Screen<K>>,
    epoch: u64,
}

//=== ScreenStackBuilder ==================================================

/// Builder for configuring and initializing a [`ScreenStack`].
///
/// # Default Values
///
/// - **Stale policy**: [`StalePolicy::Skip`]
///
/// # Example
///
/// ```rust
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
/// let mut stack = ScreenStackBuilder::new()
///     .with_screen(MainMenu { layer: Layer::new() })
///     .build()
///     .unwrap();
///
/// stack.show(Menu::Main).unwrap();
/// assert_eq!(stack.current_top(), Some(Menu::Main));
/// ```
pub struct ScreenStackBuilder<K: ScreenKey> {
    screens: Vec<Box<dyn Screen<K>>>,
    stale_policy: StalePolicy,
}

impl<K: ScreenKey> ScreenStackBuilder<K> {
    /// Creates a new builder with no screens and default settings.
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            stale_policy: StalePolicy::default(),
        }
    }

    /// Sets how scheduled work for an overtaken screen is handled.
    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Adds a screen. The screen is automatically boxed for storage.
    pub fn with_screen<T>(mut self, screen: T) -> Self
    where
        T: Screen<K> + 'static,
    {
        self.screens.push(Box::new(screen));
        self
    }

    /// Adds an already boxed screen, e.g. one produced by scene discovery.
    pub fn with_boxed_screen(mut self, screen: Box<dyn Screen<K>>) -> Self {
        self.screens.push(screen);
        self
    }

    /// Builds the registry and runs every screen's initializer.
    ///
    /// # Errors
    ///
    /// [`ScreenError::DuplicateIdentity`] if two screens share a key. Errors
    /// from navigation requested by an initializer are also returned.
    pub fn build(self) -> Result<ScreenStack<K>, ScreenError<K>> {
        ScreenStack::initialize_with(self.screens, self.stale_policy)
    }
}

impl<K: ScreenKey> Default for ScreenStackBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== ScreenStack =========================================================

/// Stack-based screen navigation controller.
///
/// Screens are registered once and referenced by key. The top of the stack
/// is the most recently shown screen. Lifecycle callbacks that must wait a
/// quantum run from [`ScreenStack::tick`], which the host calls once per
/// frame.
pub struct ScreenStack<K: ScreenKey> {
    screens: HashMap<K, Slot<K>>,
    order: Vec<K>,
    stack: Vec<K>,
    tasks: TaskQueue<K>,
    stale_policy: StalePolicy,
    navigator: Navigator<K>,
    requests: Receiver<NavRequest<K>>,
}

impl<K: ScreenKey> ScreenStack<K> {
    //--- Construction -----------------------------------------------------

    /// Initializes a stack from discovered screens with default settings.
    ///
    /// See [`ScreenStackBuilder::build`].
    pub fn initialize<I>(screens: I) -> Result<Self, ScreenError<K>>
    where
        I: IntoIterator<Item = Box<dyn Screen<K>>>,
    {
        Self::initialize_with(screens, StalePolicy::default())
    }

    fn initialize_with<I>(screens: I, stale_policy: StalePolicy) -> Result<Self, ScreenError<K>>
    where
        I: IntoIterator<Item = Box<dyn Screen<K>>>,
    {
        let (sender, requests) = unbounded();
        let navigator = Navigator::new(sender);

        let mut stack = Self {
            screens: HashMap::new(),
            order: Vec::new(),
            stack: Vec::new(),
            tasks: TaskQueue::new(),
            stale_policy,
            navigator,
            requests,
        };

        for mut screen in screens {
            let key = screen.key();
            if stack.screens.contains_key(&key) {
                return Err(ScreenError::DuplicateIdentity(key));
            }

            set_presentation(screen.as_mut(), false);
            screen.layer_mut().attach(stack.navigator.clone());

            stack.order.push(key);
            stack.screens.insert(key, Slot { screen, epoch: 0 });
        }

        debug!("Registered {} screens: {:?}", stack.order.len(), stack.order);

        // Requests issued by initializers wait until every screen is initialized
        for key in &stack.order {
            if let Some(slot) = stack.screens.get_mut(key) {
                slot.screen.on_screen_initialize();
            }
        }

        stack.apply_pending()?;
        Ok(stack)
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the key of the top screen, or `None` if the stack is empty.
    pub fn current_top(&self) -> Option<K> {
        self.stack.last().copied()
    }

    /// Returns the stack bottom to top.
    pub fn stack(&self) -> &[K] {
        &self.stack
    }

    /// Returns the number of entries on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns whether the screen's presentation is currently active.
    ///
    /// Reflects the last activation state set by the stack, or by the
    /// screen itself when it overrides activation. The stack is not
    /// consulted.
    pub fn screen_is_up(&self, key: K) -> Result<bool, ScreenError<K>> {
        Ok(self.slot(key)?.screen.layer().is_active())
    }

    /// Returns true if a screen is registered under `key`.
    pub fn is_registered(&self, key: K) -> bool {
        self.screens.contains_key(&key)
    }

    /// Returns every registered key in registration order.
    pub fn registered_keys(&self) -> &[K] {
        &self.order
    }

    /// Returns a registered screen.
    pub fn screen(&self, key: K) -> Result<&dyn Screen<K>, ScreenError<K>> {
        Ok(self.slot(key)?.screen.as_ref())
    }

    /// Returns a registered screen mutably, e.g. to forward input to it.
    ///
    /// Navigation the screen requests is applied on the next tick.
    pub fn screen_mut(&mut self, key: K) -> Result<&mut dyn Screen<K>, ScreenError<K>> {
        match self.screens.get_mut(&key) {
            Some(slot) => Ok(slot.screen.as_mut()),
            None => Err(ScreenError::UnknownScreen(key)),
        }
    }

    /// Returns a navigator bound to this stack.
    pub fn navigator(&self) -> Navigator<K> {
        self.navigator.clone()
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.stale_policy
    }

    /// Returns the number of scheduled lifecycle tasks not yet run.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no task or navigation request is pending.
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty() && self.requests.is_empty()
    }

    //--- Navigation -------------------------------------------------------

    /// Pushes a screen and brings it up.
    ///
    /// If the screen hides its predecessor, the current top is torn down
    /// first but stays on the stack beneath it. Step 1 of the bring-up
    /// (activation, `on_screen_up`) runs now, `on_screen_up_and_ready` on
    /// the next tick.
    pub fn show(&mut self, key: K) -> Result<(), ScreenError<K>> {
        self.push(key)?;
        self.bring_up(key)
    }

    /// Pushes a screen now and brings it up once `delay` has elapsed.
    ///
    /// Teardown of the previous top, if any, is immediate.
    pub fn delayed_show(&mut self, key: K, delay: Duration) -> Result<(), ScreenError<K>> {
        self.push(key)?;

        // Overtakes any ready or delayed teardown still pending for this screen
        let epoch = self.begin_transition(key);
        debug!("Screen {:?} will come up in {:?}", key, delay);
        self.tasks
            .defer_for(delay, ScheduledTask::new(key, epoch, ScreenTask::BringUp));
        Ok(())
    }

    /// Pops and tears down the top screen, then brings up the new top.
    ///
    /// If navigation requested from the teardown callback fails, the new
    /// top is still brought up before the error is returned.
    pub fn hide(&mut self) -> Result<(), ScreenError<K>> {
        let key = self.stack.pop().ok_or(ScreenError::EmptyStack)?;
        debug!("Popped screen {:?}", key);

        let teardown = self.teardown(key);
        let bring_up = self.bring_up_top();
        teardown.and(bring_up)
    }

    /// Pops until `key` is on top or the stack is empty.
    ///
    /// Every intermediate top is brought up again before it is popped in
    /// turn. Running out of stack is not an error.
    ///
    /// If navigation requested from a callback fails, unwinding stops with
    /// the current top brought up, and the error is returned.
    pub fn hide_until(&mut self, key: K) -> Result<(), ScreenError<K>> {
        self.slot(key)?;

        while let Some(top) = self.current_top() {
            if top == key {
                break;
            }

            self.stack.pop();
            debug!("Popped screen {:?} while unwinding to {:?}", top, key);

            let teardown = self.teardown(top);
            let bring_up = self.bring_up_top();
            teardown.and(bring_up)?;
        }

        Ok(())
    }

    /// Pops the top screen now and tears it down once `delay` has elapsed.
    ///
    /// The new top is brought up immediately. The pop and the scheduled
    /// teardown stand even if navigation requested from the new top's
    /// `on_screen_up` fails.
    pub fn delayed_hide(&mut self, delay: Duration) -> Result<(), ScreenError<K>> {
        let key = self.stack.pop().ok_or(ScreenError::EmptyStack)?;
        debug!("Popped screen {:?}, teardown in {:?}", key, delay);

        let epoch = self.begin_transition(key);
        self.tasks
            .defer_for(delay, ScheduledTask::new(key, epoch, ScreenTask::Teardown));

        self.bring_up_top()
    }

    /// Pops and tears down every screen, top first.
    pub fn clear(&mut self) -> Result<(), ScreenError<K>> {
        debug!("Clearing {} screens from stack", self.stack.len());

        // Screens pushed by teardown callbacks are left in place
        for _ in 0..self.stack.len() {
            let Some(key) = self.stack.pop() else {
                break;
            };
            self.teardown(key)?;
        }

        Ok(())
    }

    //--- Host Integration -------------------------------------------------

    /// Advances one scheduling quantum.
    ///
    /// Runs ready callbacks scheduled last quantum and delayed work whose
    /// time has come, then applies navigation requested outside callbacks.
    /// Delays requested during this quantum start counting from the next
    /// one.
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), ScreenError<K>> {
        for task in self.tasks.advance(elapsed) {
            self.run_task(task)?;
        }

        self.apply_pending()
    }

    /// Notifies every screen that the scene is about to be replaced.
    ///
    /// Called by the scene loader before it tears down the UI context.
    pub fn notify_before_load_scene(&mut self) -> Result<(), ScreenError<K>> {
        debug!("Notifying {} screens of scene load", self.order.len());

        for key in self.order.clone() {
            self.dispatch(key, |screen| screen.on_before_load_scene())?;
        }

        Ok(())
    }

    /// Applies a navigation request.
    pub fn apply(&mut self, request: NavRequest<K>) -> Result<(), ScreenError<K>> {
        trace!("Applying navigation request {:?}", request);

        match request {
            NavRequest::Show(key) => self.show(key),
            NavRequest::DelayedShow(key, delay) => self.delayed_show(key, delay),
            NavRequest::Hide => self.hide(),
            NavRequest::HideUntil(key) => self.hide_until(key),
            NavRequest::DelayedHide(delay) => self.delayed_hide(delay),
            NavRequest::Clear => self.clear(),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn slot(&self, key: K) -> Result<&Slot<K>, ScreenError<K>> {
        self.screens.get(&key).ok_or(ScreenError::UnknownScreen(key))
    }

    fn push(&mut self, key: K) -> Result<(), ScreenError<K>> {
        let hide_previous = self.slot(key)?.screen.layer().hide_previous();

        if hide_previous {
            if let Some(previous) = self.current_top() {
                self.teardown(previous)?;
            }
        }

        debug!("Pushing screen {:?} onto stack", key);
        self.stack.push(key);
        Ok(())
    }

    fn begin_transition(&mut self, key: K) -> u64 {
        match self.screens.get_mut(&key) {
            Some(slot) => {
                slot.epoch += 1;
                slot.epoch
            }
            None => 0,
        }
    }

    fn bring_up_top(&mut self) -> Result<(), ScreenError<K>> {
        match self.current_top() {
            Some(top) => self.bring_up(top),
            None => Ok(()),
        }
    }

    fn bring_up(&mut self, key: K) -> Result<(), ScreenError<K>> {
        let epoch = self.begin_transition(key);
        debug!("Bringing up screen {:?}", key);

        self.tasks
            .defer_frame(ScheduledTask::new(key, epoch, ScreenTask::Ready));

        self.dispatch(key, |screen| {
            set_presentation(screen, true);
            screen.on_screen_up();
        })
    }

    fn teardown(&mut self, key: K) -> Result<(), ScreenError<K>> {
        self.begin_transition(key);
        debug!("Tearing down screen {:?}", key);

        self.dispatch(key, |screen| {
            set_presentation(screen, false);
            screen.on_screen_down();
        })
    }

    fn run_task(&mut self, task: ScheduledTask<K>) -> Result<(), ScreenError<K>> {
        let Ok(slot) = self.slot(task.key) else {
            return Ok(());
        };

        if slot.epoch != task.epoch {
            match self.stale_policy {
                StalePolicy::Skip => {
                    debug!("Skipping stale {:?} for screen {:?}", task.task, task.key);
                    return Ok(());
                }
                StalePolicy::Fire => {
                    debug!("Running stale {:?} for screen {:?}", task.task, task.key);
                }
            }
        }

        match task.task {
            ScreenTask::BringUp => self.bring_up(task.key),
            ScreenTask::Ready => {
                self.dispatch(task.key, |screen| screen.on_screen_up_and_ready())
            }
            ScreenTask::Teardown => self.teardown(task.key),
        }
    }

    /// Runs a callback on a screen, then applies the navigation it requested.
    fn dispatch<F>(&mut self, key: K, callback: F) -> Result<(), ScreenError<K>>
    where
        F: FnOnce(&mut dyn Screen<K>),
    {
        if let Some(slot) = self.screens.get_mut(&key) {
            callback(slot.screen.as_mut());
        }

        self.apply_pending()
    }

    fn apply_pending(&mut self) -> Result<(), ScreenError<K>> {
        // Requests already queued run in order, each to completion
        let pending: Vec<NavRequest<K>> = self.requests.try_iter().collect();

        for request in pending {
            self.apply(request)?;
        }

        Ok(())
    }
}

//=== Presentation ========================================================

/// Flips the presentation of a screen that does not override activation.
fn set_presentation<K: ScreenKey>(screen: &mut dyn Screen<K>, active: bool) {
    if screen.layer().override_activation() {
        return;
    }

    if screen.layer_mut().set_active(active) {
        screen.on_activation_changed(active);
    }
}

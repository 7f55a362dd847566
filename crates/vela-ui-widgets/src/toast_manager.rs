//! Toast lifecycle management.
//!
//! The `ToastManager` owns the bounded active-toast list and guarantees that
//! each toast's dismissal timer fires independently of the others, regardless
//! of insertion order or overlapping durations.
//!
//! Timing is cooperative: the host calls [`ToastManager::tick`] (or
//! [`ToastProvider::tick`]) with the current instant from its single event
//! loop. A toast mounts on its first tick; mounting arms the fixed 100 ms
//! enter timer and, for non-zero durations, the dismissal timer at
//! `mount + duration`. Arming is idempotent, so re-ticking across rebuilds
//! never resets an in-flight timer. Removing a toast - manually, by timer,
//! or by eviction - cancels its pending timers deterministically, so a
//! deadline can never fire for a dead id.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::debug;
use vela_ui::{TimerQueue, UiContext};
use vela_ui_macros::WithBuilders;

use crate::{ToastId, ToastItem, ToastOverlayView, ToastPhase, ToastSpec, ToastView,
    ENTER_PHASE_DURATION};

/// Callback invoked once when a toast is removed, then released.
pub type CloseCallback = Box<dyn FnOnce(ToastId)>;

/// Configuration for a toast manager.
#[derive(Debug, Clone, WithBuilders)]
pub struct ToastConfig {
    /// Maximum number of active toasts; showing more evicts the oldest.
    pub max_toasts: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { max_toasts: 5 }
    }
}

/// Manages the active toast list and per-toast timers.
pub struct ToastManager {
    config: ToastConfig,
    /// Active toasts, oldest first.
    active: VecDeque<ToastItem>,
    /// Timers owned by the active toasts.
    timers: TimerQueue,
    /// Counter backing fresh toast ids.
    next_id: u64,
    /// Close callbacks keyed by toast id, released on removal.
    close_callbacks: HashMap<ToastId, CloseCallback>,
    /// Callbacks whose toasts were removed, awaiting `drain_closed`.
    closed: Vec<(ToastId, CloseCallback)>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl ToastManager {
    /// Create a manager with the given configuration.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            active: VecDeque::new(),
            timers: TimerQueue::new(),
            next_id: 0,
            close_callbacks: HashMap::new(),
            closed: Vec::new(),
        }
    }

    /// Show a toast.
    ///
    /// Assigns a fresh id, appends the toast, and truncates the list to the
    /// most recent `max_toasts` entries (drop-oldest eviction). Timers are
    /// not armed here; that happens when the toast mounts on its first tick.
    pub fn show(&mut self, spec: ToastSpec) -> ToastId {
        let id = ToastId::from_counter(self.next_id);
        self.next_id += 1;

        debug!(
            "showing {id} ({:?}, {:?}, {:?})",
            spec.kind, spec.duration, spec.position
        );
        self.active.push_back(ToastItem::new(id, spec));

        while self.active.len() > self.config.max_toasts {
            // Unwrap is fine: the loop condition guarantees non-empty.
            let evicted = self.active.pop_front().unwrap();
            debug!("evicting oldest toast {}", evicted.id());
            self.release(evicted);
        }

        id
    }

    /// Show a toast and register a callback invoked once on removal.
    ///
    /// The callback fires whether the toast is dismissed manually, by its
    /// timer, or by eviction, and is released afterwards.
    pub fn show_with(
        &mut self,
        spec: ToastSpec,
        on_close: impl FnOnce(ToastId) + 'static,
    ) -> ToastId {
        // Register before show: eviction inside show() may already remove
        // an older toast, never this one.
        let id = self.show(spec);
        self.close_callbacks.insert(id, Box::new(on_close));
        id
    }

    /// Dismiss a toast by id.
    ///
    /// Removes it immediately, cancels its pending timers, and releases its
    /// close callback. Idempotent: returns `false` if the id is not active.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id() == id) else {
            return false;
        };
        // Position came from a scan of the same deque.
        let item = self.active.remove(pos).unwrap();
        debug!("dismissing {id}");
        self.release(item);
        true
    }

    /// Change the auto-dismiss duration of an active toast.
    ///
    /// Cancels the pending dismissal and schedules a full new span from
    /// `now` (never accumulating). `Duration::ZERO` leaves the toast up
    /// until manually dismissed. Returns `false` if the id is not active.
    pub fn set_duration(&mut self, id: ToastId, duration: Duration, now: Instant) -> bool {
        let Some(item) = self.active.iter_mut().find(|t| t.id() == id) else {
            return false;
        };

        if let Some(token) = item.dismiss_timer() {
            self.timers.cancel(token);
            item.set_dismiss_timer(None);
        }
        *item.duration_mut() = duration;

        // An unmounted toast arms with the new duration at mount instead.
        if item.mounted_at().is_some() && !duration.is_zero() {
            item.set_dismiss_timer(Some(self.timers.schedule(now + duration)));
        }
        true
    }

    /// Advance the toast lifecycle to `now`.
    ///
    /// Mounts newly shown toasts (arming their timers) and processes every
    /// timer whose deadline has passed: enter timers settle the phase to
    /// `Visible`, dismissal timers remove their toast.
    pub fn tick(&mut self, now: Instant) {
        for item in &mut self.active {
            if item.mounted_at().is_none() {
                item.set_mounted_at(now);
                item.set_enter_timer(Some(self.timers.schedule(now + ENTER_PHASE_DURATION)));
                let duration = item.spec().duration;
                if !duration.is_zero() {
                    item.set_dismiss_timer(Some(self.timers.schedule(now + duration)));
                }
            }
        }

        for token in self.timers.poll(now) {
            if let Some(item) = self
                .active
                .iter_mut()
                .find(|t| t.enter_timer() == Some(token))
            {
                item.set_enter_timer(None);
                item.set_phase(ToastPhase::Visible);
                continue;
            }

            if let Some(pos) = self
                .active
                .iter()
                .position(|t| t.dismiss_timer() == Some(token))
            {
                let item = self.active.remove(pos).unwrap();
                debug!("auto-dismissing {}", item.id());
                self.release(item);
            }
            // Tokens belonging to already-removed toasts were cancelled and
            // never show up here.
        }
    }

    /// Dismiss any toast whose close button was activated this frame.
    pub fn handle_events(&mut self, ctx: &UiContext) {
        let clicked: Vec<ToastId> = self
            .active
            .iter()
            .filter(|t| ctx.was_activated(&t.id().close_widget_id()))
            .map(|t| t.id())
            .collect();

        for id in clicked {
            self.dismiss(id);
        }
    }

    /// The earliest pending timer deadline, if any.
    ///
    /// Hosts use this to decide when to call [`tick`](Self::tick) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Take the close callbacks of toasts removed since the last drain.
    ///
    /// Callbacks are intentionally not invoked inside the mutating call that
    /// removed their toast; the caller runs them afterwards so they are free
    /// to call back into the manager (e.g. show a follow-up toast).
    pub fn drain_closed(&mut self) -> Vec<(ToastId, CloseCallback)> {
        std::mem::take(&mut self.closed)
    }

    /// Snapshot of all active toasts for the render collaborator.
    pub fn overlay_view(&self) -> ToastOverlayView {
        ToastOverlayView {
            toasts: self.active.iter().map(ToastView::of).collect(),
        }
    }

    /// The active toast with the given id, if any.
    pub fn get(&self, id: ToastId) -> Option<&ToastItem> {
        self.active.iter().find(|t| t.id() == id)
    }

    /// Whether a toast with the given id is active.
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over active toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastItem> {
        self.active.iter()
    }

    /// Number of active toasts.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no toasts are active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Remove all active toasts, releasing their timers and callbacks.
    pub fn clear(&mut self) {
        while let Some(item) = self.active.pop_front() {
            self.release(item);
        }
    }

    /// Release the resources owned by a removed toast: cancel its timers
    /// and queue its close callback for draining.
    fn release(&mut self, item: ToastItem) {
        if let Some(token) = item.enter_timer() {
            self.timers.cancel(token);
        }
        if let Some(token) = item.dismiss_timer() {
            self.timers.cancel(token);
        }
        if let Some(callback) = self.close_callbacks.remove(&item.id()) {
            self.closed.push((item.id(), callback));
        }
    }
}

impl std::fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastManager")
            .field("active", &self.active.len())
            .field("max_toasts", &self.config.max_toasts)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}

/// Owns a [`ToastManager`] and hands out [`ToastHandle`]s.
///
/// The provider is the explicit-dependency replacement for an ambient
/// context lookup: application code that wants to show toasts receives a
/// handle as a constructor parameter. Single-threaded by design, matching
/// the cooperative UI event loop.
#[derive(Debug, Default)]
pub struct ToastProvider {
    inner: Rc<RefCell<ToastManager>>,
}

impl ToastProvider {
    /// Create a provider with the given configuration.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ToastManager::new(config))),
        }
    }

    /// A cheaply cloneable handle for arbitrary application code.
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Advance the toast lifecycle to `now` and run released callbacks.
    pub fn tick(&self, now: Instant) {
        let closed = {
            let mut manager = self.inner.borrow_mut();
            manager.tick(now);
            manager.drain_closed()
        };
        for (id, callback) in closed {
            callback(id);
        }
    }

    /// Dismiss toasts whose close buttons were activated this frame.
    pub fn handle_events(&self, ctx: &UiContext) {
        let closed = {
            let mut manager = self.inner.borrow_mut();
            manager.handle_events(ctx);
            manager.drain_closed()
        };
        for (id, callback) in closed {
            callback(id);
        }
    }

    /// Snapshot of all active toasts for the render collaborator.
    pub fn overlay_view(&self) -> ToastOverlayView {
        self.inner.borrow().overlay_view()
    }

    /// The earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().next_deadline()
    }
}

/// Shared show/dismiss capability handed to application code.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    inner: Rc<RefCell<ToastManager>>,
}

impl ToastHandle {
    /// Show a toast. See [`ToastManager::show`].
    pub fn show(&self, spec: ToastSpec) -> ToastId {
        let (id, closed) = {
            let mut manager = self.inner.borrow_mut();
            let id = manager.show(spec);
            (id, manager.drain_closed())
        };
        // Eviction may have released callbacks; run them outside the borrow.
        for (closed_id, callback) in closed {
            callback(closed_id);
        }
        id
    }

    /// Show a toast with a close callback. See [`ToastManager::show_with`].
    pub fn show_with(&self, spec: ToastSpec, on_close: impl FnOnce(ToastId) + 'static) -> ToastId {
        let (id, closed) = {
            let mut manager = self.inner.borrow_mut();
            let id = manager.show_with(spec, on_close);
            (id, manager.drain_closed())
        };
        for (closed_id, callback) in closed {
            callback(closed_id);
        }
        id
    }

    /// Dismiss a toast by id; a silent no-op if it is already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let (removed, closed) = {
            let mut manager = self.inner.borrow_mut();
            let removed = manager.dismiss(id);
            (removed, manager.drain_closed())
        };
        for (closed_id, callback) in closed {
            callback(closed_id);
        }
        removed
    }

    /// Reset a toast's auto-dismiss span starting now.
    pub fn set_duration(&self, id: ToastId, duration: Duration) -> bool {
        self.inner
            .borrow_mut()
            .set_duration(id, duration, Instant::now())
    }
}

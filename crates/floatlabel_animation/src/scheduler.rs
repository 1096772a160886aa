//! Animation scheduler
//!
//! Manages all active timed transitions and advances them each frame.
//! Transitions are registered implicitly through [`AnimatedValue`], which
//! components hold for every property they animate.
//!
//! The host drives the scheduler from its frame loop:
//!
//! ```rust
//! use floatlabel_animation::{AnimatedValue, AnimationScheduler, TimingConfig};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut opacity = AnimatedValue::new(scheduler.handle(), 0.0);
//!
//! opacity.animate_to(1.0, TimingConfig::standard());
//! while scheduler.tick(16.0) {}
//!
//! assert_eq!(opacity.get(), 1.0);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

use crate::timing::{Timing, TimingConfig};

new_key_type! {
    /// Handle to a registered timed transition
    pub struct TimingId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    timings: SlotMap<TimingId, Timing<f32>>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn advance(&mut self, dt_ms: f32) -> bool {
        for (_, timing) in self.timings.iter_mut() {
            timing.tick(dt_ms);
        }

        // Finished timings stay registered until their AnimatedValue drops,
        // so they can be retargeted without re-registering.
        self.has_active()
    }

    fn has_active(&self) -> bool {
        self.timings.iter().any(|(_, t)| t.is_playing())
    }
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The animation scheduler that ticks all active transitions
///
/// Held by the application; components receive a [`SchedulerHandle`].
/// Nothing runs in the background: the host calls [`tick`](Self::tick) or
/// [`tick_frame`](Self::tick_frame) once per frame while
/// [`has_active_animations`](Self::has_active_animations) is true.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timings: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all transitions by `dt_ms` milliseconds
    ///
    /// Returns true if any transition is still playing.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut inner = lock(&self.inner);
        inner.last_frame = Instant::now();
        inner.advance(dt_ms)
    }

    /// Advance all transitions by the wall-clock time since the last frame
    pub fn tick_frame(&self) -> bool {
        let mut inner = lock(&self.inner);
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        inner.advance(dt_ms)
    }

    /// Check if any transitions are still playing
    pub fn has_active_animations(&self) -> bool {
        lock(&self.inner).has_active()
    }

    /// Number of registered transitions, finished or not
    pub fn timing_count(&self) -> usize {
        lock(&self.inner).timings.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to register transitions. It won't keep
/// the scheduler alive; once the scheduler is dropped every operation is a
/// no-op and reads return `None`.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a transition and return its ID
    pub fn register_timing(&self, timing: Timing<f32>) -> Option<TimingId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = lock(&inner);
            // Reset the frame clock so the first tick doesn't carry a stale dt
            guard.last_frame = Instant::now();
            let id = guard.timings.insert(timing);
            tracing::trace!(?id, "registered timing");
            id
        })
    }

    /// Redirect a registered transition toward `target`
    ///
    /// Returns false if the transition or the scheduler no longer exists.
    pub fn retarget_timing(&self, id: TimingId, target: f32, config: TimingConfig) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        let mut guard = lock(&inner);
        if let Some(timing) = guard.timings.get_mut(id) {
            timing.retarget(target, config);
            tracing::trace!(?id, to = target, "retargeted timing");
            return true;
        }
        false
    }

    /// Get the current value of a transition
    pub fn get_timing_value(&self, id: TimingId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).timings.get(id).map(|t| t.value()))
    }

    /// Check if a transition is still moving
    pub fn is_timing_playing(&self, id: TimingId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).timings.get(id).map(|t| t.is_playing()))
            .unwrap_or(false)
    }

    /// Remove a transition
    pub fn remove_timing(&self, id: TimingId) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).timings.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Value (timing-based)
// ============================================================================

/// An animated scalar that registers with the scheduler on first use
///
/// At most one transition drives the value. [`animate_to`](Self::animate_to)
/// on a value that is already moving retargets the running transition from
/// wherever it is now; nothing is queued.
///
/// # Example
///
/// ```rust
/// use floatlabel_animation::{AnimatedValue, AnimationScheduler, TimingConfig};
///
/// let scheduler = AnimationScheduler::new();
/// let mut offset = AnimatedValue::new(scheduler.handle(), 9.0);
/// assert_eq!(scheduler.timing_count(), 0);
///
/// offset.animate_to(5.0, TimingConfig::standard());
/// assert!(offset.is_animating());
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    timing_id: Option<TimingId>,
    /// Value used while no transition is registered
    current: f32,
    /// The value we're animating towards
    target: f32,
}

impl AnimatedValue {
    /// Create a value resting at `initial`
    ///
    /// Nothing is registered with the scheduler until the first retarget.
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        Self {
            handle,
            timing_id: None,
            current: initial,
            target: initial,
        }
    }

    /// Start a transition to `target`, superseding any in-flight one
    pub fn animate_to(&mut self, target: f32, config: TimingConfig) {
        self.target = target;

        if let Some(id) = self.timing_id {
            if self.handle.retarget_timing(id, target, config) {
                return;
            }
            self.timing_id = None;
        }

        let timing = Timing::new(self.current, target, config);
        match self.handle.register_timing(timing) {
            Some(id) => self.timing_id = Some(id),
            None => {
                tracing::debug!(to = target, "animation scheduler gone, snapping value");
                self.current = target;
            }
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        match self.timing_id {
            Some(id) => self.handle.get_timing_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.timing_id.take() {
            self.handle.remove_timing(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Check if a transition is currently moving this value
    pub fn is_animating(&self) -> bool {
        self.timing_id
            .map(|id| self.handle.is_timing_playing(id))
            .unwrap_or(false)
    }

    /// Get the current target value
    pub fn target(&self) -> f32 {
        self.target
    }
}

impl std::fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("value", &self.get())
            .field("target", &self.target)
            .field("animating", &self.is_animating())
            .finish()
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.timing_id {
            self.handle.remove_timing(id);
        }
    }
}

//! Event identifiers and the id -> priority side index.
//!
//! Ids come from one process-wide monotone counter, so no two live queues
//! can ever issue the same id and an id is never reused for the life of
//! the process. The priority index is per-queue: it records the current
//! priority of every queued event, giving O(1) membership and priority
//! lookup without touching the ordered sequence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque handle for a queued event.
///
/// Issued once by [`push`](crate::EventQueue::push), immutable for the
/// event's lifetime, unique across every queue in the process, and never
/// reused. Totally ordered by issue order.
///
/// # Example
///
/// ```
/// use pulse_queue::EventQueue;
///
/// let mut a: EventQueue<u64, ()> = EventQueue::new();
/// let mut b: EventQueue<u64, ()> = EventQueue::new();
///
/// // Handles from different queues never collide.
/// assert_ne!(a.push(1, ()), b.push(1, ()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u64);

impl EventId {
    /// Returns the raw id value, for diagnostics.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Mints a fresh process-wide unique id.
///
/// # Panics
///
/// Panics on 64-bit id space exhaustion. At one id per nanosecond that
/// takes five centuries, so hitting it means a defect, not load.
#[inline]
pub(crate) fn next_id() -> EventId {
    let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    assert!(raw != u64::MAX, "event id space exhausted");
    EventId(raw)
}

/// Per-queue map from id to current priority.
///
/// Invariant: an id is present here iff the event is in the owning
/// queue's sequence. Every sequence mutation updates the index within
/// the same operation.
#[derive(Debug, Clone)]
pub(crate) struct IdIndex<P> {
    map: HashMap<EventId, P>,
}

impl<P: Copy> IdIndex<P> {
    pub(crate) fn new() -> Self {
        Self { map: HashMap::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Records `id` at `priority`, overwriting any previous priority.
    #[inline]
    pub(crate) fn record(&mut self, id: EventId, priority: P) {
        self.map.insert(id, priority);
    }

    /// Drops the entry for `id`.
    #[inline]
    pub(crate) fn forget(&mut self, id: EventId) {
        self.map.remove(&id);
    }

    /// Returns the current priority of `id`, or `None` if it is not
    /// queued here. A miss is the sole "no such event" signal.
    #[inline]
    pub(crate) fn lookup(&self, id: EventId) -> Option<P> {
        self.map.get(&id).copied()
    }

    #[inline]
    pub(crate) fn contains(&self, id: EventId) -> bool {
        self.map.contains_key(&id)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

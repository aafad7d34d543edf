//! Indexed priority queue for reactor event scheduling.
//!
//! A reactor enqueues pending events keyed by when they should fire,
//! repeatedly dequeues the earliest one, and occasionally cancels or
//! reschedules an in-flight event by handle. [`EventQueue`] serves that
//! workload with three guarantees that are cheap *together* under its
//! real access pattern:
//!
//! - **Strict ordering**: events dequeue in ascending priority order,
//!   with arrival order (FIFO) breaking ties deterministically
//! - **O(1) lookup**: every event carries a process-wide unique
//!   [`EventId`]; membership and current priority resolve through a side
//!   index without touching the sequence
//! - **Cheap mutation**: insert, cancel, and reschedule stay amortized
//!   sub-linear over a single contiguous sequence
//!
//! # Design
//!
//! ```text
//! EventQueue
//!   ├── OrderedSeq   ring buffer, ascending by (priority, arrival)
//!   ├── IdIndex      id -> current priority, O(1) membership
//!   └── search       linear scans under 512 events, binary above
//! ```
//!
//! There is no balanced tree. Scheduling workloads insert priorities near
//! "now", which cluster at the tail, and consume from the head; a reverse
//! scan from the tail finds most insertion points in a handful of
//! comparisons, and the ring buffer makes both ends O(1). Binary search
//! takes over once the sequence is large enough for log n to win.
//!
//! | Operation | Typical | Worst |
//! |-----------|---------|-------|
//! | `push` | O(1) near the tail | O(n) splice |
//! | `pop` | O(1) | O(1) |
//! | `remove` | O(log n) + splice | O(n) |
//! | `reschedule` | bounded to the direction of travel | O(n) |
//!
//! # Quick Start
//!
//! ```
//! use pulse_queue::EventQueue;
//!
//! let mut queue: EventQueue<u64, &str> = EventQueue::new();
//!
//! queue.push(10, "flush");
//! let retry = queue.push(5, "retry");
//! queue.push(20, "expire");
//!
//! // Earliest priority fires first
//! assert_eq!(queue.next_priority(), Some(5));
//! let ev = queue.pop().unwrap();
//! assert_eq!((ev.id, ev.payload), (retry, "retry"));
//!
//! // Remaining events keep ascending order
//! let order: Vec<_> = queue.iter().map(|ev| ev.payload).collect();
//! assert_eq!(order, ["flush", "expire"]);
//! ```
//!
//! # Sharing Across Threads
//!
//! A queue instance is single-threaded by design: every operation runs to
//! completion, and splices touch arbitrary ranges that cannot be locked
//! piecewise. Share an instance behind one external mutex if you must.
//! Event ids stay unique across every queue in the process regardless,
//! so handles from different queues never collide.

#![warn(missing_docs)]

pub mod error;
pub mod ident;
pub mod priority;
pub mod queue;
pub mod seq;

mod search;

pub use error::ErrorKind;
pub use ident::EventId;
pub use priority::Priority;
pub use queue::EventQueue;
pub use seq::Event;

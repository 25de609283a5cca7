//! Core systems for Siftable.
//!
//! This crate provides the foundational components of the Siftable filter
//! widget core:
//!
//! - **Signal/Slot System**: Type-safe notification between the filter
//!   controller and its observers
//! - **Debounce Timer**: A single-slot cancellable timer that coalesces
//!   rapid input changes into one filter pass
//!
//! # Signal/Slot Example
//!
//! ```
//! use siftable_core::Signal;
//!
//! let before_filter = Signal::<String>::new();
//!
//! let conn_id = before_filter.connect(|query| {
//!     println!("about to filter with {query:?}");
//! });
//!
//! before_filter.emit("banana".to_string());
//! before_filter.disconnect(conn_id);
//! ```
//!
//! # Debounce Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use siftable_core::DebounceTimer;
//!
//! let mut timer = DebounceTimer::default();
//! let t0 = Instant::now();
//!
//! // A burst of arms collapses into a single pending deadline.
//! timer.arm(t0);
//! timer.arm(t0 + Duration::from_millis(50));
//!
//! assert!(!timer.fire_due(t0 + Duration::from_millis(250)));
//! assert!(timer.fire_due(t0 + Duration::from_millis(300)));
//! ```

pub mod signal;
pub mod timer;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{DEFAULT_DEBOUNCE_DELAY, DebounceTimer};

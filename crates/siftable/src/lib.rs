//! Siftable: a debounced, host-agnostic list/menu filter core.
//!
//! Given a text query, a [`Filterable`] partitions a host's items into
//! matches and non-matches with a pluggable predicate, pushes the resulting
//! visibility through the host, and notifies registered sibling widgets to
//! re-layout. The crate is headless: the presentation layer implements
//! [`FilterHost`] and reports search-box edits; everything else (debounce,
//! dedup, partitioning, reveal policy, refresh notification) lives here.
//!
//! Filtering is synchronous, in-memory, and single-pass. There is no fuzzy
//! or ranked matching and no asynchronous data source.
//!
//! # Overview
//!
//! - [`Filterable`] — the controller: lifecycle, debounce, reconfiguration
//! - [`FilterOptions`] — builder-style configuration
//! - [`FilterHost`] — the seam the presentation layer implements
//! - [`ItemSource`] — where passes get their items from
//! - [`RefreshRegistry`] / [`CompositeKind`] — sibling re-layout hooks
//!
//! # Example
//!
//! ```
//! use siftable::{FilterHost, FilterOptions, Filterable, ItemId, ItemRole, SearchInput};
//! use slotmap::SlotMap;
//!
//! // A minimal host: a flat list of labeled rows.
//! struct Rows {
//!     rows: SlotMap<ItemId, (String, bool)>,
//!     order: Vec<ItemId>,
//! }
//!
//! impl FilterHost for Rows {
//!     fn items_for_roles(&self, _roles: &[ItemRole]) -> Vec<ItemId> {
//!         self.order.clone()
//!     }
//!     fn children(&self) -> Vec<ItemId> {
//!         self.order.clone()
//!     }
//!     fn search_text(&self, item: ItemId) -> String {
//!         self.rows[item].0.clone()
//!     }
//!     fn set_hidden(&mut self, items: &[ItemId], hidden: bool) {
//!         for &item in items {
//!             self.rows[item].1 = hidden;
//!         }
//!     }
//!     fn is_hidden(&self, item: ItemId) -> bool {
//!         self.rows[item].1
//!     }
//! }
//!
//! let mut rows = SlotMap::with_key();
//! let mut order = Vec::new();
//! for label in ["apple", "banana", "cherry"] {
//!     order.push(rows.insert((label.to_string(), false)));
//! }
//!
//! let options = FilterOptions::new().with_input(SearchInput::new());
//! let mut filterable = Filterable::new(Rows { rows, order }, options);
//!
//! // The host reports search-box edits; the event loop polls.
//! filterable.on_input_changed("an");
//! std::thread::sleep(std::time::Duration::from_millis(300));
//! assert!(filterable.poll());
//!
//! let host = filterable.host();
//! let visible: Vec<_> = host
//!     .children()
//!     .into_iter()
//!     .filter(|&item| !host.is_hidden(item))
//!     .map(|item| host.search_text(item))
//!     .collect();
//! assert_eq!(visible, vec!["banana"]);
//! ```

pub mod classify;
mod engine;
pub mod error;
pub mod filterable;
pub mod input;
pub mod item;
pub mod registry;
pub mod source;

#[cfg(test)]
mod test_util;

pub use classify::{Classification, FilterFn, default_filter};
pub use error::{FilterError, Result};
pub use filterable::{BeforeFilter, FilterOptions, Filterable};
pub use input::SearchInput;
pub use item::{DEFAULT_ROLES, FilterHost, ItemId, ItemRole};
pub use registry::{CompositeKind, RefreshRegistry};
pub use source::ItemSource;

// Re-export the core signal and timer types used in this crate's public
// surface.
pub use siftable_core::{ConnectionGuard, ConnectionId, DEFAULT_DEBOUNCE_DELAY, DebounceTimer, Signal};

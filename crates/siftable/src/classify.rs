//! Per-item classification and the filter predicate contract.
//!
//! The public predicate keeps the historical inverted polarity: it returns
//! `true` to EXCLUDE (hide) an item and `false` to include it. Internally
//! every decision is translated at the boundary into a named
//! [`Classification`] so the inversion lives in exactly one place.

use std::sync::Arc;

use crate::item::{FilterHost, ItemId};

/// The fate of one item under the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The item is excluded: apply the hidden state.
    Hide,
    /// The item is included: remove the hidden state.
    Show,
}

impl Classification {
    /// Translate the predicate's inverted boolean: `true` means exclude.
    pub fn from_excluded(excluded: bool) -> Self {
        if excluded { Self::Hide } else { Self::Show }
    }
}

/// A filter predicate.
///
/// Called once per item per pass with the host, the item handle, the item's
/// position in enumeration order, and the normalized query. Returns `true`
/// to exclude (hide) the item.
pub type FilterFn<H> = Arc<dyn Fn(&H, ItemId, usize, &str) -> bool + Send + Sync>;

/// The default predicate: exclude an item when its lower-cased searchable
/// text does not contain the query as a substring.
pub fn default_filter<H: FilterHost>(host: &H, item: ItemId, _index: usize, query: &str) -> bool {
    !host.search_text(item).to_lowercase().contains(query)
}

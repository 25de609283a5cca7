//! The partition engine.
//!
//! One filter pass: enumerate the current item set, classify every item
//! against the query, partition into hide/show sets, apply visibility, and
//! notify sibling widgets. Classification completes in full before any
//! visibility mutation, so a panicking predicate aborts the pass with item
//! visibility untouched.

use crate::classify::{Classification, default_filter};
use crate::filterable::FilterOptions;
use crate::item::{FilterHost, ItemId};
use crate::registry::RefreshRegistry;

/// The outcome of classifying one item set, in enumeration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Partition {
    pub hide: Vec<ItemId>,
    pub show: Vec<ItemId>,
}

/// Run one synchronous filter pass.
///
/// With `query == None` no filter has ever been set: classification is
/// skipped entirely and only the reveal normalization is applied, leaving
/// the partition empty. Otherwise every enumerated item is classified via
/// the configured predicate (default: substring-miss-as-hide).
///
/// Visibility application: when nothing was classified as hidden (every
/// item matches, including the empty query), the decision for ALL items is
/// uniform and governed by `filter_reveal` — `true` hides all, `false`
/// shows all. Otherwise exactly the hide set is hidden and exactly the
/// show set is shown.
pub(crate) fn run_pass<H: FilterHost>(
    host: &mut H,
    options: &FilterOptions<H>,
    query: Option<&str>,
    registry: &mut RefreshRegistry,
) -> Partition {
    let items = options.children().resolve(&*host);
    let mut partition = Partition::default();

    if let Some(query) = query {
        for (index, &item) in items.iter().enumerate() {
            let excluded = match options.filter_callback() {
                Some(callback) => callback(&*host, item, index, query),
                None => default_filter(&*host, item, index, query),
            };
            match Classification::from_excluded(excluded) {
                Classification::Hide => partition.hide.push(item),
                Classification::Show => partition.show.push(item),
            }
        }
    }

    // Classification is complete; visibility mutation starts here.
    if partition.hide.is_empty() {
        host.set_hidden(&items, options.filter_reveal());
    } else {
        host.set_hidden(&partition.hide, true);
        host.set_hidden(&partition.show, false);
    }

    tracing::debug!(
        target: "siftable::filter",
        query,
        total = items.len(),
        hidden = partition.hide.len(),
        shown = partition.show.len(),
        "filter pass applied"
    );

    registry.refresh_all();

    partition
}

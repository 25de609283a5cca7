//! Pluggable item enumeration.

use std::fmt;
use std::sync::Arc;

use crate::item::{DEFAULT_ROLES, FilterHost, ItemId, ItemRole};

/// Where a filter pass gets its items from.
///
/// Mirrors the `children` configuration option: a role set resolved by the
/// host (the default), an explicit collection of handles, or a
/// zero-argument provider function. Whatever the source, items are
/// enumerated fresh on every pass, and an empty enumeration falls back to
/// the host's direct children.
#[derive(Clone)]
pub enum ItemSource {
    /// Enumerate descendants of the filterable root matching any of these
    /// roles. This is the default, covering list items, choice options,
    /// table rows, and grouped buttons.
    Roles(Vec<ItemRole>),
    /// An explicit collection of item handles.
    Collection(Vec<ItemId>),
    /// A zero-argument function returning the collection.
    Provider(Arc<dyn Fn() -> Vec<ItemId> + Send + Sync>),
    /// No item source configured; resolves to the direct-children fallback.
    None,
}

impl ItemSource {
    /// Build a provider-backed source from a closure.
    pub fn provider<F>(f: F) -> Self
    where
        F: Fn() -> Vec<ItemId> + Send + Sync + 'static,
    {
        Self::Provider(Arc::new(f))
    }

    /// Enumerate the current item set through the host.
    ///
    /// Falls back to the host's direct children when the configured source
    /// yields nothing.
    pub fn resolve<H: FilterHost>(&self, host: &H) -> Vec<ItemId> {
        let items = match self {
            Self::Roles(roles) => host.items_for_roles(roles),
            Self::Collection(items) => items.clone(),
            Self::Provider(provider) => provider(),
            Self::None => Vec::new(),
        };

        if items.is_empty() {
            host.children()
        } else {
            items
        }
    }
}

impl Default for ItemSource {
    fn default() -> Self {
        Self::Roles(DEFAULT_ROLES.to_vec())
    }
}

impl fmt::Debug for ItemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roles(roles) => f.debug_tuple("Roles").field(roles).finish(),
            Self::Collection(items) => f.debug_tuple("Collection").field(items).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
            Self::None => f.write_str("None"),
        }
    }
}

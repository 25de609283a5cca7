//! Sibling refresh registry.
//!
//! Composite widgets attached to the same filterable root (a list view, a
//! grouped control set) need to re-run their own layout after item
//! visibility changes. Rather than probing for sibling widget types at
//! runtime, each composite registers an explicit refresh capability under
//! its kind; the partition engine invokes whatever is registered after
//! every pass.

use std::fmt;

use crate::error::{FilterError, Result};

/// The recognized kinds of sibling composite widget, in declaration order.
///
/// After a pass, registered capabilities run in REVERSE of this order, so a
/// list view refreshes before the collapsible set that may contain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    /// A set of collapsible sections.
    CollapsibleSet,
    /// A selectable choice menu.
    ChoiceMenu,
    /// A grouped control set of buttons.
    ControlGroup,
    /// A list view.
    ListView,
}

impl CompositeKind {
    /// All recognized kinds, in declaration order.
    pub const ALL: [CompositeKind; 4] = [
        CompositeKind::CollapsibleSet,
        CompositeKind::ChoiceMenu,
        CompositeKind::ControlGroup,
        CompositeKind::ListView,
    ];

    fn index(self) -> usize {
        match self {
            Self::CollapsibleSet => 0,
            Self::ChoiceMenu => 1,
            Self::ControlGroup => 2,
            Self::ListView => 3,
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CollapsibleSet => "collapsible-set",
            Self::ChoiceMenu => "choice-menu",
            Self::ControlGroup => "control-group",
            Self::ListView => "list-view",
        };
        f.write_str(name)
    }
}

/// One refresh slot per recognized composite kind.
pub struct RefreshRegistry {
    slots: [Option<Box<dyn FnMut() + Send>>; 4],
}

impl RefreshRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Register a refresh capability for a composite kind.
    ///
    /// Returns [`FilterError::DuplicateRefreshTarget`] if the kind already
    /// has a capability registered; unregister it first to replace it.
    pub fn register<F>(&mut self, kind: CompositeKind, refresh: F) -> Result<()>
    where
        F: FnMut() + Send + 'static,
    {
        let slot = &mut self.slots[kind.index()];
        if slot.is_some() {
            return Err(FilterError::DuplicateRefreshTarget(kind));
        }
        *slot = Some(Box::new(refresh));
        Ok(())
    }

    /// Remove the capability registered for a kind.
    ///
    /// Returns `true` if one was registered.
    pub fn unregister(&mut self, kind: CompositeKind) -> bool {
        self.slots[kind.index()].take().is_some()
    }

    /// Whether a capability is registered for a kind.
    pub fn is_registered(&self, kind: CompositeKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// The number of registered capabilities.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no capability is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every registered capability, in reverse declaration order.
    pub fn refresh_all(&mut self) {
        for kind in CompositeKind::ALL.iter().rev() {
            if let Some(refresh) = &mut self.slots[kind.index()] {
                tracing::trace!(target: "siftable::registry", kind = %kind, "refreshing sibling widget");
                refresh();
            }
        }
    }
}

impl Default for RefreshRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RefreshRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<CompositeKind> = CompositeKind::ALL
            .into_iter()
            .filter(|kind| self.is_registered(*kind))
            .collect();
        f.debug_struct("RefreshRegistry")
            .field("registered", &registered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_register_and_refresh() {
        let mut registry = RefreshRegistry::new();
        let calls = Arc::new(Mutex::new(0));

        let calls_clone = calls.clone();
        registry
            .register(CompositeKind::ListView, move || {
                *calls_clone.lock() += 1;
            })
            .unwrap();

        assert!(registry.is_registered(CompositeKind::ListView));
        registry.refresh_all();
        registry.refresh_all();
        assert_eq!(*calls.lock(), 2);
    }

    #[test]
    fn test_refresh_runs_in_reverse_declaration_order() {
        let mut registry = RefreshRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for kind in CompositeKind::ALL {
            let order_clone = order.clone();
            registry
                .register(kind, move || {
                    order_clone.lock().push(kind);
                })
                .unwrap();
        }

        registry.refresh_all();

        assert_eq!(
            *order.lock(),
            vec![
                CompositeKind::ListView,
                CompositeKind::ControlGroup,
                CompositeKind::ChoiceMenu,
                CompositeKind::CollapsibleSet,
            ]
        );
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let mut registry = RefreshRegistry::new();
        registry.register(CompositeKind::ChoiceMenu, || {}).unwrap();

        let err = registry
            .register(CompositeKind::ChoiceMenu, || {})
            .unwrap_err();
        assert!(matches!(
            err,
            FilterError::DuplicateRefreshTarget(CompositeKind::ChoiceMenu)
        ));
    }

    #[test]
    fn test_unregister_frees_the_slot() {
        let mut registry = RefreshRegistry::new();
        registry.register(CompositeKind::ListView, || {}).unwrap();

        assert!(registry.unregister(CompositeKind::ListView));
        assert!(!registry.unregister(CompositeKind::ListView));
        assert!(registry.is_empty());

        // Re-registration succeeds after unregister.
        registry.register(CompositeKind::ListView, || {}).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_capabilities_are_skipped() {
        let mut registry = RefreshRegistry::new();
        let calls = Arc::new(Mutex::new(0));

        let calls_clone = calls.clone();
        registry
            .register(CompositeKind::ControlGroup, move || {
                *calls_clone.lock() += 1;
            })
            .unwrap();

        registry.refresh_all();
        assert_eq!(*calls.lock(), 1);
    }
}

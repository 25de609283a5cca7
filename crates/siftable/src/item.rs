//! Item handles and the host seam.
//!
//! The filter core never owns the entities it filters. The presentation
//! layer (a list view, a choice menu, a table) owns them and exposes them
//! through [`FilterHost`] as opaque [`ItemId`] handles. Items are
//! enumerated fresh on every filter pass; the core keeps no cached
//! identity across passes.

use slotmap::new_key_type;

new_key_type! {
    /// An opaque handle to one candidate entity subject to filtering.
    ///
    /// Allocated and owned by the host; the filter core only partitions
    /// handles and pushes visibility decisions back through
    /// [`FilterHost::set_hidden`].
    pub struct ItemId;
}

/// The kinds of entity enumerated by the default item source.
///
/// These correspond to the content a filterable container typically holds:
/// list rows, selectable options, table body rows, and buttons inside a
/// grouped control set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// A row of a list view.
    ListItem,
    /// A selectable option of a choice menu.
    ChoiceOption,
    /// A body row of a table.
    TableRow,
    /// A button inside a grouped control set.
    GroupedButton,
}

/// The roles enumerated when no explicit item source is configured.
pub const DEFAULT_ROLES: &[ItemRole] = &[
    ItemRole::ListItem,
    ItemRole::ChoiceOption,
    ItemRole::TableRow,
    ItemRole::GroupedButton,
];

/// The seam between the filter core and the presentation layer.
///
/// Implementors supply item enumeration, searchable text, and the
/// visibility sink. All methods are synchronous; enumeration order must be
/// stable for an unchanged item set so repeated passes are idempotent.
pub trait FilterHost {
    /// Enumerate the items matching any of the given roles, scoped to this
    /// host's filterable root, in presentation order.
    fn items_for_roles(&self, roles: &[ItemRole]) -> Vec<ItemId>;

    /// Enumerate the direct children of the filterable root, in
    /// presentation order.
    ///
    /// Used as the fallback when the configured item source yields nothing.
    fn children(&self) -> Vec<ItemId>;

    /// The searchable text of an item: the explicit filter-text override if
    /// one is set, otherwise the item's rendered text.
    fn search_text(&self, item: ItemId) -> String;

    /// Apply or remove the hidden visual state on a batch of items.
    fn set_hidden(&mut self, items: &[ItemId], hidden: bool);

    /// Whether an item currently carries the hidden visual state.
    fn is_hidden(&self, item: ItemId) -> bool;
}

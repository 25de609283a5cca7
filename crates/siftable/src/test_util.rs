//! In-memory host used by the crate's tests.

use slotmap::SlotMap;

use crate::item::{FilterHost, ItemId, ItemRole};

pub(crate) struct StubItem {
    pub text: String,
    pub filter_text: Option<String>,
    pub role: ItemRole,
    pub hidden: bool,
}

/// A flat, ordered collection of stub items.
pub(crate) struct StubHost {
    items: SlotMap<ItemId, StubItem>,
    order: Vec<ItemId>,
}

impl StubHost {
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    pub fn push(&mut self, text: &str) -> ItemId {
        self.push_with_role(text, ItemRole::ListItem)
    }

    pub fn push_with_role(&mut self, text: &str, role: ItemRole) -> ItemId {
        let id = self.items.insert(StubItem {
            text: text.to_string(),
            filter_text: None,
            role,
            hidden: false,
        });
        self.order.push(id);
        id
    }

    pub fn push_with_filter_text(&mut self, text: &str, filter_text: &str) -> ItemId {
        let id = self.push(text);
        self.items[id].filter_text = Some(filter_text.to_string());
        id
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.order.clone()
    }

    fn texts_where(&self, hidden: bool) -> Vec<String> {
        self.order
            .iter()
            .filter(|&&id| self.items[id].hidden == hidden)
            .map(|&id| self.items[id].text.clone())
            .collect()
    }

    pub fn hidden_texts(&self) -> Vec<String> {
        self.texts_where(true)
    }

    pub fn visible_texts(&self) -> Vec<String> {
        self.texts_where(false)
    }
}

impl FilterHost for StubHost {
    fn items_for_roles(&self, roles: &[ItemRole]) -> Vec<ItemId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| roles.contains(&self.items[id].role))
            .collect()
    }

    fn children(&self) -> Vec<ItemId> {
        self.order.clone()
    }

    fn search_text(&self, item: ItemId) -> String {
        let item = &self.items[item];
        item.filter_text.clone().unwrap_or_else(|| item.text.clone())
    }

    fn set_hidden(&mut self, items: &[ItemId], hidden: bool) {
        for &id in items {
            self.items[id].hidden = hidden;
        }
    }

    fn is_hidden(&self, item: ItemId) -> bool {
        self.items[item].hidden
    }
}

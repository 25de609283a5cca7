//! The bound search input.

/// State of the search box bound to a filterable instance.
///
/// The crate is headless: the host owns the actual text widget and reports
/// edits through [`Filterable::on_input_changed`]. `SearchInput` mirrors
/// the current value and carries the last-committed marker the debounce
/// controller uses to suppress redundant passes.
///
/// [`Filterable::on_input_changed`]: crate::Filterable::on_input_changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Mirror of the search box's current value.
    value: String,
    /// The last value a filter pass actually processed.
    last_committed: Option<String>,
}

impl SearchInput {
    /// An empty search input.
    pub fn new() -> Self {
        Self::default()
    }

    /// A search input whose box already holds a value, e.g. one restored
    /// by the host before the filterable instance was created.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            last_committed: None,
        }
    }

    /// The search box's current value, as last reported by the host.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The normalized value of the last processed filter pass, if any.
    pub fn last_committed(&self) -> Option<&str> {
        self.last_committed.as_deref()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn commit(&mut self, value: String) {
        self.last_committed = Some(value);
    }
}

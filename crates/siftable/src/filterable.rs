//! The filterable controller.
//!
//! [`Filterable`] ties the pieces together: it owns the host, the
//! configured options, the bound search input, the debounce timer, and the
//! sibling refresh registry. Input changes are coalesced through the
//! debounce window and deduplicated against the last processed value;
//! firing runs one synchronous partition pass.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use siftable_core::{DebounceTimer, Signal};

use crate::classify::FilterFn;
use crate::engine;
use crate::error::Result;
use crate::input::SearchInput;
use crate::item::{FilterHost, ItemId};
use crate::registry::{CompositeKind, RefreshRegistry};
use crate::source::ItemSource;

/// Normalize a raw input value for matching and dedup comparison.
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Configuration for a [`Filterable`] instance.
///
/// Built with `with_*` methods and handed to [`Filterable::new`].
///
/// # Example
///
/// ```ignore
/// let options = FilterOptions::new()
///     .with_input(SearchInput::new())
///     .with_filter_reveal(true)
///     .with_children(ItemSource::Roles(vec![ItemRole::ListItem]));
/// let filterable = Filterable::new(host, options);
/// ```
pub struct FilterOptions<H> {
    filter_reveal: bool,
    filter_callback: Option<FilterFn<H>>,
    enhanced: bool,
    input: Option<SearchInput>,
    children: ItemSource,
}

impl<H: FilterHost> FilterOptions<H> {
    /// Default options: no reveal, default predicate, initial pass enabled,
    /// no input bound, default role-based item source.
    pub fn new() -> Self {
        Self {
            filter_reveal: false,
            filter_callback: None,
            enhanced: false,
            input: None,
            children: ItemSource::default(),
        }
    }

    /// Set the reveal policy for the all-visible degenerate case: when
    /// every item matches, `true` hides all items instead of showing them.
    pub fn with_filter_reveal(mut self, reveal: bool) -> Self {
        self.filter_reveal = reveal;
        self
    }

    /// Set a custom filter predicate. The predicate returns `true` to
    /// EXCLUDE (hide) an item.
    pub fn with_filter_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&H, ItemId, usize, &str) -> bool + Send + Sync + 'static,
    {
        self.filter_callback = Some(Arc::new(callback));
        self
    }

    /// Mark the markup as pre-enhanced: the initial filter pass is skipped
    /// because item visibility is assumed already correct.
    pub fn with_enhanced(mut self, enhanced: bool) -> Self {
        self.enhanced = enhanced;
        self
    }

    /// Bind a search input from the start. Its current value feeds the
    /// initial filter pass.
    pub fn with_input(mut self, input: SearchInput) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the item source.
    pub fn with_children(mut self, children: ItemSource) -> Self {
        self.children = children;
        self
    }

    /// The configured reveal policy.
    pub fn filter_reveal(&self) -> bool {
        self.filter_reveal
    }

    /// The configured predicate, if a custom one is set.
    pub fn filter_callback(&self) -> Option<&FilterFn<H>> {
        self.filter_callback.as_ref()
    }

    /// Whether the initial filter pass is skipped.
    pub fn enhanced(&self) -> bool {
        self.enhanced
    }

    /// The configured item source.
    pub fn children(&self) -> &ItemSource {
        &self.children
    }
}

impl<H: FilterHost> Default for FilterOptions<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for FilterOptions<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOptions")
            .field("filter_reveal", &self.filter_reveal)
            .field("filter_callback", &self.filter_callback.is_some())
            .field("enhanced", &self.enhanced)
            .field("input", &self.input)
            .field("children", &self.children)
            .finish()
    }
}

/// Payload of [`Filterable::before_filter`].
///
/// Carries the pending normalized query and a snapshot of the bound input
/// as it stood when the debounce deadline fired, before the last-processed
/// marker advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeforeFilter {
    /// The normalized value the imminent pass will filter with.
    pub query: String,
    /// The bound input at fire time, if one is bound.
    pub input: Option<SearchInput>,
}

/// A debounced filter over the items of one host.
///
/// Control flow: the host reports search-box edits via
/// [`on_input_changed`](Self::on_input_changed); the debounce controller
/// normalizes and deduplicates them and arms the single-slot timer; the
/// host's event loop calls [`poll`](Self::poll), and a due deadline fires
/// one synchronous partition pass followed by sibling refresh
/// notifications.
///
/// All state lives in the instance; dropping or [`destroy`](Self::destroy)
/// leaves no residual timers, and `destroy` additionally resets item
/// visibility symmetric to initialization.
pub struct Filterable<H: FilterHost> {
    host: H,
    options: FilterOptions<H>,
    input: Option<SearchInput>,
    timer: DebounceTimer,
    /// The normalized value waiting for the debounce window to close.
    pending_query: Option<String>,
    registry: RefreshRegistry,
    /// Fired with the pending query and an input snapshot just before each
    /// debounced classification pass. Fire-and-forget: observers cannot
    /// veto.
    pub before_filter: Signal<BeforeFilter>,
}

impl<H: FilterHost> Filterable<H> {
    /// Create a filterable instance over `host`.
    ///
    /// Binds the configured input, then runs one filter pass with the bound
    /// input's current value (empty string when none is bound) — unless the
    /// options are flagged `enhanced`, in which case the markup is trusted
    /// as already filtered and the initial pass is skipped.
    pub fn new(host: H, mut options: FilterOptions<H>) -> Self {
        let input = options.input.take();
        let mut filterable = Self {
            host,
            options,
            input,
            timer: DebounceTimer::default(),
            pending_query: None,
            registry: RefreshRegistry::new(),
            before_filter: Signal::new(),
        };

        if !filterable.options.enhanced {
            let initial = filterable
                .input
                .as_ref()
                .map(|input| normalize(input.value()))
                .unwrap_or_default();
            filterable.filter(Some(&initial));
        }

        filterable
    }

    /// The host being filtered.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// After mutating the item set, call [`refresh`](Self::refresh) to
    /// re-apply the filter.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The active options.
    pub fn options(&self) -> &FilterOptions<H> {
        &self.options
    }

    /// The bound search input, if any.
    pub fn input(&self) -> Option<&SearchInput> {
        self.input.as_ref()
    }

    /// The normalized value of the last processed debounced pass, if any.
    pub fn last_processed(&self) -> Option<&str> {
        self.input.as_ref().and_then(|input| input.last_committed())
    }

    /// Whether a debounce deadline is currently pending.
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// The duration until the pending debounce deadline, if any. Hosts can
    /// use this to schedule their next [`poll`](Self::poll).
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Report a search-box change (keystroke, paste, or programmatic
    /// value change) at the current time. See
    /// [`on_input_changed_at`](Self::on_input_changed_at).
    pub fn on_input_changed(&mut self, raw: &str) -> bool {
        self.on_input_changed_at(raw, Instant::now())
    }

    /// Report a search-box change at an explicit instant.
    ///
    /// With no input bound the debounce controller is disabled and this is
    /// a no-op (the filter then only re-runs via [`refresh`](Self::refresh)).
    /// Otherwise the value is normalized; if it equals the last processed
    /// value the change is redundant and ignored. A real change cancels any
    /// pending deadline and arms a fresh one, so bursts within the window
    /// collapse into a single pass using the last value.
    ///
    /// Returns `true` when this change armed the debounce window.
    pub fn on_input_changed_at(&mut self, raw: &str, now: Instant) -> bool {
        let Some(input) = self.input.as_mut() else {
            tracing::trace!(target: "siftable::filter", "no input bound, ignoring change");
            return false;
        };

        let val = normalize(raw);
        input.set_value(raw.to_string());

        if input.last_committed() == Some(val.as_str()) {
            // Execute the pass only once per value change.
            tracing::trace!(target: "siftable::filter", value = %val, "value unchanged, skipping");
            return false;
        }

        self.timer.cancel();
        self.timer.arm(now);
        self.pending_query = Some(val);
        true
    }

    /// Fire a due debounce deadline at the current time. See
    /// [`poll_at`](Self::poll_at).
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Fire a due debounce deadline at an explicit instant.
    ///
    /// When the deadline has passed this runs one uninterrupted synchronous
    /// step: emit [`before_filter`](Self::before_filter), persist the value
    /// as the last processed marker, and run the partition pass. Returns
    /// `true` if a pass ran.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if !self.timer.fire_due(now) {
            return false;
        }

        let val = self.pending_query.take().unwrap_or_default();
        self.before_filter.emit(BeforeFilter {
            query: val.clone(),
            input: self.input.clone(),
        });

        if let Some(input) = self.input.as_mut() {
            input.commit(val.clone());
        }

        self.filter(Some(&val));
        true
    }

    /// Clear any pending debounce deadline without firing it.
    pub fn cancel_pending(&mut self) {
        self.timer.cancel();
        self.pending_query = None;
    }

    /// Replace or clear the bound search input.
    ///
    /// Cancels any pending deadline (a cancelled pass has no effect at
    /// all), installs the new binding, and forces a refresh with the new
    /// input's value.
    pub fn bind_input(&mut self, input: Option<SearchInput>) {
        self.cancel_pending();
        self.input = input;
        self.refresh();
    }

    /// Run one partition pass with an explicit query.
    ///
    /// `None` means "no filter has ever been set": classification is
    /// skipped and only the reveal normalization is applied. This bypasses
    /// the debounce controller and the last-processed marker; most callers
    /// want [`refresh`](Self::refresh) instead.
    pub fn filter(&mut self, query: Option<&str>) {
        engine::run_pass(&mut self.host, &self.options, query, &mut self.registry);
    }

    /// Cancel any pending deadline and immediately re-run the filter with
    /// the bound input's current value (empty string when none is bound).
    ///
    /// Use this after programmatic changes to the item set.
    pub fn refresh(&mut self) {
        self.cancel_pending();
        let val = self
            .input
            .as_ref()
            .map(|input| normalize(input.value()))
            .unwrap_or_default();
        self.filter(Some(&val));
    }

    /// Change the reveal policy and force a refresh.
    pub fn set_filter_reveal(&mut self, reveal: bool) {
        self.options.filter_reveal = reveal;
        self.refresh();
    }

    /// Install a custom predicate and force a refresh. The predicate
    /// returns `true` to EXCLUDE (hide) an item.
    pub fn set_filter_callback<F>(&mut self, callback: F)
    where
        F: Fn(&H, ItemId, usize, &str) -> bool + Send + Sync + 'static,
    {
        self.options.filter_callback = Some(Arc::new(callback));
        self.refresh();
    }

    /// Revert to the default predicate and force a refresh.
    pub fn clear_filter_callback(&mut self) {
        self.options.filter_callback = None;
        self.refresh();
    }

    /// Change the item source and force a refresh.
    pub fn set_children(&mut self, children: ItemSource) {
        self.options.children = children;
        self.refresh();
    }

    /// Register a sibling composite widget's refresh capability. It runs
    /// after every filter pass, in reverse declaration order of
    /// [`CompositeKind`].
    pub fn register_refresh_target<F>(&mut self, kind: CompositeKind, refresh: F) -> Result<()>
    where
        F: FnMut() + Send + 'static,
    {
        self.registry.register(kind, refresh)
    }

    /// Remove a registered refresh capability. Returns `true` if one was
    /// registered for the kind.
    pub fn unregister_refresh_target(&mut self, kind: CompositeKind) -> bool {
        self.registry.unregister(kind)
    }

    /// Tear the instance down, returning the host.
    ///
    /// Cancels any pending deadline, disconnects all `before_filter`
    /// observers, and resets item visibility symmetric to initialization:
    /// pre-enhanced instances restore the reveal-policy state (hidden iff
    /// `filter_reveal`), others show everything.
    pub fn destroy(mut self) -> H {
        self.cancel_pending();
        self.before_filter.disconnect_all();

        let items = self.options.children.resolve(&self.host);
        if self.options.enhanced {
            let reveal = self.options.filter_reveal;
            self.host.set_hidden(&items, reveal);
        } else {
            self.host.set_hidden(&items, false);
        }

        tracing::debug!(target: "siftable::filter", "filterable destroyed");
        self.host
    }
}

//! Transient query state for the browser page.
//!
//! `BrowserState` is the single owner of the page's selection, filter, sort,
//! and pagination state, and of the pure derivation of the request
//! parameters sent to the topics endpoint. All transitions are synchronous
//! and side-effect free; fetch orchestration lives in the handler layer.
//!
//! State is created with defaults when the application starts and lives for
//! its lifetime; it is never persisted.

use onto_model::{SortKey, SortOrder, TopicQuery, TopicStatus};

/// Page sizes offered by the toolbar.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Query state for the browser page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    /// Currently selected taxonomy id; `None` until the user picks one.
    /// There is no UI path back to `None`.
    pub selected_taxonomy: Option<String>,
    pub search: String,
    pub status: Option<TopicStatus>,
    /// 1-based current page.
    pub page: usize,
    pub page_size: usize,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    /// Selected topic id; only reflected in the detail panel while the
    /// topic is present on the currently loaded page.
    pub selected_topic: Option<String>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            selected_taxonomy: None,
            search: String::new(),
            status: None,
            page: 1,
            page_size: PAGE_SIZES[0],
            sort_by: SortKey::Title,
            sort_order: SortOrder::Asc,
            selected_topic: None,
        }
    }
}

impl BrowserState {
    /// Derive the request parameters for the current state.
    ///
    /// Unset filters are omitted rather than sent as empty values: the
    /// server reads an absent parameter as "no filter".
    pub fn topic_query(&self) -> TopicQuery {
        TopicQuery {
            limit: self.page_size,
            offset: (self.page - 1) * self.page_size,
            status: self.status.clone(),
            search: if self.search.is_empty() {
                None
            } else {
                Some(self.search.clone())
            },
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }

    /// Replace the taxonomy selection and reset all dependent state so no
    /// stale filters leak across taxonomies. The page size is a display
    /// preference and survives the switch.
    pub fn select_taxonomy(&mut self, taxonomy_id: String) {
        *self = Self {
            selected_taxonomy: Some(taxonomy_id),
            page_size: self.page_size,
            ..Self::default()
        };
    }

    pub fn set_search(&mut self, value: String) {
        self.search = value;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<TopicStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// Clicking the active sort column flips its direction; a new column
    /// starts ascending. Either way the pager returns to the first page.
    pub fn toggle_sort(&mut self, column: SortKey) {
        if self.sort_by == column {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_by = column;
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }

    pub fn select_topic(&mut self, topic_id: String) {
        self.selected_topic = Some(topic_id);
    }

    pub fn clear_topic_selection(&mut self) {
        self.selected_topic = None;
    }

    /// Number of pages for `total` matching records, never less than one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }
}

/// Dashboard state machine: fetch lifecycle, selections and the derived view
use crate::domain::{FilterSelection, LaunchRecord, LaunchRow, PageSelection};
use crate::errors::FetchError;
use crate::filters::FilterPipeline;
use crate::pagination::{PageLink, Paginator};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Everything the view layer reads after a transition
#[derive(Debug, Clone, Serialize)]
pub struct ReadModel {
    pub state: LoadState,
    pub is_loading: bool,
    pub has_error: bool,
    pub is_empty: bool,
    pub page_records: Vec<LaunchRow>,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_links: Vec<PageLink>,
    pub has_previous: bool,
    pub has_next: bool,
    pub selection: FilterSelection,
}

pub struct DashboardController {
    state: LoadState,
    records: Vec<LaunchRecord>,
    selection: FilterSelection,
    page: PageSelection,
    filtered: Vec<LaunchRecord>,
    clock: Clock,
}

impl DashboardController {
    pub fn new(page_size: usize) -> Self {
        Self::with_clock(page_size, Arc::new(Utc::now))
    }

    pub fn with_clock(page_size: usize, clock: Clock) -> Self {
        Self {
            state: LoadState::Idle,
            records: Vec::new(),
            selection: FilterSelection::default(),
            page: PageSelection::new(page_size),
            filtered: Vec::new(),
            clock,
        }
    }

    /// Idle -> Loading. Returns false if a fetch lifecycle already started.
    pub fn begin_load(&mut self) -> bool {
        if self.state != LoadState::Idle {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    /// Apply the outcome of the fetch issued by [`begin_load`](Self::begin_load)
    pub fn finish_load(&mut self, result: Result<Vec<LaunchRecord>, FetchError>) {
        if self.state != LoadState::Loading {
            warn!("Ignoring launch fetch result in state {:?}", self.state);
            return;
        }

        match result {
            Ok(records) => {
                info!("Loaded {} launches", records.len());
                self.records = records;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                error!("Launch fetch failed: {}", e);
                self.records.clear();
                self.state = LoadState::Error;
            }
        }
        self.page.current_page = 1;
        self.refilter();
    }

    pub fn select(&mut self, selection: FilterSelection) {
        debug!(
            "Filter changed to {:?}/{:?}",
            selection.category, selection.window
        );
        self.selection = selection;
        self.page.current_page = 1;
        self.refilter();
    }

    /// Move to `page`, clamped into the valid range
    pub fn go_to_page(&mut self, page: usize) {
        let clamped = Paginator::clamp_page(page, self.total_pages());
        debug!("Page change requested {} -> {}", page, clamped);
        self.page.current_page = clamped;
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.current_page.saturating_sub(1));
    }

    /// Full record for the detail overlay, regardless of the active filter
    pub fn launch(&self, flight_number: i64) -> Option<&LaunchRecord> {
        self.records
            .iter()
            .find(|r| r.flight_number == flight_number)
    }

    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    pub fn read_model(&self) -> ReadModel {
        let page = Paginator::paginate(
            &self.filtered,
            self.page.page_size,
            self.page.current_page,
        );
        ReadModel {
            state: self.state,
            is_loading: self.state == LoadState::Loading,
            has_error: self.state == LoadState::Error,
            is_empty: self.filtered.is_empty(),
            page_records: page
                .records
                .iter()
                .enumerate()
                .map(|(i, r)| LaunchRow::from_record(i + 1, r))
                .collect(),
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_links: Paginator::page_window(page.current_page, page.total_pages),
            has_previous: page.current_page > 1,
            has_next: page.current_page < page.total_pages,
            selection: self.selection,
        }
    }

    fn total_pages(&self) -> usize {
        Paginator::total_pages(self.filtered.len(), self.page.page_size)
    }

    fn refilter(&mut self) {
        let now = (self.clock)();
        self.filtered = FilterPipeline::derive(&self.records, self.selection, now);
    }
}

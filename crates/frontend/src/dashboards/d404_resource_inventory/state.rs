//! UI state of the resource inventory dashboard
//!
//! Three orthogonal flags plus the last loaded dataset. Every mutation goes
//! through one of the transition methods below.

use contracts::dashboards::d404_resource_inventory::ServicesDataset;
use leptos::prelude::*;
use std::cell::RefCell;

/// Shown when `GET /api/services` fails
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch data";

/// Shown when `POST /api/fetch` fails
pub const TRIGGER_ERROR_MESSAGE: &str = "Failed to refresh data";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub dataset: ServicesDataset,
    /// Initial load or reload in progress
    pub loading: bool,
    pub error: Option<String>,
    /// Refresh trigger in progress
    pub fetching: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// State at mount: the first load starts immediately
    pub fn new() -> Self {
        Self {
            dataset: ServicesDataset::new(),
            loading: true,
            error: None,
            fetching: false,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, dataset: ServicesDataset) {
        self.dataset = dataset;
        self.error = None;
        self.loading = false;
    }

    /// Dataset is left untouched
    pub fn fail_load(&mut self) {
        self.error = Some(LOAD_ERROR_MESSAGE.to_string());
        self.loading = false;
    }

    /// Take the busy flag; `false` when a trigger is already in flight
    pub fn try_begin_trigger(&mut self) -> bool {
        if self.fetching {
            return false;
        }
        self.fetching = true;
        true
    }

    pub fn fail_trigger(&mut self) {
        self.error = Some(TRIGGER_ERROR_MESSAGE.to_string());
    }

    pub fn end_trigger(&mut self) {
        self.fetching = false;
    }

    pub fn can_trigger(&self) -> bool {
        !self.fetching
    }
}

/// Where the dashboard state lives
///
/// The UI keeps it in an `RwSignal`; tests use a plain `RefCell`.
pub trait DashboardStore {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut DashboardState));
}

impl DashboardStore for RwSignal<DashboardState> {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        self.update(f);
    }
}

impl DashboardStore for RefCell<DashboardState> {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.borrow_mut());
    }
}

/// Holds the `fetching` flag; releases it when dropped
pub struct FetchingGuard<'a, S: DashboardStore> {
    store: &'a S,
}

impl<'a, S: DashboardStore> FetchingGuard<'a, S> {
    pub fn acquire(store: &'a S) -> Option<Self> {
        let mut acquired = false;
        store.update_state(|state| acquired = state.try_begin_trigger());
        acquired.then(|| Self { store })
    }
}

impl<S: DashboardStore> Drop for FetchingGuard<'_, S> {
    fn drop(&mut self) {
        self.store.update_state(DashboardState::end_trigger);
    }
}

//! Data loader and refresh trigger
//!
//! Both operations are written against [`ResourceApi`] and [`DashboardStore`]
//! so the UI can drive them with signals and tests with plain cells.

use super::api::ResourceApi;
use super::state::{DashboardState, DashboardStore, FetchingGuard};

/// How a refresh trigger ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Backend accepted the sync and the dataset was reloaded
    Reloaded,
    /// Sync request failed, dataset not reloaded
    Failed,
    /// Another trigger was already in flight; nothing was sent
    Busy,
}

/// Load the grouped dataset: one `GET` per call
pub async fn load_dataset<A, S>(api: &A, store: &S)
where
    A: ResourceApi + ?Sized,
    S: DashboardStore,
{
    store.update_state(DashboardState::begin_load);

    match api.fetch_services().await {
        Ok(dataset) => {
            log::info!(
                "Loaded {} groups ({} records)",
                dataset.len(),
                dataset.total_records()
            );
            store.update_state(|state| state.finish_load(dataset));
        }
        Err(e) => {
            log::error!("Failed to load services: {}", e);
            store.update_state(DashboardState::fail_load);
        }
    }
}

/// Ask the backend to re-sync, then reload the dataset on success
///
/// `fetching` stays set until this returns, including the reload.
pub async fn trigger_refresh<A, S>(api: &A, store: &S) -> TriggerOutcome
where
    A: ResourceApi + ?Sized,
    S: DashboardStore,
{
    let Some(_guard) = FetchingGuard::acquire(store) else {
        log::warn!("Refresh already in progress, ignoring trigger");
        return TriggerOutcome::Busy;
    };

    match api.trigger_sync().await {
        Ok(reply) => {
            log::info!("Sync finished: {}", reply.summary());
            load_dataset(api, store).await;
            TriggerOutcome::Reloaded
        }
        Err(e) => {
            log::error!("Failed to trigger sync: {}", e);
            store.update_state(DashboardState::fail_trigger);
            TriggerOutcome::Failed
        }
    }
}

use super::group_table::GroupTable;
use crate::dashboards::d404_resource_inventory::api::HttpResourceApi;
use crate::dashboards::d404_resource_inventory::controller;
use crate::dashboards::d404_resource_inventory::state::DashboardState;
use crate::dashboards::d404_resource_inventory::view_model::{render_dashboard, DashboardView};
use crate::shared::config::config;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Resource inventory dashboard: grouped tables with a manual refresh
#[component]
pub fn ResourceInventoryDashboard() -> impl IntoView {
    let settings = &config().dashboard;
    let api = HttpResourceApi::from_config(&config().api);
    let state = RwSignal::new(DashboardState::new());

    // Load data on mount
    let load_api = api.clone();
    Effect::new(move |_| {
        let api = load_api.clone();
        spawn_local(async move {
            controller::load_dataset(&api, &state).await;
        });
    });

    let run_refresh = move || {
        // Control is disabled while fetching; the controller guards again
        if !state.with_untracked(DashboardState::can_trigger) {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            controller::trigger_refresh(&api, &state).await;
        });
    };

    let title = settings.title.clone();
    let loading_text = settings.loading_text.clone();
    let no_data_text = settings.no_data_text.clone();
    let refresh_label = settings.refresh_label.clone();

    view! {
        <div id="d404_resource_inventory--dashboard" class="d404-dashboard">
            {move || match state.with(render_dashboard) {
                DashboardView::Loading => {
                    let loading_text = loading_text.clone();
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                            <Spinner />
                            <span>{loading_text}</span>
                        </Flex>
                    }
                    .into_any()
                }
                DashboardView::Error(message) => view! {
                    <div class="d404-error">{message}</div>
                }
                .into_any(),
                DashboardView::Ready(ready) => {
                    let run_refresh = run_refresh.clone();
                    let no_data_text = no_data_text.clone();
                    let title = title.clone();
                    let refresh_label = refresh_label.clone();
                    let refresh_disabled = ready.refresh_disabled;
                    view! {
                        <div class="d404-content">
                            <h1 class="d404-title">{title}</h1>
                            <div class="d404-toolbar">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| run_refresh()
                                    disabled=move || refresh_disabled
                                    loading=move || refresh_disabled
                                >
                                    {refresh_label}
                                </Button>
                            </div>
                            {ready
                                .groups
                                .into_iter()
                                .map(|group| view! {
                                    <GroupTable group=group no_data_text=no_data_text.clone() />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

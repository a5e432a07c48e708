use crate::dashboards::ResourceInventoryDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <ResourceInventoryDashboard />
        </main>
    }
}

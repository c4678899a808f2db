//! GoRestaurant Frontend App
//!
//! Root component: builds the store and provides context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Dashboard;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::DashboardState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::debug!("[APP] Backend at {}, write-through={}", config.api_base_url, config.write_through);

    let store = Store::new(DashboardState::default());
    provide_context(AppContext::new(config, store));

    view! {
        <div class="app-layout">
            <Dashboard />
        </div>
    }
}

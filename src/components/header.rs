//! Header Component
//!
//! Brand bar with the "new dish" trigger.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-logo">"🍽"</span>
                <span class="header-title">"GoRestaurant"</span>
            </div>
            <button
                class="header-add-btn"
                type="button"
                data-testid="open-add-modal"
                on:click=move |_| on_open_add.run(())
            >
                <span class="header-add-text">"Novo Prato"</span>
                <span class="header-add-icon">"+"</span>
            </button>
        </header>
    }
}

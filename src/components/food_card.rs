//! Food Card Component
//!
//! One dish in the menu grid.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::FoodItem;

#[component]
pub fn FoodCard(
    food: FoodItem,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_edit: Callback<FoodItem>,
    #[prop(into)] on_toggle_available: Callback<(u32, bool)>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let editing = food.clone();

    view! {
        <div
            class=if available { "food-card" } else { "food-card unavailable" }
            data-testid=format!("food-{}", id)
        >
            <header class="food-image">
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="food-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="food-price">"R$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="food-footer">
                <div class="icon-container">
                    <button
                        class="icon-btn edit-btn"
                        type="button"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(editing.clone())
                    >
                        "Editar"
                    </button>
                    <DeleteConfirmButton
                        label="Excluir"
                        on_confirm=move |_| on_delete.run(id)
                    />
                </div>
                <div class="availability-container">
                    <p>{if available { "Disponível" } else { "Indisponível" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            checked=available
                            on:change=move |ev| on_toggle_available.run((id, event_target_checked(&ev)))
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}

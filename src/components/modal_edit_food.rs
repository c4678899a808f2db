//! Edit Food Modal
//!
//! Form is rebuilt whenever the editing slot changes so it starts from that dish.

use leptos::prelude::*;

use crate::components::{FoodForm, ModalFrame};
use crate::models::{FoodDraft, FoodItem};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] editing: Signal<Option<FoodItem>>,
    #[prop(into)] on_update: Callback<FoodDraft>,
) -> impl IntoView {
    let submit = Callback::new(move |draft: FoodDraft| {
        on_update.run(draft);
        on_close.run(());
    });

    view! {
        <ModalFrame is_open=is_open on_close=on_close>
            {move || editing.get().map(|food| view! {
                <FoodForm
                    initial=food.draft()
                    title="Editar Prato"
                    submit_label="Editar Prato"
                    on_submit=submit
                />
            })}
        </ModalFrame>
    }
}

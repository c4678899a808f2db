//! Add Food Modal

use leptos::prelude::*;

use crate::components::{FoodForm, ModalFrame};
use crate::models::FoodDraft;

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add: Callback<FoodDraft>,
) -> impl IntoView {
    let submit = Callback::new(move |draft: FoodDraft| {
        on_add.run(draft);
        on_close.run(());
    });

    view! {
        <ModalFrame is_open=is_open on_close=on_close>
            <FoodForm
                initial=FoodDraft::default()
                title="Novo Prato"
                submit_label="Adicionar Prato"
                on_submit=submit
            />
        </ModalFrame>
    }
}

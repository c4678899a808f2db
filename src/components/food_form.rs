//! Food Form Component
//!
//! Shared form body of the add and edit dialogs.

use leptos::prelude::*;

use crate::models::FoodDraft;

/// Form fields: (input name, label, placeholder)
const FIELDS: &[(&str, &str, &str)] = &[
    ("image", "URL da imagem", "Cole o link aqui"),
    ("name", "Nome do prato", "Ex: Moda Italiana"),
    ("price", "Preço", "Ex: 19.90"),
    ("description", "Descrição", ""),
];

/// Validated form for a dish
///
/// `on_submit` only fires with a draft that passed `FoodDraft::validate`.
#[component]
pub fn FoodForm(
    initial: FoodDraft,
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let draft = RwSignal::new(initial);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().validate() {
            Ok(valid) => {
                set_error.set(None);
                on_submit.run(valid);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="food-form" on:submit=submit>
            <h1>{title}</h1>

            {FIELDS.iter().map(|(field, label, placeholder)| {
                let field = *field;
                view! {
                    <label class="form-field">
                        <span>{*label}</span>
                        <input
                            name=field
                            placeholder=*placeholder
                            prop:value=move || draft.with(|d| field_value(d, field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| set_field(d, field, value));
                            }
                        />
                    </label>
                }
            }).collect_view()}

            {move || error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}

            <button type="submit" class="form-submit" data-testid="submit-food">
                <span class="form-submit-text">{submit_label}</span>
                <span class="form-submit-icon">"✓"</span>
            </button>
        </form>
    }
}

fn field_value<'a>(draft: &'a FoodDraft, field: &str) -> &'a str {
    match field {
        "image" => &draft.image,
        "name" => &draft.name,
        "price" => &draft.price,
        _ => &draft.description,
    }
}

fn set_field(draft: &mut FoodDraft, field: &str, value: String) {
    match field {
        "image" => draft.image = value,
        "name" => draft.name = value,
        "price" => draft.price = value,
        _ => draft.description = value,
    }
}

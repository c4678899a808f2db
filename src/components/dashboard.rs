//! Dashboard Component
//!
//! Menu page: loads dishes on mount and owns the add/update/delete handlers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache::LocalStorageCache;
use crate::commands::PendingWrite;
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood, NoticeBar};
use crate::context::AppContext;
use crate::loader;
use crate::modal::ModalState;
use crate::models::{FoodDraft, FoodItem};
use crate::store::{
    store_add_food, store_delete_food, store_set_availability, store_update_editing,
    DashboardStateStoreFields, NoticeLevel,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = ctx.store;

    // Load dishes on mount
    Effect::new(move |_| {
        let config = ctx.config.get_value();
        spawn_local(async move {
            let cache = LocalStorageCache::new(config.cache_key.clone());
            let loaded = loader::load_initial_foods(&config, &cache).await;
            match (&loaded.fetch_error, loaded.cached) {
                (Some(e), 0) => {
                    log::error!("[DASHBOARD] Loading dishes failed: {}", e);
                    ctx.notify(NoticeLevel::Error, format!("Não foi possível carregar o cardápio: {}", e));
                }
                (Some(e), cached) => {
                    log::error!("[DASHBOARD] Loading dishes failed: {}", e);
                    ctx.notify(
                        NoticeLevel::Error,
                        format!("Não foi possível carregar o cardápio: {}. Exibindo {} prato(s) do cache", e, cached),
                    );
                }
                (None, 0) => {}
                (None, cached) => {
                    ctx.notify(NoticeLevel::Info, format!("{} prato(s) restaurado(s) do cache", cached));
                }
            }
            log::info!("[DASHBOARD] Loaded {} dishes", loaded.foods.len());
            store.foods().set(loaded.foods);
        });
    });

    let handle_add_food = Callback::new(move |draft: FoodDraft| {
        match store_add_food(&store, draft) {
            Ok(food) => {
                log::debug!("[DASHBOARD] Added dish #{}", food.id);
                ctx.persist(PendingWrite::Create(food));
            }
            Err(e) => {
                log::error!("[DASHBOARD] Add failed: {}", e);
                ctx.notify(NoticeLevel::Error, format!("Não foi possível adicionar o prato: {}", e));
            }
        }
    });

    let handle_update_food = Callback::new(move |draft: FoodDraft| {
        if let Some(food) = store_update_editing(&store, draft) {
            ctx.persist(PendingWrite::Update(food));
        }
    });

    let handle_delete_food = Callback::new(move |id: u32| {
        if store_delete_food(&store, id) {
            log::debug!("[DASHBOARD] Deleted dish #{}", id);
            ctx.persist(PendingWrite::Delete(id));
        }
    });

    let handle_toggle_available = Callback::new(move |(id, available): (u32, bool)| {
        if let Some(food) = store_set_availability(&store, id, available) {
            ctx.persist(PendingWrite::Update(food));
        }
    });

    let handle_edit_food = Callback::new(move |food: FoodItem| {
        store.modal().update(|m| m.open_edit(food));
    });

    let toggle_modal = Callback::new(move |_: ()| store.modal().update(ModalState::toggle_add));
    let toggle_edit_modal = Callback::new(move |_: ()| store.modal().update(ModalState::toggle_edit));

    let add_open = Signal::derive(move || store.modal().with(ModalState::is_adding));
    let edit_open = Signal::derive(move || store.modal().with(ModalState::is_editing));
    let editing = Signal::derive(move || store.modal().with(|m| m.editing_slot().cloned()));

    view! {
        <Header on_open_add=toggle_modal />
        <NoticeBar />
        <ModalAddFood
            is_open=add_open
            on_close=toggle_modal
            on_add=handle_add_food
        />
        <ModalEditFood
            is_open=edit_open
            on_close=toggle_edit_modal
            editing=editing
            on_update=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            // Ids are unique, so the whole dish is a unique key; an edited dish gets a fresh card
            <For
                each=move || store.foods().get()
                key=|food| food.clone()
                children=move |food| view! {
                    <FoodCard
                        food=food
                        on_delete=handle_delete_food
                        on_edit=handle_edit_food
                        on_toggle_available=handle_toggle_available
                    />
                }
            />
        </div>
    }
}

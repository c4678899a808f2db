//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::menu::{self, MenuError};
use crate::modal::ModalState;
use crate::models::{FoodDraft, FoodItem};

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message shown in the notice bar
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Dishes in display order (newest first)
    pub foods: Vec<FoodItem>,
    /// Open dialog, if any
    pub modal: ModalState,
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u32,
}

pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Add a dish built from `draft`; returns the stored item
pub fn store_add_food(store: &DashboardStore, draft: FoodDraft) -> Result<FoodItem, MenuError> {
    let next = store.foods().with_untracked(|foods| menu::add_food(foods, draft))?;
    let added = next[0].clone();
    store.foods().set(next);
    Ok(added)
}

/// Apply `draft` to the dish held in `editing`; returns the updated item if it was found
pub fn store_update_food(store: &DashboardStore, editing: &FoodItem, draft: FoodDraft) -> Option<FoodItem> {
    let next = store.foods().with_untracked(|foods| menu::update_food(foods, editing, draft));
    let updated = next.iter().find(|food| food.id == editing.id).cloned();
    store.foods().set(next);
    updated
}

/// Apply `draft` to the dish in the open edit dialog
pub fn store_update_editing(store: &DashboardStore, draft: FoodDraft) -> Option<FoodItem> {
    let Some(editing) = store.modal().with_untracked(|m| m.editing_slot().cloned()) else {
        log::warn!("[DASHBOARD] Update without a dish in the editing slot");
        return None;
    };
    let updated = store_update_food(store, &editing, draft);
    if updated.is_none() {
        log::warn!("[DASHBOARD] Dish #{} is no longer on the menu", editing.id);
    }
    updated
}

/// Remove a dish by ID; returns whether anything was removed
pub fn store_delete_food(store: &DashboardStore, id: u32) -> bool {
    let (before, next) = store
        .foods()
        .with_untracked(|foods| (foods.len(), menu::delete_food(foods, id)));
    let removed = next.len() < before;
    store.foods().set(next);
    removed
}

pub fn store_set_availability(store: &DashboardStore, id: u32, available: bool) -> Option<FoodItem> {
    let next = store
        .foods()
        .with_untracked(|foods| menu::set_availability(foods, id, available));
    let changed = next.iter().find(|food| food.id == id).cloned();
    store.foods().set(next);
    changed
}

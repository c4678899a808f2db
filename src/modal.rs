//! Modal State
//!
//! Which dialog is open. At most one can be open at a time.

use crate::models::FoodItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    /// "New dish" dialog
    Adding,
    /// Edit dialog; carries the editing slot
    Editing(FoodItem),
}

impl ModalState {
    pub fn is_adding(&self) -> bool {
        matches!(self, ModalState::Adding)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ModalState::Editing(_))
    }

    /// Item targeted by the edit dialog
    pub fn editing_slot(&self) -> Option<&FoodItem> {
        match self {
            ModalState::Editing(food) => Some(food),
            _ => None,
        }
    }

    pub fn open_add(&mut self) {
        *self = ModalState::Adding;
    }

    /// Record `food` in the editing slot and show the edit dialog
    pub fn open_edit(&mut self, food: FoodItem) {
        *self = ModalState::Editing(food);
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Header button: opens the add dialog, or closes it if already open
    pub fn toggle_add(&mut self) {
        if self.is_adding() {
            self.close();
        } else {
            self.open_add();
        }
    }

    /// Closes the edit dialog; opening it needs an item (see `open_edit`)
    pub fn toggle_edit(&mut self) {
        if self.is_editing() {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u32) -> FoodItem {
        FoodItem {
            id,
            name: "Veggie".to_string(),
            image: String::new(),
            price: "21.90".to_string(),
            description: String::new(),
            available: false,
        }
    }

    #[test]
    fn test_default_closed() {
        let state = ModalState::default();
        assert!(!state.is_adding());
        assert!(!state.is_editing());
        assert_eq!(state.editing_slot(), None);
    }

    #[test]
    fn test_toggle_add() {
        let mut state = ModalState::Closed;
        state.toggle_add();
        assert!(state.is_adding());
        state.toggle_add();
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_open_edit_records_slot() {
        let mut state = ModalState::Closed;
        state.open_edit(food(2));
        assert!(state.is_editing());
        assert_eq!(state.editing_slot().map(|f| f.id), Some(2));
        state.toggle_edit();
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_dialogs_are_exclusive() {
        let mut state = ModalState::Closed;
        state.open_edit(food(1));
        state.toggle_add();
        assert!(state.is_adding());
        assert!(!state.is_editing());

        state.open_edit(food(3));
        assert!(!state.is_adding());
        assert_eq!(state.editing_slot().map(|f| f.id), Some(3));
    }

    #[test]
    fn test_toggle_edit_ignores_add_dialog() {
        let mut state = ModalState::Adding;
        state.toggle_edit();
        assert!(state.is_adding());
    }
}

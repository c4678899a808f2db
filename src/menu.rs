//! Menu List Operations
//!
//! Pure transformations of the in-memory food collection.
//! Each operation returns a new collection and leaves its input untouched.

use thiserror::Error;

use crate::models::{FoodDraft, FoodItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("não há identificador livre para um novo prato (maior id é {0})")]
    IdSpaceExhausted(u32),
}

/// Next free identifier: highest existing id + 1 (an empty menu starts at 1)
pub fn next_food_id(foods: &[FoodItem]) -> Result<u32, MenuError> {
    let max = foods.iter().map(|food| food.id).max().unwrap_or(0);
    max.checked_add(1).ok_or(MenuError::IdSpaceExhausted(max))
}

/// Prepend a new, available item built from `draft`
pub fn add_food(foods: &[FoodItem], draft: FoodDraft) -> Result<Vec<FoodItem>, MenuError> {
    let id = next_food_id(foods)?;

    let mut next = Vec::with_capacity(foods.len() + 1);
    next.push(FoodItem::from_draft(id, draft, true));
    next.extend_from_slice(foods);
    Ok(next)
}

/// Replace the content of the item matching `editing.id`, in place.
///
/// The replacement keeps `editing`'s id and availability; every other
/// item is returned as is.
pub fn update_food(foods: &[FoodItem], editing: &FoodItem, draft: FoodDraft) -> Vec<FoodItem> {
    foods
        .iter()
        .map(|food| {
            if food.id == editing.id {
                FoodItem::from_draft(editing.id, draft.clone(), editing.available)
            } else {
                food.clone()
            }
        })
        .collect()
}

/// Drop every item with `id`, keeping the order of the rest
pub fn delete_food(foods: &[FoodItem], id: u32) -> Vec<FoodItem> {
    foods.iter().filter(|food| food.id != id).cloned().collect()
}

/// Flip availability of the matching item only
pub fn set_availability(foods: &[FoodItem], id: u32, available: bool) -> Vec<FoodItem> {
    foods
        .iter()
        .map(|food| {
            if food.id == id {
                FoodItem { available, ..food.clone() }
            } else {
                food.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: u32, name: &str, available: bool) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            image: format!("https://storage.example.com/food-{}.png", id),
            price: "19.90".to_string(),
            description: format!("Description of {}", name),
            available,
        }
    }

    fn make_draft(name: &str) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            image: "https://storage.example.com/new.png".to_string(),
            price: "12.50".to_string(),
            description: "Fresh".to_string(),
        }
    }

    #[test]
    fn test_next_food_id() {
        assert_eq!(next_food_id(&[]), Ok(1));
        let foods = vec![make_food(4, "a", true), make_food(9, "b", true), make_food(2, "c", true)];
        assert_eq!(next_food_id(&foods), Ok(10));
    }

    #[test]
    fn test_next_food_id_overflow() {
        let foods = vec![make_food(u32::MAX, "last", true)];
        assert_eq!(next_food_id(&foods), Err(MenuError::IdSpaceExhausted(u32::MAX)));
        assert!(add_food(&foods, make_draft("X")).is_err());
    }

    #[test]
    fn test_add_food_prepends() {
        let foods = vec![make_food(1, "Ao molho", true)];
        let next = add_food(&foods, make_draft("X")).unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, 2);
        assert_eq!(next[0].name, "X");
        assert!(next[0].available);
        assert_eq!(next[1], foods[0]);
    }

    #[test]
    fn test_add_food_to_empty_menu() {
        let next = add_food(&[], make_draft("First")).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 1);
    }

    #[test]
    fn test_add_food_uses_max_not_first() {
        let foods = vec![make_food(3, "a", false), make_food(7, "b", false), make_food(5, "c", false)];
        let next = add_food(&foods, make_draft("d")).unwrap();
        assert_eq!(next[0].id, 8);
        assert!(next[0].available);
        assert_eq!(&next[1..], &foods[..]);
    }

    #[test]
    fn test_delete_food() {
        let foods = vec![make_food(1, "a", true), make_food(2, "b", true)];
        let next = delete_food(&foods, 1);
        assert_eq!(next, vec![make_food(2, "b", true)]);
    }

    #[test]
    fn test_delete_food_keeps_order() {
        let foods = vec![
            make_food(5, "a", true),
            make_food(3, "b", true),
            make_food(8, "c", true),
            make_food(1, "d", true),
        ];
        let next = delete_food(&foods, 8);
        let ids: Vec<u32> = next.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn test_delete_food_removes_every_match() {
        let foods = vec![make_food(4, "a", true), make_food(6, "b", true), make_food(4, "c", false)];
        let next = delete_food(&foods, 4);
        assert_eq!(next, vec![make_food(6, "b", true)]);
    }

    #[test]
    fn test_delete_food_unknown_id() {
        let foods = vec![make_food(1, "a", true)];
        assert_eq!(delete_food(&foods, 42), foods);
        assert!(delete_food(&[], 1).is_empty());
    }

    #[test]
    fn test_update_food_keeps_id_and_availability() {
        let foods = vec![make_food(1, "a", true), make_food(2, "b", false)];
        let editing = foods[1].clone();

        let next = update_food(&foods, &editing, make_draft("Y"));

        assert_eq!(next.len(), 2);
        assert_eq!(next[0], foods[0]);
        assert_eq!(next[1].id, 2);
        assert_eq!(next[1].name, "Y");
        assert_eq!(next[1].price, "12.50");
        assert!(!next[1].available);
    }

    #[test]
    fn test_update_food_uses_slot_availability() {
        // The slot is a snapshot; its availability wins over the list entry.
        let foods = vec![make_food(1, "a", true)];
        let mut editing = foods[0].clone();
        editing.available = false;

        let next = update_food(&foods, &editing, make_draft("b"));
        assert!(!next[0].available);
    }

    #[test]
    fn test_update_food_no_match() {
        let foods = vec![make_food(1, "a", true), make_food(2, "b", true)];
        let editing = make_food(3, "ghost", true);
        assert_eq!(update_food(&foods, &editing, make_draft("Y")), foods);
    }

    #[test]
    fn test_set_availability() {
        let foods = vec![make_food(1, "a", true), make_food(2, "b", true)];
        let next = set_availability(&foods, 2, false);
        assert!(next[0].available);
        assert!(!next[1].available);
        assert_eq!(next[1].name, "b");
    }
}

//! Frontend Models
//!
//! Data structures matching the backend `foods` records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A dish on the menu (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub image: String,
    /// Decimal kept as text, exactly as the backend sends it
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodItem {
    /// Build a full item from form content
    pub fn from_draft(id: u32, draft: FoodDraft, available: bool) -> Self {
        Self {
            id,
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available,
        }
    }

    /// Content fields only, used to pre-fill the edit form
    pub fn draft(&self) -> FoodDraft {
        FoodDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}

/// Form output: a food item without `id` and `available`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("o prato precisa de um nome")]
    EmptyName,
    #[error("\"{0}\" não é um preço válido")]
    InvalidPrice(String),
}

impl FoodDraft {
    /// Trim every field and check name and price
    pub fn validate(self) -> Result<FoodDraft, DraftError> {
        let draft = FoodDraft {
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
            price: self.price.trim().to_string(),
            description: self.description.trim().to_string(),
        };

        if draft.name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        match draft.price.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(draft),
            _ => Err(DraftError::InvalidPrice(draft.price)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            image: " https://example.com/ao-molho.png ".to_string(),
            price: price.to_string(),
            description: "  Macarrão ao molho branco  ".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let valid = draft("  Ao molho ", " 19.90 ").validate().unwrap();
        assert_eq!(valid.name, "Ao molho");
        assert_eq!(valid.price, "19.90");
        assert_eq!(valid.image, "https://example.com/ao-molho.png");
        assert_eq!(valid.description, "Macarrão ao molho branco");
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert_eq!(draft("   ", "10").validate(), Err(DraftError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_bad_price() {
        assert_eq!(
            draft("Veggie", "ten").validate(),
            Err(DraftError::InvalidPrice("ten".to_string()))
        );
        assert_eq!(
            draft("Veggie", "-1").validate(),
            Err(DraftError::InvalidPrice("-1".to_string()))
        );
        assert!(draft("Veggie", "").validate().is_err());
    }

    #[test]
    fn test_backend_record_shape() {
        let json = r#"{"id":3,"name":"A la Camarón","image":"x.png","price":"25.90","description":"Camarões","available":false}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 3);
        assert!(!food.available);
        assert_eq!(food.draft().price, "25.90");
    }
}

//! Food Commands
//!
//! `foods` resource on the backend.

use crate::config::AppConfig;
use crate::models::FoodItem;
use super::{client, ApiError};

/// Local change to mirror on the backend
#[derive(Debug, Clone, PartialEq)]
pub enum PendingWrite {
    Create(FoodItem),
    Update(FoodItem),
    Delete(u32),
}

pub async fn list_foods(config: &AppConfig) -> Result<Vec<FoodItem>, ApiError> {
    let foods = client()
        .get(config.foods_url())
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<FoodItem>>()
        .await?;
    log::debug!("[API] GET foods -> {} dishes", foods.len());
    Ok(foods)
}

pub async fn create_food(config: &AppConfig, food: &FoodItem) -> Result<(), ApiError> {
    client()
        .post(config.foods_url())
        .json(food)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn update_food(config: &AppConfig, food: &FoodItem) -> Result<(), ApiError> {
    client()
        .put(config.food_url(food.id))
        .json(food)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn delete_food(config: &AppConfig, id: u32) -> Result<(), ApiError> {
    client()
        .delete(config.food_url(id))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Send one pending write to the backend
pub async fn apply_write(config: &AppConfig, write: &PendingWrite) -> Result<(), ApiError> {
    log::debug!("[API] Applying {:?}", write);
    match write {
        PendingWrite::Create(food) => create_food(config, food).await,
        PendingWrite::Update(food) => update_food(config, food).await,
        PendingWrite::Delete(id) => delete_food(config, *id).await,
    }
}

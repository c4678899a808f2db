//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod delete_confirm_button;
mod food_card;
mod food_form;
mod header;
mod modal_add_food;
mod modal_edit_food;
mod modal_frame;
mod notice_bar;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use food_card::FoodCard;
pub use food_form::FoodForm;
pub use header::Header;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use modal_frame::ModalFrame;
pub use notice_bar::NoticeBar;

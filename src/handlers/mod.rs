pub mod category;
pub mod health;

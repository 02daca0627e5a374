pub mod category;
pub mod envelope;

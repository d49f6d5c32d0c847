//! SeaORM entity models

pub mod categories;
pub mod posts;

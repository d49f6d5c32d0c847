//! Domain layer: entities and port traits

pub mod entities;
pub mod ports;

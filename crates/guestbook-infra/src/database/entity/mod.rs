//! SeaORM entities.

pub mod visitor;

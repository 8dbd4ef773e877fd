//! SeaORM entities (database models).

pub mod games;

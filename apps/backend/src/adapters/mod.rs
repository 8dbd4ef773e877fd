//! SeaORM adapters: thin query layer over the entities.

pub mod games_sea;

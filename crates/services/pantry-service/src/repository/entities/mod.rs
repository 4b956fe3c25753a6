//! SeaORM entity definitions

pub mod pantry;

//! Pantry entry entity.

use serde::{Deserialize, Serialize};

/// A quantity of one ingredient, in one measurement unit, owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryEntry {
    /// Assigned by storage; `0` before the entry is stored
    #[serde(default)]
    pub pantry_id: i32,
    pub app_user_id: i32,
    pub ingredient_id: i32,
    pub measurement_id: i32,
    pub quantity: f64,
}

impl PantryEntry {
    /// Create an entry that has not been stored yet
    pub fn new(app_user_id: i32, ingredient_id: i32, measurement_id: i32, quantity: f64) -> Self {
        Self {
            pantry_id: 0,
            app_user_id,
            ingredient_id,
            measurement_id,
            quantity,
        }
    }

    pub fn with_id(mut self, pantry_id: i32) -> Self {
        self.pantry_id = pantry_id;
        self
    }
}

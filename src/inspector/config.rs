//! Display defaults for property cells.

use bevy::prelude::*;

/// Configuration for how property values are turned into cells.
#[derive(Resource, Clone, Debug)]
pub struct InspectorConfig {
    /// Text shown when a key-path does not resolve.
    pub missing_value_text: String,
    /// Drag speed given to editable numeric cells (units per pixel).
    pub default_drag_speed: f64,
    /// Decimal places for floating point values.
    pub default_precision: usize,
    /// Tuples with at most this many fields are shown inline.
    pub max_inline_tuple_len: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            missing_value_text: String::new(),
            default_drag_speed: 0.1,
            default_precision: 2,
            max_inline_tuple_len: 4,
        }
    }
}

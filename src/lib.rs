//! Key-path property registration for a Bevy inspector.
//!
//! Powered by bevy_reflect.

pub mod inspector;

// Re-export the main types for convenience
pub use inspector::{
    CategoryConfiguration, CellConfiguration, InspectorConfig, KeyPathError, Property,
    PropertyCell, PropertyContext, PropertyInspectorPlugin, PropertySection,
};

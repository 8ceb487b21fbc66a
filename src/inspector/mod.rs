//! Property registration for the inspector.
//!
//! Host code registers key-path properties per category on a [`PropertyContext`];
//! the inspector UI reads them back as [`PropertySection`]s for a reflected model.

pub mod cell;
pub mod config;
pub mod configuration;
pub mod context;
pub mod key_path;
pub mod plugin;
pub mod property;

pub use cell::{PropertyCell, PropertySection};
pub use config::InspectorConfig;
pub use configuration::CategoryConfiguration;
pub use context::PropertyContext;
pub use key_path::{KeyPath, KeyPathError, KeyPathSegment};
pub use plugin::PropertyInspectorPlugin;
pub use property::{CellConfiguration, Property, capitalize};

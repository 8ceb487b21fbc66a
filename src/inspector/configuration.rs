//! Category-scoped property builder.

use bevy::prelude::*;

use super::property::{CellConfiguration, Property};

/// Accumulates the properties registered for one category of one inspector.
///
/// Handed to the setup callback of [`PropertyContext::configure`](super::PropertyContext::configure).
/// Every descriptor it creates shares its category and inspector.
pub struct CategoryConfiguration {
    category: String,
    inspector: Entity,
    properties: Vec<Property>,
}

impl CategoryConfiguration {
    pub fn new(category: impl Into<String>, inspector: Entity) -> Self {
        Self {
            category: category.into(),
            inspector,
            properties: Vec::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn inspector(&self) -> Entity {
        self.inspector
    }

    /// Properties added so far, in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Adds one property and returns it so its cell configuration can be set.
    pub fn add_property(
        &mut self,
        key_path: impl Into<String>,
        display_name: Option<&str>,
        cell_configuration: Option<CellConfiguration>,
    ) -> &mut Property {
        let property = Property::new(
            key_path,
            display_name,
            self.category.as_str(),
            self.inspector,
            cell_configuration,
        );
        self.properties.push(property);
        let last = self.properties.len() - 1;
        &mut self.properties[last]
    }

    /// Adds one property per key-path, each with its default display name.
    pub fn add_properties<I, S>(&mut self, key_paths: I) -> Vec<&mut Property>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.properties.len();
        for key_path in key_paths {
            self.add_property(key_path, None, None);
        }
        self.properties[start..].iter_mut().collect()
    }

    /// Adds one property per `key-path → display name` entry.
    ///
    /// Each entry is expected to hold a single pair; only its first pair is used,
    /// and entries without any pair are skipped.
    pub fn add_labeled_properties<I, E, K, V>(&mut self, entries: I) -> Vec<&mut Property>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let start = self.properties.len();
        for entry in entries {
            let Some((key_path, display_name)) = entry.into_iter().next() else {
                continue;
            };
            self.add_property(key_path, Some(display_name.as_ref()), None);
        }
        self.properties[start..].iter_mut().collect()
    }

    pub(crate) fn into_properties(self) -> Vec<Property> {
        self.properties
    }
}

//! Top-level property registry.

use bevy::prelude::*;

use super::cell::{PropertySection, build_cell};
use super::config::InspectorConfig;
use super::configuration::CategoryConfiguration;
use super::property::Property;

/// Every property registered during an inspection session, in registration order.
///
/// Lives as a resource; mutation goes through `ResMut`, so there is a single
/// writer at a time. Outside of an `App` it must be owned by one thread.
#[derive(Resource, Default, Debug)]
pub struct PropertyContext {
    properties: Vec<Property>,
}

impl PropertyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `category` for `inspector`, runs `setup` against a fresh
    /// [`CategoryConfiguration`], then appends what it registered.
    ///
    /// Existing properties with the same identity are kept; registration only appends.
    pub fn configure(
        &mut self,
        inspector: Entity,
        category: impl Into<String>,
        setup: impl FnOnce(&mut CategoryConfiguration),
    ) {
        let mut config = CategoryConfiguration::new(category, inspector);
        setup(&mut config);

        debug!(
            "Registered {} properties in category {:?} for inspector {:?}",
            config.properties().len(),
            config.category(),
            inspector
        );
        self.properties.extend(config.into_properties());
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Distinct categories in the order they were first registered.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for property in &self.properties {
            if !categories.contains(&property.category()) {
                categories.push(property.category());
            }
        }
        categories
    }

    pub fn properties_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |property| property.category() == category)
    }

    /// First property with the given identity, for assigning its cell configuration
    /// after registration.
    pub fn property_mut(
        &mut self,
        inspector: Entity,
        category: &str,
        key_path: &str,
    ) -> Option<&mut Property> {
        self.properties.iter_mut().find(|property| {
            property.inspector() == inspector
                && property.category() == category
                && property.key_path() == key_path
        })
    }

    /// Builds the cells `inspector` shows for `model`, grouped by category.
    ///
    /// Sections follow first-registration order of their category; cells keep
    /// registration order. Cell configurations run last, and cells they hide are dropped.
    pub fn sections(
        &self,
        inspector: Entity,
        model: &dyn PartialReflect,
        config: &InspectorConfig,
    ) -> Vec<PropertySection> {
        let mut sections: Vec<PropertySection> = Vec::new();

        for property in self.properties.iter().filter(|p| p.inspector() == inspector) {
            let resolved = match property.try_value(model) {
                Ok(value) => Some(value),
                Err(err) => {
                    trace!("Property {} did not resolve: {}", property, err);
                    None
                }
            };

            let mut cell = build_cell(
                property.key_path(),
                property.display_name(),
                resolved,
                config,
            );
            property.configure_cell(&mut cell);
            if cell.hidden {
                continue;
            }

            match sections
                .iter_mut()
                .find(|section| section.category == property.category())
            {
                Some(section) => section.cells.push(cell),
                None => sections.push(PropertySection {
                    category: property.category().to_string(),
                    cells: vec![cell],
                }),
            }
        }

        sections
    }
}

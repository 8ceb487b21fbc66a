//! Property descriptors.

use bevy::prelude::*;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use super::cell::PropertyCell;
use super::key_path::{KeyPath, KeyPathError};

/// Callback that customizes the cell of one property before it is displayed.
pub type CellConfiguration = Arc<dyn Fn(&mut PropertyCell) + Send + Sync>;

/// One inspectable attribute of a model, registered under a category for an inspector.
///
/// Identity is the key-path, the category and the inspector. The cell
/// configuration is the only field that can change after creation.
#[derive(Clone)]
pub struct Property {
    key_path: String,
    display_name: String,
    category: String,
    inspector: Entity,
    cell_configuration: Option<CellConfiguration>,
}

impl Property {
    /// Creates a descriptor. An absent or empty `display_name` falls back to
    /// [`capitalize`] applied to the whole key-path.
    pub fn new(
        key_path: impl Into<String>,
        display_name: Option<&str>,
        category: impl Into<String>,
        inspector: Entity,
        cell_configuration: Option<CellConfiguration>,
    ) -> Self {
        let key_path = key_path.into();
        let display_name = match display_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => capitalize(&key_path),
        };

        Self {
            key_path,
            display_name,
            category: category.into(),
            inspector,
            cell_configuration,
        }
    }

    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn inspector(&self) -> Entity {
        self.inspector
    }

    pub fn cell_configuration(&self) -> Option<&CellConfiguration> {
        self.cell_configuration.as_ref()
    }

    pub fn set_cell_configuration(
        &mut self,
        configure: impl Fn(&mut PropertyCell) + Send + Sync + 'static,
    ) -> &mut Self {
        self.cell_configuration = Some(Arc::new(configure));
        self
    }

    pub fn clear_cell_configuration(&mut self) -> &mut Self {
        self.cell_configuration = None;
        self
    }

    /// Resolves the key-path against `model`, or `None` if any part of it is missing.
    pub fn value<'a>(&self, model: &'a dyn PartialReflect) -> Option<&'a dyn PartialReflect> {
        self.try_value(model).ok()
    }

    /// Like [`Property::value`], but reports why resolution failed.
    pub fn try_value<'a>(
        &self,
        model: &'a dyn PartialReflect,
    ) -> Result<&'a dyn PartialReflect, KeyPathError> {
        KeyPath::parse(&self.key_path)?.resolve(model)
    }

    /// Runs the cell configuration, if any, on `cell`.
    pub fn configure_cell(&self, cell: &mut PropertyCell) {
        if let Some(configure) = &self.cell_configuration {
            configure(cell);
        }
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.key_path == other.key_path
            && self.category == other.category
            && self.inspector == other.inspector
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_path.hash(state);
        self.category.hash(state);
        self.inspector.hash(state);
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.display_name, self.key_path)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("key_path", &self.key_path)
            .field("display_name", &self.display_name)
            .field("category", &self.category)
            .field("inspector", &self.inspector)
            .field("cell_configuration", &self.cell_configuration.is_some())
            .finish()
    }
}

/// Upper-cases the first character of every whitespace-delimited word and
/// lower-cases the rest, over the whole string.
///
/// `"user.name"` becomes `"User.name"`, `"backgroundColor"` becomes `"Backgroundcolor"`.
pub fn capitalize(text: &str) -> String {
    let mut capitalized = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            word_start = true;
            capitalized.push(ch);
        } else if word_start {
            word_start = false;
            capitalized.extend(ch.to_uppercase());
        } else {
            capitalized.extend(ch.to_lowercase());
        }
    }
    capitalized
}

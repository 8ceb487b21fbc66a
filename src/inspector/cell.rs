//! Row data handed to the inspector UI.
//!
//! A [`PropertySection`] holds the cells of one category; each [`PropertyCell`]
//! carries the label, the formatted value and the edit settings of one property.
//! Cell configuration callbacks receive the cell before it is returned, so they
//! can relabel, clamp, or hide it.

use bevy::prelude::*;
use bevy::reflect::ReflectRef;

use super::config::InspectorConfig;

/// Presentation of one property for a given model.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyCell {
    /// Key-path of the property this cell shows.
    pub key_path: String,
    /// Label shown next to the value.
    pub label: String,
    /// Formatted value, or `None` when the key-path did not resolve.
    pub value: Option<String>,
    /// Numeric value, when the resolved value is a supported number.
    pub numeric: Option<f64>,
    /// Whether the value can be edited in place.
    pub editable: bool,
    /// How fast dragging changes the value (units per pixel).
    pub drag_speed: f64,
    /// Number of decimal places for display.
    pub precision: usize,
    /// Minimum allowed value.
    pub min: Option<f64>,
    /// Maximum allowed value.
    pub max: Option<f64>,
    /// Hidden cells are dropped from their section.
    pub hidden: bool,
}

impl PropertyCell {
    /// Text to display for the value, using the configured placeholder when absent.
    pub fn display_value<'a>(&'a self, config: &'a InspectorConfig) -> &'a str {
        self.value
            .as_deref()
            .unwrap_or(config.missing_value_text.as_str())
    }
}

/// Cells of one category, in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySection {
    pub category: String,
    pub cells: Vec<PropertyCell>,
}

/// Builds a cell from a resolved (or absent) value, before any cell configuration runs.
pub(crate) fn build_cell(
    key_path: &str,
    label: &str,
    resolved: Option<&dyn PartialReflect>,
    config: &InspectorConfig,
) -> PropertyCell {
    let numeric = resolved.and_then(try_extract_numeric);
    let value = resolved.map(|reflected| {
        if let Some(number) = numeric {
            format_number(reflected, number, config.default_precision)
        } else {
            format_simple_value(reflected, config.max_inline_tuple_len)
                .unwrap_or_else(|| format!("[{}]", short_type_name(reflected)))
        }
    });

    PropertyCell {
        key_path: key_path.to_string(),
        label: label.to_string(),
        value,
        numeric,
        editable: numeric.is_some(),
        drag_speed: config.default_drag_speed,
        precision: config.default_precision,
        min: None,
        max: None,
        hidden: false,
    }
}

fn short_type_name(reflected: &dyn PartialReflect) -> String {
    reflected
        .get_represented_type_info()
        .map(|t| ShortName::from(t.type_path()).to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Integers print without decimals, floats with `precision` places.
fn format_number(reflected: &dyn PartialReflect, number: f64, precision: usize) -> String {
    if reflected.try_downcast_ref::<f32>().is_some() || reflected.try_downcast_ref::<f64>().is_some()
    {
        format!("{:.prec$}", number, prec = precision)
    } else {
        format!("{}", number)
    }
}

/// Tries to extract a numeric value from a reflected type.
/// Returns the value as f64 if it's a supported numeric type.
fn try_extract_numeric(reflected: &dyn PartialReflect) -> Option<f64> {
    if let Some(val) = reflected.try_downcast_ref::<f32>() {
        return Some(*val as f64);
    }
    if let Some(val) = reflected.try_downcast_ref::<f64>() {
        return Some(*val);
    }
    if let Some(val) = reflected.try_downcast_ref::<i32>() {
        return Some(*val as f64);
    }
    if let Some(val) = reflected.try_downcast_ref::<i64>() {
        return Some(*val as f64);
    }
    if let Some(val) = reflected.try_downcast_ref::<u32>() {
        return Some(*val as f64);
    }
    if let Some(val) = reflected.try_downcast_ref::<u64>() {
        return Some(*val as f64);
    }
    if let Some(val) = reflected.try_downcast_ref::<usize>() {
        return Some(*val as f64);
    }
    None
}

/// Tries to format a value as a simple string, returns None if it's a composite type.
fn format_simple_value(reflected: &dyn PartialReflect, max_inline_tuple_len: usize) -> Option<String> {
    if let Some(text) = reflected.try_downcast_ref::<String>() {
        return Some(text.clone());
    }
    if let Some(flag) = reflected.try_downcast_ref::<bool>() {
        return Some(flag.to_string());
    }

    match reflected.reflect_ref() {
        ReflectRef::Struct(_) | ReflectRef::TupleStruct(_) => None,
        ReflectRef::Enum(e) => {
            // Field-less variants read fine inline
            (e.field_len() == 0).then(|| e.variant_name().to_string())
        }
        ReflectRef::Tuple(t) => {
            if t.field_len() <= max_inline_tuple_len {
                let parts: Vec<String> = (0..t.field_len())
                    .filter_map(|i| t.field(i))
                    .filter_map(|field| format_simple_value(field, max_inline_tuple_len))
                    .collect();
                if parts.len() == t.field_len() {
                    return Some(format!("({})", parts.join(", ")));
                }
            }
            None
        }
        ReflectRef::List(l) => Some(format!("[{} items]", l.len())),
        ReflectRef::Array(a) => Some(format!("[{} items]", a.len())),
        ReflectRef::Map(m) => Some(format!("{{{} entries}}", m.len())),
        ReflectRef::Set(s) => Some(format!("{{{} items}}", s.len())),
        ReflectRef::Opaque(o) => Some(format!("{:?}", o)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Reflect)]
    struct Stats {
        health: f32,
        level: u32,
        title: String,
        pair: (u8, bool),
        items: Vec<u8>,
        mode: Mode,
    }

    #[derive(Reflect)]
    enum Mode {
        Idle,
    }

    fn stats() -> Stats {
        Stats {
            health: 12.3456,
            level: 4,
            title: "Knight".to_string(),
            pair: (1, true),
            items: vec![1, 2, 3],
            mode: Mode::Idle,
        }
    }

    fn cell_for(model: &Stats, field: &str) -> PropertyCell {
        let resolved = crate::inspector::KeyPath::parse(field)
            .ok()
            .and_then(|path| path.resolve(model).ok());
        build_cell(field, field, resolved, &InspectorConfig::default())
    }

    #[test]
    fn floats_use_configured_precision() {
        let cell = cell_for(&stats(), "health");
        assert_eq!(cell.value.as_deref(), Some("12.35"));
        assert!(cell.editable);
        assert_eq!(cell.precision, 2);
    }

    #[test]
    fn integers_print_without_decimals() {
        let cell = cell_for(&stats(), "level");
        assert_eq!(cell.value.as_deref(), Some("4"));
        assert_eq!(cell.numeric, Some(4.0));
    }

    #[test]
    fn strings_and_collections_are_summarized() {
        let model = stats();
        assert_eq!(cell_for(&model, "title").value.as_deref(), Some("Knight"));
        assert_eq!(cell_for(&model, "items").value.as_deref(), Some("[3 items]"));
        assert_eq!(cell_for(&model, "mode").value.as_deref(), Some("Idle"));
        assert!(!cell_for(&model, "title").editable);
    }

    #[test]
    fn small_tuples_are_inline() {
        let cell = cell_for(&stats(), "pair");
        assert_eq!(cell.value.as_deref(), Some("(1, true)"));
    }

    #[test]
    fn absent_value_uses_placeholder() {
        let config = InspectorConfig {
            missing_value_text: "n/a".to_string(),
            ..default()
        };
        let cell = cell_for(&stats(), "missing");
        assert_eq!(cell.value, None);
        assert_eq!(cell.display_value(&config), "n/a");
    }
}

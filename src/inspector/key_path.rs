//! Dotted key-path resolution over reflected values.
//!
//! A key-path such as `"user.address.city"` or `"scores.1"` is split on `.`
//! and walked one segment at a time through the [`ReflectRef`] of each value.
//! `Option` values along the way are looked through: `Some` continues with the
//! inner value, `None` ends the walk.

use bevy::prelude::*;
use bevy::reflect::{Map, ReflectKind, ReflectRef, VariantType};
use core::fmt;

/// Minimum Jaro-Winkler similarity for a field name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Why a key-path could not be resolved against a model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyPathError {
    #[error("key path is empty")]
    Empty,
    #[error("key path `{key_path}` has an empty segment at position {position}")]
    EmptySegment { key_path: String, position: usize },
    #[error("no field `{field}` on `{type_path}`{}", did_you_mean(.suggestion))]
    MissingField {
        field: String,
        type_path: String,
        suggestion: Option<String>,
    },
    #[error("index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("no entry for key `{key}`")]
    MissingKey { key: String },
    #[error("cannot access `{segment}`: value is None")]
    NilIntermediate { segment: String },
    #[error("resolved value is None")]
    NilValue,
    #[error("cannot access `{segment}` on a value of kind {kind:?}")]
    Unsupported { segment: String, kind: ReflectKind },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|name| format!(" (did you mean `{name}`?)"))
        .unwrap_or_default()
}

/// A segment in a key-path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPathSegment {
    /// Named struct field or string map key: e.g., "address"
    Named(String),
    /// Tuple field, list element or integer map key: e.g., 0, 1, 2
    Index(usize),
}

impl fmt::Display for KeyPathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPathSegment::Named(name) => f.write_str(name),
            KeyPathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A parsed dotted key-path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<KeyPathSegment>,
}

impl KeyPath {
    /// Splits `key_path` on `.`. Segments made only of ASCII digits become
    /// [`KeyPathSegment::Index`], everything else [`KeyPathSegment::Named`].
    pub fn parse(key_path: &str) -> Result<Self, KeyPathError> {
        if key_path.is_empty() {
            return Err(KeyPathError::Empty);
        }

        let segments = key_path
            .split('.')
            .enumerate()
            .map(|(position, raw)| {
                if raw.is_empty() {
                    return Err(KeyPathError::EmptySegment {
                        key_path: key_path.to_string(),
                        position,
                    });
                }
                if raw.bytes().all(|b| b.is_ascii_digit())
                    && let Ok(index) = raw.parse::<usize>()
                {
                    return Ok(KeyPathSegment::Index(index));
                }
                Ok(KeyPathSegment::Named(raw.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[KeyPathSegment] {
        &self.segments
    }

    /// Walks the path through `model`.
    ///
    /// Fails at the first segment that cannot be followed. A `None` anywhere
    /// on the path, including the final value, is a failure.
    pub fn resolve<'a>(
        &self,
        model: &'a dyn PartialReflect,
    ) -> Result<&'a dyn PartialReflect, KeyPathError> {
        let mut current = model;
        for segment in &self.segments {
            let container = unwrap_option(current).ok_or_else(|| KeyPathError::NilIntermediate {
                segment: segment.to_string(),
            })?;
            current = access(container, segment)?;
        }
        unwrap_option(current).ok_or(KeyPathError::NilValue)
    }
}

fn is_option(value: &dyn PartialReflect) -> bool {
    value
        .get_represented_type_info()
        .is_some_and(|info| info.type_path().starts_with("core::option::Option<"))
}

/// Looks through `Option`: returns the inner value of `Some`, `None` for `None`,
/// and any other value unchanged.
fn unwrap_option(value: &dyn PartialReflect) -> Option<&dyn PartialReflect> {
    if !is_option(value) {
        return Some(value);
    }
    let ReflectRef::Enum(e) = value.reflect_ref() else {
        return Some(value);
    };
    match e.variant_name() {
        "Some" => e.field_at(0).and_then(unwrap_option),
        _ => None,
    }
}

fn type_path_of(value: &dyn PartialReflect) -> String {
    value
        .get_represented_type_info()
        .map(|info| info.type_path().to_string())
        .unwrap_or_else(|| "?".to_string())
}

fn closest_name<'n>(target: &str, names: impl Iterator<Item = &'n str>) -> Option<String> {
    names
        .map(|name| (strsim::jaro_winkler(target, name), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, name)| name.to_string())
}

fn missing_field<'n>(
    value: &dyn PartialReflect,
    field: &str,
    candidates: impl Iterator<Item = &'n str>,
) -> KeyPathError {
    KeyPathError::MissingField {
        field: field.to_string(),
        type_path: type_path_of(value),
        suggestion: closest_name(field, candidates),
    }
}

/// Follows a single segment from `value`.
fn access<'a>(
    value: &'a dyn PartialReflect,
    segment: &KeyPathSegment,
) -> Result<&'a dyn PartialReflect, KeyPathError> {
    match (value.reflect_ref(), segment) {
        (ReflectRef::Struct(s), KeyPathSegment::Named(name)) => s.field(name).ok_or_else(|| {
            missing_field(value, name, (0..s.field_len()).filter_map(|i| s.name_at(i)))
        }),
        (ReflectRef::TupleStruct(ts), KeyPathSegment::Index(index)) => {
            ts.field(*index).ok_or(KeyPathError::IndexOutOfBounds {
                index: *index,
                len: ts.field_len(),
            })
        }
        (ReflectRef::Tuple(t), KeyPathSegment::Index(index)) => {
            t.field(*index).ok_or(KeyPathError::IndexOutOfBounds {
                index: *index,
                len: t.field_len(),
            })
        }
        (ReflectRef::List(l), KeyPathSegment::Index(index)) => {
            l.get(*index).ok_or(KeyPathError::IndexOutOfBounds {
                index: *index,
                len: l.len(),
            })
        }
        (ReflectRef::Array(a), KeyPathSegment::Index(index)) => {
            a.get(*index).ok_or(KeyPathError::IndexOutOfBounds {
                index: *index,
                len: a.len(),
            })
        }
        (ReflectRef::Map(m), segment) => map_entry(m, segment),
        (ReflectRef::Enum(e), KeyPathSegment::Named(name))
            if matches!(e.variant_type(), VariantType::Struct) =>
        {
            e.field(name).ok_or_else(|| {
                missing_field(value, name, (0..e.field_len()).filter_map(|i| e.name_at(i)))
            })
        }
        (ReflectRef::Enum(e), KeyPathSegment::Index(index))
            if matches!(e.variant_type(), VariantType::Tuple) =>
        {
            e.field_at(*index).ok_or(KeyPathError::IndexOutOfBounds {
                index: *index,
                len: e.field_len(),
            })
        }
        (_, segment) => Err(KeyPathError::Unsupported {
            segment: segment.to_string(),
            kind: value.reflect_kind(),
        }),
    }
}

/// Looks up a map entry. Named segments are `String` keys; numeric segments
/// are tried as the common integer key types, then as a `String`.
fn map_entry<'a>(
    map: &'a dyn Map,
    segment: &KeyPathSegment,
) -> Result<&'a dyn PartialReflect, KeyPathError> {
    let found = match segment {
        KeyPathSegment::Named(name) => map.get(name),
        KeyPathSegment::Index(index) => {
            let index = *index;
            map.get(&index)
                .or_else(|| u32::try_from(index).ok().and_then(|k| map.get(&k)))
                .or_else(|| map.get(&(index as u64)))
                .or_else(|| i32::try_from(index).ok().and_then(|k| map.get(&k)))
                .or_else(|| map.get(&index.to_string()))
        }
    };
    found.ok_or_else(|| KeyPathError::MissingKey {
        key: segment.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Reflect)]
    struct Address {
        city: String,
        zip: Option<u32>,
    }

    #[derive(Reflect)]
    struct Position(f32, f32);

    #[derive(Reflect)]
    enum Shape {
        Circle { radius: f32 },
        Square(f32),
    }

    #[derive(Reflect)]
    struct User {
        name: String,
        address: Option<Address>,
        scores: Vec<u32>,
        position: Position,
        tags: HashMap<String, String>,
        shape: Shape,
    }

    fn user() -> User {
        User {
            name: "Ada".to_string(),
            address: Some(Address {
                city: "London".to_string(),
                zip: None,
            }),
            scores: vec![3, 7],
            position: Position(1.5, -2.0),
            tags: HashMap::from([("team".to_string(), "core".to_string())]),
            shape: Shape::Circle { radius: 4.0 },
        }
    }

    fn resolve<'a>(model: &'a User, path: &str) -> Result<&'a dyn PartialReflect, KeyPathError> {
        KeyPath::parse(path)?.resolve(model)
    }

    #[test]
    fn parse_splits_named_and_index_segments() {
        let path = KeyPath::parse("scores.1.value").unwrap();
        assert_eq!(
            path.segments(),
            &[
                KeyPathSegment::Named("scores".to_string()),
                KeyPathSegment::Index(1),
                KeyPathSegment::Named("value".to_string()),
            ]
        );
    }

    #[test]
    fn parse_rejects_empty_paths_and_segments() {
        assert_eq!(KeyPath::parse(""), Err(KeyPathError::Empty));
        assert_eq!(
            KeyPath::parse("a..b"),
            Err(KeyPathError::EmptySegment {
                key_path: "a..b".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn resolves_shallow_field() {
        let model = user();
        let name = resolve(&model, "name").unwrap();
        assert_eq!(name.try_downcast_ref::<String>().map(String::as_str), Some("Ada"));
    }

    #[test]
    fn looks_through_some_intermediate() {
        let model = user();
        let city = resolve(&model, "address.city").unwrap();
        assert_eq!(city.try_downcast_ref::<String>().map(String::as_str), Some("London"));
    }

    #[test]
    fn none_intermediate_is_nil() {
        let mut model = user();
        model.address = None;
        assert_eq!(
            resolve(&model, "address.city").err(),
            Some(KeyPathError::NilIntermediate {
                segment: "city".to_string()
            })
        );
    }

    #[test]
    fn none_leaf_is_nil_value() {
        let model = user();
        assert_eq!(resolve(&model, "address.zip").err(), Some(KeyPathError::NilValue));
    }

    #[test]
    fn indexes_lists_tuple_structs_and_maps() {
        let model = user();
        assert_eq!(
            resolve(&model, "scores.1").unwrap().try_downcast_ref::<u32>(),
            Some(&7)
        );
        assert_eq!(
            resolve(&model, "position.0").unwrap().try_downcast_ref::<f32>(),
            Some(&1.5)
        );
        assert_eq!(
            resolve(&model, "tags.team")
                .unwrap()
                .try_downcast_ref::<String>()
                .map(String::as_str),
            Some("core")
        );
        assert_eq!(
            resolve(&model, "scores.5").err(),
            Some(KeyPathError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(
            resolve(&model, "tags.owner").err(),
            Some(KeyPathError::MissingKey {
                key: "owner".to_string()
            })
        );
    }

    #[test]
    fn reads_fields_of_the_active_enum_variant() {
        let mut model = user();
        assert_eq!(
            resolve(&model, "shape.radius").unwrap().try_downcast_ref::<f32>(),
            Some(&4.0)
        );

        model.shape = Shape::Square(2.0);
        assert_eq!(
            resolve(&model, "shape.0").unwrap().try_downcast_ref::<f32>(),
            Some(&2.0)
        );
        assert!(resolve(&model, "shape.radius").is_err());
    }

    #[test]
    fn missing_field_suggests_close_name() {
        let model = user();
        match resolve(&model, "adress.city") {
            Err(KeyPathError::MissingField {
                field, suggestion, ..
            }) => {
                assert_eq!(field, "adress");
                assert_eq!(suggestion.as_deref(), Some("address"));
            }
            other => panic!("expected MissingField, got {:?}", other.err()),
        }
    }

    #[test]
    fn segment_on_scalar_is_unsupported() {
        let model = user();
        assert!(matches!(
            resolve(&model, "name.length"),
            Err(KeyPathError::Unsupported { .. })
        ));
    }

    #[test]
    fn error_messages_mention_suggestion() {
        let err = KeyPathError::MissingField {
            field: "nmae".to_string(),
            type_path: "User".to_string(),
            suggestion: Some("name".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "no field `nmae` on `User` (did you mean `name`?)"
        );
    }
}

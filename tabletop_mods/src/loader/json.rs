//! Typed accessors over parsed mod documents
//!
//! Optional fields follow one rule: absent keeps the default silently,
//! present but mis-shaped is reported and keeps the default.

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde_json::{Map, Value};
use crate::error::{Error, Result};
use crate::tabletop_warn;

/// A JSON object
pub(crate) type Object = Map<String, Value>;

/// Rotation as authored: a numeric rotation or an orientation name
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Rotation {
    Explicit(Quat),
    Named(String),
}

pub(crate) fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| Error::Parse(format!("{} must be an object", what)))
}

/// A required string field
pub(crate) fn required_str<'a>(object: &'a Object, key: &str) -> Result<&'a str> {
    match object.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(Error::Parse(format!("'{}' must be a string, got {}", key, other))),
        None => Err(Error::Parse(format!("missing key '{}'", key))),
    }
}

/// An optional field read through `convert`
///
/// `None` when the key is absent or its value does not convert; the latter
/// is logged under `source` as a parse error for that field only.
pub(crate) fn optional<'a, T>(
    source: &str,
    object: &'a Object,
    key: &str,
    expected: &str,
    convert: impl FnOnce(&'a Value) -> Option<T>,
) -> Option<T> {
    let value = object.get(key)?;
    let converted = convert(value);
    if converted.is_none() {
        let err = Error::Parse(format!("'{}' must be {}, got {}", key, expected, value));
        tabletop_warn!(source, "{}; using default", err);
    }
    converted
}

pub(crate) fn to_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

pub(crate) fn to_f32(value: &Value) -> Option<f32> {
    value.as_f64().map(|v| v as f32)
}

pub(crate) fn to_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}

/// Every element of a numeric array, or `None` if any is not a number
pub(crate) fn to_numbers(value: &Value) -> Option<Vec<f32>> {
    value.as_array()?.iter().map(to_f32).collect()
}

pub(crate) fn to_strings(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(to_string).collect()
}

pub(crate) fn to_vec2(value: &Value) -> Option<Vec2> {
    match to_numbers(value)?.as_slice() {
        [x, y] => Some(Vec2::new(*x, *y)),
        _ => None,
    }
}

/// A 3-element array, or a single number as a uniform vector
pub(crate) fn to_size(value: &Value) -> Option<Vec3> {
    if let Some(uniform) = to_f32(value) {
        return Some(Vec3::splat(uniform));
    }
    match to_numbers(value)?.as_slice() {
        [x, y, z] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

/// Type-sniffed rotation
///
/// Arrays are numeric: three Euler angles in degrees (applied Z, X, then Y)
/// or four raw quaternion components `[x, y, z, w]`. Anything else names an
/// orientation.
pub(crate) fn to_rotation(value: &Value) -> Option<Rotation> {
    if value.is_array() {
        return match to_numbers(value)?.as_slice() {
            [x, y, z] => Some(Rotation::Explicit(Quat::from_euler(
                EulerRot::YXZ,
                y.to_radians(),
                x.to_radians(),
                z.to_radians(),
            ))),
            [x, y, z, w] => {
                let quat = Quat::from_xyzw(*x, *y, *z, *w);
                (quat.length_squared() > 0.0).then(|| Rotation::Explicit(quat.normalize()))
            }
            _ => None,
        };
    }
    match value {
        Value::String(name) => Some(Rotation::Named(name.clone())),
        other => Some(Rotation::Named(other.to_string())),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

//! Typed readers over untyped event data maps.
//!
//! Event data arrives as a JSON object. The `opt_*` readers return `None`
//! (or the supplied default) for absent keys and type mismatches alike, so
//! callers can treat "wrong shape" as "no data". The `require_*` readers
//! return a [`DataError`] describing the mismatch instead.

use serde_json::{Map, Value};

use crate::errors::{DataError, Result};

/// A string-keyed JSON object carried as event data or shared state.
pub type DataMap = Map<String, Value>;

/// Read a string value.
pub fn opt_str<'a>(map: &'a DataMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Read an owned string value, or `default` when absent or not a string.
pub fn opt_string(map: &DataMap, key: &str, default: Option<&str>) -> Option<String> {
    opt_str(map, key).or(default).map(str::to_owned)
}

/// Read a boolean value, or `default` when absent or not a boolean.
pub fn opt_bool(map: &DataMap, key: &str, default: bool) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Read a nested object.
pub fn opt_map<'a>(map: &'a DataMap, key: &str) -> Option<&'a DataMap> {
    map.get(key).and_then(Value::as_object)
}

/// Read a list in which every element is a string.
///
/// A list containing any non-string element yields `None`, not a partial list.
pub fn opt_string_list(map: &DataMap, key: &str) -> Option<Vec<String>> {
    map.get(key)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect()
}

/// Read a list in which every element is an object.
///
/// A list containing any non-object element yields `None`.
pub fn opt_list_of_maps<'a>(map: &'a DataMap, key: &str) -> Option<Vec<&'a DataMap>> {
    map.get(key)?.as_array()?.iter().map(Value::as_object).collect()
}

/// Read a required nested object.
pub fn require_map<'a>(map: &'a DataMap, key: &str) -> Result<&'a DataMap> {
    match map.get(key) {
        None | Some(Value::Null) => Err(DataError::missing(key)),
        Some(v) => v
            .as_object()
            .ok_or_else(|| DataError::wrong_type(key, "an object")),
    }
}

/// Read the object at `index` of a required array.
pub fn require_map_at<'a>(map: &'a DataMap, key: &str, index: usize) -> Result<&'a DataMap> {
    let array = match map.get(key) {
        None | Some(Value::Null) => return Err(DataError::missing(key)),
        Some(v) => v
            .as_array()
            .ok_or_else(|| DataError::wrong_type(key, "an array"))?,
    };
    array
        .get(index)
        .ok_or_else(|| DataError::OutOfBounds {
            key: key.to_owned(),
            index,
        })?
        .as_object()
        .ok_or_else(|| DataError::wrong_type(key, "an array of objects"))
}

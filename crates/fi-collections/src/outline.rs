//! Dotted-path extraction over nested data.
//!
//! An [`Outline`] wraps an object or array and reads values by path, e.g.
//! `"author.name"` or `"items.0.title"`. Numeric segments index into
//! arrays; every other segment is an object key.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::OutlineError;

/// Read-only view over a nested structure.
///
/// # Example
///
/// ```
/// use fi_collections::Outline;
/// use serde_json::json;
///
/// let outline = Outline::new(json!({
///     "path": { "path2": "value2" },
///     "list": [{ "name": "first" }, { "name": "second" }]
/// })).unwrap();
///
/// assert_eq!(outline.extract("path.path2").unwrap(), Some(&json!("value2")));
/// assert_eq!(outline.extract("list.1.name").unwrap(), Some(&json!("second")));
/// assert!(outline.extract("path.missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    root: Value,
}

impl Outline {
    /// Wraps a structure. The root must be an object or an array.
    pub fn new(root: Value) -> Result<Self, OutlineError> {
        match root {
            Value::Object(_) | Value::Array(_) => Ok(Outline { root }),
            other => Err(OutlineError::NotAStructure(kind_name(&other))),
        }
    }

    /// Builds an outline from any serializable data.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, OutlineError> {
        Outline::new(serde_json::to_value(data)?)
    }

    /// Returns `true` if the wrapped structure has no entries.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => true,
        }
    }

    /// Returns the wrapped structure.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consumes the outline, returning the wrapped structure.
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// Looks up the value at `path`.
    ///
    /// Returns `Ok(None)` when the structure is empty, or when a `null` is
    /// reached before the last segment. A segment that is missing from its
    /// container, or that is applied to a scalar, is an
    /// [`OutlineError::PathNotFound`].
    pub fn extract(&self, path: &str) -> Result<Option<&Value>, OutlineError> {
        if self.is_empty() {
            log::trace!("extract '{}' on an empty outline", path);
            return Ok(None);
        }

        let mut segments = path.split('.').peekable();
        let mut current = &self.root;

        while let Some(segment) = segments.next() {
            let child = lookup(current, segment)
                .ok_or_else(|| OutlineError::path_not_found(path, segment))?;

            if segments.peek().is_none() {
                return Ok(Some(child));
            }
            if child.is_null() {
                log::trace!("extract '{}' reached null at segment '{}'", path, segment);
                return Ok(None);
            }
            current = child;
        }

        // `split` always yields at least one segment.
        Ok(None)
    }

    /// Looks up the value at `path` and deserializes it into `T`.
    pub fn extract_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, OutlineError> {
        match self.extract(path)? {
            Some(value) => Ok(Some(T::deserialize(value)?)),
            None => Ok(None),
        }
    }
}

impl From<Map<String, Value>> for Outline {
    fn from(map: Map<String, Value>) -> Self {
        Outline {
            root: Value::Object(map),
        }
    }
}

impl From<Vec<Value>> for Outline {
    fn from(items: Vec<Value>) -> Self {
        Outline {
            root: Value::Array(items),
        }
    }
}

fn lookup<'a>(container: &'a Value, segment: &str) -> Option<&'a Value> {
    match container {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Parses a canonical array index: ASCII digits, no sign, no leading zero.
fn array_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn nested() -> Outline {
        Outline::new(json!({
            "path": "value",
            "path2": [
                { "path3": ["value3"] },
                ["path3"],
                ["path3"]
            ]
        }))
        .unwrap()
    }

    #[test]
    fn rejects_scalar_roots() {
        assert!(matches!(
            Outline::new(Value::Null),
            Err(OutlineError::NotAStructure("null"))
        ));
        assert!(matches!(
            Outline::new(json!("text")),
            Err(OutlineError::NotAStructure("string"))
        ));
    }

    #[test]
    fn empty_returns_none_for_any_path() {
        let outline = Outline::new(json!({})).unwrap();
        assert_eq!(outline.extract("").unwrap(), None);
        assert_eq!(outline.extract("anything").unwrap(), None);

        let outline = Outline::from(Vec::new());
        assert_eq!(outline.extract("0").unwrap(), None);
    }

    #[test]
    fn one_level() {
        assert_eq!(nested().extract("path").unwrap(), Some(&json!("value")));
    }

    #[test]
    fn several_levels() {
        let outline = Outline::new(json!({
            "path": {
                "path2": "value2",
                "path3": { "path4": { "path5": "theValue" } }
            }
        }))
        .unwrap();

        assert_eq!(
            outline.extract("path.path3.path4.path5").unwrap(),
            Some(&json!("theValue"))
        );
    }

    #[test]
    fn numeric_segment_indexes_arrays() {
        assert_eq!(
            nested().extract("path2.0.path3").unwrap(),
            Some(&json!(["value3"]))
        );
        assert_eq!(nested().extract("path2.1.0").unwrap(), Some(&json!("path3")));
    }

    #[test]
    fn returns_containers() {
        assert_eq!(
            nested().extract("path2").unwrap(),
            Some(&json!([{ "path3": ["value3"] }, ["path3"], ["path3"]]))
        );
    }

    #[test]
    fn non_canonical_indexes_miss() {
        let outline = Outline::new(json!({ "list": ["a", "b"] })).unwrap();
        assert_eq!(outline.extract("list.1").unwrap(), Some(&json!("b")));
        assert_eq!(outline.extract("list.0").unwrap(), Some(&json!("a")));

        for path in ["list.+1", "list.01", "list.-1", "list. 1", "list."] {
            assert!(
                matches!(outline.extract(path), Err(OutlineError::PathNotFound { .. })),
                "{path} should not resolve"
            );
        }
    }

    #[test]
    fn missing_segment_is_an_error() {
        let err = nested().extract("path2.7.path3").unwrap_err();
        match err {
            OutlineError::PathNotFound { path, segment } => {
                assert_eq!(path, "path2.7.path3");
                assert_eq!(segment, "7");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn descending_into_scalar_is_an_error() {
        assert!(matches!(
            nested().extract("path.deeper"),
            Err(OutlineError::PathNotFound { .. })
        ));
    }

    #[test]
    fn null_midway_is_absent() {
        let outline = Outline::new(json!({ "a": null, "b": { "c": null } })).unwrap();
        assert_eq!(outline.extract("a.b").unwrap(), None);
        assert_eq!(outline.extract("b.c").unwrap(), Some(&Value::Null));
    }

    #[test]
    fn extract_as_deserializes() {
        let outline = Outline::new(json!({ "limits": { "max": 10, "tags": ["a", "b"] } })).unwrap();
        assert_eq!(outline.extract_as::<u32>("limits.max").unwrap(), Some(10));
        assert_eq!(
            outline.extract_as::<Vec<String>>("limits.tags").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(matches!(
            outline.extract_as::<u32>("limits.tags"),
            Err(OutlineError::Serialization(_))
        ));
    }

    #[test]
    fn from_serialize_map() {
        let config: BTreeMap<&str, u8> = [("retries", 3), ("workers", 8)].into_iter().collect();

        let outline = Outline::from_serialize(&config).unwrap();
        assert_eq!(outline.extract("retries").unwrap(), Some(&json!(3)));
        assert!(!outline.is_empty());
    }

    #[test]
    fn from_serialize_scalar_is_rejected() {
        assert!(matches!(
            Outline::from_serialize(&42u8),
            Err(OutlineError::NotAStructure("number"))
        ));
    }

    #[test]
    fn value_access() {
        let root = json!({ "a": [1, 2] });
        let outline = Outline::new(root.clone()).unwrap();

        assert_eq!(outline.as_value(), &root);
        assert_eq!(outline.into_inner(), root);
    }
}

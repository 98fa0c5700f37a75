//! Loosely-typed element values.
//!
//! [`Element`] carries any value whose type is only known at runtime:
//! scalars, arrays and shared objects. A `Collection<Element>` relies
//! entirely on the runtime guard, which is what configuration-driven or
//! otherwise untyped input needs.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::descriptor::{Member, PrimitiveKind, TypeDescriptor};

/// A nominally-typed object that can be held by an [`Element`].
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use fi_collections::{Element, Object};
///
/// #[derive(Debug)]
/// struct Point { x: i64, y: i64 }
///
/// impl Object for Point {
///     fn class_name(&self) -> &'static str {
///         "Point"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let element = Element::object(Point { x: 1, y: 2 });
/// assert_eq!(element.downcast_ref::<Point>().map(|p| p.x + p.y), Some(3));
/// ```
pub trait Object: Any + fmt::Debug {
    /// The object's own type name.
    fn class_name(&self) -> &'static str;

    /// Supertypes and contracts the object satisfies.
    fn contracts(&self) -> &[&'static str] {
        &[]
    }

    /// Upcast used for downcasting back to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Runtime value of any kind.
#[derive(Debug, Clone)]
pub enum Element {
    /// No value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Double(f64),
    /// String value.
    String(String),
    /// Ordered sequence of elements.
    Array(Vec<Element>),
    /// Shared object, compared by identity.
    Object(Rc<dyn Object>),
}

impl Element {
    /// Wraps an object.
    pub fn object<O: Object>(object: O) -> Self {
        Element::Object(Rc::new(object))
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    /// Returns `true` if this is an `Object`.
    pub fn is_object(&self) -> bool {
        matches!(self, Element::Object(_))
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Element::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the floating point value, if present.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the array items, if present.
    pub fn as_array(&self) -> Option<&[Element]> {
        match self {
            Element::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the wrapped object as `O`, if it is one.
    pub fn downcast_ref<O: Object>(&self) -> Option<&O> {
        match self {
            Element::Object(object) => object.as_any().downcast_ref::<O>(),
            _ => None,
        }
    }
}

impl Member for Element {
    fn descriptor(&self) -> TypeDescriptor {
        match self {
            Element::Null => PrimitiveKind::Null.into(),
            Element::Bool(_) => PrimitiveKind::Boolean.into(),
            Element::Integer(_) => PrimitiveKind::Integer.into(),
            Element::Double(_) => PrimitiveKind::Double.into(),
            Element::String(_) => PrimitiveKind::String.into(),
            Element::Array(_) => PrimitiveKind::Array.into(),
            Element::Object(object) => TypeDescriptor::nominal(object.class_name()),
        }
    }

    fn contracts(&self) -> &[&'static str] {
        match self {
            Element::Object(object) => object.contracts(),
            _ => &[],
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Null, Element::Null) => true,
            (Element::Bool(a), Element::Bool(b)) => a == b,
            (Element::Integer(a), Element::Integer(b)) => a == b,
            (Element::Double(a), Element::Double(b)) => a == b,
            (Element::String(a), Element::String(b)) => a == b,
            (Element::Array(a), Element::Array(b)) => a == b,
            (Element::Object(a), Element::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Bool(b)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Integer(n as i64)
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Integer(n)
    }
}

impl From<u32> for Element {
    fn from(n: u32) -> Self {
        Element::Integer(n as i64)
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Double(n)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::String(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::String(s)
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(items: Vec<T>) -> Self {
        Element::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map_or(Element::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Gadget;

    impl Object for Gadget {
        fn class_name(&self) -> &'static str {
            "Gadget"
        }

        fn contracts(&self) -> &[&'static str] {
            &["Device"]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn scalar_descriptors() {
        assert_eq!(Element::Null.descriptor(), PrimitiveKind::Null.into());
        assert_eq!(Element::from(true).descriptor(), PrimitiveKind::Boolean.into());
        assert_eq!(Element::from(3).descriptor(), PrimitiveKind::Integer.into());
        assert_eq!(Element::from(3.5).descriptor(), PrimitiveKind::Double.into());
        assert_eq!(Element::from("x").descriptor(), PrimitiveKind::String.into());
        assert_eq!(Element::from(vec![1, 2]).descriptor(), PrimitiveKind::Array.into());
    }

    #[test]
    fn object_descriptor_and_contracts() {
        let gadget = Element::object(Gadget);
        assert_eq!(gadget.descriptor(), TypeDescriptor::nominal("Gadget"));
        assert!(gadget.is_a(&TypeDescriptor::nominal("Device")));
        assert!(!gadget.is_a(&TypeDescriptor::nominal("Widget")));
        assert!(!gadget.is_a(&PrimitiveKind::String.into()));
    }

    #[test]
    fn accessors() {
        assert_eq!(Element::from(7).as_i64(), Some(7));
        assert_eq!(Element::from(7).as_str(), None);
        assert_eq!(Element::from("hi").as_str(), Some("hi"));
        assert_eq!(Element::from(false).as_bool(), Some(false));
        assert_eq!(Element::from(0.5).as_f64(), Some(0.5));
        assert_eq!(Element::from(vec!["a"]).as_array().map(<[_]>::len), Some(1));
        assert!(Element::from(None::<i64>).is_null());
    }

    #[test]
    fn objects_compare_by_identity() {
        let gadget = Element::object(Gadget);
        assert_eq!(gadget, gadget.clone());
        assert_ne!(gadget, Element::object(Gadget));
    }

    #[test]
    fn downcast() {
        let gadget = Element::object(Gadget);
        assert!(gadget.is_object());
        assert!(!Element::from(1).is_object());
        assert!(gadget.downcast_ref::<Gadget>().is_some());
        assert!(Element::from(1).downcast_ref::<Gadget>().is_none());
    }
}

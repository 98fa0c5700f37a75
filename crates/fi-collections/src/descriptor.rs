//! Runtime type descriptors and the membership trait.
//!
//! A [`TypeDescriptor`] names what a collection may hold: either a nominal
//! type (a struct name, or a contract several types agree to satisfy) or a
//! [`PrimitiveKind`]. The [`Member`] trait reports the runtime descriptor of
//! a value and decides whether it satisfies a declared one.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `true` / `false`.
    Boolean,
    /// Any integer width, signed or unsigned.
    Integer,
    /// Floating point.
    Double,
    /// Text.
    String,
    /// Ordered sequence.
    Array,
    /// The absence of a value.
    Null,
}

impl PrimitiveKind {
    /// Returns the canonical name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::Array => "array",
            PrimitiveKind::Null => "NULL",
        }
    }

    /// Parses a kind name, accepting the canonical names and common aliases.
    ///
    /// ```
    /// use fi_collections::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::from_name("int"), Some(PrimitiveKind::Integer));
    /// assert_eq!(PrimitiveKind::from_name("User"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boolean" | "bool" => Some(PrimitiveKind::Boolean),
            "integer" | "int" => Some(PrimitiveKind::Integer),
            "double" | "float" => Some(PrimitiveKind::Double),
            "string" => Some(PrimitiveKind::String),
            "array" => Some(PrimitiveKind::Array),
            "NULL" | "null" => Some(PrimitiveKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies the element type a collection accepts.
///
/// # Example
///
/// ```
/// use fi_collections::{PrimitiveKind, TypeDescriptor};
///
/// assert_eq!(
///     TypeDescriptor::parse("string"),
///     TypeDescriptor::primitive(PrimitiveKind::String)
/// );
/// assert_eq!(TypeDescriptor::parse("User"), TypeDescriptor::nominal("User"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A named type or contract.
    Nominal(Cow<'static, str>),
    /// A primitive value kind.
    Primitive(PrimitiveKind),
}

impl TypeDescriptor {
    /// Creates a nominal descriptor.
    ///
    /// A name that is also a primitive kind name resolves to that kind, so
    /// `nominal("string")` accepts strings.
    pub fn nominal(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match PrimitiveKind::from_name(&name) {
            Some(kind) => TypeDescriptor::Primitive(kind),
            None => TypeDescriptor::Nominal(name),
        }
    }

    /// Creates a primitive descriptor.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }

    /// Resolves a descriptor from its name.
    ///
    /// Names of primitive kinds resolve to [`TypeDescriptor::Primitive`];
    /// every other name is taken as nominal.
    pub fn parse(name: &str) -> Self {
        match PrimitiveKind::from_name(name) {
            Some(kind) => TypeDescriptor::Primitive(kind),
            None => TypeDescriptor::Nominal(Cow::Owned(name.to_string())),
        }
    }

    /// Returns the runtime descriptor of `value`.
    pub fn of<T: Member + ?Sized>(value: &T) -> Self {
        value.descriptor()
    }

    /// Returns the descriptor's name.
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Nominal(name) => name,
            TypeDescriptor::Primitive(kind) => kind.name(),
        }
    }

    /// Returns the primitive kind this descriptor names, if any.
    ///
    /// A `Nominal` built directly from a primitive kind name counts.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            TypeDescriptor::Primitive(kind) => Some(*kind),
            TypeDescriptor::Nominal(name) => PrimitiveKind::from_name(name),
        }
    }

    /// Returns `true` if this descriptor names a primitive kind.
    pub fn is_primitive(&self) -> bool {
        self.primitive_kind().is_some()
    }

    /// Returns `true` if `value` may be stored under this descriptor.
    pub fn satisfied_by<T: Member + ?Sized>(&self, value: &T) -> bool {
        value.is_a(self)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }
}

/// A value that can be stored in a [`Collection`](crate::Collection).
///
/// # Manual Implementation
///
/// ```
/// use fi_collections::{Member, TypeDescriptor};
///
/// struct Admin;
///
/// impl Member for Admin {
///     fn descriptor(&self) -> TypeDescriptor {
///         TypeDescriptor::nominal("Admin")
///     }
///
///     fn contracts(&self) -> &[&'static str] {
///         &["User", "Auditable"]
///     }
/// }
///
/// assert!(Admin.is_a(&TypeDescriptor::nominal("Admin")));
/// assert!(Admin.is_a(&TypeDescriptor::nominal("Auditable")));
/// assert!(!Admin.is_a(&TypeDescriptor::nominal("Guest")));
/// ```
pub trait Member {
    /// Returns the runtime type of this value.
    fn descriptor(&self) -> TypeDescriptor;

    /// Returns the nominal supertypes and contracts this value satisfies.
    ///
    /// Only consulted for nominal descriptors; primitive kinds always
    /// require an exact match.
    fn contracts(&self) -> &[&'static str] {
        &[]
    }

    /// Returns `true` if this value satisfies `declared`.
    fn is_a(&self, declared: &TypeDescriptor) -> bool {
        let actual = self.descriptor();
        if actual == *declared {
            return true;
        }
        match (declared.primitive_kind(), declared) {
            (Some(kind), _) => actual == TypeDescriptor::Primitive(kind),
            (None, TypeDescriptor::Nominal(name)) => self.contracts().contains(&name.as_ref()),
            (None, TypeDescriptor::Primitive(_)) => false,
        }
    }
}

macro_rules! primitive_member {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Member for $ty {
                fn descriptor(&self) -> TypeDescriptor {
                    TypeDescriptor::Primitive(PrimitiveKind::$kind)
                }
            }
        )+
    };
}

primitive_member!(Boolean => bool);
primitive_member!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
primitive_member!(Double => f32, f64);
primitive_member!(String => str, String);

impl<T> Member for Vec<T> {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::Primitive(PrimitiveKind::Array)
    }
}

impl<T: Member> Member for Option<T> {
    fn descriptor(&self) -> TypeDescriptor {
        match self {
            Some(value) => value.descriptor(),
            None => TypeDescriptor::Primitive(PrimitiveKind::Null),
        }
    }

    fn contracts(&self) -> &[&'static str] {
        match self {
            Some(value) => value.contracts(),
            None => &[],
        }
    }

    fn is_a(&self, declared: &TypeDescriptor) -> bool {
        match self {
            Some(value) => value.is_a(declared),
            None => declared.primitive_kind() == Some(PrimitiveKind::Null),
        }
    }
}

// Smart pointers and references are transparent to the guard.
macro_rules! delegate_member {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Member + ?Sized> Member for $ptr {
                fn descriptor(&self) -> TypeDescriptor {
                    (**self).descriptor()
                }

                fn contracts(&self) -> &[&'static str] {
                    (**self).contracts()
                }

                fn is_a(&self, declared: &TypeDescriptor) -> bool {
                    (**self).is_a(declared)
                }
            }
        )+
    };
}

delegate_member!(&T, Box<T>, Rc<T>, Arc<T>);

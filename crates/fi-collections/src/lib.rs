//! Homogeneous, type-guarded collections with a functional API.
//!
//! A [`Collection`] holds elements of one declared [`TypeDescriptor`] and
//! exposes a small transform algebra:
//!
//! - `append` / `append_all` - guarded insertion
//! - `each` - visit in order, chainable
//! - `map` - transform, inferring the result type from the first output
//! - `filter` - keep matching elements, same declared type
//! - `get_by` - first matching element
//! - `reduce` - left fold
//! - `to_array` / `to_array_with` - export the elements
//!
//! # Quick Start
//!
//! ```rust
//! use fi_collections::{Collection, CollectionError, Member, TypeDescriptor};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Task {
//!     name: String,
//!     priority: i64,
//! }
//!
//! impl Member for Task {
//!     fn descriptor(&self) -> TypeDescriptor {
//!         TypeDescriptor::nominal("Task")
//!     }
//! }
//!
//! let tasks = Collection::collect(vec![
//!     Task { name: "Write docs".into(), priority: 3 },
//!     Task { name: "Fix bug".into(), priority: 5 },
//! ])
//! .unwrap();
//!
//! let urgent = tasks.filter(|t| t.priority > 4);
//! assert_eq!(urgent.count(), 1);
//! assert_eq!(urgent.get_type(), &TypeDescriptor::nominal("Task"));
//!
//! let found = tasks.get_by(|t| t.name == "Fix bug").unwrap();
//! assert_eq!(found.priority, 5);
//! assert_eq!(tasks.get_by(|t| t.priority > 9), Err(CollectionError::NotFound));
//! ```
//!
//! # Type Guard
//!
//! Every insertion checks the element against the declared descriptor:
//!
//! ```text
//! declared Primitive(kind)  → element kind must equal `kind`
//! declared Nominal(name)    → element type is `name`, or lists `name`
//!                             among its contracts (supertypes, interfaces)
//! ```
//!
//! For a concrete `T` the guard only fails when the collection was declared
//! with a descriptor other than `T`'s. With [`Element`], whose kind varies
//! per value, the guard is what keeps the collection homogeneous:
//!
//! ```rust
//! use fi_collections::{Collection, Element, PrimitiveKind};
//!
//! let mut numbers = Collection::of_type(PrimitiveKind::Integer);
//! numbers.append(Element::from(1)).unwrap();
//! assert!(numbers.append(Element::from("two")).is_err());
//! assert_eq!(numbers.count(), 1);
//! ```
//!
//! # Features
//!
//! - **`outline`** (default) - Enable [`Outline`], dotted-path extraction
//!   over nested `serde_json` data

mod collection;
mod descriptor;
mod element;
mod error;
#[cfg(feature = "outline")]
mod outline;

// Re-export public API
pub use collection::Collection;
pub use descriptor::{Member, PrimitiveKind, TypeDescriptor};
pub use element::{Element, Object};
pub use error::{CollectionError, Result};

#[cfg(feature = "outline")]
pub use error::OutlineError;
#[cfg(feature = "outline")]
pub use outline::Outline;

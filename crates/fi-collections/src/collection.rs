//! Homogeneous collection with a functional API.
//!
//! A [`Collection`] holds elements of one declared [`TypeDescriptor`]. Every
//! insertion goes through the type guard, so the collection never holds an
//! element that does not satisfy its descriptor.

use std::slice;

use crate::descriptor::{Member, TypeDescriptor};
use crate::error::{CollectionError, Result};

/// An ordered, append-only sequence whose elements share one declared type.
///
/// Collections are built with [`Collection::of_type`] (explicit descriptor)
/// or [`Collection::collect`] (descriptor inferred from the first element).
/// [`map`](Collection::map) and [`filter`](Collection::filter) return new,
/// independently owned collections; [`each`](Collection::each) returns the
/// same collection for chaining.
///
/// # Example
///
/// ```
/// use fi_collections::{Collection, PrimitiveKind, TypeDescriptor};
///
/// let words = Collection::collect(vec!["alpha", "beta", "gamma"]).unwrap();
/// assert_eq!(words.get_type(), &TypeDescriptor::primitive(PrimitiveKind::String));
///
/// let lengths = words.map(|w| w.len()).unwrap();
/// assert_eq!(lengths.get_type(), &TypeDescriptor::primitive(PrimitiveKind::Integer));
///
/// let total = lengths.reduce(|len, acc| acc + len, 0);
/// assert_eq!(total, 14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    elements: Vec<T>,
    declared: TypeDescriptor,
}

impl<T: Member> Collection<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates an empty collection constrained to `declared`.
    pub fn of_type(declared: impl Into<TypeDescriptor>) -> Self {
        Collection {
            elements: Vec::new(),
            declared: declared.into(),
        }
    }

    /// Builds a collection from a non-empty sequence.
    ///
    /// The declared type is inferred from the first element; every element,
    /// the first included, is then appended through the type guard.
    ///
    /// Returns [`CollectionError::EmptyInput`] if `elements` yields nothing,
    /// and [`CollectionError::TypeMismatch`] at the first element whose type
    /// disagrees with the inferred one.
    pub fn collect<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = elements.into_iter();
        let first = iter.next().ok_or(CollectionError::EmptyInput)?;

        let declared = first.descriptor();
        log::trace!("collect inferred element type {}", declared);

        let mut collection = Collection::of_type(declared);
        collection.append(first)?;
        collection.append_all(iter)?;
        Ok(collection)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Appends an element at the end.
    ///
    /// Returns [`CollectionError::TypeMismatch`] if the element does not
    /// satisfy the declared type; the collection is left unchanged.
    pub fn append(&mut self, element: T) -> Result<()> {
        self.guard(&element)?;
        self.elements.push(element);
        Ok(())
    }

    /// Appends every element in order.
    ///
    /// Stops at the first element rejected by the type guard. Elements
    /// appended before it stay in the collection.
    pub fn append_all<I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.append(element)?;
        }
        Ok(())
    }

    fn guard(&self, element: &T) -> Result<()> {
        if element.is_a(&self.declared) {
            return Ok(());
        }

        let actual = element.descriptor();
        log::debug!(
            "rejected {} at position {} of a collection of {}",
            actual,
            self.elements.len(),
            self.declared
        );
        Err(CollectionError::TypeMismatch {
            expected: self.declared.clone(),
            actual,
            position: self.elements.len(),
        })
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the number of elements.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the declared element type.
    pub fn get_type(&self) -> &TypeDescriptor {
        &self.declared
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the collection, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Calls `visitor` once per element, in order, and returns `self`.
    pub fn each<F>(&self, mut visitor: F) -> &Self
    where
        F: FnMut(&T),
    {
        for element in &self.elements {
            visitor(element);
        }
        self
    }

    /// Transforms every element into a new collection.
    ///
    /// On an empty collection the result is empty and keeps this
    /// collection's declared type. Otherwise the result's declared type is
    /// inferred from the first transformed value, and each later value must
    /// satisfy it: a value of another type aborts the map with
    /// [`CollectionError::TypeMismatch`].
    pub fn map<U, F>(&self, mut transform: F) -> Result<Collection<U>>
    where
        U: Member,
        F: FnMut(&T) -> U,
    {
        let mut iter = self.elements.iter();
        let first = match iter.next() {
            Some(element) => transform(element),
            None => return Ok(Collection::of_type(self.declared.clone())),
        };

        let declared = first.descriptor();
        log::trace!("map from {} inferred element type {}", self.declared, declared);

        let mut mapped = Collection::of_type(declared);
        mapped.append(first)?;
        for element in iter {
            mapped.append(transform(element))?;
        }
        Ok(mapped)
    }

    /// Returns a new collection with the elements for which `predicate`
    /// holds. The declared type is unchanged.
    pub fn filter<F>(&self, mut predicate: F) -> Collection<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Collection {
            elements: self
                .elements
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
            declared: self.declared.clone(),
        }
    }

    /// Returns the first element for which `predicate` holds.
    ///
    /// Returns [`CollectionError::EmptyCollection`] without calling the
    /// predicate if there are no elements, and
    /// [`CollectionError::NotFound`] if nothing matches.
    pub fn get_by<F>(&self, mut predicate: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        if self.elements.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }
        self.elements
            .iter()
            .find(|element| predicate(element))
            .ok_or(CollectionError::NotFound)
    }

    /// Folds the elements left to right, starting from `initial`.
    pub fn reduce<A, F>(&self, mut accumulate: F, initial: A) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.elements
            .iter()
            .fold(initial, |acc, element| accumulate(element, acc))
    }

    /// Returns a copy of the elements.
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Returns the elements passed through `mapper`.
    ///
    /// Unlike [`map`](Collection::map), no type is inferred or checked.
    pub fn to_array_with<U, F>(&self, mapper: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        self.elements.iter().map(mapper).collect()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

//! Const carrier - a value that survives an otherwise type-changing
//! pipeline.
//!
//! This module provides the `Const` type: a functor over some phantom
//! type `B`, retaining a value of type `A` that can be retrieved later.
//! It is useful wherever constant information must ride through
//! arbitrary mapping transformations - however `B` is altered along the
//! way, the stored `A` stays pristine and retrievable.
//!
//! The phantom parameter exists only in the type signature: it is
//! backed by no storage, which is asserted at compile time below.

use super::TypeConstructor;
use static_assertions::assert_eq_size;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A carrier that owns exactly one immutable value of type `A` while
/// staying polymorphic over an unrelated phantom parameter `B`.
///
/// Mapping operations on the `B` side (`fmap`, `sequence`, `bi_map_r`)
/// only adjust the type signature; the stored value is untouched.
/// Equality, hashing and the display form are defined solely over the
/// stored value, ignoring the phantom parameter - two `Const` values
/// with equal stored values but different phantom types compare equal.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::{Const, Functor};
///
/// let constant: Const<i32, &str> = Const::new(5);
/// let retagged: Const<i32, usize> = constant.fmap(|s: &str| s.len());
/// assert_eq!(retagged.run_const(), 5);
/// ```
pub struct Const<A, B> {
    value: A,
    phantom: PhantomData<B>,
}

// The phantom side occupies no storage.
assert_eq_size!(Const<u64, [u8; 128]>, u64);
assert_eq_size!(Const<String, fn(u64) -> u64>, String);

impl<A, B> Const<A, B> {
    /// Creates a new `Const` retaining the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Const;
    ///
    /// let constant: Const<i32, ()> = Const::new(5);
    /// assert_eq!(constant.run_const(), 5);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// Consumes the `Const` and retrieves the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Const;
    ///
    /// let constant: Const<&str, i32> = Const::new("kept");
    /// assert_eq!(constant.run_const(), "kept");
    /// ```
    #[inline]
    pub fn run_const(self) -> A {
        self.value
    }

    /// Returns a reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Const;
    ///
    /// let constant: Const<String, i32> = Const::new(String::from("kept"));
    /// assert_eq!(constant.as_inner(), "kept");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.value
    }

    /// Reinterprets the carrier at a new phantom type.
    ///
    /// This is the single narrowing spot every phantom-side no-op
    /// (`fmap`, `sequence`, `bi_map_r`) funnels through.
    #[inline]
    pub(crate) fn retag<C>(self) -> Const<A, C> {
        Const::new(self.value)
    }
}

impl<A, B> TypeConstructor for Const<A, B> {
    type Inner = B;
    type WithType<T: 'static> = Const<A, T>;
}

// Clone/Copy are implemented by hand so the phantom parameter is not
// burdened with bounds it cannot meet.
impl<A: Clone, B> Clone for Const<A, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<A: Copy, B> Copy for Const<A, B> {}

/// Equality compares stored values across arbitrary phantom parameters.
impl<A: PartialEq, B, C> PartialEq<Const<A, C>> for Const<A, B> {
    #[inline]
    fn eq(&self, other: &Const<A, C>) -> bool {
        self.value == other.value
    }
}

impl<A: Eq, B> Eq for Const<A, B> {}

impl<A: Hash, B> Hash for Const<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<A: fmt::Debug, B> fmt::Debug for Const<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

impl<A: fmt::Display, B> fmt::Display for Const<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Const{{a={}}}", self.value)
    }
}

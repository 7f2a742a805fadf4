//! Identity wrapper type - the minimal value carrier.
//!
//! This module provides the `Identity` type, the simplest possible
//! wrapper around a value. It is the baseline applicative: `pure`
//! wraps directly, `sequence` applies the wrapped function to the
//! wrapped value, and everything else is inherited from the derived
//! defaults. It is also the handiest way to lift a plain value into a
//! sequencing chain.

use super::TypeConstructor;
use std::fmt;

/// The identity carrier - wraps a single value without adding any
/// behavior.
///
/// Equality, ordering, hashing and the display form are defined solely
/// by the stored value.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.run_identity(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.run_identity(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.run_identity();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn run_identity(self) -> A {
        self.0
    }

    /// Returns a reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<T: 'static> = Identity<T>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity{{a={}}}", self.0)
    }
}

//! Functor type class - covariant mapping over a carried value.
//!
//! This module provides the `Functor` trait, the base mapping contract
//! of the hierarchy: types that can have a function applied to their
//! inner value while preserving the surrounding structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent
//! functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! The crate never enforces these mechanically; a carrier that breaks
//! them is incorrect, not faulted at runtime. The law suites under
//! `tests/` check them by property for every carrier shipped here.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Functor, Identity};
//!
//! let wrapped = Identity::new(5);
//! let rendered: Identity<String> = wrapped.fmap(|n| n.to_string());
//! assert_eq!(rendered, Identity::new("5".to_string()));
//! ```

use super::applicative::Applicative;
use super::constant::Const;
use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::function::Fn1;

/// A type class for types that can have a function mapped over their
/// contents.
///
/// `Functor` represents the ability to apply a function to the value
/// inside a carrier while preserving the carrier's structure. Failures
/// are not part of this contract: a panic raised by the mapping
/// function propagates to the caller unchanged.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y = x.fmap(|n| n * 2);
/// assert_eq!(y, Identity::new(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new instance of the same family carrying the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    /// use kindling::typeclass::Functor;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// let rendered = add_two.fmap(|n| n.to_string());
    /// assert_eq!(rendered.apply(2), "4");
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Functor, Identity};
    ///
    /// let x = Identity::new(5);
    /// assert_eq!(x.replace("replaced"), Identity::new("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// This is equivalent to `replace(())` or `fmap(|_| ())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Functor, Identity};
    ///
    /// let x = Identity::new(5);
    /// assert_eq!(x.void(), Identity::new(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    /// Mapping is inherited structurally from the Applicative instance:
    /// lift the function with `pure`, then `sequence` it.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.fmap_default(function)
    }
}

// =============================================================================
// Const<A, B> Implementation
// =============================================================================

impl<A, B> Functor for Const<A, B> {
    /// Mapping over the phantom side never touches the stored value;
    /// only the type signature changes.
    #[inline]
    fn fmap<C, F>(self, _function: F) -> Const<A, C>
    where
        F: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        self.retag()
    }
}

// =============================================================================
// Fn1<A, B> Implementation
// =============================================================================

impl<A: 'static, B: 'static> Functor for Fn1<A, B> {
    /// Left-to-right composition over the result side. Overridden
    /// directly rather than derived through `sequence`, so that mapping
    /// stays available when the argument type is not `Clone`.
    #[inline]
    fn fmap<C, F>(self, function: F) -> Fn1<A, C>
    where
        F: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        Fn1::new(move |a| function(self.apply(a)))
    }
}

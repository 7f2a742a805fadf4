//! Applicative type class - lifting values and sequencing wrapped
//! functions.
//!
//! This module provides the `Applicative` trait, which extends
//! `Functor` with:
//!
//! - Lifting a bare value into the family (`pure`)
//! - Applying a wrapped function to a wrapped value (`sequence`)
//!
//! `sequence` is the one operation each carrier must define
//! non-trivially; mapping (`fmap_default`) and the two discard
//! combinators (`discard_l`, `discard_r`) are derived from it
//! structurally.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Sequencing a lifted identity function returns an equivalent value:
//!
//! ```text
//! v.sequence(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! Lifting then sequencing a lifted function equals lifting the applied
//! result:
//!
//! ```text
//! pure(x).sequence(pure(f)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! pure(y).sequence(u) == u.sequence(pure(|f| f(y)))
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! w.sequence(v.sequence(u.sequence(pure(compose)))) == w.sequence(v).sequence(u)
//! ```
//!
//! These laws are contracts on every concrete implementer, not
//! something this trait enforces mechanically - a violation is a
//! correctness bug, not a runtime fault. The suites under `tests/`
//! check them by property for the carriers shipped here.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Applicative, Identity};
//!
//! let lifted: Identity<i32> = <Identity<()>>::pure(42);
//! assert_eq!(lifted, Identity::new(42));
//!
//! let applied = Identity::new(1).sequence(Identity::new(|x: i32| x + 1));
//! assert_eq!(applied.run_identity(), 2);
//! ```

use super::constant::Const;
use super::functor::Functor;
use super::identity::Identity;
use crate::function::Fn1;

/// A type class for families that support lifting bare values and
/// applying wrapped functions to wrapped values.
///
/// Carriers implement `pure` and `sequence`; everything else in the
/// capability has a default body derived from those two, so default
/// behavior is inherited structurally rather than reimplemented per
/// instance.
///
/// See the module-level documentation for the four applicative laws.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::{Applicative, Identity};
///
/// let applied = Identity::new(5).sequence(Identity::new(|x: i32| x * 2));
/// assert_eq!(applied, Identity::new(10));
/// ```
pub trait Applicative: Functor {
    /// Lifts a bare value into the family.
    ///
    /// Lifting depends on nothing but the value and the concrete
    /// family; no existing instance participates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Applicative, Identity};
    ///
    /// let lifted: Identity<i32> = <Identity<()>>::pure(42);
    /// assert_eq!(lifted.run_identity(), 42);
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: 'static;

    /// Applies a function wrapped in this family to the value wrapped
    /// in this instance, producing a wrapped result.
    ///
    /// # Arguments
    ///
    /// * `app_fn` - The wrapped function to apply
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Applicative, Identity};
    ///
    /// let applied = Identity::new(1).sequence(Identity::new(|x: i32| x + 1));
    /// assert_eq!(applied.run_identity(), 2);
    /// ```
    fn sequence<B, F>(self, app_fn: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Mapping derived from `pure` and `sequence`: lift the function,
    /// then sequence it.
    ///
    /// Carriers whose `fmap` is exactly this derivation implement
    /// `Functor::fmap` by delegating here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Applicative, Identity};
    ///
    /// let mapped = Identity::new(20).fmap_default(|n| n + 1);
    /// assert_eq!(mapped, Identity::new(21));
    /// ```
    #[inline]
    fn fmap_default<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static,
    {
        self.sequence(Self::pure(function))
    }

    /// Sequences both this instance and `app_b`, keeping `app_b`'s
    /// value and discarding this instance's - while still running this
    /// instance's `sequence` exactly once.
    ///
    /// Derived as `app_b.sequence(self.sequence(pure(|_| |b| b)))`.
    /// The equality bounds state that re-applying `WithType` stays in
    /// the same family, which every carrier satisfies definitionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Applicative, Identity};
    ///
    /// let kept = Identity::new(1).discard_l(Identity::new("right"));
    /// assert_eq!(kept, Identity::new("right"));
    /// ```
    fn discard_l<B>(self, app_b: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
        Self::WithType<B>: Applicative<Inner = B, WithType<B> = Self::WithType<B>>,
        Self::WithType<B>: Applicative<
                WithType<Box<dyn FnOnce(B) -> B>> = Self::WithType<Box<dyn FnOnce(B) -> B>>,
            >,
    {
        let lifted: Self::WithType<Box<dyn FnOnce(B) -> B>> = self.sequence(Self::pure(
            |_: Self::Inner| -> Box<dyn FnOnce(B) -> B> { Box::new(|b| b) },
        ));
        app_b.sequence::<B, Box<dyn FnOnce(B) -> B>>(lifted)
    }

    /// Symmetric to [`discard_l`](Applicative::discard_l): keeps this
    /// instance's value and discards `app_b`'s, while still running
    /// `app_b`'s `sequence` exactly once.
    ///
    /// Derived as `app_b.sequence(self.sequence(pure(|a| |_| a)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Applicative, Identity};
    ///
    /// let kept = Identity::new(1).discard_r(Identity::new("right"));
    /// assert_eq!(kept, Identity::new(1));
    /// ```
    fn discard_r<B>(self, app_b: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
        Self::WithType<B>:
            Applicative<Inner = B, WithType<Self::Inner> = Self::WithType<Self::Inner>>,
        Self::WithType<B>: Applicative<
                WithType<Box<dyn FnOnce(B) -> Self::Inner>> = Self::WithType<
                    Box<dyn FnOnce(B) -> Self::Inner>,
                >,
            >,
    {
        let lifted: Self::WithType<Box<dyn FnOnce(B) -> Self::Inner>> =
            self.sequence(Self::pure(
                |a: Self::Inner| -> Box<dyn FnOnce(B) -> Self::Inner> { Box::new(move |_| a) },
            ));
        app_b.sequence::<Self::Inner, Box<dyn FnOnce(B) -> Self::Inner>>(lifted)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B>
    where
        B: 'static,
    {
        Identity::new(value)
    }

    #[inline]
    fn sequence<B, F>(self, app_fn: Identity<F>) -> Identity<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Identity::new((app_fn.run_identity())(self.run_identity()))
    }
}

// =============================================================================
// Const<A, B> Implementation
// =============================================================================

impl<A: Default, B> Applicative for Const<A, B> {
    /// Lifting discards the given value entirely; the stored side is
    /// populated with `A::default()`, the associated-function rendition
    /// of a `pure` that has no receiver to borrow a value from.
    #[inline]
    fn pure<C>(_value: C) -> Const<A, C>
    where
        C: 'static,
    {
        Const::new(A::default())
    }

    /// Sequencing never consults the wrapped function; the stored value
    /// survives unchanged under a new phantom tag.
    #[inline]
    fn sequence<C, F>(self, _app_fn: Const<A, F>) -> Const<A, C>
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

/// The Reader applicative: the environment `A` is handed to both the
/// wrapped function and the wrapped value, so the argument type must be
/// `Clone`. This is the one non-trivial `sequence` in the crate.
impl<A: Clone + 'static, B: 'static> Applicative for Fn1<A, B> {
    #[inline]
    fn pure<C>(value: C) -> Fn1<A, C>
    where
        C: 'static,
    {
        Fn1::new(move |_| value)
    }

    #[inline]
    fn sequence<C, F>(self, app_fn: Fn1<A, F>) -> Fn1<A, C>
    where
        F: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        Fn1::new(move |a: A| {
            let function = app_fn.apply(a.clone());
            function(self.apply(a))
        })
    }
}

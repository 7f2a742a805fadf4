//! Bifunctor type class - paired covariant mapping over two
//! independent parameters.
//!
//! This module provides the `Bifunctor` trait, which represents types
//! with two type parameters that can both have functions mapped over
//! them. The carrier shipped here is [`Const`](super::Const), whose
//! left parameter holds a real value and whose right parameter is
//! phantom; mapping the right side re-tags the type without touching
//! any stored state.
//!
//! # Laws
//!
//! All `Bifunctor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! bf.bi_map(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bi_map(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bi_map(f1, g1).bi_map(f2, g2)
//! ```
//!
//! ## Split/Combined Consistency Law
//!
//! ```text
//! bf.bi_map(f, g) == bf.bi_map_l(f).bi_map_r(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Bifunctor, Const};
//!
//! let constant: Const<i32, &str> = Const::new(21);
//! let remapped: Const<i32, usize> = constant.bi_map(|n| n * 2, |s: &str| s.len());
//! assert_eq!(remapped.run_const(), 42);
//! ```

use super::constant::Const;

/// A type class for types with two independent covariant mapping slots.
///
/// `bi_map` is the primary operation; each one-sided mapping derives
/// from it by fixing the other side to the identity function.
///
/// See the module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting carrier after remapping both parameters.
    ///
    /// For `Const<A, B>`, `Target<C, D> = Const<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both parameters in one combined step.
    ///
    /// Carriers with a phantom parameter may skip invoking the function
    /// for that side entirely, since no value of its domain exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Bifunctor, Const};
    ///
    /// let constant: Const<i32, &str> = Const::new(21);
    /// let remapped: Const<String, usize> =
    ///     constant.bi_map(|n| n.to_string(), |s: &str| s.len());
    /// assert_eq!(remapped.run_const(), "21");
    /// ```
    fn bi_map<C, D, F, G>(self, left_function: F, right_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the left parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Bifunctor, Const};
    ///
    /// let constant: Const<i32, &str> = Const::new(21);
    /// assert_eq!(constant.bi_map_l(|n| n * 2).run_const(), 42);
    /// ```
    #[inline]
    fn bi_map_l<C, F>(self, left_function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bi_map(left_function, |b| b)
    }

    /// Applies a function to the right parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Bifunctor, Const};
    ///
    /// let constant: Const<i32, &str> = Const::new(21);
    /// let retagged: Const<i32, usize> = constant.bi_map_r(|s: &str| s.len());
    /// assert_eq!(retagged.run_const(), 21);
    /// ```
    #[inline]
    fn bi_map_r<D, G>(self, right_function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bi_map(|a| a, right_function)
    }
}

// =============================================================================
// Const<A, B> Implementation
// =============================================================================

impl<A, B> Bifunctor<A, B> for Const<A, B> {
    type Target<C, D> = Const<C, D>;

    /// The right function is never invoked: its domain is the phantom
    /// parameter, for which no value exists to supply.
    #[inline]
    fn bi_map<C, D, F, G>(self, left_function: F, _right_function: G) -> Const<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Const::new(left_function(self.run_const()))
    }

    #[inline]
    fn bi_map_l<C, F>(self, left_function: F) -> Const<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Const::new(left_function(self.run_const()))
    }

    /// The only observable effect is the phantom tag in the signature;
    /// the stored value survives untouched.
    #[inline]
    fn bi_map_r<D, G>(self, _right_function: G) -> Const<A, D>
    where
        G: FnOnce(B) -> D,
    {
        self.retag()
    }
}

//! Profunctor type class - dual mapping over an input and an output
//! side.
//!
//! This module provides the `Profunctor` trait: types with one
//! contravariant (input) parameter and one covariant (output)
//! parameter, where each side can be remapped independently or both in
//! one combined step. The canonical carrier is the function arrow
//! [`Fn1`](crate::function::Fn1): remapping the input adapts what the
//! function accepts, remapping the output adapts what it produces.
//!
//! # Laws
//!
//! All `Profunctor` implementations must satisfy these laws:
//!
//! ## Split/Combined Equivalence
//!
//! The combined mapping equals the two one-sided mappings in sequence:
//!
//! ```text
//! p.di_map(l, r) == p.di_map_l(l).di_map_r(r)
//! ```
//!
//! ## Stacking
//!
//! Two stacked input maps (resp. output maps) equal one map with the
//! composed function:
//!
//! ```text
//! p.di_map_l(f).di_map_l(g) == p.di_map_l(|z| f(g(z)))
//! p.di_map_r(f).di_map_r(g) == p.di_map_r(|b| g(f(b)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::function::Fn1;
//! use kindling::typeclass::Profunctor;
//!
//! let add_two = Fn1::new(|n: i32| n + 2);
//! let remapped = add_two.di_map(|s: &str| s.parse::<i32>().unwrap(), |n| n.to_string());
//! assert_eq!(remapped.apply("1"), "3");
//! ```

use crate::function::Fn1;

/// A type class for dual-mapping carriers: contravariant on the input
/// parameter `A`, covariant on the output parameter `B`.
///
/// `di_map` is the primary operation; both one-sided mappings derive
/// from it by fixing the other side to the identity function.
///
/// See the module-level documentation for laws.
pub trait Profunctor<A, B> {
    /// The resulting carrier after remapping both sides.
    ///
    /// For `Fn1<A, B>`, `Target<Z, C> = Fn1<Z, C>`. The `'static`
    /// bounds are inherited from the boxed-closure representation of
    /// the function arrow.
    type Target<Z: 'static, C: 'static>;

    /// Remaps the input side contravariantly and the output side
    /// covariantly in one combined step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    /// use kindling::typeclass::Profunctor;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// let remapped = add_two.di_map(|s: &str| s.parse::<i32>().unwrap(), |n| n.to_string());
    /// assert_eq!(remapped.apply("1"), "3");
    /// ```
    fn di_map<Z, C, F, G>(self, left_function: F, right_function: G) -> Self::Target<Z, C>
    where
        F: FnOnce(Z) -> A + 'static,
        G: FnOnce(B) -> C + 'static,
        Z: 'static,
        C: 'static;

    /// Contravariantly remaps the input side only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    /// use kindling::typeclass::Profunctor;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// let parsed = add_two.di_map_l(|s: &str| s.parse::<i32>().unwrap());
    /// assert_eq!(parsed.apply("1"), 3);
    /// ```
    #[inline]
    fn di_map_l<Z, F>(self, left_function: F) -> Self::Target<Z, B>
    where
        Self: Sized,
        F: FnOnce(Z) -> A + 'static,
        Z: 'static,
        B: 'static,
    {
        self.di_map(left_function, |b| b)
    }

    /// Covariantly remaps the output side only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    /// use kindling::typeclass::Profunctor;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// let rendered = add_two.di_map_r(|n| n.to_string());
    /// assert_eq!(rendered.apply(1), "3");
    /// ```
    #[inline]
    fn di_map_r<C, G>(self, right_function: G) -> Self::Target<A, C>
    where
        Self: Sized,
        G: FnOnce(B) -> C + 'static,
        A: 'static,
        C: 'static,
    {
        self.di_map(|a| a, right_function)
    }
}

// =============================================================================
// Fn1<A, B> Implementation
// =============================================================================

impl<A: 'static, B: 'static> Profunctor<A, B> for Fn1<A, B> {
    type Target<Z: 'static, C: 'static> = Fn1<Z, C>;

    #[inline]
    fn di_map<Z, C, F, G>(self, left_function: F, right_function: G) -> Fn1<Z, C>
    where
        F: FnOnce(Z) -> A + 'static,
        G: FnOnce(B) -> C + 'static,
        Z: 'static,
        C: 'static,
    {
        Fn1::new(move |z| right_function(self.apply(left_function(z))))
    }

    #[inline]
    fn di_map_l<Z, F>(self, left_function: F) -> Fn1<Z, B>
    where
        F: FnOnce(Z) -> A + 'static,
        Z: 'static,
    {
        Fn1::new(move |z| self.apply(left_function(z)))
    }

    #[inline]
    fn di_map_r<C, G>(self, right_function: G) -> Fn1<A, C>
    where
        G: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        Fn1::new(move |a| right_function(self.apply(a)))
    }
}

//! The single-argument function arrow.
//!
//! `Fn1<A, B>` wraps one owned computation from `A` to `B` and is the
//! function type the rest of the hierarchy composes against. Every
//! combinator returns a new arrow wrapping a composed computation; the
//! original is consumed, never mutated. The arrow is this crate's
//! profunctor reference instance and, with its argument type held
//! fixed, the Reader applicative.

use crate::typeclass::{Functor, TypeConstructor};

/// The owned computation wrapped by an [`Fn1`].
type WrappedFunction<A, B> = Box<dyn FnOnce(A) -> B>;

/// A pure computation from one input value to one output value.
///
/// Construction wraps any one-argument computation; application
/// consumes the arrow and invokes it. Faults raised by the wrapped
/// computation propagate to the caller unchanged - no combinator
/// catches, wraps or recovers.
///
/// # Examples
///
/// ```rust
/// use kindling::function::Fn1;
///
/// let add_two = Fn1::new(|n: i32| n + 2);
/// assert_eq!(add_two.apply(2), 4);
/// ```
///
/// Composition in both directions:
///
/// ```rust
/// use kindling::function::Fn1;
///
/// let add_two = Fn1::new(|n: i32| n + 2);
/// assert_eq!(add_two.and_then(|n| n.to_string()).apply(1), "3");
///
/// let add_two = Fn1::new(|n: i32| n + 2);
/// assert_eq!(add_two.compose(|s: &str| s.parse::<i32>().unwrap()).apply("1"), 3);
/// ```
pub struct Fn1<A, B> {
    run: WrappedFunction<A, B>,
}

impl<A: 'static, B: 'static> Fn1<A, B> {
    /// Wraps a one-argument computation as an `Fn1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    ///
    /// let double = Fn1::new(|n: i32| n * 2);
    /// assert_eq!(double.apply(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(A) -> B + 'static,
    {
        Self {
            run: Box::new(function),
        }
    }

    /// Wraps an external one-argument computation as an `Fn1`.
    ///
    /// Behaviorally identical to [`new`](Fn1::new); it exists so call
    /// sites adapting free functions or method references read as
    /// adaptation rather than construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    ///
    /// fn parse_int(input: &str) -> i32 {
    ///     input.parse().unwrap()
    /// }
    ///
    /// assert_eq!(Fn1::adapt(parse_int).apply("1"), 1);
    /// ```
    #[inline]
    pub fn adapt<F>(function: F) -> Self
    where
        F: FnOnce(A) -> B + 'static,
    {
        Self::new(function)
    }

    /// Invokes the computation with the given argument.
    ///
    /// Any fault raised by the wrapped computation propagates to the
    /// caller unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// assert_eq!(add_two.apply(2), 4);
    /// ```
    #[inline]
    pub fn apply(self, argument: A) -> B {
        (self.run)(argument)
    }

    /// Left-to-right composition, such that `g.then(f).apply(x)` is
    /// equivalent to `f(g.apply(x))`.
    ///
    /// This is an alias for [`Functor::fmap`]; the two must behave
    /// identically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// assert_eq!(add_two.then(|n| n.to_string()).apply(2), "4");
    /// ```
    #[inline]
    pub fn then<C, F>(self, function: F) -> Fn1<A, C>
    where
        F: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        self.fmap(function)
    }

    /// Right-to-left composition: the given computation runs first and
    /// feeds this arrow's argument.
    ///
    /// Equal to `di_map_l(before)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// let from_text = add_two.compose(|s: &str| s.parse::<i32>().unwrap());
    /// assert_eq!(from_text.apply("1"), 3);
    /// ```
    #[inline]
    pub fn compose<Z, F>(self, before: F) -> Fn1<Z, B>
    where
        F: FnOnce(Z) -> A + 'static,
        Z: 'static,
    {
        Fn1::new(move |z| self.apply(before(z)))
    }

    /// Left-to-right composition: this arrow runs first and its result
    /// feeds the given computation.
    ///
    /// Equal to `fmap(after)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::function::Fn1;
    ///
    /// let add_two = Fn1::new(|n: i32| n + 2);
    /// assert_eq!(add_two.and_then(|n| n.to_string()).apply(1), "3");
    /// ```
    #[inline]
    pub fn and_then<C, F>(self, after: F) -> Fn1<A, C>
    where
        F: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        Fn1::new(move |a| after(self.apply(a)))
    }
}

impl<A: 'static, B: 'static> TypeConstructor for Fn1<A, B> {
    type Inner = B;
    type WithType<T: 'static> = Fn1<A, T>;
}

//! Helper functions (combinators) for building mapping pipelines.
//!
//! This module provides the two fundamental combinators the rest of the
//! crate and its tests lean on:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same
//!   value, ignoring its input (K combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// mapping with it must leave any lawful functor observably unchanged.
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use kindling::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # Use with mapping
///
/// ```
/// use kindling::function::identity;
/// use kindling::typeclass::{Functor, Identity};
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.fmap(identity), wrapped);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// Also known as the K combinator in combinatory logic.
///
/// # Examples
///
/// ```
/// use kindling::function::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// ```
///
/// # Use with the function arrow
///
/// ```
/// use kindling::function::{constant, Fn1};
///
/// let always_five: Fn1<&str, i32> = Fn1::new(constant(5));
/// assert_eq!(always_five.apply("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

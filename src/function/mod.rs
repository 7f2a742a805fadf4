//! The function arrow and its supporting combinators.
//!
//! This module provides [`Fn1`], the single-argument function arrow
//! used pervasively as "the" function type of the hierarchy, together
//! with the [`identity`] and [`constant`] helper combinators.
//!
//! `Fn1` composes in both directions ([`Fn1::compose`],
//! [`Fn1::and_then`]) and participates in the capability hierarchy as
//! a [`Functor`](crate::typeclass::Functor), a
//! [`Profunctor`](crate::typeclass::Profunctor) and - with its
//! argument type held fixed - the Reader
//! [`Applicative`](crate::typeclass::Applicative).
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

mod combinators;
mod fn1;

pub use combinators::{constant, identity};
pub use fn1::Fn1;

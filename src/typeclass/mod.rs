//! Type class traits for composable mapping abstractions.
//!
//! This module provides the capability contracts that form the
//! hierarchy, plus the value carriers that exercise them:
//!
//! - [`Functor`]: Covariant mapping over one parameter
//! - [`Applicative`]: Functor extended with value-lifting and
//!   wrapped-function sequencing
//! - [`Profunctor`]: Dual mapping - contravariant input, covariant
//!   output
//! - [`Bifunctor`]: Paired covariant mapping over two independent
//!   parameters
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native support for higher-kinded types (HKT). This
//! library uses Generic Associated Types (GAT) to emulate HKT behavior
//! through [`TypeConstructor`], which lets a mapping operation's return
//! type specialize back to the concrete family with no casts.
//!
//! ## Carriers
//!
//! - [`Identity`]: The minimal value wrapper, the baseline applicative
//! - [`Const`]: A constant carrier with a phantom second parameter,
//!   the bifunctor reference instance
//! - [`Fn1`](crate::function::Fn1) (in [`crate::function`]): The
//!   function arrow, the profunctor reference instance and the Reader
//!   applicative
//!
//! # Examples
//!
//! ## Sequencing with Identity
//!
//! ```rust
//! use kindling::typeclass::{Applicative, Identity};
//!
//! let applied = Identity::new(1).sequence(Identity::new(|x: i32| x + 1));
//! assert_eq!(applied.run_identity(), 2);
//! ```
//!
//! ## Retaining a value with Const
//!
//! ```rust
//! use kindling::typeclass::{Const, Functor};
//!
//! let constant: Const<i32, &str> = Const::new(5);
//! let retagged: Const<i32, usize> = constant.fmap(|s: &str| s.len());
//! assert_eq!(retagged.run_const(), 5);
//! ```

mod applicative;
mod bifunctor;
mod constant;
mod functor;
mod higher;
mod identity;
mod profunctor;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use constant::Const;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use profunctor::Profunctor;

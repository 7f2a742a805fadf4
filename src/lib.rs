//! # kindling
//!
//! Composable mapping abstractions for Rust: a small hierarchy of
//! capability traits together with the reference carriers that
//! exercise them.
//!
//! ## Overview
//!
//! The crate provides:
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative),
//!   [`Profunctor`](typeclass::Profunctor) and
//!   [`Bifunctor`](typeclass::Bifunctor), built on a GAT-based
//!   emulation of higher-kinded types
//!   ([`TypeConstructor`](typeclass::TypeConstructor)).
//! - **Carriers**: [`Fn1`](function::Fn1), the single-argument
//!   function arrow; [`Const`](typeclass::Const), a constant carrier
//!   with a phantom parameter; [`Identity`](typeclass::Identity), the
//!   minimal value wrapper.
//!
//! Every operation is a pure transformation over immutable values: no
//! combinator blocks, performs I/O, or mutates shared state. Values
//! compose into pipelines; nothing here drives anything else.
//!
//! ## Example
//!
//! ```rust
//! use kindling::function::Fn1;
//! use kindling::typeclass::Functor;
//!
//! let add_two = Fn1::new(|n: i32| n + 2);
//! let rendered = add_two.fmap(|n| n.to_string());
//! assert_eq!(rendered.apply(2), "4");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;
    pub use crate::typeclass::*;
}

pub mod function;
pub mod typeclass;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}

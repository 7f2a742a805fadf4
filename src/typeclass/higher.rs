//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for abstracting over "a family
//! of single-parameter containers" in a type system whose generics
//! range only over concrete types. Rust cannot quantify over `Fn1<A, _>`
//! or `Const<A, _>` as type constructors, so each family instead names
//! itself through a Generic Associated Type: `WithType<T>` is "this
//! same family, re-applied to `T`".
//!
//! Every mapping capability in the crate ([`Functor`](super::Functor),
//! [`Applicative`](super::Applicative)) is defined against this trait,
//! which lets the return type of a mapping operation specialize back to
//! the concrete family with no casts. The `TypeConstructor` impl is the
//! single narrowing spot per carrier; everything else is structural.
//!
//! # Example
//!
//! ```rust
//! use kindling::typeclass::{Identity, TypeConstructor};
//!
//! fn rewrap<T: TypeConstructor>(_: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: From<String>,
//! {
//!     String::from("swapped").into()
//! }
//!
//! let swapped: Identity<String> = rewrap(Identity::new(42));
//! assert_eq!(swapped.run_identity(), "swapped");
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic
/// Associated Types. It allows abstracting over one-parameter families
/// such as `Identity<_>`, `Const<A, _>` and `Fn1<A, _>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this family is currently applied
///   to.
/// - `WithType<T>`: The same family applied to a different type `T`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be the
/// same type as `F` itself.
///
/// The `'static` bound on `WithType`'s parameter exists because the
/// function-arrow carrier stores its parameter inside a boxed closure;
/// it is carried uniformly by every capability built on this trait.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Identity<i32>`, this is `i32`; for
    /// `Fn1<A, B>` it is the result type `B`.
    type Inner;

    /// The same type constructor applied to a different type `T`.
    ///
    /// For example, for `Identity<i32>`, `WithType<String>` is
    /// `Identity<String>`; for `Fn1<A, B>`, `WithType<String>` is
    /// `Fn1<A, String>`.
    ///
    /// The constraint `TypeConstructor<Inner = T>` ensures that the
    /// resulting type is itself a valid type constructor, so
    /// transformations chain.
    type WithType<T: 'static>: TypeConstructor<Inner = T>;
}

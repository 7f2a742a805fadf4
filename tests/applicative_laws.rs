//! Property-based tests for Applicative laws.
//!
//! This module verifies the four applicative laws for the carriers
//! with a substantive `sequence`:
//!
//! - **Identity Law**: `v.sequence(pure(|x| x)) == v`
//! - **Homomorphism Law**: `pure(x).sequence(pure(f)) == pure(f(x))`
//! - **Interchange Law**: `pure(y).sequence(u) == u.sequence(pure(|f| f(y)))`
//! - **Composition Law**:
//!   `w.sequence(v.sequence(u.sequence(pure(compose)))) == w.sequence(v).sequence(u)`
//!
//! `Identity` is checked structurally; the function arrow (the Reader
//! applicative) is checked observationally at sampled environments.
//! The wrapped functions inside sequenced carriers are boxed so the
//! chains can be written without naming closure types.

use kindling::function::{Fn1, identity};
use kindling::typeclass::{Applicative, Identity};
use proptest::prelude::*;

type BoxedStep = Box<dyn FnOnce(i32) -> i32>;

proptest! {
    // =========================================================================
    // Identity<A>
    // =========================================================================

    #[test]
    fn prop_identity_wrapper_identity_law(value in any::<i32>()) {
        let wrapped = Identity::new(value);
        prop_assert_eq!(wrapped.sequence(<Identity<()>>::pure(identity)), wrapped);
    }

    #[test]
    fn prop_identity_wrapper_homomorphism_law(value in any::<i32>(), factor in any::<i32>()) {
        let function = move |x: i32| x.wrapping_mul(factor);

        let left = <Identity<()>>::pure(value).sequence(<Identity<()>>::pure(function));
        let right = <Identity<()>>::pure(function(value));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_wrapper_interchange_law(value in any::<i32>(), offset in any::<i32>()) {
        let wrapped_fn = move || {
            Identity::new(Box::new(move |x: i32| x.wrapping_add(offset)) as BoxedStep)
        };

        let left = <Identity<()>>::pure(value).sequence(wrapped_fn());
        let right = wrapped_fn().sequence(<Identity<()>>::pure(
            move |function: BoxedStep| function(value),
        ));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_identity_wrapper_composition_law(
        value in any::<i32>(),
        addend in any::<i32>(),
        factor in any::<i32>(),
    ) {
        let make_w = || Identity::new(value);
        let make_v = || Identity::new(Box::new(move |a: i32| a.wrapping_add(addend)) as BoxedStep);
        let make_u = || Identity::new(Box::new(move |b: i32| b.wrapping_mul(factor)) as BoxedStep);
        let compose = |f: BoxedStep| -> Box<dyn FnOnce(BoxedStep) -> BoxedStep> {
            Box::new(move |g: BoxedStep| -> BoxedStep { Box::new(move |a: i32| f(g(a))) })
        };

        let left = make_w()
            .sequence(make_v().sequence(make_u().sequence(<Identity<()>>::pure(compose))));
        let right = make_w().sequence(make_v()).sequence(make_u());

        prop_assert_eq!(left.run_identity(), right.run_identity());
    }

    // =========================================================================
    // Fn1<A, B> (the Reader applicative)
    // =========================================================================

    #[test]
    fn prop_fn1_identity_law(environment in any::<i32>(), offset in any::<i32>()) {
        let arrow = Fn1::new(move |e: i32| e.wrapping_add(offset));
        let sequenced = arrow.sequence(<Fn1<i32, ()>>::pure(identity));
        prop_assert_eq!(sequenced.apply(environment), environment.wrapping_add(offset));
    }

    #[test]
    fn prop_fn1_homomorphism_law(
        environment in any::<i32>(),
        value in any::<i32>(),
        factor in any::<i32>(),
    ) {
        let function = move |x: i32| x.wrapping_mul(factor);

        let left = <Fn1<i32, ()>>::pure(value).sequence(<Fn1<i32, ()>>::pure(function));
        let right = <Fn1<i32, ()>>::pure(function(value));

        prop_assert_eq!(left.apply(environment), right.apply(environment));
    }

    #[test]
    fn prop_fn1_interchange_law(environment in any::<i32>(), value in any::<i32>()) {
        let make_u = || {
            Fn1::new(|e: i32| -> BoxedStep { Box::new(move |y: i32| y.wrapping_add(e)) })
        };

        let left = <Fn1<i32, ()>>::pure(value).sequence(make_u());
        let right = make_u().sequence(<Fn1<i32, ()>>::pure(
            move |function: BoxedStep| function(value),
        ));

        prop_assert_eq!(left.apply(environment), right.apply(environment));
    }

    #[test]
    fn prop_fn1_composition_law(environment in any::<i32>(), addend in any::<i32>()) {
        let make_w = || Fn1::new(move |e: i32| e.wrapping_add(addend));
        let make_v = || {
            Fn1::new(|e: i32| -> BoxedStep {
                Box::new(move |a: i32| a.wrapping_mul(2).wrapping_add(e))
            })
        };
        let make_u =
            || Fn1::new(|e: i32| -> BoxedStep { Box::new(move |b: i32| b.wrapping_sub(e)) });
        let compose = |f: BoxedStep| -> Box<dyn FnOnce(BoxedStep) -> BoxedStep> {
            Box::new(move |g: BoxedStep| -> BoxedStep { Box::new(move |a: i32| f(g(a))) })
        };

        let left = make_w()
            .sequence(make_v().sequence(make_u().sequence(<Fn1<i32, ()>>::pure(compose))));
        let right = make_w().sequence(make_v()).sequence(make_u());

        prop_assert_eq!(left.apply(environment), right.apply(environment));
    }

    // =========================================================================
    // The Reader scenario: the environment is handed to both sides.
    // =========================================================================

    #[test]
    fn prop_fn1_sequence_passes_one_environment_to_both_sides(environment in any::<i16>()) {
        let render = Fn1::new(|e: i32| e.to_string());
        let add_parsed = Fn1::new(|e: i32| move |s: String| e + s.parse::<i32>().unwrap());

        // Both sides observe the same environment, so the sum is twice it.
        let doubled = render.sequence(add_parsed).apply(i32::from(environment));
        prop_assert_eq!(doubled, i32::from(environment) * 2);
    }
}

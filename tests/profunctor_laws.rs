//! Property-based tests for Profunctor laws.
//!
//! This module verifies the profunctor contract on the function arrow:
//!
//! - **Split/Combined Equivalence**: `p.di_map(l, r) == p.di_map_l(l).di_map_r(r)`
//! - **Side Independence**: the two one-sided maps commute
//! - **Stacking**: two stacked one-sided maps equal one map with the
//!   composed function
//!
//! Arrows are compared observationally: sampled inputs, compared
//! outputs.

use kindling::function::Fn1;
use kindling::typeclass::Profunctor;
use proptest::prelude::*;

fn base_arrow(offset: i32) -> Fn1<i32, i32> {
    Fn1::new(move |n: i32| n.wrapping_add(offset))
}

proptest! {
    #[test]
    fn prop_fn1_split_combined_equivalence(
        input in any::<i32>(),
        offset in any::<i32>(),
    ) {
        let left_function = |z: i32| z.wrapping_sub(3);
        let right_function = |b: i32| b.wrapping_mul(5);

        let combined = base_arrow(offset).di_map(left_function, right_function);
        let split = base_arrow(offset).di_map_l(left_function).di_map_r(right_function);

        prop_assert_eq!(combined.apply(input), split.apply(input));
    }

    #[test]
    fn prop_fn1_one_sided_maps_commute(
        input in any::<i32>(),
        offset in any::<i32>(),
    ) {
        let left_function = |z: i32| z.wrapping_sub(3);
        let right_function = |b: i32| b.wrapping_mul(5);

        let left_first = base_arrow(offset).di_map_l(left_function).di_map_r(right_function);
        let right_first = base_arrow(offset).di_map_r(right_function).di_map_l(left_function);

        prop_assert_eq!(left_first.apply(input), right_first.apply(input));
    }

    #[test]
    fn prop_fn1_left_maps_stack_by_composition(
        input in any::<i32>(),
        offset in any::<i32>(),
    ) {
        let function1 = |z: i32| z.wrapping_sub(3);
        let function2 = |z: i32| z.wrapping_mul(5);

        let stacked = base_arrow(offset).di_map_l(function1).di_map_l(function2);
        let composed = base_arrow(offset).di_map_l(move |z| function1(function2(z)));

        prop_assert_eq!(stacked.apply(input), composed.apply(input));
    }

    #[test]
    fn prop_fn1_right_maps_stack_by_composition(
        input in any::<i32>(),
        offset in any::<i32>(),
    ) {
        let function1 = |b: i32| b.wrapping_sub(3);
        let function2 = |b: i32| b.wrapping_mul(5);

        let stacked = base_arrow(offset).di_map_r(function1).di_map_r(function2);
        let composed = base_arrow(offset).di_map_r(move |b| function2(function1(b)));

        prop_assert_eq!(stacked.apply(input), composed.apply(input));
    }

    #[test]
    fn prop_fn1_di_map_identity_preserves_the_arrow(
        input in any::<i32>(),
        offset in any::<i32>(),
    ) {
        let remapped = base_arrow(offset).di_map(|z: i32| z, |b: i32| b);
        prop_assert_eq!(remapped.apply(input), input.wrapping_add(offset));
    }
}

//! Property-based tests for the `Maybe` Functor instance.
//!
//! - **Identity Law**: `m.fmap(identity) == m`
//! - **Composition Law**: `m.fmap(compose(f, g)) == m.fmap(g).fmap(f)`
//!
//! The functions are drawn from families indexed by generated constants, so
//! each case checks a different `f` and `g`.

use std::cell::Cell;

use maybe_laws::compose::{compose, identity};
use maybe_laws::control::Maybe;
use maybe_laws::typeclass::Functor;
use proptest::prelude::*;
use rstest::rstest;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

// =============================================================================
// Law Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_law(value in any_maybe()) {
        prop_assert_eq!(value.fmap(identity), identity(value));
    }

    #[test]
    fn prop_composition_law(value in any_maybe(), offset in any::<i32>(), factor in any::<i32>()) {
        let function1 = move |n: i32| n.wrapping_add(offset);
        let function2 = move |n: i32| n.wrapping_mul(factor);

        let left = value.fmap(compose(function1, function2));
        let right = value.fmap(function2).fmap(function1);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_fmap_ref_agrees_with_fmap(value in any_maybe(), offset in any::<i32>()) {
        let by_ref = value.fmap_ref(|n| n.wrapping_add(offset));
        prop_assert_eq!(by_ref, value.fmap(|n| n.wrapping_add(offset)));
    }

    #[test]
    fn prop_fmap_never_calls_function_on_nothing(offset in any::<i32>()) {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.fmap(|n| {
            calls.set(calls.get() + 1);
            n.wrapping_add(offset)
        });

        prop_assert_eq!(result, Maybe::Nothing);
        prop_assert_eq!(calls.get(), 0);
    }
}

// =============================================================================
// Equality Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_just_equality_follows_payload(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(Maybe::Just(first) == Maybe::Just(second), first == second);
    }

    #[test]
    fn prop_just_is_never_nothing(value in any::<i32>()) {
        prop_assert_ne!(Maybe::Just(value), Maybe::Nothing);
    }

    #[test]
    fn prop_equality_is_reflexive(value in any_maybe()) {
        prop_assert_eq!(value, value);
    }
}

// =============================================================================
// Seed Scenarios
// =============================================================================

fn increment(value: i32) -> i32 {
    value + 1
}

#[rstest]
#[case::nothing(Maybe::Nothing, Maybe::Nothing)]
#[case::just_one(Maybe::Just(1), Maybe::Just(2))]
fn fmap_increment(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.fmap(increment), expected);
}

#[rstest]
fn nothing_equals_nothing() {
    assert_eq!(Maybe::<i32>::Nothing, Maybe::Nothing);
}

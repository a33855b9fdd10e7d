//! Property-based tests for the `Maybe` Monad instance.
//!
//! - **Left Identity**: `r#return(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(r#return) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use std::cell::Cell;

use maybe_laws::control::Maybe;
use maybe_laws::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;
use rstest::rstest;

type Lift = Maybe<()>;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

/// `n -> Just(n + offset)` when `offset` is even, `n -> Nothing` otherwise.
fn kleisli(offset: i32) -> impl Fn(i32) -> Maybe<i32> + Copy {
    move |n: i32| {
        if offset % 2 == 0 {
            Maybe::Just(n.wrapping_add(offset))
        } else {
            Maybe::Nothing
        }
    }
}

// =============================================================================
// Law Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity_law(value in any::<i32>(), offset in any::<i32>()) {
        let function = kleisli(offset);
        prop_assert_eq!(Lift::r#return(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_right_identity_law(value in any_maybe()) {
        prop_assert_eq!(value.flat_map(Lift::r#return::<i32>), value);
    }

    #[test]
    fn prop_associativity_law(value in any_maybe(), first in any::<i32>(), second in any::<i32>()) {
        let function1 = kleisli(first);
        let function2 = kleisli(second);

        let left = value.flat_map(function1).flat_map(function2);
        let right = value.flat_map(|x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_flat_map_with_return_is_fmap(value in any_maybe(), offset in any::<i32>()) {
        let lifted = value.flat_map(|n| Lift::r#return(n.wrapping_add(offset)));
        prop_assert_eq!(lifted, value.fmap(|n| n.wrapping_add(offset)));
    }

    #[test]
    fn prop_flatten_is_flat_map_identity(value in any::<Option<Option<i32>>>()) {
        let nested: Maybe<Maybe<i32>> = Maybe::from(value).fmap(Maybe::from);
        prop_assert_eq!(nested.flatten(), nested.flat_map(|inner| inner));
    }

    #[test]
    fn prop_return_is_pure(value in any::<i32>()) {
        prop_assert_eq!(Lift::r#return(value), Lift::pure(value));
    }
}

// =============================================================================
// Short-circuit
// =============================================================================

#[rstest]
fn flat_map_does_not_call_function_on_nothing() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::Nothing.flat_map(|n| {
        calls.set(calls.get() + 1);
        Maybe::Just(n)
    });

    assert_eq!(result, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Seed Scenarios
// =============================================================================

#[rstest]
#[case::just_one(Maybe::Just(1), Maybe::Just(2))]
#[case::nothing(Maybe::Nothing, Maybe::Nothing)]
fn flat_map_increment(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.flat_map(|x| Maybe::Just(x + 1)), expected);
}

#[rstest]
fn associativity_with_failing_first_step() {
    let value = Maybe::Just(1);
    let function1 = |_: i32| Maybe::<i32>::Nothing;
    let function2 = |_: i32| Maybe::Just(1);

    let left = value.flat_map(function1).flat_map(function2);
    let right = value.flat_map(|x| function1(x).flat_map(function2));

    assert_eq!(left, Maybe::Nothing);
    assert_eq!(right, Maybe::Nothing);
}

#[rstest]
#[case::just_one(Maybe::Just(1))]
#[case::nothing(Maybe::Nothing)]
fn flat_map_return_round_trip(#[case] value: Maybe<i32>) {
    assert_eq!(value.flat_map(Lift::r#return::<i32>), value);
}

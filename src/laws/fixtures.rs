//! Sample functions the scenario tables are built from.

use crate::control::Maybe;
use crate::typeclass::Functor;

/// A borrowed unary function on `i32`.
///
/// Scenario rows mix plain functions with curried closures, so they hold
/// both behind the same trait object.
pub type Endo<'a> = &'a dyn Fn(i32) -> i32;

/// A function from `i32` into `Maybe<i32>`, the shape `flat_map` takes.
pub type Kleisli = fn(i32) -> Maybe<i32>;

/// `x + 1`
#[must_use]
pub const fn increment(value: i32) -> i32 {
    value + 1
}

/// `x * y`, curried with [`curry2!`](crate::curry2!) to build `multiply(8)`.
#[must_use]
pub const fn multiply(first: i32, second: i32) -> i32 {
    first * second
}

/// [`increment`] lifted over a `Maybe`.
#[must_use]
pub fn increment_within(value: Maybe<i32>) -> Maybe<i32> {
    value.fmap(increment)
}

/// `x -> Nothing`
#[must_use]
pub const fn always_nothing(_: i32) -> Maybe<i32> {
    Maybe::Nothing
}

/// `x -> Just(1)`
#[must_use]
pub const fn always_just_one(_: i32) -> Maybe<i32> {
    Maybe::Just(1)
}

/// `x -> Just(x + 1)`
#[must_use]
pub const fn just_incremented(value: i32) -> Maybe<i32> {
    Maybe::Just(increment(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Just(1), Maybe::Just(2))]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn increment_within_maps_over_value(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(increment_within(input), expected);
    }

    #[rstest]
    fn kleisli_fixtures() {
        assert_eq!(always_nothing(5), Maybe::Nothing);
        assert_eq!(always_just_one(5), Maybe::Just(1));
        assert_eq!(just_incremented(5), Maybe::Just(6));
    }
}

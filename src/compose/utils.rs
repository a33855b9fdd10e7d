//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used
//! in functional programming:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`compose`]: Right-to-left composition of two unary functions (B combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`apply`]: Applies a function to an argument (`$` in Haskell)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use maybe_laws::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Composes two unary functions from right to left.
///
/// `compose(f, g)(x) == f(g(x))`. For more than two functions, see the
/// [`compose!`](crate::compose!) macro.
///
/// # Examples
///
/// ```
/// use maybe_laws::compose::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[inline]
#[must_use]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g(b, a)` such that
/// `g(b, a) = f(a, b)`.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use maybe_laws::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
#[must_use]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Applies `function` to `argument`.
///
/// On its own this is plain application. Flipped and curried it turns a value
/// into "apply this value to whatever function comes next", the `($ y)` of
/// the Applicative interchange law.
///
/// # Examples
///
/// ```
/// use maybe_laws::compose::{apply, flip};
/// use maybe_laws::curry2;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(apply(add_one, 1), 2);
///
/// let apply_to_one = curry2!(flip(apply::<i32, i32, fn(i32) -> i32>))(1);
/// assert_eq!(apply_to_one(add_one), 2);
/// ```
#[inline]
#[must_use]
pub fn apply<A, B, F>(function: F, argument: A) -> B
where
    F: FnOnce(A) -> B,
{
    function(argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 11)]
    fn compose_applies_inner_first(#[case] input: i32, #[case] expected: i32) {
        let composed = compose(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!(composed(input), expected);
    }

    #[rstest]
    fn compose_with_identity_is_neutral() {
        let double = |x: i32| x * 2;
        assert_eq!(compose(identity, double)(7), double(7));
        assert_eq!(compose(double, identity)(7), double(7));
    }

    #[rstest]
    fn flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[rstest]
    fn apply_calls_function_with_argument() {
        assert_eq!(apply(|x: i32| x * 10, 4), 40);
    }

    #[rstest]
    fn flipped_apply_takes_argument_first() {
        fn add_one(x: i32) -> i32 {
            x + 1
        }

        let flipped = flip(apply::<i32, i32, fn(i32) -> i32>);
        assert_eq!(flipped(1, add_one), 2);
    }
}

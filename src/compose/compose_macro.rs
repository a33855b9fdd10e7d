//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro, which composes any number of
//! functions from right to left, following mathematical notation.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Same as [`compose(f, g)`](crate::compose::compose())
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use maybe_laws::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Mapping a composition over a Maybe
///
/// ```
/// use maybe_laws::compose;
/// use maybe_laws::control::Maybe;
/// use maybe_laws::typeclass::Functor;
///
/// let increment = |x: i32| x + 1;
/// let times_eight = |x: i32| x * 8;
///
/// assert_eq!(Maybe::Just(1).fmap(compose!(increment, times_eight)), Maybe::Just(9));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::compose($outer_function, $inner_function)
    };

    // Folds from the right: compose!(f, g, h) = compose(f, compose(g, h))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose($outer_function, $crate::compose!($($remaining_functions),+))
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;

    #[test]
    fn compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn compose_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(add_one, double);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn compose_three_is_associative() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let subtract_three = |x: i32| x - 3;

        let left = compose!(add_one, compose!(double, subtract_three));
        let right = compose!(compose!(add_one, double), subtract_three);
        let flat = compose!(add_one, double, subtract_three);

        assert_eq!(left(10), right(10));
        assert_eq!(flat(10), 15);
    }

    #[test]
    fn compose_with_identity() {
        let double = |x: i32| x * 2;
        assert_eq!(compose!(identity, double)(4), 8);
        assert_eq!(compose!(double, identity)(4), 8);
    }

    #[test]
    fn compose_changes_types() {
        let to_string = |x: i32| x.to_string();
        let length = |s: String| s.len();
        assert_eq!(compose!(length, to_string)(12345), 5);
    }
}

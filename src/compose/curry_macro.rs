//! The `curry2!` macro for converting a binary function to curried form.
//!
//! The macro shares the function and the first argument through
//! `std::rc::Rc`, so the curried function and each partial application can be
//! called any number of times, and first arguments that are not `Copy` still
//! work. The returned closures implement `Fn`.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and returns
/// another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ## Partial application
///
/// ```
/// use maybe_laws::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let times_eight = curried(8);
/// let triple = curried(3);
///
/// assert_eq!(times_eight(2), 16);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## With closures
///
/// ```
/// use maybe_laws::curry2;
///
/// let add_closure = |first: i32, second: i32| first + second;
/// let curried = curry2!(add_closure);
///
/// assert_eq!(curried(10)(20), 30);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::flip;

    fn multiply(first: i32, second: i32) -> i32 {
        first * second
    }

    #[test]
    fn curry2_matches_uncurried_call() {
        let curried = curry2!(multiply);
        assert_eq!(curried(8)(3), multiply(8, 3));
    }

    #[test]
    fn curry2_partial_application_is_reusable() {
        let times_eight = curry2!(multiply)(8);
        assert_eq!(times_eight(1), 8);
        assert_eq!(times_eight(2), 16);
    }

    #[test]
    fn curry2_partial_application_is_cloneable() {
        let times_eight = curry2!(multiply)(8);
        let copy = times_eight.clone();
        assert_eq!(copy(3), times_eight(3));
    }

    #[test]
    fn curry2_with_string_first_argument() {
        let greet = |greeting: String, name: &str| format!("{greeting}, {name}");
        let hello = curry2!(greet)(String::from("Hello"));
        assert_eq!(hello("Alice"), "Hello, Alice");
        assert_eq!(hello("Bob"), "Hello, Bob");
    }

    #[test]
    fn curry2_of_flip_fixes_second_argument() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        let subtract_three = curry2!(flip(subtract))(3);
        assert_eq!(subtract_three(10), 7);
    }
}

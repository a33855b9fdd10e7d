//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Apply a function inside the context to a value inside the context (`apply`)
//! - Combine two applicative values using a function (`map2`, `product`)
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(identity).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! ## Consistency with Functor
//!
//! ```text
//! pure(f).apply(x) == x.fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//! use maybe_laws::typeclass::Applicative;
//!
//! // Lifting a pure value into the Maybe context
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Just(42));
//!
//! // Applying a wrapped function
//! let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x + 1);
//! assert_eq!(function.apply(Maybe::Just(1)), Maybe::Just(2));
//! ```

use super::functor::Functor;
use crate::control::Maybe;

/// A type class for types that support lifting values and applying wrapped
/// functions.
///
/// # Laws
///
/// See the [module documentation](self) for the five laws every instance
/// satisfies.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Applicative;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::pure("hello");
    /// assert_eq!(x, Maybe::Just("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x * 3);
    /// assert_eq!(function.apply(Maybe::Just(5)), Maybe::Just(15));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    /// assert_eq!(missing.apply(Maybe::Just(5)), Maybe::Nothing);
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y), Maybe::Just(3));
    /// assert_eq!(Maybe::Just(1).map2(Maybe::<i32>::Nothing, |x, y| x + y), Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    /// Only the function side is matched. A present function defers to
    /// [`Functor::fmap`], which propagates `Nothing` from `other`.
    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(function) => other.fmap(function),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }
}

//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::r#return(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::r#return) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//! use maybe_laws::typeclass::Monad;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(8).flat_map(half).flat_map(half), Maybe::Just(2));
//! assert_eq!(Maybe::Just(6).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// A type class for types that support sequencing dependent computations.
///
/// In Haskell terms, `flat_map` is `>>=` and `r#return` is `return`.
pub trait Monad: Applicative {
    /// Lifts a value into the monadic context.
    ///
    /// An alias for [`Applicative::pure`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Monad;
    ///
    /// assert_eq!(<Maybe<()>>::r#return(1), Maybe::Just(1));
    /// ```
    #[inline]
    fn r#return<B>(value: B) -> Self::WithType<B> {
        Self::pure(value)
    }

    /// Applies a function returning a monad to the value inside, and
    /// flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Monad;
    ///
    /// let result = Maybe::Just(5).flat_map(|n| Maybe::Just(n * 2));
    /// assert_eq!(result, Maybe::Just(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monads, discarding the value of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(1).then(Maybe::Just("next")), Maybe::Just("next"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("next")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    /// `Nothing` binds to `Nothing` without calling `function`. The result
    /// of `function` is returned as is.
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => function(value),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// assert_eq!(Maybe::<Maybe<i32>>::Nothing.flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn flatten(self) -> Maybe<A> {
        self.flat_map(|inner| inner)
    }
}

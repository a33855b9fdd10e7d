//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! fa.fmap(identity) == identity(fa)
//! ```
//!
//! ## Composition Law
//!
//! Mapping a composition is equivalent to mapping the functions in sequence:
//!
//! ```text
//! fa.fmap(compose(f, g)) == fa.fmap(g).fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//! use maybe_laws::typeclass::Functor;
//!
//! let just_value: Maybe<i32> = Maybe::Just(5);
//! let transformed: Maybe<String> = just_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Just("5".to_string()));
//!
//! // Nothing is preserved
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! let transformed: Maybe<String> = nothing.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(g).fmap(f) == fa.fmap(|x| f(g(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Functor;
    ///
    /// let x: Maybe<i32> = Maybe::Just(5);
    /// assert_eq!(x.fmap(|n| n * 2), Maybe::Just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is not consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Functor;
    ///
    /// let x: Maybe<String> = Maybe::Just("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::Just(5));
    /// // x is still available here
    /// assert!(x.is_just());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    /// use maybe_laws::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).void(), Maybe::Just(()));
    /// assert_eq!(Maybe::<i32>::Nothing.void(), Maybe::Nothing);
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    /// `Nothing` maps to `Nothing` without calling `function`.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(function(value)),
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

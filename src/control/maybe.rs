//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Nothing` or
//! `Just(value)`. It is the container the [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative) and
//! [`Monad`](crate::typeclass::Monad) instances are written for.
//!
//! `Nothing` is a payload-free variant: every absent value is the same value,
//! and `Nothing == Nothing` holds by construction. Two `Just` values are equal
//! when their payloads are equal.
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//!
//! let present: Maybe<i32> = Maybe::Just(1);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! assert!(present.is_just());
//! assert!(absent.is_nothing());
//! assert_ne!(present, absent);
//!
//! // Freshly built wrappers compare by their payload.
//! assert_eq!(Maybe::Just(vec![1, 2]), Maybe::Just(vec![1, 2]));
//! ```

use std::fmt;

use crate::typeclass::TypeConstructor;

/// A value that is either absent (`Nothing`) or present (`Just`).
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use maybe_laws::control::Maybe;
///
/// let value = Maybe::Just("hello");
/// assert_eq!(value.maybe(0, |s| s.len()), 5);
///
/// let missing: Maybe<&str> = Maybe::Nothing;
/// assert_eq!(missing.maybe(0, |s| s.len()), 0);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The absent value.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    ///
    /// assert!(Maybe::Just(1).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(1).is_nothing());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    ///
    /// let text = Maybe::Just(String::from("hello"));
    /// let length = text.as_ref().maybe(0, |s| s.len());
    /// assert_eq!(length, 5);
    /// // text is still available here
    /// assert!(text.is_just());
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Folds the `Maybe` into a plain value.
    ///
    /// Returns `default` for `Nothing` and `function(value)` for `Just(value)`.
    /// `function` is not called for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).maybe(0, |x| x * 2), 6);
    /// assert_eq!(Maybe::<i32>::Nothing.maybe(0, |x| x * 2), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Nothing => default,
            Self::Just(value) => function(value),
        }
    }

    /// Returns the contained value, or `default` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_laws::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).unwrap_or(0), 3);
    /// assert_eq!(Maybe::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Nothing => default,
            Self::Just(value) => value,
        }
    }
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => formatter.write_str("Nothing"),
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => formatter.write_str("Nothing"),
            Self::Just(value) => write!(formatter, "Just({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Eq, Send, Sync);
// `Default` is available even when the payload has no default
static_assertions::assert_impl_all!(Maybe<fn()>: Default);
static_assertions::assert_not_impl_any!(Maybe<String>: Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

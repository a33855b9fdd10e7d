//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] recovers that ability with a GAT: a type applied to
//! `A` names the same constructor applied to any other `B`. The type class
//! traits in this module tree are defined on top of it.
//!
//! # Example
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//! use maybe_laws::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let just_int: Maybe<i32> = Maybe::Just(42);
//! let nothing_string: Maybe<String> = reset(just_int);
//! assert_eq!(nothing_string, Maybe::Nothing);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a valid type constructor, so
    /// transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

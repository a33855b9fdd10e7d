//! # maybe-laws
//!
//! A `Maybe` type with Functor, Applicative and Monad instances, together with
//! an executable harness that checks every instance against its laws.
//!
//! ## Overview
//!
//! - **Maybe**: `Nothing | Just(value)`, in [`control`]
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative) and [`Monad`](typeclass::Monad),
//!   in [`typeclass`]
//! - **Combinators**: `identity`, `compose`, `flip`, `apply` and the
//!   `compose!`/`curry2!` macros, in [`compose`]
//! - **Law Harness**: scenario tables for each law and a [`Verifier`](laws::Verifier)
//!   that counts and compares them, in [`laws`]
//!
//! ## Example
//!
//! ```rust
//! use maybe_laws::prelude::*;
//!
//! let incremented = Maybe::Just(1).fmap(|x| x + 1);
//! assert_eq!(incremented, Maybe::Just(2));
//!
//! let chained = Maybe::Just(1).flat_map(|x| Maybe::Just(x * 10));
//! assert_eq!(chained, Maybe::Just(10));
//!
//! let absent: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(absent.fmap(|x| x + 1), Maybe::Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Maybe` type, the type class traits and the combinators.
///
/// # Usage
///
/// ```rust
/// use maybe_laws::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::typeclass::*;
}

pub mod compose;
pub mod config;
pub mod control;
pub mod laws;
pub mod typeclass;

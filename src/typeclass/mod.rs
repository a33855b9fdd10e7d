//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets the traits above name "the same container holding a
//! different type".
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//! use maybe_laws::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(1);
//! let mapped = lifted.fmap(|x| x + 1);
//! let bound = mapped.flat_map(|x| if x > 1 { Maybe::Just(x) } else { Maybe::Nothing });
//! assert_eq!(bound, Maybe::Just(2));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

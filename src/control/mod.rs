//! Data types the type class instances are written for.
//!
//! - [`Maybe`]: a value that is either `Nothing` or `Just(value)`
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::control::Maybe;
//!
//! let value: Maybe<i32> = Some(5).into();
//! assert_eq!(value, Maybe::Just(5));
//! ```

mod maybe;

pub use maybe::Maybe;

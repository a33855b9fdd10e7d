//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`curry2!`]: Convert a binary function to curried form
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`compose()`]: Composes two unary functions
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`apply`]: Applies a function to an argument
//!
//! # Examples
//!
//! ```
//! use maybe_laws::compose::{apply, flip};
//! use maybe_laws::{compose, curry2};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn multiply(x: i32, y: i32) -> i32 { x * y }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let times_eight = curry2!(multiply)(8);
//! let composed = compose!(add_one, times_eight);
//! assert_eq!(composed(1), 9);
//!
//! // ($ 1): feed 1 to whatever function comes next
//! let apply_to_one = curry2!(flip(apply::<i32, i32, fn(i32) -> i32>))(1);
//! assert_eq!(apply_to_one(add_one), 2);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Curry Equivalence**: `curry2!(f)(a)(b) == f(a, b)`

mod compose_macro;
mod curry_macro;
mod utils;

pub use utils::{apply, compose, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;

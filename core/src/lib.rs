//! Optional and fallible value containers with short-circuiting combinators.
//!
//! [`Maybe`] holds a value or nothing; [`Outcome`] holds a value or an error. Both are chained with `map`,
//! `bind` and friends, and once a chain reaches an absent or failed value, no further step runs.
//!
//! Enable the `tracing` feature to emit a `trace` event whenever a combinator short-circuits.

pub mod maybe;
pub mod outcome;
pub mod error;
pub mod ext;

mod trace;

pub use error::NoneError;
pub use maybe::Maybe;
pub use outcome::Outcome;

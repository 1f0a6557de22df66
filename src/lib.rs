//! Runtime currying with accumulated positional and keyword arguments.
//!
//! A [`Curry`] wraps a function taking [`Arguments`]. Calling it, and then
//! calling the [`Curried`] values it hands back, accumulates arguments until
//! either an empty call is made or the configured [`MinArgs`] threshold is
//! reached, at which point the function runs and its result is returned.
//!
//! ```
//! use curried::{args, Arguments, Curry};
//!
//! fn add3(arguments: Arguments<i32>) -> i32 {
//!     arguments.args().iter().sum()
//! }
//!
//! let add3 = Curry::new(add3).min_args(3)?;
//! let one = add3.call(args![1])?.into_partial().unwrap();
//! let two = one.call(args![2])?.into_partial().unwrap();
//! assert_eq!(two.call(args![3])?.into_complete(), Some(6));
//!
//! // `one` is unchanged and can branch again.
//! assert_eq!(one.call(args![10, 20])?.into_complete(), Some(31));
//! # Ok::<(), curried::CurryError>(())
//! ```
//!
//! Typed functions can be bridged with the [`curry`](macro@curry) attribute, which adds a
//! `<name>_curried()` constructor taking dynamic [`Value`] arguments.

mod arguments;
mod attribute;
mod bind;
mod error;
mod factory;
mod options;

pub use arguments::{Arguments, Kwargs};
pub use attribute::Attribute;
pub use bind::{BindError, Binder};
pub use error::CurryError;
pub use factory::{curry, Applied, Curried, Curry, Target};
pub use options::{CurryOptions, MinArgs};

/// Adds a `<name>_curried()` constructor next to a function.
///
/// The generated factory takes [`Value`] arguments, binds them to the
/// function's parameters by position or name, and returns
/// `Result<Output, BindError>`. Accepts `min_args = N` and
/// `unique_keys = bool`.
///
/// ```
/// use curried::{args, curry};
/// use serde_json::json;
///
/// #[curry(min_args = 2)]
/// fn scale(value: f64, factor: f64) -> f64 {
///     value * factor
/// }
///
/// let result = scale_curried()
///     .call(args![factor = json!(2.0)])?
///     .into_partial()
///     .unwrap()
///     .call(args![value = json!(1.5)])?
///     .into_complete()
///     .unwrap();
/// assert_eq!(result.unwrap(), 3.0);
/// # Ok::<(), curried::CurryError>(())
/// ```
pub use curried_macros::curry;
pub use serde_json::Value;

//! Function chaining for Strand.
//!
//! A [`Chain`] is a flat sequence of [`Link`]s, callables and literal values,
//! that evaluates as one nested call without any glue code to match argument
//! counts. Callables describe themselves with a
//! [`Signature`](strand_core::Signature), and [`Chain::build`] uses those
//! signatures at runtime to decide how many values each callable consumes.
//!
//! Chains are built with [`Chain::compose`], [`Chain::then`],
//! [`Chain::merge_compose`], and [`Chain::merge_then`]. None of these check
//! the shape of the chain; that happens only when it is built.
//!
//! # Example
//!
//! ```
//! use strand_chain::{Chain, Link, VarArgs};
//! use strand_core::{Value, func, variadic};
//!
//! let scale_sum = Link::callable(variadic(|a: i32, ns: Vec<i32>| {
//!     ns.iter().map(|n| a * n).sum::<i32>()
//! }));
//! let three = Link::callable(func(|| 3));
//!
//! let tail = [
//!     Link::value(10),
//!     Link::value(1),
//!     Link::value(2),
//!     three,
//!     Link::value("dog"),
//!     Link::value(9),
//! ];
//!
//! // Without a marker, every following `i32` is taken: 10 * (1 + 2 + 3).
//! let greedy = Chain::new().compose([scale_sum.clone()]).compose(tail.clone());
//! assert_eq!(
//!     greedy.build().unwrap(),
//!     [Value::from(60), Value::from("dog"), Value::from(9)],
//! );
//!
//! // With a marker, exactly two values are taken: 10 * (1 + 2).
//! let counted = Chain::new()
//!     .compose([scale_sum, Link::from(VarArgs(2))])
//!     .compose(tail);
//! assert_eq!(
//!     counted.build().unwrap(),
//!     [Value::from(30), Value::from(3), Value::from("dog"), Value::from(9)],
//! );
//! ```

pub mod build;
mod chain;
mod error;
mod link;

pub use chain::Chain;
pub use error::ChainError;
pub use link::{Link, VarArgs};

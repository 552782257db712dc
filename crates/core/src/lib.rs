//! Core traits and types for the Strand function-chaining engine.
//!
//! This crate defines the shared abstractions a chain is assembled from:
//!
//! - [`Value`] — a type-erased, cheaply clonable value passed between links
//! - [`Kind`] — the runtime type of a value
//! - [`Signature`] — the parameters a callable declares, including a trailing
//!   variadic parameter
//! - [`Callable`] — a function-like link that publishes its signature and is
//!   invoked with type-erased arguments
//! - [`func`], [`func_multi`], [`variadic`], [`variadic_multi`] — adapters
//!   that turn ordinary closures into callables

mod callable;
mod error;
mod function;
mod signature;
mod value;

pub use callable::Callable;
pub use error::CallError;
pub use function::{
    Function, IntoValues, Multiple, Params, Single, VariadicFunction, VariadicParams, func,
    func_multi, variadic, variadic_multi,
};
pub use signature::Signature;
pub use value::{Datum, Kind, Value};

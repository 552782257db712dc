//! Stack-based evaluation of a chain.
//!
//! # Algorithm
//!
//! A chain reads as a nested call expression: each callable takes as its
//! arguments the values that follow it. Evaluation walks the links from last
//! to first with a single stack:
//!
//! - A literal is pushed as is.
//! - A callable pops the values it needs, with the top of the stack bound to
//!   its first parameter, and pushes its results back so that its first
//!   result ends up on top.
//!
//! Whatever remains on the stack, read from top to bottom, is the result.
//! For example, `[f, g, 1, 2, 3]` with `g` taking two arguments evaluates to
//! `f(g(1, 2), 3)` when `f` takes two arguments, and to `[f(g(1, 2)), 3]`
//! when it takes one.
//!
//! # Variadic Callables
//!
//! A variadic callable always takes its fixed arguments. What it takes for
//! its variadic parameter depends on the top of the stack:
//!
//! - A [`VarArgs`] marker is popped, and exactly that many values follow the
//!   fixed arguments.
//! - Otherwise, every consecutive value after the fixed arguments whose kind
//!   equals the variadic element kind is taken, possibly none.
//!
//! On an empty stack a variadic callable needs its full [`arity`], counting
//! the variadic parameter as one, so it always fails as incomplete.
//!
//! [`arity`]: strand_core::Signature::arity


use strand_core::{Signature, Value};
use tracing::{debug, trace};

use crate::{ChainError, Link, VarArgs};

/// Evaluates `links` and returns the values left on the stack.
pub(crate) fn evaluate(links: &[Link]) -> Result<Vec<Value>, ChainError> {
    debug!(links = links.len(), "building chain");

    let mut stack: Vec<Value> = Vec::new();

    for (index, link) in links.iter().enumerate().rev() {
        let callable = match link {
            Link::Literal(value) => {
                trace!(link = index, ?value, "push literal");
                stack.push(value.clone());
                continue;
            }
            Link::Callable(callable) => callable,
        };

        let required = resolve_arity(callable.signature(), &mut stack);
        let available = stack.len();
        trace!(link = index, required, available, "call");

        if required > available {
            debug!(link = index, required, available, "incomplete chain");
            return Err(ChainError::Incomplete {
                link: index,
                required,
                available,
            });
        }

        // The top of the stack is the first argument.
        let args: Vec<Value> = stack.drain(available - required..).rev().collect();

        let results = callable.call(args).map_err(|source| {
            debug!(link = index, error = %source, "call failed");
            ChainError::Call {
                link: index,
                source,
            }
        })?;

        // The first result ends up on top.
        stack.extend(results.into_iter().rev());
    }

    stack.reverse();
    debug!(results = stack.len(), "chain built");

    Ok(stack)
}

/// Returns how many stack values a callable with `signature` consumes.
///
/// Pops a [`VarArgs`] marker if one directs a variadic callable.
fn resolve_arity(signature: &Signature, stack: &mut Vec<Value>) -> usize {
    let Some(element) = signature.variadic_kind() else {
        return signature.arity();
    };
    if stack.is_empty() {
        return signature.arity();
    }

    let fixed = signature.fixed_arity();

    let marker = stack.last().and_then(Value::downcast_ref::<VarArgs>).copied();
    if let Some(VarArgs(count)) = marker {
        stack.pop();
        trace!(count, "variadic count from marker");
        return fixed.saturating_add(count);
    }

    let available = stack.len();
    let mut required = fixed;
    while required < available && stack[available - 1 - required].kind() == element {
        required += 1;
    }
    trace!(matched = required - fixed, %element, "variadic count from kinds");

    required
}

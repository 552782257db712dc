use crate::{CallError, Signature, Value};

/// A trait representing a function-like link in a chain.
///
/// A `Callable` publishes its [`Signature`] up front so an evaluator can
/// decide how many values to hand it without knowing its concrete type, then
/// receives those values in left-to-right parameter order and returns its
/// results in left-to-right order.
///
/// Most callables are built from ordinary closures with [`func`],
/// [`func_multi`], [`variadic`], or [`variadic_multi`], which derive the
/// signature from the closure's parameter types. Implement this trait by hand
/// when a callable needs to decide its behavior from the runtime kinds of its
/// arguments.
///
/// [`func`]: crate::func
/// [`func_multi`]: crate::func_multi
/// [`variadic`]: crate::variadic
/// [`variadic_multi`]: crate::variadic_multi
///
/// # Example
///
/// ```rust
/// use strand_core::{CallError, Callable, Kind, Signature, Value};
///
/// /// Counts its arguments, whatever they are.
/// struct Count {
///     signature: Signature,
/// }
///
/// impl Callable for Count {
///     fn signature(&self) -> &Signature {
///         &self.signature
///     }
///
///     fn call(&self, args: Vec<Value>) -> Result<Vec<Value>, CallError> {
///         Ok(vec![Value::from(args.len())])
///     }
/// }
///
/// let count = Count {
///     signature: Signature::variadic(vec![], Kind::of::<bool>()),
/// };
///
/// let results = count.call(vec![Value::from(true), Value::from(false)]).unwrap();
/// assert_eq!(results, [Value::from(2_usize)]);
/// ```
pub trait Callable: Send + Sync {
    /// Returns the parameters this callable accepts.
    fn signature(&self) -> &Signature;

    /// Calls this callable with arguments in parameter order.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if the arguments do not fit the signature or
    /// the callable fails for its own reasons.
    fn call(&self, args: Vec<Value>) -> Result<Vec<Value>, CallError>;
}

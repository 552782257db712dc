use std::{fmt, marker::PhantomData};

use crate::{CallError, Callable, Datum, Kind, Signature, Value};

/// Output marker for functions that return exactly one value.
#[derive(Debug)]
pub struct Single;

/// Output marker for functions that return a tuple of values.
#[derive(Debug)]
pub struct Multiple;

/// A closure whose parameter list is `Args`.
///
/// Implemented for every `Fn` of up to six parameters whose parameter types
/// are [`Datum`] and `Clone`.
pub trait Params<Args>: Send + Sync + 'static {
    type Output;

    /// Returns the kinds of the parameters, in order.
    fn kinds() -> Vec<Kind>;

    /// Extracts typed arguments from `args` and calls the closure.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if an argument is missing or of the wrong kind.
    fn invoke(&self, args: Vec<Value>) -> Result<Self::Output, CallError>;
}

/// A closure whose fixed parameters are `Args`, followed by a `Vec<E>` that
/// collects the variadic arguments.
///
/// Implemented for every `Fn` of up to five fixed parameters.
pub trait VariadicParams<Args, E>: Send + Sync + 'static {
    type Output;

    /// Returns the kinds of the fixed parameters, in order.
    fn kinds() -> Vec<Kind>;

    /// Extracts typed arguments from `args` and calls the closure.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if an argument is missing or of the wrong kind.
    fn invoke(&self, args: Vec<Value>) -> Result<Self::Output, CallError>;
}

/// Converts a tuple of results into values, first element first.
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

/// A [`Callable`] built from a closure with fixed parameters.
pub struct Function<F, Args, Out> {
    function: F,
    signature: Signature,
    _marker: PhantomData<fn(Args) -> Out>,
}

/// A [`Callable`] built from a closure whose last parameter is variadic.
pub struct VariadicFunction<F, Args, E, Out> {
    function: F,
    signature: Signature,
    _marker: PhantomData<fn(Args, Vec<E>) -> Out>,
}

/// Adapts a closure that returns a single value.
///
/// # Example
///
/// ```
/// use strand_core::{Callable, Value, func};
///
/// let add = func(|a: i32, b: i32| a + b);
///
/// assert_eq!(add.signature().arity(), 2);
/// assert_eq!(
///     add.call(vec![Value::from(2), Value::from(3)]).unwrap(),
///     [Value::from(5)],
/// );
/// ```
pub fn func<F, Args>(function: F) -> Function<F, Args, Single>
where
    F: Params<Args>,
    F::Output: Datum,
{
    Function::new(function)
}

/// Adapts a closure that returns a tuple of values.
///
/// The unit tuple `()` produces no values at all.
///
/// # Example
///
/// ```
/// use strand_core::{Callable, Value, func_multi};
///
/// let div_rem = func_multi(|a: i32, b: i32| (a / b, a % b));
///
/// assert_eq!(
///     div_rem.call(vec![Value::from(7), Value::from(2)]).unwrap(),
///     [Value::from(3), Value::from(1)],
/// );
/// ```
pub fn func_multi<F, Args>(function: F) -> Function<F, Args, Multiple>
where
    F: Params<Args>,
    F::Output: IntoValues,
{
    Function::new(function)
}

/// Adapts a closure with a trailing variadic `Vec<E>` that returns a single
/// value.
///
/// # Example
///
/// ```
/// use strand_core::{Callable, Value, variadic};
///
/// let scale_sum = variadic(|a: i32, ns: Vec<i32>| ns.iter().map(|n| a * n).sum::<i32>());
///
/// assert_eq!(scale_sum.signature().arity(), 2);
/// assert_eq!(
///     scale_sum
///         .call(vec![Value::from(10), Value::from(1), Value::from(2)])
///         .unwrap(),
///     [Value::from(30)],
/// );
/// ```
pub fn variadic<F, Args, E>(function: F) -> VariadicFunction<F, Args, E, Single>
where
    F: VariadicParams<Args, E>,
    F::Output: Datum,
    E: Datum,
{
    VariadicFunction::new(function)
}

/// Adapts a closure with a trailing variadic `Vec<E>` that returns a tuple of
/// values.
pub fn variadic_multi<F, Args, E>(function: F) -> VariadicFunction<F, Args, E, Multiple>
where
    F: VariadicParams<Args, E>,
    F::Output: IntoValues,
    E: Datum,
{
    VariadicFunction::new(function)
}

impl<F, Args, Out> Function<F, Args, Out>
where
    F: Params<Args>,
{
    fn new(function: F) -> Self {
        Self {
            function,
            signature: Signature::fixed(F::kinds()),
            _marker: PhantomData,
        }
    }
}

impl<F, Args, E, Out> VariadicFunction<F, Args, E, Out>
where
    F: VariadicParams<Args, E>,
    E: Datum,
{
    fn new(function: F) -> Self {
        Self {
            function,
            signature: Signature::variadic(F::kinds(), Kind::of::<E>()),
            _marker: PhantomData,
        }
    }
}

impl<F, Args> Callable for Function<F, Args, Single>
where
    F: Params<Args>,
    F::Output: Datum,
{
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Vec<Value>) -> Result<Vec<Value>, CallError> {
        self.signature.check(&args)?;
        let output = self.function.invoke(args)?;
        Ok(vec![Value::new(output)])
    }
}

impl<F, Args> Callable for Function<F, Args, Multiple>
where
    F: Params<Args>,
    F::Output: IntoValues,
{
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Vec<Value>) -> Result<Vec<Value>, CallError> {
        self.signature.check(&args)?;
        Ok(self.function.invoke(args)?.into_values())
    }
}

impl<F, Args, E> Callable for VariadicFunction<F, Args, E, Single>
where
    F: VariadicParams<Args, E>,
    F::Output: Datum,
    E: Datum,
{
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Vec<Value>) -> Result<Vec<Value>, CallError> {
        self.signature.check(&args)?;
        let output = self.function.invoke(args)?;
        Ok(vec![Value::new(output)])
    }
}

impl<F, Args, E> Callable for VariadicFunction<F, Args, E, Multiple>
where
    F: VariadicParams<Args, E>,
    F::Output: IntoValues,
    E: Datum,
{
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Vec<Value>) -> Result<Vec<Value>, CallError> {
        self.signature.check(&args)?;
        Ok(self.function.invoke(args)?.into_values())
    }
}

impl<F, Args, Out> fmt::Debug for Function<F, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl<F, Args, E, Out> fmt::Debug for VariadicFunction<F, Args, E, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariadicFunction")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Hands out typed arguments one at a time.
struct ArgReader {
    values: std::vec::IntoIter<Value>,
    index: usize,
    total: usize,
}

impl ArgReader {
    fn new(values: Vec<Value>) -> Self {
        let total = values.len();
        Self {
            values: values.into_iter(),
            index: 0,
            total,
        }
    }

    fn next<T: Datum + Clone>(&mut self) -> Result<T, CallError> {
        let index = self.index;
        self.index += 1;

        let value = self.values.next().ok_or(CallError::ArgumentCount {
            expected: index + 1,
            actual: self.total,
        })?;

        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| CallError::ArgumentKind {
                index,
                expected: Kind::of::<T>(),
                actual: value.kind(),
            })
    }

    fn rest<E: Datum + Clone>(&mut self) -> Result<Vec<E>, CallError> {
        let mut rest = Vec::with_capacity(self.values.len());
        while self.values.len() > 0 {
            rest.push(self.next()?);
        }
        Ok(rest)
    }
}

macro_rules! impl_params {
    ($($ty:ident $arg:ident),*) => {
        impl<Func, Ret, $($ty,)*> Params<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Ret + Send + Sync + 'static,
            $($ty: Datum + Clone,)*
        {
            type Output = Ret;

            fn kinds() -> Vec<Kind> {
                vec![$(Kind::of::<$ty>()),*]
            }

            #[allow(unused_mut, unused_variables)]
            fn invoke(&self, args: Vec<Value>) -> Result<Ret, CallError> {
                let mut args = ArgReader::new(args);
                $(let $arg = args.next::<$ty>()?;)*
                Ok((self)($($arg),*))
            }
        }

        impl<Func, Ret, Elem, $($ty,)*> VariadicParams<($($ty,)*), Elem> for Func
        where
            Func: Fn($($ty,)* Vec<Elem>) -> Ret + Send + Sync + 'static,
            Elem: Datum + Clone,
            $($ty: Datum + Clone,)*
        {
            type Output = Ret;

            fn kinds() -> Vec<Kind> {
                vec![$(Kind::of::<$ty>()),*]
            }

            #[allow(unused_mut)]
            fn invoke(&self, args: Vec<Value>) -> Result<Ret, CallError> {
                let mut args = ArgReader::new(args);
                $(let $arg = args.next::<$ty>()?;)*
                let rest = args.rest::<Elem>()?;
                Ok((self)($($arg,)* rest))
            }
        }
    };
}

impl_params!();
impl_params!(A a);
impl_params!(A a, B b);
impl_params!(A a, B b, C c);
impl_params!(A a, B b, C c, D d);
impl_params!(A a, B b, C c, D d, E e);

// Six parameters is fixed-only; a variadic slot would make seven.
impl<Func, Ret, A, B, C, D, E, G> Params<(A, B, C, D, E, G)> for Func
where
    Func: Fn(A, B, C, D, E, G) -> Ret + Send + Sync + 'static,
    A: Datum + Clone,
    B: Datum + Clone,
    C: Datum + Clone,
    D: Datum + Clone,
    E: Datum + Clone,
    G: Datum + Clone,
{
    type Output = Ret;

    fn kinds() -> Vec<Kind> {
        vec![
            Kind::of::<A>(),
            Kind::of::<B>(),
            Kind::of::<C>(),
            Kind::of::<D>(),
            Kind::of::<E>(),
            Kind::of::<G>(),
        ]
    }

    fn invoke(&self, args: Vec<Value>) -> Result<Ret, CallError> {
        let mut args = ArgReader::new(args);
        Ok((self)(
            args.next()?,
            args.next()?,
            args.next()?,
            args.next()?,
            args.next()?,
            args.next()?,
        ))
    }
}

macro_rules! impl_into_values {
    ($($ty:ident $val:ident),*) => {
        impl<$($ty: Datum,)*> IntoValues for ($($ty,)*) {
            fn into_values(self) -> Vec<Value> {
                let ($($val,)*) = self;
                vec![$(Value::new($val)),*]
            }
        }
    };
}

impl_into_values!();
impl_into_values!(A a);
impl_into_values!(A a, B b);
impl_into_values!(A a, B b, C c);
impl_into_values!(A a, B b, C c, D d);
impl_into_values!(A a, B b, C c, D d, E e);
impl_into_values!(A a, B b, C c, D d, E e, G g);

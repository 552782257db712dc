use std::fmt;

use crate::{CallError, Kind, Value};

/// Describes the parameters a [`Callable`](crate::Callable) accepts.
///
/// A signature lists the kinds of its fixed parameters in order and, for a
/// variadic callable, the element kind of the trailing variadic parameter.
/// The variadic parameter counts as one parameter toward the [`arity`].
///
/// [`arity`]: Signature::arity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Kind>,
    variadic: Option<Kind>,
}

impl Signature {
    /// Creates a signature with only fixed parameters.
    #[must_use]
    pub fn fixed(params: Vec<Kind>) -> Self {
        Self {
            params,
            variadic: None,
        }
    }

    /// Creates a signature whose last parameter accepts any number of
    /// `element` values.
    #[must_use]
    pub fn variadic(params: Vec<Kind>, element: Kind) -> Self {
        Self {
            params,
            variadic: Some(element),
        }
    }

    /// Returns the declared number of parameters.
    ///
    /// A trailing variadic parameter counts as one.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len() + usize::from(self.variadic.is_some())
    }

    /// Returns the number of parameters before the variadic one.
    #[must_use]
    pub fn fixed_arity(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Returns the element kind of the variadic parameter, if any.
    #[must_use]
    pub fn variadic_kind(&self) -> Option<Kind> {
        self.variadic
    }

    /// Returns the kinds of the fixed parameters.
    #[must_use]
    pub fn params(&self) -> &[Kind] {
        &self.params
    }

    /// Validates that `args` fit this signature.
    ///
    /// A fixed signature needs exactly one argument per parameter. A variadic
    /// signature needs at least one argument per fixed parameter, and every
    /// argument past those must match the variadic element kind.
    ///
    /// # Errors
    ///
    /// - Returns [`CallError::ArgumentCount`] if the number of arguments does
    ///   not fit.
    /// - Returns [`CallError::ArgumentKind`] for the first argument whose kind
    ///   differs from its parameter.
    pub fn check(&self, args: &[Value]) -> Result<(), CallError> {
        let fixed = self.params.len();
        let count_fits = match self.variadic {
            Some(_) => args.len() >= fixed,
            None => args.len() == fixed,
        };
        if !count_fits {
            return Err(CallError::ArgumentCount {
                expected: fixed,
                actual: args.len(),
            });
        }

        let expected = self
            .params
            .iter()
            .copied()
            .chain(self.variadic.into_iter().cycle());

        for (index, (arg, expected)) in args.iter().zip(expected).enumerate() {
            let actual = arg.kind();
            if actual != expected {
                return Err(CallError::ArgumentKind {
                    index,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = self.params.iter().map(ToString::to_string);
        let variadic = self.variadic.iter().map(|kind| format!("...{kind}"));
        let params: Vec<_> = fixed.chain(variadic).collect();
        write!(f, "fn({})", params.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_signature() -> Signature {
        Signature::variadic(vec![Kind::of::<i32>()], Kind::of::<i32>())
    }

    #[test]
    fn arity_counts_variadic_slot_once() {
        let fixed = Signature::fixed(vec![Kind::of::<i32>(), Kind::of::<bool>()]);
        assert_eq!(fixed.arity(), 2);
        assert_eq!(fixed.fixed_arity(), 2);
        assert!(!fixed.is_variadic());

        let variadic = sum_signature();
        assert_eq!(variadic.arity(), 2);
        assert_eq!(variadic.fixed_arity(), 1);
        assert_eq!(variadic.variadic_kind(), Some(Kind::of::<i32>()));
    }

    #[test]
    fn check_success() {
        let fixed = Signature::fixed(vec![Kind::of::<i32>(), Kind::of::<&str>()]);
        assert!(fixed.check(&[Value::from(1), Value::from("a")]).is_ok());

        let variadic = sum_signature();
        assert!(variadic.check(&[Value::from(1)]).is_ok());
        assert!(
            variadic
                .check(&[Value::from(1), Value::from(2), Value::from(3)])
                .is_ok()
        );
    }

    #[test]
    fn check_count_mismatch() {
        let fixed = Signature::fixed(vec![Kind::of::<i32>(), Kind::of::<i32>()]);

        let err = fixed.check(&[Value::from(1)]).unwrap_err();
        match err {
            CallError::ArgumentCount { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Unexpected error type: {other:?}"),
        }

        let err = sum_signature().check(&[]).unwrap_err();
        assert!(matches!(
            err,
            CallError::ArgumentCount {
                expected: 1,
                actual: 0
            }
        ));
    }

    #[test]
    fn check_kind_mismatch() {
        let err = sum_signature()
            .check(&[Value::from(1), Value::from(2), Value::from("three")])
            .unwrap_err();

        match err {
            CallError::ArgumentKind {
                index,
                expected,
                actual,
            } => {
                assert_eq!(index, 2);
                assert_eq!(expected, Kind::of::<i32>());
                assert_eq!(actual, Kind::of::<&str>());
            }
            other => panic!("Unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn display_marks_variadic_parameter() {
        assert_eq!(sum_signature().to_string(), "fn(i32, ...i32)");
        assert_eq!(Signature::fixed(vec![]).to_string(), "fn()");
    }
}

use std::{fmt, sync::Arc};

use strand_core::{Callable, Datum, Value};

/// Sets how many values the next variadic callable binds to its variadic
/// parameter.
///
/// Placed directly after a variadic callable in a chain, `VarArgs(k)` replaces
/// the default behavior of binding every consecutive value whose kind matches
/// the variadic element kind. The marker itself is not passed as an argument.
/// Anywhere else, it is an ordinary literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarArgs(pub usize);

/// One element of a [`Chain`](crate::Chain).
#[derive(Clone)]
pub enum Link {
    /// A function-like link invoked during evaluation.
    Callable(Arc<dyn Callable>),
    /// A value pushed onto the evaluation stack as is.
    Literal(Value),
}

impl Link {
    /// Creates a link that calls `callable`.
    pub fn callable<C: Callable + 'static>(callable: C) -> Self {
        Self::Callable(Arc::new(callable))
    }

    /// Creates a literal link holding `value`.
    ///
    /// An existing [`Value`] is held as is, the same as `Link::from(value)`.
    pub fn value<T: Datum>(value: T) -> Self {
        Self::Literal(Value::new(value))
    }

    /// Creates a literal link holding the empty value.
    #[must_use]
    pub fn nil() -> Self {
        Self::Literal(Value::nil())
    }

    /// Creates a [`VarArgs`] marker link.
    #[must_use]
    pub fn var_args(count: usize) -> Self {
        Self::value(VarArgs(count))
    }

    /// Returns the held value if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Callable(_) => None,
        }
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }
}

impl From<Value> for Link {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<VarArgs> for Link {
    fn from(marker: VarArgs) -> Self {
        Self::value(marker)
    }
}

impl From<Arc<dyn Callable>> for Link {
    fn from(callable: Arc<dyn Callable>) -> Self {
        Self::Callable(callable)
    }
}

/// Literals compare by value, callables by identity.
impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(callable) => write!(f, "Callable({})", callable.signature()),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use strand_core::func;

    use super::*;

    #[test]
    fn literals_compare_by_value() {
        assert_eq!(Link::value(1), Link::from(Value::from(1)));
        assert_ne!(Link::value(1), Link::value(2));
        assert_eq!(Link::nil(), Link::value(()));
        assert_eq!(Link::var_args(2), Link::from(VarArgs(2)));
    }

    #[test]
    fn existing_value_is_held_as_is() {
        let link = Link::value(Value::from(1));

        assert_eq!(link, Link::from(Value::from(1)));
        assert_eq!(
            link.as_literal().map(Value::kind),
            Some(strand_core::Kind::of::<i32>())
        );
    }

    #[test]
    fn callables_compare_by_identity() {
        let add = Link::callable(func(|a: i32, b: i32| a + b));
        let same_body = Link::callable(func(|a: i32, b: i32| a + b));

        assert_eq!(add, add.clone());
        assert_ne!(add, same_body);
        assert_ne!(add, Link::value(0));
    }

    #[test]
    fn debug_shows_signature_or_value() {
        let negate = Link::callable(func(|a: i32| -a));

        assert_eq!(format!("{negate:?}"), "Callable(fn(i32))");
        assert_eq!(format!("{:?}", Link::value("dog")), "Literal(\"dog\")");
        assert_eq!(format!("{:?}", Link::var_args(3)), "Literal(VarArgs(3))");
    }

    #[test]
    fn accessors() {
        let literal = Link::value(7);
        assert_eq!(literal.as_literal(), Some(&Value::from(7)));
        assert!(!literal.is_callable());

        let callable = Link::callable(func(|| 7));
        assert!(callable.as_literal().is_none());
        assert!(callable.is_callable());
    }
}

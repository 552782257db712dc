use std::{
    any::{Any, TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A type that can be carried by a [`Value`].
///
/// This is implemented automatically for every `'static` type that is
/// `Debug`, `PartialEq`, `Send`, and `Sync`, so it never needs to be
/// implemented by hand.
pub trait Datum: Any + fmt::Debug + PartialEq + Send + Sync {}

impl<T> Datum for T where T: Any + fmt::Debug + PartialEq + Send + Sync {}

/// A type-erased value passed between the links of a chain.
///
/// A `Value` can hold any [`Datum`]. Cloning a `Value` is cheap because the
/// payload is shared, which also makes values safe to hand to several
/// evaluations running on different threads.
///
/// # Example
///
/// ```
/// use strand_core::{Kind, Value};
///
/// let value = Value::from(42);
///
/// assert_eq!(value.kind(), Kind::of::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.downcast_ref::<i64>(), None);
/// ```
#[derive(Clone)]
pub struct Value(Arc<dyn Erased>);

impl Value {
    /// Wraps `value` in a new `Value`.
    ///
    /// A `Value` passed in is returned as is rather than nested, so its kind
    /// stays the kind of its payload.
    pub fn new<T: Datum>(value: T) -> Self {
        match (&value as &dyn Any).downcast_ref::<Value>() {
            Some(value) => value.clone(),
            None => Self(Arc::new(value)),
        }
    }

    /// Creates the empty value, which holds `()`.
    #[must_use]
    pub fn nil() -> Self {
        Self::new(())
    }

    /// Returns `true` if this is the empty value.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.is::<()>()
    }

    /// Returns the runtime kind of the held payload.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind()
    }

    /// Returns `true` if the payload is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Returns a reference to the payload if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_erased(other.0.as_any())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_erased(f)
    }
}

/// Object-safe view of a [`Datum`].
trait Erased: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn kind(&self) -> Kind;
    fn eq_erased(&self, other: &dyn Any) -> bool;
    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Datum> Erased for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> Kind {
        Kind::of::<T>()
    }

    fn eq_erased(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The runtime type of a [`Value`].
///
/// Kinds compare equal only when they describe exactly the same type, so
/// `i32` and `i64` are different kinds.
#[derive(Debug, Clone, Copy)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

impl Kind {
    /// Returns the kind describing `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the name of the described type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl From<&Value> for Kind {
    fn from(value: &Value) -> Self {
        value.kind()
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(val: $ty) -> Self {
                    Value::new(val)
                }
            }
        )*
    };
}

impl_from_for_value!(
    (),
    bool,
    char,
    i32,
    i64,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

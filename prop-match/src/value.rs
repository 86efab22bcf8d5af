//! The [`value`](self) module implements the dynamically typed [`Value`] that
//! is stored for each property, and the [`ToValue`] conversion trait.

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Object safe equality and formatting for any value that may be stored inside
/// a [`Value`].
///
/// This is implemented for every `T: PartialEq + Debug + Send + Sync + 'static`.
pub trait DynValue: Any + Debug + Send + Sync {
    /// Get the value as [`Any`] to be able to downcast it.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` if `other` has the same type as `self` and both are equal.
    fn dyn_eq(&self, other: &dyn DynValue) -> bool;

    /// Name of the concrete type of the value.
    fn type_name(&self) -> &'static str;
}

impl<T> DynValue for T
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Value of a single property.
///
/// A value is either [`Value::Null`] (the property is absent, e.g. a `None`
/// field) or a shared reference to a type erased object.
#[derive(Clone, Default)]
pub enum Value {
    /// The property has no value.
    #[default]
    Null,

    /// The property has a value.
    Object(Arc<dyn DynValue>),
}

impl Value {
    /// Create a new [`Value`] from the passed `value`.
    pub fn new<T: DynValue>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    /// Returns `true` if this is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get a reference to the stored object as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Null => None,
            Self::Object(o) => o.as_any().downcast_ref::<T>(),
        }
    }

    /// Name of the type of the stored object, `"null"` for [`Value::Null`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Object(o) => o.type_name(),
        }
    }

    /// Returns `true` if the `actual` value satisfies this (expected) value.
    ///
    /// Null and identity are checked before equality, so the equality of a
    /// null expected value is never evaluated. Objects of different types are
    /// never equal, there is no numeric widening: `5u8` and `5i32` differ.
    #[must_use]
    pub fn same_as(&self, actual: &Value) -> bool {
        match (self, actual) {
            (Self::Null, Self::Null) => true,
            (Self::Null, Self::Object(_)) | (Self::Object(_), Self::Null) => false,
            (Self::Object(expected), Self::Object(actual)) => {
                Arc::ptr_eq(expected, actual) || expected.dyn_eq(&**actual)
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Null => write!(f, "null"),
            Self::Object(o) => Debug::fmt(&**o, f),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(self, f)
    }
}

/// Conversion of a property or expected value into a [`Value`].
///
/// Use [`impl_to_value!`](crate::impl_to_value) to implement this trait for
/// your own types.
pub trait ToValue {
    /// Create a [`Value`] that holds a copy of `self`.
    fn to_value(&self) -> Value;
}

/// Implements [`ToValue`] for the passed types by cloning the value into a
/// [`Value`]. The types must implement `Clone`, `PartialEq`, `Debug`, `Send`
/// and `Sync`.
#[macro_export]
macro_rules! impl_to_value {
    ($( $type:ty ),* $(,)?) => {
        $(
            impl $crate::ToValue for $type {
                fn to_value(&self) -> $crate::Value {
                    $crate::Value::new(::std::clone::Clone::clone(self))
                }
            }
        )*
    };
}

impl_to_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Duration,
);

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::new(self.to_owned())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::new(self.clone().into_owned())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        match self {
            None => Value::Null,
            Some(x) => x.to_value(),
        }
    }
}

impl<T> ToValue for Vec<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

impl<T> ToValue for VecDeque<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

/// Slices are stored as [`Vec`], so they are equal to the value of a `Vec`
/// with the same elements.
impl<T> ToValue for [T]
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.to_vec())
    }
}

impl<T, const N: usize> ToValue for [T; N]
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

impl<T, S> ToValue for HashSet<T, S>
where
    T: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    S: BuildHasher + Clone + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

impl<T> ToValue for BTreeSet<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

impl<K, V, S> ToValue for HashMap<K, V, S>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
    V: Clone + PartialEq + Debug + Send + Sync + 'static,
    S: BuildHasher + Clone + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

impl<K, V> ToValue for BTreeMap<K, V>
where
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
    V: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn to_value(&self) -> Value {
        Value::new(self.clone())
    }
}

macro_rules! impl_to_value_tuple {
    ($( ( $( $name:ident ),+ ) )*) => {
        $(
            impl<$( $name ),+> ToValue for ( $( $name, )+ )
            where
                $( $name: Clone + PartialEq + Debug + Send + Sync + 'static, )+
            {
                fn to_value(&self) -> Value {
                    Value::new(self.clone())
                }
            }
        )*
    };
}

impl_to_value_tuple!(
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
);

macro_rules! impl_to_value_deref {
    ($( $ptr:ident ),*) => {
        $(
            impl<T> ToValue for $ptr<T>
            where
                T: ToValue + ?Sized,
            {
                fn to_value(&self) -> Value {
                    (**self).to_value()
                }
            }
        )*
    };
}

impl_to_value_deref!(Box, Rc, Arc);

impl<T> ToValue for &T
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use super::{ToValue, Value};

    #[test]
    fn null_matches_only_null() {
        assert!(Value::Null.same_as(&Value::Null));
        assert!(!Value::Null.same_as(&5.to_value()));
        assert!(!5.to_value().same_as(&Value::Null));
    }

    #[test]
    fn identity() {
        let value = Value::new(vec![1, 2, 3]);
        let copy = value.clone();

        assert!(value.same_as(&copy));
    }

    #[test]
    fn equality() {
        assert!(5.to_value().same_as(&5.to_value()));
        assert!(!5.to_value().same_as(&4.to_value()));
    }

    #[test]
    fn different_types_are_not_equal() {
        assert!(!5i32.to_value().same_as(&5i64.to_value()));
        assert!(!"5".to_value().same_as(&5.to_value()));
    }

    #[test]
    fn str_is_stored_as_string() {
        let value = "testValue".to_value();

        assert_eq!(
            value.downcast_ref::<String>().map(String::as_str),
            Some("testValue")
        );
        assert!(value.same_as(&String::from("testValue").to_value()));
    }

    #[test]
    fn option() {
        assert!(None::<String>.to_value().is_null());
        assert!(Some("x").to_value().same_as(&"x".to_value()));
    }

    #[test]
    fn collections_and_tuples() {
        let set = HashSet::from(["a".to_owned(), "b".to_owned()]);
        let same = HashSet::from(["b".to_owned(), "a".to_owned()]);

        assert!(set.to_value().same_as(&same.to_value()));
        assert!((1, "x".to_owned()).to_value().same_as(&(1, "x".to_owned()).to_value()));
        assert!(!(1, 2).to_value().same_as(&(2, 1).to_value()));
        assert!([1, 2, 3].to_value().same_as(&[1, 2, 3].to_value()));
        assert!([1, 2][..].to_value().same_as(&vec![1, 2].to_value()));
        assert!(BTreeMap::from([(1, 'a')])
            .to_value()
            .same_as(&BTreeMap::from([(1, 'a')]).to_value()));
    }

    #[test]
    fn type_names() {
        assert_eq!("null", Value::Null.type_name());
        assert_eq!("u8", 5u8.to_value().type_name());
    }

    #[test]
    fn display() {
        assert_eq!("null", Value::Null.to_string());
        assert_eq!("\"testValue\"", "testValue".to_value().to_string());
        assert_eq!("5", 5.to_value().to_string());
    }
}

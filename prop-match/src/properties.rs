//! The [`properties`](self) module defines the [`Properties`] trait that is
//! used to read named properties of an object.
//!
//! Implement it with `#[derive(Properties)]`, or by hand for types that need
//! full control over their accessor surface.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::{Error, ToValue, Value};

/// Name of the synthetic property that identifies the type of an object.
///
/// Derived implementations expose it with the type name as value. It is never
/// part of an extracted property map.
pub const TYPE_PROPERTY: &str = "type";

/// Readable named properties of an object.
pub trait Properties {
    /// Returns the names of all readable properties, in declaration order.
    fn property_names(&self) -> Vec<&str>;

    /// Read the current value of the property with the passed `name`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownProperty`] if no such property exists,
    /// [`Error::NullTarget`] if the object is absent and [`Error::Accessor`] if
    /// the accessor of the property failed.
    fn property(&self, name: &str) -> Result<Value, Error>;

    /// Returns `true` if this represents an absent object.
    fn is_null(&self) -> bool {
        false
    }

    /// Name of the type properties are read from.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T> Properties for Option<T>
where
    T: Properties,
{
    fn property_names(&self) -> Vec<&str> {
        self.as_ref()
            .map(Properties::property_names)
            .unwrap_or_default()
    }

    fn property(&self, name: &str) -> Result<Value, Error> {
        match self {
            Some(x) => x.property(name),
            None => Err(Error::NullTarget {
                name: name.into(),
            }),
        }
    }

    fn is_null(&self) -> bool {
        self.as_ref().map_or(true, Properties::is_null)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

macro_rules! impl_properties_deref {
    ($( $ty:ty ),*) => {
        $(
            impl<T> Properties for $ty
            where
                T: Properties + ?Sized,
            {
                fn property_names(&self) -> Vec<&str> {
                    (**self).property_names()
                }

                fn property(&self, name: &str) -> Result<Value, Error> {
                    (**self).property(name)
                }

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }
            }
        )*
    };
}

impl_properties_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<V, S> Properties for HashMap<String, V, S>
where
    V: ToValue,
    S: BuildHasher,
{
    fn property_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn property(&self, name: &str) -> Result<Value, Error> {
        self.get(name)
            .map(ToValue::to_value)
            .ok_or_else(|| Error::unknown_property::<Self>(name))
    }
}

impl<V> Properties for BTreeMap<String, V>
where
    V: ToValue,
{
    fn property_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn property(&self, name: &str) -> Result<Value, Error> {
        self.get(name)
            .map(ToValue::to_value)
            .ok_or_else(|| Error::unknown_property::<Self>(name))
    }
}

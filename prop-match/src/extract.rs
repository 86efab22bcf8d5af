//! The [`extract`](self) module converts an object into a [`PropertyMap`] of
//! its readable properties.

use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::{Error, Properties, Value, TYPE_PROPERTY};

/// Map of property names to property values.
pub type PropertyMap = BTreeMap<String, Value>;

/// Read all properties of `object`, except the ones named in `ignored` and
/// the synthetic [`TYPE_PROPERTY`].
///
/// Names in `ignored` that are not exposed by `object` have no effect.
///
/// # Errors
/// Returns [`Error::Extraction`] wrapping the cause if `object` is null or
/// any accessor failed. No partial map is returned.
pub fn extract<T, I>(object: &T, ignored: I) -> Result<PropertyMap, Error>
where
    T: Properties + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let type_name = object.type_name();
    let fail = |source: Error| Error::Extraction {
        type_name,
        source: Box::new(source),
    };

    if object.is_null() {
        return Err(fail(Error::NullTarget {
            name: TYPE_PROPERTY.into(),
        }));
    }

    let ignored = ignored
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .collect::<HashSet<_>>();

    let mut map = PropertyMap::new();
    for name in object.property_names() {
        if name == TYPE_PROPERTY || ignored.contains(name) {
            continue;
        }

        let value = object.property(name).map_err(fail)?;
        map.insert(name.to_owned(), value);
    }

    debug!(
        "Extracted {} properties from `{type_name}` (ignored: {ignored:?})",
        map.len()
    );

    Ok(map)
}

/// Read all properties of `object` except the synthetic [`TYPE_PROPERTY`].
///
/// # Errors
/// See [`extract`].
pub fn extract_all<T>(object: &T) -> Result<PropertyMap, Error>
where
    T: Properties + ?Sized,
{
    extract(object, std::iter::empty::<&str>())
}

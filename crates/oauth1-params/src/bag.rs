//! The ordered multi-valued parameter store.

use std::collections::HashMap;
use std::fmt::Display;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ParamsError;
use crate::value::{ParamValue, Values};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Entry {
    values: Vec<String>,
    list: bool,
}

/// An insertion-ordered mapping from keys to ordered, non-deduplicated values.
///
/// A key is present if and only if it holds at least one value. Keys are
/// normalized to their `Display` form; an empty key is rejected with
/// [`ParamsError::InvalidKey`] before anything is mutated, while `0` (or
/// `"0"`) is an ordinary key.
///
/// # Examples
///
/// ```
/// use oauth1_params::ParameterBag;
///
/// let mut bag = ParameterBag::new();
/// bag.set("k", "a")?;
/// bag.replace("k", "b")?;
/// assert_eq!(bag.get("k")?, ["b"]);
///
/// assert_eq!(bag.delete("k")?, ["b"]);
/// assert!(!bag.has_key("k"));
/// # Ok::<(), oauth1_params::ParamsError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBag {
    order: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl ParameterBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from `application/x-www-form-urlencoded` text such as a
    /// URL query or a form body.
    ///
    /// Pairs keep their order and repeats; pairs with an empty name are
    /// skipped.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut bag = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if !key.is_empty() {
                bag.append(key.into_owned(), vec![value.into_owned()], false);
            }
        }
        bag
    }

    /// Append `value` under `key`, returning the key's resulting value count.
    pub fn set(
        &mut self,
        key: impl Display,
        value: impl Into<ParamValue>,
    ) -> Result<usize, ParamsError> {
        let key = normalize_key(key)?;
        let (values, list) = value.into().into_parts();
        Ok(self.append(key, values, list))
    }

    /// Discard every value under `key`, then store `value` in their place.
    ///
    /// Returns the key's resulting value count.
    pub fn replace(
        &mut self,
        key: impl Display,
        value: impl Into<ParamValue>,
    ) -> Result<usize, ParamsError> {
        let key = normalize_key(key)?;
        self.remove_entry(&key);
        let (values, list) = value.into().into_parts();
        Ok(self.append(key, values, list))
    }

    /// The values stored under `key`, in insertion order; empty when absent.
    pub fn get(&self, key: impl Display) -> Result<&[String], ParamsError> {
        let key = normalize_key(key)?;
        Ok(self
            .entries
            .get(&key)
            .map_or(&[][..], |entry| entry.values.as_slice()))
    }

    /// Remove `key` entirely, returning the values it held; empty when absent.
    pub fn delete(&mut self, key: impl Display) -> Result<Vec<String>, ParamsError> {
        let key = normalize_key(key)?;
        Ok(self.remove_entry(&key).map(|entry| entry.values).unwrap_or_default())
    }

    /// Whether `key` holds at least one value.
    #[must_use]
    pub fn has_key(&self, key: impl Display) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    /// Keys in order of first insertion.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Append every value from `source` after any existing values, key by key.
    ///
    /// `source` can be another bag (`&ParameterBag`), a `HashMap` or
    /// `BTreeMap`, or any other sequence of `(key, value)` pairs. All keys are
    /// validated before the bag is touched.
    pub fn merge<I, K, V>(&mut self, source: I) -> Result<(), ParamsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Into<ParamValue>,
    {
        let incoming = source
            .into_iter()
            .map(|(key, value)| -> Result<(String, ParamValue), ParamsError> {
                Ok((normalize_key(key)?, value.into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (key, value) in incoming {
            let (values, list) = value.into_parts();
            self.append(key, values, list);
        }
        Ok(())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Number of values stored under `key`.
    #[must_use]
    pub fn value_count(&self, key: impl Display) -> usize {
        self.entries
            .get(&key.to_string())
            .map_or(0, |entry| entry.values.len())
    }

    /// Whether the bag holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the bag holds at least one key.
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.is_empty()
    }

    /// Iterate keys with their values, in key insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bag: self,
            position: 0,
        }
    }

    /// Iterate every `(key, value)` pair, flattened, in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(key, values)| values.as_slice().iter().map(move |v| (key, v.as_str())))
    }

    /// Export to a plain JSON object.
    ///
    /// Scalar-shaped keys become strings, list-shaped keys become arrays, and
    /// object order follows key insertion order.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(key, values)| (key.to_owned(), values_to_json(values)))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    /// Export to compact JSON text.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    fn append(&mut self, key: String, values: Vec<String>, list: bool) -> usize {
        if values.is_empty() {
            return self.value_count(&key);
        }

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.values.extend(values);
            entry.list |= list;
            return entry.values.len();
        }

        let count = values.len();
        self.order.push(key.clone());
        self.entries.insert(key, Entry { values, list });
        count
    }

    fn remove_entry(&mut self, key: &str) -> Option<Entry> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(entry)
    }
}

/// Iterator over a bag's keys and their [`Values`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    bag: &'a ParameterBag,
    position: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Values<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let bag = self.bag;
        let key = bag.order.get(self.position)?;
        self.position += 1;
        let entry = &bag.entries[key];
        Some((key.as_str(), Values::new(&entry.values, entry.list)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bag.order.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = (&'a str, Values<'a>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ParameterBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, values) in self {
            if values.is_list() {
                map.serialize_entry(key, values.as_slice())?;
            } else {
                map.serialize_entry(key, &values[0])?;
            }
        }
        map.end()
    }
}

fn values_to_json(values: Values<'_>) -> serde_json::Value {
    if values.is_list() {
        serde_json::Value::Array(
            values
                .iter()
                .map(|v| serde_json::Value::String(v.clone()))
                .collect(),
        )
    } else {
        serde_json::Value::String(values[0].clone())
    }
}

fn normalize_key(key: impl Display) -> Result<String, ParamsError> {
    let key = key.to_string();
    if key.is_empty() {
        return Err(ParamsError::InvalidKey);
    }
    Ok(key)
}

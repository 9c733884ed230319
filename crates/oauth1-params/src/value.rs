//! Input values and borrowed value views.

use std::ops::Deref;

/// A value handed to [`ParameterBag::set`](crate::ParameterBag::set).
///
/// A [`ParamValue::List`] is flattened into one entry per element; a
/// [`ParamValue::Single`] becomes exactly one entry. Numbers convert to
/// their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// One scalar value.
    Single(String),
    /// An ordered list of values.
    List(Vec<String>),
}

impl ParamValue {
    pub(crate) fn into_parts(self) -> (Vec<String>, bool) {
        match self {
            Self::Single(value) => (vec![value], false),
            Self::List(values) => (values, true),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Single(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Single(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u8, u16, u32, u64, usize);

/// A borrowed view of the values stored under one key.
///
/// Dereferences to the ordered value slice. Converting it back into a
/// [`ParamValue`] keeps the scalar/list shape, which is what lets one bag be
/// merged into another without changing how keys export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Values<'a> {
    values: &'a [String],
    list: bool,
}

impl<'a> Values<'a> {
    pub(crate) fn new(values: &'a [String], list: bool) -> Self {
        Self { values, list }
    }

    /// Whether these values export as a list rather than a scalar.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.list || self.values.len() != 1
    }

    /// The underlying ordered values.
    #[must_use]
    pub fn as_slice(&self) -> &'a [String] {
        self.values
    }
}

impl Deref for Values<'_> {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.values
    }
}

impl From<Values<'_>> for ParamValue {
    fn from(values: Values<'_>) -> Self {
        if values.is_list() {
            Self::List(values.values.to_vec())
        } else {
            Self::Single(values.values[0].clone())
        }
    }
}

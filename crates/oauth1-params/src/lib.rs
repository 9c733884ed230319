//! Ordered multi-valued parameter store for OAuth 1.0a request signing.
//!
//! OAuth signs the union of query, form-body and protocol parameters, and a
//! parameter name may legitimately repeat (`tag=a&tag=b`). [`ParameterBag`]
//! keeps every value of every key in insertion order, never deduplicates,
//! and remembers whether a key was fed a scalar or a list so that it can be
//! exported back to the same shape.
//!
//! # Usage
//!
//! ```rust
//! use oauth1_params::ParameterBag;
//!
//! let mut params = ParameterBag::new();
//! params.set("tag", "a")?;
//! params.set("tag", "b")?;
//! params.set("page", 2)?;
//!
//! assert_eq!(params.get("tag")?, ["a", "b"]);
//! assert_eq!(params.to_json(), r#"{"tag":["a","b"],"page":"2"}"#);
//! # Ok::<(), oauth1_params::ParamsError>(())
//! ```
//!
//! # Modules
//!
//! - [`bag`] - The [`ParameterBag`] store
//! - [`error`] - Parameter store error types
//! - [`value`] - Scalar/list input values and borrowed value views

pub mod bag;
pub mod error;
pub mod value;

pub use bag::ParameterBag;
pub use error::ParamsError;
pub use value::{ParamValue, Values};

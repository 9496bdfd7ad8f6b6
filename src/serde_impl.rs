//! JSON interop (feature-gated)
//!
//! With the `serde` feature enabled, argument lists can be written as JSON
//! and field values read straight out of a JSON document. [`Options`]
//! additionally derives `Serialize`/`Deserialize` with camelCase keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use sluice::testing::fixtures;
//! use sluice::{Arg, Registry, Value};
//!
//! let registry = Registry::new(&fixtures());
//! let args: Vec<Arg> = vec![json!({ "skipNull": true }).into(), json!("cuicca").into()];
//! let d = registry.create("equals", args).unwrap();
//!
//! let doc = json!({ "text": null });
//! assert_eq!(d.check(&Value::from_json_field(doc.get("text"))), Ok(true));
//! ```
//!
//! [`Options`]: crate::Options

use crate::arg::{Arg, Record};
use crate::value::Value;
use serde_json::Value as Json;

impl From<Json> for Arg {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Arg::Null,
            Json::Bool(b) => Arg::Bool(b),
            Json::Number(n) => n.as_f64().map_or(Arg::Null, Arg::Number),
            Json::String(s) => Arg::Str(s),
            Json::Array(items) => Arg::List(items.into_iter().map(Arg::from).collect()),
            Json::Object(fields) => Arg::Object(fields.into_iter().collect::<Record>()),
        }
    }
}

impl Value {
    /// Read a field value out of a JSON document.
    ///
    /// `None` (the key was absent) becomes [`Value::Missing`]. Arrays and
    /// objects have no scalar form and are carried as their JSON text.
    pub fn from_json_field(field: Option<&Json>) -> Self {
        match field {
            None => Value::Missing,
            Some(Json::Null) => Value::Null,
            Some(Json::Bool(b)) => Value::Bool(*b),
            Some(Json::Number(n)) => n.as_f64().map_or(Value::Null, Value::Number),
            Some(Json::String(s)) => Value::String(s.clone()),
            Some(other) => Value::String(other.to_string()),
        }
    }
}

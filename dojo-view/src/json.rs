//! JSON encoding with raw JavaScript expressions
//!
//! Dijit parameters frequently carry function literals or global identifiers
//! (`onClick: function() { ... }`, `store: myStore`) that must reach the page
//! unquoted. [`JsValue`] is a JSON value tree with an extra [`JsValue::Expr`]
//! leaf that [`encode`] emits verbatim.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered dijit parameters
pub type DijitParams = IndexMap<String, JsValue>;

/// A JSON value that may embed raw JavaScript expressions
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// Plain JSON
    Json(Value),
    /// Raw JavaScript, emitted unquoted
    Expr(String),
    /// Array of values
    Array(Vec<JsValue>),
    /// Object with insertion-ordered keys
    Object(IndexMap<String, JsValue>),
}

impl JsValue {
    /// Wrap a raw JavaScript expression
    pub fn expr(code: impl Into<String>) -> Self {
        JsValue::Expr(code.into())
    }

    /// Does this value (or anything below it) contain a raw expression?
    pub fn has_expr(&self) -> bool {
        match self {
            JsValue::Json(_) => false,
            JsValue::Expr(_) => true,
            JsValue::Array(items) => items.iter().any(JsValue::has_expr),
            JsValue::Object(map) => map.values().any(JsValue::has_expr),
        }
    }
}

impl From<Value> for JsValue {
    fn from(value: Value) -> Self {
        JsValue::Json(value)
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        JsValue::Json(Value::String(value.to_string()))
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        JsValue::Json(Value::String(value))
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        JsValue::Json(Value::Bool(value))
    }
}

impl From<i64> for JsValue {
    fn from(value: i64) -> Self {
        JsValue::Json(Value::from(value))
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        JsValue::Json(Value::from(value))
    }
}

impl From<Vec<JsValue>> for JsValue {
    fn from(items: Vec<JsValue>) -> Self {
        JsValue::Array(items)
    }
}

impl From<IndexMap<String, JsValue>> for JsValue {
    fn from(map: IndexMap<String, JsValue>) -> Self {
        JsValue::Object(map)
    }
}

/// A programmatic dijit declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Dijit {
    /// DOM id of the node the dijit attaches to
    pub id: String,
    /// Constructor parameters
    pub params: DijitParams,
}

impl Dijit {
    /// Create a dijit declaration
    pub fn new(id: impl Into<String>, params: DijitParams) -> Self {
        Self {
            id: id.into(),
            params,
        }
    }

    /// The dijit as `{"id": ..., "params": {...}}`
    pub fn to_js_value(&self) -> JsValue {
        let mut map = IndexMap::with_capacity(2);
        map.insert("id".to_string(), JsValue::from(self.id.as_str()));
        map.insert("params".to_string(), JsValue::Object(self.params.clone()));
        JsValue::Object(map)
    }
}

/// Encode a value as JSON, emitting raw expressions verbatim
pub fn encode(value: &JsValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Encode a list of dijits as a JSON array
pub fn encode_dijits<'a>(dijits: impl IntoIterator<Item = &'a Dijit>) -> String {
    let list = JsValue::Array(dijits.into_iter().map(Dijit::to_js_value).collect());
    encode(&list)
}

fn write_value(out: &mut String, value: &JsValue) {
    match value {
        // Serializing a `Value` cannot fail: keys are always strings.
        JsValue::Json(json) => out.push_str(&json.to_string()),
        JsValue::Expr(code) => out.push_str(code),
        JsValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        JsValue::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

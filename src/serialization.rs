use crate::ast::{TerseDocument, TerseValue};
use indexmap::IndexMap;
use serde::Serialize;

/// The generic output tree handed to serde. Key order is the order keys
/// were inserted in, which is why the object variant is an `IndexMap`:
/// emitted YAML and JSON must follow definition order, never alphabetical.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

pub(crate) fn to_value(document: &TerseDocument) -> Value {
    let mut root = IndexMap::new();
    let constants = document
        .constants
        .iter()
        .map(|(name, value)| (name.clone(), value_of(value)))
        .collect();
    root.insert("constants".to_string(), Value::Object(constants));
    for (name, value) in &document.assignments {
        root.insert(name.clone(), value_of(value));
    }
    Value::Object(root)
}

fn value_of(value: &TerseValue) -> Value {
    match value {
        TerseValue::Integer(n) => Value::Integer(*n),
        TerseValue::String(s) => Value::String(s.clone()),
        TerseValue::Array(elements) => Value::Array(elements.iter().map(value_of).collect()),
    }
}

use indexmap::IndexMap;
use std::fmt;

/// A constant table maps constant names to their parsed values, in the
/// order the definitions appear in the document. Names are unique; a
/// repeated definition replaces the value but keeps the original position.
pub type ConstantTable = IndexMap<String, TerseValue>;

/// A fully parsed Terse value. By the time one of these is constructed,
/// every `?(name)` reference inside it has been substituted.
#[derive(Debug, PartialEq, Clone)]
pub enum TerseValue {
    Integer(i64),
    String(String),
    Array(Vec<TerseValue>),
}

/// One translated document: the constant table plus any top-level
/// `name = value` assignments, both in source order. Built once per
/// input, then read-only.
#[derive(Debug, PartialEq, Clone)]
pub struct TerseDocument {
    pub constants: ConstantTable,
    pub assignments: IndexMap<String, TerseValue>,
}

impl TerseValue {
    pub fn as_array(&self) -> Option<&Vec<TerseValue>> {
        if let TerseValue::Array(elements) = self {
            Some(elements)
        } else {
            None
        }
    }
}

/// The textual rendering used when a `?(name)` occurrence is substituted
/// back into document text: integers as their digits, strings as their raw
/// content without the `@"…"` wrapper, arrays in the notation's own form.
impl fmt::Display for TerseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerseValue::Integer(n) => write!(f, "{n}"),
            TerseValue::String(s) => f.write_str(s),
            TerseValue::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
        }
    }
}

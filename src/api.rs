use crate::ast::TerseDocument;
use crate::error::TerseError;
use crate::parser::Parser;
use crate::resolver::resolve_references;
use crate::serialization::{to_value, Value};
use serde::{Serialize, Serializer};

/// The result of a successful translation of a Terse document.
/// Holds the resolved document and provides methods for serialization.
#[derive(Debug)]
pub struct TranslationResult {
    pub document: TerseDocument,
    /// The comment-stripped document text with every `?(name)` occurrence
    /// replaced by the rendered value of the named constant.
    pub resolved_text: String,
}

impl Serialize for TranslationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.to_value();
        value.serialize(serializer)
    }
}

impl TranslationResult {
    /// Serializes the translated document into a generic, serializable
    /// `Value`: a mapping with the `constants` table under its own key and
    /// any top-level assignments beside it, all in source order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        to_value(&self.document)
    }

    /// Serializes the translated document into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the translated document into a block-style YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Translates a Terse source string: strips comments, builds the constant
/// table, and resolves every reference in the document.
///
/// This is the primary entry point. Processing is fail-fast: the first
/// error anywhere aborts the whole translation and no partial table or
/// partially substituted text is returned. Each call works from a fresh
/// table, so documents never observe one another's constants.
///
/// # Errors
///
/// Returns a `TerseError` if a binding is malformed, a literal matches no
/// recognized form, an array is unbalanced, or a reference names an
/// undefined constant.
pub fn translate(source: &str) -> Result<TranslationResult, TerseError> {
    let mut parser = Parser::new(source);
    let document = parser.parse_document()?;
    let resolved_text = resolve_references(parser.stripped_source(), &document.constants)?;
    log::debug!("translated document with {} constants", document.constants.len());

    Ok(TranslationResult {
        document,
        resolved_text,
    })
}

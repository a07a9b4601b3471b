use crate::ast::ConstantTable;
use crate::error::{ResolverError, TerseError};

/// Replaces every well-formed `?(name)` occurrence in `text` with the
/// textual rendering of the named constant.
///
/// This is the whole-document pass that runs after the constant table is
/// built: a reference to a name absent from the table fails the translation
/// even when the reference sits outside any binding. Sequences that merely
/// resemble a reference (`?(`, `?(2x)`, an unclosed `?(name`) are not
/// occurrences and pass through untouched.
pub fn resolve_references(text: &str, table: &ConstantTable) -> Result<String, TerseError> {
    // Fast path: no '?' means no references anywhere
    if !text.contains('?') {
        return Ok(text.to_string());
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("?(") {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        let name_len = reference_name_len(after);
        if name_len > 0 && after[name_len..].starts_with(')') {
            let name = &after[..name_len];
            match table.get(name) {
                Some(value) => {
                    let rendered = value.to_string();
                    log::trace!("substituting ?({name}) -> {rendered}");
                    result.push_str(&rendered);
                }
                None => {
                    return Err(ResolverError::UndefinedReference {
                        name: name.to_string(),
                    }
                    .into())
                }
            }
            rest = &after[name_len + 1..];
        } else {
            result.push_str("?(");
            rest = after;
        }
    }
    result.push_str(rest);
    Ok(result)
}

/// Length of the identifier prefix of `s`: a letter followed by letters,
/// digits, or underscores. Zero when `s` does not start with a letter.
fn reference_name_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    for (i, c) in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return i;
        }
    }
    s.len()
}

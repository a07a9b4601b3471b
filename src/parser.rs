use crate::ast::{ConstantTable, TerseDocument, TerseValue};
use crate::error::{ParserError, TerseError};
use crate::lexer::{strip_comments, Lexer, Token, TokenType};
use indexmap::IndexMap;

/// A recursive descent parser for Terse documents.
///
/// The document grammar is permissive: the parser walks the token stream
/// looking for `identifier is value` bindings and top-level
/// `identifier = value` assignments, and skips everything in between. Values
/// are parsed against the constant table as built so far, so a binding may
/// reference any earlier constant but never a later one.
#[derive(Debug)]
pub struct Parser {
    stripped: String,
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Strips comments from `source_text` and tokenizes the remainder.
    pub fn new(source_text: &str) -> Self {
        let stripped = strip_comments(source_text);
        let mut lexer = Lexer::new(&stripped);
        let tokens: Vec<Token> = lexer
            .lex()
            .into_iter()
            .filter(|t| !matches!(t.ttype, TokenType::Whitespace))
            .collect();

        Self {
            stripped,
            tokens,
            position: 0,
        }
    }

    /// The comment-stripped source this parser operates on.
    pub fn stripped_source(&self) -> &str {
        &self.stripped
    }

    // === Main Parsing Methods ===

    /// Document ::= { Binding | Assignment | <skipped> }
    /// Binding ::= Identifier "is" Value
    /// Assignment ::= Identifier "=" Value
    pub fn parse_document(&mut self) -> Result<TerseDocument, TerseError> {
        let mut constants = ConstantTable::new();
        let mut assignments: IndexMap<String, TerseValue> = IndexMap::new();

        while !self.check(&TokenType::Eof) {
            if let TokenType::Identifier(name) = &self.current_token().ttype {
                let name = name.clone();
                if self.peek_is(&TokenType::Is) {
                    self.advance();
                    self.advance();
                    let value = self.parse_binding_value(&name, "is", &constants)?;
                    // A repeated name replaces the value but keeps the
                    // original table position: last write wins.
                    constants.insert(name, value);
                    continue;
                }
                if self.peek_is(&TokenType::Equals) {
                    self.advance();
                    self.advance();
                    let value = self.parse_binding_value(&name, "=", &constants)?;
                    assignments.insert(name, value);
                    continue;
                }
            }
            // Not the start of a binding; anything else between bindings is
            // ignored, like the text around matches in a pattern scan.
            self.advance();
        }

        log::debug!(
            "parsed {} constant definitions and {} assignments",
            constants.len(),
            assignments.len()
        );

        Ok(TerseDocument {
            constants,
            assignments,
        })
    }

    /// The right-hand side of a binding. A token that cannot begin any value
    /// form makes the whole binding malformed; errors from deeper inside a
    /// value (array elements, references) propagate as themselves.
    fn parse_binding_value(
        &mut self,
        name: &str,
        operator: &str,
        table: &ConstantTable,
    ) -> Result<TerseValue, TerseError> {
        if !Self::starts_value(&self.current_token().ttype) {
            let rhs = self.token_text(self.current_token());
            return Err(ParserError::InvalidConstantDefinition {
                text: format!("{name} {operator} {rhs}").trim_end().to_string(),
            }
            .into());
        }
        self.parse_value(table)
    }

    /// Value ::= Integer | String | Array | Reference
    fn parse_value(&mut self, table: &ConstantTable) -> Result<TerseValue, TerseError> {
        let token = self.current_token().clone();
        match token.ttype {
            TokenType::Integer(n) => {
                self.advance();
                Ok(TerseValue::Integer(n))
            }
            TokenType::String(s) => {
                self.advance();
                Ok(TerseValue::String(s))
            }
            TokenType::LBracket => self.parse_array(table),
            TokenType::RefOpen => self.parse_reference(table),
            _ => Err(ParserError::InvalidLiteral {
                text: self.token_text(&token),
            }
            .into()),
        }
    }

    /// Array ::= "[" [ Value { ";" Value } [ ";" ] ] "]"
    fn parse_array(&mut self, table: &ConstantTable) -> Result<TerseValue, TerseError> {
        let open = self.current_token().clone();
        self.advance(); // consume [
        let mut elements = Vec::new();
        loop {
            if self.match_token(&TokenType::RBracket) {
                break;
            }
            if self.check(&TokenType::Eof) {
                return Err(self.err_unbalanced(open.pos_start));
            }
            elements.push(self.parse_value(table)?);

            if self.match_token(&TokenType::Semicolon) {
                continue; // also allows a trailing ; before the ]
            }
            if self.match_token(&TokenType::RBracket) {
                break;
            }
            if self.check(&TokenType::Eof) {
                return Err(self.err_unbalanced(open.pos_start));
            }
            // An element not followed by ; or ] is malformed.
            let token = self.current_token().clone();
            return Err(ParserError::InvalidLiteral {
                text: self.token_text(&token),
            }
            .into());
        }
        Ok(TerseValue::Array(elements))
    }

    /// Reference ::= "?(" Identifier ")"
    ///
    /// References resolve immediately against the table built so far, so a
    /// constant can never observe one that is defined after it.
    fn parse_reference(&mut self, table: &ConstantTable) -> Result<TerseValue, TerseError> {
        let open = self.current_token().clone();
        self.advance(); // consume ?(
        let name = match &self.current_token().ttype {
            TokenType::Identifier(name) => name.clone(),
            _ => {
                return Err(ParserError::InvalidLiteral {
                    text: self.snippet_from(open.pos_start),
                }
                .into())
            }
        };
        self.advance();
        if !self.match_token(&TokenType::RParen) {
            return Err(ParserError::InvalidLiteral {
                text: self.snippet_from(open.pos_start),
            }
            .into());
        }

        match table.get(name.as_str()) {
            Some(value) => Ok(value.clone()),
            None => Err(crate::error::ResolverError::UndefinedReference { name }.into()),
        }
    }

    // === Tokenizer Helper Methods ===

    fn starts_value(ttype: &TokenType) -> bool {
        matches!(
            ttype,
            TokenType::Integer(_) | TokenType::String(_) | TokenType::LBracket | TokenType::RefOpen
        )
    }

    fn current_token(&self) -> &Token {
        // The token stream always ends with Eof and advance() never moves
        // past it, so indexing cannot fail.
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn match_token(&mut self, ttype: &TokenType) -> bool {
        if self.check(ttype) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, ttype: &TokenType) -> bool {
        std::mem::discriminant(&self.current_token().ttype) == std::mem::discriminant(ttype)
    }

    fn peek_is(&self, ttype: &TokenType) -> bool {
        if let Some(token) = self.tokens.get(self.position + 1) {
            std::mem::discriminant(&token.ttype) == std::mem::discriminant(ttype)
        } else {
            false
        }
    }

    fn token_text(&self, token: &Token) -> String {
        self.stripped[token.pos_start..token.pos_end].to_string()
    }

    fn snippet_from(&self, start: usize) -> String {
        self.stripped[start..self.current_token().pos_end].to_string()
    }

    fn err_unbalanced(&self, start: usize) -> TerseError {
        ParserError::UnbalancedBrackets {
            text: self.snippet_from(start).trim_end().to_string(),
        }
        .into()
    }
}

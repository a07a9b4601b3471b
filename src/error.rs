use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum TerseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolver(#[from] ResolverError),
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ParserError {
    #[error("invalid constant definition: {text}")]
    #[diagnostic(
        code(parser::invalid_constant_definition),
        help("the right-hand side of a binding must be an integer, an @\"…\" string, a [ … ] array, or a ?(name) reference")
    )]
    InvalidConstantDefinition { text: String },

    #[error("invalid value: {text}")]
    #[diagnostic(
        code(parser::invalid_literal),
        help("values are integers (digits only), @\"…\" strings, [ … ] arrays, or ?(name) references")
    )]
    InvalidLiteral { text: String },

    #[error("unbalanced brackets in array: {text}")]
    #[diagnostic(
        code(parser::unbalanced_brackets),
        help("every [ needs a matching ] within the same array literal")
    )]
    UnbalancedBrackets { text: String },
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ResolverError {
    #[error("undefined constant: {name}")]
    #[diagnostic(
        code(resolver::undefined_reference),
        help("constants must be defined before they are referenced; forward references are not supported")
    )]
    UndefinedReference { name: String },
}

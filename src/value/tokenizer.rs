//! logos-based tokenizer for size literals.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `10px` as Dimension beats `10` as Number)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Input is lower-cased by [`tokenize`] before lexing, so unit suffixes and the
//! `auto` keyword are matched case-insensitively.

use logos::Logos;

/// Token produced by the size-literal lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// The `auto` keyword.
    #[token("auto")]
    Auto,

    /// Dimension: number with a unit suffix like `10px`, `1.5em`, `50%`, `2fr`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|em|ex|%|pt|pc|in|mm|cm|fr)")]
    Dimension,

    /// Bare number, interpreted in the session's default unit.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Constant reference: `@ruiGap`, `@list.padding`.
    #[regex(r"@[a-z_][a-z0-9_.-]*")]
    Constant,

    /// `,`
    #[token(",")]
    Comma,
}

/// Tokenize a size literal into `(Token, String)` pairs.
///
/// Returns `None` as soon as any fragment fails to lex, so callers can reject
/// the whole literal instead of silently skipping garbage.
pub fn tokenize(input: &str) -> Option<Vec<(Token, String)>> {
    let lowered = input.to_ascii_lowercase();
    let lexer = Token::lexer(&lowered);
    lexer
        .spanned()
        .map(|(result, span)| result.ok().map(|token| (token, lowered[span].to_string())))
        .collect()
}

/// Split a dimension slice like `"12.5px"` into its number and unit suffix.
pub(crate) fn split_dimension(text: &str) -> Option<(f64, &str)> {
    let at = text.find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))?;
    let (number, unit) = text.split_at(at);
    number.parse().ok().map(|n| (n, unit))
}

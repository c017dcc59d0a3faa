//! Define the token vocabulary for the Sable scanner.
//!
//! Tokens come in three categories: keywords, operators, and plain tokens
//! (punctuation and structurally-recognized classes such as `int` or
//! `string_part`). The category selects the identifier prefix for the
//! generated variant, so base names may repeat across categories without
//! colliding (keyword `or` → `KwOr`, operator `or` → `OpOr`).
//!
//! ## Notes
//! - [`builtin_tokens`] is the one universal table. The keyword and
//!   binary-operator sections in the generated artifacts are filtered views
//!   of it, never independently declared lists, so one logical token is the
//!   same symbol everywhere it appears.
//! - Fixed-spelling tokens carry their surface text; structurally-recognized
//!   tokens carry a descriptive placeholder (e.g. `path_fragment`).

use serde::{Deserialize, Serialize};

/// Whether an operator participates in the binary-operator section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorArity {
    Unary,
    Binary,
}

/// Token category: selects the variant prefix and section membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    Keyword,
    Operator(OperatorArity),
    Plain,
}

/// A lexical unit kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// snake_case identifier fragment, unique within its category.
    pub name: String,
    /// Literal surface text, or a descriptive placeholder for tokens whose
    /// exact text varies.
    pub spelling: String,
    pub category: TokenCategory,
}

impl Token {
    /// Category-prefixed UpperCamelCase identifier for the generated variant.
    ///
    /// The flattened identifier is globally unique across all categories;
    /// [`crate::validate::validate_tokens`] enforces this.
    pub fn variant_ident(&self) -> String {
        let prefix = match self.category {
            TokenCategory::Keyword => "Kw",
            TokenCategory::Operator(_) => "Op",
            TokenCategory::Plain => "",
        };
        format!("{prefix}{}", camel_case(&self.name))
    }

    pub fn is_keyword(&self) -> bool {
        self.category == TokenCategory::Keyword
    }

    pub fn is_binary_op(&self) -> bool {
        self.category == TokenCategory::Operator(OperatorArity::Binary)
    }
}

/// Convert a snake_case name into UpperCamelCase.
///
/// ## Examples
/// ```rust
/// use sable_registry::camel_case;
///
/// assert_eq!(camel_case("pipe_into"), "PipeInto");
/// assert_eq!(camel_case("quote2"), "Quote2");
/// ```
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn kw(name: &str) -> Token {
    // Keywords spell themselves.
    Token {
        name: name.to_string(),
        spelling: name.to_string(),
        category: TokenCategory::Keyword,
    }
}

fn op(name: &str, spelling: &str, arity: OperatorArity) -> Token {
    Token {
        name: name.to_string(),
        spelling: spelling.to_string(),
        category: TokenCategory::Operator(arity),
    }
}

fn tok(name: &str, spelling: &str) -> Token {
    Token {
        name: name.to_string(),
        spelling: spelling.to_string(),
        category: TokenCategory::Plain,
    }
}

/// The compiled-in token registry, in canonical order: keywords first, then
/// plain tokens, then operators (unary `not`, then the binary operators).
///
/// ## Notes
/// - Entry position assigns the enum ordinal; the same stability rules apply
///   as for the diagnostic registry.
pub fn builtin_tokens() -> Vec<Token> {
    use OperatorArity::{Binary, Unary};
    vec![
        kw("if"),
        kw("then"),
        kw("else"),
        kw("assert"),
        kw("with"),
        kw("let"),
        kw("in"),
        kw("rec"),
        kw("inherit"),
        kw("or"),
        tok("eof", "eof"),
        tok("id", "id"),
        tok("int", "int"),
        tok("float", "float"),
        tok("dquote", "\""),
        tok("string_part", "string_part"),
        tok("string_escape", "string_escape"),
        tok("quote2", "''"),
        tok("path_fragment", "path_fragment"),
        tok("spath", "<path>"),
        tok("uri", "uri"),
        tok("r_curly", "}"),
        tok("dollar_curly", "${"),
        tok("ellipsis", "..."),
        tok("comma", ","),
        tok("dot", "."),
        tok("semi_colon", ";"),
        tok("eq", "="),
        tok("l_curly", "{"),
        tok("l_paren", "("),
        tok("r_paren", ")"),
        tok("l_bracket", "["),
        tok("r_bracket", "]"),
        tok("question", "?"),
        tok("at", "@"),
        tok("colon", ":"),
        tok("unknown", "unknown"),
        tok("path_end", "path_end"),
        op("not", "!", Unary),
        op("impl", "->", Binary),
        op("or", "||", Binary),
        op("and", "&&", Binary),
        op("eq", "==", Binary),
        op("neq", "!=", Binary),
        op("lt", "<", Binary),
        op("gt", ">", Binary),
        op("le", "<=", Binary),
        op("ge", ">=", Binary),
        op("update", "//", Binary),
        op("add", "+", Binary),
        op("negate", "-", Binary),
        op("mul", "*", Binary),
        op("div", "/", Binary),
        op("concat", "++", Binary),
        op("pipe_into", "|>", Binary),
        op("pipe_from", "<|", Binary),
    ]
}

//! Token artifact generation
//!
//! Produces the two token artifacts: the `TokenKind` enum plus its total
//! spelling table, and the per-category section macros. Every section is a
//! filtered view of the one universal registry, so a token that appears in
//! several sections is the same symbol and ordinal everywhere.

use sable_registry::Token;

use super::write_header;
use crate::emit::LineWriter;

/// Generate the `TokenKind` enum and the `spelling` lookup.
///
/// The spelling function takes the *raw* ordinal rather than the enum so it
/// is total over `u16`: it renders token names inside diagnostics describing
/// malformed input, and must stay callable even when parser state is already
/// broken.
pub fn generate_kinds(tokens: &[Token]) -> String {
    let mut w = LineWriter::new();
    write_header(&mut w);
    w.blank();
    w.writeln("/// Kinds of tokens the Sable scanner produces.");
    w.writeln("///");
    w.writeln("/// Variants are category-prefixed (`Kw` for keywords, `Op` for operators)");
    w.writeln("/// so base names may repeat across categories without colliding. The");
    w.writeln("/// discriminant is the registry ordinal.");
    w.writeln("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.writeln("#[repr(u16)]");
    w.writeln("pub enum TokenKind {");
    w.indent();
    for t in tokens {
        w.write(&t.variant_ident());
        w.writeln(",");
    }
    w.dedent();
    w.writeln("}");
    w.blank();
    w.writeln("/// Surface spelling for a raw token ordinal.");
    w.writeln("///");
    w.writeln("/// Total over `u16`: ordinals outside the known range yield `\"\"`, so this");
    w.writeln("/// stays callable while rendering diagnostics for malformed input.");
    w.writeln("pub const fn spelling(kind: u16) -> &'static str {");
    w.indent();
    w.writeln("match kind {");
    w.indent();
    for (ordinal, t) in tokens.iter().enumerate() {
        w.writeln(&format!("{ordinal} => {:?}, // {}", t.spelling, t.variant_ident()));
    }
    w.writeln("_ => \"\",");
    w.dedent();
    w.writeln("}");
    w.dedent();
    w.writeln("}");
    w.finish()
}

/// Generate the three independently-instantiable section macros: keyword
/// tokens, all tokens, and binary-operator tokens.
///
/// A consumer invokes only the macro it needs (a keyword recognition table,
/// an operator precedence table) without re-declaring the universal list.
/// Empty categories emit no section at all.
pub fn generate_sections(tokens: &[Token]) -> String {
    let keywords: Vec<String> = tokens
        .iter()
        .filter(|t| t.is_keyword())
        .map(Token::variant_ident)
        .collect();
    let all: Vec<String> = tokens.iter().map(Token::variant_ident).collect();
    let binary_ops: Vec<String> = tokens
        .iter()
        .filter(|t| t.is_binary_op())
        .map(Token::variant_ident)
        .collect();

    let mut w = LineWriter::new();
    write_header(&mut w);
    emit_section(
        &mut w,
        "for_each_keyword_token",
        "Invoke `$callback` once per keyword token kind.",
        &keywords,
    );
    emit_section(
        &mut w,
        "for_each_token",
        "Invoke `$callback` once per token kind, in ordinal order.",
        &all,
    );
    emit_section(
        &mut w,
        "for_each_binary_op_token",
        "Invoke `$callback` once per binary operator token kind.",
        &binary_ops,
    );
    w.finish()
}

fn emit_section(w: &mut LineWriter, name: &str, doc: &str, idents: &[String]) {
    if idents.is_empty() {
        return;
    }
    w.blank();
    w.writeln(&format!("/// {doc}"));
    w.writeln(&format!("macro_rules! {name} {{"));
    w.indent();
    w.writeln("($callback:ident) => {");
    w.indent();
    for ident in idents {
        w.writeln(&format!("$callback!({ident});"));
    }
    w.dedent();
    w.writeln("};");
    w.dedent();
    w.writeln("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_registry::{OperatorArity, TokenCategory, builtin_tokens};
    use std::collections::BTreeSet;

    /// Idents listed by one `macro_rules!` section, in emission order.
    fn section_idents(text: &str, macro_name: &str) -> Vec<String> {
        let mut idents = Vec::new();
        let mut in_section = false;
        for line in text.lines() {
            if line.starts_with(&format!("macro_rules! {macro_name} ")) {
                in_section = true;
            } else if in_section && line == "}" {
                break;
            } else if in_section {
                if let Some(rest) = line.trim().strip_prefix("$callback!(") {
                    if let Some(ident) = rest.strip_suffix(");") {
                        idents.push(ident.to_string());
                    }
                }
            }
        }
        idents
    }

    #[test]
    fn test_kinds_enum_and_spelling_share_ordinals() {
        let tokens = builtin_tokens();
        let text = generate_kinds(&tokens);
        assert!(text.contains("pub enum TokenKind {"));
        assert!(text.contains("    KwIf,"));
        assert!(text.contains("0 => \"if\", // KwIf"));
        let last = tokens.len() - 1;
        assert!(text.contains(&format!("{last} => \"<|\", // OpPipeFrom")));
        assert!(text.contains("_ => \"\","));
    }

    #[test]
    fn test_spelling_escapes_quote_tokens() {
        let text = generate_kinds(&builtin_tokens());
        assert!(text.contains(r#"=> "\"", // Dquote"#));
        assert!(text.contains(r#"=> "''", // Quote2"#));
    }

    #[test]
    fn test_sections_are_subsets_of_the_universal_list() {
        let tokens = builtin_tokens();
        let text = generate_sections(&tokens);
        let all: Vec<String> = section_idents(&text, "for_each_token");
        let keywords = section_idents(&text, "for_each_keyword_token");
        let binary_ops = section_idents(&text, "for_each_binary_op_token");

        assert_eq!(all.len(), tokens.len());
        assert_eq!(keywords.len(), 10);
        assert_eq!(binary_ops.len(), 17);

        let universe: BTreeSet<&String> = all.iter().collect();
        assert!(keywords.iter().all(|k| universe.contains(k)));
        assert!(binary_ops.iter().all(|b| universe.contains(b)));
        // One logical token, one symbol: `or` resolves to OpOr in both the
        // universal and binary-op sections, distinct from the keyword KwOr.
        assert!(binary_ops.contains(&"OpOr".to_string()));
        assert!(all.contains(&"OpOr".to_string()));
        assert!(keywords.contains(&"KwOr".to_string()));
        assert!(!binary_ops.contains(&"OpNot".to_string()));
    }

    #[test]
    fn test_empty_categories_emit_no_section() {
        let plain_only: Vec<Token> = builtin_tokens()
            .into_iter()
            .filter(|t| t.category == TokenCategory::Plain)
            .collect();
        let text = generate_sections(&plain_only);
        assert!(text.contains("macro_rules! for_each_token "));
        assert!(!text.contains("for_each_keyword_token"));
        assert!(!text.contains("for_each_binary_op_token"));

        let unary_only: Vec<Token> = builtin_tokens()
            .into_iter()
            .filter(|t| t.category == TokenCategory::Operator(OperatorArity::Unary))
            .collect();
        let text = generate_sections(&unary_only);
        assert!(!text.contains("for_each_binary_op_token"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let tokens = builtin_tokens();
        assert_eq!(generate_kinds(&tokens), generate_kinds(&tokens));
        assert_eq!(generate_sections(&tokens), generate_sections(&tokens));
    }
}

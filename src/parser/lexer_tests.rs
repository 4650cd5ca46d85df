use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_describe_header() {
    assert_eq!(
        kinds("describe Article do"),
        vec![
            TokenKind::Ident("describe".to_string()),
            TokenKind::Constant("Article".to_string()),
            TokenKind::Ident("do".to_string()),
        ]
    );
}

#[test]
fn joins_namespaced_constants() {
    assert_eq!(
        kinds("Admin::User"),
        vec![TokenKind::Constant("Admin::User".to_string())]
    );
}

#[test]
fn strings_keep_contents() {
    assert_eq!(
        kinds(r#"it "does \"x\"" 'single'"#),
        vec![
            TokenKind::Ident("it".to_string()),
            TokenKind::Str(r#"does \"x\""#.to_string()),
            TokenKind::Str("single".to_string()),
        ]
    );
}

#[test]
fn interpolation_braces_do_not_end_string() {
    let tokens = kinds(r#""a #{ {x: 1}[:x] } b" do"#);
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], TokenKind::Str(s) if s.ends_with(" b")));
    assert_eq!(tokens[1], TokenKind::Ident("do".to_string()));
}

#[test]
fn symbols_and_hash_labels() {
    assert_eq!(
        kinds("its(:name) type: :model :\"quoted sym\""),
        vec![
            TokenKind::Ident("its".to_string()),
            TokenKind::Punct('('),
            TokenKind::Symbol("name".to_string()),
            TokenKind::Punct(')'),
            TokenKind::Label("type".to_string()),
            TokenKind::Symbol("model".to_string()),
            TokenKind::Symbol("quoted sym".to_string()),
        ]
    );
}

#[test]
fn predicate_and_bang_identifiers() {
    assert_eq!(
        kinds("valid? save! a != b"),
        vec![
            TokenKind::Ident("valid?".to_string()),
            TokenKind::Ident("save!".to_string()),
            TokenKind::Ident("a".to_string()),
            TokenKind::Punct('!'),
            TokenKind::Punct('='),
            TokenKind::Ident("b".to_string()),
        ]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("# describe Foo do\nend # trailing"),
        vec![
            TokenKind::Separator,
            TokenKind::Ident("end".to_string()),
        ]
    );
}

#[test]
fn block_comments_are_skipped_and_lines_tracked() {
    let tokens = tokenize("=begin\ndescribe X do\n=end\nit");
    let last = tokens.last().unwrap();
    assert!(last.is_ident("it"));
    assert_eq!(last.line, 4);
    assert!(!tokens.iter().any(|t| t.is_ident("describe")));
}

#[test]
fn semicolons_and_newlines_separate_statements() {
    assert_eq!(
        kinds("a; b\nc"),
        vec![
            TokenKind::Ident("a".to_string()),
            TokenKind::Separator,
            TokenKind::Ident("b".to_string()),
            TokenKind::Separator,
            TokenKind::Ident("c".to_string()),
        ]
    );
}

#[test]
fn line_continuation_is_not_a_separator() {
    let tokens = tokenize("a \\\nb");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn multiline_string_advances_line_count() {
    let tokens = tokenize("\"a\nb\"\nend");
    let end = tokens.iter().find(|t| t.is_ident("end")).unwrap();
    assert_eq!(end.line, 3);
}

#[test]
fn instance_variables_and_numbers_are_other() {
    assert_eq!(
        kinds("@article 42"),
        vec![TokenKind::Other, TokenKind::Other]
    );
}

use indoc::indoc;

use crate::diagnostics::SyntaxErrorKind;
use crate::parser::tests::{dump_valid, error_kind, syntax_error};

#[test]
fn meta_identifier_fragments_joined() {
    let input = "rule = a b  c1 d;";

    insta::assert_snapshot!(dump_valid(input), @r"
    Rule rule @0:0
      MetaIdentifier abc1d
    ");
}

#[test]
fn meta_identifier_starts_with_letter() {
    assert_eq!(
        error_kind("1a = \"x\";"),
        SyntaxErrorKind::MissingMetaIdentifier
    );
}

#[test]
fn terminal_strings_either_quote() {
    let input = r#"a = 'x"y', "it's";"#;

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      SingleDefinition
        TerminalString "x\"y"
        TerminalString "it's"
    "#);
}

#[test]
fn terminal_string_keeps_inner_spaces() {
    let grammar = crate::parse(r#"a = "  x  ";"#).unwrap();
    let node = &grammar.syntax()[0].value[0];

    assert_eq!(node.text(), Some("  x  "));
    assert_eq!(node.length, 7);
}

#[test]
fn special_sequence_trimmed() {
    let input = "a = ?  any char  ?;";

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      SpecialSequence "any char"
    "#);
}

#[test]
fn special_sequence_spans_lines() {
    let input = indoc! {r#"
    a = ? x
    y ?;
    b = "z";
    "#};

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      SpecialSequence "x\ny"
    Rule b @1:0
      TerminalString "z"
    "#);
}

#[test]
fn empty_terminal_string() {
    assert_eq!(error_kind(r#"a = "";"#), SyntaxErrorKind::EmptyTerminalString);
    assert_eq!(error_kind("a = '';"), SyntaxErrorKind::EmptyTerminalString);
}

#[test]
fn unterminated_terminal_string() {
    assert_eq!(
        error_kind(r#"a = "abc"#),
        SyntaxErrorKind::UnterminatedTerminalString
    );
}

#[test]
fn mismatched_quote_does_not_close() {
    assert_eq!(
        error_kind(r#"a = "abc';"#),
        SyntaxErrorKind::UnterminatedTerminalString
    );
}

#[test]
fn line_break_in_terminal_string() {
    let err = syntax_error("a = \"a\nb\";");

    assert_eq!(err.kind, SyntaxErrorKind::InvalidTerminalCharacter);
    insta::assert_snapshot!(err, @"invalid character 0x0a in terminal string at 0:6, 1:0");
}

#[test]
fn unterminated_special_sequence() {
    let err = syntax_error("a = ?unterminated");

    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedSpecialSequence);
    insta::assert_snapshot!(err, @"unterminated special sequence at 0:4, 0:17");
}

use indoc::indoc;

use crate::diagnostics::SyntaxErrorKind;
use crate::parser::tests::{dump_valid, error_kind, syntax_error};
use crate::{Position, parse};

#[test]
fn comment_position_is_opening_paren() {
    let grammar = parse(r#"a="a" (* x *);"#).unwrap();
    let [comment] = grammar.comments() else {
        panic!("expected one comment");
    };

    assert_eq!(comment.value, "x");
    assert_eq!(comment.position, Position::new(6, 0, 6));
}

#[test]
fn comments_after_rules_in_dump() {
    insta::assert_snapshot!(dump_valid(r#"a = "x"; (* note *)"#), @r#"
    Rule a @0:0
      TerminalString "x"
    Comment "note" @0:9
    "#);
}

#[test]
fn nested_comment_kept_whole() {
    let grammar = parse("(* outer (* inner *) tail *)").unwrap();

    assert_eq!(grammar.comments()[0].value, "outer (* inner *) tail");
}

#[test]
fn empty_comment_body() {
    let grammar = parse("(**)").unwrap();

    assert_eq!(grammar.comments()[0].value, "");
}

#[test]
fn comment_between_identifier_fragments() {
    let grammar = parse(r#"a (* c *) b = "x";"#).unwrap();

    assert_eq!(grammar.syntax()[0].name, "ab");
    assert_eq!(grammar.comments()[0].value, "c");
}

#[test]
fn multiline_comment() {
    let input = indoc! {r#"
    (*
       spans
       lines
    *)
    a = "x";
    "#};

    let grammar = parse(input).unwrap();
    assert_eq!(grammar.comments()[0].value, "spans\n   lines");
    assert_eq!(grammar.syntax()[0].position, Position::new(24, 4, 0));
}

#[test]
fn degenerate_comment() {
    let err = syntax_error("(*)");

    assert_eq!(err.kind, SyntaxErrorKind::InvalidEmptyComment);
    insta::assert_snapshot!(err, @"`(*)` is not a valid comment at 0:0, 0:3");
}

#[test]
fn degenerate_comment_nested() {
    let err = syntax_error("(* a (*) *)");

    assert_eq!(err.kind, SyntaxErrorKind::InvalidEmptyComment);
    assert_eq!(err.start, Position::new(5, 0, 5));
}

#[test]
fn unterminated_comment() {
    assert_eq!(
        error_kind("(* a (* b *)"),
        SyntaxErrorKind::UnterminatedComment
    );
    assert_eq!(
        error_kind(r#"a = "x"; (* open"#),
        SyntaxErrorKind::UnterminatedComment
    );
}

#[test]
fn whitespace_variants() {
    let input = "a\t=\x0b\"x\"\x0c;";

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      TerminalString "x"
    "#);
}

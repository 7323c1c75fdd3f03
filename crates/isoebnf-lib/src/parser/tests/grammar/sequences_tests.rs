use indoc::indoc;

use crate::diagnostics::SyntaxErrorKind;
use crate::parser::tests::{dump_valid, render_invalid, syntax_error};
use crate::{DEFAULT_RECURSION_LIMIT, Error, GrammarBuilder, Position, parse};

#[test]
fn ascii_brackets() {
    let input = r#"a = [ "x" ] , { "y" } , ( "z" );"#;

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      SingleDefinition
        OptionalSequence
          TerminalString "x"
        RepeatedSequence
          TerminalString "y"
        GroupedSequence
          TerminalString "z"
    "#);
}

#[test]
fn digraph_brackets() {
    let input = r#"a = (/ "x" /), (: "y" :);"#;

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      SingleDefinition
        OptionalSequence
          TerminalString "x"
        RepeatedSequence
          TerminalString "y"
    "#);
}

#[test]
fn mixed_spellings_pair_up() {
    let input = r#"a = [ "x" /), (: "y" };"#;

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      SingleDefinition
        OptionalSequence
          TerminalString "x"
        RepeatedSequence
          TerminalString "y"
    "#);
}

#[test]
fn empty_grouped_sequence() {
    let grammar = crate::parse("a=();").unwrap();
    let rule = &grammar.syntax()[0];

    assert_eq!(rule.value.len(), 1);
    insta::assert_snapshot!(crate::dump(&grammar), @r"
    Rule a @0:0
      GroupedSequence
    ");
    assert_eq!(rule.value[0].length, 2);
}

#[test]
fn slash_before_digraph_close_is_not_a_separator() {
    let input = r#"a = (/ "x" / "y" /);"#;

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule a @0:0
      OptionalSequence
        TerminalString "x"
        TerminalString "y"
    "#);
}

#[test]
fn nested_sequences() {
    let input = indoc! {r#"
    a = [
      { ( b ) }
    ];
    "#};

    insta::assert_snapshot!(dump_valid(input), @r"
    Rule a @0:0
      OptionalSequence
        RepeatedSequence
          GroupedSequence
            MetaIdentifier b
    ");
}

#[test]
fn sequence_length_covers_brackets() {
    let grammar = crate::parse(r#"a = (: "x" :);"#).unwrap();
    let node = &grammar.syntax()[0].value[0];

    assert_eq!(node.position, Position::new(4, 0, 4));
    assert_eq!(node.length, 9);
}

#[test]
fn unclosed_group() {
    let input = indoc! {r#"
    a = ("x";
    "#};

    insta::assert_snapshot!(render_invalid(input), @r#"
    error: missing closing `)`
      |
    1 | a = ("x";
      |     -^^^
      |     |
      |     opened here
    "#);
}

#[test]
fn unclosed_optional_and_repeated() {
    let err = syntax_error(r#"a = [ "x" ;"#);
    assert_eq!(err.kind, SyntaxErrorKind::UnclosedBracket);
    assert_eq!(err.message, "missing closing `]` or `/)`");
    assert_eq!(err.related[0].start, Position::new(4, 0, 4));

    let err = syntax_error(r#"a = (: "x" ;"#);
    assert_eq!(err.kind, SyntaxErrorKind::UnclosedBracket);
    assert_eq!(err.message, "missing closing `}` or `:)`");
}

#[test]
fn unclosed_at_end_of_input() {
    let err = syntax_error("a = (");

    assert_eq!(err.kind, SyntaxErrorKind::UnclosedBracket);
    assert_eq!(err.start, Position::new(5, 0, 5));
    assert_eq!(err.end, Position::new(5, 0, 5));
}

#[test]
fn recursion_limit() {
    let input = "a = (((b)));";

    let res = GrammarBuilder::new(input)
        .with_recursion_limit(Some(2))
        .parse();
    assert_eq!(
        res.unwrap_err(),
        Error::RecursionLimitExceeded {
            start: Position::new(6, 0, 6),
            end: Position::new(7, 0, 7),
        }
    );

    let res = GrammarBuilder::new(input)
        .with_recursion_limit(Some(3))
        .parse();
    assert!(res.is_ok());
}

#[test]
fn recursion_limit_disabled() {
    let depth = 64;
    let input = format!("a = {}b{};", "(".repeat(depth), ")".repeat(depth));

    let res = GrammarBuilder::new(&input)
        .with_recursion_limit(Some(10))
        .parse();
    assert!(matches!(res, Err(Error::RecursionLimitExceeded { .. })));

    let grammar = GrammarBuilder::new(&input)
        .with_recursion_limit(None)
        .parse()
        .unwrap();
    assert_eq!(grammar.syntax().len(), 1);
}

fn nested(open: &str, close: &str, depth: u32) -> String {
    let depth = depth as usize;
    format!("a = {}b{};", open.repeat(depth), close.repeat(depth))
}

#[test]
fn default_recursion_limit_fits_the_stack() {
    for (open, close) in [("(", ")"), ("(/", "/)"), ("(:", ":)")] {
        let input = nested(open, close, DEFAULT_RECURSION_LIMIT);
        assert!(parse(&input).is_ok(), "{open} nested to the limit");

        let input = nested(open, close, DEFAULT_RECURSION_LIMIT + 1);
        let start = 4 + open.len() * DEFAULT_RECURSION_LIMIT as usize;
        assert_eq!(
            parse(&input).unwrap_err(),
            Error::RecursionLimitExceeded {
                start: Position::new(start, 0, start),
                end: Position::new(start + open.len(), 0, start + open.len()),
            },
            "{open} nested past the limit"
        );
    }
}

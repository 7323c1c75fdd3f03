use indoc::indoc;

use crate::diagnostics::SyntaxErrorKind;
use crate::parser::tests::{dump_valid, syntax_error};
use crate::{Grammar, NodeKind, Position, parse};

#[test]
fn empty_document() {
    let grammar = parse("").unwrap();

    assert!(grammar.syntax().is_empty());
    assert!(grammar.comments().is_empty());
}

#[test]
fn only_trivia() {
    let grammar = parse(" \t\r\n (* nothing here *) \n").unwrap();

    assert!(grammar.syntax().is_empty());
    assert_eq!(grammar.comments().len(), 1);
}

#[test]
fn empty_body() {
    let grammar = parse("a=;").unwrap();
    let rule = &grammar.syntax()[0];

    assert_eq!(rule.name, "a");
    assert!(rule.value.is_empty());
    assert_eq!(rule.length, 3);
    assert_eq!(rule.kind(), NodeKind::SyntaxRule);
}

#[test]
fn duplicate_rules_kept() {
    let input = indoc! {r#"
    a = "x";
    b = a;
    a = "y";
    "#};

    let grammar = parse(input).unwrap();
    assert_eq!(grammar.syntax().len(), 3);
    assert_eq!(grammar.rules_named("a").count(), 2);
    assert_eq!(
        grammar.rule_names().into_iter().collect::<Vec<_>>(),
        ["a", "b"]
    );
}

#[test]
fn accepts_bytes() {
    let grammar = parse(b"a = \"x\";").unwrap();

    assert_eq!(grammar.syntax()[0].name, "a");
}

#[test]
fn reparse_is_identical() {
    let input = indoc! {r#"
    (* letters *)
    letter = "a" | "b" | [ "c" ];
    word = letter, { letter } - "ab";
    "#};

    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn rule_and_node_positions() {
    let input = "\n(* first *)\na b c = \"a\" | \"b\" (* second *)\n    | \"c\";\nb = ( a| \"x\") - (* third *);";

    let grammar = parse(input).unwrap();
    let [abc, b] = grammar.syntax() else {
        panic!("expected two rules");
    };

    assert_eq!(abc.name, "abc");
    assert_eq!(abc.position, Position::new(13, 2, 0));
    let positions: Vec<_> = abc.value.iter().map(|n| n.position).collect();
    assert_eq!(
        positions,
        [
            Position::new(21, 2, 8),
            Position::new(27, 2, 14),
            Position::new(50, 3, 6),
        ]
    );

    assert_eq!(b.name, "b");
    assert_eq!(b.position, Position::new(55, 4, 0));
    let term = &b.value[0];
    assert_eq!(term.kind(), NodeKind::SyntacticTerm);
    assert_eq!(term.position, Position::new(59, 4, 4));
    let group = term.children()[0];
    assert_eq!(group.kind(), NodeKind::GroupedSequence);
    assert_eq!(group.position, Position::new(59, 4, 4));
    let inner: Vec<_> = group.children().iter().map(|n| n.position).collect();
    assert_eq!(inner, [Position::new(61, 4, 6), Position::new(64, 4, 9)]);

    let comments: Vec<_> = grammar.comments().iter().map(|c| c.value.as_str()).collect();
    assert_eq!(comments, ["first", "second", "third"]);
}

#[test]
fn grammar_dump() {
    let input = indoc! {r#"
    (* digits *)
    digit = "0" | "1";
    number = digit, { digit };
    "#};

    insta::assert_snapshot!(dump_valid(input), @r#"
    Rule digit @1:0
      TerminalString "0"
      TerminalString "1"
    Rule number @2:0
      SingleDefinition
        MetaIdentifier digit
        RepeatedSequence
          MetaIdentifier digit
    Comment "digits" @0:0
    "#);
}

#[test]
fn missing_meta_identifier() {
    let err = syntax_error(r#"= "x";"#);

    assert_eq!(err.kind, SyntaxErrorKind::MissingMetaIdentifier);
    insta::assert_snapshot!(err, @"expected a rule name at 0:0, 0:0");
}

#[test]
fn missing_definition_operator() {
    let err = syntax_error(r#"a "x";"#);

    assert_eq!(err.kind, SyntaxErrorKind::MissingDefinitionOperator);
    insta::assert_snapshot!(err, @"expected `=` after rule `a` at 0:0, 0:2");
}

#[test]
fn missing_terminator() {
    let err = syntax_error("a = \"x\"\nb = \"y\";");

    assert_eq!(err.kind, SyntaxErrorKind::MissingTerminator);
    insta::assert_snapshot!(err, @"expected `;` to end rule `a` at 0:0, 1:0");
}

#[test]
fn missing_terminator_at_end_of_input() {
    assert_eq!(
        syntax_error(r#"a = "x""#).kind,
        SyntaxErrorKind::MissingTerminator
    );
}

#[test]
fn first_error_wins() {
    let err = syntax_error("a = ?x;\nb = (*) ;");

    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedSpecialSequence);
}

#[test]
fn parsed_grammar_survives_interchange() {
    let grammar = parse(r#"a = [ b ] , 2 * "c" - ? d ?; (* e *)"#).unwrap();

    assert_eq!(Grammar::from_json(&grammar.to_json()).unwrap(), grammar);
}

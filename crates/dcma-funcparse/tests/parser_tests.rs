//! Function-call parser integration tests

use dcma_funcparse::{
    escape_for_quotes, parse_functions, parse_with_config, retain_only_numeric_parameters,
    FunctionNode, ParseError, ParserConfig,
};
use proptest::prelude::*;
use rstest::rstest;

fn parse(text: &str) -> Result<Vec<FunctionNode>, ParseError> {
    parse_functions(text, '\\', ';')
}

#[test]
fn test_simple_numeric_call() {
    let nodes = parse("f(1, 2, 3)").unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name, "f");

    let raws: Vec<&str> = nodes[0].parameters.iter().map(|p| p.raw.as_str()).collect();
    assert_eq!(raws, vec!["1", "2", "3"]);
    for (p, expected) in nodes[0].parameters.iter().zip([1.0, 2.0, 3.0]) {
        assert_eq!(p.number, Some(expected));
        assert!(!p.is_fractional);
        assert!(!p.is_percentage);
    }
}

#[test]
fn test_escaped_quote_in_parameter() {
    let nodes = parse("f(\"a\\\"b\")").unwrap();
    assert_eq!(nodes[0].parameters.len(), 1);
    assert_eq!(nodes[0].parameters[0].raw, "a\"b");
}

#[test]
fn test_children() {
    let nodes = parse("p(x){ c(1); c(2) }").unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name, "p");
    assert_eq!(nodes[0].parameters.len(), 1);
    assert_eq!(nodes[0].parameters[0].raw, "x");
    assert_eq!(nodes[0].children.len(), 2);
    assert!(nodes[0].children.iter().all(|c| c.name == "c"));
    assert_eq!(nodes[0].children[1].parameters[0].number, Some(2.0));
}

#[test]
fn test_quotes_inside_children_survive_recursion() {
    let nodes = parse(r#"p(){ c("a;b", 'x}y', "q\"") }"#).unwrap();
    let child = &nodes[0].children[0];
    assert_eq!(child.parameters[0].raw, "a;b");
    assert_eq!(child.parameters[1].raw, "x}y");
    assert_eq!(child.parameters[2].raw, "q\"");
}

#[test]
fn test_trailing_comma_and_whitespace() {
    let nodes = parse("  resample ( 0.5x ,  25% , ) ;  ").unwrap();
    assert_eq!(nodes[0].name, "resample");
    assert_eq!(nodes[0].parameters.len(), 2);
    assert!(nodes[0].parameters[0].is_fractional);
    assert_eq!(nodes[0].parameters[0].as_fraction(), Some(0.5));
    assert!(nodes[0].parameters[1].is_percentage);
    assert_eq!(nodes[0].parameters[1].as_fraction(), Some(0.25));
}

#[rstest]
#[case("f(\"unterminated", ParseError::UnterminatedQuote)]
#[case("f('a", ParseError::UnterminatedQuote)]
#[case("f(1", ParseError::UnbalancedParenthesis)]
#[case("f(1){ g(2)", ParseError::UnbalancedParenthesis)]
#[case("(1)", ParseError::EmptyFunctionName)]
#[case("f(1) junk; g(2)", ParseError::StrayText("junk".to_string()))]
#[case("f(1) g", ParseError::IncompleteFunction("g".to_string()))]
#[case("f(\"a\\", ParseError::DanglingEscape)]
#[case("{ g() }", ParseError::OrphanChildBlock)]
#[case("f(1); { g() }", ParseError::OrphanChildBlock)]
#[case("f(){ g() }{ h() }", ParseError::DuplicateChildBlock)]
#[case("", ParseError::EmptyInput)]
#[case("f(){ h(\"x) }", ParseError::UnterminatedQuote)]
fn test_syntax_errors(#[case] text: &str, #[case] expected: ParseError) {
    assert_eq!(parse(text), Err(expected));
}

#[test]
fn test_retain_only_numeric_parameters_recurses() {
    let nodes = parse("a(x, 1){ b(y, 2){ c(z, 3%) } }").unwrap();
    let nodes = retain_only_numeric_parameters(nodes);
    assert_eq!(nodes[0].numbers(), vec![1.0]);
    assert_eq!(nodes[0].children[0].numbers(), vec![2.0]);
    assert_eq!(nodes[0].children[0].children[0].parameters[0].raw, "3%");
}

#[test]
fn test_config_from_toml() {
    let config = ParserConfig::from_toml(
        r#"
        escape_char = "^"
        separator_char = "|"
        "#,
    )
    .unwrap();
    let nodes = parse_with_config("a(1) | b('^'')", &config).unwrap();
    assert_eq!(nodes[1].parameters[0].raw, "'");
}

#[test]
fn test_rendered_tree_parses_back() {
    let text = r#"outer(1, "a, b", 'say "hi"', 5%){ inner(x\y){ leaf() }; other(2x) }"#;
    let nodes = parse(text).unwrap();
    let rendered: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
    let reparsed = parse(&rendered.join("; ")).unwrap();
    assert_eq!(reparsed, nodes);
}

proptest! {
    #[test]
    fn test_arbitrary_parameter_text_survives_quoting(raw in "[ -~]{1,20}") {
        let cleaned = escape_for_quotes(&raw);
        prop_assume!(!cleaned.trim().is_empty());
        let text = format!("f(\"{}\")", cleaned.replace('\\', "\\\\"));
        let nodes = parse(&text).unwrap();
        prop_assert_eq!(&nodes[0].parameters[0].raw, cleaned.trim());
    }

    #[test]
    fn test_parse_never_panics(text in "[a-z(){};,'\"\\\\ 0-9%x]{0,40}") {
        let _ = parse(&text);
    }
}

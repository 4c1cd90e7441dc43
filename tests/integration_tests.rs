//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API the way a downstream consumer would:
//! source text in, a `Program` (or a positioned error) out.

use minijs::{
    ast::{
        ast::{Expr, NodeType, Stmt},
        expressions::ObjectProperty,
        statements::Param,
    },
    errors::errors::ErrorKind,
    lexer::lexer::tokenize,
    parser::parser::{parse, ParseOptions, Parser},
    render_error,
};

const PROGRAM: &str = r#"
// merge two configurations
function merge({base, overrides: extra}, label) {
    let result = { ...base, ...extra, label }
    return result
}

var defaults = { retries: 3, name: 'worker' };
let total = 0
total += retries(defaults) + 1
log("total", total, merge(defaults, "x"))
"#;

#[test]
fn test_parse_complete_program() {
    let program = parse(PROGRAM, Some("merge.mjs".to_string())).unwrap();

    let types: Vec<NodeType> = program.body.iter().map(|stmt| stmt.node_type()).collect();
    assert_eq!(
        types,
        [
            NodeType::FunctionDeclarationNode,
            NodeType::VariableStatement,
            NodeType::VariableStatement,
            NodeType::ExpressionStatement,
            NodeType::ExpressionStatement,
        ]
    );

    let Stmt::Function(merge) = &program.body[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(merge.name.name, "merge");
    assert!(matches!(&merge.params[0], Param::Pattern(p) if p.properties.len() == 2));
    assert!(matches!(&merge.params[1], Param::Identifier(id) if id.name == "label"));
    assert_eq!(merge.body.len(), 2);

    let Stmt::Variable(result) = &merge.body[0] else {
        panic!("expected a variable statement");
    };
    let Some(Expr::Object(object)) = &result.declarations[0].init else {
        panic!("expected an object literal");
    };
    assert!(matches!(object.properties[0], ObjectProperty::Spread { .. }));
    assert!(matches!(object.properties[1], ObjectProperty::Spread { .. }));
    assert!(matches!(&object.properties[2], ObjectProperty::Shorthand { key, .. } if key.name == "label"));
}

#[test]
fn test_compound_assignment_keeps_operator() {
    let program = parse("total += 1", None).unwrap();

    let Stmt::Expression(stmt) = &program.body[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Assignment(assignment) = &stmt.expression else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.operator.value, "+=");
}

#[test]
fn test_spans_point_into_source() {
    let source = "let name = \"value\"";
    let program = parse(source, None).unwrap();

    let Stmt::Variable(var) = &program.body[0] else {
        panic!("expected a variable statement");
    };
    let init = var.declarations[0].init.as_ref().unwrap();
    let span = init.get_span();
    assert_eq!(&source[span.start.0 as usize..span.end.0 as usize], "\"value\"");
    assert_eq!(program.body[0].get_span().start.0, 0);
    assert_eq!(program.body[0].get_span().end.0, source.len() as u32);
}

#[test]
fn test_two_parsers_agree() {
    let first = Parser::new(ParseOptions::default()).parse(PROGRAM).unwrap();
    let second = Parser::new(ParseOptions::default()).parse(PROGRAM).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_program_serializes_to_json() {
    let program = parse("let a = f(1, ...b)", None).unwrap();

    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["body"][0]["type"], "Variable");
    assert_eq!(json["body"][0]["kind"], "Let");
    assert_eq!(json["body"][0]["declarations"][0]["name"]["name"], "a");
    assert_eq!(json["body"][0]["declarations"][0]["init"]["type"], "Call");
}

#[test]
fn test_syntax_error_is_rendered_against_source() {
    let source = "let a = 1\nfunction f() 1\n";
    let error = parse(source, Some("bad.mjs".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);

    let rendered = render_error(&error, source);
    assert!(rendered.contains("-> bad.mjs"));
    assert!(rendered.contains("2 | function f() 1"));
}

#[test]
fn test_tokenize_matches_parser_input() {
    let tokens = tokenize("f(a)\n".to_string(), None).unwrap();

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, ["f", "(", "a", ")", "\n"]);
}

#[test]
fn test_unterminated_call_is_a_syntax_error() {
    let error = parse("f(a,", None).unwrap_err();

    assert!(error.is_syntax_error());
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert!(error.to_string().contains("unexpected token line break"));
}

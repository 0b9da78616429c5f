use mathnote::{
    ast::{Expression, Operator, Relation, Statement},
    interpreter::{
        lexer::{Bracket, Symbol, Token, tokenize},
        simplifier::builtin::{BUILTIN_FUNCTIONS, BuiltInFunction},
        value::constant::Constant,
        workspace::Workspace,
    },
    parse_statement,
};
use pretty_assertions::assert_eq;

fn number(value: f64) -> Expression {
    Expression::Constant(Constant::real(value))
}

fn variable(name: &str) -> Expression {
    Expression::Variable(name.to_string())
}

fn expression(text: &str) -> Expression {
    match parse_statement(text) {
        Ok(Statement::Expression(e)) => e,
        other => panic!("{text:?} did not parse as an expression: {other:?}"),
    }
}

#[test]
fn missing_closers_are_appended() {
    assert_eq!(tokenize("(2+3").unwrap(), tokenize("(2+3)").unwrap());
    assert_eq!(tokenize("[(1").unwrap(), tokenize("[(1)]").unwrap());
}

#[test]
fn missing_openers_are_synthesized_at_the_front() {
    assert_eq!(tokenize("2+3)").unwrap(), tokenize("(2+3)").unwrap());
    assert_eq!(tokenize("1)]").unwrap(), tokenize("[(1)]").unwrap());
}

#[test]
fn names_before_brackets_become_call_heads() {
    assert_eq!(tokenize("f(x)").unwrap(),
               vec![Token::Open { bracket: Bracket::Round,
                                  head:    Some("f".to_string()), },
                    Token::Identifier("x".to_string()),
                    Token::Close(Bracket::Round)]);

    let spaced = tokenize("f (x)").unwrap();
    assert_eq!(spaced[0], Token::Identifier("f".to_string()));
    assert_eq!(spaced[1],
               Token::Open { bracket: Bracket::Round,
                             head:    None, });
}

#[test]
fn digits_and_names_split() {
    assert_eq!(tokenize("2x").unwrap(),
               vec![Token::Number(2.0), Token::Identifier("x".to_string())]);
    assert_eq!(tokenize("x2").unwrap(), vec![Token::Identifier("x2".to_string())]);
    assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
}

#[test]
fn symbols_and_relations() {
    assert_eq!(tokenize("a∗b×c").unwrap(),
               vec![Token::Identifier("a".to_string()),
                    Token::Operator(Symbol::Star),
                    Token::Identifier("b".to_string()),
                    Token::Operator(Symbol::Cross),
                    Token::Identifier("c".to_string())]);
    assert_eq!(tokenize("<= ≤ != ≠ >= ≥").unwrap(),
               vec![Token::Relation(Relation::LessEqual),
                    Token::Relation(Relation::LessEqual),
                    Token::Relation(Relation::NotEqual),
                    Token::Relation(Relation::NotEqual),
                    Token::Relation(Relation::GreaterEqual),
                    Token::Relation(Relation::GreaterEqual)]);
}

#[test]
fn bars_inside_braces_separate() {
    let tokens = tokenize("{x | 0 < x < 1}").unwrap();
    assert!(tokens.contains(&Token::Bar));

    let tokens = tokenize("|x|").unwrap();
    assert_eq!(tokens,
               vec![Token::Open { bracket: Bracket::Bar,
                                  head:    None, },
                    Token::Identifier("x".to_string()),
                    Token::Close(Bracket::Bar)]);
}

#[test]
fn implicit_multiplication_splits_adjacent_operands() {
    assert_eq!(expression("2x"), Expression::binary(Operator::Multiply, number(2.0), variable("x")));
    assert_eq!(expression("2x y"),
               Expression::binary(Operator::Multiply,
                                  Expression::binary(Operator::Multiply,
                                                     number(2.0),
                                                     variable("x")),
                                  variable("y")));
}

#[test]
fn reversed_division_swaps_operands() {
    assert_eq!(expression("a\\b"), Expression::binary(Operator::Divide, variable("b"), variable("a")));
}

#[test]
fn leading_minus_is_negation() {
    assert_eq!(expression("-x"), Expression::unary(Operator::Negate, variable("x")));
    assert_eq!(expression("-x+1"),
               Expression::binary(Operator::Add,
                                  Expression::unary(Operator::Negate, variable("x")),
                                  number(1.0)));
}

#[test]
fn named_groups() {
    assert_eq!(expression("sqrt(x)"), Expression::sqrt(variable("x")));
    assert_eq!(expression("ln(x)"), Expression::unary(Operator::Ln, variable("x")));
    assert_eq!(expression("sin(x)"),
               Expression::BuiltIn { function: BuiltInFunction::Sin,
                                     argument: Box::new(variable("x")), });
    assert_eq!(expression("f(x, y)"),
               Expression::Function { name:      "f".to_string(),
                                      arguments: vec![variable("x"), variable("y")], });
    assert_eq!(expression("f()"),
               Expression::Function { name:      "f".to_string(),
                                      arguments: Vec::new(), });
}

#[test]
fn bracketed_vectors_spread_into_call_arguments() {
    let pair = Expression::Function { name:      "f".to_string(),
                                      arguments: vec![number(1.0), number(2.0)], };
    assert_eq!(expression("f((1, 2))"), pair);
    assert_eq!(expression("f([1, 2])"), pair);
    assert_eq!(expression("f((x))"),
               Expression::Function { name:      "f".to_string(),
                                      arguments: vec![Expression::unary(Operator::Parentheses,
                                                                        variable("x"))], });
}

#[test]
fn every_builtin_name_parses_as_a_builtin() {
    for name in BUILTIN_FUNCTIONS {
        let parsed = expression(&format!("{name}(x)"));
        assert!(matches!(parsed, Expression::BuiltIn { function, .. } if function.name() == *name),
                "{name} parsed as {parsed:?}");
    }
}

#[test]
fn plain_groups() {
    assert_eq!(expression("(x)"), Expression::unary(Operator::Parentheses, variable("x")));
    assert_eq!(expression("[1, 2]"),
               Expression::Vector { components:  vec![number(1.0), number(2.0)],
                                    parenthetic: true, });
    assert_eq!(expression("1, 2"),
               Expression::Vector { components:  vec![number(1.0), number(2.0)],
                                    parenthetic: false, });
    assert_eq!(expression("|x|"), Expression::unary(Operator::Absolute, variable("x")));
    assert_eq!(expression("{1, 2}"), Expression::Set(vec![number(1.0), number(2.0)]));
    assert_eq!(expression(""), Expression::null());
}

#[test]
fn shapes() {
    assert_eq!(expression("(1, 2, 3)").shape(), (3, 1));
    assert_eq!(expression("{1, 2}").shape(), (2, 1));
    assert_eq!(expression("x+1").shape(), (1, 1));
}

#[test]
fn comparisons_keep_their_chain() {
    let Statement::Comparison(comparison) = parse_statement("a < b ≤ c").unwrap() else {
        panic!("not a comparison");
    };
    assert_eq!(comparison.expressions(), &[variable("a"), variable("b"), variable("c")]);
    assert_eq!(comparison.relations(), &[Relation::Less, Relation::LessEqual]);
    assert_eq!(comparison.to_string(), "a < b ≤ c");
}

#[test]
fn relations_inside_brackets_do_not_split() {
    assert!(matches!(parse_statement("{x : 0 < x < 1}"), Ok(Statement::Expression(_))));
}

#[test]
fn rendering_parenthesizes_by_precedence() {
    assert_eq!(expression("(a+b)*c").to_string(), "(a + b)*c");
    assert_eq!(expression("a-(b+c)").to_string(), "a - (b + c)");
    assert_eq!(expression("(a-b)+c").to_string(), "(a - b) + c");
    assert_eq!(expression("a^(b^c)").to_string(), "a^(b^c)");
    assert_eq!(expression("-(a*b)").to_string(), "-(a*b)");
}

#[test]
fn renaming_protects_bound_names() {
    let old = ["x".to_string(), "a".to_string()];
    let new = ["t".to_string(), "b".to_string()];

    assert_eq!(expression("x + a").replaced(&old, &new).to_string(), "t + b");
    assert_eq!(expression("{x+a : a < x < 2a}").replaced(&old, &new).to_string(),
               "{x + b : b < x < 2*b}");
}

#[test]
fn inputs_skip_bound_names() {
    let workspace = Workspace::standard();
    assert_eq!(expression("{x*y : 0 < x < z}").inputs(&workspace), vec!["z", "y"]);
    assert!(expression("sin(t) + pi").is_single_variable(&workspace));
    assert!(!expression("x*y").is_single_variable(&workspace));
}

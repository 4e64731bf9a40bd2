//! Unit tests for the parser module.
//!
//! Covers every statement form, the expression precedence chain, type specs,
//! closure/parenthesis disambiguation and the syntax faults.

use std::rc::Rc;

use indoc::indoc;
use pretty_assertions::assert_eq;

use super::parser::parse;
use crate::{
    ast::{
        ast::Start,
        expressions::{AddExpr, Arg, ArrayExpr, CallExpr, Condition, Expr, Factor, Term, VarExpr},
        statements::{AssignStmt, Stmt},
        types::{Param, TypeBase, TypeSpec},
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
    MK_PRIMITIVE,
};

fn parse_source(source: &str) -> Result<Start, Error> {
    let tokens = tokenize(source, Some("test.sa".to_string()));
    parse(tokens, Rc::new("test.sa".to_string()))
}

fn var(id: &str) -> Factor {
    Factor::Var(VarExpr {
        id: id.to_string(),
        indices: vec![],
    })
}

#[test]
fn test_parse_call_statement() {
    let ast = parse_source("print(x: 2);").unwrap();

    assert_eq!(
        ast.body,
        vec![Stmt::Call(CallExpr {
            callee: "print".to_string(),
            arguments: vec![Arg {
                id: "x".to_string(),
                value: Expr::from(Factor::Int(2)),
            }],
        })]
    );
}

#[test]
fn test_parse_spaced_call_statement() {
    assert!(parse_source(" print ( x : 2 ) ; ").is_ok());
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_source("").unwrap().body.is_empty());
}

#[test]
fn test_parse_assignment() {
    let ast = parse_source("total <- total + 1;").unwrap();

    assert_eq!(
        ast.body,
        vec![Stmt::Assign(AssignStmt {
            identifier: "total".to_string(),
            value: Expr::Add(AddExpr {
                term: Term::single(var("total")),
                next: Some((
                    "+".to_string(),
                    Box::new(AddExpr::single(Term::single(Factor::Int(1))))
                )),
            }),
        })]
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let ast = parse_source("y <- 1 + 2 * 3;").unwrap();

    let Stmt::Assign(assign) = &ast.body[0] else {
        panic!("expected assignment");
    };
    let Expr::Add(add) = &assign.value else {
        panic!("expected arithmetic expression");
    };

    assert_eq!(add.term, Term::single(Factor::Int(1)));
    let (op, tail) = add.next.as_ref().unwrap();
    assert_eq!(op, "+");
    assert_eq!(
        tail.term,
        Term {
            factor: Factor::Int(2),
            next: Some(("*".to_string(), Box::new(Term::single(Factor::Int(3))))),
        }
    );
}

#[test]
fn test_parse_var_decl() {
    let ast = parse_source("let grid : [[float]] <- [[1.5]];").unwrap();

    let Stmt::VarDecl(decl) = &ast.body[0] else {
        panic!("expected declaration");
    };
    assert_eq!(decl.identifier, "grid");
    assert_eq!(decl.explicit_type.array_depth, 2);
    assert!(matches!(&decl.explicit_type.base, TypeBase::Primitive(name) if name == "float"));
    assert!(matches!(decl.assigned_value, Expr::Array(_)));
}

#[test]
fn test_parse_function_type_spec() {
    let ast = parse_source("let f : (x: int, y: [bool]): none <- g;").unwrap();

    let Stmt::VarDecl(decl) = &ast.body[0] else {
        panic!("expected declaration");
    };
    let function = decl.explicit_type.as_function().unwrap();

    assert_eq!(
        function.parameters,
        vec![
            Param::new("x", MK_PRIMITIVE!("int")),
            Param::new("y", MK_PRIMITIVE!("bool", 1)),
        ]
    );
    assert!(matches!(&function.return_type.base, TypeBase::Primitive(name) if name == "none"));
}

#[test]
fn test_unbalanced_type_brackets_fail() {
    let error = parse_source("let a : [int <- [1];").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "<-".to_string(),
            expected: "]".to_string(),
        }
    );
}

#[test]
fn test_parse_function_declaration() {
    let source = indoc! {"
        fun square(x: int) : int <- begin
            return x * x;
        end
    "};

    let ast = parse_source(source).unwrap();
    let Stmt::FnDecl(function) = &ast.body[0] else {
        panic!("expected function declaration");
    };

    assert_eq!(function.identifier, "square");
    assert_eq!(function.parameters, vec![Param::new("x", MK_PRIMITIVE!("int"))]);
    assert_eq!(function.body.len(), 1);
    assert!(matches!(function.body[0], Stmt::Return(_)));
}

#[test]
fn test_parse_default_parameter() {
    let ast = parse_source("fun f(x: int <- 3, y: float) : none <- begin end").unwrap();

    let Stmt::FnDecl(function) = &ast.body[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.parameters[0].default, Some(Expr::from(Factor::Int(3))));
    assert_eq!(function.parameters[1].default, None);
}

#[test]
fn test_duplicate_parameters_are_kept() {
    let ast = parse_source("fun f(x: int, x: int) : none <- begin end").unwrap();

    let Stmt::FnDecl(function) = &ast.body[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.parameters.len(), 2);
}

#[test]
fn test_parse_if_else() {
    let source = indoc! {"
        if x < 10 then
            x <- x + 1;
        else
            x <- 0;
            print(x: x);
        fi
    "};

    let ast = parse_source(source).unwrap();
    let Stmt::If(if_stmt) = &ast.body[0] else {
        panic!("expected if statement");
    };

    assert_eq!(if_stmt.condition.relop, "<");
    assert_eq!(if_stmt.then_body.len(), 1);
    assert_eq!(if_stmt.else_body.as_ref().map(Vec::len), Some(2));
}

#[test]
fn test_parse_if_without_else() {
    let ast = parse_source("if x == 1 then fi").unwrap();

    let Stmt::If(if_stmt) = &ast.body[0] else {
        panic!("expected if statement");
    };
    assert!(if_stmt.then_body.is_empty());
    assert!(if_stmt.else_body.is_none());
}

#[test]
fn test_parse_while_loop() {
    let ast = parse_source("while i < 10 do i <- i + 1; done").unwrap();

    assert!(matches!(&ast.body[0], Stmt::While(w) if w.body.len() == 1));
}

#[test]
fn test_parse_chained_condition() {
    let ast = parse_source("while a < b and c != d or e >= f do done").unwrap();

    let Stmt::While(while_stmt) = &ast.body[0] else {
        panic!("expected while statement");
    };
    let (first_op, second) = while_stmt.condition.next.as_ref().unwrap();
    let (second_op, third) = second.next.as_ref().unwrap();

    assert_eq!(first_op, "and");
    assert_eq!(second.relop, "!=");
    assert_eq!(second_op, "or");
    assert_eq!(third.relop, ">=");
    assert!(third.next.is_none());
}

#[test]
fn test_if_requires_condition() {
    let error = parse_source("if x then fi").unwrap_err();

    assert_eq!(error.get_error_name(), "ExpectedCondition");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_boolop_requires_condition() {
    let error = parse_source("while a < b and c do done").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedCondition {
            keyword: "and".to_string()
        }
    );
}

#[test]
fn test_parse_indexed_variable() {
    let ast = parse_source("x <- grid[1][i + 1];").unwrap();

    let Stmt::Assign(assign) = &ast.body[0] else {
        panic!("expected assignment");
    };
    let Expr::Add(add) = &assign.value else {
        panic!("expected arithmetic expression");
    };
    let Factor::Var(variable) = &add.term.factor else {
        panic!("expected variable");
    };

    assert_eq!(variable.id, "grid");
    assert_eq!(variable.indices.len(), 2);
}

#[test]
fn test_parse_nested_call_expression() {
    let ast = parse_source("print(x: square(x: 4));").unwrap();

    let Stmt::Call(call) = &ast.body[0] else {
        panic!("expected call");
    };
    assert_eq!(
        call.arguments[0].value,
        Expr::from(Factor::Call(CallExpr {
            callee: "square".to_string(),
            arguments: vec![Arg {
                id: "x".to_string(),
                value: Expr::from(Factor::Int(4)),
            }],
        }))
    );
}

#[test]
fn test_parse_empty_call_and_array() {
    let ast = parse_source("xs <- [];\nreadInt();").unwrap();

    assert!(matches!(&ast.body[0], Stmt::Assign(a) if a.value == Expr::Array(ArrayExpr { entries: vec![] })));
    assert!(matches!(&ast.body[1], Stmt::Call(c) if c.arguments.is_empty()));
}

#[test]
fn test_parse_closure() {
    let source = indoc! {"
        let add : (a: int, b: int): int <- (a: int, b: int <- 1): int <- {
            return a + b;
        };
    "};

    let ast = parse_source(source).unwrap();
    let Stmt::VarDecl(decl) = &ast.body[0] else {
        panic!("expected declaration");
    };
    let Expr::Closure(closure) = &decl.assigned_value else {
        panic!("expected closure");
    };

    assert_eq!(closure.parameters.len(), 2);
    assert!(closure.parameters[1].default.is_some());
    assert_eq!(closure.body.len(), 1);
}

#[test]
fn test_parse_closure_without_parameters() {
    let ast = parse_source("f <- (): int <- { return 1; };").unwrap();

    assert!(matches!(&ast.body[0], Stmt::Assign(a) if matches!(a.value, Expr::Closure(_))));
}

#[test]
fn test_leading_parenthesis_is_a_grouping() {
    let ast = parse_source("y <- (1 + 2) * 3;").unwrap();

    let Stmt::Assign(assign) = &ast.body[0] else {
        panic!("expected assignment");
    };
    let Expr::Add(add) = &assign.value else {
        panic!("expected arithmetic expression");
    };

    assert!(matches!(add.term.factor, Factor::Paren(_)));
    assert!(add.term.next.is_some());
}

#[test]
fn test_parse_condition_as_value() {
    let ast = parse_source("let ok : bool <- x <= 2;").unwrap();

    let Stmt::VarDecl(decl) = &ast.body[0] else {
        panic!("expected declaration");
    };
    assert!(matches!(
        &decl.assigned_value,
        Expr::Condition(Condition { relop, .. }) if relop == "<="
    ));
}

#[test]
fn test_parse_float_literal() {
    let ast = parse_source("x <- 2.5;").unwrap();

    assert!(matches!(&ast.body[0], Stmt::Assign(a) if a.value == Expr::from(Factor::Float(2.5))));
}

#[test]
fn test_positional_argument_is_rejected() {
    let error = parse_source("print(2);").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "2".to_string(),
            expected: "id".to_string(),
        }
    );
}

#[test]
fn test_missing_semicolon_is_rejected() {
    let error = parse_source("print(x: 2)").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_trailing_tokens_are_rejected() {
    let error = parse_source("x <- 1;\nfi").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TrailingTokens {
            token: "fi".to_string()
        }
    );
    assert_eq!(error.get_position().map(|position| position.0), Some(2));
}

#[test]
fn test_statement_list_stops_at_block_terminators() {
    let error = parse_source("while a < b do x <- 1; end").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "end".to_string(),
            expected: "done".to_string(),
        }
    );
}

#[test]
fn test_unrecognised_character_is_a_lex_error() {
    let error = parse_source("x <- 1 @ 2;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
}

#[test]
fn test_integer_overflow_is_rejected() {
    let error = parse_source("x <- 99999999999999999999;").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_identifier_alone_is_not_a_statement() {
    let error = parse_source("x;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            expected: "(".to_string(),
        }
    );
}

#[test]
fn test_trailing_comma_in_arguments_is_rejected() {
    assert!(parse_source("print(x: 1,);").is_err());
}

#[test]
fn test_parsed_types_compare_structurally() {
    let ast = parse_source("let a : [int] <- [1];\nlet b : [int] <- [2];").unwrap();

    let types: Vec<&TypeSpec> = ast
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::VarDecl(decl) => Some(&decl.explicit_type),
            _ => None,
        })
        .collect();

    assert_eq!(types[0], types[1]);
}

use log::{debug, trace};

use crate::{
    ast::{
        ast::Start,
        expressions::{AddExpr, ArrayExpr, CallExpr, ClosureExpr, Condition, Expr, Factor, Term, VarExpr},
        statements::{FnDeclStmt, Stmt},
        types::{Param, TypeSpec, ANY},
    },
    errors::errors::{Error, ErrorImpl},
    MK_PRIMITIVE,
};

use super::environment::{Environment, FunctionStack, ScopeStack};

/// The analysis context of one run: the scope stack and the function
/// context stack, passed explicitly to every check.
#[derive(Debug)]
pub struct TypeChecker {
    pub scopes: ScopeStack,
    pub functions: FunctionStack,
}

impl TypeChecker {
    /// A fresh context whose global scope holds the built-in functions.
    pub fn new() -> Self {
        let built_ins = [
            (
                "print",
                TypeSpec::function(vec![Param::new("x", MK_PRIMITIVE!(ANY))], MK_PRIMITIVE!("none")),
            ),
            ("readInt", TypeSpec::function(vec![], MK_PRIMITIVE!("int"))),
            ("readFloat", TypeSpec::function(vec![], MK_PRIMITIVE!("float"))),
            ("readBool", TypeSpec::function(vec![], MK_PRIMITIVE!("bool"))),
        ];

        let globals = Environment {
            variable_lookup: built_ins
                .into_iter()
                .map(|(name, ty)| (String::from(name), ty))
                .collect(),
        };

        TypeChecker {
            scopes: ScopeStack::with_global(globals),
            functions: FunctionStack::new(),
        }
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn type_mismatch(expected: &TypeSpec, received: &TypeSpec) -> Error {
    Error::semantic(ErrorImpl::TypeMatchError {
        expected: expected.to_string(),
        received: received.to_string(),
    })
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<TypeSpec, Error> {
    match ast {
        Expr::Condition(condition) => type_check_condition(type_checker, condition),
        Expr::Add(add) => type_check_add_expr(type_checker, add),
        Expr::Array(array) => type_check_array(type_checker, array),
        Expr::Closure(closure) => type_check_closure(type_checker, closure),
    }
}

/// Both sides must have the same type, and ordering operators only apply to
/// non-array operands. A condition is always `bool`.
pub fn type_check_condition(type_checker: &mut TypeChecker, condition: &Condition) -> Result<TypeSpec, Error> {
    let left = type_check_add_expr(type_checker, &condition.left)?;
    let right = type_check_add_expr(type_checker, &condition.right)?;

    if left != right {
        return Err(type_mismatch(&left, &right));
    }

    if condition.relop.contains(|c: char| c == '<' || c == '>') && left.array_depth != 0 {
        return Err(Error::semantic(ErrorImpl::NotComparable {
            relop: condition.relop.clone(),
            type_: left.to_string(),
        }));
    }

    if let Some((_, next)) = &condition.next {
        type_check_condition(type_checker, next)?;
    }

    Ok(MK_PRIMITIVE!("bool"))
}

/// Chained operands must match the head, and the head must be arithmetic.
fn check_chain(head: &TypeSpec, tail: &TypeSpec) -> Result<(), Error> {
    if head != tail {
        return Err(type_mismatch(head, tail));
    }

    if !head.is_arithmetic() {
        return Err(Error::semantic(ErrorImpl::NotArithmetic {
            type_: head.to_string(),
        }));
    }

    Ok(())
}

pub fn type_check_add_expr(type_checker: &mut TypeChecker, add: &AddExpr) -> Result<TypeSpec, Error> {
    let head = type_check_term(type_checker, &add.term)?;

    if let Some((_, tail)) = &add.next {
        let tail = type_check_add_expr(type_checker, tail)?;
        check_chain(&head, &tail)?;
    }

    Ok(head)
}

pub fn type_check_term(type_checker: &mut TypeChecker, term: &Term) -> Result<TypeSpec, Error> {
    let head = type_check_factor(type_checker, &term.factor)?;

    if let Some((_, tail)) = &term.next {
        let tail = type_check_term(type_checker, tail)?;
        check_chain(&head, &tail)?;
    }

    Ok(head)
}

pub fn type_check_factor(type_checker: &mut TypeChecker, factor: &Factor) -> Result<TypeSpec, Error> {
    match factor {
        Factor::Var(var) => type_check_var(type_checker, var),
        Factor::Call(call) => type_check_call(type_checker, call),
        Factor::Int(_) => Ok(MK_PRIMITIVE!("int")),
        Factor::Float(_) => Ok(MK_PRIMITIVE!("float")),
        Factor::Paren(inner) => type_check_expr(type_checker, inner),
    }
}

/// Each index strips one array level; indexing past the declared depth is a
/// fault. Only the number of indices matters, not the index expressions.
pub fn type_check_var(type_checker: &mut TypeChecker, var: &VarExpr) -> Result<TypeSpec, Error> {
    let declared = type_checker.scopes.get(&var.id)?.clone();

    if var.indices.len() > declared.array_depth {
        return Err(Error::semantic(ErrorImpl::TooManyIndices {
            variable: var.id.clone(),
            depth: declared.array_depth,
            indices: var.indices.len(),
        }));
    }

    let depth = declared.array_depth - var.indices.len();
    Ok(declared.with_array_depth(depth))
}

/// Binds keyword arguments to the callee's parameters by name.
pub fn type_check_call(type_checker: &mut TypeChecker, call: &CallExpr) -> Result<TypeSpec, Error> {
    let callee_type = type_checker.scopes.get(&call.callee)?.clone();

    let Some(function) = callee_type.as_function() else {
        return Err(Error::semantic(ErrorImpl::NotCallable {
            callee: call.callee.clone(),
            type_: callee_type.to_string(),
        }));
    };

    if let Some(argument) = call
        .arguments
        .iter()
        .find(|argument| function.parameter(&argument.id).is_none())
    {
        return Err(Error::semantic(ErrorImpl::UnexpectedArgument {
            callee: call.callee.clone(),
            argument: argument.id.clone(),
        }));
    }

    if let Some(param) = function.parameters.iter().find(|param| {
        param.default.is_none() && !call.arguments.iter().any(|argument| argument.id == param.id)
    }) {
        return Err(Error::semantic(ErrorImpl::MissingArgument {
            callee: call.callee.clone(),
            parameter: param.id.clone(),
        }));
    }

    for argument in call.arguments.iter() {
        let received = type_check_expr(type_checker, &argument.value)?;

        if let Some(param) = function.parameter(&argument.id) {
            if received != param.ty {
                return Err(Error::semantic(ErrorImpl::ArgumentTypeMatchError {
                    argument: argument.id.clone(),
                    expected: param.ty.to_string(),
                    received: received.to_string(),
                }));
            }
        }
    }

    Ok((*function.return_type).clone())
}

/// All entries must share one type `T`; the literal is then `[T]`. An empty
/// literal is `[ANY]`. Entries are compared against the types seen so far and
/// the first one wins, so `[[], [1]]` is `[[ANY]]` but `[[1], []]` is `[[int]]`.
pub fn type_check_array(type_checker: &mut TypeChecker, array: &ArrayExpr) -> Result<TypeSpec, Error> {
    let mut distinct: Vec<TypeSpec> = Vec::new();

    for entry in array.entries.iter() {
        let ty = type_check_expr(type_checker, entry)?;
        if !distinct.contains(&ty) {
            distinct.push(ty);
        }
    }

    match distinct.as_slice() {
        [] => Ok(MK_PRIMITIVE!(ANY, 1)),
        [entry_type] => {
            let depth = entry_type.array_depth + 1;
            Ok(entry_type.clone().with_array_depth(depth))
        }
        [first, other, ..] => Err(Error::semantic(ErrorImpl::MixedArrayEntries {
            first: first.to_string(),
            other: other.to_string(),
        })),
    }
}

/// Closures reject repeated parameter names and check their defaults before
/// the body is entered. The result is the closure's function type.
pub fn type_check_closure(type_checker: &mut TypeChecker, closure: &ClosureExpr) -> Result<TypeSpec, Error> {
    for (index, param) in closure.parameters.iter().enumerate() {
        if closure.parameters[..index].iter().any(|earlier| earlier.id == param.id) {
            return Err(Error::semantic(ErrorImpl::DuplicateParameter {
                parameter: param.id.clone(),
            }));
        }

        if let Some(default) = &param.default {
            let received = type_check_expr(type_checker, default)?;
            if received != param.ty {
                return Err(type_mismatch(&param.ty, &received));
            }
        }
    }

    type_check_function_body(
        type_checker,
        &closure.parameters,
        &closure.return_type,
        &closure.body,
    )?;

    Ok(TypeSpec::function(
        closure.parameters.clone(),
        closure.return_type.clone(),
    ))
}

/// Verifies `body` inside a new function context and a scope holding the
/// parameters, then leaves both.
pub fn type_check_function_body(
    type_checker: &mut TypeChecker,
    parameters: &[Param],
    return_type: &TypeSpec,
    body: &[Stmt],
) -> Result<(), Error> {
    type_checker.functions.push_func(return_type.clone());
    type_checker.scopes.push_scope();

    for param in parameters.iter() {
        type_checker.scopes.add(&param.id, param.ty.clone())?;
    }

    for stmt in body.iter() {
        type_check_stmt(type_checker, stmt)?;
    }

    type_checker.scopes.pop_scope()?;
    type_checker.functions.pop_func();
    Ok(())
}

/// Verifies `body` in a fresh child scope.
pub fn type_check_block(type_checker: &mut TypeChecker, body: &[Stmt]) -> Result<(), Error> {
    type_checker.scopes.push_scope();

    for stmt in body.iter() {
        type_check_stmt(type_checker, stmt)?;
    }

    type_checker.scopes.pop_scope()
}

/// The function's name is bound in the enclosing scope only once its body has
/// been verified, so a function cannot refer to itself.
pub fn type_check_fn_decl(type_checker: &mut TypeChecker, fn_decl: &FnDeclStmt) -> Result<(), Error> {
    type_check_function_body(
        type_checker,
        &fn_decl.parameters,
        &fn_decl.return_type,
        &fn_decl.body,
    )?;

    type_checker.scopes.add(
        &fn_decl.identifier,
        TypeSpec::function(fn_decl.parameters.clone(), fn_decl.return_type.clone()),
    )
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Result<(), Error> {
    trace!("checking statement {:?}", ast);

    match ast {
        Stmt::If(if_stmt) => {
            type_check_condition(type_checker, &if_stmt.condition)?;
            type_check_block(type_checker, &if_stmt.then_body)?;

            if let Some(else_body) = &if_stmt.else_body {
                type_check_block(type_checker, else_body)?;
            }

            Ok(())
        }
        Stmt::While(while_stmt) => {
            type_check_condition(type_checker, &while_stmt.condition)?;
            type_check_block(type_checker, &while_stmt.body)
        }
        Stmt::Assign(assign) => {
            let expected = type_checker.scopes.get(&assign.identifier)?.clone();
            let received = type_check_expr(type_checker, &assign.value)?;

            if received != expected {
                return Err(type_mismatch(&expected, &received));
            }

            Ok(())
        }
        Stmt::Return(return_stmt) => {
            let expected = type_checker.functions.top()?.clone();
            let received = type_check_expr(type_checker, &return_stmt.value)?;

            if received != expected {
                return Err(type_mismatch(&expected, &received));
            }

            Ok(())
        }
        Stmt::VarDecl(var_decl) => {
            let received = type_check_expr(type_checker, &var_decl.assigned_value)?;

            if received != var_decl.explicit_type {
                return Err(type_mismatch(&var_decl.explicit_type, &received));
            }

            type_checker
                .scopes
                .add(&var_decl.identifier, var_decl.explicit_type.clone())
        }
        Stmt::FnDecl(fn_decl) => type_check_fn_decl(type_checker, fn_decl),
        Stmt::Call(call) => type_check_call(type_checker, call).map(|_| ()),
    }
}

/// Verifies a whole program against a fresh analysis context.
///
/// Stops at the first fault. On success the context is returned with only
/// the global scope left open.
pub fn type_check(ast: &Start) -> Result<TypeChecker, Error> {
    let mut type_checker = TypeChecker::new();

    for stmt in ast.iter() {
        type_check_stmt(&mut type_checker, stmt)?;
    }

    debug!("verified {} top-level statements", ast.body.len());
    Ok(type_checker)
}

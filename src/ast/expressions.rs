//! Expression nodes.
//!
//! The grammar's precedence levels are separate node types: a `Condition`
//! compares two `AddExpr`s, an `AddExpr` chains `Term`s and a `Term` chains
//! `Factor`s. Chains are right-nested, matching the recursive productions.

use super::{statements::Stmt, types::{Param, TypeSpec}};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Condition(Condition),
    Add(AddExpr),
    Array(ArrayExpr),
    Closure(ClosureExpr),
}

/// `left relop right`, optionally followed by `boolop` and another condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: AddExpr,
    pub relop: String,
    pub right: AddExpr,
    pub next: Option<(String, Box<Condition>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddExpr {
    pub term: Term,
    pub next: Option<(String, Box<AddExpr>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub factor: Factor,
    pub next: Option<(String, Box<Term>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Var(VarExpr),
    Call(CallExpr),
    Int(i64),
    Float(f64),
    Paren(Box<Expr>),
}

/// A variable read, with one entry per `[index]` applied.
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub id: String,
    pub indices: Vec<Expr>,
}

/// Keyword-argument call, usable both as a factor and as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Arg>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub id: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub entries: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosureExpr {
    pub parameters: Vec<Param>,
    pub return_type: TypeSpec,
    pub body: Vec<Stmt>,
}

impl AddExpr {
    pub fn single(term: Term) -> Self {
        AddExpr { term, next: None }
    }
}

impl Term {
    pub fn single(factor: Factor) -> Self {
        Term { factor, next: None }
    }
}

impl From<Factor> for Expr {
    fn from(factor: Factor) -> Self {
        Expr::Add(AddExpr::single(Term::single(factor)))
    }
}

use super::{
    expressions::{CallExpr, Condition, Expr},
    types::{Param, TypeSpec},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    If(IfStmt),
    While(WhileStmt),
    Assign(AssignStmt),
    Return(ReturnStmt),
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    Call(CallExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_body: Vec<Stmt>,
    pub else_body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Condition,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub identifier: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: TypeSpec,
    pub assigned_value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Param>,
    pub return_type: TypeSpec,
    pub body: Vec<Stmt>,
}

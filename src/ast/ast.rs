use std::fmt::Display;

use serde::Serialize;

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, Identifier, NumericLiteral, ObjectDecl, SpreadExpr,
        StringLiteral,
    },
    statements::{BlockStmt, EmptyStmt, ExpressionStmt, FunctionDecl, ReturnStmt, VariableStmt},
};

/// Node kinds
///
/// The closed set of node kinds a parse can produce, independent of how each
/// kind's payload is laid out.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum NodeType {
    Program,
    BlockStatement,
    EmptyExpression,
    VariableStatement,
    ReturnStatement,
    ExpressionStatement,
    Identifier,
    NumericLiteral,
    StringLiteral,
    ObjectDeclaration,
    ObjectPropertyDeclaration,
    ObjectDestructuringPropertyDeclaration,
    ExpressionNode,
    UnaryExpressionNode,
    FunctionDeclarationNode,
    FunctionCallExpressionNode,
    VariableNode,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Root of every parse: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn node_type(&self) -> NodeType {
        NodeType::Program
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    Empty(EmptyStmt),
    Block(BlockStmt),
    Variable(VariableStmt),
    Return(ReturnStmt),
    Function(FunctionDecl),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn node_type(&self) -> NodeType {
        match self {
            Stmt::Empty(_) => NodeType::EmptyExpression,
            Stmt::Block(_) => NodeType::BlockStatement,
            Stmt::Variable(_) => NodeType::VariableStatement,
            Stmt::Return(_) => NodeType::ReturnStatement,
            Stmt::Function(_) => NodeType::FunctionDeclarationNode,
            Stmt::Expression(_) => NodeType::ExpressionStatement,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Empty(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Variable(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Function(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Identifier(Identifier),
    Number(NumericLiteral),
    String(StringLiteral),
    Object(ObjectDecl),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
    Spread(SpreadExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn node_type(&self) -> NodeType {
        match self {
            Expr::Identifier(_) => NodeType::Identifier,
            Expr::Number(_) => NodeType::NumericLiteral,
            Expr::String(_) => NodeType::StringLiteral,
            Expr::Object(_) => NodeType::ObjectDeclaration,
            Expr::Binary(_) | Expr::Assignment(_) => NodeType::ExpressionNode,
            Expr::Spread(_) => NodeType::UnaryExpressionNode,
            Expr::Call(_) => NodeType::FunctionCallExpressionNode,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Object(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Spread(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}

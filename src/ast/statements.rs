use serde::Serialize;

use crate::Span;

use super::{
    ast::{Expr, NodeType, Stmt},
    expressions::{Identifier, ObjectPattern},
};

/// `;` on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Let,
    Var,
    Const,
}

/// `let a = 1, b` - one statement, any number of declarators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableStmt {
    pub kind: DeclarationKind,
    pub declarations: Vec<VariableDeclarator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarator {
    pub name: Identifier,
    pub init: Option<Expr>,
    pub span: Span,
}

impl VariableDeclarator {
    pub fn node_type(&self) -> NodeType {
        NodeType::VariableNode
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// A declared parameter: a plain name or an object destructuring pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Param {
    Identifier(Identifier),
    Pattern(ObjectPattern),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

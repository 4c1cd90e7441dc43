use serde::Serialize;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, NodeType};

// LITERALS

/// Identifier
/// Represents a bare name in the AST: a variable, a function or a property key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Numeric Literal
/// Represents a decimal number literal in the AST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericLiteral {
    pub value: f64,
    pub span: Span,
}

/// String Literal
/// Represents a string literal in the AST, delimiters stripped and escapes decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents an additive operation (`a + b`, `a - b`) between two expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Assignment Expression
/// Represents a simple (`=`) or compound (`+=`, `-=`, ...) assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
    pub span: Span,
}

/// Spread Expression
/// Represents `...operand`, in call arguments, object literals or anywhere a primary
/// expression is allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// Represents a call of a named function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpr {
    pub callee: Identifier,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

// OBJECTS

/// Object Declaration
/// Represents an object literal. Properties keep their source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDecl {
    pub properties: Vec<ObjectProperty>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ObjectProperty {
    /// `key: value` (or `[key]: value`)
    KeyValue { key: Identifier, value: Expr, span: Span },
    /// `key`, shorthand for `key: key`
    Shorthand { key: Identifier, span: Span },
    /// `...init`
    Spread { init: Expr, span: Span },
}

impl ObjectProperty {
    pub fn node_type(&self) -> NodeType {
        NodeType::ObjectPropertyDeclaration
    }

    pub fn name(&self) -> Option<&Identifier> {
        match self {
            ObjectProperty::KeyValue { key, .. } | ObjectProperty::Shorthand { key, .. } => Some(key),
            ObjectProperty::Spread { .. } => None,
        }
    }

    pub fn init(&self) -> Option<&Expr> {
        match self {
            ObjectProperty::KeyValue { value, .. } => Some(value),
            ObjectProperty::Spread { init, .. } => Some(init),
            ObjectProperty::Shorthand { .. } => None,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            ObjectProperty::KeyValue { span, .. }
            | ObjectProperty::Shorthand { span, .. }
            | ObjectProperty::Spread { span, .. } => span,
        }
    }
}

/// Object Pattern
/// The destructuring form of an object declaration, only found in parameter lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectPattern {
    pub properties: Vec<DestructuringProperty>,
    pub span: Span,
}

impl ObjectPattern {
    pub fn node_type(&self) -> NodeType {
        NodeType::ObjectDeclaration
    }
}

/// `name` or `name: alias` inside an object pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestructuringProperty {
    pub name: Identifier,
    pub alias: Option<Identifier>,
    pub span: Span,
}

impl DestructuringProperty {
    pub fn node_type(&self) -> NodeType {
        NodeType::ObjectDestructuringPropertyDeclaration
    }

    /// The local name the property is bound to.
    pub fn binding(&self) -> &Identifier {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

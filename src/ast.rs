//! AST nodes for the subset of Flux the option formatter consumes.
//!
//! The shapes mirror the JSON AST produced by the Flux parser, so a
//! tree can be handed across that boundary with serde. The `type` tag
//! on [`Expression`] carries the Flux node name.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single `name = expression` binding destined for the option block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAssignment {
    pub id: Identifier,
    pub init: Expression,
}

/// A bare name, used both as an assignment target and as an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// One magnitude/unit pair of a duration literal, e.g. the `1h` in `1h30m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationValue {
    pub magnitude: i64,
    pub unit: String,
}

/// A key/value member of an object expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: Identifier,
    pub value: Expression,
}

/// The AST node for expressions.
///
/// Each node exclusively owns its children, so the tree is acyclic and
/// safe to traverse recursively. Not every variant is printable as
/// option-block text; see [`crate::format::format_expression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    DateTimeLiteral {
        value: DateTime<FixedOffset>,
    },
    BooleanLiteral {
        value: bool,
    },
    UnsignedIntegerLiteral {
        value: u64,
    },
    IntegerLiteral {
        value: i64,
    },
    StringLiteral {
        value: String,
    },
    DurationLiteral {
        values: Vec<DurationValue>,
    },
    FloatLiteral {
        value: f64,
    },
    RegexpLiteral {
        value: String,
    },
    Identifier {
        name: String,
    },
    UnaryExpression {
        operator: String,
        argument: Box<Expression>,
    },
    BinaryExpression {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    LogicalExpression {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    CallExpression {
        callee: Box<Expression>,
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    MemberExpression {
        object: Box<Expression>,
        property: Box<Expression>,
    },
    ArrayExpression {
        elements: Vec<Expression>,
    },
    ObjectExpression {
        properties: Vec<Property>,
    },
}

impl Expression {
    /// The Flux node name for this variant, as it appears in the JSON AST.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::DateTimeLiteral { .. } => "DateTimeLiteral",
            Expression::BooleanLiteral { .. } => "BooleanLiteral",
            Expression::UnsignedIntegerLiteral { .. } => "UnsignedIntegerLiteral",
            Expression::IntegerLiteral { .. } => "IntegerLiteral",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::DurationLiteral { .. } => "DurationLiteral",
            Expression::FloatLiteral { .. } => "FloatLiteral",
            Expression::RegexpLiteral { .. } => "RegexpLiteral",
            Expression::Identifier { .. } => "Identifier",
            Expression::UnaryExpression { .. } => "UnaryExpression",
            Expression::BinaryExpression { .. } => "BinaryExpression",
            Expression::LogicalExpression { .. } => "LogicalExpression",
            Expression::CallExpression { .. } => "CallExpression",
            Expression::MemberExpression { .. } => "MemberExpression",
            Expression::ArrayExpression { .. } => "ArrayExpression",
            Expression::ObjectExpression { .. } => "ObjectExpression",
        }
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn test_deserialize_assignment() {
        let assignment: VariableAssignment = serde_json::from_str(
            r#"{
                "id": {"name": "bucket"},
                "init": {"type": "StringLiteral", "value": "telegraf"}
            }"#,
        )
        .unwrap();
        expect![[r#"
            VariableAssignment {
                id: Identifier {
                    name: "bucket",
                },
                init: StringLiteral {
                    value: "telegraf",
                },
            }
        "#]]
        .assert_debug_eq(&assignment);
    }

    #[test]
    fn test_deserialize_call_without_arguments() {
        // The parser may omit the arguments list entirely.
        let expr: Expression = serde_json::from_str(
            r#"{"type": "CallExpression", "callee": {"type": "Identifier", "name": "now"}}"#,
        )
        .unwrap();
        assert_eq!(
            expr,
            Expression::CallExpression {
                callee: Box::new(Expression::Identifier {
                    name: "now".to_string()
                }),
                arguments: vec![],
            }
        );
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let err = serde_json::from_str::<Expression>(r#"{"type": "PipeExpression"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}

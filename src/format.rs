//! Renders variable assignments into a Flux `option` block.
//!
//! The produced text is prepended to a query before it is sent to the
//! engine, so the output must be byte-exact valid Flux. Printing is a
//! pure function of the input tree; identical input always yields
//! identical text, which downstream caches rely on.

use itertools::Itertools;
use thiserror::Error;

use crate::ast::{Expression, VariableAssignment};
use crate::Result;

/// Name of the option record holding the variable values. Queries
/// reference the values as `v.<name>`.
pub const OPTION_NAME: &str = "v";

/// Raised when the printer meets an expression kind outside the
/// printable set. There is no recovery; emitting partial text would
/// produce a syntactically broken query.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot format expression of kind {kind}")]
pub struct UnsupportedExpressionKind {
    pub kind: &'static str,
}

/// Renders the assignments as one `option <name> = { ... }` block,
/// one field per assignment, in input order.
///
/// An empty slice yields the empty string: no variables means no
/// option declaration at all.
pub fn format_option_block(name: &str, variables: &[VariableAssignment]) -> Result<String> {
    if variables.is_empty() {
        return Ok(String::new());
    }

    let lines = variables
        .iter()
        .map(|v| Ok(format!("{}: {}", v.id.name, format_expression(&v.init)?)))
        .collect::<Result<Vec<String>>>()?;

    Ok(format!(
        "option {} = {{\n  {}\n}}",
        name,
        lines.iter().join(",\n  ")
    ))
}

/// Recursively prints a single expression as Flux source text.
///
/// Two known gaps are preserved from the upstream behavior rather than
/// fixed here: string literals are emitted without escaping, and call
/// expressions drop their argument list (only a zero-argument call on
/// a bare identifier round-trips correctly).
pub fn format_expression(expr: &Expression) -> Result<String> {
    Ok(match expr {
        Expression::DateTimeLiteral { value } => value.to_rfc3339(),
        Expression::BooleanLiteral { value } => value.to_string(),
        Expression::UnsignedIntegerLiteral { value } => value.to_string(),
        Expression::IntegerLiteral { value } => value.to_string(),
        Expression::StringLiteral { value } => format!("\"{}\"", value),
        Expression::DurationLiteral { values } => values
            .iter()
            .map(|d| format!("{}{}", d.magnitude, d.unit))
            .collect(),
        Expression::FloatLiteral { value } => {
            let s = value.to_string();
            if s.contains('.') {
                s
            } else {
                // An integral float still needs a decimal point to
                // stay a float in Flux.
                format!("{:.1}", value)
            }
        }
        Expression::UnaryExpression { operator, argument } => {
            format!("{}{}", operator, format_expression(argument)?)
        }
        Expression::BinaryExpression {
            operator,
            left,
            right,
        } => format!(
            "{} {} {}",
            format_expression(left)?,
            operator,
            format_expression(right)?
        ),
        Expression::CallExpression { callee, .. } => format!("{}()", format_expression(callee)?),
        Expression::Identifier { name } => name.clone(),
        // Not representable as option-block text. Matched explicitly so
        // a new Expression variant is a compile error here, not a
        // runtime surprise.
        Expression::RegexpLiteral { .. }
        | Expression::LogicalExpression { .. }
        | Expression::MemberExpression { .. }
        | Expression::ArrayExpression { .. }
        | Expression::ObjectExpression { .. } => {
            return Err(UnsupportedExpressionKind { kind: expr.kind() }.into());
        }
    })
}

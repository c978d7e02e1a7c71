use crate::parse_tree::{NodeKind, ParseChild, ParseNode};

use super::errors::SqlGeneratorError;

/// Comparison operators recognized when unpicking chained comparisons.
/// Multi-character operators come first so stripping is deterministic.
const COMPARISON_OPERATORS: [&str; 6] = ["<=", ">=", "<>", "=", "<", ">"];

/// Translate one expression subtree into an SQL expression string.
///
/// The grammar already encodes operator precedence through nesting, so
/// most kinds are literal concatenation of token text and translated
/// subexpressions. The exceptions are boolean composition (SQL keywords
/// in upper case), chained comparisons (expanded to a conjunction) and
/// literals (double quotes become single quotes).
pub(crate) fn translate_expression(node: &ParseNode) -> Result<String, SqlGeneratorError> {
    let kind = match node.kind() {
        Some(kind) => kind,
        None => return Err(SqlGeneratorError::unsupported(node)),
    };
    match kind {
        NodeKind::Expression | NodeKind::NumberLiteral | NodeKind::Variable => {
            let inner = node
                .first_rule()
                .ok_or_else(|| SqlGeneratorError::unsupported(node))?;
            translate_expression(inner)
        }
        NodeKind::OrExpression => boolean_composition(node, "OR"),
        NodeKind::XorExpression => boolean_composition(node, "XOR"),
        NodeKind::AndExpression => boolean_composition(node, "AND"),
        NodeKind::NotExpression => boolean_composition(node, "NOT"),
        NodeKind::ComparisonExpression => comparison_chain(node),
        NodeKind::PartialComparisonExpression
        | NodeKind::AddOrSubtractExpression
        | NodeKind::MultiplyDivideModuloExpression
        | NodeKind::PowerOfExpression
        | NodeKind::UnaryAddOrSubtractExpression
        | NodeKind::PropertyOrLabelsExpression
        | NodeKind::PropertyLookup
        | NodeKind::SchemaName
        | NodeKind::PropertyKeyName
        | NodeKind::Atom
        | NodeKind::ParenthesizedExpression => concat_children(node),
        NodeKind::StringListNullOperatorExpression => {
            let mut parts = Vec::with_capacity(node.result.len());
            for child in &node.result {
                match child {
                    ParseChild::Terminal(token) => parts.push(token.text.clone()),
                    ParseChild::Rule { tree, .. } => parts.push(translate_expression(tree)?),
                }
            }
            Ok(parts.join(" "))
        }
        NodeKind::NullOperatorExpression
        | NodeKind::SymbolicName
        | NodeKind::IntegerLiteral
        | NodeKind::DoubleLiteral => Ok(node.raw_text().trim().to_string()),
        NodeKind::Literal => {
            let mut out = String::new();
            for child in &node.result {
                match child {
                    ParseChild::Terminal(token) => out.push_str(&token.text.replace('"', "'")),
                    ParseChild::Rule { tree, .. } => out.push_str(&translate_expression(tree)?),
                }
            }
            Ok(out)
        }
        NodeKind::FunctionInvocation => {
            let mut out = String::new();
            for child in &node.result {
                match child {
                    ParseChild::Terminal(token) => out.push_str(&token.text),
                    // The function name passes through as written.
                    ParseChild::Rule { token, tree }
                        if tree.kind() == Some(NodeKind::FunctionName) =>
                    {
                        out.push_str(&token.text)
                    }
                    ParseChild::Rule { tree, .. } => out.push_str(&translate_expression(tree)?),
                }
            }
            Ok(out)
        }
        _ => Err(SqlGeneratorError::unsupported(node)),
    }
}

fn concat_children(node: &ParseNode) -> Result<String, SqlGeneratorError> {
    let mut out = String::new();
    for child in &node.result {
        match child {
            ParseChild::Terminal(token) => out.push_str(&token.text),
            ParseChild::Rule { tree, .. } => out.push_str(&translate_expression(tree)?),
        }
    }
    Ok(out)
}

/// Join the translated sub-expressions with an SQL keyword; a single
/// operand passes through without redundant parentheses.
fn boolean_composition(node: &ParseNode, keyword: &str) -> Result<String, SqlGeneratorError> {
    let mut parts = Vec::new();
    for tree in node.rules() {
        parts.push(translate_expression(tree)?);
    }
    if parts.len() == 1 {
        return Ok(parts.remove(0));
    }
    Ok(parts.join(&format!(" {keyword} ")))
}

/// Expand `a < b < c` into `a < b AND b < c`.
///
/// Each operand past the first is a partial comparison carrying its own
/// operator token, so adjacent operands pair up; stripping the operators
/// from the pair's first member recovers its bare expression.
fn comparison_chain(node: &ParseNode) -> Result<String, SqlGeneratorError> {
    let mut operands = Vec::new();
    for tree in node.rules() {
        operands.push(translate_expression(tree)?);
    }
    if operands.is_empty() {
        return Err(SqlGeneratorError::unsupported(node));
    }
    if operands.len() <= 2 {
        return Ok(operands.join(" "));
    }
    let mut predicates = Vec::with_capacity(operands.len() - 1);
    for pair in operands.windows(2) {
        let mut lhs = pair[0].clone();
        for operator in COMPARISON_OPERATORS {
            lhs = lhs.replace(operator, "");
        }
        predicates.push(format!("{} {}", lhs.trim(), pair[1].trim()));
    }
    Ok(predicates.join(" AND "))
}

use thiserror::Error;

use crate::graph_catalog::GraphCatalogError;
use crate::parse_tree::ParseNode;

/// Everything that can abort a translation. Failures are fail-fast: no
/// partial SQL is ever returned, and translating the same query against
/// the same metadata reproduces the same error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SqlGeneratorError {
    #[error("the query did not parse: {}", .0.join("; "))]
    Parse(Vec<String>),
    #[error("queries that use '{0}' are not supported")]
    UnsupportedConstruct(String),
    #[error("pattern nodes need an explicit type label (the label names the backing table)")]
    MissingNodeLabel,
    #[error("only one MATCH clause per query is supported")]
    MultipleMatchClauses,
    #[error("OPTIONAL MATCH is not supported")]
    OptionalMatchUnsupported,
    #[error("updating clauses are not supported (the graph is read-only)")]
    UpdatingClauseUnsupported,
    #[error("multi-part queries (WITH) are not supported")]
    MultiPartQueryUnsupported,
    #[error("directed relationships are not supported")]
    DirectedEdgeUnsupported,
    #[error("assigning a variable to a whole pattern is not supported")]
    VariablePatternAssignmentUnsupported,
    #[error("only one node label at a time is supported")]
    MultipleNodeLabels,
    #[error("only one relationship type at a time is supported")]
    MultipleRelationshipTypes,
    #[error(transparent)]
    Catalog(#[from] GraphCatalogError),
}

impl SqlGeneratorError {
    pub(crate) fn unsupported(node: &ParseNode) -> Self {
        SqlGeneratorError::UnsupportedConstruct(node.name.clone())
    }
}

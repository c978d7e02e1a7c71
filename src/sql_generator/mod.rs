//! Compilation of a parsed graph-pattern query into one SQL string.

mod alias;
mod context;
mod errors;
mod expression;
mod pattern;
mod query;

pub use errors::SqlGeneratorError;

use crate::graph_catalog::GraphMetadata;
use crate::parse_tree::ParseNode;

/// Compile one parse tree into a single SQL string against a metadata
/// snapshot.
///
/// Pure and synchronous: the same `(tree, metadata)` pair always produces
/// byte-identical SQL, and concurrent calls need no synchronization as
/// long as each takes its metadata snapshot before starting.
pub fn generate_sql(
    tree: &ParseNode,
    metadata: &GraphMetadata,
) -> Result<String, SqlGeneratorError> {
    query::QueryTranslator::new(metadata).translate(tree)
}

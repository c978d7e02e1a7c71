//! Gander - graph pattern queries over relational document collections
//!
//! This crate compiles a Cypher-like MATCH/RETURN query, delivered as a
//! generic parse tree by an external grammar, into a single SQL string:
//! - Parse-tree contract consumed from the external parser
//! - Join-path metadata describing how node tables connect
//! - SQL generation for patterns, filters and projections

pub mod graph_catalog;
pub mod parse_tree;
pub mod sql_generator;

pub use graph_catalog::{GraphCatalogError, GraphMetadata, JoinPath};
pub use parse_tree::{LeafToken, NodeKind, ParseChild, ParseNode, Span};
pub use sql_generator::{generate_sql, SqlGeneratorError};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::errors::GraphCatalogError;

/// How to join a "from" node table to a "to" node table through an edge
/// table: the edge table name and the four key columns of the two hops.
///
/// In the persisted metadata document a join path is the 5-element list
/// `[edge_table, from_key, edge_from_key, edge_to_key, to_key]`; serde
/// round-trips that shape. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct JoinPath {
    pub edge_table: String,
    pub from_key: String,
    pub edge_from_key: String,
    pub edge_to_key: String,
    pub to_key: String,
}

impl JoinPath {
    pub fn new(
        edge_table: impl Into<String>,
        from_key: impl Into<String>,
        edge_from_key: impl Into<String>,
        edge_to_key: impl Into<String>,
        to_key: impl Into<String>,
    ) -> Self {
        JoinPath {
            edge_table: edge_table.into(),
            from_key: from_key.into(),
            edge_from_key: edge_from_key.into(),
            edge_to_key: edge_to_key.into(),
            to_key: to_key.into(),
        }
    }
}

impl TryFrom<Vec<String>> for JoinPath {
    type Error = GraphCatalogError;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        match <[String; 5]>::try_from(fields) {
            Ok([edge_table, from_key, edge_from_key, edge_to_key, to_key]) => Ok(JoinPath {
                edge_table,
                from_key,
                edge_from_key,
                edge_to_key,
                to_key,
            }),
            Err(fields) => Err(GraphCatalogError::MalformedJoinPath(fields.len())),
        }
    }
}

impl From<JoinPath> for Vec<String> {
    fn from(path: JoinPath) -> Self {
        vec![
            path.edge_table,
            path.from_key,
            path.edge_from_key,
            path.edge_to_key,
            path.to_key,
        ]
    }
}

/// Registered join paths per ordered `(from_type, to_type)` pair.
///
/// Every pair maps to a non-empty list in registration order; the first
/// entry is the default used when a pattern leaves the relationship
/// unlabeled. A value of this type is the immutable snapshot one
/// translation call works against - replacing the metadata means swapping
/// in a whole new value, so an in-flight translation never observes a
/// partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphMetadata {
    paths: HashMap<String, HashMap<String, Vec<JoinPath>>>,
}

impl GraphMetadata {
    pub fn new() -> Self {
        GraphMetadata::default()
    }

    /// The stock catalog for the document collection layout: documents,
    /// term dictionary, entities and authors, joined through their
    /// occurrence tables.
    pub fn with_ir_defaults() -> Self {
        let mut metadata = GraphMetadata::new();
        metadata.register(
            "term_dict",
            "docs",
            JoinPath::new("term_doc", "term_id", "term_id", "doc_id", "doc_id"),
        );
        metadata.register(
            "docs",
            "term_dict",
            JoinPath::new("term_doc", "doc_id", "doc_id", "term_id", "term_id"),
        );
        metadata.register(
            "docs",
            "entities",
            JoinPath::new("entity_doc", "collection_id", "doc_id", "entity", "entity"),
        );
        metadata.register(
            "docs",
            "authors",
            JoinPath::new("doc_author", "collection_id", "doc", "author", "author"),
        );
        metadata.register(
            "entities",
            "docs",
            JoinPath::new("entity_doc", "entity", "entity", "doc_id", "collection_id"),
        );
        metadata.register(
            "authors",
            "docs",
            JoinPath::new("doc_author", "author", "author", "doc", "collection_id"),
        );
        metadata
    }

    /// Load the persisted metadata document: one JSON object keyed by
    /// source node type, mapping target node types to lists of 5-element
    /// join-path descriptors.
    pub fn from_json_str(document: &str) -> Result<Self, GraphCatalogError> {
        let metadata: GraphMetadata = serde_json::from_str(document)
            .map_err(|e| GraphCatalogError::MetadataParse(e.to_string()))?;
        metadata.validate()?;
        Ok(metadata)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GraphCatalogError> {
        let document = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GraphCatalogError::Io(e.to_string()))?;
        Self::from_json_str(&document)
    }

    pub fn to_json_string(&self) -> Result<String, GraphCatalogError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphCatalogError::MetadataParse(e.to_string()))
    }

    /// Append a join path for the pair, preserving registration order.
    pub fn register(
        &mut self,
        from_type: impl Into<String>,
        to_type: impl Into<String>,
        path: JoinPath,
    ) {
        self.paths
            .entry(from_type.into())
            .or_default()
            .entry(to_type.into())
            .or_default()
            .push(path);
    }

    /// Whether any join path is registered for the pair.
    pub fn has_relationship(&self, from_type: &str, to_type: &str) -> bool {
        self.lookup(from_type, to_type).is_some()
    }

    /// All join paths registered for the pair, in registration order.
    pub fn join_paths(
        &self,
        from_type: &str,
        to_type: &str,
    ) -> Result<&[JoinPath], GraphCatalogError> {
        self.lookup(from_type, to_type)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphCatalogError::NoKnownRelationship {
                from_type: from_type.to_string(),
                to_type: to_type.to_string(),
            })
    }

    /// The join path used when a pattern does not name one: the first
    /// registered. Further registered paths are ignored here.
    pub fn default_join_path(
        &self,
        from_type: &str,
        to_type: &str,
    ) -> Result<&JoinPath, GraphCatalogError> {
        let paths = self.join_paths(from_type, to_type)?;
        if paths.len() > 1 {
            log::debug!(
                "{} join paths registered between '{}' and '{}', using the first ({})",
                paths.len(),
                from_type,
                to_type,
                paths[0].edge_table
            );
        }
        Ok(&paths[0])
    }

    fn lookup(&self, from_type: &str, to_type: &str) -> Option<&Vec<JoinPath>> {
        self.paths.get(from_type).and_then(|t| t.get(to_type))
    }

    fn validate(&self) -> Result<(), GraphCatalogError> {
        for (from_type, targets) in &self.paths {
            for (to_type, paths) in targets {
                if paths.is_empty() {
                    return Err(GraphCatalogError::EmptyJoinPaths(
                        from_type.clone(),
                        to_type.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}

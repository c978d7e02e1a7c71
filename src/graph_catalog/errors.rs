use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphCatalogError {
    #[error("there are no join paths registered between node types '{from_type}' and '{to_type}'")]
    NoKnownRelationship { from_type: String, to_type: String },
    #[error("metadata document could not be parsed: {0}")]
    MetadataParse(String),
    #[error("a join path descriptor carries exactly 5 identifiers, got {0}")]
    MalformedJoinPath(usize),
    #[error("empty join path list registered between '{0}' and '{1}'")]
    EmptyJoinPaths(String, String),
    #[error("metadata document could not be read: {0}")]
    Io(String),
}

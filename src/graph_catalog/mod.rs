//! Join-path metadata: which edge tables connect which node tables.

mod errors;
mod metadata;

pub use errors::GraphCatalogError;
pub use metadata::{GraphMetadata, JoinPath};

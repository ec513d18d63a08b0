//! Error types for declsort-engine

/// Result type for declsort-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during scanning or reordering
///
/// These are caller bugs, not user-facing conditions: the declaration-tree
/// provider is responsible for handing each scan only nodes that belong to
/// the scanned scope. A violation of that contract fails the whole
/// invocation instead of producing a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("declaration '{name}' ({kind}) does not belong in {scope} scope of '{container}'")]
    ForeignNode {
        container: String,
        name: String,
        kind: &'static str,
        scope: &'static str,
    },
}

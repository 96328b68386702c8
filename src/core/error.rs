use thiserror::Error;

/// Failures that can occur while the sphere looks up its surroundings.
///
/// None of these are fatal: the caller logs them and waits for the next
/// resize or mount to try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("missing #{0} container")]
    ContainerMissing(String),
    #[error("dom error: {0}")]
    Dom(String),
}

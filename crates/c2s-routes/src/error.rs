use thiserror::Error;

/// Fatal errors in the flow document.
///
/// Non-traversable routes, including routes naming roads the network does
/// not have, are not errors; they are logged and skipped.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("flow entry {entry} has an empty route")]
    EmptyRoute { entry: usize },

    #[error("flow parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;

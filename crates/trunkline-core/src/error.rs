use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("malformed settings on application record {record}: {source}")]
    MalformedSettings {
        record: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown application type: {0}")]
    UnknownApplicationType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

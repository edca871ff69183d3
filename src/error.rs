use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("invalid value for {name}: {value}")]
    InvalidConfig { name: String, value: String },

    #[error("record {agency_id}/{year}/{month}: failed to decode metadata: {source}")]
    MetadataDecode {
        agency_id: String,
        year: i64,
        month: i64,
        source: serde_json::Error,
    },

    #[error("record {agency_id}/{year}/{month}: score update matched {count} rows, expected 1")]
    UnexpectedMatchCount {
        agency_id: String,
        year: i64,
        month: i64,
        count: u64,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;

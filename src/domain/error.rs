use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("authentication response did not contain an id token")]
    MissingIdToken,

    #[error("failed to serialize workflow configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("workflow submission failed: {0}")]
    Submission(String),

    #[error("workflow api rejected execution with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to process s3://{bucket}/{key}: {source}")]
    Object {
        bucket: String,
        key: String,
        source: Box<TriggerError>,
    },
}

impl TriggerError {
    /// Attaches the triggering object to an error raised while processing it.
    pub fn for_object(self, bucket: &str, key: &str) -> Self {
        TriggerError::Object {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source: Box::new(self),
        }
    }
}

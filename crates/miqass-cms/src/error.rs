use thiserror::Error;

/// Errors produced while talking to the content API.
///
/// These stay internal to the fetch path: public client operations collapse
/// them into [`crate::ContentResult::Failure`] after logging. Only client
/// construction surfaces a `CmsError` to callers.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be formed from the configured base.
    #[error("invalid content API URL '{url}': {reason}")]
    Url { url: String, reason: String },

    /// The content API answered with a non-success status.
    #[error("content API returned {status} for {op}")]
    Status {
        status: reqwest::StatusCode,
        op: &'static str,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

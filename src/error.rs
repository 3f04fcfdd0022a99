//! Error and result module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// User request or Xinge response JSON data was faulty.
    #[error("Error serializing to JSON: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The HTTP request could not be assembled, e.g. the endpoint is not a
    /// valid URI.
    #[error("Failed to construct HTTP request: {0}")]
    BuildRequestError(#[source] http::Error),

    /// A header value contained characters not allowed in HTTP headers.
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Invalid values set on the
    /// [Request](request/payload/struct.Request.html)
    #[error("Invalid options for push request: {0}")]
    InvalidOptions(String),

    /// A problem connecting to the Xinge servers.
    #[error("Error connecting to Xinge: {0}")]
    ConnectionError(#[from] hyper_util::client::legacy::Error),

    /// The response body could not be read.
    #[error("Error reading the response body: {0}")]
    ReadError(#[from] hyper::Error),

    /// Xinge couldn't respond in a timely manner.
    #[error("The request timed out after {0} s")]
    RequestTimeout(u64),

    /// Xinge replied with something that is not a push response. Contains
    /// the HTTP status code.
    #[error("Unexpected response from Xinge (status: {0})")]
    ResponseError(u16),
}


//! Error types for the NCAA football API client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building an endpoint or fetching
/// a feed.
///
/// No variant is retried or recovered internally; each one aborts the
/// operation that produced it and propagates to the caller unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint inputs could not be composed into a valid URL.
    #[error("Invalid endpoint URL {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP GET itself failed (DNS, connection, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200 OK.
    ///
    /// Carries the response body as diagnostic context; the provider
    /// reports quota and key problems in the body text.
    #[error("API returned HTTP {status} for {url}: {body}")]
    Api {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    /// Draining the response body failed mid-stream.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body is not the XML document we expected.
    #[error("Failed to parse XML response: {0}")]
    Xml(#[from] serde_xml_rs::Error),

    #[error("Invalid division: {value}")]
    InvalidDivision { value: String },

    #[error("Invalid schedule type: {value}")]
    InvalidScheduleType { value: String },
}

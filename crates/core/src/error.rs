//! Error types for slide rendering.
//!
//! Template functions themselves never fail; these errors only arise at the
//! dynamic boundary where a template is looked up by name and its params are
//! decoded from JSON.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while dispatching a slide by name.
#[derive(Error, Debug)]
pub enum Error {
    /// No template is registered under the given name.
    #[error("Unknown slide template: {0}")]
    UnknownTemplate(String),

    /// The params object could not be decoded into the template's params.
    #[error("Invalid params for {template}: {source}")]
    InvalidParams {
        template: String,
        #[source]
        source: serde_json::Error,
    },

    /// Params must be a JSON object (or null for all defaults).
    #[error("Params for {0} must be a JSON object")]
    NotAnObject(String),
}

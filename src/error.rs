use rmcp::ErrorData;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("dataset error: {0}")]
    Dataset(String),
}

impl Error {
    /// Stable machine-readable fault kind, sent as `data.kind` to MCP callers
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::NotFound(_) => "not_found",
            Error::Config(_) => "config",
            Error::Dataset(_) => "dataset",
        }
    }
}

impl From<Error> for ErrorData {
    fn from(error: Error) -> Self {
        let data = Some(json!({ "kind": error.kind() }));
        let message = error.to_string();

        match error {
            Error::InvalidInput(_) => ErrorData::invalid_params(message, data),
            Error::NotFound(_) => ErrorData::resource_not_found(message, data),
            Error::Config(_) | Error::Dataset(_) => ErrorData::internal_error(message, data),
        }
    }
}

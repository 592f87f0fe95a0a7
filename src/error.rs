/*!
Client errors.
*/
use thiserror::Error;

pub use crate::config::ConfigError;
pub use reqwest::Error as Http;
pub use serde_json::Error as Json;
pub use url::ParseError as Url;
pub use validator::ValidationErrors as Validation;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Http(#[from] Http),
    #[error("{0}")]
    Json(#[from] Json),
    #[error("{0}")]
    Url(#[from] Url),
    #[error("Url: Path segments is cannot-be-a-base")]
    CannotBeABase,
    /// The address API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("{0}")]
    Validation(#[from] Validation),
    #[error("invalid CPF: '{0}'")]
    InvalidCpf(String),
    #[error("invalid CEP: '{0}'")]
    InvalidCep(String),
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// HTTP status of an [`Error::Api`] response.
    pub fn status(&self) -> Option<u16> {
        match *self {
            Error::Api { status, .. } => Some(status),
            Error::Http(ref err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The API refused a record because its CPF is already registered. It
    /// answers 400 with a message naming the CPF.
    pub fn is_duplicate_cpf(&self) -> bool {
        match *self {
            Error::Api { status: 400, ref body } => body.to_uppercase().contains("CPF"),
            _ => false,
        }
    }
}

use crate::cpf::is_valid_cpf;
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

lazy_static! {
    /// Masked CPF, `DDD.DDD.DDD-DD`.
    pub(crate) static ref CPF_MASKED: Regex = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap();
    /// Masked CEP, `DDDDD-DDD`.
    pub(crate) static ref CEP_MASKED: Regex = Regex::new(r"^\d{5}-\d{3}$").unwrap();
}

pub(crate) const INVALID_CPF: &str = "invalid CPF";
pub(crate) const CEP_NOT_FOUND: &str = "CEP not found";
pub(crate) const CEP_LOOKUP_FAILED: &str = "CEP lookup failed";
pub(crate) const DUPLICATE_CPF: &str = "CPF already registered";

pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if is_valid_cpf(cpf) {
        Ok(())
    } else {
        let mut err = ValidationError::new("cpf");
        err.message = Some(Cow::Borrowed(INVALID_CPF));
        Err(err)
    }
}

/// Field name for a key reported by `validator`, which uses the serde names.
fn field_name(key: &'static str) -> &'static str {
    match key {
        "nome" => "name",
        "logradouro" => "street",
        "bairro" => "neighborhood",
        "cidade" => "city",
        "estado" => "state",
        other => other,
    }
}

/// First message per failing field, keyed by the Rust field name of
/// [`NewAddress`](crate::NewAddress).
///
/// Fields are reported in name order. Errors without a message fall back to
/// their code.
pub fn field_messages(errors: &ValidationErrors) -> Vec<(&'static str, String)> {
    let mut messages: Vec<_> = errors
        .errors()
        .iter()
        .filter_map(|(&field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field_name(field), message)
            }),
            _ => None,
        })
        .collect();
    messages.sort_by_key(|&(field, _)| field);
    messages
}

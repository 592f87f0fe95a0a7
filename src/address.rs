use crate::validation::{validate_cpf, CEP_MASKED, CPF_MASKED};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identifier assigned by the address API.
pub type AddressId = i64;

/// An address record as stored by the API.
///
/// The API speaks Portuguese field names; `cpf` and `cep` travel in their
/// masked display form.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct Address {
    pub id: AddressId,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    pub cep: String,
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(default, rename = "dataCriacao", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, rename = "dataAtualizacao", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Address {
    /// The editable part of this record.
    pub fn to_new(&self) -> NewAddress {
        NewAddress {
            name: self.name.clone(),
            cpf: self.cpf.clone(),
            cep: self.cep.clone(),
            street: self.street.clone(),
            neighborhood: self.neighborhood.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}

/// Payload for creating a record, and the validated content of the address form.
#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone, Eq, PartialEq)]
pub struct NewAddress {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(
        regex(path = "CPF_MASKED", message = "invalid CPF"),
        custom(function = "validate_cpf", message = "invalid CPF")
    )]
    pub cpf: String,
    #[validate(regex(path = "CEP_MASKED", message = "invalid CEP"))]
    pub cep: String,
    #[serde(rename = "logradouro")]
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[serde(rename = "bairro")]
    #[validate(length(min = 1, message = "neighborhood is required"))]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[serde(rename = "estado")]
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
}

impl NewAddress {
    /// Attach the record id, producing a full replacement for an update.
    pub fn with_id(self, id: AddressId) -> Address {
        Address {
            id,
            name: self.name,
            cpf: self.cpf,
            cep: self.cep,
            street: self.street,
            neighborhood: self.neighborhood,
            city: self.city,
            state: self.state,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Partial update. Only the fields that are set are sent.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct AddressPatch {
    pub id: AddressId,
    #[serde(default, rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(default, rename = "logradouro", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AddressPatch {
    pub fn new(id: AddressId) -> Self {
        AddressPatch {
            id,
            ..Default::default()
        }
    }
}

use crate::deserializers::lookup_flag;
use serde::{Deserialize, Serialize};

/// Address data for a CEP, as published by ViaCEP and relayed by the address API.
///
/// Unknown CEPs come back as `{"erro": true}` with every other field missing.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct CepInfo {
    #[serde(default)]
    /// Masked CEP, `DDDDD-DDD`.
    pub cep: String,
    #[serde(default)]
    /// Street name, empty for CEPs covering a whole town.
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    /// Neighborhood.
    pub bairro: String,
    #[serde(default)]
    /// City.
    pub localidade: String,
    #[serde(default)]
    /// Two-letter state code.
    pub uf: String,
    #[serde(default, deserialize_with = "lookup_flag")]
    pub erro: bool,
}

impl CepInfo {
    pub fn not_found(&self) -> bool {
        self.erro
    }
}

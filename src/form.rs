/*!
Address form state.

Holds what the user typed, masked as they type, and turns it into a validated
payload on submit. CEP autofill is driven from here: a complete CEP asks for a
lookup, anything else clears the fields a lookup would fill.
*/
use crate::{
    address::{Address, AddressId, NewAddress},
    cep::{format_cep, Cep},
    cep_info::CepInfo,
    client::Client,
    cpf::{self, format_cpf, is_valid_cpf},
    error::Error,
    mask,
    provider::Provider,
    validation::{CEP_LOOKUP_FAILED, CEP_NOT_FOUND, DUPLICATE_CPF, INVALID_CPF},
};
use log::{debug, warn};
use validator::Validate;

/// What the caller should do after a CEP edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CepAction {
    /// Eight digits are present; look them up and hand the result to
    /// [`AddressForm::apply_lookup`].
    Lookup(Cep),
    /// The CEP is incomplete. Street, neighborhood, city and state were cleared.
    Cleared,
}

/// Whether a submitted form creates a record or replaces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewAddress),
    Update(AddressId, NewAddress),
}

/// Outcome of the last lookup for the CEP in the form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum CepStatus {
    #[default]
    Unchecked,
    NotFound,
    LookupFailed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressForm {
    /// Record being edited, `None` for a new one.
    pub editing: Option<AddressId>,
    pub name: String,
    cpf: String,
    cep: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    cep_status: CepStatus,
    /// The API refused the CPF as already registered.
    cpf_taken: bool,
}

impl AddressForm {
    pub fn new() -> Self {
        Default::default()
    }

    /// Start editing `address`.
    pub fn edit(address: &Address) -> Self {
        AddressForm {
            editing: Some(address.id),
            name: address.name.clone(),
            cpf: format_cpf(&address.cpf),
            cep: format_cep(&address.cep),
            street: address.street.clone(),
            neighborhood: address.neighborhood.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            ..Default::default()
        }
    }

    /// Masked CPF as displayed.
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    /// Masked CEP as displayed.
    pub fn cep(&self) -> &str {
        &self.cep
    }

    /// Replace the CPF with the masked form of `raw`.
    pub fn set_cpf(&mut self, raw: &str) {
        self.cpf = format_cpf(raw);
        self.cpf_taken = false;
    }

    /// Error text for the CPF field.
    ///
    /// Checksum errors are reported only once all eleven digits are typed. A
    /// CPF the API refused as a duplicate stays flagged until it is edited.
    pub fn cpf_error(&self) -> Option<&'static str> {
        if mask::digits(&self.cpf).len() == cpf::LEN && !is_valid_cpf(&self.cpf) {
            Some(INVALID_CPF)
        } else if self.cpf_taken {
            Some(DUPLICATE_CPF)
        } else {
            None
        }
    }

    /// Error text for the CEP field, from the last lookup.
    pub fn cep_error(&self) -> Option<&'static str> {
        match self.cep_status {
            CepStatus::Unchecked => None,
            CepStatus::NotFound => Some(CEP_NOT_FOUND),
            CepStatus::LookupFailed => Some(CEP_LOOKUP_FAILED),
        }
    }

    /// Replace the CEP with the masked form of `raw`.
    pub fn set_cep(&mut self, raw: &str) -> CepAction {
        self.cep = format_cep(raw);
        self.cep_status = CepStatus::Unchecked;
        match self.cep.parse::<Cep>() {
            Ok(cep) => CepAction::Lookup(cep),
            Err(_) => {
                self.clear_location();
                CepAction::Cleared
            }
        }
    }

    fn holds(&self, cep: &Cep) -> bool {
        mask::digits(&self.cep) == cep.digits()
    }

    /// Fill street, neighborhood, city and state from the lookup of `cep`, or
    /// clear them when the CEP is unknown.
    ///
    /// Returns `false` and changes nothing when the form no longer holds `cep`.
    pub fn apply_lookup(&mut self, cep: &Cep, info: Option<&CepInfo>) -> bool {
        if !self.holds(cep) {
            debug!("discarding lookup for {}, form holds {:?}", cep, self.cep);
            return false;
        }
        match info {
            Some(info) => {
                self.street = info.logradouro.clone();
                self.neighborhood = info.bairro.clone();
                self.city = info.localidade.clone();
                self.state = info.uf.clone();
                self.cep_status = CepStatus::Unchecked;
            }
            None => {
                self.clear_location();
                self.cep_status = CepStatus::NotFound;
            }
        }
        true
    }

    /// Record that the lookup of `cep` could not be made. Like
    /// [`apply_lookup`](Self::apply_lookup), ignored when the form moved on.
    pub fn lookup_failed(&mut self, cep: &Cep) -> bool {
        if !self.holds(cep) {
            return false;
        }
        self.clear_location();
        self.cep_status = CepStatus::LookupFailed;
        true
    }

    /// [`set_cep`](Self::set_cep) followed by the lookup it asks for.
    pub async fn autofill<P: Provider>(&mut self, client: &Client<P>, raw: &str) -> CepAction {
        let action = self.set_cep(raw);
        if let CepAction::Lookup(ref cep) = action {
            match client.lookup_cep(cep).await {
                Ok(info) => {
                    self.apply_lookup(cep, info.as_ref());
                }
                Err(err) => {
                    warn!("CEP lookup for {} failed: {}", cep, err);
                    self.lookup_failed(cep);
                }
            }
        }
        action
    }

    fn clear_location(&mut self) {
        self.street.clear();
        self.neighborhood.clear();
        self.city.clear();
        self.state.clear();
    }

    /// Current content as a create payload, unvalidated.
    pub fn to_new_address(&self) -> NewAddress {
        NewAddress {
            name: self.name.trim().to_string(),
            cpf: self.cpf.clone(),
            cep: self.cep.clone(),
            street: self.street.trim().to_string(),
            neighborhood: self.neighborhood.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
        }
    }

    /// Validate and produce the request to send.
    pub fn submit(&self) -> Result<Submission, Error> {
        let address = self.to_new_address();
        address.validate()?;
        Ok(match self.editing {
            Some(id) => Submission::Update(id, address),
            None => Submission::Create(address),
        })
    }

    /// Validate, then create or update through `client`. The form is reset once
    /// the API accepts it. A duplicate CPF is also reported by
    /// [`cpf_error`](Self::cpf_error).
    pub async fn save<P: Provider>(&mut self, client: &Client<P>) -> Result<Address, Error> {
        let result = match self.submit()? {
            Submission::Create(address) => client.create(&address).await,
            Submission::Update(id, address) => client.update(id, &address).await,
        };
        match result {
            Ok(saved) => {
                self.reset();
                Ok(saved)
            }
            Err(err) => {
                self.cpf_taken = err.is_duplicate_cpf();
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = AddressForm::default();
    }
}

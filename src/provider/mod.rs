/*!
CEP lookup providers.
*/
use crate::{cep::Cep, error::Error};
use url::Url;

/// A service answering CEP lookups with a [`CepInfo`](crate::CepInfo) JSON document.
pub trait Provider {
    /// Where to `GET` the document for `cep`.
    fn lookup_uri(&self, cep: &Cep) -> Result<Url, Error>;
}

/// Append `segments` to the path of `base`.
///
/// A trailing empty segment yields a trailing slash.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::CannotBeABase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// The address API's own lookup route, `GET /api/cep/{cep}`.
///
/// The API relays the request to ViaCEP, so browsers and other clients only ever
/// talk to one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    pub api_url: Url,
}

impl Backend {
    pub fn new(api_url: Url) -> Self {
        Backend { api_url }
    }
}

impl Provider for Backend {
    fn lookup_uri(&self, cep: &Cep) -> Result<Url, Error> {
        endpoint(&self.api_url, &["api", "cep", cep.digits()])
    }
}

lazy_static! {
    static ref VIACEP_URI: Url = Url::parse("https://viacep.com.br/ws/").unwrap();
}

/// The public ViaCEP service, `GET https://viacep.com.br/ws/{cep}/json/`.
///
/// See [ViaCEP](https://viacep.com.br/).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViaCep {
    base: Url,
}

impl ViaCep {
    /// Point at another ViaCEP compatible host. `base` takes the place of
    /// `https://viacep.com.br/ws/`.
    pub fn with_base(base: Url) -> Self {
        ViaCep { base }
    }
}

impl Default for ViaCep {
    fn default() -> Self {
        ViaCep {
            base: VIACEP_URI.clone(),
        }
    }
}

impl Provider for ViaCep {
    fn lookup_uri(&self, cep: &Cep) -> Result<Url, Error> {
        endpoint(&self.base, &[cep.digits(), "json", ""])
    }
}

use crate::{
    address::{Address, AddressId, AddressPatch, NewAddress},
    cep::Cep,
    cep_info::CepInfo,
    config::Config,
    error::Error,
    provider::{endpoint, Backend, Provider},
};
use log::{debug, warn};
use reqwest::{header::ACCEPT, RequestBuilder, Response};
use url::Url;

/// Path of the address collection below the API root.
const ADDRESSES: [&str; 2] = ["api", "usuarios"];

/// Address API client.
///
/// `P` answers CEP lookups; [`Backend`] routes them through the same API.
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct Client<P = Backend> {
    /// CEP lookup provider.
    pub provider: P,

    /// Root of the address API.
    pub api_url: Url,

    pub http_client: reqwest::Client,
}

impl Client<Backend> {
    /// Client for `config`, looking CEPs up through the API itself.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::new(
            Backend::new(config.api_url.clone()),
            config.api_url.clone(),
            http_client,
        ))
    }
}

impl<P: Provider> Client<P> {
    /// Creates a client.
    ///
    /// # Examples
    ///
    /// ```
    /// use address_client::{provider::ViaCep, Client};
    /// use url::Url;
    ///
    /// let client = Client::new(
    ///     ViaCep::default(),
    ///     Url::parse("http://localhost:8080").unwrap(),
    ///     reqwest::Client::new(),
    /// );
    /// ```
    pub fn new(provider: P, api_url: Url, http_client: reqwest::Client) -> Self {
        Client {
            provider,
            api_url,
            http_client,
        }
    }

    /// `/api/usuarios`, or `/api/usuarios/{id}` when `id` is given.
    pub fn addresses_uri(&self, id: Option<AddressId>) -> Result<Url, Error> {
        match id {
            Some(id) => {
                let id = id.to_string();
                endpoint(&self.api_url, &[ADDRESSES[0], ADDRESSES[1], id.as_str()])
            }
            None => endpoint(&self.api_url, &ADDRESSES),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let resp = request
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let url = resp.url().clone();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!("could not read error body from {}: {}", url, err);
                String::new()
            }
        };
        warn!("{} answered {}: {}", url, status, body);
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// All records, as ordered by the API.
    pub async fn list(&self) -> Result<Vec<Address>, Error> {
        let url = self.addresses_uri(None)?;
        debug!("GET {}", url);
        let resp = self.send(self.http_client.get(url)).await?;
        resp.json().await.map_err(Error::from)
    }

    /// Create a record. The API rejects a CPF that is already registered.
    pub async fn create(&self, address: &NewAddress) -> Result<Address, Error> {
        let url = self.addresses_uri(None)?;
        debug!("POST {}", url);
        let resp = self.send(self.http_client.post(url).json(address)).await?;
        resp.json().await.map_err(Error::from)
    }

    /// Replace every editable field of record `id`.
    pub async fn update(&self, id: AddressId, address: &NewAddress) -> Result<Address, Error> {
        let url = self.addresses_uri(Some(id))?;
        debug!("PUT {}", url);
        let resp = self.send(self.http_client.put(url).json(address)).await?;
        resp.json().await.map_err(Error::from)
    }

    /// Send only the fields set in `patch`.
    ///
    /// The body of the answer is not interpreted.
    pub async fn patch(&self, patch: &AddressPatch) -> Result<(), Error> {
        let url = self.addresses_uri(Some(patch.id))?;
        debug!("PATCH {}", url);
        self.send(self.http_client.patch(url).json(patch)).await?;
        Ok(())
    }

    /// Delete record `id`. An unknown id fails with a 404 [`Error::Api`].
    pub async fn delete(&self, id: AddressId) -> Result<(), Error> {
        let url = self.addresses_uri(Some(id))?;
        debug!("DELETE {}", url);
        self.send(self.http_client.delete(url)).await?;
        Ok(())
    }

    /// Look `cep` up with the configured provider.
    ///
    /// `Ok(None)` when the provider does not know the CEP.
    pub async fn lookup_cep(&self, cep: &Cep) -> Result<Option<CepInfo>, Error> {
        let url = self.provider.lookup_uri(cep)?;
        debug!("GET {}", url);
        let resp = self.send(self.http_client.get(url)).await?;
        let info: CepInfo = resp.json().await?;
        if info.not_found() {
            debug!("CEP {} not found", cep);
            Ok(None)
        } else {
            Ok(Some(info))
        }
    }
}

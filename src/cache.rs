use crate::{
    address::{Address, AddressId, AddressPatch, NewAddress},
    client::Client,
    error::Error,
    provider::{Backend, Provider},
};
use log::trace;
use tokio::sync::RwLock;

/// [`Client`] with a cached copy of the address list.
///
/// The list is fetched on first use and kept until a mutation made through this
/// handle succeeds. Changes made by other clients are only seen after
/// [`invalidate`](Self::invalidate).
#[derive(Debug)]
pub struct AddressBook<P = Backend> {
    client: Client<P>,
    all: RwLock<Option<Vec<Address>>>,
}

impl<P: Provider> AddressBook<P> {
    pub fn new(client: Client<P>) -> Self {
        AddressBook {
            client,
            all: RwLock::new(None),
        }
    }

    pub fn client(&self) -> &Client<P> {
        &self.client
    }

    /// All records, from cache when possible.
    pub async fn list(&self) -> Result<Vec<Address>, Error> {
        if let Some(ref all) = *self.all.read().await {
            trace!("address list served from cache");
            return Ok(all.clone());
        }

        let mut all = self.all.write().await;
        if let Some(ref cached) = *all {
            return Ok(cached.clone());
        }
        let fresh = self.client.list().await?;
        *all = Some(fresh.clone());
        Ok(fresh)
    }

    /// Record `id` out of the cached list.
    pub async fn get(&self, id: AddressId) -> Result<Option<Address>, Error> {
        Ok(self.list().await?.into_iter().find(|a| a.id == id))
    }

    /// Records on 1-based page `n` of the cached list, with the page count.
    ///
    /// Page 0 reads as page 1; pages past the end are empty.
    pub async fn page(&self, n: usize, per_page: usize) -> Result<(Vec<Address>, usize), Error> {
        let all = self.list().await?;
        Ok(paginate(&all, n, per_page))
    }

    pub async fn create(&self, address: &NewAddress) -> Result<Address, Error> {
        let created = self.client.create(address).await?;
        self.invalidate().await;
        Ok(created)
    }

    pub async fn update(&self, id: AddressId, address: &NewAddress) -> Result<Address, Error> {
        let updated = self.client.update(id, address).await?;
        self.invalidate().await;
        Ok(updated)
    }

    pub async fn patch(&self, patch: &AddressPatch) -> Result<(), Error> {
        self.client.patch(patch).await?;
        self.invalidate().await;
        Ok(())
    }

    pub async fn delete(&self, id: AddressId) -> Result<(), Error> {
        self.client.delete(id).await?;
        self.invalidate().await;
        Ok(())
    }

    /// Drop the cached list; the next read refetches it.
    pub async fn invalidate(&self) {
        *self.all.write().await = None;
    }
}

fn paginate(all: &[Address], n: usize, per_page: usize) -> (Vec<Address>, usize) {
    if per_page == 0 {
        return (Vec::new(), 0);
    }
    let pages = (all.len() + per_page - 1) / per_page;
    let start = n.max(1).saturating_sub(1).saturating_mul(per_page);
    let records = all.iter().skip(start).take(per_page).cloned().collect();
    (records, pages)
}

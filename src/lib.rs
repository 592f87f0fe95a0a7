/*!
# Address records client with CPF validation and CEP autofill

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

Validates [CPF](https://en.wikipedia.org/wiki/CPF_number) numbers with the two-stage
modulo 11 checksum, and masks CPF (`DDD.DDD.DDD-DD`) and CEP (`DDDDD-DDD`) input as
it is typed. These are plain functions with no I/O:

```
use address_client::{format_cep, format_cpf, is_valid_cpf};

assert!(is_valid_cpf("529.982.247-25"));
assert!(!is_valid_cpf("111.111.111-11"));
assert_eq!("529.982.2", format_cpf("5299822"));
assert_eq!("01310-100", format_cep("01310100"));
```

Around them sits an async client for the address API (list, create, update, patch,
delete of address records), CEP lookups through the API or directly against
[ViaCEP](https://viacep.com.br/), a cached [`AddressBook`], and an [`AddressForm`]
that keeps the state of an address form between keystrokes.

Using [reqwest](https://crates.io/crates/reqwest) for the HTTP client and
[validator](https://crates.io/crates/validator) for form validation. Logging goes
through the [log](https://crates.io/crates/log) facade; install any logger to see
the requests.

## Usage

```rust,no_run
use address_client::{AddressForm, CepAction, Client, Config};

# async fn run() -> Result<(), address_client::error::Error> {
let client = Client::from_config(&Config::from_env()?)?;

let mut form = AddressForm::new();
form.name = "Maria Souza".into();
form.set_cpf("52998224725");
if let CepAction::Lookup(_) = form.autofill(&client, "01310100").await {
    println!("{}, {} - {}", form.street, form.city, form.state);
}
let saved = form.save(&client).await?;
println!("saved #{}", saved.id);

for address in client.list().await? {
    println!("{} {}", address.cpf, address.name);
}
# Ok(())
# }
```
*/
#[macro_use]
extern crate lazy_static;

mod address;
mod cache;
pub mod cep;
mod cep_info;
mod client;
mod config;
pub mod cpf;
mod deserializers;
pub mod error;
pub mod form;
mod mask;
pub mod provider;
pub mod validation;

pub use address::{Address, AddressId, AddressPatch, NewAddress};
pub use cache::AddressBook;
pub use cep::{format_cep, Cep};
pub use cep_info::CepInfo;
pub use client::Client;
pub use config::{Config, ConfigError};
pub use cpf::{format_cpf, is_valid_cpf, Cpf};
pub use error::Error;
pub use form::{AddressForm, CepAction, Submission};
pub use mask::digits;
pub use provider::Provider;

pub type BackendClient = Client<provider::Backend>;
pub type ViaCepClient = Client<provider::ViaCep>;

//! Address form driven against a mock API: CEP autofill, then save.

use address_client::{AddressForm, CepAction, Client, Config, Error};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::from_config(&Config::new(server.uri().parse().unwrap())).unwrap()
}

async fn mount_cep(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/cep/01310100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cep/00000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"erro": true})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cep/11111111"))
        .respond_with(ResponseTemplate::new(502))
        .mount(server)
        .await;
}

#[tokio::test]
async fn autofill_fills_and_clears() {
    let server = MockServer::start().await;
    mount_cep(&server).await;
    let client = client(&server);

    let mut form = AddressForm::new();
    assert_eq!(CepAction::Cleared, form.autofill(&client, "0131").await);
    assert_eq!("0131", form.cep());

    let action = form.autofill(&client, "01310100").await;
    assert!(matches!(action, CepAction::Lookup(_)));
    assert_eq!("01310-100", form.cep());
    assert_eq!("Avenida Paulista", form.street);
    assert_eq!("São Paulo", form.city);

    form.autofill(&client, "00000-000").await;
    assert_eq!("", form.street);
    assert_eq!("", form.city);
    assert_eq!(Some("CEP not found"), form.cep_error());

    form.autofill(&client, "01310100").await;
    assert_eq!("SP", form.state);
    assert_eq!(None, form.cep_error());

    form.autofill(&client, "11111111").await;
    assert_eq!("", form.state);
    assert_eq!(Some("CEP lookup failed"), form.cep_error());
}

#[tokio::test]
async fn save_creates_and_resets() {
    let server = MockServer::start().await;
    mount_cep(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/usuarios"))
        .and(body_json(json!({
            "nome": "Maria Souza",
            "cpf": "529.982.247-25",
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "cidade": "São Paulo",
            "estado": "SP"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "nome": "Maria Souza",
            "cpf": "529.982.247-25",
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "cidade": "São Paulo",
            "estado": "SP"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server);

    let mut form = AddressForm::new();
    form.name = "Maria Souza ".into();
    form.set_cpf("52998224725");
    form.autofill(&client, "01310100").await;

    let saved = form.save(&client).await.unwrap();
    assert_eq!(12, saved.id);
    assert_eq!(AddressForm::default(), form);
}

#[tokio::test]
async fn duplicate_cpf_flags_cpf_field() {
    let server = MockServer::start().await;
    mount_cep(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/usuarios"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Já existe um usuário com este CPF."))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server);

    let mut form = AddressForm::new();
    form.name = "Maria Souza".into();
    form.set_cpf("52998224725");
    form.autofill(&client, "01310100").await;

    let err = form.save(&client).await.unwrap_err();
    assert!(err.is_duplicate_cpf());
    assert_eq!(Some("CPF already registered"), form.cpf_error());
    assert_eq!("Maria Souza", form.name);
    assert_eq!("Avenida Paulista", form.street);

    form.set_cpf("11144477735");
    assert_eq!(None, form.cpf_error());
}

#[tokio::test]
async fn invalid_form_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client(&server);

    let mut form = AddressForm::new();
    form.name = "Maria Souza".into();
    form.set_cpf("52998224726");
    let err = form.save(&client).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!("529.982.247-26", form.cpf());
}

#[tokio::test]
async fn save_updates_edited_record() {
    let server = MockServer::start().await;
    let stored = json!({
        "id": 4,
        "nome": "João Pereira",
        "cpf": "111.444.777-35",
        "cep": "20040-020",
        "logradouro": "Rua da Assembleia",
        "bairro": "Centro",
        "cidade": "Rio de Janeiro",
        "estado": "RJ"
    });
    Mock::given(method("PUT"))
        .and(path("/api/usuarios/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server);

    let address = serde_json::from_value(stored).unwrap();
    let mut form = AddressForm::edit(&address);
    form.name = "João Pereira".into();
    let saved = form.save(&client).await.unwrap();
    assert_eq!(4, saved.id);
    assert_eq!(None, form.editing);
}

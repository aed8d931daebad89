//! Integration Tests - Client Operations over a Mocked Transport
//!
//! Drives every `MexcClient` operation through a mockall transport and
//! checks the request that would have hit the wire: URL, method, headers,
//! exact body bytes and signature.

use std::sync::{Arc, Mutex};

use mockall::mock;
use serde_json::{Value, json};

use mexc_futures_client::adapters::api::{MexcClient, MexcClientConfig, MexcSigner, sign_at};
use mexc_futures_client::domain::{ContractSizeLookup, FuturesOrder, OrderSide};
use mexc_futures_client::ports::clock::FixedClock;
use mexc_futures_client::ports::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

// ---- Mock Definitions ----

mock! {
    pub Transport {}

    #[async_trait::async_trait]
    impl HttpTransport for Transport {
        async fn execute(&self, request: HttpRequest) -> anyhow::Result<HttpResponse>;
    }
}

// ---- Fixtures ----

const KEY: &str = "WEB-test-key";
const TS_MS: i64 = 1_700_000_000_000;
const TS: &str = "1700000000000";

type Captured = Arc<Mutex<Vec<HttpRequest>>>;

fn sample_order() -> Value {
    json!({
        "symbol": "BTC_USDT",
        "side": 1,
        "openType": 1,
        "type": 1,
        "leverage": 10,
        "vol": 10,
        "price": 2.5,
    })
}

/// Transport that records every request and answers with `body`.
fn recording(times: usize, status: u16, body: &'static str) -> (MockTransport, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .times(times)
        .returning(move |request| {
            sink.lock().unwrap().push(request);
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            })
        });
    (transport, captured)
}

fn frozen_client(transport: MockTransport) -> MexcClient {
    MexcClient::new(Arc::new(transport), MexcClientConfig::default())
        .with_signer(MexcSigner::with_clock(Arc::new(FixedClock(TS_MS))))
}

fn single(captured: &Captured) -> HttpRequest {
    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].clone()
}

// ---- Signed POST operations ----

#[tokio::test]
async fn test_place_order_matches_reference_signature() {
    let (transport, captured) = recording(1, 200, r#"{"success":true,"code":0,"data":"739113577038255616"}"#);
    let client = frozen_client(transport);

    let response = client.place_order(KEY, &sample_order()).await.unwrap();
    assert_eq!(
        response,
        json!({"success": true, "code": 0, "data": "739113577038255616"})
    );

    let req = single(&captured);
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "https://futures.mexc.com/api/v1/private/order/create");
    assert_eq!(
        req.body.as_deref(),
        Some(r#"{"symbol":"BTC_USDT","side":1,"openType":1,"type":1,"leverage":10,"vol":10,"price":2.5}"#)
    );
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("x-mxc-nonce"), Some(TS));
    assert_eq!(req.header("x-mxc-sign"), Some("ee31e6dbffa85f29fc97a5700b6403d5"));
    assert_eq!(req.header("Authorization"), Some(KEY));
}

#[tokio::test]
async fn test_nonce_header_is_the_signed_timestamp() {
    let (transport, captured) = recording(1, 200, r#"{"success":true}"#);
    let client = MexcClient::new(Arc::new(transport), MexcClientConfig::default());

    client.place_order(KEY, &sample_order()).await.unwrap();

    let req = single(&captured);
    let nonce = req.header("x-mxc-nonce").unwrap();
    let body = req.body.as_deref().unwrap();
    let reference = sign_at(KEY, body, nonce);
    assert_eq!(req.header("x-mxc-sign"), Some(reference.signature.as_str()));
}

#[tokio::test]
async fn test_typed_order_is_sent_as_signed() {
    let (transport, captured) = recording(1, 200, r#"{"success":true}"#);
    let client = frozen_client(transport);
    let order = FuturesOrder::limit("BTC_USDT", OrderSide::OpenLong, 10.0, 2.5).with_leverage(10);

    client.place_order(KEY, &order).await.unwrap();

    let req = single(&captured);
    let body = req.body.as_deref().unwrap();
    assert_eq!(
        body,
        r#"{"symbol":"BTC_USDT","side":1,"openType":1,"type":1,"leverage":10,"vol":10.0,"price":2.5}"#
    );
    assert_eq!(
        req.header("x-mxc-sign"),
        Some(sign_at(KEY, body, TS).signature.as_str())
    );
}

#[tokio::test]
async fn test_cancel_order_signs_array_body() {
    let (transport, captured) = recording(1, 200, r#"{"success":true,"code":0,"data":[]}"#);
    let client = frozen_client(transport);

    client.cancel_order(KEY, &["123", "456"]).await.unwrap();

    let req = single(&captured);
    assert_eq!(req.url, "https://futures.mexc.com/api/v1/private/order/cancel");
    assert_eq!(req.body.as_deref(), Some(r#"["123","456"]"#));
    assert_eq!(req.header("x-mxc-sign"), Some("6baebf2755b91358d848032b9e3f1582"));
}

#[tokio::test]
async fn test_cancel_all_signs_empty_mapping() {
    let (transport, captured) = recording(1, 200, r#"{"success":true,"code":0}"#);
    let client = frozen_client(transport);

    client.cancel_all(KEY).await.unwrap();

    let req = single(&captured);
    assert_eq!(req.url, "https://futures.mexc.com/api/v1/private/order/cancel_all");
    assert_eq!(req.body.as_deref(), Some("{}"));
    assert_eq!(req.header("x-mxc-sign"), Some("176f3b457d26783421beb561ebfec726"));
}

#[tokio::test]
async fn test_close_all_positions_endpoint() {
    let (transport, captured) = recording(1, 200, r#"{"success":true,"code":0}"#);
    let client = frozen_client(transport);

    client.close_all_positions(KEY).await.unwrap();

    let req = single(&captured);
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "https://futures.mexc.com/api/v1/private/position/close_all");
    assert_eq!(req.body.as_deref(), Some("{}"));
    assert_eq!(req.header("x-mxc-nonce"), Some(TS));
}

#[tokio::test]
async fn test_edit_order_interpolates_order_type_into_path() {
    let (transport, captured) = recording(2, 200, r#"{"success":true}"#);
    let client = frozen_client(transport);
    let amendment = json!({ "orderId": "123", "price": 2.6, "vol": 5 });

    client.edit_order(KEY, &amendment, "plan_price").await.unwrap();
    client.edit_limit_order(KEY, &amendment).await.unwrap();

    let requests = captured.lock().unwrap();
    assert_eq!(
        requests[0].url,
        "https://futures.mexc.com/api/v1/private/order/change_plan_price"
    );
    assert_eq!(
        requests[1].url,
        "https://futures.mexc.com/api/v1/private/order/change_limit_order"
    );
    for req in requests.iter() {
        assert_eq!(req.body.as_deref(), Some(r#"{"orderId":"123","price":2.6,"vol":5}"#));
        assert_eq!(req.header("x-mxc-sign"), Some("cdf04c8181872789ea4d052ceeee67eb"));
    }
}

// ---- Read-only GET operations ----

const LISTING: &str = r#"{"success":true,"code":0,"data":[
    {"symbol":"BTC_USDT","contractSize":0.0001,"baseCoin":"BTC"},
    {"symbol":"ETH_USDT","contractSize":0.01,"baseCoin":"ETH"},
    {"symbol":"NEW_USDT","contractSize":null}
]}"#;

#[tokio::test]
async fn test_get_contract_size_outcomes() {
    let (transport, captured) = recording(3, 200, LISTING);
    let client = frozen_client(transport);

    assert_eq!(
        client.get_contract_size(KEY, "ETH_USDT").await.unwrap(),
        ContractSizeLookup::Found(0.01)
    );
    assert_eq!(
        client.get_contract_size(KEY, "NEW_USDT").await.unwrap(),
        ContractSizeLookup::Unspecified
    );
    assert_eq!(
        client.get_contract_size(KEY, "DOGE_USDT").await.unwrap(),
        ContractSizeLookup::SymbolNotFound
    );

    let requests = captured.lock().unwrap();
    let req = &requests[0];
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, "https://futures.mexc.com/api/v1/contract/detail");
    assert_eq!(req.body, None);
    assert_eq!(req.header("Authorization"), Some(KEY));
    assert_eq!(req.header("x-mxc-sign"), None);
    assert_eq!(req.header("x-mxc-nonce"), None);
}

#[tokio::test]
async fn test_contract_details_are_typed() {
    let (transport, _captured) = recording(1, 200, LISTING);
    let client = frozen_client(transport);

    let details = client.get_contract_details(KEY).await.unwrap();
    assert_eq!(details.len(), 3);
    assert_eq!(details[0].symbol, "BTC_USDT");
    assert_eq!(details[0].base_coin.as_deref(), Some("BTC"));
    assert_eq!(details[2].contract_size, None);
}

#[tokio::test]
async fn test_contracts_for_notional() {
    let (transport, _captured) = recording(2, 200, LISTING);
    let client = frozen_client(transport);

    let contracts = client
        .contracts_for_notional(KEY, "BTC_USDT", 1000.0, 50000.0)
        .await
        .unwrap();
    assert_eq!(contracts, 200.0);

    let err = client
        .contracts_for_notional(KEY, "DOGE_USDT", 1000.0, 0.1)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("symbol not found"));
}

#[tokio::test]
async fn test_get_balance_is_verbatim() {
    let body = r#"{"success":true,"code":0,"data":[{"currency":"USDT","availableBalance":125.5,"equity":130.0}]}"#;
    let (transport, captured) = recording(2, 200, body);
    let client = frozen_client(transport);

    let assets = client.get_balance(KEY).await.unwrap();
    assert_eq!(assets, serde_json::from_str::<Value>(body).unwrap());
    assert_eq!(client.available_balance(KEY, "usdt").await.unwrap(), Some(125.5));

    let req = single_of(&captured, 0);
    assert_eq!(req.url, "https://futures.mexc.com/api/v1/private/account/assets");
    assert_eq!(req.method, HttpMethod::Get);
}

fn single_of(captured: &Captured, idx: usize) -> HttpRequest {
    captured.lock().unwrap()[idx].clone()
}

// ---- Failure pass-through ----

#[tokio::test]
async fn test_exchange_error_passes_through_unexamined() {
    let (transport, _captured) = recording(
        1,
        200,
        r#"{"success":false,"code":602,"message":"Signature verification failed!"}"#,
    );
    let client = frozen_client(transport);

    let response = client.place_order(KEY, &sample_order()).await.unwrap();
    assert_eq!(response["code"], 602);
}

#[tokio::test]
async fn test_non_success_status_still_decoded() {
    let (transport, _captured) = recording(1, 401, r#"{"success":false,"code":401}"#);
    let client = frozen_client(transport);

    let response = client.cancel_all(KEY).await.unwrap();
    assert_eq!(response["code"], 401);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (transport, _captured) = recording(1, 502, "<html>Bad Gateway</html>");
    let client = frozen_client(transport);

    let err = client.get_balance(KEY).await.unwrap_err();
    assert!(format!("{err:#}").contains("HTTP 502"));
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let mut transport = MockTransport::new();
    transport
        .expect_execute()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("connection refused")));
    let client = frozen_client(transport);

    let err = client.close_all_positions(KEY).await.unwrap_err();
    assert!(format!("{err:#}").contains("connection refused"));
}

// ---- Concurrency ----

#[tokio::test]
async fn test_shared_client_across_tasks() {
    let (transport, captured) = recording(4, 200, r#"{"success":true}"#);
    let client = Arc::new(frozen_client(transport));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                let order = json!({ "symbol": "BTC_USDT", "side": 1, "vol": i });
                client.place_order(KEY, &order).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // No idempotency: four calls, four requests.
    assert_eq!(captured.lock().unwrap().len(), 4);
}

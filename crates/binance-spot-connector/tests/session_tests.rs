/*
[INPUT]:  Mock server, signed session and credentials
[OUTPUT]: Test results for signing, pass-through and concurrent dispatch
[POS]:    Integration tests - session behaviour across endpoints
[UPDATE]: When signing or dispatch rules change
*/

mod common;

use binance_spot_connector::{
    API_KEY_HEADER, BinanceError, ClientConfig, Credentials, Params, SpotClient,
};
use common::{
    TEST_API_KEY, TEST_API_SECRET, ValidSignature, client_for, invoke, query_keys,
    setup_mock_server,
};
use futures_util::future::join_all;
use tokio_test::assert_ok;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_recv_window_above_limit_is_sent_unmodified() {
    init_tracing();
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/sapi/v1/sub-account/status"))
        .and(query_param("recvWindow", "90000"))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        client_for(&server)
            .sub_account_status(Params::new().with("recvWindow", 90_000))
            .await
    );

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(
        query_keys(&received[0]),
        vec!["recvWindow", "timestamp", "signature"]
    );
}

#[tokio::test]
async fn test_caller_timestamp_is_replaced() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/sapi/v1/sub-account/list"))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        client_for(&server)
            .get_sub_account_list(Params::new().with("timestamp", 1_i64))
            .await
    );

    let received = server.received_requests().await.expect("recording enabled");
    let timestamps: Vec<_> = received[0]
        .url
        .query_pairs()
        .filter(|(key, _)| key == "timestamp")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(timestamps.len(), 1);
    assert_ne!(timestamps[0], "1");
}

#[tokio::test]
async fn test_caller_signature_is_dropped() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/sapi/v1/sub-account/list"))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        client_for(&server)
            .get_sub_account_list(Params::new().with("signature", "deadbeef"))
            .await
    );

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(query_keys(&received[0]), vec!["timestamp", "signature"]);
    assert!(
        !received[0]
            .url
            .query()
            .unwrap_or_default()
            .contains("deadbeef")
    );
}

#[tokio::test]
async fn test_list_parameter_is_repeated() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/sapi/v1/sub-account/spotSummary"))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        client_for(&server)
            .get_sub_account_spot_summary(Params::new().with("email", vec!["a@b.com", "c@d.com"]))
            .await
    );

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(
        query_keys(&received[0]),
        vec!["email", "email", "timestamp", "signature"]
    );
}

#[tokio::test]
async fn test_concurrent_calls_are_signed_independently() {
    init_tracing();
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/sapi/v3/sub-account/assets"))
        .and(header(API_KEY_HEADER, TEST_API_KEY))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "balances": [] })))
        .expect(8)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let handles = (0..8).map(|i| {
        let client = client.clone();
        let email = format!("sub{i}@b.com");
        tokio::spawn(async move { client.get_sub_account_assets(&email, Params::new()).await })
    });

    for result in join_all(handles).await {
        let response = assert_ok!(result.expect("task panicked"));
        assert!(response["balances"].is_array());
    }

    let received = server.received_requests().await.expect("recording enabled");
    let mut emails: Vec<_> = received
        .iter()
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "email")
                .map(|(_, value)| value.into_owned())
        })
        .collect();
    emails.sort();
    emails.dedup();
    assert_eq!(emails.len(), 8);
}

#[tokio::test]
async fn test_concurrent_calls_on_shared_reference() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/sapi/v1/sub-account/transfer/subToMaster"))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "txnId": "1" })))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = join_all(
        (0..3).map(|_| invoke(&client, "sub_account_transfer_to_master", "", Params::new())),
    )
    .await;

    assert!(results.iter().all(|result| result.is_ok()));
}

#[tokio::test]
async fn test_wrong_secret_is_rejected_by_server() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(ValidSignature::new())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": -1022,
            "msg": "Signature for this request is not valid."
        })))
        .mount(&server)
        .await;

    let client = SpotClient::with_config(
        Credentials::new(TEST_API_KEY, "another-secret"),
        ClientConfig::default().with_base_url(server.uri()),
    )
    .expect("client init");

    let err = client
        .sub_account_margin_account_summary(Params::new())
        .await
        .expect_err("bad signature must be rejected");

    match err {
        BinanceError::Api { status, code, .. } => {
            assert_eq!(status, 401);
            assert_eq!(code, Some(-1022));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_credentials_debug_hides_secret() {
    let credentials = Credentials::new(TEST_API_KEY, TEST_API_SECRET);
    let client = SpotClient::new(credentials.clone()).expect("client init");

    let rendered = format!("{credentials:?} {client:?}");
    assert!(!rendered.contains(TEST_API_SECRET));
}

#[test]
fn test_client_config_from_json() {
    let config: ClientConfig = serde_json::from_str(
        r#"{ "base_url": "https://testnet.binance.vision", "timeout_ms": 5000 }"#,
    )
    .expect("config");

    assert_eq!(config.base_url, "https://testnet.binance.vision");
    assert_eq!(config.timeout, std::time::Duration::from_millis(5000));
    assert_eq!(config.connect_timeout, ClientConfig::default().connect_timeout);
}

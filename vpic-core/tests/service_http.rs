use std::time::Duration;

use vpic_core::{
    ModelsRequest, TransportError, Vehicle, VehicleType, VpicError, VpicService, until_cancelled,
};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read fixture {path}: {e}"))
}

fn service_for(server: &MockServer) -> VpicService {
    VpicService::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(2))
        .build()
        .expect("service")
}

async fn mount_json(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn decodes_cadillac_cts() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/decodevin/1G6AR5SX5F0123869",
        fixture("decodevin_1G6AR5SX5F0123869.json"),
    )
    .await;

    let vehicle = service_for(&server).decode_vin("1G6AR5SX5F0123869").await.expect("decode");

    assert_eq!(
        vehicle,
        Vehicle {
            vin: "1G6AR5SX5F0123869".into(),
            year: 2015,
            make: "CADILLAC".into(),
            model: "CTS".into(),
            trim: String::new(),
            doors: 4,
            body_class: VehicleType::Sedan,
        }
    );
}

#[tokio::test]
async fn decodes_subaru_outback_without_doors() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/decodevin/4S4BRBCC3E3215258",
        fixture("decodevin_4S4BRBCC3E3215258.json"),
    )
    .await;

    let vehicle = service_for(&server).decode_vin("4S4BRBCC3E3215258").await.expect("decode");

    assert_eq!(
        vehicle,
        Vehicle {
            vin: "4S4BRBCC3E3215258".into(),
            year: 2014,
            make: "SUBARU".into(),
            model: "Outback".into(),
            trim: "Premium + CWP".into(),
            doors: 0,
            body_class: VehicleType::Wagon,
        }
    );
}

#[tokio::test]
async fn api_error_code_is_invalid_vin() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/decodevin/5S4BRBCC3E3215258",
        fixture("decodevin_5S4BRBCC3E3215258.json"),
    )
    .await;

    let err = service_for(&server).decode_vin("5S4BRBCC3E3215258").await.unwrap_err();
    match err {
        VpicError::InvalidVin { code, text } => {
            assert_eq!(code, "6");
            assert!(text.unwrap_or_default().starts_with("Incomplete VIN"));
        }
        other => panic!("expected InvalidVin, got {other:?}"),
    }
}

#[tokio::test]
async fn sixteen_character_vin_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service_for(&server).decode_vin("4S4BRBCC3E321525").await.unwrap_err();
    assert!(matches!(err, VpicError::InvalidInput(_)));
}

#[tokio::test]
async fn lists_makes_in_api_order() {
    let server = MockServer::start().await;
    mount_json(&server, "/getallmakes", fixture("getallmakes.json")).await;

    let makes = service_for(&server).list_makes().await.expect("makes");
    assert_eq!(makes, vec!["ASTON MARTIN", "TESLA", "JAGUAR", "MASERATI"]);
}

#[tokio::test]
async fn lists_models_for_make_and_year() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/getmodelsformakeyear/make/honda/modelyear/2015",
        fixture("getmodelsformakeyear_honda_2015.json"),
    )
    .await;

    let models = service_for(&server)
        .list_models(&ModelsRequest::new("honda").with_year(2015))
        .await
        .expect("models");
    assert_eq!(models, vec!["Accord", "Civic", "Pilot"]);
}

#[tokio::test]
async fn lists_models_for_make_only_when_year_is_zero() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/getmodelsformake/honda",
        r#"{"Results":[{"Model_Name":"Fit"}]}"#.to_string(),
    )
    .await;

    let models =
        service_for(&server).list_models(&ModelsRequest::new("honda")).await.expect("models");
    assert_eq!(models, vec!["Fit"]);
}

#[tokio::test]
async fn empty_make_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service_for(&server).list_models(&ModelsRequest::default()).await.unwrap_err();
    assert!(matches!(err, VpicError::InvalidInput(_)));
}

#[tokio::test]
async fn server_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = service_for(&server).list_makes().await.unwrap_err();
    assert!(matches!(err, VpicError::Transport(TransportError::Status { status: 503, .. })));
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"Results\": ["))
        .mount(&server)
        .await;

    let err = service_for(&server).decode_vin("1G6AR5SX5F0123869").await.unwrap_err();
    assert!(matches!(err, VpicError::Transport(TransportError::Decode(_))));
}

#[tokio::test]
async fn cancellation_aborts_slow_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fixture("getallmakes.json"))
                .set_delay(Duration::from_secs(1)),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let res = until_cancelled(
        service.list_makes(),
        tokio::time::sleep(Duration::from_millis(50)),
    )
    .await;
    assert!(matches!(res, Err(VpicError::Cancelled)));
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let service = VpicService::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .expect("service");

    let err = service.list_makes().await.unwrap_err();
    assert!(matches!(err, VpicError::Transport(TransportError::Request(_))));
}

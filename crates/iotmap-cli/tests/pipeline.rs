//! End-to-end pipeline tests: search response in, HTML map file out.

use iotmap::{DeviceFilter, DeviceMap, IotmapClient, Marker, MarkerStyle, NO_VULNS_LABEL};
use iotmap_cli::cli::commands::map::fetch_or_empty;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWO_MATCH_BODY: &str = r#"{
    "matches": [
        {
            "ip_str": "1.2.3.4",
            "port": 23,
            "latitude": 37.4,
            "longitude": -122.1
        },
        {
            "ip_str": "5.6.7.8",
            "port": 23,
            "latitude": 40.7,
            "longitude": -74.0,
            "vulns": {"CVE-1234": {}}
        }
    ],
    "total": 2
}"#;

fn client_for(server: &MockServer) -> IotmapClient {
    IotmapClient::builder("test-key")
        .base_url(server.uri())
        .build()
}

fn render_to_file(map: &DeviceMap) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iot_device_map.html");
    map.save(&path).unwrap();
    std::fs::read_to_string(&path).unwrap()
}

#[tokio::test]
async fn two_matches_become_two_styled_markers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .and(query_param("query", "country:US port:23"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TWO_MATCH_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = DeviceFilter::new("US", "23").unwrap();
    let results = fetch_or_empty(&client, &filter).await;
    assert_eq!(results.matches.len(), 2);

    let mut map = DeviceMap::new();
    for m in &results.matches {
        if let Some(marker) = Marker::from_match(m) {
            map.add_marker(marker);
        }
    }

    let markers = map.markers();
    assert_eq!(markers.len(), 2);

    assert_eq!(markers[0].style, MarkerStyle::Neutral);
    assert!(markers[0].popup.contains("1.2.3.4"));
    assert!(markers[0].popup.contains(NO_VULNS_LABEL));

    assert_eq!(markers[1].style, MarkerStyle::Alert);
    assert!(markers[1].popup.contains("5.6.7.8"));
    assert!(markers[1].popup.contains("CVE-1234"));
    assert!(!markers[1].popup.contains(NO_VULNS_LABEL));

    let html = render_to_file(&map);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("\"lat\":").count(), 2);
    assert!(html.contains("CVE-1234"));
}

#[tokio::test]
async fn search_failure_still_produces_a_valid_empty_map() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"error": "upstream exploded"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = DeviceFilter::new("US", "23").unwrap();
    let results = fetch_or_empty(&client, &filter).await;
    assert!(results.is_empty());

    let map = DeviceMap::new();
    let html = render_to_file(&map);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("const devices = [];"));
}

#[tokio::test]
async fn match_without_coordinates_is_skipped_without_breaking_the_rest() {
    let server = MockServer::start().await;

    let body = r#"{
        "matches": [
            {"ip_str": "1.1.1.1", "port": 23, "latitude": 10.0},
            {"ip_str": "2.2.2.2", "port": 23, "latitude": 0.0, "longitude": 0.0},
            {"ip_str": "3.3.3.3", "port": 23, "latitude": -33.9, "longitude": 151.2}
        ],
        "total": 3
    }"#;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = DeviceFilter::new("AU", "23").unwrap();
    let results = fetch_or_empty(&client, &filter).await;

    let mut map = DeviceMap::new();
    for m in &results.matches {
        if let Some(marker) = Marker::from_match(m) {
            map.add_marker(marker);
        }
    }

    // The first match lacks a longitude; the zero-coordinate match is valid.
    let markers = map.markers();
    assert_eq!(markers.len(), 2);
    assert!(markers[0].popup.contains("2.2.2.2"));
    assert!(markers[1].popup.contains("3.3.3.3"));
}

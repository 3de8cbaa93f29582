//! End-to-end lookup tests against a mock geolocation server.
//!
//! These tests exercise the full per-entry pipeline — classification,
//! resolution, API request, field extraction, rendering — with DNS replaced
//! by a test double and the API replaced by a local `httptest` server. No
//! test touches the network.

use std::net::IpAddr;

use async_trait::async_trait;
use httptest::{matchers::*, responders::*, Expectation, Server};

use ipscout::{lookup_entry, render_record, LookupError, ResolveHost};

/// DNS double answering a single fixed host.
struct MockDns {
    host: &'static str,
    addr: &'static str,
}

#[async_trait]
impl ResolveHost for MockDns {
    async fn resolve_host(&self, host: &str) -> Result<IpAddr, LookupError> {
        if host == self.host {
            Ok(self.addr.parse().expect("mock address is valid"))
        } else {
            Err(LookupError::InvalidEntry {
                entry: host.to_string(),
            })
        }
    }
}

/// DNS double that must never be consulted.
struct NoDns;

#[async_trait]
impl ResolveHost for NoDns {
    async fn resolve_host(&self, host: &str) -> Result<IpAddr, LookupError> {
        panic!("DNS resolver should not be consulted for {host}");
    }
}

fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .user_agent("IP-scout")
        .build()
        .expect("Failed to create HTTP client")
}

fn geo_response(city: &str, country_code: &str) -> String {
    format!(
        "<xml><results><result>\
         <ip>8.8.8.8</ip>\
         <host>dns.google</host>\
         <isp>Google LLC</isp>\
         <city>{city}</city>\
         <countrycode>{country_code}</countrycode>\
         <countryname>United States</countryname>\
         <latitude>37.4056</latitude>\
         <longitude>-122.0775</longitude>\
         </result></results></xml>"
    )
}

#[tokio::test]
async fn test_ip_literal_end_to_end() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::query(url_decoded(contains(("query", "8.8.8.8")))),
        ])
        .respond_with(status_code(200).body(geo_response("Mountain View", "US"))),
    );

    let endpoint = server.url("/?query=").to_string();
    let record = lookup_entry("8.8.8.8", &test_client(), &NoDns, &endpoint)
        .await
        .unwrap();

    assert_eq!(record.city, "Mountain View");
    assert_eq!(record.country_code, "US");

    let rendered = render_record(&record);
    assert!(rendered.contains("City:Mountain View\n\n"));
    assert!(rendered.contains("Countrycode:US\n\n"));
}

#[tokio::test]
async fn test_hostname_resolves_then_queries() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::query(url_decoded(contains(("query", "93.184.216.34")))),
        ])
        .respond_with(status_code(200).body(geo_response("Norwell", "US"))),
    );

    let dns = MockDns {
        host: "example.com",
        addr: "93.184.216.34",
    };
    let endpoint = server.url("/?query=").to_string();
    let record = lookup_entry("example.com", &test_client(), &dns, &endpoint)
        .await
        .unwrap();

    assert_eq!(record.city, "Norwell");
}

#[tokio::test]
async fn test_url_entry_queries_for_host_ip() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::query(url_decoded(contains(("query", "8.8.8.8")))),
        ])
        .respond_with(status_code(200).body(geo_response("Mountain View", "US"))),
    );

    // URL with an address-literal host: resolved without DNS, port/path stripped
    let endpoint = server.url("/?query=").to_string();
    let record = lookup_entry("http://8.8.8.8/some/page", &test_client(), &NoDns, &endpoint)
        .await
        .unwrap();

    assert_eq!(record.host, "dns.google");
}

#[tokio::test]
async fn test_invalid_entry_makes_no_request() {
    // Server with no expectations: any request would fail the test on drop
    let server = Server::run();
    let endpoint = server.url("/?query=").to_string();

    let err = lookup_entry("::::", &test_client(), &NoDns, &endpoint)
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::InvalidEntry { .. }));
    assert_eq!(
        err.user_message(),
        "Invalid Entry! Please check your entry and try again."
    );
}

#[tokio::test]
async fn test_unresolvable_hostname_is_invalid_entry() {
    let server = Server::run();
    let endpoint = server.url("/?query=").to_string();

    let dns = MockDns {
        host: "example.com",
        addr: "93.184.216.34",
    };
    let err = lookup_entry("doesnotexist.invalid", &test_client(), &dns, &endpoint)
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::InvalidEntry { .. }));
}

#[tokio::test]
async fn test_unreachable_service_reports_unavailable() {
    // Port 1 is closed; the connection is refused immediately
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(200))
        .build()
        .expect("Failed to create HTTP client");

    let err = lookup_entry("8.8.8.8", &client, &NoDns, "http://127.0.0.1:1/?query=")
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::ServiceUnavailable { .. }));
    assert_eq!(
        err.user_message(),
        "http://geoiplookup.net is currently unavailable."
    );
}

#[tokio::test]
async fn test_incomplete_response_is_malformed() {
    let server = Server::run();
    let body = geo_response("Mountain View", "US").replace("<latitude>37.4056</latitude>", "");
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(body)),
    );

    let endpoint = server.url("/?query=").to_string();
    let err = lookup_entry("8.8.8.8", &test_client(), &NoDns, &endpoint)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LookupError::MalformedResponse { tag: "latitude" }
    ));
}

#[tokio::test]
async fn test_empty_query_performs_no_lookup() {
    // No expectations registered: any request would fail verification when
    // the server drops
    let server = Server::run();
    let config = ipscout::Config {
        query: Some("   ".to_string()),
        endpoint: server.url("/?query=").to_string(),
        ..Default::default()
    };

    ipscout::run(config).await.unwrap();
}

#[tokio::test]
async fn test_user_agent_header_is_sent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::headers(contains(("user-agent", "IP-scout"))),
        ])
        .respond_with(status_code(200).body(geo_response("Mountain View", "US"))),
    );

    let endpoint = server.url("/?query=").to_string();
    lookup_entry("8.8.8.8", &test_client(), &NoDns, &endpoint)
        .await
        .unwrap();
}

//! Integration test for the HTTP collaborator client.
//!
//! Requires a running diagnostic collaborator; set `MOTIO_DIAGNOSTIC_URL`
//! to its base URL.
//!
//! Run with: `cargo test -p motio-diagnosis --test http_client -- --ignored`

use std::time::Duration;

use motio_core::models::session::Session;
use motio_diagnosis::{DiagnosticProvider, HttpDiagnosticClient};

#[tokio::test]
#[ignore]
async fn http_round_trip_returns_a_ranked_differential() {
    let base_url =
        std::env::var("MOTIO_DIAGNOSTIC_URL").expect("MOTIO_DIAGNOSTIC_URL must be set");
    let client = HttpDiagnosticClient::new(&base_url, Duration::from_secs(30))
        .expect("client should build");

    let request = motio_diagnosis::request::build(&Session::new(), &[]);
    let result = client
        .differential(&request)
        .await
        .expect("collaborator call should succeed");

    assert!(
        !result.differential_diagnosis.is_empty(),
        "expected a non-empty ranking, got: {result:?}"
    );
    for entry in &result.differential_diagnosis {
        assert!(
            (0.0..=1.0).contains(&entry.confidence_score),
            "confidence out of range for {}: {}",
            entry.condition_id,
            entry.confidence_score
        );
    }
}

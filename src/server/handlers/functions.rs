//! Named CRL functions callable by configuration management hosts

use axum::Json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::pki::crl::{self, BundleInput};
use crate::server::errors::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MergeRequest {
    /// Positional arguments, each a bundle or a list of bundles
    #[serde(default)]
    pub bundles: Vec<BundleInput>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MergeResponse {
    pub bundle: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderRequest {
    pub certs_by_name: IndexMap<String, String>,
    pub crl_bundle: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    pub bundles_by_name: IndexMap<String, String>,
}

/// `merge_crl_bundles(bundle, ...)`
#[instrument(skip_all)]
pub async fn merge_crl_bundles(
    Json(request): Json<MergeRequest>,
) -> Result<Json<MergeResponse>, AppError> {
    debug!(arguments = request.bundles.len(), "Merging CRL bundles");

    let bundle =
        tokio::task::spawn_blocking(move || crl::merge_crl_bundles(&request.bundles)).await??;

    Ok(Json(MergeResponse { bundle }))
}

/// `ordered_crl_bundles(certs_by_name, crl_bundle)`
#[instrument(skip_all)]
pub async fn ordered_crl_bundles(
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    debug!(certificates = request.certs_by_name.len(), "Ordering CRL bundles");

    let bundles_by_name = tokio::task::spawn_blocking(move || {
        crl::order_crl_bundles(&request.certs_by_name, &request.crl_bundle)
    })
    .await??;

    Ok(Json(OrderResponse { bundles_by_name }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MAX_BODY_BYTES, ServerConfig};
    use crate::server::responses::ErrorBody;
    use axum::{
        Router,
        body::Body,
        http::{self, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("test_data/crl/{name}")).expect("Failed to read fixture")
    }

    fn app() -> Router {
        crate::server::router(&ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(http::Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_merge_endpoint() {
        let body = json!({
            "bundles": [
                fixture("crl_a_20230101.pem") + &fixture("crl_b_20230601.pem"),
                [fixture("crl_a_20230501.pem")],
            ]
        });

        let (status, body) = post_json("/functions/merge_crl_bundles", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: MergeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            response.bundle,
            fixture("crl_a_20230501.pem") + &fixture("crl_b_20230601.pem")
        );
    }

    #[tokio::test]
    async fn test_merge_endpoint_without_arguments() {
        let (status, body) = post_json("/functions/merge_crl_bundles", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        let response: MergeResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.bundle.is_empty());
    }

    #[tokio::test]
    async fn test_merge_endpoint_rejects_malformed_crl() {
        let body = json!({
            "bundles": ["-----BEGIN X509 CRL-----\nbm90IGEgY3Js\n-----END X509 CRL-----\n"]
        });

        let (status, body) = post_json("/functions/merge_crl_bundles", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "invalid_pem");
    }

    #[tokio::test]
    async fn test_ordered_endpoint_preserves_key_order() {
        let crl_bundle = fixture("crl_a_20230501.pem")
            + &fixture("crl_b_20230601.pem")
            + &fixture("crl_c_20230301.pem");
        let body = json!({
            "certs_by_name": {
                "zeta": fixture("cert_issued_by_b.pem"),
                "alpha": fixture("cert_issued_by_c.pem"),
            },
            "crl_bundle": crl_bundle,
        });

        let (status, body) = post_json("/functions/ordered_crl_bundles", body).await;

        assert_eq!(status, StatusCode::OK);
        let response: OrderResponse = serde_json::from_slice(&body).unwrap();
        let keys: Vec<&str> = response.bundles_by_name.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert!(response.bundles_by_name["zeta"].starts_with(&fixture("crl_b_20230601.pem")));
        assert!(response.bundles_by_name["alpha"].starts_with(&fixture("crl_c_20230301.pem")));
    }

    #[tokio::test]
    async fn test_ordered_endpoint_missing_crl() {
        let body = json!({
            "certs_by_name": { "web": fixture("cert_issued_by_b.pem") },
            "crl_bundle": fixture("crl_a_20230501.pem"),
        });

        let (status, body) = post_json("/functions/ordered_crl_bundles", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "missing_crl");
        assert!(error.message.contains("'web'"));
    }

    #[tokio::test]
    async fn test_ordered_endpoint_requires_bundle() {
        let body = json!({ "certs_by_name": {} });

        let (status, _) = post_json("/functions/ordered_crl_bundles", body).await;

        assert!(status.is_client_error());
    }
}

//! HTTP client for ip-api.com compatible providers.

use crate::types::{GeoLookup, GeoLookupError, GeoRecord};
use async_trait::async_trait;
use geotrace_config::GeoConfig;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

/// Client for the ip-api.com JSON endpoint.
///
/// Lookups are `GET {base_url}/{address}`. The provider signals bad input
/// with `"status": "fail"` in an otherwise 200 response.
pub struct IpApiClient {
    client: Client,
    base_url: String,
}

/// Wire format of an ip-api.com response.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    continent: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    timezone: Option<String>,
}

impl IpApiClient {
    /// Creates a client from provider configuration.
    pub fn new(config: &GeoConfig) -> Result<Self, GeoLookupError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GeoLookupError::Unavailable(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn resolve(&self, address: &str) -> Result<GeoRecord, GeoLookupError> {
        let url = format!("{}/{}", self.base_url, address);
        debug!("Resolving geolocation for {}", address);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Geolocation request failed for {}: {}", address, e);
            GeoLookupError::Unavailable(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if status.is_client_error() {
            return Err(GeoLookupError::ClientRejected {
                address: address.to_string(),
                message: format!("Provider returned {}", status),
            });
        }
        if !status.is_success() {
            return Err(GeoLookupError::Unavailable(format!(
                "Provider returned {}",
                status
            )));
        }

        let body: IpApiResponse = response.json().await.map_err(|e| {
            GeoLookupError::Unavailable(format!("Failed to parse response: {}", e))
        })?;

        if body.status != "success" {
            let message = body
                .message
                .unwrap_or_else(|| "lookup failed".to_string());
            warn!("Provider rejected address {}: {}", address, message);
            return Err(GeoLookupError::ClientRejected {
                address: address.to_string(),
                message,
            });
        }

        Ok(GeoRecord {
            city: body.city,
            country: body.country,
            continent: body.continent,
            latitude: body.lat,
            longitude: body.lon,
            timezone: body.timezone,
        })
    }
}

impl std::fmt::Debug for IpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> GeoConfig {
        GeoConfig {
            base_url,
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.2.3.4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "city": "Berlin",
                "country": "Germany",
                "continent": "Europe",
                "lat": 52.52,
                "lon": 13.405,
                "timezone": "Europe/Berlin"
            })))
            .mount(&server)
            .await;

        let client = IpApiClient::new(&test_config(server.uri())).unwrap();
        let record = client.resolve("1.2.3.4").await.unwrap();

        assert_eq!(record.city.as_deref(), Some("Berlin"));
        assert_eq!(record.country.as_deref(), Some("Germany"));
        assert_eq!(record.latitude, Some(52.52));
    }

    #[tokio::test]
    async fn test_resolve_fail_status_is_client_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/192.168.0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "fail",
                "message": "private range",
                "query": "192.168.0.1"
            })))
            .mount(&server)
            .await;

        let client = IpApiClient::new(&test_config(server.uri())).unwrap();
        let err = client.resolve("192.168.0.1").await.unwrap_err();

        match err {
            GeoLookupError::ClientRejected { address, message } => {
                assert_eq!(address, "192.168.0.1");
                assert_eq!(message, "private range");
            }
            other => panic!("expected ClientRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = IpApiClient::new(&test_config(server.uri())).unwrap();
        let err = client.resolve("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, GeoLookupError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_resolve_malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = IpApiClient::new(&test_config(server.uri())).unwrap();
        let err = client.resolve("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, GeoLookupError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_resolve_missing_optional_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "country": "Germany"
            })))
            .mount(&server)
            .await;

        let client = IpApiClient::new(&test_config(server.uri())).unwrap();
        let record = client.resolve("1.2.3.4").await.unwrap();

        assert!(record.city.is_none());
        assert_eq!(record.country.as_deref(), Some("Germany"));
        assert!(record.timezone.is_none());
    }
}

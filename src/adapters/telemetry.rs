use crate::domain::ports::TelemetryReporter;
use crate::utils::error::{ProfileError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const TEEM_ENDPOINT: &str = "https://product.apis.f5.com/ee/v1/telemetry";
pub const TEEM_API_KEY_ENV: &str = "TEEM_API_KEY";

/// Anonymous usage reporter. Keyed by a freshly generated asset id, gated by
/// a client-level opt-out and the TEEM_API_KEY environment variable; with no
/// key the report degrades to a no-op.
#[derive(Debug, Clone)]
pub struct TeemReporter {
    endpoint: String,
    api_key: Option<String>,
    asset_id: String,
    enabled: bool,
    client: Client,
}

impl TeemReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            endpoint: TEEM_ENDPOINT.to_string(),
            api_key: std::env::var(TEEM_API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            asset_id: Uuid::new_v4().to_string(),
            enabled,
            client: Client::new(),
        }
    }

    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: &str, api_key: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self.api_key = Some(api_key.to_string());
        self
    }
}

#[async_trait]
impl TelemetryReporter for TeemReporter {
    async fn report(&self, resource_kind: &str, version: &str) -> Result<()> {
        let Some(api_key) = self.api_key.as_ref().filter(|_| self.enabled) else {
            tracing::debug!("telemetry disabled, skipping report for {}", resource_kind);
            return Ok(());
        };

        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let body = serde_json::json!({
            "digitalAssetName": "bigip-http-profile",
            "digitalAssetVersion": version,
            "digitalAssetId": self.asset_id,
            "documentType": resource_kind,
            "documentVersion": "1",
            "epochTime": epoch,
            "telemetryRecords": [{ "provider_version": version }],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("F5-ApiKey", api_key)
            .header("F5-DigitalAssetId", &self.asset_id)
            .header("F5-TraceId", Uuid::new_v4().to_string())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProfileError::DeviceError {
                code: status.as_u16(),
                message: "telemetry endpoint rejected report".to_string(),
            });
        }
        Ok(())
    }
}

/// Reporter that records nothing. Default for tests and for opted-out runs.
#[derive(Debug, Clone, Default)]
pub struct NoopReporter;

#[async_trait]
impl TelemetryReporter for NoopReporter {
    async fn report(&self, _resource_kind: &str, _version: &str) -> Result<()> {
        Ok(())
    }
}

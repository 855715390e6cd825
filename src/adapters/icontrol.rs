use crate::domain::model::HttpProfile;
use crate::domain::ports::ProfileApi;
use crate::utils::error::{ProfileError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

const PROFILE_ENDPOINT: &str = "/mgmt/tm/ltm/profile/http";

/// iControl REST client scoped to the LTM HTTP profile collection.
///
/// Item paths encode the fully qualified name by folding slashes into tildes:
/// /Common/http-prof-1 becomes ~Common~http-prof-1.
#[derive(Debug, Clone)]
pub struct IControlClient {
    base_url: String,
    username: String,
    password: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct DeviceErrorBody {
    #[serde(default)]
    message: String,
}

impl IControlClient {
    pub fn new(base_url: &str, username: &str, password: &str, validate_certs: bool) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!validate_certs)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            client,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, PROFILE_ENDPOINT)
    }

    fn item_url(&self, name: &str) -> String {
        format!("{}{}/{}", self.base_url, PROFILE_ENDPOINT, encode_name(name))
    }

    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<DeviceErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown device error")
                .to_string(),
        };
        Err(ProfileError::DeviceError {
            code: status.as_u16(),
            message,
        })
    }
}

/// iControl addresses items by folded path: '/' in the object name maps to '~'.
pub fn encode_name(name: &str) -> String {
    name.replace('/', "~")
}

#[async_trait]
impl ProfileApi for IControlClient {
    async fn create(&self, profile: &HttpProfile) -> Result<()> {
        tracing::debug!("POST {} ({})", self.collection_url(), profile.name);
        let response = self
            .client
            .post(self.collection_url())
            .basic_auth(&self.username, Some(&self.password))
            .json(profile)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn fetch(&self, name: &str) -> Result<Option<HttpProfile>> {
        tracing::debug!("GET {}", self.item_url(name));
        let response = self
            .client
            .get(self.item_url(name))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.check(response).await?;
        let profile = response.json::<HttpProfile>().await?;
        Ok(Some(profile))
    }

    async fn modify(&self, name: &str, profile: &HttpProfile) -> Result<()> {
        tracing::debug!("PATCH {}", self.item_url(name));
        let response = self
            .client
            .patch(self.item_url(name))
            .basic_auth(&self.username, Some(&self.password))
            .json(profile)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        tracing::debug!("DELETE {}", self.item_url(name));
        let response = self
            .client
            .delete(self.item_url(name))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> IControlClient {
        IControlClient::new(&server.base_url(), "admin", "admin", true).unwrap()
    }

    #[test]
    fn test_encode_name() {
        assert_eq!(encode_name("/Common/http-prof-1"), "~Common~http-prof-1");
        assert_eq!(encode_name("/Common/folder/p1"), "~Common~folder~p1");
    }

    #[tokio::test]
    async fn test_fetch_returns_profile() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/mgmt/tm/ltm/profile/http/~Common~p1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "name": "/Common/p1",
                    "proxyType": "reverse",
                    "lwsWidth": 80
                }));
        });

        let profile = client_for(&server)
            .fetch("/Common/p1")
            .await
            .unwrap()
            .unwrap();

        api_mock.assert();
        assert_eq!(profile.name, "/Common/p1");
        assert_eq!(profile.proxy_type, "reverse");
        assert_eq!(profile.lws_width, 80);
        // Unmentioned fields deserialize to zero values.
        assert_eq!(profile.fallback_host, "");
        assert_eq!(profile.enforcement.max_header_count, 0);
    }

    #[tokio::test]
    async fn test_fetch_404_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/mgmt/tm/ltm/profile/http/~Common~gone");
            then.status(404)
                .json_body(serde_json::json!({"code": 404, "message": "not found"}));
        });

        let result = client_for(&server).fetch("/Common/gone").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_device_error_body_is_decoded() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/mgmt/tm/ltm/profile/http");
            then.status(400).json_body(serde_json::json!({
                "code": 400,
                "message": "01070734: invalid proxy type"
            }));
        });

        let err = client_for(&server)
            .create(&HttpProfile {
                name: "/Common/p1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        match err {
            ProfileError::DeviceError { code, message } => {
                assert_eq!(code, 400);
                assert!(message.contains("invalid proxy type"));
            }
            other => panic!("expected DeviceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_missing_surfaces_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE)
                .path("/mgmt/tm/ltm/profile/http/~Common~gone");
            then.status(404)
                .json_body(serde_json::json!({"code": 404, "message": "not found"}));
        });

        let err = client_for(&server).delete("/Common/gone").await.unwrap_err();
        assert!(matches!(err, ProfileError::DeviceError { code: 404, .. }));
    }
}

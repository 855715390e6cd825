use crate::domain::model::HttpProfile;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Device-side CRUD surface for HTTP profiles. Absence on fetch is `None`,
/// not an error; every other failure propagates unchanged.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn create(&self, profile: &HttpProfile) -> Result<()>;
    async fn fetch(&self, name: &str) -> Result<Option<HttpProfile>>;
    async fn modify(&self, name: &str, profile: &HttpProfile) -> Result<()>;
    async fn delete(&self, name: &str) -> Result<()>;
}

/// One-shot anonymous usage reporting. A failed report is logged by the
/// caller and never fails the lifecycle operation that triggered it.
#[async_trait]
pub trait TelemetryReporter: Send + Sync {
    async fn report(&self, resource_kind: &str, version: &str) -> Result<()>;
}

pub mod adapters;
pub mod config;
pub mod domain;
pub mod resource;
pub mod utils;

pub use adapters::icontrol::IControlClient;
pub use adapters::telemetry::{NoopReporter, TeemReporter};
pub use config::declaration::ProfileDeclaration;
pub use config::DeviceConfig;
pub use domain::model::{HttpProfile, HttpProfileConfig, ResourceState};
pub use resource::{HttpProfileResource, RESOURCE_KIND};
pub use utils::error::{ProfileError, Result};

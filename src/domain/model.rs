use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Wire representation of an LTM HTTP profile as the iControl REST API
/// exchanges it. Field names follow the device's camelCase convention.
/// Scalars the user never set are sent at their zero value; the device fills
/// in its own defaults and reports them back on fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpProfile {
    pub name: String,
    pub app_service: String,
    pub defaults_from: String,
    pub accept_xff: String,
    pub basic_auth_realm: String,
    pub description: String,
    pub encrypt_cookie_secret: String,
    pub encrypt_cookies: Vec<String>,
    pub fallback_host: String,
    pub fallback_status_codes: Vec<String>,
    pub header_erase: String,
    pub header_insert: String,
    pub insert_xforwarded_for: String,
    pub lws_separator: String,
    pub lws_width: i64,
    pub oneconnect_transformations: String,
    pub tm_partition: String,
    pub proxy_type: String,
    pub redirect_rewrite: String,
    pub request_chunking: String,
    pub response_chunking: String,
    pub response_headers_permitted: Vec<String>,
    pub server_agent_name: String,
    pub via_host_name: String,
    pub via_request: String,
    pub via_response: String,
    pub xff_alternative_names: Vec<String>,
    pub hsts: HstsSettings,
    pub enforcement: EnforcementSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HstsSettings {
    pub include_subdomains: String,
    pub maximum_age: i64,
    pub mode: String,
    pub preload: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnforcementSettings {
    pub known_methods: Vec<String>,
    pub max_header_count: i64,
    pub max_header_size: i64,
    pub unknown_method: String,
}

/// Declared configuration for one HTTP profile.
///
/// Optional scalars distinguish unset (`None`, server keeps or computes its
/// default) from explicitly empty (`Some("")`). Set-valued fields use
/// `BTreeSet` so ordering and duplicates never produce a spurious diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpProfileConfig {
    /// Fully qualified profile name, e.g. /Common/http-prof-1. Immutable:
    /// changing it means destroy-and-recreate, never an in-place update.
    pub name: String,
    pub proxy_type: Option<String>,
    pub defaults_from: Option<String>,
    pub app_service: Option<String>,
    pub basic_auth_realm: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub encrypt_cookies: BTreeSet<String>,
    pub encrypt_cookie_secret: Option<String>,
    pub fallback_host: Option<String>,
    #[serde(default)]
    pub fallback_status_codes: BTreeSet<String>,
    pub head_erase: Option<String>,
    pub head_insert: Option<String>,
    pub insert_xforwarded_for: Option<String>,
    pub lws_width: Option<i64>,
    pub lws_separator: Option<String>,
    pub accept_xff: Option<String>,
    pub oneconnect_transformations: Option<String>,
    pub tm_partition: Option<String>,
    pub redirect_rewrite: Option<String>,
    #[serde(default)]
    pub response_headers_permitted: BTreeSet<String>,
    pub request_chunking: Option<String>,
    pub response_chunking: Option<String>,
    pub server_agent_name: Option<String>,
    pub via_host_name: Option<String>,
    pub via_request: Option<String>,
    pub via_response: Option<String>,
    #[serde(default)]
    pub xff_alternative_names: BTreeSet<String>,
    pub http_strict_transport_security: Option<HstsConfig>,
    pub enforcement: Option<EnforcementConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HstsConfig {
    pub include_subdomains: Option<String>,
    pub maximum_age: Option<i64>,
    pub mode: Option<String>,
    pub preload: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnforcementConfig {
    #[serde(default)]
    pub known_methods: Vec<String>,
    pub max_header_count: Option<i64>,
    pub max_header_size: Option<i64>,
    pub unknown_method: Option<String>,
}

/// What the engine tracks between lifecycle calls: the resource identity and
/// the attribute view that Read refreshes from the device.
#[derive(Debug, Clone, Default)]
pub struct ResourceState {
    pub id: Option<String>,
    pub attrs: HttpProfileConfig,
}

impl ResourceState {
    pub fn new(attrs: HttpProfileConfig) -> Self {
        Self { id: None, attrs }
    }

    /// Entry point for `import`: identity only, attributes filled by Read.
    pub fn imported(name: &str) -> Self {
        Self {
            id: Some(name.to_string()),
            attrs: HttpProfileConfig::default(),
        }
    }
}

use crate::domain::model::{
    EnforcementConfig, EnforcementSettings, HstsConfig, HstsSettings, HttpProfile,
    HttpProfileConfig, ResourceState,
};
use crate::domain::ports::{ProfileApi, TelemetryReporter};
use crate::resource::schema;
use crate::utils::error::{ProfileError, Result};

pub const RESOURCE_KIND: &str = "bigip_ltm_profile_http";

/// Lifecycle adapter for one HTTP profile resource. Stateless between calls:
/// everything lives in the caller-owned `ResourceState` and on the device.
pub struct HttpProfileResource<A: ProfileApi, T: TelemetryReporter> {
    api: A,
    telemetry: T,
    version: String,
}

impl<A: ProfileApi, T: TelemetryReporter> HttpProfileResource<A, T> {
    pub fn new(api: A, telemetry: T) -> Self {
        Self {
            api,
            telemetry,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Creates the profile on the device from every configured field, records
    /// the name as the resource identity and refreshes state from the device.
    pub async fn create(&self, state: &mut ResourceState) -> Result<()> {
        schema::validate(&state.attrs)?;

        let name = state.attrs.name.clone();
        tracing::info!("Creating HTTP profile {}", name);

        let profile = build_profile(&name, &state.attrs);
        self.api.create(&profile).await?;
        state.id = Some(name);

        if let Err(e) = self.telemetry.report(RESOURCE_KIND, &self.version).await {
            tracing::warn!("Sending telemetry data failed: {}", e);
        }

        self.read(state).await
    }

    /// Refreshes state from the device. Absence is not an error: the identity
    /// is cleared so the caller knows the resource drifted to deleted.
    pub async fn read(&self, state: &mut ResourceState) -> Result<()> {
        let name = state.id.clone().ok_or(ProfileError::MissingIdentity)?;
        tracing::info!("Fetching HTTP profile {}", name);

        let Some(remote) = self.api.fetch(&name).await? else {
            tracing::warn!("HTTP profile {} not found, removing from state", name);
            state.id = None;
            return Ok(());
        };

        write_back(&name, &mut state.attrs, &remote);
        Ok(())
    }

    /// Pushes the full current configuration, keyed by the immutable
    /// identity. A renamed `name` in the attrs never reaches the payload.
    pub async fn update(&self, state: &mut ResourceState) -> Result<()> {
        let name = state.id.clone().ok_or(ProfileError::MissingIdentity)?;
        tracing::info!("Updating HTTP profile {}", name);

        let profile = build_profile(&name, &state.attrs);
        if let Err(e) = self.api.modify(&name, &profile).await {
            tracing::error!("Unable to modify HTTP profile {} ({})", name, e);
            return Err(e);
        }

        self.read(state).await
    }

    pub async fn delete(&self, state: &mut ResourceState) -> Result<()> {
        let name = state.id.clone().ok_or(ProfileError::MissingIdentity)?;
        tracing::info!("Deleting HTTP profile {}", name);

        if let Err(e) = self.api.delete(&name).await {
            tracing::error!("Unable to delete HTTP profile {} ({})", name, e);
            return Err(e);
        }
        state.id = None;
        Ok(())
    }

    /// Identity-only entry: seeds a fresh state and re-enters through Read.
    pub async fn import(&self, name: &str) -> Result<ResourceState> {
        let mut state = ResourceState::imported(name);
        self.read(&mut state).await?;
        Ok(state)
    }
}

/// Flattens the configuration record into the wire object. Shared by Create
/// and Update; `name` comes from the caller so Update can pin the identity.
fn build_profile(name: &str, attrs: &HttpProfileConfig) -> HttpProfile {
    let mut profile = HttpProfile {
        name: name.to_string(),
        ..Default::default()
    };

    profile.app_service = attrs.app_service.clone().unwrap_or_default();
    profile.defaults_from = attrs.defaults_from.clone().unwrap_or_default();
    profile.accept_xff = attrs.accept_xff.clone().unwrap_or_default();
    profile.basic_auth_realm = attrs.basic_auth_realm.clone().unwrap_or_default();
    profile.description = attrs.description.clone().unwrap_or_default();
    profile.encrypt_cookie_secret = attrs.encrypt_cookie_secret.clone().unwrap_or_default();
    profile.encrypt_cookies = attrs.encrypt_cookies.iter().cloned().collect();

    // An unset fallback host is pushed as an explicit empty string, so
    // removing the field from the declaration clears the value on the device
    // instead of leaving the previous host in place.
    profile.fallback_host = match attrs.fallback_host.as_ref() {
        Some(host) => host.clone(),
        None => String::new(),
    };

    profile.fallback_status_codes = attrs.fallback_status_codes.iter().cloned().collect();
    profile.header_erase = attrs.head_erase.clone().unwrap_or_default();
    profile.header_insert = attrs.head_insert.clone().unwrap_or_default();
    profile.insert_xforwarded_for = attrs.insert_xforwarded_for.clone().unwrap_or_default();
    profile.lws_separator = attrs.lws_separator.clone().unwrap_or_default();
    profile.lws_width = attrs.lws_width.unwrap_or_default();
    profile.oneconnect_transformations =
        attrs.oneconnect_transformations.clone().unwrap_or_default();
    profile.tm_partition = attrs.tm_partition.clone().unwrap_or_default();
    profile.proxy_type = attrs.proxy_type.clone().unwrap_or_default();
    profile.redirect_rewrite = attrs.redirect_rewrite.clone().unwrap_or_default();
    profile.request_chunking = attrs.request_chunking.clone().unwrap_or_default();
    profile.response_chunking = attrs.response_chunking.clone().unwrap_or_default();
    profile.response_headers_permitted =
        attrs.response_headers_permitted.iter().cloned().collect();
    profile.server_agent_name = attrs.server_agent_name.clone().unwrap_or_default();
    profile.via_host_name = attrs.via_host_name.clone().unwrap_or_default();
    profile.via_request = attrs.via_request.clone().unwrap_or_default();
    profile.via_response = attrs.via_response.clone().unwrap_or_default();
    profile.xff_alternative_names = attrs.xff_alternative_names.iter().cloned().collect();

    // Undeclared blocks still ship, at their zero value.
    if let Some(hsts) = attrs.http_strict_transport_security.as_ref() {
        profile.hsts = HstsSettings {
            include_subdomains: hsts.include_subdomains.clone().unwrap_or_default(),
            maximum_age: hsts.maximum_age.unwrap_or_default(),
            mode: hsts.mode.clone().unwrap_or_default(),
            preload: hsts.preload.clone().unwrap_or_default(),
        };
    }
    if let Some(enforcement) = attrs.enforcement.as_ref() {
        profile.enforcement = EnforcementSettings {
            known_methods: enforcement.known_methods.clone(),
            max_header_count: enforcement.max_header_count.unwrap_or_default(),
            max_header_size: enforcement.max_header_size.unwrap_or_default(),
            unknown_method: enforcement.unknown_method.clone().unwrap_or_default(),
        };
    }

    profile
}

/// Copies device attributes into the local view. Optional fields the user
/// never set stay untouched so server-computed values do not show up as
/// diffs; the identity, the two always-tracked header lists and the parent
/// profile refresh unconditionally. `app_service` and `lws_width` are never
/// refreshed here, only pushed on write.
fn write_back(name: &str, attrs: &mut HttpProfileConfig, remote: &HttpProfile) {
    attrs.name = name.to_string();
    attrs.defaults_from = Some(remote.defaults_from.clone());
    attrs.proxy_type = Some(remote.proxy_type.clone());

    if attrs.accept_xff.is_some() {
        attrs.accept_xff = Some(remote.accept_xff.clone());
    }
    if attrs.basic_auth_realm.is_some() {
        attrs.basic_auth_realm = Some(remote.basic_auth_realm.clone());
    }
    if attrs.description.is_some() {
        attrs.description = Some(remote.description.clone());
    }
    if attrs.encrypt_cookie_secret.is_some() {
        attrs.encrypt_cookie_secret = Some(remote.encrypt_cookie_secret.clone());
    }
    if !attrs.encrypt_cookies.is_empty() {
        attrs.encrypt_cookies = remote.encrypt_cookies.iter().cloned().collect();
    }
    if attrs.fallback_host.is_some() {
        attrs.fallback_host = Some(remote.fallback_host.clone());
    }
    if !attrs.fallback_status_codes.is_empty() {
        attrs.fallback_status_codes = remote.fallback_status_codes.iter().cloned().collect();
    }
    if attrs.head_erase.is_some() {
        attrs.head_erase = Some(remote.header_erase.clone());
    }
    if attrs.head_insert.is_some() {
        attrs.head_insert = Some(remote.header_insert.clone());
    }
    if attrs.insert_xforwarded_for.is_some() {
        attrs.insert_xforwarded_for = Some(remote.insert_xforwarded_for.clone());
    }
    if attrs.lws_separator.is_some() {
        attrs.lws_separator = Some(remote.lws_separator.clone());
    }
    if attrs.oneconnect_transformations.is_some() {
        attrs.oneconnect_transformations = Some(remote.oneconnect_transformations.clone());
    }
    if attrs.tm_partition.is_some() {
        attrs.tm_partition = Some(remote.tm_partition.clone());
    }
    if attrs.redirect_rewrite.is_some() {
        attrs.redirect_rewrite = Some(remote.redirect_rewrite.clone());
    }
    if attrs.request_chunking.is_some() {
        attrs.request_chunking = Some(remote.request_chunking.clone());
    }
    if attrs.response_chunking.is_some() {
        attrs.response_chunking = Some(remote.response_chunking.clone());
    }
    attrs.response_headers_permitted = remote.response_headers_permitted.iter().cloned().collect();

    if attrs.server_agent_name.is_some() {
        attrs.server_agent_name = Some(remote.server_agent_name.clone());
    }
    if attrs.via_host_name.is_some() {
        attrs.via_host_name = Some(remote.via_host_name.clone());
    }
    if attrs.via_request.is_some() {
        attrs.via_request = Some(remote.via_request.clone());
    }
    if attrs.via_response.is_some() {
        attrs.via_response = Some(remote.via_response.clone());
    }
    attrs.xff_alternative_names = remote.xff_alternative_names.iter().cloned().collect();

    // Blocks are only rebuilt when the declaration carried them; within
    // enforcement, known_methods is only refreshed when the user pinned a
    // method list of their own.
    if let Some(declared) = attrs.enforcement.as_ref() {
        let known_methods = if declared.known_methods.is_empty() {
            Vec::new()
        } else {
            remote.enforcement.known_methods.clone()
        };
        attrs.enforcement = Some(EnforcementConfig {
            known_methods,
            max_header_count: Some(remote.enforcement.max_header_count),
            max_header_size: Some(remote.enforcement.max_header_size),
            unknown_method: Some(remote.enforcement.unknown_method.clone()),
        });
    }

    if attrs.http_strict_transport_security.is_some() {
        attrs.http_strict_transport_security = Some(HstsConfig {
            include_subdomains: Some(remote.hsts.include_subdomains.clone()),
            maximum_age: Some(remote.hsts.maximum_age),
            mode: Some(remote.hsts.mode.clone()),
            preload: Some(remote.hsts.preload.clone()),
        });
    }
}

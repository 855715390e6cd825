use crate::domain::model::HttpProfileConfig;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{validate_f5_name, validate_f5_name_with_directory};

/// Value shape of one configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    /// Unordered collection of strings; order and duplicates never diff.
    StringSet,
    /// Ordered list of strings.
    StringList,
    /// Nested block with its own sub-fields, at most one instance.
    Block(&'static [FieldSpec]),
}

/// One entry of the declared schema. `computed` means the device fills the
/// value in when the user leaves it unset; `force_new` means a change
/// destroys and recreates the resource instead of updating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub force_new: bool,
    pub computed: bool,
    pub description: &'static str,
}

impl FieldSpec {
    const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            force_new: false,
            computed: true,
            description,
        }
    }
}

const HSTS_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(
        "include_subdomains",
        FieldKind::Str,
        "Specifies whether to include the includeSubdomains directive in the HSTS header.",
    ),
    FieldSpec::optional(
        "maximum_age",
        FieldKind::Int,
        "Specifies the maximum age to assume the connection should remain secure.",
    ),
    FieldSpec::optional(
        "mode",
        FieldKind::Str,
        "Specifies whether to include the HSTS response header.",
    ),
    FieldSpec::optional(
        "preload",
        FieldKind::Str,
        "Specifies whether to include the preload directive in the HSTS header.",
    ),
];

const ENFORCEMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(
        "known_methods",
        FieldKind::StringList,
        "Specifies which HTTP methods count as being known. Removing RFC-defined methods from this list will cause the HTTP filter to not recognize them.",
    ),
    FieldSpec::optional(
        "max_header_count",
        FieldKind::Int,
        "Specifies the maximum number of headers allowed in HTTP request/response.",
    ),
    FieldSpec::optional(
        "max_header_size",
        FieldKind::Int,
        "Specifies the maximum header size.",
    ),
    FieldSpec::optional(
        "unknown_method",
        FieldKind::Str,
        "Specifies whether to allow, reject or switch to pass-through mode when an unknown HTTP method is parsed.",
    ),
];

const SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        kind: FieldKind::Str,
        required: true,
        force_new: true,
        computed: false,
        description: "Name of the profile",
    },
    FieldSpec {
        name: "proxy_type",
        kind: FieldKind::Str,
        required: false,
        force_new: true,
        computed: true,
        description: "Specifies the proxy mode for this profile: reverse, explicit, or transparent. The default is Reverse.",
    },
    FieldSpec::optional(
        "defaults_from",
        FieldKind::Str,
        "Inherit defaults from parent profile",
    ),
    FieldSpec {
        name: "app_service",
        kind: FieldKind::Str,
        required: false,
        force_new: false,
        computed: false,
        description: "The application service to which the object belongs.",
    },
    FieldSpec::optional(
        "basic_auth_realm",
        FieldKind::Str,
        "Specifies a quoted string for the basic authentication realm. The system sends this string to a client whenever authorization fails. The default value is none",
    ),
    FieldSpec::optional("description", FieldKind::Str, "User defined description"),
    FieldSpec {
        name: "encrypt_cookies",
        kind: FieldKind::StringSet,
        required: false,
        force_new: false,
        computed: false,
        description: "Encrypts specified cookies that the BIG-IP system sends to a client system",
    },
    FieldSpec {
        name: "encrypt_cookie_secret",
        kind: FieldKind::Str,
        required: false,
        force_new: false,
        computed: false,
        description: "Specifies a passphrase for the cookie encryption. Note: Since it's a sensitive entity idempotency will fail for it in the update call.",
    },
    FieldSpec {
        name: "fallback_host",
        kind: FieldKind::Str,
        required: false,
        force_new: false,
        computed: false,
        description: "Specifies an HTTP fallback host. HTTP redirection allows you to redirect HTTP traffic to another protocol identifier, host name, port number, or URI path.",
    },
    FieldSpec {
        name: "fallback_status_codes",
        kind: FieldKind::StringSet,
        required: false,
        force_new: false,
        computed: false,
        description: "Specifies one or more three-digit status codes that can be returned by an HTTP server,that should trigger a redirection to the fallback host",
    },
    FieldSpec::optional(
        "head_erase",
        FieldKind::Str,
        "Specifies the header string that you want to erase from an HTTP request. Default is none",
    ),
    FieldSpec::optional(
        "head_insert",
        FieldKind::Str,
        "Specifies a quoted header string that you want to insert into an HTTP request. Default is none",
    ),
    FieldSpec::optional(
        "insert_xforwarded_for",
        FieldKind::Str,
        "Specifies, when enabled, that the system inserts an X-Forwarded-For header in an HTTP request with the client IP address, to use with connection pooling. The default is Disabled.",
    ),
    FieldSpec::optional(
        "lws_width",
        FieldKind::Int,
        "Specifies the maximum column width for any given line, when inserting an HTTP header in an HTTP request. The default is 80",
    ),
    FieldSpec::optional(
        "lws_separator",
        FieldKind::Str,
        "Specifies the linear white space (LWS) separator that the system inserts when a header exceeds the maximum width you specify in the LWS Maximum Columns setting.",
    ),
    FieldSpec::optional(
        "accept_xff",
        FieldKind::Str,
        "Enables or disables trusting the client IP address, and statistics from the client IP address, based on the request's XFF (X-forwarded-for) headers, if they exist.",
    ),
    FieldSpec::optional(
        "oneconnect_transformations",
        FieldKind::Str,
        "Enables the system to perform HTTP header transformations for the purpose of keeping server-side connections open. This feature requires configuration of a OneConnect profile.",
    ),
    FieldSpec {
        name: "tm_partition",
        kind: FieldKind::Str,
        required: false,
        force_new: false,
        computed: false,
        description: "Displays the administrative partition within which this profile resides.",
    },
    FieldSpec::optional(
        "redirect_rewrite",
        FieldKind::Str,
        "Specifies whether the system rewrites the URIs that are part of HTTP redirect (3XX) responses. The default is None",
    ),
    FieldSpec::optional(
        "response_headers_permitted",
        FieldKind::StringSet,
        "Specifies headers that the BIG-IP system allows in an HTTP response.If you are specifying more than one header, separate the headers with a blank space",
    ),
    FieldSpec::optional(
        "request_chunking",
        FieldKind::Str,
        "Specifies how the system handles HTTP content that is chunked by a client. The default is Preserve",
    ),
    FieldSpec::optional(
        "response_chunking",
        FieldKind::Str,
        "Specifies how the system handles HTTP content that is chunked by a server. The default is Selective",
    ),
    FieldSpec::optional(
        "server_agent_name",
        FieldKind::Str,
        "Specifies the value of the Server header in responses that the BIG-IP itself generates. The default is BigIP. If no string is specified, then no Server header will be added to such responses",
    ),
    FieldSpec::optional(
        "via_host_name",
        FieldKind::Str,
        "Specifies the hostname to include into Via header",
    ),
    FieldSpec::optional(
        "via_request",
        FieldKind::Str,
        "Specifies whether to append, remove, or preserve a Via header in an HTTP request",
    ),
    FieldSpec::optional(
        "via_response",
        FieldKind::Str,
        "Specifies whether to append, remove, or preserve a Via header in an HTTP request",
    ),
    FieldSpec::optional(
        "xff_alternative_names",
        FieldKind::StringSet,
        "Specifies alternative XFF headers instead of the default X-forwarded-for header",
    ),
    FieldSpec::optional(
        "http_strict_transport_security",
        FieldKind::Block(HSTS_FIELDS),
        "Specifies the HTTP Strict Transport Security settings for the profile.",
    ),
    FieldSpec::optional(
        "enforcement",
        FieldKind::Block(ENFORCEMENT_FIELDS),
        "Specifies protocol enforcement limits for the profile.",
    ),
];

/// The declared schema for the HTTP profile resource kind.
pub fn http_profile_schema() -> &'static [FieldSpec] {
    SCHEMA
}

/// Pre-flight validation mirroring the schema layer: required identity plus
/// the fully-qualified-name formats. Everything else is the device's call.
pub fn validate(config: &HttpProfileConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(ProfileError::MissingField {
            field: "name".to_string(),
        });
    }
    validate_f5_name_with_directory("name", &config.name)?;

    if let Some(parent) = config.defaults_from.as_deref() {
        if !parent.is_empty() {
            validate_f5_name("defaults_from", parent)?;
        }
    }
    Ok(())
}

use crate::utils::error::{ProfileError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Validates a fully qualified object name: /Partition/name, where the object
/// part may carry a colon-suffixed route domain (e.g. /Common/profile:4).
pub fn validate_f5_name(field_name: &str, name: &str) -> Result<()> {
    let re = Regex::new(r"^/[\w_\-.]+/[\w_\-.:]+$").unwrap();
    if re.is_match(name) {
        return Ok(());
    }
    Err(ProfileError::InvalidFieldValue {
        field: field_name.to_string(),
        value: name.to_string(),
        reason: "must match /Partition/Name and contain no spaces".to_string(),
    })
}

/// Same as validate_f5_name, but allows one folder level below the partition
/// (e.g. /Common/folder/profile).
pub fn validate_f5_name_with_directory(field_name: &str, name: &str) -> Result<()> {
    let re = Regex::new(r"^/[\w_\-.]+(/[\w_\-.]+)?/[\w_\-.:]+$").unwrap();
    if re.is_match(name) {
        return Ok(());
    }
    Err(ProfileError::InvalidFieldValue {
        field: field_name.to_string(),
        value: name.to_string(),
        reason: "must match /Partition[/Folder]/Name and contain no spaces".to_string(),
    })
}

pub fn validate_device_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ProfileError::InvalidFieldValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ProfileError::InvalidFieldValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ProfileError::InvalidFieldValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProfileError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

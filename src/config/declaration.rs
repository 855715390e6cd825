use crate::domain::model::HttpProfileConfig;
use crate::utils::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One declared profile, as users write it in a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDeclaration {
    pub profile: HttpProfileConfig,
}

impl ProfileDeclaration {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProfileError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        toml::from_str(&processed_content).map_err(|e| ProfileError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_config(self) -> HttpProfileConfig {
        self.profile
    }
}

/// Replaces ${VAR_NAME} references with environment values; unknown
/// variables are left as-is so the parse error names them.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

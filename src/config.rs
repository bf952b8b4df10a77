//! Application configuration loaded once from the environment.

use crate::errors::{AgentError, AgentResult};

/// Environment variable holding the display name of the application.
pub const APP_NAME_ENV: &str = "APP_NAME";

/// Environment variable holding the GitHub token used against the
/// GitHub Models inference endpoint.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

const DEFAULT_APP_NAME: &str = "deskagent";

/// Startup configuration for the demo binary.
///
/// Read once at startup; there is no other configuration surface
/// (no files, no CLI flags).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Display name printed at startup. Defaults to `"deskagent"`.
    pub app_name: String,
    /// Token used to authenticate against GitHub Models.
    pub github_token: String,
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::MissingConfiguration`] if `GITHUB_TOKEN` is not
    /// set and [`AgentError::InvalidConfiguration`] if it is set but empty.
    pub fn from_env() -> AgentResult<Self> {
        let app_name = std::env::var(APP_NAME_ENV)
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let github_token =
            std::env::var(GITHUB_TOKEN_ENV).map_err(|_| AgentError::MissingConfiguration {
                field: GITHUB_TOKEN_ENV.to_string(),
            })?;

        if github_token.is_empty() {
            return Err(AgentError::InvalidConfiguration {
                field: GITHUB_TOKEN_ENV.to_string(),
                reason: "token cannot be empty".to_string(),
            });
        }

        Ok(Self {
            app_name,
            github_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests mutate process-wide environment variables, so everything
    // touching APP_NAME/GITHUB_TOKEN runs in a single test.
    #[test]
    fn from_env_validates_presence() {
        let original_token = std::env::var(GITHUB_TOKEN_ENV).ok();
        let original_name = std::env::var(APP_NAME_ENV).ok();

        std::env::remove_var(GITHUB_TOKEN_ENV);
        std::env::remove_var(APP_NAME_ENV);
        let missing = AppConfig::from_env();
        assert!(matches!(
            missing,
            Err(AgentError::MissingConfiguration { .. })
        ));

        std::env::set_var(GITHUB_TOKEN_ENV, "");
        let empty = AppConfig::from_env();
        assert!(matches!(
            empty,
            Err(AgentError::InvalidConfiguration { .. })
        ));

        std::env::set_var(GITHUB_TOKEN_ENV, "ghp_test");
        let config = AppConfig::from_env().expect("config");
        assert_eq!(config.app_name, "deskagent");
        assert_eq!(config.github_token, "ghp_test");

        std::env::set_var(APP_NAME_ENV, "My Agent");
        let named = AppConfig::from_env().expect("config");
        assert_eq!(named.app_name, "My Agent");

        match original_token {
            Some(value) => std::env::set_var(GITHUB_TOKEN_ENV, value),
            None => std::env::remove_var(GITHUB_TOKEN_ENV),
        }
        match original_name {
            Some(value) => std::env::set_var(APP_NAME_ENV, value),
            None => std::env::remove_var(APP_NAME_ENV),
        }
    }
}

use crate::consts::cli_consts::DEFAULT_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the analytics API lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The backend running on this machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Picks the first configured source, in order of precedence:
    /// command-line flag, environment variable, config file.
    pub fn resolve(
        flag: Option<&str>,
        env_var: Option<&str>,
        configured: Option<&str>,
    ) -> Environment {
        [flag, env_var, configured]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: s.trim_end_matches('/').to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence_over_env_and_config() {
        let env = Environment::resolve(
            Some("https://flag.example"),
            Some("https://env.example"),
            Some("https://config.example"),
        );
        assert_eq!(env.api_url(), "https://flag.example");
    }

    #[test]
    fn blank_sources_are_skipped() {
        let env = Environment::resolve(Some("  "), None, Some("https://config.example/"));
        assert_eq!(
            env,
            Environment::Custom {
                api_url: "https://config.example".to_string()
            }
        );
    }

    #[test]
    fn falls_back_to_local_backend() {
        let env = Environment::resolve(None, None, None);
        assert_eq!(env, Environment::Local);
        assert_eq!(env.api_url(), "http://localhost:8000");
    }

    #[test]
    fn rejects_values_that_are_not_urls() {
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    }
}

use crate::consts::cli_consts::network::LOCAL_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Represents the sentiment services the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Service running on this machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid API URL: {0}. It should start with http:// or https://")]
pub struct InvalidApiUrl(pub String);

impl Environment {
    /// Returns the base URL of the sentiment service, without a trailing slash.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the environment from candidate URLs in priority order
    /// (e.g. CLI flag, environment variable, config file). The first
    /// candidate present decides; an invalid one is an error rather than
    /// silently falling through to a lower-priority source.
    pub fn resolve<'a>(
        candidates: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Result<Environment, InvalidApiUrl> {
        match candidates.into_iter().flatten().next() {
            Some(raw) => raw.parse(),
            None => Ok(Environment::default()),
        }
    }
}

impl FromStr for Environment {
    type Err = InvalidApiUrl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        let lower = trimmed.to_lowercase();
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
        if !has_host {
            return Err(InvalidApiUrl(s.to_string()));
        }
        if trimmed.trim_end_matches('/') == LOCAL_API_URL {
            return Ok(Environment::Local);
        }
        Ok(Environment::Custom {
            api_url: trimmed.to_string(),
        })
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

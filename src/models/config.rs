use std::time::Duration;

/// Where wiki pages live and how their locations are turned back into URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    /// Prepended to a location to make it fetchable, e.g. `https://`.
    pub scheme: String,
    /// Hosts must end with this to be accepted, e.g. `wikipedia.org`.
    pub domain_suffix: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            scheme: "https://".to_string(),
            domain_suffix: "wikipedia.org".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("wiki_toc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

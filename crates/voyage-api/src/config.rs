//! Server configuration from the environment.
use crate::error::ApiError;
use std::time::Duration;
use voyage_core::CatalogConfig;
use voyage_feed::DEFAULT_UPSTREAM_URL;
use voyage_wizard::WizardPolicy;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// VOYAGE_ADDR
    pub addr: String,
    /// VOYAGE_UPSTREAM_URL
    pub upstream_url: String,
    /// VOYAGE_CATALOG: optional catalog YAML
    pub catalog_path: Option<String>,
    /// VOYAGE_HTTP_TIMEOUT_SECS
    pub http_timeout: Duration,
    /// VOYAGE_REQUIRE_SELECTION: gate every wizard step on its selection
    pub require_selection: bool,
    /// VOYAGE_WIZARD_POLICY: optional per-step gating YAML, wins over
    /// `require_selection`
    pub policy_path: Option<String>,
    /// VOYAGE_SESSION_TTL_SECS: idle wizard sessions older than this are dropped
    pub session_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            catalog_path: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            require_selection: false,
            policy_path: None,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let http_timeout = secs(&lookup, "VOYAGE_HTTP_TIMEOUT_SECS")?.unwrap_or(defaults.http_timeout);
        let session_ttl = match secs(&lookup, "VOYAGE_SESSION_TTL_SECS")? {
            Some(ttl) if ttl.is_zero() => {
                return Err(ApiError::Config("VOYAGE_SESSION_TTL_SECS must be positive".to_string()))
            }
            Some(ttl) => ttl,
            None => defaults.session_ttl,
        };

        let require_selection = match lookup("VOYAGE_REQUIRE_SELECTION").as_deref().map(str::trim) {
            None | Some("") => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(ApiError::Config(format!(
                    "VOYAGE_REQUIRE_SELECTION must be a boolean, got {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            addr: lookup("VOYAGE_ADDR").unwrap_or(defaults.addr),
            upstream_url: lookup("VOYAGE_UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            catalog_path: lookup("VOYAGE_CATALOG").filter(|p| !p.trim().is_empty()),
            http_timeout,
            require_selection,
            policy_path: lookup("VOYAGE_WIZARD_POLICY").filter(|p| !p.trim().is_empty()),
            session_ttl,
        })
    }

    /// Catalog from `catalog_path`, or the reference catalog
    pub fn load_catalog(&self) -> Result<CatalogConfig, ApiError> {
        match &self.catalog_path {
            Some(path) => Ok(CatalogConfig::load(path)?),
            None => Ok(CatalogConfig::reference()),
        }
    }

    pub fn wizard_policy(&self) -> Result<WizardPolicy, ApiError> {
        if let Some(path) = &self.policy_path {
            return Ok(WizardPolicy::load(path)?);
        }
        Ok(if self.require_selection {
            WizardPolicy::strict()
        } else {
            WizardPolicy::permissive()
        })
    }
}

fn secs<F>(lookup: &F, key: &str) -> Result<Option<Duration>, ApiError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ApiError::Config(format!("{} must be an integer, got {:?}", key, raw)))
        })
        .transpose()
}

//! Registry discovery from `UV_TEST_*` environment variables.
//!
//! A registry is defined by the presence of `UV_TEST_<NAME>_URL`. Its token,
//! probe package and optional username are looked up under the same
//! upper-cased name.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::sync::LazyLock;

/// Prefix shared by every variable the probe reads.
pub const VAR_PREFIX: &str = "UV_TEST_";

/// Username used when `UV_TEST_<NAME>_USERNAME` is not set.
pub const DEFAULT_USERNAME: &str = "__token__";

static URL_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UV_TEST_(.+)_URL$").expect("valid registry regex"));

/// A registry discovered from the environment, with whatever credentials
/// were found for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Lower-cased registry name.
    pub name: String,
    /// Index URL.
    pub url: String,
    /// Auth token, if configured.
    pub token: Option<String>,
    /// Private package used as the installation probe, if configured.
    pub package: Option<String>,
    /// Username sent alongside the token.
    pub username: String,
}

/// Whether a registry has everything it needs to be tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    MissingToken,
    MissingPackage,
}

impl RegistryConfig {
    /// Upper-cased name used in variable names.
    pub fn env_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Name of a `UV_TEST_<NAME>_<SUFFIX>` variable for this registry.
    pub fn test_var(&self, suffix: &str) -> String {
        format!("{}{}_{}", VAR_PREFIX, self.env_name(), suffix)
    }

    /// Check token first, then package.
    pub fn readiness(&self) -> Readiness {
        if self.token.is_none() {
            Readiness::MissingToken
        } else if self.package.is_none() {
            Readiness::MissingPackage
        } else {
            Readiness::Ready
        }
    }
}

/// Extract the lower-cased registry name from a `UV_TEST_<NAME>_URL` variable name.
pub fn registry_name(var: &str) -> Option<String> {
    URL_VAR
        .captures(var)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Discover registries from a set of environment variables.
///
/// Registries are returned sorted by name. Empty token, package and username
/// values are treated as unset.
pub fn discover_registries<I, K, V>(vars: I) -> Vec<RegistryConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    let mut urls: BTreeMap<String, String> = BTreeMap::new();
    for (key, value) in &vars {
        if let Some(name) = registry_name(key) {
            urls.insert(name, value.clone());
        }
    }

    urls.into_iter()
        .map(|(name, url)| {
            let upper = name.to_uppercase();
            let lookup = |suffix: &str| {
                vars.get(&format!("{}{}_{}", VAR_PREFIX, upper, suffix))
                    .filter(|v| !v.is_empty())
                    .cloned()
            };

            let config = RegistryConfig {
                token: lookup("TOKEN"),
                package: lookup("PKG"),
                username: lookup("USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
                name,
                url,
            };
            tracing::debug!(
                "Discovered registry '{}' at {} (token: {}, package: {:?})",
                config.name,
                config.url,
                config.token.is_some(),
                config.package
            );
            config
        })
        .collect()
}

/// Keep only the variables whose name and value are both valid UTF-8.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

/// Discover registries from the current process environment.
///
/// Variables that are not valid UTF-8 are ignored.
pub fn discover_from_env() -> Vec<RegistryConfig> {
    discover_registries(utf8_vars(std::env::vars_os()))
}

//! Run configuration.
//!
//! - Registry discovery from `UV_TEST_*` variables in [`discovery`]
//! - Timeout, verbosity and tool selection in [`settings`]
//!
//! # Example
//!
//! ```
//! use registry_probe::config::{discover_registries, Readiness};
//!
//! let registries = discover_registries([
//!     ("UV_TEST_GEMFURY_URL", "https://pypi.fury.io/acme/"),
//!     ("UV_TEST_GEMFURY_TOKEN", "secret"),
//! ]);
//!
//! assert_eq!(registries[0].name, "gemfury");
//! assert_eq!(registries[0].username, "__token__");
//! assert_eq!(registries[0].readiness(), Readiness::MissingPackage);
//! ```

pub mod discovery;
pub mod settings;

pub use discovery::{
    discover_from_env, discover_registries, registry_name, Readiness, RegistryConfig,
    DEFAULT_USERNAME,
};
pub use settings::{
    resolve_timeout, resolve_timeout_from_env, Settings, Verbosity, DEFAULT_CARGO,
    DEFAULT_TIMEOUT_SECS, TIMEOUT_VAR,
};

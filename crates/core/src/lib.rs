pub mod bundle;
pub mod config;
pub mod error;
pub mod locale;

pub use bundle::{load_bundle, parse_bundle_str, Bundle};
pub use config::{parse_site_toml, parse_site_toml_str, MissingBundlePolicy, Site};
pub use error::{Error, Result};
pub use locale::{display_name, og_locale, Locale, SUPPORTED_LOCALES};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete site configuration, parsed from `site.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub site: SiteMetadata,
    #[serde(default)]
    pub analytics: Option<Analytics>,
    #[serde(default, rename = "screenshot")]
    pub screenshots: Vec<Screenshot>,
}

/// App identity and URLs shared by every rendered page.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteMetadata {
    pub app_name: String,
    pub base_url: String,
    pub author: String,
    pub app_store_id: String,
    pub app_store_url: String,
    pub application_category: String,
    pub og_image: String,
    pub icon: String,
    pub default_keywords: String,
    #[serde(default)]
    pub missing_bundle: MissingBundlePolicy,
}

/// How the build treats a locale whose translation file is absent.
///
/// `Error` aborts the whole build; `Skip` logs the locale and leaves it
/// out of the sitemap. Malformed bundle content is fatal under both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingBundlePolicy {
    #[default]
    Error,
    Skip,
}

/// Google Analytics configuration; omit the table to omit the snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct Analytics {
    pub measurement_id: String,
}

/// One entry in the screenshots gallery, relative to the site root.
#[derive(Debug, Clone, Deserialize)]
pub struct Screenshot {
    pub src: String,
    pub alt: String,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let mut site: Site = toml::from_str(content)?;

    if site.site.base_url.ends_with('/') {
        return Err(Error::ConfigParse(format!(
            "base_url must not end with '/': '{}'",
            site.site.base_url
        )));
    }
    if site.site.app_name.trim().is_empty() {
        return Err(Error::ConfigParse("app_name must not be empty".to_string()));
    }
    site.site.base_url = site.site.base_url.trim().to_string();

    Ok(site)
}

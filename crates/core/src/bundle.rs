use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The full set of translated strings and structured content for one
/// locale, loaded from `locales/<code>.json`.
///
/// Field names mirror the JSON keys (camelCase). A missing required key
/// fails the parse; optional sections are simply not rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub app_name: String,
    pub meta: Meta,
    pub nav: Nav,
    pub hero: Hero,
    pub features: Features,
    pub screenshots: SectionHeader,
    #[serde(default)]
    pub testimonials: Option<Testimonials>,
    pub download: Download,
    #[serde(default)]
    pub faq: Option<Faq>,
    pub privacy: Privacy,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nav {
    pub features: String,
    pub screenshots: String,
    pub download: String,
    #[serde(default)]
    pub testimonials: Option<String>,
    #[serde(default)]
    pub faq: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub download_alt: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub section_title: String,
    pub section_subtitle: String,
    pub list: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeader {
    pub section_title: String,
    pub section_subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonials {
    pub section_title: String,
    pub section_subtitle: String,
    pub list: Vec<Review>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub section_title: String,
    pub section_subtitle: String,
    pub list: Vec<FaqItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub title: String,
    pub description: String,
    pub platforms: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    pub title: String,
    pub description: String,
    pub link_label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub app_store: String,
    pub privacy_policy: String,
    pub terms_of_service: String,
    pub copyright: String,
}

/// Load a translation bundle from a JSON file
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<Bundle> {
    let content = fs::read_to_string(path)?;
    parse_bundle_str(&content)
}

/// Parse a translation bundle from a string (useful for testing)
pub fn parse_bundle_str(content: &str) -> Result<Bundle> {
    Ok(serde_json::from_str(content)?)
}

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const SITE_TOML_TEMPLATE: &str = r##"# landing-kit site configuration
#
# One directory per app. Translation bundles live in locales/<code>.json;
# shared css/js/images are referenced relative to this directory.

[site]
app_name = "MyApp"
base_url = "https://example.net/MyApp"
author = "Your Name"
app_store_id = "0000000000"
app_store_url = "https://apps.apple.com/app/apple-store/id0000000000"
application_category = "LifestyleApplication"
og_image = "images/MyApp.png"
icon = "images/MyApp.png"
default_keywords = "keywords, for, locales, without, their, own"

# "error": a missing locales/<code>.json aborts the build.
# "skip":  the locale is skipped and left out of the sitemap.
missing_bundle = "error"

# [analytics]
# measurement_id = "G-XXXXXXXXXX"

[[screenshot]]
src = "images/en/screenshot-1.jpg"
alt = "Screenshot 1"
"##;

const STARTER_BUNDLE: &str = r##"{
  "appName": "MyApp",
  "meta": {
    "title": "MyApp - One-line pitch",
    "description": "A sentence or two for search engines and link previews."
  },
  "nav": {
    "features": "Features",
    "screenshots": "Screenshots",
    "download": "Download",
    "faq": "FAQ"
  },
  "hero": {
    "title": "Headline",
    "description": "Subheadline.",
    "downloadAlt": "Download on the App Store"
  },
  "features": {
    "sectionTitle": "Features",
    "sectionSubtitle": "What it does",
    "list": [
      {"id": "timeline", "icon": "clock", "title": "First feature", "description": "Describe it."},
      {"id": "statistics", "icon": "chart", "title": "Second feature", "description": "Describe it."}
    ]
  },
  "screenshots": {
    "sectionTitle": "Screenshots",
    "sectionSubtitle": "A quick look"
  },
  "download": {
    "title": "Get MyApp",
    "description": "Free on the App Store.",
    "platforms": "iOS 17+"
  },
  "faq": {
    "sectionTitle": "FAQ",
    "sectionSubtitle": "Common questions",
    "list": [
      {"question": "A question?", "answer": "An answer."}
    ]
  },
  "privacy": {
    "title": "Privacy",
    "description": "Say how you handle data.",
    "linkLabel": "Privacy Policy"
  },
  "footer": {
    "appStore": "App Store",
    "privacyPolicy": "Privacy Policy",
    "termsOfService": "Terms of Service",
    "copyright": "© 2026 Your Name"
  }
}
"##;

/// Scaffold a new site directory with a site.toml template and a starter
/// English bundle. Refuses to overwrite an existing site.toml.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists in {} - refusing to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    fs::create_dir_all(path.join("locales")).context("Failed to create locales directory")?;

    fs::write(&site_toml_path, SITE_TOML_TEMPLATE).context("Failed to write site.toml")?;
    println!("  ✓ Created: site.toml");

    let en_bundle_path = path.join("locales").join("en.json");
    fs::write(&en_bundle_path, STARTER_BUNDLE).context("Failed to write locales/en.json")?;
    println!("  ✓ Created: locales/en.json");

    println!();
    println!("Next steps:");
    println!("  1. Edit {}/site.toml", path.display());
    println!("  2. Fill in locales/en.json, then add one JSON per locale");
    println!("  3. Run: landing-kit build {}", path.display());

    Ok(())
}

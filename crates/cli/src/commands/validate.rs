use anyhow::{Context, Result};
use landing_kit_core::config::{parse_site_toml, MissingBundlePolicy};
use landing_kit_core::load_bundle;
use landing_kit_core::locale::SUPPORTED_LOCALES;
use std::path::PathBuf;

/// Check site.toml and every translation bundle without writing anything
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let config_path = path.join("site.toml");
    let site = parse_site_toml(&config_path).context("Failed to parse site.toml")?;

    println!("✓ site.toml valid");
    println!("  App: {}", site.site.app_name);
    println!("  Base URL: {}", site.site.base_url);
    println!();

    let mut present = 0usize;
    let mut missing = 0usize;

    for locale in SUPPORTED_LOCALES {
        let bundle_path = path.join("locales").join(format!("{}.json", locale.code));
        if !bundle_path.exists() {
            println!("  - {} ({}): missing", locale.code, locale.name);
            missing += 1;
            continue;
        }

        let bundle = load_bundle(&bundle_path)
            .with_context(|| format!("Invalid bundle {}", bundle_path.display()))?;
        println!(
            "  ✓ {} ({}): {} features{}{}",
            locale.code,
            locale.name,
            bundle.features.list.len(),
            if bundle.faq.is_some() { ", faq" } else { "" },
            if bundle.testimonials.is_some() { ", testimonials" } else { "" },
        );
        present += 1;
    }

    println!();
    println!("{} bundles present, {} missing", present, missing);

    if missing > 0 && site.site.missing_bundle == MissingBundlePolicy::Error {
        anyhow::bail!(
            "{} locale bundle(s) missing and missing_bundle policy is 'error'",
            missing
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_toml(policy: &str) -> String {
        format!(
            r##"
[site]
app_name = "TestApp"
base_url = "https://example.net/TestApp"
author = "Test Author"
app_store_id = "6758056060"
app_store_url = "https://apps.apple.com/app/apple-store/id6758056060"
application_category = "LifestyleApplication"
og_image = "images/TestApp.png"
icon = "images/TestApp.png"
default_keywords = "test app"
missing_bundle = "{}"
"##,
            policy
        )
    }

    const BUNDLE_JSON: &str = r##"{
  "appName": "TestApp",
  "meta": {"title": "TestApp", "description": "Desc."},
  "nav": {"features": "Features", "screenshots": "Screenshots", "download": "Download"},
  "hero": {"title": "Hero", "description": "Hero desc."},
  "features": {"sectionTitle": "F", "sectionSubtitle": "S", "list": []},
  "screenshots": {"sectionTitle": "S", "sectionSubtitle": "S"},
  "download": {"title": "Get it", "description": "Free.", "platforms": "iOS 17+"},
  "privacy": {"title": "P", "description": "D", "linkLabel": "L"},
  "footer": {"appStore": "A", "privacyPolicy": "P", "termsOfService": "T", "copyright": "C"}
}"##;

    #[tokio::test]
    async fn test_validate_lenient_passes_with_missing_bundles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), site_toml("skip")).unwrap();
        fs::create_dir_all(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/en.json"), BUNDLE_JSON).unwrap();

        run(dir.path().to_path_buf()).await.unwrap();
    }

    #[tokio::test]
    async fn test_validate_strict_fails_with_missing_bundles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), site_toml("error")).unwrap();
        fs::create_dir_all(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/en.json"), BUNDLE_JSON).unwrap();

        let result = run(dir.path().to_path_buf()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_validate_fails_on_malformed_bundle() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), site_toml("skip")).unwrap();
        fs::create_dir_all(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/en.json"), "{").unwrap();

        let result = run(dir.path().to_path_buf()).await;
        assert!(result.is_err());
    }
}

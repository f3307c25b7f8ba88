use anyhow::{Context, Result};
use chrono::Utc;
use landing_kit_core::config::{parse_site_toml, MissingBundlePolicy};
use landing_kit_core::locale::SUPPORTED_LOCALES;
use landing_kit_core::{load_bundle, Locale};
use landing_kit_generator::{render_page, render_sitemap};
use std::fs;
use std::path::PathBuf;

/// Build all localized pages and the sitemap
pub async fn run(path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let out_root = output.unwrap_or_else(|| path.clone());

    println!("🔨 Building localized landing pages...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", out_root.display());
    println!();

    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'landing-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;

    println!("✓ Loaded: {}", site.site.app_name);
    println!("  Base URL: {}", site.site.base_url);
    println!();

    let mut rendered: Vec<Locale> = Vec::new();
    let mut skipped = 0usize;

    println!("📄 Generating pages...");
    for locale in SUPPORTED_LOCALES {
        let bundle_path = path.join("locales").join(format!("{}.json", locale.code));

        if !bundle_path.exists() {
            match site.site.missing_bundle {
                MissingBundlePolicy::Error => anyhow::bail!(
                    "Translation bundle not found: {}",
                    bundle_path.display()
                ),
                MissingBundlePolicy::Skip => {
                    let dir_display = if locale.dir.is_empty() {
                        String::new()
                    } else {
                        format!("{}/", locale.dir)
                    };
                    println!(
                        "   ⚠ Skipped: {}index.html ({}) - locale file not found",
                        dir_display, locale.name
                    );
                    skipped += 1;
                    continue;
                }
            }
        }

        let bundle = load_bundle(&bundle_path)
            .with_context(|| format!("Failed to load {}", bundle_path.display()))?;

        let html = render_page(&site, locale, &bundle)
            .with_context(|| format!("Failed to render page for locale '{}'", locale.code))?;

        let out_dir = if locale.dir.is_empty() {
            out_root.clone()
        } else {
            out_root.join(locale.dir)
        };
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        let out_file = out_dir.join("index.html");
        fs::write(&out_file, html)
            .with_context(|| format!("Failed to write {}", out_file.display()))?;

        let dir_display = if locale.dir.is_empty() {
            String::new()
        } else {
            format!("{}/", locale.dir)
        };
        println!("   ✓ Created: {}index.html ({})", dir_display, locale.name);
        rendered.push(*locale);
    }

    println!();
    println!("🗺  Generating sitemap.xml...");
    let sitemap = render_sitemap(&site.site.base_url, &rendered, Utc::now().date_naive());
    let sitemap_path = out_root.join("sitemap.xml");
    fs::write(&sitemap_path, sitemap)
        .with_context(|| format!("Failed to write {}", sitemap_path.display()))?;
    println!("   ✓ Updated: sitemap.xml");

    println!();
    if skipped > 0 {
        println!(
            "✅ Build complete! Generated {} localized pages ({} skipped).",
            rendered.len(),
            skipped
        );
    } else {
        println!("✅ Build complete! Generated {} localized pages.", rendered.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SITE_TOML: &str = r##"
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
missing_bundle = "POLICY"
"##;

    const BUNDLE_JSON: &str = r##"{
  "appName": "TestApp",
  "meta": {"title": "TestApp", "description": "Desc."},
  "nav": {"features": "Features", "screenshots": "Screenshots", "download": "Download"},
  "hero": {"title": "Hero", "description": "Hero desc."},
  "features": {
    "sectionTitle": "Features",
    "sectionSubtitle": "Sub",
    "list": [
      {"id": "timeline", "title": "T1", "description": "D1"},
      {"id": "statistics", "title": "T2", "description": "D2"}
    ]
  },
  "screenshots": {"sectionTitle": "Screenshots", "sectionSubtitle": "Sub"},
  "download": {"title": "Get it", "description": "Free.", "platforms": "iOS 17+"},
  "privacy": {"title": "Privacy", "description": "On device.", "linkLabel": "Privacy Policy"},
  "footer": {
    "appStore": "App Store",
    "privacyPolicy": "Privacy Policy",
    "termsOfService": "Terms",
    "copyright": "© 2026"
  }
}"##;

    fn write_site(dir: &TempDir, policy: &str, locales: &[&str]) {
        fs::write(
            dir.path().join("site.toml"),
            SITE_TOML.replace("POLICY", policy),
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("locales")).unwrap();
        for code in locales {
            fs::write(
                dir.path().join("locales").join(format!("{}.json", code)),
                BUNDLE_JSON,
            )
            .unwrap();
        }
    }

    fn all_locale_codes() -> Vec<&'static str> {
        SUPPORTED_LOCALES.iter().map(|l| l.code).collect()
    }

    #[tokio::test]
    async fn test_build_writes_pages_at_expected_paths() {
        let dir = TempDir::new().unwrap();
        write_site(&dir, "error", &all_locale_codes());

        run(dir.path().to_path_buf(), None).await.unwrap();

        // Default locale at the root, others in per-code subdirectories
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("ja/index.html").exists());
        assert!(dir.path().join("zh-Hans/index.html").exists());
        assert!(dir.path().join("sitemap.xml").exists());
        assert!(!dir.path().join("en/index.html").exists());
    }

    #[tokio::test]
    async fn test_strict_policy_aborts_on_missing_bundle() {
        let dir = TempDir::new().unwrap();
        write_site(&dir, "error", &["en"]);

        let result = run(dir.path().to_path_buf(), None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_lenient_policy_skips_missing_bundles() {
        let dir = TempDir::new().unwrap();
        write_site(&dir, "skip", &["en"]);

        run(dir.path().to_path_buf(), None).await.unwrap();

        assert!(dir.path().join("index.html").exists());
        assert!(!dir.path().join("fr").exists());

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 1);
        assert!(!sitemap.contains("hreflang=\"fr\""));
        assert!(sitemap.contains("hreflang=\"x-default\""));
    }

    #[tokio::test]
    async fn test_malformed_bundle_fatal_even_when_lenient() {
        let dir = TempDir::new().unwrap();
        write_site(&dir, "skip", &["en"]);
        fs::write(dir.path().join("locales/fr.json"), "{ not json").unwrap();

        let result = run(dir.path().to_path_buf(), None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write_site(&dir, "skip", &["en", "fr"]);

        run(dir.path().to_path_buf(), None).await.unwrap();
        let first_page = fs::read_to_string(dir.path().join("index.html")).unwrap();
        let first_map = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();

        run(dir.path().to_path_buf(), None).await.unwrap();
        let second_page = fs::read_to_string(dir.path().join("index.html")).unwrap();
        let second_map = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();

        assert_eq!(first_page, second_page);
        // Same build date within a test run
        assert_eq!(first_map, second_map);
    }

    #[tokio::test]
    async fn test_canonical_url_matches_sitemap_loc() {
        let dir = TempDir::new().unwrap();
        write_site(&dir, "skip", &["en", "ja"]);

        run(dir.path().to_path_buf(), None).await.unwrap();

        let page = fs::read_to_string(dir.path().join("ja/index.html")).unwrap();
        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        let canonical = "https://example.net/TestApp/ja/";
        assert!(page.contains(&format!("<link rel=\"canonical\" href=\"{}\">", canonical)));
        assert!(sitemap.contains(&format!("<loc>{}</loc>", canonical)));
    }

    #[tokio::test]
    async fn test_separate_output_directory() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_site(&dir, "skip", &["en"]);

        run(dir.path().to_path_buf(), Some(out.path().to_path_buf()))
            .await
            .unwrap();

        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("sitemap.xml").exists());
        assert!(!dir.path().join("index.html").exists());
    }

    #[tokio::test]
    async fn test_missing_site_toml_mentions_init() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().to_path_buf(), None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("landing-kit init"));
    }
}

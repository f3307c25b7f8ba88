use landing_kit_core::bundle::{parse_bundle_str, Bundle};
use landing_kit_core::config::{parse_site_toml_str, Site};

pub fn test_site() -> Site {
    parse_site_toml_str(
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
default_keywords = "test app, landing page"
missing_bundle = "skip"

[analytics]
measurement_id = "G-TEST123"

[[screenshot]]
src = "images/en/screenshot-1.jpg"
alt = "Screenshot 1"

[[screenshot]]
src = "images/en/screenshot-2.jpg"
alt = "Screenshot 2"
"##,
    )
    .unwrap()
}

pub fn test_bundle() -> Bundle {
    parse_bundle_str(
        r##"{
  "appName": "TestApp",
  "meta": {
    "title": "TestApp - Example Title",
    "description": "An example description."
  },
  "nav": {
    "features": "Features",
    "screenshots": "Screenshots",
    "download": "Download",
    "faq": "FAQ"
  },
  "hero": {
    "title": "Hero title",
    "description": "Hero description."
  },
  "features": {
    "sectionTitle": "Features",
    "sectionSubtitle": "What it does",
    "list": [
      {"id": "timeline", "icon": "clock", "title": "T1", "description": "D1"},
      {"id": "statistics", "icon": "chart", "title": "T2", "description": "D2"},
      {"id": "map", "icon": "map", "title": "T3", "description": "D3"},
      {"id": "privacy", "icon": "shield", "title": "T4", "description": "D4"}
    ]
  },
  "screenshots": {
    "sectionTitle": "Screenshots",
    "sectionSubtitle": "A quick look"
  },
  "download": {
    "title": "Get TestApp",
    "description": "Free on the App Store.",
    "platforms": "iOS 17+"
  },
  "faq": {
    "sectionTitle": "FAQ",
    "sectionSubtitle": "Questions",
    "list": [
      {"question": "Q1?", "answer": "A1."},
      {"question": "Q2?", "answer": "A2."}
    ]
  },
  "privacy": {
    "title": "Privacy",
    "description": "On-device only.",
    "linkLabel": "Privacy Policy"
  },
  "footer": {
    "appStore": "App Store",
    "privacyPolicy": "Privacy Policy",
    "termsOfService": "Terms of Service",
    "copyright": "© 2026 TestApp"
  }
}"##,
    )
    .unwrap()
}

use crate::error::{Error, Result};

/// A supported language/region variant and its output location.
///
/// The default locale has an empty `dir` and is written at the site root;
/// every other locale is written to a subdirectory named after its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
    pub dir: &'static str,
}

/// All supported locales, in the order they appear in hreflang tags,
/// the language switcher, and the sitemap.
pub const SUPPORTED_LOCALES: &[Locale] = &[
    Locale { code: "en", name: "English", dir: "" },
    Locale { code: "zh-Hans", name: "Chinese Simplified", dir: "zh-Hans" },
    Locale { code: "zh-Hant", name: "Chinese Traditional", dir: "zh-Hant" },
    Locale { code: "ja", name: "Japanese", dir: "ja" },
    Locale { code: "ko", name: "Korean", dir: "ko" },
    Locale { code: "fr", name: "French", dir: "fr" },
    Locale { code: "de", name: "German", dir: "de" },
    Locale { code: "es", name: "Spanish", dir: "es" },
    Locale { code: "pt", name: "Portuguese", dir: "pt" },
    Locale { code: "it", name: "Italian", dir: "it" },
    Locale { code: "ru", name: "Russian", dir: "ru" },
    Locale { code: "hi", name: "Hindi", dir: "hi" },
    Locale { code: "id", name: "Indonesian", dir: "id" },
    Locale { code: "vi", name: "Vietnamese", dir: "vi" },
];

impl Locale {
    /// True for the locale written at the site root.
    pub fn is_default(&self) -> bool {
        self.dir.is_empty()
    }

    /// Canonical URL for this locale's page. `base_url` has no trailing slash.
    pub fn canonical_url(&self, base_url: &str) -> String {
        if self.dir.is_empty() {
            format!("{}/", base_url)
        } else {
            format!("{}/{}/", base_url, self.dir)
        }
    }

    /// Relative prefix from this locale's page back to shared assets.
    pub fn asset_prefix(&self) -> &'static str {
        if self.dir.is_empty() { "" } else { "../" }
    }

    /// Short uppercase label shown in the language-switcher button.
    pub fn short_code(&self) -> String {
        self.code.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Native-language label for the language switcher.
///
/// This table must stay in lockstep with `SUPPORTED_LOCALES`; an unknown
/// code is a configuration consistency bug, not a renderable condition.
pub fn display_name(code: &str) -> Result<&'static str> {
    let name = match code {
        "en" => "English",
        "zh-Hans" => "简体中文",
        "zh-Hant" => "繁體中文",
        "ja" => "日本語",
        "ko" => "한국어",
        "fr" => "Français",
        "de" => "Deutsch",
        "es" => "Español",
        "pt" => "Português",
        "it" => "Italiano",
        "ru" => "Русский",
        "hi" => "हिन्दी",
        "id" => "Indonesia",
        "vi" => "Tiếng Việt",
        _ => return Err(Error::UnknownLocale(code.to_string())),
    };
    Ok(name)
}

/// Open Graph locale tag. Codes outside the map intentionally fall back
/// to `en_US`.
pub fn og_locale(code: &str) -> &'static str {
    match code {
        "en" => "en_US",
        "zh-Hans" => "zh_CN",
        "zh-Hant" => "zh_TW",
        "ja" => "ja_JP",
        "ko" => "ko_KR",
        "fr" => "fr_FR",
        "de" => "de_DE",
        "es" => "es_ES",
        "pt" => "pt_BR",
        "it" => "it_IT",
        "ru" => "ru_RU",
        "hi" => "hi_IN",
        "id" => "id_ID",
        "vi" => "vi_VN",
        _ => "en_US",
    }
}

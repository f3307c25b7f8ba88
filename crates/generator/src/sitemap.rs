use chrono::NaiveDate;
use landing_kit_core::locale::Locale;

/// Render sitemap.xml for the locales that were actually rendered.
///
/// Skipped locales are excluded both as `<url>` entries and as hreflang
/// alternates. Output is byte-deterministic for a fixed locale set and
/// date; the date is injected so builds differ only in `<lastmod>`.
pub fn render_sitemap(base_url: &str, rendered: &[Locale], lastmod: NaiveDate) -> String {
    let mut sitemap = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n\
         \x20       xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for locale in rendered {
        let priority = if locale.is_default() { "1.0" } else { "0.9" };
        sitemap.push_str(&format!(
            "\n    <url>\n        <loc>{}</loc>\n        <lastmod>{}</lastmod>\n        <changefreq>weekly</changefreq>\n        <priority>{}</priority>\n",
            locale.canonical_url(base_url),
            lastmod.format("%Y-%m-%d"),
            priority,
        ));
        for alt in rendered {
            sitemap.push_str(&format!(
                "        <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                alt.code,
                alt.canonical_url(base_url),
            ));
        }
        sitemap.push_str(&format!(
            "        <xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"{}/\"/>\n",
            base_url
        ));
        sitemap.push_str("    </url>\n");
    }

    sitemap.push_str("</urlset>");
    sitemap
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_kit_core::locale::SUPPORTED_LOCALES;

    const BASE: &str = "https://example.net/TestApp";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn test_one_url_entry_per_rendered_locale() {
        let sitemap = render_sitemap(BASE, SUPPORTED_LOCALES, date());
        assert_eq!(sitemap.matches("<url>").count(), SUPPORTED_LOCALES.len());
        assert_eq!(sitemap.matches("</url>").count(), SUPPORTED_LOCALES.len());
    }

    #[test]
    fn test_each_entry_has_alternates_plus_x_default() {
        let rendered = &SUPPORTED_LOCALES[..3];
        let sitemap = render_sitemap(BASE, rendered, date());
        // 3 urls x (3 alternates + 1 x-default)
        assert_eq!(sitemap.matches("xhtml:link").count(), 3 * 4);
        assert_eq!(sitemap.matches("hreflang=\"x-default\"").count(), 3);
    }

    #[test]
    fn test_priority_default_vs_other_locales() {
        let sitemap = render_sitemap(BASE, SUPPORTED_LOCALES, date());
        assert_eq!(sitemap.matches("<priority>1.0</priority>").count(), 1);
        assert_eq!(
            sitemap.matches("<priority>0.9</priority>").count(),
            SUPPORTED_LOCALES.len() - 1
        );
    }

    #[test]
    fn test_loc_matches_canonical_url() {
        let sitemap = render_sitemap(BASE, SUPPORTED_LOCALES, date());
        for locale in SUPPORTED_LOCALES {
            let loc = format!("<loc>{}</loc>", locale.canonical_url(BASE));
            assert!(sitemap.contains(&loc), "missing loc for {}", locale.code);
        }
    }

    #[test]
    fn test_skipped_locale_absent_everywhere() {
        // en rendered, fr skipped
        let rendered = &SUPPORTED_LOCALES[..1];
        let sitemap = render_sitemap(BASE, rendered, date());
        assert_eq!(sitemap.matches("<url>").count(), 1);
        assert!(!sitemap.contains("hreflang=\"fr\""));
        assert_eq!(sitemap.matches("xhtml:link").count(), 2); // en + x-default
    }

    #[test]
    fn test_deterministic_except_lastmod() {
        let a = render_sitemap(BASE, SUPPORTED_LOCALES, date());
        let b = render_sitemap(BASE, SUPPORTED_LOCALES, date());
        assert_eq!(a, b);

        let later = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let c = render_sitemap(BASE, SUPPORTED_LOCALES, later);
        let a_stripped = a.replace("<lastmod>2026-08-29</lastmod>", "");
        let c_stripped = c.replace("<lastmod>2026-09-01</lastmod>", "");
        assert_eq!(a_stripped, c_stripped);
    }

    #[test]
    fn test_lastmod_iso_format() {
        let sitemap = render_sitemap(BASE, &SUPPORTED_LOCALES[..1], date());
        assert!(sitemap.contains("<lastmod>2026-08-29</lastmod>"));
    }
}

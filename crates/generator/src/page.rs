use crate::html::html_escape;
use crate::icons::{feature_color, feature_icon};
use landing_kit_core::bundle::{Bundle, FaqItem, Feature, Review};
use landing_kit_core::config::{Analytics, Screenshot, Site};
use landing_kit_core::locale::{display_name, og_locale, Locale, SUPPORTED_LOCALES};
use landing_kit_core::Result;

const STAR_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/></svg>"#;

/// Hreflang alternate tags for the document head.
///
/// Site-wide: one entry per supported locale in table order plus one
/// x-default, identical on every rendered page.
fn hreflang_tags(base_url: &str) -> String {
    let mut tags: String = SUPPORTED_LOCALES
        .iter()
        .map(|locale| {
            format!(
                "    <link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
                locale.code,
                locale.canonical_url(base_url)
            )
        })
        .collect();
    tags.push_str(&format!(
        "    <link rel=\"alternate\" hreflang=\"x-default\" href=\"{}/\">",
        base_url
    ));
    tags
}

/// Language-switcher dropdown entries. The locale being rendered gets the
/// `active` class; labels come from the static display-name table, which
/// must cover every supported code.
fn language_links(current: &Locale, asset_prefix: &str) -> Result<String> {
    let mut links = String::new();
    for locale in SUPPORTED_LOCALES {
        let active = if locale.code == current.code { " active" } else { "" };
        let href = if locale.dir.is_empty() {
            asset_prefix.to_string()
        } else {
            format!("{}{}/", asset_prefix, locale.dir)
        };
        let label = display_name(locale.code)?;
        links.push_str(&format!(
            "                    <a href=\"{}\" class=\"language-option{}\">{}</a>\n",
            href, active, label
        ));
    }
    Ok(links)
}

/// Feature cards with staggered reveal delays (100ms per index).
fn features_html(list: &[Feature]) -> String {
    list.iter()
        .enumerate()
        .map(|(i, feature)| {
            let icon = feature_icon(feature.icon.as_deref().unwrap_or("clock"));
            let color = feature_color(feature.id.as_deref().unwrap_or(""));
            let delay = i * 100;
            format!(
                r#"                    <div class="feature-card" data-aos="fade-up" data-aos-delay="{delay}">
                        <div class="feature-card__icon feature-card__icon--{color}">
                            {icon}
                        </div>
                        <h3 class="feature-card__title">{title}</h3>
                        <p class="feature-card__description">{description}</p>
                    </div>
"#,
                delay = delay,
                color = color,
                icon = icon,
                title = html_escape(&feature.title),
                description = html_escape(&feature.description),
            )
        })
        .collect()
}

/// FAQ accordion items, staggered like the feature cards.
fn faq_html(items: &[FaqItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"                    <div class="faq__item" data-aos="fade-up" data-aos-delay="{delay}">
                        <button class="faq__question" aria-expanded="false">
                            <span>{question}</span>
                            <svg class="faq__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <polyline points="6 9 12 15 18 9"></polyline>
                            </svg>
                        </button>
                        <div class="faq__answer">
                            <p>{answer}</p>
                        </div>
                    </div>
"#,
                delay = i * 100,
                question = html_escape(&item.question),
                answer = html_escape(&item.answer),
            )
        })
        .collect()
}

fn testimonials_html(reviews: &[Review]) -> String {
    reviews
        .iter()
        .enumerate()
        .map(|(i, review)| {
            format!(
                r#"                    <div class="testimonial-card" data-aos="fade-up" data-aos-delay="{delay}">
                        <div class="testimonial-card__stars">{stars}</div>
                        <p class="testimonial-card__quote">{quote}</p>
                        <p class="testimonial-card__author">— {author}</p>
                    </div>
"#,
                delay = i * 100,
                stars = STAR_SVG.repeat(5),
                quote = html_escape(&review.quote),
                author = html_escape(&review.author),
            )
        })
        .collect()
}

fn screenshots_html(screenshots: &[Screenshot], asset_prefix: &str) -> String {
    screenshots
        .iter()
        .map(|shot| {
            format!(
                "                        <div class=\"screenshot-item\"><img src=\"{}{}\" alt=\"{}\" loading=\"lazy\"></div>\n",
                asset_prefix,
                html_escape(&shot.src),
                html_escape(&shot.alt),
            )
        })
        .collect()
}

/// Google Analytics snippet, emitted verbatim around the measurement ID.
fn analytics_html(analytics: Option<&Analytics>) -> String {
    match analytics {
        Some(a) => format!(
            r#"<!-- Google tag (gtag.js) -->
    <script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
    <script>
      window.dataLayer = window.dataLayer || [];
      function gtag(){{dataLayer.push(arguments);}}
      gtag('js', new Date());

      // Only track on production
      if (location.hostname !== 'localhost' && location.hostname !== '127.0.0.1') {{
        gtag('config', '{id}');
      }}
    </script>"#,
            id = a.measurement_id
        ),
        None => String::new(),
    }
}

/// JSON-LD `SoftwareApplication` block. Built with serde_json so the
/// structured data mirrors the meta title/description/locale fields
/// exactly and escaping is always valid JSON.
fn structured_data(site: &Site, locale: &Locale, bundle: &Bundle) -> Result<String> {
    let value = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": bundle.app_name,
        "operatingSystem": "iOS",
        "applicationCategory": site.site.application_category,
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        },
        "description": bundle.meta.description,
        "screenshot": format!("{}/{}", site.site.base_url, site.site.og_image),
        "softwareVersion": "1.0",
        "author": {
            "@type": "Person",
            "name": site.site.author
        },
        "inLanguage": locale.code
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render the complete HTML document for one locale.
///
/// Pure: writing the result to disk is the caller's responsibility. Any
/// lookup or consistency failure returns an error rather than a partial
/// page.
pub fn render_page(site: &Site, locale: &Locale, bundle: &Bundle) -> Result<String> {
    let meta = &site.site;
    let asset_prefix = locale.asset_prefix();
    let canonical_url = locale.canonical_url(&meta.base_url);
    let hreflang = hreflang_tags(&meta.base_url);
    let og = og_locale(locale.code);
    let lang_links = language_links(locale, asset_prefix)?;
    let json_ld = structured_data(site, locale, bundle)?;
    let analytics = analytics_html(site.analytics.as_ref());

    let title = html_escape(&bundle.meta.title);
    let description = html_escape(&bundle.meta.description);
    let app_name = html_escape(&bundle.app_name);
    let keywords = html_escape(
        bundle
            .meta
            .keywords
            .as_deref()
            .unwrap_or(&meta.default_keywords),
    );
    let author = html_escape(&meta.author);
    let og_image_url = format!("{}/{}", meta.base_url, meta.og_image);
    let icon_path = format!("{}{}", asset_prefix, meta.icon);
    let app_store_url = html_escape(&meta.app_store_url);
    let badge = format!(
        "{}assets/app-store-badges/app-store-badge-{}.svg",
        asset_prefix, locale.code
    );
    let badge_fallback = format!(
        "{}assets/app-store-badges/app-store-badge-en.svg",
        asset_prefix
    );
    let download_alt = html_escape(
        bundle
            .hero
            .download_alt
            .as_deref()
            .unwrap_or("Download on the App Store"),
    );

    // Nav entries for optional sections only render when the section has
    // both a label and content.
    let nav_testimonials = match (&bundle.nav.testimonials, &bundle.testimonials) {
        (Some(label), Some(_)) => format!(
            r##"                <li class="nav__item">
                    <a href="#testimonials" class="nav__link">{}</a>
                </li>
"##,
            html_escape(label)
        ),
        _ => String::new(),
    };
    let nav_faq = match (&bundle.nav.faq, &bundle.faq) {
        (Some(label), Some(_)) => format!(
            r##"                <li class="nav__item">
                    <a href="#faq" class="nav__link">{}</a>
                </li>
"##,
            html_escape(label)
        ),
        _ => String::new(),
    };

    let hero_rating = match &bundle.hero.rating {
        Some(rating) => format!(
            r#"                    <div class="hero__rating">
                        <div class="stars">{}</div>
                        <span class="rating-text">{}</span>
                    </div>
"#,
            STAR_SVG.repeat(5),
            html_escape(rating)
        ),
        None => String::new(),
    };

    let features = features_html(&bundle.features.list);
    let screenshots = screenshots_html(&site.screenshots, asset_prefix);

    let testimonials_section = match &bundle.testimonials {
        Some(t) => format!(
            r#"        <!-- Testimonials Section -->
        <section class="testimonials" id="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{title}</h2>
                    <p class="section-subtitle">{subtitle}</p>
                </div>

                <div class="testimonials__grid">
{items}                </div>
            </div>
        </section>

"#,
            title = html_escape(&t.section_title),
            subtitle = html_escape(&t.section_subtitle),
            items = testimonials_html(&t.list),
        ),
        None => String::new(),
    };

    let faq_section = match &bundle.faq {
        Some(faq) => format!(
            r#"        <!-- FAQ Section -->
        <section class="faq" id="faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{title}</h2>
                    <p class="section-subtitle">{subtitle}</p>
                </div>

                <div class="faq__list">
{items}                </div>
            </div>
        </section>

"#,
            title = html_escape(&faq.section_title),
            subtitle = html_escape(&faq.section_subtitle),
            items = faq_html(&faq.list),
        ),
        None => String::new(),
    };

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">

{analytics}

    <!-- Primary Meta Tags -->
    <title>{title}</title>
    <meta name="title" content="{title}">
    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <meta name="author" content="{author}">
    <meta name="robots" content="index, follow">

    <!-- Canonical URL -->
    <link rel="canonical" href="{canonical_url}">

    <!-- Hreflang Tags for Multi-language SEO -->
{hreflang}

    <!-- Open Graph / Facebook -->
    <meta property="og:type" content="website">
    <meta property="og:url" content="{canonical_url}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:image" content="{og_image_url}">
    <meta property="og:site_name" content="{app_name}">
    <meta property="og:locale" content="{og}">

    <!-- Twitter -->
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:url" content="{canonical_url}">
    <meta name="twitter:title" content="{title}">
    <meta name="twitter:description" content="{description}">
    <meta name="twitter:image" content="{og_image_url}">

    <!-- App Store Smart Banner -->
    <meta name="apple-itunes-app" content="app-id={app_store_id}">

    <!-- Favicon -->
    <link rel="icon" type="image/png" href="{icon_path}">
    <link rel="apple-touch-icon" href="{icon_path}">

    <!-- Stylesheets -->
    <link rel="stylesheet" href="{asset_prefix}css/style.css">

    <!-- Structured Data (JSON-LD) -->
    <script type="application/ld+json">
{json_ld}
    </script>
</head>
<body>
    <!-- Header -->
    <header class="header" id="header">
        <nav class="nav container">
            <a href="{asset_prefix}" class="nav__logo">
                <img src="{icon_path}" alt="{app_name}" class="nav__logo-img">
                <span class="nav__logo-text">{app_name}</span>
            </a>

            <ul class="nav__menu" id="nav-menu">
                <li class="nav__item">
                    <a href="#features" class="nav__link">{nav_features}</a>
                </li>
                <li class="nav__item">
                    <a href="#screenshots" class="nav__link">{nav_screenshots}</a>
                </li>
{nav_testimonials}                <li class="nav__item">
                    <a href="#download" class="nav__link">{nav_download}</a>
                </li>
{nav_faq}            </ul>

            <!-- Language Selector -->
            <div class="language-selector" id="header-language-selector">
                <button class="language-btn" aria-label="Select Language">
                    <svg class="language-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10"></circle>
                        <line x1="2" y1="12" x2="22" y2="12"></line>
                        <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
                    </svg>
                    <span class="current-lang">{short_code}</span>
                    <svg class="chevron-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                </button>
                <div class="language-dropdown">
{lang_links}                </div>
            </div>

            <!-- Mobile Menu Toggle -->
            <button class="nav__toggle" id="nav-toggle" aria-label="Toggle Menu">
                <span></span>
                <span></span>
                <span></span>
            </button>
        </nav>
    </header>

    <main>
        <!-- Hero Section -->
        <section class="hero" id="hero">
            <div class="hero__container container">
                <div class="hero__content">
                    <img src="{icon_path}" alt="{app_name} App Icon" class="hero__icon">
                    <h1 class="hero__title">{hero_title}</h1>
                    <p class="hero__description">{hero_description}</p>
                    <a href="{app_store_url}" class="hero__download" target="_blank" rel="noopener">
                        <img src="{badge}" alt="{download_alt}" class="app-store-badge" onerror="this.src='{badge_fallback}'">
                    </a>
{hero_rating}                </div>
                <div class="hero__device">
                    <div class="device-frame">
                        <img src="{asset_prefix}images/en/title.jpg" alt="{app_name} Screenshot" class="device-screen">
                    </div>
                </div>
            </div>
            <div class="hero__gradient"></div>
        </section>

        <!-- Features Section -->
        <section class="features" id="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{features_title}</h2>
                    <p class="section-subtitle">{features_subtitle}</p>
                </div>

                <div class="features__grid features__grid--4">
{features}                </div>
            </div>
        </section>

        <!-- Screenshots Section -->
        <section class="screenshots" id="screenshots">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{screenshots_title}</h2>
                    <p class="section-subtitle">{screenshots_subtitle}</p>
                </div>

                <div class="screenshots__gallery">
                    <div class="screenshots__track" id="screenshots-track">
{screenshots}                    </div>
                </div>

                <div class="screenshots__nav">
                    <button class="screenshots__btn screenshots__btn--prev" id="screenshots-prev" aria-label="Previous">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polyline points="15 18 9 12 15 6"></polyline></svg>
                    </button>
                    <button class="screenshots__btn screenshots__btn--next" id="screenshots-next" aria-label="Next">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polyline points="9 18 15 12 9 6"></polyline></svg>
                    </button>
                </div>
            </div>
        </section>

{testimonials_section}        <!-- Download Section -->
        <section class="download" id="download">
            <div class="container">
                <div class="download__content">
                    <img src="{icon_path}" alt="{app_name}" class="download__icon">
                    <h2 class="download__title">{download_title}</h2>
                    <p class="download__description">{download_description}</p>
                    <a href="{app_store_url}" class="download__button" target="_blank" rel="noopener">
                        <img src="{badge}" alt="{download_alt}" class="app-store-badge" onerror="this.src='{badge_fallback}'">
                    </a>
                    <div class="download__platforms">
                        <span class="platform-badge">{download_platforms}</span>
                    </div>
                </div>
            </div>
        </section>

{faq_section}        <!-- Privacy Section -->
        <section class="privacy" id="privacy">
            <div class="container">
                <div class="privacy__content">
                    <div class="privacy__icon">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>
                        </svg>
                    </div>
                    <h2 class="privacy__title">{privacy_title}</h2>
                    <p class="privacy__description">{privacy_description}</p>
                    <a href="https://masawata.net/privacy-policy.html" class="privacy__link">{privacy_link}</a>
                </div>
            </div>
        </section>
    </main>

    <!-- Footer -->
    <footer class="footer">
        <div class="container">
            <div class="footer__content">
                <div class="footer__brand">
                    <img src="{icon_path}" alt="{app_name}" class="footer__logo">
                    <span class="footer__name">{app_name}</span>
                </div>
                <div class="footer__links">
                    <a href="{app_store_url}" target="_blank" rel="noopener">{footer_app_store}</a>
                    <a href="https://masawata.net/privacy-policy.html">{footer_privacy}</a>
                    <a href="https://www.apple.com/legal/internet-services/itunes/dev/stdeula/" target="_blank" rel="noopener">{footer_terms}</a>
                </div>
                <p class="footer__copyright">{footer_copyright}</p>
            </div>
        </div>
    </footer>

    <!-- Scripts -->
    <script src="{asset_prefix}js/main.js"></script>
</body>
</html>"##,
        lang = locale.code,
        analytics = analytics,
        title = title,
        description = description,
        keywords = keywords,
        author = author,
        canonical_url = canonical_url,
        hreflang = hreflang,
        og_image_url = og_image_url,
        app_name = app_name,
        og = og,
        app_store_id = meta.app_store_id,
        icon_path = icon_path,
        asset_prefix = asset_prefix,
        json_ld = json_ld,
        nav_features = html_escape(&bundle.nav.features),
        nav_screenshots = html_escape(&bundle.nav.screenshots),
        nav_testimonials = nav_testimonials,
        nav_download = html_escape(&bundle.nav.download),
        nav_faq = nav_faq,
        short_code = locale.short_code(),
        lang_links = lang_links,
        hero_title = html_escape(&bundle.hero.title),
        hero_description = html_escape(&bundle.hero.description),
        app_store_url = app_store_url,
        badge = badge,
        badge_fallback = badge_fallback,
        download_alt = download_alt,
        hero_rating = hero_rating,
        features_title = html_escape(&bundle.features.section_title),
        features_subtitle = html_escape(&bundle.features.section_subtitle),
        features = features,
        screenshots_title = html_escape(&bundle.screenshots.section_title),
        screenshots_subtitle = html_escape(&bundle.screenshots.section_subtitle),
        screenshots = screenshots,
        testimonials_section = testimonials_section,
        download_title = html_escape(&bundle.download.title),
        download_description = html_escape(&bundle.download.description),
        download_platforms = html_escape(&bundle.download.platforms),
        faq_section = faq_section,
        privacy_title = html_escape(&bundle.privacy.title),
        privacy_description = html_escape(&bundle.privacy.description),
        privacy_link = html_escape(&bundle.privacy.link_label),
        footer_app_store = html_escape(&bundle.footer.app_store),
        footer_privacy = html_escape(&bundle.footer.privacy_policy),
        footer_terms = html_escape(&bundle.footer.terms_of_service),
        footer_copyright = html_escape(&bundle.footer.copyright),
    ))
}

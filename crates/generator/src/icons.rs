/// Inline SVG icon for a feature card, selected by the bundle entry's
/// `icon` key. Unknown keys fall back to the clock icon by design.
pub fn feature_icon(key: &str) -> &'static str {
    match key {
        "chart" => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <line x1="18" y1="20" x2="18" y2="10"></line>
                <line x1="12" y1="20" x2="12" y2="4"></line>
                <line x1="6" y1="20" x2="6" y2="14"></line>
            </svg>"#
        }
        "map" => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <polygon points="1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6"></polygon>
                <line x1="8" y1="2" x2="8" y2="18"></line>
                <line x1="16" y1="6" x2="16" y2="22"></line>
            </svg>"#
        }
        "shield" => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"></path>
            </svg>"#
        }
        // "clock" and anything unrecognized
        _ => {
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10"></circle>
                <polyline points="12 6 12 12 16 14"></polyline>
            </svg>"#
        }
    }
}

/// Accent color class for a feature card, selected by the bundle entry's
/// `id`. Unknown ids fall back to blue by design.
pub fn feature_color(id: &str) -> &'static str {
    match id {
        "timeline" => "blue",
        "statistics" => "green",
        "map" => "purple",
        "privacy" => "yellow",
        _ => "blue",
    }
}

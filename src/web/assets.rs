//! Stylesheet and script served from the binary.

use axum::http::header;
use axum::response::IntoResponse;

pub const SITE_CSS: &str = include_str!("static/site.css");
pub const SITE_JS: &str = include_str!("static/site.js");

const CACHE_CONTROL: &str = "public, max-age=3600";

/// GET /static/site.css
pub async fn site_css() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        SITE_CSS,
    )
}

/// GET /static/site.js
pub async fn site_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        SITE_JS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::pages::layout::COOKIE_CONSENT_KEY;
    use crate::web::routes::SUBMIT_FORM_PATH;

    #[test]
    fn script_targets_the_rendered_markup() {
        assert!(SITE_JS.contains("data-cookie-accept"));
        assert!(SITE_JS.contains("data-storage-key"));
        assert!(SITE_JS.contains(".submission-form"));
        assert!(SITE_JS.contains("#reset-password-form"));
        // Key and path are read from the markup, not hardcoded.
        assert!(!SITE_JS.contains(COOKIE_CONSENT_KEY));
        assert!(!SITE_JS.contains(SUBMIT_FORM_PATH));
    }
}

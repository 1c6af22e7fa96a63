use crate::web::pages::layout::{page, section, CONTACT_EMAIL, SITE_NAME};
use axum::http::StatusCode;
use maud::{html, Markup};

const LAST_UPDATED: &str = "January 2025";

fn legal_page(title: &str, description: &str, sections: &[(&str, &str)]) -> Markup {
    page(
        &format!("{} | {}", title, SITE_NAME),
        description,
        html! {
            article class="prose" {
                h1 { (title) }
                p class="muted" { "Last updated: " (LAST_UPDATED) }
                @for (heading, body) in sections {
                    h2 { (heading) }
                    p { (body) }
                }
                h2 { "Contact" }
                p {
                    "Questions about this page can be sent to "
                    a href=(format!("mailto:{}", CONTACT_EMAIL)) { (CONTACT_EMAIL) }
                    "."
                }
            }
        },
    )
}

/// GET /about
pub async fn about_page() -> Markup {
    page(
        "About | VanguardHive",
        "Who we are and how we build AI products.",
        html! {
            section class="hero" {
                h1 { "About " (SITE_NAME) }
                p class="subtitle" { "A hive of builders applying AI to creative and professional work." }
            }
            (section("mission", "Our mission", None, html! {
                p {
                    "We take research-grade AI and shape it into tools people can use every day, "
                    "starting with the professions we know best: law, music and creative production."
                }
            }))
            (section("approach", "How we work", None, html! {
                div class="grid" {
                    div class="card" {
                        h3 { "Small, focused products" }
                        p { "Each product solves one problem well before it grows." }
                    }
                    div class="card" {
                        h3 { "Built with users" }
                        p { "Every launch starts as a beta with real practitioners." }
                    }
                    div class="card" {
                        h3 { "Privacy first" }
                        p { "Your data stays yours and is never sold." }
                    }
                }
            }))
            (section("join", "Join the Hive", Some("Interested in working with us?"), html! {
                a class="btn" href="/#contact" { "Contact us" }
            }))
        },
    )
}

/// GET /terms
pub async fn terms_page() -> Markup {
    legal_page(
        "Terms of Service",
        "Terms that govern the use of the VanguardHive website and products.",
        &[
            (
                "Acceptance",
                "By using this website you agree to these terms. If you do not agree, please do not use the site.",
            ),
            (
                "Beta products",
                "Products marked as beta are provided as they are, may change without notice and may be unavailable at times.",
            ),
            (
                "Intellectual property",
                "Site content, product names and logos belong to VanguardHive unless stated otherwise.",
            ),
            (
                "Liability",
                "VanguardHive is not liable for indirect damages arising from use of the site or its beta products.",
            ),
        ],
    )
}

/// GET /privacy
pub async fn privacy_page() -> Markup {
    legal_page(
        "Privacy Policy",
        "How VanguardHive collects and uses personal data.",
        &[
            (
                "Data we collect",
                "When you submit a form we receive your name, email address, company, phone number and message, as entered.",
            ),
            (
                "How we use it",
                "Submissions are forwarded to our team by email so we can reply. We do not sell personal data.",
            ),
            (
                "Cookies and local storage",
                "We store your cookie-consent choice in your browser's local storage. No advertising cookies are used.",
            ),
            (
                "Your rights",
                "You may ask us to access, correct or delete your data at any time by email.",
            ),
        ],
    )
}

/// Fallback for unknown paths.
pub async fn not_found_page() -> (StatusCode, Markup) {
    (
        StatusCode::NOT_FOUND,
        page(
            "Page not found | VanguardHive",
            "The page you are looking for does not exist.",
            html! {
                section class="hero" {
                    h1 { "404" }
                    p class="subtitle" { "Oops! Page not found." }
                    a class="btn" href="/" { "Return to home" }
                }
            },
        ),
    )
}

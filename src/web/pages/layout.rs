use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "VanguardHive";
pub const COOKIE_CONSENT_KEY: &str = "vanguardhive_cookie_consent";
pub const CONTACT_EMAIL: &str = "info@vanguardhive.com";

const NAV_LINKS: [(&str, &str); 6] = [
    ("/#projects", "Projects"),
    ("/about", "About"),
    ("/blog", "Blog"),
    ("/tehoria", "TehorIA"),
    ("/kairos-jurista", "KAIROS Jurista"),
    ("/#contact", "Contact"),
];

/// Wraps page content in the shared shell: head, nav, footer, cookie banner
/// and toast region.
pub fn page(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                link rel="stylesheet" href="/static/site.css";
                script src="/static/site.js" defer {}
            }
            body {
                (nav())
                main class="page" { (content) }
                (footer())
                (cookie_banner())
                div id="toasts" class="toasts" aria-live="polite" {}
            }
        }
    }
}

fn nav() -> Markup {
    html! {
        header class="nav" {
            a class="brand" href="/" { (SITE_NAME) }
            nav {
                @for (href, label) in NAV_LINKS {
                    a href=(href) { (label) }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            p { "© " (SITE_NAME) }
            p {
                a href="/terms" { "Terms of Service" }
                " · "
                a href="/privacy" { "Privacy Policy" }
                " · "
                a href=(format!("mailto:{}", CONTACT_EMAIL)) { (CONTACT_EMAIL) }
            }
        }
    }
}

/// Hidden until `site.js` finds no stored consent.
pub fn cookie_banner() -> Markup {
    html! {
        div id="cookie-consent" class="cookie-banner" role="dialog" hidden
            data-storage-key=(COOKIE_CONSENT_KEY) {
            p {
                "We use cookies and local storage to remember your preferences and improve the site. "
                "Read our "
                a href="/privacy" { "Privacy Policy" }
                "."
            }
            button type="button" class="btn btn-small" data-cookie-accept { "Accept" }
        }
    }
}

pub fn section(id: &str, title: &str, intro: Option<&str>, body: Markup) -> Markup {
    html! {
        section id=(id) class="section" {
            h2 { (title) }
            @if let Some(intro) = intro {
                p class="lead" { (intro) }
            }
            (body)
        }
    }
}

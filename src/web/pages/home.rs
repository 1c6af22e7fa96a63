use crate::web::pages::forms::contact_form;
use crate::web::pages::layout::{page, section, CONTACT_EMAIL, SITE_NAME};
use crate::web::pages::products::{product_card, PRODUCTS};
use maud::{html, Markup};

const VALUES: [&str; 4] = ["Creativity", "AI", "Disruption", "Hive"];

/// GET /
pub async fn home_page() -> Markup {
    page(
        "VanguardHive | AI products for creative and professional work",
        "VanguardHive builds AI products for lawyers, musicians and creative teams.",
        html! {
            section class="hero" {
                h1 { (SITE_NAME) }
                p class="subtitle" { "AI products for creative and professional work." }
                div class="hero-actions" {
                    a class="btn" href="#projects" { "Our projects" }
                    a class="btn btn-outline" href="#contact" { "Get in touch" }
                }
            }
            (section("projects", "Projects", Some("What we are building right now."), html! {
                div class="grid" {
                    @for product in &PRODUCTS {
                        (product_card(product))
                    }
                }
            }))
            (section("about", "About us", None, html! {
                p {
                    (SITE_NAME) " is a small studio that turns applied AI research into focused tools. "
                    a href="/about" { "Read more about us" } "."
                }
            }))
            (section("contact", "Contact us", Some("Ready to explore how AI can change your project? Write to us."), html! {
                div class="contact-grid" {
                    (contact_form(None))
                    aside class="card" {
                        h3 { "Contact information" }
                        p { a href=(format!("mailto:{}", CONTACT_EMAIL)) { (CONTACT_EMAIL) } }
                        h3 { "Join the Hive" }
                        div class="tags" {
                            @for value in VALUES {
                                span class="badge" { (value) }
                            }
                        }
                    }
                }
            }))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn home_lists_all_products_and_the_contact_form() {
        let html = home_page().await.into_string();
        for product in &PRODUCTS {
            assert!(html.contains(product.name));
        }
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("submission-form"));
        assert!(html.contains("cookie-consent"));
    }
}

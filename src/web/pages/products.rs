//! Product landing pages.

use crate::web::pages::forms::{contact_form, kairos_beta_form, tehoria_beta_form, KAIROS_CREATIVE_INTEREST};
use crate::web::pages::layout::{page, section, SITE_NAME};
use maud::{html, Markup};

pub struct Product {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub cta: &'static str,
    pub features: &'static [(&'static str, &'static str)],
}

pub static KAIROS_CREATIVE: Product = Product {
    slug: "kairos-creative",
    name: "Kairos Creative",
    tagline: "An AI partner for creative teams",
    description: "Brainstorm, draft and iterate on campaigns with an assistant that learns your brand voice.",
    status: "Early access",
    cta: "Discover Kairos Creative",
    features: &[
        ("Brand memory", "Keeps tone, style and past decisions at hand."),
        ("Idea sprints", "Generates and ranks concepts in minutes."),
        ("Team workspace", "Shares drafts and feedback in one place."),
    ],
};

pub static KAIROS_JURISTA: Product = Product {
    slug: "kairos-jurista",
    name: "KAIROS Jurista",
    tagline: "Legal research and drafting, accelerated",
    description: "Search case law, summarize rulings and prepare first drafts with an assistant built for legal professionals.",
    status: "Private beta",
    cta: "Request beta access",
    features: &[
        ("Case-law search", "Finds relevant rulings in natural language."),
        ("Drafting", "Produces structured first drafts you can refine."),
        ("Confidentiality", "Client documents never train shared models."),
    ],
};

pub static TEHORIA: Product = Product {
    slug: "tehoria",
    name: "TehorIA",
    tagline: "Music theory, explained by AI",
    description: "Ask questions about harmony, analyze progressions and practice with an AI tutor for musicians.",
    status: "Beta",
    cta: "Join the beta",
    features: &[
        ("Harmony analysis", "Breaks down progressions and voicings."),
        ("Ear training", "Adaptive exercises for every level."),
        ("Composition help", "Suggests continuations in your style."),
    ],
};

/// Listed alphabetically, as on the home page.
pub static PRODUCTS: [&Product; 3] = [&KAIROS_CREATIVE, &KAIROS_JURISTA, &TEHORIA];

pub fn product_card(product: &Product) -> Markup {
    html! {
        article class="card" {
            div class="card-header" {
                h3 { (product.name) }
                span class="badge" { (product.status) }
            }
            p class="muted" { (product.tagline) }
            p { (product.description) }
            a class="btn-link" href=(format!("/{}", product.slug)) { (product.cta) " →" }
        }
    }
}

fn landing(product: &Product, form_title: &str, form: Markup) -> Markup {
    let title = format!("{} | {}", product.name, SITE_NAME);
    page(
        &title,
        product.tagline,
        html! {
            section class="hero" {
                span class="pretitle" { (product.status) }
                h1 { (product.name) }
                p class="subtitle" { (product.tagline) }
                p class="lead" { (product.description) }
                a class="btn" href="#signup" { (product.cta) }
            }
            (section("features", "Features", None, html! {
                div class="grid" {
                    @for (name, detail) in product.features {
                        div class="card" {
                            h3 { (name) }
                            p { (detail) }
                        }
                    }
                }
            }))
            (section("signup", form_title, None, form))
        },
    )
}

/// GET /tehoria
pub async fn tehoria_page() -> Markup {
    landing(&TEHORIA, "Request beta access", tehoria_beta_form())
}

/// GET /kairos-jurista
pub async fn kairos_jurista_page() -> Markup {
    landing(&KAIROS_JURISTA, "Join the KAIROS Jurista beta", kairos_beta_form())
}

/// GET /kairos-creative
pub async fn kairos_creative_page() -> Markup {
    landing(
        &KAIROS_CREATIVE,
        "Tell us about your team",
        contact_form(Some(KAIROS_CREATIVE_INTEREST)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_are_listed_alphabetically() {
        let names: Vec<&str> = PRODUCTS.iter().map(|p| p.name).collect();
        let mut sorted = names.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn landing_pages_embed_their_forms() {
        let tehoria = tehoria_page().await.into_string();
        assert!(tehoria.contains("<h1>TehorIA</h1>"));
        assert!(tehoria.contains(r#"data-form-type="tehoria-beta""#));

        let creative = kairos_creative_page().await.into_string();
        assert!(creative.contains(r#"data-form-type="contact""#));
        assert!(creative.contains(KAIROS_CREATIVE_INTEREST));
    }
}

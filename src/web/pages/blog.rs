//! Blog index and post pages backed by the `BlogStore`.

use crate::domain::model::BlogPost;
use crate::web::pages::layout::{page, SITE_NAME};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

pub const EMPTY_MESSAGE: &str = "No posts published yet.";
pub const NOT_FOUND_MESSAGE: &str = "Post not found";

/// Empty for unpublished rows.
fn published(post: &BlogPost) -> Markup {
    html! {
        @if let (Some(raw), Some(date)) = (&post.published_at, post.published_on()) {
            time datetime=(raw) { (date) }
        }
    }
}

fn post_card(post: &BlogPost) -> Markup {
    let href = format!("/blog/{}", post.slug);
    html! {
        article class="card post-card" {
            @if let Some(image) = &post.image_url {
                img class="post-image" src=(image) alt=(post.title) loading="lazy";
            }
            div class="card-header" {
                (published(post))
                @if let Some(tag) = &post.project_tag {
                    span class="badge" { (tag) }
                }
            }
            h2 { a href=(href) { (post.title) } }
            p { (post.summary.as_deref().unwrap_or_default()) }
            a class="btn-link" href=(href) { "Read more →" }
        }
    }
}

fn blog_shell(title: &str, content: Markup) -> Markup {
    page(
        &format!("{} | {}", title, SITE_NAME),
        "News and notes from the VanguardHive team.",
        content,
    )
}

/// GET /blog
pub async fn blog_page(State(state): State<AppState>) -> Markup {
    let content = match state.blog.list_posts().await {
        Ok(posts) => html! {
            h1 { "Blog" }
            @if posts.is_empty() {
                p class="muted empty-state" { (EMPTY_MESSAGE) }
            } @else {
                div class="post-list" {
                    @for post in &posts {
                        (post_card(post))
                    }
                }
            }
        },
        Err(e) => {
            tracing::error!("Failed to load blog posts: {}", e);
            html! {
                h1 { "Blog" }
                p class="error-state" { "Could not load blog posts: " (e) }
            }
        }
    };
    blog_shell("Blog", content)
}

fn post_view(post: &BlogPost) -> Markup {
    html! {
        article class="prose post" {
            a class="btn-link" href="/blog" { "← Back to blog" }
            @if let Some(image) = &post.image_url {
                figure {
                    img class="post-image" src=(image) alt=(post.title);
                    @if let Some(text) = &post.image_attribution_text {
                        figcaption {
                            @match &post.image_attribution_url {
                                Some(url) => {
                                    a href=(url) target="_blank" rel="noopener noreferrer" { (text) }
                                }
                                None => { (text) }
                            }
                        }
                    }
                }
            }
            h1 { (post.title) }
            p class="muted" {
                (published(post))
                @if let Some(tag) = &post.project_tag {
                    " · " span class="badge" { (tag) }
                }
            }
            @if let Some(summary) = &post.summary {
                p class="lead" { (summary) }
            }
            @if let Some(original) = &post.original_url {
                a class="btn btn-outline" href=(original) target="_blank" rel="noopener noreferrer" {
                    "View original"
                }
            }
        }
    }
}

/// GET /blog/{slug}
pub async fn blog_post_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.blog.find_post(&slug).await {
        Ok(Some(post)) => blog_shell(&post.title, post_view(&post)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            blog_shell(
                NOT_FOUND_MESSAGE,
                html! {
                    h1 { (NOT_FOUND_MESSAGE) }
                    a class="btn-link" href="/blog" { "← Back to blog" }
                },
            ),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to load blog post {}: {}", slug, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                blog_shell(
                    "Blog",
                    html! {
                        p class="error-state" { "Could not load blog post: " (e) }
                        a class="btn-link" href="/blog" { "← Back to blog" }
                    },
                ),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(attribution_url: Option<&str>) -> BlogPost {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "created_at": "2024-05-01T10:00:00+00:00",
            "published_at": "2024-05-03T09:30:00+00:00",
            "title": "Launching <TehorIA>",
            "slug": "launching-tehoria",
            "summary": "Our music theory tutor opens its beta.",
            "project_tag": "TehorIA",
            "image_url": "https://img.example.com/cover.png",
            "image_attribution_text": "Photo by Ana",
            "image_attribution_url": attribution_url,
        }))
        .unwrap()
    }

    #[test]
    fn card_links_to_the_post_and_escapes_the_title() {
        let html = post_card(&post(None)).into_string();
        assert!(html.contains(r#"href="/blog/launching-tehoria""#));
        assert!(html.contains("Launching &lt;TehorIA&gt;"));
        assert!(html.contains("May 3, 2024"));
    }

    #[test]
    fn card_renders_without_summary_or_date() {
        let mut draft = post(None);
        draft.summary = None;
        draft.published_at = None;
        let html = post_card(&draft).into_string();
        assert!(html.contains("<p></p>"));
        assert!(!html.contains("<time"));
    }

    #[test]
    fn attribution_is_linked_only_with_a_url() {
        let linked = post_view(&post(Some("https://ana.example.com"))).into_string();
        assert!(linked.contains(r#"href="https://ana.example.com""#));

        let plain = post_view(&post(None)).into_string();
        assert!(plain.contains("<figcaption>Photo by Ana</figcaption>"));
        assert!(!plain.contains("View original"));
    }
}

//! Axum router for the site pages and the form endpoint.

use crate::core::FormReply;
use crate::web::pages::{blog, home, info, products, reset_password};
use crate::web::{assets, state::AppState};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;

pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";

pub fn router() -> Router<AppState> {
    Router::new()
        // Landing and informational pages
        .route("/", get(home::home_page))
        .route("/tehoria", get(products::tehoria_page))
        .route("/kairos-jurista", get(products::kairos_jurista_page))
        .route("/kairos-creative", get(products::kairos_creative_page))
        .route(
            "/kairos-creative/reset-password",
            get(reset_password::reset_password_page),
        )
        .route("/about", get(info::about_page))
        .route("/terms", get(info::terms_page))
        .route("/privacy", get(info::privacy_page))
        // Blog
        .route("/blog", get(blog::blog_page))
        .route("/blog/{slug}", get(blog::blog_post_page))
        // Forms; every method is accepted so non-POST gets the JSON 405.
        .route(SUBMIT_FORM_PATH, any(submit_form))
        // Assets and probes
        .route("/static/site.css", get(assets::site_css))
        .route("/static/site.js", get(assets::site_js))
        .route("/healthz", get(healthz))
        .fallback(info::not_found_page)
}

/// ANY /api/submit-form
pub async fn submit_form(State(state): State<AppState>, method: Method, body: Bytes) -> FormReply {
    state.submissions.handle(&method, &body).await
}

/// GET /healthz
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

impl IntoResponse for FormReply {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        if let Some(allow) = self.allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}

//! Kairos Creative password reset. The form posts straight to the Kairos
//! backend from the browser; this server only renders it.

use crate::web::pages::layout::page;
use crate::web::state::AppState;
use axum::extract::{Query, State};
use maud::{html, Markup};
use serde::Deserialize;

pub const MISSING_TOKEN_MESSAGE: &str =
    "No reset token found in URL. Please use the link from your email.";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub struct ResetQuery {
    pub token: Option<String>,
}

/// GET /kairos-creative/reset-password?token=...
pub async fn reset_password_page(
    State(state): State<AppState>,
    Query(query): Query<ResetQuery>,
) -> Markup {
    let token = query.token.filter(|t| !t.trim().is_empty());
    let endpoint = format!(
        "{}/reset-password",
        state.kairos.backend_url.trim_end_matches('/')
    );

    page(
        "Reset password | Kairos Creative",
        "Choose a new password for your Kairos Creative account.",
        html! {
            section class="narrow" {
                h1 { "Reset your password" }
                @match token {
                    None => {
                        p class="error-state" { (MISSING_TOKEN_MESSAGE) }
                    }
                    Some(token) => {
                        form id="reset-password-form" class="card" novalidate
                            data-token=(token)
                            data-backend-url=(endpoint)
                            data-redirect-url=(state.kairos.app_url) {
                            div class="field" {
                                label for="new-password" { "New password" }
                                input id="new-password" name="new_password" type="password"
                                    autocomplete="new-password" required minlength=(MIN_PASSWORD_LEN);
                            }
                            div class="field" {
                                label for="confirm-password" { "Confirm password" }
                                input id="confirm-password" name="confirm_password" type="password"
                                    autocomplete="new-password" required minlength=(MIN_PASSWORD_LEN);
                            }
                            p class="form-status" role="status" {}
                            button type="submit" class="btn btn-wide"
                                data-idle-label="Reset password" data-busy-label="Resetting..." {
                                "Reset password"
                            }
                        }
                    }
                }
            }
        },
    )
}

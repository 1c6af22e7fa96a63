use crate::domain::model::{FormType, MailSettings, OutgoingEmail, ValidSubmission};
use maud::{html, Markup, DOCTYPE};

pub fn subject_for(submission: &ValidSubmission) -> String {
    let name = submission.display_name();
    match submission.form_type {
        FormType::Contact => match &submission.project {
            Some(project) => format!("New contact form submission from {} - {}", name, project),
            None => format!("New contact form submission from {}", name),
        },
        FormType::TehoriaBeta => format!("New TehorIA beta request from {}", name),
        FormType::KairosBeta => format!(
            "New KAIROS Jurista beta request from {} ({})",
            name,
            submission.company.as_deref().unwrap_or("no company")
        ),
    }
}

fn heading_for(form_type: FormType) -> &'static str {
    match form_type {
        FormType::Contact => "New contact form submission",
        FormType::TehoriaBeta => "New TehorIA beta access request",
        FormType::KairosBeta => "New KAIROS Jurista beta access request",
    }
}

/// Label/value rows in display order; absent optional fields are skipped.
fn fields(submission: &ValidSubmission) -> Vec<(&'static str, &str)> {
    let mut rows = vec![
        ("Name", submission.display_name()),
        ("Email", submission.email.as_str()),
    ];
    let optional = [
        ("Company", &submission.company),
        ("Phone", &submission.phone),
        ("Project", &submission.project),
    ];
    rows.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.as_deref().map(|v| (label, v))),
    );
    rows
}

fn html_body(submission: &ValidSubmission) -> Markup {
    html! {
        (DOCTYPE)
        html {
            body style="font-family: sans-serif; color: #111;" {
                h2 { (heading_for(submission.form_type)) }
                table cellpadding="4" {
                    @for (label, value) in fields(submission) {
                        tr {
                            td { strong { (label) ":" } }
                            td { (value) }
                        }
                    }
                }
                @if let Some(message) = &submission.message {
                    h3 { "Message" }
                    p style="white-space: pre-wrap;" { (message) }
                }
                hr;
                p style="font-size: 12px; color: #666;" {
                    "Form type: " (submission.form_type.as_str())
                }
            }
        }
    }
}

fn text_body(submission: &ValidSubmission) -> String {
    let mut text = format!("{}\n\n", heading_for(submission.form_type));
    for (label, value) in fields(submission) {
        text.push_str(&format!("{}: {}\n", label, value));
    }
    if let Some(message) = &submission.message {
        text.push_str(&format!("\nMessage:\n{}\n", message));
    }
    text.push_str(&format!("\nForm type: {}\n", submission.form_type));
    text
}

pub fn compose_email(submission: &ValidSubmission, settings: &MailSettings) -> OutgoingEmail {
    OutgoingEmail {
        from: settings.from_email.clone(),
        to: settings.notification_email.clone(),
        subject: subject_for(submission),
        html: html_body(submission).into_string(),
        text: text_body(submission),
        reply_to: submission.email.clone(),
    }
}

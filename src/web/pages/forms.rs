//! Contact and beta-request forms. Client-side rules mirror
//! `ContactSubmission`'s validation; `site.js` posts them as JSON.

use crate::domain::model::{
    FormType, MAX_COMPANY_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MIN_COMPANY_LEN, MIN_MESSAGE_LEN,
    MIN_NAME_LEN,
};
use crate::web::routes::SUBMIT_FORM_PATH;
use maud::{html, Markup};

pub const KAIROS_CREATIVE_INTEREST: &str = "Kairos Creative Interest";

const PROJECT_OPTIONS: [(&str, &str); 5] = [
    ("TehorIA Beta", "TehorIA (Beta)"),
    ("Kairos Jurista Beta", "KAIROS Jurista (Beta)"),
    ("General Inquiry", "General inquiry"),
    ("Partnership", "Partnership proposal"),
    ("Other", "Other"),
];

struct Toast {
    success_title: &'static str,
    success_description: &'static str,
    error_title: &'static str,
}

fn toast_for(form_type: FormType) -> Toast {
    match form_type {
        FormType::Contact => Toast {
            success_title: "Message sent!",
            success_description: "Thanks for reaching out. We'll get back to you soon.",
            error_title: "Error",
        },
        FormType::TehoriaBeta => Toast {
            success_title: "You're on the list!",
            success_description: "Thanks for your interest in TehorIA. We'll be in touch about beta access.",
            error_title: "Request failed",
        },
        FormType::KairosBeta => Toast {
            success_title: "Request received!",
            success_description: "Thanks for your interest in KAIROS Jurista. We'll contact you shortly.",
            error_title: "Request failed",
        },
    }
}

fn field(name: &str, label: &str, input: Markup) -> Markup {
    html! {
        div class="field" {
            label for=(format!("{}-field", name)) { (label) }
            (input)
            p class="field-error" data-error-for=(name) {}
        }
    }
}

fn name_field() -> Markup {
    field(
        "name",
        "Full name",
        html! {
            input id="name-field" name="name" type="text" placeholder="Your name" required
                minlength=(MIN_NAME_LEN) maxlength=(MAX_NAME_LEN);
        },
    )
}

fn email_field() -> Markup {
    field(
        "email",
        "Email",
        html! {
            input id="email-field" name="email" type="email" placeholder="you@example.com" required;
        },
    )
}

fn message_field(max: usize) -> Markup {
    field(
        "message",
        "Message",
        html! {
            textarea id="message-field" name="message" rows="6" placeholder="Write your message here..."
                required minlength=(MIN_MESSAGE_LEN) maxlength=(max) {}
        },
    )
}

fn form_shell(form_type: FormType, fields: Markup) -> Markup {
    let toast = toast_for(form_type);
    html! {
        form class="submission-form" action=(SUBMIT_FORM_PATH) method="post" novalidate
            data-form-type=(form_type.as_str())
            data-success-title=(toast.success_title)
            data-success-description=(toast.success_description)
            data-error-title=(toast.error_title) {
            (fields)
            button type="submit" class="btn btn-wide" data-idle-label="Send" data-busy-label="Sending..." {
                "Send"
            }
        }
    }
}

/// General contact form; `default_project` preselects (and, for Kairos
/// Creative, adds) an option in the subject list.
pub fn contact_form(default_project: Option<&str>) -> Markup {
    let selected = default_project.unwrap_or("");
    let fields = html! {
        (name_field())
        (email_field())
        (field("project", "Subject / project of interest (optional)", html! {
            select id="project-field" name="project" {
                option value="" selected[selected.is_empty()] { "Select a subject or project" }
                @if selected == KAIROS_CREATIVE_INTEREST {
                    option value=(KAIROS_CREATIVE_INTEREST) selected { "Kairos Creative" }
                }
                @for (value, label) in PROJECT_OPTIONS {
                    option value=(value) selected[value == selected] { (label) }
                }
            }
        }))
        (message_field(FormType::Contact.max_message_len()))
    };
    form_shell(FormType::Contact, fields)
}

pub fn tehoria_beta_form() -> Markup {
    let fields = html! {
        (name_field())
        (email_field())
        (message_field(FormType::TehoriaBeta.max_message_len()))
    };
    form_shell(FormType::TehoriaBeta, fields)
}

pub fn kairos_beta_form() -> Markup {
    let fields = html! {
        (name_field())
        (field("company", "Firm / company", html! {
            input id="company-field" name="company" type="text" placeholder="Your firm" required
                minlength=(MIN_COMPANY_LEN) maxlength=(MAX_COMPANY_LEN);
        }))
        (email_field())
        (field("phone", "Phone (optional)", html! {
            input id="phone-field" name="phone" type="tel" placeholder="+34 600 000 000"
                maxlength=(MAX_PHONE_LEN);
        }))
        (message_field(FormType::KairosBeta.max_message_len()))
    };
    form_shell(FormType::KairosBeta, fields)
}

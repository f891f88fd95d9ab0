use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    Form,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use miqass_cms::{types::ContactContent, ContentResult, PageOp};
use miqass_core::{
    contact::{ContactSubmission, ValidationReport},
    translations::text,
    Locale,
};

use crate::{
    render::render_page,
    view::{filled, text_or, Chrome, Notice, PageContext, SeoView},
};

use super::{AppState, PathLocale};

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    token: String,
}

#[derive(Debug, Serialize)]
struct InfoView {
    address_label: &'static str,
    address: String,
    phone_label: &'static str,
    phone: String,
    email_label: &'static str,
    email: String,
}

#[derive(Debug, Serialize)]
struct FormView {
    action: String,
    token: String,
    name_label: &'static str,
    name: String,
    name_error: Option<&'static str>,
    email_label: &'static str,
    email: String,
    email_error: Option<&'static str>,
    phone_label: &'static str,
    phone: String,
    phone_error: Option<&'static str>,
    message_label: &'static str,
    message: String,
    message_error: Option<&'static str>,
    submit_label: &'static str,
}

#[derive(Debug, Serialize)]
struct ContactView {
    title: String,
    description: String,
    info: InfoView,
    form: FormView,
    notice: Option<Notice>,
}

pub async fn page(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    uri: Uri,
) -> Response {
    let content = match state.cms.contact_page(locale).await {
        ContentResult::Success { data } => Some(data),
        ContentResult::Failure { .. } => None,
    };
    let view = ContactView::build(
        locale,
        content.as_ref(),
        &ContactSubmission::default(),
        Uuid::new_v4().to_string(),
        None,
        None,
    );
    respond(&state, locale, uri.path(), &view, StatusCode::OK)
}

/// Handles a form post. Validation happens before anything leaves the
/// server; the content API sees at most one send per submission token.
pub async fn submit(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    uri: Uri,
    Form(form): Form<ContactForm>,
) -> Response {
    let submission = ContactSubmission {
        name: form.name,
        email: form.email,
        phone: form.phone,
        message: form.message,
    }
    .trimmed();

    let report = submission.validate();
    if !report.is_clean() {
        // Invalid input never reaches the content API; the token is kept so
        // the corrected resubmission still counts as the same attempt.
        let view = ContactView::build(
            locale,
            None,
            &submission,
            form.token,
            Some(&report),
            None,
        );
        return respond(
            &state,
            locale,
            uri.path(),
            &view,
            StatusCode::UNPROCESSABLE_ENTITY,
        );
    }

    if !state.guard.register(&form.token).await {
        tracing::info!(locale = %locale, "duplicate contact submission suppressed");
        let view = ContactView::build(
            locale,
            None,
            &ContactSubmission::default(),
            Uuid::new_v4().to_string(),
            None,
            Some(Notice::success(text(locale, "contact.notice.success"))),
        );
        return respond(&state, locale, uri.path(), &view, StatusCode::OK);
    }

    let (values, notice) = match state.cms.submit_contact(locale, &submission).await {
        ContentResult::Success { data } => {
            let message = filled(data.message.as_ref()).map_or_else(
                || text(locale, "contact.notice.success").to_string(),
                ToOwned::to_owned,
            );
            (ContactSubmission::default(), Notice::success(message))
        }
        ContentResult::Failure { message } => {
            // The static wire message is English-only; swap it for the
            // localized notice unless the API supplied its own words.
            let notice = if message == PageOp::ContactSubmit.fallback_message() {
                Notice::failure(text(locale, "contact.notice.failure"))
            } else {
                Notice::failure(message)
            };
            (submission, notice)
        }
    };

    let view = ContactView::build(
        locale,
        None,
        &values,
        Uuid::new_v4().to_string(),
        None,
        Some(notice),
    );
    respond(&state, locale, uri.path(), &view, StatusCode::OK)
}

fn respond(
    state: &AppState,
    locale: Locale,
    path: &str,
    view: &ContactView,
    status: StatusCode,
) -> Response {
    let chrome = Chrome::build(locale, path);
    let seo = SeoView::titled(text(locale, "contact.title"));
    render_page(
        &state.templates,
        "contact.html",
        status,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: view,
        },
    )
}

impl ContactView {
    fn build(
        locale: Locale,
        content: Option<&ContactContent>,
        values: &ContactSubmission,
        token: String,
        report: Option<&ValidationReport>,
        notice: Option<Notice>,
    ) -> Self {
        let fallback = ContactContent::default();
        let content = content.unwrap_or(&fallback);

        Self {
            title: text_or(content.title.as_ref(), text(locale, "contact.title")),
            description: text_or(
                content.description.as_ref(),
                text(locale, "contact.description"),
            ),
            info: InfoView {
                address_label: text(locale, "contact.info.address"),
                address: text_or(content.address.as_ref(), "-"),
                phone_label: text(locale, "contact.info.phone"),
                phone: text_or(content.phone.as_ref(), "-"),
                email_label: text(locale, "contact.info.email"),
                email: text_or(content.email.as_ref(), "-"),
            },
            form: FormView::build(locale, values, token, report),
            notice,
        }
    }
}

impl FormView {
    fn build(
        locale: Locale,
        values: &ContactSubmission,
        token: String,
        report: Option<&ValidationReport>,
    ) -> Self {
        let error = |key: &'static str, failed: bool| failed.then(|| text(locale, key));

        Self {
            action: format!("/{}/contact", locale.code()),
            token,
            name_label: text(locale, "contact.form.name"),
            name: values.name.clone(),
            name_error: error(
                "contact.error.name",
                report.is_some_and(|r| r.name.is_some()),
            ),
            email_label: text(locale, "contact.form.email"),
            email: values.email.clone(),
            email_error: error(
                "contact.error.email",
                report.is_some_and(|r| r.email.is_some()),
            ),
            phone_label: text(locale, "contact.form.phone"),
            phone: values.phone.clone(),
            phone_error: error(
                "contact.error.phone",
                report.is_some_and(|r| r.phone.is_some()),
            ),
            message_label: text(locale, "contact.form.message"),
            message: values.message.clone(),
            message_error: error(
                "contact.error.message",
                report.is_some_and(|r| r.message.is_some()),
            ),
            submit_label: text(locale, "contact.form.submit"),
        }
    }
}

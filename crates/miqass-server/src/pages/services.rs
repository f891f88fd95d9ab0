use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
};
use serde::Serialize;

use miqass_cms::{types::ServicesContent, ContentResult};
use miqass_core::{catalog, translations::text, Locale};

use crate::{
    render::render_page,
    view::{text_or, Chrome, PageContext, SeoView, ServiceCard},
};

use super::{AppState, PathLocale};

#[derive(Debug, Serialize)]
struct ServicesView {
    title: String,
    description: String,
    services: Vec<ServiceCard>,
}

pub async fn page(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    uri: Uri,
) -> Response {
    let (view, seo) = match state.cms.services(locale).await {
        ContentResult::Success { data } => {
            let seo = SeoView::from_meta(data.seo.as_ref(), text(locale, "services.title"));
            (ServicesView::from_content(locale, &data), seo)
        }
        ContentResult::Failure { .. } => (
            ServicesView::fallback(locale),
            SeoView::titled(text(locale, "services.title")),
        ),
    };

    let chrome = Chrome::build(locale, uri.path());
    render_page(
        &state.templates,
        "services.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

impl ServicesView {
    fn from_content(locale: Locale, content: &ServicesContent) -> Self {
        Self {
            title: text_or(content.title.as_ref(), text(locale, "services.title")),
            description: text_or(
                content.description.as_ref(),
                text(locale, "services.description"),
            ),
            services: content
                .services
                .iter()
                .map(|item| ServiceCard::from_item(locale, item))
                .collect(),
        }
    }

    fn fallback(locale: Locale) -> Self {
        Self {
            title: text(locale, "services.title").to_string(),
            description: text(locale, "services.description").to_string(),
            services: catalog::SERVICES
                .iter()
                .map(|service| ServiceCard::from_catalog(locale, service))
                .collect(),
        }
    }
}

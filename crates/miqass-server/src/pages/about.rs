use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
};
use serde::Serialize;

use miqass_cms::{types::AboutContent, ContentResult};
use miqass_core::{translations::text, Locale};

use crate::{
    render::render_page,
    view::{filled, rich_or, text_or, Chrome, PageContext, SeoView},
};

use super::{AppState, PathLocale};

#[derive(Debug, Serialize)]
struct AboutView {
    hero_title: String,
    hero_body_html: String,
    mission_title: String,
    mission_body_html: String,
    vision_title: String,
    vision_body_html: String,
    image: Option<String>,
}

pub async fn page(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    uri: Uri,
) -> Response {
    let (view, seo) = match state.cms.about(locale).await {
        ContentResult::Success { data } => {
            let seo = SeoView::from_meta(data.seo.as_ref(), text(locale, "about.hero.title"));
            (AboutView::from_content(locale, &data), seo)
        }
        ContentResult::Failure { .. } => (
            AboutView::fallback(locale),
            SeoView::titled(text(locale, "about.hero.title")),
        ),
    };

    let chrome = Chrome::build(locale, uri.path());
    render_page(
        &state.templates,
        "about.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

impl AboutView {
    fn from_content(locale: Locale, content: &AboutContent) -> Self {
        Self {
            hero_title: text_or(content.hero_title.as_ref(), text(locale, "about.hero.title")),
            hero_body_html: rich_or(content.hero_body.as_ref(), text(locale, "about.hero.body")),
            mission_title: text_or(
                content.mission_title.as_ref(),
                text(locale, "about.mission.title"),
            ),
            mission_body_html: rich_or(
                content.mission_body.as_ref(),
                text(locale, "about.mission.body"),
            ),
            vision_title: text_or(
                content.vision_title.as_ref(),
                text(locale, "about.vision.title"),
            ),
            vision_body_html: rich_or(
                content.vision_body.as_ref(),
                text(locale, "about.vision.body"),
            ),
            image: filled(content.image.as_ref()).map(ToOwned::to_owned),
        }
    }

    fn fallback(locale: Locale) -> Self {
        Self::from_content(locale, &AboutContent::default())
    }
}

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
};
use serde::Serialize;

use miqass_cms::{
    types::{HomeContent, Slide},
    ContentResult,
};
use miqass_core::{catalog, translations::text, Locale};

use crate::{
    render::render_page,
    view::{filled, rich_or, text_or, Chrome, PageContext, ProductCard, SeoView, ServiceCard},
};

use super::{AppState, PathLocale};

/// Products shown in the home teaser grid before the view-all link.
const TEASER_PRODUCTS: usize = 6;

#[derive(Debug, Serialize)]
struct SlideView {
    title: String,
    subtitle: String,
    image: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Serialize)]
struct PartnerView {
    name: String,
    logo: String,
}

#[derive(Debug, Serialize)]
struct HomeView {
    slides: Vec<SlideView>,
    about_title: String,
    about_body_html: String,
    about_image: Option<String>,
    services_title: String,
    services: Vec<ServiceCard>,
    products_title: String,
    products: Vec<ProductCard>,
    partners_title: String,
    partners: Vec<PartnerView>,
    view_all_label: &'static str,
    details_label: &'static str,
    products_href: String,
}

pub async fn page(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    uri: Uri,
) -> Response {
    let result = state.cms.home(locale).await;
    let view = HomeView::build(locale, result);
    let chrome = Chrome::build(locale, uri.path());
    let seo = SeoView::titled(text(locale, "site.tagline"));
    render_page(
        &state.templates,
        "home.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

impl HomeView {
    fn build(locale: Locale, result: ContentResult<HomeContent>) -> Self {
        match result {
            ContentResult::Success { data } => Self::from_content(locale, &data),
            ContentResult::Failure { .. } => Self::fallback(locale),
        }
    }

    fn from_content(locale: Locale, content: &HomeContent) -> Self {
        let slides = if content.sliders.is_empty() {
            vec![fallback_slide(locale)]
        } else {
            content
                .sliders
                .iter()
                .map(|slide| slide_view(locale, slide))
                .collect()
        };

        let (about_title, about_body_html, about_image) = match &content.about {
            Some(about) => (
                text_or(about.title.as_ref(), text(locale, "home.about.title")),
                rich_or(about.body.as_ref(), text(locale, "home.about.body")),
                filled(about.image.as_ref()).map(ToOwned::to_owned),
            ),
            None => (
                text(locale, "home.about.title").to_string(),
                text(locale, "home.about.body").to_string(),
                None,
            ),
        };

        let partners = content
            .partners
            .iter()
            .filter_map(|partner| {
                filled(partner.logo.as_ref()).map(|logo| PartnerView {
                    name: text_or(partner.name.as_ref(), ""),
                    logo: logo.to_owned(),
                })
            })
            .collect();

        Self {
            slides,
            about_title,
            about_body_html,
            about_image,
            services: content
                .services
                .iter()
                .map(|item| ServiceCard::from_item(locale, item))
                .collect(),
            products: content
                .products
                .iter()
                .take(TEASER_PRODUCTS)
                .map(|product| ProductCard::from_summary(locale, product))
                .collect(),
            partners,
            ..Self::labels(locale)
        }
    }

    /// The complete document rendered when the home fetch fails: a single
    /// translated hero slide plus the embedded catalog sections.
    fn fallback(locale: Locale) -> Self {
        Self {
            slides: vec![fallback_slide(locale)],
            about_title: text(locale, "home.about.title").to_string(),
            about_body_html: text(locale, "home.about.body").to_string(),
            about_image: None,
            services: catalog::SERVICES
                .iter()
                .map(|service| ServiceCard::from_catalog(locale, service))
                .collect(),
            products: catalog::PRODUCTS
                .iter()
                .take(TEASER_PRODUCTS)
                .map(|product| ProductCard::from_catalog(locale, product))
                .collect(),
            partners: Vec::new(),
            ..Self::labels(locale)
        }
    }

    /// Section headings and labels shared by both render paths.
    fn labels(locale: Locale) -> Self {
        Self {
            slides: Vec::new(),
            about_title: String::new(),
            about_body_html: String::new(),
            about_image: None,
            services_title: text(locale, "home.services.title").to_string(),
            services: Vec::new(),
            products_title: text(locale, "home.products.title").to_string(),
            products: Vec::new(),
            partners_title: text(locale, "home.partners.title").to_string(),
            partners: Vec::new(),
            view_all_label: text(locale, "home.view_all"),
            details_label: text(locale, "products.details"),
            products_href: format!("/{}/products", locale.code()),
        }
    }
}

fn slide_view(locale: Locale, slide: &Slide) -> SlideView {
    SlideView {
        title: text_or(slide.title.as_ref(), text(locale, "home.hero.title")),
        subtitle: text_or(slide.subtitle.as_ref(), text(locale, "home.hero.subtitle")),
        image: filled(slide.image.as_ref()).map(ToOwned::to_owned),
        link: filled(slide.link.as_ref()).map(ToOwned::to_owned),
    }
}

fn fallback_slide(locale: Locale) -> SlideView {
    SlideView {
        title: text(locale, "home.hero.title").to_string(),
        subtitle: text(locale, "home.hero.subtitle").to_string(),
        image: None,
        link: None,
    }
}

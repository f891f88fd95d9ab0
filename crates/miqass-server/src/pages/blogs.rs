use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Response,
};
use serde::Serialize;

use miqass_core::{
    catalog::{self, BlogPost},
    translations::text,
    Locale,
};

use crate::{
    render::render_page,
    view::{Chrome, PageContext, SeoView},
};

use super::{not_found_page, AppState, PathLocale};

#[derive(Debug, Serialize)]
struct BlogCard {
    title: &'static str,
    excerpt: &'static str,
    date: &'static str,
    image: &'static str,
    href: String,
}

#[derive(Debug, Serialize)]
struct BlogListView {
    title: &'static str,
    description: &'static str,
    read_more_label: &'static str,
    posts: Vec<BlogCard>,
}

#[derive(Debug, Serialize)]
struct BlogDetailView {
    title: &'static str,
    date: &'static str,
    image: &'static str,
    body: &'static str,
    back_label: &'static str,
    back_href: String,
}

/// Blog pages render from the embedded posts; they make no content fetch.
pub async fn listing(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    uri: Uri,
) -> Response {
    let view = BlogListView {
        title: text(locale, "blogs.title"),
        description: text(locale, "blogs.description"),
        read_more_label: text(locale, "blogs.read_more"),
        posts: catalog::BLOG_POSTS
            .iter()
            .map(|post| BlogCard::build(locale, post))
            .collect(),
    };

    let chrome = Chrome::build(locale, uri.path());
    let seo = SeoView::titled(text(locale, "blogs.title"));
    render_page(
        &state.templates,
        "blogs.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

pub async fn detail(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    Path((_, slug)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    let Some(post) = catalog::blog_by_slug(&slug) else {
        return not_found_page(&state, locale);
    };

    let view = BlogDetailView {
        title: post.title.get(locale),
        date: post.date,
        image: post.image,
        body: post.body.get(locale),
        back_label: text(locale, "blog.back"),
        back_href: format!("/{}/blogs", locale.code()),
    };

    let chrome = Chrome::build(locale, uri.path());
    let seo = SeoView::titled(post.title.get(locale));
    render_page(
        &state.templates,
        "blog.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

impl BlogCard {
    fn build(locale: Locale, post: &BlogPost) -> Self {
        Self {
            title: post.title.get(locale),
            excerpt: post.excerpt.get(locale),
            date: post.date,
            image: post.image,
            href: format!("/{}/blogs/{}", locale.code(), post.slug),
        }
    }
}

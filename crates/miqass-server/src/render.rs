//! Template plumbing: an embedded `MiniJinja` environment and a helper that
//! turns a rendered page into an HTML response.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::Environment;
use serde::Serialize;

/// Stylesheet served from `/assets/site.css`.
pub const SITE_CSS: &str = include_str!("../assets/site.css");

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("services.html", include_str!("../templates/services.html")),
    ("products.html", include_str!("../templates/products.html")),
    ("product.html", include_str!("../templates/product.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("blogs.html", include_str!("../templates/blogs.html")),
    ("blog.html", include_str!("../templates/blog.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

/// Builds the template environment from the sources embedded at compile time.
///
/// # Panics
///
/// Panics when an embedded template fails to parse, which can only happen on
/// a source change and is caught by the template tests.
#[must_use]
pub fn build_templates() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source).expect("embedded template parses");
    }
    env
}

/// Renders `name` with `ctx` into an HTML response with the given status.
///
/// A render failure is a server bug, not user input; it is logged and
/// collapsed into a bare 500 so the handler has nothing to propagate.
pub fn render_page<S: Serialize>(
    env: &Environment<'_>,
    name: &str,
    status: StatusCode,
    ctx: &S,
) -> Response {
    let rendered = env.get_template(name).and_then(|tmpl| tmpl.render(ctx));
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(template = name, error = %err, "template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

mod about;
mod blogs;
mod contact;
mod home;
mod products;
mod services;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Extension, Json, RequestPartsExt, Router,
};
use minijinja::Environment;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use miqass_cms::CmsClient;
use miqass_core::{translations::text, Locale, DEFAULT_LOCALE};

use crate::{
    middleware::{request_id, RequestId},
    render::{self, render_page},
    submit_guard::{default_submit_guard, SubmitGuard},
    view::{Chrome, PageContext, SeoView},
};

#[derive(Clone)]
pub struct AppState {
    pub cms: CmsClient,
    pub guard: SubmitGuard,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    #[must_use]
    pub fn new(cms: CmsClient) -> Self {
        Self {
            cms,
            guard: default_submit_guard(),
            templates: Arc::new(render::build_templates()),
        }
    }
}

/// Locale taken from the `{locale}` path segment.
///
/// Rejects any segment outside the supported set with a rendered 404 page,
/// so no handler ever runs with a locale the site does not speak.
pub struct PathLocale(pub Locale);

impl FromRequestParts<AppState> for PathLocale {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let params = parts
            .extract::<Path<HashMap<String, String>>>()
            .await
            .map_err(|_| not_found_page(state, DEFAULT_LOCALE))?;

        params
            .get("locale")
            .and_then(|raw| raw.parse::<Locale>().ok())
            .map(PathLocale)
            .ok_or_else(|| not_found_page(state, DEFAULT_LOCALE))
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .route("/assets/site.css", get(site_css))
        .route("/{locale}", get(home::page))
        .route("/{locale}/", get(home::page))
        .route("/{locale}/about", get(about::page))
        .route("/{locale}/services", get(services::page))
        .route("/{locale}/products", get(products::listing))
        .route("/{locale}/products/{id}", get(products::detail))
        .route("/{locale}/contact", get(contact::page).post(contact::submit))
        .route("/{locale}/blogs", get(blogs::listing))
        .route("/{locale}/blogs/{slug}", get(blogs::detail))
        .route("/{locale}/api/setting", get(settings_proxy))
        .route("/{locale}/api/phones", get(phones_proxy))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn root_redirect() -> Redirect {
    Redirect::temporary("/en/")
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    request_id: String,
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(HealthBody {
        status: "ok",
        request_id: req_id.0,
    })
}

async fn site_css() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        render::SITE_CSS,
    )
}

/// Locale-scoped JSON passthrough of the site settings, in the same
/// success-or-message shape the pages consume internally.
async fn settings_proxy(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
) -> Response {
    Json(state.cms.settings(locale).await).into_response()
}

/// Locale-scoped JSON passthrough of the published phone directory.
async fn phones_proxy(State(state): State<AppState>, PathLocale(locale): PathLocale) -> Response {
    Json(state.cms.phones(locale).await).into_response()
}

async fn not_found(State(state): State<AppState>) -> Response {
    not_found_page(&state, DEFAULT_LOCALE)
}

#[derive(Debug, Serialize)]
struct NotFoundView {
    title: &'static str,
    body: &'static str,
    home_href: String,
    home_label: &'static str,
}

/// Renders the localized 404 document. Shared by the router fallback, the
/// locale extractor and the detail pages when a slug resolves to nothing.
pub fn not_found_page(state: &AppState, locale: Locale) -> Response {
    let chrome = Chrome::build(locale, &format!("/{}/", locale.code()));
    let seo = SeoView::titled(text(locale, "not_found.title"));
    let page = NotFoundView {
        title: text(locale, "not_found.title"),
        body: text(locale, "not_found.body"),
        home_href: format!("/{}/", locale.code()),
        home_label: text(locale, "not_found.home"),
    };
    render_page(
        &state.templates,
        "not_found.html",
        StatusCode::NOT_FOUND,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &page,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let cms = CmsClient::new("http://127.0.0.1:9", 1).expect("client");
        build_app(AppState::new(cms))
    }

    #[tokio::test]
    async fn root_redirects_to_the_default_locale() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .map(|v| v.to_str().map_err(|_| ())),
            Some(Ok("/en/"))
        );
    }

    #[tokio::test]
    async fn health_reports_ok_and_echoes_the_request_id() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .map(|v| v.to_str().map_err(|_| ())),
            Some(Ok("req-42"))
        );
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        assert_eq!(json["status"].as_str(), Some("ok"));
        assert_eq!(json["request_id"].as_str(), Some("req-42"));
    }

    #[tokio::test]
    async fn stylesheet_is_served_with_a_cache_header() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/site.css")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|v| v.to_str().map_err(|_| ())),
            Some(Ok("text/css; charset=utf-8"))
        );
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .map(|v| v.to_str().map_err(|_| ())),
            Some(Ok("public, max-age=86400"))
        );
    }

    #[tokio::test]
    async fn unsupported_locale_prefix_is_not_found() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/fr/about")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let html = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(html.contains(text(Locale::En, "not_found.title")));
    }

    #[tokio::test]
    async fn unknown_path_renders_the_not_found_page() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-page/deeper")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blog_pages_need_no_content_api() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/en/blogs")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let html = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(html.contains(text(Locale::En, "blogs.title")));
    }

    // -----------------------------------------------------------------------
    // full page rendering against a mocked content API
    // -----------------------------------------------------------------------

    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn live_app(server: &MockServer) -> Router {
        let cms = CmsClient::new(&server.uri(), 5).expect("client");
        build_app(AppState::new(cms))
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8(body.to_vec()).expect("utf8"))
    }

    async fn post_page(app: Router, uri: &str, form: String) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8(body.to_vec()).expect("utf8"))
    }

    fn form_encode(pairs: &[(&str, &str)]) -> String {
        fn escape(value: &str) -> String {
            let mut out = String::new();
            for byte in value.bytes() {
                match byte {
                    b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'-' | b'.' | b'_' => {
                        out.push(byte as char);
                    }
                    b' ' => out.push('+'),
                    _ => out.push_str(&format!("%{byte:02X}")),
                }
            }
            out
        }
        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", escape(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn valid_contact_form(token: &str) -> String {
        form_encode(&[
            ("name", "Ali Hassan"),
            ("email", "a@b.com"),
            ("phone", "0551234567"),
            ("message", "Interested in your laser cutter"),
            ("token", token),
        ])
    }

    async fn mock_api_down(server: &MockServer) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn home_renders_fetched_content_with_locale_attributes() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "sliders": [
                { "id": 1, "title": "Precision cutting, delivered", "subtitle": "Fiber, CO2 and plasma machines" }
            ],
            "about": { "title": "Who we are", "body": "<p>Machinery since 2008.</p>" },
            "services": [
                { "id": 5, "title": "Installation", "description": "<p>On site.</p>" }
            ],
            "products": [
                { "id": 9, "name": "MQ Fiber 3015", "slug": "mq-fiber-3015", "category_id": 1 }
            ],
            "partners": [
                { "id": 2, "name": "Raycus", "logo": "https://cdn.example/raycus.png" }
            ]
        });
        Mock::given(method("GET"))
            .and(path("/home"))
            .and(wiremock::matchers::header("Accept-Language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (status, html) = get_page(live_app(&server), "/en/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(html.contains("Precision cutting, delivered"));
        assert!(html.contains("Who we are"));
        assert!(html.contains("<p>Machinery since 2008.</p>"));
        assert!(html.contains(r#"alt="Raycus""#));
        // The locale switch always points at the twin page.
        assert!(html.contains(r#"href="/ar/""#));
    }

    #[tokio::test]
    async fn home_failure_falls_back_to_the_embedded_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/home"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let (status, html) = get_page(live_app(&server), "/en/").await;

        // The visitor still gets a complete document, not an error page.
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(text(Locale::En, "home.hero.title")));
        assert!(html.contains(text(Locale::En, "home.services.title")));
        assert!(html.contains("MQ Fiber 3015"));
        assert!(html.contains(text(Locale::En, "footer.rights")));
        // MockServer verifies the expect(1) count on drop: the page fetches
        // once and never retries.
    }

    #[tokio::test]
    async fn arabic_pages_are_right_to_left() {
        let server = MockServer::start().await;
        mock_api_down(&server).await;

        let (status, html) = get_page(live_app(&server), "/ar/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains(text(Locale::Ar, "nav.products")));
        assert!(html.contains(r#"href="/en/""#));
    }

    #[tokio::test]
    async fn blank_fetched_fields_fall_back_one_by_one() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "hero_title": "",
            "mission_title": "Custom Mission"
        });
        Mock::given(method("GET"))
            .and(path("/about"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (status, html) = get_page(live_app(&server), "/en/about").await;

        assert_eq!(status, StatusCode::OK);
        // Blank and missing fields take the translated default; the supplied
        // field renders as sent.
        assert!(html.contains(text(Locale::En, "about.hero.title")));
        assert!(html.contains("Custom Mission"));
        assert!(html.contains(text(Locale::En, "about.vision.title")));
    }

    #[tokio::test]
    async fn rich_text_is_sanitised_and_plain_text_escaped() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "hero_body": "<p>ok</p><script>alert(1)</script>",
            "mission_title": "<b>Bold</b>"
        });
        Mock::given(method("GET"))
            .and(path("/about"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (_, html) = get_page(live_app(&server), "/en/about").await;

        assert!(html.contains("<p>ok</p>"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert(1)"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }

    fn listing_body() -> serde_json::Value {
        serde_json::json!({
            "title": "Our Machines",
            "products": [
                { "id": 1, "name": "MQ Alpha", "category_id": 1 },
                { "id": 2, "name": "MQ Beta", "category_id": 2 },
                { "id": 3, "name": "MQ Gamma", "category_id": 1 },
                { "id": 4, "name": "MQ Delta", "category_id": 3 }
            ],
            "categories": [
                { "id": 1, "name": "Fiber Laser" },
                { "id": 2, "name": "CO2 Laser" },
                { "id": 3, "name": "Plasma" }
            ]
        })
    }

    #[tokio::test]
    async fn category_query_marks_non_matching_cards_hidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
            .mount(&server)
            .await;

        let (status, html) = get_page(live_app(&server), "/en/products?category=1").await;

        assert_eq!(status, StatusCode::OK);
        // Every card is in the document; the two outside the filter carry
        // the hidden class so the chips can retoggle them in place.
        assert!(html.contains("MQ Alpha"));
        assert!(html.contains("MQ Delta"));
        assert_eq!(html.matches("product-card hidden").count(), 2);
        assert!(html.contains(r#"class="filter-chip active" data-filter="1""#));
        assert!(html.contains(r#"class="empty-state hidden""#));
    }

    #[tokio::test]
    async fn category_without_matches_shows_the_empty_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
            .mount(&server)
            .await;

        let (status, html) = get_page(live_app(&server), "/en/products?category=99").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("product-card hidden").count(), 4);
        assert!(html.contains(r#"class="empty-state">"#));
        assert!(html.contains(text(Locale::En, "products.empty")));
    }

    #[tokio::test]
    async fn video_tab_and_download_follow_the_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/77"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 77,
                "name": "MQ Tube 6020",
                "video_url": "https://cdn.example/v.mp4",
                "datasheet_url": "https://cdn.example/d.pdf"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/products/78"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 78,
                "name": "MQ Press 110"
            })))
            .mount(&server)
            .await;
        let app = live_app(&server);

        let (_, with_media) = get_page(app.clone(), "/en/products/77").await;
        assert!(with_media.contains(r#"data-tab="video""#));
        assert!(with_media.contains(r#"data-panel="video""#));
        assert!(with_media.contains(text(Locale::En, "product.download")));

        let (_, without_media) = get_page(app, "/en/products/78").await;
        assert!(!without_media.contains(r#"data-tab="video""#));
        assert!(!without_media.contains(text(Locale::En, "product.download")));
    }

    #[tokio::test]
    async fn back_link_arrows_mirror_by_direction() {
        let server = MockServer::start().await;
        mock_api_down(&server).await;
        let app = live_app(&server);

        // With the API down the known slug renders from the catalog.
        let (status, english) = get_page(app.clone(), "/en/products/mq-fiber-3015").await;
        assert_eq!(status, StatusCode::OK);
        assert!(english.contains("class=\"arrow\">\u{2190}<"));
        assert!(english.contains("<th>Working area</th>"));

        let (_, arabic) = get_page(app, "/ar/products/mq-fiber-3015").await;
        assert!(arabic.contains("class=\"arrow\">\u{2192}<"));
        assert!(arabic.contains("منطقة العمل"));
    }

    #[tokio::test]
    async fn unknown_product_with_the_api_down_is_not_found() {
        let server = MockServer::start().await;
        mock_api_down(&server).await;

        let (status, _) = get_page(live_app(&server), "/en/products/no-such-machine").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn contact_page_shows_fetched_details_with_a_dash_for_gaps() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "title": "تواصل معنا",
            "address": "الرياض، المنطقة الصناعية الثانية"
        });
        Mock::given(method("GET"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let (status, html) = get_page(live_app(&server), "/ar/contact").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("تواصل معنا"));
        assert!(html.contains("الرياض، المنطقة الصناعية الثانية"));
        assert!(html.contains(r#"<dd dir="ltr">-</dd>"#));
    }

    #[tokio::test]
    async fn invalid_submission_rerenders_without_contacting_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let form = form_encode(&[
            ("name", "A"),
            ("email", "x"),
            ("phone", "123"),
            ("message", "hi"),
            ("token", "t-1"),
        ]);
        let (status, html) = post_page(live_app(&server), "/en/contact", form).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains(text(Locale::En, "contact.error.name")));
        assert!(html.contains(text(Locale::En, "contact.error.email")));
        assert!(html.contains(text(Locale::En, "contact.error.phone")));
        assert!(html.contains(text(Locale::En, "contact.error.message")));
        // Entered values and the token survive, so the visitor corrects and
        // resubmits the same attempt.
        assert!(html.contains(r#"value="A""#));
        assert!(html.contains(r#"value="t-1""#));
    }

    #[tokio::test]
    async fn valid_submission_posts_exactly_once_and_confirms() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .and(body_json(serde_json::json!({
                "name": "Ali Hassan",
                "email": "a@b.com",
                "phone": "0551234567",
                "message": "Interested in your laser cutter"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Thanks"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (status, html) = post_page(
            live_app(&server),
            "/en/contact",
            valid_contact_form("t-ok"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"class="notice success""#));
        assert!(html.contains("Thanks"));
        // The form comes back blank after a delivered message.
        assert!(!html.contains("Ali Hassan"));
    }

    #[tokio::test]
    async fn replayed_token_is_confirmed_without_a_second_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Thanks"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let app = live_app(&server);

        let (first_status, _) =
            post_page(app.clone(), "/en/contact", valid_contact_form("t-dup")).await;
        assert_eq!(first_status, StatusCode::OK);

        let (second_status, second) =
            post_page(app, "/en/contact", valid_contact_form("t-dup")).await;
        assert_eq!(second_status, StatusCode::OK);
        assert!(second.contains(r#"class="notice success""#));
        assert!(second.contains(text(Locale::En, "contact.notice.success")));
        // expect(1) on drop: the replay never reached the API.
    }

    #[tokio::test]
    async fn failed_submission_prefers_the_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({"message": "Please try again later"})),
            )
            .mount(&server)
            .await;

        let (status, html) = post_page(
            live_app(&server),
            "/en/contact",
            valid_contact_form("t-err"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"class="notice failure""#));
        assert!(html.contains("Please try again later"));
        // A failed delivery keeps the entered values for the retry.
        assert!(html.contains(r#"value="Ali Hassan""#));
    }

    #[tokio::test]
    async fn failed_submission_without_a_message_is_localised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let (status, html) = post_page(
            live_app(&server),
            "/ar/contact",
            valid_contact_form("t-ar"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(text(Locale::Ar, "contact.notice.failure")));
        assert!(!html.contains("Failed To Send Your Message"));
    }

    #[tokio::test]
    async fn settings_proxy_wraps_the_result_in_the_wire_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/setting"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "site_name": "Miqass Machinery"
            })))
            .mount(&server)
            .await;

        let (status, body) = get_page(live_app(&server), "/en/api/setting").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["data"]["site_name"], serde_json::json!("Miqass Machinery"));

        let down = MockServer::start().await;
        mock_api_down(&down).await;
        let (_, body) = get_page(live_app(&down), "/en/api/setting").await;
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(
            json["message"],
            serde_json::json!("Failed To Fetch Setting Data")
        );
    }

    #[tokio::test]
    async fn phones_proxy_lists_numbers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/phones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "number": "+966 55 111 2222", "label": "Sales" },
                { "id": 2, "number": "+966 55 333 4444" }
            ])))
            .mount(&server)
            .await;

        let (status, body) = get_page(live_app(&server), "/ar/api/phones").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["data"][0]["label"], serde_json::json!("Sales"));
        assert_eq!(json["data"][1]["number"], serde_json::json!("+966 55 333 4444"));
    }
}

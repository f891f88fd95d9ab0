//! HTTP client for the content API.
//!
//! One generic request core serves every read operation; per-page methods
//! only pick the operation descriptor and the response type. Each call is a
//! single attempt — no retry, no backoff — and every failure (transport,
//! non-2xx status, malformed or mismatched JSON) collapses into
//! [`ContentResult::Failure`] carrying the operation's static message. The
//! contact write is the one place an API-supplied message takes precedence.

use std::time::Duration;

use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;

use miqass_core::contact::ContactSubmission;
use miqass_core::Locale;

use crate::error::CmsError;
use crate::ops::PageOp;
use crate::result::ContentResult;
use crate::types::{
    AboutContent, ContactContent, HomeContent, PhoneEntry, ProductDetail, ProductsContent,
    ServicesContent, SiteSettings, SubmitAck,
};

const USER_AGENT: &str = "miqass-web/0.1 (site-backend)";

/// Client for the content API.
///
/// Holds one `reqwest::Client` (shared connection pool, request timeout)
/// and the configured base URL. Cheap to clone; the server keeps a single
/// instance in shared state.
#[derive(Clone)]
pub struct CmsClient {
    client: Client,
    base_url: Url,
}

impl CmsClient {
    /// Creates a client for the content API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CmsError::Url`] if `base_url` is not a
    /// valid URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, CmsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining an operation path appends a segment rather than replacing
        // the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CmsError::Url {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    pub async fn home(&self, locale: Locale) -> ContentResult<HomeContent> {
        self.fetch(PageOp::Home, locale, PageOp::Home.path()).await
    }

    pub async fn about(&self, locale: Locale) -> ContentResult<AboutContent> {
        self.fetch(PageOp::About, locale, PageOp::About.path()).await
    }

    pub async fn services(&self, locale: Locale) -> ContentResult<ServicesContent> {
        self.fetch(PageOp::Services, locale, PageOp::Services.path())
            .await
    }

    pub async fn products(&self, locale: Locale) -> ContentResult<ProductsContent> {
        self.fetch(PageOp::Products, locale, PageOp::Products.path())
            .await
    }

    /// Fetches the full record for one product. `id` is the slug or numeric
    /// id taken from the request path, passed through to the API verbatim.
    pub async fn product_detail(&self, locale: Locale, id: &str) -> ContentResult<ProductDetail> {
        let path = format!("{}/{id}", PageOp::ProductDetail.path());
        self.fetch(PageOp::ProductDetail, locale, &path).await
    }

    pub async fn contact_page(&self, locale: Locale) -> ContentResult<ContactContent> {
        self.fetch(PageOp::ContactRead, locale, PageOp::ContactRead.path())
            .await
    }

    pub async fn settings(&self, locale: Locale) -> ContentResult<SiteSettings> {
        self.fetch(PageOp::Settings, locale, PageOp::Settings.path())
            .await
    }

    pub async fn phones(&self, locale: Locale) -> ContentResult<Vec<PhoneEntry>> {
        self.fetch(PageOp::Phones, locale, PageOp::Phones.path())
            .await
    }

    /// Submits a contact-form entry. Exactly one POST is issued per call;
    /// deduplication of repeated submissions is the caller's concern.
    ///
    /// On failure the result carries the message from the API response body
    /// when one is present, otherwise the operation's static message.
    pub async fn submit_contact(
        &self,
        locale: Locale,
        submission: &ContactSubmission,
    ) -> ContentResult<SubmitAck> {
        let op = PageOp::ContactSubmit;
        match self.post_contact(locale, submission).await {
            Ok(ack) => ContentResult::Success { data: ack },
            Err(failure) => {
                tracing::warn!(
                    op = op.name(),
                    locale = %locale,
                    error = %failure.source,
                    "contact submission failed"
                );
                let message = failure
                    .api_message
                    .unwrap_or_else(|| op.fallback_message().to_string());
                ContentResult::Failure { message }
            }
        }
    }

    /// Generic read core shared by every GET operation.
    async fn fetch<T>(&self, op: PageOp, locale: Locale, path: &str) -> ContentResult<T>
    where
        T: DeserializeOwned,
    {
        match self.get_json(op, locale, path).await {
            Ok(data) => ContentResult::Success { data },
            Err(err) => {
                tracing::warn!(
                    op = op.name(),
                    locale = %locale,
                    error = %err,
                    "content fetch failed"
                );
                ContentResult::Failure {
                    message: op.fallback_message().to_string(),
                }
            }
        }
    }

    async fn get_json<T>(&self, op: PageOp, locale: Locale, path: &str) -> Result<T, CmsError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            // Reads must observe live content, never a cached response.
            .header(header::CACHE_CONTROL, "no-cache")
            .header(op.locale_header().name(), locale.code())
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CmsError::Deserialize {
            context: format!("{}({locale})", op.name()),
            source: e,
        })
    }

    async fn post_contact(
        &self,
        locale: Locale,
        submission: &ContactSubmission,
    ) -> Result<SubmitAck, SubmitFailure> {
        let op = PageOp::ContactSubmit;
        let url = self.endpoint(op.path()).map_err(SubmitFailure::plain)?;
        let response = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .header(op.locale_header().name(), locale.code())
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitFailure::plain(e.into()))?;

        // The body is read before the status check so an error response can
        // still contribute its message.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitFailure::plain(e.into()))?;

        if !status.is_success() {
            return Err(SubmitFailure {
                api_message: extract_api_message(&body),
                source: CmsError::Status {
                    status,
                    op: op.name(),
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            SubmitFailure::plain(CmsError::Deserialize {
                context: format!("{}({locale})", op.name()),
                source: e,
            })
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CmsError> {
        self.base_url.join(path).map_err(|e| CmsError::Url {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })
    }
}

/// A failed write, keeping any display message the API included alongside
/// the underlying error.
struct SubmitFailure {
    api_message: Option<String>,
    source: CmsError,
}

impl SubmitFailure {
    fn plain(source: CmsError) -> Self {
        Self {
            api_message: None,
            source,
        }
    }
}

/// Pulls a non-empty `message` string out of an error-response body, if the
/// body is JSON and carries one.
fn extract_api_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

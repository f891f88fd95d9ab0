//! Content-API response types.
//!
//! Each page operation deserializes into one of these bags at the fetch
//! boundary; a body that does not match fails the fetch rather than leaking
//! loosely-typed JSON into the renderer. Ids and names are required, most
//! text fields are optional — an absent or empty field falls back to the
//! static translation at render time, it does not fail the fetch.

use serde::{Deserialize, Serialize};

/// Optional SEO block present on content-driven pages. Drives document
/// head metadata only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub twitter_card: Option<String>,
    #[serde(default)]
    pub robots: Option<String>,
}

// ---------------------------------------------------------------------------
// home
// ---------------------------------------------------------------------------

/// The single aggregate payload behind the home page: one fetch covers the
/// hero carousel and every section below it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeContent {
    #[serde(default)]
    pub sliders: Vec<Slide>,
    #[serde(default)]
    pub about: Option<HomeAbout>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub partners: Vec<Partner>,
}

/// One hero-carousel slide.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The about teaser section embedded in the home payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeAbout {
    #[serde(default)]
    pub title: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Partner {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

// ---------------------------------------------------------------------------
// about / services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutContent {
    #[serde(default)]
    pub hero_title: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub hero_body: Option<String>,
    #[serde(default)]
    pub mission_title: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub mission_body: Option<String>,
    #[serde(default)]
    pub vision_title: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub vision_body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub seo: Option<SeoMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicesContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    #[serde(default)]
    pub seo: Option<SeoMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub categories: Vec<CategoryItem>,
}

/// Listing-card view of a product. `slug` addresses the detail endpoint;
/// entries without one are linked by numeric id.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryItem {
    pub id: u32,
    pub name: String,
}

/// Full product record behind the detail page.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub benefits: Option<String>,
    /// Rich text.
    #[serde(default)]
    pub specs: Option<String>,
    /// Present only when the product has a promotional video; its absence
    /// suppresses the video tab entirely.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Present only when a datasheet exists; its absence suppresses the
    /// download action.
    #[serde(default)]
    pub datasheet_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub seo: Option<SeoMeta>,
}

// ---------------------------------------------------------------------------
// contact / settings / phones
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Site-wide settings served to the browser by the settings proxy
/// endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub id: u64,
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Acknowledgement body of a successful contact submission. The API may
/// include a display message; the notice falls back to a translation when
/// it does not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub message: Option<String>,
}

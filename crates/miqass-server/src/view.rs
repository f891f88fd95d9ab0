//! Shared view-model pieces: the page chrome, text fallbacks, rich-text
//! sanitisation, product tabs and the category filter.

use miqass_core::{
    catalog::{CatalogProduct, CatalogService},
    translations::text,
    Direction, Locale,
};
use miqass_cms::types::{ProductSummary, SeoMeta, ServiceItem};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Text fallbacks
// ---------------------------------------------------------------------------

/// Returns the value when it is non-empty after trimming.
#[must_use]
pub fn filled(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Plain-text slot: the fetched value when present, otherwise the
/// translation-table string for the current locale.
#[must_use]
pub fn text_or(value: Option<&String>, fallback: &str) -> String {
    filled(value).unwrap_or(fallback).to_string()
}

/// Rich-text slot: the fetched markup sanitised, otherwise the fallback
/// string (our own copy, which carries no markup).
#[must_use]
pub fn rich_or(value: Option<&String>, fallback: &str) -> String {
    match filled(value) {
        Some(html) => sanitize_rich(html),
        None => fallback.to_string(),
    }
}

/// Strips scripts, event handlers and other unsafe constructs from
/// API-supplied markup, keeping the basic formatting tags.
#[must_use]
pub fn sanitize_rich(html: &str) -> String {
    ammonia::clean(html)
}

// ---------------------------------------------------------------------------
// Direction-aware glyphs
// ---------------------------------------------------------------------------

/// Arrow and separator glyphs that must flip with the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalGlyphs {
    pub back: &'static str,
    pub next: &'static str,
    pub crumb: &'static str,
}

/// Picks the glyph set for a direction. "Back" points against the reading
/// direction, "next" along it, so the two swap between LTR and RTL.
#[must_use]
pub fn directional_glyphs(dir: Direction) -> DirectionalGlyphs {
    match dir {
        Direction::Ltr => DirectionalGlyphs {
            back: "\u{2190}",
            next: "\u{2192}",
            crumb: "\u{203a}",
        },
        Direction::Rtl => DirectionalGlyphs {
            back: "\u{2192}",
            next: "\u{2190}",
            crumb: "\u{2039}",
        },
    }
}

// ---------------------------------------------------------------------------
// Page chrome
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the base layout needs: language attributes, navigation,
/// the locale switch link, directional glyphs and footer strings.
#[derive(Debug, Serialize)]
pub struct Chrome {
    pub lang: &'static str,
    pub dir: &'static str,
    pub is_rtl: bool,
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub nav: Vec<NavLink>,
    pub switch_href: String,
    pub switch_label: &'static str,
    pub back_arrow: &'static str,
    pub next_arrow: &'static str,
    pub crumb_sep: &'static str,
    pub float_side: &'static str,
    pub float_label: &'static str,
    pub contact_href: String,
    pub quick_links_label: &'static str,
    pub contact_info_label: &'static str,
    pub rights: &'static str,
}

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("", "nav.home"),
    ("about", "nav.about"),
    ("services", "nav.services"),
    ("products", "nav.products"),
    ("blogs", "nav.blogs"),
    ("contact", "nav.contact"),
];

impl Chrome {
    /// Builds the chrome for a request. `current_path` is the request path
    /// including the locale prefix; it drives both the active-nav highlight
    /// and the language-switch link.
    #[must_use]
    pub fn build(locale: Locale, current_path: &str) -> Self {
        let dir = locale.direction();
        let glyphs = directional_glyphs(dir);
        let tail = locale_tail(current_path, locale);

        let nav = NAV_SECTIONS
            .iter()
            .map(|(section, label_key)| NavLink {
                href: section_href(locale, section),
                label: text(locale, label_key),
                active: nav_is_active(tail, section),
            })
            .collect();

        Self {
            lang: locale.code(),
            dir: dir.attr(),
            is_rtl: dir.is_rtl(),
            site_name: text(locale, "site.name"),
            tagline: text(locale, "site.tagline"),
            nav,
            switch_href: miqass_core::locale::switch_locale_path(current_path, locale.other()),
            switch_label: locale.other().label(),
            back_arrow: glyphs.back,
            next_arrow: glyphs.next,
            crumb_sep: glyphs.crumb,
            float_side: if dir.is_rtl() { "left" } else { "right" },
            float_label: text(locale, "floating.contact"),
            contact_href: section_href(locale, "contact"),
            quick_links_label: text(locale, "footer.quick_links"),
            contact_info_label: text(locale, "footer.contact_info"),
            rights: text(locale, "footer.rights"),
        }
    }
}

/// Href of a top-level section for a locale; the empty section is home.
#[must_use]
pub fn section_href(locale: Locale, section: &str) -> String {
    if section.is_empty() {
        format!("/{}/", locale.code())
    } else {
        format!("/{}/{section}", locale.code())
    }
}

fn locale_tail<'a>(path: &'a str, locale: Locale) -> &'a str {
    path.get(1 + locale.code().len()..)
        .unwrap_or("")
        .trim_start_matches('/')
}

fn nav_is_active(tail: &str, section: &str) -> bool {
    if section.is_empty() {
        return tail.is_empty();
    }
    tail.strip_prefix(section)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
}

/// Context handed to every page template: layout chrome, head metadata and
/// the page's own view model.
#[derive(Serialize)]
pub struct PageContext<'a, T: Serialize> {
    pub chrome: &'a Chrome,
    pub seo: &'a SeoView,
    pub page: &'a T,
}

// ---------------------------------------------------------------------------
// Head metadata
// ---------------------------------------------------------------------------

/// Metadata rendered into the document head. All values are plain text.
#[derive(Debug, Default, Serialize)]
pub struct SeoView {
    pub title: String,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub robots: Option<String>,
}

impl SeoView {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Merges fetched metadata over the page's own title. Empty fetched
    /// fields are dropped rather than rendered blank.
    #[must_use]
    pub fn from_meta(meta: Option<&SeoMeta>, page_title: &str) -> Self {
        let Some(meta) = meta else {
            return Self::titled(page_title);
        };
        Self {
            title: text_or(meta.title.as_ref(), page_title),
            description: filled(meta.description.as_ref()).map(ToOwned::to_owned),
            canonical: filled(meta.canonical.as_ref()).map(ToOwned::to_owned),
            og_title: filled(meta.og_title.as_ref()).map(ToOwned::to_owned),
            og_description: filled(meta.og_description.as_ref()).map(ToOwned::to_owned),
            og_image: filled(meta.og_image.as_ref()).map(ToOwned::to_owned),
            twitter_card: filled(meta.twitter_card.as_ref()).map(ToOwned::to_owned),
            robots: filled(meta.robots.as_ref()).map(ToOwned::to_owned),
        }
    }
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// Outcome banner shown after a form submission.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: &'static str,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: "success",
            text: text.into(),
        }
    }

    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: "failure",
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Product tabs
// ---------------------------------------------------------------------------

/// Ordered tab strip of a product page. The video tab exists only when the
/// product carries a video link; activation is bounds-checked so an
/// out-of-range request leaves the selection unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    keys: Vec<&'static str>,
    active: usize,
}

impl TabSet {
    #[must_use]
    pub fn for_product(has_video: bool) -> Self {
        let mut keys = vec!["overview", "benefits", "specs"];
        if has_video {
            keys.push("video");
        }
        Self { keys, active: 0 }
    }

    /// Selects the tab at `index`; reports whether the index was valid.
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.keys.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Selects the tab with the given key, if the strip has one.
    pub fn activate_key(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| *k == key) {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    #[must_use]
    pub fn active_key(&self) -> &'static str {
        self.keys[self.active]
    }

    #[must_use]
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }
}

/// One rendered tab button.
#[derive(Debug, Serialize)]
pub struct TabView {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Localised tab buttons for a tab strip.
#[must_use]
pub fn tab_views(tabs: &TabSet, locale: Locale) -> Vec<TabView> {
    tabs.keys()
        .iter()
        .map(|key| TabView {
            key,
            label: text(locale, tab_label_key(key)),
            active: *key == tabs.active_key(),
        })
        .collect()
}

fn tab_label_key(key: &str) -> &'static str {
    match key {
        "overview" => "product.tab.overview",
        "benefits" => "product.tab.benefits",
        "specs" => "product.tab.specs",
        _ => "product.tab.video",
    }
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Filter over an already-fetched product list. Filtering never refetches;
/// it is a pure predicate on the category id carried by each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(u32),
}

impl CategoryFilter {
    /// Parses the `category` query value. Anything that is not a category
    /// id is treated as the identity filter.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::All;
        };
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        raw.parse::<u32>().map_or(Self::All, Self::Category)
    }

    #[must_use]
    pub fn admits(self, category_id: Option<u32>) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => category_id == Some(id),
        }
    }

    #[must_use]
    pub fn id(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// Product card used by the home teaser grid and the listing page. Cards
/// outside the active filter are rendered hidden so the filter buttons can
/// work on the delivered document without another fetch.
#[derive(Debug, Serialize)]
pub struct ProductCard {
    pub name: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub href: String,
    pub category: Option<u32>,
    pub hidden: bool,
}

impl ProductCard {
    #[must_use]
    pub fn from_summary(locale: Locale, product: &ProductSummary) -> Self {
        let segment = filled(product.slug.as_ref())
            .map_or_else(|| product.id.to_string(), ToOwned::to_owned);
        Self {
            name: text_or(Some(&product.name), text(locale, "product.unnamed")),
            summary: filled(product.summary.as_ref()).map(ToOwned::to_owned),
            image: filled(product.image.as_ref()).map(ToOwned::to_owned),
            href: format!("/{}/products/{segment}", locale.code()),
            category: product.category_id,
            hidden: false,
        }
    }

    #[must_use]
    pub fn from_catalog(locale: Locale, product: &CatalogProduct) -> Self {
        Self {
            name: product.name.get(locale).to_string(),
            summary: Some(product.summary.get(locale).to_string()),
            image: Some(product.image.to_string()),
            href: format!("/{}/products/{}", locale.code(), product.slug),
            category: Some(product.category.id()),
            hidden: false,
        }
    }
}

/// Service card shared by the home section and the services page.
#[derive(Debug, Serialize)]
pub struct ServiceCard {
    pub title: String,
    pub description_html: String,
    pub icon: Option<String>,
}

impl ServiceCard {
    #[must_use]
    pub fn from_item(locale: Locale, item: &ServiceItem) -> Self {
        Self {
            title: text_or(item.title.as_ref(), text(locale, "service.unnamed")),
            description_html: rich_or(item.description.as_ref(), ""),
            icon: filled(item.icon.as_ref()).map(ToOwned::to_owned),
        }
    }

    #[must_use]
    pub fn from_catalog(locale: Locale, service: &CatalogService) -> Self {
        Self {
            title: service.title.get(locale).to_string(),
            description_html: service.description.get(locale).to_string(),
            icon: Some(service.icon.to_string()),
        }
    }
}

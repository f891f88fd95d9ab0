use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::Response,
};
use serde::{Deserialize, Serialize};

use miqass_cms::{
    types::{CategoryItem, ProductDetail, ProductsContent},
    ContentResult,
};
use miqass_core::{
    catalog::{self, CatalogProduct, MachineCategory},
    translations::text,
    Locale,
};

use crate::{
    render::render_page,
    view::{
        filled, rich_or, tab_views, text_or, CategoryFilter, Chrome, PageContext, ProductCard,
        SeoView, TabSet, TabView,
    },
};

use super::{not_found_page, AppState, PathLocale};

// ---------------------------------------------------------------------------
// listing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    category: Option<String>,
}

#[derive(Debug, Serialize)]
struct CategoryChip {
    filter: String,
    label: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct ProductsView {
    title: String,
    description: String,
    categories: Vec<CategoryChip>,
    products: Vec<ProductCard>,
    empty: bool,
    empty_text: &'static str,
    details_label: &'static str,
}

pub async fn listing(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    Query(query): Query<ListingQuery>,
    uri: Uri,
) -> Response {
    let filter = CategoryFilter::parse(query.category.as_deref());
    let view = match state.cms.products(locale).await {
        ContentResult::Success { data } => ProductsView::from_content(locale, &data, filter),
        ContentResult::Failure { .. } => ProductsView::fallback(locale, filter),
    };

    let chrome = Chrome::build(locale, uri.path());
    let seo = SeoView::titled(text(locale, "products.title"));
    render_page(
        &state.templates,
        "products.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

impl ProductsView {
    fn from_content(locale: Locale, content: &ProductsContent, filter: CategoryFilter) -> Self {
        let products: Vec<ProductCard> = content
            .products
            .iter()
            .map(|product| {
                let mut card = ProductCard::from_summary(locale, product);
                card.hidden = !filter.admits(product.category_id);
                card
            })
            .collect();

        let categories = chips(
            locale,
            content.categories.iter().map(|c| (c.id, chip_label(locale, c))),
            filter,
        );

        Self::assemble(
            locale,
            text_or(content.title.as_ref(), text(locale, "products.title")),
            text_or(
                content.description.as_ref(),
                text(locale, "products.description"),
            ),
            categories,
            products,
        )
    }

    /// Embedded catalog listing rendered when the products fetch fails.
    fn fallback(locale: Locale, filter: CategoryFilter) -> Self {
        let products: Vec<ProductCard> = catalog::PRODUCTS
            .iter()
            .map(|product| {
                let mut card = ProductCard::from_catalog(locale, product);
                card.hidden = !filter.admits(Some(product.category.id()));
                card
            })
            .collect();

        let categories = chips(
            locale,
            MachineCategory::ALL
                .iter()
                .map(|c| (c.id(), c.label(locale).to_string())),
            filter,
        );

        Self::assemble(
            locale,
            text(locale, "products.title").to_string(),
            text(locale, "products.description").to_string(),
            categories,
            products,
        )
    }

    fn assemble(
        locale: Locale,
        title: String,
        description: String,
        categories: Vec<CategoryChip>,
        products: Vec<ProductCard>,
    ) -> Self {
        let empty = products.iter().all(|card| card.hidden);
        Self {
            title,
            description,
            categories,
            products,
            empty,
            empty_text: text(locale, "products.empty"),
            details_label: text(locale, "products.details"),
        }
    }
}

fn chips(
    locale: Locale,
    categories: impl Iterator<Item = (u32, String)>,
    filter: CategoryFilter,
) -> Vec<CategoryChip> {
    let mut out = vec![CategoryChip {
        filter: "all".to_string(),
        label: text(locale, "products.filter.all").to_string(),
        active: filter == CategoryFilter::All,
    }];
    out.extend(categories.map(|(id, label)| CategoryChip {
        filter: id.to_string(),
        label,
        active: filter.id() == Some(id),
    }));
    out
}

fn chip_label(locale: Locale, category: &CategoryItem) -> String {
    match filled(Some(&category.name)) {
        Some(name) => name.to_string(),
        None => MachineCategory::from_id(category.id)
            .map_or_else(|| category.id.to_string(), |c| c.label(locale).to_string()),
    }
}

// ---------------------------------------------------------------------------
// detail
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    tab: Option<String>,
}

#[derive(Debug, Serialize)]
struct LiveBlock {
    overview_html: String,
    benefits_html: String,
    specs_html: String,
}

#[derive(Debug, Serialize)]
struct SpecRowView {
    label: &'static str,
    value: &'static str,
}

#[derive(Debug, Serialize)]
struct FallbackBlock {
    description: String,
    benefits_text: &'static str,
    spec_rows: Vec<SpecRowView>,
}

#[derive(Debug, Serialize)]
struct ProductPageView {
    name: String,
    image: Option<String>,
    category_label: Option<&'static str>,
    tabs: Vec<TabView>,
    active_key: &'static str,
    live: Option<LiveBlock>,
    fallback: Option<FallbackBlock>,
    video_url: Option<String>,
    datasheet_url: Option<String>,
    download_label: &'static str,
    quote_label: &'static str,
    quote_href: String,
    back_label: &'static str,
    back_href: String,
}

pub async fn detail(
    State(state): State<AppState>,
    PathLocale(locale): PathLocale,
    Path((_, id)): Path<(String, String)>,
    Query(query): Query<DetailQuery>,
    uri: Uri,
) -> Response {
    let view = match state.cms.product_detail(locale, &id).await {
        ContentResult::Success { data } => {
            ProductPageView::from_content(locale, &data, query.tab.as_deref())
        }
        // A machine the content API cannot serve may still exist in the
        // embedded catalog; only a miss in both is a 404.
        ContentResult::Failure { .. } => match catalog::product_by_slug(&id) {
            Some(product) => ProductPageView::from_catalog(locale, product, query.tab.as_deref()),
            None => return not_found_page(&state, locale),
        },
    };

    let chrome = Chrome::build(locale, uri.path());
    let seo = view.seo();
    render_page(
        &state.templates,
        "product.html",
        StatusCode::OK,
        &PageContext {
            chrome: &chrome,
            seo: &seo,
            page: &view,
        },
    )
}

impl ProductPageView {
    fn from_content(locale: Locale, detail: &ProductDetail, requested_tab: Option<&str>) -> Self {
        let video_url = filled(detail.video_url.as_ref()).map(ToOwned::to_owned);
        let tabs = tab_strip(video_url.is_some(), requested_tab);

        Self {
            name: text_or(Some(&detail.name), text(locale, "product.unnamed")),
            image: filled(detail.image.as_ref()).map(ToOwned::to_owned),
            category_label: detail
                .category_id
                .and_then(MachineCategory::from_id)
                .map(|c| c.label(locale)),
            active_key: tabs.active_key(),
            tabs: tab_views(&tabs, locale),
            live: Some(LiveBlock {
                overview_html: rich_or(
                    detail.overview.as_ref(),
                    text(locale, "product.overview.fallback"),
                ),
                benefits_html: rich_or(
                    detail.benefits.as_ref(),
                    text(locale, "product.benefits.fallback"),
                ),
                specs_html: rich_or(
                    detail.specs.as_ref(),
                    text(locale, "product.specs.fallback"),
                ),
            }),
            fallback: None,
            video_url,
            datasheet_url: filled(detail.datasheet_url.as_ref()).map(ToOwned::to_owned),
            ..Self::labels(locale)
        }
    }

    fn from_catalog(
        locale: Locale,
        product: &CatalogProduct,
        requested_tab: Option<&str>,
    ) -> Self {
        let tabs = tab_strip(product.video_url.is_some(), requested_tab);

        Self {
            name: product.name.get(locale).to_string(),
            image: Some(product.image.to_string()),
            category_label: Some(product.category.label(locale)),
            active_key: tabs.active_key(),
            tabs: tab_views(&tabs, locale),
            live: None,
            fallback: Some(FallbackBlock {
                description: product.description.get(locale).to_string(),
                benefits_text: text(locale, "product.benefits.fallback"),
                spec_rows: product
                    .specs
                    .iter()
                    .map(|row| SpecRowView {
                        label: row.label.get(locale),
                        value: row.value,
                    })
                    .collect(),
            }),
            video_url: product.video_url.map(ToOwned::to_owned),
            datasheet_url: product.datasheet_url.map(ToOwned::to_owned),
            ..Self::labels(locale)
        }
    }

    fn labels(locale: Locale) -> Self {
        Self {
            name: String::new(),
            image: None,
            category_label: None,
            tabs: Vec::new(),
            active_key: "overview",
            live: None,
            fallback: None,
            video_url: None,
            datasheet_url: None,
            download_label: text(locale, "product.download"),
            quote_label: text(locale, "product.request_quote"),
            quote_href: format!("/{}/contact", locale.code()),
            back_label: text(locale, "product.back"),
            back_href: format!("/{}/products", locale.code()),
        }
    }

    fn seo(&self) -> SeoView {
        SeoView::titled(self.name.clone())
    }
}

fn tab_strip(has_video: bool, requested: Option<&str>) -> TabSet {
    let mut tabs = TabSet::for_product(has_video);
    if let Some(key) = requested {
        tabs.activate_key(key);
    }
    tabs
}

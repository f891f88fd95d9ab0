//! The operation table: one entry per page type.
//!
//! Each operation carries the three things the generic fetch core needs —
//! its path on the content API, which header the API reads the locale from,
//! and the static message reported when the operation fails. Collapsing the
//! per-page wrappers onto this table keeps the request shape identical
//! everywhere while preserving per-operation failure messages.

/// Which request header carries the resolved locale.
///
/// The content API is inconsistent here: the page-document endpoints read
/// standard `Accept-Language`, the catalog and contact endpoints read a
/// bespoke `lang` header. The table below preserves that split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleHeader {
    AcceptLanguage,
    Lang,
}

impl LocaleHeader {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LocaleHeader::AcceptLanguage => "Accept-Language",
            LocaleHeader::Lang => "lang",
        }
    }
}

/// One logical content-API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOp {
    Home,
    About,
    Services,
    Products,
    ProductDetail,
    ContactRead,
    ContactSubmit,
    Settings,
    Phones,
}

impl PageOp {
    /// Path relative to the API base URL. `ProductDetail` is the collection
    /// path; the entity id is appended per call.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            PageOp::Home => "home",
            PageOp::About => "about",
            PageOp::Services => "services",
            PageOp::Products | PageOp::ProductDetail => "products",
            PageOp::ContactRead | PageOp::ContactSubmit => "contact",
            PageOp::Settings => "setting",
            PageOp::Phones => "phones",
        }
    }

    #[must_use]
    pub fn locale_header(self) -> LocaleHeader {
        match self {
            PageOp::Home | PageOp::About | PageOp::Services | PageOp::Settings => {
                LocaleHeader::AcceptLanguage
            }
            PageOp::Products
            | PageOp::ProductDetail
            | PageOp::ContactRead
            | PageOp::ContactSubmit
            | PageOp::Phones => LocaleHeader::Lang,
        }
    }

    /// Failure message reported when this operation cannot produce data.
    /// The contact write is the one operation where a message supplied by
    /// the API response body overrides this string.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            PageOp::Home => "Failed To Fetch Home Data",
            PageOp::About => "Failed To Fetch About Data",
            PageOp::Services => "Failed To Fetch Services Data",
            PageOp::Products => "Failed To Fetch Products Data",
            PageOp::ProductDetail => "Failed To Fetch Product Details",
            PageOp::ContactRead => "Failed To Fetch Contact Data",
            PageOp::ContactSubmit => "Failed To Send Your Message",
            PageOp::Settings => "Failed To Fetch Setting Data",
            PageOp::Phones => "Failed To Fetch Phones Data",
        }
    }

    /// Stable identifier used in log fields.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PageOp::Home => "home",
            PageOp::About => "about",
            PageOp::Services => "services",
            PageOp::Products => "products",
            PageOp::ProductDetail => "product_detail",
            PageOp::ContactRead => "contact_read",
            PageOp::ContactSubmit => "contact_submit",
            PageOp::Settings => "settings",
            PageOp::Phones => "phones",
        }
    }
}

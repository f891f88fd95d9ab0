//! Source-embedded English/Arabic strings for UI chrome and content
//! fallbacks.
//!
//! Every slot the renderer may have to fill without CMS data has an entry
//! here, so a page can always be rendered completely even when a fetch
//! fails or a field comes back empty. The table is immutable after compile
//! time and shared freely across requests.

use crate::locale::Locale;

/// One translation entry. Both languages are mandatory so no locale can
/// ever hit a hole the other one doesn't.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub key: &'static str,
    pub en: &'static str,
    pub ar: &'static str,
}

/// Looks up `key` for `locale`.
///
/// Unknown keys return the key itself so a typo shows up in the page
/// instead of panicking; [`TABLE`] is expected to cover every key the
/// server uses, which the table tests enforce.
#[must_use]
pub fn text(locale: Locale, key: &'static str) -> &'static str {
    for entry in TABLE {
        if entry.key == key {
            return match locale {
                Locale::En => entry.en,
                Locale::Ar => entry.ar,
            };
        }
    }
    key
}

pub static TABLE: &[Entry] = &[
    // Site chrome
    Entry {
        key: "site.name",
        en: "Miqass Machinery",
        ar: "مقص للماكينات",
    },
    Entry {
        key: "site.tagline",
        en: "Industrial Cutting Machinery",
        ar: "ماكينات القطع الصناعية",
    },
    Entry {
        key: "nav.home",
        en: "Home",
        ar: "الرئيسية",
    },
    Entry {
        key: "nav.about",
        en: "About Us",
        ar: "من نحن",
    },
    Entry {
        key: "nav.services",
        en: "Services",
        ar: "خدماتنا",
    },
    Entry {
        key: "nav.products",
        en: "Products",
        ar: "منتجاتنا",
    },
    Entry {
        key: "nav.blogs",
        en: "Blog",
        ar: "المدونة",
    },
    Entry {
        key: "nav.contact",
        en: "Contact Us",
        ar: "اتصل بنا",
    },
    Entry {
        key: "footer.quick_links",
        en: "Quick Links",
        ar: "روابط سريعة",
    },
    Entry {
        key: "footer.contact_info",
        en: "Contact Information",
        ar: "معلومات الاتصال",
    },
    Entry {
        key: "footer.rights",
        en: "All rights reserved.",
        ar: "جميع الحقوق محفوظة.",
    },
    Entry {
        key: "floating.contact",
        en: "Get in Touch",
        ar: "تواصل معنا",
    },
    // Home
    Entry {
        key: "home.hero.title",
        en: "Precision Cutting Machinery",
        ar: "ماكينات قطع عالية الدقة",
    },
    Entry {
        key: "home.hero.subtitle",
        en: "Fiber laser, CO2 laser, plasma and bandsaw machines for modern fabrication.",
        ar: "ماكينات ليزر فايبر وليزر CO2 وبلازما ومناشير شريطية لورش التصنيع الحديثة.",
    },
    Entry {
        key: "home.about.title",
        en: "Who We Are",
        ar: "من نحن",
    },
    Entry {
        key: "home.about.body",
        en: "Miqass supplies and services industrial cutting machinery for metal fabrication workshops across the region.",
        ar: "توفر مقص ماكينات القطع الصناعية وتقدم خدمات الصيانة لورش تصنيع المعادن في جميع أنحاء المنطقة.",
    },
    Entry {
        key: "home.services.title",
        en: "Our Services",
        ar: "خدماتنا",
    },
    Entry {
        key: "home.products.title",
        en: "Our Machines",
        ar: "ماكيناتنا",
    },
    Entry {
        key: "home.partners.title",
        en: "Our Partners",
        ar: "شركاؤنا",
    },
    Entry {
        key: "home.view_all",
        en: "View All",
        ar: "عرض الكل",
    },
    // About
    Entry {
        key: "about.hero.title",
        en: "About Miqass",
        ar: "عن مقص",
    },
    Entry {
        key: "about.hero.body",
        en: "For over two decades we have equipped fabricators with dependable cutting machinery and the service to keep it running.",
        ar: "منذ أكثر من عقدين نزوّد ورش التصنيع بماكينات قطع موثوقة وخدمة تضمن استمرار عملها.",
    },
    Entry {
        key: "about.mission.title",
        en: "Our Mission",
        ar: "رسالتنا",
    },
    Entry {
        key: "about.mission.body",
        en: "To deliver precise, reliable cutting technology backed by honest service and fast support.",
        ar: "تقديم تقنيات قطع دقيقة وموثوقة مدعومة بخدمة أمينة ودعم سريع.",
    },
    Entry {
        key: "about.vision.title",
        en: "Our Vision",
        ar: "رؤيتنا",
    },
    Entry {
        key: "about.vision.body",
        en: "To be the region's first choice for industrial cutting solutions.",
        ar: "أن نكون الخيار الأول في المنطقة لحلول القطع الصناعية.",
    },
    // Services
    Entry {
        key: "services.title",
        en: "Our Services",
        ar: "خدماتنا",
    },
    Entry {
        key: "services.description",
        en: "Installation, training, maintenance and genuine spare parts for every machine we sell.",
        ar: "تركيب وتدريب وصيانة وقطع غيار أصلية لكل ماكينة نبيعها.",
    },
    // Products listing
    Entry {
        key: "products.title",
        en: "Our Machines",
        ar: "ماكيناتنا",
    },
    Entry {
        key: "products.description",
        en: "Browse our range of fiber laser, CO2 laser, plasma and bandsaw machines.",
        ar: "تصفح تشكيلتنا من ماكينات ليزر الفايبر وليزر CO2 والبلازما والمناشير الشريطية.",
    },
    Entry {
        key: "products.filter.all",
        en: "All",
        ar: "الكل",
    },
    Entry {
        key: "products.empty",
        en: "No machines match this category yet.",
        ar: "لا توجد ماكينات ضمن هذه الفئة حاليًا.",
    },
    Entry {
        key: "products.details",
        en: "View Details",
        ar: "عرض التفاصيل",
    },
    // Product detail
    Entry {
        key: "product.tab.overview",
        en: "Overview",
        ar: "نظرة عامة",
    },
    Entry {
        key: "product.tab.benefits",
        en: "Benefits",
        ar: "المزايا",
    },
    Entry {
        key: "product.tab.specs",
        en: "Specifications",
        ar: "المواصفات",
    },
    Entry {
        key: "product.tab.video",
        en: "Video",
        ar: "فيديو",
    },
    Entry {
        key: "product.download",
        en: "Download Datasheet",
        ar: "تحميل الكتالوج",
    },
    Entry {
        key: "product.request_quote",
        en: "Request a Quote",
        ar: "اطلب عرض سعر",
    },
    Entry {
        key: "product.back",
        en: "Back to Machines",
        ar: "العودة إلى الماكينات",
    },
    Entry {
        key: "product.overview.fallback",
        en: "Ask our team for the full technical overview of this machine.",
        ar: "اسأل فريقنا عن النظرة الفنية الكاملة لهذه الماكينة.",
    },
    Entry {
        key: "product.benefits.fallback",
        en: "Contact us to learn how this machine fits your workflow.",
        ar: "تواصل معنا لمعرفة كيف تناسب هذه الماكينة سير عملك.",
    },
    Entry {
        key: "product.specs.fallback",
        en: "The full specification sheet is available on request.",
        ar: "جدول المواصفات الكامل متاح عند الطلب.",
    },
    Entry {
        key: "product.unnamed",
        en: "Unnamed machine",
        ar: "ماكينة بدون اسم",
    },
    Entry {
        key: "service.unnamed",
        en: "Service",
        ar: "خدمة",
    },
    // Contact
    Entry {
        key: "contact.title",
        en: "Contact Us",
        ar: "اتصل بنا",
    },
    Entry {
        key: "contact.description",
        en: "Tell us about your project and our engineers will get back to you within one business day.",
        ar: "أخبرنا عن مشروعك وسيتواصل معك مهندسونا خلال يوم عمل واحد.",
    },
    Entry {
        key: "contact.info.address",
        en: "Address",
        ar: "العنوان",
    },
    Entry {
        key: "contact.info.phone",
        en: "Phone",
        ar: "الهاتف",
    },
    Entry {
        key: "contact.info.email",
        en: "Email",
        ar: "البريد الإلكتروني",
    },
    Entry {
        key: "contact.form.name",
        en: "Name",
        ar: "الاسم",
    },
    Entry {
        key: "contact.form.email",
        en: "Email",
        ar: "البريد الإلكتروني",
    },
    Entry {
        key: "contact.form.phone",
        en: "Phone",
        ar: "الهاتف",
    },
    Entry {
        key: "contact.form.message",
        en: "Message",
        ar: "الرسالة",
    },
    Entry {
        key: "contact.form.submit",
        en: "Send Message",
        ar: "إرسال الرسالة",
    },
    Entry {
        key: "contact.error.name",
        en: "Name must be at least 2 characters.",
        ar: "يجب ألا يقل الاسم عن حرفين.",
    },
    Entry {
        key: "contact.error.email",
        en: "Enter a valid email address.",
        ar: "أدخل بريدًا إلكترونيًا صحيحًا.",
    },
    Entry {
        key: "contact.error.phone",
        en: "Phone must be at least 10 characters.",
        ar: "يجب ألا يقل رقم الهاتف عن 10 أرقام.",
    },
    Entry {
        key: "contact.error.message",
        en: "Message must be at least 10 characters.",
        ar: "يجب ألا تقل الرسالة عن 10 أحرف.",
    },
    Entry {
        key: "contact.notice.success",
        en: "Your message has been sent. We will get back to you shortly.",
        ar: "تم إرسال رسالتك. سنتواصل معك قريبًا.",
    },
    Entry {
        key: "contact.notice.failure",
        en: "Your message could not be sent. Please try again.",
        ar: "تعذر إرسال رسالتك. يرجى المحاولة مرة أخرى.",
    },
    // Blog
    Entry {
        key: "blogs.title",
        en: "Latest Articles",
        ar: "أحدث المقالات",
    },
    Entry {
        key: "blogs.description",
        en: "News, guides and insights from the cutting floor.",
        ar: "أخبار وأدلة ورؤى من عالم القطع الصناعي.",
    },
    Entry {
        key: "blogs.read_more",
        en: "Read More",
        ar: "اقرأ المزيد",
    },
    Entry {
        key: "blog.back",
        en: "Back to Articles",
        ar: "العودة إلى المقالات",
    },
    // Not found
    Entry {
        key: "not_found.title",
        en: "Page Not Found",
        ar: "الصفحة غير موجودة",
    },
    Entry {
        key: "not_found.body",
        en: "The page you are looking for does not exist.",
        ar: "الصفحة التي تبحث عنها غير موجودة.",
    },
    Entry {
        key: "not_found.home",
        en: "Go to Homepage",
        ar: "الذهاب إلى الرئيسية",
    },
];

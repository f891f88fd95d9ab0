//! Source-embedded fallback catalog: machines, services and blog posts.
//!
//! The live catalog comes from the content API; these tables render only
//! when a fetch fails or the API has no record for a requested slug, so
//! listing and detail pages always degrade to a complete document. Blog
//! pages are served from here exclusively.

use serde::Serialize;

use crate::locale::Locale;

/// A string pair carried in both site languages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Localized {
    #[must_use]
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ar => self.ar,
        }
    }
}

/// Machine families the site sells, aligned with the content API's
/// category ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MachineCategory {
    FiberLaser,
    Co2Laser,
    Plasma,
    Bandsaw,
}

impl MachineCategory {
    pub const ALL: [MachineCategory; 4] = [
        MachineCategory::FiberLaser,
        MachineCategory::Co2Laser,
        MachineCategory::Plasma,
        MachineCategory::Bandsaw,
    ];

    /// Numeric id used by the content API's category records.
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            MachineCategory::FiberLaser => 1,
            MachineCategory::Co2Laser => 2,
            MachineCategory::Plasma => 3,
            MachineCategory::Bandsaw => 4,
        }
    }

    #[must_use]
    pub fn from_id(id: u32) -> Option<MachineCategory> {
        MachineCategory::ALL.into_iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        let localized = match self {
            MachineCategory::FiberLaser => Localized {
                en: "Fiber Laser",
                ar: "ليزر فايبر",
            },
            MachineCategory::Co2Laser => Localized {
                en: "CO2 Laser",
                ar: "ليزر CO2",
            },
            MachineCategory::Plasma => Localized {
                en: "Plasma",
                ar: "بلازما",
            },
            MachineCategory::Bandsaw => Localized {
                en: "Bandsaw",
                ar: "منشار شريطي",
            },
        };
        localized.get(locale)
    }
}

/// One specification row on a machine page. Values are unit strings shared
/// across languages; only the label is translated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpecRow {
    pub label: Localized,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogProduct {
    pub slug: &'static str,
    pub category: MachineCategory,
    pub name: Localized,
    pub summary: Localized,
    pub description: Localized,
    pub image: &'static str,
    pub specs: &'static [SpecRow],
    pub video_url: Option<&'static str>,
    pub datasheet_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogService {
    pub slug: &'static str,
    pub title: Localized,
    pub description: Localized,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: Localized,
    pub excerpt: Localized,
    pub body: Localized,
    /// ISO date, newest posts first in [`BLOG_POSTS`].
    pub date: &'static str,
    pub image: &'static str,
}

#[must_use]
pub fn product_by_slug(slug: &str) -> Option<&'static CatalogProduct> {
    PRODUCTS.iter().find(|p| p.slug == slug)
}

#[must_use]
pub fn blog_by_slug(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}

pub fn products_in(
    category: MachineCategory,
) -> impl Iterator<Item = &'static CatalogProduct> {
    PRODUCTS.iter().filter(move |p| p.category == category)
}

pub static PRODUCTS: &[CatalogProduct] = &[
    CatalogProduct {
        slug: "mq-fiber-3015",
        category: MachineCategory::FiberLaser,
        name: Localized {
            en: "MQ Fiber 3015",
            ar: "MQ فايبر 3015",
        },
        summary: Localized {
            en: "Compact fiber laser for sheet metal up to 20 mm mild steel.",
            ar: "ماكينة ليزر فايبر مدمجة لقطع الصاج حتى 20 مم من الفولاذ الطري.",
        },
        description: Localized {
            en: "The MQ Fiber 3015 pairs a 3 × 1.5 m shuttle table with fiber sources from 1.5 to 6 kW. A sealed gantry and auto-focus cutting head keep edge quality consistent across shifts, and the shuttle table swaps pallets in under twenty seconds.",
            ar: "تجمع MQ فايبر 3015 بين طاولة تبادلية بمقاس 3 × 1.5 متر ومصادر فايبر من 1.5 إلى 6 كيلوواط. يحافظ الجسر المغلق ورأس القطع ذاتي التركيز على جودة حواف ثابتة طوال الورديات، وتبدّل الطاولة التبادلية الألواح في أقل من عشرين ثانية.",
        },
        image: "https://cdn.miqass.com/machines/mq-fiber-3015.jpg",
        specs: &[
            SpecRow {
                label: Localized {
                    en: "Working area",
                    ar: "منطقة العمل",
                },
                value: "3000 × 1500 mm",
            },
            SpecRow {
                label: Localized {
                    en: "Laser power",
                    ar: "قدرة الليزر",
                },
                value: "1.5 – 6 kW",
            },
            SpecRow {
                label: Localized {
                    en: "Max mild steel",
                    ar: "أقصى سماكة فولاذ طري",
                },
                value: "20 mm",
            },
            SpecRow {
                label: Localized {
                    en: "Positioning speed",
                    ar: "سرعة التموضع",
                },
                value: "140 m/min",
            },
        ],
        video_url: Some("https://cdn.miqass.com/video/mq-fiber-3015.mp4"),
        datasheet_url: Some("https://cdn.miqass.com/datasheets/mq-fiber-3015.pdf"),
    },
    CatalogProduct {
        slug: "mq-fiber-6025",
        category: MachineCategory::FiberLaser,
        name: Localized {
            en: "MQ Fiber 6025",
            ar: "MQ فايبر 6025",
        },
        summary: Localized {
            en: "Large-format fiber laser for heavy plate and long profiles.",
            ar: "ماكينة ليزر فايبر كبيرة الحجم للألواح الثقيلة والمقاطع الطويلة.",
        },
        description: Localized {
            en: "Built for 6 × 2.5 m plate, the MQ Fiber 6025 carries sources up to 12 kW on a cast crossbeam. Dual drive racks on both gantry sides hold tolerance over the full table length.",
            ar: "صُممت MQ فايبر 6025 للألواح مقاس 6 × 2.5 متر وتحمل مصادر حتى 12 كيلوواط على عارضة مصبوبة. تحافظ مجموعتا الدفع على جانبي الجسر على الدقة على كامل طول الطاولة.",
        },
        image: "https://cdn.miqass.com/machines/mq-fiber-6025.jpg",
        specs: &[
            SpecRow {
                label: Localized {
                    en: "Working area",
                    ar: "منطقة العمل",
                },
                value: "6000 × 2500 mm",
            },
            SpecRow {
                label: Localized {
                    en: "Laser power",
                    ar: "قدرة الليزر",
                },
                value: "6 – 12 kW",
            },
            SpecRow {
                label: Localized {
                    en: "Max mild steel",
                    ar: "أقصى سماكة فولاذ طري",
                },
                value: "40 mm",
            },
        ],
        video_url: None,
        datasheet_url: Some("https://cdn.miqass.com/datasheets/mq-fiber-6025.pdf"),
    },
    CatalogProduct {
        slug: "mq-co2-1390",
        category: MachineCategory::Co2Laser,
        name: Localized {
            en: "MQ CO2 1390",
            ar: "MQ ليزر CO2 ‏1390",
        },
        summary: Localized {
            en: "CO2 laser for acrylic, wood and thin non-metals.",
            ar: "ماكينة ليزر CO2 للأكريليك والخشب والمواد غير المعدنية الرقيقة.",
        },
        description: Localized {
            en: "A 1300 × 900 mm bed with a 100 or 150 W glass tube, honeycomb and knife-blade tables, and pass-through doors for oversized sheets. The workhorse for signage and display shops.",
            ar: "طاولة بمقاس 1300 × 900 مم مع أنبوب زجاجي بقدرة 100 أو 150 واط، وطاولتي شبك وسكاكين، وأبواب تمرير للألواح الكبيرة. الخيار الأمثل لورش اللافتات والعرض.",
        },
        image: "https://cdn.miqass.com/machines/mq-co2-1390.jpg",
        specs: &[
            SpecRow {
                label: Localized {
                    en: "Working area",
                    ar: "منطقة العمل",
                },
                value: "1300 × 900 mm",
            },
            SpecRow {
                label: Localized {
                    en: "Laser power",
                    ar: "قدرة الليزر",
                },
                value: "100 / 150 W",
            },
            SpecRow {
                label: Localized {
                    en: "Max acrylic",
                    ar: "أقصى سماكة أكريليك",
                },
                value: "25 mm",
            },
        ],
        video_url: None,
        datasheet_url: None,
    },
    CatalogProduct {
        slug: "mq-plasma-2060",
        category: MachineCategory::Plasma,
        name: Localized {
            en: "MQ Plasma 2060",
            ar: "MQ بلازما 2060",
        },
        summary: Localized {
            en: "Heavy-duty plasma table for thick plate and structural work.",
            ar: "طاولة بلازما للخدمة الشاقة للألواح السميكة والأعمال الإنشائية.",
        },
        description: Localized {
            en: "The MQ Plasma 2060 cuts a 2 × 6 m plate with sources up to 300 A and an optional oxy-fuel station for plate beyond plasma range. Arc voltage height control tracks warped plate without operator input.",
            ar: "تقطع MQ بلازما 2060 الألواح بمقاس 2 × 6 متر بمصادر حتى 300 أمبير مع محطة قطع باللهب اختيارية للألواح التي تتجاوز مدى البلازما. يتتبع التحكم في الارتفاع بجهد القوس الألواح الملتوية دون تدخل المشغل.",
        },
        image: "https://cdn.miqass.com/machines/mq-plasma-2060.jpg",
        specs: &[
            SpecRow {
                label: Localized {
                    en: "Working area",
                    ar: "منطقة العمل",
                },
                value: "2000 × 6000 mm",
            },
            SpecRow {
                label: Localized {
                    en: "Plasma source",
                    ar: "مصدر البلازما",
                },
                value: "125 – 300 A",
            },
            SpecRow {
                label: Localized {
                    en: "Max pierce",
                    ar: "أقصى سماكة ثقب",
                },
                value: "38 mm",
            },
        ],
        video_url: None,
        datasheet_url: Some("https://cdn.miqass.com/datasheets/mq-plasma-2060.pdf"),
    },
    CatalogProduct {
        slug: "mq-band-350",
        category: MachineCategory::Bandsaw,
        name: Localized {
            en: "MQ Band 350",
            ar: "MQ منشار 350",
        },
        summary: Localized {
            en: "Semi-automatic double-column bandsaw for solid stock.",
            ar: "منشار شريطي نصف أوتوماتيكي بعمودين للقضبان المصمتة.",
        },
        description: Localized {
            en: "A double-column frame with hydraulic down-feed and a 350 mm round capacity. Carbide-ready guides and a swarf auger keep the cut zone clear during long runs.",
            ar: "هيكل بعمودين مع تغذية هيدروليكية وسعة قطع دائرية 350 مم. موجهات جاهزة لشفرات الكربيد وناقل رايش يحافظان على منطقة القطع نظيفة أثناء التشغيل الطويل.",
        },
        image: "https://cdn.miqass.com/machines/mq-band-350.jpg",
        specs: &[
            SpecRow {
                label: Localized {
                    en: "Round capacity",
                    ar: "سعة القطع الدائرية",
                },
                value: "350 mm",
            },
            SpecRow {
                label: Localized {
                    en: "Blade speed",
                    ar: "سرعة الشفرة",
                },
                value: "20 – 100 m/min",
            },
        ],
        video_url: None,
        datasheet_url: None,
    },
];

pub static SERVICES: &[CatalogService] = &[
    CatalogService {
        slug: "installation",
        title: Localized {
            en: "Installation & Commissioning",
            ar: "التركيب والتشغيل",
        },
        description: Localized {
            en: "Site survey, rigging, alignment and first-cut commissioning by our own engineers.",
            ar: "معاينة الموقع والرفع والمحاذاة وتشغيل أول قطعة على يد مهندسينا.",
        },
        icon: "wrench",
    },
    CatalogService {
        slug: "training",
        title: Localized {
            en: "Operator Training",
            ar: "تدريب المشغلين",
        },
        description: Localized {
            en: "Hands-on programs covering programming, nesting and daily maintenance.",
            ar: "برامج عملية تغطي البرمجة والتعشيش والصيانة اليومية.",
        },
        icon: "graduation-cap",
    },
    CatalogService {
        slug: "maintenance",
        title: Localized {
            en: "Maintenance Contracts",
            ar: "عقود الصيانة",
        },
        description: Localized {
            en: "Scheduled preventive visits with priority response for contract customers.",
            ar: "زيارات وقائية مجدولة مع أولوية الاستجابة لعملاء العقود.",
        },
        icon: "calendar-check",
    },
    CatalogService {
        slug: "spare-parts",
        title: Localized {
            en: "Genuine Spare Parts",
            ar: "قطع الغيار الأصلية",
        },
        description: Localized {
            en: "Consumables and critical spares stocked locally for same-week delivery.",
            ar: "مستهلكات وقطع غيار حرجة متوفرة محليًا للتسليم خلال الأسبوع نفسه.",
        },
        icon: "gears",
    },
];

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "bandsaw-blade-care",
        title: Localized {
            en: "Five Habits That Double Bandsaw Blade Life",
            ar: "خمس عادات تضاعف عمر شفرة المنشار الشريطي",
        },
        excerpt: Localized {
            en: "Blade cost is the quiet line item on every sawing budget. These five habits cut it in half.",
            ar: "تكلفة الشفرات هي البند الصامت في ميزانية كل ورشة نشر. هذه العادات الخمس تخفضها إلى النصف.",
        },
        body: Localized {
            en: "Break in every new blade at half feed for the first dozen cuts; fresh tooth edges chip under full pressure. Match tooth pitch to the stock cross-section, not its material. Check coolant concentration weekly with a refractometer instead of by eye. Release blade tension at the end of each shift. And log every blade change so a shortening life shows up as a trend, not a surprise.",
            ar: "قم بترويض كل شفرة جديدة على نصف التغذية في أول اثنتي عشرة قطعة، فحواف الأسنان الجديدة تتكسر تحت الضغط الكامل. وافق خطوة الأسنان مع مقطع القضيب لا مع خامته. افحص تركيز سائل التبريد أسبوعيًا بمقياس الانكسار لا بالنظر. أرخِ شد الشفرة في نهاية كل وردية. وسجل كل تغيير شفرة حتى يظهر قصر العمر كاتجاه لا كمفاجأة.",
        },
        date: "2026-07-21",
        image: "https://cdn.miqass.com/blog/bandsaw-blade-care.jpg",
    },
    BlogPost {
        slug: "plasma-vs-laser",
        title: Localized {
            en: "Plasma or Laser: Which Cuts Your Steel Better?",
            ar: "بلازما أم ليزر: أيهما يقطع فولاذك أفضل؟",
        },
        excerpt: Localized {
            en: "Thickness, edge quality and running cost pull in different directions. Here is how we frame the choice.",
            ar: "السماكة وجودة الحافة وتكلفة التشغيل تتجاذب في اتجاهات مختلفة. إليك كيف نؤطر هذا الاختيار.",
        },
        body: Localized {
            en: "Below 12 mm, fiber laser wins on edge quality and part cost almost without exception. Between 12 and 25 mm the answer depends on what the parts do next: weld-prep edges favour plasma with a bevel head, paint-ready edges favour laser. Past 25 mm, plasma's consumable cost per metre takes over. The honest answer for many shops is one of each, with nesting software routing parts to whichever bed is free.",
            ar: "تحت 12 مم يتفوق ليزر الفايبر في جودة الحافة وتكلفة القطعة دون استثناء تقريبًا. بين 12 و25 مم يعتمد الجواب على وجهة القطع التالية: حواف التحضير للحام تفضل البلازما مع رأس شطف، والحواف الجاهزة للدهان تفضل الليزر. بعد 25 مم تتغلب تكلفة مستهلكات البلازما لكل متر. الجواب الصادق لكثير من الورش هو ماكينة من كل نوع، مع برنامج تعشيش يوجه القطع إلى الطاولة المتاحة.",
        },
        date: "2026-05-04",
        image: "https://cdn.miqass.com/blog/plasma-vs-laser.jpg",
    },
    BlogPost {
        slug: "choosing-a-fiber-laser",
        title: Localized {
            en: "How to Choose Your First Fiber Laser",
            ar: "كيف تختار أول ماكينة ليزر فايبر",
        },
        excerpt: Localized {
            en: "Power, bed size and automation options in plain terms, for shops moving up from plasma or shears.",
            ar: "القدرة ومقاس الطاولة وخيارات الأتمتة بلغة واضحة للورش المنتقلة من البلازما أو المقصات.",
        },
        body: Localized {
            en: "Start from the thickest material you cut weekly, not the thickest you have ever cut; one oversized job a year does not justify the next power tier. A 3 × 1.5 m bed covers standard regional sheet sizes, and a shuttle table earns its price back in loading time alone within the first year. Leave automation towers for the second machine: until the laser is the bottleneck, they are parked capital.",
            ar: "ابدأ من أسمك خامة تقطعها أسبوعيًا لا من أسمك خامة قطعتها يومًا؛ فعمل واحد كبير في السنة لا يبرر شريحة القدرة التالية. طاولة 3 × 1.5 متر تغطي مقاسات الصاج القياسية في المنطقة، والطاولة التبادلية تسترد ثمنها من وقت التحميل وحده خلال السنة الأولى. أجّل أبراج الأتمتة إلى الماكينة الثانية: فقبل أن يصبح الليزر هو عنق الزجاجة تظل رأس مال متوقفًا.",
        },
        date: "2026-03-12",
        image: "https://cdn.miqass.com/blog/choosing-a-fiber-laser.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn product_slugs_are_unique() {
        let mut seen = HashSet::new();
        for product in PRODUCTS {
            assert!(seen.insert(product.slug), "duplicate slug: {}", product.slug);
        }
    }

    #[test]
    fn blog_slugs_are_unique() {
        let mut seen = HashSet::new();
        for post in BLOG_POSTS {
            assert!(seen.insert(post.slug), "duplicate slug: {}", post.slug);
        }
    }

    #[test]
    fn every_product_is_fully_bilingual() {
        for product in PRODUCTS {
            assert!(!product.name.en.trim().is_empty(), "{}", product.slug);
            assert!(!product.name.ar.trim().is_empty(), "{}", product.slug);
            assert!(!product.summary.en.trim().is_empty(), "{}", product.slug);
            assert!(!product.summary.ar.trim().is_empty(), "{}", product.slug);
            assert!(!product.description.en.trim().is_empty(), "{}", product.slug);
            assert!(!product.description.ar.trim().is_empty(), "{}", product.slug);
            for row in product.specs {
                assert!(!row.label.en.trim().is_empty(), "{}", product.slug);
                assert!(!row.label.ar.trim().is_empty(), "{}", product.slug);
                assert!(!row.value.trim().is_empty(), "{}", product.slug);
            }
        }
    }

    #[test]
    fn category_ids_round_trip() {
        for category in MachineCategory::ALL {
            assert_eq!(MachineCategory::from_id(category.id()), Some(category));
        }
        assert_eq!(MachineCategory::from_id(0), None);
        assert_eq!(MachineCategory::from_id(99), None);
    }

    #[test]
    fn lookup_by_slug() {
        let product = product_by_slug("mq-fiber-3015").unwrap();
        assert_eq!(product.category, MachineCategory::FiberLaser);
        assert!(product.video_url.is_some());
        assert!(product_by_slug("mq-unknown").is_none());
    }

    #[test]
    fn products_in_filters_by_category() {
        let fiber: Vec<_> = products_in(MachineCategory::FiberLaser).collect();
        assert_eq!(fiber.len(), 2);
        assert!(fiber.iter().all(|p| p.category == MachineCategory::FiberLaser));

        let bandsaw: Vec<_> = products_in(MachineCategory::Bandsaw).collect();
        assert_eq!(bandsaw.len(), 1);
        assert_eq!(bandsaw[0].slug, "mq-band-350");
    }

    #[test]
    fn every_category_has_at_least_one_product() {
        for category in MachineCategory::ALL {
            assert!(
                products_in(category).next().is_some(),
                "no fallback product for {category:?}"
            );
        }
    }

    #[test]
    fn blog_posts_are_newest_first() {
        let dates: Vec<_> = BLOG_POSTS.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn localized_selects_language() {
        let pair = Localized {
            en: "Plasma",
            ar: "بلازما",
        };
        assert_eq!(pair.get(Locale::En), "Plasma");
        assert_eq!(pair.get(Locale::Ar), "بلازما");
    }
}

//! Built-in inspection checklist
//!
//! English labels are what the API stores, so renaming one here breaks the
//! redisplay of records submitted with the old wording.

use super::{ChecklistCatalog, ChecklistItem, ChecklistSection};
use crate::i18n::LocalizedText;
use once_cell::sync::Lazy;

type SectionSpec = (&'static str, &'static str, &'static str, &'static [(&'static str, &'static str, &'static str)]);

const SECTIONS: &[SectionSpec] = &[
    (
        "engine",
        "Engine",
        "المحرك",
        &[
            ("eng-1", "Oil leak", "تسريب زيت"),
            ("eng-2", "Coolant leak", "تسريب ماء الرديتر"),
            ("eng-3", "Abnormal engine noise", "صوت غير طبيعي في المحرك"),
            ("eng-4", "Engine misfire", "تقطيع في المحرك"),
            ("eng-5", "Excessive exhaust smoke", "دخان زائد من العادم"),
            ("eng-6", "Check engine light on", "لمبة فحص المحرك مضاءة"),
            ("eng-7", "Worn engine mounts", "كراسي المحرك تالفة"),
            ("eng-8", "Worn timing belt", "سير التوقيت متآكل"),
            ("eng-9", "Overheating", "ارتفاع حرارة المحرك"),
            ("eng-10", "Turbo fault", "عطل في التيربو"),
        ],
    ),
    (
        "gearboxBrakes",
        "Gearbox & Brakes",
        "القير والفرامل",
        &[
            ("gbx-1", "Gearbox oil leak", "تسريب زيت القير"),
            ("gbx-2", "Harsh gear shifting", "نقلات القير قوية"),
            ("gbx-3", "Gear slipping", "تفليت في القير"),
            ("gbx-4", "Gearbox noise", "صوت في القير"),
            ("gbx-5", "Worn brake pads", "فحمات الفرامل متآكلة"),
            ("gbx-6", "Warped brake discs", "هوبات الفرامل معوجة"),
            ("gbx-7", "Brake fluid leak", "تسريب زيت الفرامل"),
            ("gbx-8", "ABS warning light on", "لمبة ABS مضاءة"),
            ("gbx-9", "Handbrake fault", "عطل في فرامل اليد"),
        ],
    ),
    (
        "electrical",
        "Electrical",
        "الكهرباء",
        &[
            ("ele-1", "Weak battery", "البطارية ضعيفة"),
            ("ele-2", "Alternator fault", "عطل في الدينامو"),
            ("ele-3", "Starter motor fault", "عطل في السلف"),
            ("ele-4", "Headlights not working", "الأنوار الأمامية لا تعمل"),
            ("ele-5", "Tail lights not working", "الأنوار الخلفية لا تعمل"),
            ("ele-6", "Air conditioning fault", "عطل في المكيف"),
            ("ele-7", "Power windows fault", "عطل في النوافذ الكهربائية"),
            ("ele-8", "Central locking fault", "عطل في القفل المركزي"),
            ("ele-9", "Dashboard warning lights", "لمبات تحذير في الطبلون"),
            ("ele-10", "Horn not working", "البوري لا يعمل"),
            ("ele-11", "Airbag warning light on", "لمبة الوسادة الهوائية مضاءة"),
            ("ele-12", "Parking sensors fault", "عطل في حساسات الركن"),
        ],
    ),
    (
        "undercarriage",
        "Undercarriage",
        "أسفل السيارة",
        &[
            ("und-1", "Leaking shock absorbers", "تسريب في المساعدات"),
            ("und-2", "Worn suspension bushings", "جلب المقصات تالفة"),
            ("und-3", "Worn ball joints", "المفاصل تالفة"),
            ("und-4", "Steering rack leak", "تسريب في علبة الدركسون"),
            ("und-5", "Worn tie rod ends", "أطراف الدركسون تالفة"),
            ("und-6", "Torn CV joint boot", "جلدة العكس ممزقة"),
            ("und-7", "Exhaust system leak", "تسريب في نظام العادم"),
            ("und-8", "Uneven tyre wear", "تآكل غير منتظم في الإطارات"),
        ],
    ),
    (
        "body",
        "Body",
        "الهيكل الخارجي",
        &[
            ("bod-1", "Repainted panels", "قطع مصبوغة"),
            ("bod-2", "Body filler detected", "معجون في الهيكل"),
            ("bod-3", "Dents", "صدمات"),
            ("bod-4", "Scratches", "خدوش"),
            ("bod-5", "Rust", "صدأ"),
            ("bod-6", "Cracked windshield", "شرخ في الزجاج الأمامي"),
            ("bod-7", "Signs of accident repair", "آثار إصلاح حادث"),
            ("bod-8", "Misaligned panels", "عدم تطابق في القطع"),
        ],
    ),
    (
        "chassis4x4",
        "Chassis & 4x4",
        "الشاصي والدفع الرباعي",
        &[
            ("chs-1", "Transfer case fault", "عطل في علبة التوزيع"),
            ("chs-2", "4x4 engagement fault", "عطل في تعشيق الدفع الرباعي"),
            ("chs-3", "Differential noise", "صوت في الدفرنس"),
            ("chs-4", "Differential oil leak", "تسريب زيت الدفرنس"),
            ("chs-5", "Worn propeller shaft", "عمود الكردان تالف"),
            ("chs-6", "Chassis damage", "ضرر في الشاصي"),
            ("chs-7", "Chassis repair welds", "لحام في الشاصي"),
        ],
    ),
];

static BUILTIN: Lazy<ChecklistCatalog> = Lazy::new(|| {
    let sections = SECTIONS
        .iter()
        .map(|(key, title_en, title_ar, items)| ChecklistSection {
            key: key.to_string(),
            title: LocalizedText::new(*title_en, *title_ar),
            items: items
                .iter()
                .map(|(id, en, ar)| ChecklistItem::new(*id, *en, *ar))
                .collect(),
        })
        .collect();

    ChecklistCatalog::new(sections).expect("built-in checklist catalog is well-formed")
});

/// The catalog shipped with the client, validated on first use
pub fn builtin() -> &'static ChecklistCatalog {
    &BUILTIN
}

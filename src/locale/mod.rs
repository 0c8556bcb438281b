//! Locale flag, writing direction, and the label-lookup table.
//!
//! One wizard engine serves every locale: stage and field logic never branch
//! on [`Locale`], only text resolution does. Unknown keys fall back to the
//! key itself, which is also how runtime custom-option labels resolve (their
//! "key" is the raw display name the user typed).

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Languages the intake wizard ships labels for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ar => TextDirection::Rtl,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Writing direction hosts use when laying out wizard text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Resolves a label key for the given locale, falling back to the key itself
/// when no translation exists.
pub fn label(key: &str, locale: Locale) -> &str {
    match LABELS.get(key) {
        Some(&[en, ar]) => match locale {
            Locale::En => en,
            Locale::Ar => ar,
        },
        None => key,
    }
}

static LABELS: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    TABLE.iter().map(|(key, en, ar)| (*key, [*en, *ar])).collect()
});

#[rustfmt::skip]
const TABLE: &[(&str, &str, &str)] = &[
    // Stage titles and descriptions.
    ("stage.identity.title", "Identity", "الهوية"),
    ("stage.identity.description", "Basic identity of the horse", "البيانات الأساسية للحصان"),
    ("stage.ownership.title", "Ownership", "الملكية"),
    ("stage.ownership.description", "Owner and contact details", "بيانات المالك وجهة الاتصال"),
    ("stage.pedigree.title", "Pedigree", "النسب"),
    ("stage.pedigree.description", "Breeding and registry information", "معلومات النسب والتسجيل"),
    ("stage.health.title", "Health", "الصحة"),
    ("stage.health.description", "Health status and vaccinations", "الحالة الصحية والتطعيمات"),
    ("stage.training.title", "Training", "التدريب"),
    ("stage.training.description", "Discipline and trainer", "التخصص والمدرب"),
    ("stage.stabling.title", "Stabling", "الإسطبل"),
    ("stage.stabling.description", "Housing and feeding arrangements", "ترتيبات السكن والتغذية"),
    ("stage.insurance.title", "Insurance", "التأمين"),
    ("stage.insurance.description", "Policy details", "بيانات وثيقة التأمين"),
    ("stage.media.title", "Media", "الوسائط"),
    ("stage.media.description", "Photos and documents", "الصور والمستندات"),
    // Field labels.
    ("field.name", "Horse name", "اسم الحصان"),
    ("field.foaling_date", "Foaling date", "تاريخ الولادة"),
    ("field.sex", "Sex", "الجنس"),
    ("field.color", "Color", "اللون"),
    ("field.microchip", "Microchip number", "رقم الشريحة"),
    ("field.markings", "Markings", "العلامات المميزة"),
    ("field.owner_name", "Owner name", "اسم المالك"),
    ("field.owner_contact", "Owner contact", "بيانات الاتصال بالمالك"),
    ("field.co_owned", "Co-owned", "ملكية مشتركة"),
    ("field.co_owner_name", "Co-owner name", "اسم الشريك في الملكية"),
    ("field.syndicate_share", "Syndicate share (%)", "نسبة الحصة (٪)"),
    ("field.registered", "Registered", "مسجل في سجل رسمي"),
    ("field.registry", "Registry", "السجل"),
    ("field.registration_number", "Registration number", "رقم التسجيل"),
    ("field.sire_name", "Sire name", "اسم الأب"),
    ("field.dam_name", "Dam name", "اسم الأم"),
    ("field.health_status", "Health status", "الحالة الصحية"),
    ("field.treatment_notes", "Treatment notes", "ملاحظات العلاج"),
    ("field.vaccinated", "Vaccinated", "مُطعّم"),
    ("field.last_vaccination", "Last vaccination", "تاريخ آخر تطعيم"),
    ("field.weight_kg", "Weight (kg)", "الوزن (كجم)"),
    ("field.height_hands", "Height (hands)", "الارتفاع (قبضات)"),
    ("field.trained", "In training", "مدرّب"),
    ("field.discipline", "Discipline", "التخصص"),
    ("field.racing_class", "Racing class", "فئة السباق"),
    ("field.preferred_distance", "Preferred distance", "المسافة المفضلة"),
    ("field.trainer_name", "Trainer name", "اسم المدرب"),
    ("field.stabling_type", "Stabling type", "نوع الإيواء"),
    ("field.stall_number", "Stall number", "رقم الحظيرة"),
    ("field.turnout_group", "Turnout group", "مجموعة المرعى"),
    ("field.special_diet", "Special diet", "نظام غذائي خاص"),
    ("field.diet_notes", "Diet notes", "ملاحظات التغذية"),
    ("field.insured", "Insured", "مؤمّن عليه"),
    ("field.insurer", "Insurer", "شركة التأمين"),
    ("field.policy_number", "Policy number", "رقم الوثيقة"),
    ("field.coverage_amount", "Coverage amount", "مبلغ التغطية"),
    ("field.expiry_date", "Expiry date", "تاريخ انتهاء الوثيقة"),
    ("field.photos", "Photos", "الصور"),
    ("field.documents", "Documents", "المستندات"),
    ("field.notes", "Notes", "ملاحظات"),
    // Option labels.
    ("option.sex.mare", "Mare", "فرس"),
    ("option.sex.stallion", "Stallion", "فحل"),
    ("option.sex.gelding", "Gelding", "حصان مخصي"),
    ("option.sex.colt", "Colt", "مهر"),
    ("option.sex.filly", "Filly", "مهرة"),
    ("option.color.bay", "Bay", "كميت"),
    ("option.color.chestnut", "Chestnut", "أشقر"),
    ("option.color.grey", "Grey", "أشهب"),
    ("option.color.black", "Black", "أدهم"),
    ("option.color.palomino", "Palomino", "بالومينو"),
    ("option.color.roan", "Roan", "أرقط"),
    ("option.color.dun", "Dun", "أصفر رملي"),
    ("option.registry.jockey_club", "Jockey Club", "نادي الجوكي"),
    ("option.registry.aqha", "American Quarter Horse Association", "سجل كوارتر الأمريكي"),
    ("option.registry.warmblood_registry", "Warmblood Registry", "سجل الوارم بلد"),
    ("option.registry.arabian_registry", "Arabian Horse Registry", "سجل الخيل العربية"),
    ("option.health_status.sound", "Sound", "سليم"),
    ("option.health_status.recovering", "Recovering", "في فترة نقاهة"),
    ("option.health_status.under_treatment", "Under treatment", "تحت العلاج"),
    ("option.discipline.dressage", "Dressage", "ترويض"),
    ("option.discipline.show_jumping", "Show jumping", "قفز الحواجز"),
    ("option.discipline.eventing", "Eventing", "الفروسية الشاملة"),
    ("option.discipline.racing", "Racing", "سباق"),
    ("option.discipline.western", "Western", "فروسية غربية"),
    ("option.discipline.endurance", "Endurance", "قدرة وتحمل"),
    ("option.racing_class.flat", "Flat", "مضمار مستو"),
    ("option.racing_class.steeplechase", "Steeplechase", "سباق الحواجز"),
    ("option.racing_class.harness", "Harness", "عربات"),
    ("option.racing_distance.sprint", "Sprint", "مسافة قصيرة"),
    ("option.racing_distance.mile", "Mile", "ميل"),
    ("option.racing_distance.middle", "Middle distance", "مسافة متوسطة"),
    ("option.racing_distance.staying", "Staying", "مسافة طويلة"),
    ("option.stabling_type.stall", "Stall", "حظيرة داخلية"),
    ("option.stabling_type.paddock", "Paddock", "بادوك"),
    ("option.stabling_type.pasture", "Pasture", "مرعى"),
    ("option.turnout_group.mares", "Mares", "إناث"),
    ("option.turnout_group.geldings", "Geldings", "مخصية"),
    ("option.turnout_group.youngstock", "Youngstock", "أمهار"),
    ("option.turnout_group.mixed", "Mixed", "مختلطة"),
    ("option.insurer.equisure", "EquiSure", "إكوي شور"),
    ("option.insurer.paddock_mutual", "Paddock Mutual", "بادوك ميوتشوال"),
    ("option.insurer.bridleway", "Bridleway", "برايدل واي"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_resolves_per_locale() {
        assert_eq!(label("stage.identity.title", Locale::En), "Identity");
        assert_eq!(label("stage.identity.title", Locale::Ar), "الهوية");
    }

    #[test]
    fn unknown_keys_fall_back_to_themselves() {
        assert_eq!(label("My Custom Insurer", Locale::En), "My Custom Insurer");
        assert_eq!(label("My Custom Insurer", Locale::Ar), "My Custom Insurer");
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Locale::En.direction(), TextDirection::Ltr);
    }

    #[test]
    fn locale_codes_round_trip() {
        assert_eq!(Locale::from_code("AR"), Some(Locale::Ar));
        assert_eq!(Locale::from_code(Locale::En.code()), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn every_table_entry_has_both_translations() {
        for (key, en, ar) in TABLE {
            assert!(!en.is_empty() && !ar.is_empty(), "untranslated key {key}");
        }
    }
}

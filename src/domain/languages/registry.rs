use serde::Serialize;

/// Display metadata for a supported target language.
///
/// `uz_name` is the Uzbek display name shown to users of the front-end,
/// `native` is the language's own name and `flag` a short label code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    #[serde(skip)]
    pub code: &'static str,
    pub name: &'static str,
    pub uz_name: &'static str,
    pub native: &'static str,
    pub flag: &'static str,
}

const fn entry(
    code: &'static str,
    name: &'static str,
    uz_name: &'static str,
    native: &'static str,
    flag: &'static str,
) -> LanguageEntry {
    LanguageEntry {
        code,
        name,
        uz_name,
        native,
        flag,
    }
}

/// The fixed set of translation targets. Uzbek is always the source and is
/// therefore not listed here.
pub const SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    entry("en", "English", "Inglizcha", "English", "EN"),
    entry("ru", "Russian", "Ruscha", "Ruski", "RU"),
    entry("tr", "Turkish", "Turkcha", "Turkce", "TR"),
    entry("ar", "Arabic", "Arabcha", "Al-Arabiyya", "AR"),
    entry("zh-CN", "Chinese", "Xitoycha", "Zhongwen", "CN"),
    entry("ko", "Korean", "Koreyscha", "Hangugeo", "KO"),
    entry("ja", "Japanese", "Yaponcha", "Nihongo", "JA"),
    entry("de", "German", "Nemischa", "Deutsch", "DE"),
    entry("fr", "French", "Fransuzcha", "Francais", "FR"),
    entry("es", "Spanish", "Ispancha", "Espanol", "ES"),
    entry("it", "Italian", "Italyancha", "Italiano", "IT"),
    entry("pt", "Portuguese", "Portugalcha", "Portugues", "PT"),
    entry("hi", "Hindi", "Hindcha", "Hindi", "HI"),
    entry("fa", "Persian", "Forscha", "Farsi", "FA"),
    entry("kk", "Kazakh", "Qozoqcha", "Qazaqsha", "KK"),
    entry("ky", "Kyrgyz", "Qirg'izcha", "Kyrgyzcha", "KY"),
    entry("az", "Azerbaijani", "Ozarbayjoncha", "Azerbaycanca", "AZ"),
    entry("uk", "Ukrainian", "Ukraincha", "Ukrayinska", "UK"),
    entry("pl", "Polish", "Polyakcha", "Polski", "PL"),
    entry("nl", "Dutch", "Gollandcha", "Nederlands", "NL"),
];

/// Look up a language by its code. `None` means the code is not supported.
pub fn get(code: &str) -> Option<&'static LanguageEntry> {
    SUPPORTED_LANGUAGES.iter().find(|e| e.code == code)
}

/// All registered languages, in registration order.
pub fn all() -> &'static [LanguageEntry] {
    SUPPORTED_LANGUAGES
}

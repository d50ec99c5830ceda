//! Static catalogs of known parameter codes.
//!
//! `hl` and `gl` take plain language and country codes. `lr` and `cr` use
//! their own restrict spellings (`lang_en`, `countryUS`), which overlap with
//! but are not identical to the plain tables (Hebrew is `he` for `hl` but
//! `lang_iw` for `lr`; the United Kingdom is `gb` for `gl` but `countryUK`
//! for `cr`).
//!
//! Membership ([`is_known`]) is decoupled from display names
//! ([`display_name`]); unknown codes are still valid parameter values and are
//! shown as custom codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Interface language
    Hl,
    /// Geolocation / country bias
    Gl,
    /// Language restrict
    Lr,
    /// Country restrict
    Cr,
}

impl Axis {
    /// All axes in URL order.
    pub const ALL: [Axis; 4] = [Axis::Hl, Axis::Gl, Axis::Lr, Axis::Cr];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hl => "hl",
            Self::Gl => "gl",
            Self::Lr => "lr",
            Self::Cr => "cr",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hl => "Interface language",
            Self::Gl => "Search region",
            Self::Lr => "Result language",
            Self::Cr => "Result country",
        }
    }

    /// Look up an axis by its query-string key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.key() == key)
    }

    /// Whether values on this axis may use multi-value/exclude syntax.
    pub fn supports_advanced(self) -> bool {
        matches!(self, Self::Lr | Self::Cr)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown axis '{s}' (expected hl, gl, lr or cr)"))
    }
}

/// A known code and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry { code, name }
}

/// Interface languages (`hl`).
pub const LANGUAGES: &[CatalogEntry] = &[
    entry("en", "English"),
    entry("ko", "Korean"),
    entry("ja", "Japanese"),
    entry("zh-CN", "Chinese (Simplified)"),
    entry("zh-TW", "Chinese (Traditional)"),
    entry("es", "Spanish"),
    entry("fr", "French"),
    entry("de", "German"),
    entry("it", "Italian"),
    entry("pt-BR", "Portuguese (Brazil)"),
    entry("pt-PT", "Portuguese (Portugal)"),
    entry("ru", "Russian"),
    entry("ar", "Arabic"),
    entry("hi", "Hindi"),
    entry("id", "Indonesian"),
    entry("vi", "Vietnamese"),
    entry("th", "Thai"),
    entry("tr", "Turkish"),
    entry("nl", "Dutch"),
    entry("pl", "Polish"),
    entry("sv", "Swedish"),
    entry("da", "Danish"),
    entry("fi", "Finnish"),
    entry("no", "Norwegian"),
    entry("cs", "Czech"),
    entry("el", "Greek"),
    entry("he", "Hebrew"),
    entry("hu", "Hungarian"),
    entry("uk", "Ukrainian"),
    entry("ro", "Romanian"),
    entry("ms", "Malay"),
    entry("fil", "Filipino"),
];

/// Countries (`gl`).
pub const COUNTRIES: &[CatalogEntry] = &[
    entry("us", "United States"),
    entry("kr", "South Korea"),
    entry("jp", "Japan"),
    entry("gb", "United Kingdom"),
    entry("ca", "Canada"),
    entry("au", "Australia"),
    entry("nz", "New Zealand"),
    entry("ie", "Ireland"),
    entry("in", "India"),
    entry("cn", "China"),
    entry("tw", "Taiwan"),
    entry("hk", "Hong Kong"),
    entry("sg", "Singapore"),
    entry("de", "Germany"),
    entry("fr", "France"),
    entry("es", "Spain"),
    entry("it", "Italy"),
    entry("nl", "Netherlands"),
    entry("se", "Sweden"),
    entry("no", "Norway"),
    entry("dk", "Denmark"),
    entry("fi", "Finland"),
    entry("pl", "Poland"),
    entry("ru", "Russia"),
    entry("ua", "Ukraine"),
    entry("tr", "Turkey"),
    entry("br", "Brazil"),
    entry("mx", "Mexico"),
    entry("ar", "Argentina"),
    entry("id", "Indonesia"),
    entry("vn", "Vietnam"),
    entry("th", "Thailand"),
    entry("ph", "Philippines"),
    entry("my", "Malaysia"),
    entry("sa", "Saudi Arabia"),
    entry("ae", "United Arab Emirates"),
    entry("il", "Israel"),
    entry("za", "South Africa"),
];

/// Language restricts (`lr`).
pub const LANGUAGE_RESTRICTS: &[CatalogEntry] = &[
    entry("lang_en", "English"),
    entry("lang_ko", "Korean"),
    entry("lang_ja", "Japanese"),
    entry("lang_zh-CN", "Chinese (Simplified)"),
    entry("lang_zh-TW", "Chinese (Traditional)"),
    entry("lang_es", "Spanish"),
    entry("lang_fr", "French"),
    entry("lang_de", "German"),
    entry("lang_it", "Italian"),
    entry("lang_pt", "Portuguese"),
    entry("lang_ru", "Russian"),
    entry("lang_ar", "Arabic"),
    entry("lang_id", "Indonesian"),
    entry("lang_vi", "Vietnamese"),
    entry("lang_th", "Thai"),
    entry("lang_tr", "Turkish"),
    entry("lang_nl", "Dutch"),
    entry("lang_pl", "Polish"),
    entry("lang_sv", "Swedish"),
    entry("lang_da", "Danish"),
    entry("lang_fi", "Finnish"),
    entry("lang_no", "Norwegian"),
    entry("lang_cs", "Czech"),
    entry("lang_el", "Greek"),
    entry("lang_iw", "Hebrew"),
    entry("lang_hu", "Hungarian"),
    entry("lang_uk", "Ukrainian"),
    entry("lang_ro", "Romanian"),
];

/// Country restricts (`cr`).
pub const COUNTRY_RESTRICTS: &[CatalogEntry] = &[
    entry("countryUS", "United States"),
    entry("countryKR", "South Korea"),
    entry("countryJP", "Japan"),
    entry("countryUK", "United Kingdom"),
    entry("countryCA", "Canada"),
    entry("countryAU", "Australia"),
    entry("countryNZ", "New Zealand"),
    entry("countryIE", "Ireland"),
    entry("countryIN", "India"),
    entry("countryCN", "China"),
    entry("countryTW", "Taiwan"),
    entry("countryHK", "Hong Kong"),
    entry("countrySG", "Singapore"),
    entry("countryDE", "Germany"),
    entry("countryFR", "France"),
    entry("countryES", "Spain"),
    entry("countryIT", "Italy"),
    entry("countryNL", "Netherlands"),
    entry("countrySE", "Sweden"),
    entry("countryNO", "Norway"),
    entry("countryDK", "Denmark"),
    entry("countryFI", "Finland"),
    entry("countryPL", "Poland"),
    entry("countryRU", "Russia"),
    entry("countryUA", "Ukraine"),
    entry("countryTR", "Turkey"),
    entry("countryBR", "Brazil"),
    entry("countryMX", "Mexico"),
    entry("countryAR", "Argentina"),
    entry("countryID", "Indonesia"),
    entry("countryVN", "Vietnam"),
    entry("countryTH", "Thailand"),
    entry("countryPH", "Philippines"),
    entry("countryMY", "Malaysia"),
    entry("countrySA", "Saudi Arabia"),
    entry("countryAE", "United Arab Emirates"),
    entry("countryIL", "Israel"),
    entry("countryZA", "South Africa"),
];

/// Built-in favorites used to seed a fresh store.
pub const DEFAULT_FAVORITES: [(Axis, &[&str]); 4] = [
    (Axis::Hl, &["en", "ko", "ja"]),
    (Axis::Gl, &["us", "kr", "jp"]),
    (Axis::Lr, &["lang_en", "lang_ko"]),
    (Axis::Cr, &["countryUS", "countryKR"]),
];

/// Known codes for an axis, in display order.
pub fn entries(axis: Axis) -> &'static [CatalogEntry] {
    match axis {
        Axis::Hl => LANGUAGES,
        Axis::Gl => COUNTRIES,
        Axis::Lr => LANGUAGE_RESTRICTS,
        Axis::Cr => COUNTRY_RESTRICTS,
    }
}

/// Whether `code` is a known value for `axis`.
///
/// `code` is a single token; multi-value raw strings must be parsed first.
pub fn is_known(axis: Axis, code: &str) -> bool {
    entries(axis).iter().any(|e| e.code == code)
}

/// Display name for a known code.
pub fn display_name(axis: Axis, code: &str) -> Option<&'static str> {
    entries(axis).iter().find(|e| e.code == code).map(|e| e.name)
}

/// Display label for any code, falling back to the code itself for custom values.
pub fn label(axis: Axis, code: &str) -> String {
    match display_name(axis, code) {
        Some(name) => format!("{name} ({code})"),
        None if code.is_empty() => "(empty)".to_string(),
        None => format!("custom ({code})"),
    }
}

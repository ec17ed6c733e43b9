//! Presentation settings for the rendered page (`[page]` section).

use serde::{Deserialize, Serialize};

/// Bootstrap 5.3 right-to-left build used by the default page.
pub const DEFAULT_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.rtl.min.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

/// Texts and styling of the loading page. Every field is optional in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub lang: String,
    pub dir: TextDirection,
    pub title: String,
    pub heading: String,
    pub subheading: String,
    /// Screen-reader label of the spinner.
    pub spinner_label: String,
    /// Status message shown under the heading.
    pub loading_text: String,
    /// Bold prefix of the fallback notice.
    pub note_label: String,
    /// Text placed before the fallback link.
    pub fallback_note: String,
    pub fallback_link_text: String,
    pub footer: String,
    /// External stylesheet; the page still lays out without it.
    pub stylesheet_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "ar".to_string(),
            dir: TextDirection::Rtl,
            title: "نظام إدارة مكتب المحاماة".to_string(),
            heading: "🏛️ نظام إدارة مكتب المحاماة".to_string(),
            subheading: "المحامي فالح بن عقاب آل عيسى".to_string(),
            spinner_label: "جاري التحميل...".to_string(),
            loading_text: "جاري تحميل النظام...".to_string(),
            note_label: "ملاحظة:".to_string(),
            fallback_note: "إذا لم يتم التحويل تلقائياً،".to_string(),
            fallback_link_text: "اضغط هنا".to_string(),
            footer: "نظام شامل لإدارة العملاء والقضايا والفواتير والمستندات".to_string(),
            stylesheet_url: Some(DEFAULT_STYLESHEET_URL.to_string()),
        }
    }
}

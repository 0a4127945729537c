//! Request-side data model: form fields, style selection, render options.
//!
//! Style keys arrive as free strings from the host UI. Unknown keys never fail
//! deserialization; each family falls back to its first variant.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Form data
// ────────────────────────────────────────────────────────────────────────────

/// The user-entered letter fields. Every field is optional; blank counts as absent.
/// Unset fields are left out when serialized, so a host merging a response keeps its own values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_hr_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_address: Option<String>,
}

/// Returns the trimmed value when it is present and not whitespace-only.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl FormData {
    fn all_values(&self) -> [&Option<String>; 15] {
        [
            &self.letter_type,
            &self.company_name,
            &self.candidate_name,
            &self.position,
            &self.salary,
            &self.start_date,
            &self.location,
            &self.benefits,
            &self.additional_notes,
            &self.hr_name,
            &self.hr_title,
            &self.custom_hr_title,
            &self.hr_email,
            &self.hr_phone,
            &self.office_address,
        ]
    }

    /// True when at least one field carries text. An empty form previews as a placeholder panel.
    pub fn has_any_content(&self) -> bool {
        self.all_values().into_iter().any(|v| non_blank(v).is_some())
    }

    /// Upper-cased letter title, `OFFER LETTER` when no letter type is set.
    pub fn letter_title(&self) -> String {
        non_blank(&self.letter_type)
            .map(str::to_uppercase)
            .unwrap_or_else(|| "OFFER LETTER".to_string())
    }

    /// The HR title, resolving the `custom` choice to the free-text title.
    pub fn resolved_hr_title(&self) -> Option<&str> {
        match non_blank(&self.hr_title) {
            Some(title) if title.eq_ignore_ascii_case("custom") => non_blank(&self.custom_hr_title),
            other => other,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style selection
// ────────────────────────────────────────────────────────────────────────────

/// Typography family of the letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
    Corporate,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Modern,
        Template::Classic,
        Template::Minimal,
        Template::Corporate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
            Template::Corporate => "corporate",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for Template {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// Primary/secondary accent palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ColorScheme {
    #[default]
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Teal,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Blue,
        ColorScheme::Green,
        ColorScheme::Red,
        ColorScheme::Purple,
        ColorScheme::Orange,
        ColorScheme::Teal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ColorScheme::Blue => "blue",
            ColorScheme::Green => "green",
            ColorScheme::Red => "red",
            ColorScheme::Purple => "purple",
            ColorScheme::Orange => "orange",
            ColorScheme::Teal => "teal",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for ColorScheme {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// Arrangement and phrasing of the letter body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Layout {
    #[default]
    Standard,
    Compact,
    Detailed,
    Executive,
    Casual,
    Formal,
    Creative,
    Minimalist,
}

impl Layout {
    pub const ALL: [Layout; 8] = [
        Layout::Standard,
        Layout::Compact,
        Layout::Detailed,
        Layout::Executive,
        Layout::Casual,
        Layout::Formal,
        Layout::Creative,
        Layout::Minimalist,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::Compact => "compact",
            Layout::Detailed => "detailed",
            Layout::Executive => "executive",
            Layout::Casual => "casual",
            Layout::Formal => "formal",
            Layout::Creative => "creative",
            Layout::Minimalist => "minimalist",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|l| l.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }

    /// CSS class placed on the letter root, e.g. `compact-layout`.
    pub fn css_class(self) -> String {
        format!("{}-layout", self.key())
    }
}

impl From<String> for Layout {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// Closing block: valediction plus contact-line policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SignatureStyle {
    #[default]
    Formal,
    Friendly,
    Executive,
    Simple,
}

impl SignatureStyle {
    pub const ALL: [SignatureStyle; 4] = [
        SignatureStyle::Formal,
        SignatureStyle::Friendly,
        SignatureStyle::Executive,
        SignatureStyle::Simple,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SignatureStyle::Formal => "formal",
            SignatureStyle::Friendly => "friendly",
            SignatureStyle::Executive => "executive",
            SignatureStyle::Simple => "simple",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }
}

impl From<String> for SignatureStyle {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// The complete visual selection for one render. Passed explicitly; never global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSelection {
    pub template: Template,
    pub color_scheme: ColorScheme,
    pub layout: Layout,
    pub signature_style: SignatureStyle,
}

// ────────────────────────────────────────────────────────────────────────────
// Render options
// ────────────────────────────────────────────────────────────────────────────

/// Per-render settings that are neither letter content nor a fixed style choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Date printed at the top of the letter. Handlers fill this with today's date.
    pub issue_date: Option<NaiveDate>,
    /// Overrides the template's font family.
    pub font_family: Option<String>,
    /// Overrides the template's font size, in px. Accepts a number or a numeric string.
    #[serde(deserialize_with = "lenient_font_size")]
    pub font_size: Option<u8>,
    /// `data:image/...` URL produced by the logo endpoint.
    pub logo: Option<String>,
    pub include_email: bool,
    pub include_phone: bool,
    pub include_address: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            issue_date: None,
            font_family: None,
            font_size: None,
            logo: None,
            include_email: true,
            include_phone: false,
            include_address: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FontSizeInput {
    Number(f64),
    Text(String),
}

/// Reads `14`, `14.5`, `"14"` or `"14px"`, rounding and saturating into `u8`. The
/// renderer clamps to the supported range. Text that is not a number is ignored.
fn lenient_font_size<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let px = match Option::<FontSizeInput>::deserialize(deserializer)? {
        None => None,
        Some(FontSizeInput::Number(px)) => Some(px),
        Some(FontSizeInput::Text(raw)) => {
            let raw = raw.trim();
            raw.strip_suffix("px").unwrap_or(raw).trim().parse::<f64>().ok()
        }
    };
    Ok(px
        .filter(|px| px.is_finite())
        .map(|px| px.round().clamp(0.0, f64::from(u8::MAX)) as u8))
}

/// Everything one compose call needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterRequest {
    pub form: FormData,
    pub style: StyleSelection,
    pub options: RenderOptions,
}

impl LetterRequest {
    /// Fills in the issue date when the caller did not pin one.
    pub fn with_issue_date_or(mut self, today: NaiveDate) -> Self {
        self.options.issue_date.get_or_insert(today);
        self
    }
}

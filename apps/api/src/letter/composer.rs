//! Letter Composer: turns form data plus an explicit style selection into one
//! self-contained HTML fragment (inline `<style>` + markup).
//!
//! Pure and deterministic: identical inputs produce byte-identical output. The issue
//! date is an input, never read from the clock here.

use tracing::debug;

use crate::letter::format::{
    display_salary, display_start_date, escape_html, first_name, format_long_date,
};
use crate::letter::layouts::render_body;
use crate::letter::models::{non_blank, FormData, RenderOptions, StyleSelection};
use crate::letter::signature::{render_signature, ContactPolicy, SignatureFields};
use crate::letter::styles::{fragment_stylesheet, palette, resolve_font};

const COMPANY_PLACEHOLDER: &str = "[Company Name]";
const CANDIDATE_PLACEHOLDER: &str = "[Candidate Name]";
const POSITION_PLACEHOLDER: &str = "[Position]";
const LOCATION_PLACEHOLDER: &str = "[Location]";
const FIRST_NAME_PLACEHOLDER: &str = "[Name]";
const DATE_PLACEHOLDER: &str = "[Date]";
const HR_NAME_PLACEHOLDER: &str = "[HR Name]";
const HR_TITLE_PLACEHOLDER: &str = "[HR Title]";
const OFFICE_ADDRESS_PLACEHOLDER: &str = "[Office Address]";

/// Display values for the letter body, escaped and with placeholders applied.
/// Optional sections stay `None` so layouts can leave them out entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFields {
    pub company: String,
    pub candidate: String,
    pub first_name: String,
    pub position: String,
    pub salary: String,
    pub start_date: String,
    pub location: Option<String>,
    pub benefits: Option<String>,
    pub notes: Option<String>,
}

impl LetterFields {
    pub fn resolve(form: &FormData) -> Self {
        let candidate = non_blank(&form.candidate_name);
        LetterFields {
            company: escaped_or(&form.company_name, COMPANY_PLACEHOLDER),
            candidate: escaped_or(&form.candidate_name, CANDIDATE_PLACEHOLDER),
            first_name: candidate
                .map(|name| escape_html(first_name(name)))
                .unwrap_or_else(|| FIRST_NAME_PLACEHOLDER.to_string()),
            position: escaped_or(&form.position, POSITION_PLACEHOLDER),
            salary: display_salary(non_blank(&form.salary)),
            start_date: display_start_date(non_blank(&form.start_date)),
            location: escaped(&form.location),
            benefits: escaped(&form.benefits),
            notes: escaped(&form.additional_notes),
        }
    }
}

fn escaped(value: &Option<String>) -> Option<String> {
    non_blank(value).map(escape_html)
}

fn escaped_or(value: &Option<String>, placeholder: &str) -> String {
    escaped(value).unwrap_or_else(|| placeholder.to_string())
}

fn signature_fields(form: &FormData, company: &str) -> SignatureFields {
    SignatureFields {
        hr_name: escaped_or(&form.hr_name, HR_NAME_PLACEHOLDER),
        hr_title: form
            .resolved_hr_title()
            .map(escape_html)
            .unwrap_or_else(|| HR_TITLE_PLACEHOLDER.to_string()),
        company: company.to_string(),
        hr_email: escaped(&form.hr_email),
        hr_phone: escaped(&form.hr_phone),
        office_address: escaped_or(&form.office_address, OFFICE_ADDRESS_PLACEHOLDER),
    }
}

/// Only inline image data is embedded; anything else would let the letter fetch
/// remote content when opened.
fn logo_html(options: &RenderOptions) -> String {
    match options.logo.as_deref().map(str::trim) {
        Some(url) if url.starts_with("data:image/") => format!(
            r#"<div class="letter-logo"><img src="{}" alt="Company Logo"></div>"#,
            escape_html(url)
        ),
        Some(_) => {
            debug!("Ignoring logo that is not an inline image data URL");
            String::new()
        }
        None => String::new(),
    }
}

/// Composes the offer letter fragment.
pub fn compose(form: &FormData, style: &StyleSelection, options: &RenderOptions) -> String {
    let fields = LetterFields::resolve(form);
    let colors = palette(style.color_scheme);
    let (font_family, font_size) = resolve_font(style.template, options);

    let body = render_body(style.layout, &fields);
    let signature = render_signature(
        style.signature_style,
        &signature_fields(form, &fields.company),
        ContactPolicy::from(options),
    );

    let issue_date = options
        .issue_date
        .map(format_long_date)
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string());

    let recipient_location = fields
        .location
        .as_deref()
        .unwrap_or(LOCATION_PLACEHOLDER);

    debug!(
        "Composing letter: layout={} signature={} scheme={}",
        style.layout.key(),
        style.signature_style.key(),
        style.color_scheme.key()
    );

    format!(
        r#"
        {stylesheet}
        <div class="letter-content {layout_class}">
            {logo}
            <div class="letter-header">
                <h2 class="letter-title">{title}</h2>
            </div>

            <div class="date">{issue_date}</div>

            <div class="recipient">
                {candidate}<br>
                {recipient_location}
            </div>

            <div class="salutation">Dear {first_name},</div>

            <div class="body">
                {body}
            </div>

            <div class="closing">
                {signature}
            </div>
        </div>
    "#,
        stylesheet = fragment_stylesheet(&font_family, font_size, colors),
        layout_class = style.layout.css_class(),
        logo = logo_html(options),
        title = escape_html(&form.letter_title()),
        candidate = fields.candidate,
        first_name = fields.first_name,
    )
}

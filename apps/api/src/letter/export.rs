//! Export: required-field gate plus the print-ready page that wraps a composed letter.
//!
//! Preview never validates; export refuses to render until the five required fields
//! are filled, and reports the first blank one.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::letter::composer::compose;
use crate::letter::format::escape_html;
use crate::letter::models::{non_blank, FormData, RenderOptions, StyleSelection};
use crate::letter::styles::{letter_rules, palette, resolve_font};

/// Delay before the print dialog opens, giving images time to decode.
const AUTO_PRINT_DELAY_MS: u32 = 800;

/// Fields that must be filled before a letter may be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    CompanyName,
    CandidateName,
    Position,
    Salary,
    StartDate,
}

impl RequiredField {
    /// Canonical check order.
    pub const ALL: [RequiredField; 5] = [
        RequiredField::CompanyName,
        RequiredField::CandidateName,
        RequiredField::Position,
        RequiredField::Salary,
        RequiredField::StartDate,
    ];

    /// Wire name of the form field.
    pub fn key(self) -> &'static str {
        match self {
            RequiredField::CompanyName => "companyName",
            RequiredField::CandidateName => "candidateName",
            RequiredField::Position => "position",
            RequiredField::Salary => "salary",
            RequiredField::StartDate => "startDate",
        }
    }

    /// Lower-case words for user-facing messages: `companyName` → `company name`.
    pub fn words(self) -> String {
        let mut words = String::new();
        for c in self.key().chars() {
            if c.is_ascii_uppercase() {
                words.push(' ');
                words.push(c.to_ascii_lowercase());
            } else {
                words.push(c);
            }
        }
        words
    }

    fn value(self, form: &FormData) -> Option<&str> {
        match self {
            RequiredField::CompanyName => non_blank(&form.company_name),
            RequiredField::CandidateName => non_blank(&form.candidate_name),
            RequiredField::Position => non_blank(&form.position),
            RequiredField::Salary => non_blank(&form.salary),
            RequiredField::StartDate => non_blank(&form.start_date),
        }
    }
}

/// Every blank required field, in canonical order.
pub fn missing_required_fields(form: &FormData) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| field.value(form).is_none())
        .collect()
}

/// Fails with the first blank required field.
pub fn validate_for_export(form: &FormData) -> Result<(), AppError> {
    match missing_required_fields(form).first() {
        Some(field) => {
            warn!("Export rejected: {} is blank", field.key());
            Err(AppError::MissingField(*field))
        }
        None => Ok(()),
    }
}

/// Validates and then wraps the composed letter in a complete HTML page styled for
/// print-to-PDF. Nothing is composed when validation fails.
pub fn build_print_document(
    form: &FormData,
    style: &StyleSelection,
    options: &RenderOptions,
    auto_print: bool,
) -> Result<String, AppError> {
    validate_for_export(form)?;

    let letter = compose(form, style, options);
    let (font_family, font_size) = resolve_font(style.template, options);
    let title = format!(
        "{} - {}",
        form.letter_title(),
        non_blank(&form.candidate_name).unwrap_or_default()
    );

    let script = if auto_print {
        format!(
            "\n    <script>window.addEventListener('load', function () {{ setTimeout(function () {{ window.print(); }}, {AUTO_PRINT_DELAY_MS}); }});</script>"
        )
    } else {
        String::new()
    };

    info!(
        "Built print document ({} layout, {} bytes of letter markup)",
        style.layout.key(),
        letter.len()
    );

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="UTF-8">
    <style>
            * {{
                box-sizing: border-box;
            }}
            body {{
                font-family: {font_family}, serif;
                font-size: {font_size}px;
                line-height: 1.6;
                max-width: 800px;
                margin: 0 auto;
                padding: 40px 20px;
                color: #000;
                background: #fff;
            }}{rules}

            @media print {{
                body {{
                    margin: 0;
                    padding: 20px;
                    font-size: 12px;
                }}
                @page {{
                    margin: 0.75in;
                    size: A4;
                }}
                .letter-header {{
                    page-break-inside: avoid;
                }}
                .signature {{
                    page-break-inside: avoid;
                }}
            }}
    </style>
</head>
<body>
    {letter}{script}
</body>
</html>
"#,
        title = escape_html(&title),
        rules = letter_rules(palette(style.color_scheme)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::letter::models::Layout;

    fn complete_form() -> FormData {
        FormData {
            company_name: Some("Global Enterprises Inc".to_string()),
            candidate_name: Some("Robert Anderson".to_string()),
            position: Some("Chief Technology Officer".to_string()),
            salary: Some("180000".to_string()),
            start_date: Some("2025-06-01".to_string()),
            letter_type: Some("Executive Offer".to_string()),
            ..Default::default()
        }
    }

    fn options() -> RenderOptions {
        RenderOptions {
            issue_date: NaiveDate::from_ymd_opt(2025, 5, 1),
            ..Default::default()
        }
    }

    #[test]
    fn test_field_words() {
        assert_eq!(RequiredField::CompanyName.words(), "company name");
        assert_eq!(RequiredField::StartDate.words(), "start date");
        assert_eq!(RequiredField::Salary.words(), "salary");
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let form = FormData {
            position: Some("Engineer".to_string()),
            ..Default::default()
        };
        assert_eq!(
            missing_required_fields(&form),
            vec![
                RequiredField::CompanyName,
                RequiredField::CandidateName,
                RequiredField::Salary,
                RequiredField::StartDate,
            ]
        );
    }

    #[test]
    fn test_export_reports_first_missing_field() {
        let form = FormData {
            salary: Some(" ".to_string()),
            ..complete_form()
        };
        let err = build_print_document(&form, &StyleSelection::default(), &options(), false)
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField(RequiredField::Salary)));
        assert_eq!(err.to_string(), "Please fill in the salary field.");
    }

    #[test]
    fn test_export_rejects_each_blank_required_field() {
        for field in RequiredField::ALL {
            let mut form = complete_form();
            match field {
                RequiredField::CompanyName => form.company_name = None,
                RequiredField::CandidateName => form.candidate_name = None,
                RequiredField::Position => form.position = None,
                RequiredField::Salary => form.salary = None,
                RequiredField::StartDate => form.start_date = None,
            }
            let result =
                build_print_document(&form, &StyleSelection::default(), &options(), false);
            assert!(
                matches!(result, Err(AppError::MissingField(f)) if f == field),
                "{field:?} should block export"
            );
        }
    }

    #[test]
    fn test_print_document_wraps_letter() {
        let style = StyleSelection {
            layout: Layout::Executive,
            ..Default::default()
        };
        let doc = build_print_document(&complete_form(), &style, &options(), false).unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>EXECUTIVE OFFER - Robert Anderson</title>"));
        assert!(doc.contains("size: A4;"));
        assert!(doc.contains("max-width: 800px;"));
        assert!(doc.contains(".minimalist-layout .body"));
        assert!(doc.contains(&compose(&complete_form(), &style, &options())));
        assert!(!doc.contains("window.print()"));
    }

    #[test]
    fn test_auto_print_script_is_opt_in() {
        let doc = build_print_document(
            &complete_form(),
            &StyleSelection::default(),
            &options(),
            true,
        )
        .unwrap();
        assert!(doc.contains("window.print();"));
        assert!(doc.contains("800"));
    }

    #[test]
    fn test_print_title_is_escaped() {
        let form = FormData {
            candidate_name: Some("</title><script>x</script>".to_string()),
            ..complete_form()
        };
        let doc =
            build_print_document(&form, &StyleSelection::default(), &options(), false).unwrap();
        assert!(!doc.contains("<script>x</script>"));
    }
}

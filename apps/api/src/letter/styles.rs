//! Fixed visual configuration behind each style key, and the CSS built from it.

use crate::letter::format::sanitize_font_family;
use crate::letter::models::{ColorScheme, RenderOptions, Template};

const MIN_FONT_SIZE_PX: u8 = 8;
const MAX_FONT_SIZE_PX: u8 = 32;

/// Typography defaults carried by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size_px: u8,
}

/// Accent colors carried by a color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub fn typography(template: Template) -> Typography {
    match template {
        Template::Modern => Typography {
            font_family: "Arial, sans-serif",
            font_size_px: 14,
        },
        Template::Classic => Typography {
            font_family: "'Times New Roman', serif",
            font_size_px: 14,
        },
        Template::Minimal => Typography {
            font_family: "Helvetica, sans-serif",
            font_size_px: 14,
        },
        Template::Corporate => Typography {
            font_family: "Calibri, sans-serif",
            font_size_px: 14,
        },
    }
}

pub fn palette(scheme: ColorScheme) -> Palette {
    match scheme {
        ColorScheme::Blue => Palette {
            primary: "#667eea",
            secondary: "#764ba2",
        },
        ColorScheme::Green => Palette {
            primary: "#4CAF50",
            secondary: "#45a049",
        },
        ColorScheme::Red => Palette {
            primary: "#f44336",
            secondary: "#d32f2f",
        },
        ColorScheme::Purple => Palette {
            primary: "#9c27b0",
            secondary: "#7b1fa2",
        },
        ColorScheme::Orange => Palette {
            primary: "#ff9800",
            secondary: "#f57c00",
        },
        ColorScheme::Teal => Palette {
            primary: "#009688",
            secondary: "#00695c",
        },
    }
}

/// Font family and size after applying the caller's overrides to the template defaults.
pub fn resolve_font(template: Template, options: &RenderOptions) -> (String, u8) {
    let defaults = typography(template);
    let family = options
        .font_family
        .as_deref()
        .and_then(sanitize_font_family)
        .unwrap_or_else(|| defaults.font_family.to_string());
    let size = options
        .font_size
        .map(|px| px.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX))
        .unwrap_or(defaults.font_size_px);
    (family, size)
}

/// Rules shared by the preview fragment and the print document. Colors only; the
/// outer font declaration differs between the two.
pub fn letter_rules(palette: Palette) -> String {
    format!(
        r#"
            .letter-header {{
                border-bottom: 3px solid {primary};
                padding-bottom: 15px;
                margin-bottom: 20px;
            }}
            .letter-title {{
                color: {primary};
                font-size: 1.8em;
                font-weight: bold;
                text-align: center;
                margin: 0;
            }}
            .letter-logo {{
                text-align: center;
                margin-bottom: 20px;
            }}
            .letter-logo img {{
                max-height: 60px;
                max-width: 200px;
            }}
            .date {{
                text-align: right;
                margin-bottom: 20px;
                font-weight: bold;
                color: {secondary};
            }}
            .recipient {{
                margin-bottom: 20px;
                font-weight: bold;
            }}
            .salutation {{
                margin-bottom: 15px;
                font-weight: bold;
            }}
            .body {{
                margin-bottom: 20px;
            }}
            .body strong {{
                color: {primary};
            }}
            .body ul {{
                margin: 10px 0;
                padding-left: 20px;
            }}
            .body li {{
                margin: 5px 0;
            }}
            .closing {{
                margin-top: 30px;
            }}
            .signature {{
                margin-top: 40px;
            }}
            .signature-note {{
                margin-top: 15px;
                font-style: italic;
                color: #666;
            }}
            .signature-direct {{
                margin-top: 10px;
                font-size: 12px;
                color: #888;
            }}{layouts}"#,
        primary = palette.primary,
        secondary = palette.secondary,
        layouts = LAYOUT_RULES,
    )
}

const LAYOUT_RULES: &str = r#"
            .compact-layout .body {
                font-size: 0.9em;
                line-height: 1.4;
            }
            .detailed-layout .body {
                font-size: 1.1em;
                line-height: 1.8;
            }
            .detailed-layout .body p {
                margin: 15px 0;
            }
            .executive-layout .body {
                font-size: 1.05em;
                line-height: 1.7;
            }
            .executive-layout .body p {
                margin: 12px 0;
            }
            .casual-layout .body {
                font-size: 1em;
                line-height: 1.5;
            }
            .formal-layout .body,
            .creative-layout .body {
                font-size: 1em;
                line-height: 1.6;
            }
            .minimalist-layout .body {
                font-size: 0.95em;
                line-height: 1.4;
            }
            .minimalist-layout .body p {
                margin: 8px 0;
            }"#;

/// The inline `<style>` block of a preview fragment.
pub fn fragment_stylesheet(font_family: &str, font_size_px: u8, palette: Palette) -> String {
    format!(
        r#"<style>
            .letter-content {{
                font-family: {font_family};
                font-size: {font_size_px}px;
                line-height: 1.6;
                color: #000;
            }}{rules}
        </style>"#,
        rules = letter_rules(palette),
    )
}

//! Live preview: one-shot renders plus debounced per-session renders.
//!
//! Preview never validates required fields. An entirely empty form renders the
//! static placeholder panel instead of a letter full of brackets.

pub mod debounce;
pub mod handlers;
pub mod hub;

use serde::Serialize;

use crate::letter::composer::compose;
use crate::letter::models::LetterRequest;

const PLACEHOLDER_HTML: &str = r#"
        <div class="default-preview">
            <div class="preview-placeholder">
                <div class="placeholder-icon">📄</div>
                <h4>Live Preview</h4>
                <p>Start filling out the form to see your offer letter appear here in real-time!</p>
                <div class="preview-features">
                    <div class="feature-item">✅ Template selection</div>
                    <div class="feature-item">✅ Color schemes</div>
                    <div class="feature-item">✅ Logo upload</div>
                    <div class="feature-item">✅ Font customization</div>
                    <div class="feature-item">✅ Layout options</div>
                </div>
            </div>
        </div>
    "#;

/// What the preview pane should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRender {
    pub html: String,
    /// True when `html` is the empty-form placeholder panel.
    pub placeholder: bool,
}

impl PreviewRender {
    pub fn empty() -> Self {
        PreviewRender {
            html: PLACEHOLDER_HTML.to_string(),
            placeholder: true,
        }
    }
}

pub fn render_preview(request: &LetterRequest) -> PreviewRender {
    if !request.form.has_any_content() {
        return PreviewRender::empty();
    }
    PreviewRender {
        html: compose(&request.form, &request.style, &request.options),
        placeholder: false,
    }
}

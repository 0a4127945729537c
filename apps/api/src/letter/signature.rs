//! Closing blocks. The style picks the valediction and extras; the contact policy
//! decides which of email / phone / address lines appear.

use crate::letter::models::{RenderOptions, SignatureStyle};

pub const PHONE_PLACEHOLDER: &str = "[Phone]";
pub const EMAIL_PLACEHOLDER: &str = "[Email]";

/// Escaped values needed by every signature style.
#[derive(Debug, Clone)]
pub struct SignatureFields {
    pub hr_name: String,
    pub hr_title: String,
    pub company: String,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub office_address: String,
}

/// Which contact lines the signer wants printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPolicy {
    pub include_email: bool,
    pub include_phone: bool,
    pub include_address: bool,
}

impl From<&RenderOptions> for ContactPolicy {
    fn from(options: &RenderOptions) -> Self {
        ContactPolicy {
            include_email: options.include_email,
            include_phone: options.include_phone,
            include_address: options.include_address,
        }
    }
}

pub fn render_signature(
    style: SignatureStyle,
    fields: &SignatureFields,
    policy: ContactPolicy,
) -> String {
    match style {
        SignatureStyle::Formal => format!(
            r#"
                <p>Yours sincerely,</p>
                <div class="signature">
                    {block}
                    {contact}
                </div>
            "#,
            block = signer_block(fields, true),
            contact = contact_lines(fields, policy),
        ),
        SignatureStyle::Friendly => format!(
            r#"
                <p>Best regards,</p>
                <div class="signature">
                    {block}
                    {contact}
                    <p class="signature-note">Looking forward to having you on our team!</p>
                </div>
            "#,
            block = signer_block(fields, true),
            contact = contact_lines(fields, policy),
        ),
        SignatureStyle::Executive => format!(
            r#"
                <p>Respectfully,</p>
                <div class="signature">
                    {block}
                    {contact}
                    <p class="signature-direct">Direct: {phone} | Email: {email}</p>
                </div>
            "#,
            block = signer_block(fields, true),
            contact = contact_lines(fields, policy),
            phone = fields.hr_phone.as_deref().unwrap_or(PHONE_PLACEHOLDER),
            email = fields.hr_email.as_deref().unwrap_or(EMAIL_PLACEHOLDER),
        ),
        SignatureStyle::Simple => format!(
            r#"
                <p>Sincerely,</p>
                <div class="signature">
                    {block}
                    {email}
                </div>
            "#,
            block = signer_block(fields, false),
            email = match (&fields.hr_email, policy.include_email) {
                (Some(email), true) => format!("<p>{email}</p>"),
                _ => String::new(),
            },
        ),
    }
}

fn signer_block(fields: &SignatureFields, bold_name: bool) -> String {
    let name = if bold_name {
        format!("<strong>{}</strong>", fields.hr_name)
    } else {
        fields.hr_name.clone()
    };
    format!(
        "<p>{name}<br>\n                    {title}<br>\n                    {company}</p>",
        title = fields.hr_title,
        company = fields.company,
    )
}

fn contact_lines(fields: &SignatureFields, policy: ContactPolicy) -> String {
    let mut html = String::new();

    if let (true, Some(email)) = (policy.include_email, &fields.hr_email) {
        html.push_str(&format!("<p>Email: {email}</p>"));
    }
    if let (true, Some(phone)) = (policy.include_phone, &fields.hr_phone) {
        html.push_str(&format!("<p>Phone: {phone}</p>"));
    }
    if policy.include_address {
        html.push_str(&format!("<p>Office Address: {}</p>", fields.office_address));
    }

    html
}

//! Letter body layouts: one pure formatting function per `Layout` variant.
//!
//! Each layout phrases and orders the same resolved fields differently. Values in
//! `LetterFields` are already escaped; nothing here touches raw user input.

use crate::letter::composer::LetterFields;
use crate::letter::models::Layout;

pub type BodyFn = fn(&LetterFields) -> String;

/// Flat lookup from layout to body renderer.
pub fn body_fn(layout: Layout) -> BodyFn {
    match layout {
        Layout::Standard => standard,
        Layout::Compact => compact,
        Layout::Detailed => detailed,
        Layout::Executive => executive,
        Layout::Casual => casual,
        Layout::Formal => formal,
        Layout::Creative => creative,
        Layout::Minimalist => minimalist,
    }
}

pub fn render_body(layout: Layout, fields: &LetterFields) -> String {
    body_fn(layout)(fields)
}

/// Renders `f(value)` when the optional field is present, nothing otherwise.
fn when(value: &Option<String>, f: impl FnOnce(&str) -> String) -> String {
    value.as_deref().map(f).unwrap_or_default()
}

fn standard(v: &LetterFields) -> String {
    format!(
        r#"
        <p>We are pleased to offer you the position of <strong>{position}</strong> at {company}. We believe your skills and experience will be a valuable addition to our team.</p>

        <p><strong>Position Details:</strong></p>
        <ul>
            <li><strong>Position:</strong> {position}</li>
            <li><strong>Annual Salary:</strong> {salary}</li>
            <li><strong>Start Date:</strong> {start_date}</li>
            {location}
        </ul>
        {benefits}
        <p>This offer is contingent upon successful completion of any background checks and verification of employment eligibility.</p>
        {notes}
        <p>Please confirm your acceptance of this offer by signing and returning a copy of this letter within 7 business days.</p>

        <p>We look forward to welcoming you to the {company} team!</p>
    "#,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(
            "<li><strong>Location:</strong> {l}</li>"
        )),
        benefits = when(&v.benefits, |b| format!(
            "\n        <p><strong>Benefits Package:</strong></p>\n        <p>{b}</p>\n"
        )),
        notes = when(&v.notes, |n| format!(
            "\n        <p><strong>Additional Terms:</strong></p>\n        <p>{n}</p>\n"
        )),
    )
}

fn compact(v: &LetterFields) -> String {
    format!(
        r#"
        <p>We are pleased to offer you the position of <strong>{position}</strong> at {company}.</p>

        <p><strong>Key Details:</strong> {position} | {salary} | Start: {start_date}{location}</p>
        {benefits}
        {notes}
        <p>Please confirm acceptance within 7 business days. We look forward to welcoming you to our team!</p>
    "#,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(" | Location: {l}")),
        benefits = when(&v.benefits, |b| format!(
            "<p><strong>Benefits:</strong> {b}</p>"
        )),
        notes = when(&v.notes, |n| format!(
            "<p><strong>Additional Terms:</strong> {n}</p>"
        )),
    )
}

fn detailed(v: &LetterFields) -> String {
    format!(
        r#"
        <p>Dear {first_name},</p>

        <p>On behalf of {company}, I am delighted to extend a formal offer of employment for the position of <strong>{position}</strong>. After careful consideration of your qualifications and experience, we are confident that you will be an excellent addition to our team.</p>

        <p><strong>Position Overview:</strong></p>
        <p>You will be joining us as a {position}, contributing to our mission and helping us achieve our strategic objectives. This role offers significant opportunities for professional growth and development within our organization.</p>

        <p><strong>Compensation and Benefits:</strong></p>
        <ul>
            <li><strong>Annual Salary:</strong> {salary}</li>
            <li><strong>Start Date:</strong> {start_date}</li>
            {location}
        </ul>
        {benefits}
        <p><strong>Terms and Conditions:</strong></p>
        <p>This offer is contingent upon successful completion of background verification, reference checks, and confirmation of your legal right to work in the United States. We will provide you with additional details regarding our policies and procedures during your onboarding process.</p>
        {notes}
        <p><strong>Acceptance:</strong></p>
        <p>Please confirm your acceptance of this offer by signing and returning a copy of this letter within seven (7) business days. If you have any questions or need clarification on any aspect of this offer, please do not hesitate to contact our Human Resources department.</p>

        <p>We are excited about the possibility of having you join our team and look forward to your positive response. Welcome to {company}!</p>
    "#,
        first_name = v.first_name,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(
            "<li><strong>Work Location:</strong> {l}</li>"
        )),
        benefits = when(&v.benefits, |b| format!(
            "\n        <p><strong>Comprehensive Benefits Package:</strong></p>\n        <p>In addition to your base salary, you will be eligible for our comprehensive benefits package, which includes:</p>\n        <p>{b}</p>\n"
        )),
        notes = when(&v.notes, |n| format!(
            "\n        <p><strong>Additional Terms and Conditions:</strong></p>\n        <p>{n}</p>\n"
        )),
    )
}

fn executive(v: &LetterFields) -> String {
    format!(
        r#"
        <p>Dear {first_name},</p>

        <p>I am delighted to extend a formal offer of employment for the position of <strong>{position}</strong> at {company}. After thorough evaluation of your exceptional qualifications and impressive track record, we are confident that you will make a significant contribution to our organization's continued success.</p>

        <p><strong>Executive Summary:</strong></p>
        <p>This executive-level position represents an exciting opportunity to join our leadership team and drive strategic initiatives that will shape the future of {company}. Your expertise and vision align perfectly with our organizational goals and values.</p>

        <p><strong>Compensation Package:</strong></p>
        <ul>
            <li><strong>Base Salary:</strong> {salary} annually</li>
            <li><strong>Start Date:</strong> {start_date}</li>
            <li><strong>Reporting Structure:</strong> Direct reporting to [Executive Team]</li>
            {location}
            <li><strong>Performance Review:</strong> Quarterly reviews with annual bonus consideration</li>
        </ul>
        {benefits}
        <p><strong>Terms and Conditions:</strong></p>
        <p>This offer is subject to standard executive-level background verification, reference checks, and confirmation of employment eligibility. Additional details regarding our executive policies, confidentiality agreements, and non-compete clauses will be provided during the onboarding process.</p>
        {notes}
        <p><strong>Next Steps:</strong></p>
        <p>Please confirm your acceptance of this executive offer by signing and returning the enclosed agreement within five (5) business days. We will schedule a comprehensive onboarding session with our executive team to ensure a smooth transition into your new role.</p>

        <p>We are thrilled about the prospect of welcoming you to our executive leadership team and are confident that together, we will achieve remarkable success. Welcome to {company}!</p>
    "#,
        first_name = v.first_name,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(
            "<li><strong>Primary Location:</strong> {l}</li>"
        )),
        benefits = when(&v.benefits, |b| format!(
            r#"
        <p><strong>Executive Benefits Package:</strong></p>
        <p>As a senior executive, you will be eligible for our comprehensive executive benefits package, including:</p>
        <p>{b}</p>
        <ul>
            <li>Executive health and wellness programs</li>
            <li>Professional development and executive coaching</li>
            <li>Flexible work arrangements and remote work options</li>
            <li>Equity participation opportunities</li>
        </ul>
"#
        )),
        notes = when(&v.notes, |n| format!(
            "\n        <p><strong>Additional Executive Terms:</strong></p>\n        <p>{n}</p>\n"
        )),
    )
}

fn casual(v: &LetterFields) -> String {
    format!(
        r#"
        <p>Hey {first_name}!</p>

        <p>Great news! We'd love to have you join our team as a <strong>{position}</strong> at {company}. We think you'd be a perfect fit!</p>

        <p><strong>Here's what we're offering:</strong></p>
        <ul>
            <li><strong>Role:</strong> {position}</li>
            <li><strong>Salary:</strong> {salary} per year</li>
            <li><strong>Start Date:</strong> {start_date}</li>
            {location}
        </ul>
        {benefits}
        <p>If this sounds good to you, just let us know within a week. We're excited to work with you!</p>
        {notes}
        <p>Looking forward to hearing from you!</p>
    "#,
        first_name = v.first_name,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(
            "<li><strong>Location:</strong> {l}</li>"
        )),
        benefits = when(&v.benefits, |b| format!(
            "\n        <p><strong>Perks &amp; Benefits:</strong></p>\n        <p>{b}</p>\n"
        )),
        notes = when(&v.notes, |n| format!(
            "\n        <p><strong>Quick Notes:</strong></p>\n        <p>{n}</p>\n"
        )),
    )
}

fn formal(v: &LetterFields) -> String {
    format!(
        r#"
        <p>Dear {candidate},</p>

        <p>It is our pleasure to formally extend an offer of employment for the position of <strong>{position}</strong> with {company}. We are confident that your qualifications and experience will contribute significantly to our organization.</p>

        <p><strong>Employment Details:</strong></p>
        <ul>
            <li><strong>Position:</strong> {position}</li>
            <li><strong>Annual Compensation:</strong> {salary}</li>
            <li><strong>Commencement Date:</strong> {start_date}</li>
            {location}
        </ul>
        {benefits}
        <p>This offer is contingent upon satisfactory completion of background verification and confirmation of employment eligibility.</p>
        {notes}
        <p>Please indicate your acceptance by returning a signed copy of this letter within five (5) business days.</p>

        <p>We anticipate a mutually beneficial professional relationship.</p>
    "#,
        candidate = v.candidate,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(
            "<li><strong>Work Location:</strong> {l}</li>"
        )),
        benefits = when(&v.benefits, |b| format!(
            "\n        <p><strong>Employee Benefits:</strong></p>\n        <p>{b}</p>\n"
        )),
        notes = when(&v.notes, |n| format!(
            "\n        <p><strong>Additional Terms:</strong></p>\n        <p>{n}</p>\n"
        )),
    )
}

fn creative(v: &LetterFields) -> String {
    format!(
        r#"
        <p>Dear {first_name},</p>

        <p>🎉 <strong>Congratulations!</strong> We're thrilled to offer you the exciting opportunity to join our innovative team as a <strong>{position}</strong> at {company}!</p>

        <p><strong>🌟 What's in it for you:</strong></p>
        <ul>
            <li><strong>🎯 Your Role:</strong> {position}</li>
            <li><strong>💰 Compensation:</strong> {salary} annually</li>
            <li><strong>📅 Start Date:</strong> {start_date}</li>
            {location}
        </ul>
        {benefits}
        <p><strong>✨ Why you'll love working with us:</strong></p>
        <ul>
            <li>Innovative and collaborative environment</li>
            <li>Opportunities for growth and development</li>
            <li>Flexible work arrangements</li>
            <li>Team-building events and activities</li>
        </ul>
        {notes}
        <p>🚀 Ready to start this exciting journey? Please confirm your acceptance within 7 days!</p>

        <p>We can't wait to welcome you to the {company} family! 🎊</p>
    "#,
        first_name = v.first_name,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!(
            "<li><strong>📍 Location:</strong> {l}</li>"
        )),
        benefits = when(&v.benefits, |b| format!(
            "\n        <p><strong>🎁 Amazing Benefits:</strong></p>\n        <p>{b}</p>\n"
        )),
        notes = when(&v.notes, |n| format!(
            "\n        <p><strong>📝 Additional Information:</strong></p>\n        <p>{n}</p>\n"
        )),
    )
}

fn minimalist(v: &LetterFields) -> String {
    format!(
        r#"
        <p>{candidate},</p>

        <p>We are pleased to offer you the position of <strong>{position}</strong> at {company}.</p>

        <p><strong>Terms:</strong></p>
        <p>Salary: {salary}</p>
        <p>Start: {start_date}</p>
        {location}
        {benefits}
        {notes}
        <p>Please confirm within 7 days.</p>

        <p>Best,<br>{company}</p>
    "#,
        candidate = v.candidate,
        position = v.position,
        company = v.company,
        salary = v.salary,
        start_date = v.start_date,
        location = when(&v.location, |l| format!("<p>Location: {l}</p>")),
        benefits = when(&v.benefits, |b| format!("<p>Benefits: {b}</p>")),
        notes = when(&v.notes, |n| format!("<p>Notes: {n}</p>")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> LetterFields {
        LetterFields {
            company: "TechCorp Solutions".to_string(),
            candidate: "Alex Johnson".to_string(),
            first_name: "Alex".to_string(),
            position: "Senior Software Engineer".to_string(),
            salary: "$95,000".to_string(),
            start_date: "June 1, 2025".to_string(),
            location: Some("San Francisco, CA".to_string()),
            benefits: Some("Health insurance".to_string()),
            notes: Some("Works with the AI team".to_string()),
        }
    }

    #[test]
    fn test_every_layout_embeds_core_fields() {
        let v = fields();
        for layout in Layout::ALL {
            let body = render_body(layout, &v);
            for expected in [
                "TechCorp Solutions",
                "Senior Software Engineer",
                "$95,000",
                "June 1, 2025",
                "San Francisco, CA",
                "Health insurance",
                "Works with the AI team",
            ] {
                assert!(body.contains(expected), "{layout:?} body lacks {expected:?}");
            }
        }
    }

    #[test]
    fn test_optional_sections_are_omitted_when_absent() {
        let v = LetterFields {
            location: None,
            benefits: None,
            notes: None,
            ..fields()
        };
        let body = render_body(Layout::Standard, &v);
        assert!(!body.contains("Benefits Package"));
        assert!(!body.contains("Additional Terms"));
        assert!(!body.contains("<li><strong>Location:</strong>"));

        let body = render_body(Layout::Executive, &v);
        assert!(!body.contains("Executive health and wellness programs"));
    }

    #[test]
    fn test_bodies_differ_between_layouts() {
        let v = fields();
        let bodies: Vec<String> = Layout::ALL.iter().map(|l| render_body(*l, &v)).collect();
        for (i, a) in bodies.iter().enumerate() {
            for b in bodies.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_greeting_phrasing_per_layout() {
        let v = fields();
        assert!(render_body(Layout::Casual, &v).contains("Hey Alex!"));
        assert!(render_body(Layout::Formal, &v).contains("Dear Alex Johnson,"));
        assert!(render_body(Layout::Detailed, &v).contains("Dear Alex,"));
        assert!(render_body(Layout::Minimalist, &v).contains("<p>Alex Johnson,</p>"));
    }

    #[test]
    fn test_compact_location_is_inline() {
        let body = render_body(Layout::Compact, &fields());
        assert!(body.contains("Start: June 1, 2025 | Location: San Francisco, CA</p>"));
    }
}

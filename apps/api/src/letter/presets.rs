//! Starter letters the host UI can load with one click.
//!
//! Start dates are relative: every preset starts 30 days after the day it is loaded.
//! A preset only carries what it changes. Fields it leaves unset are omitted from the
//! response, and no preset touches the template (typography) choice.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::letter::models::{ColorScheme, FormData, Layout, SignatureStyle};

const START_DATE_OFFSET_DAYS: u64 = 30;
pub const CLEAR_KEY: &str = "clear";

/// Style choices a preset applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetStyle {
    pub layout: Layout,
    pub color_scheme: ColorScheme,
    pub signature_style: SignatureStyle,
}

/// A loaded preset: form fields plus the style it selects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterPreset {
    pub key: &'static str,
    pub form: FormData,
    pub style: PresetStyle,
}

/// Catalogue entry returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSummary {
    pub key: &'static str,
    pub letter_type: &'static str,
}

struct PresetSpec {
    key: &'static str,
    letter_type: &'static str,
    company_name: &'static str,
    candidate_name: &'static str,
    position: &'static str,
    salary: &'static str,
    location: &'static str,
    benefits: &'static str,
    additional_notes: &'static str,
    hr_name: &'static str,
    hr_title: &'static str,
    hr_email: &'static str,
    hr_phone: &'static str,
    layout: Layout,
    color_scheme: ColorScheme,
    signature_style: SignatureStyle,
}

const PRESETS: &[PresetSpec] = &[
    PresetSpec {
        key: "software-engineer",
        letter_type: "Job Offer",
        company_name: "TechCorp Solutions",
        candidate_name: "Alex Johnson",
        position: "Senior Software Engineer",
        salary: "95000",
        location: "San Francisco, CA",
        benefits: "Health insurance, 401k matching, flexible PTO, professional development budget, gym membership",
        additional_notes: "This role involves working with our cutting-edge AI team on innovative projects.",
        hr_name: "Jennifer Martinez",
        hr_title: "Human Resources Manager",
        hr_email: "jennifer.martinez@techcorp.com",
        hr_phone: "(415) 555-0123",
        layout: Layout::Standard,
        color_scheme: ColorScheme::Blue,
        signature_style: SignatureStyle::Formal,
    },
    PresetSpec {
        key: "marketing-manager",
        letter_type: "Offer Letter",
        company_name: "Growth Marketing Inc",
        candidate_name: "Sarah Williams",
        position: "Marketing Manager",
        salary: "78000",
        location: "New York, NY",
        benefits: "Health insurance, dental, vision, 401k, unlimited vacation, work from home flexibility",
        additional_notes: "You will lead our digital marketing campaigns and manage a team of 5 marketing specialists.",
        hr_name: "David Thompson",
        hr_title: "Senior HR Specialist",
        hr_email: "david.thompson@growthmarketing.com",
        hr_phone: "(212) 555-0456",
        layout: Layout::Detailed,
        color_scheme: ColorScheme::Green,
        signature_style: SignatureStyle::Friendly,
    },
    PresetSpec {
        key: "sales-rep",
        letter_type: "Sales Offer",
        company_name: "Enterprise Sales Co",
        candidate_name: "Michael Chen",
        position: "Senior Sales Representative",
        salary: "65000",
        location: "Chicago, IL",
        benefits: "Base salary plus commission, health insurance, company car, expense account, performance bonuses",
        additional_notes: "This position includes a competitive commission structure with unlimited earning potential.",
        hr_name: "Lisa Rodriguez",
        hr_title: "HR Business Partner",
        hr_email: "lisa.rodriguez@enterprisesales.com",
        hr_phone: "(312) 555-0789",
        layout: Layout::Casual,
        color_scheme: ColorScheme::Orange,
        signature_style: SignatureStyle::Friendly,
    },
    PresetSpec {
        key: "designer",
        letter_type: "Creative Offer",
        company_name: "Design Studio Pro",
        candidate_name: "Emma Rodriguez",
        position: "UX/UI Designer",
        salary: "82000",
        location: "Austin, TX",
        benefits: "Health insurance, creative tools budget, flexible hours, design conference attendance, stock options",
        additional_notes: "Join our award-winning design team and work on projects for Fortune 500 clients.",
        hr_name: "Marcus Johnson",
        hr_title: "People Operations Manager",
        hr_email: "marcus.johnson@designstudiopro.com",
        hr_phone: "(512) 555-0321",
        layout: Layout::Creative,
        color_scheme: ColorScheme::Purple,
        signature_style: SignatureStyle::Friendly,
    },
    PresetSpec {
        key: "intern",
        letter_type: "Internship Offer",
        company_name: "StartupXYZ",
        candidate_name: "David Kim",
        position: "Software Development Intern",
        salary: "3000",
        location: "Seattle, WA",
        benefits: "Learning opportunities, mentorship program, free lunch, networking events, potential full-time offer",
        additional_notes: "This is a 12-week summer internship with the possibility of extending to a full-time position.",
        hr_name: "Rachel Green",
        hr_title: "Talent Acquisition Specialist",
        hr_email: "rachel.green@startupxyz.com",
        hr_phone: "(206) 555-0654",
        layout: Layout::Casual,
        color_scheme: ColorScheme::Teal,
        signature_style: SignatureStyle::Friendly,
    },
    PresetSpec {
        key: "contractor",
        letter_type: "Contract Agreement",
        company_name: "Consulting Partners LLC",
        candidate_name: "Lisa Thompson",
        position: "Senior Consultant",
        salary: "120000",
        location: "Remote",
        benefits: "Project-based compensation, flexible schedule, expense reimbursement, professional development",
        additional_notes: "This is a 6-month contract with potential for extension based on project success.",
        hr_name: "Amanda Foster",
        hr_title: "Contract Management Specialist",
        hr_email: "amanda.foster@consultingpartners.com",
        hr_phone: "(555) 555-0987",
        layout: Layout::Formal,
        color_scheme: ColorScheme::Blue,
        signature_style: SignatureStyle::Formal,
    },
    PresetSpec {
        key: "executive",
        letter_type: "Executive Offer",
        company_name: "Global Enterprises Inc",
        candidate_name: "Robert Anderson",
        position: "Chief Technology Officer",
        salary: "180000",
        location: "Boston, MA",
        benefits: "Executive health plan, equity package, executive assistant, company car, relocation assistance",
        additional_notes: "This executive position includes stock options and performance-based bonuses.",
        hr_name: "Victoria Chen",
        hr_title: "Chief People Officer",
        hr_email: "victoria.chen@globalenterprises.com",
        hr_phone: "(617) 555-0246",
        layout: Layout::Executive,
        color_scheme: ColorScheme::Purple,
        signature_style: SignatureStyle::Executive,
    },
    PresetSpec {
        key: "remote",
        letter_type: "Remote Work Offer",
        company_name: "RemoteFirst Company",
        candidate_name: "Jennifer Davis",
        position: "Product Manager",
        salary: "88000",
        location: "Remote (Anywhere)",
        benefits: "Health insurance, home office stipend, flexible hours, annual company retreat, unlimited PTO",
        additional_notes: "This is a fully remote position with quarterly team meetups in different cities.",
        hr_name: "Kevin Park",
        hr_title: "Remote Work Coordinator",
        hr_email: "kevin.park@remotefirst.com",
        hr_phone: "(555) 555-0135",
        layout: Layout::Standard,
        color_scheme: ColorScheme::Green,
        signature_style: SignatureStyle::Friendly,
    },
    PresetSpec {
        key: "promotion",
        letter_type: "Promotion Letter",
        company_name: "Your Current Company",
        candidate_name: "Current Employee",
        position: "Senior Manager",
        salary: "75000",
        location: "Current Location",
        benefits: "Increased benefits package, management training, leadership development, additional PTO",
        additional_notes: "Congratulations on your promotion! You will now lead a team of 8 employees.",
        hr_name: "Your HR Manager",
        hr_title: "Human Resources Manager",
        hr_email: "hr@yourcompany.com",
        hr_phone: "(555) 555-0000",
        layout: Layout::Detailed,
        color_scheme: ColorScheme::Blue,
        signature_style: SignatureStyle::Formal,
    },
    PresetSpec {
        key: "welcome",
        letter_type: "Welcome Letter",
        company_name: "Your New Company",
        candidate_name: "New Employee",
        position: "Your New Role",
        salary: "0",
        location: "Office Location",
        benefits: "Welcome to our team! We are excited to have you join us.",
        additional_notes: "This letter welcomes you to our company and outlines your first week schedule.",
        hr_name: "Your HR Team",
        hr_title: "Human Resources Team",
        hr_email: "hr@yournewcompany.com",
        hr_phone: "(555) 555-0000",
        layout: Layout::Casual,
        color_scheme: ColorScheme::Green,
        signature_style: SignatureStyle::Friendly,
    },
    PresetSpec {
        key: "contract-renewal",
        letter_type: "Contract Renewal",
        company_name: "Your Company",
        candidate_name: "Contractor Name",
        position: "Your Position",
        salary: "0",
        location: "Work Location",
        benefits: "Contract extension with updated terms and conditions.",
        additional_notes: "We are pleased to extend your contract for another year with improved terms.",
        hr_name: "Your HR Manager",
        hr_title: "Contract Administrator",
        hr_email: "contracts@yourcompany.com",
        hr_phone: "(555) 555-0000",
        layout: Layout::Formal,
        color_scheme: ColorScheme::Blue,
        signature_style: SignatureStyle::Formal,
    },
];

fn default_start_date(today: NaiveDate) -> String {
    today
        .checked_add_days(Days::new(START_DATE_OFFSET_DAYS))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl PresetSpec {
    fn load(&self, today: NaiveDate) -> LetterPreset {
        LetterPreset {
            key: self.key,
            form: FormData {
                letter_type: some(self.letter_type),
                company_name: some(self.company_name),
                candidate_name: some(self.candidate_name),
                position: some(self.position),
                salary: some(self.salary),
                start_date: Some(default_start_date(today)),
                location: some(self.location),
                benefits: some(self.benefits),
                additional_notes: some(self.additional_notes),
                hr_name: some(self.hr_name),
                hr_title: some(self.hr_title),
                hr_email: some(self.hr_email),
                hr_phone: some(self.hr_phone),
                ..Default::default()
            },
            style: PresetStyle {
                layout: self.layout,
                color_scheme: self.color_scheme,
                signature_style: self.signature_style,
            },
        }
    }
}

/// Blanks the letter fields and resets layout, colors and signature to their defaults.
/// HR contact fields and the template are not part of the reset.
pub fn cleared(today: NaiveDate) -> LetterPreset {
    LetterPreset {
        key: CLEAR_KEY,
        form: FormData {
            letter_type: some("Offer Letter"),
            start_date: Some(default_start_date(today)),
            ..Default::default()
        },
        style: PresetStyle::default(),
    }
}

/// Looks up a preset by key. `clear` is always available.
pub fn load_preset(key: &str, today: NaiveDate) -> Option<LetterPreset> {
    if key == CLEAR_KEY {
        return Some(cleared(today));
    }
    PRESETS.iter().find(|p| p.key == key).map(|p| p.load(today))
}

pub fn list_presets() -> Vec<PresetSummary> {
    PRESETS
        .iter()
        .map(|p| PresetSummary {
            key: p.key,
            letter_type: p.letter_type,
        })
        .chain(std::iter::once(PresetSummary {
            key: CLEAR_KEY,
            letter_type: "Offer Letter",
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::export::missing_required_fields;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_catalogue_has_eleven_presets_plus_clear() {
        let list = list_presets();
        assert_eq!(list.len(), 12);
        assert_eq!(list.last().unwrap().key, "clear");
    }

    #[test]
    fn test_preset_keys_are_unique() {
        let mut keys: Vec<_> = PRESETS.iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), PRESETS.len());
    }

    #[test]
    fn test_start_date_is_thirty_days_out() {
        let preset = load_preset("software-engineer", today()).unwrap();
        assert_eq!(preset.form.start_date.as_deref(), Some("2025-02-14"));
    }

    #[test]
    fn test_every_preset_is_exportable() {
        for summary in list_presets() {
            if summary.key == CLEAR_KEY {
                continue;
            }
            let preset = load_preset(summary.key, today()).unwrap();
            assert!(
                missing_required_fields(&preset.form).is_empty(),
                "{} is missing fields",
                summary.key
            );
        }
    }

    #[test]
    fn test_executive_preset_selects_executive_style() {
        let preset = load_preset("executive", today()).unwrap();
        assert_eq!(preset.style.layout, Layout::Executive);
        assert_eq!(preset.style.signature_style, SignatureStyle::Executive);
        assert_eq!(preset.style.color_scheme, ColorScheme::Purple);
    }

    #[test]
    fn test_clear_resets_fields_and_style() {
        let preset = load_preset("clear", today()).unwrap();
        assert_eq!(preset.form.letter_type.as_deref(), Some("Offer Letter"));
        assert!(preset.form.company_name.is_none());
        assert_eq!(preset.style, PresetStyle::default());
        assert_eq!(preset.form.start_date.as_deref(), Some("2025-02-14"));
    }

    #[test]
    fn test_clear_leaves_hr_fields_and_template_to_the_host() {
        let json = serde_json::to_value(load_preset("clear", today()).unwrap()).unwrap();
        let form = json["form"].as_object().unwrap();
        assert_eq!(form.len(), 2);
        assert_eq!(form["letterType"], "Offer Letter");
        assert!(!form.contains_key("hrName"));
        assert!(!form.contains_key("hrEmail"));
        assert!(json["style"].get("template").is_none());
        assert_eq!(json["style"]["layout"], "standard");
        assert_eq!(json["style"]["colorScheme"], "blue");
        assert_eq!(json["style"]["signatureStyle"], "formal");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("astronaut", today()).is_none());
    }
}

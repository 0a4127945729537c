//! Display formatting for interpolated letter values.
//!
//! Everything returned from here is already HTML-escaped and safe to splice into markup.

use chrono::NaiveDate;

pub const SALARY_PLACEHOLDER: &str = "[Salary]";
pub const START_DATE_PLACEHOLDER: &str = "[Start Date]";

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parses a salary the way an integer parse of the leading digits would:
/// `"95000"` → 95000, `"95000.75"` → 95000. Currency symbols and thousands
/// separators are tolerated, as is surrounding whitespace; inner whitespace ends the
/// number. Returns `None` when no digits lead the value.
pub fn parse_salary(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };

    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if leading.is_empty() {
        return None;
    }
    let value = leading.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// en-US currency, whole dollars: `95000` → `$95,000`, `-1200` → `-$1,200`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Long-form en-US date: `June 1, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Display salary: currency when parseable, the escaped raw text when not, placeholder when blank.
pub fn display_salary(raw: Option<&str>) -> String {
    match raw {
        None => SALARY_PLACEHOLDER.to_string(),
        Some(value) => parse_salary(value)
            .map(format_currency)
            .unwrap_or_else(|| escape_html(value)),
    }
}

/// Display start date: long form for ISO `YYYY-MM-DD`, escaped raw text otherwise.
pub fn display_start_date(raw: Option<&str>) -> String {
    match raw {
        None => START_DATE_PLACEHOLDER.to_string(),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(format_long_date)
            .unwrap_or_else(|_| escape_html(value)),
    }
}

/// First whitespace-delimited word of a full name.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

/// Keeps a user font stack inside a CSS declaration: letters, digits, spaces,
/// commas, hyphens and quotes only.
pub fn sanitize_font_family(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '-' | '\'' | '"'))
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
